// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cloud Billing client library helpers.
//!
//! This crate contains the types and functions shared by the Cloud Billing
//! client library: the error model, the per-request options, the retry policy
//! interface, and the pagination adapters used by the generated `list` RPCs.
//!
//! Applications rarely depend on this crate directly. The service crates
//! re-export the types an application needs.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

/// Client configuration and per request options.
pub mod options;

/// Converts list RPCs into iterators and streams of pages or items.
pub mod paginator;

/// Response wrappers giving access to response metadata.
pub mod response;

/// Traits for retry policies and some common implementations.
pub mod retry_policy;
