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

//! Client library for the Cloud Billing API.
//!
//! Allows developers to manage billing for their Google Cloud Platform
//! projects programmatically. This crate exposes the list surface of the
//! [CloudBilling](client::CloudBilling) and
//! [CloudCatalog](client::CloudCatalog) services; the paged list RPCs can be
//! consumed one page at a time or through the paginator adapters in the
//! companion `billing-gax` crate.
//!
//! The clients are constructed over a [stub](stub) implementing the service's
//! transport. Applications typically only interact with the
//! [client](client) and [builder](builder) types; the stubs exist so tests
//! can replace the transport with mocks.

/// Request builders, one per RPC.
pub mod builder;
/// The clients for the Cloud Billing API.
pub mod client;
/// The messages exchanged with the Cloud Billing API.
pub mod model;
/// Traits implemented by the transport layer and by test mocks.
pub mod stub;

pub use gax::Result;
pub use gax::error::Error;
