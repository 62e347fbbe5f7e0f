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

//! Response types.
//!
//! A response from the service consists of a body (potentially the unit type)
//! and some metadata, currently just headers. Typically you get a response as
//! the result of making a request via a client. You may also create responses
//! directly when mocking clients in your own tests.

/// Represents a service response.
///
/// # Example
/// ```
/// # use billing_gax::response::Response;
/// #[derive(Clone, Default)]
/// pub struct Resource {
///   // ...
/// }
///
/// let response = Response::from(Resource::default());
/// assert!(response.headers().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            parts: Parts::default(),
            body,
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The headers returned with this response.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }

    /// A reference to the response body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response and returns the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Consumes the response and returns the parts and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }
}

/// The metadata associated with a [Response].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The headers returned by the service.
    pub headers: http::HeaderMap,
}

impl Parts {
    /// Creates new, empty, parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headers.
    pub fn set_headers<V: Into<http::HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }
}
