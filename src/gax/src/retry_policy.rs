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

//! Defines traits for retry policies and some common implementations.
//!
//! The transport retries RPCs when they fail due to transient errors and the
//! RPC is idempotent, that is, it is safe to perform the RPC more than once.
//! The policy is declarative: this crate only decides whether an error is
//! retryable, the retry loop itself belongs to the transport executing the
//! request.
//!
//! Applications may override the default behavior, and maybe retry operations
//! that, while not safe in general, may be safe given how the application
//! manages resources.

use crate::error::Error;
use crate::error::rpc::Code;
use std::sync::Arc;

/// The result of a retry policy decision.
///
/// If the caller should continue retrying the policy returns
/// [Continue][std::ops::ControlFlow::Continue]. If the caller should stop
/// retrying, the policy returns [Break][std::ops::ControlFlow::Break] with the
/// error to report. This is useful when retry policies are composed: the inner
/// policy decides based on the error kind, and the outer policy may stop the
/// loop based on the number of attempts.
pub type RetryFlow = std::ops::ControlFlow<Error, ()>;

/// Determines if an error is retryable.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `attempt_count` - the number of attempts performed so far, including
    ///   the one that produced `error`.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many
    ///   more errors are retryable on idempotent operations.
    /// * `error` - the last error received from a request. Not all are server
    ///   errors, the request may have failed before reaching the service.
    fn on_error(&self, attempt_count: u32, idempotent: bool, error: Error) -> RetryFlow;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time this returns the remaining time, which the
    /// transport can use to adjust the next attempt timeout. Policies that are
    /// not time based return `None`.
    fn remaining_time(&self) -> Option<std::time::Duration> {
        None
    }
}

/// A retry policy that strictly follows [AIP-194](https://google.aip.dev/194).
///
/// The retry decision for server-side errors is based only on the status code,
/// and the only retryable status code is `UNAVAILABLE`. Decorate this policy
/// with [LimitedAttemptCount] to bound the number of attempts.
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(&self, _attempt_count: u32, idempotent: bool, error: Error) -> RetryFlow {
        if !idempotent {
            return RetryFlow::Break(error);
        }
        if let Some(status) = error.status() {
            return if status.code == Code::Unavailable {
                RetryFlow::Continue(())
            } else {
                RetryFlow::Break(error)
            };
        }
        if error.is_io() || error.is_timeout() {
            return RetryFlow::Continue(());
        }
        RetryFlow::Break(error)
    }
}

/// The error reported when [LimitedAttemptCount] stops a retry loop.
#[derive(thiserror::Error, Debug)]
#[error("retry policy exhausted after {attempts} attempts: {source}")]
pub struct AttemptsExhausted {
    attempts: u32,
    #[source]
    source: Error,
}

/// A retry policy decorator that limits the number of attempts.
///
/// Once the maximum attempt count is reached this policy returns
/// [Break][std::ops::ControlFlow::Break] wrapping the last error. Before the
/// maximum is reached, the policy returns the result of the inner policy.
///
/// # Parameters
/// * `P` - the inner retry policy.
#[derive(Clone, Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a policy based on [Aip194Strict] with `maximum_attempts`.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: Aip194Strict,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Decorates `inner` with a limit of `maximum_attempts`.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, attempt_count: u32, idempotent: bool, error: Error) -> RetryFlow {
        if attempt_count >= self.maximum_attempts {
            return RetryFlow::Break(Error::exhausted(AttemptsExhausted {
                attempts: attempt_count,
                source: error,
            }));
        }
        self.inner.on_error(attempt_count, idempotent, error)
    }

    fn remaining_time(&self) -> Option<std::time::Duration> {
        self.inner.remaining_time()
    }
}

/// A builder-friendly wrapper around retry policies.
///
/// Request builders accept any retry policy via `Into<RetryPolicyArg>`, so
/// applications can pass a concrete policy or a shared `Arc<dyn RetryPolicy>`.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}
