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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to implement these traits to mock
//! `client::CloudBilling` and `client::CloudCatalog`. In other use-cases,
//! application developers only use the client types and need not be concerned
//! with these traits or their implementations.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;

/// Defines the trait used to implement [crate::client::CloudBilling].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic, so tests must
/// override every method they exercise.
pub trait CloudBilling: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::CloudBilling::list_billing_accounts].
    fn list_billing_accounts(
        &self,
        _req: model::ListBillingAccountsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::ListBillingAccountsResponse>>> + Send
    {
        unimplemented_stub::<model::ListBillingAccountsResponse>()
    }

    /// Implements [crate::client::CloudBilling::list_project_billing_info].
    fn list_project_billing_info(
        &self,
        _req: model::ListProjectBillingInfoRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::ListProjectBillingInfoResponse>>> + Send
    {
        unimplemented_stub::<model::ListProjectBillingInfoResponse>()
    }
}

/// Defines the trait used to implement [crate::client::CloudCatalog].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic, so tests must
/// override every method they exercise.
pub trait CloudCatalog: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::CloudCatalog::list_services].
    fn list_services(
        &self,
        _req: model::ListServicesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::ListServicesResponse>>> + Send
    {
        unimplemented_stub::<model::ListServicesResponse>()
    }

    /// Implements [crate::client::CloudCatalog::list_skus].
    fn list_skus(
        &self,
        _req: model::ListSkusRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::ListSkusResponse>>> + Send {
        unimplemented_stub::<model::ListSkusResponse>()
    }
}

async fn unimplemented_stub<T>() -> Result<Response<T>> {
    unimplemented!(
        "the default implementations in the stub traits are often used in tests, where only the \
         mocked methods should be called"
    )
}

/// Dyn-compatible mirrors of the stub traits, so the clients can hold
/// `Arc<dyn ...>` without knowing the concrete stub type.
pub(crate) mod dynamic {
    use super::{RequestOptions, Response, Result, model};

    #[async_trait::async_trait]
    pub trait CloudBilling: std::fmt::Debug + Send + Sync {
        async fn list_billing_accounts(
            &self,
            req: model::ListBillingAccountsRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListBillingAccountsResponse>>;

        async fn list_project_billing_info(
            &self,
            req: model::ListProjectBillingInfoRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListProjectBillingInfoResponse>>;
    }

    #[async_trait::async_trait]
    impl<T: super::CloudBilling> CloudBilling for T {
        async fn list_billing_accounts(
            &self,
            req: model::ListBillingAccountsRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListBillingAccountsResponse>> {
            T::list_billing_accounts(self, req, options).await
        }

        async fn list_project_billing_info(
            &self,
            req: model::ListProjectBillingInfoRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListProjectBillingInfoResponse>> {
            T::list_project_billing_info(self, req, options).await
        }
    }

    #[async_trait::async_trait]
    pub trait CloudCatalog: std::fmt::Debug + Send + Sync {
        async fn list_services(
            &self,
            req: model::ListServicesRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListServicesResponse>>;

        async fn list_skus(
            &self,
            req: model::ListSkusRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListSkusResponse>>;
    }

    #[async_trait::async_trait]
    impl<T: super::CloudCatalog> CloudCatalog for T {
        async fn list_services(
            &self,
            req: model::ListServicesRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListServicesResponse>> {
            T::list_services(self, req, options).await
        }

        async fn list_skus(
            &self,
            req: model::ListSkusRequest,
            options: RequestOptions,
        ) -> Result<Response<model::ListSkusResponse>> {
            T::list_skus(self, req, options).await
        }
    }
}
