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

//! Request builders for the Cloud Billing API.
//!
//! Each client method returns one of these builders. The builder collects the
//! request fields and the per-request options, then issues the call with
//! [send()][cloud_billing::ListBillingAccounts::send] or, for paged RPCs,
//! fetches the first page and hands the rest to a paginator with
//! [paginator()][cloud_billing::ListBillingAccounts::paginator].

/// Request builders for [CloudBilling][crate::client::CloudBilling].
pub mod cloud_billing {
    use crate::Result;
    use crate::model;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use gax::response::Response;
    use std::sync::Arc;

    pub(crate) type Stub = dyn crate::stub::dynamic::CloudBilling;

    /// The request builder for
    /// [CloudBilling::list_billing_accounts][crate::client::CloudBilling::list_billing_accounts]
    /// calls.
    #[derive(Clone, Debug)]
    pub struct ListBillingAccounts {
        stub: Arc<Stub>,
        request: model::ListBillingAccountsRequest,
        options: RequestOptions,
    }

    impl ListBillingAccounts {
        pub(crate) fn new(stub: Arc<Stub>) -> Self {
            Self {
                stub,
                request: model::ListBillingAccountsRequest::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the value of
        /// [page_size][model::ListBillingAccountsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_size(v);
            self
        }

        /// Sets the value of
        /// [page_token][model::ListBillingAccountsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_token(v);
            self
        }

        /// Sets the value of
        /// [filter][model::ListBillingAccountsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_filter(v);
            self
        }

        /// Sends the request and returns a single page.
        pub async fn send(self) -> Result<Response<model::ListBillingAccountsResponse>> {
            let options = gax::options::internal::set_default_idempotency(self.options, true);
            tracing::debug!(rpc = "ListBillingAccounts", "sending request");
            self.stub.list_billing_accounts(self.request, options).await
        }

        /// Fetches the first page and returns a paginator over the whole
        /// sequence.
        ///
        /// The request options set on this builder are captured once and
        /// reused for every page fetch. An error fetching the first page is
        /// returned here; errors on later pages surface through the
        /// paginator.
        pub async fn paginator(
            self,
        ) -> Result<
            Paginator<
                model::ListBillingAccountsRequest,
                model::ListBillingAccountsResponse,
                gax::error::Error,
            >,
        > {
            let Self {
                stub,
                request,
                options,
            } = self;
            let options = gax::options::internal::set_default_idempotency(options, true);
            tracing::debug!(rpc = "ListBillingAccounts", "sending request");
            let first = stub
                .list_billing_accounts(request.clone(), options.clone())
                .await?
                .into_body();
            Ok(Paginator::new(request, first, move |request| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_billing_accounts(request, options)
                        .await
                        .map(Response::into_body)
                }
            }))
        }
    }

    impl gax::options::internal::RequestBuilder for ListBillingAccounts {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for
    /// [CloudBilling::list_project_billing_info][crate::client::CloudBilling::list_project_billing_info]
    /// calls.
    #[derive(Clone, Debug)]
    pub struct ListProjectBillingInfo {
        stub: Arc<Stub>,
        request: model::ListProjectBillingInfoRequest,
        options: RequestOptions,
    }

    impl ListProjectBillingInfo {
        pub(crate) fn new(stub: Arc<Stub>) -> Self {
            Self {
                stub,
                request: model::ListProjectBillingInfoRequest::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the value of
        /// [name][model::ListProjectBillingInfoRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_name(v);
            self
        }

        /// Sets the value of
        /// [page_size][model::ListProjectBillingInfoRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_size(v);
            self
        }

        /// Sets the value of
        /// [page_token][model::ListProjectBillingInfoRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_token(v);
            self
        }

        /// Sends the request and returns a single page.
        pub async fn send(self) -> Result<Response<model::ListProjectBillingInfoResponse>> {
            let options = gax::options::internal::set_default_idempotency(self.options, true);
            tracing::debug!(rpc = "ListProjectBillingInfo", "sending request");
            self.stub
                .list_project_billing_info(self.request, options)
                .await
        }

        /// Fetches the first page and returns a paginator over the whole
        /// sequence.
        pub async fn paginator(
            self,
        ) -> Result<
            Paginator<
                model::ListProjectBillingInfoRequest,
                model::ListProjectBillingInfoResponse,
                gax::error::Error,
            >,
        > {
            let Self {
                stub,
                request,
                options,
            } = self;
            let options = gax::options::internal::set_default_idempotency(options, true);
            tracing::debug!(rpc = "ListProjectBillingInfo", "sending request");
            let first = stub
                .list_project_billing_info(request.clone(), options.clone())
                .await?
                .into_body();
            Ok(Paginator::new(request, first, move |request| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_project_billing_info(request, options)
                        .await
                        .map(Response::into_body)
                }
            }))
        }
    }

    impl gax::options::internal::RequestBuilder for ListProjectBillingInfo {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Request builders for [CloudCatalog][crate::client::CloudCatalog].
pub mod cloud_catalog {
    use crate::Result;
    use crate::model;
    use gax::options::RequestOptions;
    use gax::paginator::Paginator;
    use gax::response::Response;
    use std::sync::Arc;

    pub(crate) type Stub = dyn crate::stub::dynamic::CloudCatalog;

    /// The request builder for
    /// [CloudCatalog::list_services][crate::client::CloudCatalog::list_services]
    /// calls.
    #[derive(Clone, Debug)]
    pub struct ListServices {
        stub: Arc<Stub>,
        request: model::ListServicesRequest,
        options: RequestOptions,
    }

    impl ListServices {
        pub(crate) fn new(stub: Arc<Stub>) -> Self {
            Self {
                stub,
                request: model::ListServicesRequest::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the value of [page_size][model::ListServicesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_size(v);
            self
        }

        /// Sets the value of
        /// [page_token][model::ListServicesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_token(v);
            self
        }

        /// Sends the request and returns a single page.
        pub async fn send(self) -> Result<Response<model::ListServicesResponse>> {
            let options = gax::options::internal::set_default_idempotency(self.options, true);
            tracing::debug!(rpc = "ListServices", "sending request");
            self.stub.list_services(self.request, options).await
        }

        /// Fetches the first page and returns a paginator over the whole
        /// sequence.
        pub async fn paginator(
            self,
        ) -> Result<
            Paginator<model::ListServicesRequest, model::ListServicesResponse, gax::error::Error>,
        > {
            let Self {
                stub,
                request,
                options,
            } = self;
            let options = gax::options::internal::set_default_idempotency(options, true);
            tracing::debug!(rpc = "ListServices", "sending request");
            let first = stub
                .list_services(request.clone(), options.clone())
                .await?
                .into_body();
            Ok(Paginator::new(request, first, move |request| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_services(request, options)
                        .await
                        .map(Response::into_body)
                }
            }))
        }
    }

    impl gax::options::internal::RequestBuilder for ListServices {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for
    /// [CloudCatalog::list_skus][crate::client::CloudCatalog::list_skus]
    /// calls.
    #[derive(Clone, Debug)]
    pub struct ListSkus {
        stub: Arc<Stub>,
        request: model::ListSkusRequest,
        options: RequestOptions,
    }

    impl ListSkus {
        pub(crate) fn new(stub: Arc<Stub>) -> Self {
            Self {
                stub,
                request: model::ListSkusRequest::default(),
                options: RequestOptions::default(),
            }
        }

        /// Sets the value of [parent][model::ListSkusRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_parent(v);
            self
        }

        /// Sets the value of
        /// [currency_code][model::ListSkusRequest::currency_code].
        pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_currency_code(v);
            self
        }

        /// Sets the value of [page_size][model::ListSkusRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][model::ListSkusRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.request = self.request.set_page_token(v);
            self
        }

        /// Sends the request and returns a single page.
        pub async fn send(self) -> Result<Response<model::ListSkusResponse>> {
            let options = gax::options::internal::set_default_idempotency(self.options, true);
            tracing::debug!(rpc = "ListSkus", "sending request");
            self.stub.list_skus(self.request, options).await
        }

        /// Fetches the first page and returns a paginator over the whole
        /// sequence.
        pub async fn paginator(
            self,
        ) -> Result<Paginator<model::ListSkusRequest, model::ListSkusResponse, gax::error::Error>>
        {
            let Self {
                stub,
                request,
                options,
            } = self;
            let options = gax::options::internal::set_default_idempotency(options, true);
            tracing::debug!(rpc = "ListSkus", "sending request");
            let first = stub
                .list_skus(request.clone(), options.clone())
                .await?
                .into_body();
            Ok(Paginator::new(request, first, move |request| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_skus(request, options)
                        .await
                        .map(Response::into_body)
                }
            }))
        }
    }

    impl gax::options::internal::RequestBuilder for ListSkus {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}
