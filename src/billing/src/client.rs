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

//! Contains the clients for the Cloud Billing API and related types.

use crate::builder;
use crate::stub;
use std::sync::Arc;

/// Implements a client to retrieve billing account and project billing
/// information.
///
/// # Mocking
///
/// `CloudBilling` holds an `Arc` to an implementation of
/// [stub::CloudBilling][crate::stub::CloudBilling]. Tests construct the
/// client from a mock of that trait:
///
/// ```
/// # use billing_v1::client::CloudBilling;
/// # #[derive(Debug)]
/// # struct MyMock;
/// # impl billing_v1::stub::CloudBilling for MyMock {}
/// let client = CloudBilling::from_stub(MyMock);
/// ```
///
/// # Pooling and Cloning
///
/// `CloudBilling` already uses an `Arc` internally, there is no need to wrap
/// it in another [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it.
#[derive(Clone, Debug)]
pub struct CloudBilling {
    stub: Arc<dyn stub::dynamic::CloudBilling>,
}

impl CloudBilling {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::CloudBilling + 'static,
    {
        Self {
            stub: Arc::new(stub),
        }
    }

    /// Lists the billing accounts that the current authenticated user has
    /// permission to view.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(client: &billing_v1::client::CloudBilling) -> billing_v1::Result<()> {
    /// let mut paginator = client.list_billing_accounts().paginator().await?;
    /// while let Some(account) = paginator.next_item().await {
    ///     println!("{}", account?.display_name);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_billing_accounts(&self) -> builder::cloud_billing::ListBillingAccounts {
        builder::cloud_billing::ListBillingAccounts::new(self.stub.clone())
    }

    /// Lists the projects associated with a billing account.
    ///
    /// # Parameters
    /// * `name` - the resource name of the billing account, in the form
    ///   `billingAccounts/{billing_account_id}`.
    pub fn list_project_billing_info<T: Into<String>>(
        &self,
        name: T,
    ) -> builder::cloud_billing::ListProjectBillingInfo {
        builder::cloud_billing::ListProjectBillingInfo::new(self.stub.clone()).set_name(name)
    }
}

/// Implements a client to retrieve the catalog of public services and SKUs.
///
/// # Mocking
///
/// `CloudCatalog` holds an `Arc` to an implementation of
/// [stub::CloudCatalog][crate::stub::CloudCatalog]. Tests construct the
/// client from a mock of that trait.
///
/// # Pooling and Cloning
///
/// `CloudCatalog` already uses an `Arc` internally, there is no need to wrap
/// it in another [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it.
#[derive(Clone, Debug)]
pub struct CloudCatalog {
    stub: Arc<dyn stub::dynamic::CloudCatalog>,
}

impl CloudCatalog {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::CloudCatalog + 'static,
    {
        Self {
            stub: Arc::new(stub),
        }
    }

    /// Lists all public cloud services.
    pub fn list_services(&self) -> builder::cloud_catalog::ListServices {
        builder::cloud_catalog::ListServices::new(self.stub.clone())
    }

    /// Lists all publicly available SKUs for a given cloud service.
    ///
    /// # Parameters
    /// * `parent` - the name of the service, in the form
    ///   `services/{service_id}`.
    pub fn list_skus<T: Into<String>>(&self, parent: T) -> builder::cloud_catalog::ListSkus {
        builder::cloud_catalog::ListSkus::new(self.stub.clone()).set_parent(parent)
    }
}
