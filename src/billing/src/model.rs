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

//! The messages exchanged with the Cloud Billing API.

use gax::paginator::{PageableRequest, PageableResponse};

/// A billing account in the Google Cloud Console. You can assign a billing
/// account to one or more projects.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BillingAccount {
    /// The resource name of the billing account, in the form
    /// `billingAccounts/{billing_account_id}`.
    pub name: String,

    /// True if the billing account is open, and will therefore be charged for
    /// any usage on associated projects.
    pub open: bool,

    /// The display name given to the billing account.
    pub display_name: String,

    /// If this account is a subaccount, the resource name of the parent
    /// billing account that it is being resold through.
    pub master_billing_account: String,

    /// The billing account's parent resource identifier.
    pub parent: String,
}

impl BillingAccount {
    /// Sets the value of [name][BillingAccount::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [open][BillingAccount::open].
    pub fn set_open<T: Into<bool>>(mut self, v: T) -> Self {
        self.open = v.into();
        self
    }

    /// Sets the value of [display_name][BillingAccount::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of
    /// [master_billing_account][BillingAccount::master_billing_account].
    pub fn set_master_billing_account<T: Into<String>>(mut self, v: T) -> Self {
        self.master_billing_account = v.into();
        self
    }

    /// Sets the value of [parent][BillingAccount::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// Encapsulation of billing information for a Google Cloud Console project. A
/// project has at most one associated billing account at a time.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProjectBillingInfo {
    /// The resource name for the `ProjectBillingInfo`, in the form
    /// `projects/{project_id}/billingInfo`.
    pub name: String,

    /// The ID of the project that this `ProjectBillingInfo` represents.
    pub project_id: String,

    /// The resource name of the billing account associated with the project,
    /// if any.
    pub billing_account_name: String,

    /// True if the project is associated with an open billing account.
    pub billing_enabled: bool,
}

impl ProjectBillingInfo {
    /// Sets the value of [name][ProjectBillingInfo::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][ProjectBillingInfo::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of
    /// [billing_account_name][ProjectBillingInfo::billing_account_name].
    pub fn set_billing_account_name<T: Into<String>>(mut self, v: T) -> Self {
        self.billing_account_name = v.into();
        self
    }

    /// Sets the value of
    /// [billing_enabled][ProjectBillingInfo::billing_enabled].
    pub fn set_billing_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.billing_enabled = v.into();
        self
    }
}

/// Encapsulates a single service in Google Cloud Platform.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Service {
    /// The resource name for the service, in the form
    /// `services/{service_id}`.
    pub name: String,

    /// The identifier for the service.
    pub service_id: String,

    /// A human readable display name for this service.
    pub display_name: String,

    /// The business under which the service is offered.
    pub business_entity_name: String,
}

impl Service {
    /// Sets the value of [name][Service::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [service_id][Service::service_id].
    pub fn set_service_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_id = v.into();
        self
    }

    /// Sets the value of [display_name][Service::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of
    /// [business_entity_name][Service::business_entity_name].
    pub fn set_business_entity_name<T: Into<String>>(mut self, v: T) -> Self {
        self.business_entity_name = v.into();
        self
    }
}

/// Represents the category hierarchy of a SKU.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Category {
    /// The display name of the service this SKU belongs to.
    pub service_display_name: String,

    /// The type of product the SKU refers to, such as "Compute", "Storage",
    /// or "Network".
    pub resource_family: String,

    /// A group classification for related SKUs, such as "RAM" or "GPU".
    pub resource_group: String,

    /// Represents how the SKU is consumed, such as "OnDemand" or
    /// "Preemptible".
    pub usage_type: String,
}

impl Category {
    /// Sets the value of
    /// [service_display_name][Category::service_display_name].
    pub fn set_service_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_display_name = v.into();
        self
    }

    /// Sets the value of [resource_family][Category::resource_family].
    pub fn set_resource_family<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_family = v.into();
        self
    }

    /// Sets the value of [resource_group][Category::resource_group].
    pub fn set_resource_group<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group = v.into();
        self
    }

    /// Sets the value of [usage_type][Category::usage_type].
    pub fn set_usage_type<T: Into<String>>(mut self, v: T) -> Self {
        self.usage_type = v.into();
        self
    }
}

/// Encapsulates a single SKU in Google Cloud Platform.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Sku {
    /// The resource name for the SKU, in the form
    /// `services/{service_id}/skus/{sku_id}`.
    pub name: String,

    /// The identifier for the SKU.
    pub sku_id: String,

    /// A human readable description of the SKU.
    pub description: String,

    /// The category hierarchy of this SKU, purely for organizational purpose.
    pub category: Option<Category>,

    /// List of service regions this SKU is offered at.
    pub service_regions: Vec<String>,

    /// Identifies the service provider. This is "Google" for first party
    /// services in Google Cloud Platform.
    pub service_provider_name: String,
}

impl Sku {
    /// Sets the value of [name][Sku::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [sku_id][Sku::sku_id].
    pub fn set_sku_id<T: Into<String>>(mut self, v: T) -> Self {
        self.sku_id = v.into();
        self
    }

    /// Sets the value of [description][Sku::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [category][Sku::category].
    pub fn set_category<T: Into<Category>>(mut self, v: T) -> Self {
        self.category = Some(v.into());
        self
    }

    /// Sets the value of [service_regions][Sku::service_regions].
    pub fn set_service_regions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.service_regions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [service_provider_name][Sku::service_provider_name].
    pub fn set_service_provider_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_provider_name = v.into();
        self
    }
}

/// Request message for `ListBillingAccounts`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBillingAccountsRequest {
    /// Requested page size. The maximum page size is 100; this is also the
    /// default.
    pub page_size: i32,

    /// A token identifying a page of results to return. This should be a
    /// `next_page_token` value returned from a previous `ListBillingAccounts`
    /// call. If unspecified, the first page of results is returned.
    pub page_token: String,

    /// Options for how to filter the returned billing accounts. This only
    /// supports filtering for subaccounts under a single provided parent
    /// billing account.
    pub filter: String,
}

impl ListBillingAccountsRequest {
    /// Sets the value of [page_size][ListBillingAccountsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListBillingAccountsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][ListBillingAccountsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }
}

impl PageableRequest for ListBillingAccountsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// Response message for `ListBillingAccounts`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBillingAccountsResponse {
    /// A list of billing accounts.
    pub billing_accounts: Vec<BillingAccount>,

    /// A token to retrieve the next page of results. To retrieve the next
    /// page, call `ListBillingAccounts` again with the `page_token` field set
    /// to this value. This field is empty if there are no more results to
    /// retrieve.
    pub next_page_token: String,
}

impl ListBillingAccountsResponse {
    /// Sets the value of
    /// [billing_accounts][ListBillingAccountsResponse::billing_accounts].
    pub fn set_billing_accounts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BillingAccount>,
    {
        self.billing_accounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][ListBillingAccountsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListBillingAccountsResponse {
    type PageItem = BillingAccount;

    fn items(self) -> Vec<BillingAccount> {
        self.billing_accounts
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for `ListProjectBillingInfo`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProjectBillingInfoRequest {
    /// The resource name of the billing account associated with the projects
    /// that you want to list, in the form
    /// `billingAccounts/{billing_account_id}`.
    pub name: String,

    /// Requested page size. The maximum page size is 100; this is also the
    /// default.
    pub page_size: i32,

    /// A token identifying a page of results to be returned. This should be a
    /// `next_page_token` value returned from a previous
    /// `ListProjectBillingInfo` call.
    pub page_token: String,
}

impl ListProjectBillingInfoRequest {
    /// Sets the value of [name][ListProjectBillingInfoRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of
    /// [page_size][ListProjectBillingInfoRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of
    /// [page_token][ListProjectBillingInfoRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl PageableRequest for ListProjectBillingInfoRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// Response message for `ListProjectBillingInfo`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProjectBillingInfoResponse {
    /// A list of `ProjectBillingInfo` resources representing the projects
    /// associated with the billing account.
    pub project_billing_info: Vec<ProjectBillingInfo>,

    /// A token to retrieve the next page of results. This field is empty if
    /// there are no more results to retrieve.
    pub next_page_token: String,
}

impl ListProjectBillingInfoResponse {
    /// Sets the value of
    /// [project_billing_info][ListProjectBillingInfoResponse::project_billing_info].
    pub fn set_project_billing_info<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ProjectBillingInfo>,
    {
        self.project_billing_info = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][ListProjectBillingInfoResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListProjectBillingInfoResponse {
    type PageItem = ProjectBillingInfo;

    fn items(self) -> Vec<ProjectBillingInfo> {
        self.project_billing_info
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for `ListServices`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServicesRequest {
    /// Requested page size. Defaults to 5000.
    pub page_size: i32,

    /// A token identifying a page of results to return. This should be a
    /// `next_page_token` value returned from a previous `ListServices` call.
    pub page_token: String,
}

impl ListServicesRequest {
    /// Sets the value of [page_size][ListServicesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListServicesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl PageableRequest for ListServicesRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// Response message for `ListServices`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServicesResponse {
    /// A list of services.
    pub services: Vec<Service>,

    /// A token to retrieve the next page of results. This field is empty if
    /// there are no more results to retrieve.
    pub next_page_token: String,
}

impl ListServicesResponse {
    /// Sets the value of [services][ListServicesResponse::services].
    pub fn set_services<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Service>,
    {
        self.services = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][ListServicesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListServicesResponse {
    type PageItem = Service;

    fn items(self) -> Vec<Service> {
        self.services
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for `ListSkus`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSkusRequest {
    /// The name of the service, in the form `services/{service_id}`.
    pub parent: String,

    /// The ISO 4217 currency code for the pricing info in the response
    /// proto. Will use the conversion rate as of start_time. Optional. If not
    /// specified USD will be used.
    pub currency_code: String,

    /// Requested page size. Defaults to 5000.
    pub page_size: i32,

    /// A token identifying a page of results to return. This should be a
    /// `next_page_token` value returned from a previous `ListSkus` call.
    pub page_token: String,
}

impl ListSkusRequest {
    /// Sets the value of [parent][ListSkusRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [currency_code][ListSkusRequest::currency_code].
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = v.into();
        self
    }

    /// Sets the value of [page_size][ListSkusRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListSkusRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl PageableRequest for ListSkusRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

/// Response message for `ListSkus`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSkusResponse {
    /// The list of public SKUs of the given service.
    pub skus: Vec<Sku>,

    /// A token to retrieve the next page of results. This field is empty if
    /// there are no more results to retrieve.
    pub next_page_token: String,
}

impl ListSkusResponse {
    /// Sets the value of [skus][ListSkusResponse::skus].
    pub fn set_skus<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Sku>,
    {
        self.skus = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of
    /// [next_page_token][ListSkusResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListSkusResponse {
    type PageItem = Sku;

    fn items(self) -> Vec<Sku> {
        self.skus
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_billing_account() -> anyhow::Result<()> {
        let account = BillingAccount::default()
            .set_name("billingAccounts/012345-567890-ABCDEF")
            .set_open(true)
            .set_display_name("My Billing Account");
        let got = serde_json::to_value(&account)?;
        let want = serde_json::json!({
            "name": "billingAccounts/012345-567890-ABCDEF",
            "open": true,
            "displayName": "My Billing Account",
            "masterBillingAccount": "",
            "parent": ""
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_list_response_with_missing_fields() -> anyhow::Result<()> {
        let got: ListServicesResponse = serde_json::from_value(serde_json::json!({
            "services": [{"name": "services/6F81-5844-456A"}]
        }))?;
        assert_eq!(got.services[0].name, "services/6F81-5844-456A");
        assert_eq!(got.next_page_token, "");
        Ok(())
    }

    #[test]
    fn list_responses_are_pageable() {
        let response = ListSkusResponse::default()
            .set_skus([Sku::default().set_sku_id("0013-863C-A2FF")])
            .set_next_page_token("token-001");
        assert_eq!(response.next_page_token(), "token-001");
        let items = response.items();
        assert_eq!(items[0].sku_id, "0013-863C-A2FF");
    }

    #[test]
    fn list_requests_are_pageable() {
        let mut request = ListSkusRequest::default().set_parent("services/6F81-5844-456A");
        PageableRequest::set_page_token(&mut request, "token-001".to_string());
        assert_eq!(request.page_token, "token-001");
        assert_eq!(request.parent, "services/6F81-5844-456A");
    }
}
