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

//! Verify the paged list RPCs through mocked stubs.

use billing_v1::client::CloudBilling;
use billing_v1::model;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::options::RequestOptions;
use gax::response::Response;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

mockall::mock! {
    #[derive(Debug)]
    CloudBilling {}
    impl billing_v1::stub::CloudBilling for CloudBilling {
        async fn list_billing_accounts(&self, req: model::ListBillingAccountsRequest, options: RequestOptions) -> gax::Result<Response<model::ListBillingAccountsResponse>>;
        async fn list_project_billing_info(&self, req: model::ListProjectBillingInfoRequest, options: RequestOptions) -> gax::Result<Response<model::ListProjectBillingInfoResponse>>;
    }
}

fn account(display_name: &str) -> model::BillingAccount {
    model::BillingAccount::default()
        .set_name(format!("billingAccounts/{display_name}"))
        .set_display_name(display_name)
}

fn page(names: &[&str], token: &str) -> model::ListBillingAccountsResponse {
    model::ListBillingAccountsResponse::default()
        .set_billing_accounts(names.iter().map(|n| account(n)))
        .set_next_page_token(token)
}

/// A four page sequence: a page of three, an empty page, a page of one, and a
/// final page of two with the terminating empty token.
fn canned_pages(mock: &mut MockCloudBilling, seq: &mut mockall::Sequence) {
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(seq)
        .withf(|r, _| r.page_token.is_empty())
        .return_once(|_, _| Ok(Response::from(page(&["A", "B", "C"], "abc"))));
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(seq)
        .withf(|r, _| r.page_token == "abc")
        .return_once(|_, _| Ok(Response::from(page(&[], "def"))));
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(seq)
        .withf(|r, _| r.page_token == "def")
        .return_once(|_, _| Ok(Response::from(page(&["D"], "ghi"))));
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(seq)
        .withf(|r, _| r.page_token == "ghi")
        .return_once(|_, _| Ok(Response::from(page(&["E", "F"], ""))));
}

#[tokio::test]
async fn iterate_items() -> Result {
    let mut mock = MockCloudBilling::new();
    let mut seq = mockall::Sequence::new();
    canned_pages(&mut mock, &mut seq);

    let client = CloudBilling::from_stub(mock);
    let mut paginator = client.list_billing_accounts().paginator().await?;
    let mut names = Vec::new();
    while let Some(account) = paginator.next_item().await {
        names.push(account?.display_name);
    }
    assert_eq!(names, ["A", "B", "C", "D", "E", "F"]);
    Ok(())
}

#[tokio::test]
async fn iterate_pages() -> Result {
    let mut mock = MockCloudBilling::new();
    let mut seq = mockall::Sequence::new();
    canned_pages(&mut mock, &mut seq);

    let client = CloudBilling::from_stub(mock);
    let mut paginator = client.list_billing_accounts().paginator().await?;
    assert_eq!(paginator.page_token(), "abc");

    let mut sizes = Vec::new();
    let mut tokens = Vec::new();
    while let Some(p) = paginator.next_page().await {
        let p = p?;
        tokens.push(p.next_page_token.clone());
        sizes.push(p.billing_accounts.len());
    }
    assert_eq!(sizes, [3, 0, 1, 2]);
    assert_eq!(tokens, ["abc", "def", "ghi", ""]);
    Ok(())
}

#[tokio::test]
async fn no_read_ahead() -> Result {
    let mut mock = MockCloudBilling::new();
    // Only the first page is expected: consuming all of its items must not
    // trigger a fetch of the second page.
    mock.expect_list_billing_accounts()
        .once()
        .withf(|r, _| r.page_token.is_empty())
        .return_once(|_, _| Ok(Response::from(page(&["A", "B", "C"], "abc"))));

    let client = CloudBilling::from_stub(mock);
    let mut paginator = client.list_billing_accounts().paginator().await?;
    for want in ["A", "B", "C"] {
        let got = paginator.next_item().await.unwrap()?;
        assert_eq!(got.display_name, want);
    }
    // Dropping the paginator here verifies the mock saw exactly one call.
    Ok(())
}

#[tokio::test]
async fn failed_page_fetch_can_be_retried() -> Result {
    let mut mock = MockCloudBilling::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token.is_empty())
        .return_once(|_, _| Ok(Response::from(page(&["A"], "p2"))));
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "p2")
        .return_once(|_, _| Ok(Response::from(page(&["B"], "p3"))));
    // The fetch of page 3 fails once, then succeeds with the same token.
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "p3")
        .return_once(|_, _| {
            Err(Error::service(
                Status::default().set_code(Code::Unavailable),
            ))
        });
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "p3")
        .return_once(|_, _| Ok(Response::from(page(&["C"], ""))));

    let client = CloudBilling::from_stub(mock);
    let mut paginator = client.list_billing_accounts().paginator().await?;
    assert_eq!(paginator.next_item().await.unwrap()?.display_name, "A");
    assert_eq!(paginator.next_item().await.unwrap()?.display_name, "B");

    let err = paginator.next_item().await.unwrap().unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
    // The paginator still points at page 2; the same advancement retries.
    assert_eq!(paginator.page_token(), "p3");
    assert_eq!(paginator.next_item().await.unwrap()?.display_name, "C");
    assert!(paginator.next_item().await.is_none());
    Ok(())
}

#[tokio::test]
async fn first_page_error_surfaces_at_construction() -> Result {
    let mut mock = MockCloudBilling::new();
    mock.expect_list_billing_accounts()
        .once()
        .return_once(|_, _| {
            Err(Error::service(
                Status::default().set_code(Code::PermissionDenied),
            ))
        });

    let client = CloudBilling::from_stub(mock);
    let err = client
        .list_billing_accounts()
        .paginator()
        .await
        .err()
        .unwrap();
    assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
    Ok(())
}

#[tokio::test]
async fn request_fields_are_reused_on_every_page() -> Result {
    let mut mock = MockCloudBilling::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.filter == "open=true" && r.page_token.is_empty())
        .return_once(|_, _| Ok(Response::from(page(&["A"], "t1"))));
    mock.expect_list_billing_accounts()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.filter == "open=true" && r.page_token == "t1")
        .return_once(|_, _| Ok(Response::from(page(&["B"], ""))));

    let client = CloudBilling::from_stub(mock);
    let mut paginator = client
        .list_billing_accounts()
        .set_filter("open=true")
        .paginator()
        .await?;
    let mut count = 0;
    while let Some(account) = paginator.next_item().await {
        account?;
        count += 1;
    }
    assert_eq!(count, 2);
    Ok(())
}

#[tokio::test]
async fn stream_of_items() -> Result {
    use futures::StreamExt;

    let mut mock = MockCloudBilling::new();
    let mut seq = mockall::Sequence::new();
    canned_pages(&mut mock, &mut seq);

    let client = CloudBilling::from_stub(mock);
    let mut stream = client
        .list_billing_accounts()
        .paginator()
        .await?
        .into_items();
    let mut names = Vec::new();
    while let Some(account) = stream.next().await {
        names.push(account?.display_name);
    }
    assert_eq!(names, ["A", "B", "C", "D", "E", "F"]);
    Ok(())
}

#[tokio::test]
async fn paginators_are_send() -> Result {
    let mut mock = MockCloudBilling::new();
    mock.expect_list_billing_accounts()
        .once()
        .return_once(|_, _| Ok(Response::from(page(&["A"], ""))));

    let client = CloudBilling::from_stub(mock);
    let join = tokio::spawn(async move {
        let mut paginator = client.list_billing_accounts().paginator().await?;
        let mut names = Vec::new();
        while let Some(account) = paginator.next_item().await {
            names.push(account?.display_name);
        }
        gax::Result::Ok(names)
    });
    assert_eq!(join.await??, ["A"]);
    Ok(())
}
