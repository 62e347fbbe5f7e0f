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

//! Adapters that convert token-paged list RPCs into iteration.
//!
//! List RPCs return results one page at a time. Each page carries an opaque
//! continuation token; requesting the next page means reissuing the request
//! with that token, and an empty token marks the last page. The types in this
//! module hide that bookkeeping behind two views: a sequence of whole pages
//! and a sequence of individual items.
//!
//! A paginator is constructed *after* the first page has been fetched, so the
//! initial response can be validated before iteration begins. Subsequent pages
//! are fetched lazily, one at a time, only when the current page has been
//! consumed. Both views share a single fetch cursor: advancing one advances
//! the position observed by the other.
//!
//! A failed page fetch is returned to the caller and leaves the paginator
//! positioned at the last successful page. Calling the same advancement again
//! reissues the identical request, so applications may treat the error as
//! retryable.
//!
//! Paginators are driven by a single logical consumer. They use no internal
//! locking and are not meant for concurrent advancement from multiple tasks.

use std::future::Future;
use std::pin::Pin;

/// Blocking paginators, for use outside of an async runtime.
pub mod blocking;

/// A list response that can be driven by a paginator.
pub trait PageableResponse {
    /// The type of the items in this page.
    type PageItem;

    /// Consumes the response and returns the items in this page, in the order
    /// the service returned them.
    fn items(self) -> Vec<Self::PageItem>;

    /// The continuation token for the next page.
    ///
    /// An empty token means this is the last page. An empty page with a
    /// non-empty token is valid and does not end the sequence.
    fn next_page_token(&self) -> String;
}

/// A list request that can be driven by a paginator.
pub trait PageableRequest {
    /// Sets the continuation token carried by the request.
    fn set_page_token(&mut self, token: String);
}

/// The shared fetch cursor behind both the page view and the item view.
///
/// Holds the request to reissue, the page that was fetched but not yet handed
/// out, and the continuation token of the most recent successful page. The
/// async and blocking drivers only differ in how they execute [Step::Fetch].
struct Cursor<Req, Resp> {
    request: Req,
    pending: Option<Resp>,
    token: String,
    finished: bool,
}

/// What the driver must do to advance by one page.
enum Step<Req, Resp> {
    /// The held page has not been handed out yet.
    Yield(Resp),
    /// A fetch with the stamped request is required.
    Fetch(Req),
    /// The empty token was observed, the sequence is over.
    Done,
}

impl<Req, Resp> Cursor<Req, Resp>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse,
{
    fn new(request: Req, first_page: Resp) -> Self {
        let token = first_page.next_page_token();
        Self {
            request,
            pending: Some(first_page),
            token,
            finished: false,
        }
    }

    fn page_token(&self) -> &str {
        &self.token
    }

    fn step(&mut self) -> Step<Req, Resp> {
        if let Some(page) = self.pending.take() {
            return Step::Yield(page);
        }
        if self.finished || self.token.is_empty() {
            self.finished = true;
            return Step::Done;
        }
        // Only the cursor mutates the request between fetches, and only the
        // token field.
        self.request.set_page_token(self.token.clone());
        Step::Fetch(self.request.clone())
    }

    /// Records a successful fetch. The page stays pending until the next
    /// [step][Cursor::step] yields it. On a failed fetch nothing is recorded:
    /// the token is unchanged and the same request is stamped again.
    fn complete(&mut self, page: Resp) {
        self.token = page.next_page_token();
        self.pending = Some(page);
    }
}

type BoxFuture<Resp, E> = Pin<Box<dyn Future<Output = Result<Resp, E>> + Send>>;
type BoxFetch<Req, Resp, E> = Box<dyn FnMut(Req) -> BoxFuture<Resp, E> + Send>;

/// Iterates a token-paged list RPC under an async runtime.
///
/// # Example
/// ```
/// # use billing_gax::paginator::{PageableRequest, PageableResponse, Paginator};
/// # #[derive(Clone, Default)]
/// # struct ListRequest { page_token: String }
/// # impl PageableRequest for ListRequest {
/// #     fn set_page_token(&mut self, token: String) { self.page_token = token; }
/// # }
/// # #[derive(Clone, Default)]
/// # struct ListResponse { items: Vec<String>, next_page_token: String }
/// # impl PageableResponse for ListResponse {
/// #     type PageItem = String;
/// #     fn items(self) -> Vec<String> { self.items }
/// #     fn next_page_token(&self) -> String { self.next_page_token.clone() }
/// # }
/// # tokio_test::block_on(async {
/// let request = ListRequest::default();
/// let first = fetch(request.clone()).await?;
/// let mut paginator = Paginator::new(request, first, fetch);
/// while let Some(item) = paginator.next_item().await {
///     let item = item?;
///     // ... use the item ...
/// }
/// # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(()) });
/// # async fn fetch(_r: ListRequest) -> Result<ListResponse, Box<dyn std::error::Error + Send + Sync>> {
/// #     Ok(ListResponse::default())
/// # }
/// ```
pub struct Paginator<Req, Resp, E>
where
    Resp: PageableResponse,
{
    cursor: Cursor<Req, Resp>,
    items: std::vec::IntoIter<Resp::PageItem>,
    fetch: BoxFetch<Req, Resp, E>,
}

// The fetch closure has no useful representation.
impl<Req, Resp, E> std::fmt::Debug for Paginator<Req, Resp, E>
where
    Resp: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("page_token", &self.cursor.token)
            .finish()
    }
}

impl<Req, Resp, E> Paginator<Req, Resp, E>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse,
{
    /// Creates a paginator from the original request, the eagerly fetched
    /// first page, and the operation used to fetch further pages.
    ///
    /// The retry policy, timeout, and call metadata of the fetch operation are
    /// bound before the paginator is constructed; they are reused, unchanged,
    /// for every page.
    pub fn new<F, Fut>(request: Req, first_page: Resp, mut fetch: F) -> Self
    where
        F: FnMut(Req) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Resp, E>> + Send + 'static,
    {
        Self {
            cursor: Cursor::new(request, first_page),
            items: Vec::new().into_iter(),
            fetch: Box::new(move |request| Box::pin(fetch(request))),
        }
    }

    /// The continuation token of the most recently fetched page.
    ///
    /// Useful for diagnostics. Empty once the last page has been fetched.
    pub fn page_token(&self) -> &str {
        self.cursor.page_token()
    }

    /// Returns the next page, fetching it if needed.
    ///
    /// Returns `None` once a page with an empty continuation token has been
    /// consumed. A page partially consumed through
    /// [next_item][Paginator::next_item] is not yielded again: both views
    /// advance the same cursor.
    pub async fn next_page(&mut self) -> Option<Result<Resp, E>> {
        loop {
            match self.cursor.step() {
                Step::Yield(page) => return Some(Ok(page)),
                Step::Done => return None,
                Step::Fetch(request) => {
                    tracing::debug!(page_token = self.cursor.page_token(), "fetching next page");
                    match (self.fetch)(request).await {
                        Ok(page) => self.cursor.complete(page),
                        Err(e) => return Some(Err(e)),
                    }
                }
            }
        }
    }

    /// Returns the next item, fetching the next page if needed.
    ///
    /// Pages with no items do not end the sequence; the paginator keeps
    /// fetching until it finds an item or the empty continuation token.
    pub async fn next_item(&mut self) -> Option<Result<Resp::PageItem, E>> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(Ok(item));
            }
            match self.next_page().await? {
                Ok(page) => self.items = page.items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Converts the paginator into a [Stream][futures::Stream] of pages.
    #[cfg(feature = "unstable-stream")]
    pub fn into_pages(self) -> PageStream<Resp, E>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        Resp::PageItem: Send,
        E: Send + 'static,
    {
        let stream = futures::stream::unfold(self, |mut paginator| async move {
            paginator.next_page().await.map(|page| (page, paginator))
        });
        PageStream {
            stream: Box::pin(stream),
        }
    }

    /// Converts the paginator into a [Stream][futures::Stream] of items.
    #[cfg(feature = "unstable-stream")]
    pub fn into_items(self) -> ItemStream<Resp::PageItem, E>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        Resp::PageItem: Send + 'static,
        E: Send + 'static,
    {
        let stream = futures::stream::unfold(self, |mut paginator| async move {
            paginator.next_item().await.map(|item| (item, paginator))
        });
        ItemStream {
            stream: Box::pin(stream),
        }
    }
}

/// A [Stream][futures::Stream] of pages, created by
/// [Paginator::into_pages].
#[cfg(feature = "unstable-stream")]
#[pin_project::pin_project]
pub struct PageStream<Resp, E> {
    #[pin]
    stream: Pin<Box<dyn futures::Stream<Item = Result<Resp, E>> + Send>>,
}

#[cfg(feature = "unstable-stream")]
impl<Resp, E> futures::Stream for PageStream<Resp, E> {
    type Item = Result<Resp, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A [Stream][futures::Stream] of items, created by
/// [Paginator::into_items].
#[cfg(feature = "unstable-stream")]
#[pin_project::pin_project]
pub struct ItemStream<I, E> {
    #[pin]
    stream: Pin<Box<dyn futures::Stream<Item = Result<I, E>> + Send>>,
}

#[cfg(feature = "unstable-stream")]
impl<I, E> futures::Stream for ItemStream<I, E> {
    type Item = Result<I, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    type TestError = Box<dyn std::error::Error + Send + Sync>;

    #[derive(Clone, Debug, Default)]
    struct TestRequest {
        filter: String,
        page_token: String,
    }

    impl PageableRequest for TestRequest {
        fn set_page_token(&mut self, token: String) {
            self.page_token = token;
        }
    }

    #[derive(Clone, Debug)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl TestResponse {
        fn new(items: &[&str], token: &str) -> Self {
            Self {
                items: items.iter().map(|s| s.to_string()).collect(),
                next_page_token: token.to_string(),
            }
        }
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    struct Server {
        responses: Mutex<VecDeque<Result<TestResponse, String>>>,
        expected_tokens: Mutex<VecDeque<String>>,
        fetch_count: AtomicUsize,
    }

    impl Server {
        fn new(responses: Vec<Result<TestResponse, String>>, expected_tokens: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into_iter().collect()),
                expected_tokens: Mutex::new(
                    expected_tokens.iter().map(|t| t.to_string()).collect(),
                ),
                fetch_count: AtomicUsize::new(0),
            })
        }

        fn fetch(&self, request: TestRequest) -> Result<TestResponse, TestError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            let expected = self
                .expected_tokens
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected fetch");
            assert_eq!(request.page_token, expected);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no more canned responses")
                .map_err(|e| e.into())
        }

        fn fetches(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    fn paginator(server: &Arc<Server>) -> Paginator<TestRequest, TestResponse, TestError> {
        // The first page is fetched eagerly, outside the paginator.
        let request = TestRequest {
            filter: "open=true".to_string(),
            ..Default::default()
        };
        let first = server.fetch(request.clone()).unwrap();
        let remote = server.clone();
        Paginator::new(request, first, move |request| {
            let remote = remote.clone();
            async move { remote.fetch(request) }
        })
    }

    // The canned scenario: four pages, one of them empty, tokens
    // "abc", "def", "ghi", and the terminating "".
    fn canned() -> Vec<Result<TestResponse, String>> {
        vec![
            Ok(TestResponse::new(&["A", "B", "C"], "abc")),
            Ok(TestResponse::new(&[], "def")),
            Ok(TestResponse::new(&["D"], "ghi")),
            Ok(TestResponse::new(&["E", "F"], "")),
        ]
    }

    #[tokio::test]
    async fn items_across_pages() {
        let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
        let mut paginator = paginator(&server);
        assert_eq!(paginator.page_token(), "abc");

        let mut items = Vec::new();
        while let Some(item) = paginator.next_item().await {
            items.push(item.unwrap());
        }
        assert_eq!(items, ["A", "B", "C", "D", "E", "F"]);
        assert_eq!(server.fetches(), 4);
        assert_eq!(paginator.page_token(), "");

        // Exhausted for good: no further items: no further fetches.
        assert!(paginator.next_item().await.is_none());
        assert!(paginator.next_page().await.is_none());
        assert_eq!(server.fetches(), 4);
    }

    #[tokio::test]
    async fn pages_in_order() {
        let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
        let mut paginator = paginator(&server);

        let mut tokens = Vec::new();
        let mut total_items = 0;
        while let Some(page) = paginator.next_page().await {
            let page = page.unwrap();
            tokens.push(page.next_page_token());
            total_items += page.items().len();
        }
        assert_eq!(tokens, ["abc", "def", "ghi", ""]);
        assert_eq!(total_items, 6);
        assert_eq!(server.fetches(), 4);
    }

    #[tokio::test]
    async fn no_read_ahead() {
        let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
        let mut paginator = paginator(&server);

        // Consuming all of page 1 must not fetch page 2.
        for _ in 0..3 {
            paginator.next_item().await.unwrap().unwrap();
        }
        assert_eq!(server.fetches(), 1);

        // The next item crosses pages 2 (empty) and 3.
        let item = paginator.next_item().await.unwrap().unwrap();
        assert_eq!(item, "D");
        assert_eq!(server.fetches(), 3);
    }

    #[tokio::test]
    async fn views_share_one_cursor() {
        let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
        let mut paginator = paginator(&server);

        // Take one item from page 1 through the item view.
        let item = paginator.next_item().await.unwrap().unwrap();
        assert_eq!(item, "A");

        // The page view does not see page 1 again; it advances to page 2.
        let page = paginator.next_page().await.unwrap().unwrap();
        assert_eq!(page.next_page_token(), "def");

        // And the item view resumes after everything already consumed. The
        // rest of page 1 was handed to the item view before the page view
        // advanced, so "B" and "C" are still pending; page 2 is empty.
        let mut rest = Vec::new();
        while let Some(item) = paginator.next_item().await {
            rest.push(item.unwrap());
        }
        assert_eq!(rest, ["B", "C", "D", "E", "F"]);
    }

    #[tokio::test]
    async fn empty_page_continues() {
        let server = Server::new(
            vec![
                Ok(TestResponse::new(&[], "t1")),
                Ok(TestResponse::new(&[], "t2")),
                Ok(TestResponse::new(&["solo"], "")),
            ],
            &["", "t1", "t2"],
        );
        let mut paginator = paginator(&server);

        let item = paginator.next_item().await.unwrap().unwrap();
        assert_eq!(item, "solo");
        assert!(paginator.next_item().await.is_none());
        assert_eq!(server.fetches(), 3);
    }

    #[tokio::test]
    async fn fetch_error_is_retryable() {
        let server = Server::new(
            vec![
                Ok(TestResponse::new(&["A"], "p2")),
                Ok(TestResponse::new(&["B"], "p3")),
                Err("unavailable".to_string()),
                Ok(TestResponse::new(&["C"], "")),
            ],
            &["", "p2", "p3", "p3"],
        );
        let mut paginator = paginator(&server);

        assert_eq!(paginator.next_item().await.unwrap().unwrap(), "A");
        assert_eq!(paginator.next_item().await.unwrap().unwrap(), "B");

        // The fetch for page 3 fails; the paginator stays on page 2.
        let err = paginator.next_item().await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "unavailable");
        assert_eq!(paginator.page_token(), "p3");

        // Retrying the same advancement reissues the same request.
        assert_eq!(paginator.next_item().await.unwrap().unwrap(), "C");
        assert!(paginator.next_item().await.is_none());
    }

    #[tokio::test]
    async fn single_page() {
        let server = Server::new(vec![Ok(TestResponse::new(&["only"], ""))], &[""]);
        let mut paginator = paginator(&server);
        assert_eq!(paginator.page_token(), "");

        assert_eq!(paginator.next_item().await.unwrap().unwrap(), "only");
        assert!(paginator.next_item().await.is_none());
        assert_eq!(server.fetches(), 1);
    }

    // `Result<Paginator, E>` must support `unwrap_err()` and friends even
    // though the fetch closure is opaque.
    #[tokio::test]
    async fn debug_format() {
        let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
        let paginator = paginator(&server);
        let got = format!("{paginator:?}");
        assert!(got.contains("Paginator"), "{got}");
        assert!(got.contains("abc"), "{got}");
    }

    #[tokio::test]
    async fn request_fields_are_preserved() {
        let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
        let request = TestRequest {
            filter: "open=true".to_string(),
            ..Default::default()
        };
        let first = server.fetch(request.clone()).unwrap();
        let remote = server.clone();
        let mut paginator = Paginator::new(request, first, move |request: TestRequest| {
            let remote = remote.clone();
            async move {
                assert_eq!(request.filter, "open=true");
                remote.fetch(request)
            }
        });
        let mut count = 0;
        while let Some(item) = paginator.next_item().await {
            item.unwrap();
            count += 1;
        }
        assert_eq!(count, 6);
    }

    #[cfg(feature = "unstable-stream")]
    mod stream {
        use super::*;
        use futures::StreamExt;

        #[tokio::test]
        async fn page_stream() {
            let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
            let tokens: Vec<_> = paginator(&server)
                .into_pages()
                .map(|page| page.unwrap().next_page_token())
                .collect()
                .await;
            assert_eq!(tokens, ["abc", "def", "ghi", ""]);
        }

        #[tokio::test]
        async fn item_stream() {
            let server = Server::new(canned(), &["", "abc", "def", "ghi"]);
            let items: Vec<_> = paginator(&server)
                .into_items()
                .map(|item| item.unwrap())
                .collect()
                .await;
            assert_eq!(items, ["A", "B", "C", "D", "E", "F"]);
        }
    }
}
