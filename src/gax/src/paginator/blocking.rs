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

use super::{Cursor, PageableRequest, PageableResponse, Step};

/// Iterates a token-paged list RPC without an async runtime.
///
/// Behaves exactly like [Paginator][super::Paginator] except that page
/// fetches block the calling thread. The [pages][Paginator::pages] and
/// [items][Paginator::items] adapters let the paginator drive a `for` loop.
///
/// # Example
/// ```
/// # use billing_gax::paginator::{PageableRequest, PageableResponse};
/// # use billing_gax::paginator::blocking::Paginator;
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
/// # fn fetch(_r: ListRequest) -> Result<ListResponse, Box<dyn std::error::Error>> {
/// #     Ok(ListResponse::default())
/// # }
/// let request = ListRequest::default();
/// let first = fetch(request.clone())?;
/// let mut paginator = Paginator::new(request, first, fetch);
/// for item in paginator.items() {
///     let item = item?;
///     // ... use the item ...
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Paginator<Req, Resp, E>
where
    Resp: PageableResponse,
{
    cursor: Cursor<Req, Resp>,
    items: std::vec::IntoIter<Resp::PageItem>,
    fetch: Box<dyn FnMut(Req) -> Result<Resp, E>>,
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
    pub fn new<F>(request: Req, first_page: Resp, fetch: F) -> Self
    where
        F: FnMut(Req) -> Result<Resp, E> + 'static,
    {
        Self {
            cursor: Cursor::new(request, first_page),
            items: Vec::new().into_iter(),
            fetch: Box::new(fetch),
        }
    }

    /// The continuation token of the most recently fetched page.
    pub fn page_token(&self) -> &str {
        self.cursor.page_token()
    }

    /// Returns the next page, fetching it if needed.
    pub fn next_page(&mut self) -> Option<Result<Resp, E>> {
        loop {
            match self.cursor.step() {
                Step::Yield(page) => return Some(Ok(page)),
                Step::Done => return None,
                Step::Fetch(request) => {
                    tracing::debug!(page_token = self.cursor.page_token(), "fetching next page");
                    match (self.fetch)(request) {
                        Ok(page) => self.cursor.complete(page),
                        Err(e) => return Some(Err(e)),
                    }
                }
            }
        }
    }

    /// Returns the next item, fetching the next page if needed.
    pub fn next_item(&mut self) -> Option<Result<Resp::PageItem, E>> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(Ok(item));
            }
            match self.next_page()? {
                Ok(page) => self.items = page.items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// An iterator over the remaining pages.
    pub fn pages(&mut self) -> Pages<'_, Req, Resp, E> {
        Pages(self)
    }

    /// An iterator over the remaining items.
    pub fn items(&mut self) -> Items<'_, Req, Resp, E> {
        Items(self)
    }
}

/// An iterator over pages, created by [Paginator::pages].
///
/// Borrows the paginator, so iteration can be abandoned and resumed, or mixed
/// with [Paginator::items], without losing the position.
pub struct Pages<'a, Req, Resp, E>(&'a mut Paginator<Req, Resp, E>)
where
    Resp: PageableResponse;

impl<Req, Resp, E> Iterator for Pages<'_, Req, Resp, E>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse,
{
    type Item = Result<Resp, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_page()
    }
}

/// An iterator over items, created by [Paginator::items].
pub struct Items<'a, Req, Resp, E>(&'a mut Paginator<Req, Resp, E>)
where
    Resp: PageableResponse;

impl<Req, Resp, E> Iterator for Items<'_, Req, Resp, E>
where
    Req: PageableRequest + Clone,
    Resp: PageableResponse,
{
    type Item = Result<Resp::PageItem, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_item()
    }
}
