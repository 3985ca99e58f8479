//! Paginated Loader
//!
//! Drives any single-page operation until the continuation token runs out.

use crate::aws::types::Page;
use crate::error::Result;
use std::future::Future;

/// Fetch every page of `operation` (auto-paginate)
///
/// The operation is first called with `None`, then with each page's
/// continuation token. Pages are returned in fetch order, the first one
/// included. The first failing call aborts the whole load.
pub async fn load_pages<T, F, Fut>(mut operation: F) -> Result<Vec<Page<T>>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut pages = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = operation(page_token.take()).await?;
        let next = page.continuation().map(str::to_string);
        pages.push(page);

        match next {
            Some(token) => {
                tracing::debug!("Following continuation token (page {})", pages.len() + 1);
                page_token = Some(token);
            }
            None => break,
        }
    }

    Ok(pages)
}

/// Fetch every page of `operation` and keep only the items
pub async fn load_items<T, F, Fut>(operation: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let pages = load_pages(operation).await?;
    Ok(pages.into_iter().flat_map(|page| page.items).collect())
}
