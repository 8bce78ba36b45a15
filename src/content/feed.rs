//! Listing queries and pagination.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::error::ApiError;
use crate::net::api::{ContentApi, CountQuery, PostQuery};
use crate::net::types::Post;

pub const HOME_PAGE_SIZE: u32 = 6;
/// Tag and search listings fetch one page this large.
pub const LISTING_LIMIT: u32 = 50;
pub const ADMIN_LIMIT: u32 = 100;

/// Position in a paged listing. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_items: u64,
    pub page_size: u32,
}

impl Pager {
    #[must_use]
    pub fn new(page: u32, total_items: u64, page_size: u32) -> Self {
        Self { page: page.max(1), total_items, page_size: page_size.max(1) }
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Controls are hidden for a single page.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    #[must_use]
    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    #[must_use]
    pub fn next(&self) -> u32 {
        self.page.saturating_add(1).min(self.total_pages().max(1))
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}

/// Page 1 features its newest post above the grid; later pages do not.
#[must_use]
pub fn split_featured(page: u32, posts: Vec<Post>) -> (Option<Post>, Vec<Post>) {
    if page != 1 || posts.is_empty() {
        return (None, posts);
    }
    let mut rest = posts;
    let featured = rest.remove(0);
    (Some(featured), rest)
}

/// One page of the home feed plus the total published count.
///
/// # Errors
///
/// Returns the first backend error.
pub async fn load_home<C: ContentApi>(api: &C, page: u32) -> Result<(Vec<Post>, Pager), ApiError> {
    let posts = api.list_posts(&PostQuery::page(page.max(1), HOME_PAGE_SIZE)).await?;
    let total = api.count_posts(&CountQuery::default()).await?;
    Ok((posts, Pager::new(page, total, HOME_PAGE_SIZE)))
}

/// Posts carrying `tag`.
///
/// # Errors
///
/// Returns the backend error.
pub async fn load_tagged<C: ContentApi>(api: &C, tag: &str) -> Result<Vec<Post>, ApiError> {
    api.list_posts(&PostQuery::tagged(tag, LISTING_LIMIT)).await
}

/// Full-text search. A blank term returns nothing without a request.
///
/// # Errors
///
/// Returns the backend error.
pub async fn search<C: ContentApi>(api: &C, term: &str) -> Result<Vec<Post>, ApiError> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }
    api.list_posts(&PostQuery::search(term, LISTING_LIMIT)).await
}

/// `n post(s) tagged`, as shown above a tag listing.
#[must_use]
pub fn tagged_summary(count: usize) -> String {
    format!("{count} {} tagged", super::display::pluralize(count, "post", "posts"))
}

/// `n result(s) for "q"`, as shown above search results.
#[must_use]
pub fn search_summary(count: usize, term: &str) -> String {
    format!("{count} {} for \"{term}\"", super::display::pluralize(count, "result", "results"))
}
