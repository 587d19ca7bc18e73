//! Page request normalization

use super::query::Window;

/// A 1-based page request with its size clamped into `1..=MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: i64 = 10;
    pub const MAX_PAGE_SIZE: i64 = 100;

    /// Normalize raw values.
    ///
    /// A page below 1 becomes 1. A missing or non-positive size becomes
    /// [`Self::DEFAULT_PAGE_SIZE`]; a size above [`Self::MAX_PAGE_SIZE`] is
    /// clamped to it.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let page_size = match page_size {
            Some(size) if size >= 1 => size.min(Self::MAX_PAGE_SIZE),
            _ => Self::DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows skipped before this page
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Store window covering this page
    pub fn window(&self) -> Window {
        Window::new(self.offset(), Some(self.page_size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
