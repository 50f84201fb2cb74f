//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A clamped request for a page of results.
///
/// Out-of-range inputs are never rejected: a non-positive page becomes the
/// first page, a non-positive size becomes [`PageRequest::DEFAULT_SIZE`], and
/// sizes above [`PageRequest::MAX_SIZE`] are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed, always >= 1).
    pub page: u32,
    /// The number of items per page (always in `1..=MAX_SIZE`).
    pub size: u32,
}

impl PageRequest {
    /// The page size used when the caller asks for zero or fewer items.
    pub const DEFAULT_SIZE: u32 = 10;
    /// The maximum allowed page size.
    pub const MAX_SIZE: u32 = 100;

    /// Creates a page request, clamping both inputs.
    #[must_use]
    pub fn new(page: i32, size: i32) -> Self {
        let page = u32::try_from(page).ok().filter(|p| *p > 0).unwrap_or(1);
        let size = match size {
            s if s <= 0 => Self::DEFAULT_SIZE,
            s => u32::try_from(s).map_or(Self::MAX_SIZE, |s| s.min(Self::MAX_SIZE)),
        };
        Self { page, size }
    }

    /// Returns the first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self {
            page: 1,
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.size as u64
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size as u64
    }

    /// Returns the `(offset, limit)` window.
    #[must_use]
    pub const fn window(&self) -> (u64, u64) {
        (self.offset(), self.limit())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page of results together with the unfiltered total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// The total number of items across all pages.
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, total_elements: u64) -> Self {
        Self {
            content,
            total_elements,
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_window() {
        let req = PageRequest::new(3, 10);
        assert_eq!(req.window(), (20, 10));
    }

    #[test]
    fn test_non_positive_page_is_first_page() {
        for page in [0, -1, i32::MIN] {
            let req = PageRequest::new(page, 25);
            assert_eq!(req.page, 1);
            assert_eq!(req.offset(), 0);
        }
    }

    #[test]
    fn test_non_positive_size_uses_default() {
        for size in [0, -5, i32::MIN] {
            let req = PageRequest::new(2, size);
            assert_eq!(req.size, PageRequest::DEFAULT_SIZE);
            assert_eq!(req.window(), (10, 10));
        }
    }

    #[test]
    fn test_size_above_max_is_capped() {
        let req = PageRequest::new(1, 1000);
        assert_eq!(req.size, PageRequest::MAX_SIZE);

        let req = PageRequest::new(2, i32::MAX);
        assert_eq!(req.window(), (100, 100));
    }

    #[test]
    fn test_size_at_bounds_is_kept() {
        assert_eq!(PageRequest::new(1, 1).size, 1);
        assert_eq!(PageRequest::new(1, 100).size, 100);
    }

    #[test]
    fn test_offset_does_not_overflow_for_large_pages() {
        let req = PageRequest::new(i32::MAX, 100);
        assert_eq!(req.offset(), (i32::MAX as u64 - 1) * 100);
    }

    #[test]
    fn test_page_request_default() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.window(), (0, 10));
    }

    #[test]
    fn test_page_map() {
        let page = Page::new(vec![1, 2, 3], 7);
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.content, vec![2, 4, 6]);
        assert_eq!(mapped.total_elements, 7);
    }

    #[test]
    fn test_page_empty() {
        let page: Page<i32> = Page::empty();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.total_elements, 0);
    }
}
