//! Client-side pagination over the loaded post list.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` items. An empty list still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Keep the current page within `1..=page_count(total)`.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.page_count(total));
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page;
        self.clamp(total);
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Index range of the items visible on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_items_in_pages_of_five() {
        let mut pager = Pager::new(5);
        assert_eq!(pager.page_count(12), 3);

        pager.set_page(3, 12);
        assert_eq!(pager.range(12), 10..12);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let pager = Pager::default();
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.range(0), 0..0);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut pager = Pager::new(5);
        pager.set_page(9, 12);
        assert_eq!(pager.page(), 3);
        pager.set_page(0, 12);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_clamp_after_items_removed() {
        let mut pager = Pager::new(5);
        pager.set_page(3, 11);
        pager.clamp(10);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.range(10), 5..10);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pager = Pager::new(5);
        pager.set_page(2, 12);
        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.page(), 1);
    }
}
