use std::ops::Range;
use tracing::debug;

/// Menu rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Text under the page buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// No rows at all ("No items found").
    Empty,
    /// "Page `current` of `total`".
    Page { current: usize, total: usize },
}

/// 1-based page cursor over a list of `item_count` rows.
///
/// The current page always stays within `1..=page_count()`, or at 1 when
/// there are no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    item_count: usize,
    current: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A page size of zero is treated as one.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            item_count,
            current: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// Step back one page; `false` when already on the first.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current -= 1;
        debug!(page = self.current, "menu page back");
        true
    }

    /// Step forward one page; `false` when already on the last.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        debug!(page = self.current, "menu page forward");
        true
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.page_count().max(1));
    }

    /// Replace the row count, keeping the current page in range.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.go_to(self.current);
    }

    /// Row indices on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.current - 1)
            .saturating_mul(self.page_size)
            .min(self.item_count);
        let end = start.saturating_add(self.page_size).min(self.item_count);
        start..end
    }

    /// The current page of `items`.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    pub fn label(&self) -> PageLabel {
        if self.is_empty() {
            PageLabel::Empty
        } else {
            PageLabel::Page {
                current: self.current,
                total: self.page_count(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_menu_has_no_pages() {
        let mut pages = Paginator::new(0, DEFAULT_PAGE_SIZE);
        assert_eq!(pages.page_count(), 0);
        assert_eq!(pages.current(), 1);
        assert!(!pages.has_prev());
        assert!(!pages.has_next());
        assert!(!pages.next());
        assert!(!pages.prev());
        assert_eq!(pages.range(), 0..0);
        assert_eq!(pages.label(), PageLabel::Empty);
    }

    #[test]
    fn exact_multiple_fills_every_page() {
        let items: Vec<u32> = (0..8).collect();
        let mut pages = Paginator::new(items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(pages.page_count(), 2);
        assert_eq!(pages.page_of(&items), &[0, 1, 2, 3]);
        assert!(pages.next());
        assert_eq!(pages.page_of(&items), &[4, 5, 6, 7]);
        assert!(!pages.has_next());
        assert_eq!(pages.label(), PageLabel::Page { current: 2, total: 2 });
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<u32> = (0..9).collect();
        let mut pages = Paginator::new(items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(pages.page_count(), 3);
        assert!(pages.next());
        assert!(pages.next());
        assert!(!pages.next());
        assert_eq!(pages.current(), 3);
        assert_eq!(pages.page_of(&items), &[8]);

        assert!(pages.prev());
        assert_eq!(pages.current(), 2);
        assert!(pages.has_prev());
        assert!(pages.has_next());
    }

    #[test]
    fn jumps_and_shrinking_lists_clamp_to_last_page() {
        let mut pages = Paginator::new(10, DEFAULT_PAGE_SIZE);
        pages.go_to(99);
        assert_eq!(pages.current(), 3);
        pages.go_to(0);
        assert_eq!(pages.current(), 1);

        pages.go_to(3);
        pages.set_item_count(5);
        assert_eq!(pages.current(), 2);
        pages.set_item_count(0);
        assert_eq!(pages.current(), 1);
        assert_eq!(pages.label(), PageLabel::Empty);
    }

    #[test]
    fn zero_page_size_is_one() {
        let pages = Paginator::new(3, 0);
        assert_eq!(pages.page_size(), 1);
        assert_eq!(pages.page_count(), 3);
    }

    #[test]
    fn short_slice_does_not_overrun() {
        let items = [1, 2];
        let mut pages = Paginator::new(6, DEFAULT_PAGE_SIZE);
        assert!(pages.next());
        assert!(pages.page_of(&items).is_empty());
    }

    proptest! {
        #[test]
        fn page_stays_in_range(
            count in 0usize..40,
            size in 1usize..6,
            moves in prop::collection::vec(any::<bool>(), 0..30)
        ) {
            let mut pages = Paginator::new(count, size);
            for forward in moves {
                if forward {
                    pages.next();
                } else {
                    pages.prev();
                }
                prop_assert!(pages.current() >= 1);
                prop_assert!(pages.current() <= pages.page_count().max(1));
                prop_assert!(pages.range().len() <= size);
                prop_assert!(pages.range().end <= count);
            }
        }
    }
}
