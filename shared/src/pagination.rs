//! Page window arithmetic for the numbered pager.

/// Page sizes offered by the items-per-page selector.
pub const ITEMS_PER_PAGE_OPTIONS: [u32; 4] = [12, 24, 36, 48];

/// Page size of a category listing when the URL does not name one.
pub const DEFAULT_CATEGORY_PAGE_SIZE: u32 = 12;

/// Pages shown on each side of the current one.
const WINDOW: u32 = 2;

/// One position in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number, 1-based.
    Page(u32),
    /// A collapsed run of pages.
    Ellipsis,
}

/// Slots for a pager at `page` of `total`: first and last page, the window
/// around the current page, and one ellipsis per gap.
pub fn page_slots(page: u32, total: u32) -> Vec<PageSlot> {
    let mut slots = Vec::new();
    for i in 1..=total {
        let in_window = i + WINDOW >= page && i <= page.saturating_add(WINDOW);
        if i == 1 || i == total || in_window {
            slots.push(PageSlot::Page(i));
        } else if slots.last() != Some(&PageSlot::Ellipsis) {
            slots.push(PageSlot::Ellipsis);
        }
    }
    slots
}

/// Number of pages needed for `len` items, never less than one.
pub fn total_pages(len: usize, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    let pages = len.div_ceil(per_page as usize);
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Keep a requested page inside `1..=total`.
pub fn clamp_page(page: u32, total: u32) -> u32 {
    page.clamp(1, total.max(1))
}

/// Page size from a URL parameter, falling back when it is not one of the
/// offered options.
pub fn page_size_or_default(requested: Option<u32>) -> u32 {
    requested
        .filter(|size| ITEMS_PER_PAGE_OPTIONS.contains(size))
        .unwrap_or(DEFAULT_CATEGORY_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Ellipsis, Page};

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(page_slots(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_slots(3, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn long_ranges_collapse_both_sides() {
        assert_eq!(
            page_slots(10, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn window_at_the_edges() {
        assert_eq!(
            page_slots(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_slots(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn unknown_page_sizes_fall_back() {
        assert_eq!(page_size_or_default(Some(24)), 24);
        assert_eq!(page_size_or_default(Some(7)), DEFAULT_CATEGORY_PAGE_SIZE);
        assert_eq!(page_size_or_default(None), DEFAULT_CATEGORY_PAGE_SIZE);
    }
}
