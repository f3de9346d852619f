//! Pagination arithmetic for the catalog's page bar.

use std::ops::RangeInclusive;

/// Maximum number of numbered page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Page numbers to render as buttons, centered on `current` where possible.
///
/// The window holds `min(PAGE_WINDOW, total_pages)` contiguous pages, all
/// within `1..=total_pages`. Near either end it clamps instead of shrinking.
pub fn page_window(current: u32, total_pages: u32) -> RangeInclusive<u32> {
    let size = PAGE_WINDOW.min(total_pages);
    if size == 0 {
        return 1..=0;
    }

    let total = i64::from(total_pages);
    let centered = i64::from(current) - 2;
    let start = centered.min(total - i64::from(PAGE_WINDOW - 1)).max(1) as u32;
    let end = (start + size - 1).min(total_pages);
    start..=end
}

/// Whether there is a page before `current`.
pub fn has_previous(current: u32) -> bool {
    current > 1
}

/// Whether there is a page after `current`.
pub fn has_next(current: u32, total_pages: u32) -> bool {
    current < total_pages
}

/// Whether `page` is a page the server can return.
pub fn in_range(page: u32, total_pages: u32) -> bool {
    (1..=total_pages).contains(&page)
}

/// Parse "go to page" input. Returns `None` for anything that is not an
/// integer within `1..=total_pages`.
pub fn parse_page_input(input: &str, total_pages: u32) -> Option<u32> {
    let page = input.trim().parse::<u32>().ok()?;
    in_range(page, total_pages).then_some(page)
}

/// First and last item shown on `page`, 1-based: `(X, Y)` in
/// "Showing X-Y of total". A page that starts past `total` shows nothing
/// and yields `(0, 0)`.
pub fn shown_range(page: u32, per_page: u32, total: u64) -> (u64, u64) {
    let page = u64::from(page.max(1));
    let per_page = u64::from(per_page);
    let first = (page - 1) * per_page + 1;
    let last = (page * per_page).min(total);
    if first > last {
        return (0, 0);
    }
    (first, last)
}

/// "Showing X-Y of N games".
pub fn summary_text(page: u32, per_page: u32, total: u64) -> String {
    let (first, last) = shown_range(page, per_page, total);
    format!("Showing {first}-{last} of {total} games")
}

/// "Page X of Y".
pub fn page_info_text(page: u32, total_pages: u32) -> String {
    format!("Page {page} of {total_pages}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: u32, total: u32) -> Vec<u32> {
        page_window(current, total).collect()
    }

    #[test]
    fn window_centers_on_current() {
        assert_eq!(window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(window(3, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_clamps_at_edges() {
        assert_eq!(window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_with_few_pages() {
        assert_eq!(window(1, 0), Vec::<u32>::new());
        assert_eq!(window(1, 1), vec![1]);
        assert_eq!(window(2, 3), vec![1, 2, 3]);
        assert_eq!(window(3, 3), vec![1, 2, 3]);
    }

    #[test]
    fn window_invariants_hold_everywhere() {
        for total in 0..=30u32 {
            for current in 1..=total.max(1) {
                let pages = window(current, total);
                assert_eq!(pages.len() as u32, PAGE_WINDOW.min(total));
                assert!(pages.iter().all(|p| (1..=total).contains(p)));
                assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
                if total > 0 {
                    assert!(pages.contains(&current));
                }
            }
        }
    }

    #[test]
    fn previous_and_next_availability() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 3));
        assert!(!has_next(3, 3));
        assert!(!has_next(1, 1));
    }

    #[test]
    fn page_input_parsing() {
        assert_eq!(parse_page_input("2", 3), Some(2));
        assert_eq!(parse_page_input(" 3 ", 3), Some(3));
        assert_eq!(parse_page_input("abc", 3), None);
        assert_eq!(parse_page_input("", 3), None);
        assert_eq!(parse_page_input("0", 3), None);
        assert_eq!(parse_page_input("4", 3), None);
        assert_eq!(parse_page_input("-1", 3), None);
    }

    #[test]
    fn summary_for_partial_last_page() {
        assert_eq!(summary_text(1, 20, 45), "Showing 1-20 of 45 games");
        assert_eq!(summary_text(2, 20, 45), "Showing 21-40 of 45 games");
        assert_eq!(summary_text(3, 20, 45), "Showing 41-45 of 45 games");
        assert_eq!(page_info_text(3, 3), "Page 3 of 3");
    }

    #[test]
    fn range_past_the_end_is_empty() {
        assert_eq!(shown_range(4, 20, 45), (0, 0));
        assert_eq!(shown_range(u32::MAX, 100, 10), (0, 0));
        assert_eq!(shown_range(1, 20, 0), (0, 0));
        assert_eq!(summary_text(999, 20, 45), "Showing 0-0 of 45 games");
    }
}
