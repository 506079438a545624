/// One entry of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Window of page buttons around `current_page` (1-based).
///
/// Up to five pages are listed in full. Past that the first and last pages
/// are always shown, with an ellipsis standing for each hidden run.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= 5 {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let mut tokens = Vec::with_capacity(7);

    if current <= 3 {
        tokens.extend((1..=4).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if current >= total_pages - 2 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((current - 1..=total_pages).map(PageToken::Page));
    } else {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((current - 1..=current + 1).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::PageToken::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_small_totals_list_every_page() {
        for total in 1..=5 {
            for current in 1..=total {
                let expected: Vec<_> = (1..=total).map(Page).collect();
                assert_eq!(page_window(current, total), expected);
            }
        }
    }

    #[test]
    fn test_no_pages() {
        assert!(page_window(1, 0).is_empty());
        assert!(page_window(0, 0).is_empty());
    }

    #[test]
    fn test_start_of_range() {
        let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
        assert_eq!(page_window(1, 10), expected);
        assert_eq!(page_window(3, 10), expected);
    }

    #[test]
    fn test_end_of_range() {
        assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        assert_eq!(
            page_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_middle_of_range() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 10), page_window(1, 10));
        assert_eq!(page_window(42, 10), page_window(10, 10));
    }
}
