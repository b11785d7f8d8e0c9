use serde::Serialize;

/// Rows requested per page unless the operator overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page numbers worth showing around the current position, with `None`
/// standing in for an elided run (rendered as an ellipsis).
///
/// Keeps the first and last pages reachable while windowing around the
/// current one, so a 58-page result does not produce 58 entries.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl PageWindow {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.clamp(1, total_pages.max(1));

        Self {
            pages: window(current_page, total_pages),
            page: current_page,
        }
    }
}

const EDGE: usize = 2;
const AROUND: usize = 2;

fn window(current: usize, total: usize) -> Vec<Option<usize>> {
    if total == 0 {
        return Vec::new();
    }

    let near_start = current.saturating_sub(AROUND);
    let near_end = (current + AROUND).min(total);

    let mut pages = Vec::new();
    let mut last_shown = 0;

    for page in 1..=total {
        let shown = page <= EDGE || page > total - EDGE.min(total) || (page >= near_start && page <= near_end);

        if shown {
            if last_shown != 0 && page != last_shown + 1 {
                pages.push(None);
            }
            pages.push(Some(page));
            last_shown = page;
        }
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_small_result_lists_every_page() {
        let window = PageWindow::new(2, 4);
        assert_eq!(
            window.pages,
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_window_elides_far_pages() {
        let window = PageWindow::new(30, 58);
        assert_eq!(
            window.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(28),
                Some(29),
                Some(30),
                Some(31),
                Some(32),
                None,
                Some(57),
                Some(58),
            ]
        );
    }

    #[test]
    fn test_window_clamps_out_of_range_current_page() {
        let window = PageWindow::new(99, 5);
        assert_eq!(window.page, 5);

        let window = PageWindow::new(0, 5);
        assert_eq!(window.page, 1);
    }

    #[test]
    fn test_window_empty_when_no_pages() {
        assert!(PageWindow::new(1, 0).pages.is_empty());
    }
}
