/// First row to draw so that `selected` stays inside a window of `visible` rows.
pub const fn scroll_offset(total_rows: usize, visible: usize, selected: usize) -> usize {
    if visible == 0 || total_rows <= visible || selected < visible {
        return 0;
    }
    let offset = selected + 1 - visible;
    let max_offset = total_rows - visible;
    if offset > max_offset {
        max_offset
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_never_scroll() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn selection_past_the_window_scrolls_it() {
        assert_eq!(scroll_offset(30, 10, 9), 0);
        assert_eq!(scroll_offset(30, 10, 10), 1);
        assert_eq!(scroll_offset(30, 10, 29), 20);
    }
}
