//! Rendering of prompt frames.

mod prompt_view;

use std::ops::Range;

pub use prompt_view::{OVERFLOW_HINT, PromptView};

/// Rows around the item window: header, overflow hint and error line.
const CHROME_ROWS: u16 = 3;

/// Visible slice of a list of `len` items that keeps `active` on screen.
///
/// The window is centered on `active` where possible and clamped to the
/// list ends.
pub fn page_window(len: usize, active: usize, page_size: usize) -> Range<usize> {
    if len <= page_size {
        return 0..len;
    }
    let start = active.saturating_sub(page_size / 2).min(len - page_size);
    start..start + page_size
}

/// Terminal rows needed to draw a prompt with `len` items.
pub fn frame_height(len: usize, page_size: usize) -> u16 {
    let rows = u16::try_from(len.min(page_size)).unwrap_or(u16::MAX);
    rows.saturating_add(CHROME_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_fits() {
        assert_eq!(page_window(3, 2, 7), 0..3);
        assert_eq!(page_window(7, 6, 7), 0..7);
    }

    #[test]
    fn test_page_window_keeps_active_visible() {
        for active in 0..20 {
            let window = page_window(20, active, 7);
            assert_eq!(window.len(), 7);
            assert!(window.contains(&active));
        }
    }

    #[test]
    fn test_page_window_clamps() {
        assert_eq!(page_window(20, 0, 7), 0..7);
        assert_eq!(page_window(20, 10, 7), 7..14);
        assert_eq!(page_window(20, 19, 7), 13..20);
    }

    #[test]
    fn test_frame_height() {
        assert_eq!(frame_height(3, 7), 6);
        assert_eq!(frame_height(30, 7), 10);
    }
}
