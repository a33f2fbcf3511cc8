//! Window geometry: default sizes, centering, fit checks.

use ratatui::layout::Rect;

use crate::error::{DialogError, Result};

/// Rows and columns taken by a window border.
pub const BORDER: usize = 2;

/// Default widget width: half the screen.
pub fn default_width(screen: Rect) -> usize {
    usize::from(screen.width / 2)
}

/// Default number of search suggestions for a screen.
pub fn default_search_limit(screen: Rect) -> usize {
    usize::from(screen.height / 2).saturating_sub(3).max(1)
}

/// Fail with `TerminalTooSmall` unless `height` x `width` fits on `screen`.
pub fn ensure_fits(screen: Rect, height: usize, width: usize) -> Result<(u16, u16)> {
    let too_small = || DialogError::TerminalTooSmall {
        needed_width: clamp_u16(width),
        needed_height: clamp_u16(height),
        width: screen.width,
        height: screen.height,
    };
    let height = u16::try_from(height).map_err(|_| too_small())?;
    let width = u16::try_from(width).map_err(|_| too_small())?;
    if height > screen.height || width > screen.width {
        return Err(too_small());
    }
    Ok((height, width))
}

/// A `height` x `width` rectangle centered on `screen`.
pub fn centered(screen: Rect, height: usize, width: usize) -> Result<Rect> {
    let (height, width) = ensure_fits(screen, height, width)?;
    Ok(Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    ))
}

/// A centered bordered window with `inner_height` usable rows.
pub fn window(screen: Rect, inner_height: usize, width: usize) -> Result<Rect> {
    centered(screen, inner_height.saturating_add(BORDER), width)
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect { x: 0, y: 0, width: 80, height: 24 };

    #[test]
    fn default_width_is_half_the_screen() {
        assert_eq!(default_width(SCREEN), 40);
    }

    #[test]
    fn default_search_limit_follows_screen_height() {
        assert_eq!(default_search_limit(SCREEN), 9);
        assert_eq!(default_search_limit(Rect::new(0, 0, 80, 4)), 1);
    }

    #[test]
    fn centered_window_is_in_the_middle() {
        assert_eq!(centered(SCREEN, 10, 40).unwrap(), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn window_adds_border_rows() {
        assert_eq!(window(SCREEN, 3, 40).unwrap().height, 5);
    }

    #[test]
    fn huge_inner_height_is_too_small_not_overflow() {
        assert!(matches!(
            window(SCREEN, usize::MAX, 40),
            Err(DialogError::TerminalTooSmall { needed_height: u16::MAX, .. })
        ));
    }

    #[test]
    fn exact_fit_is_allowed() {
        assert_eq!(centered(SCREEN, 24, 80).unwrap(), SCREEN);
    }

    #[test]
    fn oversized_window_is_too_small_error() {
        match centered(SCREEN, 30, 40) {
            Err(DialogError::TerminalTooSmall {
                needed_width,
                needed_height,
                width,
                height,
            }) => {
                assert_eq!((needed_width, needed_height), (40, 30));
                assert_eq!((width, height), (80, 24));
            }
            other => panic!("Expected TerminalTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn absurd_sizes_do_not_overflow() {
        assert!(matches!(
            ensure_fits(SCREEN, 1, usize::MAX),
            Err(DialogError::TerminalTooSmall { needed_width: u16::MAX, .. })
        ));
    }
}
