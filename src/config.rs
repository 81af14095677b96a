//! Application configuration constants.
//!
//! Layout values like `SCREEN_HEIGHT - STATUS_BAR_HEIGHT` are computed at
//! compile time as `const` and used throughout the drawing code instead of
//! being recalculated per frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (simulated 320x240 LCD).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Status Bar Layout
// =============================================================================

/// Status bar height in pixels. Everything below it is screen content.
pub const STATUS_BAR_HEIGHT: u32 = 22;

/// Height of the content area under the status bar.
pub const CONTENT_HEIGHT: u32 = SCREEN_HEIGHT - STATUS_BAR_HEIGHT;

// =============================================================================
// Menu Layout
// =============================================================================

/// Height of one menu row (button or section spacer).
pub const MENU_ROW_HEIGHT: u32 = 24;

/// Vertical offset of the first menu row below the screen title.
pub const MENU_TOP: u32 = STATUS_BAR_HEIGHT + 28;

/// Horizontal inset of menu rows from both screen edges.
pub const MENU_INSET: u32 = 10;

/// Number of menu rows that fit in the content area.
/// Longer menus scroll so the selected row stays visible.
pub const VISIBLE_ROWS: usize = ((SCREEN_HEIGHT - MENU_TOP) / MENU_ROW_HEIGHT) as usize;

/// Screen center X coordinate, pre-computed as i32 for text anchoring.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// PIN Entry
// =============================================================================

/// Maximum number of digits the PIN buffer accumulates.
pub const MAX_PIN_LEN: usize = 8;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between periodic status-bar refreshes.
pub const STATUS_REFRESH_PERIOD: Duration = Duration::from_secs(30);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_height_fills_screen() {
        assert_eq!(
            STATUS_BAR_HEIGHT + CONTENT_HEIGHT,
            SCREEN_HEIGHT,
            "status bar and content must tile the display exactly"
        );
    }

    #[test]
    fn test_visible_rows_fit() {
        assert!(
            MENU_TOP + VISIBLE_ROWS as u32 * MENU_ROW_HEIGHT <= SCREEN_HEIGHT,
            "visible rows must not extend past the display"
        );
        assert!(VISIBLE_ROWS >= 6, "menu should show at least 6 rows");
    }
}
