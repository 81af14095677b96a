//! Menu screen rendering.
//!
//! Draws a [`MenuScreen`]: centered title, optional back chevron, and one
//! row per entry. Section spacers render as plain left-aligned labels;
//! selectable rows get a background, an icon badge, and (for toggle rows)
//! an on/off switch at the right edge.
//!
//! The selection cursor lives in the main loop (it is an input concern,
//! not navigation state); this module only draws whatever index it is
//! given. Long menus scroll so the selected row stays visible.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BLACK, GRAY, GREEN, ORANGE, SELECTION_BLUE, WHITE};
use crate::config::{CENTER_X, MENU_INSET, MENU_ROW_HEIGHT, MENU_TOP, SCREEN_WIDTH, STATUS_BAR_HEIGHT, VISIBLE_ROWS};
use crate::menu::{EntryAction, MenuEntry, MenuScreen};
use crate::styles::{CENTERED, LABEL_FONT, LEFT_ALIGNED, ROW_FONT, TITLE_STYLE_WHITE};

// =============================================================================
// Layout Constants
// =============================================================================

/// Title baseline below the status bar.
const TITLE_POS: Point = Point::new(CENTER_X, (STATUS_BAR_HEIGHT + 18) as i32);

/// Back chevron position (drawn only when the history is non-empty).
const BACK_POS: Point = Point::new(6, (STATUS_BAR_HEIGHT + 16) as i32);

/// Width of a menu row.
const ROW_WIDTH: u32 = SCREEN_WIDTH - 2 * MENU_INSET;

/// Horizontal offset of the icon badge inside a row.
const ICON_X: i32 = (MENU_INSET + 6) as i32;

/// Horizontal offset of the label inside a row.
const LABEL_X: i32 = (MENU_INSET + 34) as i32;

/// Switch dimensions for toggle rows.
const SWITCH_SIZE: Size = Size::new(26, 12);

/// First visible row index so `selected` stays on screen.
///
/// Keeps the window anchored at the top until the cursor walks past the
/// last visible row, then follows it.
pub fn scroll_for(selected: usize, total: usize) -> usize {
    if total <= VISIBLE_ROWS || selected < VISIBLE_ROWS {
        0
    } else {
        (selected + 1 - VISIBLE_ROWS).min(total - VISIBLE_ROWS)
    }
}

/// Draw a full menu screen with the cursor on `selected`.
pub fn draw_menu(display: &mut SimulatorDisplay<Rgb565>, menu: &MenuScreen, selected: usize) {
    Text::with_text_style(&menu.title, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    if menu.show_back {
        Text::with_text_style("<", BACK_POS, MonoTextStyle::new(ROW_FONT, GRAY), LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    let scroll = scroll_for(selected, menu.entries.len());
    for (row, entry) in menu.entries.iter().enumerate().skip(scroll).take(VISIBLE_ROWS) {
        let y = MENU_TOP as i32 + ((row - scroll) as u32 * MENU_ROW_HEIGHT) as i32;
        draw_row(display, entry, y, row == selected);
    }
}

fn draw_row(display: &mut SimulatorDisplay<Rgb565>, entry: &MenuEntry, y: i32, selected: bool) {
    let baseline = y + (MENU_ROW_HEIGHT as i32 / 2) + 5;

    if !entry.is_selectable() {
        // Section spacer: no background, accent color when set.
        let color = entry.emphasis.unwrap_or(GRAY);
        Text::with_text_style(
            &entry.label,
            Point::new(MENU_INSET as i32, baseline),
            MonoTextStyle::new(LABEL_FONT, color),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
        return;
    }

    // Row background: emphasis wins over the selection fill so destructive
    // entries stay red even under the cursor; the cursor is the border.
    let fill = entry
        .emphasis
        .unwrap_or(if selected { SELECTION_BLUE } else { BLACK });
    let row_rect = Rectangle::new(Point::new(MENU_INSET as i32, y), Size::new(ROW_WIDTH, MENU_ROW_HEIGHT - 2));
    row_rect.into_styled(PrimitiveStyle::with_fill(fill)).draw(display).ok();
    if selected {
        row_rect
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
            .draw(display)
            .ok();
    }

    if let Some(icon) = entry.icon {
        Text::with_text_style(
            icon.badge(),
            Point::new(ICON_X, baseline),
            MonoTextStyle::new(LABEL_FONT, ORANGE),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    Text::with_text_style(
        &entry.label,
        Point::new(LABEL_X, baseline),
        MonoTextStyle::new(ROW_FONT, WHITE),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    if let EntryAction::Toggle { on, .. } = entry.action {
        draw_switch(display, y, on);
    }
}

/// On/off switch at the right edge of a toggle row.
fn draw_switch(display: &mut SimulatorDisplay<Rgb565>, row_y: i32, on: bool) {
    let x = (MENU_INSET + ROW_WIDTH) as i32 - SWITCH_SIZE.width as i32 - 6;
    let y = row_y + ((MENU_ROW_HEIGHT - 2 - SWITCH_SIZE.height) / 2) as i32;
    let track = Rectangle::new(Point::new(x, y), SWITCH_SIZE);

    let track_color = if on { GREEN } else { GRAY };
    track
        .into_styled(PrimitiveStyle::with_fill(track_color))
        .draw(display)
        .ok();

    // Knob sits right when on, left when off.
    let knob_x = if on {
        x + SWITCH_SIZE.width as i32 - 10
    } else {
        x + 2
    };
    Rectangle::new(Point::new(knob_x, y + 2), Size::new(8, SWITCH_SIZE.height - 4))
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_short_menus_anchored() {
        assert_eq!(scroll_for(0, 5), 0);
        assert_eq!(scroll_for(4, 5), 0, "menus shorter than the window never scroll");
    }

    #[test]
    fn test_scroll_follows_cursor_past_window() {
        let total = VISIBLE_ROWS + 4;
        assert_eq!(scroll_for(0, total), 0);
        assert_eq!(scroll_for(VISIBLE_ROWS - 1, total), 0, "last visible row needs no scroll");
        assert_eq!(scroll_for(VISIBLE_ROWS, total), 1, "one past the window scrolls by one");
        assert_eq!(
            scroll_for(total - 1, total),
            4,
            "cursor at the end pins the window to the tail"
        );
    }
}
