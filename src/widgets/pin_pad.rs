//! Lock screen rendering: title, prompt, masked PIN buffer and keypad.
//!
//! The keypad is informational; in the simulator digits come straight
//! from the keyboard, so the grid is drawn without a cursor.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::colors::{GRAY, WHITE};
use crate::config::{CENTER_X, MAX_PIN_LEN, STATUS_BAR_HEIGHT};
use crate::styles::{CENTERED, LABEL_STYLE_GRAY, ROW_FONT, TITLE_STYLE_WHITE};

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_POS: Point = Point::new(CENTER_X, (STATUS_BAR_HEIGHT + 18) as i32);
const PROMPT_POS: Point = Point::new(CENTER_X, (STATUS_BAR_HEIGHT + 38) as i32);
const MASK_POS: Point = Point::new(CENTER_X, (STATUS_BAR_HEIGHT + 60) as i32);

/// Keypad geometry: 3 columns x 4 rows, centered.
const KEY_SIZE: Size = Size::new(44, 26);
const KEY_GAP: i32 = 8;
const PAD_TOP: i32 = (STATUS_BAR_HEIGHT + 74) as i32;
const PAD_LEFT: i32 = CENTER_X - (3 * KEY_SIZE.width as i32 + 2 * KEY_GAP) / 2;

/// Key labels row by row; the bottom row is delete / zero / confirm.
const KEYS: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    ["DEL", "0", "OK"],
];

/// Draw the lock screen with `masked_len` digits entered.
pub fn draw_lock_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    title: &str,
    prompt: &str,
    masked_len: usize,
) {
    Text::with_text_style(title, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(prompt, PROMPT_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();

    let mut mask: String<{ MAX_PIN_LEN }> = String::new();
    for _ in 0..masked_len {
        let _ = write!(mask, "*");
    }
    Text::with_text_style(&mask, MASK_POS, MonoTextStyle::new(ROW_FONT, WHITE), CENTERED)
        .draw(display)
        .ok();

    for (row, keys) in KEYS.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            let x = PAD_LEFT + col as i32 * (KEY_SIZE.width as i32 + KEY_GAP);
            let y = PAD_TOP + row as i32 * (KEY_SIZE.height as i32 + KEY_GAP);
            Rectangle::new(Point::new(x, y), KEY_SIZE)
                .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
                .draw(display)
                .ok();
            Text::with_text_style(
                key,
                Point::new(x + KEY_SIZE.width as i32 / 2, y + 18),
                MonoTextStyle::new(ROW_FONT, WHITE),
                CENTERED,
            )
            .draw(display)
            .ok();
        }
    }
}
