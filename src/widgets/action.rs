//! Generic acknowledgement screen for leaf actions without a dedicated menu.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::config::{CENTER_X, STATUS_BAR_HEIGHT};
use crate::styles::{CENTERED, LABEL_STYLE_GRAY, ROW_STYLE_WHITE, TITLE_STYLE_WHITE};

const TITLE_POS: Point = Point::new(CENTER_X, (STATUS_BAR_HEIGHT + 18) as i32);
const MESSAGE_POS: Point = Point::new(CENTER_X, (STATUS_BAR_HEIGHT + 70) as i32);
const HINT_POS: Point = Point::new(CENTER_X, (STATUS_BAR_HEIGHT + 110) as i32);

/// Draw the action screen: title, echo message and a back hint.
pub fn draw_action_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    title: &str,
    message: &str,
    back_hint: &str,
) {
    Text::with_text_style(title, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(message, MESSAGE_POS, ROW_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(back_hint, HINT_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
}
