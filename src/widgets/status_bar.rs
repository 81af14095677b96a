//! Status bar rendering.
//!
//! Draws one [`StatusSnapshot`] across the top of the display. The bar is
//! passive: it owns no state and is redrawn whenever the controller hands
//! the main loop a fresh snapshot.
//!
//! Field order, left to right: lock marker, active-wallet summary
//! (name, sig type, passphrase marker, net), peripheral indicators,
//! battery gauge, language code.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::colors::{BLACK, GRAY, GREEN, ORANGE, RED, WHITE};
use crate::config::{SCREEN_WIDTH, STATUS_BAR_HEIGHT};
use crate::device::Peripheral;
use crate::status::{BatteryLevel, IndicatorState, StatusSnapshot};
use crate::styles::{LABEL_FONT, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};

// =============================================================================
// Layout Constants (computed at compile time)
// =============================================================================

/// Text baseline inside the bar.
const BAR_BASELINE: i32 = 14;

/// Lock marker position (leftmost field).
const LOCK_POS: Point = Point::new(4, BAR_BASELINE);

/// Wallet summary start position.
const WALLET_POS: Point = Point::new(28, BAR_BASELINE);

/// First peripheral indicator position; subsequent badges step right.
const PERIPH_X: i32 = 168;

/// Horizontal step between peripheral badges.
const PERIPH_STEP: i32 = 22;

/// Battery gauge outline.
const BATTERY_RECT_POS: Point = Point::new(262, 6);
const BATTERY_RECT_SIZE: Size = Size::new(22, 10);

/// Language code anchor (right-aligned).
const LANG_POS: Point = Point::new((SCREEN_WIDTH - 4) as i32, BAR_BASELINE);

/// Divider under the bar.
const DIVIDER_START: Point = Point::new(0, (STATUS_BAR_HEIGHT - 1) as i32);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, (STATUS_BAR_HEIGHT - 1) as i32);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Bar background fill.
const BAR_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Draw the status bar from a snapshot.
pub fn draw_status_bar(display: &mut SimulatorDisplay<Rgb565>, status: &StatusSnapshot) {
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, STATUS_BAR_HEIGHT))
        .into_styled(BAR_FILL_STYLE)
        .draw(display)
        .ok();
    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    // Lock marker: red LK while locked, gray UN otherwise.
    let (lock_text, lock_color) = if status.locked { ("LK", RED) } else { ("UN", GRAY) };
    Text::with_text_style(
        lock_text,
        LOCK_POS,
        MonoTextStyle::new(LABEL_FONT, lock_color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    draw_wallet_summary(display, status);
    draw_peripherals(display, status);
    draw_battery(display, status);

    Text::with_text_style(&status.language, LANG_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

fn draw_wallet_summary(display: &mut SimulatorDisplay<Rgb565>, status: &StatusSnapshot) {
    let Some(wallet) = &status.wallet else { return };

    // name [MS|SS] [PP] net. Fits the fixed slot because the name is
    // already truncated in the snapshot.
    let mut line: String<24> = String::new();
    let _ = write!(
        line,
        "{} {}{} {}",
        wallet.name,
        if wallet.multisig { "MS" } else { "SS" },
        if wallet.has_passphrase { " PP" } else { "" },
        wallet.net,
    );
    Text::with_text_style(&line, WALLET_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

fn draw_peripherals(display: &mut SimulatorDisplay<Rgb565>, status: &StatusSnapshot) {
    let mut x = PERIPH_X;
    for (peripheral, state) in &status.peripherals {
        let color = match state {
            IndicatorState::Hidden => continue,
            IndicatorState::Off => RED,
            IndicatorState::Idle => ORANGE,
            IndicatorState::Ready => GREEN,
        };
        let badge = match peripheral {
            Peripheral::Qr => "QR",
            Peripheral::Usb => "US",
            Peripheral::Sd => "SD",
            Peripheral::SmartCard => "SC",
        };
        Text::with_text_style(
            badge,
            Point::new(x, BAR_BASELINE),
            MonoTextStyle::new(LABEL_FONT, color),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
        x += PERIPH_STEP;
    }
}

fn draw_battery(display: &mut SimulatorDisplay<Rgb565>, status: &StatusSnapshot) {
    let Some(battery) = status.battery else { return };

    let color = match battery.level() {
        BatteryLevel::Full | BatteryLevel::High => GREEN,
        BatteryLevel::Half => ORANGE,
        BatteryLevel::Low | BatteryLevel::Empty => RED,
    };

    Rectangle::new(BATTERY_RECT_POS, BATTERY_RECT_SIZE)
        .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
        .draw(display)
        .ok();

    // Fill proportional to charge, inset 2px inside the outline.
    let fill_width = (BATTERY_RECT_SIZE.width - 4) * u32::from(battery.pct) / 100;
    if fill_width > 0 {
        Rectangle::new(
            Point::new(BATTERY_RECT_POS.x + 2, BATTERY_RECT_POS.y + 2),
            Size::new(fill_width, BATTERY_RECT_SIZE.height - 4),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
    }

    if battery.charging {
        Text::with_text_style(
            "+",
            Point::new(BATTERY_RECT_POS.x + BATTERY_RECT_SIZE.width as i32 + 3, BAR_BASELINE),
            MonoTextStyle::new(LABEL_FONT, GREEN),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}
