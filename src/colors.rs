//! Color constants for the wallet UI.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the target display, so no conversion happens
//! when writing to the framebuffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Indicator Colors (application-specific)
// =============================================================================

/// Indicator green. Peripheral ready, battery healthy, unlock accents.
/// RGB565 approximation of #00D100.
pub const GREEN: Rgb565 = Rgb565::new(0, 52, 0);

/// Indicator orange. Peripheral enabled-but-idle, battery at half,
/// caution section headers.
/// RGB565 approximation of #FF9A00.
pub const ORANGE: Rgb565 = Rgb565::new(31, 38, 0);

/// Indicator red. Peripheral off, battery low, destructive menu entries.
/// RGB565 approximation of #F10000.
pub const RED: Rgb565 = Rgb565::new(30, 0, 0);

/// Dark gray for row separators and disabled text.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Dark blue fill for the selected menu row.
pub const SELECTION_BLUE: Rgb565 = Rgb565::new(4, 12, 18);
