//! Widget glue between screen views and the display.
//!
//! - [`status_bar`]: top bar with lock, wallet, peripheral and battery state
//! - [`menu_list`]: menu rows, section spacers, switches, selection cursor
//! - [`pin_pad`]: lock screen with masked buffer and keypad
//! - [`action`]: generic acknowledgement screen for leaf actions
//!
//! All drawing follows the same pattern as the rest of the crate: static
//! styles from [`crate::styles`], pre-computed layout constants, and
//! `heapless::String` instead of `format!` in per-frame code.

mod action;
mod menu_list;
mod pin_pad;
mod status_bar;

pub use action::draw_action_screen;
pub use menu_list::{draw_menu, scroll_for};
pub use pin_pad::draw_lock_screen;
pub use status_bar::draw_status_bar;
