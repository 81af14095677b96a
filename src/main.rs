//! VaultPad hardware-wallet UI simulator.
//!
//! Runs the wallet's menu-driven UI against an SDL window standing in for
//! the device LCD. All navigation, capability gating and translation logic
//! lives in plain modules ([`nav`], [`catalog`], [`i18n`], ...) so it can
//! be tested without a display; this file is the thin shell that feeds
//! input events in and draws the resolved screen back out.
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----------|--------------------------------------------|
//! | Up/Down | Move the selection cursor |
//! | Return | Activate the selected entry (or confirm PIN) |
//! | Backspace | Navigate back (or delete a PIN digit) |
//! | 0-9 | PIN digits while locked |
//! | L | Lock the device |
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ STATUS BAR (lock, wallet, peripherals, batt)   │ 22px
//! ├────────────────────────────────────────────────┤
//! │                screen title                    │
//! │  ┌──────────────────────────────────────────┐  │
//! │  │ menu rows / pin pad / action message     │  │
//! │  └──────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! Button events go to [`nav::NavigationController`]; it resolves the
//! active screen (lock override first, then the menu catalog) and hands
//! back a declarative view plus a status snapshot to draw.

mod catalog;
mod colors;
mod config;
mod device;
mod history;
mod i18n;
mod menu;
mod nav;
mod screen;
mod status;
mod styles;
mod widgets;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;

use colors::BLACK;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_REFRESH_PERIOD};
use device::{DeviceState, PeripheralCaps};
use i18n::{JsonPreferenceStore, Translations};
use menu::{MenuScreen, ScreenView};
use nav::NavigationController;
use widgets::{draw_action_screen, draw_lock_screen, draw_menu, draw_status_bar};

/// Directory with the language files; the preference file sits next to them.
const I18N_DIR: &str = "i18n";

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("VaultPad UI Sim", &output_settings);

    let prefs = JsonPreferenceStore::open(format!("{I18N_DIR}/prefs.json"));
    let translations = Translations::open(I18N_DIR, Box::new(prefs));

    let mut controller = NavigationController::new(demo_device_state(), translations);
    info!("UI started");

    // Selection cursor (input-side state; resets when the screen changes).
    let mut selected = first_selectable(&controller);
    let mut last_title = current_title(&controller);
    let mut needs_redraw = true;
    let mut last_status_refresh = Instant::now();

    'running: loop {
        let frame_start = Instant::now();
        let selected_at_start = selected;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent navigation spam.
                    if repeat {
                        continue;
                    }
                    handle_key(&mut controller, &mut selected, keycode);
                }
                _ => {}
            }
        }

        // Periodic status-bar refresh (battery, peripheral changes).
        if last_status_refresh.elapsed() >= STATUS_REFRESH_PERIOD {
            controller.refresh_status();
            last_status_refresh = Instant::now();
        }

        // A screen change invalidates the cursor; snap to the first
        // selectable row of the new screen.
        let title = current_title(&controller);
        if title != last_title {
            last_title = title;
            selected = first_selectable(&controller);
        }

        // Cursor movement is input-side state, invisible to the
        // controller's dirty flag.
        if selected != selected_at_start {
            needs_redraw = true;
        }

        if controller.take_dirty() {
            needs_redraw = true;
        }

        if needs_redraw {
            display.clear(BLACK).ok();
            draw_status_bar(&mut display, controller.status());
            match controller.view() {
                ScreenView::Menu(menu) => draw_menu(&mut display, menu, selected),
                ScreenView::Action { title } => {
                    let message = format!(
                        "{}{title}",
                        controller.translations().translate("ACTION_SCREEN_PREFIX")
                    );
                    let hint = controller.translations().translate("ACTION_SCREEN_BACK_HINT");
                    draw_action_screen(&mut display, title, &message, hint);
                }
                ScreenView::Locked { title, masked_len } => {
                    let prompt = controller.translations().translate("LOCK_SCREEN_PROMPT");
                    draw_lock_screen(&mut display, title, prompt, *masked_len);
                }
            }
            needs_redraw = false;
        }

        window.update(&display);

        // Sleep to maintain the target frame rate.
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Route one key press to the controller or the selection cursor.
fn handle_key(controller: &mut NavigationController, selected: &mut usize, keycode: Keycode) {
    if controller.device().is_locked {
        if let Some(digit) = digit_for(keycode) {
            controller.pin_digit(digit);
        } else {
            match keycode {
                Keycode::Backspace => controller.pin_delete(),
                Keycode::Return => controller.pin_confirm(),
                _ => {}
            }
        }
        return;
    }

    match keycode {
        Keycode::Up => *selected = step_selection(controller.view(), *selected, -1),
        Keycode::Down => *selected = step_selection(controller.view(), *selected, 1),
        Keycode::Return => match controller.view() {
            ScreenView::Menu(_) => controller.select(*selected),
            // The action screen's only control is its back button.
            ScreenView::Action { .. } => controller.navigate(None),
            ScreenView::Locked { .. } => {}
        },
        Keycode::Backspace => controller.navigate(None),
        Keycode::L => controller.lock(),
        _ => {}
    }
}

fn digit_for(keycode: Keycode) -> Option<char> {
    match keycode {
        Keycode::Num0 => Some('0'),
        Keycode::Num1 => Some('1'),
        Keycode::Num2 => Some('2'),
        Keycode::Num3 => Some('3'),
        Keycode::Num4 => Some('4'),
        Keycode::Num5 => Some('5'),
        Keycode::Num6 => Some('6'),
        Keycode::Num7 => Some('7'),
        Keycode::Num8 => Some('8'),
        Keycode::Num9 => Some('9'),
        _ => None,
    }
}

/// Index of the first selectable entry, or 0 for non-menu views.
fn first_selectable(controller: &NavigationController) -> usize {
    match controller.view() {
        ScreenView::Menu(menu) => first_selectable_in(menu),
        _ => 0,
    }
}

fn first_selectable_in(menu: &MenuScreen) -> usize {
    menu.entries
        .iter()
        .position(|e| e.is_selectable())
        .unwrap_or(0)
}

/// Move the cursor by `delta`, skipping section spacers.
fn step_selection(view: &ScreenView, current: usize, delta: i32) -> usize {
    let ScreenView::Menu(menu) = view else {
        return current;
    };
    let len = menu.entries.len();
    if len == 0 {
        return 0;
    }

    let mut index = current as i32;
    loop {
        index += delta;
        if index < 0 || index >= len as i32 {
            return current; // stop at the edges, no wrap-around
        }
        if menu.entries[index as usize].is_selectable() {
            return index as usize;
        }
    }
}

/// Stable identity of the visible screen, used to reset the cursor.
fn current_title(controller: &NavigationController) -> String {
    match controller.view() {
        ScreenView::Menu(menu) => menu.title.clone(),
        ScreenView::Action { title } => title.clone(),
        ScreenView::Locked { title, .. } => title.clone(),
    }
}

/// Boot-time device state for the simulator: QR ready, SD present with a
/// card inserted but disabled, SmartCard ready, PIN "21", locked.
fn demo_device_state() -> DeviceState {
    let mut state = DeviceState::new();
    state.has_battery = true;
    state.battery_pct = Some(100);

    state.qr = PeripheralCaps {
        has: true,
        enabled: true,
        detected: false,
    };
    state.sd = PeripheralCaps {
        has: true,
        enabled: false,
        detected: true,
    };
    state.smartcard = PeripheralCaps {
        has: true,
        enabled: true,
        detected: true,
    };
    state.usb.enabled = true;

    state.pin = Some("21".into());
    state.lock();
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuEntry;
    use crate::screen::ScreenId;

    fn sample_menu() -> ScreenView {
        ScreenView::Menu(MenuScreen {
            title: "t".into(),
            entries: vec![
                MenuEntry::section("header"),
                MenuEntry::nav(None, "a", ScreenId::ManageDevice),
                MenuEntry::section("header2"),
                MenuEntry::nav(None, "b", ScreenId::ManageStorage),
            ],
            show_back: false,
        })
    }

    #[test]
    fn test_step_selection_skips_spacers() {
        let view = sample_menu();
        assert_eq!(step_selection(&view, 1, 1), 3, "cursor must hop over the spacer");
        assert_eq!(step_selection(&view, 3, -1), 1);
    }

    #[test]
    fn test_step_selection_stops_at_edges() {
        let view = sample_menu();
        assert_eq!(step_selection(&view, 1, -1), 1, "no wrap past the first row");
        assert_eq!(step_selection(&view, 3, 1), 3, "no wrap past the last row");
    }

    #[test]
    fn test_first_selectable_skips_leading_spacer() {
        let ScreenView::Menu(menu) = sample_menu() else {
            unreachable!()
        };
        assert_eq!(first_selectable_in(&menu), 1);
    }

    #[test]
    fn test_digit_mapping() {
        assert_eq!(digit_for(Keycode::Num0), Some('0'));
        assert_eq!(digit_for(Keycode::Num9), Some('9'));
        assert_eq!(digit_for(Keycode::Return), None);
    }
}
