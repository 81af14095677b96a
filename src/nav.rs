//! Navigation state machine.
//!
//! The controller owns the device state, the history stack and the
//! translation resolver; everything else borrows them through it. A
//! navigation request either pushes a target ("down") or pops ("back"),
//! then the current screen is resolved:
//!
//! 1. the previous screen's view is discarded,
//! 2. the history is updated,
//! 3. a locked device short-circuits to the PIN screen (history cleared),
//! 4. otherwise the menu catalog builds the current screen, falling back
//!    to a generic acknowledgement screen for leaf actions,
//! 5. the status snapshot is refreshed.
//!
//! There are no fatal errors on this path: unknown screens, empty history
//! and wrong PINs all degrade to a defined default.

use log::{debug, info};

use crate::catalog;
use crate::config::MAX_PIN_LEN;
use crate::device::{DeviceState, Peripheral};
use crate::history::NavHistory;
use crate::i18n::Translations;
use crate::menu::{EntryAction, NavEffect, ScreenView};
use crate::screen::ScreenId;
use crate::status::StatusSnapshot;

/// What a selection resolved to, extracted before any state mutation so
/// the borrow of the current view ends first.
enum Selection {
    Goto(ScreenId),
    Toggle(Peripheral),
    Effect(NavEffect),
}

/// Orchestrates navigation, lock gating and menu assembly.
pub struct NavigationController {
    device: DeviceState,
    history: NavHistory,
    translations: Translations,
    /// PIN digits accumulated on the lock screen.
    pin_buf: String,
    view: ScreenView,
    status: StatusSnapshot,
    /// Set whenever view or status changed; the render loop consumes it.
    dirty: bool,
}

impl NavigationController {
    /// Take ownership of the boot-time state and resolve the first screen.
    /// A device that boots locked shows the PIN screen immediately.
    pub fn new(device: DeviceState, translations: Translations) -> Self {
        let status = StatusSnapshot::capture(&device, &translations);
        let mut controller = Self {
            device,
            history: NavHistory::new(),
            translations,
            pin_buf: String::new(),
            view: ScreenView::Action {
                title: String::new(),
            },
            status,
            dirty: true,
        };
        controller.refresh_view();
        controller
    }

    // -------------------------------------------------------------------------
    // Rendering Interface
    // -------------------------------------------------------------------------

    pub const fn view(&self) -> &ScreenView {
        &self.view
    }

    pub const fn status(&self) -> &StatusSnapshot {
        &self.status
    }

    pub const fn device(&self) -> &DeviceState {
        &self.device
    }

    pub const fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Whether the display needs a redraw; reading resets the flag.
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Navigate down into `target`, or back when `target` is `None`.
    pub fn navigate(&mut self, target: Option<ScreenId>) {
        match target {
            Some(screen) => self.history.push(screen),
            None => {
                self.history.pop();
            }
        }
        self.refresh_view();
    }

    /// Lock the device. The next resolution lands on the PIN screen and
    /// wipes the history.
    pub fn lock(&mut self) {
        if self.device.is_locked {
            return;
        }
        info!("device locked");
        self.device.lock();
        self.navigate(None);
    }

    /// Periodic status-bar refresh (timer tick).
    pub fn refresh_status(&mut self) {
        let status = StatusSnapshot::capture(&self.device, &self.translations);
        if status != self.status {
            self.status = status;
            self.dirty = true;
        }
    }

    /// Handle a selection event from the rendering backend.
    ///
    /// Spacer rows and out-of-range indices are ignored. While locked,
    /// selections are ignored entirely; the PIN machine has its own inputs.
    pub fn select(&mut self, entry_index: usize) {
        let selection = {
            let ScreenView::Menu(menu) = &self.view else {
                return;
            };
            let Some(entry) = menu.entries.get(entry_index) else {
                return;
            };
            match &entry.action {
                EntryAction::Label => return,
                EntryAction::Goto(target) => Selection::Goto(*target),
                EntryAction::Toggle { peripheral, .. } => Selection::Toggle(*peripheral),
                EntryAction::Invoke(handler) => {
                    Selection::Effect(handler(&mut self.device, &mut self.translations))
                }
            }
        };

        match selection {
            Selection::Goto(target) => {
                debug!("navigate to {}", target.slug());
                self.navigate(Some(target));
            }
            Selection::Toggle(peripheral) => {
                let enabled = self.device.toggle_enabled(peripheral);
                info!("{peripheral:?} {}", if enabled { "enabled" } else { "disabled" });
                // Rebuild in place: the switch row changed, the status bar
                // must reflect the new capability, history stays put.
                self.refresh_view();
            }
            Selection::Effect(NavEffect::Stay) => self.refresh_view(),
            Selection::Effect(NavEffect::Back) => self.navigate(None),
            Selection::Effect(NavEffect::Home) => {
                self.history.reset_to_main();
                self.navigate(None);
            }
        }
    }

    // -------------------------------------------------------------------------
    // PIN Sub-Machine (lock screen only)
    // -------------------------------------------------------------------------

    /// Append a digit to the PIN buffer (up to [`MAX_PIN_LEN`]).
    pub fn pin_digit(&mut self, digit: char) {
        if !self.device.is_locked || !digit.is_ascii_digit() || self.pin_buf.len() >= MAX_PIN_LEN {
            return;
        }
        self.pin_buf.push(digit);
        self.sync_lock_view();
    }

    /// Remove the last digit from the PIN buffer.
    pub fn pin_delete(&mut self) {
        if !self.device.is_locked || self.pin_buf.pop().is_none() {
            return;
        }
        self.sync_lock_view();
    }

    /// Attempt to unlock with the buffered digits.
    ///
    /// Success resets the history and renders a fresh main screen; failure
    /// clears the buffer and stays on the lock screen.
    pub fn pin_confirm(&mut self) {
        if !self.device.is_locked {
            return;
        }
        let candidate = std::mem::take(&mut self.pin_buf);
        if self.device.unlock(&candidate) {
            info!("device unlocked");
            self.history.reset_to_main();
            self.navigate(None);
        } else {
            info!("unlock failed, PIN buffer cleared");
            self.sync_lock_view();
        }
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    /// Resolve the current navigation state into a view and refresh the
    /// status snapshot. Assigning the new view drops the previous screen's
    /// resources first; only one screen is ever live.
    fn refresh_view(&mut self) {
        if self.device.is_locked {
            // The lock screen overrides everything and wipes navigation
            // context so unlock always lands on a fresh main screen.
            self.history.clear();
            self.pin_buf.clear();
            self.sync_lock_view();
            self.refresh_status_unconditional();
            return;
        }

        let current = self.history.current();
        self.view = match catalog::build(current, &self.device, &self.translations) {
            Some(mut menu) => {
                menu.show_back = self.history.has_back();
                ScreenView::Menu(menu)
            }
            None => {
                debug!("no builder for '{}', using action screen", current.slug());
                ScreenView::Action {
                    title: current.fallback_title(),
                }
            }
        };
        self.dirty = true;
        self.refresh_status_unconditional();
    }

    fn sync_lock_view(&mut self) {
        let title = format!(
            "{}, {} {}",
            self.translations.translate("LOCK_SCREEN_TITLE"),
            self.translations.translate("LOCK_SCREEN_FW"),
            self.device.fw_version,
        );
        self.view = ScreenView::Locked {
            title,
            masked_len: self.pin_buf.len(),
        };
        self.dirty = true;
    }

    fn refresh_status_unconditional(&mut self) {
        self.status = StatusSnapshot::capture(&self.device, &self.translations);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Network, PeripheralCaps, WalletRef};
    use crate::i18n::PreferenceStore;
    use tempfile::TempDir;

    struct NullStore;

    impl PreferenceStore for NullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) {}
    }

    fn translations() -> (Translations, TempDir) {
        let dir = TempDir::new().expect("tempdir");
        (Translations::open(dir.path(), Box::new(NullStore)), dir)
    }

    fn controller_with(state: DeviceState) -> (NavigationController, TempDir) {
        let (tr, dir) = translations();
        (NavigationController::new(state, tr), dir)
    }

    fn menu_view(controller: &NavigationController) -> &crate::menu::MenuScreen {
        match controller.view() {
            ScreenView::Menu(menu) => menu,
            other => panic!("expected menu view, got {other:?}"),
        }
    }

    /// Index of the first entry navigating to `target`.
    fn index_of(controller: &NavigationController, target: ScreenId) -> usize {
        menu_view(controller)
            .entries
            .iter()
            .position(|e| matches!(e.action, EntryAction::Goto(t) if t == target))
            .unwrap_or_else(|| panic!("no entry navigating to {target:?}"))
    }

    // -------------------------------------------------------------------------
    // Basic Navigation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_boot_shows_main_menu() {
        let (controller, _dir) = controller_with(DeviceState::new());
        let menu = menu_view(&controller);
        assert_eq!(menu.title, "MAIN_MENU_TITLE");
        assert!(!menu.show_back, "root screen has no back control");
    }

    #[test]
    fn test_select_navigates_and_enables_back() {
        let (mut controller, _dir) = controller_with(DeviceState::new());
        let idx = index_of(&controller, ScreenId::ManageDevice);
        controller.select(idx);

        let menu = menu_view(&controller);
        assert_eq!(menu.title, "DEVICE_MENU_TITLE");
        assert!(menu.show_back, "non-root screen shows the back control");
    }

    #[test]
    fn test_back_past_root_stays_on_main() {
        let (mut controller, _dir) = controller_with(DeviceState::new());
        controller.navigate(None);
        controller.navigate(None);
        assert_eq!(menu_view(&controller).title, "MAIN_MENU_TITLE");
    }

    #[test]
    fn test_leaf_action_resolves_to_fallback_screen() {
        let (mut controller, _dir) = controller_with(DeviceState::new());
        controller.navigate(Some(ScreenId::WipeDevice));
        match controller.view() {
            ScreenView::Action { title } => assert_eq!(title, "Wipe device"),
            other => panic!("expected action screen, got {other:?}"),
        }
        // Back returns to the previous menu.
        controller.navigate(None);
        assert_eq!(menu_view(&controller).title, "MAIN_MENU_TITLE");
    }

    #[test]
    fn test_spacer_selection_is_ignored() {
        let mut state = DeviceState::new();
        state.qr = PeripheralCaps {
            has: true,
            enabled: true,
            detected: false,
        };
        let (mut controller, _dir) = controller_with(state);
        // Entry 0 is the "process input" section header.
        controller.select(0);
        assert_eq!(
            menu_view(&controller).title,
            "MAIN_MENU_TITLE",
            "selecting a spacer must not navigate"
        );
    }

    // -------------------------------------------------------------------------
    // Lock / Unlock Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lock_overrides_any_screen_and_clears_history() {
        let (mut controller, _dir) = controller_with(DeviceState::new());
        controller.navigate(Some(ScreenId::ManageDevice));
        controller.navigate(Some(ScreenId::Interfaces));

        controller.lock();
        assert!(matches!(controller.view(), ScreenView::Locked { .. }));
        assert!(controller.status().locked);

        // Navigation requests while locked keep landing on the lock screen.
        controller.navigate(Some(ScreenId::ManageDevice));
        assert!(
            matches!(controller.view(), ScreenView::Locked { .. }),
            "locked device must override navigation targets"
        );
    }

    #[test]
    fn test_boot_locked_shows_pin_screen() {
        let mut state = DeviceState::new();
        state.pin = Some("21".into());
        state.lock();
        let (controller, _dir) = controller_with(state);
        assert!(matches!(controller.view(), ScreenView::Locked { masked_len: 0, .. }));
    }

    #[test]
    fn test_unlock_with_correct_pin() {
        let mut state = DeviceState::new();
        state.pin = Some("21".into());
        state.lock();
        let (mut controller, _dir) = controller_with(state);

        controller.pin_digit('2');
        controller.pin_digit('1');
        assert!(matches!(controller.view(), ScreenView::Locked { masked_len: 2, .. }));

        controller.pin_confirm();
        assert!(!controller.device().is_locked);
        assert_eq!(
            menu_view(&controller).title,
            "MAIN_MENU_TITLE",
            "successful unlock renders a fresh main screen"
        );
        assert!(!menu_view(&controller).show_back, "history must be empty after unlock");
    }

    #[test]
    fn test_unlock_with_wrong_pin_resets_buffer() {
        let mut state = DeviceState::new();
        state.pin = Some("21".into());
        state.lock();
        let (mut controller, _dir) = controller_with(state);

        controller.pin_digit('9');
        controller.pin_digit('9');
        controller.pin_confirm();

        assert!(controller.device().is_locked, "wrong PIN keeps the device locked");
        assert!(
            matches!(controller.view(), ScreenView::Locked { masked_len: 0, .. }),
            "failed attempt clears the PIN buffer"
        );
    }

    #[test]
    fn test_pin_buffer_caps_at_max_len() {
        let mut state = DeviceState::new();
        state.pin = Some("1".into());
        state.lock();
        let (mut controller, _dir) = controller_with(state);

        for _ in 0..12 {
            controller.pin_digit('7');
        }
        match controller.view() {
            ScreenView::Locked { masked_len, .. } => {
                assert_eq!(*masked_len, MAX_PIN_LEN, "buffer must cap at {MAX_PIN_LEN} digits");
            }
            other => panic!("expected lock view, got {other:?}"),
        }

        controller.pin_delete();
        assert!(matches!(
            controller.view(),
            ScreenView::Locked { masked_len: 7, .. }
        ));
    }

    #[test]
    fn test_pin_ignores_non_digits() {
        let mut state = DeviceState::new();
        state.pin = Some("1".into());
        state.lock();
        let (mut controller, _dir) = controller_with(state);
        controller.pin_digit('x');
        assert!(matches!(controller.view(), ScreenView::Locked { masked_len: 0, .. }));
    }

    // -------------------------------------------------------------------------
    // Capability Toggle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_mutates_state_without_navigating() {
        let mut state = DeviceState::new();
        state.sd = PeripheralCaps {
            has: true,
            enabled: false,
            detected: true,
        };
        let (mut controller, _dir) = controller_with(state);
        controller.navigate(Some(ScreenId::Interfaces));

        let sd_row = menu_view(&controller)
            .entries
            .iter()
            .position(|e| matches!(e.action, EntryAction::Toggle { peripheral: Peripheral::Sd, .. }))
            .expect("SD toggle row");
        controller.select(sd_row);

        assert!(controller.device().sd.enabled, "toggle must mutate the enabled flag");
        let menu = menu_view(&controller);
        assert_eq!(menu.title, "INTERFACES_MENU_TITLE", "current screen must not change");
        assert!(
            matches!(
                menu.entries[sd_row].action,
                EntryAction::Toggle { peripheral: Peripheral::Sd, on: true }
            ),
            "rebuilt row must show the new switch state"
        );

        // Status indicator reflects the change: SD is enabled+detected now.
        let (_, sd_state) = controller
            .status()
            .peripherals
            .iter()
            .find(|(p, _)| *p == Peripheral::Sd)
            .copied()
            .expect("SD indicator");
        assert_eq!(sd_state, crate::status::IndicatorState::Ready);
    }

    // -------------------------------------------------------------------------
    // Invoke Entry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_wallet_switch_sets_active_and_pops() {
        let mut state = DeviceState::new();
        state.register_wallet(WalletRef::new("first", false, Network::Mainnet));
        state.register_wallet(WalletRef::new("second", false, Network::Mainnet));
        let (mut controller, _dir) = controller_with(state);

        controller.navigate(Some(ScreenId::ChangeWallet));
        controller.select(1); // second wallet row

        assert_eq!(controller.device().active().expect("active").name, "second");
        assert_eq!(
            menu_view(&controller).title,
            "MAIN_MENU_TITLE",
            "wallet selection must navigate back"
        );
    }

    #[test]
    fn test_generate_seed_returns_home_with_clean_history() {
        let (mut controller, _dir) = controller_with(DeviceState::new());
        controller.navigate(Some(ScreenId::AddWallet));
        controller.navigate(Some(ScreenId::GenerateSeedphrase));

        // Entry 1 creates a single-sig wallet.
        controller.select(1);
        assert_eq!(controller.device().registered_wallets.len(), 1);
        let menu = menu_view(&controller);
        assert_eq!(menu.title, "MAIN_MENU_TITLE");
        assert!(!menu.show_back, "home effect must leave no back history");
    }

    // -------------------------------------------------------------------------
    // Dirty Tracking Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_take_dirty_resets_flag() {
        let (mut controller, _dir) = controller_with(DeviceState::new());
        assert!(controller.take_dirty(), "boot leaves the display dirty");
        assert!(!controller.take_dirty(), "flag resets after read");
        controller.navigate(Some(ScreenId::ManageDevice));
        assert!(controller.take_dirty(), "navigation marks the display dirty");
    }

    #[test]
    fn test_refresh_status_only_dirties_on_change() {
        let (mut controller, _dir) = controller_with(DeviceState::new());
        let _ = controller.take_dirty();
        controller.refresh_status();
        assert!(!controller.take_dirty(), "unchanged snapshot must not redraw");
    }
}
