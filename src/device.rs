//! Device and wallet state shared by every screen.
//!
//! A single [`DeviceState`] instance is created at boot and owned by the
//! navigation controller. Menu builders read it; mutations go through the
//! controller (lock/unlock, peripheral toggles) or through menu-entry
//! handlers the controller runs on selection.
//!
//! # Capability Flags
//!
//! Each peripheral carries up to three flags: `has` (physically present),
//! `enabled` (user switched it on) and `detected` (medium inserted /
//! card present). The chain `detected ⇒ enabled ⇒ has` is expected but
//! deliberately NOT enforced at the mutation boundary; every read site
//! re-checks the full combination via [`DeviceState::usable`] so a stale
//! flag can never conjure a menu entry out of thin air.
//!
//! QR and USB are toggle-only: they have no detection notion and `usable`
//! ignores their `detected` flag. SD and SmartCard require all three.

/// Bitcoin network a wallet operates on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Short lowercase label for the status bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mainnet => "main",
            Self::Testnet => "test",
        }
    }
}

/// One registered wallet.
#[derive(Clone, Debug)]
pub struct WalletRef {
    /// Display name, user-editable.
    pub name: String,
    /// Multisig wallets hide seedphrase/passphrase management and expose
    /// descriptor management instead.
    pub multisig: bool,
    pub net: Network,
    /// BIP-39 passphrase currently applied, if any.
    pub passphrase: Option<String>,
}

impl WalletRef {
    pub fn new(name: impl Into<String>, multisig: bool, net: Network) -> Self {
        Self {
            name: name.into(),
            multisig,
            net,
            passphrase: None,
        }
    }
}

/// Peripheral classes the device may carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Peripheral {
    Qr,
    Usb,
    Sd,
    SmartCard,
}

impl Peripheral {
    /// All peripherals in status-bar display order.
    pub const ALL: [Self; 4] = [Self::Qr, Self::Usb, Self::Sd, Self::SmartCard];

    /// Whether this class reports media/card detection on top of `enabled`.
    pub const fn detect_capable(self) -> bool {
        matches!(self, Self::Sd | Self::SmartCard)
    }
}

/// Presence/enablement/detection flags for one peripheral.
#[derive(Clone, Copy, Debug, Default)]
pub struct PeripheralCaps {
    pub has: bool,
    pub enabled: bool,
    pub detected: bool,
}

impl PeripheralCaps {
    /// Present but switched off.
    pub const fn present() -> Self {
        Self {
            has: true,
            enabled: false,
            detected: false,
        }
    }
}

/// Mutable application state used by the whole UI.
///
/// Created once at boot, never destroyed during a session.
#[derive(Debug)]
pub struct DeviceState {
    pub is_locked: bool,
    /// Configured unlock PIN. `None` means any confirm unlocks.
    pub pin: Option<String>,

    /// Index into `registered_wallets`, or `None` when no wallet is active.
    pub active_wallet: Option<usize>,
    /// Registration order is preserved; wallet-switch screens list in
    /// exactly this order.
    pub registered_wallets: Vec<WalletRef>,

    pub qr: PeripheralCaps,
    pub usb: PeripheralCaps,
    pub sd: PeripheralCaps,
    pub smartcard: PeripheralCaps,

    pub has_battery: bool,
    /// Charge percentage 0..=100, `None` while unknown (e.g. no fuel gauge).
    pub battery_pct: Option<u8>,
    pub is_charging: bool,

    pub fw_version: String,
}

impl DeviceState {
    pub fn new() -> Self {
        Self {
            is_locked: false,
            pin: None,
            active_wallet: None,
            registered_wallets: Vec::new(),
            qr: PeripheralCaps::default(),
            usb: PeripheralCaps::present(),
            sd: PeripheralCaps::default(),
            smartcard: PeripheralCaps::default(),
            has_battery: false,
            battery_pct: None,
            is_charging: false,
            fw_version: "1.0".into(),
        }
    }

    // -------------------------------------------------------------------------
    // Capability Reads
    // -------------------------------------------------------------------------

    /// Immutable flags for one peripheral.
    pub const fn caps(&self, p: Peripheral) -> &PeripheralCaps {
        match p {
            Peripheral::Qr => &self.qr,
            Peripheral::Usb => &self.usb,
            Peripheral::Sd => &self.sd,
            Peripheral::SmartCard => &self.smartcard,
        }
    }

    /// Mutable flags for one peripheral.
    pub const fn caps_mut(&mut self, p: Peripheral) -> &mut PeripheralCaps {
        match p {
            Peripheral::Qr => &mut self.qr,
            Peripheral::Usb => &mut self.usb,
            Peripheral::Sd => &mut self.sd,
            Peripheral::SmartCard => &mut self.smartcard,
        }
    }

    /// Whether the peripheral can actually be used right now.
    ///
    /// Toggle-only classes (QR, USB): `has && enabled`.
    /// Detect-capable classes (SD, SmartCard): `has && enabled && detected`.
    pub fn usable(&self, p: Peripheral) -> bool {
        let c = self.caps(p);
        if p.detect_capable() {
            c.has && c.enabled && c.detected
        } else {
            c.has && c.enabled
        }
    }

    /// Flip a peripheral's `enabled` flag and return the new value.
    pub fn toggle_enabled(&mut self, p: Peripheral) -> bool {
        let c = self.caps_mut(p);
        c.enabled = !c.enabled;
        c.enabled
    }

    // -------------------------------------------------------------------------
    // Wallets
    // -------------------------------------------------------------------------

    /// The active wallet, if one is selected.
    pub fn active(&self) -> Option<&WalletRef> {
        self.active_wallet.and_then(|i| self.registered_wallets.get(i))
    }

    /// Mutable access to the active wallet.
    pub fn active_mut(&mut self) -> Option<&mut WalletRef> {
        self.active_wallet
            .and_then(|i| self.registered_wallets.get_mut(i))
    }

    /// Append a wallet to the registry and return its index.
    pub fn register_wallet(&mut self, wallet: WalletRef) -> usize {
        self.registered_wallets.push(wallet);
        self.registered_wallets.len() - 1
    }

    /// Select the wallet at `index` as active. Out-of-range indices are
    /// ignored so a stale menu entry cannot corrupt the selection.
    pub fn set_active_wallet(&mut self, index: usize) {
        if index < self.registered_wallets.len() {
            self.active_wallet = Some(index);
        }
    }

    // -------------------------------------------------------------------------
    // Lock / Unlock
    // -------------------------------------------------------------------------

    pub const fn lock(&mut self) {
        self.is_locked = true;
    }

    /// Attempt to unlock with the given PIN candidate.
    ///
    /// Succeeds when no PIN is configured or the candidate matches.
    /// On failure the lock state is unchanged.
    pub fn unlock(&mut self, candidate: &str) -> bool {
        let ok = match &self.pin {
            None => true,
            Some(pin) => candidate == pin,
        };
        if ok {
            self.is_locked = false;
        }
        ok
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Capability Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_usable_toggle_only_ignores_detected() {
        let mut state = DeviceState::new();
        state.qr = PeripheralCaps {
            has: true,
            enabled: true,
            detected: false,
        };
        assert!(state.usable(Peripheral::Qr), "QR needs only has+enabled");
    }

    #[test]
    fn test_usable_detect_capable_needs_all_three() {
        let mut state = DeviceState::new();
        state.sd = PeripheralCaps {
            has: true,
            enabled: true,
            detected: false,
        };
        assert!(!state.usable(Peripheral::Sd), "SD without media is not usable");
        state.sd.detected = true;
        assert!(state.usable(Peripheral::Sd), "SD with media is usable");
    }

    #[test]
    fn test_usable_rechecks_has_flag() {
        // detected+enabled without has must not count; the invariant chain
        // is not enforced, so reads re-check everything.
        let mut state = DeviceState::new();
        state.smartcard = PeripheralCaps {
            has: false,
            enabled: true,
            detected: true,
        };
        assert!(!state.usable(Peripheral::SmartCard));
    }

    #[test]
    fn test_toggle_enabled_flips() {
        let mut state = DeviceState::new();
        state.sd.has = true;
        assert!(state.toggle_enabled(Peripheral::Sd), "first toggle turns on");
        assert!(state.sd.enabled);
        assert!(!state.toggle_enabled(Peripheral::Sd), "second toggle turns off");
        assert!(!state.sd.enabled);
    }

    // -------------------------------------------------------------------------
    // Wallet Registry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_register_preserves_order() {
        let mut state = DeviceState::new();
        state.register_wallet(WalletRef::new("first", false, Network::Mainnet));
        state.register_wallet(WalletRef::new("second", true, Network::Testnet));
        let names: Vec<_> = state.registered_wallets.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["first", "second"], "registration order must be preserved");
    }

    #[test]
    fn test_set_active_wallet_bounds_checked() {
        let mut state = DeviceState::new();
        state.register_wallet(WalletRef::new("only", false, Network::Mainnet));
        state.set_active_wallet(5);
        assert!(state.active().is_none(), "out-of-range index must be ignored");
        state.set_active_wallet(0);
        assert_eq!(state.active().expect("active wallet").name, "only");
    }

    // -------------------------------------------------------------------------
    // Lock / Unlock Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_unlock_with_matching_pin() {
        let mut state = DeviceState::new();
        state.pin = Some("21".into());
        state.lock();
        assert!(state.unlock("21"), "matching PIN must unlock");
        assert!(!state.is_locked);
    }

    #[test]
    fn test_unlock_with_wrong_pin_keeps_lock() {
        let mut state = DeviceState::new();
        state.pin = Some("21".into());
        state.lock();
        assert!(!state.unlock("99"), "wrong PIN must fail");
        assert!(state.is_locked, "failed unlock must not change lock state");
    }

    #[test]
    fn test_unlock_without_configured_pin() {
        let mut state = DeviceState::new();
        state.lock();
        assert!(state.unlock(""), "no configured PIN means any confirm unlocks");
        assert!(!state.is_locked);
    }
}
