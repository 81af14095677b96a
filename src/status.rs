//! Status-bar snapshot assembly.
//!
//! The status bar never reads device state directly; after every
//! navigation and every capability toggle the controller hands it a fresh
//! [`StatusSnapshot`]. Keeping this a plain data structure makes the
//! indicator rules testable without a display.

use crate::device::{DeviceState, Peripheral};
use crate::i18n::Translations;

/// Visual state of one peripheral indicator.
///
/// Toggle-only peripherals (QR, USB): `Ready` when enabled, `Idle` when not.
/// Detect-capable peripherals (SD, SmartCard): `Ready` when enabled and
/// detected, `Idle` when enabled without media, `Off` when disabled.
/// Absent hardware is `Hidden`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IndicatorState {
    Hidden,
    /// Disabled (detect-capable classes only). Drawn red.
    Off,
    /// Present but not fully usable. Drawn orange.
    Idle,
    /// Fully usable. Drawn green.
    Ready,
}

/// Battery gauge bucket, matching the icon steps of the hardware UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BatteryLevel {
    Full,
    High,
    Half,
    Low,
    Empty,
}

impl BatteryLevel {
    /// Bucket a charge percentage. Thresholds: 95 / 75 / 50 / 25.
    pub const fn from_pct(pct: u8) -> Self {
        if pct >= 95 {
            Self::Full
        } else if pct >= 75 {
            Self::High
        } else if pct >= 50 {
            Self::Half
        } else if pct >= 25 {
            Self::Low
        } else {
            Self::Empty
        }
    }
}

/// Battery portion of the snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BatteryIndicator {
    pub pct: u8,
    pub charging: bool,
}

impl BatteryIndicator {
    pub const fn level(self) -> BatteryLevel {
        BatteryLevel::from_pct(self.pct)
    }
}

/// Active-wallet summary shown in the middle of the bar.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WalletSummary {
    /// Display name, truncated for the fixed-width slot.
    pub name: String,
    pub multisig: bool,
    pub has_passphrase: bool,
    /// Short net label ("main"/"test").
    pub net: &'static str,
}

/// Everything the status bar draws.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatusSnapshot {
    pub locked: bool,
    pub battery: Option<BatteryIndicator>,
    pub wallet: Option<WalletSummary>,
    /// Indicators in fixed display order (QR, USB, SD, SmartCard).
    pub peripherals: [(Peripheral, IndicatorState); 4],
    /// Uppercased language code, at most three characters.
    pub language: String,
}

/// Maximum characters of the wallet name shown in the bar.
const WALLET_NAME_CHARS: usize = 8;

impl StatusSnapshot {
    /// Capture the current device state.
    ///
    /// While locked, wallet and peripheral details are suppressed; battery
    /// and language stay visible.
    pub fn capture(state: &DeviceState, translations: &Translations) -> Self {
        let locked = state.is_locked;

        // Mains-powered devices show a full gauge; an unknown percentage
        // hides the gauge entirely.
        let battery = if state.has_battery {
            state.battery_pct.map(|pct| BatteryIndicator {
                pct,
                charging: state.is_charging,
            })
        } else {
            Some(BatteryIndicator {
                pct: 100,
                charging: false,
            })
        };

        let wallet = if locked {
            None
        } else {
            state.active().map(|w| WalletSummary {
                name: truncate(&w.name, WALLET_NAME_CHARS),
                multisig: w.multisig,
                has_passphrase: w.passphrase.is_some(),
                net: w.net.label(),
            })
        };

        let peripherals = Peripheral::ALL.map(|p| {
            let indicator = if locked {
                IndicatorState::Hidden
            } else {
                indicator_for(state, p)
            };
            (p, indicator)
        });

        Self {
            locked,
            battery,
            wallet,
            peripherals,
            language: truncate(&translations.current_language().to_ascii_uppercase(), 3),
        }
    }
}

fn indicator_for(state: &DeviceState, p: Peripheral) -> IndicatorState {
    let caps = state.caps(p);
    if !caps.has {
        return IndicatorState::Hidden;
    }
    if p.detect_capable() {
        if !caps.enabled {
            IndicatorState::Off
        } else if caps.detected {
            IndicatorState::Ready
        } else {
            IndicatorState::Idle
        }
    } else if caps.enabled {
        IndicatorState::Ready
    } else {
        IndicatorState::Idle
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
