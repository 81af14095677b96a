//! Declarative menu model.
//!
//! Screen builders emit a [`MenuScreen`]: an ordered list of
//! [`MenuEntry`] descriptors plus a title and a back-control flag. The
//! rendering side consumes the descriptors; it never reaches back into
//! device state.

use embedded_graphics::pixelcolor::Rgb565;

use crate::device::{DeviceState, Peripheral};
use crate::i18n::Translations;
use crate::screen::ScreenId;

/// What the controller should do after an [`EntryAction::Invoke`] handler ran.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavEffect {
    /// Rebuild the current screen in place (state changed under it).
    Stay,
    /// Navigate back, as if the back control was pressed.
    Back,
    /// Reset history and show the main screen.
    Home,
}

/// Selection handler for entries that do more than navigate.
pub type InvokeFn = Box<dyn Fn(&mut DeviceState, &mut Translations) -> NavEffect>;

/// What selecting an entry does.
pub enum EntryAction {
    /// Section header / spacer. Not selectable, no semantics.
    Label,
    /// Navigate to another screen.
    Goto(ScreenId),
    /// Run a handler against device state, then apply its [`NavEffect`].
    /// The wallet-switch rows are the canonical case: set active, go back.
    Invoke(InvokeFn),
    /// On/off control bound to a peripheral's `enabled` flag. Selecting it
    /// flips the flag and refreshes the status bar without navigating.
    Toggle { peripheral: Peripheral, on: bool },
}

impl std::fmt::Debug for EntryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Label => write!(f, "Label"),
            Self::Goto(id) => write!(f, "Goto({id:?})"),
            Self::Invoke(_) => write!(f, "Invoke(..)"),
            Self::Toggle { peripheral, on } => write!(f, "Toggle({peripheral:?}, {on})"),
        }
    }
}

/// Icon shown at the left edge of a menu row, drawn as a short badge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    QrCode,
    Usb,
    SdCard,
    SmartCard,
    Wallet,
    Plus,
    Settings,
    Storage,
    Sign,
    Import,
    Export,
    Addresses,
    Signers,
    Mnemonic,
    Password,
    Descriptor,
    Network,
    Trash,
    Link,
    Backup,
    Firmware,
    Shield,
    Switches,
    Display,
    Sound,
    Language,
    Alert,
    Visible,
    Flash,
    Keyboard,
    Check,
    Download,
    Restore,
    Cross,
    Bip85,
}

impl Icon {
    /// Short monospace badge drawn in place of a bitmap icon.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::QrCode => "QR",
            Self::Usb => "USB",
            Self::SdCard => "SD",
            Self::SmartCard => "SC",
            Self::Wallet => "WLT",
            Self::Plus => "+",
            Self::Settings => "SET",
            Self::Storage => "STO",
            Self::Sign => "SGN",
            Self::Import => "IMP",
            Self::Export => "EXP",
            Self::Addresses => "ADR",
            Self::Signers => "SGR",
            Self::Mnemonic => "MNE",
            Self::Password => "PWD",
            Self::Descriptor => "DSC",
            Self::Network => "NET",
            Self::Trash => "DEL",
            Self::Link => "LNK",
            Self::Backup => "BAK",
            Self::Firmware => "FW",
            Self::Shield => "SEC",
            Self::Switches => "I/O",
            Self::Display => "DSP",
            Self::Sound => "SND",
            Self::Language => "LNG",
            Self::Alert => "!",
            Self::Visible => "EYE",
            Self::Flash => "FLS",
            Self::Keyboard => "KBD",
            Self::Check => "OK",
            Self::Download => "DL",
            Self::Restore => "RST",
            Self::Cross => "X",
            Self::Bip85 => "B85",
        }
    }
}

/// One row of a menu screen.
#[derive(Debug)]
pub struct MenuEntry {
    pub icon: Option<Icon>,
    pub label: String,
    pub action: EntryAction,
    /// Row background accent for destructive or cautionary entries.
    pub emphasis: Option<Rgb565>,
}

impl MenuEntry {
    /// Section header / spacer row.
    pub fn section(label: impl Into<String>) -> Self {
        Self {
            icon: None,
            label: label.into(),
            action: EntryAction::Label,
            emphasis: None,
        }
    }

    /// Navigable row.
    pub fn nav(icon: Option<Icon>, label: impl Into<String>, target: ScreenId) -> Self {
        Self {
            icon,
            label: label.into(),
            action: EntryAction::Goto(target),
            emphasis: None,
        }
    }

    /// Row with a custom selection handler.
    pub fn invoke(icon: Option<Icon>, label: impl Into<String>, handler: InvokeFn) -> Self {
        Self {
            icon,
            label: label.into(),
            action: EntryAction::Invoke(handler),
            emphasis: None,
        }
    }

    /// Peripheral on/off row.
    pub fn toggle(icon: Icon, label: impl Into<String>, peripheral: Peripheral, on: bool) -> Self {
        Self {
            icon: Some(icon),
            label: label.into(),
            action: EntryAction::Toggle { peripheral, on },
            emphasis: None,
        }
    }

    /// Apply a background accent (builder style).
    pub fn with_emphasis(mut self, color: Rgb565) -> Self {
        self.emphasis = Some(color);
        self
    }

    /// Whether the selection cursor may land on this row.
    pub const fn is_selectable(&self) -> bool {
        !matches!(self.action, EntryAction::Label)
    }
}

/// A fully assembled menu screen.
#[derive(Debug)]
pub struct MenuScreen {
    pub title: String,
    pub entries: Vec<MenuEntry>,
    /// Whether the back control is shown (history is non-empty).
    pub show_back: bool,
}

/// What the controller resolved the current navigation state to.
///
/// Exactly one of these is alive at a time; building a new one drops the
/// previous screen's resources first.
#[derive(Debug)]
pub enum ScreenView {
    /// A regular menu screen.
    Menu(MenuScreen),
    /// Generic acknowledgement screen for leaf actions without a builder.
    Action { title: String },
    /// PIN-entry lock screen. `masked_len` is the number of digits typed.
    Locked { title: String, masked_len: usize },
}
