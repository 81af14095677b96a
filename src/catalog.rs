//! Per-screen menu assembly.
//!
//! Every menu screen has a pure builder: given the device state and the
//! active translations it produces the ordered entry list for that screen.
//! Builders never mutate anything at build time; rows that do mutate state
//! carry their handler in the entry's action instead.
//!
//! Capability gating follows one rule throughout: an entry appears iff the
//! peripheral it needs is usable *right now* ([`DeviceState::usable`]
//! re-checks has/enabled/detected on every build), so a yanked SD card
//! disappears from every menu on the next refresh.

use crate::colors::{ORANGE, RED};
use crate::device::{DeviceState, Network, Peripheral, WalletRef};
use crate::i18n::Translations;
use crate::menu::{Icon, MenuEntry, MenuScreen, NavEffect};
use crate::screen::ScreenId;

/// Build the menu for `screen`, or `None` for leaf actions that resolve
/// to the generic acknowledgement screen.
///
/// The match is exhaustive on purpose: adding a screen id forces a
/// decision here instead of silently falling through at runtime.
pub fn build(screen: ScreenId, state: &DeviceState, tr: &Translations) -> Option<MenuScreen> {
    match screen {
        ScreenId::Main => Some(main_menu(state, tr)),
        ScreenId::ManageWallet => Some(wallet_menu(state, tr)),
        ScreenId::ManageDevice => Some(device_menu(state, tr)),
        ScreenId::ManageBackups => Some(backups_menu(tr)),
        ScreenId::ManageFirmware => Some(firmware_menu(state, tr)),
        ScreenId::ConnectSwWallet => Some(connect_menu(tr)),
        ScreenId::ChangeWallet => Some(change_wallet_menu(state, tr)),
        ScreenId::AddWallet => Some(add_wallet_menu(state, tr)),
        ScreenId::ManageSecurity => Some(security_menu(tr)),
        ScreenId::Interfaces => Some(interfaces_menu(state, tr)),
        ScreenId::ManageSeedphrase => Some(seedphrase_menu(state, tr)),
        ScreenId::GenerateSeedphrase => Some(generate_seed_menu(tr)),
        ScreenId::SetPassphrase => Some(passphrase_menu(tr)),
        ScreenId::ManageStorage => Some(storage_menu(state, tr)),
        ScreenId::SelectLanguage => Some(language_menu(tr)),

        // Leaf actions: no dedicated screen, handled by the fallback.
        ScreenId::ScanQr
        | ScreenId::LoadSd
        | ScreenId::SignMessage
        | ScreenId::ImportFromSmartcard
        | ScreenId::ViewAddresses
        | ScreenId::ViewSigners
        | ScreenId::ManageWalletDescriptor
        | ScreenId::ChangeNetwork
        | ScreenId::DeleteWallet
        | ScreenId::ExportWallet
        | ScreenId::EnterPassphrase
        | ScreenId::ConnectSparrow
        | ScreenId::ConnectNunchuck
        | ScreenId::ConnectBluewallet
        | ScreenId::ConnectOther
        | ScreenId::ShowSeedphrase
        | ScreenId::StoreToSmartcard
        | ScreenId::StoreToSd
        | ScreenId::StoreToFlash
        | ScreenId::ClearFromSmartcard
        | ScreenId::ClearFromSd
        | ScreenId::ClearFromFlash
        | ScreenId::ClearAllStorage
        | ScreenId::DeriveBip85
        | ScreenId::ImportFromQr
        | ScreenId::ImportFromSd
        | ScreenId::ImportFromFlash
        | ScreenId::ImportFromKeyboard
        | ScreenId::ChangePin
        | ScreenId::SelfTest
        | ScreenId::SetAllowedPinRetries
        | ScreenId::SetExceededPinAction
        | ScreenId::SetDuressPin
        | ScreenId::SetDuressPinAction
        | ScreenId::DisplaySettings
        | ScreenId::SoundSettings
        | ScreenId::WipeDevice
        | ScreenId::InternalFlash
        | ScreenId::ManageSmartcard
        | ScreenId::ManageSdCard
        | ScreenId::BackupToSd
        | ScreenId::RestoreFromSd
        | ScreenId::RemoveBackupFromSd
        | ScreenId::UpdateFwSd
        | ScreenId::UpdateFwUsb
        | ScreenId::UpdateFwQr
        | ScreenId::LoadLanguage => None,
    }
}

// =============================================================================
// Root Screen
// =============================================================================

/// Root screen: four fixed sections in order (process input, wallet
/// selection, settings, device/storage). The whole process-input section
/// is omitted when none of its sub-conditions hold.
fn main_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = Vec::new();

    let single_sig_active = state.active().is_some_and(|w| !w.multisig);
    let can_import_seed = state.active().is_none() && state.usable(Peripheral::SmartCard);

    if state.usable(Peripheral::Qr)
        || state.usable(Peripheral::Sd)
        || single_sig_active
        || can_import_seed
    {
        entries.push(MenuEntry::section(tr.translate("MAIN_MENU_PROCESS_INPUT")));
        if state.usable(Peripheral::Qr) {
            entries.push(MenuEntry::nav(
                Some(Icon::QrCode),
                tr.translate("MAIN_MENU_SCAN_QR"),
                ScreenId::ScanQr,
            ));
        }
        if state.usable(Peripheral::Sd) {
            entries.push(MenuEntry::nav(
                Some(Icon::SdCard),
                tr.translate("MAIN_MENU_LOAD_SD"),
                ScreenId::LoadSd,
            ));
        }
        if single_sig_active {
            entries.push(MenuEntry::nav(
                Some(Icon::Sign),
                tr.translate("MAIN_MENU_SIGN_MESSAGE"),
                ScreenId::SignMessage,
            ));
        }
        if can_import_seed {
            entries.push(MenuEntry::nav(
                Some(Icon::Import),
                tr.translate("MAIN_MENU_IMPORT_SMARTCARD"),
                ScreenId::ImportFromSmartcard,
            ));
        }
    }

    entries.push(MenuEntry::section(tr.translate("MAIN_MENU_CHOOSE_WALLET")));
    if state.registered_wallets.is_empty() {
        entries.push(MenuEntry::nav(
            Some(Icon::Plus),
            tr.translate("MENU_ADD_WALLET"),
            ScreenId::AddWallet,
        ));
    } else {
        entries.push(MenuEntry::nav(
            Some(Icon::Wallet),
            tr.translate("MAIN_MENU_CHANGE_ADD_WALLET"),
            ScreenId::ChangeWallet,
        ));
    }

    entries.push(MenuEntry::section(tr.translate("MAIN_MENU_MANAGE_SETTINGS")));
    if state.active().is_some() {
        entries.push(MenuEntry::nav(
            Some(Icon::Wallet),
            tr.translate("MENU_MANAGE_WALLET"),
            ScreenId::ManageWallet,
        ));
    }
    entries.push(MenuEntry::nav(
        Some(Icon::Settings),
        tr.translate("MENU_MANAGE_DEVICE"),
        ScreenId::ManageDevice,
    ));
    entries.push(MenuEntry::nav(
        Some(Icon::Storage),
        tr.translate("MENU_MANAGE_STORAGE"),
        ScreenId::ManageStorage,
    ));

    MenuScreen {
        title: tr.translate("MAIN_MENU_TITLE").to_string(),
        entries,
        show_back: false,
    }
}

// =============================================================================
// Wallet Screens
// =============================================================================

fn wallet_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = Vec::new();
    let multisig = state.active().is_some_and(|w| w.multisig);

    entries.push(MenuEntry::section(tr.translate("WALLET_MENU_EXPLORE")));
    entries.push(MenuEntry::nav(
        Some(Icon::Addresses),
        tr.translate("WALLET_MENU_VIEW_ADDRESSES"),
        ScreenId::ViewAddresses,
    ));
    if multisig {
        entries.push(MenuEntry::nav(
            Some(Icon::Signers),
            tr.translate("WALLET_MENU_VIEW_SIGNERS"),
            ScreenId::ViewSigners,
        ));
    }

    entries.push(MenuEntry::section(tr.translate("WALLET_MENU_MANAGE")));
    if state.active().is_some() {
        if multisig {
            entries.push(MenuEntry::nav(
                Some(Icon::Descriptor),
                tr.translate("WALLET_MENU_DESCRIPTOR"),
                ScreenId::ManageWalletDescriptor,
            ));
        } else {
            entries.push(MenuEntry::nav(
                Some(Icon::Mnemonic),
                tr.translate("MENU_MANAGE_SEEDPHRASE"),
                ScreenId::ManageSeedphrase,
            ));
            entries.push(MenuEntry::nav(
                Some(Icon::Password),
                tr.translate("WALLET_MENU_SET_PASSPHRASE"),
                ScreenId::SetPassphrase,
            ));
        }
    }
    entries.push(MenuEntry::nav(
        Some(Icon::Network),
        tr.translate("WALLET_MENU_CHANGE_NETWORK"),
        ScreenId::ChangeNetwork,
    ));
    entries.push(
        MenuEntry::nav(
            Some(Icon::Trash),
            tr.translate("WALLET_MENU_DELETE"),
            ScreenId::DeleteWallet,
        )
        .with_emphasis(RED),
    );

    entries.push(MenuEntry::section(tr.translate("WALLET_MENU_CONNECT_EXPORT")));
    entries.push(MenuEntry::nav(
        Some(Icon::Link),
        tr.translate("MENU_CONNECT_SW_WALLET"),
        ScreenId::ConnectSwWallet,
    ));
    entries.push(MenuEntry::nav(
        Some(Icon::Export),
        tr.translate("WALLET_MENU_EXPORT"),
        ScreenId::ExportWallet,
    ));

    let title = match state.active() {
        Some(wallet) => format!("{} {}", tr.translate("WALLET_MENU_TITLE_PREFIX"), wallet.name),
        None => tr.translate("MENU_MANAGE_WALLET").to_string(),
    };

    MenuScreen {
        title,
        entries,
        show_back: false,
    }
}

/// One entry per registered wallet, in registration order. Selecting one
/// sets it active and navigates back instead of opening a screen.
fn change_wallet_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = Vec::new();

    for (index, wallet) in state.registered_wallets.iter().enumerate() {
        entries.push(MenuEntry::invoke(
            Some(Icon::Wallet),
            wallet.name.clone(),
            Box::new(move |state, _| {
                state.set_active_wallet(index);
                NavEffect::Back
            }),
        ));
    }

    entries.push(MenuEntry::section(""));
    entries.push(MenuEntry::nav(
        Some(Icon::Plus),
        tr.translate("MENU_ADD_WALLET"),
        ScreenId::AddWallet,
    ));

    MenuScreen {
        title: tr.translate("MAIN_MENU_CHANGE_ADD_WALLET").to_string(),
        entries,
        show_back: false,
    }
}

fn add_wallet_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = vec![
        MenuEntry::section(tr.translate("ADD_WALLET_GENERATE")),
        MenuEntry::nav(
            Some(Icon::Mnemonic),
            tr.translate("MENU_GENERATE_NEW_SEEDPHRASE"),
            ScreenId::GenerateSeedphrase,
        ),
        MenuEntry::section(tr.translate("ADD_WALLET_IMPORT_FROM")),
    ];

    if state.usable(Peripheral::SmartCard) {
        entries.push(MenuEntry::nav(
            Some(Icon::SmartCard),
            tr.translate("HARDWARE_SMARTCARD"),
            ScreenId::ImportFromSmartcard,
        ));
    }
    if state.usable(Peripheral::Qr) {
        entries.push(MenuEntry::nav(
            Some(Icon::QrCode),
            tr.translate("HARDWARE_QR_CODE"),
            ScreenId::ImportFromQr,
        ));
    }
    if state.usable(Peripheral::Sd) {
        entries.push(MenuEntry::nav(
            Some(Icon::SdCard),
            tr.translate("HARDWARE_SD_CARD"),
            ScreenId::ImportFromSd,
        ));
    }
    entries.push(MenuEntry::nav(
        Some(Icon::Flash),
        tr.translate("HARDWARE_INTERNAL_FLASH"),
        ScreenId::ImportFromFlash,
    ));
    entries.push(MenuEntry::nav(
        Some(Icon::Keyboard),
        tr.translate("ADD_WALLET_KEYBOARD"),
        ScreenId::ImportFromKeyboard,
    ));

    MenuScreen {
        title: tr.translate("ADD_WALLET_TITLE").to_string(),
        entries,
        show_back: false,
    }
}

/// Simplified seed generation: pick single-sig or multisig, the handler
/// registers and activates the wallet and returns to a fresh main screen.
fn generate_seed_menu(tr: &Translations) -> MenuScreen {
    let create = |multisig: bool| -> MenuEntry {
        let icon = if multisig { Icon::Signers } else { Icon::Mnemonic };
        let key = if multisig {
            "GENERATE_SEED_MULTISIG"
        } else {
            "GENERATE_SEED_SINGLESIG"
        };
        MenuEntry::invoke(
            Some(icon),
            tr.translate(key),
            Box::new(move |state, tr| {
                let name = format!(
                    "{} {}",
                    tr.translate("COMMON_WALLET"),
                    state.registered_wallets.len() + 1
                );
                let index = state.register_wallet(WalletRef::new(name, multisig, Network::Mainnet));
                state.set_active_wallet(index);
                NavEffect::Home
            }),
        )
    };

    MenuScreen {
        title: tr.translate("GENERATE_SEED_TITLE").to_string(),
        entries: vec![
            MenuEntry::section(tr.translate("GENERATE_SEED_SECTION")),
            create(false),
            create(true),
        ],
        show_back: false,
    }
}

fn passphrase_menu(tr: &Translations) -> MenuScreen {
    MenuScreen {
        title: tr.translate("PASSPHRASE_MENU_TITLE").to_string(),
        entries: vec![
            MenuEntry::nav(
                Some(Icon::Password),
                tr.translate("PASSPHRASE_MENU_SET"),
                ScreenId::EnterPassphrase,
            ),
            MenuEntry::invoke(
                Some(Icon::Cross),
                tr.translate("PASSPHRASE_MENU_CLEAR"),
                Box::new(|state, _| {
                    if let Some(wallet) = state.active_mut() {
                        wallet.passphrase = None;
                    }
                    NavEffect::Stay
                }),
            ),
        ],
        show_back: false,
    }
}

fn seedphrase_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = vec![
        MenuEntry::nav(
            Some(Icon::Visible),
            tr.translate("SEEDPHRASE_MENU_SHOW"),
            ScreenId::ShowSeedphrase,
        )
        .with_emphasis(ORANGE),
        MenuEntry::section(tr.translate("SEEDPHRASE_MENU_STORE_TO")),
    ];

    if state.usable(Peripheral::SmartCard) {
        entries.push(MenuEntry::nav(
            Some(Icon::SmartCard),
            tr.translate("HARDWARE_SMARTCARD"),
            ScreenId::StoreToSmartcard,
        ));
    }
    if state.usable(Peripheral::Sd) {
        entries.push(MenuEntry::nav(
            Some(Icon::SdCard),
            tr.translate("HARDWARE_SD_CARD"),
            ScreenId::StoreToSd,
        ));
    }
    entries.push(MenuEntry::nav(
        Some(Icon::Flash),
        tr.translate("HARDWARE_INTERNAL_FLASH"),
        ScreenId::StoreToFlash,
    ));

    entries.push(MenuEntry::section(tr.translate("SEEDPHRASE_MENU_CLEAR_FROM")).with_emphasis(ORANGE));
    if state.usable(Peripheral::SmartCard) {
        entries.push(
            MenuEntry::nav(
                Some(Icon::SmartCard),
                tr.translate("HARDWARE_SMARTCARD"),
                ScreenId::ClearFromSmartcard,
            )
            .with_emphasis(RED),
        );
    }
    if state.usable(Peripheral::Sd) {
        entries.push(
            MenuEntry::nav(
                Some(Icon::SdCard),
                tr.translate("HARDWARE_SD_CARD"),
                ScreenId::ClearFromSd,
            )
            .with_emphasis(RED),
        );
    }
    entries.push(
        MenuEntry::nav(
            Some(Icon::Flash),
            tr.translate("HARDWARE_INTERNAL_FLASH"),
            ScreenId::ClearFromFlash,
        )
        .with_emphasis(RED),
    );
    entries.push(
        MenuEntry::nav(
            Some(Icon::Trash),
            tr.translate("SEEDPHRASE_MENU_CLEAR_ALL"),
            ScreenId::ClearAllStorage,
        )
        .with_emphasis(RED),
    );

    entries.push(MenuEntry::section(tr.translate("SEEDPHRASE_MENU_ADVANCED")));
    entries.push(MenuEntry::nav(
        Some(Icon::Bip85),
        tr.translate("SEEDPHRASE_MENU_BIP85"),
        ScreenId::DeriveBip85,
    ));

    MenuScreen {
        title: tr.translate("MENU_MANAGE_SEEDPHRASE").to_string(),
        entries,
        show_back: false,
    }
}

// =============================================================================
// Device Screens
// =============================================================================

fn device_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = vec![MenuEntry::section(tr.translate("DEVICE_MENU_SECTION"))];

    if state.usable(Peripheral::Sd) {
        entries.push(MenuEntry::nav(
            Some(Icon::Backup),
            tr.translate("DEVICE_MENU_BACKUPS"),
            ScreenId::ManageBackups,
        ));
    }

    if state.usable(Peripheral::Qr) || state.usable(Peripheral::Sd) || state.usable(Peripheral::Usb)
    {
        entries.push(MenuEntry::nav(
            Some(Icon::Firmware),
            tr.translate("DEVICE_MENU_FIRMWARE"),
            ScreenId::ManageFirmware,
        ));
    }

    entries.push(MenuEntry::nav(
        Some(Icon::Shield),
        tr.translate("DEVICE_MENU_SECURITY"),
        ScreenId::ManageSecurity,
    ));
    entries.push(MenuEntry::nav(
        Some(Icon::Switches),
        tr.translate("DEVICE_MENU_INTERFACES"),
        ScreenId::Interfaces,
    ));
    entries.push(MenuEntry::nav(
        Some(Icon::Display),
        tr.translate("DEVICE_MENU_DISPLAY"),
        ScreenId::DisplaySettings,
    ));
    entries.push(MenuEntry::nav(
        Some(Icon::Sound),
        tr.translate("DEVICE_MENU_SOUNDS"),
        ScreenId::SoundSettings,
    ));
    entries.push(MenuEntry::nav(
        Some(Icon::Language),
        tr.translate("DEVICE_MENU_LANGUAGE"),
        ScreenId::SelectLanguage,
    ));

    entries.push(MenuEntry::section(tr.translate("DEVICE_MENU_DANGERZONE")).with_emphasis(ORANGE));
    entries.push(
        MenuEntry::nav(
            Some(Icon::Alert),
            tr.translate("DEVICE_MENU_WIPE"),
            ScreenId::WipeDevice,
        )
        .with_emphasis(RED),
    );

    MenuScreen {
        title: tr.translate("DEVICE_MENU_TITLE").to_string(),
        entries,
        show_back: false,
    }
}

fn backups_menu(tr: &Translations) -> MenuScreen {
    MenuScreen {
        title: tr.translate("MENU_MANAGE_BACKUPS").to_string(),
        entries: vec![
            MenuEntry::nav(
                Some(Icon::Backup),
                tr.translate("BACKUPS_MENU_BACKUP_TO_SD"),
                ScreenId::BackupToSd,
            ),
            MenuEntry::nav(
                Some(Icon::Restore),
                tr.translate("BACKUPS_MENU_RESTORE_FROM_SD"),
                ScreenId::RestoreFromSd,
            ),
            MenuEntry::nav(
                Some(Icon::Cross),
                tr.translate("BACKUPS_MENU_REMOVE_FROM_SD"),
                ScreenId::RemoveBackupFromSd,
            )
            .with_emphasis(RED),
        ],
        show_back: false,
    }
}

fn firmware_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = vec![MenuEntry::section(format!(
        "{}{}{}",
        tr.translate("FIRMWARE_MENU_CURRENT_VERSION"),
        state.fw_version,
        tr.translate("FIRMWARE_MENU_UPDATE_VIA"),
    ))];

    if state.usable(Peripheral::Sd) {
        entries.push(MenuEntry::nav(
            Some(Icon::SdCard),
            tr.translate("HARDWARE_SD_CARD"),
            ScreenId::UpdateFwSd,
        ));
    }
    if state.usable(Peripheral::Usb) {
        entries.push(MenuEntry::nav(
            Some(Icon::Usb),
            tr.translate("HARDWARE_USB"),
            ScreenId::UpdateFwUsb,
        ));
    }
    if state.usable(Peripheral::Qr) {
        entries.push(MenuEntry::nav(
            Some(Icon::QrCode),
            tr.translate("HARDWARE_QR_CODE"),
            ScreenId::UpdateFwQr,
        ));
    }

    MenuScreen {
        title: tr.translate("MENU_MANAGE_FIRMWARE").to_string(),
        entries,
        show_back: false,
    }
}

fn connect_menu(tr: &Translations) -> MenuScreen {
    let entries = [
        ("CONNECT_WALLETS_SPARROW", ScreenId::ConnectSparrow),
        ("CONNECT_WALLETS_NUNCHUCK", ScreenId::ConnectNunchuck),
        ("CONNECT_WALLETS_BLUEWALLET", ScreenId::ConnectBluewallet),
        ("CONNECT_WALLETS_OTHER", ScreenId::ConnectOther),
    ]
    .into_iter()
    .map(|(key, target)| MenuEntry::nav(Some(Icon::Link), tr.translate(key), target))
    .collect();

    MenuScreen {
        title: tr.translate("MENU_CONNECT_SW_WALLET").to_string(),
        entries,
        show_back: false,
    }
}

fn security_menu(tr: &Translations) -> MenuScreen {
    MenuScreen {
        title: tr.translate("MENU_MANAGE_SECURITY").to_string(),
        entries: vec![
            MenuEntry::nav(
                Some(Icon::Password),
                tr.translate("SECURITY_MENU_CHANGE_PIN"),
                ScreenId::ChangePin,
            ),
            MenuEntry::nav(
                Some(Icon::Check),
                tr.translate("SECURITY_MENU_SELF_TEST"),
                ScreenId::SelfTest,
            ),
            // Retry-policy settings are navigable; the lock screen does not
            // consult them yet.
            MenuEntry::nav(None, tr.translate("SECURITY_MENU_PIN_RETRIES"), ScreenId::SetAllowedPinRetries),
            MenuEntry::nav(None, tr.translate("SECURITY_MENU_PIN_ACTION"), ScreenId::SetExceededPinAction),
            MenuEntry::nav(None, tr.translate("SECURITY_MENU_DURESS_PIN"), ScreenId::SetDuressPin),
            MenuEntry::nav(None, tr.translate("SECURITY_MENU_DURESS_ACTION"), ScreenId::SetDuressPinAction),
        ],
        show_back: false,
    }
}

/// One on/off row per *present* peripheral, bound to its `enabled` flag.
fn interfaces_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let rows = [
        (Peripheral::Qr, Icon::QrCode, "HARDWARE_QR_SCANNER"),
        (Peripheral::Usb, Icon::Usb, "HARDWARE_USB"),
        (Peripheral::Sd, Icon::SdCard, "HARDWARE_SD_CARD"),
        (Peripheral::SmartCard, Icon::SmartCard, "HARDWARE_SMARTCARD"),
    ];

    let entries = rows
        .into_iter()
        .filter(|(p, _, _)| state.caps(*p).has)
        .map(|(p, icon, key)| MenuEntry::toggle(icon, tr.translate(key), p, state.caps(p).enabled))
        .collect();

    MenuScreen {
        title: tr.translate("INTERFACES_MENU_TITLE").to_string(),
        entries,
        show_back: false,
    }
}

fn storage_menu(state: &DeviceState, tr: &Translations) -> MenuScreen {
    let mut entries = vec![
        MenuEntry::section(tr.translate("STORAGE_MENU_SECTION")),
        MenuEntry::nav(
            Some(Icon::Flash),
            tr.translate("STORAGE_MENU_FLASH"),
            ScreenId::InternalFlash,
        ),
    ];

    if state.usable(Peripheral::SmartCard) {
        entries.push(MenuEntry::nav(
            Some(Icon::SmartCard),
            tr.translate("STORAGE_MENU_SMARTCARD"),
            ScreenId::ManageSmartcard,
        ));
    }
    if state.usable(Peripheral::Sd) {
        entries.push(MenuEntry::nav(
            Some(Icon::SdCard),
            tr.translate("STORAGE_MENU_SD"),
            ScreenId::ManageSdCard,
        ));
    }

    MenuScreen {
        title: tr.translate("MENU_MANAGE_STORAGE").to_string(),
        entries,
        show_back: false,
    }
}

/// One row per available language; the active one carries a check icon.
/// Selecting a language switches and persists it, then navigates back.
fn language_menu(tr: &Translations) -> MenuScreen {
    let mut entries: Vec<MenuEntry> = tr
        .available_languages()
        .iter()
        .map(|code| {
            let icon = (code.as_str() == tr.current_language()).then_some(Icon::Check);
            let owned = code.clone();
            MenuEntry::invoke(
                icon,
                tr.language_name(code),
                Box::new(move |_, tr| {
                    tr.set_language(&owned);
                    NavEffect::Back
                }),
            )
        })
        .collect();

    entries.push(MenuEntry::nav(
        Some(Icon::Download),
        tr.translate("MENU_LOAD_NEW_LANGUAGE"),
        ScreenId::LoadLanguage,
    ));

    MenuScreen {
        title: tr.translate("LANGUAGE_MENU_TITLE").to_string(),
        entries,
        show_back: false,
    }
}
