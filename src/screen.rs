//! Screen identifiers for every navigable surface.
//!
//! All navigation targets are members of one closed enum so the mapping
//! from screen to menu builder is checked exhaustively at compile time.
//! Identifiers without a dedicated builder (leaf actions like
//! [`ScreenId::WipeDevice`]) resolve to a generic acknowledgement screen
//! titled with [`ScreenId::fallback_title`].

/// Identifier of one logical screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScreenId {
    // --- Menu screens (dedicated builders in `catalog`) ---
    #[default]
    Main,
    ManageWallet,
    ManageDevice,
    ManageBackups,
    ManageFirmware,
    ConnectSwWallet,
    ChangeWallet,
    AddWallet,
    ManageSecurity,
    Interfaces,
    ManageSeedphrase,
    GenerateSeedphrase,
    SetPassphrase,
    ManageStorage,
    SelectLanguage,

    // --- Leaf actions (generic acknowledgement screen) ---
    // Input processing
    ScanQr,
    LoadSd,
    SignMessage,
    ImportFromSmartcard,
    // Wallet management
    ViewAddresses,
    ViewSigners,
    ManageWalletDescriptor,
    ChangeNetwork,
    DeleteWallet,
    ExportWallet,
    EnterPassphrase,
    // Software-wallet pairing
    ConnectSparrow,
    ConnectNunchuck,
    ConnectBluewallet,
    ConnectOther,
    // Seedphrase management
    ShowSeedphrase,
    StoreToSmartcard,
    StoreToSd,
    StoreToFlash,
    ClearFromSmartcard,
    ClearFromSd,
    ClearFromFlash,
    ClearAllStorage,
    DeriveBip85,
    // Seed import sources
    ImportFromQr,
    ImportFromSd,
    ImportFromFlash,
    ImportFromKeyboard,
    // Security settings
    ChangePin,
    SelfTest,
    SetAllowedPinRetries,
    SetExceededPinAction,
    SetDuressPin,
    SetDuressPinAction,
    // Device settings
    DisplaySettings,
    SoundSettings,
    WipeDevice,
    // Storage management
    InternalFlash,
    ManageSmartcard,
    ManageSdCard,
    // Backups
    BackupToSd,
    RestoreFromSd,
    RemoveBackupFromSd,
    // Firmware update sources
    UpdateFwSd,
    UpdateFwUsb,
    UpdateFwQr,
    // Language
    LoadLanguage,
}

impl ScreenId {
    /// Canonical snake_case identifier, used for logging and as the raw
    /// material for [`Self::fallback_title`].
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::ManageWallet => "manage_wallet",
            Self::ManageDevice => "manage_device",
            Self::ManageBackups => "manage_backups",
            Self::ManageFirmware => "manage_firmware",
            Self::ConnectSwWallet => "connect_sw_wallet",
            Self::ChangeWallet => "change_wallet",
            Self::AddWallet => "add_wallet",
            Self::ManageSecurity => "manage_security",
            Self::Interfaces => "interfaces",
            Self::ManageSeedphrase => "manage_seedphrase",
            Self::GenerateSeedphrase => "generate_seedphrase",
            Self::SetPassphrase => "set_passphrase",
            Self::ManageStorage => "manage_storage",
            Self::SelectLanguage => "select_language",
            Self::ScanQr => "scan_qr",
            Self::LoadSd => "load_sd",
            Self::SignMessage => "sign_message",
            Self::ImportFromSmartcard => "import_from_smartcard",
            Self::ViewAddresses => "view_addresses",
            Self::ViewSigners => "view_signers",
            Self::ManageWalletDescriptor => "manage_wallet_descriptor",
            Self::ChangeNetwork => "change_network",
            Self::DeleteWallet => "delete_wallet",
            Self::ExportWallet => "export_wallet",
            Self::EnterPassphrase => "enter_passphrase",
            Self::ConnectSparrow => "connect_sparrow",
            Self::ConnectNunchuck => "connect_nunchuck",
            Self::ConnectBluewallet => "connect_bluewallet",
            Self::ConnectOther => "connect_other",
            Self::ShowSeedphrase => "show_seedphrase",
            Self::StoreToSmartcard => "store_to_smartcard",
            Self::StoreToSd => "store_to_sd",
            Self::StoreToFlash => "store_to_flash",
            Self::ClearFromSmartcard => "clear_from_smartcard",
            Self::ClearFromSd => "clear_from_sd",
            Self::ClearFromFlash => "clear_from_flash",
            Self::ClearAllStorage => "clear_all_storage",
            Self::DeriveBip85 => "derive_bip85",
            Self::ImportFromQr => "import_from_qr",
            Self::ImportFromSd => "import_from_sd",
            Self::ImportFromFlash => "import_from_flash",
            Self::ImportFromKeyboard => "import_from_keyboard",
            Self::ChangePin => "change_pin",
            Self::SelfTest => "self_test",
            Self::SetAllowedPinRetries => "set_allowed_pin_retries",
            Self::SetExceededPinAction => "set_exceeded_pin_action",
            Self::SetDuressPin => "set_duress_pin",
            Self::SetDuressPinAction => "set_duress_pin_action",
            Self::DisplaySettings => "display_settings",
            Self::SoundSettings => "sound_settings",
            Self::WipeDevice => "wipe_device",
            Self::InternalFlash => "internal_flash",
            Self::ManageSmartcard => "smartcard",
            Self::ManageSdCard => "sdcard",
            Self::BackupToSd => "backup_to_sd",
            Self::RestoreFromSd => "restore_from_sd",
            Self::RemoveBackupFromSd => "remove_backup_from_sd",
            Self::UpdateFwSd => "update_fw_sd",
            Self::UpdateFwUsb => "update_fw_usb",
            Self::UpdateFwQr => "update_fw_qr",
            Self::LoadLanguage => "load_language",
        }
    }

    /// Human-readable title for screens without a dedicated builder:
    /// underscores become spaces, the first letter is capitalized.
    pub fn fallback_title(self) -> String {
        let spaced = self.slug().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => spaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_main() {
        assert_eq!(ScreenId::default(), ScreenId::Main);
    }

    #[test]
    fn test_fallback_title_humanizes_slug() {
        assert_eq!(ScreenId::WipeDevice.fallback_title(), "Wipe device");
        assert_eq!(ScreenId::ScanQr.fallback_title(), "Scan qr");
        assert_eq!(
            ScreenId::SetAllowedPinRetries.fallback_title(),
            "Set allowed pin retries"
        );
    }

    #[test]
    fn test_slug_is_snake_case() {
        for id in [
            ScreenId::Main,
            ScreenId::ManageWalletDescriptor,
            ScreenId::RemoveBackupFromSd,
            ScreenId::UpdateFwQr,
        ] {
            let slug = id.slug();
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "slug '{slug}' must be snake_case"
            );
        }
    }
}
