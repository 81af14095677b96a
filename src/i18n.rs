//! UI translation resolution and language persistence.
//!
//! One JSON resource per language (`lang_<code>.json`) holds a metadata
//! block and a key→text mapping. Resolution always loads the default
//! language first and fills any key the selected language is missing, so
//! the resolved table is guaranteed to cover every default-language key.
//!
//! Nothing in here is fatal: missing files, malformed JSON and surprising
//! value shapes all degrade to a well-defined default with one log line.
//! [`Translations::translate`] is total: an unknown key comes back
//! verbatim, so callers never deal with an absent label.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

/// Language used to seed the resolved table and to fill missing keys.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Preference-store key holding the persisted language choice.
pub const LANGUAGE_PREF_KEY: &str = "selected_language";

const LANGUAGE_FILE_PREFIX: &str = "lang_";
const LANGUAGE_FILE_SUFFIX: &str = ".json";

// =============================================================================
// Errors (logged and degraded, never propagated to the UI)
// =============================================================================

/// Why a language file could not be used.
#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("language file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("unreadable language file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in language file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// =============================================================================
// Preference Store (opaque key-value persistence)
// =============================================================================

/// Minimal key-value persistence for UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// File-backed preference store: one flat JSON object.
///
/// Read once at open; every `set` rewrites the file. I/O failures are
/// logged and the in-memory copy keeps working.
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    warn!("preference file {} is malformed, starting empty: {e}", path.display());
                    BTreeMap::new()
                }
            },
            // Absent file is the normal first-boot case.
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        match serde_json::to_string_pretty(&self.values) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    warn!("could not persist preferences to {}: {e}", self.path.display());
                }
            }
            Err(e) => warn!("could not serialize preferences: {e}"),
        }
    }
}

// =============================================================================
// Language File Model
// =============================================================================

#[derive(Deserialize)]
struct LanguageFile {
    #[serde(default)]
    metadata: LanguageMetadata,
    #[serde(default)]
    translations: BTreeMap<String, TranslationValue>,
}

#[derive(Deserialize, Default)]
struct LanguageMetadata {
    #[serde(default)]
    language_code: String,
    #[serde(default)]
    language_name: String,
}

/// Raw value of one translation entry.
///
/// Plain strings are the default-language format; records carry a `text`
/// (preferred) or a `ref_en` fallback. Anything else is coerced to its
/// JSON rendering with a warning.
#[derive(Deserialize)]
#[serde(untagged)]
enum TranslationValue {
    Text(String),
    Record {
        text: Option<String>,
        ref_en: Option<String>,
    },
    Other(serde_json::Value),
}

impl TranslationValue {
    fn into_display(self, key: &str, path: &Path) -> String {
        match self {
            Self::Text(text) => text,
            Self::Record { text, ref_en } => {
                text.or(ref_en).unwrap_or_else(|| key.to_string())
            }
            Self::Other(value) => {
                warn!(
                    "coercing unexpected translation value for key '{key}' in {}",
                    path.display()
                );
                value.to_string()
            }
        }
    }
}

// =============================================================================
// Translations Resolver
// =============================================================================

/// Active-language translation table with default-language fallback.
pub struct Translations {
    dir: PathBuf,
    prefs: Box<dyn PreferenceStore>,
    current_language: String,
    available_languages: Vec<String>,
    table: BTreeMap<String, String>,
}

impl Translations {
    /// Build the resolver at boot: scan the language directory, restore the
    /// persisted language choice (or the default) and resolve its table.
    pub fn open(dir: impl Into<PathBuf>, prefs: Box<dyn PreferenceStore>) -> Self {
        let dir = dir.into();
        let available_languages = scan_available_languages(&dir);

        let mut resolver = Self {
            dir,
            prefs,
            current_language: DEFAULT_LANGUAGE.to_string(),
            available_languages,
            table: BTreeMap::new(),
        };

        let saved = resolver
            .prefs
            .get(LANGUAGE_PREF_KEY)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let boot_language = if resolver.available_languages.iter().any(|l| l == &saved) {
            saved
        } else {
            warn!("saved language '{saved}' not available, using '{DEFAULT_LANGUAGE}'");
            DEFAULT_LANGUAGE.to_string()
        };
        resolver.set_language(&boot_language);
        resolver
    }

    /// Switch the active language.
    ///
    /// Unknown codes are rejected without touching any state. A known code
    /// always succeeds: resolution degrades to the default table when the
    /// backing file is missing or malformed. The choice is persisted
    /// immediately.
    pub fn set_language(&mut self, code: &str) -> bool {
        if !self.available_languages.iter().any(|l| l == code) {
            warn!(
                "language '{code}' not available (available: {:?})",
                self.available_languages
            );
            return false;
        }

        self.table = self.resolve(code);
        self.current_language = code.to_string();
        self.prefs.set(LANGUAGE_PREF_KEY, code);
        true
    }

    /// Translate `key`, falling back to the key itself when unknown.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map_or(key, String::as_str)
    }

    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    pub fn available_languages(&self) -> &[String] {
        &self.available_languages
    }

    /// Human-readable name of a language, from its file metadata.
    /// Falls back to the code when the file or the name is absent.
    pub fn language_name(&self, code: &str) -> String {
        let path = self.language_path(code);
        match load_language_file(&path) {
            Ok(file) if !file.metadata.language_name.is_empty() => file.metadata.language_name,
            _ => code.to_string(),
        }
    }

    /// Number of keys in the resolved table (diagnostics and tests).
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    fn language_path(&self, code: &str) -> PathBuf {
        self.dir
            .join(format!("{LANGUAGE_FILE_PREFIX}{code}{LANGUAGE_FILE_SUFFIX}"))
    }

    /// Load the default table, then overlay `code` and fill its gaps.
    fn resolve(&self, code: &str) -> BTreeMap<String, String> {
        let default_table = match self.load_table(DEFAULT_LANGUAGE) {
            Ok(table) => table,
            Err(e) => {
                warn!("default language unavailable: {e}");
                BTreeMap::new()
            }
        };

        if code == DEFAULT_LANGUAGE {
            return default_table;
        }

        match self.load_table(code) {
            Ok(mut table) => {
                let mut missing = 0usize;
                for (key, value) in &default_table {
                    if !table.contains_key(key) {
                        table.insert(key.clone(), value.clone());
                        missing += 1;
                    }
                }
                if missing > 0 {
                    warn!(
                        "language '{code}' is missing {missing} translation(s), \
                         falling back to '{DEFAULT_LANGUAGE}' for those keys"
                    );
                }
                table
            }
            Err(e) => {
                warn!("using default language outright: {e}");
                default_table
            }
        }
    }

    fn load_table(&self, code: &str) -> Result<BTreeMap<String, String>, LanguageError> {
        let path = self.language_path(code);
        let file = load_language_file(&path)?;

        if !file.metadata.language_code.is_empty() && file.metadata.language_code != code {
            warn!(
                "language code mismatch in {}: metadata says '{}'",
                path.display(),
                file.metadata.language_code
            );
        }

        Ok(file
            .translations
            .into_iter()
            .map(|(key, value)| {
                let display = value.into_display(&key, &path);
                (key, display)
            })
            .collect())
    }
}

fn load_language_file(path: &Path) -> Result<LanguageFile, LanguageError> {
    if !path.exists() {
        return Err(LanguageError::Missing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| LanguageError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LanguageError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Enumerate language files in `dir`.
///
/// A code is accepted only if it is exactly two alphabetic characters
/// (normalized to lowercase); anything else is logged and skipped. The
/// default language is always listed, even with no backing file.
fn scan_available_languages(dir: &Path) -> Vec<String> {
    let mut languages = Vec::new();

    match fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let name = entry.file_name();
                let Some(name) = name.to_str() else { continue };
                let Some(code) = name
                    .strip_prefix(LANGUAGE_FILE_PREFIX)
                    .and_then(|rest| rest.strip_suffix(LANGUAGE_FILE_SUFFIX))
                else {
                    continue;
                };

                if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
                    languages.push(code.to_ascii_lowercase());
                } else {
                    warn!(
                        "ignoring language file '{name}': code '{code}' is not \
                         two letters (ISO 639-1)"
                    );
                }
            }
        }
        Err(e) => warn!("could not scan language directory {}: {e}", dir.display()),
    }

    if !languages.iter().any(|l| l == DEFAULT_LANGUAGE) {
        languages.push(DEFAULT_LANGUAGE.to_string());
    }
    languages.sort();
    languages.dedup();
    info!("available languages: {languages:?}");
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    /// In-memory store that records writes for assertions.
    struct MemoryStore {
        values: Rc<RefCell<BTreeMap<String, String>>>,
    }

    impl MemoryStore {
        fn new() -> (Self, Rc<RefCell<BTreeMap<String, String>>>) {
            let values = Rc::new(RefCell::new(BTreeMap::new()));
            (
                Self {
                    values: Rc::clone(&values),
                },
                values,
            )
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    fn write_lang(dir: &Path, code: &str, body: &str) {
        fs::write(dir.join(format!("lang_{code}.json")), body).expect("write language file");
    }

    fn open_with_memory_store(dir: &Path) -> (Translations, Rc<RefCell<BTreeMap<String, String>>>) {
        let (store, values) = MemoryStore::new();
        (Translations::open(dir, Box::new(store)), values)
    }

    // -------------------------------------------------------------------------
    // Scanning Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_scan_accepts_two_letter_codes_only() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "en", r#"{"translations": {}}"#);
        write_lang(dir.path(), "de", r#"{"translations": {}}"#);
        write_lang(dir.path(), "xyz", r#"{"translations": {}}"#);
        write_lang(dir.path(), "d1", r#"{"translations": {}}"#);
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

        let languages = scan_available_languages(dir.path());
        assert_eq!(languages, ["de", "en"], "only valid two-letter codes survive");
    }

    #[test]
    fn test_default_language_always_available() {
        let dir = TempDir::new().expect("tempdir");
        let languages = scan_available_languages(dir.path());
        assert_eq!(
            languages,
            [DEFAULT_LANGUAGE],
            "default language must be listed even with no files"
        );
    }

    #[test]
    fn test_scan_normalizes_to_lowercase() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "FR", r#"{"translations": {}}"#);
        let languages = scan_available_languages(dir.path());
        assert!(languages.contains(&"fr".to_string()), "codes normalize to lowercase");
    }

    // -------------------------------------------------------------------------
    // Resolution Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_resolve_fills_missing_keys_from_default() {
        let dir = TempDir::new().expect("tempdir");

        // 50 default keys; the selected language covers all but 3.
        let mut en = String::from("{\"translations\": {");
        let mut de = String::from("{\"translations\": {");
        for i in 0..50 {
            en.push_str(&format!("\"KEY_{i}\": \"english {i}\","));
            if i >= 3 {
                de.push_str(&format!("\"KEY_{i}\": \"deutsch {i}\","));
            }
        }
        en.pop();
        de.pop();
        en.push_str("}}");
        de.push_str("}}");
        write_lang(dir.path(), "en", &en);
        write_lang(dir.path(), "de", &de);

        let (mut tr, _) = open_with_memory_store(dir.path());
        assert!(tr.set_language("de"));
        assert_eq!(tr.table_len(), 50, "resolved table must cover every default key");
        assert_eq!(tr.translate("KEY_0"), "english 0", "missing key falls back to default");
        assert_eq!(tr.translate("KEY_2"), "english 2");
        assert_eq!(tr.translate("KEY_3"), "deutsch 3", "present keys keep their translation");
    }

    #[test]
    fn test_translate_is_total() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "en", r#"{"translations": {"KNOWN": "Known"}}"#);
        let (tr, _) = open_with_memory_store(dir.path());
        assert_eq!(tr.translate("KNOWN"), "Known");
        assert_eq!(
            tr.translate("NO_SUCH_KEY"),
            "NO_SUCH_KEY",
            "unknown keys come back verbatim"
        );
    }

    #[test]
    fn test_value_shapes_coerce() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(
            dir.path(),
            "en",
            r#"{"translations": {
                "PLAIN": "plain",
                "RECORD": {"text": "from text"},
                "REF_ONLY": {"ref_en": "from ref"},
                "NUMBER": 42
            }}"#,
        );
        let (tr, _) = open_with_memory_store(dir.path());
        assert_eq!(tr.translate("PLAIN"), "plain");
        assert_eq!(tr.translate("RECORD"), "from text", "text field is preferred");
        assert_eq!(tr.translate("REF_ONLY"), "from ref", "ref_en is the record fallback");
        assert_eq!(tr.translate("NUMBER"), "42", "other shapes coerce to a display string");
    }

    #[test]
    fn test_malformed_selected_language_degrades_to_default() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "en", r#"{"translations": {"TITLE": "Title"}}"#);
        write_lang(dir.path(), "de", "{ this is not json");

        let (mut tr, _) = open_with_memory_store(dir.path());
        assert!(
            tr.set_language("de"),
            "a scanned language switches even when its file is bad"
        );
        assert_eq!(tr.current_language(), "de");
        assert_eq!(tr.translate("TITLE"), "Title", "table falls back to the default outright");
    }

    #[test]
    fn test_missing_default_file_yields_empty_table() {
        let dir = TempDir::new().expect("tempdir");
        let (tr, _) = open_with_memory_store(dir.path());
        assert_eq!(tr.current_language(), DEFAULT_LANGUAGE);
        assert_eq!(tr.table_len(), 0, "no backing data means empty-but-present table");
        assert_eq!(tr.translate("ANY"), "ANY", "translate still total with empty table");
    }

    // -------------------------------------------------------------------------
    // Language Switching & Persistence Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_language_rejects_unknown_code() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "en", r#"{"translations": {"TITLE": "Title"}}"#);
        let (mut tr, writes) = open_with_memory_store(dir.path());
        let before = writes.borrow().clone();

        assert!(!tr.set_language("zz"), "unknown code must be rejected");
        assert_eq!(tr.current_language(), "en", "rejected switch leaves state unchanged");
        assert_eq!(*writes.borrow(), before, "rejected switch must not persist anything");
    }

    #[test]
    fn test_set_language_persists_choice() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "en", r#"{"translations": {}}"#);
        write_lang(dir.path(), "de", r#"{"translations": {}}"#);
        let (mut tr, writes) = open_with_memory_store(dir.path());

        assert!(tr.set_language("de"));
        assert_eq!(
            writes.borrow().get(LANGUAGE_PREF_KEY).map(String::as_str),
            Some("de"),
            "language choice must be persisted on change"
        );
    }

    #[test]
    fn test_boot_restores_saved_language() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "en", r#"{"translations": {"TITLE": "Title"}}"#);
        write_lang(dir.path(), "de", r#"{"translations": {"TITLE": "Titel"}}"#);

        let (mut store, _) = MemoryStore::new();
        store.set(LANGUAGE_PREF_KEY, "de");
        let tr = Translations::open(dir.path(), Box::new(store));
        assert_eq!(tr.current_language(), "de");
        assert_eq!(tr.translate("TITLE"), "Titel");
    }

    #[test]
    fn test_boot_falls_back_when_saved_language_missing() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(dir.path(), "en", r#"{"translations": {}}"#);
        let (mut store, _) = MemoryStore::new();
        store.set(LANGUAGE_PREF_KEY, "fr");
        let tr = Translations::open(dir.path(), Box::new(store));
        assert_eq!(
            tr.current_language(),
            DEFAULT_LANGUAGE,
            "unavailable saved language must fall back to default"
        );
    }

    #[test]
    fn test_json_preference_store_round_trip() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("prefs.json");

        let mut store = JsonPreferenceStore::open(&path);
        assert!(store.get(LANGUAGE_PREF_KEY).is_none(), "fresh store is empty");
        store.set(LANGUAGE_PREF_KEY, "de");

        let reopened = JsonPreferenceStore::open(&path);
        assert_eq!(
            reopened.get(LANGUAGE_PREF_KEY).as_deref(),
            Some("de"),
            "preferences must survive reopen"
        );
    }

    #[test]
    fn test_language_name_from_metadata() {
        let dir = TempDir::new().expect("tempdir");
        write_lang(
            dir.path(),
            "de",
            r#"{"metadata": {"language_code": "de", "language_name": "Deutsch"},
                "translations": {}}"#,
        );
        write_lang(dir.path(), "en", r#"{"translations": {}}"#);
        let (tr, _) = open_with_memory_store(dir.path());
        assert_eq!(tr.language_name("de"), "Deutsch");
        assert_eq!(tr.language_name("en"), "en", "missing name falls back to the code");
    }
}
