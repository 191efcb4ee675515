//! Current locale, hydration, and the one persisted preference.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use folio_protocol::Locale;
use thiserror::Error;

/// Storage key of the persisted locale.
pub const LANGUAGE_KEY: &str = "portfolio-language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale read before the controller was hydrated")]
    NotHydrated,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in a file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub const FILENAME: &'static str = "preferences.json";

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/folio/preferences.json`, when the platform has a
    /// config directory.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::at(dir.join("folio").join(Self::FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&values).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, text).map_err(io_err)
    }
}

/// Owns `{ locale, hydrated }` for the lifetime of one session.
///
/// Locale-dependent reads before [`hydrate`](Self::hydrate) are a
/// programming error and return [`LocaleError::NotHydrated`].
#[derive(Debug)]
pub struct LocaleController<S> {
    store: S,
    locale: Locale,
    hydrated: bool,
}

impl<S: PreferenceStore> LocaleController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locale: Locale::default(),
            hydrated: false,
        }
    }

    /// Read the persisted preference. Missing, unreadable, or unknown
    /// values fall back to the default locale.
    pub fn hydrate(&mut self) -> Locale {
        let locale = match self.store.load(LANGUAGE_KEY) {
            Ok(Some(value)) => value.parse::<Locale>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring stored locale");
                Locale::default()
            }),
            Ok(None) => Locale::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read locale preference");
                Locale::default()
            }
        };
        self.hydrate_as(locale)
    }

    /// Hydrate with a locale chosen by the host, leaving storage untouched.
    pub fn hydrate_as(&mut self, locale: Locale) -> Locale {
        self.locale = locale;
        self.hydrated = true;
        tracing::debug!(%locale, "locale hydrated");
        locale
    }

    pub fn locale(&self) -> Result<Locale, LocaleError> {
        if self.hydrated {
            Ok(self.locale)
        } else {
            Err(LocaleError::NotHydrated)
        }
    }

    /// Flip to the other locale and persist it. A failed write is logged;
    /// the in-memory switch stands.
    pub fn toggle(&mut self) -> Result<Locale, LocaleError> {
        let next = self.locale()?.toggled();
        self.locale = next;
        if let Err(e) = self.store.save(LANGUAGE_KEY, next.as_str()) {
            tracing::warn!(error = %e, "could not persist locale preference");
        }
        tracing::info!(locale = %next, "locale toggled");
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_persists() {
        let mut ctl = LocaleController::new(MemoryPreferences::new());
        assert_eq!(ctl.hydrate(), Locale::Ja);

        assert_eq!(ctl.toggle().expect("hydrated"), Locale::En);
        assert_eq!(ctl.store().get(LANGUAGE_KEY), Some("en"));

        assert_eq!(ctl.toggle().expect("hydrated"), Locale::Ja);
        assert_eq!(ctl.store().get(LANGUAGE_KEY), Some("ja"));
    }

    #[test]
    fn reads_before_hydration_fail() {
        let mut ctl = LocaleController::new(MemoryPreferences::new());
        assert!(matches!(ctl.locale(), Err(LocaleError::NotHydrated)));
        assert!(matches!(ctl.toggle(), Err(LocaleError::NotHydrated)));
        assert_eq!(ctl.store().get(LANGUAGE_KEY), None);
    }

    #[test]
    fn stored_preference_wins_and_garbage_falls_back() {
        let mut ctl = LocaleController::new(MemoryPreferences::new().with(LANGUAGE_KEY, "en"));
        assert_eq!(ctl.hydrate(), Locale::En);

        let mut ctl = LocaleController::new(MemoryPreferences::new().with(LANGUAGE_KEY, "fr"));
        assert_eq!(ctl.hydrate(), Locale::Ja);
    }

    #[test]
    fn file_preferences_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(FilePreferences::FILENAME);

        let mut ctl = LocaleController::new(FilePreferences::at(&path));
        ctl.hydrate();
        ctl.toggle().expect("hydrated");

        let mut again = LocaleController::new(FilePreferences::at(&path));
        assert_eq!(again.hydrate(), Locale::En);
    }

    #[test]
    fn malformed_file_falls_back_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(FilePreferences::FILENAME);
        std::fs::write(&path, "{not json").expect("write fixture");

        let mut ctl = LocaleController::new(FilePreferences::at(&path));
        assert_eq!(ctl.hydrate(), Locale::Ja);
        ctl.toggle().expect("hydrated");

        let store = FilePreferences::at(&path);
        assert_eq!(store.load(LANGUAGE_KEY).expect("valid now"), Some("en".to_string()));
    }
}
