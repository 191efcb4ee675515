//! Core of the folio terminal portfolio: bilingual content, the clock-free
//! reveal engine, the four tabs and their paint views.

pub mod config;
pub mod engine;
pub mod lines;
pub mod locale;
pub mod model;
pub mod portfolio;
pub mod store;
pub mod tabs;
pub mod views;

pub use config::{Settings, SettingsError};
pub use locale::{
    FilePreferences, LANGUAGE_KEY, LocaleController, LocaleError, MemoryPreferences, PreferenceStore,
    StoreError,
};
pub use portfolio::Portfolio;
pub use store::{ContentError, TranslationStore};
