use std::path::{Path, PathBuf};

use folio_protocol::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::MotionPolicy;
use crate::engine::timing::START_DELAY_MS;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Host-level knobs. Every field has a default, so an empty object or a
/// missing file both mean "defaults".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between a tab becoming visible and its first line.
    pub start_delay_ms: u64,
    pub reduced_motion: bool,
    /// Touch environment: faster typing, no background rain by default.
    pub touch: bool,
    /// Background rain; unset means "on unless touch".
    pub rain: Option<bool>,
    /// Fixed seed for typing jitter. Unset seeds from the OS.
    pub seed: Option<u64>,
    /// Start in this locale instead of the stored preference.
    pub locale_override: Option<Locale>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_delay_ms: START_DELAY_MS,
            reduced_motion: false,
            touch: false,
            rain: None,
            seed: None,
            locale_override: None,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str, origin: &Path) -> Result<Self, SettingsError> {
        serde_json::from_str(text).map_err(|source| SettingsError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from `path`; a file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let settings = Self::from_json(&text, path)?;
                tracing::debug!(path = %path.display(), ?settings, "settings loaded");
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn motion(&self) -> MotionPolicy {
        MotionPolicy {
            reduced_motion: self.reduced_motion,
            touch: self.touch,
        }
    }

    pub fn rain_enabled(&self) -> bool {
        self.rain.unwrap_or(!self.touch)
    }
}
