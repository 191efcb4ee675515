mod app;
mod logging;
mod rain;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{FilePreferences, Portfolio, Settings, TranslationStore};
use folio_protocol::Locale;

/// An animated terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Args {
    /// Settings file (JSON); CLI flags override its values
    #[arg(long, value_name = "PATH", env = "FOLIO_SETTINGS")]
    settings: Option<PathBuf>,

    /// Start in this locale instead of the saved preference (ja, en)
    #[arg(long, value_name = "LOCALE")]
    locale: Option<Locale>,

    /// Show commands whole instead of typing them
    #[arg(long)]
    reduced_motion: bool,

    /// Touch pacing: faster typing, rain off unless --rain
    #[arg(long)]
    touch: bool,

    /// Force the background rain on
    #[arg(long, conflicts_with = "no_rain")]
    rain: bool,

    /// Force the background rain off
    #[arg(long)]
    no_rain: bool,

    /// Fixed seed for typing jitter and rain
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Delay before a tab starts revealing
    #[arg(long, value_name = "MS")]
    start_delay_ms: Option<u64>,

    /// Where the locale preference is stored
    #[arg(long, value_name = "PATH", env = "FOLIO_PREFERENCES")]
    preferences: Option<PathBuf>,

    /// Log file (default: system temp dir); filter with RUST_LOG
    #[arg(long, value_name = "PATH", env = "FOLIO_LOG")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(locale) = self.locale {
            settings.locale_override = Some(locale);
        }
        settings.reduced_motion |= self.reduced_motion;
        settings.touch |= self.touch;
        if self.rain {
            settings.rain = Some(true);
        } else if self.no_rain {
            settings.rain = Some(false);
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(delay) = self.start_delay_ms {
            settings.start_delay_ms = delay;
        }
        Ok(settings)
    }

    fn preferences(&self) -> FilePreferences {
        match &self.preferences {
            Some(path) => FilePreferences::at(path),
            None => FilePreferences::default_location()
                .unwrap_or_else(|| FilePreferences::at(FilePreferences::FILENAME)),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("folio.log"));
    logging::init(&log_path)?;

    let settings = args.settings().context("loading settings")?;
    let store = TranslationStore::embedded().context("loading embedded content")?;
    let preferences = args.preferences();
    tracing::info!(
        preferences = %preferences.path().display(),
        ?settings,
        "starting folio"
    );

    app::run(Portfolio::new(store, preferences, settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let args = Args::parse_from([
            "folio",
            "--locale",
            "en",
            "--touch",
            "--rain",
            "--seed",
            "9",
            "--start-delay-ms",
            "0",
        ]);
        let settings = args.settings().expect("no settings file involved");
        assert_eq!(settings.locale_override, Some(Locale::En));
        assert!(settings.touch);
        assert!(settings.rain_enabled());
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.start_delay_ms, 0);
    }

    #[test]
    fn rain_flags_conflict() {
        assert!(Args::try_parse_from(["folio", "--rain", "--no-rain"]).is_err());
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(Args::try_parse_from(["folio", "--locale", "fr"]).is_err());
    }
}
