use std::path::Path;

use folio_core::{LANGUAGE_KEY, MemoryPreferences, PreferenceStore, Settings, TranslationStore};
use folio_protocol::TabId;
use wasm_bindgen::prelude::*;

/// Host timestamps arrive as JS numbers.
fn ms(now_ms: f64) -> u64 {
    now_ms.max(0.0) as u64
}

fn parse_tab(tab: &str) -> Option<TabId> {
    TabId::ALL.into_iter().find(|id| id.as_str() == tab)
}

/// The portfolio driven by a browser host. The host owns the clock,
/// calls `tick` on animation frames and persists `language()` itself.
#[wasm_bindgen]
pub struct Portfolio {
    inner: folio_core::Portfolio<MemoryPreferences>,
}

#[wasm_bindgen]
impl Portfolio {
    /// `settings_json` uses the same shape as the terminal settings file.
    /// `stored_language` is whatever the host saved last time.
    #[wasm_bindgen(constructor)]
    pub fn new(
        settings_json: Option<String>,
        stored_language: Option<String>,
    ) -> Result<Portfolio, JsError> {
        let settings = match settings_json.as_deref() {
            Some(text) => Settings::from_json(text, Path::new("<host settings>"))
                .map_err(|e| JsError::new(&e.to_string()))?,
            None => Settings::default(),
        };
        let store = TranslationStore::embedded().map_err(|e| JsError::new(&e.to_string()))?;
        let mut preferences = MemoryPreferences::new();
        if let Some(language) = stored_language.as_deref() {
            preferences = preferences.with(LANGUAGE_KEY, language);
        }
        Ok(Self {
            inner: folio_core::Portfolio::new(store, preferences, settings),
        })
    }

    /// Resolve the locale and start the first tab. Returns the locale.
    pub fn hydrate(&mut self, now_ms: f64) -> String {
        self.inner.hydrate(ms(now_ms)).to_string()
    }

    pub fn is_hydrated(&self) -> bool {
        self.inner.is_hydrated()
    }

    /// Advance time. Returns whether the frame changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.inner.tick(ms(now_ms))
    }

    /// When the next `tick` has work to do, if ever.
    pub fn next_wakeup(&self) -> Option<f64> {
        self.inner.next_wakeup().map(|at| at as f64)
    }

    pub fn select_tab(&mut self, tab: &str, now_ms: f64) -> Result<bool, JsError> {
        let tab = parse_tab(tab).ok_or_else(|| JsError::new(&format!("unknown tab: {tab}")))?;
        Ok(self.inner.select_tab(tab, ms(now_ms)))
    }

    pub fn toggle_locale(&mut self, now_ms: f64) -> Result<String, JsError> {
        self.inner
            .toggle_locale(ms(now_ms))
            .map(|locale| locale.to_string())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn toggle_career(&mut self, id: &str) -> bool {
        self.inner.toggle_career(id)
    }

    /// The language preference to persist, once one has been chosen.
    pub fn language(&self) -> Option<String> {
        self.inner
            .preferences()
            .load(LANGUAGE_KEY)
            .ok()
            .flatten()
    }

    /// The current frame as JSON, or `undefined` before hydration.
    pub fn frame_json(&self) -> Result<Option<String>, JsError> {
        self.inner
            .frame()
            .map(|frame| serde_json::to_string(&frame))
            .transpose()
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_names_match_wire_form() {
        assert_eq!(parse_tab("careers"), Some(TabId::Careers));
        assert_eq!(parse_tab("Careers"), None);
    }

    #[test]
    fn stored_language_is_used_and_toggled() {
        let mut portfolio =
            Portfolio::new(Some(r#"{"seed": 1}"#.into()), Some("en".into())).expect("builds");
        assert!(portfolio.frame_json().expect("serializes").is_none());
        assert!(!portfolio.is_hydrated());
        assert_eq!(portfolio.hydrate(0.0), "en");
        assert!(portfolio.is_hydrated());
        assert!(portfolio.toggle_locale(10.0).is_ok());
        assert_eq!(portfolio.language().as_deref(), Some("ja"));
    }

    #[test]
    fn frame_json_reports_the_active_tab() {
        let mut portfolio = Portfolio::new(None, None).expect("builds");
        portfolio.hydrate(0.0);
        assert!(portfolio.select_tab("skills", 5.0).is_ok());
        let json = portfolio.frame_json().expect("serializes").expect("hydrated");
        assert!(json.contains(r#""active_tab":"skills""#));
    }
}
