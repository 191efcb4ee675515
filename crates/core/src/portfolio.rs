//! The application model: content, locale, active tab, and the four tabs.
//!
//! Hosts drive it with their own clock. A typical loop is
//!
//! ```text
//! hydrate(now)
//! loop {
//!     handle input  -> select_tab / toggle_locale / activate
//!     tick(now)     -> repaint with frame() when it returns true
//!     sleep until next_wakeup() or the next input event
//! }
//! ```

use std::collections::BTreeSet;

use folio_protocol::{Interactive, Locale, PaintCommand, TabId, TabLabel, TerminalFrame};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Settings;
use crate::locale::{LocaleController, LocaleError, PreferenceStore};
use crate::model::ContentTree;
use crate::store::TranslationStore;
use crate::tabs::{Careers, PaintContext, Profile, Projects, Skills, Tab};

struct Tabs {
    profile: Tab<Profile>,
    skills: Tab<Skills>,
    careers: Tab<Careers>,
    projects: Tab<Projects>,
}

impl Tabs {
    fn new(content: &ContentTree, settings: &Settings, rng: &mut StdRng) -> Self {
        let delay = settings.start_delay_ms;
        let motion = settings.motion();
        let mut seeded = || StdRng::seed_from_u64(rng.random());
        Self {
            profile: Tab::new(content, delay, motion, seeded()),
            skills: Tab::new(content, delay, motion, seeded()),
            careers: Tab::new(content, delay, motion, seeded()),
            projects: Tab::new(content, delay, motion, seeded()),
        }
    }

    fn set_visible(&mut self, tab: TabId, visible: bool, now_ms: u64) -> bool {
        match tab {
            TabId::Profile => self.profile.set_visible(visible, now_ms),
            TabId::Skills => self.skills.set_visible(visible, now_ms),
            TabId::Careers => self.careers.set_visible(visible, now_ms),
            TabId::Projects => self.projects.set_visible(visible, now_ms),
        }
    }

    fn reload(&mut self, content: &ContentTree, now_ms: u64) {
        self.profile.reload(content, now_ms);
        self.skills.reload(content, now_ms);
        self.careers.reload(content, now_ms);
        self.projects.reload(content, now_ms);
    }

    fn tick(&mut self, now_ms: u64) -> bool {
        // Hidden tabs return false without touching anything.
        let mut changed = self.profile.tick(now_ms);
        changed |= self.skills.tick(now_ms);
        changed |= self.careers.tick(now_ms);
        changed |= self.projects.tick(now_ms);
        changed
    }

    fn next_wakeup(&self) -> Option<u64> {
        [
            self.profile.next_wakeup(),
            self.skills.next_wakeup(),
            self.careers.next_wakeup(),
            self.projects.next_wakeup(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn paint(&self, tab: TabId, ctx: PaintContext<'_>) -> (Vec<PaintCommand>, bool) {
        match tab {
            TabId::Profile => (self.profile.paint(ctx), self.profile.is_complete()),
            TabId::Skills => (self.skills.paint(ctx), self.skills.is_complete()),
            TabId::Careers => (self.careers.paint(ctx), self.careers.is_complete()),
            TabId::Projects => (self.projects.paint(ctx), self.projects.is_complete()),
        }
    }

    fn is_complete(&self, tab: TabId) -> bool {
        match tab {
            TabId::Profile => self.profile.is_complete(),
            TabId::Skills => self.skills.is_complete(),
            TabId::Careers => self.careers.is_complete(),
            TabId::Projects => self.projects.is_complete(),
        }
    }
}

pub struct Portfolio<S> {
    store: TranslationStore,
    locale: LocaleController<S>,
    settings: Settings,
    active: TabId,
    /// Expanded career cards. Survives tab switches and locale changes.
    expanded: BTreeSet<String>,
    /// Built on hydration; nothing locale-dependent exists before that.
    tabs: Option<Tabs>,
    rng: StdRng,
}

impl<S: PreferenceStore> Portfolio<S> {
    pub fn new(store: TranslationStore, preferences: S, settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            store,
            locale: LocaleController::new(preferences),
            settings,
            active: TabId::Profile,
            expanded: BTreeSet::new(),
            tabs: None,
            rng,
        }
    }

    /// Resolve the locale, build the tabs and start the active one.
    /// Calling it again has no effect.
    pub fn hydrate(&mut self, now_ms: u64) -> Locale {
        if let (Some(_), Ok(locale)) = (&self.tabs, self.locale.locale()) {
            return locale;
        }
        let locale = match self.settings.locale_override {
            Some(locale) => self.locale.hydrate_as(locale),
            None => self.locale.hydrate(),
        };
        let mut tabs = Tabs::new(self.store.get(locale), &self.settings, &mut self.rng);
        tabs.set_visible(self.active, true, now_ms);
        self.tabs = Some(tabs);
        tracing::info!(%locale, tab = %self.active, "portfolio hydrated");
        locale
    }

    pub fn is_hydrated(&self) -> bool {
        self.tabs.is_some()
    }

    pub fn locale(&self) -> Result<Locale, LocaleError> {
        self.locale.locale()
    }

    pub fn active_tab(&self) -> TabId {
        self.active
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn preferences(&self) -> &S {
        self.locale.store()
    }

    /// Switch tabs. The old tab is suspended, the new one starts or resumes.
    pub fn select_tab(&mut self, tab: TabId, now_ms: u64) -> bool {
        if tab == self.active {
            return false;
        }
        let previous = std::mem::replace(&mut self.active, tab);
        if let Some(tabs) = self.tabs.as_mut() {
            tabs.set_visible(previous, false, now_ms);
            tabs.set_visible(tab, true, now_ms);
        }
        tracing::debug!(from = %previous, to = %tab, "tab selected");
        true
    }

    /// Switch locale and regenerate every tab. The active tab restarts
    /// right away; the others start fresh when next shown.
    pub fn toggle_locale(&mut self, now_ms: u64) -> Result<Locale, LocaleError> {
        let locale = self.locale.toggle()?;
        if let Some(tabs) = self.tabs.as_mut() {
            tabs.reload(self.store.get(locale), now_ms);
        }
        Ok(locale)
    }

    /// Expand or collapse a career card. Returns whether it is now expanded.
    pub fn toggle_career(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Follow a tab link or toggle a career card.
    pub fn activate(&mut self, item: &Interactive, now_ms: u64) -> bool {
        match item {
            Interactive::TabLink(tab) => self.select_tab(*tab, now_ms),
            Interactive::Career(id) => {
                self.toggle_career(id);
                true
            }
        }
    }

    /// Advance the active tab to `now_ms`. Returns whether the frame changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.tabs.as_mut().is_some_and(|tabs| tabs.tick(now_ms))
    }

    /// Host time at which the next tick has work to do.
    pub fn next_wakeup(&self) -> Option<u64> {
        self.tabs.as_ref().and_then(Tabs::next_wakeup)
    }

    pub fn is_complete(&self, tab: TabId) -> bool {
        self.tabs.as_ref().is_some_and(|tabs| tabs.is_complete(tab))
    }

    /// What to draw now; `None` until hydrated.
    pub fn frame(&self) -> Option<TerminalFrame> {
        let tabs = self.tabs.as_ref()?;
        let locale = self.locale.locale().ok()?;
        let content = self.store.get(locale);
        let (body, complete) = tabs.paint(
            self.active,
            PaintContext {
                content,
                expanded: &self.expanded,
            },
        );
        Some(TerminalFrame {
            locale,
            active_tab: self.active,
            window_title: format!(
                "{}@{} - ~/{}",
                content.portfolio.user,
                content.portfolio.host,
                self.active.as_str()
            ),
            section_title: content.portfolio.section_titles.get(self.active).to_string(),
            tabs: TabId::ALL
                .iter()
                .map(|&id| TabLabel {
                    id,
                    label: content.tabs.get(id).to_string(),
                    active: id == self.active,
                })
                .collect(),
            body,
            complete,
        })
    }
}
