use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::{Portfolio, PreferenceStore};
use folio_protocol::TabId;
use ratatui::{DefaultTerminal, Terminal, backend::CrosstermBackend};

use crate::rain::MatrixRain;
use crate::renderer::{self, View};

/// Longest the loop sleeps when nothing is scheduled.
const IDLE_POLL_MS: u64 = 1000;
const PAGE_ROWS: u16 = 10;

pub struct App<S> {
    portfolio: Portfolio<S>,
    rain: Option<MatrixRain>,
    scroll: u16,
    follow: bool,
    focus: Option<usize>,
    quit: bool,
}

impl<S: PreferenceStore> App<S> {
    pub fn new(portfolio: Portfolio<S>) -> Self {
        let settings = portfolio.settings();
        let rain = settings
            .rain_enabled()
            .then(|| MatrixRain::new(settings.seed));
        Self {
            portfolio,
            rain,
            scroll: 0,
            follow: true,
            focus: None,
            quit: false,
        }
    }

    fn next_wakeup(&self) -> Option<u64> {
        let rain = self.rain.as_ref().and_then(MatrixRain::next_wakeup);
        match (self.portfolio.next_wakeup(), rain) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn interactive_count(&self) -> usize {
        self.portfolio
            .frame()
            .map_or(0, |frame| frame.interactive_items().len())
    }

    fn select_tab(&mut self, tab: TabId, now_ms: u64) {
        if self.portfolio.select_tab(tab, now_ms) {
            self.scroll = 0;
            self.follow = true;
            self.focus = None;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.interactive_count();
        if count == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(match (self.focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }

    fn activate_focus(&mut self, now_ms: u64) {
        let Some(index) = self.focus else { return };
        let Some(item) = self
            .portfolio
            .frame()
            .and_then(|frame| frame.interactive_items().into_iter().nth(index))
        else {
            self.focus = None;
            return;
        };
        let tab = self.portfolio.active_tab();
        self.portfolio.activate(&item, now_ms);
        if self.portfolio.active_tab() != tab {
            self.scroll = 0;
            self.follow = true;
            self.focus = None;
        }
    }

    fn toggle_rain(&mut self) {
        self.rain = match self.rain.take() {
            Some(_) => None,
            None => Some(MatrixRain::new(self.portfolio.settings().seed)),
        };
        tracing::debug!(on = self.rain.is_some(), "rain toggled");
    }

    pub fn handle_key(&mut self, code: KeyCode, now_ms: u64) {
        let active = self.portfolio.active_tab();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(c @ '1'..='4') => {
                let index = usize::from(c as u8 - b'1');
                if let Some(tab) = TabId::from_index(index) {
                    self.select_tab(tab, now_ms);
                }
            }
            KeyCode::Tab | KeyCode::Right => self.select_tab(active.next(), now_ms),
            KeyCode::BackTab | KeyCode::Left => self.select_tab(active.prev(), now_ms),
            KeyCode::Char('l') => {
                if let Err(err) = self.portfolio.toggle_locale(now_ms) {
                    tracing::warn!(%err, "locale toggle ignored");
                } else {
                    self.scroll = 0;
                    self.follow = true;
                    self.focus = None;
                }
            }
            KeyCode::Up => {
                self.follow = false;
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.follow = false;
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.follow = false;
                self.scroll = self.scroll.saturating_sub(PAGE_ROWS);
            }
            KeyCode::PageDown => {
                self.follow = false;
                self.scroll = self.scroll.saturating_add(PAGE_ROWS);
            }
            KeyCode::Home => {
                self.follow = false;
                self.scroll = 0;
            }
            KeyCode::End => self.follow = true,
            KeyCode::Char('n') => self.move_focus(true),
            KeyCode::Char('N') => self.move_focus(false),
            KeyCode::Enter => self.activate_focus(now_ms),
            KeyCode::Char('r') => self.toggle_rain(),
            _ => {}
        }
    }

    fn tick(&mut self, now_ms: u64) {
        self.portfolio.tick(now_ms);
        if let Some(rain) = self.rain.as_mut() {
            rain.tick(now_ms);
        }
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal, now_ms: u64) -> Result<()> {
        let size = terminal.size()?;
        if let Some(rain) = self.rain.as_mut() {
            rain.resize(size.width, size.height, now_ms);
        }
        let frame = self.portfolio.frame();
        let view = View {
            frame: frame.as_ref(),
            scroll: self.scroll,
            follow: self.follow,
            focus: self.focus,
            rain: self.rain.as_ref(),
        };
        let mut scroll = self.scroll;
        terminal.draw(|f| scroll = renderer::draw(f, &view))?;
        self.scroll = scroll;
        Ok(())
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Runs its closure when dropped.
struct OnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        tracing::warn!(%err, "failed to leave raw mode");
    }
    if let Err(err) = execute!(stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(%err, "failed to leave alternate screen");
    }
}

pub fn run<S: PreferenceStore>(portfolio: Portfolio<S>) -> Result<()> {
    enable_raw_mode()?;
    // Restores on every exit path from here on, errors included.
    let _restore = OnDrop(restore_terminal);
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    event_loop(&mut terminal, App::new(portfolio))
}

fn event_loop<S: PreferenceStore>(terminal: &mut DefaultTerminal, mut app: App<S>) -> Result<()> {
    let start = Instant::now();
    let locale = app.portfolio.hydrate(0);
    tracing::info!(%locale, "terminal session started");

    while !app.quit {
        let now = elapsed_ms(start);
        app.tick(now);
        app.draw(terminal, now)?;

        let wait = app
            .next_wakeup()
            .map_or(IDLE_POLL_MS, |at| at.saturating_sub(elapsed_ms(start)))
            .min(IDLE_POLL_MS);
        if event::poll(Duration::from_millis(wait))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code, elapsed_ms(start));
                }
                _ => {}
            }
        }
    }
    tracing::info!("terminal session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use folio_core::{MemoryPreferences, Settings, TranslationStore};
    use folio_protocol::{Interactive, Locale};

    use super::*;

    fn app() -> App<MemoryPreferences> {
        let settings = Settings {
            seed: Some(3),
            rain: Some(false),
            locale_override: Some(Locale::En),
            ..Settings::default()
        };
        let store = TranslationStore::embedded().expect("embedded content parses");
        let mut app = App::new(Portfolio::new(store, MemoryPreferences::new(), settings));
        app.portfolio.hydrate(0);
        app
    }

    fn settle(app: &mut App<MemoryPreferences>) -> u64 {
        let mut now = 0;
        while let Some(at) = app.portfolio.next_wakeup() {
            now = at;
            app.portfolio.tick(now);
        }
        now
    }

    #[test]
    fn number_keys_and_arrows_switch_tabs() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'), 10);
        assert_eq!(app.portfolio.active_tab(), TabId::Careers);
        app.handle_key(KeyCode::Right, 20);
        assert_eq!(app.portfolio.active_tab(), TabId::Projects);
        app.handle_key(KeyCode::Right, 30);
        assert_eq!(app.portfolio.active_tab(), TabId::Profile);
        app.handle_key(KeyCode::BackTab, 40);
        assert_eq!(app.portfolio.active_tab(), TabId::Projects);
    }

    #[test]
    fn focused_tab_link_navigates() {
        let mut app = app();
        let now = settle(&mut app);
        app.handle_key(KeyCode::Char('n'), now);
        assert_eq!(app.focus, Some(0));
        let first = app
            .portfolio
            .frame()
            .and_then(|f| f.interactive_items().into_iter().next());
        assert_eq!(first, Some(Interactive::TabLink(TabId::Skills)));

        app.handle_key(KeyCode::Enter, now);
        assert_eq!(app.portfolio.active_tab(), TabId::Skills);
        assert_eq!(app.focus, None);
    }

    #[test]
    fn focus_wraps_backwards() {
        let mut app = app();
        let now = settle(&mut app);
        let count = app.interactive_count();
        assert!(count > 0);
        app.handle_key(KeyCode::Char('N'), now);
        assert_eq!(app.focus, Some(count - 1));
        app.handle_key(KeyCode::Char('n'), now);
        assert_eq!(app.focus, Some(0));
    }

    #[test]
    fn locale_key_toggles_and_scrolling_stops_follow() {
        let mut app = app();
        app.handle_key(KeyCode::Up, 5);
        assert!(!app.follow);
        app.handle_key(KeyCode::Char('l'), 10);
        assert_eq!(app.portfolio.locale(), Ok(Locale::Ja));
        assert!(app.follow);
    }

    #[test]
    fn restore_runs_when_setup_fails_part_way() {
        let restored = Cell::new(false);
        let setup = || -> Result<()> {
            let _restore = OnDrop(|| restored.set(true));
            Err(anyhow::anyhow!("no terminal"))
        };
        assert!(setup().is_err());
        assert!(restored.get());
    }

    #[test]
    fn rain_key_toggles_rain() {
        let mut app = app();
        assert!(app.rain.is_none());
        app.handle_key(KeyCode::Char('r'), 0);
        assert!(app.rain.is_some());
        app.handle_key(KeyCode::Char('q'), 0);
        assert!(app.quit);
    }
}
