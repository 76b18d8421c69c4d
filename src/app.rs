// src/app.rs  —  Owns the stores and the back-stack; routes keys and ticks
use crate::config::AppConfig;
use crate::form::FormStore;
use crate::i18n::Localization;
use crate::media::ImageLibrary;
use crate::nav::{Action, FlowController};
use crate::screens::{Key, Outcome, Screen, ScreenOptions};
use std::time::Instant;

pub struct App {
    i18n:    Localization,
    form:    FormStore,
    flow:    FlowController,
    screen:  Screen,
    library: Box<dyn ImageLibrary>,
    opts:    ScreenOptions,
    quit:    bool,
}

impl App {
    pub fn new(cfg: &AppConfig, library: Box<dyn ImageLibrary>, now: Instant) -> Self {
        let opts = ScreenOptions {
            splash_delay: cfg.splash_delay,
            placeholder:  cfg.placeholder.clone(),
        };
        Self::with_parts(Localization::new(cfg.language), FormStore::new(), library, opts, now)
    }

    pub fn with_parts(
        i18n:    Localization,
        form:    FormStore,
        library: Box<dyn ImageLibrary>,
        opts:    ScreenOptions,
        now:     Instant,
    ) -> Self {
        let flow   = FlowController::new();
        let screen = Screen::mount(flow.current().route, &form, &opts, now);
        Self { i18n, form, flow, screen, library, opts, quit: false }
    }

    pub fn i18n(&self)   -> &Localization   { &self.i18n }
    pub fn form(&self)   -> &FormStore      { &self.form }
    pub fn flow(&self)   -> &FlowController { &self.flow }
    pub fn screen(&self) -> &Screen         { &self.screen }
    pub fn should_quit(&self) -> bool { self.quit }

    pub fn handle_key(&mut self, key: Key, now: Instant) {
        let outcome = match &mut self.screen {
            Screen::Splash(_)   => Outcome::Ignored,
            Screen::Wizard(w)   => w.handle_key(key, &mut self.i18n, &mut self.form, self.library.as_mut()),
            Screen::Details(d)  => d.handle_key(key, &mut self.form),
            Screen::Showcase(s) => s.handle_key(key),
            Screen::Home(h)     => h.handle_key(key),
        };
        match outcome {
            Outcome::Navigate(action) => self.navigate(action, now),
            Outcome::Ignored if key == Key::Esc => self.shutdown(),
            _ => {}
        }
    }

    /// Drive scheduled work (the splash hand-over)
    pub fn tick(&mut self, now: Instant) {
        let due = match &mut self.screen {
            Screen::Splash(s) => s.tick(now),
            _ => None,
        };
        if let Some(action) = due { self.navigate(action, now); }
    }

    /// Tear the mounted screen down and stop the loop
    pub fn shutdown(&mut self) {
        self.screen.teardown();
        self.quit = true;
    }

    fn navigate(&mut self, action: Action, now: Instant) {
        match self.flow.apply(action) {
            Ok(frame) => {
                let route = frame.route;
                self.screen.teardown();
                self.screen = Screen::mount(route, &self.form, &self.opts, now);
            }
            Err(e) => log::warn!("[app] navigation rejected: {e}"),
        }
    }
}
