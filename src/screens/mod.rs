// src/screens/mod.rs  —  Screen registry: mount / teardown / key dispatch
pub mod details;
pub mod home;
pub mod showcase;
pub mod splash;
pub mod wizard;

pub use details::DetailsScreen;
pub use home::HomeScreen;
pub use showcase::ShowcaseScreen;
pub use splash::SplashScreen;
pub use wizard::WizardScreen;

use crate::form::FormStore;
use crate::nav::{Action, Route};
use std::time::{Duration, Instant};

/// Terminal-independent key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
}

/// What a screen did with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Handled,
    Navigate(Action),
}

/// Settings every mounted screen may need
#[derive(Debug, Clone)]
pub struct ScreenOptions {
    pub splash_delay: Duration,
    pub placeholder:  String,
}

pub enum Screen {
    Splash(SplashScreen),
    Wizard(WizardScreen),
    Details(DetailsScreen),
    Showcase(ShowcaseScreen),
    Home(HomeScreen),
}

impl Screen {
    /// Build the screen for `route`, reading the form as it is now
    pub fn mount(route: Route, form: &FormStore, opts: &ScreenOptions, now: Instant) -> Self {
        match route {
            Route::Splash       => Screen::Splash(SplashScreen::new(opts.splash_delay, now)),
            Route::Wizard(step) => Screen::Wizard(WizardScreen::new(step)),
            Route::Details      => Screen::Details(DetailsScreen::new()),
            Route::Showcase     => Screen::Showcase(ShowcaseScreen::new(form, &opts.placeholder)),
            Route::Home         => Screen::Home(HomeScreen::new(form, &opts.placeholder)),
        }
    }

    /// Release anything the screen scheduled; called before it is replaced
    pub fn teardown(&mut self) {
        if let Screen::Splash(s) = self { s.teardown(); }
    }
}
