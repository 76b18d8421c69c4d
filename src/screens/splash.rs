// src/screens/splash.rs  —  Logo screen that hands over to step 1
use crate::nav::{Action, ScheduledTransition};
use std::time::{Duration, Instant};

pub struct SplashScreen {
    timer: ScheduledTransition,
}

impl SplashScreen {
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self { timer: ScheduledTransition::new(Action::SplashElapsed, delay, now) }
    }

    pub fn tick(&mut self, now: Instant) -> Option<Action> { self.timer.poll(now) }

    pub fn teardown(&mut self) { self.timer.cancel(); }

    pub fn is_pending(&self) -> bool { self.timer.is_pending() }

    pub fn remaining(&self, now: Instant) -> Duration { self.timer.remaining(now) }
}
