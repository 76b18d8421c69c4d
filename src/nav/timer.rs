// src/nav/timer.rs  —  One-shot, cancellable scheduled transition
use super::flow::Action;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState { Pending, Fired, Cancelled }

/// Fires `action` once when polled at or after its deadline.
/// The owner must call `cancel()` when it is torn down.
#[derive(Debug)]
pub struct ScheduledTransition {
    action:   Action,
    deadline: Instant,
    state:    TimerState,
}

impl ScheduledTransition {
    pub fn new(action: Action, delay: Duration, now: Instant) -> Self {
        log::debug!("[timer] {:?} scheduled in {:?}", action, delay);
        Self { action, deadline: now + delay, state: TimerState::Pending }
    }

    /// Returns the action exactly once, the first time `now` reaches the deadline
    pub fn poll(&mut self, now: Instant) -> Option<Action> {
        if self.state == TimerState::Pending && now >= self.deadline {
            self.state = TimerState::Fired;
            Some(self.action)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Pending {
            log::debug!("[timer] {:?} cancelled", self.action);
            self.state = TimerState::Cancelled;
        }
    }

    pub fn is_pending(&self) -> bool { self.state == TimerState::Pending }

    pub fn remaining(&self, now: Instant) -> Duration {
        if self.is_pending() { self.deadline.saturating_duration_since(now) } else { Duration::ZERO }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    #[test]
    fn fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut t = ScheduledTransition::new(Action::SplashElapsed, DELAY, t0);
        assert_eq!(t.poll(t0 + Duration::from_millis(2999)), None);
        assert_eq!(t.poll(t0 + DELAY), Some(Action::SplashElapsed));
        assert_eq!(t.poll(t0 + DELAY * 2), None);
        assert!(!t.is_pending());
    }

    #[test]
    fn cancelled_never_fires() {
        let t0 = Instant::now();
        let mut t = ScheduledTransition::new(Action::SplashElapsed, DELAY, t0);
        t.cancel();
        assert_eq!(t.poll(t0 + DELAY * 10), None);
        assert_eq!(t.remaining(t0), Duration::ZERO);
    }

    #[test]
    fn remaining_counts_down() {
        let t0 = Instant::now();
        let t = ScheduledTransition::new(Action::SplashElapsed, DELAY, t0);
        assert_eq!(t.remaining(t0 + Duration::from_millis(1000)), Duration::from_millis(2000));
        assert_eq!(t.remaining(t0 + DELAY * 2), Duration::ZERO);
    }
}
