// src/nav/flow.rs  —  Legal transition graph over the back-stack
use super::route::{Route, RouteName, WizardStep};
use super::stack::{Frame, NavStack};

/// Screen-to-screen requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SplashElapsed,
    Next,
    Previous,
    Finish,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("{action:?} is not allowed from {from}")]
    IllegalTransition { from: Route, action: Action },

    #[error("no previous screen to return to")]
    NoHistory,
}

/// Owns the back-stack; every change goes through `apply`.
#[derive(Debug)]
pub struct FlowController {
    stack: NavStack,
}

impl Default for FlowController {
    fn default() -> Self { Self::new() }
}

impl FlowController {
    /// Starts on the splash screen
    pub fn new() -> Self {
        Self { stack: NavStack::new(Route::Splash) }
    }

    pub fn current(&self) -> &Frame { self.stack.top() }
    pub fn stack(&self) -> &NavStack { &self.stack }

    /// Validate `action` against the current route and perform it.
    /// On error the stack is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<&Frame, NavError> {
        let from = self.stack.top().route;
        let illegal = NavError::IllegalTransition { from, action };

        match (from, action) {
            (Route::Splash, Action::SplashElapsed) => {
                self.stack.replace(Route::Wizard(WizardStep::first()));
            }

            (Route::Wizard(step), Action::Next) => match (step.next, step.following()) {
                (RouteName::Wizard, Some(following)) => self.stack.push(Route::Wizard(following)),
                (RouteName::Details, _)              => self.stack.push(Route::Details),
                _ => return Err(illegal),
            },

            (Route::Wizard(step), Action::Previous) if step.number() > 1 => self.pop()?,
            (Route::Details, Action::Previous) | (Route::Showcase, Action::Previous) => self.pop()?,

            (Route::Details, Action::Next)    => self.stack.push(Route::Showcase),
            (Route::Showcase, Action::Finish) => self.stack.jump(Route::Home),
            (Route::Home, Action::Edit)       => self.stack.push(Route::Wizard(WizardStep::first())),

            _ => return Err(illegal),
        }

        log::info!("[nav] {} --{:?}--> {}  (depth {})", from, action, self.stack.top().route, self.stack.depth());
        Ok(self.stack.top())
    }

    fn pop(&mut self) -> Result<(), NavError> {
        self.stack.pop().map(|_| ()).ok_or(NavError::NoHistory)
    }
}
