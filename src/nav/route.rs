// src/nav/route.rs  —  Named screens and their parameters
use crate::form::ImageSlot;
use std::fmt;

/// Route identifiers without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName { Splash, Wizard, Details, Showcase, Home }

/// Parameters of a wizard step: which slot it edits and where "next" goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    pub slot: ImageSlot,
    pub next: RouteName,
}

impl WizardStep {
    /// Step `n` with its fixed successor: 1 → wizard, 2 → wizard, 3 → details
    pub fn new(n: u8) -> Option<Self> {
        let slot = ImageSlot::new(n)?;
        let next = if n < 3 { RouteName::Wizard } else { RouteName::Details };
        Some(Self { slot, next })
    }

    pub fn first() -> Self {
        Self { slot: ImageSlot::ALL[0], next: RouteName::Wizard }
    }

    pub fn number(self) -> u8 { self.slot.number() }

    /// Parameters of the step that follows, if `next` is another wizard step
    pub fn following(self) -> Option<Self> {
        match self.next {
            RouteName::Wizard => Self::new(self.number() + 1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Wizard(WizardStep),
    Details,
    Showcase,
    Home,
}

impl Route {
    pub fn name(&self) -> RouteName {
        match self {
            Route::Splash    => RouteName::Splash,
            Route::Wizard(_) => RouteName::Wizard,
            Route::Details   => RouteName::Details,
            Route::Showcase  => RouteName::Showcase,
            Route::Home      => RouteName::Home,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Wizard(s) => write!(f, "Wizard({})", s.number()),
            other            => write!(f, "{:?}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_chain_to_details() {
        let s1 = WizardStep::first();
        let s2 = s1.following().unwrap();
        let s3 = s2.following().unwrap();
        assert_eq!((s1.number(), s2.number(), s3.number()), (1, 2, 3));
        assert_eq!(s3.next, RouteName::Details);
        assert!(s3.following().is_none());
        assert_eq!(WizardStep::new(1), Some(s1));
        assert!(WizardStep::new(4).is_none());
    }

    #[test]
    fn display_names() {
        assert_eq!(Route::Wizard(WizardStep::new(2).unwrap()).to_string(), "Wizard(2)");
        assert_eq!(Route::Home.to_string(), "Home");
    }
}
