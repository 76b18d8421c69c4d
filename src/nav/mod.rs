// src/nav/mod.rs  —  Routes, back-stack, transition graph, splash timer
pub mod flow;
pub mod route;
pub mod stack;
pub mod timer;

pub use flow::{Action, FlowController};
pub use route::{Route, WizardStep};
pub use timer::ScheduledTransition;
