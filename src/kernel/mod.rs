//! Headless application core (state/action/effect).

pub mod action;
pub mod coin;
pub mod effect;
pub mod judgment;
pub mod services;
pub mod starfield;
pub mod state;
pub mod store;

pub use action::Action;
pub use coin::FlipOutcome;
pub use effect::Effect;
pub use judgment::Judgment;
pub use starfield::{Star, Starfield};
pub use state::{
    AppState, FlipPhase, FlipResult, FlipTimer, FlipTimings, InteractionState, QuestionState,
    Theme, TimerEvent,
};
pub use store::{DispatchResult, Store};
