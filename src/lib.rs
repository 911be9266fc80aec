//! decision-coin: a terminal coin flip for cosmic decisions.
//!
//! Layout:
//! - kernel: headless state machine (state / action / effect / store) and service contracts
//! - app: controller, rendering and input for the TUI frontend
//! - tui: terminal setup/restore plumbing

pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
