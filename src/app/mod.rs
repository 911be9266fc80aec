//! TUI frontend: the interaction controller and its view.

pub mod controller;
pub mod theme;

pub use controller::{Controller, EventResult};
pub use theme::{ColorDepth, UiTheme};
