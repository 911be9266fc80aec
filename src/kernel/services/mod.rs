//! Collaborators of the store.
//!
//! `ports` holds the traits and data the kernel is written against (random
//! draws, timers, settings); `adapters` binds them to rand, tokio and the
//! filesystem.

pub mod adapters;
pub mod ports;
