//! Terminal lifecycle: entering UI mode, leaving it on every exit path, and
//! turning SIGINT/SIGTERM into an orderly shutdown.

pub mod terminal_guard;
