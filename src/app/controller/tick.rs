use super::{Controller, MAX_MESSAGE_DRAIN_PER_TICK};
use crate::kernel::services::adapters::AppMessage;
use crate::kernel::Action;
use std::sync::mpsc::{Receiver, TryRecvError};

impl Controller {
    /// Advances the animation clock (spinner, title shimmer, star twinkle).
    pub fn tick(&mut self) -> bool {
        self.dispatch(Action::Tick)
    }

    /// Feeds pending runtime messages into the store. Returns whether any state changed.
    pub fn drain_messages(&mut self, rx: &Receiver<AppMessage>) -> bool {
        let mut changed = false;
        for _ in 0..MAX_MESSAGE_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(msg) => changed |= self.handle_message(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("runtime message channel disconnected");
                    break;
                }
            }
        }
        changed
    }
}
