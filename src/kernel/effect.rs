use std::time::Duration;

use super::state::TimerEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `event` back as `Action::TimerFired` once `delay` has elapsed.
    StartTimer { event: TimerEvent, delay: Duration },
}
