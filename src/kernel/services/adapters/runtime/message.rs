use crate::kernel::TimerEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    TimerFired(TimerEvent),
}
