use crate::kernel::services::adapters::ThreadRandom;
use crate::kernel::services::ports::RandomSource;

use super::{
    Action, AppState, Effect, FlipOutcome, FlipPhase, FlipResult, FlipTimer, InteractionState,
    Judgment, Starfield, TimerEvent,
};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
    coin: Box<dyn RandomSource>,
    background: Box<dyn RandomSource>,
    next_flip_id: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self::with_sources(state, Box::new(ThreadRandom), Box::new(ThreadRandom))
    }

    /// `coin` decides every flip; `background` only feeds the starfield, so
    /// regenerating stars never shifts the coin sequence.
    pub fn with_sources(
        state: AppState,
        coin: Box<dyn RandomSource>,
        background: Box<dyn RandomSource>,
    ) -> Self {
        let mut store = Self {
            state,
            coin,
            background,
            next_flip_id: 1,
        };
        store.regenerate_starfield();
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetQuestion(text) => DispatchResult::changed(self.state.question.set(text)),
            Action::QuestionInsert(ch) => {
                DispatchResult::changed(self.state.question.insert_char(ch))
            }
            Action::QuestionPaste(text) => {
                DispatchResult::changed(self.state.question.insert_str(&text))
            }
            Action::QuestionBackspace => DispatchResult::changed(self.state.question.backspace()),
            Action::QuestionDelete => DispatchResult::changed(self.state.question.delete()),
            Action::QuestionCursorLeft => {
                DispatchResult::changed(self.state.question.cursor_left())
            }
            Action::QuestionCursorRight => {
                DispatchResult::changed(self.state.question.cursor_right())
            }
            Action::QuestionCursorHome => {
                DispatchResult::changed(self.state.question.cursor_home())
            }
            Action::QuestionCursorEnd => DispatchResult::changed(self.state.question.cursor_end()),
            Action::QuestionClear => DispatchResult::changed(self.state.question.clear()),
            Action::RequestFlip => self.request_flip(),
            Action::TimerFired(event) => self.timer_fired(event),
            Action::ToggleTheme => {
                self.state.theme = self.state.theme.toggled();
                self.regenerate_starfield();
                tracing::info!(theme = self.state.theme.as_str(), "theme toggled");
                DispatchResult::changed(true)
            }
            Action::Tick => {
                self.state.frame = self.state.frame.wrapping_add(1);
                DispatchResult::changed(true)
            }
        }
    }

    fn request_flip(&mut self) -> DispatchResult {
        if !self.state.question.is_askable() {
            tracing::debug!("flip ignored: question is blank");
            return DispatchResult::unchanged();
        }
        if let Some((flip_id, _)) = self.state.interaction.in_flight() {
            tracing::debug!(flip_id, "flip ignored: another flip is in flight");
            return DispatchResult::unchanged();
        }

        let flip_id = self.next_flip_id;
        self.next_flip_id += 1;
        self.state.interaction = InteractionState::Flipping {
            flip_id,
            phase: FlipPhase::Spinning,
        };

        tracing::info!(
            flip_id,
            question_chars = self.state.question.char_len(),
            resolves_in_ms = self.state.timings.total().as_millis() as u64,
            "flip requested"
        );

        DispatchResult {
            effects: vec![Effect::StartTimer {
                event: TimerEvent {
                    flip_id,
                    timer: FlipTimer::Spin,
                },
                delay: self.state.timings.flip,
            }],
            state_changed: true,
        }
    }

    fn timer_fired(&mut self, event: TimerEvent) -> DispatchResult {
        let Some((flip_id, phase)) = self.state.interaction.in_flight() else {
            tracing::warn!(flip_id = event.flip_id, timer = ?event.timer, "timer fired with no flip in flight");
            return DispatchResult::unchanged();
        };
        if flip_id != event.flip_id || phase.pending_timer() != event.timer {
            tracing::warn!(
                flip_id,
                stale_flip_id = event.flip_id,
                timer = ?event.timer,
                "stale timer ignored"
            );
            return DispatchResult::unchanged();
        }

        match phase {
            FlipPhase::Spinning => {
                let side = FlipOutcome::from_unit(self.coin.next_unit());
                self.state.interaction = InteractionState::Flipping {
                    flip_id,
                    phase: FlipPhase::Consulting { side },
                };
                tracing::info!(flip_id, side = side.as_str(), "coin landed");
                DispatchResult {
                    effects: vec![Effect::StartTimer {
                        event: TimerEvent {
                            flip_id,
                            timer: FlipTimer::Consult,
                        },
                        delay: self.state.timings.consult,
                    }],
                    state_changed: true,
                }
            }
            FlipPhase::Consulting { side } => {
                self.state.interaction = InteractionState::Resolved(FlipResult {
                    side,
                    judgment: Judgment::for_outcome(side),
                });
                tracing::info!(flip_id, side = side.as_str(), "flip resolved");
                DispatchResult::changed(true)
            }
        }
    }

    fn regenerate_starfield(&mut self) {
        self.state.starfield = Starfield::generate(
            self.state.theme,
            self.state.star_count,
            self.background.as_mut(),
        );
        tracing::debug!(
            theme = self.state.theme.as_str(),
            stars = self.state.starfield.len(),
            "starfield regenerated"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
