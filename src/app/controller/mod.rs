//! Interaction controller: owns the store, runs its effects and draws its state.
//!
//! Responsibilities:
//! - turn terminal input into kernel actions
//! - schedule the flip timers the store asks for and keep their handles
//! - feed timer completions back into the store
//! - render the current state (the view never mutates state)

use super::theme::{ColorDepth, UiTheme};
use crate::kernel::services::adapters::AppMessage;
use crate::kernel::services::ports::{TimerHandle, TimerScheduler};
use crate::kernel::{Action, AppState, Effect, Store, Theme, TimerEvent};
use ratatui::layout::Rect;

mod input;
mod render;
mod tick;

const MAX_MESSAGE_DRAIN_PER_TICK: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

pub struct Controller {
    store: Store,
    scheduler: Box<dyn TimerScheduler>,
    timers: Vec<TimerHandle>,
    color_depth: ColorDepth,
    ui_theme: UiTheme,
    rendered_theme: Theme,
    last_flip_button_area: Option<Rect>,
    last_theme_toggle_area: Option<Rect>,
}

impl Controller {
    pub fn new(store: Store, scheduler: Box<dyn TimerScheduler>) -> Self {
        Self::with_color_depth(store, scheduler, ColorDepth::from_env())
    }

    pub fn with_color_depth(
        store: Store,
        scheduler: Box<dyn TimerScheduler>,
        color_depth: ColorDepth,
    ) -> Self {
        let theme = store.state().theme;
        Self {
            store,
            scheduler,
            timers: Vec::new(),
            color_depth,
            ui_theme: UiTheme::for_theme(theme, color_depth),
            rendered_theme: theme,
            last_flip_button_area: None,
            last_theme_toggle_area: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn ui_theme(&self) -> &UiTheme {
        &self.ui_theme
    }

    /// Handles of timers scheduled for the in-flight flip and not yet delivered.
    pub fn pending_timers(&self) -> &[TimerHandle] {
        &self.timers
    }

    pub fn submit_question(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(Action::SetQuestion(text.into()))
    }

    /// No-op while a flip is in flight or when the question is blank.
    pub fn request_flip(&mut self) -> bool {
        self.dispatch(Action::RequestFlip)
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dispatch(Action::ToggleTheme)
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::TimerFired(event) => {
                self.forget_timer(event);
                self.dispatch(Action::TimerFired(event))
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        self.sync_theme();
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartTimer { event, delay } => {
                let handle = self.scheduler.schedule(delay, event);
                self.timers.push(handle);
            }
        }
    }

    fn forget_timer(&mut self, event: TimerEvent) {
        self.timers.retain(|handle| handle.event() != event);
    }

    fn sync_theme(&mut self) {
        let theme = self.store.state().theme;
        if theme != self.rendered_theme {
            self.ui_theme = UiTheme::for_theme(theme, self.color_depth);
            self.rendered_theme = theme;
        }
    }

    /// Cancels every outstanding timer. Called on teardown; a flip that is
    /// abandoned this way never resolves.
    pub fn abandon_timers(&mut self) {
        for handle in self.timers.drain(..) {
            handle.cancel();
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if !self.timers.is_empty() {
            tracing::debug!(pending = self.timers.len(), "abandoning pending flip timers");
        }
        self.abandon_timers();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/controller.rs"]
mod tests;
