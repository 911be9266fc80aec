use std::time::Duration;

use crate::kernel::services::ports::Settings;

use super::coin::FlipOutcome;
use super::judgment::Judgment;
use super::starfield::Starfield;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// The two timed waits of a flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipTimer {
    /// The coin is in the air; the side is drawn when this fires.
    Spin,
    /// The cosmos is being consulted; the judgment is attached when this fires.
    Consult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerEvent {
    pub flip_id: u64,
    pub timer: FlipTimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Spinning,
    Consulting { side: FlipOutcome },
}

impl FlipPhase {
    pub fn pending_timer(self) -> FlipTimer {
        match self {
            FlipPhase::Spinning => FlipTimer::Spin,
            FlipPhase::Consulting { .. } => FlipTimer::Consult,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipResult {
    pub side: FlipOutcome,
    pub judgment: Judgment,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Flipping {
        flip_id: u64,
        phase: FlipPhase,
    },
    Resolved(FlipResult),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self, InteractionState::Flipping { .. })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, InteractionState::Resolved(_))
    }

    pub fn result(&self) -> Option<&FlipResult> {
        match self {
            InteractionState::Resolved(result) => Some(result),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<(u64, FlipPhase)> {
        match *self {
            InteractionState::Flipping { flip_id, phase } => Some((flip_id, phase)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipTimings {
    pub flip: Duration,
    pub consult: Duration,
}

impl FlipTimings {
    pub fn total(&self) -> Duration {
        self.flip + self.consult
    }
}

impl Default for FlipTimings {
    fn default() -> Self {
        Self {
            flip: Duration::from_millis(3000),
            consult: Duration::from_millis(1500),
        }
    }
}

/// Question text plus an edit cursor counted in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionState {
    pub text: String,
    pub cursor: usize,
}

impl QuestionState {
    pub fn is_askable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn set(&mut self, text: String) -> bool {
        let changed = self.text != text;
        self.text = text;
        self.cursor = self.char_len();
        changed
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let at = byte_index(&self.text, self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn insert_str(&mut self, s: &str) -> bool {
        let s: String = s.chars().filter(|c| !c.is_control()).collect();
        if s.is_empty() {
            return false;
        }
        let at = byte_index(&self.text, self.cursor);
        self.text.insert_str(at, &s);
        self.cursor += s.chars().count();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = byte_index(&self.text, self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = byte_index(&self.text, self.cursor);
        self.text.remove(at);
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor = 0;
        prev != 0
    }

    pub fn cursor_end(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor = self.char_len();
        prev != self.cursor
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub question: QuestionState,
    pub interaction: InteractionState,
    pub theme: Theme,
    pub starfield: Starfield,
    pub star_count: usize,
    pub timings: FlipTimings,
    pub tick_interval: Duration,
    /// Animation ticks since startup.
    pub frame: u64,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let theme = Theme::from_dark(settings.theme.dark);
        Self {
            question: QuestionState::default(),
            interaction: InteractionState::Idle,
            theme,
            starfield: Starfield::empty(theme),
            star_count: settings.background.stars(),
            timings: settings.timing.flip_timings(),
            tick_interval: settings.timing.tick_interval(),
            frame: 0,
        }
    }

    /// Whether a flip request would be accepted right now.
    pub fn can_request_flip(&self) -> bool {
        self.question.is_askable() && !self.interaction.is_flipping()
    }

    pub fn elapsed(&self) -> Duration {
        self.tick_interval.saturating_mul(self.frame.min(u32::MAX as u64) as u32)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
