use super::state::TimerEvent;

#[derive(Debug, Clone)]
pub enum Action {
    SetQuestion(String),
    QuestionInsert(char),
    QuestionPaste(String),
    QuestionBackspace,
    QuestionDelete,
    QuestionCursorLeft,
    QuestionCursorRight,
    QuestionCursorHome,
    QuestionCursorEnd,
    QuestionClear,
    RequestFlip,
    TimerFired(TimerEvent),
    ToggleTheme,
    Tick,
}
