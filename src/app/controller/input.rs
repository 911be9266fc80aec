use super::{Controller, EventResult};
use crate::kernel::Action;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

impl Controller {
    pub fn handle_input(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => {
                self.dispatch(Action::QuestionPaste(text.clone()));
                EventResult::Consumed
            }
            Event::Resize(_, _) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.kind != KeyEventKind::Press {
            return EventResult::Ignored;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => EventResult::Quit,
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    EventResult::Consumed
                }
                KeyCode::Char('u') => {
                    self.dispatch(Action::QuestionClear);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        let action = match key.code {
            KeyCode::Esc => return EventResult::Quit,
            KeyCode::Enter => Action::RequestFlip,
            KeyCode::Backspace => Action::QuestionBackspace,
            KeyCode::Delete => Action::QuestionDelete,
            KeyCode::Left => Action::QuestionCursorLeft,
            KeyCode::Right => Action::QuestionCursorRight,
            KeyCode::Home => Action::QuestionCursorHome,
            KeyCode::End => Action::QuestionCursorEnd,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Action::QuestionInsert(ch)
            }
            _ => return EventResult::Ignored,
        };

        self.dispatch(action);
        EventResult::Consumed
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignored;
        }

        if hit(self.last_flip_button_area, mouse.column, mouse.row) {
            self.request_flip();
            return EventResult::Consumed;
        }
        if hit(self.last_theme_toggle_area, mouse.column, mouse.row) {
            self.toggle_theme();
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }
}

fn hit(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|r| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
}
