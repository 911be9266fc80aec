use super::*;

#[test]
fn theme_toggles_back_and_forth() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert!(Theme::from_dark(true).is_dark());
    assert!(!Theme::from_dark(false).is_dark());
}

#[test]
fn blank_questions_are_not_askable() {
    let mut question = QuestionState::default();
    assert!(!question.is_askable());
    question.set("   \t ".to_string());
    assert!(!question.is_askable());
    question.set(" Should I go? ".to_string());
    assert!(question.is_askable());
}

#[test]
fn question_editing_tracks_cursor_in_chars() {
    let mut question = QuestionState::default();
    assert!(question.insert_char('h'));
    assert!(question.insert_char('é'));
    assert_eq!(question.text, "hé");
    assert_eq!(question.cursor, 2);

    assert!(question.cursor_left());
    assert!(question.insert_char('x'));
    assert_eq!(question.text, "hxé");
    assert_eq!(question.cursor, 2);

    assert!(question.backspace());
    assert_eq!(question.text, "hé");
    assert_eq!(question.cursor, 1);

    assert!(question.delete());
    assert_eq!(question.text, "h");
    assert!(!question.delete());

    assert!(question.cursor_home());
    assert!(!question.backspace());
    assert!(!question.cursor_left());
    assert!(question.cursor_end());
    assert!(!question.cursor_right());
}

#[test]
fn paste_drops_control_characters() {
    let mut question = QuestionState::default();
    question.set("go ".to_string());
    assert!(question.insert_str("north\r\nnow"));
    assert_eq!(question.text, "go northnow");
    assert_eq!(question.cursor, question.char_len());
    assert!(!question.insert_str("\n"));
}

#[test]
fn clear_empties_question() {
    let mut question = QuestionState::default();
    assert!(!question.clear());
    question.set("Should I go?".to_string());
    assert!(question.clear());
    assert_eq!(question.text, "");
    assert_eq!(question.cursor, 0);
}

#[test]
fn app_state_reads_settings() {
    let mut settings = Settings::default();
    settings.theme.dark = false;
    settings.timing.flip_ms = 10;
    settings.timing.consult_ms = 20;
    settings.background.star_count = 5;

    let state = AppState::new(&settings);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.timings.flip, Duration::from_millis(10));
    assert_eq!(state.timings.total(), Duration::from_millis(30));
    assert_eq!(state.star_count, 5);
    assert!(state.interaction.is_idle());
}

#[test]
fn default_timings_match_flip_and_consult_delays() {
    let timings = FlipTimings::default();
    assert_eq!(timings.flip, Duration::from_millis(3000));
    assert_eq!(timings.consult, Duration::from_millis(1500));
    assert_eq!(timings.total(), Duration::from_millis(4500));
}

#[test]
fn elapsed_follows_frames() {
    let mut state = AppState::default();
    state.frame = 25;
    assert_eq!(state.elapsed(), Duration::from_millis(2500));
}
