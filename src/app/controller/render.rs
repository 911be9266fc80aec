use super::Controller;
use crate::app::theme::UiTheme;
use crate::kernel::{AppState, FlipPhase, FlipResult, InteractionState};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CONTENT_MAX_WIDTH: u16 = 80;
const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const STATEMENT_HEIGHT: u16 = 3;

const TITLE: &str = "DecisionCoin";
const PLACEHOLDER: &str = "What cosmic decision awaits your judgment?";
const BUTTON_LABEL: &str = "Consult the Cosmos";
const LOADING_TEXT: &str = "Consulting the cosmic forces...";
const IDLE_HINT: &str = "Type a question, then press Enter to consult the cosmos.";
const PROS_TITLE: &str = "Cosmic Advantages";
const CONS_TITLE: &str = "Cosmic Challenges";
const CLOSING_TEXT: &str = "Does this cosmic guidance resonate with your inner truth?";
const FOOTER_TEXT: &str = "Enter consult · Ctrl+T theme · Ctrl+U clear · Esc quit";
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

impl Controller {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let theme = &self.ui_theme;

        render_background(frame, area, state, theme);

        let content = centered_column(area, CONTENT_MAX_WIDTH);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(content);

        let toggle_area = render_header(frame, chunks[0], state, theme);
        render_question(frame, chunks[1], state, theme);
        let button_area = render_flip_button(frame, chunks[2], state, theme);
        render_body(frame, chunks[3], state, theme);
        render_footer(frame, chunks[4], theme);

        self.last_theme_toggle_area = toggle_area;
        self.last_flip_button_area = button_area;
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

fn spinner_frame(frame: u64) -> &'static str {
    SPINNER[(frame % SPINNER.len() as u64) as usize]
}

fn star_glyph(size: f32) -> &'static str {
    if size < 1.0 {
        "·"
    } else if size < 2.0 {
        "+"
    } else {
        "✦"
    }
}

fn render_background(frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        area,
    );
    if area.width == 0 || area.height == 0 {
        return;
    }

    let elapsed = state.elapsed();
    let buf = frame.buffer_mut();
    for star in &state.starfield.stars {
        let x = area.x + ((star.x / 100.0) * area.width as f32) as u16;
        let y = area.y + ((star.y / 100.0) * area.height as f32) as u16;
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        let fg = if star.is_lit(elapsed) {
            theme.star_lit_fg
        } else {
            theme.star_dim_fg
        };
        buf.set_string(
            x,
            y,
            star_glyph(star.size),
            Style::default().fg(fg).bg(theme.background),
        );
    }
}

/// Draws the title row; returns the clickable theme toggle.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) -> Option<Rect> {
    if area.height < 2 {
        return None;
    }
    let row = Rect::new(area.x, area.y + 1, area.width, 1);

    let shift = (state.frame / 3) as usize;
    let mut spans = vec![Span::styled("◯ ", Style::default().fg(theme.accent_fg))];
    spans.extend(TITLE.chars().enumerate().map(|(i, ch)| {
        let color = theme.title_rainbow[(i + shift) % theme.title_rainbow.len()];
        Span::styled(
            ch.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );

    let icon = if state.theme.is_dark() { " ☀ " } else { " ☾ " };
    let width = icon.width() as u16;
    if row.width < width + 1 {
        return None;
    }
    let toggle = Rect::new(row.right() - width - 1, row.y, width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            icon,
            Style::default()
                .fg(theme.toggle_fg)
                .add_modifier(Modifier::BOLD),
        )),
        toggle,
    );
    Some(toggle)
}

/// The slice of `text` that fits in `width` cells with the cursor visible,
/// plus the cursor column within that slice.
pub(crate) fn visible_question(text: &str, cursor: usize, width: u16) -> (String, u16) {
    let width = width as usize;
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let mut start = 0;
    let mut before: usize = chars[..cursor]
        .iter()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    while before >= width && start < cursor {
        before -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for &ch in &chars[start..] {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        visible.push(ch);
        used += w;
    }

    (visible, before as u16)
}

fn render_question(frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background).fg(theme.foreground));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let question = &state.question;
    if question.text.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(theme.placeholder_fg)
                    .add_modifier(Modifier::ITALIC),
            )),
            inner,
        );
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let (visible, cursor_col) = visible_question(&question.text, question.cursor, inner.width);
    frame.render_widget(Paragraph::new(visible), inner);
    frame.set_cursor_position((inner.x + cursor_col, inner.y));
}

/// Draws the flip trigger; returns its clickable area.
fn render_flip_button(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &UiTheme,
) -> Option<Rect> {
    let flipping = state.interaction.is_flipping();
    let enabled = state.can_request_flip();
    let icon = if flipping {
        spinner_frame(state.frame)
    } else {
        "✦"
    };
    let label = format!("{icon} {BUTTON_LABEL}");
    let width = (label.width() as u16 + 4).min(area.width);
    if width == 0 || area.height == 0 {
        return None;
    }
    let button = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height.min(BUTTON_HEIGHT),
    );

    let (border, text) = if enabled {
        (
            Style::default().fg(theme.button_border),
            Style::default()
                .fg(theme.button_fg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(theme.button_disabled_fg),
            Style::default()
                .fg(theme.button_disabled_fg)
                .add_modifier(Modifier::DIM),
        )
    };

    frame.render_widget(Clear, button);
    frame.render_widget(
        Paragraph::new(Span::styled(label, text))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border)
                    .style(Style::default().bg(theme.background)),
            ),
        button,
    );
    Some(button)
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) {
    if area.height == 0 {
        return;
    }

    match &state.interaction {
        InteractionState::Idle => {
            if state.question.is_askable() {
                return;
            }
            let row = Rect::new(area.x, area.y + area.height.min(1), area.width, 1)
                .intersection(area);
            frame.render_widget(
                Paragraph::new(Span::styled(IDLE_HINT, Style::default().fg(theme.muted_fg)))
                    .alignment(Alignment::Center),
                row,
            );
        }
        InteractionState::Flipping { phase, .. } => {
            render_loading(frame, area, *phase, state.frame, theme)
        }
        InteractionState::Resolved(result) => render_result(frame, area, result, theme),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, phase: FlipPhase, tick: u64, theme: &UiTheme) {
    let mut lines = Vec::new();
    lines.push(Line::default());
    if phase == FlipPhase::Spinning {
        let face = if (tick / 2) % 2 == 0 { "( H )" } else { "( T )" };
        lines.push(Line::from(Span::styled(
            face,
            Style::default()
                .fg(theme.badge_fg)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled(
            spinner_frame(tick),
            Style::default().fg(theme.accent_fg),
        ),
        Span::raw(" "),
        Span::styled(LOADING_TEXT, Style::default().fg(theme.placeholder_fg)),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_result(frame: &mut Frame, area: Rect, result: &FlipResult, theme: &UiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background).fg(theme.foreground));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(STATEMENT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" ✦ {} ✦ ", result.side),
            Style::default()
                .fg(theme.badge_fg)
                .bg(theme.badge_bg)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            result.judgment.statement.as_str(),
            Style::default().fg(theme.statement_fg),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        rows[2],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    render_points(
        frame,
        columns[0],
        PROS_TITLE,
        &result.judgment.pros,
        Style::default().fg(theme.pros_heading_fg),
        Style::default().fg(theme.pros_fg),
        theme,
    );
    render_points(
        frame,
        columns[1],
        CONS_TITLE,
        &result.judgment.cons,
        Style::default().fg(theme.cons_heading_fg),
        Style::default().fg(theme.cons_fg),
        theme,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSING_TEXT,
            Style::default()
                .fg(theme.statement_fg)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
        rows[4],
    );
}

fn render_points(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[String],
    heading: Style,
    item: Style,
    theme: &UiTheme,
) {
    let lines: Vec<Line> = points
        .iter()
        .map(|point| {
            Line::from(vec![
                Span::styled("✧ ", heading),
                Span::styled(point.as_str(), item),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    format!(" ◯ {title} "),
                    heading.add_modifier(Modifier::BOLD),
                )),
        ),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &UiTheme) {
    frame.render_widget(
        Paragraph::new(Span::styled(FOOTER_TEXT, Style::default().fg(theme.muted_fg)))
            .alignment(Alignment::Center),
        area,
    );
}
