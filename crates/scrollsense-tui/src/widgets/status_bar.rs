use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state = app.state();
        let flag = |on: bool, name: &str| {
            if on {
                name.to_uppercase()
            } else {
                name.to_string()
            }
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | offset {} | {} {} {} | changes: {}",
                app.behavior(),
                app.offset(),
                flag(state.is_sticky, "sticky"),
                flag(state.is_hidden, "hidden"),
                flag(state.is_transitioning, "settled"),
                app.change_log().count,
            )
        };

        let help_hint = " q:quit j/k:scroll g/G:top/bottom 1/2/3:behavior r:reset ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
