use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PageWidget;

impl PageWidget {
    /// Draw the visible window of the document: blank rows up to the content
    /// start, then the page lines
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let start = app.content_start() as usize;
        let offset = app.offset() as usize;

        let lines: Vec<Line> = (offset..offset + area.height as usize)
            .map(|row| match row.checked_sub(start).and_then(|i| app.lines.get(i)) {
                Some(text) if text.starts_with("##") => Line::styled(
                    text.as_str(),
                    Style::default()
                        .fg(theme.aqua)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(text) => Line::styled(text.as_str(), Style::default().fg(theme.fg0)),
                None => Line::default(),
            })
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().style(Style::default().bg(theme.bg0)));
        frame.render_widget(paragraph, area);
    }
}
