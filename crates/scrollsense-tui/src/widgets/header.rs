use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, HeaderPlacement};
use crate::theme::shadow_border;

pub struct HeaderWidget;

impl HeaderWidget {
    /// Draw the header over the page according to its current placement
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(rect) = Self::header_rect(area, app) else {
            return;
        };

        let theme = &app.theme;
        let (bg, border) = Self::surface(app);

        let border_color = if app.transition_settled() {
            theme.accent
        } else {
            theme.grey0
        };
        let mut block = Block::default().style(Style::default().bg(bg));
        if let Some(border_type) = border {
            block = block
                .borders(Borders::BOTTOM)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color));
        }

        let nav = Style::default().fg(theme.fg1);
        let line = Line::from(vec![
            Span::styled(
                " ScrollSense ",
                Style::default()
                    .fg(theme.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Home  About  Contact ", nav),
            Span::styled(
                format!("  [{}]", app.behavior()),
                Style::default().fg(theme.grey2),
            ),
        ]);

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(line).block(block), rect);
    }

    /// Background and bottom border taken from the header's rendered attributes
    fn surface(app: &App) -> (Color, Option<BorderType>) {
        let attrs = app.controller.attributes();
        let bg = app.theme.header_background(
            attrs
                .style_value("background-color")
                .unwrap_or("transparent"),
        );
        (bg, shadow_border(attrs.box_shadow()))
    }

    fn header_rect(area: Rect, app: &App) -> Option<Rect> {
        let height = app.header_height() as i32;
        let visible = match app.header_placement() {
            HeaderPlacement::Hidden => return None,
            HeaderPlacement::Pinned => height,
            HeaderPlacement::Flow { top } => height + top,
        };
        if visible <= 0 {
            return None;
        }
        Some(Rect {
            height: (visible as u16).min(area.height),
            ..area
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use scrollsense_core::{AppConfig, BoxShadowPreset};

    #[test]
    fn test_surface_follows_header_attributes() {
        let mut config = AppConfig::default();
        config.header.background_color = "#ffffff".to_string();
        config.header.box_shadow = BoxShadowPreset::Heavy;
        let app = App::new(config, Theme::default());

        assert_eq!(
            HeaderWidget::surface(&app),
            (Color::Rgb(0xff, 0xff, 0xff), Some(BorderType::Double))
        );
    }

    #[test]
    fn test_surface_defaults() {
        let mut config = AppConfig::default();
        config.header.box_shadow = BoxShadowPreset::None;
        let app = App::new(config, Theme::default());

        assert_eq!(HeaderWidget::surface(&app), (app.theme.bg1, None));
    }
}
