use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use sortviz_core::algorithms::Complexity;

use crate::app::App;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the help popup for the selected algorithm
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();
        let info = app.info();

        let popup_width = 64u16.min(area.width.saturating_sub(4));
        let popup_height = 20u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", app.snapshot.algorithm))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let label = Style::default().fg(theme.grey2);
        let mut lines = vec![
            complexity_line("Best", info.best, theme),
            complexity_line("Average", info.average, theme),
            complexity_line("Worst", info.worst, theme),
            complexity_line("Space", info.space, theme),
            Line::from(vec![
                Span::styled(format!("{:<10}", "Stable"), label),
                Span::styled(
                    if info.stable { "yes" } else { "no" },
                    Style::default().fg(theme.fg0),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(info.summary, Style::default().fg(theme.fg0))),
            Line::default(),
        ];

        let keys = &app.config.keymap;
        lines.push(Line::from(Span::styled(
            format!(
                "{} start  {} pause/resume  {} reset  {}/{}/{} speed  {}/{} size",
                keys.start,
                keys.pause_resume,
                keys.reset,
                keys.speed_slow,
                keys.speed_medium,
                keys.speed_fast,
                keys.grow_array,
                keys.shrink_array
            ),
            Style::default().fg(theme.grey1),
        )));
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.grey1).add_modifier(Modifier::ITALIC),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }
}

fn complexity_line(name: &str, complexity: Complexity, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", name), Style::default().fg(theme.grey2)),
        Span::styled(
            complexity.notation,
            Style::default()
                .fg(theme.rating_color(complexity.rating))
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 20, area), Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 30, 10);
        assert_eq!(centered_rect(60, 20, area), Rect::new(5, 5, 30, 10));
    }
}
