use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Bar as ChartBar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct BarsWidget;

impl BarsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state = &app.snapshot;

        let block = Block::default()
            .title(format!(" {} ", state.algorithm))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey1))
            .title_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.bg0));

        if state.array.is_empty() {
            let empty = Paragraph::new("Empty array")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.grey2))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        let (bar_width, bar_gap) = bar_layout(inner.width, state.array.len());
        let max_value = state.max_value().max(1);
        let label_fits = usize::from(bar_width) >= max_value.to_string().len();

        let bars: Vec<ChartBar> = state
            .array
            .iter()
            .map(|bar| {
                let text = if app.config.ui.show_values && label_fits {
                    bar.value.to_string()
                } else {
                    String::new()
                };
                ChartBar::default()
                    .value(u64::from(bar.value))
                    .text_value(text)
                    .style(Style::default().fg(theme.bar_color(bar.state, state.sorted)))
                    .value_style(Style::default().fg(theme.bg0).bg(theme.fg0))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(bar_gap)
            .max(u64::from(max_value));

        frame.render_widget(chart, area);
    }
}

/// Width and gap of each bar so `count` bars fill `width` columns
///
/// Bars never shrink below one column; when they do not fit the chart clips
/// on the right.
pub(crate) fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let width = usize::from(width);
    let gap = if width >= count * 2 { 1 } else { 0 };
    let available = width.saturating_sub(gap * (count - 1));
    let bar_width = (available / count).clamp(1, usize::from(u16::MAX));
    (bar_width as u16, gap as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_layout_fills_width() {
        assert_eq!(bar_layout(100, 50), (1, 1));
        assert_eq!(bar_layout(149, 50), (2, 1));
        assert_eq!(bar_layout(200, 10), (19, 1));
    }

    #[test]
    fn test_bar_layout_drops_gap_when_tight() {
        assert_eq!(bar_layout(60, 50), (1, 0));
        assert_eq!(bar_layout(20, 50), (1, 0));
    }

    #[test]
    fn test_bar_layout_single_and_empty() {
        assert_eq!(bar_layout(80, 1), (80, 1));
        assert_eq!(bar_layout(80, 0), (1, 0));
    }
}
