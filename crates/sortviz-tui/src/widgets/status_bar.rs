use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => app.run_label(),
            Mode::Help => "HELP",
        };
        let state_color = match mode_str {
            "SORTING" => theme.yellow,
            "PAUSED" => theme.orange,
            "SORTED" => theme.green,
            "FAILED" => theme.error,
            _ => theme.blue,
        };

        let mode_span = format!(" {} ", mode_str);
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | speed: {} | n={} | updates: {}",
                app.snapshot.algorithm,
                app.speed_label(),
                app.snapshot.array.len(),
                app.mutations
            )
        };

        let keys = &app.config.keymap;
        let help_hint = format!(
            " {}:start {}:pause {}:reset {}/{}:algo {}:speed {}:help {}:quit ",
            keys.start,
            keys.pause_resume,
            keys.reset,
            keys.prev_algorithm,
            keys.next_algorithm,
            keys.cycle_speed,
            keys.help,
            keys.quit
        );
        let used = mode_span.chars().count() + status_text.chars().count() + help_hint.chars().count();
        let padding_len = usize::from(area.width).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                mode_span,
                Style::default()
                    .fg(theme.bg0)
                    .bg(state_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
