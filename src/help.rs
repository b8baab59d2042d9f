//! Context-sensitive key hints on the bottom line.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

/// Key/action pairs for the current context.
pub fn help_entries(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.connect.visible {
        return vec![
            ("Tab", "next field"),
            ("←/→", "db type"),
            ("↑/↓", "suggestions"),
            ("Enter", "connect"),
            ("Esc", "close"),
        ];
    }

    match app.focus {
        Focus::ChatInput if app.connected => vec![
            ("Enter", "send"),
            ("↑/↓", "suggestions"),
            ("Tab", "transcript"),
            ("Ctrl+N", "connection"),
            ("Ctrl+D", "theme"),
            ("Ctrl+C", "quit"),
        ],
        Focus::ChatInput => vec![
            ("Ctrl+N", "new connection"),
            ("Ctrl+D", "theme"),
            ("Ctrl+C", "quit"),
        ],
        Focus::Transcript => vec![
            ("↑/↓", "select message"),
            ("c", "copy"),
            ("G", "bottom"),
            ("Tab", "input"),
            ("Ctrl+C", "quit"),
        ],
    }
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, action)) in help_entries(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(key, Style::default().fg(theme::help::KEY)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(theme::help::TEXT),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::suggest::SuggestionStore;
    use tempfile::tempdir;

    fn test_app() -> (tempfile::TempDir, App) {
        let dir = tempdir().unwrap();
        let store = SuggestionStore::open_at(dir.path().to_path_buf());
        (dir, App::new(&Config::default(), store))
    }

    fn keys(app: &App) -> Vec<&'static str> {
        help_entries(app).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_disconnected_hints() {
        let (_dir, app) = test_app();
        assert!(keys(&app).contains(&"Ctrl+N"));
        assert!(!keys(&app).contains(&"Enter"));
    }

    #[test]
    fn test_connected_input_hints() {
        let (_dir, mut app) = test_app();
        app.connected = true;
        assert!(keys(&app).contains(&"Enter"));
    }

    #[test]
    fn test_modal_hints_take_over() {
        let (_dir, mut app) = test_app();
        app.connect.open();
        assert!(keys(&app).contains(&"Esc"));
        assert!(!keys(&app).contains(&"Ctrl+C"));
    }

    #[test]
    fn test_transcript_hints() {
        let (_dir, mut app) = test_app();
        app.focus = Focus::Transcript;
        assert!(keys(&app).contains(&"c"));
    }
}
