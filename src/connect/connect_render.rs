use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::connect_state::{ConnectField, ConnectStatus};
use crate::app::App;
use crate::suggest::{self, Anchor};
use crate::theme;
use crate::widgets::popup;

const MODAL_WIDTH: u16 = 64;
// Six 3-row fields, a status line, and the outer borders
const MODAL_HEIGHT: u16 = 21;

/// Render the connection modal over the main screen.
pub fn render_modal(app: &mut App, frame: &mut Frame) {
    if !app.connect.visible {
        return;
    }

    let area = popup::centered_popup(frame.area(), MODAL_WIDTH, MODAL_HEIGHT);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" New Connection ")
        .border_style(Style::default().fg(theme::connect::BORDER))
        .style(Style::default().bg(app.mode.bg()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(3), // db type
        Constraint::Length(3), // host
        Constraint::Length(3), // port
        Constraint::Length(3), // username
        Constraint::Length(3), // password
        Constraint::Length(3), // db name
        Constraint::Length(1), // status
    ])
    .split(inner);

    render_db_type(app, frame, rows[0]);
    render_field(app, frame, rows[1], ConnectField::Host, " Host ");
    render_field(app, frame, rows[2], ConnectField::Port, " Port ");
    render_field(app, frame, rows[3], ConnectField::Username, " Username ");
    render_field(app, frame, rows[4], ConnectField::Password, " Password ");

    let db_name_title = format!(" {} ", app.connect.db_type.db_name_label());
    render_field(app, frame, rows[5], ConnectField::DbName, &db_name_title);

    render_status(app, frame, rows[6]);

    // Popups last so they draw over the fields below their anchor
    suggest::render_popup(&app.connect.username_suggest, frame, rows[3], Anchor::Below);
    suggest::render_popup(&app.connect.dbname_suggest, frame, rows[5], Anchor::Below);
}

fn render_db_type(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.connect.field == ConnectField::DbType;
    let border_color = if focused {
        theme::connect::FIELD_FOCUSED
    } else {
        theme::connect::FIELD_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Database Type ")
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::styled(
        app.connect.db_type.label().to_string(),
        Style::default()
            .fg(app.mode.text())
            .add_modifier(Modifier::BOLD),
    )];
    if focused {
        spans.insert(0, Span::styled("◄ ", Style::default().fg(theme::connect::FIELD_FOCUSED)));
        spans.push(Span::styled(" ►", Style::default().fg(theme::connect::FIELD_FOCUSED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_field(app: &mut App, frame: &mut Frame, area: Rect, field: ConnectField, title: &str) {
    let enabled = app.connect.field_enabled(field);
    let focused = app.connect.field == field;

    let border_color = if !enabled {
        theme::connect::FIELD_DISABLED
    } else if focused {
        theme::connect::FIELD_FOCUSED
    } else {
        theme::connect::FIELD_UNFOCUSED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title.to_string())
        .border_style(Style::default().fg(border_color));

    if !enabled {
        let hint = Paragraph::new("n/a")
            .block(block)
            .style(Style::default().fg(theme::connect::FIELD_DISABLED));
        frame.render_widget(hint, area);
        return;
    }

    let text_style = Style::default().fg(app.mode.text());
    let textarea = match field {
        ConnectField::Host => &mut app.connect.host,
        ConnectField::Port => &mut app.connect.port,
        ConnectField::Username => &mut app.connect.username,
        ConnectField::Password => &mut app.connect.password,
        ConnectField::DbName => &mut app.connect.db_name,
        ConnectField::DbType => return,
    };
    textarea.set_block(block);
    textarea.set_style(text_style);
    // Only the focused field shows a cursor
    textarea.set_cursor_style(if focused {
        theme::palette::CURSOR
    } else {
        Style::default()
    });
    frame.render_widget(&*textarea, area);
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let Some(status) = &app.connect.status else {
        return;
    };

    let (text, color) = match status {
        ConnectStatus::Info(message) => (message.as_str(), theme::connect::STATUS_INFO),
        ConnectStatus::Error(message) => (message.as_str(), theme::connect::STATUS_ERROR),
    };

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", text),
            Style::default().fg(color),
        )),
        area,
    );
}
