use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::chat_state::{Message, MsgSender, TranscriptState, TYPING_INDICATOR};
use crate::app::{App, Focus};
use crate::theme;
use crate::theme::Mode;

/// Placeholder-style titles for the input box.
const INPUT_TITLE_READY: &str = " Ask a question about your data ";
const INPUT_TITLE_DISCONNECTED: &str = " Press Ctrl+N to connect to a database ";

/// Render the transcript pane, honoring follow mode and keeping the
/// selected message in view.
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Transcript && !app.connect.visible;

    let border_color = if focused {
        theme::transcript::BORDER_FOCUSED
    } else {
        theme::transcript::BORDER_UNFOCUSED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Conversation ")
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    let (lines, message_starts) =
        build_lines(&app.transcript, inner.width as usize, focused, app.mode);

    app.transcript
        .scroll
        .update_bounds(lines.len() as u32, inner.height);

    if app.transcript.follow {
        app.transcript.scroll.jump_to_bottom();
    } else if let Some(selected) = app.transcript.selected()
        && focused
        && let Some(&start) = message_starts.get(selected)
    {
        scroll_into_view(&mut app.transcript.scroll, start as u16);
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.mode.bg()).fg(app.mode.text()))
        .scroll((app.transcript.scroll.offset, 0));

    frame.render_widget(paragraph, area);
}

/// Render the chat input box below the transcript.
pub fn render_input(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::ChatInput && !app.connect.visible;

    let (title, border_color) = if app.connected {
        let color = if focused {
            theme::input::BORDER_FOCUSED
        } else {
            theme::input::BORDER_UNFOCUSED
        };
        (INPUT_TITLE_READY, color)
    } else {
        (INPUT_TITLE_DISCONNECTED, theme::input::BORDER_DISABLED)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(app.mode.bg()));

    if app.connected {
        app.input.textarea.set_block(block);
        app.input
            .textarea
            .set_style(Style::default().fg(app.mode.text()));
        frame.render_widget(&app.input.textarea, area);
    } else {
        let hint = Paragraph::new("")
            .block(block)
            .style(Style::default().fg(theme::input::DISABLED_HINT));
        frame.render_widget(hint, area);
    }
}

/// Build the transcript's display lines plus, for each message, the index
/// of its first line (for scroll-into-view).
pub fn build_lines(
    transcript: &TranscriptState,
    width: usize,
    focused: bool,
    mode: Mode,
) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut message_starts = Vec::with_capacity(transcript.messages.len());

    for (idx, message) in transcript.messages.iter().enumerate() {
        message_starts.push(lines.len());

        let selected = focused && transcript.selected() == Some(idx);
        lines.push(header_line(message, selected));

        for body in wrap_text(&message.rendered, width.max(1)) {
            lines.push(Line::from(Span::styled(
                body,
                Style::default().fg(mode.text()),
            )));
        }
        lines.push(Line::default());
    }

    if transcript.typing {
        lines.push(header_line(&Message::bot(""), false));
        lines.push(Line::from(Span::styled(
            TYPING_INDICATOR.to_string(),
            Style::default().fg(theme::transcript::TYPING),
        )));
    }

    (lines, message_starts)
}

fn header_line(message: &Message, selected: bool) -> Line<'static> {
    let (label, color) = match message.sender {
        MsgSender::User => ("You", theme::transcript::USER_LABEL),
        MsgSender::Bot => ("Bot", theme::transcript::BOT_LABEL),
    };

    let mut spans = Vec::new();
    if selected {
        spans.push(Span::styled(
            "► ",
            Style::default().fg(theme::transcript::SELECTED_MARKER),
        ));
    }
    spans.push(Span::styled(
        label.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    if message.copy_flash_active() {
        spans.push(Span::styled(
            "  Copied!",
            Style::default().fg(theme::transcript::COPIED_FLASH),
        ));
    }

    Line::from(spans)
}

/// Hard-wrap on character count. Display width is close enough for the
/// transcript's mostly-ASCII content.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(width) {
            out.push(chunk.iter().collect());
        }
    }
    out
}

fn scroll_into_view(scroll: &mut crate::scroll::ScrollState, line: u16) {
    if line < scroll.offset {
        scroll.offset = line;
    } else {
        let bottom = scroll.offset + scroll.viewport_height.saturating_sub(1);
        if line > bottom {
            scroll.offset = (line - scroll.viewport_height + 1).min(scroll.max_offset);
        }
    }
}
