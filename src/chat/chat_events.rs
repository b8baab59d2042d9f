use crossterm::event::{KeyCode, KeyEvent};

use crate::api::{ApiError, ApiRequest};
use crate::app::{App, Focus};
use crate::clipboard;
use crate::suggest::StoreKey;

/// Shown when a chat request fails without a server-reported error.
pub const GENERIC_CHAT_ERROR: &str =
    "An unexpected error occurred while fetching the response.";

/// Keys for the chat input while it has focus.
pub fn handle_input_key(app: &mut App, key: KeyEvent) {
    if !app.connected {
        // Input stays inert until a connection succeeds
        if key.code == KeyCode::Tab {
            app.set_focus(Focus::Transcript);
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if !accept_suggestion(app) {
                submit_message(app);
            }
        }
        KeyCode::Esc => app.query_suggest.hide(),
        KeyCode::Down if app.query_suggest.is_visible() => app.query_suggest.select_next(),
        KeyCode::Up if app.query_suggest.is_visible() => app.query_suggest.select_previous(),
        KeyCode::Tab => {
            if !accept_suggestion(app) {
                app.set_focus(Focus::Transcript);
            }
        }
        KeyCode::PageUp => {
            app.transcript.follow = false;
            app.transcript.scroll.page_up();
        }
        KeyCode::PageDown => {
            app.transcript.scroll.page_down();
            if app.transcript.scroll.at_bottom() {
                app.transcript.follow = true;
            }
        }
        _ => {
            if app.input.textarea.input(key) {
                app.query_suggest.refilter(&app.store, app.input.text());
            }
        }
    }
}

/// Keys for the transcript pane while it has focus.
pub fn handle_transcript_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.transcript.follow = false;
            app.transcript.select_previous();
        }
        KeyCode::Down | KeyCode::Char('j') => app.transcript.select_next(),
        KeyCode::PageUp => {
            app.transcript.follow = false;
            app.transcript.scroll.page_up();
        }
        KeyCode::PageDown => {
            app.transcript.scroll.page_down();
            if app.transcript.scroll.at_bottom() {
                app.transcript.follow = true;
            }
        }
        KeyCode::Char('g') => {
            app.transcript.follow = false;
            app.transcript.scroll.jump_to_top();
        }
        KeyCode::Char('G') => {
            app.transcript.follow = true;
            app.transcript.clear_selection();
        }
        KeyCode::Char('c') | KeyCode::Char('y') => copy_selected(app),
        KeyCode::Esc | KeyCode::Tab => {
            app.transcript.clear_selection();
            app.set_focus(Focus::ChatInput);
        }
        _ => {}
    }
}

/// Send the input's text as a chat request.
///
/// The raw text is recorded into the query suggestion store before the
/// input is cleared, so it is offered next time even if the request fails.
pub fn submit_message(app: &mut App) {
    let message = app.input.text().trim().to_string();
    if message.is_empty() || !app.connected {
        return;
    }

    app.transcript.push_user(&message);
    app.record_suggestion(StoreKey::Queries, &message);
    app.input.clear();
    app.query_suggest.hide();
    app.transcript.show_typing();

    let seq = app.transcript.take_seq();
    app.send_request(ApiRequest::Chat { seq, message });
}

/// Apply a chat reply from the worker, dropping stale ones.
pub fn handle_chat_reply(app: &mut App, seq: u64, result: Result<String, ApiError>) {
    if !app.transcript.accept_reply(seq) {
        #[cfg(debug_assertions)]
        log::debug!("Dropping stale chat reply seq={}", seq);
        return;
    }

    app.transcript.hide_typing();
    match result {
        Ok(response) => app.transcript.push_bot(&response),
        Err(ApiError::Server(error)) => {
            app.transcript
                .push_bot(&format!("<strong>Error:</strong> {}", error));
        }
        Err(ApiError::Transport(_reason)) => {
            #[cfg(debug_assertions)]
            log::error!("Chat request failed: {}", _reason);
            app.transcript.push_bot(GENERIC_CHAT_ERROR);
        }
    }
}

/// Insert the selected suggestion into the input. Returns false when the
/// popup is hidden or nothing is selected.
fn accept_suggestion(app: &mut App) -> bool {
    if !app.query_suggest.is_visible() {
        return false;
    }
    let Some(entry) = app.query_suggest.selected_entry().map(str::to_string) else {
        return false;
    };
    app.input.replace(&entry);
    app.query_suggest.hide();
    true
}

/// Copy the selected message's display text to the clipboard.
fn copy_selected(app: &mut App) {
    let Some(text) = app.transcript.selected_message().map(|m| m.rendered.clone()) else {
        return;
    };
    match clipboard::copy_to_clipboard(&text, app.clipboard_backend) {
        Ok(()) => app.transcript.mark_selected_copied(),
        Err(_) => app.notification.show_warning("Clipboard unavailable"),
    }
}
