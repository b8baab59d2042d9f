use crossterm::event::{KeyCode, KeyEvent};

use crate::api::{ApiError, ApiRequest};
use crate::app::{App, Focus};
use crate::connect::ConnectField;
use crate::suggest::StoreKey;

/// Shown when a connection attempt fails without a server-reported error.
pub const GENERIC_CONNECT_ERROR: &str = "An unexpected error occurred.";

/// Keys while the connection modal is open. The modal captures all input.
pub fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            let popup_was_open = app
                .connect
                .active_suggest()
                .is_some_and(|s| s.is_visible());
            if popup_was_open {
                if let Some(suggest) = app.connect.active_suggest() {
                    suggest.hide();
                }
            } else {
                app.connect.close();
            }
        }
        KeyCode::Tab => {
            if !app.connect.accept_suggestion() {
                app.connect.focus_next(&app.store);
            }
        }
        KeyCode::BackTab => app.connect.focus_previous(&app.store),
        KeyCode::Enter => {
            if !app.connect.accept_suggestion() {
                submit_connect(app);
            }
        }
        KeyCode::Down => {
            let in_popup = match app.connect.active_suggest() {
                Some(suggest) if suggest.is_visible() => {
                    suggest.select_next();
                    true
                }
                _ => false,
            };
            if !in_popup {
                app.connect.focus_next(&app.store);
            }
        }
        KeyCode::Up => {
            let in_popup = match app.connect.active_suggest() {
                Some(suggest) if suggest.is_visible() => {
                    suggest.select_previous();
                    true
                }
                _ => false,
            };
            if !in_popup {
                app.connect.focus_previous(&app.store);
            }
        }
        KeyCode::Left if app.connect.field == ConnectField::DbType => {
            app.connect.cycle_db_type(false);
        }
        KeyCode::Right if app.connect.field == ConnectField::DbType => {
            app.connect.cycle_db_type(true);
        }
        _ => {
            if let Some(textarea) = app.connect.field_textarea_mut() {
                textarea.input(key);
            }
        }
    }
}

/// Send the form as a connection request. One attempt at a time.
pub fn submit_connect(app: &mut App) {
    if app.connect.in_flight {
        return;
    }
    app.connect.set_status_info("Connecting...");
    app.connect.in_flight = true;

    let params = app.connect.params();
    app.send_request(ApiRequest::Connect { params });
}

/// Apply the worker's reply to a connection attempt.
///
/// On success the modal closes, chat unlocks, and the username and
/// database name are recorded for future suggestions.
pub fn handle_connect_reply(app: &mut App, result: Result<(), ApiError>) {
    app.connect.in_flight = false;

    match result {
        Ok(()) => {
            let username = app.connect.username_text().to_string();
            let db_name = app.connect.db_name_text().to_string();

            app.connect.close();
            app.connected = true;
            app.transcript.push_bot(&format!(
                "Successfully connected to '{}'. You can start asking questions now.",
                db_name
            ));

            app.record_suggestion(StoreKey::Usernames, &username);
            app.record_suggestion(StoreKey::DbNames, &db_name);

            app.set_focus(Focus::ChatInput);
        }
        Err(ApiError::Server(error)) => app.connect.set_status_error(&error),
        Err(ApiError::Transport(_reason)) => {
            #[cfg(debug_assertions)]
            log::error!("Connection request failed: {}", _reason);
            app.connect.set_status_error(GENERIC_CONNECT_ERROR);
        }
    }
}
