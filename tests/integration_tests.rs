//! End-to-end session flows exercised through the library API.
//!
//! Terminal interaction is simulated by feeding key events straight into
//! the app and playing the worker's side of the channels by hand.

use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use dbchat::api::{ApiReply, ApiRequest};
use dbchat::app::App;
use dbchat::config::Config;
use dbchat::connect::ConnectField;
use dbchat::suggest::{StoreKey, SuggestionStore};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn session() -> (TempDir, App, Receiver<ApiRequest>, Sender<ApiReply>) {
    let dir = TempDir::new().unwrap();
    let store = SuggestionStore::open_at(dir.path().to_path_buf());
    let mut app = App::new(&Config::default(), store);

    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    app.set_channels(request_tx, reply_rx);

    (dir, app, request_rx, reply_tx)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_connect_then_chat_session() {
    let (_dir, mut app, request_rx, reply_tx) = session();

    // Open the modal and fill the form
    app.handle_key_event(ctrl('n'));
    app.connect.set_field_text(ConnectField::Username, "root");
    app.connect.set_field_text(ConnectField::Password, "secret");
    app.connect.set_field_text(ConnectField::DbName, "shop");
    app.handle_key_event(key(KeyCode::Enter));

    // Play the backend: accept the connection
    let ApiRequest::Connect { params } = request_rx.recv().unwrap() else {
        panic!("expected a connect request");
    };
    assert_eq!(params.db_type, "mysql");
    assert_eq!(params.port, "3306");
    reply_tx.send(ApiReply::Connect { result: Ok(()) }).unwrap();
    app.poll_api_replies();

    assert!(app.connected);
    assert!(!app.connect.visible);

    // Ask a question
    type_str(&mut app, "how many orders shipped today?");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.transcript.typing);

    let ApiRequest::Chat { seq, message } = request_rx.recv().unwrap() else {
        panic!("expected a chat request");
    };
    assert_eq!(message, "how many orders shipped today?");

    // Answer with a result table
    reply_tx
        .send(ApiReply::Chat {
            seq,
            result: Ok("<table><tr><th>count</th></tr><tr><td>17</td></tr></table>".to_string()),
        })
        .unwrap();
    app.poll_api_replies();

    assert!(!app.transcript.typing);
    assert_eq!(app.transcript.messages.last().unwrap().rendered, "count\n17");
}

#[test]
fn test_suggestions_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let store = SuggestionStore::open_at(dir.path().to_path_buf());
        let mut app = App::new(&Config::default(), store);
        let (request_tx, _request_rx) = mpsc::channel();
        let (_reply_tx, reply_rx) = mpsc::channel();
        app.set_channels(request_tx, reply_rx);

        app.handle_key_event(ctrl('n'));
        app.connect.set_field_text(ConnectField::Username, "root");
        app.connect.set_field_text(ConnectField::DbName, "shop");
        app.handle_key_event(key(KeyCode::Enter));
        app.apply_reply(ApiReply::Connect { result: Ok(()) });

        type_str(&mut app, "show tables");
        app.handle_key_event(key(KeyCode::Enter));
    }

    // A fresh app over the same directory sees the recorded values
    let store = SuggestionStore::open_at(dir.path().to_path_buf());
    assert_eq!(store.load(StoreKey::Usernames), vec!["root"]);
    assert_eq!(store.load(StoreKey::DbNames), vec!["shop"]);
    assert_eq!(store.load(StoreKey::Queries), vec!["show tables"]);
}

#[test]
fn test_failed_connect_leaves_chat_locked() {
    let (_dir, mut app, request_rx, reply_tx) = session();

    app.handle_key_event(ctrl('n'));
    app.handle_key_event(key(KeyCode::Enter));
    let _ = request_rx.recv().unwrap();

    reply_tx
        .send(ApiReply::Connect {
            result: Err(dbchat::api::ApiError::Server(
                "Unknown database 'shop'".to_string(),
            )),
        })
        .unwrap();
    app.poll_api_replies();

    assert!(!app.connected);
    assert!(app.connect.visible);

    // Chat input stays inert
    type_str(&mut app, "hello?");
    // The modal captured those keys; close it and confirm nothing sends
    app.handle_key_event(key(KeyCode::Esc));
    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.transcript.typing);
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_two_questions_in_flight_keep_order() {
    let (_dir, mut app, request_rx, reply_tx) = session();
    app.connected = true;

    type_str(&mut app, "first");
    app.handle_key_event(key(KeyCode::Enter));
    type_str(&mut app, "second");
    app.handle_key_event(key(KeyCode::Enter));

    let ApiRequest::Chat { seq: seq_a, .. } = request_rx.recv().unwrap() else {
        panic!("expected a chat request");
    };
    let ApiRequest::Chat { seq: seq_b, .. } = request_rx.recv().unwrap() else {
        panic!("expected a chat request");
    };

    // The newer answer arrives first; the older one must be discarded
    reply_tx
        .send(ApiReply::Chat {
            seq: seq_b,
            result: Ok("answer two".to_string()),
        })
        .unwrap();
    reply_tx
        .send(ApiReply::Chat {
            seq: seq_a,
            result: Ok("answer one".to_string()),
        })
        .unwrap();
    app.poll_api_replies();

    assert_eq!(app.transcript.messages.last().unwrap().rendered, "answer two");
    let answers: Vec<_> = app
        .transcript
        .messages
        .iter()
        .filter(|m| m.rendered.starts_with("answer"))
        .collect();
    assert_eq!(answers.len(), 1);
}
