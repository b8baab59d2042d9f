//! Shared test utilities for dbchat
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::{TempDir, tempdir};

    use crate::app::App;
    use crate::config::Config;
    use crate::suggest::SuggestionStore;

    /// App backed by a throwaway suggestion store. The TempDir must stay
    /// alive for the duration of the test.
    pub fn test_app() -> (TempDir, App) {
        let dir = tempdir().unwrap();
        let store = SuggestionStore::open_at(dir.path().to_path_buf());
        let app = App::new(&Config::default(), store);
        (dir, app)
    }

    /// Same as [`test_app`], but already past a successful connection.
    pub fn connected_app() -> (TempDir, App) {
        let (dir, mut app) = test_app();
        app.connected = true;
        (dir, app)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type a string into the app, one key event per character
    pub fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
