use std::sync::mpsc::{Receiver, Sender};

use crate::api::{ApiReply, ApiRequest};
use crate::app::input_state::InputState;
use crate::chat::TranscriptState;
use crate::config::{ClipboardBackend, Config};
use crate::connect::ConnectState;
use crate::notification::NotificationState;
use crate::suggest::{StoreKey, SuggestState, SuggestionStore};
use crate::theme::Mode;

/// First bot message, shown before any connection exists.
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your intelligent data assistant. Press Ctrl+N to set up a connection.";

/// Which pane receives key input (the connection modal, when open,
/// captures everything regardless).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ChatInput,
    Transcript,
}

/// Top-level application state.
pub struct App {
    pub input: InputState,
    pub transcript: TranscriptState,
    pub connect: ConnectState,
    pub query_suggest: SuggestState,
    pub store: SuggestionStore,
    pub focus: Focus,
    pub connected: bool,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub mode: Mode,
    should_quit: bool,
    dirty: bool,
    request_tx: Option<Sender<ApiRequest>>,
    pub(super) reply_rx: Option<Receiver<ApiReply>>,
}

impl App {
    pub fn new(config: &Config, store: SuggestionStore) -> Self {
        let mut transcript = TranscriptState::new();
        transcript.push_bot(WELCOME_MESSAGE);

        let mode = if config.ui.dark_mode {
            Mode::Dark
        } else {
            Mode::Light
        };

        Self {
            input: InputState::new(),
            transcript,
            connect: ConnectState::new(),
            query_suggest: SuggestState::new(StoreKey::Queries, true),
            store,
            focus: Focus::ChatInput,
            connected: false,
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            mode,
            should_quit: false,
            dirty: true,
            request_tx: None,
            reply_rx: None,
        }
    }

    /// Wire up the API worker's channels.
    pub fn set_channels(&mut self, request_tx: Sender<ApiRequest>, reply_rx: Receiver<ApiReply>) {
        self.request_tx = Some(request_tx);
        self.reply_rx = Some(reply_rx);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Whether the next loop iteration should redraw. Active notifications
    /// and "Copied!" flashes need repaints to expire on screen.
    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.current().is_some() || self.transcript.any_copy_flash()
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::ChatInput => {
                if self.connected {
                    self.query_suggest.show_on_focus(&self.store, self.input.text());
                }
            }
            Focus::Transcript => self.query_suggest.hide(),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        let label = match self.mode {
            Mode::Dark => "Dark mode",
            Mode::Light => "Light mode",
        };
        self.notification.show(label);
    }

    /// Hand a request to the worker thread. A closed channel means the
    /// worker died; surface that the same way as a lost reply channel.
    pub(crate) fn send_request(&mut self, request: ApiRequest) {
        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };
        if !sent {
            self.handle_worker_gone();
        }
    }

    /// Record a value into a suggestion store, surfacing I/O failures as a
    /// warning toast rather than aborting the interaction.
    pub(crate) fn record_suggestion(&mut self, key: StoreKey, value: &str) {
        if let Err(e) = self.store.record(key, value) {
            #[cfg(debug_assertions)]
            log::warn!("Failed to save suggestion for {:?}: {}", key, e);

            self.notification
                .show_warning(&format!("Failed to save suggestions: {}", e));
        }
    }
}
