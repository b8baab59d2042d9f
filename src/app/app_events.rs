use std::io;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::ApiReply;
use crate::app::{App, Focus};
use crate::chat::chat_events::{self, GENERIC_CHAT_ERROR};
use crate::connect::connect_events::{self, GENERIC_CONNECT_ERROR};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// One event-loop turn: drain worker replies, then wait briefly for a
    /// terminal event.
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_api_replies();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                    self.mark_dirty();
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                    self.mark_dirty();
                }
                Event::Resize(..) => self.mark_dirty(),
                _ => {}
            }
        }

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }

        if self.connect.visible {
            connect_events::handle_modal_key(self, key);
            return;
        }

        match self.focus {
            Focus::ChatInput => chat_events::handle_input_key(self, key),
            Focus::Transcript => chat_events::handle_transcript_key(self, key),
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('c') => {
                self.quit();
                true
            }
            KeyCode::Char('n') => {
                if !self.connect.visible {
                    self.query_suggest.hide();
                    self.connect.open();
                }
                true
            }
            KeyCode::Char('d') => {
                self.toggle_mode();
                true
            }
            _ => false,
        }
    }

    fn handle_paste_event(&mut self, text: &str) {
        // Keep pasted newlines out of single-line fields
        let text = text.replace(['\n', '\r'], " ");

        if self.connect.visible {
            if let Some(textarea) = self.connect.field_textarea_mut() {
                textarea.insert_str(&text);
            }
        } else if self.focus == Focus::ChatInput && self.connected {
            self.input.textarea.insert_str(&text);
            self.query_suggest.refilter(&self.store, self.input.text());
        }
    }

    /// Apply everything the worker has produced since the last turn.
    pub fn poll_api_replies(&mut self) {
        let mut replies = Vec::new();
        let mut disconnected = false;

        if let Some(rx) = &self.reply_rx {
            loop {
                match rx.try_recv() {
                    Ok(reply) => replies.push(reply),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        for reply in replies {
            self.apply_reply(reply);
            self.mark_dirty();
        }

        if disconnected {
            self.handle_worker_gone();
        }
    }

    pub fn apply_reply(&mut self, reply: ApiReply) {
        match reply {
            ApiReply::Connect { result } => connect_events::handle_connect_reply(self, result),
            ApiReply::Chat { seq, result } => chat_events::handle_chat_reply(self, seq, result),
        }
    }

    /// The worker thread is gone; fail whatever was pending.
    pub(crate) fn handle_worker_gone(&mut self) {
        #[cfg(debug_assertions)]
        log::error!("API worker channel closed");

        self.reply_rx = None;

        if self.transcript.typing {
            self.transcript.hide_typing();
            self.transcript.push_bot(GENERIC_CHAT_ERROR);
        }
        if self.connect.in_flight {
            self.connect.in_flight = false;
            self.connect.set_status_error(GENERIC_CONNECT_ERROR);
        }
        self.mark_dirty();
    }
}
