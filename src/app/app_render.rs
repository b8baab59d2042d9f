use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use crate::chat::chat_render;
use crate::connect::connect_render;
use crate::help;
use crate::notification::render_notification;
use crate::suggest::{self, Anchor};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::vertical([
            Constraint::Min(3),    // transcript
            Constraint::Length(3), // chat input
            Constraint::Length(1), // help line
        ])
        .split(frame.area());

        chat_render::render_pane(self, frame, rows[0]);
        chat_render::render_input(self, frame, rows[1]);
        help::render_line(self, frame, rows[2]);

        // Query suggestions open above the input; the modal hides them
        if !self.connect.visible {
            suggest::render_popup(&self.query_suggest, frame, rows[1], Anchor::Above);
        }

        connect_render::render_modal(self, frame);
        render_notification(frame, &mut self.notification);
    }
}
