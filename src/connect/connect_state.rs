use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::api::ConnectParams;
use crate::suggest::{StoreKey, SuggestState, SuggestionStore};
use crate::theme;

/// Supported database kinds, with their connection-form policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbType {
    #[default]
    Mysql,
    Postgresql,
    Sqlite,
}

impl DbType {
    pub fn label(self) -> &'static str {
        match self {
            DbType::Mysql => "mysql",
            DbType::Postgresql => "postgresql",
            DbType::Sqlite => "sqlite",
        }
    }

    pub fn default_port(self) -> &'static str {
        match self {
            DbType::Mysql => "3306",
            DbType::Postgresql => "5432",
            DbType::Sqlite => "",
        }
    }

    pub fn default_host(self) -> &'static str {
        match self {
            DbType::Sqlite => "",
            _ => "localhost",
        }
    }

    /// Sqlite connects to a file; host and port don't apply.
    pub fn uses_host_port(self) -> bool {
        !matches!(self, DbType::Sqlite)
    }

    pub fn db_name_label(self) -> &'static str {
        match self {
            DbType::Sqlite => "Database File Path",
            _ => "Database Name",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DbType::Mysql => DbType::Postgresql,
            DbType::Postgresql => DbType::Sqlite,
            DbType::Sqlite => DbType::Mysql,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DbType::Mysql => DbType::Sqlite,
            DbType::Postgresql => DbType::Mysql,
            DbType::Sqlite => DbType::Postgresql,
        }
    }
}

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectField {
    DbType,
    Host,
    Port,
    Username,
    Password,
    DbName,
}

const FIELD_ORDER: [ConnectField; 6] = [
    ConnectField::DbType,
    ConnectField::Host,
    ConnectField::Port,
    ConnectField::Username,
    ConnectField::Password,
    ConnectField::DbName,
];

/// Inline status line at the bottom of the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectStatus {
    Info(String),
    Error(String),
}

/// Creates a TextArea configured as a single-line form field.
fn form_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// State of the connection modal.
pub struct ConnectState {
    pub visible: bool,
    pub db_type: DbType,
    pub host: TextArea<'static>,
    pub port: TextArea<'static>,
    pub username: TextArea<'static>,
    pub password: TextArea<'static>,
    pub db_name: TextArea<'static>,
    pub field: ConnectField,
    pub status: Option<ConnectStatus>,
    pub in_flight: bool,
    pub username_suggest: SuggestState,
    pub dbname_suggest: SuggestState,
}

impl ConnectState {
    pub fn new() -> Self {
        let mut password = form_textarea();
        password.set_mask_char('•');

        let mut state = Self {
            visible: false,
            db_type: DbType::default(),
            host: form_textarea(),
            port: form_textarea(),
            username: form_textarea(),
            password,
            db_name: form_textarea(),
            field: ConnectField::DbType,
            status: None,
            in_flight: false,
            username_suggest: SuggestState::new(StoreKey::Usernames, false),
            dbname_suggest: SuggestState::new(StoreKey::DbNames, false),
        };
        state.apply_db_type();
        state
    }

    /// Open the modal. Re-applies the db-type policy so host/port carry
    /// the defaults for the currently selected type.
    pub fn open(&mut self) {
        self.visible = true;
        self.status = None;
        self.field = ConnectField::DbType;
        self.username_suggest.hide();
        self.dbname_suggest.hide();
        self.apply_db_type();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.status = None;
        self.username_suggest.hide();
        self.dbname_suggest.hide();
    }

    /// Fill host/port with the defaults for the selected db type.
    pub fn apply_db_type(&mut self) {
        set_text(&mut self.host, self.db_type.default_host());
        set_text(&mut self.port, self.db_type.default_port());
    }

    pub fn cycle_db_type(&mut self, forward: bool) {
        self.db_type = if forward {
            self.db_type.next()
        } else {
            self.db_type.previous()
        };
        self.apply_db_type();
    }

    pub fn field_enabled(&self, field: ConnectField) -> bool {
        match field {
            ConnectField::Host | ConnectField::Port => self.db_type.uses_host_port(),
            _ => true,
        }
    }

    /// Move focus to the next enabled field and refresh suggestion popups.
    pub fn focus_next(&mut self, store: &SuggestionStore) {
        self.shift_focus(store, 1);
    }

    pub fn focus_previous(&mut self, store: &SuggestionStore) {
        self.shift_focus(store, FIELD_ORDER.len() - 1);
    }

    fn shift_focus(&mut self, store: &SuggestionStore, step: usize) {
        let mut idx = FIELD_ORDER
            .iter()
            .position(|&f| f == self.field)
            .unwrap_or(0);

        // Skip disabled fields; every form has at least one enabled field
        for _ in 0..FIELD_ORDER.len() {
            idx = (idx + step) % FIELD_ORDER.len();
            if self.field_enabled(FIELD_ORDER[idx]) {
                break;
            }
        }
        self.field = FIELD_ORDER[idx];
        self.on_field_focus(store);
    }

    /// Non-live popups open when their field gains focus.
    fn on_field_focus(&mut self, store: &SuggestionStore) {
        self.username_suggest.hide();
        self.dbname_suggest.hide();
        match self.field {
            ConnectField::Username => {
                self.username_suggest.show_on_focus(store, text_of(&self.username));
            }
            ConnectField::DbName => {
                self.dbname_suggest.show_on_focus(store, text_of(&self.db_name));
            }
            _ => {}
        }
    }

    /// The suggestion popup bound to the focused field, if any.
    pub fn active_suggest(&mut self) -> Option<&mut SuggestState> {
        match self.field {
            ConnectField::Username => Some(&mut self.username_suggest),
            ConnectField::DbName => Some(&mut self.dbname_suggest),
            _ => None,
        }
    }

    /// Copy the active popup's selected entry into its field; returns false
    /// when there is nothing to accept.
    pub fn accept_suggestion(&mut self) -> bool {
        let entry = match self.field {
            ConnectField::Username => self.username_suggest.selected_entry().map(str::to_string),
            ConnectField::DbName => self.dbname_suggest.selected_entry().map(str::to_string),
            _ => None,
        };

        let Some(entry) = entry else {
            return false;
        };

        match self.field {
            ConnectField::Username => {
                set_text(&mut self.username, &entry);
                self.username_suggest.hide();
            }
            ConnectField::DbName => {
                set_text(&mut self.db_name, &entry);
                self.dbname_suggest.hide();
            }
            _ => unreachable!(),
        }
        true
    }

    /// Textarea of the focused field, when it takes text input.
    pub fn field_textarea_mut(&mut self) -> Option<&mut TextArea<'static>> {
        if !self.field_enabled(self.field) {
            return None;
        }
        match self.field {
            ConnectField::DbType => None,
            ConnectField::Host => Some(&mut self.host),
            ConnectField::Port => Some(&mut self.port),
            ConnectField::Username => Some(&mut self.username),
            ConnectField::Password => Some(&mut self.password),
            ConnectField::DbName => Some(&mut self.db_name),
        }
    }

    pub fn set_field_text(&mut self, field: ConnectField, text: &str) {
        let textarea = match field {
            ConnectField::DbType => return,
            ConnectField::Host => &mut self.host,
            ConnectField::Port => &mut self.port,
            ConnectField::Username => &mut self.username,
            ConnectField::Password => &mut self.password,
            ConnectField::DbName => &mut self.db_name,
        };
        set_text(textarea, text);
    }

    pub fn host_text(&self) -> &str {
        text_of(&self.host)
    }

    pub fn port_text(&self) -> &str {
        text_of(&self.port)
    }

    pub fn username_text(&self) -> &str {
        text_of(&self.username)
    }

    pub fn db_name_text(&self) -> &str {
        text_of(&self.db_name)
    }

    /// Serialize the form for `POST /connect_db`.
    pub fn params(&self) -> ConnectParams {
        ConnectParams {
            db_type: self.db_type.label().to_string(),
            host: text_of(&self.host).to_string(),
            port: text_of(&self.port).to_string(),
            username: text_of(&self.username).to_string(),
            password: text_of(&self.password).to_string(),
            db_name: text_of(&self.db_name).to_string(),
        }
    }

    pub fn set_status_info(&mut self, message: &str) {
        self.status = Some(ConnectStatus::Info(message.to_string()));
    }

    pub fn set_status_error(&mut self, message: &str) {
        self.status = Some(ConnectStatus::Error(message.to_string()));
    }
}

impl Default for ConnectState {
    fn default() -> Self {
        Self::new()
    }
}

fn text_of<'a>(textarea: &'a TextArea<'_>) -> &'a str {
    textarea.lines()[0].as_ref()
}

fn set_text(textarea: &mut TextArea<'static>, text: &str) {
    textarea.select_all();
    textarea.cut();
    textarea.insert_str(text);
}
