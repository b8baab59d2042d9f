use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod api;
mod app;
mod chat;
mod clipboard;
mod config;
mod connect;
mod error;
mod help;
mod notification;
mod scroll;
mod suggest;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::App;
use error::DbchatError;
use suggest::SuggestionStore;

/// Chat with your database in natural language
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal client for asking a database questions in natural language"
)]
struct Args {
    /// Backend server URL (overrides the config file)
    #[arg(long)]
    server: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/dbchat-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/dbchat-debug.log")
            .expect("Failed to open /tmp/dbchat-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DBCHAT DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let server_url = args
        .server
        .unwrap_or_else(|| config_result.config.server.url.clone());
    validate_server_url(&server_url)?;

    let terminal = init_terminal()?;

    let store = SuggestionStore::open_default();
    let mut app = App::new(&config_result.config, store);
    setup_api_worker(&mut app, server_url);

    let result = run(terminal, app, config_result.warning);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DBCHAT DEBUG SESSION ENDED ===");

    Ok(())
}

/// Reject URLs the HTTP client cannot use before entering the TUI
fn validate_server_url(url: &str) -> Result<(), DbchatError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(DbchatError::InvalidServerUrl(url.to_string()))
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_warning: Option<String>,
) -> Result<()> {
    if let Some(warning) = config_warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the API worker thread and channels
fn setup_api_worker(app: &mut App, server_url: String) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (reply_tx, reply_rx) = std::sync::mpsc::channel();
    app.set_channels(request_tx, reply_rx);

    api::worker::spawn_worker(server_url, request_rx, reply_tx);
}
