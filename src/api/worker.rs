//! Backend API worker thread
//!
//! Handles HTTP requests in a background thread so the UI never blocks.
//! Receives requests via channel, calls the backend, and sends replies
//! back to the main thread, which polls them from its event loop.
//!
//! Requests are processed one at a time in arrival order, so replies come
//! back FIFO; chat replies still carry their sequence number so the app
//! can drop anything stale.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::client::ApiClient;
use super::types::{ApiReply, ApiRequest};

/// Spawn the API worker thread.
///
/// Creates a background thread with a current-thread tokio runtime that
/// listens on `request_rx` and answers on `reply_tx`. The thread installs a
/// panic hook so a panic is logged instead of corrupting the terminal; the
/// main thread notices the dropped channel and degrades gracefully.
pub fn spawn_worker(
    base_url: String,
    request_rx: Receiver<ApiRequest>,
    reply_tx: Sender<ApiReply>,
) {
    std::thread::spawn(move || {
        // The default panic hook prints to stderr which corrupts the TUI
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            log::error!("API worker panic: {}", panic_info);
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(&base_url, request_rx, reply_tx));
        }));

        panic::set_hook(prev_hook);

        if result.is_err() {
            log::error!("API worker thread panicked");
        }
    });
}

/// Process requests until the channel is closed.
///
/// Blocking `recv()` is fine here since we're in a dedicated thread.
async fn worker_loop(
    base_url: &str,
    request_rx: Receiver<ApiRequest>,
    reply_tx: Sender<ApiReply>,
) {
    let client = ApiClient::new(base_url);

    while let Ok(request) = request_rx.recv() {
        let reply = match request {
            ApiRequest::Connect { params } => ApiReply::Connect {
                result: client.connect_db(&params).await,
            },
            ApiRequest::Chat { seq, message } => ApiReply::Chat {
                seq,
                result: client.chat(&message).await,
            },
        };

        // Main thread gone means we're shutting down
        if reply_tx.send(reply).is_err() {
            break;
        }
    }
}
