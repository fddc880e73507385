//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, runs the event loop, and
//! turns every key, resize, animation frame and finished fetch into a
//! [`Message`] for the root model.
//!
//! ## Concurrency
//!
//! The loop runs on the main thread and is the only writer of UI state.
//! Fetches come back from `App::update` as futures; each one is
//! `tokio::spawn`ed and reports its `Loaded` result over an
//! `std::sync::mpsc` channel that the loop drains once per frame. Nothing
//! is ever cancelled: stale results are filtered by the views themselves.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (some fetch in flight): draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events or finished fetches.

pub mod app;
pub mod component;
pub mod components;
pub mod event;
pub mod keys;
pub mod ui;
pub mod views;

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{debug, info, warn};

use crate::api::MailerLiteApi;
use crate::core::config::ResolvedConfig;
use crate::tui::app::{App, Effect, Message};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::views::FetchTask;

const ANIMATION_INTERVAL: Duration = Duration::from_millis(80);
const IDLE_INTERVAL: Duration = Duration::from_millis(500);

pub fn run(client: Option<Arc<dyn MailerLiteApi>>, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(client, config);

    let mut terminal = ratatui::init();
    let _restore = RestoreOnDrop::new(|| {
        ratatui::restore();
        info!("Dashboard closed");
    });
    let (tx, rx) = mpsc::channel();

    let size = terminal.size()?;
    app.update(Message::Resize(size.width, size.height));
    spawn_fetch(app.init(), tx.clone());

    event_loop(&mut terminal, &mut app, &tx, &rx)
}

/// Runs its cleanup exactly once when dropped, so the terminal is restored
/// on every exit path out of [`run`], early errors and panics included.
struct RestoreOnDrop<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> RestoreOnDrop<F> {
    fn new(cleanup: F) -> Self {
        Self {
            cleanup: Some(cleanup),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tx: &mpsc::Sender<Message>,
    rx: &mpsc::Receiver<Message>,
) -> std::io::Result<()> {
    let mut needs_redraw = true;

    loop {
        let animating = app.animating();
        if needs_redraw || animating {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            ANIMATION_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        let first_event = poll_event_timeout(timeout)?;

        if animating && first_event.is_none() {
            app.update(Message::Tick);
        }

        // Drain every pending event before the next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            needs_redraw = true;
            let msg = match event {
                TuiEvent::Key(key) => Message::Key(key),
                TuiEvent::Resize(width, height) => Message::Resize(width, height),
            };
            if handle(app, msg, tx) {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }

        while let Ok(msg) = rx.try_recv() {
            needs_redraw = true;
            if handle(app, msg, tx) {
                return Ok(());
            }
        }
    }
}

/// Apply one message and carry out its effect. Returns true on quit.
fn handle(app: &mut App, msg: Message, tx: &mpsc::Sender<Message>) -> bool {
    match app.update(msg) {
        Effect::Quit => true,
        Effect::Fetch(task) => {
            spawn_fetch(task, tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Run a fetch on the runtime and post its result back to the loop. A task
/// that dies before producing a result is reported as a top-level error.
fn spawn_fetch(task: FetchTask, tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match tokio::spawn(task).await {
            Ok(loaded) => {
                debug!("Fetch finished for {}", loaded.view_type());
                Message::Loaded(loaded)
            }
            Err(e) => Message::Error(format!("background fetch failed: {e}")),
        };
        if tx.send(msg).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}
