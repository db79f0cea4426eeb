use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    /// No input within one frame interval; time to advance the game clock.
    Frame,
    Resize,
}

/// Reads terminal events on a helper thread. The game itself stays on the
/// main thread and only sees the channel.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(frame_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let event = if event::poll(frame_rate).unwrap_or(false) {
                    match translate(event::read()) {
                        Some(event) => event,
                        None => continue,
                    }
                } else {
                    AppEvent::Frame
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    /// Fails once the reader thread is gone, so the caller can restore the
    /// terminal instead of waiting forever.
    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

/// Map a raw terminal read to an app event. Failed reads and uninteresting
/// events are skipped; the reader keeps polling.
fn translate(read: io::Result<Event>) -> Option<AppEvent> {
    match read {
        // Repeat and Release would double up text on some terminals.
        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
        Ok(_) | Err(_) => None,
    }
}
