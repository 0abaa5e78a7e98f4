//! Terminal event handling for the game loop.
//!
//! A background thread polls crossterm for key and resize events and emits a
//! [`Event::Tick`] at the frame rate. Key presses, repeats and releases are all
//! forwarded; the input tracker decides what they mean.

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events that drive the application.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input event.
    Key(KeyEvent),
    /// The terminal was resized; the next draw picks up the new size.
    Resize,
    /// One simulation frame is due.
    Tick,
}

/// Time between ticks for a given frame rate.
#[must_use]
pub fn tick_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// The crossterm events the game cares about.
fn forward(evt: CrosstermEvent) -> Option<Event> {
    match evt {
        CrosstermEvent::Key(key) => Some(Event::Key(key)),
        CrosstermEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

/// Handles terminal events in a background thread.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Creates a new event handler ticking `fps` times per second.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        let tick_rate = tick_interval(fps);
        let (sender, receiver) = mpsc::channel();

        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    if let Some(evt) = event::read().ok().and_then(forward) {
                        if sender.send(evt).is_err() {
                            return;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Blocks until the next event is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is disconnected.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval() {
        assert_eq!(tick_interval(50), Duration::from_millis(20));
        assert_eq!(tick_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_forwards_keys_and_resizes_only() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let key = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert!(matches!(forward(CrosstermEvent::Key(key)), Some(Event::Key(k)) if k == key));
        assert!(matches!(
            forward(CrosstermEvent::Resize(120, 40)),
            Some(Event::Resize)
        ));
        assert!(forward(CrosstermEvent::FocusLost).is_none());
    }
}
