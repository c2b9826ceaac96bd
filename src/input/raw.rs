//! Low-level input collection: crossterm polling and translation into primitive events that the
//! higher-level input service can consume.

use crate::error::{Result, WardviewError};
use ratatui::crossterm::event::{self, Event, KeyEvent, MouseEvent, MouseEventKind};
use std::collections::VecDeque;
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;
/// Rows moved by a single mouse wheel tick.
const MOUSE_SCROLL_ROWS: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Scroll { direction: ScrollDirection, rows: u64 },
}

/// Collector that polls crossterm and queues the events we care about.
#[derive(Debug, Default)]
pub struct RawInputCollector {
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Pop the next queued event without polling the terminal.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.pop_pending() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !event::poll(poll_timeout).map_err(terminal_input_error)? {
            return Ok(None);
        }

        let event = event::read().map_err(terminal_input_error)?;
        self.enqueue_event(event);
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Mouse(mouse_event) => {
                if let Some(scroll) = Self::scroll_from_mouse(mouse_event) {
                    self.pending_events.push_back(scroll);
                }
            }
            _ => {}
        }
    }

    fn scroll_from_mouse(mouse_event: MouseEvent) -> Option<RawInputEvent> {
        let direction = match mouse_event.kind {
            MouseEventKind::ScrollUp => ScrollDirection::Up,
            MouseEventKind::ScrollDown => ScrollDirection::Down,
            _ => return None,
        };
        Some(RawInputEvent::Scroll {
            direction,
            rows: MOUSE_SCROLL_ROWS,
        })
    }
}

fn terminal_input_error(err: std::io::Error) -> WardviewError {
    WardviewError::ui(format!("Failed to read terminal input: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn terminal_read_failure_is_a_ui_error() {
        let err = terminal_input_error(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no tty",
        ));
        match err {
            WardviewError::UIError { message } => {
                assert_eq!(message, "Failed to read terminal input: no tty");
            }
            other => panic!("expected UIError, got {other:?}"),
        }
    }

    #[test]
    fn queues_events_in_arrival_order() {
        let mut collector = RawInputCollector::new();
        collector.process_event(mouse(MouseEventKind::ScrollDown));
        collector.process_event(Event::Resize(80, 40));
        collector.process_event(Event::Key(KeyEvent::new(
            KeyCode::Char('j'),
            KeyModifiers::NONE,
        )));

        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Scroll {
                direction: ScrollDirection::Down,
                rows: 1
            })
        );
        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize {
                width: 80,
                height: 40
            })
        );
        match collector.pop_pending() {
            Some(RawInputEvent::Key(key)) => assert_eq!(key.code, KeyCode::Char('j')),
            other => panic!("expected key event, got {other:?}"),
        }
        assert!(collector.is_idle());
    }

    #[test]
    fn ignores_clicks_and_focus_events() {
        let mut collector = RawInputCollector::new();
        collector.process_event(mouse(MouseEventKind::Moved));
        collector.process_event(Event::FocusGained);
        assert!(collector.is_idle());
    }
}
