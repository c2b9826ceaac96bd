//! High-level input service.
//!
//! Consumes raw events, runs the browser's key state machine, and yields domain-level
//! `InputAction`s that the application loop consumes. The state machine only knows whether a
//! search prompt is open; overlay-dependent meaning (menu cursor vs row cursor, Enter as toggle
//! vs open) is resolved by the application.

use crate::error::Result;
use crate::filter::{CycleStep, FilterField};
use crate::input::raw::{RawInputCollector, RawInputEvent, ScrollDirection};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Navigation,
    SearchInput,
}

/// Left/right for column focus and reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

/// High-level input actions emitted by the state machine/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Scroll {
        direction: ScrollDirection,
        lines: u64,
    },
    PageUp,
    PageDown,
    GoToStart,
    GoToEnd,
    FocusColumn(HorizontalDirection),
    MoveColumn(HorizontalDirection),
    ToggleColumnMenu,
    ToggleColumn,
    ToggleAllColumns,
    ResetColumns,
    CycleFilter {
        field: FilterField,
        step: CycleStep,
    },
    ClearFilters,
    /// Enter outside the search prompt
    Confirm,
    /// Esc outside the search prompt
    Dismiss,
    StartSearch,
    UpdateSearchBuffer(String),
    CancelSearch,
    ExecuteSearch(String),
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
    InvalidInput,
}

fn unmodified(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn cycle(field: FilterField, step: CycleStep) -> InputAction {
    InputAction::CycleFilter { field, step }
}

/// Key bindings for the patient browser.
pub struct InputStateMachine {
    state: InputState,
    search_buffer: String,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self {
            state: InputState::Navigation,
            search_buffer: String::new(),
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        match self.state {
            InputState::Navigation => self.handle_navigation(key_event),
            InputState::SearchInput => self.handle_search(key_event),
        }
    }

    fn handle_navigation(&mut self, key_event: KeyEvent) -> InputAction {
        let modifiers = key_event.modifiers;
        match key_event.code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
            _ if !unmodified(modifiers) => InputAction::InvalidInput,

            KeyCode::Char('j') | KeyCode::Down => InputAction::Scroll {
                direction: ScrollDirection::Down,
                lines: 1,
            },
            KeyCode::Char('k') | KeyCode::Up => InputAction::Scroll {
                direction: ScrollDirection::Up,
                lines: 1,
            },
            KeyCode::PageDown => InputAction::PageDown,
            KeyCode::PageUp => InputAction::PageUp,
            KeyCode::Char('g') | KeyCode::Home => InputAction::GoToStart,
            KeyCode::Char('G') | KeyCode::End => InputAction::GoToEnd,

            KeyCode::Char('h') | KeyCode::Left => {
                InputAction::FocusColumn(HorizontalDirection::Left)
            }
            KeyCode::Char('l') | KeyCode::Right => {
                InputAction::FocusColumn(HorizontalDirection::Right)
            }
            KeyCode::Char('<') => InputAction::MoveColumn(HorizontalDirection::Left),
            KeyCode::Char('>') => InputAction::MoveColumn(HorizontalDirection::Right),

            KeyCode::Char('c') => InputAction::ToggleColumnMenu,
            KeyCode::Char(' ') => InputAction::ToggleColumn,
            KeyCode::Char('a') => InputAction::ToggleAllColumns,
            KeyCode::Char('r') => InputAction::ResetColumns,

            KeyCode::Char('s') => cycle(FilterField::Status, CycleStep::Forward),
            KeyCode::Char('S') => cycle(FilterField::Status, CycleStep::Backward),
            KeyCode::Char('d') => cycle(FilterField::Department, CycleStep::Forward),
            KeyCode::Char('D') => cycle(FilterField::Department, CycleStep::Backward),
            KeyCode::Char('p') => cycle(FilterField::Priority, CycleStep::Forward),
            KeyCode::Char('P') => cycle(FilterField::Priority, CycleStep::Backward),
            KeyCode::Char('x') => InputAction::ClearFilters,

            KeyCode::Enter => InputAction::Confirm,
            KeyCode::Esc => InputAction::Dismiss,
            KeyCode::Char('q') => InputAction::Quit,

            KeyCode::Char('/') => {
                self.state = InputState::SearchInput;
                self.search_buffer.clear();
                InputAction::StartSearch
            }
            _ => InputAction::InvalidInput,
        }
    }

    fn handle_search(&mut self, key_event: KeyEvent) -> InputAction {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
                self.leave_search();
                InputAction::CancelSearch
            }
            (KeyCode::Esc, _) => {
                self.leave_search();
                InputAction::CancelSearch
            }
            (KeyCode::Enter, _) => {
                let pattern = std::mem::take(&mut self.search_buffer);
                self.state = InputState::Navigation;
                InputAction::ExecuteSearch(pattern)
            }
            (KeyCode::Backspace, _) => {
                if self.search_buffer.pop().is_none() {
                    return InputAction::NoAction;
                }
                InputAction::UpdateSearchBuffer(self.search_buffer.clone())
            }
            (KeyCode::Char(ch), modifiers) if !ch.is_control() && unmodified(modifiers) => {
                self.search_buffer.push(ch);
                InputAction::UpdateSearchBuffer(self.search_buffer.clone())
            }
            _ => InputAction::InvalidInput,
        }
    }

    fn leave_search(&mut self) {
        self.state = InputState::Navigation;
        self.search_buffer.clear();
    }

    pub fn get_search_buffer(&self) -> &str {
        &self.search_buffer
    }

    pub fn get_state(&self) -> InputState {
        self.state
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    state_machine: InputStateMachine,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            state_machine: InputStateMachine::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.pop_pending() {
                if let Some(action) = self.process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.pop_pending() {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.state_machine.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Scroll { direction, rows } => InputAction::Scroll {
                direction,
                lines: rows,
            },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the app loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("input thread stopped: {}", err);
                    break;
                }
            }
        }
    })
}
