//! Application orchestration layer
//!
//! Owns the [`Browser`] and the presentation state, applies input actions to them one at a time
//! and re-renders after each batch. Overlay-dependent key meaning is resolved here.

use crate::browser::Browser;
use crate::config::Config;
use crate::error::Result;
use crate::input::{spawn_input_thread, HorizontalDirection, InputAction, ScrollDirection};
use crate::render::{MenuEntry, Overlay, UIRenderer, ViewState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub struct Application {
    browser: Browser,
    ui_renderer: Box<dyn UIRenderer>,
    view_state: ViewState,
    poll_interval: Duration,
    /// Search term in effect when the prompt was opened, restored on cancel
    search_backup: Option<String>,
}

impl Application {
    pub fn new(
        browser: Browser,
        ui_renderer: Box<dyn UIRenderer>,
        source: impl Into<String>,
        config: &Config,
    ) -> Self {
        let mut view_state = ViewState::new(source, 0, 0).with_compact_width(config.compact_width);
        view_state
            .status_line
            .set_message(format!("Loaded {} patients", browser.records().len()));

        Self {
            browser,
            ui_renderer,
            view_state,
            poll_interval: config.poll_interval(),
            search_backup: None,
        }
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Take over the terminal, read keys on a dedicated thread and run until quit.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_handle = spawn_input_thread(tx, Arc::clone(&shutdown), self.poll_interval);

        let result = self.run_with(rx).await;

        shutdown.store(true, Ordering::SeqCst);
        if input_handle.join().is_err() {
            log::warn!("input thread panicked");
        }
        self.ui_renderer.cleanup()?;
        result
    }

    /// Event loop over an arbitrary action stream. Returns when the stream ends or on quit.
    pub async fn run_with(&mut self, mut actions: UnboundedReceiver<InputAction>) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        self.view_state.update_terminal_size(width, height);
        self.render()?;

        while let Some(action) = actions.recv().await {
            if !self.handle_action(action) {
                return Ok(());
            }
            // Apply everything already queued before drawing again.
            while let Ok(action) = actions.try_recv() {
                if !self.handle_action(action) {
                    return Ok(());
                }
            }
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.ui_renderer.render(&self.browser, &self.view_state)
    }

    /// Apply one action. Returns false when the application should exit.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        log::trace!("action {:?}", action);
        if !matches!(action, InputAction::Resize { .. }) {
            self.view_state.status_line.clear_message();
        }

        let overlay = self.view_state.overlay;
        match action {
            InputAction::Quit => {
                if overlay == Overlay::None {
                    return false;
                }
                self.close_overlay();
            }
            InputAction::Resize { width, height } => {
                self.view_state.update_terminal_size(width, height);
            }

            InputAction::Scroll { direction, lines } => {
                let lines = usize::try_from(lines).unwrap_or(usize::MAX);
                match (overlay, direction) {
                    (Overlay::None, ScrollDirection::Up) => self.view_state.move_cursor_up(lines),
                    (Overlay::None, ScrollDirection::Down) => {
                        let total = self.browser.patient_count();
                        self.view_state.move_cursor_down(lines, total);
                    }
                    (Overlay::ColumnMenu, ScrollDirection::Up) => {
                        for _ in 0..lines.min(MenuEntry::COUNT) {
                            self.view_state.menu_up();
                        }
                    }
                    (Overlay::ColumnMenu, ScrollDirection::Down) => {
                        for _ in 0..lines.min(MenuEntry::COUNT) {
                            self.view_state.menu_down();
                        }
                    }
                    (Overlay::Details, _) => {}
                }
            }
            InputAction::PageUp if overlay == Overlay::None => {
                let page = self.view_state.rows_per_page();
                self.view_state.move_cursor_up(page);
            }
            InputAction::PageDown if overlay == Overlay::None => {
                let page = self.view_state.rows_per_page();
                let total = self.browser.patient_count();
                self.view_state.move_cursor_down(page, total);
            }
            InputAction::GoToStart => match overlay {
                Overlay::None => self.view_state.go_to_start(),
                Overlay::ColumnMenu => self.view_state.menu_cursor = 0,
                Overlay::Details => {}
            },
            InputAction::GoToEnd => match overlay {
                Overlay::None => self.view_state.go_to_end(self.browser.patient_count()),
                Overlay::ColumnMenu => self.view_state.menu_cursor = MenuEntry::COUNT - 1,
                Overlay::Details => {}
            },

            InputAction::FocusColumn(direction) if overlay == Overlay::None => match direction {
                HorizontalDirection::Left => self.view_state.focus_left(),
                HorizontalDirection::Right => {
                    let count = self.browser.columns().visible_count();
                    self.view_state.focus_right(count);
                }
            },
            InputAction::MoveColumn(direction) if overlay == Overlay::None => {
                self.move_focused_column(direction);
            }

            InputAction::ToggleColumnMenu => match overlay {
                Overlay::None => self.view_state.open_column_menu(),
                Overlay::ColumnMenu => self.view_state.close_overlay(),
                Overlay::Details => {}
            },
            InputAction::ToggleColumn if overlay == Overlay::ColumnMenu => {
                self.activate_menu_entry();
            }
            InputAction::ToggleAllColumns if overlay == Overlay::ColumnMenu => {
                self.browser.toggle_all_columns();
                self.after_column_change();
            }
            InputAction::ResetColumns if overlay == Overlay::ColumnMenu => {
                self.browser.reset_columns();
                self.after_column_change();
            }

            InputAction::CycleFilter { field, step } if overlay == Overlay::None => {
                self.browser.cycle_filter(field, step);
                self.after_filter_change();
            }
            InputAction::ClearFilters if overlay == Overlay::None => {
                self.browser.clear_filters();
                self.after_filter_change();
            }

            InputAction::Confirm => match overlay {
                Overlay::None => {
                    if self.browser.open_filtered_details(self.view_state.cursor_row) {
                        self.view_state.overlay = Overlay::Details;
                    }
                }
                Overlay::ColumnMenu => self.activate_menu_entry(),
                Overlay::Details => {}
            },
            InputAction::Dismiss => self.close_overlay(),

            InputAction::StartSearch => {
                self.close_overlay();
                self.search_backup = Some(self.browser.filter_state().search.clone());
                self.view_state.status_line.set_search_prompt();
            }
            InputAction::UpdateSearchBuffer(buffer) => {
                self.browser.set_search(buffer.as_str());
                self.view_state.status_line.update_search_prompt(buffer);
                self.after_filter_change();
            }
            InputAction::CancelSearch => {
                if let Some(previous) = self.search_backup.take() {
                    self.browser.set_search(previous);
                }
                self.view_state.status_line.clear_search_prompt();
                self.after_filter_change();
            }
            InputAction::ExecuteSearch(pattern) => {
                self.search_backup = None;
                self.browser.set_search(pattern);
                self.view_state.status_line.clear_search_prompt();
                self.after_filter_change();
            }

            _ => {}
        }

        true
    }

    fn close_overlay(&mut self) {
        if self.view_state.overlay == Overlay::Details {
            self.browser.close_details();
        }
        self.view_state.close_overlay();
    }

    fn move_focused_column(&mut self, direction: HorizontalDirection) {
        let from = self.view_state.focused_column;
        let to = match direction {
            HorizontalDirection::Left => match from.checked_sub(1) {
                Some(to) => to,
                None => return,
            },
            HorizontalDirection::Right => from + 1,
        };
        if to >= self.browser.columns().visible_count() {
            return;
        }
        if self.browser.reorder_columns(from, to) {
            self.view_state.focused_column = to;
        }
    }

    fn activate_menu_entry(&mut self) {
        match self.view_state.menu_entry() {
            Some(MenuEntry::Column(key)) => {
                if !self.browser.toggle_column(key) {
                    self.view_state
                        .status_line
                        .set_message(format!("{} is required", key.label()));
                }
            }
            Some(MenuEntry::ToggleAll) => self.browser.toggle_all_columns(),
            Some(MenuEntry::Reset) => self.browser.reset_columns(),
            None => {}
        }
        self.after_column_change();
    }

    fn after_column_change(&mut self) {
        let count = self.browser.columns().visible_count();
        self.view_state.clamp_focus(count);
    }

    fn after_filter_change(&mut self) {
        let total = self.browser.patient_count();
        self.view_state.clamp_cursor(total);
    }
}
