//! View state for the terminal surface.
//!
//! Everything here is presentation-only: cursor and scroll positions, which overlay is open,
//! the status line. Filter, column and detail state lives in [`Browser`](crate::Browser).

use crate::columns::{ColumnKey, CATALOG, COLUMN_COUNT};

/// Rows taken by the title bar, filter panel, indicators and status line.
const CHROME_ROWS: u16 = 6;
/// Table borders plus the header row.
const TABLE_CHROME_ROWS: u16 = 3;
/// Card list borders.
const CARD_CHROME_ROWS: u16 = 2;
/// Lines per card in the compact layout, separator included.
pub const CARD_HEIGHT: u16 = 4;

/// Popup currently covering the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    ColumnMenu,
    Details,
}

/// One line of the column menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Column(ColumnKey),
    /// "Select all" or "Deselect all", depending on the layout
    ToggleAll,
    /// "Default"
    Reset,
}

impl MenuEntry {
    /// Number of menu lines: every catalog column plus the two actions.
    pub const COUNT: usize = COLUMN_COUNT + 2;

    pub fn at(index: usize) -> Option<Self> {
        match index {
            i if i < CATALOG.len() => Some(MenuEntry::Column(CATALOG[i].key)),
            i if i == CATALOG.len() => Some(MenuEntry::ToggleAll),
            i if i == CATALOG.len() + 1 => Some(MenuEntry::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    /// Where the records came from, shown in the title bar
    pub source: String,

    /// Position of the cursor in the filtered sequence
    pub cursor_row: usize,

    /// First filtered row shown in the viewport
    pub scroll_offset: usize,

    /// Position of the focused column in the visible order
    pub focused_column: usize,

    pub overlay: Overlay,

    pub menu_cursor: usize,

    pub status_line: StatusLine,

    pub viewport_width: u16,
    pub viewport_height: u16,

    /// Widths below this switch rows to cards
    pub compact_width: u16,
}

impl ViewState {
    pub fn new(source: impl Into<String>, viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            source: source.into(),
            cursor_row: 0,
            scroll_offset: 0,
            focused_column: 0,
            overlay: Overlay::None,
            menu_cursor: 0,
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
            compact_width: 0,
        }
    }

    pub fn with_compact_width(mut self, compact_width: u16) -> Self {
        self.compact_width = compact_width;
        self
    }

    pub fn is_compact(&self) -> bool {
        self.viewport_width < self.compact_width
    }

    /// Records that fit in the table (or cards in the compact layout). Never zero.
    pub fn rows_per_page(&self) -> usize {
        let body = self.viewport_height.saturating_sub(CHROME_ROWS);
        let rows = if self.is_compact() {
            body.saturating_sub(CARD_CHROME_ROWS) / CARD_HEIGHT
        } else {
            body.saturating_sub(TABLE_CHROME_ROWS)
        };
        usize::from(rows).max(1)
    }

    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
            self.keep_cursor_visible();
        }
        changed
    }

    pub fn move_cursor_up(&mut self, rows: usize) {
        self.cursor_row = self.cursor_row.saturating_sub(rows);
        self.keep_cursor_visible();
    }

    pub fn move_cursor_down(&mut self, rows: usize, total: usize) {
        self.cursor_row = self.cursor_row.saturating_add(rows);
        self.clamp_cursor(total);
    }

    pub fn go_to_start(&mut self) {
        self.cursor_row = 0;
        self.scroll_offset = 0;
    }

    pub fn go_to_end(&mut self, total: usize) {
        self.cursor_row = total.saturating_sub(1);
        self.keep_cursor_visible();
    }

    /// Pull the cursor back inside a filtered sequence of `total` rows.
    pub fn clamp_cursor(&mut self, total: usize) {
        self.cursor_row = self.cursor_row.min(total.saturating_sub(1));
        self.scroll_offset = self
            .scroll_offset
            .min(total.saturating_sub(self.rows_per_page()));
        self.keep_cursor_visible();
    }

    fn keep_cursor_visible(&mut self) {
        let page = self.rows_per_page();
        if self.cursor_row < self.scroll_offset {
            self.scroll_offset = self.cursor_row;
        } else if self.cursor_row >= self.scroll_offset + page {
            self.scroll_offset = self.cursor_row + 1 - page;
        }
    }

    pub fn focus_left(&mut self) {
        self.focused_column = self.focused_column.saturating_sub(1);
    }

    pub fn focus_right(&mut self, visible_count: usize) {
        if self.focused_column + 1 < visible_count {
            self.focused_column += 1;
        }
    }

    pub fn clamp_focus(&mut self, visible_count: usize) {
        self.focused_column = self.focused_column.min(visible_count.saturating_sub(1));
    }

    pub fn open_column_menu(&mut self) {
        self.overlay = Overlay::ColumnMenu;
        self.menu_cursor = 0;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1).min(MenuEntry::COUNT - 1);
    }

    pub fn menu_entry(&self) -> Option<MenuEntry> {
        MenuEntry::at(self.menu_cursor)
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
    pub search_prompt: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn set_search_prompt(&mut self) {
        self.search_prompt = Some(String::new());
    }

    pub fn update_search_prompt(&mut self, buffer: String) {
        self.search_prompt = Some(buffer);
    }

    pub fn clear_search_prompt(&mut self) {
        self.search_prompt = None;
    }

    pub fn is_searching(&self) -> bool {
        self.search_prompt.is_some()
    }

    /// Text for the bottom line: the search prompt while typing, otherwise any message followed
    /// by the key hints for `overlay`.
    pub fn format_status_line(&self, overlay: Overlay) -> String {
        if let Some(buffer) = &self.search_prompt {
            return format!("/{buffer}");
        }

        let hints = match overlay {
            Overlay::None => {
                "j/k move  / search  s/d/p filter  x clear  c columns  </> reorder  Enter details  q quit"
            }
            Overlay::ColumnMenu => "j/k move  Space toggle  a all  r default  Esc close",
            Overlay::Details => "Esc close",
        };

        match &self.message {
            Some(message) => format!("{message} | {hints}"),
            None => hints.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(height: u16) -> ViewState {
        ViewState::new("sample data", 120, height).with_compact_width(100)
    }

    #[test]
    fn rows_per_page_accounts_for_chrome() {
        assert_eq!(state(30).rows_per_page(), 21);
        assert_eq!(state(5).rows_per_page(), 1);

        let mut compact = state(30);
        compact.update_terminal_size(80, 30);
        assert!(compact.is_compact());
        assert_eq!(compact.rows_per_page(), 5);
    }

    #[test]
    fn cursor_scrolls_viewport() {
        let mut view = state(14); // 5 rows per page
        assert_eq!(view.rows_per_page(), 5);

        view.move_cursor_down(7, 20);
        assert_eq!(view.cursor_row, 7);
        assert_eq!(view.scroll_offset, 3);

        view.move_cursor_up(5);
        assert_eq!(view.cursor_row, 2);
        assert_eq!(view.scroll_offset, 2);

        view.go_to_end(20);
        assert_eq!((view.cursor_row, view.scroll_offset), (19, 15));
        view.go_to_start();
        assert_eq!((view.cursor_row, view.scroll_offset), (0, 0));
    }

    #[test]
    fn clamp_cursor_after_filter_shrinks() {
        let mut view = state(14);
        view.go_to_end(20);
        view.clamp_cursor(3);
        assert_eq!((view.cursor_row, view.scroll_offset), (2, 0));

        view.clamp_cursor(0);
        assert_eq!(view.cursor_row, 0);
    }

    #[test]
    fn focus_stays_in_range() {
        let mut view = state(30);
        view.focus_left();
        assert_eq!(view.focused_column, 0);
        for _ in 0..10 {
            view.focus_right(8);
        }
        assert_eq!(view.focused_column, 7);
        view.clamp_focus(5);
        assert_eq!(view.focused_column, 4);
    }

    #[test]
    fn menu_entries_cover_catalog_and_actions() {
        assert_eq!(MenuEntry::at(0), Some(MenuEntry::Column(ColumnKey::PatientId)));
        assert_eq!(MenuEntry::at(13), Some(MenuEntry::ToggleAll));
        assert_eq!(MenuEntry::at(14), Some(MenuEntry::Reset));
        assert_eq!(MenuEntry::at(15), None);

        let mut view = state(30);
        view.open_column_menu();
        for _ in 0..20 {
            view.menu_down();
        }
        assert_eq!(view.menu_entry(), Some(MenuEntry::Reset));
    }

    #[test]
    fn status_line_shows_prompt_or_hints() {
        let mut status = StatusLine::new();
        assert!(status.format_status_line(Overlay::Details).starts_with("Esc"));

        status.set_message("Loaded 10 patients");
        assert!(status
            .format_status_line(Overlay::None)
            .starts_with("Loaded 10 patients | j/k move"));

        status.set_search_prompt();
        status.update_search_prompt("maria".to_string());
        assert_eq!(status.format_status_line(Overlay::None), "/maria");

        status.clear_search_prompt();
        assert!(!status.is_searching());
    }
}
