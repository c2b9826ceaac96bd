//! Terminal UI implementation using ratatui
//!
//! `TerminalUI` owns the crossterm backend; the drawing itself is done by `Painter`, which reads
//! the browser's derived state and never mutates anything.

use crate::browser::Browser;
use crate::columns::{ColumnDescriptor, ColumnKey, ColumnKind};
use crate::detail::detail_sections;
use crate::error::{Result, WardviewError};
use crate::filter::Selector;
use crate::format::{priority_tone, status_tone, Formatter};
use crate::records::PatientRecord;
use crate::render::renderer::UIRenderer;
use crate::render::state::{MenuEntry, Overlay, ViewState};
use crate::render::theme::ColorTheme;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::fmt::Display;
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
    formatter: Formatter,
}

impl TerminalUI {
    pub fn new(theme: ColorTheme, formatter: Formatter) -> Self {
        Self {
            terminal: None,
            theme,
            formatter,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new(ColorTheme::default(), Formatter::default())
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, browser: &Browser, view_state: &ViewState) -> Result<()> {
        if let Some(terminal) = self.terminal.as_mut() {
            let painter = Painter {
                browser,
                view: view_state,
                theme: &self.theme,
                formatter: &self.formatter,
            };
            terminal
                .draw(|frame| painter.draw(frame))
                .map_err(|e| WardviewError::ui(format!("Failed to draw frame: {e}")))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|e| WardviewError::ui(format!("Cannot enter raw mode: {e}")))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| WardviewError::ui(format!("Cannot switch to alternate screen: {e}")))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| WardviewError::ui(format!("Cannot create terminal: {e}")))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()
                .map_err(|e| WardviewError::ui(format!("Cannot leave raw mode: {e}")))?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
                .map_err(|e| WardviewError::ui(format!("Cannot restore the main screen: {e}")))?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()
            .map_err(|e| WardviewError::ui(format!("Cannot query terminal size: {e}")))?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn column_width(key: ColumnKey) -> Constraint {
    match key {
        ColumnKey::PatientId => Constraint::Length(6),
        ColumnKey::PatientName => Constraint::Min(20),
        ColumnKey::Department => Constraint::Length(12),
        ColumnKey::Doctor => Constraint::Min(20),
        ColumnKey::RoomNumber => Constraint::Length(7),
        ColumnKey::Status => Constraint::Length(12),
        ColumnKey::Priority => Constraint::Length(9),
        ColumnKey::AdmissionDate => Constraint::Length(14),
        ColumnKey::Diagnosis | ColumnKey::Treatment => Constraint::Min(20),
        ColumnKey::Insurance => Constraint::Length(14),
        ColumnKey::Cost => Constraint::Length(13),
        ColumnKey::LastUpdate => Constraint::Length(11),
    }
}

fn selector_label<T: Display>(selector: &Selector<T>) -> String {
    match selector.value() {
        Some(value) => value.to_string(),
        None => "All".to_string(),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

struct Painter<'a> {
    browser: &'a Browser,
    view: &'a ViewState,
    theme: &'a ColorTheme,
    formatter: &'a Formatter,
}

impl Painter<'_> {
    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_title(frame, chunks[0]);
        self.draw_filters(frame, chunks[1]);
        self.draw_indicators(frame, chunks[2]);
        if self.browser.patient_count() == 0 {
            self.draw_empty(frame, chunks[3]);
        } else if self.view.is_compact() {
            self.draw_cards(frame, chunks[3]);
        } else {
            self.draw_table(frame, chunks[3]);
        }
        self.draw_status(frame, chunks[4]);

        match self.view.overlay {
            Overlay::None => {}
            Overlay::ColumnMenu => self.draw_column_menu(frame, area),
            Overlay::Details => self.draw_details(frame, area),
        }
    }

    fn block(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(format!(" {title} "))
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(format!(" Patient Management | {}", self.view.source))
            .style(self.theme.title);
        frame.render_widget(title, area);
    }

    fn draw_filters(&self, frame: &mut Frame, area: Rect) {
        let state = self.browser.filter_state();
        let search = match &self.view.status_line.search_prompt {
            Some(buffer) => format!("{buffer}_"),
            None if state.search.is_empty() => "-".to_string(),
            None => state.search.clone(),
        };

        let label = |text: &'static str| Span::styled(text, self.theme.header);
        let line = Line::from(vec![
            label("Search: "),
            Span::raw(search),
            label("   Status: "),
            Span::raw(selector_label(&state.status)),
            label("   Department: "),
            Span::raw(selector_label(&state.department)),
            label("   Priority: "),
            Span::raw(selector_label(&state.priority)),
        ]);
        frame.render_widget(Paragraph::new(line).block(self.block("Filters")), area);
    }

    fn draw_indicators(&self, frame: &mut Frame, area: Rect) {
        let mut text = format!(
            " {} | {}",
            plural(self.browser.patient_count(), "patient"),
            plural(self.browser.columns().visible_count(), "visible column"),
        );
        if !self.browser.filter_state().is_unconstrained() {
            text.push_str(&format!(" | of {} total", self.browser.records().len()));
        }
        frame.render_widget(Paragraph::new(text).style(self.theme.muted), area);
    }

    fn cell(&self, record: &PatientRecord, column: &ColumnDescriptor) -> Cell<'static> {
        let style = match column.kind {
            ColumnKind::Status => self.theme.tone_style(status_tone(&record.status)),
            ColumnKind::Priority => self.theme.tone_style(priority_tone(&record.priority)),
            ColumnKind::Text | ColumnKind::Date | ColumnKind::Currency => Style::default(),
        };
        Cell::from(self.formatter.cell(record, column.key)).style(style)
    }

    fn page_range(&self) -> std::ops::Range<usize> {
        let start = self.view.scroll_offset;
        let end = (start + self.view.rows_per_page()).min(self.browser.patient_count());
        start..end.max(start)
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let columns = self.browser.visible_columns();

        let header = Row::new(columns.iter().enumerate().map(|(idx, column)| {
            let style = if idx == self.view.focused_column {
                self.theme.focused_header
            } else {
                self.theme.header
            };
            Cell::from(column.label).style(style)
        }));

        let rows: Vec<Row> = self
            .page_range()
            .filter_map(|pos| self.browser.filtered_record(pos).map(|record| (pos, record)))
            .map(|(pos, record)| {
                let row = Row::new(columns.iter().map(|column| self.cell(record, column)));
                if pos == self.view.cursor_row {
                    row.style(self.theme.selection)
                } else {
                    row
                }
            })
            .collect();

        let widths: Vec<Constraint> = columns.iter().map(|column| column_width(column.key)).collect();
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(self.block("Patients"));
        frame.render_widget(table, area);
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect) {
        let show_doctor = self.browser.columns().is_visible(ColumnKey::Doctor);
        let mut lines = Vec::new();

        for pos in self.page_range() {
            let Some(record) = self.browser.filtered_record(pos) else {
                break;
            };
            let selected = pos == self.view.cursor_row;
            let (marker, name_style) = if selected {
                ("> ", self.theme.selection.add_modifier(Modifier::BOLD))
            } else {
                ("  ", self.theme.header)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", record.patient_name), name_style),
                Span::styled(format!("  {}", record.patient_code), self.theme.muted),
            ]));

            let mut location = format!("  {} | Room {}", record.department, record.room_number);
            if show_doctor {
                location.push_str(" | ");
                location.push_str(&record.doctor);
            }
            lines.push(Line::from(location));

            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    record.status.label().to_string(),
                    self.theme.tone_style(status_tone(&record.status)),
                ),
                Span::raw("  "),
                Span::styled(
                    record.priority.label().to_string(),
                    self.theme.tone_style(priority_tone(&record.priority)),
                ),
            ]));
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(lines).block(self.block("Patients")), area);
    }

    fn draw_empty(&self, frame: &mut Frame, area: Rect) {
        let block = self.block("Patients");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = vec![
            Line::default(),
            Line::from(Span::styled("No patients found", self.theme.header)),
            Line::from(Span::styled(
                "Try adjusting the filters or search term",
                self.theme.muted,
            )),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(self.view.status_line.format_status_line(self.view.overlay))
            .style(self.theme.status_style());
        frame.render_widget(status, area);
    }

    fn draw_column_menu(&self, frame: &mut Frame, area: Rect) {
        let layout = self.browser.columns();
        let lines: Vec<Line> = (0..MenuEntry::COUNT)
            .filter_map(MenuEntry::at)
            .enumerate()
            .map(|(idx, entry)| {
                let (text, style) = match entry {
                    MenuEntry::Column(key) => {
                        let mark = if layout.is_visible(key) { "[x]" } else { "[ ]" };
                        if key.is_essential() {
                            (format!("{mark} {} (required)", key.label()), self.theme.muted)
                        } else {
                            (format!("{mark} {}", key.label()), Style::default())
                        }
                    }
                    MenuEntry::ToggleAll if layout.all_visible() => {
                        ("Deselect all".to_string(), self.theme.header)
                    }
                    MenuEntry::ToggleAll => ("Select all".to_string(), self.theme.header),
                    MenuEntry::Reset => ("Default".to_string(), self.theme.header),
                };
                let style = if idx == self.view.menu_cursor {
                    style.patch(self.theme.selection)
                } else {
                    style
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        let popup = centered_rect(area, 40, MenuEntry::COUNT as u16 + 2);
        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(self.block("Columns")), popup);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect) {
        let Some(record) = self.browser.selected_record() else {
            return;
        };

        let mut lines = Vec::new();
        for section in detail_sections(record, self.formatter) {
            lines.push(Line::from(Span::styled(section.title, self.theme.header)));
            for (label, value) in section.fields {
                let style = match label {
                    "Status" => self.theme.tone_style(status_tone(&record.status)),
                    "Priority" => self.theme.tone_style(priority_tone(&record.priority)),
                    _ => Style::default(),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {label}: "), self.theme.muted),
                    Span::styled(value, style),
                ]));
            }
            lines.push(Line::default());
        }

        let popup = centered_rect(area, 80, area.height.saturating_sub(4));
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(self.block(&record.patient_name)),
            popup,
        );
    }
}
