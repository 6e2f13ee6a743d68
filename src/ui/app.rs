use std::cell::Cell;
use std::mem;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell as TableCell, Clear, List, ListItem, ListState, Paragraph, Row, Table,
    TableState, Wrap,
};
use ratatui::Frame;
use rusqlite::Connection;
use tracing::{debug, error};

use crate::db::{
    close_store, create_credential, delete_credential, fetch_credentials, update_credential,
};
use crate::error::ShellError;
use crate::models::{CopyField, Credential};

use super::clipboard::Clipboard;
use super::forms::{ConfirmDelete, CopyMenu, RecordField, RecordForm};
use super::helpers::{centered_rect, cursor_column, stripe_style, surface_error};

/// Height of the filter box above the table.
const SEARCH_HEIGHT: u16 = 3;
/// Footer space reserved for the status line, key hints and version label.
const FOOTER_HEIGHT: u16 = 4;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 10;
/// Two clicks on the same row within this window count as activation.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);
/// Table border plus header line above the first data row.
const TABLE_HEADER_ROWS: u16 = 2;

/// What the shell is doing. Browsing keeps the table interactive; editing
/// owns the modal form. The confirmation and copy dialogs are short-lived
/// prompts on top of browsing and always fall back to it.
enum Mode {
    Browsing,
    Editing { id: Option<i64>, form: RecordForm },
    ConfirmDelete(ConfirmDelete),
    CopyMenu(CopyMenu),
}

/// Text in the filter box and the filter currently applied to the table.
/// They diverge while the user is typing.
#[derive(Default)]
struct SearchState {
    input: String,
    applied: String,
    focused: bool,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Warning,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Warning => Style::default().fg(Color::Yellow),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. Owns the database connection for the life of
/// the process; [`App::shutdown`] releases it.
pub struct App {
    conn: Connection,
    records: Vec<Credential>,
    selected: Option<usize>,
    mode: Mode,
    search: SearchState,
    status: Option<StatusMessage>,
    clipboard: Box<dyn Clipboard>,
    last_click: Option<(usize, Instant)>,
    /// Where the table was last drawn, for mapping mouse clicks to rows.
    table_area: Cell<Rect>,
    table_offset: Cell<usize>,
}

impl App {
    pub fn new(conn: Connection, records: Vec<Credential>, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            conn,
            records,
            selected: None,
            mode: Mode::Browsing,
            search: SearchState::default(),
            status: None,
            clipboard,
            last_click: None,
            table_area: Cell::new(Rect::default()),
            table_offset: Cell::new(0),
        }
    }

    /// Close the database connection. Called once after the event loop ends.
    pub fn shutdown(self) -> Result<()> {
        close_store(self.conn)
    }

    /// Dispatch one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Browsing);

        self.mode = match mode {
            Mode::Browsing if self.search.focused => {
                self.handle_search_key(code)?;
                Mode::Browsing
            }
            Mode::Browsing => self.handle_browsing_key(code, &mut exit)?,
            Mode::Editing { id, form } => self.handle_editing_key(code, id, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::CopyMenu(menu) => self.handle_copy_menu(code, menu)?,
        };

        Ok(exit)
    }

    /// Translate a terminal mouse event into a row click.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Result<()> {
        let button = match event.kind {
            MouseEventKind::Down(button) => button,
            MouseEventKind::ScrollUp => {
                self.move_selection(-1);
                return Ok(());
            }
            MouseEventKind::ScrollDown => {
                self.move_selection(1);
                return Ok(());
            }
            _ => return Ok(()),
        };
        self.handle_click(button, event.column, event.row, Instant::now())
    }

    /// Left click selects, a second left click on the same row activates it
    /// (edit), right click opens the copy menu. Ignored while a dialog is open.
    pub(crate) fn handle_click(
        &mut self,
        button: MouseButton,
        column: u16,
        row: u16,
        now: Instant,
    ) -> Result<()> {
        if !matches!(self.mode, Mode::Browsing) {
            return Ok(());
        }
        if self.search.focused {
            self.leave_search();
        }

        let Some(index) = self.row_at(column, row) else {
            self.last_click = None;
            return Ok(());
        };
        self.selected = Some(index);

        match button {
            MouseButton::Left => {
                let activated = matches!(
                    self.last_click,
                    Some((previous, at)) if previous == index
                        && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
                );
                if activated {
                    self.last_click = None;
                    self.mode = self.begin_edit();
                } else {
                    self.last_click = Some((index, now));
                }
            }
            MouseButton::Right => {
                self.last_click = None;
                self.mode = self.begin_copy();
            }
            MouseButton::Middle => {}
        }
        Ok(())
    }

    fn handle_browsing_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.clear_status();
                self.search.focused = true;
            }
            KeyCode::Char('+') | KeyCode::Char('a') => {
                self.clear_status();
                return Ok(Mode::Editing {
                    id: None,
                    form: RecordForm::default(),
                });
            }
            KeyCode::Char('e') | KeyCode::Enter => return Ok(self.begin_edit()),
            KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Delete => {
                return Ok(self.begin_delete())
            }
            KeyCode::Char('c') => return Ok(self.begin_copy()),
            KeyCode::F(5) => {
                if self.refresh(None) {
                    self.set_status("Reloaded.", StatusKind::Info);
                }
            }
            _ => {}
        }
        Ok(Mode::Browsing)
    }

    /// Typing into the filter box. Enter applies the filter, Esc backs out
    /// and restores the box to the filter already in effect.
    fn handle_search_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Esc => self.leave_search(),
            KeyCode::Enter => {
                self.search.applied = self.search.input.clone();
                self.search.focused = false;
                if !self.refresh(None) {
                    return Ok(());
                }
                if self.search.applied.is_empty() {
                    self.set_status("Showing all records.", StatusKind::Info);
                } else {
                    let message = format!(
                        "{} record(s) match '{}'.",
                        self.records.len(),
                        self.search.applied
                    );
                    self.set_status(message, StatusKind::Info);
                }
            }
            KeyCode::Backspace => {
                self.search.input.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => self.search.input.push(ch),
            _ => {}
        }
        Ok(())
    }

    fn handle_editing_key(
        &mut self,
        code: KeyCode,
        id: Option<i64>,
        mut form: RecordForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                let message = if id.is_some() {
                    "Edit cancelled."
                } else {
                    "Add cancelled."
                };
                self.set_status(message, StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_form(id, &mut form) {
                Ok(true) => keep_open = false,
                Ok(false) => {}
                Err(err) => {
                    error!(error = ?err, "failed to save credential");
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::Editing { id, form })
        } else {
            Ok(Mode::Browsing)
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Browsing)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.perform_delete(&confirm) {
                    Ok(_) => Ok(Mode::Browsing),
                    Err(err) => {
                        error!(error = ?err, "failed to delete credential");
                        self.set_status(surface_error(&err), StatusKind::Error);
                        Ok(Mode::ConfirmDelete(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn handle_copy_menu(&mut self, code: KeyCode, mut menu: CopyMenu) -> Result<Mode> {
        let field = match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.clear_status();
                return Ok(Mode::Browsing);
            }
            KeyCode::Up | KeyCode::BackTab => {
                menu.move_selection(-1);
                return Ok(Mode::CopyMenu(menu));
            }
            KeyCode::Down | KeyCode::Tab => {
                menu.move_selection(1);
                return Ok(Mode::CopyMenu(menu));
            }
            KeyCode::Enter => menu.current(),
            KeyCode::Char(ch) => match CopyMenu::field_for(ch) {
                Some(field) => field,
                None => return Ok(Mode::CopyMenu(menu)),
            },
            _ => return Ok(Mode::CopyMenu(menu)),
        };

        self.copy_field(&menu.credential, field);
        Ok(Mode::Browsing)
    }

    /// Validate and persist the form. `Ok(false)` means validation failed and
    /// the form has been annotated; a failed write comes back as `Err`. Once
    /// the write succeeds the form closes even if the refresh after it fails,
    /// so a retry cannot insert the record twice.
    fn save_form(&mut self, id: Option<i64>, form: &mut RecordForm) -> Result<bool> {
        let draft = match form.parse_inputs() {
            Ok(draft) => draft,
            Err(err) => {
                let message = err.to_string();
                form.error = Some(message.clone());
                self.set_status(message, StatusKind::Error);
                return Ok(false);
            }
        };

        match id {
            None => {
                let credential = create_credential(&self.conn, &draft)?;
                if self.refresh(Some(credential.id)) {
                    self.set_status(format!("Added {credential}."), StatusKind::Info);
                }
            }
            Some(id) => {
                update_credential(&self.conn, id, &draft)?;
                if self.refresh(Some(id)) {
                    self.set_status(
                        format!("Updated {} ({}).", draft.name, draft.domain),
                        StatusKind::Info,
                    );
                }
            }
        }
        Ok(true)
    }

    fn perform_delete(&mut self, confirm: &ConfirmDelete) -> Result<()> {
        delete_credential(&self.conn, confirm.credential.id)?;
        if self.refresh(None) {
            self.set_status(format!("Deleted {}.", confirm.credential), StatusKind::Info);
        }
        Ok(())
    }

    fn copy_field(&mut self, credential: &Credential, field: CopyField) {
        match self.clipboard.copy(credential.field(field)) {
            Ok(()) => {
                debug!(id = credential.id, field = field.label(), "field copied");
                self.set_status(
                    format!("Copied {} of {}.", field.label().to_lowercase(), credential.name),
                    StatusKind::Info,
                );
            }
            Err(err) => {
                error!(error = ?err, "clipboard write failed");
                self.set_status(surface_error(&err), StatusKind::Error);
            }
        }
    }

    fn begin_edit(&mut self) -> Mode {
        match self.current_record().cloned() {
            Some(credential) => {
                self.clear_status();
                Mode::Editing {
                    id: Some(credential.id),
                    form: RecordForm::from_credential(&credential),
                }
            }
            None => {
                self.warn(ShellError::NoSelection { action: "edit" });
                Mode::Browsing
            }
        }
    }

    fn begin_delete(&mut self) -> Mode {
        match self.current_record().cloned() {
            Some(credential) => {
                self.clear_status();
                Mode::ConfirmDelete(ConfirmDelete { credential })
            }
            None => {
                self.warn(ShellError::NoSelection { action: "delete" });
                Mode::Browsing
            }
        }
    }

    fn begin_copy(&mut self) -> Mode {
        match self.current_record().cloned() {
            Some(credential) => {
                self.clear_status();
                Mode::CopyMenu(CopyMenu::new(credential))
            }
            None => {
                self.warn(ShellError::NoSelection { action: "copy" });
                Mode::Browsing
            }
        }
    }

    fn leave_search(&mut self) {
        self.search.input = self.search.applied.clone();
        self.search.focused = false;
    }

    /// Re-query with the applied filter. The selection follows `focus_id`
    /// when it is still visible, and is clamped to the new length otherwise.
    fn reload(&mut self, focus_id: Option<i64>) -> Result<()> {
        self.records = fetch_credentials(&self.conn, Some(self.search.applied.as_str()))?;
        if self.records.is_empty() {
            self.selected = None;
            return Ok(());
        }

        if let Some(id) = focus_id {
            if let Some(idx) = self.records.iter().position(|record| record.id == id) {
                self.selected = Some(idx);
                return Ok(());
            }
        }

        if let Some(selected) = self.selected {
            self.selected = Some(selected.min(self.records.len() - 1));
        }
        Ok(())
    }

    /// [`App::reload`] for interactive paths: a failure is logged and shown
    /// on the status line instead of ending the shell. Returns whether the
    /// table was refreshed.
    fn refresh(&mut self, focus_id: Option<i64>) -> bool {
        match self.reload(focus_id) {
            Ok(()) => true,
            Err(err) => {
                error!(error = ?err, "failed to refresh credentials");
                self.set_status(surface_error(&err), StatusKind::Error);
                false
            }
        }
    }

    fn current_record(&self) -> Option<&Credential> {
        self.selected.and_then(|idx| self.records.get(idx))
    }

    fn move_selection(&mut self, offset: isize) {
        if self.records.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.records.len() as isize - 1;
        let next = match self.selected {
            Some(current) => (current as isize + offset).clamp(0, last),
            None if offset < 0 => last,
            None => 0,
        };
        self.selected = Some(next as usize);
    }

    fn select_first(&mut self) {
        self.selected = if self.records.is_empty() { None } else { Some(0) };
    }

    fn select_last(&mut self) {
        self.selected = self.records.len().checked_sub(1);
    }

    /// Map a screen position to a record index using the last drawn table.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area.get();
        let first_row = area.y + TABLE_HEADER_ROWS;
        let last_row = area.bottom().saturating_sub(1);
        if column <= area.x || column >= area.right().saturating_sub(1) {
            return None;
        }
        if row < first_row || row >= last_row {
            return None;
        }
        let index = self.table_offset.get() + (row - first_row) as usize;
        (index < self.records.len()).then_some(index)
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn warn(&mut self, err: ShellError) {
        self.set_status(err.to_string(), StatusKind::Warning);
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_search_bar(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::Editing { id, form } => self.draw_form(frame, area, *id, form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::CopyMenu(menu) => self.draw_copy_menu(frame, area, menu),
            Mode::Browsing => {}
        }
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect) {
        let title = if self.search.applied.is_empty() {
            "Search".to_string()
        } else {
            format!("Search (filter: {})", self.search.applied)
        };
        let mut block = Block::default().borders(Borders::ALL).title(title);
        if self.search.focused {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let paragraph = Paragraph::new(Span::raw(format!("Filter: {}", self.search.input)))
            .block(block.clone());
        frame.render_widget(paragraph, area);

        if self.search.focused && matches!(self.mode, Mode::Browsing) {
            let inner = block.inner(area);
            let offset = "Filter: ".len() + self.search.input.chars().count();
            frame.set_cursor_position((cursor_column(inner, offset), inner.y));
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        self.table_area.set(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Passwords ({})", self.records.len()));

        if self.records.is_empty() {
            let text = if self.search.applied.is_empty() {
                "No records yet. Press '+' to add one.".to_string()
            } else {
                format!("No records match '{}'.", self.search.applied)
            };
            let message = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(["ID", "Name", "Domain", "Username", "Password", "Notes"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.records.iter().enumerate().map(|(index, record)| {
            Row::new(vec![
                TableCell::from(record.id.to_string()),
                TableCell::from(record.name.clone()),
                TableCell::from(record.domain.clone()),
                TableCell::from(record.username.clone()),
                TableCell::from(record.password.clone()),
                TableCell::from(record.notes.clone()),
            ])
            .style(stripe_style(index))
        });

        let widths = [
            Constraint::Length(5),
            Constraint::Percentage(17),
            Constraint::Percentage(22),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Min(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
            .highlight_symbol("> ");

        let mut state = TableState::default()
            .with_offset(self.table_offset.get())
            .with_selected(self.selected);
        frame.render_stateful_widget(table, area, &mut state);
        self.table_offset.set(state.offset());
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let version = Line::from(Span::styled(
            format!("Passbook v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions(), version]);
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints: &[(&'static str, &'static str)] = match &self.mode {
            Mode::Browsing if self.search.focused => {
                &[("[Enter]", " Apply filter   "), ("[Esc]", " Back")]
            }
            Mode::Browsing => &[
                ("[/]", " Search   "),
                ("[+]", " Add   "),
                ("[e]", " Edit   "),
                ("[-]", " Delete   "),
                ("[c]", " Copy   "),
                ("[q]", " Quit"),
            ],
            Mode::Editing { .. } => &[
                ("[Tab]", " Next field   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            Mode::ConfirmDelete(_) => &[("[y]", " Delete   "), ("[n]", " Keep")],
            Mode::CopyMenu(_) => &[
                ("[d/u/p]", " Copy field   "),
                ("[Enter]", " Copy selected   "),
                ("[Esc]", " Close"),
            ],
        };

        let spans: Vec<Span<'static>> = hints
            .iter()
            .flat_map(|(key, label)| [Span::styled(*key, key_style), Span::raw(*label)])
            .collect();
        Line::from(spans)
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, id: Option<i64>, form: &RecordForm) {
        let popup_area = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup_area);

        let title = if id.is_some() { "Edit Record" } else { "Add Record" };
        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = Vec::new();
        if let Some(id) = id {
            lines.push(Line::from(Span::styled(
                format!("ID: {id}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let first_field_row = lines.len() as u16;
        lines.extend(RecordField::ALL.into_iter().map(|field| form.build_line(field)));
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save | Tab to switch | Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);

        let field_row = RecordField::ALL
            .iter()
            .position(|field| *field == form.active)
            .unwrap_or_default() as u16;
        let offset = form.active.label().len() + 2 + form.value_len(form.active);
        let cursor_x = cursor_column(inner, offset);
        let cursor_y = inner.y + first_field_row + field_row;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let credential = &confirm.credential;
        let lines = vec![
            Line::from("Delete this record? This cannot be undone."),
            Line::from(""),
            Line::from(format!("Name:     {}", credential.name)),
            Line::from(format!("Domain:   {}", credential.domain)),
            Line::from(format!("Username: {}", credential.username)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn draw_copy_menu(&self, frame: &mut Frame, area: Rect, menu: &CopyMenu) {
        let popup_area = centered_rect(40, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!("Copy from {}", menu.credential.name))
            .borders(Borders::ALL);

        let items: Vec<ListItem> = CopyField::ALL
            .iter()
            .map(|field| ListItem::new(format!("[{}] {}", field.shortcut(), field.label())))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(menu.selected));
        frame.render_stateful_widget(list, popup_area, &mut list_state);
    }
}
