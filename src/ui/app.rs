use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::db::{display_value, Gateway};
use crate::error::Outcome;
use crate::models::{Confirmation, RowIdentity, TableSnapshot};
use crate::records::{delete, list, row_by_name, submit, update};
use crate::schema::RecordType;

use super::forms::{ConfirmDelete, RecordForm};
use super::helpers::{centered_rect, column_constraints, outcome_style};
use super::screens::TableScreen;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the tab strip above the table.
const TABS_HEIGHT: u16 = 3;
/// Rows skipped by PageUp / PageDown.
const PAGE_STEP: isize = 10;

/// Fine-grained modes layered over the table view.
enum Mode {
    Normal,
    Creating(RecordForm),
    Editing {
        identity: RowIdentity,
        form: RecordForm,
    },
    ConfirmDelete(ConfirmDelete),
}

/// What a keystroke did to an open form.
enum FormAction {
    Continue,
    Cancel,
    Submit,
}

/// Central application state: the owned store connection, the table on
/// screen, the active modal, and the last outcome shown in the footer.
pub struct App {
    gateway: Gateway,
    screen: TableScreen,
    mode: Mode,
    status: Option<Outcome>,
}

impl App {
    /// Build the app and load the first table.
    pub fn new(gateway: Gateway) -> Self {
        let mut app = Self {
            gateway,
            screen: TableScreen::new(RecordType::ALL[0]),
            mode: Mode::Normal,
            status: None,
        };
        app.load_table(RecordType::ALL[0]);
        app
    }

    /// Route one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Creating(form) => self.handle_create(code, form)?,
            Mode::Editing { identity, form } => self.handle_edit(code, identity, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Right | KeyCode::Tab => self.switch_table(1),
            KeyCode::Left | KeyCode::BackTab => self.switch_table(-1),
            KeyCode::Char(ch @ '1'..='4') => {
                let idx = ch as usize - '1' as usize;
                self.clear_status();
                self.load_table(RecordType::ALL[idx]);
            }
            KeyCode::Up => self.screen.move_selection(-1),
            KeyCode::Down => self.screen.move_selection(1),
            KeyCode::PageUp => self.screen.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.screen.move_selection(PAGE_STEP),
            KeyCode::Home => self.screen.select_first(),
            KeyCode::End => self.screen.select_last(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let record_type = self.screen.record_type();
                if self.load_table(record_type) {
                    self.set_status(Outcome::Success(format!(
                        "Loaded {} table.",
                        record_type.table_name()
                    )));
                }
            }
            KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.clear_status();
                return Ok(Mode::Creating(RecordForm::for_create(
                    self.screen.record_type(),
                )));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => return Ok(self.begin_edit()),
            KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Char('D') => {
                return Ok(self.begin_delete())
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    /// Shared key handling for both form modes.
    fn apply_form_key(form: &mut RecordForm, code: KeyCode) -> FormAction {
        match code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        FormAction::Continue
    }

    fn handle_create(&mut self, code: KeyCode, mut form: RecordForm) -> Result<Mode> {
        match Self::apply_form_key(&mut form, code) {
            FormAction::Continue => Ok(Mode::Creating(form)),
            FormAction::Cancel => {
                self.set_status(Outcome::Success("Add record cancelled.".to_string()));
                Ok(Mode::Normal)
            }
            FormAction::Submit => {
                let record_type = self.screen.record_type();
                let result = submit(&self.gateway, record_type, &form.values());
                let outcome = Outcome::from_result(&result, |_| {
                    record_type.spec().created_message.to_string()
                });
                match outcome {
                    Outcome::Success(_) => {
                        self.load_table(record_type);
                        self.screen.select_last();
                        self.set_status(outcome);
                        Ok(Mode::Normal)
                    }
                    _ => {
                        form.error = Some(outcome.message().to_string());
                        self.set_status(outcome);
                        Ok(Mode::Creating(form))
                    }
                }
            }
        }
    }

    fn handle_edit(
        &mut self,
        code: KeyCode,
        identity: RowIdentity,
        mut form: RecordForm,
    ) -> Result<Mode> {
        match Self::apply_form_key(&mut form, code) {
            FormAction::Continue => Ok(Mode::Editing { identity, form }),
            FormAction::Cancel => {
                self.set_status(Outcome::Success("Edit cancelled.".to_string()));
                Ok(Mode::Normal)
            }
            FormAction::Submit => {
                let edits = form.changed_edits();
                if edits.is_empty() {
                    self.set_status(Outcome::Success("No changes to save.".to_string()));
                    return Ok(Mode::Normal);
                }

                let result = update(&self.gateway, identity.clone(), &edits);
                let outcome =
                    Outcome::from_result(&result, |_| "Record updated successfully!".to_string())
                        .with_failure_prefix("Failed to update record");
                if result.is_ok() {
                    self.load_table(identity.record_type);
                    self.set_status(outcome);
                    Ok(Mode::Normal)
                } else {
                    form.error = Some(outcome.message().to_string());
                    self.set_status(outcome);
                    Ok(Mode::Editing { identity, form })
                }
            }
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmDelete) -> Result<Mode> {
        let confirmation = match code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Confirmation::Confirmed,
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Confirmation::Declined,
            _ => return Ok(Mode::ConfirmDelete(confirm)),
        };

        let record_type = confirm.identity.record_type;
        let result = delete(&self.gateway, confirm.identity, confirmation);
        let outcome = Outcome::from_result(&result, |deleted| {
            if *deleted {
                "Record deleted successfully!".to_string()
            } else {
                "Deletion cancelled.".to_string()
            }
        })
        .with_failure_prefix("Failed to delete record");
        if matches!(result, Ok(true)) {
            self.load_table(record_type);
        }
        self.set_status(outcome);
        Ok(Mode::Normal)
    }

    /// Capture the selected row's identity and open the edit form.
    fn begin_edit(&mut self) -> Mode {
        if !self.screen.has_selection() {
            self.set_status(Outcome::ValidationFailure(
                "No record selected to edit.".to_string(),
            ));
            return Mode::Normal;
        }

        let position = self.screen.selected;
        let snapshot = &self.screen.snapshot;
        match snapshot.identity_at(&self.gateway, position) {
            Ok(identity) => match RecordForm::for_row(snapshot, position) {
                Some(form) => {
                    self.clear_status();
                    Mode::Editing { identity, form }
                }
                None => Mode::Normal,
            },
            Err(err) => {
                self.set_status(Outcome::from(&err));
                Mode::Normal
            }
        }
    }

    /// Capture the selected row's identity and ask for confirmation.
    fn begin_delete(&mut self) -> Mode {
        if !self.screen.has_selection() {
            self.set_status(Outcome::ValidationFailure(
                "No record selected to delete.".to_string(),
            ));
            return Mode::Normal;
        }

        let position = self.screen.selected;
        let snapshot = &self.screen.snapshot;
        match snapshot.identity_at(&self.gateway, position) {
            Ok(identity) => {
                let summary = row_by_name(snapshot, position)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(column, value)| format!("{column}: {}", display_value(value)))
                    .collect();
                self.clear_status();
                Mode::ConfirmDelete(ConfirmDelete { identity, summary })
            }
            Err(err) => {
                self.set_status(Outcome::from(&err));
                Mode::Normal
            }
        }
    }

    /// List `record_type` into the screen. A failed read leaves an empty
    /// listing and reports the backend message. Returns whether it loaded.
    fn load_table(&mut self, record_type: RecordType) -> bool {
        match list(&self.gateway, record_type) {
            Ok(snapshot) => {
                debug!(table = record_type.table_name(), rows = snapshot.len(), "table loaded");
                self.screen.set_snapshot(snapshot);
                true
            }
            Err(err) => {
                self.screen.set_snapshot(TableSnapshot::empty(record_type));
                self.set_status(Outcome::StorageFailure(format!(
                    "Failed to load table: {err}"
                )));
                false
            }
        }
    }

    fn switch_table(&mut self, offset: isize) {
        let count = RecordType::ALL.len() as isize;
        let current = self.tab_index() as isize;
        let next = (current + offset).rem_euclid(count) as usize;
        self.clear_status();
        self.load_table(RecordType::ALL[next]);
    }

    fn tab_index(&self) -> usize {
        RecordType::ALL
            .iter()
            .position(|record_type| *record_type == self.screen.record_type())
            .unwrap_or(0)
    }

    fn set_status(&mut self, outcome: Outcome) {
        self.status = Some(outcome);
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TABS_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_tabs(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::Creating(form) | Mode::Editing { form, .. } => self.draw_form(frame, area, form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = RecordType::ALL
            .iter()
            .enumerate()
            .map(|(idx, record_type)| format!("{} {}", idx + 1, record_type.plural()));
        let tabs = Tabs::new(titles)
            .select(self.tab_index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Pet Clinic System"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let snapshot = &self.screen.snapshot;
        let block = Block::default().borders(Borders::ALL).title(format!(
            "{} ({})",
            snapshot.record_type.plural(),
            snapshot.len()
        ));

        if snapshot.is_empty() {
            let message = Paragraph::new(format!(
                "No {} yet. Press '+' to add one.",
                snapshot.record_type.table_name()
            ))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(
            snapshot
                .columns
                .iter()
                .map(|column| Cell::from(column.to_uppercase())),
        )
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

        let rows = (0..snapshot.len()).map(|idx| {
            let style = if idx % 2 == 1 {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(snapshot.display_row(idx).unwrap_or_default()).style(style)
        });

        let table = Table::new(rows, column_constraints(&snapshot.columns))
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.screen.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = match &self.status {
            Some(outcome) => Line::from(vec![Span::styled(
                outcome.message().to_string(),
                outcome_style(outcome),
            )]),
            None => Line::from(""),
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let pairs: &[(&str, &str)] = match &self.mode {
            Mode::Creating(_) | Mode::Editing { .. } => &[
                ("[Tab]", " Next field   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            Mode::ConfirmDelete(_) => &[("[Y]", " Delete   "), ("[N/Esc]", " Keep")],
            Mode::Normal => &[
                ("[←→]", " Table   "),
                ("[↑↓]", " Row   "),
                ("[+]", " Add   "),
                ("[E]", " Update   "),
                ("[-]", " Delete   "),
                ("[R]", " Refresh   "),
                ("[Q]", " Quit"),
            ],
        };

        Line::from(
            pairs
                .iter()
                .flat_map(|(key, action)| {
                    [Span::styled(*key, key_style), Span::raw(*action)]
                })
                .collect::<Vec<_>>(),
        )
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, form: &RecordForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(form.title.clone())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            Line::from(Span::styled(
                form.description.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];
        lines.extend((0..form.fields.len()).map(|idx| form.build_line(idx)));
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Fields marked with * are required.",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);

        // Two lines of description and spacing sit above the first field.
        let prefix = form.label_width() as u16 + 2;
        let cursor_x = inner.x + prefix + form.active_len() as u16;
        let cursor_y = inner.y + 2 + form.active as u16;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmDelete) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Delete Record")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            Line::from("Are you sure you want to delete this record?"),
            Line::from(""),
        ];
        lines.extend(confirm.summary.iter().map(|entry| Line::from(entry.clone())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Y to confirm or N / Esc to cancel.",
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        assert!(!app.handle_key(code).unwrap());
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    /// Switch to the owners tab and create one owner through the form.
    fn add_owner(app: &mut App, contact: &str) {
        press(app, KeyCode::Char('2'));
        press(app, KeyCode::Char('+'));
        type_text(app, "Ann");
        press(app, KeyCode::Tab);
        type_text(app, contact);
        press(app, KeyCode::Tab);
        type_text(app, &format!("{contact}@example.com"));
        press(app, KeyCode::Tab);
        type_text(app, "1 Elm St");
        press(app, KeyCode::Enter);
    }

    fn app() -> App {
        App::new(Gateway::open_in_memory().unwrap())
    }

    #[test]
    fn submitting_a_complete_form_adds_and_selects_the_row() {
        let mut app = app();
        add_owner(&mut app, "555-0100");
        add_owner(&mut app, "555-0101");

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.screen.record_type(), RecordType::Owner);
        assert_eq!(app.screen.snapshot.len(), 2);
        assert_eq!(app.screen.selected, 1);
        assert_eq!(
            app.status,
            Some(Outcome::Success("Owner added successfully!".into()))
        );
    }

    #[test]
    fn incomplete_form_stays_open_with_the_validation_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        type_text(&mut app, "Rex");
        press(&mut app, KeyCode::Enter);

        match &app.mode {
            Mode::Creating(form) => {
                assert_eq!(form.error.as_deref(), Some("missing required field: Age"));
                assert_eq!(form.fields[0].value, "Rex");
            }
            _ => panic!("form should stay open"),
        }
        assert!(matches!(app.status, Some(Outcome::ValidationFailure(_))));
        assert!(app.screen.snapshot.is_empty());
    }

    #[test]
    fn duplicate_contact_surfaces_the_constraint_message() {
        let mut app = app();
        add_owner(&mut app, "555-0100");
        add_owner(&mut app, "555-0100");

        assert!(matches!(app.mode, Mode::Creating(_)));
        match &app.status {
            Some(Outcome::StorageFailure(message)) => {
                assert!(message.contains("UNIQUE constraint failed"))
            }
            other => panic!("unexpected status {other:?}"),
        }
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen.snapshot.len(), 1);
    }

    #[test]
    fn edit_form_updates_only_the_changed_column() {
        let mut app = app();
        add_owner(&mut app, "555-0100");

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        for _ in 0.."Ann".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Bea");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(
            app.screen.snapshot.display_row(0).unwrap(),
            vec!["1", "Bea", "555-0100", "555-0100@example.com", "1 Elm St"]
        );
    }

    #[test]
    fn declined_delete_keeps_the_row_and_confirmed_delete_removes_it() {
        let mut app = app();
        add_owner(&mut app, "555-0100");

        press(&mut app, KeyCode::Char('-'));
        assert!(matches!(app.mode, Mode::ConfirmDelete(_)));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen.snapshot.len(), 1);
        assert_eq!(
            app.status,
            Some(Outcome::Success("Deletion cancelled.".into()))
        );

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.screen.snapshot.is_empty());
        assert_eq!(
            app.status,
            Some(Outcome::Success("Record deleted successfully!".into()))
        );
    }

    #[test]
    fn failed_update_keeps_the_form_and_names_the_action() {
        let mut app = app();
        add_owner(&mut app, "555-0100");
        add_owner(&mut app, "555-0101");

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        for _ in 0.."555-0101".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "555-0100");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Editing { .. }));
        let expected = "Failed to update record: UNIQUE constraint failed: owners.contact";
        match &app.status {
            Some(Outcome::StorageFailure(message)) => assert!(message.starts_with(expected)),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn failed_delete_names_the_action_and_keeps_the_row() {
        fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect()
        }

        let mut app = app();
        add_owner(&mut app, "555-0100");
        submit(
            &app.gateway,
            RecordType::Pet,
            &fields(&[
                ("name", "Rex"),
                ("age", "3"),
                ("species", "Dog"),
                ("breed", "Lab"),
                ("owner_id", "1"),
            ]),
        )
        .unwrap();
        submit(
            &app.gateway,
            RecordType::Service,
            &fields(&[("service_name", "Checkup"), ("cost", "40")]),
        )
        .unwrap();
        submit(
            &app.gateway,
            RecordType::Appointment,
            &fields(&[
                ("date", "2024-05-01"),
                ("time", "10:30"),
                ("pet_id", "1"),
                ("service_id", "1"),
            ]),
        )
        .unwrap();

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('y'));

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(
            app.status,
            Some(Outcome::StorageFailure(
                "Failed to delete record: FOREIGN KEY constraint failed".into()
            ))
        );
        assert_eq!(app.screen.snapshot.len(), 1);
    }

    #[test]
    fn edit_and_delete_need_a_selected_row() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.mode, Mode::Normal));
        press(&mut app, KeyCode::Char('-'));
        assert!(matches!(app.mode, Mode::Normal));
        assert!(matches!(app.status, Some(Outcome::ValidationFailure(_))));
    }

    #[test]
    fn tabs_wrap_around_and_quit_is_reported() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.screen.record_type(), RecordType::Service);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.screen.record_type(), RecordType::Pet);
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn draw_renders_rows_and_open_forms() {
        let mut app = app();
        add_owner(&mut app, "555-0100");
        press(&mut app, KeyCode::Char('+'));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("555-0100"));
        assert!(rendered.contains("Add a New Owner"));
    }
}
