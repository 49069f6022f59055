use std::collections::HashMap;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{RowIdentity, TableSnapshot};
use crate::schema::RecordType;

/// One labelled input inside a modal form.
#[derive(Clone)]
pub(crate) struct FormField {
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) placeholder: String,
    pub(crate) value: String,
    /// Value the field started with; empty for creation forms.
    pub(crate) original: String,
}

/// Modal form state shared by the create and edit flows. Fields are built
/// from the schema registry (create) or from the columns of a listed row
/// (edit), so one widget covers all four tables.
#[derive(Clone)]
pub(crate) struct RecordForm {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) fields: Vec<FormField>,
    pub(crate) active: usize,
    pub(crate) error: Option<String>,
}

impl RecordForm {
    /// Empty creation form for a record type.
    pub(crate) fn for_create(record_type: RecordType) -> Self {
        let spec = record_type.spec();
        Self {
            title: spec.form_title.to_string(),
            description: spec.form_description.to_string(),
            fields: spec
                .fields
                .iter()
                .map(|field| FormField {
                    name: field.name.to_string(),
                    label: field.label.to_string(),
                    placeholder: field.placeholder.to_string(),
                    value: String::new(),
                    original: String::new(),
                })
                .collect(),
            active: 0,
            error: None,
        }
    }

    /// Edit form seeded with every column of the row at `position`, the key
    /// column included.
    pub(crate) fn for_row(snapshot: &TableSnapshot, position: usize) -> Option<Self> {
        let values = snapshot.display_row(position)?;
        Some(Self {
            title: format!("Update {}", snapshot.record_type),
            description: "Edit the values below; unchanged fields are left alone.".to_string(),
            fields: snapshot
                .columns
                .iter()
                .zip(values)
                .map(|(column, value)| FormField {
                    name: column.clone(),
                    label: column.clone(),
                    placeholder: format!("Enter new value for {column}"),
                    original: value.clone(),
                    value,
                })
                .collect(),
            active: 0,
            error: None,
        })
    }

    pub(crate) fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    pub(crate) fn previous_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Append a character to the active field. Control characters are ignored.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.fields.get_mut(self.active) {
            Some(field) => {
                field.value.push(ch);
                true
            }
            None => false,
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.pop();
        }
    }

    /// Submitted values keyed by column name, as the form handler expects.
    pub(crate) fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }

    /// Only the columns whose value differs from what was loaded.
    pub(crate) fn changed_edits(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|field| field.value != field.original)
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }

    /// Width of the label column so inputs line up.
    pub(crate) fn label_width(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, idx: usize) -> Line<'static> {
        let Some(field) = self.fields.get(idx) else {
            return Line::from("");
        };
        let is_active = idx == self.active;

        let display = if field.value.is_empty() {
            field.placeholder.clone()
        } else {
            field.value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if field.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{:<width$}: ", field.label, width = self.label_width())),
            Span::styled(display, style),
        ])
    }

    /// Character count of the active field, for cursor placement.
    pub(crate) fn active_len(&self) -> usize {
        self.fields
            .get(self.active)
            .map(|field| field.value.chars().count())
            .unwrap_or(0)
    }
}

/// Pending deletion awaiting a yes/no answer.
pub(crate) struct ConfirmDelete {
    pub(crate) identity: RowIdentity,
    pub(crate) summary: Vec<String>,
}

#[cfg(test)]
mod tests {
    use rusqlite::types::Value;

    use super::*;

    fn pet_snapshot() -> TableSnapshot {
        TableSnapshot {
            record_type: RecordType::Pet,
            columns: ["id", "name", "age", "species", "breed", "owner_id"]
                .map(String::from)
                .to_vec(),
            rows: vec![vec![
                Value::Integer(1),
                Value::Text("Rex".into()),
                Value::Integer(3),
                Value::Text("Dog".into()),
                Value::Text("Lab".into()),
                Value::Integer(1),
            ]],
        }
    }

    #[test]
    fn create_form_mirrors_schema_fields() {
        let mut form = RecordForm::for_create(RecordType::Service);
        assert_eq!(form.title, "Add a New Service");
        assert_eq!(form.fields.len(), 2);

        for ch in "Dental".chars() {
            form.push_char(ch);
        }
        form.next_field();
        form.push_char('9');
        assert!(!form.push_char('\n'));

        let values = form.values();
        assert_eq!(values["service_name"], "Dental");
        assert_eq!(values["cost"], "9");
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = RecordForm::for_create(RecordType::Owner);
        form.previous_field();
        assert_eq!(form.active, 3);
        form.next_field();
        assert_eq!(form.active, 0);
    }

    #[test]
    fn edit_form_reports_only_changed_columns() {
        let mut form = RecordForm::for_row(&pet_snapshot(), 0).unwrap();
        assert_eq!(form.fields[0].value, "1");
        assert!(form.changed_edits().is_empty());

        form.active = 4;
        for _ in 0..3 {
            form.backspace();
        }
        for ch in "Pug".chars() {
            form.push_char(ch);
        }
        assert_eq!(
            form.changed_edits(),
            vec![("breed".to_string(), "Pug".to_string())]
        );
        assert!(RecordForm::for_row(&pet_snapshot(), 1).is_none());
    }

    #[test]
    fn empty_fields_render_their_placeholder() {
        let form = RecordForm::for_create(RecordType::Pet);
        let line = form.build_line(1);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "Age*     : Enter the pet's age");
        assert_eq!(form.label_width(), "Owner ID*".len());
    }
}
