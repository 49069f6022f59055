use crate::models::TableSnapshot;
use crate::schema::RecordType;

/// Browsing state for the table currently on screen.
pub(crate) struct TableScreen {
    pub(crate) snapshot: TableSnapshot,
    pub(crate) selected: usize,
}

impl TableScreen {
    pub(crate) fn new(record_type: RecordType) -> Self {
        Self {
            snapshot: TableSnapshot::empty(record_type),
            selected: 0,
        }
    }

    pub(crate) fn record_type(&self) -> RecordType {
        self.snapshot.record_type
    }

    /// Replace the listing after a refresh. Switching tables resets the cursor;
    /// reloading the same table keeps it where it was when possible.
    pub(crate) fn set_snapshot(&mut self, snapshot: TableSnapshot) {
        if snapshot.record_type != self.snapshot.record_type {
            self.selected = 0;
        }
        self.snapshot = snapshot;
        self.ensure_in_bounds();
    }

    pub(crate) fn has_selection(&self) -> bool {
        !self.snapshot.is_empty()
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.snapshot.is_empty() {
            return;
        }
        let len = self.snapshot.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.snapshot.len().saturating_sub(1);
    }

    fn ensure_in_bounds(&mut self) {
        if self.selected >= self.snapshot.len() {
            self.select_last();
        }
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::types::Value;

    use super::*;

    fn snapshot(record_type: RecordType, rows: i64) -> TableSnapshot {
        TableSnapshot {
            record_type,
            columns: vec!["id".into()],
            rows: (1..=rows).map(|id| vec![Value::Integer(id)]).collect(),
        }
    }

    #[test]
    fn selection_is_clamped_to_the_listing() {
        let mut screen = TableScreen::new(RecordType::Pet);
        screen.move_selection(3);
        assert_eq!(screen.selected, 0);

        screen.set_snapshot(snapshot(RecordType::Pet, 4));
        screen.move_selection(10);
        assert_eq!(screen.selected, 3);
        screen.move_selection(-2);
        assert_eq!(screen.selected, 1);

        screen.set_snapshot(snapshot(RecordType::Pet, 1));
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn switching_tables_resets_the_cursor() {
        let mut screen = TableScreen::new(RecordType::Pet);
        screen.set_snapshot(snapshot(RecordType::Pet, 5));
        screen.select_last();
        assert_eq!(screen.selected, 4);

        screen.set_snapshot(snapshot(RecordType::Owner, 5));
        assert_eq!(screen.selected, 0);
        assert_eq!(screen.record_type(), RecordType::Owner);
    }
}
