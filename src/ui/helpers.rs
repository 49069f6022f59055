use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};

use crate::error::Outcome;

/// Width reserved for the numeric key column; every other column shares the
/// remaining space.
const KEY_COLUMN_WIDTH: u16 = 6;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Column widths for a table view.
pub(crate) fn column_constraints(columns: &[String]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|column| {
            if column == "id" {
                Constraint::Length(KEY_COLUMN_WIDTH)
            } else {
                Constraint::Fill(1)
            }
        })
        .collect()
}

/// Footer colour for an operation outcome.
pub(crate) fn outcome_style(outcome: &Outcome) -> Style {
    match outcome {
        Outcome::Success(_) => Style::default().fg(Color::Green),
        Outcome::ValidationFailure(_) => Style::default().fg(Color::Yellow),
        Outcome::StorageFailure(_) => Style::default().fg(Color::Red),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_column_gets_a_fixed_width() {
        let columns = vec!["id".to_string(), "name".to_string()];
        assert_eq!(
            column_constraints(&columns),
            vec![Constraint::Length(KEY_COLUMN_WIDTH), Constraint::Fill(1)]
        );
    }

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 15);
    }
}
