use std::fmt::Write;

use chrono::Datelike;

use crate::application::Desk;
use crate::core::calendar::{self, DAY_LABELS};

/// Render the year grid. Noted days carry a `*` marker, the selected day
/// is bracketed, and the selected day's note (if any) follows the grid.
pub fn view(desk: &Desk) -> String {
    let state = desk.calendar();
    let noted = desk.noted_days();
    let today = chrono::Local::now().date_naive();

    let mut out = String::new();
    let _ = writeln!(out, "== Calendar {} ==", state.displayed_year);

    for grid in calendar::year_grid(state.displayed_year) {
        let _ = writeln!(out, "\n{} {}", grid.name(), grid.year);
        for label in DAY_LABELS {
            let _ = write!(out, "{:>5}", label);
        }
        let _ = writeln!(out);

        let mut column = grid.leading_blanks;
        for _ in 0..grid.leading_blanks {
            let _ = write!(out, "{:>5}", "");
        }
        for day in 1..=grid.days {
            let date = grid.date(day);
            let marker = if date.is_some_and(|d| noted.contains(&d)) {
                "*"
            } else {
                " "
            };
            let cell = if date == state.selected_day {
                format!("[{}{}]", day, marker.trim())
            } else if date == Some(today) {
                format!("<{}{}>", day, marker.trim())
            } else {
                format!("{}{}", day, marker)
            };
            let _ = write!(out, "{:>5}", cell);
            column += 1;
            if column == 7 {
                let _ = writeln!(out);
                column = 0;
            }
        }
        if column != 0 {
            let _ = writeln!(out);
        }
    }

    if let Some(day) = state.selected_day {
        let _ = writeln!(
            out,
            "\nSelected: {} ({})",
            calendar::date_key(day),
            day.weekday()
        );
        match desk.selected_note() {
            Some(note) => {
                let _ = writeln!(out, "Note: {}", note);
            }
            None => {
                let _ = writeln!(out, "No note for this day.");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Desk;
    use crate::config::DeskConfig;
    use crate::message::Message;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn selected_day_note_is_shown() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig {
            data_directory: dir.path().to_path_buf(),
        };
        let mut desk = Desk::new(config);
        let date = NaiveDate::from_ymd_opt(desk.calendar().displayed_year, 3, 10).unwrap();

        desk.update(Message::CalendarSelectDay(date)).await;
        desk.update(Message::NoteInputChanged("Exam".into())).await;
        desk.update(Message::NoteSubmit).await;

        let rendered = view(&desk);
        assert!(rendered.contains("Note: Exam"));
        assert!(rendered.contains(&format!("Selected: {}", calendar::date_key(date))));
    }
}
