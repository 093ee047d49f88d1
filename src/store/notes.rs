use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::core::note::DayNote;

/// Per-day calendar notes. One note per date, last write wins.
pub struct NoteStore {
    notes: Vec<DayNote>,
    path: PathBuf,
}

impl NoteStore {
    pub fn load(path: PathBuf) -> Self {
        let notes = super::load_collection(&path);
        Self { notes, path }
    }

    pub fn set(&mut self, date: NaiveDate, message: impl Into<String>) {
        let message = message.into();
        if let Some(note) = self.notes.iter_mut().find(|n| n.date == date) {
            note.message = message;
        } else {
            self.notes.push(DayNote::new(date, message));
        }
        self.persist();
    }

    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.notes
            .iter()
            .find(|n| n.date == date)
            .map(|n| n.message.as_str())
    }

    /// Days carrying a note, for the calendar day markers.
    pub fn noted_days(&self) -> HashSet<NaiveDate> {
        self.notes.iter().map(|n| n.date).collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&self) {
        super::save_collection(&self.path, &self.notes);
    }
}
