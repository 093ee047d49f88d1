use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A free-form note attached to a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNote {
    pub date: NaiveDate,
    pub message: String,
}

impl DayNote {
    pub fn new(date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            date,
            message: message.into(),
        }
    }
}
