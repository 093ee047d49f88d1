use chrono::{Datelike, Months, NaiveDate};

pub const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_LABELS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Canonical storage key for a calendar day.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Cell layout for one month: blank cells before day 1, then `days` numbered cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Weekday index of the 1st, Sunday-first.
    pub leading_blanks: u32,
    pub days: u32,
}

impl MonthGrid {
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let days = next_month.pred_opt()?.day();
    Some(MonthGrid {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    })
}

/// All twelve month grids of a year, January first.
pub fn year_grid(year: i32) -> Vec<MonthGrid> {
    (1..=12).filter_map(|m| month_grid(year, m)).collect()
}

#[derive(Debug, Clone)]
pub struct YearCalendarState {
    pub displayed_year: i32,
    /// Currently selected day (shows the note panel).
    pub selected_day: Option<NaiveDate>,
}

impl Default for YearCalendarState {
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            displayed_year: today.year(),
            selected_day: Some(today),
        }
    }
}

impl YearCalendarState {
    pub fn prev_year(&mut self) {
        self.displayed_year -= 1;
        self.selected_day = None;
    }

    pub fn next_year(&mut self) {
        self.displayed_year += 1;
        self.selected_day = None;
    }

    pub fn select_day(&mut self, date: NaiveDate) {
        if self.selected_day == Some(date) {
            self.selected_day = None;
        } else {
            self.selected_day = Some(date);
        }
    }
}
