use chrono::NaiveDate;

/// One row of the date dimension, derived by [`CalendarDay::from_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// `YYYYMMDD` as an integer
    pub date_key: i32,
    pub full_date: NaiveDate,
    pub year: i32,
    pub month: i32,
    pub month_name: String,
    pub quarter: i32,
    pub half_year: i32,
    pub day_of_month: i32,
    /// ISO weekday, 1 = Monday .. 7 = Sunday
    pub day_of_week: i32,
    pub weekday_name: String,
    pub week_of_month: i32,
    /// ISO week number
    pub week_of_year: i32,
    pub is_weekend: bool,
    /// Never populated
    pub is_holiday: bool,
}
