/// French date formatting for the schedule views
use chrono::{Locale, NaiveDate};

/// Format a date as a long French date, e.g. `05 août 2026`.
pub fn long_date_fr(date: NaiveDate) -> String {
    date.format_localized("%d %B %Y", Locale::fr_FR).to_string()
}

/// Format a date as the short `dd/mm` form used on the day cells.
pub fn short_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Format the Monday-to-Friday span of a week, e.g.
/// `04/08/2025 - 08/08/2025`.
pub fn week_range_fr(monday: NaiveDate, friday: NaiveDate) -> String {
    format!(
        "{} - {}",
        monday.format("%d/%m/%Y"),
        friday.format("%d/%m/%Y")
    )
}
