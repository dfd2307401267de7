//! Week resolution for the on-site/remote schedule.
//!
//! The current week's parity (even or odd week number) selects one of
//! two fixed roster tables; the resolver then lays out Monday through
//! Friday with the assigned person and date for each day.

pub mod format;

mod holidays;
mod roster;
mod types;

pub use holidays::{holiday_for, Holiday};
pub use roster::{active_people, team, Person, WeekRosters};
pub use types::{DayEntry, Jour, WeekSchedule};

use chrono::{Datelike, Duration, NaiveDate};

/// Week number of the given date.
///
/// This is the historical day-of-year heuristic (`dayOfYear / 7 + 1`),
/// NOT ISO-8601 week numbering: it resets on day-of-year boundaries
/// rather than calendar-week boundaries. The roster alternation depends
/// on it, so it is preserved as-is.
pub fn week_number(date: NaiveDate) -> u32 {
    date.ordinal() / 7 + 1
}

/// Whether the given date falls in an even-numbered week.
pub fn is_even_week(date: NaiveDate) -> bool {
    week_number(date) % 2 == 0
}

/// The Monday of the week containing `date`.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().number_from_monday() - 1;
    date - Duration::days(days_from_monday as i64)
}

/// Resolves the week containing `today` against the given roster
/// tables.
///
/// Always yields exactly five entries, Monday through Friday. Monday
/// and Friday never carry an assignment; Tuesday through Thursday take
/// theirs from the parity-selected table, defaulting to empty when the
/// table has no entry for that day. Total for any valid date: there
/// are no failure paths.
pub fn resolve_week(today: NaiveDate, rosters: &WeekRosters) -> WeekSchedule {
    let week_number = week_number(today);
    let is_even = week_number % 2 == 0;
    let roster = rosters.table_for(is_even);
    let monday = monday_of_week(today);

    let days = Jour::WEEK
        .iter()
        .enumerate()
        .map(|(i, &day)| {
            let person = if i == 0 || i == 4 {
                String::new()
            } else {
                roster.get(&day).cloned().unwrap_or_default()
            };
            let date = monday + Duration::days(i as i64);

            DayEntry {
                day,
                person,
                date,
                holiday: holiday_for(date),
            }
        })
        .collect();

    WeekSchedule {
        week_number,
        is_even,
        days,
    }
}
