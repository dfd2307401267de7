/// Types for the resolved weekly schedule
use chrono::NaiveDate;

use super::holidays::Holiday;

/// The five working days, in display order. Labels are the uppercase
/// French forms the roster tables are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jour {
    Lundi,
    Mardi,
    Mercredi,
    Jeudi,
    Vendredi,
}

impl Jour {
    /// Monday through Friday, the order every resolved week follows.
    pub const WEEK: [Jour; 5] = [
        Jour::Lundi,
        Jour::Mardi,
        Jour::Mercredi,
        Jour::Jeudi,
        Jour::Vendredi,
    ];

    /// The wire label for this day (e.g. `"LUNDI"`).
    pub fn label(&self) -> &'static str {
        match self {
            Jour::Lundi => "LUNDI",
            Jour::Mardi => "MARDI",
            Jour::Mercredi => "MERCREDI",
            Jour::Jeudi => "JEUDI",
            Jour::Vendredi => "VENDREDI",
        }
    }
}

/// One weekday's resolved schedule slot.
#[derive(Debug, Clone)]
pub struct DayEntry {
    pub day: Jour,
    /// Name of the person working remotely that day. Empty means no one
    /// is assigned; Monday and Friday are always empty by policy.
    pub person: String,
    pub date: NaiveDate,
    /// French public holiday falling on this date, if any. Display-only;
    /// it never suppresses an assignment.
    pub holiday: Option<Holiday>,
}

impl DayEntry {
    /// Whether someone is working remotely on this day.
    pub fn is_remote(&self) -> bool {
        !self.person.is_empty()
    }
}

/// A fully resolved week: always exactly five entries, Monday through
/// Friday.
#[derive(Debug, Clone)]
pub struct WeekSchedule {
    pub week_number: u32,
    pub is_even: bool,
    pub days: Vec<DayEntry>,
}

impl WeekSchedule {
    /// The Monday this week starts on.
    pub fn monday(&self) -> NaiveDate {
        self.days[0].date
    }

    /// The Friday this week ends on.
    pub fn friday(&self) -> NaiveDate {
        self.days[4].date
    }
}
