//! French public holidays.
//!
//! Fixed-date holidays plus the three Easter-derived ones (Easter
//! Monday, Ascension, Whit Monday). Easter is computed with the
//! Meeus/Jones/Butcher algorithm.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// A public holiday, with the emoji the schedule page decorates it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    #[serde(rename = "nom")]
    pub name: &'static str,
    pub emoji: &'static str,
}

/// Holidays that fall on the same (month, day) every year.
const FIXED_HOLIDAYS: &[(u32, u32, Holiday)] = &[
    (
        1,
        1,
        Holiday {
            name: "Jour de l'an",
            emoji: "🎆",
        },
    ),
    (
        5,
        1,
        Holiday {
            name: "Fête du Travail",
            emoji: "⚒️",
        },
    ),
    (
        5,
        8,
        Holiday {
            name: "Victoire 1945",
            emoji: "🇫🇷",
        },
    ),
    (
        7,
        14,
        Holiday {
            name: "Fête Nationale",
            emoji: "🇫🇷",
        },
    ),
    (
        8,
        15,
        Holiday {
            name: "Assomption",
            emoji: "✨",
        },
    ),
    (
        11,
        1,
        Holiday {
            name: "Toussaint",
            emoji: "🕯️",
        },
    ),
    (
        11,
        11,
        Holiday {
            name: "Armistice 1918",
            emoji: "🕊️",
        },
    ),
    (
        12,
        25,
        Holiday {
            name: "Noël",
            emoji: "🎅",
        },
    ),
    (
        12,
        26,
        Holiday {
            name: "Saint-Étienne (Alsace-Moselle)",
            emoji: "🎄",
        },
    ),
];

/// Easter Sunday for the given year (Meeus/Jones/Butcher).
fn easter(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}

/// The Easter-derived holidays of the given year, as (date, holiday)
/// pairs.
fn mobile_holidays(year: i32) -> [(NaiveDate, Holiday); 3] {
    let easter_sunday = easter(year);
    [
        (
            easter_sunday + Duration::days(1),
            Holiday {
                name: "Lundi de Pâques",
                emoji: "🐣",
            },
        ),
        (
            easter_sunday + Duration::days(39),
            Holiday {
                name: "Ascension",
                emoji: "☁️",
            },
        ),
        (
            easter_sunday + Duration::days(50),
            Holiday {
                name: "Lundi de Pentecôte",
                emoji: "🕊️",
            },
        ),
    ]
}

/// Returns the French public holiday falling on `date`, if any.
pub fn holiday_for(date: NaiveDate) -> Option<Holiday> {
    let (month, day) = (date.month(), date.day());

    if let Some(&(_, _, holiday)) = FIXED_HOLIDAYS
        .iter()
        .find(|&&(m, d, _)| m == month && d == day)
    {
        return Some(holiday);
    }

    mobile_holidays(date.year())
        .into_iter()
        .find(|&(d, _)| d == date)
        .map(|(_, holiday)| holiday)
}
