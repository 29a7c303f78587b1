//! Fixed-date holiday calendar used by date achievements

use chrono::{DateTime, Datelike, TimeZone, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub id: &'static str,
    pub name: &'static str,
    pub day: u32,
    pub month: u32,
}

pub static HOLIDAYS: &[Holiday] = &[
    Holiday { id: "new_year", name: "New Year's Day", day: 1, month: 1 },
    Holiday { id: "epiphany", name: "Epiphany", day: 6, month: 1 },
    Holiday { id: "reformation_day", name: "Reformation Day", day: 31, month: 10 },
    Holiday { id: "all_saints", name: "All Saints' Day", day: 1, month: 11 },
    Holiday { id: "christmas_eve", name: "Christmas Eve", day: 24, month: 12 },
    Holiday { id: "christmas", name: "Christmas Day", day: 25, month: 12 },
    Holiday { id: "new_years_eve", name: "New Year's Eve", day: 31, month: 12 },
];

impl Holiday {
    pub fn find(id: &str) -> Option<&'static Holiday> {
        let id = id.trim().to_lowercase();
        HOLIDAYS.iter().find(|h| h.id == id)
    }

    /// Holiday falling on the local date of `ts` in `tz`, if any
    pub fn on<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> Option<&'static Holiday> {
        let local = ts.with_timezone(tz);
        HOLIDAYS
            .iter()
            .find(|h| h.day == local.day() && h.month == local.month())
    }
}
