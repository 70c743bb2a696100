//! Date ranges and week grids for the mood calendar.
//!
//! A [`CalendarSpan`] plus an optional period string resolves to a concrete
//! [`CalendarRange`]. Ranges longer than a week are laid out month by month,
//! each month as Monday-first weeks.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dewit::libs::calendar::{resolve, CalendarSpan};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
//! let range = resolve(CalendarSpan::Quarter, Some("2026-Q1"), today).unwrap();
//! assert_eq!(range.from, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
//! assert_eq!(range.to, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
//! ```

use super::error::{DewitError, Result};
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CalendarSpan {
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRange {
    pub span: CalendarSpan,
    pub title: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// One month laid out as Monday-first weeks. Days outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub title: String,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

pub fn resolve(span: CalendarSpan, period: Option<&str>, today: NaiveDate) -> Result<CalendarRange> {
    let period = period.map(str::trim).filter(|p| !p.is_empty());

    match span {
        CalendarSpan::Week => {
            let from = monday_of(today);
            Ok(CalendarRange {
                span,
                title: format!("Week of {}", from.format("%b %-d, %Y")),
                from,
                to: from + Duration::days(6),
            })
        }
        CalendarSpan::Month => {
            let (year, month) = match period {
                Some(p) => parse_month(p)?,
                None => (today.year(), today.month()),
            };
            let from = first_of_month(year, month)?;
            Ok(CalendarRange {
                span,
                title: from.format("%B %Y").to_string(),
                from,
                to: last_of_month(year, month)?,
            })
        }
        CalendarSpan::Quarter => {
            let (year, quarter) = match period {
                Some(p) => parse_quarter(p)?,
                None => (today.year(), (today.month() - 1) / 3 + 1),
            };
            let first_month = (quarter - 1) * 3 + 1;
            Ok(CalendarRange {
                span,
                title: format!("Q{quarter} {year}"),
                from: first_of_month(year, first_month)?,
                to: last_of_month(year, first_month + 2)?,
            })
        }
        CalendarSpan::Year => {
            let year = match period {
                Some(p) => parse_year(p)?,
                None => today.year(),
            };
            Ok(CalendarRange {
                span,
                title: year.to_string(),
                from: first_of_month(year, 1)?,
                to: last_of_month(year, 12)?,
            })
        }
    }
}

impl CalendarRange {
    /// Every date in the range, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.from.iter_days().take_while(|d| *d <= self.to).collect()
    }

    pub fn months(&self) -> Vec<MonthGrid> {
        let mut grids = Vec::new();
        let mut first = self.from.with_day(1).unwrap_or(self.from);

        while first <= self.to {
            let last = last_of_month(first.year(), first.month()).unwrap_or(first);
            grids.push(MonthGrid {
                title: first.format("%B").to_string(),
                weeks: weeks_between(first, last),
            });

            match last.succ_opt() {
                Some(next) => first = next,
                None => break,
            }
        }

        grids
    }
}

pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn weeks_between(first: NaiveDate, last: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let mut weeks = Vec::new();
    let mut cursor = monday_of(first);

    while cursor <= last {
        let mut week = [None; 7];
        for (i, slot) in week.iter_mut().enumerate() {
            let day = cursor + Duration::days(i as i64);
            if day >= first && day <= last {
                *slot = Some(day);
            }
        }
        weeks.push(week);
        cursor += Duration::days(7);
    }

    weeks
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DewitError::InvalidInput(format!("Invalid month {year}-{month:02}")))
}

fn last_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    first_of_month(next_year, next_month)?
        .pred_opt()
        .ok_or_else(|| DewitError::InvalidInput(format!("Invalid month {year}-{month:02}")))
}

fn parse_month(period: &str) -> Result<(i32, u32)> {
    let invalid = || DewitError::InvalidInput(format!("Invalid month period '{period}'. Use YYYY-MM format, e.g. 2026-02."));

    let (year, month) = period.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

fn parse_quarter(period: &str) -> Result<(i32, u32)> {
    let invalid = || DewitError::InvalidInput(format!("Invalid quarter period '{period}'. Use YYYY-Q# format, e.g. 2026-Q1."));

    let upper = period.to_uppercase();
    let (year, quarter) = upper.split_once("-Q").ok_or_else(invalid)?;
    if year.len() != 4 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let quarter: u32 = quarter.parse().map_err(|_| invalid())?;
    if !(1..=4).contains(&quarter) {
        return Err(invalid());
    }
    Ok((year, quarter))
}

fn parse_year(period: &str) -> Result<i32> {
    let invalid = || DewitError::InvalidInput(format!("Invalid year period '{period}'. Use YYYY format, e.g. 2026."));

    if period.len() != 4 {
        return Err(invalid());
    }
    period.parse().map_err(|_| invalid())
}
