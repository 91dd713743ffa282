//! Date extraction from ticket titles.
//!
//! Arrival and departure tickets carry a calendar date embedded in their
//! title. The recognized prefixes each use a different numeric date order:
//! `[TERMINATION]:` titles embed a US-style `MM/DD/YYYY` date, `New`
//! titles (new-starter notices) embed `YYYY MM DD`. When a title contains
//! several date-shaped substrings, the last one wins.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// US-style date embedded in `[TERMINATION]:` titles.
/// Groups: 1 = month (01-12), 2 = day (01-31), 3 = year (1900-2099).
#[allow(clippy::unwrap_used)]
static TERMINATION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(0[1-9]|1[012])[-/. ](0[1-9]|[12][0-9]|3[01])[-/. ]((?:19|20)\d\d)").unwrap()
});

/// ISO-ordered date embedded in `New` titles.
/// Groups: 1 = year, 2 = month, 3 = day.
#[allow(clippy::unwrap_used)]
static NEW_STARTER_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:19|20)\d\d)[-/. ](0[1-9]|1[012])[-/. ](0[1-9]|[12][0-9]|3[01])").unwrap()
});

/// Field order of the three capture groups in a date pattern.
#[derive(Debug, Clone, Copy)]
enum DateOrder {
    MonthDayYear,
    YearMonthDay,
}

/// Extracts the calendar date embedded in a ticket title, if any.
///
/// The first whitespace-delimited token selects the pattern:
/// `"[TERMINATION]:"` scans for the last `MM DD YYYY` match, `"New"` for
/// the last `YYYY MM DD` match. Any other prefix yields `None`, as does a
/// title whose prefix is recognized but carries no date-shaped substring.
#[must_use]
pub fn extract_date_from_title(title: &str) -> Option<NaiveDate> {
    let prefix = title.split_whitespace().next()?;
    match prefix {
        "[TERMINATION]:" => last_match(&TERMINATION_DATE, title, DateOrder::MonthDayYear),
        "New" => last_match(&NEW_STARTER_DATE, title, DateOrder::YearMonthDay),
        _ => None,
    }
}

/// Returns the last occurrence of `pattern` in `text` as a date.
///
/// A substring that matches the pattern but fails calendar validation
/// (e.g. `02/31/2024`) is a data error: it is reported through tracing
/// and treated as no date.
fn last_match(pattern: &Regex, text: &str, order: DateOrder) -> Option<NaiveDate> {
    let caps = pattern.captures_iter(text).last()?;
    let first: u32 = caps.get(1)?.as_str().parse().ok()?;
    let second: u32 = caps.get(2)?.as_str().parse().ok()?;
    let third: u32 = caps.get(3)?.as_str().parse().ok()?;

    let (year, month, day) = match order {
        DateOrder::MonthDayYear => (third, first, second),
        DateOrder::YearMonthDay => (first, second, third),
    };

    let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day);
    if date.is_none() {
        tracing::warn!(title = text, "date token in title failed calendar validation");
    }
    date
}
