//! Row normalizer — the date/time grammar engine.
//!
//! Upstream feeds hand-write their date and time columns: weekday markers
//! (`"Fri: Jun 6"`), dash-separated ranges (`"Jun 6-Jun 8"`, `"10pm-2am"`),
//! `-late` suffixes, bare hours, and am/pm in several spellings.
//! [`normalize_row`] turns one [`RawRow`] into a canonical [`Event`],
//! deterministically and without I/O: the only inputs besides the row are
//! the owning [`Region`], the current date (for year inference), and the
//! [`Gazetteer`].
//!
//! Recovery is local. A malformed numeric token inside a time yields 0 for
//! that component; only a date that cannot name a real calendar day at all
//! fails the row with [`RowParseError`], and the scheduler drops just that
//! row.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::RowParseError;
use crate::gazetteer::Gazetteer;
use crate::resolver;
use crate::types::{Event, RawRow, Region};

/// Month abbreviations in feed order; index + 1 is the month number.
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Weekday abbreviations scrubbed from date and time strings.
const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Matches a weekday marker with its trailing colon and space, e.g. `"fri: "`.
/// Input is lower-cased before matching.
static WEEKDAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{3}: ").expect("weekday marker pattern"));

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

/// Normalize one raw feed row into an [`Event`].
///
/// `today` drives year inference (feeds never state a year) and is read once
/// per refresh cycle so a cycle stays internally consistent.
pub fn normalize_row(
    row: &RawRow,
    region: &Region,
    today: NaiveDate,
    gazetteer: &Gazetteer,
) -> Result<Event, RowParseError> {
    let date = scrub_weekdays(&row.date.to_lowercase());
    let mut time = scrub_weekdays(&row.time.to_lowercase());

    // "-am"/"-pm" are spelling variants of a plain marker; "-late" declares
    // no end time at all.
    time = time.replace("-am", "am").replace("-pm", "pm").replace("-late", "");

    let (time_start, mut time_end) = match split_range(&time) {
        Some((start, end)) => (parse_time(start), Some(parse_time(end))),
        None => (parse_time(&time), None),
    };

    let (date_start, date_end) = match split_range(&date) {
        Some((start, end)) => {
            let date_start = parse_date(start, today)?;
            let date_end = parse_date(end, today)?;
            if time_end.is_none() {
                time_end = Some(end_of_day());
            }
            (date_start, date_end)
        }
        None => {
            let date_start = parse_date(&date, today)?;
            let date_end = match time_end {
                // An end time earlier than the start on a single stated date
                // means the event runs past midnight.
                Some(end) if end < time_start => next_day(date_start),
                Some(_) => date_start,
                None => {
                    time_end = Some(end_of_day());
                    date_start
                }
            };
            (date_start, date_end)
        }
    };

    let timestamp_start = NaiveDateTime::new(date_start, time_start);
    let timestamp_end = NaiveDateTime::new(date_end, time_end.unwrap_or_else(end_of_day));

    if timestamp_end < timestamp_start {
        // Upstream explicitly stated a range that ends before it starts.
        // Keep it verbatim; correcting it would hide the feed defect.
        tracing::warn!(
            region = %region.key,
            name = %row.name,
            %timestamp_start,
            %timestamp_end,
            "event ends before it starts as written upstream"
        );
    }

    Ok(Event {
        timestamp_start,
        timestamp_end,
        name: row.name.clone(),
        genres: split_genres(&row.genres),
        location: resolver::resolve(&row.location, region, gazetteer),
        price: normalize_price(&row.price),
        age_minimum: normalize_age(&row.age),
        organizer: row.organizer.clone(),
        ticket_link: row.ticket_link.clone(),
        event_link: row.event_link.clone(),
        region: region.clone(),
    })
}

/// Strip weekday markers: first the `"fri: "` form, then a defensive second
/// pass over the bare abbreviations anywhere in the string.
fn scrub_weekdays(s: &str) -> String {
    let mut s = WEEKDAY_MARKER.replace_all(s, "").into_owned();
    for day in WEEKDAYS {
        s = s.replace(day, "");
    }
    s
}

/// Split on the feed's range notation: the first `-` separates start from
/// end, and the end runs to the next `-` (anything after that is noise).
fn split_range(s: &str) -> Option<(&str, &str)> {
    let mut parts = s.splitn(3, '-');
    let start = parts.next()?;
    let end = parts.next()?;
    Some((start, end))
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

fn end_of_day() -> NaiveTime {
    hms(23, 59)
}

fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

// ---------------------------------------------------------------------------
// Token parsers
// ---------------------------------------------------------------------------

/// Parse one time token (`"7pm"`, `"11:30pm"`, `"10"`, `"12am"`) into a
/// wall-clock time.
///
/// An optional trailing am/pm marker is taken from the last two characters.
/// With a colon, the hour is the leading digit run (at most two digits)
/// before it and the minute the leading run after it; without one, the hour
/// comes from the first two characters and the minute is 0. Malformed
/// numeric text and components the clock cannot show recover to 0 rather
/// than failing the row.
pub fn parse_time(token: &str) -> NaiveTime {
    let mut token = token.trim();

    let mut meridiem = None;
    if token.contains("am") || token.contains("pm") {
        let split = token.len().saturating_sub(2);
        if token.is_char_boundary(split) {
            meridiem = Some(&token[split..]);
            token = &token[..split];
        }
    }

    let (mut hour, mut minute) = if token.contains(':') {
        let mut parts = token.splitn(3, ':');
        (
            leading_number(parts.next().unwrap_or("")),
            leading_number(parts.next().unwrap_or("")),
        )
    } else {
        let head: String = token.chars().take(2).collect();
        (leading_number(&head), 0)
    };

    match meridiem {
        Some("pm") if hour != 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    if hour > 23 {
        hour = 0;
    }
    if minute > 59 {
        minute = 0;
    }
    hms(hour, minute)
}

/// First two digits found in `s`, or 0 when there are none.
fn leading_number(s: &str) -> u32 {
    let digits: String = s.chars().filter(char::is_ascii_digit).take(2).collect();
    digits.parse().unwrap_or(0)
}

/// Parse a calendar token of the shape `"<month-abbrev> <day>"`, e.g.
/// `"jun 6"`. Stray commas inside tokens are ignored.
///
/// Feeds never state a year. A month strictly before the current month is
/// assumed to mean next year; the current month and everything after it stay
/// in the current year.
pub fn parse_date(token: &str, today: NaiveDate) -> Result<NaiveDate, RowParseError> {
    let token = token.trim();
    let mut words = token.split_whitespace();

    let month_word = words.next().unwrap_or("").replace(',', "");
    let month_index = MONTHS
        .iter()
        .position(|m| *m == month_word)
        .ok_or_else(|| RowParseError::UnknownMonth(month_word.clone()))?;
    let month = month_index as u32 + 1;

    let day_word = words
        .next()
        .ok_or_else(|| RowParseError::MissingDay(token.to_string()))?
        .replace(',', "");
    let day: u32 = day_word
        .parse()
        .map_err(|_| RowParseError::InvalidDay(day_word.clone()))?;

    let year = if month < today.month() {
        today.year() + 1
    } else {
        today.year()
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or(RowParseError::InvalidDate { month, day })
}

// ---------------------------------------------------------------------------
// Field normalizers
// ---------------------------------------------------------------------------

/// Split the raw genre field on commas, trimming and discarding empties.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize the raw age field: any mention of 21 wins, then 18; everything
/// else — including blank — is all-ages.
pub fn normalize_age(raw: &str) -> u8 {
    if raw.contains("21") {
        21
    } else if raw.contains("18") {
        18
    } else {
        0
    }
}

/// Blank-after-trim prices are absent, never empty strings.
pub fn normalize_price(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
