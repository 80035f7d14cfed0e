//! Date tagging from filename slugs
//!
//! A slug starting with `YYYY-M-D` (month and day one or two digits) gives its
//! item a date at noon of that day. Anything else passes through undated.

use crate::domain::ContentItem;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn slug_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})").unwrap())
}

/// Parse the leading date of a slug, fixed at 12:00:00.
///
/// Month and day are not range-checked: they roll over into neighbouring
/// months and years the way a calendar constructor does. Years 0 to 99 are
/// read as 1900 to 1999.
pub fn date_from_slug(slug: &str) -> Option<NaiveDateTime> {
    let caps = slug_date_regex().captures(slug)?;
    let year = match caps[1].parse::<i64>().ok()? {
        short @ 0..=99 => 1900 + short,
        year => year,
    };
    let month: i64 = caps[2].parse().ok()?;
    let day: i64 = caps[3].parse().ok()?;

    rolled_over_date(year, month - 1, day)?.and_hms_opt(12, 0, 0)
}

/// Build a date from a 0-indexed month, carrying overflow in either field.
fn rolled_over_date(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let total_months = year.checked_mul(12)?.checked_add(month0)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_signed(Duration::days(day - 1))
}

/// Attach slug dates to every item that has one.
///
/// Returns the same items in the same order. Items whose slug has no date
/// prefix are returned untouched.
pub fn tag_dates(items: Vec<ContentItem>) -> Vec<ContentItem> {
    items
        .into_iter()
        .map(|mut item| {
            match date_from_slug(item.slug()) {
                Some(date) => {
                    debug!(slug = item.slug(), %date, "tagged item");
                    item.set_date(date);
                }
                None => debug!(slug = item.slug(), "no date prefix"),
            }
            item
        })
        .collect()
}
