//! Display formatting shared by cards, post pages and comments.
//!
//! Timestamps arrive as ISO-8601 strings. They are shown in UTC; anything
//! unparseable is shown verbatim.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const SHORT: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day padding:none], [year]");
const LONG: &[BorrowedFormatItem<'static>] = format_description!("[month repr:long] [day padding:none], [year]");
const WITH_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]");
const NAIVE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStyle {
    /// `May 1, 2024`: cards and the admin table.
    Short,
    /// `May 1, 2024` with the full month name: the post page.
    Long,
    /// `May 1, 2024, 02:30 PM`: comments.
    WithTime,
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .or_else(|| PrimitiveDateTime::parse(raw, NAIVE).ok().map(PrimitiveDateTime::assume_utc))
}

#[must_use]
pub fn format_date(raw: &str, style: DateStyle) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let format = match style {
        DateStyle::Short => SHORT,
        DateStyle::Long => LONG,
        DateStyle::WithTime => WITH_TIME,
    };
    let at = at.to_offset(time::UtcOffset::UTC);
    at.format(format).unwrap_or_else(|_| raw.to_owned())
}

/// Upper-cased first letter for avatar bubbles; `?` for an empty name.
#[must_use]
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[must_use]
pub fn pluralize<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// `#rust`-style label for a tag chip.
#[must_use]
pub fn tag_label(tag: &str) -> String {
    format!("#{tag}")
}

/// `3 comments`, `1 comment`.
#[must_use]
pub fn comment_count_label(count: u64) -> String {
    let noun = if count == 1 { "comment" } else { "comments" };
    format!("{count} {noun}")
}
