//! Display formatting for salaries, timestamps, and text previews.
//!
//! DESIGN
//! ======
//! The backend emits `LocalDateTime` strings without an offset
//! (`2025-06-01T09:30:00`); everything here parses that shape and keeps
//! "now" an explicit argument so formatting stays deterministic in tests.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;
use time::{Duration, PrimitiveDateTime};

/// Group an integer amount with Indian digit separators (12,34,567).
/// Salaries are displayed in rupees regardless of the stored currency.
fn group_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut i = head_bytes.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

fn rupees(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = if amount.is_sign_negative() { 0 } else { amount as u64 };
    format!("\u{20b9}{}", group_inr(whole))
}

/// Render a salary range the way job cards and the detail sidebar show it.
pub fn salary_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", rupees(min), rupees(max)),
        (Some(min), None) => format!("From {}", rupees(min)),
        (None, Some(max)) => format!("Up to {}", rupees(max)),
        (None, None) => "Salary not specified".to_owned(),
    }
}

/// Parse a backend `LocalDateTime` string, tolerating fractional seconds.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let trimmed = if raw.len() > 19 { &raw[..19] } else { raw };
    PrimitiveDateTime::parse(trimmed, &format).ok()
}

/// Current wall-clock time as a naive timestamp, matching the backend's
/// offset-free representation.
pub fn now_naive() -> PrimitiveDateTime {
    let now = time::OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// "Jun 1, 2025" — table cells and application metadata.
pub fn short_date(raw: &str) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    parse_timestamp(raw)
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// "June 1, 2025" — posted/deadline dates on the job detail page.
pub fn long_date(raw: &str) -> String {
    let format = format_description!("[month repr:long] [day padding:none], [year]");
    parse_timestamp(raw)
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Whether a deadline timestamp is already behind `now`.
pub fn is_past(raw: &str, now: PrimitiveDateTime) -> bool {
    parse_timestamp(raw).is_some_and(|dt| dt < now)
}

/// Relative age for job cards: Today / Yesterday / "n days ago" /
/// "n weeks ago", falling back to a short date beyond a month.
pub fn relative_age(raw: &str, now: PrimitiveDateTime) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let days = (now - then).whole_days();
    match days {
        i64::MIN..=0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => short_date(raw),
    }
}

/// Inbox timestamp: clock time today, "Yesterday", a weekday inside a
/// week, then "Jun 1".
pub fn message_time(raw: &str, now: PrimitiveDateTime) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let age = now - then;
    if now.date() == then.date() {
        let format = format_description!("[hour repr:12 padding:none]:[minute] [period case:upper]");
        return then.format(&format).unwrap_or_else(|_| raw.to_owned());
    }
    if age < Duration::days(2) && now.date().previous_day() == Some(then.date()) {
        return "Yesterday".to_owned();
    }
    if age < Duration::days(7) {
        let format = format_description!("[weekday repr:short]");
        return then.format(&format).unwrap_or_else(|_| raw.to_owned());
    }
    let format = format_description!("[month repr:short] [day padding:none]");
    then.format(&format).unwrap_or_else(|_| raw.to_owned())
}

/// Uppercase initial for avatar bubbles; "U" when the name is empty.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

/// Clip long descriptions for card previews.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{clipped}...")
}

/// Split a comma-separated skills field into trimmed, non-empty tags.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
