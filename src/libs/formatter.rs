//! Time formatting helpers shared by every presentation surface.
//!
//! All totals are displayed as zero-padded `HH:MM:SS`, rounded to the
//! nearest second. The report, the week table and the status line all go
//! through [`format_seconds`] so a duration never renders two different
//! ways in two places.

use chrono::NaiveDate;

/// Formats a duration in seconds as a zero-padded "HH:MM:SS" string.
///
/// Rounds to the nearest second and clamps negative durations to zero,
/// so a slightly skewed clock can never render "-00:00:01".
///
/// # Examples
///
/// ```
/// use tempo::libs::formatter::format_seconds;
///
/// assert_eq!(format_seconds(3661.0), "01:01:01");
/// assert_eq!(format_seconds(0.0), "00:00:00");
/// assert_eq!(format_seconds(-5.0), "00:00:00");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as i64;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Short weekday label for the week table, e.g. "Mon 03".
pub fn weekday_label(day: NaiveDate) -> String {
    day.format("%a %d").to_string()
}
