//! Rendering of a single log line.
//!
//! A line looks like `NAME DEBUG: 2024/05/01 13:02:03 message` followed by a
//! newline. The prefix comes first, then the local date and time.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write as _};

use crate::Severity;

/// Date and time layout written after the prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render a complete line stamped with the current local time.
pub fn render(name: &str, severity: Severity, args: fmt::Arguments<'_>) -> String {
    render_at(&Local::now(), name, severity, args)
}

/// Render a complete line stamped with `at`.
///
/// A newline is appended unless the message already ends with one.
pub fn render_at<Tz>(
    at: &DateTime<Tz>,
    name: &str,
    severity: Severity,
    args: fmt::Arguments<'_>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut line = String::with_capacity(64);
    line.push_str(name);
    line.push_str(severity.tag());
    // Writing into a String cannot fail.
    let _ = write!(line, "{} {}", at.format(TIMESTAMP_FORMAT), args);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}
