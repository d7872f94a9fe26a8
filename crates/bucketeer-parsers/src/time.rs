//! Time parsing and formatting utilities.

use std::time::Duration;

/// Parse an sbatch `--time` value.
///
/// Supports the formats sbatch accepts:
/// - MM
/// - MM:SS
/// - HH:MM:SS
/// - D-HH
/// - D-HH:MM
/// - D-HH:MM:SS
///
/// Returns None for "UNLIMITED", empty strings and anything else.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() || s == "UNLIMITED" || s == "INFINITE" {
        return None;
    }

    let (days, time_part) = match s.split_once('-') {
        Some((d, rest)) => (Some(d.parse::<u64>().ok()?), rest),
        None => (None, s),
    };

    let time_parts = time_part
        .split(':')
        .map(|p| p.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;

    let (d, h, m, sec) = match (days, time_parts.as_slice()) {
        (None, [m]) => (0, 0, *m, 0),
        (None, [m, s]) => (0, 0, *m, *s),
        (None, [h, m, s]) => (0, *h, *m, *s),
        (Some(d), [h]) => (d, *h, 0, 0),
        (Some(d), [h, m]) => (d, *h, *m, 0),
        (Some(d), [h, m, s]) => (d, *h, *m, *s),
        _ => return None,
    };

    // Overflow is an invalid duration
    let seconds = d
        .checked_mul(86400)?
        .checked_add(h.checked_mul(3600)?)?
        .checked_add(m.checked_mul(60)?)?
        .checked_add(sec)?;

    Some(Duration::from_secs(seconds))
}

/// Like `parse_duration` but returns seconds as u64 instead of Duration.
pub fn parse_duration_secs(s: &str) -> Option<u64> {
    parse_duration(s).map(|d| d.as_secs())
}

/// Format an elapsed time in seconds for reports.
///
/// Whole values keep one decimal ("3.0") so they read the same as the
/// fractional times `lw` prints; everything else uses the shortest exact form.
///
/// Meant for the plain `<digits>.<digits>` values found in result logs.
/// Values below 1e-4 or from 1e16 up print in positional notation
/// ("0.00001"), never in exponent form.
pub fn format_seconds(seconds: f64) -> String {
    if seconds.is_finite() && seconds.fract() == 0.0 && seconds.abs() < 1e16 {
        format!("{:.1}", seconds)
    } else {
        format!("{}", seconds)
    }
}
