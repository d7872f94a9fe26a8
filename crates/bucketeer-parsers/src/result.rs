//! Extraction of bucket id and elapsed time from `lw` output logs.
//!
//! `lw` prints free text; the only fields we rely on are
//! `bucket #<n>` and `Done in <secs> seconds`. Callers go through the
//! [`ResultParser`] trait so a structured log format can replace the
//! patterns without touching the analyzer.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static BUCKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"bucket #([0-9]+)").expect("bucket pattern is valid"));

static DONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Done in ([0-9]+\.[0-9]+) seconds").expect("duration pattern is valid")
});

/// Error type for result extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultParseError {
    #[error("no `bucket #<n>` marker found")]
    MissingBucket,
    #[error("no `Done in <secs> seconds` marker found")]
    MissingDuration,
    #[error("invalid {field} value: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Fields extracted from a single result file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResult {
    /// Bucket index the job ran
    pub bucket: u64,
    /// Bucket digits exactly as printed, e.g. "007"
    pub label: String,
    /// Wall time reported by `lw`, in seconds
    pub seconds: f64,
}

/// Turns the content of one result file into a [`ParsedResult`].
pub trait ResultParser {
    fn parse(&self, content: &str) -> Result<ParsedResult, ResultParseError>;
}

/// Parser for the plain-text markers `lw` writes to stdout.
///
/// The first occurrence of each marker wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPatternParser;

impl LogPatternParser {
    /// Bucket digits as printed, and their value.
    pub fn bucket(content: &str) -> Result<(String, u64), ResultParseError> {
        let raw = BUCKET_RE
            .captures(content)
            .and_then(|c| c.get(1))
            .ok_or(ResultParseError::MissingBucket)?
            .as_str();
        let value = raw.parse().map_err(|_| ResultParseError::InvalidNumber {
            field: "bucket",
            value: raw.to_string(),
        })?;
        Ok((raw.to_string(), value))
    }

    pub fn seconds(content: &str) -> Result<f64, ResultParseError> {
        let raw = DONE_RE
            .captures(content)
            .and_then(|c| c.get(1))
            .ok_or(ResultParseError::MissingDuration)?
            .as_str();
        raw.parse().map_err(|_| ResultParseError::InvalidNumber {
            field: "seconds",
            value: raw.to_string(),
        })
    }
}

impl ResultParser for LogPatternParser {
    fn parse(&self, content: &str) -> Result<ParsedResult, ResultParseError> {
        let (label, bucket) = Self::bucket(content)?;
        Ok(ParsedResult {
            bucket,
            label,
            seconds: Self::seconds(content)?,
        })
    }
}
