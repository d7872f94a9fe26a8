//! Shared parsing utilities for bucket jobs.
//!
//! Used by bucketeer-slurm to sanity-check resource strings before they are
//! written into batch scripts, and by bucketeer-results to pull the bucket id
//! and elapsed time out of job output logs.

pub mod memory;
pub mod result;
pub mod time;

pub use memory::parse_memory_mb;
pub use result::{LogPatternParser, ParsedResult, ResultParseError, ResultParser};
pub use time::{format_seconds, parse_duration, parse_duration_secs};
