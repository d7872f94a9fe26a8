//! Result analysis for bucketed `lw` runs.
//!
//! Scan a results directory, check that every bucket produced output and
//! rank buckets by how long they took.

pub mod analyzer;
pub mod error;
pub mod report;
pub mod types;

pub use analyzer::{Analysis, Analyzer, DEFAULT_EXTENSION, scan_results_dir};
pub use error::AnalyzeError;
pub use report::{DEFAULT_TOP, RankedBucket, Report};
pub use types::{BucketTable, ResultRecord};
