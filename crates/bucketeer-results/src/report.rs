//! Console and JSON rendering of an analysis.

use crate::analyzer::Analysis;
use bucketeer_parsers::format_seconds;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// Number of slowest buckets listed by default.
pub const DEFAULT_TOP: usize = 25;

/// A bucket in the runtime ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBucket {
    pub bucket: u64,
    /// Bucket digits as printed by the job
    pub label: String,
    pub seconds: f64,
    pub file: Utf8PathBuf,
}

/// Ranking of the slowest buckets of a fully covered run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub dir: Utf8PathBuf,
    pub expected_buckets: u64,
    pub longest: Vec<RankedBucket>,
}

impl Report {
    /// Build a report listing the `top` slowest buckets.
    pub fn new(analysis: &Analysis, top: usize) -> Self {
        let longest = analysis
            .table
            .longest(top)
            .into_iter()
            .map(|r| RankedBucket {
                bucket: r.bucket,
                label: r.label.clone(),
                seconds: r.seconds,
                file: r.file.clone(),
            })
            .collect();
        Self {
            dir: analysis.dir.clone(),
            expected_buckets: analysis.expected,
            longest,
        }
    }

    /// Line printed before the results directory is read.
    pub fn header(dir: &Utf8Path, extension: &str) -> String {
        format!(
            "Analyzing .{} files in {}",
            extension.trim_start_matches('.'),
            dir
        )
    }

    /// Coverage confirmation and ranking, one line per bucket.
    pub fn render(&self) -> String {
        let mut out = String::from("All buckets accounted for :)\n");
        out.push_str(&format!(
            "{} buckets that took the longest time to process:\n",
            self.longest.len()
        ));
        for ranked in &self.longest {
            out.push_str(&format!(
                "\t Bucket #{:<5} took {} seconds.\n",
                ranked.label,
                format_seconds(ranked.seconds)
            ));
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
