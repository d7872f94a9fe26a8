//! Scanning and parsing a results directory.

use crate::error::AnalyzeError;
use crate::types::{BucketTable, ResultRecord};
use bucketeer_parsers::{LogPatternParser, ResultParser};
use camino::{Utf8Path, Utf8PathBuf};
use std::ffi::OsStr;
use std::fs;

/// Extension of the files SLURM writes job stdout to.
pub const DEFAULT_EXTENSION: &str = "out";

/// List result files in `dir`, sorted by name.
///
/// Only direct children whose extension equals `extension` are returned.
/// Dotfiles like `.out` have no extension and are skipped. A matching
/// entry whose name is not valid UTF-8 is an error.
pub fn scan_results_dir(
    dir: &Utf8Path,
    extension: &str,
) -> Result<Vec<Utf8PathBuf>, AnalyzeError> {
    let extension = OsStr::new(extension.trim_start_matches('.'));
    let entries = fs::read_dir(dir).map_err(|source| AnalyzeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AnalyzeError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension() != Some(extension) {
            continue;
        }
        let path = Utf8PathBuf::try_from(path)
            .map_err(|e| AnalyzeError::NonUtf8Path { path: e.into_path_buf() })?;
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Outcome of a successful analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Directory that was scanned
    pub dir: Utf8PathBuf,
    /// Number of result files, i.e. the expected bucket count
    pub expected: u64,
    pub table: BucketTable,
}

/// Reads result files and checks bucket coverage.
pub struct Analyzer<P = LogPatternParser> {
    parser: P,
    extension: String,
}

impl Analyzer {
    /// Analyzer for `lw` stdout logs with the default `.out` extension.
    pub fn for_lw_logs() -> Self {
        Self::new(LogPatternParser)
    }
}

impl<P: ResultParser> Analyzer<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Parse a single result file.
    pub fn read_record(&self, path: &Utf8Path) -> Result<ResultRecord, AnalyzeError> {
        let content = fs::read_to_string(path).map_err(|source| AnalyzeError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = self
            .parser
            .parse(&content)
            .map_err(|source| AnalyzeError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(ResultRecord {
            bucket: parsed.bucket,
            label: parsed.label,
            seconds: parsed.seconds,
            file: path.to_path_buf(),
        })
    }

    /// Parse every result file in `dir` and check that buckets
    /// 1..=file count are all present.
    ///
    /// Any unreadable or malformed file aborts the analysis.
    pub fn analyze(&self, dir: &Utf8Path) -> Result<Analysis, AnalyzeError> {
        let files = scan_results_dir(dir, &self.extension)?;
        let expected = files.len() as u64;
        tracing::debug!("Found {} .{} files in {}", expected, self.extension, dir);

        let mut table = BucketTable::new();
        for path in &files {
            let record = self.read_record(path)?;
            tracing::debug!(
                bucket = record.bucket,
                seconds = record.seconds,
                "Parsed {}",
                path
            );
            if let Some(previous) = table.insert(record) {
                tracing::debug!(
                    "Bucket {} from {} replaced by {}",
                    previous.bucket,
                    previous.file,
                    path
                );
            }
        }

        table.check_coverage(expected)?;
        tracing::info!("All {} buckets accounted for in {}", expected, dir);

        Ok(Analysis {
            dir: dir.to_path_buf(),
            expected,
            table,
        })
    }
}
