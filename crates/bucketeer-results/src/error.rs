use bucketeer_parsers::ResultParseError;
use camino::Utf8PathBuf;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Failed to read results directory {path}: {source}")]
    ReadDir { path: Utf8PathBuf, source: io::Error },
    #[error("Result file name is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },
    #[error("Failed to read result file {path}: {source}")]
    ReadFile { path: Utf8PathBuf, source: io::Error },
    #[error("Malformed result file {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        source: ResultParseError,
    },
    #[error("Bucket {0} has no output!")]
    MissingBucket(u64),
}
