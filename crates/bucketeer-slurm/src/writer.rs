//! Writing generated scripts to disk.

use crate::script::{BatchScript, RunScript};
use crate::types::BatchJobConfig;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: Utf8PathBuf, source: io::Error },
    #[error("Failed to write {path}: {source}")]
    Write { path: Utf8PathBuf, source: io::Error },
}

/// Files produced by one generator run.
#[derive(Debug, Clone)]
pub struct GeneratedBatch {
    /// `<root>/<job_name>`
    pub dir: Utf8PathBuf,
    /// Batch scripts in bucket order
    pub batch_files: Vec<Utf8PathBuf>,
    pub run_script: Utf8PathBuf,
}

impl GeneratedBatch {
    /// Number of files written, batch scripts plus the run script.
    pub fn file_count(&self) -> usize {
        self.batch_files.len() + 1
    }
}

/// Writes batch and run scripts under a root directory.
pub struct BatchWriter {
    root: Utf8PathBuf,
}

impl BatchWriter {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Directory the scripts for `config` are written to.
    pub fn job_dir(&self, config: &BatchJobConfig) -> Utf8PathBuf {
        self.root.join(config.job_name())
    }

    /// Write every batch script and the run script.
    ///
    /// Creates the job directory and missing parents. Existing files are
    /// overwritten.
    pub fn write(&self, config: &BatchJobConfig) -> Result<GeneratedBatch, WriteError> {
        let dir = self.job_dir(config);
        fs::create_dir_all(&dir).map_err(|source| WriteError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let mut batch_files = Vec::with_capacity(config.buckets as usize);
        for bucket in config.bucket_indices() {
            let script = BatchScript::new(config, bucket);
            let path = dir.join(&script.file_name);
            write_file(&path, &script.content)?;
            batch_files.push(path);
        }

        let run = RunScript::new(config);
        let run_script = dir.join(&run.file_name);
        write_file(&run_script, &run.content)?;

        tracing::info!(
            dir = %dir,
            buckets = config.buckets,
            "Wrote batch scripts for {}",
            config.job_name()
        );

        Ok(GeneratedBatch {
            dir,
            batch_files,
            run_script,
        })
    }
}

fn write_file(path: &Utf8Path, content: &str) -> Result<(), WriteError> {
    tracing::debug!("Writing {}", path);
    fs::write(path, content).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
