//! Batch job configuration.

use bucketeer_parsers::{parse_duration_secs, parse_memory_mb};
use std::fmt;

/// Default values shared by the library and the CLI.
pub mod defaults {
    /// CSC project the jobs are billed to.
    pub const PROJECT_ID: &str = "2007026";
    pub const PARTITION: &str = "small";
    pub const EXECUTABLE: &str = "/projappl/project_2007026/littlewood/lw";
    pub const TIME_LIMIT: &str = "00:10:00";
    pub const CPUS: u32 = 10;
    pub const MEMORY_LIMIT: &str = "1G";
    pub const SUBDIVISIONS: u32 = 0;
    pub const BUCKETS: u32 = 1;
    /// Directory the per-job directories are created in.
    pub const OUTPUT_ROOT: &str = "batch";
}

/// Parameters for one bucketed `lw` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJobConfig {
    /// Problem size passed to `lw -N`
    pub n: u32,

    /// Explicit job name; `run-n-<N>` when unset
    pub job_name: Option<String>,

    /// Project id, rendered as `Project_<id>` in `--account`
    pub project_id: String,

    /// SLURM partition
    pub partition: String,

    /// Path to the `lw` executable on the cluster
    pub executable: String,

    /// SLURM time limit (e.g. "00:10:00")
    pub time_limit: String,

    /// CPUs per task, also passed to `lw -j`
    pub cpus: u32,

    /// Memory limit with unit suffix (e.g. "1G")
    pub memory_limit: String,

    /// Subdivision count passed to `lw -s`
    pub subdivisions: u32,

    /// Total number of buckets
    pub buckets: u32,
}

/// Suspicious configuration values.
///
/// The generator writes scripts regardless; sbatch is the one that rejects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    TimeLimit(String),
    MemoryLimit(String),
    NoCpus,
    NoBuckets,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::TimeLimit(v) => {
                write!(f, "time limit {:?} is not a SLURM duration", v)
            }
            ConfigWarning::MemoryLimit(v) => {
                write!(f, "memory limit {:?} is not a SLURM memory size", v)
            }
            ConfigWarning::NoCpus => write!(f, "cpu count is 0"),
            ConfigWarning::NoBuckets => {
                write!(f, "bucket count is 0, only the run script is written")
            }
        }
    }
}

impl BatchJobConfig {
    /// Create a config for problem size `n` with all other fields at their defaults.
    pub fn new(n: u32) -> Self {
        Self {
            n,
            job_name: None,
            project_id: defaults::PROJECT_ID.to_string(),
            partition: defaults::PARTITION.to_string(),
            executable: defaults::EXECUTABLE.to_string(),
            time_limit: defaults::TIME_LIMIT.to_string(),
            cpus: defaults::CPUS,
            memory_limit: defaults::MEMORY_LIMIT.to_string(),
            subdivisions: defaults::SUBDIVISIONS,
            buckets: defaults::BUCKETS,
        }
    }

    pub fn with_job_name(mut self, name: impl Into<String>) -> Self {
        self.job_name = Some(name.into());
        self
    }

    pub fn with_time_limit(mut self, limit: impl Into<String>) -> Self {
        self.time_limit = limit.into();
        self
    }

    pub fn with_cpus(mut self, cpus: u32) -> Self {
        self.cpus = cpus;
        self
    }

    pub fn with_memory_limit(mut self, limit: impl Into<String>) -> Self {
        self.memory_limit = limit.into();
        self
    }

    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    pub fn with_buckets(mut self, buckets: u32) -> Self {
        self.buckets = buckets;
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = partition.into();
        self
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Job name used for file names, directory and `--job-name`.
    pub fn job_name(&self) -> String {
        match &self.job_name {
            Some(name) => name.clone(),
            None => format!("run-n-{}", self.n),
        }
    }

    /// Time limit in seconds, if it is a valid SLURM duration.
    pub fn time_limit_secs(&self) -> Option<u64> {
        parse_duration_secs(&self.time_limit)
    }

    /// Bucket indices in submission order.
    pub fn bucket_indices(&self) -> impl Iterator<Item = u32> {
        1..=self.buckets
    }

    /// Check values sbatch would likely reject.
    pub fn check(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.time_limit_secs().is_none() {
            warnings.push(ConfigWarning::TimeLimit(self.time_limit.clone()));
        }
        if parse_memory_mb(&self.memory_limit).is_none() {
            warnings.push(ConfigWarning::MemoryLimit(self.memory_limit.clone()));
        }
        if self.cpus == 0 {
            warnings.push(ConfigWarning::NoCpus);
        }
        if self.buckets == 0 {
            warnings.push(ConfigWarning::NoBuckets);
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BatchJobConfig::new(24);
        assert_eq!(config.time_limit, "00:10:00");
        assert_eq!(config.cpus, 10);
        assert_eq!(config.memory_limit, "1G");
        assert_eq!(config.subdivisions, 0);
        assert_eq!(config.buckets, 1);
        assert_eq!(config.project_id, "2007026");
        assert_eq!(config.partition, "small");
        assert_eq!(config.time_limit_secs(), Some(600));
    }

    #[test]
    fn test_default_job_name() {
        assert_eq!(BatchJobConfig::new(24).job_name(), "run-n-24");
        assert_eq!(
            BatchJobConfig::new(24).with_job_name("big").job_name(),
            "big"
        );
    }

    #[test]
    fn test_bucket_indices() {
        let config = BatchJobConfig::new(10).with_buckets(3);
        assert_eq!(config.bucket_indices().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(config.with_buckets(0).bucket_indices().count(), 0);
    }

    #[test]
    fn test_check_clean() {
        assert!(BatchJobConfig::new(24).check().is_empty());
        assert!(
            BatchJobConfig::new(24)
                .with_time_limit("2-00:00:00")
                .with_memory_limit("64G")
                .check()
                .is_empty()
        );
    }

    #[test]
    fn test_check_warnings() {
        let config = BatchJobConfig::new(24)
            .with_time_limit("ten minutes")
            .with_memory_limit("lots")
            .with_cpus(0)
            .with_buckets(0);
        assert_eq!(
            config.check(),
            vec![
                ConfigWarning::TimeLimit("ten minutes".to_string()),
                ConfigWarning::MemoryLimit("lots".to_string()),
                ConfigWarning::NoCpus,
                ConfigWarning::NoBuckets,
            ]
        );
    }

    #[test]
    fn test_check_huge_time_limit_warns() {
        let config = BatchJobConfig::new(10).with_time_limit("999999999999999999-00");
        assert_eq!(config.time_limit_secs(), None);
        assert_eq!(
            config.check(),
            vec![ConfigWarning::TimeLimit("999999999999999999-00".to_string())]
        );
    }
}
