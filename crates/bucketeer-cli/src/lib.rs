//! CLI argument parsing for bucketeer.

use bucketeer_results::{DEFAULT_EXTENSION, DEFAULT_TOP};
use bucketeer_slurm::{BatchJobConfig, defaults};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "create-batches")]
#[command(about = "CLI utility to create CSC batch files")]
pub struct BatchArgs {
    /// Problem size passed to lw
    #[arg(short = 'N')]
    pub n: u32,

    /// Job name [default: run-n-<N>]
    #[arg(short = 'j', long)]
    pub job_name: Option<String>,

    /// SLURM time limit
    #[arg(short = 't', long, default_value = defaults::TIME_LIMIT)]
    pub time_limit: String,

    /// CPUs per task
    #[arg(short = 'c', long, default_value_t = defaults::CPUS)]
    pub cpus: u32,

    /// Memory limit with unit suffix
    #[arg(short = 'm', long, default_value = defaults::MEMORY_LIMIT)]
    pub memory_limit: String,

    /// Subdivision count passed to lw
    #[arg(short = 's', long, default_value_t = defaults::SUBDIVISIONS)]
    pub subdivisions: u32,

    /// Number of buckets to split the run into
    #[arg(short = 'b', long, default_value_t = defaults::BUCKETS)]
    pub buckets: u32,

    /// CSC project id used for --account
    #[arg(long, default_value = defaults::PROJECT_ID)]
    pub project: String,

    /// SLURM partition
    #[arg(long, default_value = defaults::PARTITION)]
    pub partition: String,

    /// Path to the lw executable on the cluster
    #[arg(long, default_value = defaults::EXECUTABLE)]
    pub executable: String,

    /// Directory the job directory is created in
    #[arg(short = 'o', long, default_value = defaults::OUTPUT_ROOT)]
    pub output_root: Utf8PathBuf,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl BatchArgs {
    pub fn to_config(&self) -> BatchJobConfig {
        let config = BatchJobConfig::new(self.n)
            .with_time_limit(&self.time_limit)
            .with_cpus(self.cpus)
            .with_memory_limit(&self.memory_limit)
            .with_subdivisions(self.subdivisions)
            .with_buckets(self.buckets)
            .with_project_id(&self.project)
            .with_partition(&self.partition)
            .with_executable(&self.executable);
        match &self.job_name {
            Some(name) => config.with_job_name(name),
            None => config,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "analyze-results")]
#[command(about = "Check that every bucket produced output and rank buckets by runtime")]
pub struct AnalyzeArgs {
    /// Directory containing the job output files
    pub results_dir: Utf8PathBuf,

    /// Number of slowest buckets to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Extension of result files
    #[arg(short = 'e', long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Print the ranking as JSON
    #[arg(long)]
    pub json: bool,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown unless
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_args_defaults() {
        let args = BatchArgs::try_parse_from(["create-batches", "-N", "24"]).unwrap();
        let config = args.to_config();
        assert_eq!(config, BatchJobConfig::new(24));
        assert_eq!(config.job_name(), "run-n-24");
        assert_eq!(args.output_root, "batch");
    }

    #[test]
    fn test_batch_args_all_flags() {
        let args = BatchArgs::try_parse_from([
            "create-batches",
            "-N",
            "30",
            "-j",
            "sweep",
            "-t",
            "12:00:00",
            "-c",
            "64",
            "-m",
            "16G",
            "-s",
            "2",
            "-b",
            "128",
            "--partition",
            "large",
        ])
        .unwrap();
        let config = args.to_config();
        assert_eq!(config.n, 30);
        assert_eq!(config.job_name(), "sweep");
        assert_eq!(config.time_limit, "12:00:00");
        assert_eq!(config.cpus, 64);
        assert_eq!(config.memory_limit, "16G");
        assert_eq!(config.subdivisions, 2);
        assert_eq!(config.buckets, 128);
        assert_eq!(config.partition, "large");
        assert_eq!(config.project_id, "2007026");
    }

    #[test]
    fn test_batch_args_long_flags() {
        let args = BatchArgs::try_parse_from([
            "create-batches",
            "-N",
            "20",
            "--job-name",
            "long",
            "--buckets",
            "8",
            "--memory-limit",
            "2G",
        ])
        .unwrap();
        assert_eq!(args.job_name.as_deref(), Some("long"));
        assert_eq!(args.buckets, 8);
        assert_eq!(args.memory_limit, "2G");
    }

    #[test]
    fn test_batch_args_require_n() {
        assert!(BatchArgs::try_parse_from(["create-batches", "-b", "4"]).is_err());
        assert!(BatchArgs::try_parse_from(["create-batches", "-N", "many"]).is_err());
    }

    #[test]
    fn test_analyze_args() {
        let args = AnalyzeArgs::try_parse_from(["analyze-results", "results/run-n-24"]).unwrap();
        assert_eq!(args.results_dir, "results/run-n-24");
        assert_eq!(args.top, 25);
        assert_eq!(args.extension, "out");
        assert!(!args.json);
    }

    #[test]
    fn test_analyze_args_require_dir() {
        let err = AnalyzeArgs::try_parse_from(["analyze-results"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
