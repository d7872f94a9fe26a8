//! sbatch script rendering.

use crate::types::BatchJobConfig;

/// Submission script for a single bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchScript {
    /// Bucket index, 1-based
    pub bucket: u32,
    /// File name without directory
    pub file_name: String,
    /// Rendered script
    pub content: String,
}

impl BatchScript {
    /// Render the script for `bucket`.
    pub fn new(config: &BatchJobConfig, bucket: u32) -> Self {
        Self {
            bucket,
            file_name: Self::file_name_for(&config.job_name(), bucket),
            content: Self::render(config, bucket),
        }
    }

    /// `<job>-bucket-<b>.sh`
    pub fn file_name_for(job_name: &str, bucket: u32) -> String {
        format!("{}-bucket-{}.sh", job_name, bucket)
    }

    /// Render the sbatch descriptor for one bucket.
    pub fn render(config: &BatchJobConfig, bucket: u32) -> String {
        format!(
            "#!/bin/bash
#SBATCH --job-name={job_name}-bucket-{bucket}
#SBATCH --account=Project_{project_id}
#SBATCH --partition={partition}
#SBATCH --time={time_limit}
#SBATCH --ntasks=1
#SBATCH --cpus-per-task={cpus}
#SBATCH --nodes=1
#SBATCH --mem={memory_limit}

srun {executable} -N{n} -j{cpus} -s{subdivisions} -B{buckets} -b{bucket}
",
            job_name = config.job_name(),
            bucket = bucket,
            project_id = config.project_id,
            partition = config.partition,
            time_limit = config.time_limit,
            cpus = config.cpus,
            memory_limit = config.memory_limit,
            executable = config.executable,
            n = config.n,
            subdivisions = config.subdivisions,
            buckets = config.buckets,
        )
    }
}

/// Script submitting every bucket of a job, in bucket order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunScript {
    pub file_name: String,
    pub content: String,
}

impl RunScript {
    pub fn new(config: &BatchJobConfig) -> Self {
        let job_name = config.job_name();
        Self {
            file_name: format!("{}-run.sh", job_name),
            content: Self::render(config),
        }
    }

    /// Shebang followed by one `sbatch` line per bucket.
    ///
    /// Files are referenced by bare name, so the script has to be run from
    /// inside the job directory.
    pub fn render(config: &BatchJobConfig) -> String {
        let job_name = config.job_name();
        let mut script = String::from("#!/bin/bash\n");
        for bucket in config.bucket_indices() {
            script.push_str(&format!(
                "sbatch {}\n",
                BatchScript::file_name_for(&job_name, bucket)
            ));
        }
        script
    }
}
