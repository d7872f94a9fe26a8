//! SLURM batch generation for bucketed `lw` runs.
//!
//! Render one sbatch script per bucket plus a run script that submits
//! them all, and write them under `<root>/<job_name>/`.

pub mod script;
pub mod types;
pub mod writer;

pub use script::{BatchScript, RunScript};
pub use types::{BatchJobConfig, ConfigWarning, defaults};
pub use writer::{BatchWriter, GeneratedBatch, WriteError};
