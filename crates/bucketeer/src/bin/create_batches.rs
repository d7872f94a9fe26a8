//! Generate SLURM batch scripts for a bucketed lw run.

use bucketeer_cli::{BatchArgs, init_logging};
use bucketeer_slurm::BatchWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};

fn main() -> Result<()> {
    let args = BatchArgs::parse();
    init_logging(args.verbose);

    let config = args.to_config();
    for warning in config.check() {
        tracing::warn!("{}", warning);
    }

    let writer = BatchWriter::new(args.output_root.clone());
    let generated = writer
        .write(&config)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to generate batch scripts for {}", config.job_name()))?;

    tracing::debug!(
        "Generated {} files, submit with {}",
        generated.file_count(),
        generated.run_script
    );

    Ok(())
}
