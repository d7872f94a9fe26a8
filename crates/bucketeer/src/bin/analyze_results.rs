//! Check bucket coverage of an lw run and rank buckets by runtime.

use bucketeer_cli::{AnalyzeArgs, init_logging};
use bucketeer_results::{Analyzer, Report};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use miette::{IntoDiagnostic, Result};

fn main() -> Result<()> {
    let args = AnalyzeArgs::parse();
    init_logging(args.verbose);

    let results_dir = absolute(&args.results_dir);
    if !args.json {
        println!("{}", Report::header(&results_dir, &args.extension));
    }

    let analyzer = Analyzer::for_lw_logs().with_extension(args.extension.clone());
    let analysis = analyzer.analyze(&results_dir).into_diagnostic()?;
    let report = Report::new(&analysis, args.top);

    if args.json {
        println!("{}", report.to_json().into_diagnostic()?);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}

/// Make `dir` absolute without resolving symlinks.
///
/// Falls back to the path as given if the working directory is unavailable.
fn absolute(dir: &Utf8Path) -> Utf8PathBuf {
    std::path::absolute(dir)
        .ok()
        .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
        .unwrap_or_else(|| dir.to_path_buf())
}
