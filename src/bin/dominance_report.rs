use std::path::PathBuf;

use clap::Parser;
use evo_dominance::report::{ReportBuilder, Result, Strategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dominance_report",
    about = "Compare dominant-strategy outcomes between two experimental conditions",
    long_about = "Reads per-run summary files from two condition directories,\n\
                  tallies which strategy dominated the population at the end of\n\
                  each run, and compares the conditions' win rates with a\n\
                  two-sided Fisher's exact test."
)]
struct Args {
    /// Directory of run summaries for the first condition
    condition_a: PathBuf,

    /// Directory of run summaries for the second condition
    condition_b: PathBuf,

    /// Focal strategy for the first condition (tft, mr, ad, or a genome ID)
    #[arg(long = "focal-a", default_value = "tft")]
    focal_a: Strategy,

    /// Focal strategy for the second condition
    #[arg(long = "focal-b", default_value = "mr")]
    focal_b: Strategy,

    /// Label for the first condition in output
    #[arg(long = "label-a", default_value = "TFT")]
    label_a: String,

    /// Label for the second condition in output
    #[arg(long = "label-b", default_value = "MR")]
    label_b: String,

    /// Run files are directory entries ending with this suffix
    #[arg(long = "suffix", default_value = "count.csv")]
    suffix: String,

    /// Fixed number of runs each condition is expected to contain
    #[arg(short = 'n', long = "expected-runs", default_value_t = 100)]
    expected_runs: usize,

    /// Optional directory to save results.json and results.md
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut builder = ReportBuilder::new()
        .condition_a(&args.condition_a)
        .condition_b(&args.condition_b)
        .focal_a(args.focal_a)
        .focal_b(args.focal_b)
        .label_a(args.label_a.as_str())
        .label_b(args.label_b.as_str())
        .suffix(args.suffix.as_str())
        .expected_runs(args.expected_runs);
    if let Some(ref output_dir) = args.output_dir {
        builder = builder.output_dir(output_dir);
    }

    let report = builder.build()?;
    let result = report.run()?;

    print!("{}", result.to_text());

    if let Some(output_dir) = result.config().output_dir.clone() {
        result.save_to_dir(&output_dir)?;
        println!("\nResults saved to:");
        println!("  - {}", output_dir.join("results.json").display());
        println!("  - {}", output_dir.join("results.md").display());
    }

    Ok(())
}
