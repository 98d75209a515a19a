use crate::model::RunConfig;
use crate::{report, samples, text_summary};
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Environment variable conventionally set by CI to collect artifacts.
const ARTIFACTS_ENV: &str = "ARTIFACTS";

/// Output directory when neither `--artifacts-dir` nor `ARTIFACTS` is given.
const DEFAULT_ARTIFACTS_DIR: &str = "./_artifacts";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "etcd-perf-report",
    version,
    about = "Generate perf-dashboard latency reports from benchmark samples"
)]
pub struct Cli {
    /// Latency sample file, one duration per line ('-' or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Output directory for report artifacts (overrides the ARTIFACTS env var)
    #[arg(long)]
    pub artifacts_dir: Option<PathBuf>,

    /// Print the report JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Print a human-readable latency summary to stdout
    #[arg(long)]
    pub text: bool,

    /// Run silently: suppress all output except errors (for CI usage)
    #[arg(long)]
    pub silent: bool,

    /// Use --write false to skip writing the report artifact
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub write: bool,
}

/// Build a `RunConfig` from CLI arguments. The environment is consulted
/// here and nowhere else.
pub fn build_config(args: &Cli) -> RunConfig {
    RunConfig {
        artifacts_dir: resolve_artifacts_dir(
            args.artifacts_dir.clone(),
            std::env::var(ARTIFACTS_ENV).ok(),
        ),
        write: args.write,
    }
}

/// Resolve the artifact directory: explicit flag first, then a non-empty
/// `ARTIFACTS` value, then the default.
fn resolve_artifacts_dir(flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    match env {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_ARTIFACTS_DIR),
    }
}

pub fn run(args: Cli) -> Result<()> {
    if args.silent && (args.json || args.text) {
        return Err(anyhow::anyhow!(
            "--silent cannot be combined with --json or --text"
        ));
    }

    let cfg = build_config(&args);
    let input = args.input.as_deref().filter(|p| *p != Path::new("-"));
    let latencies = samples::read_samples(input)?;
    if latencies.is_empty() {
        return Err(anyhow::anyhow!("no latency samples in input"));
    }

    let report = report::build_report(&latencies);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    if args.text {
        let summary = text_summary::build_text_summary(&latencies)?;
        for line in summary.lines {
            println!("{line}");
        }
    }

    if cfg.write {
        // Best effort: a failed write is reported but never fails the run.
        match report::write_report(&report, &cfg.artifacts_dir) {
            Ok(path) => {
                if !args.silent {
                    eprintln!("Created a JSON perf report at {}", path.display());
                }
            }
            Err(e) => eprintln!("Error writing report: {e:#}"),
        }
    }

    Ok(())
}
