use crate::output::{print_diff, print_json};
use actgen_core::discover::Discovery;
use actgen_core::generate::{FileStatus, GenerateOptions, Mode, Report};
use anyhow::Context;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(
    out_dir: Option<PathBuf>,
    inputs: Vec<PathBuf>,
    check: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mode = if check { Mode::Check } else { Mode::Write };
    let opts = GenerateOptions {
        out_dir,
        inputs,
        mode,
    };
    let plan = opts.plan()?;
    log_discovery(&plan.discovery);

    let report = plan.execute().context("generation failed")?;

    if json {
        print_json(&report)?;
    } else {
        match mode {
            Mode::Write => print_written(&report),
            Mode::Check => print_check(&report)?,
        }
    }

    if !report.is_clean() {
        let outdated = report.count(FileStatus::Stale) + report.count(FileStatus::Missing);
        anyhow::bail!("{outdated} generated file(s) out of date; rerun without --check");
    }

    Ok(())
}

fn log_discovery(discovery: &Discovery) {
    for path in &discovery.missing {
        tracing::warn!(path = %path.display(), "file or directory does not exist");
    }
    for path in &discovery.ignored {
        tracing::info!(path = %path.display(), "ignoring non-JSON/YAML file");
    }
    tracing::debug!(count = discovery.files.len(), "definition files found");
}

// ---------------------------------------------------------------------------
// Human output
// ---------------------------------------------------------------------------

fn print_written(report: &Report) {
    println!(
        "Generated {} files to {}",
        report.files.len(),
        report.out_dir.display()
    );
    for file in &report.files {
        println!("  - {}", file.path.display());
    }
}

fn print_check(report: &Report) -> anyhow::Result<()> {
    for file in &report.files {
        println!("[{}] {}", file.status, file.path.display());
        if file.status == FileStatus::Stale {
            let on_disk = std::fs::read_to_string(&file.path)
                .with_context(|| format!("failed to read {}", file.path.display()))?;
            print_diff(&on_disk, &file.content);
        }
    }

    if report.is_clean() {
        println!("All {} generated files are up to date.", report.files.len());
    }
    Ok(())
}
