mod cmd;
mod output;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actgen",
    version,
    about = "Generate TypeScript action creators from JSON/YAML action group definitions"
)]
struct Cli {
    /// Directory that receives one <group>.actions.ts file per action group
    #[arg(short = 'o', long = "out-dir", visible_alias = "outDir", env = "ACTGEN_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Compare generated output with the files on disk instead of writing
    #[arg(long)]
    check: bool,

    /// Output the run report as JSON
    #[arg(long)]
    json: bool,

    /// Definition files (.json, .yaml, .yml) or directories to search
    paths: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = cmd::generate::run(cli.out_dir, cli.paths, cli.check, cli.json);

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
