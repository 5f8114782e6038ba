use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use icongen::{GeneratorConfig, IconSetKind};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Generate TSX icon components from the Lucide and Simple Icons SVG sets.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory that relative input and output paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON file listing the icon sets to generate. Defaults to the built-in
    /// Lucide and Simple Icons sets.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only generate the given set. May be repeated.
    #[arg(long, value_enum)]
    only: Vec<IconSetKind>,
}

async fn run(args: Args) -> icongen::Result<()> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let config = config.retain_kinds(&args.only);

    let reports = icongen::generate(&args.root, &config).await?;
    let total: usize = reports.iter().map(|report| report.icons).sum();
    tracing::info!(sets = reports.len(), icons = total, "done");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icongen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
