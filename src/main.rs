use anyhow::Context;
use clap::Parser;
use content_migrate::logging;
use content_migrate::migrator::Migrator;
use content_migrate::shared::config::load_settings;
use content_migrate::shared::path::resolve_root;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "content_migrate", version)]
#[command(about = "Copy legacy markdown into the new content layout", long_about = None)]
struct Args {
    /// Migration root holding the mapping document and both content trees.
    /// Defaults to the current directory.
    root: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = load_settings().context("Failed to load configuration")?;
    logging::init(&settings.logging)?;

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let root = resolve_root(args.root.as_deref(), &cwd);
    info!("Starting content migration in {}", root.display());

    let migrator = Migrator::new(root, settings.migration);
    let report = migrator.run().context("Migration aborted")?;

    println!("{}", report);
    Ok(())
}
