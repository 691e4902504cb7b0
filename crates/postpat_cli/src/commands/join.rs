//! Join command - Join a collection folder into a collection file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use postpat_render::{JoinOptions, Joiner, UuidGenerator};

#[derive(Args)]
pub struct JoinArgs {
    /// Path to the collection folder
    directory: PathBuf,

    /// Directory the collection file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Handlebars template to render instead of the bundled v2.1 template
    #[arg(short, long)]
    template: Option<PathBuf>,
}

pub fn execute(args: JoinArgs) -> Result<()> {
    info!("Sourcing collection from: {:?}", args.directory);

    let options = JoinOptions::new()
        .with_output_dir(&args.output_dir)
        .with_template(args.template);
    let ids = UuidGenerator;
    let result = Joiner::new(options, &ids)
        .join(&args.directory)
        .with_context(|| format!("Failed to join {}", args.directory.display()))?;

    println!(
        "✅ Joined {} requests into {}",
        result.items,
        result.output_path.display()
    );

    Ok(())
}
