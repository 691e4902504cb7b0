//! Split command - Split a collection file into a folder.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use postpat_collection::{SplitOptions, Splitter};

#[derive(Args)]
pub struct SplitArgs {
    /// Path to the collection file
    collection: PathBuf,

    /// Directory in which the collection folder is created
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

pub fn execute(args: SplitArgs) -> Result<()> {
    info!("Reading collection file: {:?}", args.collection);

    let splitter = Splitter::new(SplitOptions::new().with_output_dir(&args.output_dir));
    let result = splitter
        .split_file(&args.collection)
        .with_context(|| format!("Failed to split {}", args.collection.display()))?;

    if result.collisions() > 0 {
        warn!(
            "{} request(s) shared a name and method with a later request and were overwritten",
            result.collisions()
        );
    }

    println!(
        "✅ Split {} requests into {}",
        result.items,
        result.directory.display()
    );

    Ok(())
}
