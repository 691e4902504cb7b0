//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod join;
pub mod split;

/// postpat - split Postman collections into reviewable files and join them back
#[derive(Parser)]
#[command(name = "postpat")]
#[command(version, about = "postpat - Postman collection helper")]
#[command(long_about = r#"
postpat eases day to day work with Postman collections under source control.

A collection file is split into a folder named after the collection, with one
file per request plus files for the collection info, auth, events and
variables. The folder can be joined back into an importable collection file.

COMMANDS:
  split  → Split a collection file into a collection folder
  join   → Join a collection folder into Test-<name>.postman_collection.json

EXIT CODES:
  0 - Success
  1 - Split or join failed
  2 - Invalid arguments
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split an existing collection into request files
    #[command(long_about = "Split converts an existing Postman collection file into a folder.\n\n\
        The collection name is used to name the folder. The file name for each\n\
        request is Request:<Request Name>:<HTTP Method>.")]
    Split(split::SplitArgs),

    /// Join a split collection folder into an executable collection
    Join(join::JoinArgs),
}
