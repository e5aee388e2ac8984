use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Works out the edits needed to release a snapshot artifact across a workspace.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Command,
    /// Workspace root directory
    #[clap(short, long, default_value = ".")]
    pub root: PathBuf,
    /// Toml file listing the workspace projects, relative to the root
    #[clap(
        short,
        long,
        default_value = "gavrelease.toml",
        env = "GAVRELEASE_GRAPH_FILE"
    )]
    pub graph_file: PathBuf,
}

#[derive(Debug, Parser)]
pub enum Command {
    ///Reports every project and descriptor location a release of the given GAV impacts
    Release {
        /// Coordinate to release, as group:artifact:version
        gav: String,
        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    ///Lists the version changes to run, one per project needing a release
    Tasks {
        /// Coordinate to release, as group:artifact:version
        gav: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
}
