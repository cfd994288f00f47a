use std::path::PathBuf;

use clap::Parser;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "outpost", about = "Minimal HTTP/1.1 file server")]
pub struct Args {
    /// Directory served by the /files routes
    #[arg(long = "directory", default_value = "/tmp")]
    pub directory: PathBuf,

    /// Address to bind the listener on
    #[arg(long = "listen", default_value = "0.0.0.0:4221")]
    pub listen: String,
}

/// Resolved server configuration, shared read-only by all connections.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub files_dir: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Validates the files directory before the listener ever binds.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        if !args.directory.is_dir() {
            anyhow::bail!("directory {} does not exist", args.directory.display());
        }

        Ok(Self {
            listen_addr: args.listen,
            files_dir: args.directory,
        })
    }
}
