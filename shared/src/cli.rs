//! Command-line surface and logging setup common to both tools.

use std::path::PathBuf;

use clap::Args;

use crate::fs::MAX_ASSET_BYTES;

/// Arguments accepted by every embedder.
#[derive(Debug, Clone, Args)]
pub struct EmbedArgs {
    /// Binary asset to embed
    pub input: PathBuf,

    /// Header to generate; its file name (minus extension) names the array
    pub output: PathBuf,

    /// Verify the output is up to date instead of writing it
    #[arg(long)]
    pub check: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = MAX_ASSET_BYTES)]
    pub max_size: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl EmbedArgs {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            check: false,
            max_size: MAX_ASSET_BYTES,
            verbose: false,
        }
    }
}

/// Initialize logging on stderr, keeping stdout free for build systems.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
