//! spv-to-header - embed a SPIR-V blob in a C++ header
//!
//! ```text
//! spv-to-header shader.vert.spv build/shader_vert.hpp
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use embed_shared::EmbedArgs;
use spv_embed::WordEmbedder;

#[derive(Parser)]
#[command(name = "spv-to-header")]
#[command(about = "Embed a SPIR-V shader as a uint32_t array in a C++ header")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    embed: EmbedArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    embed_shared::init_logging(cli.embed.verbose);

    let summary = embed_shared::run::<WordEmbedder>(&cli.embed)
        .with_context(|| format!("Failed to embed {}", cli.embed.input.display()))?;
    tracing::debug!("{} words in {}", summary.elements, summary.name);

    Ok(())
}
