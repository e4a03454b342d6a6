//! ttf-to-header - embed a font file in a C++ header
//!
//! ```text
//! ttf-to-header Roboto-Regular.ttf build/roboto.hpp
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use embed_shared::EmbedArgs;
use font_embed::ByteEmbedder;

#[derive(Parser)]
#[command(name = "ttf-to-header")]
#[command(about = "Embed a font (or any binary file) as a byte array in a C++ header")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    embed: EmbedArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    embed_shared::init_logging(cli.embed.verbose);

    let summary = embed_shared::run::<ByteEmbedder>(&cli.embed)
        .with_context(|| format!("Failed to embed {}", cli.embed.input.display()))?;
    tracing::debug!("{} bytes in {}", summary.elements, summary.name);

    Ok(())
}
