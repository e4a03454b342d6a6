//! Driver shared by both embedders: read, decode, name, emit.

use std::borrow::Cow;
use std::path::Path;

use crate::cli::EmbedArgs;
use crate::error::EmbedError;
use crate::fs::{check_contents, read_file_with_limit, write_atomic};
use crate::header::{HeaderLayout, HexLiteral, render_header, write_header};
use crate::ident::identifier_for;

/// Converts raw asset bytes into the elements of the generated array.
pub trait Transcoder {
    type Element: HexLiteral;

    /// Layout of the header this transcoder produces.
    const LAYOUT: HeaderLayout;

    /// Split `bytes` into array elements. `input` is only used for errors.
    fn decode<'a>(input: &Path, bytes: &'a [u8]) -> Result<Cow<'a, [Self::Element]>, EmbedError>;
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub name: String,
    pub elements: usize,
    pub bytes: usize,
}

/// Array identifier and elements for `bytes` headed for `output`.
fn prepare<'a, T: Transcoder>(
    input: &Path,
    output: &Path,
    bytes: &'a [u8],
) -> Result<(String, Cow<'a, [T::Element]>), EmbedError> {
    let name = identifier_for(output)?;
    let elements = T::decode(input, bytes)?;
    Ok((name, elements))
}

/// Render the header for `bytes` as if it were written to `output`.
pub fn render<T: Transcoder>(
    input: &Path,
    output: &Path,
    bytes: &[u8],
) -> Result<(Vec<u8>, Summary), EmbedError> {
    let (name, elements) = prepare::<T>(input, output, bytes)?;
    let header = render_header(&T::LAYOUT, &name, &elements, bytes.len());
    let summary = Summary {
        name,
        elements: elements.len(),
        bytes: bytes.len(),
    };
    Ok((header, summary))
}

/// Run one embed invocation as described by `args`.
///
/// With `args.check` set nothing is written; the freshly rendered header is
/// compared against the existing output instead.
pub fn run<T: Transcoder>(args: &EmbedArgs) -> Result<Summary, EmbedError> {
    let bytes = read_file_with_limit(&args.input, args.max_size)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), args.input.display());

    if args.check {
        let (header, summary) = render::<T>(&args.input, &args.output, &bytes)?;
        check_contents(&args.output, &header)?;
        tracing::info!("{} is up to date", args.output.display());
        return Ok(summary);
    }

    let (name, elements) = prepare::<T>(&args.input, &args.output, &bytes)?;
    write_atomic(&args.output, |w| {
        write_header(w, &T::LAYOUT, &name, &elements, bytes.len())
    })?;

    tracing::info!(
        "Embedded {} -> {} ({} bytes as {})",
        args.input.display(),
        args.output.display(),
        bytes.len(),
        name
    );

    Ok(Summary {
        name,
        elements: elements.len(),
        bytes: bytes.len(),
    })
}
