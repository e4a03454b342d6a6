//! Font byte embedder
//!
//! Emits the input verbatim as a `const unsigned char` array, one element per
//! byte, so element count and `<name>_size` always agree.

use std::borrow::Cow;
use std::path::Path;

use embed_shared::{EmbedError, HeaderLayout, Transcoder};

/// Header layout for byte arrays.
pub const BYTE_LAYOUT: HeaderLayout = HeaderLayout {
    includes: &["cstddef", "cstdint"],
    element_type: "unsigned char",
    per_line: 12,
    size_qualifier: "constexpr",
};

/// Transcoder for raw byte arrays.
pub struct ByteEmbedder;

impl Transcoder for ByteEmbedder {
    type Element = u8;

    const LAYOUT: HeaderLayout = BYTE_LAYOUT;

    fn decode<'a>(_input: &Path, bytes: &'a [u8]) -> Result<Cow<'a, [u8]>, EmbedError> {
        Ok(Cow::Borrowed(bytes))
    }
}
