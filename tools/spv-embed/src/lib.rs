//! SPIR-V word embedder
//!
//! Reads a shader blob as little-endian `u32` words and emits them as a
//! `const uint32_t` array. Inputs whose length is not a multiple of four are
//! rejected rather than truncated.

use std::borrow::Cow;
use std::path::Path;

use embed_shared::{EmbedError, HeaderLayout, Transcoder};

/// Bytes per emitted word.
pub const WORD_BYTES: usize = 4;

/// Header layout for word arrays.
pub const WORD_LAYOUT: HeaderLayout = HeaderLayout {
    includes: &["cstddef"],
    element_type: "uint32_t",
    per_line: 8,
    size_qualifier: "const",
};

/// Transcoder for 32-bit little-endian word arrays.
pub struct WordEmbedder;

impl Transcoder for WordEmbedder {
    type Element = u32;

    const LAYOUT: HeaderLayout = WORD_LAYOUT;

    fn decode<'a>(input: &Path, bytes: &'a [u8]) -> Result<Cow<'a, [u32]>, EmbedError> {
        decode_words(input, bytes).map(Cow::Owned)
    }
}

/// Decode `bytes` as consecutive little-endian words.
pub fn decode_words(input: &Path, bytes: &[u8]) -> Result<Vec<u32>, EmbedError> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(EmbedError::MalformedInput {
            path: input.to_path_buf(),
            len: bytes.len(),
            width: WORD_BYTES,
        });
    }

    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embed_shared::render;

    fn render_str(bytes: &[u8]) -> String {
        let (header, _) =
            render::<WordEmbedder>(Path::new("in.spv"), Path::new("test.hpp"), bytes).unwrap();
        String::from_utf8(header).unwrap()
    }

    #[test]
    fn test_single_word() {
        assert_eq!(
            render_str(&[0x01, 0x00, 0x00, 0x00]),
            "#pragma once\n\
             #include <cstddef>\n\
             const uint32_t test[] = {\n    \
             0x00000001\n\
             };\n\
             const size_t test_size = 4;\n"
        );
    }

    #[test]
    fn test_little_endian_decode() {
        let words = decode_words(Path::new("x"), &[0x03, 0x02, 0x23, 0x07, 0xff, 0, 0, 0x80])
            .unwrap();
        assert_eq!(words, vec![0x0723_0203, 0x8000_00ff]);
    }

    #[test]
    fn test_misaligned_input_rejected() {
        let err = decode_words(Path::new("bad.spv"), &[0u8; 5]).unwrap_err();
        assert!(matches!(
            err,
            EmbedError::MalformedInput {
                len: 5,
                width: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        let header = render_str(&[]);
        assert!(header.contains("const uint32_t test[] = {\n    \n};\n"));
        assert!(header.ends_with("const size_t test_size = 0;\n"));
    }

    #[test]
    fn test_size_is_byte_count_not_word_count() {
        let (header, summary) =
            render::<WordEmbedder>(Path::new("in"), Path::new("blob.hpp"), &[0u8; 12]).unwrap();
        assert_eq!(summary.elements, 3);
        assert_eq!(summary.bytes, 12);
        assert!(String::from_utf8(header)
            .unwrap()
            .contains("const size_t blob_size = 12;"));
    }

    #[test]
    fn test_wraps_after_eighth_word() {
        let bytes: Vec<u8> = (0..20u32).flat_map(u32::to_le_bytes).collect();
        let header = render_str(&bytes);
        let rows: Vec<&str> = header.lines().filter(|l| l.starts_with("    ")).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].matches("0x").count(), 8);
        assert!(rows[0].ends_with("0x00000007, "));
        assert!(rows[1].starts_with("    0x00000008"));
        assert_eq!(rows[2].matches("0x").count(), 4);
    }
}
