//! C++ header emission.
//!
//! Both embedders share one output shape and differ only in the element
//! type, literal width, wrap column and the qualifier on the size constant.
//! Those knobs live in a [`HeaderLayout`]; each tool owns a `static` instance.
//!
//! ```text
//! #pragma once
//! #include <cstddef>
//! const uint32_t shader[] = {
//!     0x07230203, 0x00010000, ...
//! };
//! const size_t shader_size = 1234;
//! ```

use std::io::{self, Write};

use crate::ident::size_identifier;

/// Indentation of every array row.
const ROW_INDENT: &str = "    ";

/// Header layout for one embedder.
#[derive(Debug, Clone, Copy)]
pub struct HeaderLayout {
    /// System headers pulled in after `#pragma once`, in order.
    pub includes: &'static [&'static str],

    /// C++ element type of the array (e.g. "uint32_t").
    pub element_type: &'static str,

    /// Number of literals per row before a line break.
    pub per_line: usize,

    /// Qualifier in front of `size_t <name>_size` ("const" or "constexpr").
    pub size_qualifier: &'static str,
}

/// A value that can be written as a fixed-width lowercase hex literal.
pub trait HexLiteral: Copy {
    /// Size of one element in the source asset, in bytes.
    const WIDTH: usize;

    fn write_literal<W: Write>(self, w: &mut W) -> io::Result<()>;
}

impl HexLiteral for u8 {
    const WIDTH: usize = 1;

    fn write_literal<W: Write>(self, w: &mut W) -> io::Result<()> {
        write!(w, "0x{self:02x}")
    }
}

impl HexLiteral for u32 {
    const WIDTH: usize = 4;

    fn write_literal<W: Write>(self, w: &mut W) -> io::Result<()> {
        write!(w, "0x{self:08x}")
    }
}

/// Write a complete header for `values` to `w`.
///
/// `byte_len` is the size of the original asset and is emitted verbatim as
/// `<name>_size`, independent of the element width.
pub fn write_header<W, T>(
    w: &mut W,
    layout: &HeaderLayout,
    name: &str,
    values: &[T],
    byte_len: usize,
) -> io::Result<()>
where
    W: Write,
    T: HexLiteral,
{
    writeln!(w, "#pragma once")?;
    for include in layout.includes {
        writeln!(w, "#include <{include}>")?;
    }

    write!(w, "const {} {}[] = {{\n{ROW_INDENT}", layout.element_type, name)?;

    let last = values.len().saturating_sub(1);
    let mut column = 0;
    for (i, value) in values.iter().enumerate() {
        if column == layout.per_line {
            write!(w, "\n{ROW_INDENT}")?;
            column = 0;
        }
        value.write_literal(w)?;
        column += 1;
        if i != last {
            write!(w, ", ")?;
        }
    }

    write!(w, "\n}};\n")?;
    writeln!(
        w,
        "{} size_t {} = {};",
        layout.size_qualifier,
        size_identifier(name),
        byte_len
    )?;

    Ok(())
}

/// Render a header into memory, used by `--check` and tests.
pub fn render_header<T: HexLiteral>(
    layout: &HeaderLayout,
    name: &str,
    values: &[T],
    byte_len: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(64 + values.len() * (2 * T::WIDTH + 4));
    write_header(&mut out, layout, name, values, byte_len)
        .expect("writing to a Vec<u8> cannot fail");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: HeaderLayout = HeaderLayout {
        includes: &["cstddef"],
        element_type: "uint32_t",
        per_line: 8,
        size_qualifier: "const",
    };

    const BYTES: HeaderLayout = HeaderLayout {
        includes: &["cstddef", "cstdint"],
        element_type: "unsigned char",
        per_line: 12,
        size_qualifier: "constexpr",
    };

    fn render<T: HexLiteral>(layout: &HeaderLayout, values: &[T], byte_len: usize) -> String {
        String::from_utf8(render_header(layout, "test", values, byte_len)).unwrap()
    }

    #[test]
    fn test_byte_header_exact() {
        let header = render(&BYTES, &[0x00u8, 0x01, 0xff], 3);
        assert_eq!(
            header,
            "#pragma once\n\
             #include <cstddef>\n\
             #include <cstdint>\n\
             const unsigned char test[] = {\n    \
             0x00, 0x01, 0xff\n\
             };\n\
             constexpr size_t test_size = 3;\n"
        );
    }

    #[test]
    fn test_word_header_exact() {
        let header = render(&WORDS, &[1u32], 4);
        assert_eq!(
            header,
            "#pragma once\n\
             #include <cstddef>\n\
             const uint32_t test[] = {\n    \
             0x00000001\n\
             };\n\
             const size_t test_size = 4;\n"
        );
    }

    #[test]
    fn test_empty_array() {
        let header = render::<u8>(&BYTES, &[], 0);
        assert!(header.contains("const unsigned char test[] = {\n    \n};\n"));
        assert!(header.ends_with("constexpr size_t test_size = 0;\n"));
    }

    #[test]
    fn test_wraps_after_per_line() {
        let values: Vec<u8> = (0..20).collect();
        let header = render(&BYTES, &values, values.len());
        let rows: Vec<&str> = header
            .lines()
            .filter(|line| line.starts_with(ROW_INDENT))
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].matches("0x").count(), 12);
        assert!(rows[0].ends_with("0x0b, "));
        assert!(rows[1].starts_with("    0x0c, "));
        assert!(rows[1].ends_with("0x13"));
    }

    #[test]
    fn test_exact_multiple_has_no_blank_row() {
        let values = [0xdeadbeefu32; 16];
        let header = render(&WORDS, &values, 64);
        let rows = header.lines().filter(|l| l.starts_with(ROW_INDENT)).count();
        assert_eq!(rows, 2);
        assert!(!header.contains(", \n};"));
    }

    #[test]
    fn test_literals_are_lowercase_fixed_width() {
        let header = render(&WORDS, &[0xABCDu32], 4);
        assert!(header.contains("0x0000abcd"));
    }
}
