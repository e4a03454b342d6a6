//! Shared pieces of the asset embedders.
//!
//! `spv-to-header` and `ttf-to-header` turn a binary asset into a C++ header
//! holding the asset as a constant array plus its byte length. Everything
//! except the element decoding lives here:
//!
//! - [`ident`] derives the array identifier from the output file name
//! - [`header`] writes the header text with fixed column wrapping
//! - [`fs`] reads the input and replaces the output atomically
//! - [`embed`] ties those together behind the [`Transcoder`] trait

pub mod cli;
pub mod embed;
pub mod error;
pub mod fs;
pub mod header;
pub mod ident;

pub use cli::{EmbedArgs, init_logging};
pub use embed::{Summary, Transcoder, render, run};
pub use error::EmbedError;
pub use header::{HeaderLayout, HexLiteral};
pub use ident::identifier_for;
