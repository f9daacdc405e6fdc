//! Streaming reader for structured EIRENE output blocks
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod block;
mod error;
mod parsers;
mod writer;

pub mod reader;
pub mod tokens;

// Inline anything important for a nice public API
#[doc(inline)]
pub use block::{Dimensions, StructuredBlock};

#[doc(inline)]
pub use reader::{
    read_block, read_blocks_from_file, BlockLayout, BlockReader, NamedBlock, Overflow,
};

#[doc(inline)]
pub use parsers::COMMENT_MARKER;

#[doc(inline)]
pub use writer::{write_ascii, write_json};

#[doc(inline)]
pub use error::{Error, Result};
