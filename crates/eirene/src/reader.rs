//! Reader for the structured text blocks of EIRENE output files
//!
//! # Quickstart
//!
//! The simplest method for reading a single block is the [read_block()]
//! convenience function:
//!
//! ```rust
//! # use edgetools_eirene::read_block;
//! # use std::io::Cursor;
//! let mut stream = Cursor::new("1.0 2.0\n*eirene comment\n3.0 4.0\n");
//!
//! // 1 species, 2 poloidal cells, 2 radial cells
//! let block = read_block(&mut stream, 1, 2, 2).unwrap();
//! assert_eq!(block.shape(), [1, 2, 2]);
//! assert_eq!(block.get(0, 1, 0), Some(3.0));
//! ```
//!
//! Files hold many blocks back to back with nothing in the file to say where
//! one ends and the next begins. A [BlockReader] keeps hold of the stream for
//! a sequence of reads in file order.
//!
//! ```rust
//! # use edgetools_eirene::{BlockReader, BlockLayout, Dimensions, Overflow};
//! # use std::io::Cursor;
//! let text = "*eirene density\n1 2 3 4\n*eirene temperature\n5 6\n";
//! let mut reader = BlockReader::new(Cursor::new(text)).with_overflow(Overflow::Reject);
//!
//! let layout = vec![
//!     BlockLayout::new("density", 1, 2, 2).unwrap(),
//!     BlockLayout::new("temperature", 2, 1, 1).unwrap(),
//! ];
//! let blocks = reader.read_layout(&layout).unwrap();
//! assert_eq!(blocks[1].block.values(), &[5.0, 6.0]);
//! ```
//!
//! # Format notes
//!
//! **Comment lines are skipped entirely**
//!
//! > Any line whose first token is exactly `*eirene` carries no data, even if
//! > numbers follow the marker on the same line.
//!
//! **Line boundaries mean nothing**
//!
//! > Tokens are accumulated across as many lines as it takes. Blank lines
//! > contribute nothing.
//!
//! **Blocks ending mid-line**
//!
//! > If a block finishes part way through a line, what happens to the rest of
//! > that line is decided by the [Overflow] policy. The stream itself only
//! > ever advances by whole lines.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// crate modules
use crate::block::{Dimensions, StructuredBlock};
use crate::error::{Error, Result};
use crate::parsers;
use crate::tokens::{Token, TokenStream};

// external crates
use log::{debug, info, warn};

/// What to do with tokens left on the final line of a block
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Drop the remaining tokens of the line with a warning
    #[default]
    Discard,
    /// Keep the remaining tokens as the start of the next block
    Retain,
    /// Fail with [Error::MisalignedBlock]
    Reject,
}

/// Name and shape of one block in a multi-block file
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    /// Physical quantity held in the block, e.g. `"atom density"`
    pub name: String,
    /// Shape of the block
    pub dimensions: Dimensions,
}

impl BlockLayout {
    /// Validated layout entry from the `ns, nx, ny` dimensions
    pub fn new(
        name: impl Into<String>,
        species: usize,
        poloidal: usize,
        radial: usize,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            dimensions: Dimensions::new(species, poloidal, radial)?,
        })
    }
}

/// A block read against a [BlockLayout] entry
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBlock {
    /// Name taken from the layout
    pub name: String,
    /// The data
    pub block: StructuredBlock,
}

/// Reads consecutive blocks from one line-oriented stream
///
/// The reader never opens, seeks, or closes anything. It is handed a stream
/// already positioned at the first line of a block and reads forward.
///
/// Minimal example:
/// ```rust
/// # use edgetools_eirene::{BlockReader, Dimensions};
/// # use std::io::Cursor;
/// let mut reader = BlockReader::new(Cursor::new("1.0\n2.0 3.0\n4.0\n"));
/// let block = reader.read_block(Dimensions::new(1, 2, 2).unwrap()).unwrap();
/// assert_eq!(block.values(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug)]
pub struct BlockReader<R> {
    /// Source of data tokens
    tokens: TokenStream<R>,
    /// Policy for blocks that end mid-line
    overflow: Overflow,
}

impl<R: BufRead> BlockReader<R> {
    /// Wrap a stream with the default [Overflow::Discard] policy
    pub fn new(stream: R) -> Self {
        Self {
            tokens: TokenStream::new(stream),
            overflow: Overflow::default(),
        }
    }

    /// Set the policy for blocks that end part way through a line
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Current overflow policy
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Read exactly one block of the given shape
    ///
    /// Exactly `ns*nx*ny` data tokens are consumed. All of them are collected
    /// before any are parsed, so a stream that runs out early is always
    /// reported as [Error::TruncatedBlock] and never returns a partial block.
    pub fn read_block(&mut self, dimensions: Dimensions) -> Result<StructuredBlock> {
        let expected = dimensions.target_count()?;
        debug!("Reading block {dimensions} ({expected} values)");

        let tokens = self.collect_tokens(expected)?;
        let values = Self::parse_tokens(&tokens)?;
        self.resolve_overflow()?;

        StructuredBlock::from_values(dimensions, values)
    }

    /// Read a sequence of blocks in file order
    pub fn read_layout(&mut self, layout: &[BlockLayout]) -> Result<Vec<NamedBlock>> {
        layout
            .iter()
            .map(|entry| {
                debug!("Block \"{}\"", entry.name);
                Ok(NamedBlock {
                    name: entry.name.clone(),
                    block: self.read_block(entry.dimensions)?,
                })
            })
            .collect()
    }

    /// Physical line number of the last line consumed
    pub fn line_number(&self) -> usize {
        self.tokens.line_number()
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> R {
        self.tokens.into_inner()
    }

    /// Pull tokens until the block is complete
    fn collect_tokens(&mut self, expected: usize) -> Result<Vec<Token>> {
        // dimensions come from the caller, do not trust them for allocation
        let mut tokens = Vec::with_capacity(expected.min(1 << 16));
        while tokens.len() < expected {
            match self.tokens.next_token()? {
                Some(token) => tokens.push(token),
                None => {
                    return Err(Error::TruncatedBlock {
                        expected,
                        found: tokens.len(),
                    })
                }
            }
        }
        Ok(tokens)
    }

    /// Every token must be a valid number, position is within the block
    fn parse_tokens(tokens: &[Token]) -> Result<Vec<f64>> {
        tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                parsers::token_value(&token.text).ok_or_else(|| Error::MalformedToken {
                    token: token.text.clone(),
                    position,
                    line: token.line,
                })
            })
            .collect()
    }

    /// Apply the overflow policy to whatever is left on the last line
    fn resolve_overflow(&mut self) -> Result<()> {
        if self.tokens.at_line_boundary() {
            return Ok(());
        }

        let line = self.tokens.line_number();
        match self.overflow {
            Overflow::Retain => Ok(()),
            Overflow::Discard => {
                let extra = self.tokens.take_overflow();
                warn!(
                    "Discarding {} trailing tokens on line {line} after end of block",
                    extra.len()
                );
                Ok(())
            }
            Overflow::Reject => Err(Error::MisalignedBlock {
                extra: self.tokens.take_overflow().len(),
                line,
            }),
        }
    }
}

/// Read one block from a stream positioned at its first line
///
/// Returns a [StructuredBlock] of shape `[species, radial, poloidal]`.
///
/// - `stream` - Any buffered reader, left after the last line consumed
/// - `species_count` - Number of species (ns)
/// - `poloidal_count` - Number of poloidal cells (nx)
/// - `radial_count` - Number of radial cells (ny)
///
/// Any tokens after the end of the block on its final line are discarded.
/// Use a [BlockReader] to choose a different [Overflow] policy.
///
/// ```rust
/// # use edgetools_eirene::read_block;
/// # use std::io::Cursor;
/// let mut stream = Cursor::new("1.0\n2.0 3.0\n4.0\n");
/// let block = read_block(&mut stream, 1, 2, 2).unwrap();
/// assert_eq!(block.get(0, 0, 1), Some(2.0));
/// ```
pub fn read_block<R: BufRead>(
    stream: &mut R,
    species_count: usize,
    poloidal_count: usize,
    radial_count: usize,
) -> Result<StructuredBlock> {
    let dimensions = Dimensions::new(species_count, poloidal_count, radial_count)?;
    BlockReader::new(stream).read_block(dimensions)
}

/// Read a sequence of blocks from the file at `path`
///
/// The file is opened, read in layout order, and closed again before
/// returning, whether or not the read succeeded.
///
/// ```rust, no_run
/// # use edgetools_eirene::{read_blocks_from_file, BlockLayout};
/// let layout = vec![BlockLayout::new("atom density", 1, 96, 36).unwrap()];
/// let blocks = read_blocks_from_file("path/to/fort.44", &layout).unwrap();
/// ```
pub fn read_blocks_from_file<P: AsRef<Path>>(
    path: P,
    layout: &[BlockLayout],
) -> Result<Vec<NamedBlock>> {
    info!("Reading {}", path.as_ref().display());
    let file = File::open(path)?;
    BlockReader::new(BufReader::new(file)).read_layout(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn dims(ns: usize, nx: usize, ny: usize) -> Dimensions {
        Dimensions::new(ns, nx, ny).unwrap()
    }

    #[test]
    fn discard_leaves_cursor_after_line() {
        let mut stream = Cursor::new("1 2 3\n4 5\nnext\n");
        let block = read_block(&mut stream, 1, 2, 2).unwrap();
        assert_eq!(block.values(), &[1.0, 2.0, 3.0, 4.0]);

        let mut rest = String::new();
        stream.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "next\n");
    }

    #[test]
    fn retain_carries_into_next_block() {
        let mut reader =
            BlockReader::new(Cursor::new("1 2 3\n4 5\n6\n")).with_overflow(Overflow::Retain);
        let first = reader.read_block(dims(1, 2, 2)).unwrap();
        let second = reader.read_block(dims(1, 2, 1)).unwrap();
        assert_eq!(first.values(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(second.values(), &[5.0, 6.0]);
    }

    #[test]
    fn reject_misaligned_block() {
        let mut reader =
            BlockReader::new(Cursor::new("1 2 3\n4 5\n")).with_overflow(Overflow::Reject);
        assert!(matches!(
            reader.read_block(dims(1, 2, 2)),
            Err(Error::MisalignedBlock { extra: 1, line: 2 })
        ));
    }

    #[test]
    fn aligned_block_passes_reject() {
        let mut reader =
            BlockReader::new(Cursor::new("1 2\n3 4\n")).with_overflow(Overflow::Reject);
        assert!(reader.read_block(dims(1, 2, 2)).is_ok());
    }

    #[test]
    fn malformed_reports_block_position() {
        let mut stream = Cursor::new("*eirene x\n1.0 2.0\n3.0 oops\n");
        match read_block(&mut stream, 1, 2, 2) {
            Err(Error::MalformedToken {
                token,
                position,
                line,
            }) => {
                assert_eq!(token, "oops");
                assert_eq!(position, 3);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn zero_dimension() {
        let mut stream = Cursor::new("1.0\n");
        assert!(matches!(
            read_block(&mut stream, 1, 0, 1),
            Err(Error::InvalidDimensions(_))
        ));
    }
}
