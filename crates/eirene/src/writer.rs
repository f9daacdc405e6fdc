//! Write operations for block data

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::block::StructuredBlock;
use crate::error::Result;
use crate::parsers::COMMENT_MARKER;
use crate::reader::NamedBlock;

// edgetools modules
use edgetools_utils::ValueExt;

// external crates
use textwrap::{Options, WordSplitter};

/// Line width used when wrapping values
const LINE_WIDTH: usize = 80;

/// Mantissa digits after the point, 17 significant digits round-trip any f64
const PRECISION: usize = 16;

/// Write blocks back out in the line-oriented EIRENE text format
///
/// Each block is preceded by a `*eirene <name>` comment line and its values
/// are written in order, in full precision scientific notation, wrapped to
/// 80 characters. Reading the output back with the same layout gives the
/// exact same values, non-finite ones included.
///
/// ```rust
/// # use edgetools_eirene::{read_block, write_ascii, NamedBlock};
/// # use std::io::Cursor;
/// let mut stream = Cursor::new("1 2 3 4");
/// let block = read_block(&mut stream, 1, 2, 2).unwrap();
/// let named = NamedBlock { name: "density".into(), block };
///
/// let mut buffer = Vec::new();
/// write_ascii(&mut buffer, &[named]).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().starts_with("*eirene density\n"));
/// ```
pub fn write_ascii<W: Write>(writer: &mut W, blocks: &[NamedBlock]) -> Result<()> {
    // exponents contain hyphens, tokens must never be split
    let options = Options::new(LINE_WIDTH)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);

    for named in blocks {
        writeln!(writer, "{COMMENT_MARKER} {}", named.name)?;

        let s = named
            .block
            .values()
            .iter()
            .map(|v| v.sci(PRECISION, 2))
            .collect::<Vec<String>>()
            .join(" ");

        writeln!(writer, "{}", textwrap::fill(&s, &options))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a [StructuredBlock] to a JSON file
///
/// A direct serialisation of the dimensions and the flat row-major value
/// buffer.
///
/// ```rust, no_run
/// # use edgetools_eirene::{read_block, write_json};
/// # use std::io::Cursor;
/// let block = read_block(&mut Cursor::new("1 2 3 4"), 1, 2, 2).unwrap();
/// write_json(&block, "./block.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(block: &StructuredBlock, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, block)?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
