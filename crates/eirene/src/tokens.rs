//! Pull-based source of data tokens
//!
//! Blocks are written without regard for line boundaries, so the reader
//! should never need to care about them either. [TokenStream] lazily reads
//! physical lines and hands out one whitespace-delimited data token at a
//! time, dropping comment and blank lines on the way.

// standard library
use std::collections::VecDeque;
use std::io::BufRead;

// crate modules
use crate::error::Result;
use crate::parsers;

// external crates
use log::trace;

/// A single data token and the physical line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Raw text of the token
    pub text: String,
    /// 1-based physical line number in the stream
    pub line: usize,
}

/// Lazily yields data tokens from successive lines of a stream
///
/// The stream cursor only ever advances by whole lines. Tokens of the most
/// recently read line that have not been pulled yet remain pending, and it is
/// up to the caller to decide what to do with them once a block is complete.
#[derive(Debug)]
pub struct TokenStream<R> {
    /// Underlying line-oriented stream
    inner: R,
    /// Tokens from the last line read that are not yet consumed
    pending: VecDeque<String>,
    /// Reusable line buffer
    buffer: String,
    /// Number of physical lines read so far
    line: usize,
    /// Number of comment lines skipped so far
    comments: usize,
}

impl<R: BufRead> TokenStream<R> {
    /// Wrap any buffered reader positioned at the first line of interest
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            buffer: String::new(),
            line: 0,
            comments: 0,
        }
    }

    /// Pull the next data token, reading more lines only when required
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        while self.pending.is_empty() {
            if !self.read_line()? {
                return Ok(None);
            }
        }

        Ok(self.pending.pop_front().map(|text| Token {
            text,
            line: self.line,
        }))
    }

    /// True if the last token handed out was the final one on its line
    pub fn at_line_boundary(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain the unconsumed tokens of the current line
    pub fn take_overflow(&mut self) -> Vec<String> {
        self.pending.drain(..).collect()
    }

    /// Physical line number of the most recently read line
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Number of comment lines skipped so far
    pub fn comments_skipped(&self) -> usize {
        self.comments
    }

    /// Give back the underlying stream
    ///
    /// Any pending tokens are lost, the cursor stays after the last line read.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read one physical line into the pending queue
    ///
    /// Returns false at the end of the stream. Comment and blank lines are
    /// consumed but contribute no tokens.
    fn read_line(&mut self) -> Result<bool> {
        self.buffer.clear();
        if self.inner.read_line(&mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.line += 1;

        if parsers::is_comment(&self.buffer) {
            trace!("Skipping comment on line {}", self.line);
            self.comments += 1;
            return Ok(true);
        }

        self.pending
            .extend(self.buffer.split_whitespace().map(String::from));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(text: &str) -> Vec<(String, usize)> {
        let mut stream = TokenStream::new(Cursor::new(text));
        let mut tokens = Vec::new();
        while let Some(token) = stream.next_token().unwrap() {
            tokens.push((token.text, token.line));
        }
        tokens
    }

    #[test]
    fn tokens_cross_lines() {
        let tokens = collect("1.0\n2.0 3.0\n4.0\n");
        let text: Vec<&str> = tokens.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(text, vec!["1.0", "2.0", "3.0", "4.0"]);
        assert_eq!(tokens[2].1, 2);
        assert_eq!(tokens[3].1, 3);
    }

    #[test]
    fn comments_and_blanks_skipped() {
        let mut stream = TokenStream::new(Cursor::new(
            "*eirene header 1.0 2.0\n\n   \n5.0\n*eirene trailer\n",
        ));
        let token = stream.next_token().unwrap().unwrap();
        assert_eq!(token.text, "5.0");
        assert_eq!(token.line, 4);
        assert!(stream.next_token().unwrap().is_none());
        assert_eq!(stream.comments_skipped(), 2);
    }

    #[test]
    fn overflow_of_current_line() {
        let mut stream = TokenStream::new(Cursor::new("1 2 3\n4\n"));
        stream.next_token().unwrap();
        assert!(!stream.at_line_boundary());
        assert_eq!(stream.take_overflow(), vec!["2", "3"]);
        assert!(stream.at_line_boundary());
        assert_eq!(stream.next_token().unwrap().unwrap().text, "4");
    }

    #[test]
    fn no_trailing_newline() {
        assert_eq!(collect("1 2").len(), 2);
    }
}
