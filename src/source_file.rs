//! Source file representation with offset-to-position mapping.
//!
//! Findings carry byte spans; consumers need file + line + column. The
//! line-start table is built once at construction so position queries are
//! a binary search over an immutable file.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// A zero-based line/character position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// A range expressed as start/end positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// A source file with its text and a precomputed line-start table.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub file_name: String,
    pub text: String,
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Create a source file, computing line starts up front.
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> SourceFile {
        let text = text.into();
        let mut line_starts = vec![0u32];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        SourceFile {
            file_name: file_name.into(),
            text,
            line_starts,
        }
    }

    /// Map a byte offset to a zero-based line/character position.
    ///
    /// Offsets past the end of the file clamp to the last line.
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: line as u32,
            character: offset - self.line_starts[line],
        }
    }

    /// Convert a span to a start/end position range.
    pub fn span_to_range(&self, span: Span) -> Range {
        Range {
            start: self.offset_to_position(span.start),
            end: self.offset_to_position(span.end),
        }
    }

    /// Number of lines in the file.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
