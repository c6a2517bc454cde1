//! Byte spans into source text.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` byte range into a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (byte index)
    pub start: u32,
    /// End offset (byte index, exclusive)
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: u32, end: u32) -> Span {
        Span { start, end }
    }

    /// Create an empty span at the given position.
    pub fn empty(pos: u32) -> Span {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if the span contains the given offset.
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }
}
