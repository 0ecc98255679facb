//! Source locations
//!
//! Every CST node carries a [`Span`]; [`SourceMap`] turns byte offsets back
//! into 1-indexed lines and columns for metadata and diagnostics.

use serde::{Deserialize, Serialize};

/// A region of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset start (0-indexed)
    pub start: usize,
    /// Byte offset end (exclusive)
    pub end: usize,
    /// Line number (1-indexed)
    pub start_line: usize,
    /// Line number (1-indexed)
    pub end_line: usize,
    /// Column (1-indexed, in bytes)
    pub start_column: usize,
    /// Column (1-indexed, in bytes)
    pub end_column: usize,
}

impl Span {
    pub fn new(
        start: usize,
        end: usize,
        start_line: usize,
        end_line: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            start,
            end,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }

    /// Span from byte offsets only; line/column stay zero until resolved.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(&self, other: &Span) -> Span {
        let (first, last) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        let tail = if self.end >= other.end { self } else { other };
        Span {
            start: first.start,
            end: tail.end.max(last.end),
            start_line: first.start_line,
            end_line: tail.end_line,
            start_column: first.start_column,
            end_column: tail.end_column,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Line-start table for one source text
#[derive(Debug, Clone)]
pub struct SourceMap {
    /// Byte positions where each line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i + 1));
        Self { line_starts }
    }

    /// 1-indexed line and column for a byte offset
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        (line + 1, offset - line_start + 1)
    }

    /// 1-indexed line containing `offset`
    pub fn line_number(&self, offset: usize) -> usize {
        self.line_col(offset).0
    }

    /// Number of lines in the source (a trailing newline opens a final empty line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Span with line/column information filled in
    pub fn span(&self, start: usize, end: usize) -> Span {
        let (start_line, start_column) = self.line_col(start);
        let (end_line, end_column) = self.line_col(end);
        Span {
            start,
            end,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }
}
