//! Core types for context resolution.

use serde::{Deserialize, Serialize};

use crate::{ContextError, ContextResult};

/// A position in source code (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (byte offset within line)
    pub column: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// An inclusive, 1-based line interval requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineInterval {
    start: usize,
    end: usize,
}

impl LineInterval {
    /// Create a new interval, rejecting zero lines and reversed bounds.
    pub fn new(start: usize, end: usize) -> ContextResult<Self> {
        if start == 0 || start > end {
            return Err(ContextError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// The inclusive, 1-based line span covered by a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpan {
    /// First line of the node (1-based)
    pub start: usize,
    /// Last line of the node (1-based)
    pub end: usize,
}

impl LineSpan {
    /// Create a new span from 1-based lines.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Convert a node's 0-indexed start and end positions into 1-based lines.
    ///
    /// A node that ends at column 0 of a later line (it swallowed the
    /// trailing newline) ends on the previous line.
    pub fn from_positions(start: Position, end: Position) -> Self {
        let start_line = start.line as usize + 1;
        let mut end_line = end.line as usize + 1;
        if end.column == 0 && end.line > start.line {
            end_line -= 1;
        }
        Self::new(start_line, end_line)
    }

    /// Number of lines past the first, i.e. `end - start`.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span fully contains the interval.
    pub fn contains(&self, interval: &LineInterval) -> bool {
        self.start <= interval.start() && interval.end() <= self.end
    }
}

/// A line reference in the result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinePosition {
    /// 1-based line number
    pub line: usize,
}

/// Start and end lines of an enclosing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: LinePosition,
    pub end: LinePosition,
}

impl From<LineSpan> for Location {
    fn from(span: LineSpan) -> Self {
        Self {
            start: LinePosition { line: span.start },
            end: LinePosition { line: span.end },
        }
    }
}

/// The structural unit chosen as enclosing a line interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnclosingContext {
    /// Grammar node kind, e.g. `class_definition`
    pub kind: String,
    /// Line span of the node
    pub loc: Location,
}

impl EnclosingContext {
    /// Create a new enclosing context.
    pub fn new(kind: impl Into<String>, span: LineSpan) -> Self {
        Self {
            kind: kind.into(),
            loc: span.into(),
        }
    }

    /// First line of the context (1-based).
    pub fn start_line(&self) -> usize {
        self.loc.start.line
    }

    /// Last line of the context (1-based).
    pub fn end_line(&self) -> usize {
        self.loc.end.line
    }
}

/// Result of an enclosing-context query.
///
/// Serializes as `{"enclosingContext": {...}}` or `{"enclosingContext": null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosingContextResult {
    pub enclosing_context: Option<EnclosingContext>,
}

impl EnclosingContextResult {
    /// The empty result.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if a context was found.
    pub fn is_none(&self) -> bool {
        self.enclosing_context.is_none()
    }
}

impl From<Option<EnclosingContext>> for EnclosingContextResult {
    fn from(enclosing_context: Option<EnclosingContext>) -> Self {
        Self { enclosing_context }
    }
}

/// Result of a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityResult {
    /// Whether the buffer parsed without error nodes
    pub valid: bool,
    /// Diagnostic message, empty when valid
    pub error: String,
}

impl ValidityResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: String::new(),
        }
    }

    /// A failing result with a diagnostic message.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: error.into(),
        }
    }
}

/// Location of an error-marker node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxErrorSite {
    /// First line of the error node (1-based)
    pub start_line: usize,
    /// Column of the first byte of the error node (0-based)
    pub start_column: u32,
    /// Last line of the error node (1-based)
    pub end_line: usize,
}

impl SyntaxErrorSite {
    /// Build an error site from a node's 0-indexed positions.
    pub fn from_positions(start: Position, end: Position) -> Self {
        let span = LineSpan::from_positions(start, end);
        Self {
            start_line: span.start,
            start_column: start.column,
            end_line: span.end,
        }
    }
}
