//! Expression reader.
//!
//! Groups raw source lines into complete top-level parenthesized expressions.
//! Blank lines and `;` comment lines are skipped wherever they occur. A buffer
//! is finalized the moment its net parenthesis depth returns to zero; there is
//! no string or quote awareness, so a `(` inside a string literal counts too.

use std::iter::Enumerate;
use std::str::Lines;

use memchr::memchr2_iter;
use mettalint_common::LineNumber;
use tracing::{debug, trace};

/// Marker that starts a comment line once leading whitespace is trimmed.
pub const COMMENT_MARKER: char = ';';

/// One complete top-level expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    /// Line on which accumulation began (1-based).
    pub start_line: LineNumber,
    /// Last constituent line (1-based).
    pub end_line: LineNumber,
    /// Constituent lines, each followed by `\n`.
    pub text: String,
}

/// The unterminated buffer left over at end of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Remainder {
    pub start_line: LineNumber,
    pub text: String,
    /// Net parenthesis depth of `text` (nonzero).
    pub depth: i64,
}

/// Net parenthesis depth of `text`: `(` counts +1, `)` counts -1.
#[must_use]
pub fn paren_depth(text: &str) -> i64 {
    memchr2_iter(b'(', b')', text.as_bytes()).fold(0, |depth, pos| {
        if text.as_bytes()[pos] == b'(' {
            depth + 1
        } else {
            depth - 1
        }
    })
}

fn is_skipped_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Lazy reader over the expressions of a source text.
///
/// Constructing a new reader over the same text restarts the sequence.
pub struct ExpressionReader<'a> {
    lines: Enumerate<Lines<'a>>,
    buffer: String,
    start_line: LineNumber,
    end_line: LineNumber,
    depth: i64,
}

impl<'a> ExpressionReader<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().enumerate(),
            buffer: String::new(),
            start_line: 0,
            end_line: 0,
            depth: 0,
        }
    }

    /// Drain the reader and return the unterminated trailing buffer, if any.
    #[must_use]
    pub fn into_remainder(mut self) -> Option<Remainder> {
        for expr in self.by_ref() {
            trace!(start_line = expr.start_line, "discarding expression while draining");
        }
        if self.buffer.is_empty() {
            return None;
        }
        debug!(
            start_line = self.start_line,
            depth = self.depth,
            "input ends inside an unterminated expression"
        );
        Some(Remainder {
            start_line: self.start_line,
            text: std::mem::take(&mut self.buffer),
            depth: self.depth,
        })
    }

    fn finish_expression(&mut self) -> Expression {
        let expr = Expression {
            start_line: self.start_line,
            end_line: self.end_line,
            text: std::mem::take(&mut self.buffer),
        };
        trace!(
            start_line = expr.start_line,
            end_line = expr.end_line,
            "expression complete"
        );
        expr
    }
}

impl Iterator for ExpressionReader<'_> {
    type Item = Expression;

    fn next(&mut self) -> Option<Expression> {
        while let Some((index, line)) = self.lines.next() {
            if is_skipped_line(line) {
                continue;
            }

            let line_number = LineNumber::try_from(index + 1).unwrap_or(LineNumber::MAX);
            if self.buffer.is_empty() {
                self.start_line = line_number;
                self.depth = 0;
            }
            self.end_line = line_number;
            self.buffer.push_str(line);
            self.buffer.push('\n');
            self.depth += paren_depth(line);

            if self.depth == 0 {
                return Some(self.finish_expression());
            }
        }
        None
    }
}

/// Result of reading a whole source text eagerly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadOutcome {
    pub expressions: Vec<Expression>,
    pub remainder: Option<Remainder>,
}

/// Read every expression of `source`, keeping the dangling tail separately.
#[must_use]
pub fn read_expressions(source: &str) -> ReadOutcome {
    let mut reader = ExpressionReader::new(source);
    let expressions: Vec<Expression> = reader.by_ref().collect();
    ReadOutcome {
        expressions,
        remainder: reader.into_remainder(),
    }
}
