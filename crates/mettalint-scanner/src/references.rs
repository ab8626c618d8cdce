//! Variable reference scanning.
//!
//! A reference is `$` followed by one or more ASCII letters, digits or
//! underscores. The `$` must not directly follow an identifier character, so
//! `a$x` contains no reference while `$$x` contains exactly one (`$x`).

use std::ops::Range;

use memchr::memchr_iter;

pub const VARIABLE_SIGIL: u8 = b'$';

/// A `$name` occurrence inside an expression's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reference<'a> {
    /// The full token, sigil included (`$x`).
    pub name: &'a str,
    /// Byte offset of the sigil within the scanned text.
    pub offset: usize,
}

impl Reference<'_> {
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.name.len()
    }
}

#[inline]
#[must_use]
pub const fn is_identifier_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Parse a reference whose sigil sits exactly at `offset`.
///
/// The identifier run stops at `limit` (exclusive) even if more identifier
/// characters follow.
fn reference_within(text: &str, offset: usize, limit: usize) -> Option<Reference<'_>> {
    let bytes = text.as_bytes();
    if bytes.get(offset) != Some(&VARIABLE_SIGIL) {
        return None;
    }
    if offset > 0 && is_identifier_char(bytes[offset - 1]) {
        return None;
    }
    let start = offset + 1;
    let end = bytes[start..limit]
        .iter()
        .position(|&b| !is_identifier_char(b))
        .map_or(limit, |len| start + len);
    if end == start {
        return None;
    }
    Some(Reference {
        name: &text[offset..end],
        offset,
    })
}

/// The reference starting exactly at `offset`, if there is one.
#[must_use]
pub fn reference_at(text: &str, offset: usize) -> Option<Reference<'_>> {
    if offset >= text.len() {
        return None;
    }
    reference_within(text, offset, text.len())
}

/// Iterator over the references of a text, or of a byte range of it.
///
/// Offsets are always relative to the start of the full text, so references
/// found in a sub-range can be compared with ones found in the whole text.
pub struct ReferenceScanner<'a> {
    text: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> ReferenceScanner<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            end: text.len(),
        }
    }

    /// Scan only `range` of `text`. The range is clamped to the text length.
    #[must_use]
    pub fn in_range(text: &'a str, range: Range<usize>) -> Self {
        let end = range.end.min(text.len());
        Self {
            text,
            pos: range.start.min(end),
            end,
        }
    }
}

impl<'a> Iterator for ReferenceScanner<'a> {
    type Item = Reference<'a>;

    fn next(&mut self) -> Option<Reference<'a>> {
        let text = self.text;
        let window = &text.as_bytes()[self.pos..self.end];
        for relative in memchr_iter(VARIABLE_SIGIL, window) {
            let offset = self.pos + relative;
            if let Some(reference) = reference_within(text, offset, self.end) {
                self.pos = reference.end();
                return Some(reference);
            }
        }
        self.pos = self.end;
        None
    }
}

/// Every reference in `text`, in order of occurrence, duplicates preserved.
#[must_use]
pub fn scan_references(text: &str) -> Vec<Reference<'_>> {
    ReferenceScanner::new(text).collect()
}
