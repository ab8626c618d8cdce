//! Per-expression binding extraction.
//!
//! The rules are textual and deliberately shallow: there is no tree, only
//! byte offsets into the expression text. Every binding is also a reference
//! found by [`mettalint_scanner::scan_references`] at the same offset, which
//! lets the checker tell binding occurrences apart from uses.

use mettalint_scanner::{Reference, ReferenceScanner, reference_at};
use smallvec::SmallVec;
use tracing::trace;

use crate::forms::SpecialForm;

/// Which rule introduced a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingSource {
    /// Variable inside the head group of a `=` rule definition.
    RuleHead,
    /// The single variable after `let`.
    Let,
    /// First token of a pair in a `let*` bindings block.
    LetStar,
    /// First token of a sub-form of a `match` expression.
    ///
    /// Over-approximates pattern variables: any sub-form whose head is a
    /// variable counts, whether or not it sits in the pattern position.
    MatchPattern,
}

impl BindingSource {
    /// Whether an occurrence from this source introduces the name. `match`
    /// heads only add definitions; the occurrence itself stays a use.
    #[must_use]
    pub const fn introduces_name(self) -> bool {
        !matches!(self, Self::MatchPattern)
    }
}

impl From<SpecialForm> for BindingSource {
    fn from(form: SpecialForm) -> Self {
        match form {
            SpecialForm::Rule => Self::RuleHead,
            SpecialForm::Let => Self::Let,
            SpecialForm::LetStar => Self::LetStar,
            SpecialForm::Match => Self::MatchPattern,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding<'a> {
    pub reference: Reference<'a>,
    pub source: BindingSource,
}

impl<'a> Binding<'a> {
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.reference.name
    }
}

/// The bindings one expression introduces, ordered by offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionBindings<'a> {
    pub form: Option<SpecialForm>,
    pub bindings: SmallVec<[Binding<'a>; 4]>,
}

impl<'a> ExpressionBindings<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding<'a>> {
        self.bindings.iter()
    }

    /// Whether the reference at `offset` is a binding occurrence.
    #[must_use]
    pub fn is_binding_site(&self, offset: usize) -> bool {
        self.bindings
            .iter()
            .any(|binding| binding.reference.offset == offset)
    }

    /// Whether the reference at `offset` introduces its name, so it must not
    /// be counted as a use.
    ///
    /// Only the first introducing occurrence of each name qualifies: in
    /// `(= (eq $x $x) T)` the second `$x` is a use of the first.
    #[must_use]
    pub fn is_introduction_site(&self, offset: usize) -> bool {
        let Some(site) = self
            .bindings
            .iter()
            .find(|binding| binding.reference.offset == offset)
        else {
            return false;
        };
        if !site.source.introduces_name() {
            return false;
        }
        self.bindings
            .iter()
            .filter(|binding| binding.source.introduces_name())
            .find(|binding| binding.name() == site.name())
            .is_some_and(|first| first.reference.offset == offset)
    }

    fn push(&mut self, reference: Reference<'a>, source: BindingSource) {
        if !self.is_binding_site(reference.offset) {
            self.bindings.push(Binding { reference, source });
        }
    }
}

/// Extract the bindings of a complete expression.
#[must_use]
pub fn bind_expression(text: &str) -> ExpressionBindings<'_> {
    let mut result = ExpressionBindings::default();
    let Some((form, after_keyword)) = SpecialForm::classify(text) else {
        return result;
    };
    result.form = Some(form);
    let source = BindingSource::from(form);
    let bytes = text.as_bytes();

    match form {
        SpecialForm::Rule => {
            let head = skip_whitespace(bytes, after_keyword);
            if bytes.get(head) == Some(&b'(') {
                let end = group_end(bytes, head);
                for reference in ReferenceScanner::in_range(text, head..end) {
                    result.push(reference, source);
                }
            }
        }
        SpecialForm::Let => {
            let target = skip_whitespace(bytes, after_keyword);
            if let Some(reference) = reference_at(text, target) {
                result.push(reference, source);
            }
        }
        SpecialForm::LetStar => {
            let block = skip_whitespace(bytes, after_keyword);
            if bytes.get(block) == Some(&b'(') {
                let end = group_end(bytes, block);
                for open in open_parens(bytes, block + 1, end) {
                    if let Some(reference) = head_reference(text, open, end) {
                        result.push(reference, source);
                    }
                }
            }
        }
        SpecialForm::Match => {
            for open in open_parens(bytes, 0, bytes.len()) {
                if let Some(reference) = head_reference(text, open, bytes.len()) {
                    result.push(reference, source);
                }
            }
        }
    }

    result.bindings.sort_by_key(|binding| binding.reference.offset);
    trace!(form = %form, bindings = result.len(), "bound expression");
    result
}

/// The variable that is the first token after the `(` at `open`, if any.
fn head_reference(text: &str, open: usize, limit: usize) -> Option<Reference<'_>> {
    let first = skip_whitespace(text.as_bytes(), open + 1);
    if first >= limit {
        return None;
    }
    reference_at(text, first).filter(|reference| reference.end() <= limit)
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}

/// Offset just past the `)` matching the `(` at `open`, or the text length
/// when the group is never closed.
fn group_end(bytes: &[u8], open: usize) -> usize {
    let mut depth = 0usize;
    for (pos, &byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return pos + 1;
                }
            }
            _ => {}
        }
    }
    bytes.len()
}

fn open_parens(bytes: &[u8], start: usize, end: usize) -> impl Iterator<Item = usize> + '_ {
    (start..end.min(bytes.len())).filter(move |&pos| bytes[pos] == b'(')
}
