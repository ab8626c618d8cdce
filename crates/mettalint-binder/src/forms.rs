//! Leading special-form recognition.

/// A leading keyword that introduces bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    /// `(= (head args...) body...)`
    Rule,
    /// `(let $var value body...)`
    Let,
    /// `(let* (($a v) ($b v) ...) body...)`
    LetStar,
    /// `(match target pattern body...)`
    Match,
}

// `LetStar` precedes `Let` so `let*` is never read as `let`.
const CLASSIFY_ORDER: [SpecialForm; 4] = [
    SpecialForm::LetStar,
    SpecialForm::Let,
    SpecialForm::Match,
    SpecialForm::Rule,
];

impl SpecialForm {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Rule => "=",
            Self::Let => "let",
            Self::LetStar => "let*",
            Self::Match => "match",
        }
    }

    /// Classify an expression by its leading form.
    ///
    /// Leading whitespace is ignored, the text must open with `(`, and at
    /// most one space may sit between the parenthesis and the keyword. The
    /// keyword must end at whitespace, a parenthesis, or the end of the
    /// text. Returns the form and the byte offset just past the keyword.
    #[must_use]
    pub fn classify(text: &str) -> Option<(Self, usize)> {
        let bytes = text.as_bytes();
        let open = text.len() - text.trim_start().len();
        if bytes.get(open) != Some(&b'(') {
            return None;
        }
        let mut pos = open + 1;
        if bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }
        let rest = &bytes[pos..];

        CLASSIFY_ORDER.into_iter().find_map(|form| {
            let keyword = form.keyword().as_bytes();
            if rest.starts_with(keyword) && is_form_delimiter(rest.get(keyword.len()).copied()) {
                Some((form, pos + keyword.len()))
            } else {
                None
            }
        })
    }
}

fn is_form_delimiter(byte: Option<u8>) -> bool {
    match byte {
        None => true,
        Some(b) => b.is_ascii_whitespace() || b == b'(' || b == b')',
    }
}

impl std::fmt::Display for SpecialForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
