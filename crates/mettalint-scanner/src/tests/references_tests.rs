use crate::references::{ReferenceScanner, reference_at, scan_references};

fn names(text: &str) -> Vec<&str> {
    scan_references(text).into_iter().map(|r| r.name).collect()
}

#[test]
fn finds_references_in_order_with_duplicates() {
    assert_eq!(names("(+ $x $y $x)"), vec!["$x", "$y", "$x"]);
}

#[test]
fn identifier_characters() {
    assert_eq!(names("($a_1 $B2 $_ $9)"), vec!["$a_1", "$B2", "$_", "$9"]);
    assert_eq!(names("($x-y)"), vec!["$x"]);
}

#[test]
fn lone_sigil_is_not_a_reference() {
    assert!(names("($ foo $)").is_empty());
}

#[test]
fn double_sigil_yields_one_reference() {
    assert_eq!(names("$$x"), vec!["$x"]);
}

#[test]
fn sigil_after_identifier_character_is_ignored() {
    assert!(names("a$x").is_empty());
    assert_eq!(names("$x$y"), vec!["$x"]);
}

#[test]
fn offsets_point_at_sigil() {
    let refs = scan_references("(f $ab $c)");
    assert_eq!(refs[0].offset, 3);
    assert_eq!(refs[0].end(), 6);
    assert_eq!(refs[1].offset, 7);
}

#[test]
fn range_scan_reports_absolute_offsets() {
    let text = "(= (f $a) $b)";
    let refs: Vec<_> = ReferenceScanner::in_range(text, 3..9).collect();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].name, "$a");
    assert_eq!(refs[0].offset, 6);
}

#[test]
fn range_scan_respects_preceding_character_outside_range() {
    let text = "ab$x";
    assert_eq!(ReferenceScanner::in_range(text, 2..4).count(), 0);
}

#[test]
fn reference_at_exact_offset() {
    let text = "(let $x 1)";
    assert_eq!(reference_at(text, 5).map(|r| r.name), Some("$x"));
    assert!(reference_at(text, 4).is_none());
    assert!(reference_at(text, 100).is_none());
}

#[test]
fn non_ascii_text_is_skipped_cleanly() {
    assert_eq!(names("(é $x ü)"), vec!["$x"]);
}
