use crate::reporter::DiagnosticReporter;
use mettalint_common::{DiagnosticCategory, diagnostic_codes};

#[test]
fn keeps_emission_order_without_dedup() {
    let mut reporter = DiagnosticReporter::new();
    reporter.undefined_use("$y", 4);
    reporter.undefined_use("$y", 4);
    reporter.undefined_use("$a", 1);
    reporter.unused_definition("$z", 0);

    let lines: Vec<_> = reporter.diagnostics().iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![4, 4, 1, 0]);
    assert_eq!(reporter.len(), 4);
}

#[test]
fn codes_and_categories() {
    let mut reporter = DiagnosticReporter::new();
    assert!(reporter.is_empty());
    reporter.undefined_use("$x", 1);
    reporter.unused_definition("$x", 0);
    reporter.unterminated(7, 2);

    let diags = reporter.into_diagnostics();
    assert_eq!(diags[0].code, diagnostic_codes::VARIABLE_USED_WITHOUT_DEFINITION);
    assert_eq!(diags[0].category, DiagnosticCategory::Error);
    assert_eq!(diags[1].code, diagnostic_codes::VARIABLE_DEFINED_BUT_NEVER_USED);
    assert_eq!(diags[1].category, DiagnosticCategory::Warning);
    assert_eq!(diags[1].message, "Variable '$x' defined but never used");
    assert_eq!(diags[2].code, diagnostic_codes::EXPRESSION_IS_NEVER_CLOSED);
    assert_eq!(
        diags[2].message,
        "Expression starting here is never closed (unclosed depth 2)"
    );
    assert_eq!(diags[2].line, 7);
}
