use crate::context::{CheckerOptions, UnusedLine};
use crate::state::{CheckerState, check_source};
use mettalint_binder::{DefinitionScope, UnusedBinding};
use mettalint_common::{LineNumber, diagnostic_codes};
use mettalint_scanner::read_expressions;

fn diagnostics(source: &str) -> Vec<(LineNumber, u32, String)> {
    check_source(source, &CheckerOptions::default())
        .diagnostics
        .into_iter()
        .map(|d| (d.line, d.code, d.message))
        .collect()
}

#[test]
fn self_binding_is_visible_to_its_own_expression() {
    assert!(diagnostics("(let $x 1 $x)").is_empty());
}

#[test]
fn duplicate_undefined_uses_are_all_reported() {
    let diags = diagnostics("(+ $y $y)");
    assert_eq!(diags.len(), 2);
    assert!(
        diags
            .iter()
            .all(|(line, code, _)| *line == 1
                && *code == diagnostic_codes::VARIABLE_USED_WITHOUT_DEFINITION)
    );
}

#[test]
fn bindings_stay_visible_for_the_rest_of_the_file() {
    let source = "(let $x 1 $x)\n\n(foo $x)\n";
    assert!(diagnostics(source).is_empty());
}

#[test]
fn use_before_binding_is_reported_at_expression_start() {
    let source = "; header\n(foo\n  $x)\n(let $x 1 $x)\n";
    let diags = diagnostics(source);
    assert_eq!(
        diags,
        vec![(
            2,
            diagnostic_codes::VARIABLE_USED_WITHOUT_DEFINITION,
            "Variable '$x' used without definition".to_string()
        )]
    );
}

#[test]
fn unused_definitions_follow_undefined_uses() {
    let diags = diagnostics("(let $u 1 $v)");
    let codes: Vec<_> = diags.iter().map(|(_, code, _)| *code).collect();
    assert_eq!(
        codes,
        vec![
            diagnostic_codes::VARIABLE_USED_WITHOUT_DEFINITION,
            diagnostic_codes::VARIABLE_DEFINED_BUT_NEVER_USED,
        ]
    );
}

#[test]
fn unused_line_can_point_at_first_binding() {
    let options = CheckerOptions {
        unused_line: UnusedLine::FirstBinding,
        ..CheckerOptions::default()
    };
    let result = check_source("(foo)\n\n(let $a 1 0)\n(let $a 2 0)\n", &options);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].line, 3);
}

#[test]
fn unused_reporting_can_be_disabled() {
    let options = CheckerOptions {
        report_unused: false,
        ..CheckerOptions::default()
    };
    assert!(check_source("(let $unused 1 0)", &options).diagnostics.is_empty());
}

#[test]
fn unterminated_tail_is_silent_by_default() {
    let result = check_source("(ok $x)\n(foo $y", &CheckerOptions::default());
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.stats.unterminated);
    assert_eq!(result.stats.expressions, 1);
}

#[test]
fn unterminated_tail_reported_when_enabled() {
    let options = CheckerOptions {
        report_unterminated: true,
        ..CheckerOptions::default()
    };
    let result = check_source("(let $a 1 $a)\n(foo $x\n", &options);
    assert_eq!(result.diagnostics.len(), 1);
    let diag = &result.diagnostics[0];
    assert_eq!(diag.code, diagnostic_codes::EXPRESSION_IS_NEVER_CLOSED);
    assert_eq!(diag.line, 2);
}

#[test]
fn stats_count_expressions_references_and_definitions() {
    let result = check_source(
        "(let* (($a 1) ($b $a)) (+ $a $b))\n(f $c)\n",
        &CheckerOptions::default(),
    );
    assert_eq!(result.stats.expressions, 2);
    assert_eq!(result.stats.references, 6);
    assert_eq!(result.stats.definitions, 2);
    assert!(!result.stats.unterminated);
}

#[test]
fn state_threads_through_manual_steps() {
    let outcome = read_expressions("(let $x 1 0)\n(g $x $z)\n");
    let mut state = CheckerState::new(CheckerOptions::default());
    state = state.check_expression(&outcome.expressions[0]);
    assert!(state.scope().is_defined("$x"));
    assert_eq!(
        state.scope().unused(),
        vec![UnusedBinding {
            name: "$x".to_string(),
            line: 1
        }]
    );
    state = state.check_expression(&outcome.expressions[1]);
    assert_eq!(state.diagnostics().len(), 1);
    assert!(state.scope().unused().is_empty());
    let result = state.finish(outcome.remainder.as_ref());
    assert_eq!(result.diagnostics.len(), 1);
}

/// Scope that never accepts definitions; every reference is undefined.
#[derive(Default)]
struct EmptyScope;

impl DefinitionScope for EmptyScope {
    fn define(&mut self, _name: &str, _line: LineNumber) {}
    fn is_defined(&self, _name: &str) -> bool {
        false
    }
    fn record_use(&mut self, _name: &str) {}
    fn unused(&self) -> Vec<UnusedBinding> {
        Vec::new()
    }
    fn definition_count(&self) -> usize {
        0
    }
}

#[test]
fn scope_implementation_is_pluggable() {
    let outcome = read_expressions("(let $x 1 $x)\n");
    let state = outcome
        .expressions
        .iter()
        .fold(
            CheckerState::with_scope(EmptyScope, CheckerOptions::default()),
            |state, expr| state.check_expression(expr),
        );
    assert_eq!(state.finish(None).diagnostics.len(), 2);
}
