//! Behavioral tests for the declare-override rule.
//!
//! Trees are built through `TreeBuilder` in document order, so finding
//! order can be asserted against member creation order.

use override_rule::ast::TreeBuilder;
use override_rule::syntax_kind::SyntaxKind;
use override_rule::{Finding, FindingKind, SourceUnit, run_rule, run_rule_many};

fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
    findings.iter().map(|f| f.kind).collect()
}

#[test]
fn compliant_override_produces_no_finding() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "baseMethodOne");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let dec = b.override_decorator();
    let m = b.method(vec![dec], "baseMethodOne");
    let example = b.class("Example", vec![ext], vec![m]);

    let root = b.source_file(vec![base, example]);
    let arena = b.finish();

    assert!(run_rule(&arena, root, "example.ts").is_empty());
}

#[test]
fn new_member_without_marker_is_compliant() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "baseMethodOne");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let m = b.method(vec![], "exampleMethodTwo");
    let example = b.class("Example", vec![ext], vec![m]);

    let root = b.source_file(vec![base, example]);
    let arena = b.finish();

    assert!(run_rule(&arena, root, "example.ts").is_empty());
}

#[test]
fn redefined_inherited_member_without_marker_is_flagged() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "render");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let m = b.method(vec![], "render");
    let derived = b.class("Derived", vec![ext], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::MissingOverride]);
}

#[test]
fn transitively_inherited_member_requires_marker() {
    let mut b = TreeBuilder::new();
    let base = b.class("Base", vec![], vec![]);

    let ext_base = b.extends_clause("Base");
    let mid_m = b.method(vec![], "exampleMethodThree");
    let example = b.class("Example", vec![ext_base], vec![mid_m]);

    // exampleMethodThree comes from Example, not Base, and still needs
    // the marker two levels down.
    let ext_example = b.extends_clause("Example");
    let leaf_m = b.method(vec![], "exampleMethodThree");
    let implementation = b.class("Implementation", vec![ext_example], vec![leaf_m]);

    let root = b.source_file(vec![base, example, implementation]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::MissingOverride]);
}

#[test]
fn marker_on_non_inherited_member_is_flagged() {
    let mut b = TreeBuilder::new();
    let base = b.class("Base", vec![], vec![]);

    let ext = b.extends_clause("Base");
    let dec = b.override_decorator();
    let m = b.method(vec![dec], "notInherited");
    let derived = b.class("Derived", vec![ext], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::UnnecessaryOverride]);
}

#[test]
fn private_base_member_name_still_requires_marker() {
    let mut b = TreeBuilder::new();
    let pr = b.token(SyntaxKind::PrivateKeyword);
    let base_m = b.method(vec![pr], "baseMethodThree");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let m = b.method(vec![], "baseMethodThree");
    let derived = b.class("Derived", vec![ext], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::MissingOverride]);
}

#[test]
fn class_without_heritage_flags_any_marker() {
    let mut b = TreeBuilder::new();
    let dec = b.override_decorator();
    let m = b.method(vec![dec], "standalone");
    let class = b.class("Alone", vec![], vec![m]);
    let root = b.source_file(vec![class]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::UnnecessaryOverride]);
}

#[test]
fn static_ancestor_member_is_not_eligible() {
    let mut b = TreeBuilder::new();
    let st = b.token(SyntaxKind::StaticKeyword);
    let base_m = b.method(vec![st], "create");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let dec = b.override_decorator();
    let m = b.method(vec![dec], "create");
    let derived = b.class("Derived", vec![ext], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    // "create" is not inherited, so the marker is spurious.
    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::UnnecessaryOverride]);
}

#[test]
fn constructors_are_never_flagged() {
    let mut b = TreeBuilder::new();
    let base_ctor = b.constructor(vec![]);
    let base = b.class("Base", vec![], vec![base_ctor]);

    let ext = b.extends_clause("Base");
    let dec = b.override_decorator();
    let ctor = b.constructor(vec![dec]);
    let derived = b.class("Derived", vec![ext], vec![ctor]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    assert!(run_rule(&arena, root, "example.ts").is_empty());
}

#[test]
fn other_decorators_do_not_satisfy_the_marker() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "render");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let dep = b.decorator("deprecated");
    let m = b.method(vec![dep], "render");
    let derived = b.class("Derived", vec![ext], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::MissingOverride]);
}

#[test]
fn marker_among_other_decorators_is_sufficient() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "render");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let dep = b.decorator("deprecated");
    let dec = b.override_decorator();
    let m = b.method(vec![dep, dec], "render");
    let derived = b.class("Derived", vec![ext], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    assert!(run_rule(&arena, root, "example.ts").is_empty());
}

#[test]
fn computed_member_names_are_skipped() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "render");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let dec = b.override_decorator();
    let key = b.identifier("key");
    let computed = b.computed_property_name(key);
    let m = b.method_named(vec![dec], computed);
    let derived = b.class("Derived", vec![ext], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    // Neither checked nor reported.
    assert!(run_rule(&arena, root, "example.ts").is_empty());
}

#[test]
fn nested_class_starts_from_empty_scope() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "baseMethod");
    let base = b.class("Base", vec![], vec![base_m]);

    // Inner redeclares a name the *outer* class inherits; from Inner's own
    // scope it overrides nothing, so its marker is unnecessary.
    let inner_dec = b.override_decorator();
    let inner_m = b.method(vec![inner_dec], "baseMethod");
    let inner = b.class("Inner", vec![], vec![inner_m]);

    let ext = b.extends_clause("Base");
    let outer_m = b.method_with_body(vec![], "baseMethod", vec![inner]);
    let outer = b.class("Outer", vec![ext], vec![outer_m]);

    let root = b.source_file(vec![base, outer]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(
        kinds(&findings),
        vec![FindingKind::MissingOverride, FindingKind::UnnecessaryOverride]
    );
}

#[test]
fn implements_clause_backed_by_a_class_contributes() {
    let mut b = TreeBuilder::new();
    let mixin_m = b.method(vec![], "mix");
    let mixin = b.class("Mixin", vec![], vec![mixin_m]);

    let imp = b.implements_clause("Mixin");
    let m = b.method(vec![], "mix");
    let derived = b.class("Derived", vec![imp], vec![m]);

    let root = b.source_file(vec![mixin, derived]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::MissingOverride]);
}

#[test]
fn repeated_ancestor_reports_once() {
    let mut b = TreeBuilder::new();
    let base_m = b.method(vec![], "shared");
    let base = b.class("Base", vec![], vec![base_m]);

    let ext = b.extends_clause("Base");
    let imp = b.implements_clause("Base");
    let m = b.method(vec![], "shared");
    let derived = b.class("Derived", vec![ext, imp], vec![m]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    let findings = run_rule(&arena, root, "example.ts");
    assert_eq!(kinds(&findings), vec![FindingKind::MissingOverride]);
}

#[test]
fn findings_come_in_document_order_and_are_stable() {
    let mut b = TreeBuilder::new();
    let base_m1 = b.method(vec![], "one");
    let base_m2 = b.method(vec![], "two");
    let base = b.class("Base", vec![], vec![base_m1, base_m2]);

    let ext = b.extends_clause("Base");
    let m1 = b.method(vec![], "one");
    let dec = b.override_decorator();
    let m2 = b.method(vec![dec], "unrelated");
    let m3 = b.method(vec![], "two");
    let derived = b.class("Derived", vec![ext], vec![m1, m2, m3]);

    let root = b.source_file(vec![base, derived]);
    let arena = b.finish();

    let first = run_rule(&arena, root, "example.ts");
    assert_eq!(
        kinds(&first),
        vec![
            FindingKind::MissingOverride,
            FindingKind::UnnecessaryOverride,
            FindingKind::MissingOverride,
        ]
    );
    let spans: Vec<_> = first.iter().map(|f| f.span.start).collect();
    let mut sorted = spans.clone();
    sorted.sort_unstable();
    assert_eq!(spans, sorted);

    // Re-running over the unchanged tree yields the identical sequence.
    let second = run_rule(&arena, root, "example.ts");
    assert_eq!(first, second);
}

#[test]
fn files_are_checked_independently() {
    let mut b1 = TreeBuilder::new();
    let base_m = b1.method(vec![], "render");
    let base = b1.class("Base", vec![], vec![base_m]);
    let ext = b1.extends_clause("Base");
    let m = b1.method(vec![], "render");
    let derived = b1.class("Derived", vec![ext], vec![m]);
    let root1 = b1.source_file(vec![base, derived]);
    let arena1 = b1.finish();

    let mut b2 = TreeBuilder::new();
    let clean = b2.class("Clean", vec![], vec![]);
    let root2 = b2.source_file(vec![clean]);
    let arena2 = b2.finish();

    let results = run_rule_many(&[
        SourceUnit {
            arena: &arena1,
            root: root1,
            file_name: "a.ts",
        },
        SourceUnit {
            arena: &arena2,
            root: root2,
            file_name: "b.ts",
        },
    ]);

    assert_eq!(results.len(), 2);
    assert_eq!(kinds(&results[0]), vec![FindingKind::MissingOverride]);
    assert_eq!(results[0][0].file_name, "a.ts");
    assert!(results[1].is_empty());
}
