//! Member classification and reporting.
//!
//! One depth-first walk per file. On a class declaration the inherited
//! member names are resolved once (see [`heritage`]); each member of that
//! class is then classified against the set:
//!
//! - a named member whose name is inherited must carry the `@override`
//!   decorator, otherwise a `MissingOverride` finding is reported;
//! - a named member whose name is not inherited must not carry it,
//!   otherwise an `UnnecessaryOverride` finding is reported;
//! - constructors and computed-name members are never classified.
//!
//! The name set is a local of the class visit, so a nested class always
//! starts from its own empty set and the enclosing class's set is restored
//! for free when the visit returns.

pub mod heritage;

use crate::ast::{NodeArena, NodeData, NodeIndex, NodeList};
use crate::binder::FileBinder;
use crate::diagnostics::{Finding, FindingBag, FindingKind};
use crate::resolver::TypeResolver;
use heritage::MemberNameSet;
use rayon::prelude::*;

/// Checks one source file's classes against the declare-override rule.
pub struct CheckerState<'a> {
    arena: &'a NodeArena,
    resolver: &'a dyn TypeResolver,
    pub findings: FindingBag,
}

impl<'a> CheckerState<'a> {
    pub fn new(
        arena: &'a NodeArena,
        resolver: &'a dyn TypeResolver,
        file_name: impl Into<String>,
    ) -> CheckerState<'a> {
        CheckerState {
            arena,
            resolver,
            findings: FindingBag::with_file(file_name),
        }
    }

    /// Walk the file and report every non-compliant member, in document
    /// order.
    pub fn check_source_file(&mut self, root: NodeIndex) {
        self.visit_node(root);
    }

    fn visit_node(&mut self, index: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(index) else {
            return;
        };

        if let NodeData::ClassDeclaration(class) = &node.data {
            let inherited = heritage::inherited_member_names(arena, self.resolver, class);
            tracing::debug!(
                class = ?arena.identifier_text(class.name),
                inherited = inherited.len(),
                "checking class members"
            );
            for &member_idx in &class.members.nodes {
                self.check_member(member_idx, &inherited);
                // Nested classes inside member bodies start a fresh scope.
                self.visit_children(member_idx);
            }
            return;
        }

        self.visit_children(index);
    }

    fn visit_children(&mut self, index: NodeIndex) {
        for child in self.arena.get_children(index) {
            self.visit_node(child);
        }
    }

    /// Classify one member against the inherited-name set.
    fn check_member(&mut self, member_idx: NodeIndex, inherited: &MemberNameSet) {
        let arena = self.arena;
        let Some(node) = arena.get(member_idx) else {
            return;
        };

        // Only methods and properties are classified; constructors never
        // take the marker.
        let (name_idx, modifiers) = match &node.data {
            NodeData::PropertyDeclaration(prop) => (prop.name, &prop.modifiers),
            NodeData::MethodDeclaration(method) => (method.name, &method.modifiers),
            _ => return,
        };

        // Members without a resolvable name are skipped entirely.
        let Some(name) = arena.property_name_text(name_idx) else {
            return;
        };

        let marked = has_override_decorator(arena, modifiers);
        if inherited.contains(name) {
            if !marked {
                self.findings
                    .report(FindingKind::MissingOverride, node.span);
            }
        } else if marked {
            self.findings
                .report(FindingKind::UnnecessaryOverride, node.span);
        }
    }
}

/// Whether a modifier list carries the `@override` marker decorator.
///
/// The marker is the single fixed decorator spelled `@override`; any other
/// decorator is semantically inert for this rule.
pub fn has_override_decorator(arena: &NodeArena, modifiers: &Option<NodeList>) -> bool {
    let Some(list) = modifiers else {
        return false;
    };
    list.nodes.iter().any(|&idx| {
        arena
            .get(idx)
            .and_then(|node| arena.get_decorator(node))
            .is_some_and(|dec| arena.identifier_text(dec.expression) == Some("override"))
    })
}

/// Check one file against an injected resolver.
pub fn check_source_file(
    arena: &NodeArena,
    root: NodeIndex,
    resolver: &dyn TypeResolver,
    file_name: &str,
) -> Vec<Finding> {
    let mut checker = CheckerState::new(arena, resolver, file_name);
    checker.check_source_file(root);
    checker.findings.take()
}

/// Bind a file's own declarations and check it in one step.
pub fn run_rule(arena: &NodeArena, root: NodeIndex, file_name: &str) -> Vec<Finding> {
    let mut binder = FileBinder::new();
    binder.bind_source_file(arena, root);
    check_source_file(arena, root, &binder, file_name)
}

/// One file handed to [`run_rule_many`].
pub struct SourceUnit<'a> {
    pub arena: &'a NodeArena,
    pub root: NodeIndex,
    pub file_name: &'a str,
}

/// Check many files in parallel.
///
/// Files share no mutable state, so each runs on its own worker; results
/// come back in input order.
pub fn run_rule_many(units: &[SourceUnit<'_>]) -> Vec<Vec<Finding>> {
    units
        .par_iter()
        .map(|unit| run_rule(unit.arena, unit.root, unit.file_name))
        .collect()
}
