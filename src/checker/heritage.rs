//! Hierarchy resolution: which inherited member names are eligible for
//! the override marker.
//!
//! For each heritage clause of a class, every type entry is resolved
//! through the injected [`TypeResolver`]; only entries backed by class
//! declarations contribute. An ancestor contributes the names of its
//! non-constructor, non-static members — visibility does not gate
//! eligibility, so private ancestor members contribute too — and the walk
//! then chains through the ancestor's own `extends` clause.
//!
//! Anything that fails to resolve contributes nothing. There is no error
//! path here.

use crate::ast::{NodeArena, NodeData, NodeIndex, has_static_modifier};
use crate::ast::node::ClassData;
use crate::resolver::TypeResolver;
use crate::syntax_kind::SyntaxKind;
use rustc_hash::FxHashSet;

/// Member names a class inherits from its full ancestor chain.
pub type MemberNameSet = FxHashSet<String>;

/// Collect every eligible member name the class inherits.
///
/// The set is rebuilt from empty for each class; callers must not share it
/// across sibling classes.
pub fn inherited_member_names(
    arena: &NodeArena,
    resolver: &dyn TypeResolver,
    class: &ClassData,
) -> MemberNameSet {
    let mut names = MemberNameSet::default();
    let mut seen = FxHashSet::default();

    if let Some(clauses) = &class.heritage_clauses {
        for &clause_idx in &clauses.nodes {
            collect_clause(arena, resolver, clause_idx, &mut names, &mut seen);
        }
    }

    names
}

/// Resolve each type entry of one heritage clause and merge its members.
fn collect_clause(
    arena: &NodeArena,
    resolver: &dyn TypeResolver,
    clause_idx: NodeIndex,
    names: &mut MemberNameSet,
    seen: &mut FxHashSet<NodeIndex>,
) {
    let Some(clause_node) = arena.get(clause_idx) else {
        return;
    };
    let Some(clause) = arena.get_heritage_clause(clause_node) else {
        return;
    };

    for &type_idx in &clause.types.nodes {
        let Some(ty) = resolver.resolve_type_reference(arena, type_idx) else {
            continue;
        };
        if !resolver.is_named_type_reference(ty) {
            continue;
        }
        for &decl_idx in resolver.declarations(ty) {
            collect_class_members(arena, resolver, decl_idx, names, seen);
        }
    }
}

/// Merge one ancestor class declaration's member names, then chain up
/// through its `extends` clause.
fn collect_class_members(
    arena: &NodeArena,
    resolver: &dyn TypeResolver,
    decl_idx: NodeIndex,
    names: &mut MemberNameSet,
    seen: &mut FxHashSet<NodeIndex>,
) {
    // Repeated ancestors (diamonds, cycles) contribute once.
    if !seen.insert(decl_idx) {
        return;
    }

    let Some(decl_node) = arena.get(decl_idx) else {
        return;
    };
    // Only class declarations contribute; interfaces and anything else
    // resolved here are skipped.
    let Some(class) = arena.get_class(decl_node) else {
        return;
    };

    let mut contributed = 0usize;
    for &member_idx in &class.members.nodes {
        let Some(member_node) = arena.get(member_idx) else {
            continue;
        };

        // Constructors never need the marker; static members are not
        // inherited as instance members.
        let (name_idx, modifiers) = match &member_node.data {
            NodeData::PropertyDeclaration(prop) => (prop.name, &prop.modifiers),
            NodeData::MethodDeclaration(method) => (method.name, &method.modifiers),
            _ => continue,
        };
        if has_static_modifier(arena, modifiers) {
            continue;
        }

        if let Some(text) = arena.property_name_text(name_idx) {
            names.insert(text.to_string());
            contributed += 1;
        }
    }

    tracing::trace!(
        ancestor = ?arena.identifier_text(class.name),
        contributed,
        "collected ancestor members"
    );

    // Chain through the ancestor's own extends clause.
    if let Some(clauses) = &class.heritage_clauses {
        for &clause_idx in &clauses.nodes {
            let is_extends = arena
                .get(clause_idx)
                .and_then(|n| arena.get_heritage_clause(n))
                .is_some_and(|h| h.token == SyntaxKind::ExtendsKeyword);
            if is_extends {
                collect_clause(arena, resolver, clause_idx, names, seen);
            }
        }
    }
}
