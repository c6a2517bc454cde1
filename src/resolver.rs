//! Type-resolution boundary.
//!
//! Mapping a heritage type reference to the declarations behind it is an
//! external capability: the driver may own a full type checker, while tests
//! run against a synthetic table. The analysis only ever asks the three
//! questions below, and treats every failure as "contributes no names" —
//! an unresolvable ancestor is a silent no-op, never an error.

use crate::ast::{NodeArena, NodeIndex};

/// Opaque handle to a resolved type, owned by the resolver that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// Read-only type-resolution service injected into the analysis.
pub trait TypeResolver {
    /// Resolve a heritage type expression to a type.
    ///
    /// Returns `None` when the node does not denote a resolvable type
    /// (unknown name, non-identifier expression, malformed reference).
    fn resolve_type_reference(&self, arena: &NodeArena, node: NodeIndex) -> Option<TypeId>;

    /// Whether the resolved type is a reference to a named declared type.
    ///
    /// Generic type parameters, unions, and other non-declaration types
    /// answer `false` and contribute nothing to inheritance.
    fn is_named_type_reference(&self, ty: TypeId) -> bool;

    /// The declaration nodes originating the type. Declaration merging can
    /// produce several (a class and an interface sharing one name).
    fn declarations(&self, ty: TypeId) -> &[NodeIndex];
}
