//! `override_rule` — the declare-override lint analysis.
//!
//! Enforces an explicit `@override` decorator on every class member that
//! redefines a member inherited from an ancestor class, and flags the
//! decorator wherever it marks a member that overrides nothing.
//!
//! # Architecture
//!
//! - [`ast`] — an arena syntax tree the external provider materializes
//!   through [`ast::TreeBuilder`]; the analysis never parses source text.
//! - [`resolver`] — the injected type-resolution boundary
//!   ([`resolver::TypeResolver`]); [`binder::FileBinder`] is the built-in
//!   file-local implementation.
//! - [`checker::heritage`] — resolves a class's ancestor chain into the
//!   set of inherited member names eligible for the marker.
//! - [`checker`] — walks each file, classifies members against that set,
//!   and reports [`diagnostics::Finding`]s in document order.
//!
//! The analysis is synchronous and infallible per file: unresolvable
//! ancestors and unnameable members contribute nothing rather than
//! erroring. Independent files can be checked in parallel with
//! [`checker::run_rule_many`].
//!
//! # Example
//!
//! ```
//! use override_rule::ast::TreeBuilder;
//! use override_rule::{FindingKind, run_rule};
//!
//! let mut b = TreeBuilder::new();
//! let base_method = b.method(vec![], "render");
//! let base = b.class("Base", vec![], vec![base_method]);
//!
//! let ext = b.extends_clause("Base");
//! let redefined = b.method(vec![], "render"); // missing @override
//! let derived = b.class("Derived", vec![ext], vec![redefined]);
//!
//! let root = b.source_file(vec![base, derived]);
//! let arena = b.finish();
//!
//! let findings = run_rule(&arena, root, "example.ts");
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].kind, FindingKind::MissingOverride);
//! ```

pub mod ast;
pub mod binder;
pub mod checker;
pub mod diagnostics;
pub mod resolver;
pub mod source_file;
pub mod span;
pub mod syntax_kind;

/// The rule's name, as it appears in formatted findings.
pub const RULE_NAME: &str = "declare-override";

/// The rule's one-line description. The rule takes no options.
pub const RULE_DESCRIPTION: &str =
    "Overrides must be declared by the presence of an @override decorator";

pub use ast::{NodeArena, NodeIndex, TreeBuilder};
pub use binder::FileBinder;
pub use checker::{SourceUnit, check_source_file, run_rule, run_rule_many};
pub use diagnostics::{Finding, FindingBag, FindingKind};
pub use resolver::{TypeId, TypeResolver};
pub use source_file::SourceFile;
pub use span::Span;
pub use syntax_kind::SyntaxKind;
