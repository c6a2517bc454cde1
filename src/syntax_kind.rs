//! Syntax kinds for the node and token shapes the analysis distinguishes.
//!
//! This is a deliberate subset of a full TypeScript kind enumeration: the
//! rule only needs to tell classes, heritage clauses, members, decorators,
//! and modifier keywords apart. Everything else arrives as opaque structure
//! that the walker descends through.

use serde::{Deserialize, Serialize};

/// Kind tag for nodes and tokens (u16 to match external tree providers).
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,

    // Names
    Identifier,
    ComputedPropertyName,

    // Modifier keywords
    StaticKeyword,
    PublicKeyword,
    ProtectedKeyword,
    PrivateKeyword,
    AbstractKeyword,
    ReadonlyKeyword,
    DeclareKeyword,
    ExportKeyword,
    AsyncKeyword,

    // Heritage tokens
    ExtendsKeyword,
    ImplementsKeyword,

    // Nodes
    Decorator,
    HeritageClause,
    ExpressionWithTypeArguments,
    ClassDeclaration,
    InterfaceDeclaration,
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    PropertySignature,
    MethodSignature,
    ModuleDeclaration,
    ModuleBlock,
    Block,
    SourceFile,
}

impl SyntaxKind {
    /// Whether this kind is a modifier keyword token.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::StaticKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::AsyncKeyword
        )
    }

    /// Whether this kind is a class member declaration.
    pub fn is_class_member(self) -> bool {
        matches!(
            self,
            SyntaxKind::PropertyDeclaration
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::Constructor
        )
    }
}
