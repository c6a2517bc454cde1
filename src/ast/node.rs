//! Node representation: a span header plus typed per-kind data.
//!
//! Each node kind keeps its own data struct so accessors stay typed and
//! pattern matches stay shallow. Decorators ride in the `modifiers` list of
//! the node they annotate, as `Decorator` nodes alongside modifier keyword
//! tokens — the same shape modern TypeScript trees use.

use super::base::{NodeIndex, NodeList};
use crate::span::Span;
use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Serialize};

/// Data for identifier nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for computed property names: `[expr]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComputedPropertyNameData {
    pub expression: NodeIndex,
}

/// Data for decorator nodes: `@expr`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecoratorData {
    pub expression: NodeIndex,
}

/// Data for heritage clauses: `extends T` / `implements A, B`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageData {
    /// `ExtendsKeyword` or `ImplementsKeyword`
    pub token: SyntaxKind,
    pub types: NodeList,
}

/// Data for a heritage type entry: `Base<T>`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// Data for class declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

/// Data for interface declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterfaceData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

/// Data for property declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub initializer: NodeIndex,
}

/// Data for method declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// Data for constructor declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConstructorData {
    pub modifiers: Option<NodeList>,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// Data for property/method signatures on interfaces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignatureData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
}

/// Data for module (namespace) declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub body: NodeIndex,
}

/// Data for module blocks: `{ statements }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleBlockData {
    pub statements: NodeList,
}

/// Data for block statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Data for source files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub statements: NodeList,
}

/// Typed payload of a node, one variant per kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum NodeData {
    /// Bare tokens (modifier keywords)
    Token(SyntaxKind),
    Identifier(IdentifierData),
    ComputedPropertyName(ComputedPropertyNameData),
    Decorator(DecoratorData),
    HeritageClause(HeritageData),
    ExpressionWithTypeArguments(ExprWithTypeArgsData),
    ClassDeclaration(ClassData),
    InterfaceDeclaration(InterfaceData),
    PropertyDeclaration(PropertyDeclData),
    MethodDeclaration(MethodDeclData),
    Constructor(ConstructorData),
    PropertySignature(SignatureData),
    MethodSignature(SignatureData),
    ModuleDeclaration(ModuleData),
    ModuleBlock(ModuleBlockData),
    Block(BlockData),
    SourceFile(SourceFileData),
}

impl NodeData {
    /// The syntax kind this payload represents.
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeData::Token(kind) => *kind,
            NodeData::Identifier(_) => SyntaxKind::Identifier,
            NodeData::ComputedPropertyName(_) => SyntaxKind::ComputedPropertyName,
            NodeData::Decorator(_) => SyntaxKind::Decorator,
            NodeData::HeritageClause(_) => SyntaxKind::HeritageClause,
            NodeData::ExpressionWithTypeArguments(_) => SyntaxKind::ExpressionWithTypeArguments,
            NodeData::ClassDeclaration(_) => SyntaxKind::ClassDeclaration,
            NodeData::InterfaceDeclaration(_) => SyntaxKind::InterfaceDeclaration,
            NodeData::PropertyDeclaration(_) => SyntaxKind::PropertyDeclaration,
            NodeData::MethodDeclaration(_) => SyntaxKind::MethodDeclaration,
            NodeData::Constructor(_) => SyntaxKind::Constructor,
            NodeData::PropertySignature(_) => SyntaxKind::PropertySignature,
            NodeData::MethodSignature(_) => SyntaxKind::MethodSignature,
            NodeData::ModuleDeclaration(_) => SyntaxKind::ModuleDeclaration,
            NodeData::ModuleBlock(_) => SyntaxKind::ModuleBlock,
            NodeData::Block(_) => SyntaxKind::Block,
            NodeData::SourceFile(_) => SyntaxKind::SourceFile,
        }
    }
}

/// A node: source span plus typed payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub span: Span,
    pub data: NodeData,
}

impl Node {
    pub fn new(data: NodeData, span: Span) -> Node {
        Node { span, data }
    }

    /// The syntax kind of this node.
    pub fn kind(&self) -> SyntaxKind {
        self.data.kind()
    }
}
