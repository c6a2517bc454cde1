//! Programmatic tree construction.
//!
//! Trees reach this crate already parsed (the parser is the external
//! provider's concern), so the builder is the seam through which providers
//! and tests materialize syntax trees into a [`NodeArena`].
//!
//! Spans are synthetic and strictly increasing in allocation order, so a
//! tree built in document order reports findings in document order.

use super::arena::NodeArena;
use super::base::{NodeIndex, NodeList};
use super::node::*;
use crate::span::Span;
use crate::syntax_kind::SyntaxKind;

/// Builds nodes into an owned arena.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: NodeArena,
    pos: u32,
}

impl TreeBuilder {
    pub fn new() -> TreeBuilder {
        TreeBuilder {
            arena: NodeArena::new(),
            pos: 0,
        }
    }

    /// Consume the builder and return the finished arena.
    pub fn finish(self) -> NodeArena {
        self.arena
    }

    fn alloc(&mut self, data: NodeData) -> NodeIndex {
        let span = Span::new(self.pos, self.pos + 1);
        self.pos += 1;
        self.arena.add(Node::new(data, span))
    }

    pub fn identifier(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::Identifier(IdentifierData {
            escaped_text: text.to_string(),
        }))
    }

    pub fn token(&mut self, kind: SyntaxKind) -> NodeIndex {
        self.alloc(NodeData::Token(kind))
    }

    pub fn computed_property_name(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ComputedPropertyName(ComputedPropertyNameData {
            expression,
        }))
    }

    /// `@name` decorator.
    pub fn decorator(&mut self, name: &str) -> NodeIndex {
        let expression = self.identifier(name);
        self.alloc(NodeData::Decorator(DecoratorData { expression }))
    }

    /// The `@override` marker decorator.
    pub fn override_decorator(&mut self) -> NodeIndex {
        self.decorator("override")
    }

    /// A heritage type entry referring to a named type.
    pub fn type_expr(&mut self, name: &str) -> NodeIndex {
        let expression = self.identifier(name);
        self.alloc(NodeData::ExpressionWithTypeArguments(ExprWithTypeArgsData {
            expression,
            type_arguments: None,
        }))
    }

    pub fn heritage_clause(&mut self, token: SyntaxKind, types: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::HeritageClause(HeritageData {
            token,
            types: NodeList::new(types),
        }))
    }

    /// `extends Name` clause.
    pub fn extends_clause(&mut self, name: &str) -> NodeIndex {
        let ty = self.type_expr(name);
        self.heritage_clause(SyntaxKind::ExtendsKeyword, vec![ty])
    }

    /// `implements Name` clause.
    pub fn implements_clause(&mut self, name: &str) -> NodeIndex {
        let ty = self.type_expr(name);
        self.heritage_clause(SyntaxKind::ImplementsKeyword, vec![ty])
    }

    pub fn class(
        &mut self,
        name: &str,
        heritage_clauses: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        let name = self.identifier(name);
        let heritage_clauses = if heritage_clauses.is_empty() {
            None
        } else {
            Some(NodeList::new(heritage_clauses))
        };
        self.alloc(NodeData::ClassDeclaration(ClassData {
            modifiers: None,
            name,
            heritage_clauses,
            members: NodeList::new(members),
        }))
    }

    pub fn interface(
        &mut self,
        name: &str,
        heritage_clauses: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        let name = self.identifier(name);
        let heritage_clauses = if heritage_clauses.is_empty() {
            None
        } else {
            Some(NodeList::new(heritage_clauses))
        };
        self.alloc(NodeData::InterfaceDeclaration(InterfaceData {
            modifiers: None,
            name,
            heritage_clauses,
            members: NodeList::new(members),
        }))
    }

    pub fn property(&mut self, modifiers: Vec<NodeIndex>, name: &str) -> NodeIndex {
        let name = self.identifier(name);
        self.property_named(modifiers, name)
    }

    pub fn property_named(&mut self, modifiers: Vec<NodeIndex>, name: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::PropertyDeclaration(PropertyDeclData {
            modifiers: to_modifier_list(modifiers),
            name,
            question_token: false,
            initializer: NodeIndex::NONE,
        }))
    }

    pub fn method(&mut self, modifiers: Vec<NodeIndex>, name: &str) -> NodeIndex {
        let name = self.identifier(name);
        self.method_named(modifiers, name)
    }

    pub fn method_named(&mut self, modifiers: Vec<NodeIndex>, name: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::MethodDeclaration(MethodDeclData {
            modifiers: to_modifier_list(modifiers),
            name,
            question_token: false,
            parameters: NodeList::empty(),
            body: NodeIndex::NONE,
        }))
    }

    /// A method whose body contains the given statements.
    pub fn method_with_body(
        &mut self,
        modifiers: Vec<NodeIndex>,
        name: &str,
        statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        let name = self.identifier(name);
        let body = self.block(statements);
        self.alloc(NodeData::MethodDeclaration(MethodDeclData {
            modifiers: to_modifier_list(modifiers),
            name,
            question_token: false,
            parameters: NodeList::empty(),
            body,
        }))
    }

    pub fn constructor(&mut self, modifiers: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::Constructor(ConstructorData {
            modifiers: to_modifier_list(modifiers),
            parameters: NodeList::empty(),
            body: NodeIndex::NONE,
        }))
    }

    pub fn property_signature(&mut self, name: &str) -> NodeIndex {
        let name = self.identifier(name);
        self.alloc(NodeData::PropertySignature(SignatureData {
            modifiers: None,
            name,
            question_token: false,
        }))
    }

    pub fn method_signature(&mut self, name: &str) -> NodeIndex {
        let name = self.identifier(name);
        self.alloc(NodeData::MethodSignature(SignatureData {
            modifiers: None,
            name,
            question_token: false,
        }))
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::Block(BlockData {
            statements: NodeList::new(statements),
        }))
    }

    /// `namespace name { statements }`
    pub fn module(&mut self, name: &str, statements: Vec<NodeIndex>) -> NodeIndex {
        let name = self.identifier(name);
        let body = self.alloc(NodeData::ModuleBlock(ModuleBlockData {
            statements: NodeList::new(statements),
        }));
        self.alloc(NodeData::ModuleDeclaration(ModuleData {
            modifiers: None,
            name,
            body,
        }))
    }

    pub fn source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::SourceFile(SourceFileData {
            statements: NodeList::new(statements),
        }))
    }
}

fn to_modifier_list(modifiers: Vec<NodeIndex>) -> Option<NodeList> {
    if modifiers.is_empty() {
        None
    } else {
        Some(NodeList::new(modifiers))
    }
}
