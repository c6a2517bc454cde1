//! Node arena for AST storage.
//!
//! Nodes are stored contiguously and referenced by index. The analysis only
//! reads the arena; mutation stops once the tree provider hands it over.

use super::base::{NodeIndex, NodeList};
use super::node::{
    ClassData, DecoratorData, HeritageData, MethodDeclData, Node, NodeData, PropertyDeclData,
};
use crate::syntax_kind::SyntaxKind;
use serde::Serialize;

/// Member access level. Unannotated members default to public.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Arena-based storage for AST nodes.
#[derive(Debug, Default, Serialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the arena and return its index
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    /// Get a node by index
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Typed accessors
    // =========================================================================

    /// Get class data if the node is a class declaration.
    pub fn get_class<'n>(&self, node: &'n Node) -> Option<&'n ClassData> {
        match &node.data {
            NodeData::ClassDeclaration(class) => Some(class),
            _ => None,
        }
    }

    /// Get heritage clause data if the node is a heritage clause.
    pub fn get_heritage_clause<'n>(&self, node: &'n Node) -> Option<&'n HeritageData> {
        match &node.data {
            NodeData::HeritageClause(heritage) => Some(heritage),
            _ => None,
        }
    }

    /// Get method data if the node is a method declaration.
    pub fn get_method_decl<'n>(&self, node: &'n Node) -> Option<&'n MethodDeclData> {
        match &node.data {
            NodeData::MethodDeclaration(method) => Some(method),
            _ => None,
        }
    }

    /// Get property data if the node is a property declaration.
    pub fn get_property_decl<'n>(&self, node: &'n Node) -> Option<&'n PropertyDeclData> {
        match &node.data {
            NodeData::PropertyDeclaration(prop) => Some(prop),
            _ => None,
        }
    }

    /// Get decorator data if the node is a decorator.
    pub fn get_decorator<'n>(&self, node: &'n Node) -> Option<&'n DecoratorData> {
        match &node.data {
            NodeData::Decorator(decorator) => Some(decorator),
            _ => None,
        }
    }

    /// Get the text of an identifier node.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Identifier(ident) => Some(&ident.escaped_text),
            _ => None,
        }
    }

    /// Get the declared name of a member.
    ///
    /// Computed property names have no statically known text and yield
    /// `None`; such members are invisible to the analysis.
    pub fn property_name_text(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Identifier(ident) => Some(&ident.escaped_text),
            NodeData::ComputedPropertyName(_) => None,
            _ => None,
        }
    }

    /// Get the kind of a node by index.
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind())
    }

    /// Collect the child indices of a node in document order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let node = match self.get(index) {
            Some(n) => n,
            None => return Vec::new(),
        };

        let add_opt = |children: &mut Vec<NodeIndex>, idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };
        let add_list = |children: &mut Vec<NodeIndex>, list: &NodeList| {
            children.extend(list.nodes.iter().copied());
        };
        let add_opt_list = |children: &mut Vec<NodeIndex>, list: &Option<NodeList>| {
            if let Some(l) = list {
                children.extend(l.nodes.iter().copied());
            }
        };

        let mut children = Vec::new();

        match &node.data {
            NodeData::ComputedPropertyName(name) => {
                add_opt(&mut children, name.expression);
            }
            NodeData::Decorator(decorator) => {
                add_opt(&mut children, decorator.expression);
            }
            NodeData::HeritageClause(heritage) => {
                add_list(&mut children, &heritage.types);
            }
            NodeData::ExpressionWithTypeArguments(expr) => {
                add_opt(&mut children, expr.expression);
                add_opt_list(&mut children, &expr.type_arguments);
            }
            NodeData::ClassDeclaration(class) => {
                add_opt_list(&mut children, &class.modifiers);
                add_opt(&mut children, class.name);
                add_opt_list(&mut children, &class.heritage_clauses);
                add_list(&mut children, &class.members);
            }
            NodeData::InterfaceDeclaration(interface) => {
                add_opt_list(&mut children, &interface.modifiers);
                add_opt(&mut children, interface.name);
                add_opt_list(&mut children, &interface.heritage_clauses);
                add_list(&mut children, &interface.members);
            }
            NodeData::PropertyDeclaration(prop) => {
                add_opt_list(&mut children, &prop.modifiers);
                add_opt(&mut children, prop.name);
                add_opt(&mut children, prop.initializer);
            }
            NodeData::MethodDeclaration(method) => {
                add_opt_list(&mut children, &method.modifiers);
                add_opt(&mut children, method.name);
                add_list(&mut children, &method.parameters);
                add_opt(&mut children, method.body);
            }
            NodeData::Constructor(ctor) => {
                add_opt_list(&mut children, &ctor.modifiers);
                add_list(&mut children, &ctor.parameters);
                add_opt(&mut children, ctor.body);
            }
            NodeData::PropertySignature(sig) | NodeData::MethodSignature(sig) => {
                add_opt_list(&mut children, &sig.modifiers);
                add_opt(&mut children, sig.name);
            }
            NodeData::ModuleDeclaration(module) => {
                add_opt_list(&mut children, &module.modifiers);
                add_opt(&mut children, module.name);
                add_opt(&mut children, module.body);
            }
            NodeData::ModuleBlock(block) => {
                add_list(&mut children, &block.statements);
            }
            NodeData::Block(block) => {
                add_list(&mut children, &block.statements);
            }
            NodeData::SourceFile(file) => {
                add_list(&mut children, &file.statements);
            }
            // Tokens and identifiers have no children
            NodeData::Token(_) | NodeData::Identifier(_) => {}
        }

        children
    }
}

// =============================================================================
// Modifier helpers
// =============================================================================

/// Check if a modifier list contains a keyword of the given kind.
pub fn has_modifier(arena: &NodeArena, modifiers: &Option<NodeList>, kind: SyntaxKind) -> bool {
    let Some(list) = modifiers else {
        return false;
    };
    list.nodes
        .iter()
        .any(|&idx| arena.kind(idx) == Some(kind))
}

/// Check if a member is explicitly marked `static`.
pub fn has_static_modifier(arena: &NodeArena, modifiers: &Option<NodeList>) -> bool {
    has_modifier(arena, modifiers, SyntaxKind::StaticKeyword)
}

/// The access level declared by a modifier list. Defaults to public.
pub fn visibility_of(arena: &NodeArena, modifiers: &Option<NodeList>) -> Visibility {
    if has_modifier(arena, modifiers, SyntaxKind::PrivateKeyword) {
        Visibility::Private
    } else if has_modifier(arena, modifiers, SyntaxKind::ProtectedKeyword) {
        Visibility::Protected
    } else {
        Visibility::Public
    }
}
