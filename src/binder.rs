//! File-local symbol table.
//!
//! The binder records every class and interface declaration in a source
//! file under its name, merging repeated declarations into one symbol.
//! It is the default [`TypeResolver`] for single-file analysis; a driver
//! with a real type checker can substitute its own.

use crate::ast::{NodeArena, NodeData, NodeIndex};
use crate::resolver::{TypeId, TypeResolver};
use rustc_hash::FxHashMap;

/// A named declaration set.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub declarations: Vec<NodeIndex>,
}

/// Binds one source file's type declarations by name.
#[derive(Debug, Default)]
pub struct FileBinder {
    symbols: Vec<Symbol>,
    pub file_locals: FxHashMap<String, TypeId>,
}

impl FileBinder {
    pub fn new() -> FileBinder {
        FileBinder::default()
    }

    /// Walk the file and record every class and interface declaration.
    pub fn bind_source_file(&mut self, arena: &NodeArena, root: NodeIndex) {
        self.bind_node(arena, root);
        tracing::debug!(symbols = self.symbols.len(), "bound source file");
    }

    fn bind_node(&mut self, arena: &NodeArena, index: NodeIndex) {
        let Some(node) = arena.get(index) else {
            return;
        };

        let name_idx = match &node.data {
            NodeData::ClassDeclaration(class) => Some(class.name),
            NodeData::InterfaceDeclaration(interface) => Some(interface.name),
            _ => None,
        };
        if let Some(name_idx) = name_idx
            && let Some(name) = arena.identifier_text(name_idx)
        {
            self.declare(name, index);
        }

        for child in arena.get_children(index) {
            self.bind_node(arena, child);
        }
    }

    fn declare(&mut self, name: &str, declaration: NodeIndex) {
        if let Some(&id) = self.file_locals.get(name) {
            // Declaration merging: same name, additional declaration
            self.symbols[id.0 as usize].declarations.push(declaration);
        } else {
            let id = TypeId(self.symbols.len() as u32);
            self.symbols.push(Symbol {
                name: name.to_string(),
                declarations: vec![declaration],
            });
            self.file_locals.insert(name.to_string(), id);
        }
    }

    /// Look up a symbol by resolved type id.
    pub fn get_symbol(&self, id: TypeId) -> Option<&Symbol> {
        self.symbols.get(id.0 as usize)
    }
}

impl TypeResolver for FileBinder {
    fn resolve_type_reference(&self, arena: &NodeArena, node: NodeIndex) -> Option<TypeId> {
        let node_ref = arena.get(node)?;

        // Heritage entries arrive as expression-with-type-arguments; a bare
        // identifier is accepted for providers that skip the wrapper.
        let expr_idx = match &node_ref.data {
            NodeData::ExpressionWithTypeArguments(expr) => expr.expression,
            NodeData::Identifier(_) => node,
            _ => return None,
        };

        let name = arena.identifier_text(expr_idx)?;
        self.file_locals.get(name).copied()
    }

    fn is_named_type_reference(&self, ty: TypeId) -> bool {
        (ty.0 as usize) < self.symbols.len()
    }

    fn declarations(&self, ty: TypeId) -> &[NodeIndex] {
        self.get_symbol(ty)
            .map(|symbol| symbol.declarations.as_slice())
            .unwrap_or(&[])
    }
}
