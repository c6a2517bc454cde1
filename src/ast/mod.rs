//! Arena-based syntax tree for the analysis.

pub mod arena;
pub mod base;
pub mod builder;
pub mod node;

pub use arena::{NodeArena, Visibility, has_modifier, has_static_modifier, visibility_of};
pub use base::{NodeIndex, NodeList};
pub use builder::TreeBuilder;
pub use node::{Node, NodeData};
