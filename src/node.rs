// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `Node` struct, the vertex type of a circuit graph.

use std::{
    any::Any,
    cell::RefCell,
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

use crate::graph_traits::Vertex;

/// A circuit node.
///
/// The `id` is fixed at construction and is the only thing that takes part in
/// hashing and equality, so a `Node` can be used as a key in hash based
/// containers even after it is renamed.
///
/// The name is kept behind a `RefCell` so that it can be changed while
/// branches hold shared references to the node.
pub struct Node {
    id: u64,
    name: RefCell<String>,
}

impl Node {
    /// Creates a new `Node`.
    ///
    /// If `name` is empty, the name defaults to the string form of `id`.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.is_empty() { id.to_string() } else { name };
        Self {
            id,
            name: RefCell::new(name),
        }
    }

    /// Returns the id of the node.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the current name of the node.
    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Renames the node.  The node's identity is not affected.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = name.into();
    }

    /// Returns a hash of the node's identity, which only depends on its id.
    pub fn identity_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node '{}' ({})", self.name.borrow(), self.id)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", std::any::type_name::<Self>(), self)
    }
}

impl Vertex for Node {
    fn vertex_id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display() {
        assert_eq!(Node::new(1, "one").to_string(), "Node 'one' (1)");
        assert_eq!(Node::new(2, "").to_string(), "Node '2' (2)");
    }

    #[test]
    fn test_debug() {
        let node = Node::new(1, "one");
        assert_eq!(
            format!("{:?}", node),
            format!("{} Node 'one' (1)", std::any::type_name::<Node>())
        );
    }

    #[test]
    fn test_hash_is_stable_under_renaming() {
        let node = Node::new(1, "one");
        let hash_before = node.identity_hash();

        for name in ["two", "", "a much longer name"] {
            node.set_name(name);
            assert_eq!(node.identity_hash(), hash_before);
        }
        assert_eq!(node.name(), "a much longer name");
        assert_eq!(node.id(), 1);
    }

    #[test]
    fn test_rename_while_matching_on_name() {
        let node = Node::new(1, "a");
        match node.name().as_str() {
            "a" => node.set_name("b"),
            _ => {}
        }
        assert_eq!(node.name(), "b");

        let old = node.name();
        node.set_name(format!("{old}-renamed"));
        assert_eq!(old, "b");
        assert_eq!(node.to_string(), "Node 'b-renamed' (1)");
        assert_eq!(node.label(), "b-renamed");
    }

    #[test]
    fn test_hash_set_membership() {
        let nodes = [Node::new(1, "one"), Node::new(2, "two")];
        let set: HashSet<&Node> = nodes.iter().collect();

        nodes[0].set_name("renamed");
        assert!(set.contains(&Node::new(1, "something else")));
        assert!(!set.contains(&Node::new(3, "one")));
        assert_eq!(Node::new(1, "a"), Node::new(1, "b"));
    }

    #[test]
    fn test_vertex() {
        let node = Node::new(7, "");
        assert_eq!(node.vertex_id(), 7);
        assert_eq!(node.label(), "7");
        assert!(node.as_any().is::<Node>());
    }
}
