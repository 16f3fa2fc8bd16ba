//! Structural queries over an [Index]: ancestors, descendants, siblings,
//! paths and predicate search.
//!
//! None of these allocate state beyond their result and none recurse, so
//! arbitrarily deep (narrow) hierarchies are safe to traverse.

use crate::model::index::Index;
use crate::model::node::{NodeId, NodeRef, ROOT_ID, ids_of};

impl<T> Index<T> {
    // ============================================================================
    // Ancestors
    // ============================================================================
    /// Returns the ancestors of a node, nearest first.
    ///
    /// # Arguments
    /// * `id` - node to start from
    /// * `include_self` - whether the node itself leads the result
    ///
    /// # Returns
    /// Parent, grandparent, ... up to and including the root. Empty for
    /// unknown ids, and for roots unless `include_self` is set.
    pub fn ancestors(&self, id: NodeId, include_self: bool) -> Vec<NodeRef<T>> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };

        let mut ancestors = Vec::new();
        if include_self {
            ancestors.push(NodeRef::clone(node));
        }

        let mut current = node.parent_id();
        while current != ROOT_ID {
            let Some(parent) = self.node(current) else {
                break;
            };
            ancestors.push(NodeRef::clone(parent));
            current = parent.parent_id();
        }
        ancestors
    }

    /// Ids of [ancestors](Self::ancestors), nearest first.
    pub fn ancestor_ids(&self, id: NodeId, include_self: bool) -> Vec<NodeId> {
        ids_of(&self.ancestors(id, include_self))
    }

    /// Returns the path from the root down to a node as ids.
    ///
    /// The reverse of [ancestor_ids](Self::ancestor_ids): root first, the
    /// node itself last if `include_self` is set.
    pub fn node_path(&self, id: NodeId, include_self: bool) -> Vec<NodeId> {
        let mut path = self.ancestor_ids(id, include_self);
        path.reverse();
        path
    }

    /// Returns the id of the ancestor at a given depth of a node's chain.
    ///
    /// The node itself is never part of the chain.
    ///
    /// # Arguments
    /// * `id` - node whose ancestors are considered
    /// * `depth` - 1-based position in the chain
    /// * `from_root` - count from the root downwards (`1` is the root) instead
    ///   of from the node upwards (`1` is the parent)
    ///
    /// # Returns
    /// [ROOT_ID] if `depth` is not positive, exceeds the chain, or the node
    /// has no ancestors (including unknown nodes).
    ///
    /// # Example
    /// ```
    /// use arborist::{LoadOptions, Tree};
    ///
    /// let tree = Tree::from_items(
    ///     vec![(1, 0), (2, 1), (3, 2)],
    ///     &LoadOptions::new().with_id_fn(|r: &(i64, i64)| r.0).with_parent_id_fn(|r: &(i64, i64)| r.1),
    /// ).unwrap();
    ///
    /// assert_eq!(tree.ancestor_id_at_depth(3, 1, true), 1);
    /// assert_eq!(tree.ancestor_id_at_depth(3, 1, false), 2);
    /// assert_eq!(tree.ancestor_id_at_depth(3, 3, false), 0);
    /// ```
    pub fn ancestor_id_at_depth(&self, id: NodeId, depth: i32, from_root: bool) -> NodeId {
        let chain = self.ancestor_ids(id, false);
        if depth <= 0 || depth as usize > chain.len() {
            return ROOT_ID;
        }

        let depth = depth as usize;
        if from_root {
            chain[chain.len() - depth]
        } else {
            chain[depth - 1]
        }
    }

    /// Number of ancestors of a node: `0` for roots, `None` for unknown ids.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.parent_id(id)?;
        while let Some(parent) = self.node(current) {
            depth += 1;
            current = parent.parent_id();
        }
        Some(depth)
    }

    // ============================================================================
    // Descendants
    // ============================================================================
    /// Returns the descendants of a node.
    ///
    /// Order: all children of `id`, then for each child (in sibling order)
    /// its descendants, in the same manner.
    ///
    /// # Arguments
    /// * `id` - node whose descendants are collected (not included itself)
    /// * `max_depth` - levels below `id` to include; `0` means unlimited,
    ///   negative values yield nothing
    ///
    /// # Example
    /// With `1` having children `2, 3`, `2` having `4, 5`, and `3` having `6`:
    /// `descendants(1, 0)` yields `2, 3, 4, 5, 6` and `descendants(1, 1)`
    /// yields `2, 3`.
    pub fn descendants(&self, id: NodeId, max_depth: i32) -> Vec<NodeRef<T>> {
        let mut descendants = Vec::new();
        if max_depth < 0 {
            return descendants;
        }

        // (node, levels below `id`); children of a frame sit one level deeper
        let mut stack: Vec<(NodeId, i32)> = vec![(id, 0)];
        while let Some((current, depth)) = stack.pop() {
            if max_depth > 0 && depth >= max_depth {
                continue;
            }
            let children = self.children_slice(current);
            descendants.extend(children.iter().cloned());
            stack.extend(children.iter().rev().map(|child| (child.id(), depth + 1)));
        }
        descendants
    }

    /// Ids of [descendants](Self::descendants), in the same order.
    pub fn descendant_ids(&self, id: NodeId, max_depth: i32) -> Vec<NodeId> {
        ids_of(&self.descendants(id, max_depth))
    }

    // ============================================================================
    // Siblings
    // ============================================================================
    /// Returns the nodes sharing the parent of `id`, in sibling order.
    ///
    /// Roots are siblings of each other. Empty for unknown ids.
    pub fn siblings(&self, id: NodeId, include_self: bool) -> Vec<NodeRef<T>> {
        let Some(parent_id) = self.parent_id(id) else {
            return Vec::new();
        };
        self.children_slice(parent_id)
            .iter()
            .filter(|node| include_self || node.id() != id)
            .cloned()
            .collect()
    }

    /// Ids of [siblings](Self::siblings).
    pub fn sibling_ids(&self, id: NodeId, include_self: bool) -> Vec<NodeId> {
        ids_of(&self.siblings(id, include_self))
    }

    // ============================================================================
    // Predicate search
    // ============================================================================
    /// Returns the node with the smallest id whose payload matches.
    pub fn find_one<P>(&self, predicate: P) -> Option<NodeRef<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.scan()
            .find(|node| predicate(node.data()))
            .cloned()
    }

    /// Returns all nodes whose payload matches, ascending by id.
    pub fn find_all<P>(&self, predicate: P) -> Vec<NodeRef<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.scan()
            .filter(|node| predicate(node.data()))
            .cloned()
            .collect()
    }

    /// All nodes, ascending by id.
    fn scan(&self) -> impl Iterator<Item = &NodeRef<T>> {
        self.ids().iter().filter_map(|id| self.node(*id))
    }
}
