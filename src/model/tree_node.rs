//! Detached, nested copies of a subtree.
//!
//! Where [Index] keeps nodes flat and relates them by id, a [TreeNode] owns
//! its children directly. It is a snapshot: later loads neither change nor
//! invalidate it.

use crate::model::index::Index;
use crate::model::node::{NodeId, NodeRef};
use crate::model::tree::Tree;
use std::slice;

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// A node together with copies of all of its descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub id: NodeId,
    pub parent_id: NodeId,
    pub data: T,
    /// In sibling order; empty (and unallocated) for leaves
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn num_nodes(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over this subtree in pre-order (parents before
    /// children, siblings in order).
    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter { stack: vec![self] }
    }

    /// Ids of this subtree in pre-order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.iter().map(|node| node.id).collect()
    }
}

impl<'a, T> IntoIterator for &'a TreeNode<T> {
    type Item = &'a TreeNode<T>;
    type IntoIter = PreOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator for pre-order traversal of a [TreeNode].
///
/// Stack-based, so arbitrarily deep subtrees do not overflow.
pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Last child first, so the first child is visited next
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

// =#========================================================================#=
// MATERIALIZATION
// =#========================================================================#=
/// A node under construction plus its children still to be copied.
struct Frame<'a, T> {
    node: TreeNode<T>,
    pending: slice::Iter<'a, NodeRef<T>>,
}

impl<'a, T: Clone> Frame<'a, T> {
    fn new(node: &NodeRef<T>, index: &'a Index<T>) -> Self {
        let children = index.children_slice(node.id());
        Frame {
            node: TreeNode {
                id: node.id(),
                parent_id: node.parent_id(),
                data: node.data().clone(),
                children: Vec::with_capacity(children.len()),
            },
            pending: children.iter(),
        }
    }
}

impl<T: Clone> Index<T> {
    /// Copies the subtree rooted at `root_id` into a nested [TreeNode].
    ///
    /// Children appear in sibling order. Payloads are cloned.
    ///
    /// # Returns
    /// `None` if there is no node `root_id`.
    pub fn to_tree(&self, root_id: NodeId) -> Option<TreeNode<T>> {
        let root = self.node(root_id)?;
        let mut stack = vec![Frame::new(root, self)];

        // A frame is finished once all its children are; it is then moved
        // into the frame below it
        loop {
            let top = stack.last_mut()?;
            if let Some(child) = top.pending.next() {
                let frame = Frame::new(child, self);
                stack.push(frame);
                continue;
            }

            let finished = stack.pop()?.node;
            match stack.last_mut() {
                Some(parent) => parent.node.children.push(finished),
                None => return Some(finished),
            }
        }
    }
}

impl<T: Clone> Tree<T> {
    /// See [Index::to_tree].
    pub fn to_tree(&self, root_id: NodeId) -> Option<TreeNode<T>> {
        self.read().to_tree(root_id)
    }
}
