//! Indexed nodes and their identities.

use std::sync::Arc;

/// Identity of a node in an [Index](crate::model::Index).
///
/// Valid node ids are positive. Parent ids are non-negative, with
/// [ROOT_ID] standing for "no parent".
pub type NodeId = i64;

/// Parent id of a root node, i.e. the virtual root all roots hang from.
pub const ROOT_ID: NodeId = 0;

/// Shared handle to a node owned by an index.
pub type NodeRef<T> = Arc<Node<T>>;

/// Ordered, shared, read-only list of nodes (e.g. the children of a parent).
pub type NodeList<T> = Arc<[NodeRef<T>]>;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A record indexed by its identity and the identity of its parent.
///
/// A node never refers to other nodes directly. The index owns all nodes and
/// exposes relations through lookups, so nodes never form ownership cycles.
///
/// # Invariants (after a successful load)
/// - `id` is positive and unique within its index
/// - `parent_id` is non-negative; [ROOT_ID] marks a root
/// - a non-root `parent_id` names a node of the same index
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    id: NodeId,
    parent_id: NodeId,
    data: T,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, parent_id: NodeId, data: T) -> Self {
        Node {
            id,
            parent_id,
            data,
        }
    }

    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the identity of the parent, [ROOT_ID] for roots.
    pub fn parent_id(&self) -> NodeId {
        self.parent_id
    }

    /// Returns a reference to the payload this node was loaded from.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_ID
    }
}

/// Projects a list of nodes onto their ids, keeping the order.
pub(crate) fn ids_of<T>(nodes: &[NodeRef<T>]) -> Vec<NodeId> {
    nodes.iter().map(|node| node.id()).collect()
}
