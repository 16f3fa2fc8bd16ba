//! The validated node set: identity map, ordered children, scan order.

use crate::loader::SiblingOrder;
use crate::model::node::{Node, NodeId, NodeList, NodeRef, ROOT_ID, ids_of};
use rustc_hash::FxHashMap;
use std::sync::Arc;

// =#========================================================================#=
// INDEX
// =#========================================================================#=
/// A validated set of nodes with precomputed relations.
///
/// All nodes are owned here (arena-like) and handed out as shared
/// [NodeRef]s; relations are exposed through two lookup maps instead of
/// pointers between nodes:
/// - `nodes`: id → node
/// - `children`: parent id → children, ordered by the [SiblingOrder] used
///   at load time (roots are the children of [ROOT_ID])
///
/// Additionally, all ids are kept in ascending order, so that full scans
/// (e.g. [find_one](Index::find_one)) are deterministic.
///
/// An index is only ever produced by the loader, so the invariants of
/// [Node] hold for every index in existence. It is immutable except for
/// [resort](Index::resort), which reorders all children lists at once.
#[derive(Debug)]
pub struct Index<T> {
    /// All nodes by id
    nodes: FxHashMap<NodeId, NodeRef<T>>,

    /// Ordered children lists by parent id; parents without children are absent
    children: FxHashMap<NodeId, NodeList<T>>,

    /// All ids, ascending
    ids: Vec<NodeId>,

    /// Position of each node in the loaded input, for stable re-sorting
    positions: FxHashMap<NodeId, usize>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<T> Index<T> {
    /// Creates an empty index, the state of a tree before its first load.
    pub fn empty() -> Self {
        Index {
            nodes: FxHashMap::default(),
            children: FxHashMap::default(),
            ids: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Assembles an index from already validated nodes (in input order).
    ///
    /// Children lists are filled in input order and then stably sorted by
    /// `order`, so siblings that compare equal keep their input order.
    pub(crate) fn from_validated(nodes: Vec<Node<T>>, order: &SiblingOrder<T>) -> Self {
        let mut by_id = FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        let mut grouped: FxHashMap<NodeId, Vec<NodeRef<T>>> = FxHashMap::default();
        let mut ids = Vec::with_capacity(nodes.len());
        let mut positions = FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());

        for (position, node) in nodes.into_iter().enumerate() {
            let node = Arc::new(node);
            ids.push(node.id());
            positions.insert(node.id(), position);
            grouped
                .entry(node.parent_id())
                .or_default()
                .push(Arc::clone(&node));
            by_id.insert(node.id(), node);
        }
        ids.sort_unstable();

        let children = grouped
            .into_iter()
            .map(|(parent_id, mut list)| {
                order.sort(&mut list);
                (parent_id, NodeList::from(list))
            })
            .collect();

        Index {
            nodes: by_id,
            children,
            ids,
            positions,
        }
    }

    /// Reorders every children list according to `order`.
    ///
    /// All lists are rebuilt; lists handed out earlier are left untouched.
    /// Ties resolve by input position, exactly as during the load.
    pub(crate) fn resort(&mut self, order: &SiblingOrder<T>) {
        let positions = &self.positions;
        for list in self.children.values_mut() {
            let mut sorted = list.to_vec();
            sorted.sort_by_key(|node| positions.get(&node.id()).copied().unwrap_or(usize::MAX));
            order.sort(&mut sorted);
            *list = NodeList::from(sorted);
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the index holds no nodes (nothing loaded yet).
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns whether a node with the given id exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns all ids in ascending order.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Returns the node with the given id, or `None` if there is none.
    pub fn find_node(&self, id: NodeId) -> Option<NodeRef<T>> {
        self.nodes.get(&id).cloned()
    }

    /// Borrowing variant of [find_node](Self::find_node).
    pub(crate) fn node(&self, id: NodeId) -> Option<&NodeRef<T>> {
        self.nodes.get(&id)
    }

    /// Returns the parent of the given node.
    ///
    /// # Returns
    /// `None` if the node does not exist or is a root.
    pub fn parent(&self, id: NodeId) -> Option<NodeRef<T>> {
        let node = self.nodes.get(&id)?;
        self.find_node(node.parent_id())
    }

    /// Returns the parent id of the given node.
    ///
    /// # Returns
    /// `Some(ROOT_ID)` for roots, `None` only if the node does not exist.
    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).map(|node| node.parent_id())
    }

    /// Returns the ordered children of the given node.
    ///
    /// The list is shared with the index, not copied; it is empty for leaves
    /// and for unknown ids. Passing [ROOT_ID] yields the roots.
    pub fn children(&self, id: NodeId) -> NodeList<T> {
        match self.children.get(&id) {
            Some(list) => Arc::clone(list),
            None => NodeList::from(Vec::new()),
        }
    }

    /// Borrowing variant of [children](Self::children).
    pub(crate) fn children_slice(&self, id: NodeId) -> &[NodeRef<T>] {
        self.children.get(&id).map(|list| &list[..]).unwrap_or(&[])
    }

    /// Returns the ids of the ordered children of the given node.
    pub fn children_ids(&self, id: NodeId) -> Vec<NodeId> {
        ids_of(self.children_slice(id))
    }

    /// Returns all roots (nodes with parent [ROOT_ID]) in sibling order.
    pub fn roots(&self) -> NodeList<T> {
        self.children(ROOT_ID)
    }

    /// Number of roots.
    pub fn num_roots(&self) -> usize {
        self.children_slice(ROOT_ID).len()
    }
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self::empty()
    }
}
