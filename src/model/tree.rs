//! A reloadable hierarchy shared between threads.
//!
//! [Tree] wraps an [Index] in one readers-writer lock. All lookups take the
//! lock in shared mode; replacing the index after a load and re-sorting
//! children take it exclusively. Readers therefore always observe either
//! the complete previous or the complete new node set.

use crate::loader::validator::build_index;
use crate::loader::{LoadError, LoadOptions, SiblingOrder};
use crate::model::index::Index;
use crate::model::node::{NodeId, NodeList, NodeRef};
use log::{debug, warn};
use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard};
use std::fmt;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// Thread-safe hierarchy over payloads of type `T`.
///
/// A tree is empty until the first successful [load](Tree::load). Each load
/// replaces the entire node set; a rejected load leaves the previous one in
/// place. Queries never fail: unknown ids yield `None` or empty results.
///
/// Every query takes the lock on its own. To run several queries against
/// the same state, use [with_index](Tree::with_index).
///
/// # Example
/// ```
/// use arborist::{LoadOptions, Tree};
///
/// struct Category {
///     id: i64,
///     parent_id: i64,
///     name: &'static str,
/// }
///
/// let categories = vec![
///     Category { id: 1, parent_id: 0, name: "Animals" },
///     Category { id: 2, parent_id: 1, name: "Birds" },
///     Category { id: 3, parent_id: 1, name: "Fish" },
///     Category { id: 4, parent_id: 2, name: "Owls" },
/// ];
/// let options = LoadOptions::new()
///     .with_id_fn(|c: &Category| c.id)
///     .with_parent_id_fn(|c: &Category| c.parent_id);
///
/// let tree = Tree::new();
/// tree.load(categories, &options).unwrap();
///
/// assert_eq!(tree.children_ids(1), vec![2, 3]);
/// assert_eq!(tree.node_path(4, true), vec![1, 2, 4]);
/// assert_eq!(tree.find_one(|c| c.name == "Fish").map(|n| n.id()), Some(3));
/// ```
pub struct Tree<T> {
    index: RwLock<Index<T>>,
}

// ============================================================================
// New, Loading, etc. (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree {
            index: RwLock::new(Index::empty()),
        }
    }

    /// Creates a tree and loads `items` into it.
    ///
    /// # Errors
    /// The [LoadError] of the failed load.
    pub fn from_items<I>(items: I, options: &LoadOptions<T>) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = T>,
    {
        let tree = Tree::new();
        tree.load(items, options)?;
        Ok(tree)
    }

    /// Replaces the node set with `items`.
    ///
    /// The input is validated completely before anything changes; see
    /// [LoadOptions] for the configuration and [LoadError] for the checks.
    /// Concurrent loads run one after another, while lookups continue to
    /// see the previous node set until the new one is swapped in.
    ///
    /// # Errors
    /// The first violation found. The previously loaded node set (if any)
    /// stays in place.
    pub fn load<I>(&self, items: I, options: &LoadOptions<T>) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = T>,
    {
        // Upgradable: excludes other loads and writers, not readers
        let guard = self.index.upgradable_read();
        let index = match build_index(items, options) {
            Ok(index) => index,
            Err(err) => {
                warn!("Rejected load ({:?}): {}", err.category(), err);
                return Err(err);
            }
        };

        let (num_nodes, num_roots) = (index.len(), index.num_roots());
        let previous = {
            let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
            std::mem::replace(&mut *guard, index)
        };
        debug!(
            "Loaded {} nodes with {} roots (replacing {} nodes)",
            num_nodes,
            num_roots,
            previous.len()
        );
        Ok(())
    }

    /// Reorders the children of every node according to `order`.
    ///
    /// Siblings comparing equal keep their input order. Lists returned
    /// earlier by [children](Self::children) are not affected. The order
    /// applies to the current node set only; the next load uses the order
    /// of its own [LoadOptions].
    pub fn set_sibling_order(&self, order: SiblingOrder<T>) {
        let mut index = self.index.write();
        index.resort(&order);
        debug!("Re-sorted children of {} nodes by {:?}", index.len(), order);
    }

    /// Runs `f` on the current index while holding the lock in shared mode.
    ///
    /// All queries made through `f` see the same node set, even if another
    /// thread loads concurrently. Do not call [load](Self::load) or
    /// [set_sibling_order](Self::set_sibling_order) on the same tree from
    /// within `f`.
    ///
    /// # Example
    /// ```
    /// use arborist::{LoadOptions, Tree};
    ///
    /// let options = LoadOptions::new()
    ///     .with_id_fn(|r: &(i64, i64)| r.0)
    ///     .with_parent_id_fn(|r: &(i64, i64)| r.1);
    /// let tree = Tree::from_items(vec![(1, 0), (2, 1), (3, 1)], &options).unwrap();
    ///
    /// let (children, leaves) = tree.with_index(|index| {
    ///     let children = index.children_ids(1);
    ///     let leaves = children.iter().filter(|id| index.children(**id).is_empty()).count();
    ///     (children, leaves)
    /// });
    /// assert_eq!(children, vec![2, 3]);
    /// assert_eq!(leaves, 2);
    /// ```
    pub fn with_index<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Index<T>) -> R,
    {
        f(&*self.read())
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Index<T>> {
        self.index.read()
    }
}

// ============================================================================
// Lookups (pub), each under the shared lock
// ============================================================================
impl<T> Tree<T> {
    /// Number of nodes; `0` before the first successful load.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Whether a node with the given id exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.read().contains(id)
    }

    /// See [Index::find_node].
    pub fn find_node(&self, id: NodeId) -> Option<NodeRef<T>> {
        self.read().find_node(id)
    }

    /// See [Index::parent].
    pub fn parent(&self, id: NodeId) -> Option<NodeRef<T>> {
        self.read().parent(id)
    }

    /// See [Index::parent_id].
    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.read().parent_id(id)
    }

    /// See [Index::children].
    pub fn children(&self, id: NodeId) -> NodeList<T> {
        self.read().children(id)
    }

    /// See [Index::children_ids].
    pub fn children_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.read().children_ids(id)
    }

    /// See [Index::roots].
    pub fn roots(&self) -> NodeList<T> {
        self.read().roots()
    }

    /// See [Index::ancestors].
    pub fn ancestors(&self, id: NodeId, include_self: bool) -> Vec<NodeRef<T>> {
        self.read().ancestors(id, include_self)
    }

    /// See [Index::ancestor_ids].
    pub fn ancestor_ids(&self, id: NodeId, include_self: bool) -> Vec<NodeId> {
        self.read().ancestor_ids(id, include_self)
    }

    /// See [Index::node_path].
    pub fn node_path(&self, id: NodeId, include_self: bool) -> Vec<NodeId> {
        self.read().node_path(id, include_self)
    }

    /// See [Index::ancestor_id_at_depth].
    pub fn ancestor_id_at_depth(&self, id: NodeId, depth: i32, from_root: bool) -> NodeId {
        self.read().ancestor_id_at_depth(id, depth, from_root)
    }

    /// See [Index::depth].
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.read().depth(id)
    }

    /// See [Index::descendants].
    pub fn descendants(&self, id: NodeId, max_depth: i32) -> Vec<NodeRef<T>> {
        self.read().descendants(id, max_depth)
    }

    /// See [Index::descendant_ids].
    pub fn descendant_ids(&self, id: NodeId, max_depth: i32) -> Vec<NodeId> {
        self.read().descendant_ids(id, max_depth)
    }

    /// See [Index::siblings].
    pub fn siblings(&self, id: NodeId, include_self: bool) -> Vec<NodeRef<T>> {
        self.read().siblings(id, include_self)
    }

    /// See [Index::sibling_ids].
    pub fn sibling_ids(&self, id: NodeId, include_self: bool) -> Vec<NodeId> {
        self.read().sibling_ids(id, include_self)
    }

    /// See [Index::find_one].
    pub fn find_one<P>(&self, predicate: P) -> Option<NodeRef<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.read().find_one(predicate)
    }

    /// See [Index::find_all].
    pub fn find_all<P>(&self, predicate: P) -> Vec<NodeRef<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.read().find_all(predicate)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.read();
        f.debug_struct("Tree")
            .field("len", &index.len())
            .field("num_roots", &index.num_roots())
            .finish()
    }
}
