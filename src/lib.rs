//! Arborist is a library to index flat `(id, parent id)` records as a
//! hierarchy and to query it.
//!
//! Many datasets describe a tree without storing one: category tables, org
//! charts, file listings, where every record names its parent. This crate
//! loads such records once, validates that they form a forest and then
//! answers structural questions without callers maintaining any pointers.
//! Core functionality provided:
//! - Loading: records of any type, with ids read by closures or, for dynamic
//!   [Record]s, by field name. Malformed input (non-positive or duplicate
//!   ids, unknown parents, cycles) is rejected as a whole, see [LoadError].
//! - Queries: parent, children, ancestors, descendants, siblings, paths,
//!   ancestor at depth and predicate search. See [Tree] and
//!   [Index](crate::model::Index).
//! - Snapshots: nested, detached copies of a subtree ([TreeNode]).
//! - Display: ASCII drawings of a subtree, see [crate::display].
//! - Concurrency: a [Tree] can be shared between threads and reloaded while
//!   being read; readers see either the old or the new records, never a mix.
//!
//! Limitations:
//! - Each record has at most one parent (no DAGs)
//! - Loading replaces everything; there are no incremental updates
//! - In-memory only
//!
//! # Usage patterns
//! 1. Load typed records with closures via [LoadOptions], as below.
//! 2. Load dynamic [Record]s by field name, e.g. with [load_records], and
//!    draw them with [FormatOptions](crate::display::FormatOptions).
//!
//! ## Example
//! ```
//! use arborist::{LoadOptions, Tree};
//!
//! #[derive(Clone)]
//! struct Employee {
//!     id: i64,
//!     manager: i64,
//!     name: &'static str,
//! }
//!
//! let staff = vec![
//!     Employee { id: 1, manager: 0, name: "Ada" },
//!     Employee { id: 2, manager: 1, name: "Grace" },
//!     Employee { id: 3, manager: 1, name: "Alan" },
//!     Employee { id: 4, manager: 3, name: "Edsger" },
//! ];
//! let options = LoadOptions::new()
//!     .with_id_fn(|e: &Employee| e.id)
//!     .with_parent_id_fn(|e: &Employee| e.manager)
//!     .with_sort_by_key(|e: &Employee| e.name);
//!
//! let tree = Tree::from_items(staff, &options)?;
//!
//! // Siblings sorted by name: Alan before Grace
//! assert_eq!(tree.children_ids(1), vec![3, 2]);
//! assert_eq!(tree.descendant_ids(1, 0), vec![3, 2, 4]);
//! assert_eq!(tree.ancestor_ids(4, false), vec![3, 1]);
//!
//! let snapshot = tree.to_tree(3).unwrap();
//! assert_eq!(snapshot.children[0].data.name, "Edsger");
//! # Ok::<(), arborist::LoadError>(())
//! ```

pub mod display;
pub mod loader;
pub mod model;

pub use crate::loader::{ErrorCategory, LoadError, LoadOptions, SiblingOrder};
pub use crate::model::{FieldAccess, FieldValue, NodeId, NodeRef, ROOT_ID, Record, Tree, TreeNode};

/// Field holding the id of a [Record] for [load_records].
pub const ID_FIELD: &str = "id";

/// Field holding the parent id of a [Record] for [load_records].
pub const PARENT_ID_FIELD: &str = "parent_id";

// ============================================================================
// Quick Record API
// ============================================================================
/// Loads dynamic records identified by their [ID_FIELD] and [PARENT_ID_FIELD]
/// fields, siblings ordered by id.
///
/// See [LoadOptions::for_fields] to use other fields or another order.
///
/// # Example
/// ```
/// use arborist::{load_records, model::record};
///
/// let tree = load_records(vec![
///     record([("id", 1.into()), ("parent_id", 0.into())]),
///     record([("id", 2.into()), ("parent_id", 1.into())]),
/// ])
/// .unwrap();
/// assert_eq!(tree.parent_id(2), Some(1));
/// ```
pub fn load_records<I>(records: I) -> Result<Tree<Record>, LoadError>
where
    I: IntoIterator<Item = Record>,
{
    Tree::from_items(records, &LoadOptions::for_fields(ID_FIELD, PARENT_ID_FIELD))
}
