//! Data structures of a loaded hierarchy.
//!
//! - [Node]: a payload indexed by its id and parent id.
//! - [Index]: the validated node set, i.e. identity map plus ordered
//!   children lists. Nodes never point to each other; all relations go
//!   through the index (arena pattern with ids instead of pointers).
//! - [Tree]: an [Index] behind a single readers-writer lock; the type most
//!   callers work with.
//! - [TreeNode]: a detached nested copy of a subtree.
//! - [Record] / [FieldAccess]: dynamic payloads addressable by field name.

/// Nodes and node identities
pub mod node;
/// Dynamic key/value payloads
pub mod record;
/// Validated node set with precomputed relations
pub mod index;
/// Lock-guarded, reloadable index
pub mod tree;
/// Ancestor, descendant, sibling and predicate queries
mod traversal;
/// Nested subtree copies
pub mod tree_node;

pub use index::Index;
pub use node::{Node, NodeId, NodeList, NodeRef, ROOT_ID};
pub use record::{FieldAccess, FieldValue, Record, record};
pub use tree::Tree;
pub use tree_node::TreeNode;
