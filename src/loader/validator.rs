//! Validation of flat input and assembly of an [Index].
//!
//! Everything here works on local data only. A rejected input never touches
//! the index currently in use; the caller swaps in the result of
//! [build_index] only once it succeeded.

use crate::loader::load_error::LoadError;
use crate::loader::options::LoadOptions;
use crate::model::{Index, Node, NodeId, ROOT_ID};
use rustc_hash::{FxHashMap, FxHashSet};

/// Validates `items` and builds the index they describe.
///
/// Checks, in this order, aborting on the first failure:
/// 1. both extractors are configured
/// 2. the input is not empty
/// 3. per item, in input order: fields readable, id positive, id unique,
///    parent id non-negative
/// 4. every non-zero parent id names an item (in input order)
/// 5. no parent chain is circular
///
/// # Errors
/// The [LoadError] describing the first violation found.
pub(crate) fn build_index<T, I>(items: I, options: &LoadOptions<T>) -> Result<Index<T>, LoadError>
where
    I: IntoIterator<Item = T>,
{
    let (id_extractor, parent_extractor) = options.extractors()?;

    let items = items.into_iter();
    let mut nodes: Vec<Node<T>> = Vec::with_capacity(items.size_hint().0);
    let mut parents: FxHashMap<NodeId, NodeId> = FxHashMap::default();

    for (position, item) in items.enumerate() {
        let id = id_extractor
            .extract(&item)
            .ok_or_else(|| unreadable(position, id_extractor.field()))?;
        if id <= 0 {
            return Err(LoadError::NonPositiveId { position, id });
        }
        if parents.contains_key(&id) {
            return Err(LoadError::DuplicateId(id));
        }

        let parent_id = parent_extractor
            .extract(&item)
            .ok_or_else(|| unreadable(position, parent_extractor.field()))?;
        if parent_id < 0 {
            return Err(LoadError::NegativeParentId {
                position,
                parent_id,
            });
        }

        parents.insert(id, parent_id);
        nodes.push(Node::new(id, parent_id, item));
    }

    if nodes.is_empty() {
        return Err(LoadError::EmptyData);
    }

    check_parents_exist(&nodes, &parents)?;
    check_acyclic(&nodes, &parents)?;

    Ok(Index::from_validated(nodes, options.order()))
}

fn unreadable(position: usize, field: &str) -> LoadError {
    LoadError::UnreadableField {
        position,
        field: field.to_string(),
    }
}

/// Every non-root node must point to an existing node.
fn check_parents_exist<T>(
    nodes: &[Node<T>],
    parents: &FxHashMap<NodeId, NodeId>,
) -> Result<(), LoadError> {
    for node in nodes {
        let parent_id = node.parent_id();
        if parent_id != ROOT_ID && !parents.contains_key(&parent_id) {
            return Err(LoadError::DanglingParent {
                id: node.id(),
                parent_id,
            });
        }
    }
    Ok(())
}

/// Walks the parent chain of every node upwards without recursion.
///
/// Nodes whose chain is known to end in a root are remembered, so each
/// node is walked over at most once on a successful check: O(n) overall.
/// Requires [check_parents_exist] to have passed.
fn check_acyclic<T>(nodes: &[Node<T>], parents: &FxHashMap<NodeId, NodeId>) -> Result<(), LoadError> {
    let mut settled: FxHashSet<NodeId> = FxHashSet::default();
    let mut on_path: FxHashSet<NodeId> = FxHashSet::default();
    let mut path: Vec<NodeId> = Vec::new();

    for node in nodes {
        let mut current = node.id();
        while current != ROOT_ID && !settled.contains(&current) {
            if !on_path.insert(current) {
                // Revisited within this walk, so `current` lies on the cycle
                return Err(LoadError::CircularReference(current));
            }
            path.push(current);
            current = parents.get(&current).copied().unwrap_or(ROOT_ID);
        }

        settled.extend(path.drain(..));
        on_path.clear();
    }

    Ok(())
}
