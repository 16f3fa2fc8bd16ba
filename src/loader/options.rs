//! Load configuration: id extraction and sibling ordering.

use crate::loader::load_error::LoadError;
use crate::model::{FieldAccess, NodeId, NodeRef};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type ExtractFn<T> = Box<dyn Fn(&T) -> Option<NodeId> + Send + Sync>;
type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

// =#========================================================================#=
// EXTRACTOR
// =#========================================================================#=
/// Reads an integer identity out of a payload.
///
/// Closure-based extractors always succeed; field-based ones yield `None`
/// when the field is missing or not an integer.
pub(crate) struct Extractor<T> {
    /// Name reported in errors
    field: String,
    get: ExtractFn<T>,
}

impl<T> Extractor<T> {
    fn from_fn<F>(field: &str, f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> NodeId + Send + Sync + 'static,
    {
        Extractor {
            field: field.to_string(),
            get: Box::new(move |item: &T| Some(f(item))),
        }
    }

    pub(crate) fn field(&self) -> &str {
        &self.field
    }

    pub(crate) fn extract(&self, item: &T) -> Option<NodeId> {
        (self.get)(item)
    }
}

impl<T: FieldAccess + 'static> Extractor<T> {
    fn from_field(field: &str) -> Self {
        let name = field.to_string();
        Extractor {
            field: field.to_string(),
            get: Box::new(move |item: &T| item.field(&name).and_then(|v| v.as_int())),
        }
    }
}

// =#========================================================================#=
// SIBLING ORDER
// =#========================================================================#=
/// Order of the children of each parent.
///
/// Sorting is stable: siblings comparing equal keep their input order.
pub enum SiblingOrder<T> {
    /// Ascending by node id (default)
    ById,
    /// Caller supplied comparison of payloads
    Custom(CompareFn<T>),
}

impl<T> SiblingOrder<T> {
    /// Orders siblings by comparing their payloads with `cmp`.
    pub fn by<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        SiblingOrder::Custom(Arc::new(cmp))
    }

    /// Orders siblings ascending by a key extracted from their payloads.
    pub fn by_key<K, F>(key: F) -> Self
    where
        T: 'static,
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        SiblingOrder::by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Sorts `nodes` in place.
    pub(crate) fn sort(&self, nodes: &mut [NodeRef<T>]) {
        match self {
            SiblingOrder::ById => nodes.sort_by_key(|node| node.id()),
            SiblingOrder::Custom(cmp) => nodes.sort_by(|a, b| cmp(a.data(), b.data())),
        }
    }
}

impl<T: FieldAccess + 'static> SiblingOrder<T> {
    /// Orders siblings ascending by the value of a named field.
    ///
    /// Payloads missing the field sort before all others.
    /// See [FieldValue::total_cmp](crate::model::FieldValue::total_cmp)
    /// for how values of different kinds compare.
    pub fn by_field(name: &str) -> Self {
        let name = name.to_string();
        SiblingOrder::by(move |a: &T, b: &T| match (a.field(&name), b.field(&name)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}

impl<T> Default for SiblingOrder<T> {
    fn default() -> Self {
        SiblingOrder::ById
    }
}

impl<T> Clone for SiblingOrder<T> {
    fn clone(&self) -> Self {
        match self {
            SiblingOrder::ById => SiblingOrder::ById,
            SiblingOrder::Custom(cmp) => SiblingOrder::Custom(Arc::clone(cmp)),
        }
    }
}

impl<T> fmt::Debug for SiblingOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiblingOrder::ById => f.write_str("ById"),
            SiblingOrder::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// =#========================================================================#=
// LOAD OPTIONS
// =#========================================================================#=
/// Configuration for [Tree::load](crate::Tree::load).
///
/// Both an id and a parent-id extractor are required; loading without one
/// of them fails with a configuration error. Siblings are ordered
/// ascending by id unless another [SiblingOrder] is set.
///
/// # Example
/// ```
/// use arborist::loader::LoadOptions;
///
/// struct Category {
///     id: i64,
///     parent_id: i64,
///     name: String,
/// }
///
/// let options = LoadOptions::new()
///     .with_id_fn(|c: &Category| c.id)
///     .with_parent_id_fn(|c: &Category| c.parent_id)
///     .with_sort(|a: &Category, b: &Category| a.name.cmp(&b.name));
/// ```
pub struct LoadOptions<T> {
    id: Option<Extractor<T>>,
    parent_id: Option<Extractor<T>>,
    order: SiblingOrder<T>,
}

impl<T> LoadOptions<T> {
    /// Creates options without extractors, ordering siblings by id.
    pub fn new() -> Self {
        LoadOptions {
            id: None,
            parent_id: None,
            order: SiblingOrder::ById,
        }
    }

    /// Sets the function reading a payload's id (required).
    pub fn with_id_fn<F>(mut self, f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> NodeId + Send + Sync + 'static,
    {
        self.id = Some(Extractor::from_fn("id", f));
        self
    }

    /// Sets the function reading a payload's parent id (required).
    pub fn with_parent_id_fn<F>(mut self, f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> NodeId + Send + Sync + 'static,
    {
        self.parent_id = Some(Extractor::from_fn("parent_id", f));
        self
    }

    /// Orders siblings by comparing payloads with `cmp`.
    pub fn with_sort<F>(self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.with_order(SiblingOrder::by(cmp))
    }

    /// Orders siblings ascending by a key extracted from payloads.
    pub fn with_sort_by_key<K, F>(self, key: F) -> Self
    where
        T: 'static,
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.with_order(SiblingOrder::by_key(key))
    }

    /// Sets the [SiblingOrder].
    pub fn with_order(mut self, order: SiblingOrder<T>) -> Self {
        self.order = order;
        self
    }

    /// Returns the configured [SiblingOrder].
    pub fn order(&self) -> &SiblingOrder<T> {
        &self.order
    }

    /// Returns both extractors or the configuration error for the first missing one.
    pub(crate) fn extractors(&self) -> Result<(&Extractor<T>, &Extractor<T>), LoadError> {
        let id = self.id.as_ref().ok_or(LoadError::MissingIdFn)?;
        let parent_id = self.parent_id.as_ref().ok_or(LoadError::MissingParentIdFn)?;
        Ok((id, parent_id))
    }
}

impl<T: FieldAccess + 'static> LoadOptions<T> {
    /// Creates options reading id and parent id from named integer fields.
    ///
    /// # Example
    /// ```
    /// use arborist::loader::LoadOptions;
    /// use arborist::model::Record;
    ///
    /// let options: LoadOptions<Record> = LoadOptions::for_fields("id", "parent_id")
    ///     .with_sort_by_field("sort");
    /// ```
    pub fn for_fields(id_field: &str, parent_id_field: &str) -> Self {
        Self::new()
            .with_id_field(id_field)
            .with_parent_id_field(parent_id_field)
    }

    /// Reads the id from the named integer field.
    pub fn with_id_field(mut self, name: &str) -> Self {
        self.id = Some(Extractor::from_field(name));
        self
    }

    /// Reads the parent id from the named integer field.
    pub fn with_parent_id_field(mut self, name: &str) -> Self {
        self.parent_id = Some(Extractor::from_field(name));
        self
    }

    /// Orders siblings ascending by the named field.
    pub fn with_sort_by_field(self, name: &str) -> Self {
        self.with_order(SiblingOrder::by_field(name))
    }
}

impl<T> Default for LoadOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LoadOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("id", &self.id.as_ref().map(Extractor::field))
            .field("parent_id", &self.parent_id.as_ref().map(Extractor::field))
            .field("order", &self.order)
            .finish()
    }
}
