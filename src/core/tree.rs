//! Typed field trees used by the incremental feeds.
//!
//! Upstream deltas carry only the fields that changed. They are decoded into a [`Branch`]
//! (a map of field name to [`Tree`]) and folded into the running snapshot with
//! [`deep_merge`].

use std::collections::BTreeMap;

/// A scalar field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Either a scalar or a nested mapping of named subtrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Leaf(Leaf),
    Node(Branch),
}

/// One level of a tree. Ordered so that reads are deterministic.
pub type Branch = BTreeMap<String, Tree>;

impl Tree {
    pub const fn as_node(&self) -> Option<&Branch> {
        match self {
            Self::Node(b) => Some(b),
            Self::Leaf(_) => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Leaf(Leaf::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Floats read as-is; integers widen.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Leaf(Leaf::Float(v)) => Some(*v),
            Self::Leaf(Leaf::Int(v)) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Leaf(Leaf::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Tree {
    fn from(v: i64) -> Self {
        Self::Leaf(Leaf::Int(v))
    }
}

impl From<f64> for Tree {
    fn from(v: f64) -> Self {
        Self::Leaf(Leaf::Float(v))
    }
}

impl From<String> for Tree {
    fn from(v: String) -> Self {
        Self::Leaf(Leaf::Text(v))
    }
}

impl From<&str> for Tree {
    fn from(v: &str) -> Self {
        Self::Leaf(Leaf::Text(v.to_string()))
    }
}

impl From<Branch> for Tree {
    fn from(b: Branch) -> Self {
        Self::Node(b)
    }
}

/// Merge `update` into `base` in place.
///
/// Keys only in `base` are kept, keys only in `update` are added. When both sides hold a
/// node the merge recurses; in every other case the update value replaces the base value.
pub fn deep_merge(base: &mut Branch, update: Branch) {
    for (key, incoming) in update {
        if let Tree::Node(sub) = incoming {
            if let Some(Tree::Node(existing)) = base.get_mut(&key) {
                deep_merge(existing, sub);
                continue;
            }
            base.insert(key, Tree::Node(sub));
        } else {
            base.insert(key, incoming);
        }
    }
}

/* ----- field readers used when building records from a snapshot row ----- */

pub(crate) fn int_at(row: &Branch, key: &str) -> i64 {
    row.get(key).and_then(Tree::as_int).unwrap_or_default()
}

pub(crate) fn opt_int_at(row: &Branch, key: &str) -> Option<i64> {
    row.get(key).and_then(Tree::as_int)
}

pub(crate) fn float_at(row: &Branch, key: &str) -> f64 {
    row.get(key).and_then(Tree::as_float).unwrap_or_default()
}

pub(crate) fn text_at(row: &Branch, key: &str) -> String {
    row.get(key)
        .and_then(Tree::as_text)
        .map(str::to_string)
        .unwrap_or_default()
}

pub(crate) fn node_at<'a>(row: &'a Branch, key: &str) -> Option<&'a Branch> {
    row.get(key).and_then(Tree::as_node)
}
