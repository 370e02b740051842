//! Cursor + snapshot state shared by the incremental market feeds.

use std::collections::BTreeSet;

use crate::core::tree::{Branch, Tree, deep_merge};

/// One decoded reply from an incremental feed: the changed fields per symbol and the
/// cursor to present on the next request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Delta<C> {
    pub(crate) rows: Branch,
    pub(crate) cursor: C,
}

/// Running view over an incremental feed.
///
/// The snapshot maps symbol ids to field nodes. A symbol becomes *ready* (and is returned by
/// [`IncrementalView::ready_rows`]) once an update carrying its identifying field has been
/// committed; it stays ready until [`IncrementalView::reset`].
#[derive(Debug, Clone)]
pub(crate) struct IncrementalView<C> {
    cursor: C,
    snapshot: Branch,
    ready: BTreeSet<String>,
    ready_field: &'static str,
}

impl<C: Default> IncrementalView<C> {
    pub(crate) fn new(ready_field: &'static str) -> Self {
        Self {
            cursor: C::default(),
            snapshot: Branch::new(),
            ready: BTreeSet::new(),
            ready_field,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cursor = C::default();
        self.snapshot.clear();
        self.ready.clear();
    }
}

impl<C> IncrementalView<C> {
    pub(crate) const fn cursor(&self) -> &C {
        &self.cursor
    }

    pub(crate) const fn snapshot(&self) -> &Branch {
        &self.snapshot
    }

    /// Fold a successfully decoded delta into the snapshot, then advance the cursor.
    ///
    /// Nothing here can fail; callers decode first so that an error leaves the view as it was.
    pub(crate) fn commit(&mut self, delta: Delta<C>) {
        for (symbol, row) in &delta.rows {
            if row.as_node().is_some_and(|r| r.contains_key(self.ready_field)) {
                self.ready.insert(symbol.clone());
            }
        }
        deep_merge(&mut self.snapshot, delta.rows);
        self.cursor = delta.cursor;
    }

    /// Snapshot rows of every ready symbol, in key order.
    pub(crate) fn ready_rows(&self) -> impl Iterator<Item = (&str, &Branch)> {
        self.ready.iter().filter_map(|symbol| {
            self.snapshot
                .get(symbol)
                .and_then(Tree::as_node)
                .map(|row| (symbol.as_str(), row))
        })
    }
}
