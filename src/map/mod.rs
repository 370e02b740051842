//! The market map page ("naghshe bazar").
//!
//! Like the market watch, the map feed only sends rows that changed since the presented
//! `hEven` cursor; [`MarketMap`] folds them into a running snapshot.

mod api;
mod model;
mod wire;

use std::collections::BTreeMap;

pub use model::{MapRow, MapType};

use crate::core::tree::Branch;
use crate::core::view::IncrementalView;
use crate::core::{TsClient, TsError};

/// Static name fields are only sent with a symbol's full row.
const IDENTIFYING_FIELD: &str = "symbol_short_name";

/// A subscription to the market map feed.
///
/// One cursor and one snapshot serve both [`MapType`] modes: switching mode does not reset
/// either. Call [`MarketMap::reset`] first if a clean snapshot for the new mode is wanted.
#[derive(Debug, Clone)]
pub struct MarketMap {
    client: TsClient,
    view: IncrementalView<i64>,
    last_mode: Option<MapType>,
}

impl MarketMap {
    /// Creates a map with an empty snapshot; the first refresh downloads everything.
    pub fn new(client: &TsClient) -> Self {
        Self {
            client: client.clone(),
            view: IncrementalView::new(IDENTIFYING_FIELD),
            last_mode: None,
        }
    }

    /// Fetches changes since the last successful refresh and returns the full current map.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error; the cursor and snapshot are left untouched.
    /// The server occasionally answers 403 under load, which surfaces as
    /// [`TsError::Status`] and can simply be retried.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(heven = *self.view.cursor())))]
    pub async fn refresh_map_view(
        &mut self,
        mode: MapType,
    ) -> Result<BTreeMap<String, MapRow>, TsError> {
        let delta = api::fetch_map_delta(&self.client, mode, *self.view.cursor()).await?;

        #[cfg(feature = "tracing")]
        {
            if self.last_mode.is_some_and(|m| m != mode) {
                tracing::debug!(?mode, "market map mode changed over a shared cursor");
            }
            tracing::debug!(changed = delta.rows.len(), heven = delta.cursor, "advancing market map cursor");
        }

        self.view.commit(delta);
        self.last_mode = Some(mode);

        Ok(self
            .view
            .ready_rows()
            .map(|(symbol, row)| (symbol.to_string(), MapRow::from_snapshot(row)))
            .collect())
    }

    /// The `hEven` cursor the next refresh will present.
    pub const fn cursor(&self) -> i64 {
        *self.view.cursor()
    }

    /// Mode of the last successful refresh.
    pub const fn last_mode(&self) -> Option<MapType> {
        self.last_mode
    }

    /// Every field received so far, keyed by symbol id.
    pub const fn snapshot(&self) -> &Branch {
        self.view.snapshot()
    }

    /// Forget everything; the next refresh downloads a full map again.
    pub fn reset(&mut self) {
        self.view.reset();
        self.last_mode = None;
    }
}
