//! The market watch page ("didebane bazar"): every listed symbol on one screen.
//!
//! The price feed is incremental: each request presents the last [`WatchCursor`] and
//! receives only what changed since. [`MarketWatch`] keeps the running snapshot so callers
//! always see full rows.

mod api;
mod model;
mod wire;

use std::collections::BTreeMap;

pub use model::{
    WatchCursor, WatchDailyHistoryRow, WatchOrderBook, WatchOrderBookRow, WatchPriceRow,
    WatchTradersTypeInfo, WatchTradersTypeRow, WatchTradersTypeSubInfo,
};

use crate::core::tree::Branch;
use crate::core::view::IncrementalView;
use crate::core::{TsClient, TsError};

/// Full price rows carry this field; delta rows never do.
const IDENTIFYING_FIELD: &str = "symbol_id";

/// A subscription to the market watch feed.
///
/// Each instance owns its cursor and snapshot. Refreshing takes `&mut self`; wrap the
/// instance in a mutex if it has to be shared between tasks.
///
/// # Example
///
/// ```no_run
/// # use tsetmc_rs::{MarketWatch, TsClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TsClient::default();
/// let mut watch = MarketWatch::new(&client);
///
/// let rows = watch.refresh_price_view().await?;
/// println!("{} symbols", rows.len());
///
/// // Later calls only download changes, but still return every symbol.
/// let rows = watch.refresh_price_view().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketWatch {
    client: TsClient,
    view: IncrementalView<WatchCursor>,
}

impl MarketWatch {
    /// Creates a watch with an empty snapshot; the first refresh downloads everything.
    pub fn new(client: &TsClient) -> Self {
        Self {
            client: client.clone(),
            view: IncrementalView::new(IDENTIFYING_FIELD),
        }
    }

    /// Fetches changes since the last successful refresh and returns the full current view.
    ///
    /// Symbols seen so far only through partial updates are left out until their full row
    /// arrives.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error. On error neither the cursor nor the snapshot
    /// changes, so the next call retries from the same position.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(heven = self.view.cursor().heven, refid = self.view.cursor().refid)))]
    pub async fn refresh_price_view(&mut self) -> Result<BTreeMap<String, WatchPriceRow>, TsError> {
        let delta = api::fetch_price_delta(&self.client, self.view.cursor()).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            changed = delta.rows.len(),
            heven = delta.cursor.heven,
            refid = delta.cursor.refid,
            "advancing market watch cursor"
        );

        self.view.commit(delta);

        Ok(self
            .view
            .ready_rows()
            .map(|(symbol, row)| (symbol.to_string(), WatchPriceRow::from_snapshot(row)))
            .collect())
    }

    /// Fetches the legal/real trader breakdown of every symbol. Stateless.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn traders_type(&self) -> Result<BTreeMap<String, WatchTradersTypeRow>, TsError> {
        api::fetch_traders_type(&self.client).await
    }

    /// Fetches the trailing daily history (about 60 sessions) of every symbol. Stateless.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn daily_history(
        &self,
    ) -> Result<BTreeMap<String, Vec<WatchDailyHistoryRow>>, TsError> {
        api::fetch_daily_history(&self.client).await
    }

    /// The cursor the next refresh will present.
    pub const fn cursor(&self) -> WatchCursor {
        *self.view.cursor()
    }

    /// Every field received so far, keyed by symbol id.
    pub const fn snapshot(&self) -> &Branch {
        self.view.snapshot()
    }

    /// Forget everything; the next refresh downloads a full snapshot again.
    pub fn reset(&mut self) {
        self.view.reset();
    }
}
