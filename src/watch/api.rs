use std::collections::BTreeMap;

use crate::core::view::Delta;
use crate::core::{TsClient, TsError};
use crate::watch::model::{WatchCursor, WatchDailyHistoryRow, WatchTradersTypeRow};
use crate::watch::wire;

pub(super) async fn fetch_price_delta(
    client: &TsClient,
    cursor: &WatchCursor,
) -> Result<Delta<WatchCursor>, TsError> {
    let mut url = client.base_tsev2().join("data/MarketWatchPlus.aspx")?;
    url.query_pairs_mut()
        .append_pair("h", &cursor.heven.to_string())
        .append_pair("r", &cursor.refid.to_string());

    let key = format!("{}_{}", cursor.heven, cursor.refid);
    let body = client.get_text(url, "watch_price", &key, "txt").await?;
    wire::decode_price_delta(&body, cursor)
}

pub(super) async fn fetch_traders_type(
    client: &TsClient,
) -> Result<BTreeMap<String, WatchTradersTypeRow>, TsError> {
    let url = client.base_tsev2().join("data/ClientTypeAll.aspx")?;
    let body = client.get_text(url, "watch_traders_type", "all", "txt").await?;
    wire::decode_traders_type(&body)
}

pub(super) async fn fetch_daily_history(
    client: &TsClient,
) -> Result<BTreeMap<String, Vec<WatchDailyHistoryRow>>, TsError> {
    let url = client.base_tsev2().join("data/ClosingPriceAll.aspx")?;
    let body = client.get_text(url, "watch_daily_history", "all", "txt").await?;
    wire::decode_daily_history(&body)
}
