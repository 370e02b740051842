use crate::core::view::Delta;
use crate::core::{TsClient, TsError};
use crate::map::model::MapType;
use crate::map::wire;

pub(super) async fn fetch_map_delta(
    client: &TsClient,
    mode: MapType,
    cursor: i64,
) -> Result<Delta<i64>, TsError> {
    let mut url = client.base_cdn().join("ClosingPrice/GetMarketMap")?;
    url.query_pairs_mut()
        .append_pair("market", "0")
        .append_pair("size", "1360")
        .append_pair("sector", "0")
        .append_pair("typeSelected", &mode.code().to_string())
        .append_pair("hEven", &cursor.to_string());

    let key = format!("{}_{cursor}", mode.code());
    let body = client.get_text(url, "market_map", &key, "json").await?;
    wire::decode_map_delta(&body, cursor)
}
