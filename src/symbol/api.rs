use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{TsClient, TsError};
use crate::symbol::model::{
    SymbolBestLimits, SymbolClosingPriceInfo, SymbolDailyPriceRow, SymbolInfo,
    SymbolIntradayPriceRow, SymbolNotification, SymbolOptionData, SymbolPriceOverview,
    SymbolRelatedCompanyRow, SymbolShareholderDetails, SymbolTradeRow, SymbolTradersType,
    SymbolTradersTypeHistoryRow,
};
use crate::symbol::wire::{
    self, BestLimitsEnvelope, ClientTypeEnvelope, ClosingPriceDailyEnvelope,
    ClosingPriceInfoEnvelope, InstrumentInfoEnvelope, InstrumentOptionEnvelope,
    RelatedCompanyEnvelope, TradeEnvelope,
};

async fn get_json<T: DeserializeOwned>(
    client: &TsClient,
    url: Url,
    endpoint: &str,
    symbol_id: &str,
) -> Result<T, TsError> {
    let body = client.get_text(url, endpoint, symbol_id, "json").await?;
    serde_json::from_str(&body).map_err(|e| TsError::Data(format!("{endpoint} json parse: {e}")))
}

fn missing(what: &str, symbol_id: &str) -> TsError {
    TsError::Data(format!("{what} missing from response for {symbol_id}"))
}

pub(super) async fn price_overview(
    client: &TsClient,
    symbol_id: &str,
) -> Result<SymbolPriceOverview, TsError> {
    let mut url = client.base_tsev2().join("data/instinfodata.aspx")?;
    url.query_pairs_mut()
        .append_pair("i", symbol_id)
        .append_pair("c", "27");
    let body = client.get_text(url, "symbol_overview", symbol_id, "txt").await?;
    wire::decode_price_overview(&body)
}

pub(super) async fn intraday_price_chart(
    client: &TsClient,
    symbol_id: &str,
) -> Result<Vec<SymbolIntradayPriceRow>, TsError> {
    let mut url = client.base_tsev2().join("chart/data/IntraDayPrice.aspx")?;
    url.query_pairs_mut().append_pair("i", symbol_id);
    let body = client.get_text(url, "symbol_intraday", symbol_id, "txt").await?;
    wire::decode_intraday_chart(&body)
}

pub(super) async fn traders_type_history(
    client: &TsClient,
    symbol_id: &str,
) -> Result<Vec<SymbolTradersTypeHistoryRow>, TsError> {
    let mut url = client.base_tsev2().join("data/clienttype.aspx")?;
    url.query_pairs_mut().append_pair("i", symbol_id);
    let body = client
        .get_text(url, "symbol_traders_type_history", symbol_id, "txt")
        .await?;
    wire::decode_traders_type_history(&body)
}

pub(super) async fn info(client: &TsClient, symbol_id: &str) -> Result<SymbolInfo, TsError> {
    let url = client
        .base_cdn()
        .join(&format!("Instrument/GetInstrumentInfo/{symbol_id}"))?;
    let env: InstrumentInfoEnvelope = get_json(client, url, "symbol_info", symbol_id).await?;
    env.instrument_info
        .ok_or_else(|| missing("instrumentInfo", symbol_id))?
        .into_info()
}

pub(super) async fn traders_type(
    client: &TsClient,
    symbol_id: &str,
) -> Result<SymbolTradersType, TsError> {
    let url = client
        .base_cdn()
        .join(&format!("ClientType/GetClientType/{symbol_id}/1/0"))?;
    let env: ClientTypeEnvelope = get_json(client, url, "symbol_traders_type", symbol_id).await?;
    env.client_type
        .map(SymbolTradersType::from)
        .ok_or_else(|| missing("clientType", symbol_id))
}

pub(super) async fn orderbook(
    client: &TsClient,
    symbol_id: &str,
) -> Result<SymbolBestLimits, TsError> {
    let url = client.base_cdn().join(&format!("BestLimits/{symbol_id}"))?;
    let env: BestLimitsEnvelope = get_json(client, url, "symbol_orderbook", symbol_id).await?;
    wire::best_limits_to_book(env.best_limits)
}

pub(super) async fn closing_price_info(
    client: &TsClient,
    symbol_id: &str,
) -> Result<SymbolClosingPriceInfo, TsError> {
    let url = client
        .base_cdn()
        .join(&format!("ClosingPrice/GetClosingPriceInfo/{symbol_id}"))?;
    let env: ClosingPriceInfoEnvelope =
        get_json(client, url, "symbol_closing_price", symbol_id).await?;
    env.closing_price_info
        .ok_or_else(|| missing("closingPriceInfo", symbol_id))?
        .into_info()
}

pub(super) async fn daily_history(
    client: &TsClient,
    symbol_id: &str,
) -> Result<Vec<SymbolDailyPriceRow>, TsError> {
    let url = client
        .base_cdn()
        .join(&format!("ClosingPrice/GetClosingPriceDailyList/{symbol_id}/0"))?;
    let env: ClosingPriceDailyEnvelope =
        get_json(client, url, "symbol_daily_history", symbol_id).await?;
    env.closing_price_daily
        .into_iter()
        .map(wire::ClosingPriceDailyNode::into_row)
        .collect()
}

pub(super) async fn notifications(
    client: &TsClient,
    symbol_id: &str,
) -> Result<Vec<SymbolNotification>, TsError> {
    let mut url = client.base_tsev2().join("data/CodalTopNew.aspx")?;
    url.query_pairs_mut().append_pair("i", symbol_id);
    let body = client.get_text(url, "symbol_notifications", symbol_id, "txt").await?;
    wire::decode_notifications(&body)
}

pub(super) async fn shareholder_details(
    client: &TsClient,
    shareholder_id: &str,
    company_isin: &str,
) -> Result<SymbolShareholderDetails, TsError> {
    let mut url = client.base_tsev2().join("data/ShareHolder.aspx")?;
    url.query_pairs_mut()
        .append_pair("i", &format!("{shareholder_id},{company_isin}"));
    let key = format!("{shareholder_id}_{company_isin}");
    let body = client.get_text(url, "symbol_shareholder", &key, "txt").await?;
    wire::decode_shareholder_details(&body)
}

pub(super) async fn related_companies(
    client: &TsClient,
    group_code: &str,
) -> Result<Vec<SymbolRelatedCompanyRow>, TsError> {
    let url = client
        .base_cdn()
        .join(&format!("ClosingPrice/GetRelatedCompany/{group_code}"))?;
    let env: RelatedCompanyEnvelope = get_json(client, url, "symbol_related", group_code).await?;
    Ok(env
        .related_company
        .into_iter()
        .map(SymbolRelatedCompanyRow::from)
        .collect())
}

pub(super) async fn intraday_trades(
    client: &TsClient,
    symbol_id: &str,
) -> Result<Vec<SymbolTradeRow>, TsError> {
    let url = client.base_cdn().join(&format!("Trade/GetTrade/{symbol_id}"))?;
    let env: TradeEnvelope = get_json(client, url, "symbol_trades", symbol_id).await?;
    env.trade.into_iter().map(wire::TradeNode::into_row).collect()
}

pub(super) async fn option_data(client: &TsClient, isin: &str) -> Result<SymbolOptionData, TsError> {
    let url = client
        .base_cdn()
        .join(&format!("Instrument/GetInstrumentOptionByInstrumentID/{isin}"))?;
    let env: InstrumentOptionEnvelope = get_json(client, url, "symbol_option", isin).await?;
    env.instrument_option
        .ok_or_else(|| missing("instrumentOption", isin))?
        .into_data(isin)
}
