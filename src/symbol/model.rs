use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Session price summary of a symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolPriceData {
    pub last: i64,
    pub close: i64,
    pub open: i64,
    pub yesterday: i64,
    pub high: i64,
    pub low: i64,
    pub count: i64,
    pub volume: i64,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolOrderBookRow {
    pub count: i64,
    pub price: i64,
    pub volume: i64,
}

/// Order book levels, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolOrderBook {
    pub buy_rows: Vec<SymbolOrderBookRow>,
    pub sell_rows: Vec<SymbolOrderBookRow>,
}

/// Order book as served by the `BestLimits` API.
///
/// Rows are placed by their 1-based level number, so a level the server skipped is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolBestLimits {
    pub buy_rows: Vec<Option<SymbolOrderBookRow>>,
    pub sell_rows: Vec<Option<SymbolOrderBookRow>>,
}

/// Count and volume for one side and trader class.
///
/// `value` is only known for the price overview, where it is estimated as volume × close.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTradersTypeSubInfo {
    pub count: i64,
    pub volume: i64,
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTradersTypeInfo {
    pub buy: SymbolTradersTypeSubInfo,
    pub sell: SymbolTradersTypeSubInfo,
}

/// Legal entities (institutions) vs real persons (individuals).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTradersType {
    pub legal: SymbolTradersTypeInfo,
    pub real: SymbolTradersTypeInfo,
}

/// A peer symbol of the same industry group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolGroupRow {
    pub symbol_id: String,
    pub last: i64,
    pub close: i64,
    pub count: i64,
    pub volume: i64,
    pub value: i64,
}

/// Everything on the symbol page's overview tab ("dar yek negah").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolPriceOverview {
    pub price_data: SymbolPriceData,
    pub orderbook: SymbolOrderBook,
    pub traders_type: SymbolTradersType,
    pub group_data: Vec<SymbolGroupRow>,
}

/// One minute of the intraday price chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolIntradayPriceRow {
    pub time: NaiveTime,
    pub high: i64,
    pub low: i64,
    pub open: i64,
    pub close: i64,
    pub volume: i64,
}

/// Static and slow-moving instrument information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolInfo {
    pub date: NaiveDate,
    pub symbol_id: String,
    pub isin: String,
    pub short_name: String,
    pub full_name: String,
    pub eps: Option<i64>,
    pub group_pe: Option<f64>,
    pub group_code: String,
    pub group_name: String,
    pub range_min: i64,
    pub range_max: i64,
    pub min_week: i64,
    pub max_week: i64,
    pub min_year: i64,
    pub max_year: i64,
    pub month_volume_avg: i64,
    pub contract_size: i64,
    pub nav: i64,
    pub flow: i64,
    pub flow_title: String,
    pub total_count: i64,
    pub base_volume: i64,
}

/// Last closing-price state of the current or latest session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolClosingPriceInfo {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub state_value: String,
    pub state_title: String,
    pub price_change: i64,
    pub low: i64,
    pub high: i64,
    pub yesterday: i64,
    pub open: i64,
    pub close: i64,
    pub last: i64,
    pub count: i64,
    pub volume: i64,
    pub value: i64,
}

/// One session of the symbol's daily history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolDailyPriceRow {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
    pub last: i64,
    pub yesterday: i64,
    pub change: i64,
    pub value: i64,
    pub volume: i64,
    pub count: i64,
}

/// Trader-class breakdown of one historical session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTradersTypeHistoryRow {
    pub date: NaiveDate,
    pub legal: SymbolTradersTypeInfo,
    pub real: SymbolTradersTypeInfo,
}

/// A company of the same industry group, as listed by the related-companies API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolRelatedCompanyRow {
    pub symbol_id: String,
    pub short_name: String,
    pub long_name: String,
    pub last: i64,
    pub close: i64,
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub yesterday: i64,
    pub change: i64,
    pub count: i64,
    pub volume: i64,
    pub value: i64,
}

/// One executed trade of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTradeRow {
    /// Sequence number within the session.
    pub number: i64,
    pub time: NaiveTime,
    pub volume: i64,
    pub price: i64,
    pub canceled: bool,
}

/// Contract terms of an option instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolOptionData {
    pub symbol_id: String,
    pub isin: String,
    /// `insCode` of the underlying.
    pub base_symbol_id: String,
    pub buy_op: i64,
    pub sell_op: i64,
    pub contract_size: i64,
    pub strike_price: i64,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    pub a_factor: f64,
    pub b_factor: f64,
    pub c_factor: f64,
}

/// A CODAL disclosure headline ("etelaiye").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolNotification {
    pub title: String,
    /// Publication time on the Jalali calendar, `yy/mm/dd HH:MM`, as served.
    pub published: String,
}

/// Holding size of a shareholder on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolShareholderChartRow {
    pub date: NaiveDate,
    pub count: i64,
}

/// Another company held by the same shareholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolShareholderPortfolioRow {
    pub symbol_id: String,
    pub long_name: String,
    pub count: i64,
    pub percentage: f64,
}

/// History and portfolio of one major shareholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymbolShareholderDetails {
    pub chart: Vec<SymbolShareholderChartRow>,
    pub portfolio: Vec<SymbolShareholderPortfolioRow>,
}
