//! Wire shapes of the per-symbol endpoints: `serde` structs for the CDN JSON API and
//! hand-written decoders for the legacy text payloads.

use serde::Deserialize;

use crate::core::TsError;
use crate::core::conversions::{deven_to_date, heven_to_time, parse_int, split_rows};
use crate::core::wire::{de_i64, de_id, de_opt_f64_loose, de_opt_i64};
use crate::symbol::model::{
    SymbolBestLimits, SymbolClosingPriceInfo, SymbolDailyPriceRow, SymbolGroupRow, SymbolInfo,
    SymbolIntradayPriceRow, SymbolNotification, SymbolOptionData, SymbolOrderBook,
    SymbolOrderBookRow, SymbolPriceData, SymbolPriceOverview, SymbolRelatedCompanyRow,
    SymbolShareholderChartRow, SymbolShareholderDetails, SymbolShareholderPortfolioRow,
    SymbolTradeRow, SymbolTradersType, SymbolTradersTypeHistoryRow, SymbolTradersTypeInfo,
    SymbolTradersTypeSubInfo,
};

/* ---------------- instinfodata.aspx ---------------- */

pub(crate) fn decode_price_overview(body: &str) -> Result<SymbolPriceOverview, TsError> {
    let sections: Vec<&str> = body.split(';').collect();
    if sections.len() < 6 {
        return Err(TsError::Data(format!(
            "price overview: expected at least 6 sections, got {}",
            sections.len()
        )));
    }

    let p: Vec<&str> = sections[0].split(',').collect();
    if p.len() < 11 {
        return Err(TsError::Data(format!(
            "price overview: price section has {} fields",
            p.len()
        )));
    }
    let n = |i: usize| parse_int(p[i], "price overview");
    let price_data = SymbolPriceData {
        last: n(2)?,
        close: n(3)?,
        open: n(4)?,
        yesterday: n(5)?,
        high: n(6)?,
        low: n(7)?,
        count: n(8)?,
        volume: n(9)?,
        value: n(10)?,
    };

    let mut orderbook = SymbolOrderBook::default();
    for row in split_rows(sections[2], ',') {
        let f: Vec<&str> = row.split('@').collect();
        if f.len() != 6 {
            return Err(TsError::Data(format!("price overview: order book row {row:?}")));
        }
        let n = |i: usize| parse_int(f[i], "order book");
        orderbook.sell_rows.push(SymbolOrderBookRow { count: n(0)?, volume: n(1)?, price: n(2)? });
        orderbook.buy_rows.push(SymbolOrderBookRow { price: n(3)?, volume: n(4)?, count: n(5)? });
    }

    let traders_type = overview_traders_type(sections[4], price_data.close)?;

    let mut group_data = Vec::new();
    for row in split_rows(sections[5], ',') {
        let f: Vec<&str> = row.split('@').collect();
        if f.len() != 7 {
            return Err(TsError::Data(format!("price overview: group row {row:?}")));
        }
        let n = |i: usize| parse_int(f[i], "group row");
        group_data.push(SymbolGroupRow {
            symbol_id: f[0].trim().to_string(),
            last: n(1)?,
            close: n(2)?,
            count: n(4)?,
            volume: n(5)?,
            value: n(6)?,
        });
    }

    Ok(SymbolPriceOverview {
        price_data,
        orderbook,
        traders_type,
        group_data,
    })
}

/// Field order: real/legal buy volume, (unused), real/legal sell volume, real/legal buy
/// count, (unused), real/legal sell count. An empty section means no trades yet.
fn overview_traders_type(section: &str, close: i64) -> Result<SymbolTradersType, TsError> {
    let f: Vec<&str> = split_rows(section, ',').collect();
    if f.is_empty() {
        return Ok(zero_traders_type());
    }
    if f.len() != 10 {
        return Err(TsError::Data(format!(
            "price overview: traders type section has {} fields",
            f.len()
        )));
    }
    let n = |i: usize| parse_int(f[i], "traders type");
    let side = |volume: i64, count: i64| SymbolTradersTypeSubInfo {
        count,
        volume,
        value: Some(volume.saturating_mul(close)),
    };
    Ok(SymbolTradersType {
        real: SymbolTradersTypeInfo {
            buy: side(n(0)?, n(5)?),
            sell: side(n(3)?, n(8)?),
        },
        legal: SymbolTradersTypeInfo {
            buy: side(n(1)?, n(6)?),
            sell: side(n(4)?, n(9)?),
        },
    })
}

fn zero_traders_type() -> SymbolTradersType {
    let zero = SymbolTradersTypeSubInfo { count: 0, volume: 0, value: Some(0) };
    let info = SymbolTradersTypeInfo { buy: zero.clone(), sell: zero };
    SymbolTradersType { legal: info.clone(), real: info }
}

/* ---------------- IntraDayPrice.aspx ---------------- */

pub(crate) fn decode_intraday_chart(body: &str) -> Result<Vec<SymbolIntradayPriceRow>, TsError> {
    split_rows(body, ';')
        .map(|tick| {
            let f: Vec<&str> = tick.split(',').collect();
            if f.len() != 6 {
                return Err(TsError::Data(format!("intraday chart: tick {tick:?}")));
            }
            let (h, m) = f[0]
                .split_once(':')
                .ok_or_else(|| TsError::Data(format!("intraday chart: time {:?}", f[0])))?;
            let heven = parse_int(h, "hour")?
                .checked_mul(10_000)
                .and_then(|v| v.checked_add(parse_int(m, "minute").ok()?.checked_mul(100)?))
                .ok_or_else(|| TsError::Data(format!("intraday chart: time {:?}", f[0])))?;
            let n = |i: usize| parse_int(f[i], "intraday chart");
            Ok(SymbolIntradayPriceRow {
                time: heven_to_time(heven)?,
                high: n(1)?,
                low: n(2)?,
                open: n(3)?,
                close: n(4)?,
                volume: n(5)?,
            })
        })
        .collect()
}

/* ---------------- clienttype.aspx ---------------- */

pub(crate) fn decode_traders_type_history(
    body: &str,
) -> Result<Vec<SymbolTradersTypeHistoryRow>, TsError> {
    split_rows(body, ';')
        .map(|row| {
            let f: Vec<&str> = row.split(',').collect();
            if f.len() != 13 {
                return Err(TsError::Data(format!(
                    "traders type history: row has {} fields",
                    f.len()
                )));
            }
            let date = deven_to_date(parse_int(f[0], "date")?)?;
            let n = |i: usize| parse_int(f[i], "traders type history");
            let sub = |c: usize, v: usize, vl: usize| -> Result<SymbolTradersTypeSubInfo, TsError> {
                Ok(SymbolTradersTypeSubInfo { count: n(c)?, volume: n(v)?, value: Some(n(vl)?) })
            };
            Ok(SymbolTradersTypeHistoryRow {
                date,
                real: SymbolTradersTypeInfo { buy: sub(1, 5, 9)?, sell: sub(3, 7, 11)? },
                legal: SymbolTradersTypeInfo { buy: sub(2, 6, 10)?, sell: sub(4, 8, 12)? },
            })
        })
        .collect()
}

/* ---------------- ShareHolder.aspx ---------------- */

/// Two-field rows are the holding history, four-field rows the holder's other companies.
/// Rows of any other arity are headers and are skipped.
pub(crate) fn decode_shareholder_details(body: &str) -> Result<SymbolShareholderDetails, TsError> {
    let mut out = SymbolShareholderDetails::default();
    for row in split_rows(body, ';') {
        let f: Vec<&str> = row.split(',').collect();
        match f.len() {
            2 => out.chart.push(SymbolShareholderChartRow {
                date: deven_to_date(parse_int(f[0], "shareholder date")?)?,
                count: parse_int(f[1], "shareholder count")?,
            }),
            4 => out.portfolio.push(SymbolShareholderPortfolioRow {
                symbol_id: f[0].trim().trim_start_matches('#').to_string(),
                long_name: f[1].trim().to_string(),
                count: parse_int(f[2], "shareholder count")?,
                percentage: f[3].trim().parse().map_err(|_| {
                    TsError::Data(format!("shareholder percentage: {:?}", f[3]))
                })?,
            }),
            _ => {}
        }
    }
    Ok(out)
}

/* ---------------- CodalTopNew.aspx ---------------- */

/// The notifications endpoint answers with an array literal rather than JSON: strings may
/// be single-quoted and trailing commas occur.
#[derive(Debug, PartialEq)]
enum Literal {
    List(Vec<Literal>),
    Text(String),
    Bare(String),
}

fn literal_error(msg: &str) -> TsError {
    TsError::Data(format!("notifications literal: {msg}"))
}

struct LiteralReader<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl LiteralReader<'_> {
    fn skip_ws(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn value(&mut self) -> Result<Literal, TsError> {
        self.skip_ws();
        match self.chars.peek().copied() {
            Some('[') => {
                self.chars.next();
                self.list()
            }
            Some(q @ ('"' | '\'')) => {
                self.chars.next();
                self.text(q)
            }
            Some(_) => Ok(self.bare()),
            None => Err(literal_error("unexpected end of input")),
        }
    }

    fn list(&mut self) -> Result<Literal, TsError> {
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.chars.next_if_eq(&']').is_some() {
                return Ok(Literal::List(items));
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.chars.next() {
                Some(',') => {}
                Some(']') => return Ok(Literal::List(items)),
                other => return Err(literal_error(&format!("expected ',' or ']', got {other:?}"))),
            }
        }
    }

    fn text(&mut self, quote: char) -> Result<Literal, TsError> {
        let mut s = String::new();
        loop {
            match self.chars.next() {
                Some('\\') => match self.chars.next() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some(c) => s.push(c),
                    None => return Err(literal_error("unterminated escape")),
                },
                Some(c) if c == quote => return Ok(Literal::Text(s)),
                Some(c) => s.push(c),
                None => return Err(literal_error("unterminated string")),
            }
        }
    }

    fn bare(&mut self) -> Literal {
        let mut s = String::new();
        while let Some(c) = self
            .chars
            .next_if(|c| !matches!(c, ',' | '[' | ']') && !c.is_whitespace())
        {
            s.push(c);
        }
        Literal::Bare(s)
    }
}

pub(crate) fn decode_notifications(body: &str) -> Result<Vec<SymbolNotification>, TsError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = LiteralReader { chars: body.chars().peekable() };
    let Literal::List(rows) = reader.value()? else {
        return Err(literal_error("top level is not a list"));
    };
    reader.skip_ws();
    if reader.chars.next_if_eq(&';').is_some() {
        reader.skip_ws();
    }
    if reader.chars.peek().is_some() {
        return Err(literal_error("trailing data after list"));
    }

    rows.into_iter()
        .map(|row| match row {
            Literal::List(mut f) if f.len() >= 5 => {
                let published = f.swap_remove(4);
                let title = f.swap_remove(3);
                match (title, published) {
                    (Literal::Text(title), Literal::Text(published)) => Ok(SymbolNotification {
                        title: title.trim().to_string(),
                        published: published.trim().to_string(),
                    }),
                    _ => Err(literal_error("title and time must be strings")),
                }
            }
            other => Err(literal_error(&format!("unexpected row {other:?}"))),
        })
        .collect()
}

/* ---------------- CDN JSON API ---------------- */

#[derive(Deserialize)]
pub(crate) struct InstrumentInfoEnvelope {
    #[serde(rename = "instrumentInfo")]
    pub(crate) instrument_info: Option<InstrumentInfoNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstrumentInfoNode {
    #[serde(deserialize_with = "de_i64")]
    d_even: i64,
    #[serde(deserialize_with = "de_id")]
    ins_code: String,
    #[serde(rename = "instrumentID")]
    instrument_id: String,
    #[serde(rename = "lVal18AFC")]
    short_name: String,
    #[serde(rename = "lVal30")]
    full_name: String,
    eps: Option<EpsNode>,
    sector: Option<SectorNode>,
    static_threshold: Option<ThresholdNode>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    min_week: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    max_week: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    min_year: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    max_year: Option<i64>,
    #[serde(rename = "qTotTran5JAvg", default, deserialize_with = "de_opt_i64")]
    month_volume_avg: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    contract_size: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    nav: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    flow: Option<i64>,
    flow_title: Option<String>,
    #[serde(rename = "zTitad", default, deserialize_with = "de_opt_i64")]
    total_count: Option<i64>,
    #[serde(rename = "baseVol", default, deserialize_with = "de_opt_i64")]
    base_volume: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpsNode {
    #[serde(rename = "estimatedEPS", default, deserialize_with = "de_opt_i64")]
    estimated_eps: Option<i64>,
    #[serde(rename = "sectorPE", default, deserialize_with = "de_opt_f64_loose")]
    sector_pe: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectorNode {
    c_sec_val: Option<String>,
    l_sec_val: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThresholdNode {
    #[serde(default, deserialize_with = "de_opt_i64")]
    ps_gel_sta_min: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    ps_gel_sta_max: Option<i64>,
}

impl InstrumentInfoNode {
    pub(crate) fn into_info(self) -> Result<SymbolInfo, TsError> {
        let (eps, group_pe) = self
            .eps
            .map_or((None, None), |e| (e.estimated_eps, e.sector_pe));
        let (group_code, group_name) = self.sector.map_or_else(Default::default, |s| {
            (
                s.c_sec_val.unwrap_or_default().trim().to_string(),
                s.l_sec_val.unwrap_or_default().trim().to_string(),
            )
        });
        let (range_min, range_max) = self
            .static_threshold
            .map_or((None, None), |t| (t.ps_gel_sta_min, t.ps_gel_sta_max));

        Ok(SymbolInfo {
            date: deven_to_date(self.d_even)?,
            symbol_id: self.ins_code,
            isin: self.instrument_id,
            short_name: self.short_name,
            full_name: self.full_name,
            eps,
            group_pe,
            group_code,
            group_name,
            range_min: range_min.unwrap_or_default(),
            range_max: range_max.unwrap_or_default(),
            min_week: self.min_week.unwrap_or_default(),
            max_week: self.max_week.unwrap_or_default(),
            min_year: self.min_year.unwrap_or_default(),
            max_year: self.max_year.unwrap_or_default(),
            month_volume_avg: self.month_volume_avg.unwrap_or_default(),
            contract_size: self.contract_size.unwrap_or_default(),
            nav: self.nav.unwrap_or_default(),
            flow: self.flow.unwrap_or_default(),
            flow_title: self.flow_title.unwrap_or_default(),
            total_count: self.total_count.unwrap_or_default(),
            base_volume: self.base_volume.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct ClientTypeEnvelope {
    #[serde(rename = "clientType")]
    pub(crate) client_type: Option<ClientTypeNode>,
}

#[derive(Deserialize)]
pub(crate) struct ClientTypeNode {
    #[serde(rename = "buy_I_Volume", deserialize_with = "de_i64")]
    buy_i_volume: i64,
    #[serde(rename = "buy_N_Volume", deserialize_with = "de_i64")]
    buy_n_volume: i64,
    #[serde(rename = "buy_CountI", deserialize_with = "de_i64")]
    buy_count_i: i64,
    #[serde(rename = "buy_CountN", deserialize_with = "de_i64")]
    buy_count_n: i64,
    #[serde(rename = "sell_I_Volume", deserialize_with = "de_i64")]
    sell_i_volume: i64,
    #[serde(rename = "sell_N_Volume", deserialize_with = "de_i64")]
    sell_n_volume: i64,
    #[serde(rename = "sell_CountI", deserialize_with = "de_i64")]
    sell_count_i: i64,
    #[serde(rename = "sell_CountN", deserialize_with = "de_i64")]
    sell_count_n: i64,
}

impl From<ClientTypeNode> for SymbolTradersType {
    fn from(c: ClientTypeNode) -> Self {
        let sub = |count, volume| SymbolTradersTypeSubInfo { count, volume, value: None };
        Self {
            legal: SymbolTradersTypeInfo {
                buy: sub(c.buy_count_n, c.buy_n_volume),
                sell: sub(c.sell_count_n, c.sell_n_volume),
            },
            real: SymbolTradersTypeInfo {
                buy: sub(c.buy_count_i, c.buy_i_volume),
                sell: sub(c.sell_count_i, c.sell_i_volume),
            },
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct BestLimitsEnvelope {
    #[serde(rename = "bestLimits", default)]
    pub(crate) best_limits: Vec<BestLimitNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BestLimitNode {
    #[serde(deserialize_with = "de_i64")]
    number: i64,
    #[serde(deserialize_with = "de_i64")]
    z_ord_me_dem: i64,
    #[serde(deserialize_with = "de_i64")]
    p_me_dem: i64,
    #[serde(deserialize_with = "de_i64")]
    q_tit_me_dem: i64,
    #[serde(deserialize_with = "de_i64")]
    z_ord_me_of: i64,
    #[serde(deserialize_with = "de_i64")]
    p_me_of: i64,
    #[serde(deserialize_with = "de_i64")]
    q_tit_me_of: i64,
}

/// The exchange publishes five levels; anything past this is a malformed reply.
const MAX_BEST_LIMIT_LEVEL: i64 = 10;

pub(crate) fn best_limits_to_book(mut rows: Vec<BestLimitNode>) -> Result<SymbolBestLimits, TsError> {
    rows.sort_by_key(|r| r.number);
    let mut book = SymbolBestLimits::default();
    for r in rows {
        if !(1..=MAX_BEST_LIMIT_LEVEL).contains(&r.number) {
            return Err(TsError::Data(format!(
                "best limits: invalid level number {}",
                r.number
            )));
        }
        let index = usize::try_from(r.number - 1)
            .map_err(|_| TsError::Data(format!("best limits: invalid level number {}", r.number)))?;
        if book.buy_rows.len() <= index {
            book.buy_rows.resize(index + 1, None);
            book.sell_rows.resize(index + 1, None);
        }
        book.buy_rows[index] = Some(SymbolOrderBookRow {
            count: r.z_ord_me_dem,
            price: r.p_me_dem,
            volume: r.q_tit_me_dem,
        });
        book.sell_rows[index] = Some(SymbolOrderBookRow {
            count: r.z_ord_me_of,
            price: r.p_me_of,
            volume: r.q_tit_me_of,
        });
    }
    Ok(book)
}

#[derive(Deserialize)]
pub(crate) struct ClosingPriceInfoEnvelope {
    #[serde(rename = "closingPriceInfo")]
    pub(crate) closing_price_info: Option<ClosingPriceInfoNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClosingPriceInfoNode {
    #[serde(deserialize_with = "de_i64")]
    final_last_date: i64,
    #[serde(rename = "lastHEven", deserialize_with = "de_i64")]
    last_heven: i64,
    instrument_state: Option<InstrumentStateNode>,
    #[serde(flatten)]
    prices: ClosingPrices,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstrumentStateNode {
    c_etaval: Option<String>,
    c_etaval_title: Option<String>,
}

/// Price block shared by the closing-price info and daily list endpoints.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClosingPrices {
    #[serde(deserialize_with = "de_i64")]
    price_change: i64,
    #[serde(deserialize_with = "de_i64")]
    price_min: i64,
    #[serde(deserialize_with = "de_i64")]
    price_max: i64,
    #[serde(deserialize_with = "de_i64")]
    price_yesterday: i64,
    #[serde(deserialize_with = "de_i64")]
    price_first: i64,
    #[serde(deserialize_with = "de_i64")]
    p_closing: i64,
    #[serde(deserialize_with = "de_i64")]
    p_dr_cot_val: i64,
    #[serde(deserialize_with = "de_i64")]
    z_tot_tran: i64,
    #[serde(rename = "qTotTran5J", deserialize_with = "de_i64")]
    q_tot_tran5j: i64,
    #[serde(deserialize_with = "de_i64")]
    q_tot_cap: i64,
}

impl ClosingPriceInfoNode {
    pub(crate) fn into_info(self) -> Result<SymbolClosingPriceInfo, TsError> {
        let (state_value, state_title) = self.instrument_state.map_or_else(Default::default, |s| {
            (
                s.c_etaval.unwrap_or_default().trim().to_string(),
                s.c_etaval_title.unwrap_or_default(),
            )
        });
        let p = self.prices;
        Ok(SymbolClosingPriceInfo {
            date: deven_to_date(self.final_last_date)?,
            time: heven_to_time(self.last_heven)?,
            state_value,
            state_title,
            price_change: p.price_change,
            low: p.price_min,
            high: p.price_max,
            yesterday: p.price_yesterday,
            open: p.price_first,
            close: p.p_closing,
            last: p.p_dr_cot_val,
            count: p.z_tot_tran,
            volume: p.q_tot_tran5j,
            value: p.q_tot_cap,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct ClosingPriceDailyEnvelope {
    #[serde(rename = "closingPriceDaily", default)]
    pub(crate) closing_price_daily: Vec<ClosingPriceDailyNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClosingPriceDailyNode {
    #[serde(deserialize_with = "de_i64")]
    d_even: i64,
    #[serde(deserialize_with = "de_i64")]
    h_even: i64,
    #[serde(flatten)]
    prices: ClosingPrices,
}

impl ClosingPriceDailyNode {
    pub(crate) fn into_row(self) -> Result<SymbolDailyPriceRow, TsError> {
        let p = self.prices;
        Ok(SymbolDailyPriceRow {
            date: deven_to_date(self.d_even)?,
            time: heven_to_time(self.h_even)?,
            open: p.price_first,
            high: p.price_max,
            low: p.price_min,
            close: p.p_closing,
            last: p.p_dr_cot_val,
            yesterday: p.price_yesterday,
            change: p.price_change,
            value: p.q_tot_cap,
            volume: p.q_tot_tran5j,
            count: p.z_tot_tran,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct RelatedCompanyEnvelope {
    #[serde(rename = "relatedCompany", default)]
    pub(crate) related_company: Vec<RelatedCompanyNode>,
}

#[derive(Deserialize)]
pub(crate) struct RelatedCompanyNode {
    instrument: RelatedInstrumentNode,
    #[serde(flatten)]
    prices: ClosingPrices,
}

#[derive(Deserialize)]
struct RelatedInstrumentNode {
    #[serde(rename = "insCode", deserialize_with = "de_id")]
    ins_code: String,
    #[serde(rename = "lVal18AFC", default)]
    short_name: String,
    #[serde(rename = "lVal30", default)]
    long_name: String,
}

impl From<RelatedCompanyNode> for SymbolRelatedCompanyRow {
    fn from(n: RelatedCompanyNode) -> Self {
        let p = n.prices;
        Self {
            symbol_id: n.instrument.ins_code,
            short_name: n.instrument.short_name.trim().to_string(),
            long_name: n.instrument.long_name.trim().to_string(),
            last: p.p_dr_cot_val,
            close: p.p_closing,
            open: p.price_first,
            high: p.price_max,
            low: p.price_min,
            yesterday: p.price_yesterday,
            change: p.price_change,
            count: p.z_tot_tran,
            volume: p.q_tot_tran5j,
            value: p.q_tot_cap,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct TradeEnvelope {
    #[serde(default)]
    pub(crate) trade: Vec<TradeNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TradeNode {
    #[serde(deserialize_with = "de_i64")]
    n_tran: i64,
    #[serde(deserialize_with = "de_i64")]
    h_even: i64,
    #[serde(deserialize_with = "de_i64")]
    q_tit_tran: i64,
    #[serde(deserialize_with = "de_i64")]
    p_tran: i64,
    #[serde(default, deserialize_with = "de_opt_i64")]
    canceled: Option<i64>,
}

impl TradeNode {
    pub(crate) fn into_row(self) -> Result<SymbolTradeRow, TsError> {
        Ok(SymbolTradeRow {
            number: self.n_tran,
            time: heven_to_time(self.h_even)?,
            volume: self.q_tit_tran,
            price: self.p_tran,
            canceled: self.canceled.unwrap_or(0) != 0,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct InstrumentOptionEnvelope {
    #[serde(rename = "instrumentOption")]
    pub(crate) instrument_option: Option<InstrumentOptionNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstrumentOptionNode {
    #[serde(deserialize_with = "de_id")]
    ins_code: String,
    #[serde(rename = "instrumentID", default)]
    instrument_id: Option<String>,
    #[serde(deserialize_with = "de_id")]
    ua_ins_code: String,
    #[serde(rename = "buyOP", deserialize_with = "de_i64")]
    buy_op: i64,
    #[serde(rename = "sellOP", deserialize_with = "de_i64")]
    sell_op: i64,
    #[serde(rename = "cSize", deserialize_with = "de_i64")]
    contract_size: i64,
    #[serde(deserialize_with = "de_i64")]
    strike_price: i64,
    #[serde(deserialize_with = "de_i64")]
    begin_date: i64,
    #[serde(deserialize_with = "de_i64")]
    end_date: i64,
    #[serde(default, deserialize_with = "de_opt_f64_loose")]
    a_factor: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64_loose")]
    b_factor: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64_loose")]
    c_factor: Option<f64>,
}

impl InstrumentOptionNode {
    /// `isin` is the code the option was requested by; used when the reply omits it.
    pub(crate) fn into_data(self, isin: &str) -> Result<SymbolOptionData, TsError> {
        Ok(SymbolOptionData {
            symbol_id: self.ins_code,
            isin: self
                .instrument_id
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| isin.to_string()),
            base_symbol_id: self.ua_ins_code,
            buy_op: self.buy_op,
            sell_op: self.sell_op,
            contract_size: self.contract_size,
            strike_price: self.strike_price,
            begin_date: deven_to_date(self.begin_date)?,
            end_date: deven_to_date(self.end_date)?,
            a_factor: self.a_factor.unwrap_or_default(),
            b_factor: self.b_factor.unwrap_or_default(),
            c_factor: self.c_factor.unwrap_or_default(),
        })
    }
}
