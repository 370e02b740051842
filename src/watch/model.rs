use chrono::NaiveTime;
use serde::Serialize;

use crate::core::conversions::heven_to_time;
use crate::core::tree::{Branch, int_at, node_at, opt_int_at, text_at};

/// Position in the market watch feed.
///
/// `heven` is the latest trade time seen and `refid` the order-book sequence number. The
/// zero value asks the server for a full snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WatchCursor {
    pub heven: i64,
    pub refid: i64,
}

/// One level of a symbol's order book as shown on the market watch page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchOrderBookRow {
    pub count: i64,
    pub price: i64,
    pub volume: i64,
}

/// Buy and sell levels, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchOrderBook {
    pub buy_rows: Vec<WatchOrderBookRow>,
    pub sell_rows: Vec<WatchOrderBookRow>,
}

/// Latest known price state of one symbol on the market watch page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchPriceRow {
    pub symbol_id: String,
    pub isin: String,
    pub short_name: String,
    pub full_name: String,
    /// Time of the last trade, encoded as `hhmmss`.
    pub heven: i64,
    pub open: i64,
    pub close: i64,
    pub last: i64,
    pub count: i64,
    pub volume: i64,
    pub value: i64,
    pub low: i64,
    pub high: i64,
    pub yesterday: i64,
    /// Absent for instruments without an earnings estimate (funds, bonds, ...).
    pub eps: Option<i64>,
    pub base_volume: i64,
    pub visit_count: i64,
    pub flow: i64,
    pub group: String,
    /// Upper bound of the allowed daily price range.
    pub range_max: i64,
    /// Lower bound of the allowed daily price range.
    pub range_min: i64,
    /// Total number of shares.
    pub z: i64,
    /// Instrument type code.
    pub yval: String,
    pub orderbook: WatchOrderBook,
}

impl WatchPriceRow {
    /// Time of the last trade, if `heven` is a valid time of day.
    pub fn time(&self) -> Option<NaiveTime> {
        heven_to_time(self.heven).ok()
    }

    pub(crate) fn from_snapshot(row: &Branch) -> Self {
        let book = node_at(row, "orderbook");
        Self {
            symbol_id: text_at(row, "symbol_id"),
            isin: text_at(row, "isin"),
            short_name: text_at(row, "short_name"),
            full_name: text_at(row, "full_name"),
            heven: int_at(row, "heven"),
            open: int_at(row, "open"),
            close: int_at(row, "close"),
            last: int_at(row, "last"),
            count: int_at(row, "count"),
            volume: int_at(row, "volume"),
            value: int_at(row, "value"),
            low: int_at(row, "low"),
            high: int_at(row, "high"),
            yesterday: int_at(row, "yesterday"),
            eps: opt_int_at(row, "eps"),
            base_volume: int_at(row, "base_volume"),
            visit_count: int_at(row, "visit_count"),
            flow: int_at(row, "flow"),
            group: text_at(row, "group"),
            range_max: int_at(row, "range_max"),
            range_min: int_at(row, "range_min"),
            z: int_at(row, "z"),
            yval: text_at(row, "yval"),
            orderbook: WatchOrderBook {
                buy_rows: book_side(book, "buy_rows"),
                sell_rows: book_side(book, "sell_rows"),
            },
        }
    }
}

/// Levels are keyed by their 1-based position; order numerically, not lexically.
fn book_side(book: Option<&Branch>, side: &str) -> Vec<WatchOrderBookRow> {
    let Some(levels) = book.and_then(|b| node_at(b, side)) else {
        return Vec::new();
    };
    let mut rows: Vec<(u32, WatchOrderBookRow)> = levels
        .iter()
        .filter_map(|(pos, level)| {
            let level = level.as_node()?;
            Some((
                pos.parse().unwrap_or(u32::MAX),
                WatchOrderBookRow {
                    count: int_at(level, "count"),
                    price: int_at(level, "price"),
                    volume: int_at(level, "volume"),
                },
            ))
        })
        .collect();
    rows.sort_by_key(|(pos, _)| *pos);
    rows.into_iter().map(|(_, r)| r).collect()
}

/// Count and volume on one side of the market for one trader class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchTradersTypeSubInfo {
    pub count: i64,
    pub volume: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchTradersTypeInfo {
    pub buy: WatchTradersTypeSubInfo,
    pub sell: WatchTradersTypeSubInfo,
}

/// Trading activity split into legal entities (institutions) and real persons (individuals).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchTradersTypeRow {
    pub legal: WatchTradersTypeInfo,
    pub real: WatchTradersTypeInfo,
}

/// One day of a symbol's trailing history. `day` counts back from the latest session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchDailyHistoryRow {
    pub day: i64,
    pub open: i64,
    pub close: i64,
    pub last: i64,
    pub count: i64,
    pub volume: i64,
    pub value: i64,
    pub low: i64,
    pub high: i64,
    pub yesterday: i64,
}
