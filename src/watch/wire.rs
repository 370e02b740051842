//! Decoders for the comma/semicolon/at-sign encoded market watch payloads.

use std::collections::BTreeMap;

use crate::core::TsError;
use crate::core::conversions::{parse_int, parse_opt_int, split_rows};
use crate::core::tree::{Branch, Tree, deep_merge};
use crate::core::view::Delta;
use crate::watch::model::{
    WatchCursor, WatchDailyHistoryRow, WatchTradersTypeInfo, WatchTradersTypeRow,
    WatchTradersTypeSubInfo,
};

const PRICE_SECTION: usize = 2;
const ORDERBOOK_SECTION: usize = 3;
const REFID_SECTION: usize = 4;

const FULL_PRICE_FIELDS: usize = 23;
const DELTA_PRICE_FIELDS: usize = 10;
const ORDERBOOK_FIELDS: usize = 8;

/// Decode a `MarketWatchPlus` reply into a partial update and the next cursor.
///
/// Full price rows carry `symbol_id` (and the static fields); delta rows carry only the
/// moving prices, so a symbol first seen through a delta row is not yet identifiable.
pub(crate) fn decode_price_delta(
    body: &str,
    prev: &WatchCursor,
) -> Result<Delta<WatchCursor>, TsError> {
    let sections: Vec<&str> = body.split('@').collect();
    if sections.len() <= REFID_SECTION {
        return Err(TsError::Data(format!(
            "market watch: expected at least {} sections, got {}",
            REFID_SECTION + 1,
            sections.len()
        )));
    }

    let mut rows = Branch::new();
    let mut heven = prev.heven;

    for line in split_rows(sections[PRICE_SECTION], ';') {
        let f: Vec<&str> = line.split(',').collect();
        let (symbol, fields, row_heven) = match f.len() {
            n if n >= FULL_PRICE_FIELDS => full_price_row(&f)?,
            DELTA_PRICE_FIELDS => delta_price_row(&f)?,
            n => {
                return Err(TsError::Data(format!(
                    "market watch: price row has {n} fields: {line:?}"
                )));
            }
        };
        heven = heven.max(row_heven);
        merge_row(&mut rows, symbol, fields);
    }

    for line in split_rows(sections[ORDERBOOK_SECTION], ';') {
        let (symbol, fields) = orderbook_row(line)?;
        merge_row(&mut rows, symbol, fields);
    }

    let refid_raw = sections[REFID_SECTION].trim();
    let refid = if refid_raw.is_empty() {
        prev.refid
    } else {
        parse_int(refid_raw, "market watch refid")?
    };

    Ok(Delta {
        rows,
        cursor: WatchCursor { heven, refid },
    })
}

fn merge_row(rows: &mut Branch, symbol: String, fields: Branch) {
    let mut update = Branch::new();
    update.insert(symbol, Tree::Node(fields));
    deep_merge(rows, update);
}

fn full_price_row(f: &[&str]) -> Result<(String, Branch, i64), TsError> {
    const TEXT: [(usize, &str); 4] = [(0, "symbol_id"), (1, "isin"), (2, "short_name"), (3, "full_name")];
    const INTS: [(usize, &str); 16] = [
        (4, "heven"),
        (5, "open"),
        (6, "close"),
        (7, "last"),
        (8, "count"),
        (9, "volume"),
        (10, "value"),
        (11, "low"),
        (12, "high"),
        (13, "yesterday"),
        (15, "base_volume"),
        (16, "visit_count"),
        (17, "flow"),
        (19, "range_max"),
        (20, "range_min"),
        (21, "z"),
    ];

    let mut row = Branch::new();
    for (i, name) in TEXT {
        row.insert(name.to_string(), f[i].trim().into());
    }
    for (i, name) in INTS {
        row.insert(name.to_string(), parse_int(f[i], name)?.into());
    }
    if let Some(eps) = parse_opt_int(f[14], "eps")? {
        row.insert("eps".to_string(), eps.into());
    }
    row.insert("group".to_string(), f[18].trim().into());
    row.insert("yval".to_string(), f[22].trim().into());

    let heven = parse_int(f[4], "heven")?;
    Ok((f[0].trim().to_string(), row, heven))
}

fn delta_price_row(f: &[&str]) -> Result<(String, Branch, i64), TsError> {
    const INTS: [(usize, &str); 9] = [
        (1, "heven"),
        (2, "open"),
        (3, "close"),
        (4, "last"),
        (5, "count"),
        (6, "volume"),
        (7, "value"),
        (8, "low"),
        (9, "high"),
    ];

    let mut row = Branch::new();
    for (i, name) in INTS {
        row.insert(name.to_string(), parse_int(f[i], name)?.into());
    }
    let heven = parse_int(f[1], "heven")?;
    Ok((f[0].trim().to_string(), row, heven))
}

fn orderbook_row(line: &str) -> Result<(String, Branch), TsError> {
    let f: Vec<&str> = line.split(',').collect();
    if f.len() != ORDERBOOK_FIELDS {
        return Err(TsError::Data(format!(
            "market watch: order book row has {} fields: {line:?}",
            f.len()
        )));
    }
    let position = parse_int(f[1], "order book position")?.to_string();

    let level = |count: &str, price: &str, volume: &str| -> Result<Tree, TsError> {
        let mut l = Branch::new();
        l.insert("count".to_string(), parse_int(count, "order count")?.into());
        l.insert("price".to_string(), parse_int(price, "order price")?.into());
        l.insert("volume".to_string(), parse_int(volume, "order volume")?.into());
        Ok(Tree::Node(l))
    };

    let mut buy = Branch::new();
    buy.insert(position.clone(), level(f[3], f[4], f[6])?);
    let mut sell = Branch::new();
    sell.insert(position, level(f[2], f[5], f[7])?);

    let mut book = Branch::new();
    book.insert("buy_rows".to_string(), Tree::Node(buy));
    book.insert("sell_rows".to_string(), Tree::Node(sell));

    let mut row = Branch::new();
    row.insert("orderbook".to_string(), Tree::Node(book));
    Ok((f[0].trim().to_string(), row))
}

/// Decode `ClientTypeAll`: one row per symbol with real/legal buy/sell counts and volumes.
pub(crate) fn decode_traders_type(body: &str) -> Result<BTreeMap<String, WatchTradersTypeRow>, TsError> {
    let mut out = BTreeMap::new();
    for line in split_rows(body, ';') {
        let f: Vec<&str> = line.split(',').collect();
        if f.len() != 9 {
            return Err(TsError::Data(format!(
                "traders type: row has {} fields: {line:?}",
                f.len()
            )));
        }
        let n = |i: usize| parse_int(f[i], "traders type");
        let row = WatchTradersTypeRow {
            real: WatchTradersTypeInfo {
                buy: WatchTradersTypeSubInfo { count: n(1)?, volume: n(3)? },
                sell: WatchTradersTypeSubInfo { count: n(5)?, volume: n(7)? },
            },
            legal: WatchTradersTypeInfo {
                buy: WatchTradersTypeSubInfo { count: n(2)?, volume: n(4)? },
                sell: WatchTradersTypeSubInfo { count: n(6)?, volume: n(8)? },
            },
        };
        out.insert(f[0].trim().to_string(), row);
    }
    Ok(out)
}

/// Decode `ClosingPriceAll`. An 11-field row opens a symbol; the 10-field rows that follow
/// belong to it.
pub(crate) fn decode_daily_history(
    body: &str,
) -> Result<BTreeMap<String, Vec<WatchDailyHistoryRow>>, TsError> {
    let mut out: BTreeMap<String, Vec<WatchDailyHistoryRow>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in split_rows(body, ';') {
        let f: Vec<&str> = line.split(',').collect();
        let values = match f.len() {
            11 => {
                current = Some(f[0].trim().to_string());
                &f[1..]
            }
            10 => &f[..],
            n => {
                return Err(TsError::Data(format!(
                    "daily history: row has {n} fields: {line:?}"
                )));
            }
        };
        let symbol = current.as_ref().ok_or_else(|| {
            TsError::Data("daily history: continuation row before any symbol".into())
        })?;

        let n = |i: usize| parse_int(values[i], "daily history");
        out.entry(symbol.clone()).or_default().push(WatchDailyHistoryRow {
            day: n(0)?,
            close: n(1)?,
            last: n(2)?,
            count: n(3)?,
            volume: n(4)?,
            value: n(5)?,
            low: n(6)?,
            high: n(7)?,
            yesterday: n(8)?,
            open: n(9)?,
        });
    }
    Ok(out)
}
