use serde::Serialize;

use crate::core::tree::{Branch, float_at, int_at, text_at};

/// The two rankings the market map can be drawn by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum MapType {
    /// Tiles sized by market value.
    #[default]
    MarketValue,
    /// Tiles sized by traded volume.
    MarketVolume,
}

impl MapType {
    /// The `typeSelected` query value.
    pub const fn code(self) -> u8 {
        match self {
            Self::MarketValue => 1,
            Self::MarketVolume => 2,
        }
    }
}

/// One symbol tile of the market map ("naghshe bazar").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRow {
    pub symbol_id: String,
    pub symbol_short_name: String,
    pub symbol_long_name: String,
    pub close: i64,
    pub last: i64,
    pub volume: i64,
    pub value: i64,
    pub count: i64,
    pub group_name: String,
    /// Tile color as rendered on the site (e.g. `#00ff00`).
    pub color: String,
    pub price_change_percent: f64,
    /// Share of the whole map.
    pub percent: f64,
}

impl MapRow {
    pub(crate) fn from_snapshot(row: &Branch) -> Self {
        Self {
            symbol_id: text_at(row, "symbol_id"),
            symbol_short_name: text_at(row, "symbol_short_name"),
            symbol_long_name: text_at(row, "symbol_long_name"),
            close: int_at(row, "close"),
            last: int_at(row, "last"),
            volume: int_at(row, "volume"),
            value: int_at(row, "value"),
            count: int_at(row, "count"),
            group_name: text_at(row, "group_name"),
            color: text_at(row, "color"),
            price_change_percent: float_at(row, "price_change_percent"),
            percent: float_at(row, "percent"),
        }
    }
}
