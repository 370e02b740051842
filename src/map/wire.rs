use serde::Deserialize;

use crate::core::TsError;
use crate::core::tree::{Branch, Tree};
use crate::core::view::Delta;
use crate::core::wire::{de_id, de_opt_f64_loose, de_opt_i64};

/// One element of the `GetMarketMap` array. Only `insCode` is guaranteed.
#[derive(Deserialize)]
pub(crate) struct MapNode {
    #[serde(rename = "insCode", deserialize_with = "de_id")]
    pub(crate) ins_code: String,
    #[serde(rename = "lVal18AFC")]
    pub(crate) short_name: Option<String>,
    #[serde(rename = "lVal30")]
    pub(crate) long_name: Option<String>,
    #[serde(rename = "pClosing", default, deserialize_with = "de_opt_i64")]
    pub(crate) close: Option<i64>,
    #[serde(rename = "pDrCotVal", default, deserialize_with = "de_opt_i64")]
    pub(crate) last: Option<i64>,
    #[serde(rename = "qTotTran5J", default, deserialize_with = "de_opt_i64")]
    pub(crate) volume: Option<i64>,
    #[serde(rename = "qTotCap", default, deserialize_with = "de_opt_i64")]
    pub(crate) value: Option<i64>,
    #[serde(rename = "zTotTran", default, deserialize_with = "de_opt_i64")]
    pub(crate) count: Option<i64>,
    #[serde(rename = "lSecVal")]
    pub(crate) group_name: Option<String>,
    pub(crate) color: Option<String>,
    #[serde(rename = "priceChangePercent", default, deserialize_with = "de_opt_f64_loose")]
    pub(crate) price_change_percent: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64_loose")]
    pub(crate) percent: Option<f64>,
    #[serde(rename = "hEven", default, deserialize_with = "de_opt_i64")]
    pub(crate) heven: Option<i64>,
}

impl MapNode {
    /// Only fields present on the wire make it into the tree, so absent fields never
    /// overwrite what an earlier reply delivered.
    fn into_branch(self) -> Branch {
        let mut row = Branch::new();
        let mut put = |k: &str, v: Option<Tree>| {
            if let Some(v) = v {
                row.insert(k.to_string(), v);
            }
        };
        put("symbol_id", Some(self.ins_code.into()));
        put("symbol_short_name", self.short_name.map(Tree::from));
        put("symbol_long_name", self.long_name.map(Tree::from));
        put("close", self.close.map(Tree::from));
        put("last", self.last.map(Tree::from));
        put("volume", self.volume.map(Tree::from));
        put("value", self.value.map(Tree::from));
        put("count", self.count.map(Tree::from));
        put("group_name", self.group_name.map(Tree::from));
        put("color", self.color.map(Tree::from));
        put("price_change_percent", self.price_change_percent.map(Tree::from));
        put("percent", self.percent.map(Tree::from));
        put("heven", self.heven.map(Tree::from));
        row
    }
}

/// Decode a `GetMarketMap` reply. The next cursor is the newest `hEven` seen, never older
/// than the one presented.
pub(crate) fn decode_map_delta(body: &str, prev: i64) -> Result<Delta<i64>, TsError> {
    let nodes: Vec<MapNode> = serde_json::from_str(body)
        .map_err(|e| TsError::Data(format!("market map json parse: {e}")))?;

    let mut cursor = prev;
    let mut rows = Branch::new();
    for node in nodes {
        if let Some(h) = node.heven {
            cursor = cursor.max(h);
        }
        let key = node.ins_code.clone();
        rows.insert(key, Tree::Node(node.into_branch()));
    }
    Ok(Delta { rows, cursor })
}
