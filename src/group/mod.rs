//! Industry groups and other static reference data.

use serde::{Deserialize, Serialize};

use crate::core::wire::de_i64;
use crate::core::{TsClient, TsError};

/// One entry of the static reference table (industry groups, boards, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStaticRow {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    /// Entry kind, e.g. `IndustrialGroup`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(deserialize_with = "de_i64")]
    pub code: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
struct StaticDataEnvelope {
    #[serde(rename = "staticData")]
    static_data: Option<Vec<GroupStaticRow>>,
}

/// Fetches the static reference table.
///
/// # Errors
///
/// Returns a transport error, or a decode error if `staticData` is missing or malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn static_data(client: &TsClient) -> Result<Vec<GroupStaticRow>, TsError> {
    let url = client.base_cdn().join("StaticData/GetStaticData")?;
    let body = client.get_text(url, "group_static", "all", "json").await?;
    decode_static_data(&body)
}

fn decode_static_data(body: &str) -> Result<Vec<GroupStaticRow>, TsError> {
    let env: StaticDataEnvelope = serde_json::from_str(body)
        .map_err(|e| TsError::Data(format!("static data json parse: {e}")))?;
    env.static_data
        .ok_or_else(|| TsError::Data("staticData missing from response".into()))
}
