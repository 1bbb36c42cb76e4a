use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

pub const DATAFEED_URL: &str = "https://data.vatsim.net/v3/vatsim-data.json";

/// Subset of the VATSIM v3 data feed. Pilots, prefiles and the reference tables are not read.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DatafeedRoot {
    #[serde(default)]
    pub general: Option<General>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub controllers: Vec<Controller>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub atis: Vec<Controller>,
}

/// A `null` list reads as empty, and entries that do not fit `T` are dropped one by one. A value
/// that is not a list at all is still an error.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = raw.len();
    let entries: Vec<T> = raw
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    if entries.len() < total {
        debug!(
            name: "datafeed.entries.skipped",
            skipped = total - entries.len(),
            kept = entries.len(),
            "skipped malformed datafeed entries"
        );
    }
    Ok(entries)
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct General {
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub update_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub connected_clients: Option<i32>,
    #[serde(default)]
    pub unique_users: Option<i32>,
}

/// One connected voice position or ATIS broadcast. Both lists share this shape; `atis_code`
/// is only populated for ATIS entries.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Controller {
    #[serde(default)]
    pub cid: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub callsign: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub facility: Option<i32>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub visual_range: Option<i32>,
    #[serde(default)]
    pub atis_code: Option<String>,
    #[serde(default)]
    pub text_atis: Option<Vec<String>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub logon_time: Option<DateTime<Utc>>,
}
