use chrono::{DateTime, Utc};
use route_atc::RouteClassification;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAtcDto {
    pub requested_at: DateTime<Utc>,
    #[serde(flatten)]
    pub classification: RouteClassification,
}

#[derive(Deserialize, Debug)]
pub struct RouteAtcQuery {
    pub simbrief: Option<String>,
}
