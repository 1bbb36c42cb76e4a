use crate::upstream::{SimbriefClient, VatsimClient, build_http_client};
use shared::UpstreamConfig;

#[derive(Clone)]
pub struct AppState {
    pub flight_plans: SimbriefClient,
    pub roster: VatsimClient,
}

impl AppState {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self {
            flight_plans: SimbriefClient::new(client.clone(), config),
            roster: VatsimClient::new(client, config),
        })
    }
}
