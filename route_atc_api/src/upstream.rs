//! HTTP clients for the two upstream snapshots, each behind a TTL cache.

use crate::cache::TtlCache;
use reqwest::Client;
use route_atc::{FetchFailure, FlightPlanSource, Roster, RosterSource};
use shared::UpstreamConfig;
use shared::simbrief::ofp_query;
use shared::vatsim::datafeed::DatafeedRoot;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const ROSTER_CACHE_KEY: &str = "routeatc:vatsim:v3";

pub fn build_http_client(config: &UpstreamConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn fetch_failure(e: reqwest::Error) -> FetchFailure {
    if e.is_timeout() {
        FetchFailure::Timeout
    } else if let Some(status) = e.status() {
        FetchFailure::Status(status.as_u16())
    } else if e.is_decode() {
        FetchFailure::InvalidPayload(e.to_string())
    } else {
        FetchFailure::Transport(e.to_string())
    }
}

#[derive(Clone)]
pub struct SimbriefClient {
    client: Client,
    url: String,
    cache: Arc<TtlCache<String>>,
}

impl SimbriefClient {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            url: config.simbrief_url.clone(),
            cache: Arc::new(TtlCache::new(Duration::from_secs(
                config.flight_plan_ttl_seconds,
            ))),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_ofp(&self, pilot_id: &str) -> Result<String, FetchFailure> {
        let body = self
            .client
            .get(&self.url)
            .query(&ofp_query(pilot_id))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_failure)?
            .text()
            .await
            .map_err(fetch_failure)?;

        if body.trim().is_empty() {
            return Err(FetchFailure::Empty);
        }
        debug!(name: "simbrief.fetched", bytes = body.len(), "fetched SimBrief OFP");
        Ok(body)
    }
}

impl FlightPlanSource for SimbriefClient {
    async fn fetch_flight_plan(&self, pilot_id: &str) -> Result<String, FetchFailure> {
        let key = format!("routeatc:simbrief:{pilot_id}");
        self.cache
            .get_or_try_insert_with(&key, || self.fetch_ofp(pilot_id))
            .await
    }
}

#[derive(Clone)]
pub struct VatsimClient {
    client: Client,
    url: String,
    cache: Arc<TtlCache<Arc<Roster>>>,
}

impl VatsimClient {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            url: config.datafeed_url.clone(),
            cache: Arc::new(TtlCache::new(Duration::from_secs(config.roster_ttl_seconds))),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_datafeed(&self) -> Result<Arc<Roster>, FetchFailure> {
        let root = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_failure)?
            .json::<DatafeedRoot>()
            .await
            .map_err(fetch_failure)?;

        let roster = Roster::from(root);
        debug!(
            name: "datafeed.fetched",
            controllers = roster.controllers.len(),
            atis = roster.atis.len(),
            updated_at = ?roster.updated_at,
            "fetched VATSIM data feed"
        );
        Ok(Arc::new(roster))
    }
}

impl RosterSource for VatsimClient {
    async fn fetch_roster(&self) -> Result<Arc<Roster>, FetchFailure> {
        self.cache
            .get_or_try_insert_with(ROSTER_CACHE_KEY, || self.fetch_datafeed())
            .await
    }
}
