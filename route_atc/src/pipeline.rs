use crate::airspace::enroute_airspaces;
use crate::centers::{AirspaceStatus, map_center_status};
use crate::error::{FetchFailure, RouteAtcError};
use crate::flight_plan::FlightPlan;
use crate::identity::{UserContext, resolve_flight_plan_id};
use crate::session::Roster;
use crate::stations::{AirportStations, resolve_airport_stations};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Source of raw SimBrief OFP bodies.
pub trait FlightPlanSource {
    fn fetch_flight_plan(
        &self,
        pilot_id: &str,
    ) -> impl Future<Output = Result<String, FetchFailure>> + Send;
}

/// Source of live network roster snapshots.
pub trait RosterSource {
    fn fetch_roster(&self) -> impl Future<Output = Result<Arc<Roster>, FetchFailure>> + Send;
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteClassification {
    pub departure: String,
    pub arrival: String,
    pub route: String,
    pub departure_stations: AirportStations,
    pub arrival_stations: AirportStations,
    pub enroute_airspaces: Vec<AirspaceStatus>,
    pub roster_updated_at: Option<DateTime<Utc>>,
}

/// Classifies one flight plan against one roster snapshot. Never fails: anything that does not
/// match simply shows up as offline.
pub fn classify(plan: &FlightPlan, roster: &Roster) -> RouteClassification {
    let airspaces = enroute_airspaces(plan);
    RouteClassification {
        departure: plan.departure.clone(),
        arrival: plan.arrival.clone(),
        route: plan.route.clone(),
        departure_stations: resolve_airport_stations(&plan.departure, roster),
        arrival_stations: resolve_airport_stations(&plan.arrival, roster),
        enroute_airspaces: map_center_status(&airspaces, &roster.controllers),
        roster_updated_at: roster.updated_at,
    }
}

/// Runs the full request: identity, both fetches, parsing, then classification. The first failing
/// stage decides the error; the two fetches themselves run concurrently.
#[instrument(skip_all)]
pub async fn classify_for_user<F, R>(
    user: &UserContext,
    flight_plans: &F,
    roster_source: &R,
) -> Result<RouteClassification, RouteAtcError>
where
    F: FlightPlanSource + Sync,
    R: RosterSource + Sync,
{
    let Some(pilot_id) = resolve_flight_plan_id(user) else {
        warn!(name: "pipeline.identity.unresolved", "no SimBrief identifier for user");
        return Err(RouteAtcError::IdentityUnresolved);
    };

    let (raw_plan, roster) = tokio::join!(
        flight_plans.fetch_flight_plan(&pilot_id),
        roster_source.fetch_roster()
    );

    let raw_plan = raw_plan
        .and_then(|body| {
            if body.trim().is_empty() {
                Err(FetchFailure::Empty)
            } else {
                Ok(body)
            }
        })
        .map_err(|e| {
            warn!(name: "pipeline.flight_plan.unavailable", error = ?e, "flight plan fetch failed");
            RouteAtcError::FlightPlanUnavailable(e)
        })?;

    let plan = FlightPlan::parse(&raw_plan).inspect_err(|e| {
        warn!(name: "pipeline.flight_plan.rejected", error = ?e, "flight plan unusable");
    })?;

    let roster = roster.map_err(|e| {
        warn!(name: "pipeline.roster.unavailable", error = ?e, "roster fetch failed");
        RouteAtcError::RosterUnavailable(e)
    })?;

    if roster.is_empty() {
        info!(name: "pipeline.roster.empty", "roster has no live sessions, every station is offline");
    }

    let classification = classify(&plan, &roster);
    info!(
        name: "pipeline.classified",
        departure = %classification.departure,
        arrival = %classification.arrival,
        airspaces = classification.enroute_airspaces.len(),
        "classified route coverage"
    );
    Ok(classification)
}
