use route_atc::session::{LiveSession, Roster, SessionKind};
use route_atc::{
    FetchFailure, FlightPlanSource, RosterSource, RouteAtcError, UserContext, classify_for_user,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const OFP: &str = r#"{
  "fetch": { "userid": "123456", "status": "Success" },
  "origin": { "icao_code": "EDDF" },
  "destination": { "icao_code": "LOWW" },
  "general": { "route": "SULUS UZ650 TOSTU" },
  "navlog": { "fix": [
    { "ident": "SULUS", "fir": "EDGG" },
    { "ident": "TOSTU", "fir": "EDMM" }
  ]}
}"#;

struct StaticPlan {
    body: Result<String, FetchFailure>,
    calls: AtomicUsize,
}

impl StaticPlan {
    fn ok(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(failure: FetchFailure) -> Self {
        Self {
            body: Err(failure),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FlightPlanSource for StaticPlan {
    async fn fetch_flight_plan(&self, _pilot_id: &str) -> Result<String, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body.clone()
    }
}

struct StaticRoster(Result<Arc<Roster>, FetchFailure>);

impl RosterSource for StaticRoster {
    async fn fetch_roster(&self) -> Result<Arc<Roster>, FetchFailure> {
        self.0.clone()
    }
}

fn live_roster() -> StaticRoster {
    let controllers = ["EDDF_N_GND", "EDDF_TWR", "LOWW_APP", "EDGG_W_FSS", "EDGG_CTR"]
        .into_iter()
        .map(|cs| LiveSession::bare(cs, SessionKind::Controller))
        .collect();
    let atis = vec![LiveSession::bare("LOWW_ATIS", SessionKind::AtisBroadcast)];
    StaticRoster(Ok(Arc::new(Roster::new(controllers, atis))))
}

fn pilot() -> UserContext {
    UserContext::with_override("pilot42")
}

#[tokio::test]
async fn classifies_a_full_route() {
    let result = classify_for_user(&pilot(), &StaticPlan::ok(OFP), &live_roster())
        .await
        .expect("classification should succeed");

    assert_eq!(result.departure, "EDDF");
    assert_eq!(result.arrival, "LOWW");
    assert_eq!(result.route, "SULUS UZ650 TOSTU");
    assert_eq!(result.departure_stations.ground.callsign, "EDDF_N_GND");
    assert!(result.departure_stations.tower.online);
    assert!(!result.departure_stations.atis.online);
    assert!(result.arrival_stations.atis.online);
    assert!(result.arrival_stations.approach.online);

    let enroute: Vec<_> = result
        .enroute_airspaces
        .iter()
        .map(|a| (a.code.as_str(), a.online))
        .collect();
    assert_eq!(enroute, vec![("EDGG", true), ("EDMM", false)]);
}

#[tokio::test]
async fn empty_roster_is_fully_offline() {
    let empty = StaticRoster(Ok(Arc::new(Roster::default())));
    let result = classify_for_user(&pilot(), &StaticPlan::ok(OFP), &empty)
        .await
        .expect("an empty roster is not an error");

    for stations in [&result.departure_stations, &result.arrival_stations] {
        assert_eq!(stations.iter().count(), 4);
        assert_eq!(stations.online_count(), 0);
    }
    assert_eq!(result.enroute_airspaces.len(), 2);
    assert!(result.enroute_airspaces.iter().all(|a| !a.online));
}

#[tokio::test]
async fn identical_snapshots_serialize_identically() {
    let plan = StaticPlan::ok(OFP);
    let roster = live_roster();
    let first = classify_for_user(&pilot(), &plan, &roster).await.unwrap();
    let second = classify_for_user(&pilot(), &plan, &roster).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn unresolved_identity_skips_fetching() {
    let plan = StaticPlan::ok(OFP);
    let err = classify_for_user(&UserContext::default(), &plan, &live_roster())
        .await
        .unwrap_err();
    assert!(matches!(err, RouteAtcError::IdentityUnresolved));
    assert_eq!(plan.calls.load(Ordering::SeqCst), 0);
    assert_eq!(err.to_string(), "No SimBrief ID/username found in your profile.");
}

#[tokio::test]
async fn flight_plan_failure_outranks_roster_failure() {
    let err = classify_for_user(
        &pilot(),
        &StaticPlan::failing(FetchFailure::Timeout),
        &StaticRoster(Err(FetchFailure::Status(503))),
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        RouteAtcError::FlightPlanUnavailable(FetchFailure::Timeout)
    ));
}

#[tokio::test]
async fn blank_body_is_unavailable() {
    let err = classify_for_user(&pilot(), &StaticPlan::ok("  \n"), &live_roster())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RouteAtcError::FlightPlanUnavailable(FetchFailure::Empty)
    ));
}

#[tokio::test]
async fn malformed_plan_is_reported() {
    let err = classify_for_user(&pilot(), &StaticPlan::ok("<OFP>"), &live_roster())
        .await
        .unwrap_err();
    assert!(matches!(err, RouteAtcError::FlightPlanMalformed(_)));
    assert_eq!(err.to_string(), "Invalid SimBrief response.");
}

#[tokio::test]
async fn missing_origin_outranks_roster_failure() {
    let body = r#"{"fetch": {"status": "Error: Unknown UserID"}}"#;
    let err = classify_for_user(
        &pilot(),
        &StaticPlan::ok(body),
        &StaticRoster(Err(FetchFailure::Timeout)),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RouteAtcError::RouteIncomplete));
}

#[tokio::test]
async fn roster_failure_is_last() {
    let err = classify_for_user(
        &pilot(),
        &StaticPlan::ok(OFP),
        &StaticRoster(Err(FetchFailure::InvalidPayload("not a collection".into()))),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RouteAtcError::RosterUnavailable(_)));
    assert_eq!(err.to_string(), "Could not contact VATSIM live data.");
}
