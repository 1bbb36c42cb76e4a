use thiserror::Error;

/// Why an upstream snapshot could not be obtained.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("upstream responded with status {0}")]
    Status(u16),
    #[error("upstream returned an empty body")]
    Empty,
    #[error("upstream payload could not be decoded: {0}")]
    InvalidPayload(String),
}

#[derive(Debug, Error)]
pub enum MalformedDocument {
    #[error("flight plan is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("flight plan is not a JSON object")]
    NotAnObject,
}

/// Terminal outcomes of one classification request, in pipeline order. The `Display` text is the
/// advisory shown to the pilot.
#[derive(Debug, Error)]
pub enum RouteAtcError {
    #[error("No SimBrief ID/username found in your profile.")]
    IdentityUnresolved,
    #[error("Could not fetch SimBrief OFP for your account.")]
    FlightPlanUnavailable(#[source] FetchFailure),
    #[error("Invalid SimBrief response.")]
    FlightPlanMalformed(#[source] MalformedDocument),
    #[error("Could not read origin/destination from SimBrief.")]
    RouteIncomplete,
    #[error("Could not contact VATSIM live data.")]
    RosterUnavailable(#[source] FetchFailure),
}

impl From<MalformedDocument> for RouteAtcError {
    fn from(e: MalformedDocument) -> Self {
        Self::FlightPlanMalformed(e)
    }
}
