//! En-route airspace extraction.
//!
//! Explicit airspace ids from the flight plan win. When the plan lists none, the departure and
//! arrival regions select a static corridor of likely airspaces instead.

pub mod corridor;

use crate::callsign::is_airspace_code;
use crate::flight_plan::FlightPlan;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// First letters of ICAO regions whose 4-letter navlog tokens are taken as airspace ids.
pub const REGION_PREFIXES: [char; 14] = [
    'E', 'L', 'B', 'U', 'K', 'C', 'M', 'T', 'O', 'V', 'W', 'Y', 'Z', 'R',
];

static NAVLOG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{4})\b").expect("navlog token pattern is valid"));

/// Ordered, de-duplicated airspace codes for the route.
pub fn enroute_airspaces(plan: &FlightPlan) -> Vec<String> {
    let explicit = explicit_airspaces(plan);
    if !explicit.is_empty() {
        debug!(name: "airspace.explicit", count = explicit.len(), "using flight plan airspaces");
        return explicit;
    }

    let guessed = corridor::guess_corridor(plan);
    debug!(name: "airspace.corridor", count = guessed.len(), "using corridor heuristic");
    guessed
}

/// Airspace ids named by the flight plan itself: structured ids first, then region-shaped
/// tokens found in the navlog text.
pub fn explicit_airspaces(plan: &FlightPlan) -> Vec<String> {
    let navlog = plan
        .navlog_text
        .as_deref()
        .map(navlog_airspaces)
        .unwrap_or_default();

    dedup_codes(plan.explicit_airspaces.iter().cloned().chain(navlog))
}

/// Scans free text for 4-letter uppercase tokens starting with a [`REGION_PREFIXES`] letter.
/// This is a token scan, not a navlog grammar; waypoint names of the same shape are picked up.
pub fn navlog_airspaces(text: &str) -> Vec<String> {
    NAVLOG_TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|code| code.starts_with(REGION_PREFIXES))
        .map(str::to_string)
        .collect()
}

/// Keeps well-formed codes in first-seen order, dropping repeats.
pub fn dedup_codes<I, S>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    codes
        .into_iter()
        .map(Into::into)
        .filter(|code| is_airspace_code(code) && seen.insert(code.clone()))
        .collect()
}
