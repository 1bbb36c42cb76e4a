//! Static corridor tables for routes without explicit airspace data.
//!
//! Coarse by nature: a route touching Europe gets the general European list plus the national
//! lists of its endpoints, a route touching North America or the Caribbean gets the western
//! Atlantic list. No boundary geometry is involved.

use super::dedup_codes;
use crate::flight_plan::FlightPlan;

pub const EUROPE: &[&str] = &[
    "EGTT", "EGPX", "EHAA", "EDGG", "EDMM", "EDWW", "EDYY", "EBBU", "LFFF", "LFMM", "LFRR",
    "LECM", "LECB", "LKAA", "LOVV", "LHCC", "LQSB", "LJLA", "LIMM", "LIRR", "LGGG",
];

pub const NORTH_AMERICA_CARIBBEAN: &[&str] = &[
    "KZMA", "KZNY", "KZBW", "KZWY", "KZJX", "KZHU", "TTZP", "MKJK", "MTEG", "TTPP", "MUHA", "MUFH",
    "TZCZ", "SKEC",
];

/// National lists layered on top of [`EUROPE`], keyed by two-letter ICAO prefix.
pub const EUROPEAN_SUBREGIONS: &[(&str, &[&str])] = &[
    ("EG", &["EGTT", "EGPX"]),
    ("ED", &["EDGG", "EDMM", "EDWW", "EDYY"]),
    ("LF", &["LFFF", "LFMM", "LFRR"]),
    ("LE", &["LECM", "LECB"]),
    ("EH", &["EHAA"]),
    ("EB", &["EBBU"]),
];

const EUROPE_LETTERS: [char; 2] = ['E', 'L'];
const AMERICAS_LETTERS: [char; 4] = ['M', 'T', 'K', 'C'];

/// Candidate airspaces for the plan's departure and arrival. Empty when neither endpoint is in
/// a covered region.
pub fn guess_corridor(plan: &FlightPlan) -> Vec<String> {
    let endpoints = [plan.departure.as_str(), plan.arrival.as_str()];
    let touches = |letters: &[char]| {
        endpoints
            .iter()
            .any(|code| code.chars().next().is_some_and(|c| letters.contains(&c)))
    };

    let mut candidates: Vec<&str> = Vec::new();

    if touches(&EUROPE_LETTERS) {
        candidates.extend_from_slice(EUROPE);
        for (prefix, codes) in EUROPEAN_SUBREGIONS {
            if endpoints.iter().any(|code| code.starts_with(prefix)) {
                candidates.extend_from_slice(codes);
            }
        }
    }

    if touches(&AMERICAS_LETTERS) {
        candidates.extend_from_slice(NORTH_AMERICA_CARIBBEAN);
    }

    dedup_codes(candidates)
}
