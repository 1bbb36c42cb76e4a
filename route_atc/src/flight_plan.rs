//! Flight-plan adapter over the SimBrief OFP document.

use crate::callsign::is_airspace_code;
use crate::error::{MalformedDocument, RouteAtcError};
use serde::Serialize;
use serde_json::Value;

const ROUTE_PATHS: [&[&str]; 3] = [
    &["general", "route"],
    &["general", "atc_route"],
    &["general", "route_text"],
];
const NAVLOG_PATHS: [&[&str]; 2] = [&["text", "navlog"], &["navlog_text"]];
const FIR_KEY: &str = "fir";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlan {
    pub departure: String,
    pub arrival: String,
    pub route: String,
    pub navlog_text: Option<String>,
    /// Airspace ids listed by `fir` nodes, in document order, already validated.
    pub explicit_airspaces: Vec<String>,
}

impl FlightPlan {
    /// Parses a raw OFP body. Invalid JSON or a non-object root is
    /// [`RouteAtcError::FlightPlanMalformed`]; a missing origin or destination is
    /// [`RouteAtcError::RouteIncomplete`].
    pub fn parse(raw: &str) -> Result<Self, RouteAtcError> {
        let document: Value = serde_json::from_str(raw).map_err(MalformedDocument::from)?;
        if !document.is_object() {
            return Err(MalformedDocument::NotAnObject.into());
        }
        Self::from_document(&document)
    }

    pub fn from_document(document: &Value) -> Result<Self, RouteAtcError> {
        let airport = |path: &[&str]| {
            text_at(document, path)
                .map(|code| code.to_ascii_uppercase())
                .filter(|code| !code.is_empty())
        };
        let (Some(departure), Some(arrival)) = (
            airport(&["origin", "icao_code"]),
            airport(&["destination", "icao_code"]),
        ) else {
            return Err(RouteAtcError::RouteIncomplete);
        };

        let route = ROUTE_PATHS
            .iter()
            .find_map(|path| text_at(document, path).filter(|r| !r.is_empty()))
            .unwrap_or_default();
        let navlog_text = NAVLOG_PATHS
            .iter()
            .find_map(|path| text_at(document, path).filter(|t| !t.is_empty()));

        let mut explicit_airspaces = Vec::new();
        collect_fir_ids(document, &mut explicit_airspaces);

        Ok(Self {
            departure,
            arrival,
            route,
            navlog_text,
            explicit_airspaces,
        })
    }
}

fn text_at(document: &Value, path: &[&str]) -> Option<String> {
    path.iter()
        .try_fold(document, |node, key| node.get(key))?
        .as_str()
        .map(|s| s.trim().to_string())
}

fn collect_fir_ids(node: &Value, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                if key == FIR_KEY {
                    fir_codes(child, out);
                } else {
                    collect_fir_ids(child, out);
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_fir_ids(item, out)),
        _ => {}
    }
}

// A fir node is a bare id, an object carrying `id` or `code`, or a list of either.
fn fir_codes(node: &Value, out: &mut Vec<String>) {
    let raw = match node {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map
            .get("id")
            .or_else(|| map.get("code"))
            .and_then(Value::as_str),
        Value::Array(items) => {
            items.iter().for_each(|item| fir_codes(item, out));
            None
        }
        _ => None,
    };

    if let Some(code) = raw.map(|r| r.trim().to_ascii_uppercase())
        && is_airspace_code(&code)
    {
        out.push(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_core_fields() {
        let doc = json!({
            "origin": { "icao_code": " eddf " },
            "destination": { "icao_code": "EGLL" },
            "general": { "route": "", "atc_route": "SULUS UZ29 TORNI" },
            "text": { "navlog": "EDGG EHAA EGTT" }
        });
        let plan = FlightPlan::from_document(&doc).unwrap();
        assert_eq!(plan.departure, "EDDF");
        assert_eq!(plan.arrival, "EGLL");
        assert_eq!(plan.route, "SULUS UZ29 TORNI");
        assert_eq!(plan.navlog_text.as_deref(), Some("EDGG EHAA EGTT"));
        assert!(plan.explicit_airspaces.is_empty());
    }

    #[test]
    fn collects_fir_nodes_in_document_order() {
        let doc = json!({
            "origin": { "icao_code": "EDDF" },
            "destination": { "icao_code": "LOWW" },
            "navlog": { "fix": [
                { "ident": "SULUS", "fir": "edgg" },
                { "ident": "TOSTU", "fir": { "id": "EDMM" } },
                { "ident": "NIGSI", "fir": [{ "code": "LOVV" }, "X1", "LOVVX"] }
            ]}
        });
        let plan = FlightPlan::from_document(&doc).unwrap();
        assert_eq!(plan.explicit_airspaces, vec!["EDGG", "EDMM", "LOVV"]);
    }

    #[test]
    fn missing_destination_is_incomplete() {
        let doc = json!({ "origin": { "icao_code": "EDDF" }, "destination": { "icao_code": "  " } });
        assert!(matches!(
            FlightPlan::from_document(&doc),
            Err(RouteAtcError::RouteIncomplete)
        ));
    }

    #[test]
    fn rejects_non_documents() {
        assert!(matches!(
            FlightPlan::parse("<OFP><fetch>"),
            Err(RouteAtcError::FlightPlanMalformed(MalformedDocument::Json(_)))
        ));
        assert!(matches!(
            FlightPlan::parse("[1, 2]"),
            Err(RouteAtcError::FlightPlanMalformed(MalformedDocument::NotAnObject))
        ));
    }
}
