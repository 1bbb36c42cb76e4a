//! SimBrief operational flight plan (OFP) endpoint.
//!
//! The OFP is consumed as an untyped JSON document: its shape varies between planning options and
//! the fields that matter are located by path, see `route_atc::flight_plan`.

pub const OFP_FETCHER_URL: &str = "https://www.simbrief.com/api/xml.fetcher.php";

/// Query parameters for the latest OFP of one SimBrief user.
pub fn ofp_query(pilot_id: &str) -> [(&'static str, &str); 2] {
    [("username", pilot_id), ("json", "1")]
}
