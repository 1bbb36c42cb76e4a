use route_atc::{Roster, SessionKind};
use shared::vatsim::datafeed::DatafeedRoot;

const FEED: &str = r#"{
  "general": { "update_timestamp": "2024-05-04T18:21:07.2376321Z" },
  "controllers": [
    { "cid": 1, "name": "A", "callsign": "EDGG_CTR", "frequency": "136.955", "rating": 5 },
    { "cid": 2, "name": "Observer without callsign" },
    { "cid": 3, "name": "B", "callsign": "  " },
    { "cid": 4, "name": "C", "callsign": "EDDF_TWR", "text_atis": ["Frankfurt Tower"] }
  ],
  "atis": [
    { "cid": 5, "callsign": "EDDF_ATIS", "atis_code": "Q", "text_atis": null }
  ]
}"#;

#[test]
fn builds_roster_from_datafeed() -> Result<(), serde_json::Error> {
    let feed: DatafeedRoot = serde_json::from_str(FEED)?;
    let roster = Roster::from(feed);

    let controllers: Vec<_> = roster.controllers.iter().map(|s| s.callsign.as_str()).collect();
    assert_eq!(controllers, vec!["EDGG_CTR", "EDDF_TWR"]);
    assert!(roster.controllers.iter().all(|s| s.kind == SessionKind::Controller));
    assert_eq!(roster.controllers[0].frequency.as_deref(), Some("136.955"));
    assert_eq!(roster.controllers[0].rating, Some(5));
    assert_eq!(roster.controllers[1].text_atis, vec!["Frankfurt Tower"]);

    assert_eq!(roster.atis.len(), 1);
    assert_eq!(roster.atis[0].kind, SessionKind::AtisBroadcast);
    assert_eq!(roster.atis[0].atis_code.as_deref(), Some("Q"));
    assert!(roster.atis[0].text_atis.is_empty());
    assert!(roster.updated_at.is_some());
    assert!(!roster.is_empty());
    Ok(())
}

#[test]
fn empty_feed_is_an_empty_roster() -> Result<(), serde_json::Error> {
    let roster = Roster::from(serde_json::from_str::<DatafeedRoot>("{}")?);
    assert!(roster.is_empty());
    assert!(roster.updated_at.is_none());
    Ok(())
}

#[test]
fn malformed_feed_entries_do_not_hide_valid_ones() -> Result<(), serde_json::Error> {
    let feed: DatafeedRoot = serde_json::from_str(
        r#"{
          "controllers": [
            { "cid": 1, "callsign": "EDDF_TWR", "rating": 5 },
            { "cid": 2, "callsign": 12345, "rating": "S1" }
          ],
          "atis": null
        }"#,
    )?;
    let roster = Roster::from(feed);

    let controllers: Vec<_> = roster.controllers.iter().map(|s| s.callsign.as_str()).collect();
    assert_eq!(controllers, vec!["EDDF_TWR"]);
    assert!(roster.atis.is_empty());
    assert!(!roster.is_empty());
    Ok(())
}
