use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::vatsim::datafeed::{Controller, DatafeedRoot};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionKind {
    Controller,
    AtisBroadcast,
}

/// One connected station from a roster snapshot. Descriptive fields are carried through as the
/// data feed reported them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LiveSession {
    pub callsign: String,
    pub kind: SessionKind,
    pub cid: Option<i64>,
    pub name: Option<String>,
    pub frequency: Option<String>,
    pub rating: Option<i32>,
    pub facility: Option<i32>,
    pub atis_code: Option<String>,
    pub text_atis: Vec<String>,
    pub logon_time: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl LiveSession {
    /// Builds a session carrying only a callsign.
    pub fn bare(callsign: impl Into<String>, kind: SessionKind) -> Self {
        Self {
            callsign: callsign.into(),
            kind,
            cid: None,
            name: None,
            frequency: None,
            rating: None,
            facility: None,
            atis_code: None,
            text_atis: Vec::new(),
            logon_time: None,
            last_updated: None,
        }
    }

    fn from_datafeed(entry: Controller, kind: SessionKind) -> Option<Self> {
        let callsign = entry.callsign.filter(|c| !c.trim().is_empty())?;
        Some(Self {
            callsign,
            kind,
            cid: entry.cid,
            name: entry.name,
            frequency: entry.frequency,
            rating: entry.rating,
            facility: entry.facility,
            atis_code: entry.atis_code,
            text_atis: entry.text_atis.unwrap_or_default(),
            logon_time: entry.logon_time,
            last_updated: entry.last_updated,
        })
    }
}

/// Point-in-time snapshot of the network: voice positions and ATIS broadcasts, each in the order
/// the data feed listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub controllers: Vec<LiveSession>,
    pub atis: Vec<LiveSession>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Roster {
    pub fn new(controllers: Vec<LiveSession>, atis: Vec<LiveSession>) -> Self {
        Self {
            controllers,
            atis,
            updated_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty() && self.atis.is_empty()
    }
}

impl From<DatafeedRoot> for Roster {
    fn from(root: DatafeedRoot) -> Self {
        let controllers = root
            .controllers
            .into_iter()
            .filter_map(|c| LiveSession::from_datafeed(c, SessionKind::Controller))
            .collect();
        let atis = root
            .atis
            .into_iter()
            .filter_map(|a| LiveSession::from_datafeed(a, SessionKind::AtisBroadcast))
            .collect();
        Self {
            controllers,
            atis,
            updated_at: root.general.and_then(|g| g.update_timestamp),
        }
    }
}
