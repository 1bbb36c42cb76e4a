use crate::callsign::ParsedCallsign;
use crate::role::{RoleFamily, ServiceType};
use crate::session::LiveSession;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Number of live centers shown when no airspace codes could be derived for the route.
pub const FALLBACK_CENTER_LIMIT: usize = 10;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AirspaceStatus {
    pub code: String,
    pub online: bool,
    pub service_type: Option<ServiceType>,
    pub session: Option<LiveSession>,
}

#[derive(Debug)]
struct CenterEntry<'a> {
    code: String,
    service_type: ServiceType,
    session: &'a LiveSession,
}

/// Live CTR/FSS stations keyed by airspace code, in first-seen roster order.
#[derive(Debug, Default)]
pub struct CenterIndex<'a> {
    entries: Vec<CenterEntry<'a>>,
    by_code: HashMap<String, usize>,
}

impl<'a> CenterIndex<'a> {
    /// Indexes every `CODE_CTR`, `CODE_FSS`, `CODE_SECTOR_CTR` and `CODE_SECTOR_FSS` controller.
    /// A CTR replaces an FSS recorded for the same code; nothing else is replaced.
    pub fn build(controllers: &'a [LiveSession]) -> Self {
        let mut index = Self::default();
        for session in controllers {
            let Ok(cs) = ParsedCallsign::parse(&session.callsign) else {
                continue;
            };
            if cs.family() != Some(RoleFamily::Center) {
                continue;
            }
            let Some(service_type) = ServiceType::from_token(cs.role_token()) else {
                continue;
            };
            if !cs.has_short_sector() {
                continue;
            }
            index.record(cs.prefix(), service_type, session);
        }
        index
    }

    fn record(&mut self, code: &str, service_type: ServiceType, session: &'a LiveSession) {
        match self.by_code.get(code) {
            Some(&i) => {
                let existing = &mut self.entries[i];
                if service_type == ServiceType::Ctr && existing.service_type == ServiceType::Fss {
                    trace!(code = %code, callsign = %session.callsign, "CTR supersedes FSS");
                    existing.service_type = service_type;
                    existing.session = session;
                }
            }
            None => {
                self.by_code.insert(code.to_string(), self.entries.len());
                self.entries.push(CenterEntry {
                    code: code.to_string(),
                    service_type,
                    session,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    pub fn status(&self, code: &str) -> AirspaceStatus {
        match self.by_code.get(code).map(|&i| &self.entries[i]) {
            Some(entry) => AirspaceStatus {
                code: code.to_string(),
                online: true,
                service_type: Some(entry.service_type),
                session: Some(entry.session.clone()),
            },
            None => AirspaceStatus {
                code: code.to_string(),
                online: false,
                service_type: None,
                session: None,
            },
        }
    }
}

/// Online status for each airspace code, in de-duplicated input order. With no codes at all,
/// the first [`FALLBACK_CENTER_LIMIT`] live centers of the roster are reported instead.
pub fn map_center_status(codes: &[String], controllers: &[LiveSession]) -> Vec<AirspaceStatus> {
    let index = CenterIndex::build(controllers);

    let codes: Vec<String> = if codes.is_empty() {
        debug!(
            name: "centers.fallback",
            live = index.len(),
            "no route airspaces, listing live centers"
        );
        index
            .codes()
            .take(FALLBACK_CENTER_LIMIT)
            .map(str::to_string)
            .collect()
    } else {
        let mut seen = HashSet::new();
        codes
            .iter()
            .filter(|code| seen.insert(code.as_str()))
            .cloned()
            .collect()
    };

    codes.iter().map(|code| index.status(code)).collect()
}
