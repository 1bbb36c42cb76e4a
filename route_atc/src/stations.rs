//! Airport station resolution: one ATIS, ground, tower and approach slot per airport.

use crate::callsign::ParsedCallsign;
use crate::role::RoleFamily;
use crate::session::{LiveSession, Roster};
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationRole {
    Atis,
    Ground,
    Tower,
    Approach,
}

impl StationRole {
    pub const ALL: [Self; 4] = [Self::Atis, Self::Ground, Self::Tower, Self::Approach];

    pub const fn family(self) -> RoleFamily {
        match self {
            Self::Atis => RoleFamily::Atis,
            Self::Ground => RoleFamily::Ground,
            Self::Tower => RoleFamily::Tower,
            Self::Approach => RoleFamily::Approach,
        }
    }

    /// Role token used for the offline placeholder callsign.
    pub const fn placeholder_suffix(self) -> &'static str {
        match self {
            Self::Atis => "ATIS",
            Self::Ground => "GND",
            Self::Tower => "TWR",
            Self::Approach => "APP",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StationSlot {
    pub role: StationRole,
    pub online: bool,
    /// The live callsign when online, `<AIRPORT>_<ROLE>` otherwise.
    pub callsign: String,
    /// Text shown for the slot. Equals `callsign` except for an offline approach slot, which
    /// reads `APP/DEP`.
    pub label: String,
    pub session: Option<LiveSession>,
}

impl StationSlot {
    fn online(role: StationRole, session: &LiveSession) -> Self {
        Self {
            role,
            online: true,
            callsign: session.callsign.clone(),
            label: session.callsign.clone(),
            session: Some(session.clone()),
        }
    }

    fn offline(role: StationRole, airport: &str) -> Self {
        let callsign = format!("{airport}_{}", role.placeholder_suffix());
        let label = match role {
            StationRole::Approach => "APP/DEP".to_string(),
            _ => callsign.clone(),
        };
        Self {
            role,
            online: false,
            callsign,
            label,
            session: None,
        }
    }
}

/// Exactly one slot per [`StationRole`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AirportStations {
    pub atis: StationSlot,
    pub ground: StationSlot,
    pub tower: StationSlot,
    pub approach: StationSlot,
}

impl AirportStations {
    pub fn get(&self, role: StationRole) -> &StationSlot {
        match role {
            StationRole::Atis => &self.atis,
            StationRole::Ground => &self.ground,
            StationRole::Tower => &self.tower,
            StationRole::Approach => &self.approach,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationSlot> {
        StationRole::ALL.into_iter().map(|role| self.get(role))
    }

    pub fn online_count(&self) -> usize {
        self.iter().filter(|slot| slot.online).count()
    }
}

/// Resolves the four station slots of `airport` against a roster snapshot.
///
/// ATIS is looked up in the ATIS list first and then among the controllers, accepting
/// `AIRPORT_ROLE` or `AIRPORT_SECTOR_ROLE` with a short sector. Ground, tower and approach take
/// the first controller, in roster order, whose prefix is the airport and whose role token is in
/// the family; any number of sector qualifiers is allowed there.
pub fn resolve_airport_stations(airport: &str, roster: &Roster) -> AirportStations {
    let airport = airport.trim().to_ascii_uppercase();
    let slot = |role: StationRole, hit: Option<&LiveSession>| match hit {
        Some(session) => StationSlot::online(role, session),
        None => StationSlot::offline(role, &airport),
    };

    let stations = AirportStations {
        atis: slot(StationRole::Atis, find_atis(&airport, roster)),
        ground: slot(
            StationRole::Ground,
            find_role(&airport, RoleFamily::Ground, &roster.controllers),
        ),
        tower: slot(
            StationRole::Tower,
            find_role(&airport, RoleFamily::Tower, &roster.controllers),
        ),
        approach: slot(
            StationRole::Approach,
            find_role(&airport, RoleFamily::Approach, &roster.controllers),
        ),
    };

    debug!(
        name: "stations.resolved",
        airport = %airport,
        online = stations.online_count(),
        "resolved airport stations"
    );
    stations
}

fn find_atis<'a>(airport: &str, roster: &'a Roster) -> Option<&'a LiveSession> {
    let is_atis = |session: &&LiveSession| {
        ParsedCallsign::parse(&session.callsign).is_ok_and(|cs| {
            cs.is_for(airport) && cs.family() == Some(RoleFamily::Atis) && cs.has_short_sector()
        })
    };

    roster.atis.iter().find(is_atis).or_else(|| {
        trace!(airport = %airport, "no ATIS broadcast, checking controller positions");
        roster.controllers.iter().find(is_atis)
    })
}

fn find_role<'a>(
    airport: &str,
    family: RoleFamily,
    controllers: &'a [LiveSession],
) -> Option<&'a LiveSession> {
    controllers.iter().find(|session| {
        ParsedCallsign::parse(&session.callsign)
            .is_ok_and(|cs| cs.is_for(airport) && cs.family() == Some(family))
    })
}
