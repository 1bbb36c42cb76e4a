use serde::Serialize;
use std::fmt::Display;

/// Functional family of a callsign's role token. Families are disjoint: a token belongs to at
/// most one of them.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RoleFamily {
    Atis,
    Ground,
    Tower,
    Approach,
    Center,
}

impl RoleFamily {
    pub const ALL: [Self; 5] = [
        Self::Atis,
        Self::Ground,
        Self::Tower,
        Self::Approach,
        Self::Center,
    ];

    pub const fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::Atis => &["ATIS", "AFIS", "INFO"],
            Self::Ground => &["GND", "GMC", "DEL", "CLD", "RMP", "APR", "APN"],
            Self::Tower => &["TWR"],
            Self::Approach => &["APP", "DEP", "DIR", "RAD", "TMA"],
            Self::Center => &["CTR", "FSS"],
        }
    }

    /// Exact, case-insensitive token lookup.
    pub fn classify(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| {
            family
                .tokens()
                .iter()
                .any(|t| t.eq_ignore_ascii_case(token))
        })
    }
}

/// En-route service level of a center-family station.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    #[serde(rename = "CTR")]
    Ctr,
    #[serde(rename = "FSS")]
    Fss,
}

impl ServiceType {
    /// Service level of a center-family token; `None` for every other family.
    pub fn from_token(token: &str) -> Option<Self> {
        if RoleFamily::classify(token) != Some(RoleFamily::Center) {
            return None;
        }
        [Self::Ctr, Self::Fss]
            .into_iter()
            .find(|service| service.token().eq_ignore_ascii_case(token))
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Ctr => "CTR",
            Self::Fss => "FSS",
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
