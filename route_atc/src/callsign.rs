//! Tokenizer for free-form station callsigns such as `EDDF_N_GND` or `EGTT_CTR`.
//!
//! A callsign is uppercased and split on `_`. The first token must look like an ICAO location
//! or airspace code, the last token is the role, anything in between is a sector qualifier.

use crate::role::RoleFamily;
use thiserror::Error;

pub const SEPARATOR: char = '_';

/// Longest sector qualifier accepted by the short-sector patterns (`EHAM_W_ATIS`, `EDGG_DKB_CTR`).
pub const MAX_SECTOR_LEN: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallsignParseError {
    #[error("callsign must have at least 2 parts delimited by an underscore, but found {0}")]
    TooFewParts(usize),
    #[error("callsign prefix {0:?} is not a 4-letter code")]
    InvalidPrefix(String),
    #[error("callsign has an empty role token")]
    EmptyRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCallsign {
    prefix: String,
    qualifiers: Vec<String>,
    role: String,
}

impl ParsedCallsign {
    pub fn parse(raw: &str) -> Result<Self, CallsignParseError> {
        let normalized = raw.to_ascii_uppercase();
        let mut parts: Vec<&str> = normalized.split(SEPARATOR).collect();
        if parts.len() < 2 {
            return Err(CallsignParseError::TooFewParts(parts.len()));
        }

        // At least two parts, so both the role and the prefix are present.
        let role = parts.pop().unwrap_or_default();
        let prefix = parts.remove(0);
        if !is_airspace_code(prefix) {
            return Err(CallsignParseError::InvalidPrefix(prefix.to_string()));
        }
        if role.is_empty() {
            return Err(CallsignParseError::EmptyRole);
        }

        Ok(Self {
            prefix: prefix.to_string(),
            qualifiers: parts.into_iter().map(str::to_string).collect(),
            role: role.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn role_token(&self) -> &str {
        &self.role
    }

    pub fn family(&self) -> Option<RoleFamily> {
        RoleFamily::classify(&self.role)
    }

    /// True for `PREFIX_ROLE` and `PREFIX_SECTOR_ROLE` where the sector is 1-4 alphanumerics.
    pub fn has_short_sector(&self) -> bool {
        match self.qualifiers.as_slice() {
            [] => true,
            [sector] => {
                (1..=MAX_SECTOR_LEN).contains(&sector.len())
                    && sector.bytes().all(|b| b.is_ascii_alphanumeric())
            }
            _ => false,
        }
    }

    pub fn is_for(&self, code: &str) -> bool {
        self.prefix.eq_ignore_ascii_case(code)
    }
}

/// Four ASCII uppercase letters, e.g. `EDGG` or `KJFK`.
pub fn is_airspace_code(code: &str) -> bool {
    code.len() == 4 && code.bytes().all(|b| b.is_ascii_uppercase())
}
