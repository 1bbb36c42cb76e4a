//! Classifies which VATSIM stations cover a pilot's planned route.
//!
//! The pipeline takes two snapshots, a SimBrief flight plan and the live network roster, and
//! produces one [`RouteClassification`]: the ATIS, ground, tower and approach slots for the
//! departure and arrival airports plus the online status of every en-route airspace.

pub mod airspace;
pub mod callsign;
pub mod centers;
pub mod error;
pub mod flight_plan;
pub mod identity;
pub mod pipeline;
pub mod role;
pub mod session;
pub mod stations;

pub use error::{FetchFailure, RouteAtcError};
pub use flight_plan::FlightPlan;
pub use identity::UserContext;
pub use pipeline::{FlightPlanSource, RosterSource, RouteClassification, classify, classify_for_user};
pub use session::{LiveSession, Roster, SessionKind};
