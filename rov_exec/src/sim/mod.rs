//! Rover simulation module
//!
//! Wraps a [`crate::nav::Rover`] as a cyclic module, executing one command
//! per cycle.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use state::*;

use comms_if::mission::MissionError;
use util::params::LoadError;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during RoverSim operation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Could not load the mission parameters: {0}")]
    ParamLoadError(LoadError),

    #[error("Mission is invalid: {0}")]
    InvalidMission(MissionError),

    #[error("RoverSim has not been initialised with a mission")]
    NotInitialised,
}
