//! # Mission definitions
//!
//! A mission describes everything a driver supplies to the rover before any
//! commands are executed: the grid, the starting pose, the obstacles, and the
//! command string itself.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::tc::CasePolicy;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters describing a single rover mission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissionParams {

    // ---- GRID ----

    /// Number of cells along the X axis. Valid X coordinates are `0..grid_width`.
    pub grid_width: i32,

    /// Number of cells along the Y axis. Valid Y coordinates are `0..grid_height`.
    pub grid_height: i32,

    // ---- STARTING POSE ----

    pub start_x: i32,

    pub start_y: i32,

    /// Heading token, one of NORTH, EAST, SOUTH or WEST in any case.
    pub start_heading: String,

    // ---- OBSTACLES ----

    /// Obstacle cells as `[x, y]` pairs.
    #[serde(default)]
    pub obstacles: Vec<[i32; 2]>,

    // ---- COMMANDS ----

    /// Command string, one command per character.
    #[serde(default)]
    pub commands: String,

    /// Accept lowercase command characters as well as uppercase ones.
    #[serde(default)]
    pub case_insensitive_cmds: bool
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("Mission contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Grid dimensions must be positive, found {0} x {1}")]
    InvalidGridSize(i32, i32)
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl MissionParams {

    /// Parse a mission from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, MissionError> {
        let params: Self = serde_json::from_str(json_str)
            .map_err(MissionError::InvalidJson)?;

        params.check()?;

        Ok(params)
    }

    /// Check the grid dimensions are usable.
    pub fn check(&self) -> Result<(), MissionError> {
        check_grid_size(self.grid_width, self.grid_height)
    }

    /// The command case policy requested by this mission.
    pub fn case_policy(&self) -> CasePolicy {
        CasePolicy::from(self.case_insensitive_cmds)
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Both grid dimensions must be positive.
pub fn check_grid_size(grid_width: i32, grid_height: i32) -> Result<(), MissionError> {
    if grid_width <= 0 || grid_height <= 0 {
        return Err(MissionError::InvalidGridSize(grid_width, grid_height))
    }

    Ok(())
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
