//! # Mission setup
//!
//! Turns a [`MissionParams`] record into a ready-to-drive [`Rover`].

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{info, warn};

use comms_if::{mission::{MissionError, MissionParams}, tc::CasePolicy};
use crate::nav::{Heading, HeadingParseError, Position, Rover};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A heading token resolved to a heading, recording whether the default had
/// to be substituted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HeadingResolution {
    pub heading: Heading,

    /// Set if the token was invalid and `DEFAULT_HEADING` was used instead.
    pub warning: Option<HeadingParseError>
}

/// A rover built from a mission along with everything the driver should
/// report about its setup.
#[derive(Debug, Clone)]
pub struct MissionSetup {
    pub rover: Rover,

    pub heading_warning: Option<HeadingParseError>,

    /// Obstacles in the order they were registered, one per mission entry.
    pub obstacle_acks: Vec<Position>,

    pub case_policy: CasePolicy
}

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Heading used when the start heading token is not recognised.
pub const DEFAULT_HEADING: Heading = Heading::North;

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl HeadingResolution {

    /// Message to show the user if a substitution happened.
    pub fn notice(&self) -> Option<String> {
        self.warning.as_ref().map(substitution_notice)
    }
}

impl MissionSetup {

    pub fn heading_notice(&self) -> Option<String> {
        self.heading_warning.as_ref().map(substitution_notice)
    }
}

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Resolve a heading token, falling back to `DEFAULT_HEADING` if it isn't valid.
pub fn resolve_heading(token: &str) -> HeadingResolution {
    match Heading::from_token(token) {
        Ok(heading) => HeadingResolution { heading, warning: None },
        Err(e) => {
            warn!("{}", substitution_notice(&e));
            HeadingResolution {
                heading: DEFAULT_HEADING,
                warning: Some(e)
            }
        }
    }
}

/// Build the rover described by the mission and register its obstacles.
pub fn build_rover(params: &MissionParams) -> Result<MissionSetup, MissionError> {
    params.check()?;

    let resolution = resolve_heading(&params.start_heading);

    let mut rover = Rover::new(
        params.start_x, 
        params.start_y, 
        resolution.heading, 
        params.grid_width, 
        params.grid_height
    );

    let mut obstacle_acks = Vec::with_capacity(params.obstacles.len());

    for xy in params.obstacles.iter() {
        let pos = Position::from(*xy);
        rover.add_obstacle(pos.x, pos.y);
        info!("Obstacle added at {}", pos);
        obstacle_acks.push(pos);
    }

    Ok(MissionSetup {
        rover,
        heading_warning: resolution.warning,
        obstacle_acks,
        case_policy: params.case_policy()
    })
}

// ------------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn substitution_notice(e: &HeadingParseError) -> String {
    format!("{}. Setting to {} by default.", e, DEFAULT_HEADING)
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn mission(heading: &str) -> MissionParams {
        MissionParams {
            grid_width: 5,
            grid_height: 5,
            start_x: 2,
            start_y: 2,
            start_heading: heading.to_string(),
            obstacles: vec![[2, 3], [2, 3], [0, 0]],
            commands: "M".to_string(),
            case_insensitive_cmds: false
        }
    }

    #[test]
    fn test_resolve_heading() {
        let r = resolve_heading("north");
        assert_eq!(r.heading, Heading::North);
        assert_eq!(r.warning, None);
        assert_eq!(r.notice(), None);

        let r = resolve_heading("west");
        assert_eq!(r.heading, Heading::West);
        assert_eq!(r.warning, None);

        let r = resolve_heading("UP");
        assert_eq!(r.heading, Heading::North);
        assert_eq!(
            r.warning, 
            Some(HeadingParseError::InvalidDirectionToken("UP".to_string()))
        );
        assert_eq!(
            r.notice().unwrap(), 
            "Invalid direction: UP. Setting to NORTH by default."
        );
    }

    #[test]
    fn test_build_rover() {
        let setup = build_rover(&mission("East")).unwrap();

        assert_eq!(setup.rover.status(), (Position::new(2, 2), Heading::East));
        assert_eq!(setup.rover.grid_size(), (5, 5));
        assert_eq!(setup.heading_warning, None);
        assert_eq!(setup.case_policy, CasePolicy::Sensitive);

        // Every entry is acknowledged, duplicates are stored once
        assert_eq!(setup.obstacle_acks.len(), 3);
        assert_eq!(setup.rover.num_obstacles(), 2);
        assert!(setup.rover.is_obstacle(&Position::new(2, 3)));
    }

    #[test]
    fn test_build_rover_bad_heading() {
        let setup = build_rover(&mission("sideways")).unwrap();

        assert_eq!(setup.rover.heading(), Heading::North);
        assert!(setup.heading_notice().is_some());
    }

    #[test]
    fn test_build_rover_bad_grid() {
        let mut params = mission("NORTH");
        params.grid_height = -1;

        assert!(matches!(
            build_rover(&params),
            Err(MissionError::InvalidGridSize(5, -1))
        ));
    }
}
