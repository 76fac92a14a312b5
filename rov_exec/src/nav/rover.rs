//! Rover state and move validation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

// Internal
use comms_if::tc::Tc;
use super::{Heading, Position};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A rover on a bounded grid containing static obstacles.
///
/// Once a move has been accepted the rover is always inside
/// `[0, grid_width) x [0, grid_height)` and never on an obstacle. Moves which
/// would break this are rejected before any state is changed.
#[derive(Debug, Clone)]
pub struct Rover {
    position: Position,
    heading: Heading,

    grid_width: i32,
    grid_height: i32,

    obstacles: HashSet<Position>
}

/// Snapshot of the rover's pose, used for status reporting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Status {
    pub position: Position,
    pub heading: Heading
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The result of executing a single command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum Outcome {
    /// The rover moved onto the given cell.
    Moved(Position),

    /// The target cell holds an obstacle, the rover did not move.
    BlockedByObstacle(Position),

    /// The target cell is outside the grid, the rover did not move.
    OutOfBounds(Position),

    /// The rover turned and now faces the given heading.
    Turned(Heading),

    /// The command character was not recognised, nothing changed.
    UnrecognizedCommand(char)
}

/// Reasons the rover's starting state is not a valid one.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InitialStateError {
    #[error("Rover starts outside the grid at {0}")]
    OutOfBounds(Position),

    #[error("Rover starts on an obstacle at {0}")]
    OnObstacle(Position)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Rover {

    /// Create a new rover.
    ///
    /// The starting pose is not checked against the grid or obstacles, use
    /// [`Rover::validate_initial_state`] once obstacles have been added.
    pub fn new(
        start_x: i32, 
        start_y: i32, 
        start_heading: Heading, 
        grid_width: i32, 
        grid_height: i32
    ) -> Self {
        Self {
            position: Position::new(start_x, start_y),
            heading: start_heading,
            grid_width,
            grid_height,
            obstacles: HashSet::new()
        }
    }

    /// Add an obstacle at the given cell.
    ///
    /// Returns `false` if the cell was already an obstacle.
    pub fn add_obstacle(&mut self, x: i32, y: i32) -> bool {
        let pos = Position::new(x, y);

        if pos == self.position {
            warn!("Obstacle added at the rover's current position {}", pos);
        }

        self.obstacles.insert(pos)
    }

    pub fn is_obstacle(&self, pos: &Position) -> bool {
        self.obstacles.contains(pos)
    }

    /// Determine if the position is inside the grid.
    pub fn in_bounds(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width
        &&
        pos.y >= 0 && pos.y < self.grid_height
    }

    /// Determine if the rover may occupy the given position.
    pub fn is_valid_position(&self, pos: &Position) -> bool {
        self.in_bounds(pos) && !self.is_obstacle(pos)
    }

    /// Check the starting pose against the grid and obstacles.
    pub fn validate_initial_state(&self) -> Result<(), InitialStateError> {
        if !self.in_bounds(&self.position) {
            return Err(InitialStateError::OutOfBounds(self.position))
        }

        if self.is_obstacle(&self.position) {
            return Err(InitialStateError::OnObstacle(self.position))
        }

        Ok(())
    }

    /// Drive one cell forward.
    pub fn move_forward(&mut self) -> Outcome {
        let candidate = self.heading.next_position(self.position);

        trace!(
            "Candidate {} (in bounds: {}, obstacle: {})",
            candidate,
            self.in_bounds(&candidate),
            self.is_obstacle(&candidate)
        );

        // Bounds take precedence over obstacles, so an obstacle registered
        // outside the grid is reported as out of bounds.
        if !self.in_bounds(&candidate) {
            Outcome::OutOfBounds(candidate)
        }
        else if self.is_obstacle(&candidate) {
            Outcome::BlockedByObstacle(candidate)
        }
        else {
            self.position = candidate;
            Outcome::Moved(candidate)
        }
    }

    pub fn turn_left(&mut self) -> Outcome {
        self.heading = self.heading.turn_left();
        Outcome::Turned(self.heading)
    }

    pub fn turn_right(&mut self) -> Outcome {
        self.heading = self.heading.turn_right();
        Outcome::Turned(self.heading)
    }

    /// Execute a parsed telecommand.
    pub fn exec(&mut self, tc: Tc) -> Outcome {
        let outcome = match tc {
            Tc::MoveForward => self.move_forward(),
            Tc::TurnLeft => self.turn_left(),
            Tc::TurnRight => self.turn_right()
        };

        debug!("{:?} -> {:?}", tc, outcome);

        outcome
    }

    /// Current position and heading.
    pub fn status(&self) -> (Position, Heading) {
        (self.position, self.heading)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Grid dimensions as `(width, height)`.
    pub fn grid_size(&self) -> (i32, i32) {
        (self.grid_width, self.grid_height)
    }

    pub fn num_obstacles(&self) -> usize {
        self.obstacles.len()
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Status::from(self))
    }
}

impl From<&Rover> for Status {
    fn from(rover: &Rover) -> Self {
        Self {
            position: rover.position,
            heading: rover.heading
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rover is at {} facing {}", self.position, self.heading)
    }
}

impl Outcome {

    /// True if the command was refused and the rover's state is unchanged.
    pub fn is_rejected(&self) -> bool {
        match self {
            Outcome::Moved(_) | Outcome::Turned(_) => false,
            Outcome::BlockedByObstacle(_) 
            | Outcome::OutOfBounds(_) 
            | Outcome::UnrecognizedCommand(_) => true
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Moved(p) => write!(f, "Moved to {}", p),
            Outcome::BlockedByObstacle(p) => 
                write!(f, "Obstacle detected at {}. Cannot move.", p),
            Outcome::OutOfBounds(p) => write!(f, "Cannot move out of bounds to {}.", p),
            Outcome::Turned(h) => write!(f, "Turned to {}", h),
            Outcome::UnrecognizedCommand(c) => write!(f, "Invalid command: {}", c)
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
