//! Compass heading of the rover and the turn algebra over it.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::Position;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of headings in the cycle.
pub const NUM_HEADINGS: usize = 4;

/// Headings in clockwise order. A right turn advances one step through this
/// cycle, a left turn three.
const CYCLE: [Heading; NUM_HEADINGS] = [
    Heading::North,
    Heading::East,
    Heading::South,
    Heading::West
];

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// One of the four cardinal directions the rover can face.
///
/// North is +Y and East is +X.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum HeadingParseError {
    #[error("Invalid direction: {0}")]
    InvalidDirectionToken(String)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Heading {

    /// Parse a heading token, ignoring case and surrounding whitespace.
    pub fn from_token(token: &str) -> Result<Self, HeadingParseError> {
        match token.trim().to_ascii_uppercase().as_str() {
            "NORTH" => Ok(Heading::North),
            "EAST" => Ok(Heading::East),
            "SOUTH" => Ok(Heading::South),
            "WEST" => Ok(Heading::West),
            _ => Err(HeadingParseError::InvalidDirectionToken(token.to_string()))
        }
    }

    /// Position one cell ahead of `current` in this direction.
    pub fn next_position(&self, current: Position) -> Position {
        match self {
            Heading::North => current.offset(0, 1),
            Heading::East => current.offset(1, 0),
            Heading::South => current.offset(0, -1),
            Heading::West => current.offset(-1, 0)
        }
    }

    /// The heading 90 degrees counter-clockwise of this one.
    pub fn turn_left(&self) -> Self {
        self.step(NUM_HEADINGS - 1)
    }

    /// The heading 90 degrees clockwise of this one.
    pub fn turn_right(&self) -> Self {
        self.step(1)
    }

    fn step(&self, steps: usize) -> Self {
        CYCLE[(self.index() + steps) % NUM_HEADINGS]
    }

    fn index(&self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3
        }
    }
}

impl FromStr for Heading {
    type Err = HeadingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST"
        };

        write!(f, "{}", name)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_turns_are_inverse() {
        for h in CYCLE.iter() {
            assert_eq!(h.turn_left().turn_right(), *h);
            assert_eq!(h.turn_right().turn_left(), *h);
            assert_ne!(h.turn_left(), *h);
            assert_ne!(h.turn_right(), *h);
        }
    }

    #[test]
    fn test_four_turns_return_home() {
        for h in CYCLE.iter() {
            assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), *h);
            assert_eq!(h.turn_left().turn_left().turn_left().turn_left(), *h);
        }
    }

    #[test]
    fn test_turn_order() {
        assert_eq!(Heading::North.turn_right(), Heading::East);
        assert_eq!(Heading::East.turn_right(), Heading::South);
        assert_eq!(Heading::South.turn_right(), Heading::West);
        assert_eq!(Heading::West.turn_right(), Heading::North);

        assert_eq!(Heading::East.turn_left(), Heading::North);
        assert_eq!(Heading::North.turn_left(), Heading::West);
        assert_eq!(Heading::West.turn_left(), Heading::South);
        assert_eq!(Heading::South.turn_left(), Heading::East);
    }

    #[test]
    fn test_next_position() {
        let p = Position::new(2, 2);

        assert_eq!(Heading::North.next_position(p), Position::new(2, 3));
        assert_eq!(Heading::East.next_position(p), Position::new(3, 2));
        assert_eq!(Heading::South.next_position(p), Position::new(2, 1));
        assert_eq!(Heading::West.next_position(p), Position::new(1, 2));

        // Input is untouched
        assert_eq!(p, Position::new(2, 2));
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Heading::from_token("NORTH"), Ok(Heading::North));
        assert_eq!(Heading::from_token("north"), Ok(Heading::North));
        assert_eq!(Heading::from_token(" West "), Ok(Heading::West));
        assert_eq!("sOuTh".parse::<Heading>(), Ok(Heading::South));
        assert_eq!(
            Heading::from_token("UP"),
            Err(HeadingParseError::InvalidDirectionToken("UP".into()))
        );
        assert_eq!(
            Heading::from_token(""),
            Err(HeadingParseError::InvalidDirectionToken("".into()))
        );
    }

    #[test]
    fn test_display() {
        for h in CYCLE.iter() {
            assert_eq!(Heading::from_token(&h.to_string()), Ok(*h));
        }
        assert_eq!(serde_json::to_string(&Heading::East).unwrap(), "\"EAST\"");
    }
}
