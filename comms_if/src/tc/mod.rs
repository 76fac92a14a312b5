//! # Telecommand module
//!
//! This module provides telecommand functionality to the communications 
//! interface. A telecommand is a single character instruction to the rover.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Serialize, Deserialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A telecommand, i.e. an instruction sent to the rover by a driver.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub enum Tc {
    /// Drive one cell forward in the direction of the current heading.
    MoveForward,

    /// Rotate 90 degrees counter-clockwise on the spot.
    TurnLeft,

    /// Rotate 90 degrees clockwise on the spot.
    TurnRight
}

/// How command characters are matched.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub enum CasePolicy {
    /// Only `M`, `L` and `R` are accepted.
    Sensitive,

    /// Lowercase `m`, `l` and `r` are also accepted.
    Insensitive
}

/// Possible parsing errors.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum TcParseError {
    #[error("Invalid command: {0}")]
    UnrecognizedCommand(char)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Tc {

    /// Parse a TC from a single command character.
    pub fn from_char(c: char, policy: CasePolicy) -> Result<Self, TcParseError> {
        let key = match policy {
            CasePolicy::Sensitive => c,
            CasePolicy::Insensitive => c.to_ascii_uppercase()
        };

        match key {
            'M' => Ok(Tc::MoveForward),
            'L' => Ok(Tc::TurnLeft),
            'R' => Ok(Tc::TurnRight),
            _ => Err(TcParseError::UnrecognizedCommand(c))
        }
    }

    /// Get the canonical character for this TC.
    pub fn as_char(&self) -> char {
        match self {
            Tc::MoveForward => 'M',
            Tc::TurnLeft => 'L',
            Tc::TurnRight => 'R'
        }
    }
}

impl Default for CasePolicy {
    fn default() -> Self {
        CasePolicy::Sensitive
    }
}

impl From<bool> for CasePolicy {
    /// Build the policy from an "ignore case" flag.
    fn from(ignore_case: bool) -> Self {
        if ignore_case {
            CasePolicy::Insensitive
        }
        else {
            CasePolicy::Sensitive
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_char_sensitive() {
        assert_eq!(Tc::from_char('M', CasePolicy::Sensitive), Ok(Tc::MoveForward));
        assert_eq!(Tc::from_char('L', CasePolicy::Sensitive), Ok(Tc::TurnLeft));
        assert_eq!(Tc::from_char('R', CasePolicy::Sensitive), Ok(Tc::TurnRight));
        assert_eq!(
            Tc::from_char('m', CasePolicy::Sensitive),
            Err(TcParseError::UnrecognizedCommand('m'))
        );
        assert_eq!(
            Tc::from_char('X', CasePolicy::Sensitive),
            Err(TcParseError::UnrecognizedCommand('X'))
        );
    }

    #[test]
    fn test_from_char_insensitive() {
        assert_eq!(Tc::from_char('m', CasePolicy::Insensitive), Ok(Tc::MoveForward));
        assert_eq!(Tc::from_char('l', CasePolicy::Insensitive), Ok(Tc::TurnLeft));
        assert_eq!(Tc::from_char('r', CasePolicy::Insensitive), Ok(Tc::TurnRight));

        // The original character is kept in the error, not the uppercased one
        assert_eq!(
            Tc::from_char('x', CasePolicy::Insensitive),
            Err(TcParseError::UnrecognizedCommand('x'))
        );
    }

    #[test]
    fn test_as_char() {
        for c in "MLR".chars() {
            assert_eq!(Tc::from_char(c, CasePolicy::default()).unwrap().as_char(), c);
        }
        assert_eq!(format!("{}", TcParseError::UnrecognizedCommand('X')), "Invalid command: X");
    }
}
