//! Command dispatch
//!
//! Maps command characters onto rover operations.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::warn;

use comms_if::tc::{CasePolicy, Tc, TcParseError};
use super::{Outcome, Rover};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Apply a single command character to the rover.
///
/// Unrecognised characters leave the rover untouched.
pub fn apply_command(rover: &mut Rover, cmd: char, policy: CasePolicy) -> Outcome {
    match Tc::from_char(cmd, policy) {
        Ok(tc) => rover.exec(tc),
        Err(TcParseError::UnrecognizedCommand(c)) => {
            warn!("Skipping unrecognised command {:?}", c);
            Outcome::UnrecognizedCommand(c)
        }
    }
}

/// Apply every command in the string in order, returning one outcome per
/// character.
pub fn apply_commands(rover: &mut Rover, cmds: &str, policy: CasePolicy) -> Vec<Outcome> {
    cmds.chars()
        .map(|c| apply_command(rover, c, policy))
        .collect()
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::nav::{Heading, Position};

    #[test]
    fn test_drive_and_turn() {
        let mut rover = Rover::new(0, 0, Heading::North, 5, 5);

        let outcomes = apply_commands(&mut rover, "MMRMM", CasePolicy::Sensitive);

        assert_eq!(outcomes, vec![
            Outcome::Moved(Position::new(0, 1)),
            Outcome::Moved(Position::new(0, 2)),
            Outcome::Turned(Heading::East),
            Outcome::Moved(Position::new(1, 2)),
            Outcome::Moved(Position::new(2, 2)),
        ]);
        assert_eq!(rover.status(), (Position::new(2, 2), Heading::East));
    }

    #[test]
    fn test_top_edge() {
        let mut rover = Rover::new(0, 4, Heading::North, 5, 5);

        let outcomes = apply_commands(&mut rover, "M", CasePolicy::Sensitive);

        assert_eq!(outcomes, vec![Outcome::OutOfBounds(Position::new(0, 5))]);
        assert_eq!(rover.status(), (Position::new(0, 4), Heading::North));
    }

    #[test]
    fn test_blocked() {
        let mut rover = Rover::new(2, 2, Heading::North, 5, 5);
        rover.add_obstacle(2, 3);

        let outcomes = apply_commands(&mut rover, "M", CasePolicy::Sensitive);

        assert_eq!(outcomes, vec![Outcome::BlockedByObstacle(Position::new(2, 3))]);
        assert_eq!(rover.position(), Position::new(2, 2));
    }

    #[test]
    fn test_spin_left() {
        let mut rover = Rover::new(1, 1, Heading::East, 3, 3);

        let outcomes = apply_commands(&mut rover, "LLLL", CasePolicy::Sensitive);

        assert_eq!(outcomes, vec![
            Outcome::Turned(Heading::North),
            Outcome::Turned(Heading::West),
            Outcome::Turned(Heading::South),
            Outcome::Turned(Heading::East),
        ]);
        assert_eq!(rover.status(), (Position::new(1, 1), Heading::East));
    }

    #[test]
    fn test_unrecognised_command() {
        let mut rover = Rover::new(1, 1, Heading::North, 5, 5);

        let outcomes = apply_commands(&mut rover, "MXR", CasePolicy::Sensitive);

        assert_eq!(outcomes, vec![
            Outcome::Moved(Position::new(1, 2)),
            Outcome::UnrecognizedCommand('X'),
            Outcome::Turned(Heading::East),
        ]);
        assert_eq!(rover.status(), (Position::new(1, 2), Heading::East));
    }

    #[test]
    fn test_case_policy() {
        let mut rover = Rover::new(1, 1, Heading::North, 5, 5);

        // Lowercase is rejected by default and changes nothing
        let outcomes = apply_commands(&mut rover, "mlr", CasePolicy::Sensitive);
        assert!(outcomes.iter().all(|o| o.is_rejected()));
        assert_eq!(rover.status(), (Position::new(1, 1), Heading::North));

        let outcomes = apply_commands(&mut rover, "mr", CasePolicy::Insensitive);
        assert_eq!(outcomes, vec![
            Outcome::Moved(Position::new(1, 2)),
            Outcome::Turned(Heading::East),
        ]);
    }

    #[test]
    fn test_sequential_outcomes() {
        // The first move is blocked, the turn then opens a clear path
        let mut rover = Rover::new(0, 0, Heading::North, 2, 2);
        rover.add_obstacle(0, 1);

        let outcomes = apply_commands(&mut rover, "MRMM", CasePolicy::Sensitive);

        assert_eq!(outcomes, vec![
            Outcome::BlockedByObstacle(Position::new(0, 1)),
            Outcome::Turned(Heading::East),
            Outcome::Moved(Position::new(1, 0)),
            Outcome::OutOfBounds(Position::new(2, 0)),
        ]);
        assert!(apply_commands(&mut rover, "", CasePolicy::Sensitive).is_empty());
    }
}
