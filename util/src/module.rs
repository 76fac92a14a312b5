//! Cyclic module interface
//!
//! The rover executable is driven in cycles: a module is set up once from
//! its parameter file, then fed at most one input per cycle. `RoverSim` in
//! `rov_exec` is driven this way, one command character per cycle.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use crate::session::Session;

// ---------------------------------------------------------------------------
// MODULE STATE
// ---------------------------------------------------------------------------

/// A module run once per cycle by an executable.
pub trait State {
    /// What `init` needs, usually a parameter file path relative to the
    /// params directory (a mission file for `RoverSim`).
    type InitData;
    type InitError;

    /// The input for one cycle. For `RoverSim` this is an optional command
    /// character, `None` meaning nothing to do this cycle.
    type InputData;
    /// What a cycle produced, e.g. the outcome of the command.
    type OutputData;
    /// Running state of the module after the cycle, e.g. the rover's pose
    /// and command counters.
    type StatusReport;
    /// Raised if `proc` can't run at all, for example before `init`.
    /// Rejected commands are ordinary output, not errors.
    type ProcError;

    /// Set the module up for the given session. Must be called before `proc`.
    fn init(&mut self, init_data: Self::InitData, session: &Session)
        -> Result<(), Self::InitError>;

    /// Run one cycle.
    ///
    /// A cycle must run to completion and leave the module in a valid
    /// state, whatever the input.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>;
}
