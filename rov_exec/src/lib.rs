//! # Rover library.
//!
//! This library allows other crates in the workspace to access items defined inside the rover 
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Mission setup - builds a rover from a mission description
pub mod mission;

/// Navigation module - rover pose, headings, and move validation on the grid
pub mod nav;

/// Rover simulation - runs the rover as a cyclic module driven by single commands
pub mod sim;
