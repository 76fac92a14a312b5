//! # Communications interface crate.
//!
//! Provides the common interfaces between the rover core and the drivers which feed it.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

pub mod tc;

/// Mission setup definitions (grid, starting pose, obstacles and commands)
pub mod mission;
