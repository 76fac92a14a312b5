//! Navigation module
//!
//! Holds the rover's pose on the grid and the rules for moving it about.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod dispatch;
mod heading;
mod position;
mod rover;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use dispatch::*;
pub use heading::*;
pub use position::*;
pub use rover::*;
