//! Fleet Placement
//!
//! The ship-placement screen's model: a fixed grid, a fleet of ships that
//! track their own bounds, and the controller that moves, rotates and locks
//! them one at a time.
//!
//! # Modules
//!
//! - [`ship`]: ship entity, orientation and cell coordinates
//! - [`grid`]: the square board (bounds and drawing only)
//! - [`controller`]: the placement state machine
//! - [`render`]: drawing the board, the fleet and the side panel

pub mod controller;
pub mod grid;
pub mod render;
pub mod ship;

pub use controller::{OrientationChange, PlacementController, PlacementEvent};
pub use grid::Grid;
pub use ship::{Cell, Orientation, Ship};

use serde::{Deserialize, Serialize};

/// Whether placement moves are tested against the rest of the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Moves and rotations that would overlap another ship are rejected
    Checked,
    /// Every move and rotation is accepted
    Unchecked,
}
