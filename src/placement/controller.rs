//! Fleet placement state machine
//!
//! One active ship at a time. Arrow keys move it a cell at a time, R/D/V
//! change its orientation, and Enter works in two steps: the first press
//! locks the active ship, the next press moves the cursor to the next ship.

use super::ship::{Cell, Orientation, Ship};
use super::CollisionPolicy;
use crate::collision::find_collision;
use crate::config::GameConfig;
use crate::input_system::Action;

/// What a single input did to the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent {
    /// Active ship moved to a new anchor
    Moved { ship: usize, anchor: Cell },
    /// Active ship changed orientation
    Reoriented { ship: usize, orientation: Orientation },
    /// Move or rotation rejected because it would overlap ship `by`
    Blocked { ship: usize, by: usize },
    /// Active ship locked in place
    Placed { ship: usize },
    /// Cursor moved on to the next ship
    Advanced { from: usize, to: usize },
    /// Input had no effect (locked ship, same orientation, quit, ...)
    Ignored,
}

/// Requested orientation change for the active ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationChange {
    Toggle,
    Set(Orientation),
}

/// Owns the fleet and the selection cursor
pub struct PlacementController {
    ships: Vec<Ship>,
    active: usize,
    policy: CollisionPolicy,
}

impl PlacementController {
    /// Builds the configured fleet in its starting layout
    ///
    /// Ship `i` starts horizontal at column 0, row `2 * i`, so every ship has
    /// defined bounds and no two ships overlap before the first move.
    pub fn new(config: &GameConfig) -> Self {
        let ships = config
            .fleet
            .iter()
            .enumerate()
            .map(|(index, &length)| {
                let mut ship = Ship::new(length, config.cell_size);
                ship.set_position(Cell::new(0, 2 * index as i32));
                ship
            })
            .collect();

        Self::from_ships(ships, config.collision_policy)
    }

    /// Wraps an existing fleet; the cursor starts on the first ship
    pub fn from_ships(ships: Vec<Ship>, policy: CollisionPolicy) -> Self {
        PlacementController {
            ships,
            active: 0,
            policy,
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_ship(&self) -> Option<&Ship> {
        self.ships.get(self.active)
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Whether every ship has been locked. Informational only.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Applies one input action
    pub fn handle(&mut self, action: Action) -> PlacementEvent {
        match action {
            Action::Up => self.move_active(0, -1),
            Action::Down => self.move_active(0, 1),
            Action::Left => self.move_active(-1, 0),
            Action::Right => self.move_active(1, 0),
            Action::Confirm => self.confirm(),
            Action::Rotate => self.reorient_active(OrientationChange::Toggle),
            Action::SetHorizontal => {
                self.reorient_active(OrientationChange::Set(Orientation::Horizontal))
            }
            Action::SetVertical => {
                self.reorient_active(OrientationChange::Set(Orientation::Vertical))
            }
            Action::Quit => PlacementEvent::Ignored,
        }
    }

    /// Moves the active ship by whole cells unless it is locked or would
    /// overlap another ship (checked policy only)
    pub fn move_active(&mut self, dx: i32, dy: i32) -> PlacementEvent {
        let index = self.active;
        let Some(ship) = self.ships.get(index) else {
            return PlacementEvent::Ignored;
        };
        if ship.is_placed() {
            return PlacementEvent::Ignored;
        }

        let anchor = ship.anchor().offset(dx, dy);
        if let Some(by) = self.blocker(anchor, ship.orientation()) {
            return PlacementEvent::Blocked { ship: index, by };
        }

        self.ships[index].set_position(anchor);
        PlacementEvent::Moved { ship: index, anchor }
    }

    /// Changes the active ship's orientation, subject to the same locking
    /// and collision rules as a move. Under `CollisionPolicy::Unchecked` an
    /// unplaced ship always turns.
    pub fn reorient_active(&mut self, change: OrientationChange) -> PlacementEvent {
        let index = self.active;
        let Some(ship) = self.ships.get(index) else {
            return PlacementEvent::Ignored;
        };

        let orientation = match change {
            OrientationChange::Toggle => ship.orientation().toggled(),
            OrientationChange::Set(orientation) => orientation,
        };
        if ship.is_placed() || ship.orientation() == orientation {
            return PlacementEvent::Ignored;
        }

        if let Some(by) = self.blocker(ship.anchor(), orientation) {
            return PlacementEvent::Blocked { ship: index, by };
        }

        self.ships[index].set_orientation(orientation);
        PlacementEvent::Reoriented { ship: index, orientation }
    }

    /// Locks the active ship, or advances to the next one if already locked
    pub fn confirm(&mut self) -> PlacementEvent {
        let index = self.active;
        let Some(ship) = self.ships.get_mut(index) else {
            return PlacementEvent::Ignored;
        };

        if ship.is_placed() {
            self.active = (index + 1) % self.ships.len();
            PlacementEvent::Advanced {
                from: index,
                to: self.active,
            }
        } else {
            ship.place();
            PlacementEvent::Placed { ship: index }
        }
    }

    /// Index of a ship the active ship would overlap at `anchor` with
    /// `orientation`; other ships are tested where they currently are
    fn blocker(&self, anchor: Cell, orientation: Orientation) -> Option<usize> {
        match self.policy {
            CollisionPolicy::Unchecked => None,
            CollisionPolicy::Checked => {
                let candidate = self.ships[self.active].bounds_at(anchor, orientation);
                find_collision(&candidate, &self.ships, self.active)
            }
        }
    }
}
