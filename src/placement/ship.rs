//! Ship entity
//!
//! A ship knows its own length, orientation, anchor cell and whether it has
//! been locked in place. The grid stores no occupancy; overlap is decided by
//! comparing ship bounding boxes.

use crate::collision::{aabb_intersect, Collidable};
use sdl2::rect::Rect;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends right from the anchor (length x 1 cells)
    Horizontal,
    /// Extends down from the anchor (1 x length cells)
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A grid cell. Coordinates are signed: ships may be pushed off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The cell `dx`, `dy` cells away
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Cell::new(self.x + dx, self.y + dy)
    }
}

/// One placeable ship of the fleet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: u32,
    cell_size: u32,
    orientation: Orientation,
    anchor: Cell,
    placed: bool,
}

impl Ship {
    /// Creates an unplaced horizontal ship anchored at the origin
    pub fn new(length: u32, cell_size: u32) -> Self {
        Ship {
            length,
            cell_size,
            orientation: Orientation::Horizontal,
            anchor: Cell::default(),
            placed: false,
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left cell of the ship
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Moves the anchor to `cell`. No effect once placed.
    pub fn set_position(&mut self, cell: Cell) -> bool {
        if self.placed || self.anchor == cell {
            return false;
        }
        self.anchor = cell;
        true
    }

    /// Translates the anchor by whole cells.
    ///
    /// There is no clamping against the grid edges. Returns whether the ship
    /// moved; a placed ship never moves.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        self.set_position(self.anchor.offset(dx, dy))
    }

    /// Sets the orientation. Returns whether the shape changed.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        if self.placed || self.orientation == orientation {
            return false;
        }
        self.orientation = orientation;
        true
    }

    pub fn toggle_orientation(&mut self) -> bool {
        self.set_orientation(self.orientation.toggled())
    }

    /// Locks the ship for the rest of the placement screen
    pub fn place(&mut self) {
        self.placed = true;
    }

    /// Width and height in cells for the current orientation
    pub fn size_in_cells(&self) -> (u32, u32) {
        Self::cells_for(self.length, self.orientation)
    }

    fn cells_for(length: u32, orientation: Orientation) -> (u32, u32) {
        match orientation {
            Orientation::Horizontal => (length, 1),
            Orientation::Vertical => (1, length),
        }
    }

    /// On-screen bounding box at the current anchor and orientation
    pub fn bounds(&self) -> Rect {
        self.bounds_at(self.anchor, self.orientation)
    }

    /// Bounding box the ship would have at `anchor` with `orientation`
    pub fn bounds_at(&self, anchor: Cell, orientation: Orientation) -> Rect {
        let (width, height) = Self::cells_for(self.length, orientation);
        let cell = self.cell_size as i32;
        Rect::new(
            anchor.x * cell,
            anchor.y * cell,
            width * self.cell_size,
            height * self.cell_size,
        )
    }

    pub fn bounds_intersect(&self, other: &Ship) -> bool {
        aabb_intersect(&self.bounds(), &other.bounds())
    }

    /// Cells covered by the ship, starting at the anchor
    pub fn occupied_cells(&self) -> Vec<Cell> {
        (0..self.length as i32)
            .map(|i| match self.orientation {
                Orientation::Horizontal => self.anchor.offset(i, 0),
                Orientation::Vertical => self.anchor.offset(0, i),
            })
            .collect()
    }
}

impl Collidable for Ship {
    fn get_bounds(&self) -> Rect {
        self.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: u32 = 50;

    #[test]
    fn test_new_ship_defaults() {
        let ship = Ship::new(3, CELL);

        assert_eq!(ship.length(), 3);
        assert_eq!(ship.orientation(), Orientation::Horizontal);
        assert_eq!(ship.anchor(), Cell::new(0, 0));
        assert!(!ship.is_placed());
        assert_eq!(ship.bounds(), Rect::new(0, 0, 150, 50));
    }

    #[test]
    fn test_move_by_whole_cells() {
        let mut ship = Ship::new(2, CELL);

        assert!(ship.move_by(1, 0));
        assert_eq!(ship.anchor(), Cell::new(1, 0));
        assert_eq!(ship.bounds().x(), 50);

        assert!(ship.move_by(0, 2));
        assert_eq!(ship.bounds(), Rect::new(50, 100, 100, 50));
    }

    #[test]
    fn test_move_off_grid_is_allowed() {
        let mut ship = Ship::new(4, CELL);

        assert!(ship.move_by(-1, 0));
        assert_eq!(ship.anchor(), Cell::new(-1, 0));
        assert_eq!(ship.bounds().x(), -50);
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        let mut ship = Ship::new(4, CELL);
        assert_eq!(ship.size_in_cells(), (4, 1));

        assert!(ship.toggle_orientation());
        assert_eq!(ship.orientation(), Orientation::Vertical);
        assert_eq!(ship.size_in_cells(), (1, 4));
        assert_eq!(ship.bounds(), Rect::new(0, 0, 50, 200));

        // Setting the current orientation again changes nothing
        assert!(!ship.set_orientation(Orientation::Vertical));
        assert_eq!(ship.size_in_cells(), (1, 4));

        assert!(ship.set_orientation(Orientation::Horizontal));
        assert_eq!(ship.size_in_cells(), (4, 1));
    }

    #[test]
    fn test_placed_ship_is_locked() {
        let mut ship = Ship::new(3, CELL);
        ship.move_by(2, 3);
        ship.place();

        let before = ship.clone();
        assert!(!ship.move_by(1, 0));
        assert!(!ship.set_position(Cell::new(5, 5)));
        assert!(!ship.toggle_orientation());
        assert!(!ship.set_orientation(Orientation::Vertical));

        assert_eq!(ship, before);
        assert!(ship.is_placed());
    }

    #[test]
    fn test_bounds_intersect() {
        let mut destroyer = Ship::new(2, CELL);
        let mut cruiser = Ship::new(3, CELL);
        cruiser.set_position(Cell::new(2, 0));

        // Adjacent, not overlapping
        assert!(!destroyer.bounds_intersect(&cruiser));

        destroyer.move_by(1, 0);
        assert!(destroyer.bounds_intersect(&cruiser));
        assert!(cruiser.bounds_intersect(&destroyer));
    }

    #[test]
    fn test_occupied_cells_follow_orientation() {
        let mut ship = Ship::new(3, CELL);
        ship.set_position(Cell::new(4, 2));

        assert_eq!(
            ship.occupied_cells(),
            vec![Cell::new(4, 2), Cell::new(5, 2), Cell::new(6, 2)]
        );

        ship.toggle_orientation();
        assert_eq!(
            ship.occupied_cells(),
            vec![Cell::new(4, 2), Cell::new(4, 3), Cell::new(4, 4)]
        );
    }
}
