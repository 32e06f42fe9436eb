//! Collision detection for fleet placement
//!
//! Ships are tested as AABBs (Axis-Aligned Bounding Boxes) in screen pixels.
//! Detection is read-only: the helpers here report which ship is in the way
//! and leave the decision (reject the move) to the caller.
//!
//! # Architecture
//!
//! - `Collidable` trait: anything with an on-screen bounding box
//! - `aabb_intersect`: pure rectangle intersection test
//! - `find_collision`: first member of a collection a candidate box overlaps

use sdl2::rect::Rect;

/// Trait for entities that participate in collision detection.
///
/// # Example
///
/// ```ignore
/// impl Collidable for Ship {
///     fn get_bounds(&self) -> Rect {
///         self.bounds()
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    ///
    /// The returned `Rect` should match the entity's position and size
    /// as rendered on screen.
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Rectangles that only share an edge do not intersect, so ships may sit
/// in adjacent cells.
///
/// # Example
///
/// ```ignore
/// let destroyer = Rect::new(0, 0, 100, 50);
/// let cruiser = Rect::new(50, 0, 150, 50);
///
/// assert!(aabb_intersect(&destroyer, &cruiser));
/// ```
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Finds the first entity whose bounds intersect `bounds`.
///
/// The entity at `exclude` is skipped; pass the index of the entity being
/// moved so it never collides with its own current position. Entities are
/// tested at their current positions and are never modified.
///
/// # Returns
///
/// The index of the first colliding entity, or `None` if the box is free.
///
/// # Example
///
/// ```ignore
/// let candidate = ships[active].bounds_at(new_anchor, orientation);
/// if let Some(blocker) = find_collision(&candidate, &ships, active) {
///     // reject the move
/// }
/// ```
pub fn find_collision<T: Collidable>(bounds: &Rect, entities: &[T], exclude: usize) -> Option<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != exclude)
        .find(|(_, other)| aabb_intersect(bounds, &other.get_bounds()))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Block(Rect);

    impl Collidable for Block {
        fn get_bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 100, 50);
        let rect_b = Rect::new(50, 0, 150, 50);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        // Adjacent cells share an edge but do not overlap
        let rect_a = Rect::new(0, 0, 100, 50);
        let rect_b = Rect::new(100, 0, 50, 50);
        let rect_c = Rect::new(0, 50, 100, 50);

        assert!(!aabb_intersect(&rect_a, &rect_b));
        assert!(!aabb_intersect(&rect_a, &rect_c));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0, 0, 50, 50);
        let rect_b = Rect::new(200, 200, 50, 150);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_crossing() {
        // A horizontal ship crossing a vertical one
        let horizontal = Rect::new(0, 100, 250, 50);
        let vertical = Rect::new(100, 0, 50, 200);

        assert!(aabb_intersect(&horizontal, &vertical));
        assert!(aabb_intersect(&vertical, &horizontal));
    }

    #[test]
    fn test_find_collision_skips_excluded() {
        let blocks = vec![
            Block(Rect::new(0, 0, 100, 50)),
            Block(Rect::new(0, 100, 150, 50)),
        ];

        // Overlaps only itself
        assert_eq!(find_collision(&Rect::new(50, 0, 100, 50), &blocks, 0), None);
        // Overlaps block 1
        assert_eq!(find_collision(&Rect::new(0, 50, 100, 100), &blocks, 0), Some(1));
    }

    #[test]
    fn test_find_collision_reports_first_hit() {
        let blocks = vec![
            Block(Rect::new(0, 0, 50, 50)),
            Block(Rect::new(50, 0, 50, 50)),
            Block(Rect::new(100, 0, 50, 50)),
        ];

        let wide = Rect::new(25, 0, 100, 50);
        assert_eq!(find_collision(&wide, &blocks, 2), Some(0));
        assert_eq!(find_collision(&wide, &blocks, 0), Some(1));
    }
}
