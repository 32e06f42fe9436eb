use super::ship::{Cell, Ship};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

/// The square placement grid.
///
/// Only a drawing and bounds reference: ships track their own position, the
/// grid never records which cells are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub size: u32,
    pub cell_size: u32,
}

impl Grid {
    pub fn new(size: u32, cell_size: u32) -> Self {
        Self { size, cell_size }
    }

    /// Side length in pixels
    pub fn pixel_size(&self) -> u32 {
        self.size * self.cell_size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let size = self.size as i32;
        cell.x >= 0 && cell.y >= 0 && cell.x < size && cell.y < size
    }

    /// Whether every cell of `ship` lies on the grid
    pub fn contains_ship(&self, ship: &Ship) -> bool {
        ship.occupied_cells().into_iter().all(|cell| self.contains(cell))
    }

    /// Draws every cell as a 1px black outline, starting at the window origin
    pub fn render(&self, canvas: &mut WindowCanvas) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        for y in 0..self.size {
            for x in 0..self.size {
                canvas.draw_rect(Rect::new(
                    (x * self.cell_size) as i32,
                    (y * self.cell_size) as i32,
                    self.cell_size,
                    self.cell_size,
                ))?;
            }
        }
        Ok(())
    }
}
