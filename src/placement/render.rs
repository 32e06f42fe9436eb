//! Placement screen drawing
//!
//! Layout: the grid fills the left half of the window, the right half is a
//! side panel with the active ship's status and the controls.

use super::{Grid, PlacementController, Ship};
use crate::text::TextRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

const SHIP_COLOR: Color = Color::RGB(0, 0, 255);
const ACTIVE_SHIP_COLOR: Color = Color::RGB(60, 140, 255);
const PLACED_SHIP_COLOR: Color = Color::RGB(0, 0, 130);
const ACTIVE_OUTLINE_COLOR: Color = Color::RGB(255, 0, 0);
const TEXT_COLOR: Color = Color::RGB(0, 0, 0);
const HINT_COLOR: Color = Color::RGB(90, 90, 100);
const WARNING_COLOR: Color = Color::RGB(200, 0, 0);
const READY_COLOR: Color = Color::RGB(0, 140, 0);

const PANEL_MARGIN: i32 = 20;
const HEADING_SIZE: u16 = 32;
const LINE_SIZE: u16 = 22;
const LINE_HEIGHT: i32 = 30;

const CONTROLS: [&str; 4] = [
    "ARROWS - MOVE SHIP",
    "R - ROTATE",
    "D / V - HORIZONTAL / VERTICAL",
    "ENTER - LOCK, THEN NEXT SHIP",
];

/// Draws one frame of the placement screen (grid, fleet, side panel)
pub fn render_placement(
    canvas: &mut WindowCanvas,
    text: &mut TextRenderer<'_>,
    grid: &Grid,
    controller: &PlacementController,
) -> Result<(), String> {
    grid.render(canvas)?;

    let active = controller.active_index();
    for (index, ship) in controller.ships().iter().enumerate() {
        render_ship(canvas, ship, index == active)?;
    }

    render_panel(canvas, text, grid, controller)
}

fn render_ship(canvas: &mut WindowCanvas, ship: &Ship, is_active: bool) -> Result<(), String> {
    let color = if ship.is_placed() {
        PLACED_SHIP_COLOR
    } else if is_active {
        ACTIVE_SHIP_COLOR
    } else {
        SHIP_COLOR
    };

    let bounds = ship.bounds();
    canvas.set_draw_color(color);
    canvas.fill_rect(bounds)?;

    if is_active {
        // 2px outline inside the ship's bounds
        canvas.set_draw_color(ACTIVE_OUTLINE_COLOR);
        canvas.draw_rect(bounds)?;
        canvas.draw_rect(Rect::new(
            bounds.x() + 1,
            bounds.y() + 1,
            bounds.width().saturating_sub(2),
            bounds.height().saturating_sub(2),
        ))?;
    }

    Ok(())
}

fn render_panel(
    canvas: &mut WindowCanvas,
    text: &mut TextRenderer<'_>,
    grid: &Grid,
    controller: &PlacementController,
) -> Result<(), String> {
    let x = grid.pixel_size() as i32 + PANEL_MARGIN;
    let mut y = PANEL_MARGIN;

    text.draw_text(canvas, "PLACE YOUR FLEET", x, y, HEADING_SIZE, TEXT_COLOR)?;
    y += LINE_HEIGHT * 2;

    if let Some(ship) = controller.active_ship() {
        let heading = format!(
            "SHIP {} OF {} - LENGTH {}",
            controller.active_index() + 1,
            controller.ships().len(),
            ship.length()
        );
        text.draw_text(canvas, &heading, x, y, LINE_SIZE, TEXT_COLOR)?;
        y += LINE_HEIGHT;

        let status = if ship.is_placed() {
            "LOCKED - ENTER FOR NEXT SHIP"
        } else {
            "MOVING - ENTER TO LOCK"
        };
        text.draw_text(canvas, status, x, y, LINE_SIZE, HINT_COLOR)?;
        y += LINE_HEIGHT;

        if !grid.contains_ship(ship) {
            text.draw_text(canvas, "OFF GRID", x, y, LINE_SIZE, WARNING_COLOR)?;
        }
        y += LINE_HEIGHT;
    }

    if controller.all_placed() {
        text.draw_text(canvas, "FLEET READY", x, y, LINE_SIZE, READY_COLOR)?;
    }
    y += LINE_HEIGHT * 2;

    for line in CONTROLS {
        text.draw_text(canvas, line, x, y, LINE_SIZE, HINT_COLOR)?;
        y += LINE_HEIGHT;
    }

    Ok(())
}
