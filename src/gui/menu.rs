//! Base Menu Component
//!
//! A framed, vertically stacked list of options with a wrapping selection
//! cursor. Knows nothing about what its entries mean; see [`super::MainMenu`]
//! for the typed start menu built on top of it.

use crate::text::TextRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Frame outline color
    pub border_color: Color,

    /// Frame outline thickness in pixels
    pub border_thickness: u32,

    /// Title text color
    pub title_color: Color,

    /// Title point size
    pub title_size: u16,

    /// Distance from the top of the screen to the title
    pub title_y: i32,

    /// Normal item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,

    /// Item point size
    pub item_size: u16,

    /// Left padding of item text inside the frame
    pub item_padding: i32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 600,
            height: 400,
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 2,
            title_color: Color::RGB(0, 0, 0),
            title_size: 50,
            title_y: 50,
            item_color: Color::RGB(0, 0, 0),
            selected_item_color: Color::RGB(255, 0, 0),
            item_size: 40,
            item_padding: 10,
        }
    }
}

/// A menu item
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
}

impl MenuItem {
    pub fn new(text: String) -> Self {
        MenuItem { text }
    }
}

/// A stateful menu component
///
/// The menu handles:
/// - Navigation (up/down selection, wrapping at both ends)
/// - Rendering (title, frame, numbered items, highlighting)
///
/// # Example
///
/// ```ignore
/// let mut menu = Menu::new(
///     "BattleShip".to_string(),
///     vec![
///         MenuItem::new("PLAY ONLINE".to_string()),
///         MenuItem::new("EXIT".to_string()),
///     ],
/// );
///
/// menu.select_previous(); // wraps to EXIT
/// menu.render(&mut canvas, &mut text)?;
/// ```
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    /// Creates a new menu with default styling
    pub fn new(title: String, items: Vec<MenuItem>) -> Self {
        Self::with_style(title, items, MenuStyle::default())
    }

    pub fn with_style(title: String, items: Vec<MenuItem>, style: MenuStyle) -> Self {
        Menu {
            title,
            items,
            selected_index: 0,
            style,
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + self.items.len() - 1) % self.items.len();
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the menu centered on the canvas' logical size
    pub fn render(&self, canvas: &mut WindowCanvas, text: &mut TextRenderer<'_>) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.logical_size();
        let menu_x = screen_width.saturating_sub(self.style.width) / 2;
        let menu_y = screen_height.saturating_sub(self.style.height) / 2;

        // 1. Title (horizontally centered)
        if let Some(title_width) = text.text_width(&self.title, self.style.title_size) {
            text.draw_text(
                canvas,
                &self.title,
                screen_width.saturating_sub(title_width) as i32 / 2,
                self.style.title_y,
                self.style.title_size,
                self.style.title_color,
            )?;
        }

        // 2. Frame, drawn as nested 1px outlines
        canvas.set_draw_color(self.style.border_color);
        for inset in 0..self.style.border_thickness {
            canvas.draw_rect(Rect::new(
                menu_x as i32 - inset as i32,
                menu_y as i32 - inset as i32,
                self.style.width + inset * 2,
                self.style.height + inset * 2,
            ))?;
        }

        // 3. Numbered items, one row each
        let item_height = self.style.height / self.items.len().max(1) as u32;
        for (i, item) in self.items.iter().enumerate() {
            let color = if i == self.selected_index {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };

            text.draw_text(
                canvas,
                &format!("{}. {}", i + 1, item.text),
                menu_x as i32 + self.style.item_padding,
                (menu_y + i as u32 * item_height) as i32,
                self.style.item_size,
                color,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_item_menu() -> Menu {
        Menu::new(
            "TEST".to_string(),
            vec![
                MenuItem::new("ONE".to_string()),
                MenuItem::new("TWO".to_string()),
                MenuItem::new("THREE".to_string()),
            ],
        )
    }

    #[test]
    fn test_select_next_wraps_to_top() {
        let mut menu = three_item_menu();

        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected_index(), 2);

        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_select_previous_wraps_to_bottom() {
        let mut menu = three_item_menu();

        menu.select_previous();
        assert_eq!(menu.selected_index(), 2);

        menu.select_previous();
        assert_eq!(menu.selected_index(), 1);
    }

    #[test]
    fn test_empty_menu_navigation_is_noop() {
        let mut menu = Menu::new("EMPTY".to_string(), Vec::new());

        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 0);
        assert!(menu.is_empty());
    }
}
