//! Screen-Space GUI
//!
//! Menu components drawn at fixed screen positions with SDL2 primitives and
//! TTF text.
//!
//! # Available Components
//!
//! - [`Menu`] - Generic framed list with a wrapping selection cursor
//! - [`MainMenu`] - The Battleship start menu
//!
//! # Example Usage
//!
//! ```ignore
//! let mut main_menu = MainMenu::new(&config);
//!
//! // Handle input
//! main_menu.move_down();
//!
//! // Render
//! main_menu.render(&mut canvas, &mut text)?;
//! ```

pub mod main_menu;
pub mod menu;

pub use main_menu::{MainMenu, MenuEntry, MenuOutcome};
pub use menu::{Menu, MenuItem, MenuStyle};
