//! Start Menu Component
//!
//! The five-entry start menu. Only EXIT does anything; every other entry is a
//! placeholder that reports its label when confirmed.

use super::{Menu, MenuItem, MenuStyle};
use crate::config::GameConfig;
use crate::text::TextRenderer;
use sdl2::render::WindowCanvas;

/// Entries of the start menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    PlayOnline,
    PlayWithFriend,
    ShowHistory,
    ShowRank,
    Exit,
}

impl MenuEntry {
    pub fn all() -> [Self; 5] {
        [
            Self::PlayOnline,
            Self::PlayWithFriend,
            Self::ShowHistory,
            Self::ShowRank,
            Self::Exit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PlayOnline => "PLAY ONLINE",
            Self::PlayWithFriend => "PLAY WITH FRIEND",
            Self::ShowHistory => "SHOW HISTORY",
            Self::ShowRank => "SHOW RANK",
            Self::Exit => "EXIT",
        }
    }
}

/// Result of confirming the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Placeholder entry: report the label, stay on the menu
    Announce(MenuEntry),
    /// Close the menu screen
    Exit,
}

/// The start menu
///
/// A typed wrapper around the base [`Menu`] component.
///
/// # Example
///
/// ```ignore
/// let mut menu = MainMenu::new(&config);
///
/// menu.move_up(); // wraps to EXIT
///
/// match menu.confirm() {
///     MenuOutcome::Announce(entry) => log::info!("Selected: {}", entry.label()),
///     MenuOutcome::Exit => break 'running,
/// }
/// ```
pub struct MainMenu {
    menu: Menu,
}

impl MainMenu {
    pub fn new(config: &GameConfig) -> Self {
        let items = MenuEntry::all()
            .iter()
            .map(|entry| MenuItem::new(entry.label().to_string()))
            .collect();

        let style = MenuStyle {
            width: config.menu_width,
            height: config.menu_height,
            ..Default::default()
        };

        MainMenu {
            menu: Menu::with_style("BattleShip".to_string(), items, style),
        }
    }

    /// Navigate up (wraps to bottom)
    pub fn move_up(&mut self) {
        self.menu.select_previous();
    }

    /// Navigate down (wraps to top)
    pub fn move_down(&mut self) {
        self.menu.select_next();
    }

    pub fn selected_index(&self) -> usize {
        self.menu.selected_index()
    }

    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::all()[self.menu.selected_index() % self.menu.len()]
    }

    /// Acts on the current selection. Never changes the selection.
    pub fn confirm(&self) -> MenuOutcome {
        match self.selected_entry() {
            MenuEntry::Exit => MenuOutcome::Exit,
            entry => MenuOutcome::Announce(entry),
        }
    }

    pub fn render(&self, canvas: &mut WindowCanvas, text: &mut TextRenderer<'_>) -> Result<(), String> {
        self.menu.render(canvas, text)
    }
}
