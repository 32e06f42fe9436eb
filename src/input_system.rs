use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions a screen can react to
///
/// This enum decouples raw SDL2 key presses from what the menu and the
/// placement controller do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Navigation / movement ===
    Up,
    Down,
    Left,
    Right,

    // === Selection ===
    Confirm,

    // === Ship orientation ===
    Rotate,
    SetHorizontal,
    SetVertical,

    // === System ===
    Quit,
}

/// Which screen is reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Start menu: Up, Down, Enter
    Menu,
    /// Fleet placement: arrows, Enter, R, D, V
    Placement,
}

/// InputSystem processes SDL2 events and produces Actions
///
/// Input processing happens in phases:
/// 1. Poll SDL2 events
/// 2. Window close becomes `Action::Quit` in every context
/// 3. Key presses are filtered by the current context
/// 4. Actions are returned to the loop in arrival order
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new(context: InputContext) -> Self {
        InputSystem { context }
    }

    /// Drains all pending SDL2 events and returns the resulting actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<Action> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(Action::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    ..
                } => {
                    if let Some(action) = self.translate_key(key) {
                        actions.push(action);
                    }
                }
                _ => {
                    // Mouse and text input are not used
                }
            }
        }

        actions
    }

    /// Maps a key press to an action for the current context
    pub fn translate_key(&self, key: Keycode) -> Option<Action> {
        match self.context {
            InputContext::Menu => Self::menu_key(key),
            InputContext::Placement => Self::placement_key(key),
        }
    }

    fn menu_key(key: Keycode) -> Option<Action> {
        match key {
            Keycode::Up => Some(Action::Up),
            Keycode::Down => Some(Action::Down),
            Keycode::Return => Some(Action::Confirm),
            _ => None,
        }
    }

    fn placement_key(key: Keycode) -> Option<Action> {
        match key {
            Keycode::Up => Some(Action::Up),
            Keycode::Down => Some(Action::Down),
            Keycode::Left => Some(Action::Left),
            Keycode::Right => Some(Action::Right),
            Keycode::Return => Some(Action::Confirm),
            Keycode::R => Some(Action::Rotate),
            Keycode::D => Some(Action::SetHorizontal),
            Keycode::V => Some(Action::SetVertical),
            _ => None,
        }
    }
}
