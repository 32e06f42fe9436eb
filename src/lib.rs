//! Battleship setup screens: a start menu and a fleet placement editor.
//!
//! The two screens are separate binaries (`menu`, `placement`) sharing this
//! library. Each runs its own SDL2 loop: poll input, apply it, redraw.

pub mod collision;
pub mod config;
pub mod gui;
pub mod input_system;
pub mod logging;
pub mod placement;
pub mod text;
