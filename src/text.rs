//! TTF Text Rendering
//!
//! Text is drawn with SDL2_ttf. Fonts are loaded lazily, once per point
//! size, and cached. A font that fails to load is reported once and its text
//! is skipped on every frame; the screen keeps running without it.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;
use sdl2::ttf::{Font, Sdl2TtfContext};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Draws strings with one font file at any number of sizes
pub struct TextRenderer<'ttf> {
    ttf: &'ttf Sdl2TtfContext,
    font_path: PathBuf,
    /// `None` marks a size that failed to load
    fonts: HashMap<u16, Option<Font<'ttf, 'static>>>,
}

impl<'ttf> TextRenderer<'ttf> {
    pub fn new(ttf: &'ttf Sdl2TtfContext, font_path: impl AsRef<Path>) -> Self {
        TextRenderer {
            ttf,
            font_path: font_path.as_ref().to_path_buf(),
            fonts: HashMap::new(),
        }
    }

    fn font(&mut self, size: u16) -> Option<&Font<'ttf, 'static>> {
        let ttf = self.ttf;
        let path = &self.font_path;

        self.fonts
            .entry(size)
            .or_insert_with(|| match ttf.load_font(path, size) {
                Ok(font) => Some(font),
                Err(e) => {
                    log::warn!("Error loading font {} at {}pt: {}", path.display(), size, e);
                    None
                }
            })
            .as_ref()
    }

    /// Width in pixels of `text` at `size`, if the font is available
    pub fn text_width(&mut self, text: &str, size: u16) -> Option<u32> {
        let font = self.font(size)?;
        font.size_of(text).map(|(width, _)| width).ok()
    }

    /// Draws `text` with its top-left corner at (`x`, `y`)
    ///
    /// # Returns
    ///
    /// - `Ok(())` when drawn, or when skipped because the font is missing
    /// - `Err(String)` if SDL2 fails to render or copy the text
    pub fn draw_text(
        &mut self,
        canvas: &mut WindowCanvas,
        text: &str,
        x: i32,
        y: i32,
        size: u16,
        color: Color,
    ) -> Result<(), String> {
        if text.is_empty() {
            return Ok(());
        }
        let Some(font) = self.font(size) else {
            return Ok(());
        };

        let surface = font
            .render(text)
            .blended(color)
            .map_err(|e| e.to_string())?;
        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        canvas.copy(
            &texture,
            None,
            Rect::new(x, y, surface.width(), surface.height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_is_skipped_and_not_retried() {
        let ttf = sdl2::ttf::init().unwrap();
        let mut text = TextRenderer::new(&ttf, "assets/fonts/does_not_exist.ttf");

        // Every frame asks again; the failed load is remembered
        assert_eq!(text.text_width("BattleShip", 50), None);
        assert_eq!(text.text_width("1. PLAY ONLINE", 50), None);
        assert_eq!(text.fonts.len(), 1);
        assert!(matches!(text.fonts.get(&50), Some(None)));

        // Each point size is loaded (and fails) on its own
        assert_eq!(text.text_width("1. PLAY ONLINE", 40), None);
        assert_eq!(text.fonts.len(), 2);
        assert!(matches!(text.fonts.get(&40), Some(None)));
    }
}
