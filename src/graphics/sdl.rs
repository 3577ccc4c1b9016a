//! SDL2 canvas backend for the render facade.

use super::font::{self, GLYPH_HEIGHT, GLYPH_ADVANCE};
use super::{Graphics2D, GraphicsError, Matrix, Paint};
use crate::engine::assets::{Bitmap, BitmapId};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::{HashMap, HashSet};

/// Fill colour used in place of bitmaps that failed to decode
const MISSING_BITMAP_COLOR: Color = Color::RGB(255, 0, 255);

/// Decoded textures, keyed by bitmap id.
///
/// Bitmaps are decoded the first time they are drawn. A bitmap that fails to
/// decode is remembered so the failure is only logged once.
pub struct TextureCache<'tc> {
    creator: &'tc TextureCreator<WindowContext>,
    textures: HashMap<BitmapId, Texture<'tc>>,
    failed: HashSet<BitmapId>,
}

impl<'tc> TextureCache<'tc> {
    pub fn new(creator: &'tc TextureCreator<WindowContext>) -> Self {
        TextureCache {
            creator,
            textures: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Returns the decoded texture, or `None` if the bitmap cannot be decoded
    fn get_or_load(&mut self, bitmap: &Bitmap) -> Option<&mut Texture<'tc>> {
        if self.failed.contains(&bitmap.id()) {
            return None;
        }

        if !self.textures.contains_key(&bitmap.id()) {
            match self.creator.load_texture(bitmap.path()) {
                Ok(texture) => {
                    log::debug!("Decoded bitmap '{}' from {}", bitmap.key(), bitmap.path().display());
                    self.textures.insert(bitmap.id(), texture);
                }
                Err(reason) => {
                    let error = GraphicsError::BitmapLoad {
                        path: bitmap.path().to_path_buf(),
                        reason,
                    };
                    log::warn!("{} (drawing placeholder for '{}')", error, bitmap.key());
                    self.failed.insert(bitmap.id());
                    return None;
                }
            }
        }

        self.textures.get_mut(&bitmap.id())
    }
}

/// [`Graphics2D`] implementation that draws onto an SDL2 window canvas.
///
/// Surface dimensions are the canvas's logical size, so screens can lay out
/// in game pixels regardless of the window scale.
pub struct SdlGraphics<'f, 'tc> {
    canvas: &'f mut Canvas<Window>,
    textures: &'f mut TextureCache<'tc>,
}

impl<'f, 'tc> SdlGraphics<'f, 'tc> {
    pub fn new(canvas: &'f mut Canvas<Window>, textures: &'f mut TextureCache<'tc>) -> Self {
        SdlGraphics { canvas, textures }
    }

    fn surface_size(&self) -> (u32, u32) {
        let (width, height) = self.canvas.logical_size();
        if width > 0 && height > 0 {
            (width, height)
        } else {
            self.canvas.output_size().unwrap_or((0, 0))
        }
    }

    fn draw_glyphs(&mut self, text: &str, left: i32, top: i32, scale: u32) -> Result<(), GraphicsError> {
        let pixel_size = scale as i32;

        for (i, c) in text.chars().enumerate() {
            let char_x = left + i as i32 * GLYPH_ADVANCE * pixel_size;
            for (col, row) in font::lit_pixels(c) {
                self.canvas.fill_rect(Rect::new(
                    char_x + col * pixel_size,
                    top + row * pixel_size,
                    scale,
                    scale,
                ))?;
            }
        }

        Ok(())
    }

    fn draw_placeholder(&mut self, dst_rect: Rect) -> Result<(), GraphicsError> {
        self.canvas.set_draw_color(MISSING_BITMAP_COLOR);
        self.canvas.draw_rect(dst_rect)?;
        Ok(())
    }
}

impl Graphics2D for SdlGraphics<'_, '_> {
    fn surface_width(&self) -> u32 {
        self.surface_size().0
    }

    fn surface_height(&self) -> u32 {
        self.surface_size().1
    }

    fn clip_rect(&mut self, clip_region: Rect) {
        self.canvas.set_clip_rect(clip_region);
    }

    fn clear(&mut self, colour: Color) {
        self.canvas.set_draw_color(colour);
        self.canvas.clear();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) -> Result<(), GraphicsError> {
        let scale = font::scale_for_text_size(paint.text_size);
        let left = x.round() as i32;
        let top = y.round() as i32 - GLYPH_HEIGHT * scale as i32;

        self.canvas.set_draw_color(paint.color);
        self.draw_glyphs(text, left, top, scale)?;
        if paint.fake_bold {
            self.draw_glyphs(text, left + 1, top, scale)?;
        }

        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        bitmap: &Bitmap,
        src_rect: Option<Rect>,
        dst_rect: Rect,
        paint: &Paint,
    ) -> Result<(), GraphicsError> {
        let Some(texture) = self.textures.get_or_load(bitmap) else {
            return self.draw_placeholder(dst_rect);
        };

        texture.set_alpha_mod(paint.alpha);
        self.canvas.copy(texture, src_rect, dst_rect)?;
        Ok(())
    }

    fn draw_bitmap_transformed(
        &mut self,
        bitmap: &Bitmap,
        matrix: &Matrix,
        paint: &Paint,
    ) -> Result<(), GraphicsError> {
        let parts = matrix.decompose();

        let Some(texture) = self.textures.get_or_load(bitmap) else {
            let (x, y) = matrix.map_point(0.0, 0.0);
            return self.draw_placeholder(Rect::new(x as i32, y as i32, 16, 16));
        };

        let query = texture.query();
        let (width, height) = (query.width as f32, query.height as f32);

        // Rotating about the destination centre is equivalent to the full
        // transform once the centre itself is mapped through the matrix.
        let (centre_x, centre_y) = matrix.map_point(width / 2.0, height / 2.0);
        let dst_width = (width * parts.scale_x.abs()).round().max(1.0) as u32;
        let dst_height = (height * parts.scale_y.abs()).round().max(1.0) as u32;
        let dst_rect = Rect::from_center((centre_x.round() as i32, centre_y.round() as i32), dst_width, dst_height);

        texture.set_alpha_mod(paint.alpha);
        self.canvas.copy_ex(
            texture,
            None,
            dst_rect,
            parts.rotation_degrees as f64,
            None,
            parts.scale_x < 0.0,
            parts.scale_y < 0.0,
        )?;
        Ok(())
    }
}
