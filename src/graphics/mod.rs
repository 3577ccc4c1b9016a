//! Render Facade
//!
//! Screens never talk to SDL2 directly. Everything they draw goes through the
//! [`Graphics2D`] trait, which describes the handful of operations a screen may
//! perform against a render surface.
//!
//! # Architecture
//!
//! - [`Graphics2D`]: the facade itself (surface size, clip, clear, text, bitmaps)
//! - [`Paint`]: style parameters shared by text and bitmap draws
//! - [`Matrix`]: 2D affine transform for free-form bitmap draws
//! - [`SdlGraphics`]: the SDL2 canvas backend used by the game loop
//!
//! # Example Usage
//!
//! ```ignore
//! let mut graphics = SdlGraphics::new(&mut canvas, &mut textures);
//! graphics.clear(Color::RGB(0, 0, 0));
//! graphics.draw_text("READY", 10.0, 40.0, &paint)?;
//! ```

pub mod font;
pub mod matrix;
#[cfg(test)]
pub mod recording;
pub mod sdl;

pub use matrix::Matrix;
pub use sdl::{SdlGraphics, TextureCache};

use crate::engine::assets::Bitmap;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::fmt;
use std::path::PathBuf;

/// Style parameters controlling how text and bitmaps are rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    /// Text colour (ARGB, alpha carried in `color.a`)
    pub color: Color,

    /// Text height in logical pixels
    pub text_size: f32,

    /// Draw text with a second, offset pass
    pub fake_bold: bool,

    /// Alpha applied to bitmaps (0-255)
    pub alpha: u8,
}

impl Default for Paint {
    fn default() -> Self {
        Paint {
            color: Color::RGBA(0, 0, 0, 255),
            text_size: 12.0,
            fake_bold: false,
            alpha: 255,
        }
    }
}

impl Paint {
    /// Creates a paint with the given colour and default text settings
    pub fn with_color(color: Color) -> Self {
        Paint {
            color,
            ..Default::default()
        }
    }

    pub fn set_argb(&mut self, a: u8, r: u8, g: u8, b: u8) {
        self.color = Color::RGBA(r, g, b, a);
    }

    pub fn set_text_size(&mut self, text_size: f32) {
        self.text_size = text_size;
    }

    pub fn set_fake_bold_text(&mut self, fake_bold: bool) {
        self.fake_bold = fake_bold;
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }
}

/// Errors surfaced by a rendering backend
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsError {
    /// The backend rejected a draw call
    Backend(String),

    /// A bitmap could not be decoded from disk
    BitmapLoad { path: PathBuf, reason: String },
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphicsError::Backend(reason) => {
                write!(f, "Render backend error: {}", reason)
            }
            GraphicsError::BitmapLoad { path, reason } => {
                write!(f, "Failed to load bitmap {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for GraphicsError {}

impl From<String> for GraphicsError {
    fn from(reason: String) -> Self {
        GraphicsError::Backend(reason)
    }
}

impl From<GraphicsError> for String {
    fn from(error: GraphicsError) -> Self {
        error.to_string()
    }
}

/// The set of graphical operations that can be applied to a render surface.
///
/// Implementations decide how the operations map onto a concrete backend.
/// The facade adds no failure modes of its own: whatever the backend reports
/// is handed back unchanged.
pub trait Graphics2D {
    /// Width of the render surface in logical pixels
    fn surface_width(&self) -> u32;

    /// Height of the render surface in logical pixels
    fn surface_height(&self) -> u32;

    /// Restrict subsequent draws to the given rectangle
    fn clip_rect(&mut self, clip_region: Rect);

    /// Fill the whole surface with a colour
    fn clear(&mut self, colour: Color);

    /// Draw a text string. `y` is the baseline, matching how text is placed
    /// on a typical canvas.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) -> Result<(), GraphicsError>;

    /// Draw a bitmap into `dst_rect`. When `src_rect` is `None` the whole
    /// bitmap is used.
    fn draw_bitmap(
        &mut self,
        bitmap: &Bitmap,
        src_rect: Option<Rect>,
        dst_rect: Rect,
        paint: &Paint,
    ) -> Result<(), GraphicsError>;

    /// Draw a bitmap under an arbitrary affine transform. The matrix maps
    /// bitmap-local pixel coordinates onto the surface.
    fn draw_bitmap_transformed(
        &mut self,
        bitmap: &Bitmap,
        matrix: &Matrix,
        paint: &Paint,
    ) -> Result<(), GraphicsError>;
}
