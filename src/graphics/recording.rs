//! Headless [`Graphics2D`] that records draw calls instead of rendering them.

use super::{Graphics2D, GraphicsError, Matrix, Paint};
use crate::engine::assets::Bitmap;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clip(Rect),
    Clear(Color),
    Text {
        text: String,
        x: f32,
        y: f32,
        text_size: f32,
        fake_bold: bool,
    },
    Bitmap {
        key: String,
        src: Option<Rect>,
        dst: Rect,
        alpha: u8,
    },
    TransformedBitmap {
        key: String,
        matrix: Matrix,
    },
}

pub struct RecordingGraphics {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingGraphics {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingGraphics {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Texts drawn so far, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Bitmap keys drawn so far, in draw order
    pub fn bitmap_keys(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Bitmap { key, .. } | DrawCommand::TransformedBitmap { key, .. } => {
                    Some(key.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

impl Graphics2D for RecordingGraphics {
    fn surface_width(&self) -> u32 {
        self.width
    }

    fn surface_height(&self) -> u32 {
        self.height
    }

    fn clip_rect(&mut self, clip_region: Rect) {
        self.commands.push(DrawCommand::Clip(clip_region));
    }

    fn clear(&mut self, colour: Color) {
        self.commands.push(DrawCommand::Clear(colour));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) -> Result<(), GraphicsError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            text_size: paint.text_size,
            fake_bold: paint.fake_bold,
        });
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        bitmap: &Bitmap,
        src_rect: Option<Rect>,
        dst_rect: Rect,
        paint: &Paint,
    ) -> Result<(), GraphicsError> {
        self.commands.push(DrawCommand::Bitmap {
            key: bitmap.key().to_string(),
            src: src_rect,
            dst: dst_rect,
            alpha: paint.alpha,
        });
        Ok(())
    }

    fn draw_bitmap_transformed(
        &mut self,
        bitmap: &Bitmap,
        matrix: &Matrix,
        _paint: &Paint,
    ) -> Result<(), GraphicsError> {
        self.commands.push(DrawCommand::TransformedBitmap {
            key: bitmap.key().to_string(),
            matrix: *matrix,
        });
        Ok(())
    }
}
