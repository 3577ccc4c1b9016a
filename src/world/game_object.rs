use crate::engine::assets::Bitmap;
use crate::engine::timing::ElapsedTime;
use crate::graphics::{Graphics2D, GraphicsError, Paint};
use sdl2::rect::Rect;

/// Axis-aligned box stored as a centre point and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        BoundingBox {
            x,
            y,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    pub fn left(&self) -> f32 {
        self.x - self.half_width
    }

    pub fn top(&self) -> f32 {
        self.y - self.half_height
    }

    /// Edges are inclusive
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (x - self.x).abs() <= self.half_width && (y - self.y).abs() <= self.half_height
    }

    /// Screen rectangle covered by the box
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left().round() as i32,
            self.top().round() as i32,
            self.width().round().max(1.0) as u32,
            self.height().round().max(1.0) as u32,
        )
    }
}

/// A positioned, optionally textured object drawn every frame
#[derive(Debug, Clone)]
pub struct GameObject {
    bound: BoundingBox,
    bitmap: Option<Bitmap>,
}

impl GameObject {
    /// Creates an object centred on `(x, y)`
    pub fn new(x: f32, y: f32, width: f32, height: f32, bitmap: Option<Bitmap>) -> Self {
        GameObject {
            bound: BoundingBox::new(x, y, width, height),
            bitmap,
        }
    }

    pub fn bound(&self) -> &BoundingBox {
        &self.bound
    }

    #[cfg(test)]
    pub fn position(&self) -> (f32, f32) {
        (self.bound.x, self.bound.y)
    }

    #[cfg(test)]
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    /// Draws the bitmap stretched over the bounding box. Objects without a
    /// bitmap draw nothing.
    pub fn draw_with_paint(
        &self,
        graphics: &mut dyn Graphics2D,
        paint: &Paint,
    ) -> Result<(), GraphicsError> {
        match &self.bitmap {
            Some(bitmap) => graphics.draw_bitmap(bitmap, None, self.bound.to_rect(), paint),
            None => Ok(()),
        }
    }

    pub fn draw(&self, _elapsed: &ElapsedTime, graphics: &mut dyn Graphics2D) -> Result<(), GraphicsError> {
        self.draw_with_paint(graphics, &Paint::default())
    }
}
