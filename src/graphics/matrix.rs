//! 2D affine transforms for bitmap draws.
//!
//! Points are mapped as:
//!
//! ```text
//! x' = scale_x * x + skew_x  * y + trans_x
//! y' = skew_y  * x + scale_y * y + trans_y
//! ```
//!
//! `post_*` operations apply after the existing transform, so a chain of
//! `post_scale`, `post_rotate`, `post_translate` scales first and translates last.

/// A 2x3 affine matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub scale_x: f32,
    pub skew_x: f32,
    pub trans_x: f32,
    pub skew_y: f32,
    pub scale_y: f32,
    pub trans_y: f32,
}

/// Scale, rotation and translation recovered from a matrix without skew
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    pub scale_x: f32,
    pub scale_y: f32,
    /// Clockwise rotation in degrees (y axis points down)
    pub rotation_degrees: f32,
    pub trans_x: f32,
    pub trans_y: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::identity()
    }
}

impl Matrix {
    pub fn identity() -> Self {
        Matrix {
            scale_x: 1.0,
            skew_x: 0.0,
            trans_x: 0.0,
            skew_y: 0.0,
            scale_y: 1.0,
            trans_y: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Matrix::identity();
    }

    pub fn post_concat(&mut self, other: &Matrix) {
        *self = other.multiply(self);
    }

    /// `other` is applied before the existing transform
    pub fn pre_concat(&mut self, other: &Matrix) {
        *self = self.multiply(other);
    }

    pub fn post_scale(&mut self, sx: f32, sy: f32) {
        self.post_concat(&Matrix {
            scale_x: sx,
            scale_y: sy,
            ..Matrix::identity()
        });
    }

    pub fn post_translate(&mut self, dx: f32, dy: f32) {
        self.post_concat(&Matrix {
            trans_x: dx,
            trans_y: dy,
            ..Matrix::identity()
        });
    }

    /// Rotate clockwise about the origin
    pub fn post_rotate(&mut self, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.post_concat(&Matrix {
            scale_x: cos,
            skew_x: -sin,
            skew_y: sin,
            scale_y: cos,
            ..Matrix::identity()
        });
    }

    /// Rotate clockwise about the pivot `(px, py)`
    pub fn post_rotate_about(&mut self, degrees: f32, px: f32, py: f32) {
        self.post_translate(-px, -py);
        self.post_rotate(degrees);
        self.post_translate(px, py);
    }

    /// Returns `self * rhs`, i.e. `rhs` is applied first
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        Matrix {
            scale_x: self.scale_x * rhs.scale_x + self.skew_x * rhs.skew_y,
            skew_x: self.scale_x * rhs.skew_x + self.skew_x * rhs.scale_y,
            trans_x: self.scale_x * rhs.trans_x + self.skew_x * rhs.trans_y + self.trans_x,
            skew_y: self.skew_y * rhs.scale_x + self.scale_y * rhs.skew_y,
            scale_y: self.skew_y * rhs.skew_x + self.scale_y * rhs.scale_y,
            trans_y: self.skew_y * rhs.trans_x + self.scale_y * rhs.trans_y + self.trans_y,
        }
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.scale_x * x + self.skew_x * y + self.trans_x,
            self.skew_y * x + self.scale_y * y + self.trans_y,
        )
    }

    /// Split into scale, rotation and translation. Any skew component is
    /// folded into `scale_y`; a negative `scale_y` means the image is mirrored.
    pub fn decompose(&self) -> Decomposed {
        let scale_x = self.scale_x.hypot(self.skew_y);
        let determinant = self.scale_x * self.scale_y - self.skew_x * self.skew_y;
        let scale_y = if scale_x > f32::EPSILON {
            determinant / scale_x
        } else {
            self.scale_y
        };

        Decomposed {
            scale_x,
            scale_y,
            rotation_degrees: self.skew_y.atan2(self.scale_x).to_degrees(),
            trans_x: self.trans_x,
            trans_y: self.trans_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_identity_maps_point_unchanged() {
        let matrix = Matrix::identity();
        assert_eq!(matrix.map_point(3.0, -4.0), (3.0, -4.0));
    }

    #[test]
    fn test_scale_then_translate_order() {
        let mut matrix = Matrix::identity();
        matrix.post_scale(2.0, 3.0);
        matrix.post_translate(10.0, 20.0);

        let (x, y) = matrix.map_point(1.0, 1.0);
        assert!(approx(x, 12.0));
        assert!(approx(y, 23.0));
    }

    #[test]
    fn test_rotate_is_clockwise_with_y_down() {
        let mut matrix = Matrix::identity();
        matrix.post_rotate(90.0);

        // +x axis rotates onto +y (downwards on screen)
        let (x, y) = matrix.map_point(1.0, 0.0);
        assert!(approx(x, 0.0));
        assert!(approx(y, 1.0));
    }

    #[test]
    fn test_rotate_about_pivot_keeps_pivot_fixed() {
        let mut matrix = Matrix::identity();
        matrix.post_rotate_about(45.0, 16.0, 16.0);

        let (x, y) = matrix.map_point(16.0, 16.0);
        assert!(approx(x, 16.0));
        assert!(approx(y, 16.0));
    }

    #[test]
    fn test_decompose_recovers_components() {
        let mut matrix = Matrix::identity();
        matrix.post_scale(2.0, 0.5);
        matrix.post_rotate(30.0);
        matrix.post_translate(100.0, 50.0);

        let parts = matrix.decompose();
        assert!(approx(parts.scale_x, 2.0));
        assert!(approx(parts.scale_y, 0.5));
        assert!(approx(parts.rotation_degrees, 30.0));
        assert!(approx(parts.trans_x, 100.0));
        assert!(approx(parts.trans_y, 50.0));
    }

    #[test]
    fn test_decompose_mirrored() {
        let mut matrix = Matrix::identity();
        matrix.post_scale(1.0, -1.0);

        let parts = matrix.decompose();
        assert!(approx(parts.scale_x, 1.0));
        assert!(approx(parts.scale_y, -1.0));
        assert!(approx(parts.rotation_degrees, 0.0));
    }

    #[test]
    fn test_pre_and_post_concat_order() {
        let mut post = Matrix::identity();
        post.post_scale(2.0, 2.0);
        post.post_translate(10.0, 0.0);

        let mut scale = Matrix::identity();
        scale.post_scale(2.0, 2.0);
        let mut translate = Matrix::identity();
        translate.post_translate(10.0, 0.0);

        let mut pre = scale;
        pre.pre_concat(&translate);

        // post: scale then translate; pre: translate then scale
        assert_eq!(post.map_point(1.0, 1.0), (12.0, 2.0));
        assert_eq!(pre.map_point(1.0, 1.0), (22.0, 2.0));
    }

    #[test]
    fn test_reset() {
        let mut matrix = Matrix::identity();
        matrix.post_translate(5.0, 5.0);
        matrix.reset();
        assert_eq!(matrix, Matrix::default());
    }
}
