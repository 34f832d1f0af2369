//! 2D affine transforms for back ends that paint the scene themselves.

use crate::core::geo::{Point, Size};
use crate::scene::style::Style;

/// Row-major `[a, b, c, d, e, f]` mapping `(x, y)` to
/// `(a*x + c*y + e, b*x + d*y + f)`, the same layout as a CSS `matrix()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine(pub [f64; 6]);

impl Affine {
    pub const IDENTITY: Affine = Affine([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn translate(dx: f64, dy: f64) -> Self {
        Affine([1.0, 0.0, 0.0, 1.0, dx, dy])
    }

    pub fn scale(s: f64) -> Self {
        Affine([s, 0.0, 0.0, s, 0.0, 0.0])
    }

    pub fn rotate_deg(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Affine([cos, sin, -sin, cos, 0.0, 0.0])
    }

    /// `self ∘ other`: apply `other` first, then `self`
    pub fn then(&self, other: &Affine) -> Affine {
        let [a1, b1, c1, d1, e1, f1] = self.0;
        let [a2, b2, c2, d2, e2, f2] = other.0;
        Affine([
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ])
    }

    pub fn apply(&self, point: Point) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point::new(a * point.x + c * point.y + e, b * point.x + d * point.y + f)
    }

    /// Uniform scale factor carried by this transform
    pub fn scale_factor(&self) -> f64 {
        let [a, b, ..] = self.0;
        (a * a + b * b).sqrt()
    }

    /// The CSS transform of `style` for an element occupying `origin_box` at
    /// `position`: translate, then rotate and scale about the transform origin.
    pub fn from_style(style: &Style, position: Point, origin_box: Size) -> Affine {
        let pivot = Point::new(
            position.x + origin_box.width * style.origin.x / 100.0,
            position.y + origin_box.height * style.origin.y / 100.0,
        );
        let tx = style.x.to_px(origin_box.width);
        let ty = style.y.to_px(origin_box.height);

        Affine::translate(pivot.x + tx, pivot.y + ty)
            .then(&Affine::rotate_deg(style.rotate))
            .then(&Affine::scale(style.scale))
            .then(&Affine::translate(-pivot.x, -pivot.y))
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}
