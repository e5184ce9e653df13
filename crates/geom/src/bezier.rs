//! Quadratic and cubic bézier curve segments.

use crate::Point;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    ///
    /// Evaluated by successive linear interpolations rather than the
    /// polynomial form, so intermediate values stay within the convex
    /// hull of the control points.
    pub fn sample(&self, t: f32) -> Point {
        let a = self.from.lerp(self.ctrl, t);
        let b = self.ctrl.lerp(self.to, t);

        a.lerp(b, t)
    }
}

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f32) -> Point {
        let a = self.from.lerp(self.ctrl1, t);
        let b = self.ctrl1.lerp(self.ctrl2, t);
        let c = self.ctrl2.lerp(self.to, t);

        a.lerp(b, t).lerp(b.lerp(c, t), t)
    }
}
