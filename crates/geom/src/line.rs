use crate::utils::min_max;
use crate::{point, Box2D, Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.from.lerp(self.to, t)
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> f32 {
        self.to_vector().square_length()
    }

    /// Return the smallest rectangle containing this segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        let (min_x, max_x) = min_max(self.from.x, self.to.x);
        let (min_y, max_y) = min_max(self.from.y, self.to.y);

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_endpoints_and_midpoint() {
        let segment = LineSegment {
            from: point(1.0, 2.0),
            to: point(5.0, 6.0),
        };
        assert_eq!(segment.sample(0.0), segment.from);
        assert_eq!(segment.sample(1.0), segment.to);
        assert_eq!(segment.sample(0.5), point(3.0, 4.0));
    }

    #[test]
    fn bounding_box_is_orientation_independent() {
        let segment = LineSegment {
            from: point(5.0, 1.0),
            to: point(2.0, 4.0),
        };
        assert_eq!(segment.bounding_box(), segment.flip().bounding_box());
        assert_eq!(segment.bounding_box().min, point(2.0, 1.0));
        assert_eq!(segment.bounding_box().max, point(5.0, 4.0));
    }

    #[test]
    fn square_length_is_orientation_independent() {
        let segment = LineSegment {
            from: point(1.0, 2.0),
            to: point(4.0, 6.0),
        };
        assert_eq!(segment.square_length(), 25.0);
        assert_eq!(segment.flip().square_length(), 25.0);
        assert_eq!(segment.to_vector(), segment.to - segment.from);
    }
}
