#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Path data structures for TinyVG drawings.
//!
//! A [`Path`] is a sequence of sub-paths ([`PathSegment`]), each starting at
//! an absolute position and continuing with a list of [`PathCommand`]s.
//! Rasterization does not consume paths directly; they are first flattened
//! into polylines by the [`flatten`](flatten::flatten) function.

pub use tinyvg_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod flatten;

use crate::geom::{ArcFlags, Point};

/// One command of a path segment. All positions are absolute logical
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    /// A straight line to `to`.
    Line { to: Point },
    /// A horizontal line, keeping the current y coordinate.
    Horizontal { x: f32 },
    /// A vertical line, keeping the current x coordinate.
    Vertical { y: f32 },
    /// A cubic bézier curve to `to`.
    CubicBezier { ctrl1: Point, ctrl2: Point, to: Point },
    /// A quadratic bézier curve to `to`.
    QuadraticBezier { ctrl: Point, to: Point },
    /// A circular arc to `to`.
    ArcCircle {
        radius: f32,
        flags: ArcFlags,
        to: Point,
    },
    /// An elliptical arc to `to`. `rotation` is the angle of the x axis in
    /// degrees.
    ArcEllipse {
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        flags: ArcFlags,
        to: Point,
    },
    /// A straight line back to the start of the segment.
    Close,
}

/// One sub-path: a start position followed by a list of commands.
///
/// The sub-path is closed if and only if its final command is
/// [`PathCommand::Close`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathSegment {
    pub start: Point,
    pub commands: Vec<PathCommand>,
}

/// A sequence of sub-paths.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

/// The fill rule defines how to determine what is inside and what is outside
/// of the shape.
///
/// See the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    /// Whether a point contained by `sub_path_count` of the shape's
    /// sub-paths is inside the shape.
    #[inline]
    pub fn is_in(&self, sub_path_count: u32) -> bool {
        match *self {
            FillRule::EvenOdd => sub_path_count % 2 != 0,
            FillRule::NonZero => sub_path_count != 0,
        }
    }

    #[inline]
    pub fn is_out(&self, sub_path_count: u32) -> bool {
        !self.is_in(sub_path_count)
    }
}
