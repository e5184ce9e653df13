#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate implements the maths the TinyVG rasterizer needs to work with:
//!
//! - points, vectors and line segments,
//! - quadratic and cubic bézier curves,
//! - circular and elliptical arcs in endpoint parameterization.
//!
//! Curves are approximated with polylines using a fixed number of
//! subdivisions, which keeps the output deterministic across platforms
//! and matches what TinyVG encoders expect.
//!
//! All types are concretely `f32`: TinyVG stores logical coordinates as
//! fixed-point numbers that comfortably fit single precision.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
mod bezier;
mod line;
pub mod utils;

#[doc(inline)]
pub use crate::arc::ArcFlags;
#[doc(inline)]
pub use crate::bezier::{CubicBezierSegment, QuadraticBezierSegment};
#[doc(inline)]
pub use crate::line::LineSegment;

/// Alias for `euclid::default::Point2D<f32>`.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for `euclid::default::Vector2D<f32>`.
pub type Vector = euclid::default::Vector2D<f32>;

/// Alias for `euclid::default::Size2D<f32>`.
pub type Size = euclid::default::Size2D<f32>;

/// Alias for `euclid::default::Box2D<f32>`.
pub type Box2D = euclid::default::Box2D<f32>;

/// Alias for `euclid::default::Rect<f32>`.
pub type Rect = euclid::default::Rect<f32>;

/// Alias for `euclid::default::Transform2D<f32>`.
pub type Transform = euclid::default::Transform2D<f32>;

/// Alias for `euclid::default::Rotation2D<f32>`.
pub type Rotation = euclid::default::Rotation2D<f32>;

/// An angle in radians (f32).
pub type Angle = euclid::Angle<f32>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Size::new(w, h)`.
#[inline]
pub fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

/// Shorthand for `Rect::new(point(x, y), size(w, h))`.
#[inline]
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(point(x, y), size(w, h))
}
