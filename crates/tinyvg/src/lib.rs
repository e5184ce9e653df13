#![deny(bare_trait_objects)]

//! TinyVG vector graphics in Rust.
//!
//! This meta-crate reexports the following sub-crates for convenience:
//!
//! * **tinyvg_geom** - Points, vectors, bézier curves and arcs.
//! * **tinyvg_path** - Path data structures and the polyline flattener.
//! * **tinyvg_format** - The TinyVG data model and binary parser.
//! * **tinyvg_raster** - The deterministic software rasterizer.
//!
//! Each `tinyvg_<name>` crate is reexported as a `<name>` module here, so
//! that
//!
//! ```ignore
//! use tinyvg_raster::render;
//! ```
//!
//! is equivalent to:
//!
//! ```ignore
//! use tinyvg::raster::render;
//! ```
//!
//! # Feature flags
//!
//! Serialization of the data model with serde can be enabled with the
//! `serialization` feature flag (disabled by default).
//!
//! # Example
//!
//! ```
//! use tinyvg::format;
//! use tinyvg::raster::{render, Bitmap};
//!
//! // A 2x2 image with one white pixel-sized rectangle at the origin.
//! let bytes = [
//!     0x72, 0x56, 1, 0x40, 2, 2, 1, 255, 255, 255, 255,
//!     2, 0, 0, 0, 0, 1, 1,
//!     0,
//! ];
//! let image = format::parse(&bytes).unwrap();
//!
//! let mut bitmap = Bitmap::new(2, 2);
//! for command in &image.commands {
//!     render(&mut bitmap, &image.header, &image.color_table, command).unwrap();
//! }
//! assert_eq!(bitmap.get(0, 0).r, 255);
//! assert_eq!(bitmap.get(1, 1).a, 0);
//! ```

pub use tinyvg_format as format;
pub use tinyvg_geom as geom;
pub use tinyvg_path as path;
pub use tinyvg_raster as raster;

pub use format::{Color, DrawCommand, Header, Image, ParseError, Style};
pub use raster::{render, Bitmap, Framebuffer, RenderError, Rgba8};
