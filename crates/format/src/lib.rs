#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! TinyVG data model and binary parser.
//!
//! The binary format packs a header, a color table and a list of draw
//! commands into a compact stream of fixed-point coordinates and
//! variable-length integers. [`parse`] decodes a whole file:
//!
//! ```
//! use tinyvg_format::parse;
//!
//! // Smallest valid file: a 1x1 image with no colors and no commands.
//! let image = parse(&[0x72, 0x56, 1, 0x41, 1, 1, 0, 0]).unwrap();
//! assert_eq!(image.header.width, 1);
//! assert!(image.commands.is_empty());
//! ```

pub use tinyvg_geom as geom;
pub use tinyvg_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod color_table;
mod commands;
mod header;
mod reader;

use crate::geom::{LineSegment, Point, Rect};
use crate::path::Path;

pub use crate::header::CoordinateRange;
pub use crate::reader::Reader;

/// The logical dimensions of an image, defining its coordinate system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Header {
    pub width: u32,
    pub height: u32,
}

/// An RGBA color with all channels stored as `f32` in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

/// How a shape's covered pixels get their color.
///
/// Gradient colors are indices into the image's color table.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Style {
    /// A single color for the whole shape.
    Flat { color_index: usize },
    /// A gradient along the axis from `point_0` to `point_1`.
    Linear {
        point_0: Point,
        point_1: Point,
        color_index_0: usize,
        color_index_1: usize,
    },
    /// A gradient radiating out of `point_0`; `point_1` marks the radius at
    /// which the gradient reaches its end color.
    Radial {
        point_0: Point,
        point_1: Point,
        color_index_0: usize,
        color_index_1: usize,
    },
}

/// A single drawing operation of a TinyVG file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum DrawCommand {
    FillPolygon {
        style: Style,
        vertices: Vec<Point>,
    },
    FillRectangles {
        style: Style,
        rectangles: Vec<Rect>,
    },
    FillPath {
        style: Style,
        path: Path,
    },
    DrawLines {
        style: Style,
        line_width: f32,
        lines: Vec<LineSegment>,
    },
    DrawLineStrip {
        style: Style,
        line_width: f32,
        vertices: Vec<Point>,
    },
    DrawLineLoop {
        style: Style,
        line_width: f32,
        vertices: Vec<Point>,
    },
    DrawLinePath {
        style: Style,
        line_width: f32,
        path: Path,
    },
    OutlineFillPolygon {
        fill_style: Style,
        line_style: Style,
        line_width: f32,
        vertices: Vec<Point>,
    },
    OutlineFillRectangles {
        fill_style: Style,
        line_style: Style,
        line_width: f32,
        rectangles: Vec<Rect>,
    },
    OutlineFillPath {
        fill_style: Style,
        line_style: Style,
        line_width: f32,
        path: Path,
    },
}

/// A fully decoded TinyVG file.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub header: Header,
    pub color_table: Vec<Color>,
    pub commands: Vec<DrawCommand>,
}

/// The parser's error enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input ended in the middle of a structure.
    UnexpectedEndOfFile,
    /// The input does not start with the TinyVG magic bytes.
    InvalidMagic,
    /// The file uses a format version this parser does not understand.
    UnsupportedVersion(u8),
    /// Width or height is zero.
    InvalidHeader,
    /// The header announces a reserved color encoding.
    UnsupportedColorEncoding,
    /// A style specifier uses a reserved style kind.
    UnsupportedStyle,
    /// A command tag outside the known range.
    InvalidCommand(u8),
    /// A variable-length integer runs longer than 32 bits.
    InvalidVarUint,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::UnexpectedEndOfFile => write!(f, "Unexpected end of file"),
            ParseError::InvalidMagic => write!(f, "Not a TinyVG file"),
            ParseError::UnsupportedVersion(v) => write!(f, "Unsupported format version {v}"),
            ParseError::InvalidHeader => write!(f, "Invalid image dimensions"),
            ParseError::UnsupportedColorEncoding => write!(f, "Unsupported color encoding"),
            ParseError::UnsupportedStyle => write!(f, "Unsupported style kind"),
            ParseError::InvalidCommand(tag) => write!(f, "Invalid command tag {tag}"),
            ParseError::InvalidVarUint => write!(f, "Malformed variable-length integer"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Decode a complete TinyVG file.
pub fn parse(bytes: &[u8]) -> Result<Image, ParseError> {
    let mut reader = Reader::new(bytes);
    let file_header = header::FileHeader::parse(&mut reader)?;
    let color_table = color_table::parse_color_table(&mut reader, &file_header)?;
    let commands = commands::parse_commands(&mut reader, &file_header)?;

    Ok(Image {
        header: Header {
            width: file_header.width,
            height: file_header.height,
        },
        color_table,
        commands,
    })
}
