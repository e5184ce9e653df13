//! The TinyVG file header.

use crate::reader::Reader;
use crate::ParseError;

/// TinyVG files start with these two bytes.
pub const MAGIC: [u8; 2] = [0x72, 0x56];

/// The only format version this parser understands.
pub const VERSION: u8 = 1;

/// Storage width of coordinates in the file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoordinateRange {
    /// 16 bit units.
    Default,
    /// 8 bit units, for very small files.
    Reduced,
    /// 32 bit units, for very precise files.
    Enhanced,
}

/// In-file representation of colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ColorEncoding {
    Rgba8888,
    Rgb565,
    RgbaF32,
}

/// Everything the rest of the file needs to decode coordinates and colors.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FileHeader {
    pub width: u32,
    pub height: u32,
    /// Number of fractional bits in a fixed-point unit.
    pub scale: u32,
    pub color_encoding: ColorEncoding,
    pub coordinate_range: CoordinateRange,
    pub color_count: u32,
}

impl FileHeader {
    pub fn parse(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        if [reader.read_u8()?, reader.read_u8()?] != MAGIC {
            return Err(ParseError::InvalidMagic);
        }
        let version = reader.read_u8()?;
        if version != VERSION {
            return Err(ParseError::UnsupportedVersion(version));
        }

        let properties = reader.read_u8()?;
        let scale = u32::from(properties & 0x0f);
        let color_encoding = match (properties >> 4) & 0x03 {
            0 => ColorEncoding::Rgba8888,
            1 => ColorEncoding::Rgb565,
            2 => ColorEncoding::RgbaF32,
            _ => return Err(ParseError::UnsupportedColorEncoding),
        };
        let coordinate_range = match properties >> 6 {
            0 => CoordinateRange::Default,
            1 => CoordinateRange::Reduced,
            _ => CoordinateRange::Enhanced,
        };

        let (width, height) = match coordinate_range {
            CoordinateRange::Reduced => {
                (u32::from(reader.read_u8()?), u32::from(reader.read_u8()?))
            }
            CoordinateRange::Default => {
                (u32::from(reader.read_u16()?), u32::from(reader.read_u16()?))
            }
            CoordinateRange::Enhanced => (reader.read_u32()?, reader.read_u32()?),
        };
        if width == 0 || height == 0 {
            return Err(ParseError::InvalidHeader);
        }

        let color_count = reader.read_var_uint()?;

        Ok(FileHeader {
            width,
            height,
            scale,
            color_encoding,
            coordinate_range,
            color_count,
        })
    }
}
