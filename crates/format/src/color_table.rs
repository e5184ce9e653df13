//! Decoding of the color table.

use crate::header::{ColorEncoding, FileHeader};
use crate::reader::Reader;
use crate::{Color, ParseError};

pub(crate) fn parse_color_table(
    reader: &mut Reader<'_>,
    header: &FileHeader,
) -> Result<Vec<Color>, ParseError> {
    let count = header.color_count as usize;
    let mut colors = Vec::with_capacity(count.min(1024));

    for _ in 0..count {
        let color = match header.color_encoding {
            ColorEncoding::Rgba8888 => {
                let r = reader.read_u8()?;
                let g = reader.read_u8()?;
                let b = reader.read_u8()?;
                let a = reader.read_u8()?;
                Color::new(
                    f32::from(r) / 255.0,
                    f32::from(g) / 255.0,
                    f32::from(b) / 255.0,
                    f32::from(a) / 255.0,
                )
            }
            ColorEncoding::Rgb565 => {
                let packed = reader.read_u16()?;
                Color::new(
                    f32::from(packed & 0x1f) / 31.0,
                    f32::from((packed >> 5) & 0x3f) / 63.0,
                    f32::from((packed >> 11) & 0x1f) / 31.0,
                    1.0,
                )
            }
            ColorEncoding::RgbaF32 => {
                let r = reader.read_f32()?;
                let g = reader.read_f32()?;
                let b = reader.read_f32()?;
                let a = reader.read_f32()?;
                Color::new(r, g, b, a)
            }
        };
        colors.push(color);
    }

    Ok(colors)
}
