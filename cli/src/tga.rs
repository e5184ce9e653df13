//! Writing 32-bit uncompressed TGA images.

use tinyvg::raster::Bitmap;

use std::io::{self, Write};

/// Write `bitmap` as an uncompressed true-color TGA with a top-left
/// origin. Channels are stored in B,G,R,A order as the format demands.
pub fn write<W: Write>(output: &mut W, bitmap: &Bitmap) -> io::Result<()> {
    if bitmap.width() > u16::MAX.into() || bitmap.height() > u16::MAX.into() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "image too large for a TGA file",
        ));
    }

    let mut header = [0u8; 18];
    header[2] = 2; // uncompressed true-color
    header[12..14].copy_from_slice(&(bitmap.width() as u16).to_le_bytes());
    header[14..16].copy_from_slice(&(bitmap.height() as u16).to_le_bytes());
    header[16] = 32; // bits per pixel
    header[17] = 0x28; // top-left origin, 8 alpha bits

    let mut data = Vec::with_capacity(header.len() + bitmap.pixels().len() * 4);
    data.extend_from_slice(&header);
    for pixel in bitmap.pixels() {
        data.extend_from_slice(&[pixel.b, pixel.g, pixel.r, pixel.a]);
    }

    output.write_all(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyvg::{Framebuffer, Rgba8};

    #[test]
    fn header_and_channel_order() {
        let mut bitmap = Bitmap::new(2, 1);
        bitmap.set_pixel(
            0,
            0,
            Rgba8 {
                r: 1,
                g: 2,
                b: 3,
                a: 4,
            },
        );

        let mut bytes = Vec::new();
        write(&mut bytes, &bitmap).unwrap();

        assert_eq!(bytes.len(), 18 + 2 * 4);
        assert_eq!(bytes[2], 2);
        assert_eq!(&bytes[12..18], &[2, 0, 1, 0, 32, 0x28]);
        // First pixel, swapped to B,G,R,A.
        assert_eq!(&bytes[18..22], &[3, 2, 1, 4]);
    }
}
