use crate::commands::{Input, Output, RenderCmd};
use crate::tga;

use tinyvg::raster::Bitmap;
use tinyvg::{format, render, Framebuffer, ParseError, RenderError, Rgba8};

use std::fs::File;
use std::io::{self, Read, Write};

#[derive(Debug)]
pub enum CliError {
    Read(io::Error),
    Parse(ParseError),
    Render(RenderError),
    Write(io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Read(e) => write!(f, "Failed to read the input: {e}"),
            CliError::Parse(e) => write!(f, "Failed to parse the input: {e}"),
            CliError::Render(e) => write!(f, "Failed to render: {e}"),
            CliError::Write(e) => write!(f, "Failed to write the output: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

pub fn run(cmd: &RenderCmd) -> Result<(), CliError> {
    let bytes = match &cmd.input {
        Input::Stdin => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(CliError::Read)?;
            bytes
        }
        Input::File(path) => std::fs::read(path).map_err(CliError::Read)?,
    };

    let image = format::parse(&bytes).map_err(CliError::Parse)?;

    let (width, height) = cmd
        .geometry
        .unwrap_or((image.header.width, image.header.height));
    let factor = cmd.super_sampling;

    let mut bitmap = Bitmap::new(width * factor, height * factor);
    for command in &image.commands {
        render(&mut bitmap, &image.header, &image.color_table, command)
            .map_err(CliError::Render)?;
    }

    let bitmap = if factor > 1 {
        downsample(&bitmap, factor)
    } else {
        bitmap
    };

    match &cmd.output {
        Output::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            tga::write(&mut lock, &bitmap).map_err(CliError::Write)?;
            lock.flush().map_err(CliError::Write)?;
        }
        Output::File(path) => {
            let mut file = File::create(path).map_err(CliError::Write)?;
            tga::write(&mut file, &bitmap).map_err(CliError::Write)?;
        }
    }

    Ok(())
}

/// Box-filter `source` down by `factor`, averaging `factor`² texels per
/// output pixel.
fn downsample(source: &Bitmap, factor: u32) -> Bitmap {
    let width = source.width() / factor;
    let height = source.height() / factor;
    let mut output = Bitmap::new(width, height);
    let texels = factor * factor;

    for y in 0..height {
        for x in 0..width {
            let mut sums = [0u32; 4];
            for sub_y in 0..factor {
                for sub_x in 0..factor {
                    let texel = source.get(x * factor + sub_x, y * factor + sub_y);
                    sums[0] += u32::from(texel.r);
                    sums[1] += u32::from(texel.g);
                    sums[2] += u32::from(texel.b);
                    sums[3] += u32::from(texel.a);
                }
            }
            let average = |sum: u32| ((sum + texels / 2) / texels) as u8;
            output.set_pixel(
                x,
                y,
                Rgba8 {
                    r: average(sums[0]),
                    g: average(sums[1]),
                    b: average(sums[2]),
                    a: average(sums[3]),
                },
            );
        }
    }

    output
}
