//! Decoding of the draw command list.

use crate::geom::{point, ArcFlags, LineSegment, Point, Rect};
use crate::header::{CoordinateRange, FileHeader};
use crate::path::{Path, PathCommand, PathSegment};
use crate::reader::Reader;
use crate::{DrawCommand, ParseError, Style};

/// Read a fixed-point coordinate.
fn read_unit(reader: &mut Reader<'_>, header: &FileHeader) -> Result<f32, ParseError> {
    let raw = match header.coordinate_range {
        CoordinateRange::Reduced => i32::from(reader.read_u8()? as i8),
        CoordinateRange::Default => i32::from(reader.read_u16()? as i16),
        CoordinateRange::Enhanced => reader.read_u32()? as i32,
    };

    Ok(raw as f32 / (1u32 << header.scale) as f32)
}

fn read_point(reader: &mut Reader<'_>, header: &FileHeader) -> Result<Point, ParseError> {
    let x = read_unit(reader, header)?;
    let y = read_unit(reader, header)?;
    Ok(point(x, y))
}

fn read_rect(reader: &mut Reader<'_>, header: &FileHeader) -> Result<Rect, ParseError> {
    let origin = read_point(reader, header)?;
    let width = read_unit(reader, header)?;
    let height = read_unit(reader, header)?;
    Ok(Rect::new(origin, crate::geom::size(width, height)))
}

/// Read a style specifier of the given kind (the two bits packed next to a
/// command or count byte).
fn read_style(
    reader: &mut Reader<'_>,
    header: &FileHeader,
    kind: u8,
) -> Result<Style, ParseError> {
    match kind {
        0 => Ok(Style::Flat {
            color_index: reader.read_var_uint()? as usize,
        }),
        1 | 2 => {
            let point_0 = read_point(reader, header)?;
            let point_1 = read_point(reader, header)?;
            let color_index_0 = reader.read_var_uint()? as usize;
            let color_index_1 = reader.read_var_uint()? as usize;
            if kind == 1 {
                Ok(Style::Linear {
                    point_0,
                    point_1,
                    color_index_0,
                    color_index_1,
                })
            } else {
                Ok(Style::Radial {
                    point_0,
                    point_1,
                    color_index_0,
                    color_index_1,
                })
            }
        }
        _ => Err(ParseError::UnsupportedStyle),
    }
}

fn read_points(
    reader: &mut Reader<'_>,
    header: &FileHeader,
    count: usize,
) -> Result<Vec<Point>, ParseError> {
    let mut points = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        points.push(read_point(reader, header)?);
    }
    Ok(points)
}

/// Read a path of `segment_count` segments. The per-segment command counts
/// all come first, then each segment's start point and commands.
fn read_path(
    reader: &mut Reader<'_>,
    header: &FileHeader,
    segment_count: usize,
) -> Result<Path, ParseError> {
    let mut command_counts = Vec::with_capacity(segment_count.min(1024));
    for _ in 0..segment_count {
        command_counts.push(reader.read_var_uint()? as usize + 1);
    }

    let mut segments = Vec::with_capacity(segment_count.min(1024));
    for command_count in command_counts {
        let start = read_point(reader, header)?;
        let mut commands = Vec::with_capacity(command_count.min(1024));
        for _ in 0..command_count {
            commands.push(read_path_command(reader, header)?);
        }
        segments.push(PathSegment { start, commands });
    }

    Ok(Path { segments })
}

fn read_arc_flags(reader: &mut Reader<'_>) -> Result<ArcFlags, ParseError> {
    let packed = reader.read_u8()?;
    Ok(ArcFlags {
        large_arc: packed & 0x01 != 0,
        sweep: packed & 0x02 != 0,
    })
}

fn read_path_command(
    reader: &mut Reader<'_>,
    header: &FileHeader,
) -> Result<PathCommand, ParseError> {
    let tag = reader.read_u8()?;
    let instruction = tag & 0x07;
    // Per-node line widths are legal in the encoding but have no
    // counterpart in the render model; the value is consumed and dropped.
    if tag & 0x10 != 0 {
        let _ = read_unit(reader, header)?;
    }

    Ok(match instruction {
        0 => PathCommand::Line {
            to: read_point(reader, header)?,
        },
        1 => PathCommand::Horizontal {
            x: read_unit(reader, header)?,
        },
        2 => PathCommand::Vertical {
            y: read_unit(reader, header)?,
        },
        3 => PathCommand::CubicBezier {
            ctrl1: read_point(reader, header)?,
            ctrl2: read_point(reader, header)?,
            to: read_point(reader, header)?,
        },
        4 => {
            let flags = read_arc_flags(reader)?;
            PathCommand::ArcCircle {
                radius: read_unit(reader, header)?,
                flags,
                to: read_point(reader, header)?,
            }
        }
        5 => {
            let flags = read_arc_flags(reader)?;
            PathCommand::ArcEllipse {
                radius_x: read_unit(reader, header)?,
                radius_y: read_unit(reader, header)?,
                rotation: read_unit(reader, header)?,
                flags,
                to: read_point(reader, header)?,
            }
        }
        6 => PathCommand::Close,
        _ => PathCommand::QuadraticBezier {
            ctrl: read_point(reader, header)?,
            to: read_point(reader, header)?,
        },
    })
}

pub(crate) fn parse_commands(
    reader: &mut Reader<'_>,
    header: &FileHeader,
) -> Result<Vec<DrawCommand>, ParseError> {
    let mut commands = Vec::new();

    loop {
        let tag = reader.read_u8()?;
        let index = tag & 0x3f;
        let primary_kind = tag >> 6;

        let command = match index {
            0 => break,
            1 => {
                let count = reader.read_var_uint()? as usize + 1;
                let style = read_style(reader, header, primary_kind)?;
                DrawCommand::FillPolygon {
                    style,
                    vertices: read_points(reader, header, count)?,
                }
            }
            2 => {
                let count = reader.read_var_uint()? as usize + 1;
                let style = read_style(reader, header, primary_kind)?;
                let mut rectangles = Vec::with_capacity(count.min(1024));
                for _ in 0..count {
                    rectangles.push(read_rect(reader, header)?);
                }
                DrawCommand::FillRectangles { style, rectangles }
            }
            3 => {
                let segment_count = reader.read_var_uint()? as usize + 1;
                let style = read_style(reader, header, primary_kind)?;
                DrawCommand::FillPath {
                    style,
                    path: read_path(reader, header, segment_count)?,
                }
            }
            4 => {
                let count = reader.read_var_uint()? as usize + 1;
                let style = read_style(reader, header, primary_kind)?;
                let line_width = read_unit(reader, header)?;
                let mut lines = Vec::with_capacity(count.min(1024));
                for _ in 0..count {
                    lines.push(LineSegment {
                        from: read_point(reader, header)?,
                        to: read_point(reader, header)?,
                    });
                }
                DrawCommand::DrawLines {
                    style,
                    line_width,
                    lines,
                }
            }
            5 => {
                let count = reader.read_var_uint()? as usize + 1;
                let style = read_style(reader, header, primary_kind)?;
                let line_width = read_unit(reader, header)?;
                DrawCommand::DrawLineLoop {
                    style,
                    line_width,
                    vertices: read_points(reader, header, count)?,
                }
            }
            6 => {
                let count = reader.read_var_uint()? as usize + 1;
                let style = read_style(reader, header, primary_kind)?;
                let line_width = read_unit(reader, header)?;
                DrawCommand::DrawLineStrip {
                    style,
                    line_width,
                    vertices: read_points(reader, header, count)?,
                }
            }
            7 => {
                let segment_count = reader.read_var_uint()? as usize + 1;
                let style = read_style(reader, header, primary_kind)?;
                let line_width = read_unit(reader, header)?;
                DrawCommand::DrawLinePath {
                    style,
                    line_width,
                    path: read_path(reader, header, segment_count)?,
                }
            }
            8 => {
                let packed = reader.read_u8()?;
                let count = usize::from(packed & 0x3f) + 1;
                let fill_style = read_style(reader, header, primary_kind)?;
                let line_style = read_style(reader, header, packed >> 6)?;
                let line_width = read_unit(reader, header)?;
                DrawCommand::OutlineFillPolygon {
                    fill_style,
                    line_style,
                    line_width,
                    vertices: read_points(reader, header, count)?,
                }
            }
            9 => {
                let packed = reader.read_u8()?;
                let count = usize::from(packed & 0x3f) + 1;
                let fill_style = read_style(reader, header, primary_kind)?;
                let line_style = read_style(reader, header, packed >> 6)?;
                let line_width = read_unit(reader, header)?;
                let mut rectangles = Vec::with_capacity(count);
                for _ in 0..count {
                    rectangles.push(read_rect(reader, header)?);
                }
                DrawCommand::OutlineFillRectangles {
                    fill_style,
                    line_style,
                    line_width,
                    rectangles,
                }
            }
            10 => {
                let packed = reader.read_u8()?;
                let segment_count = usize::from(packed & 0x3f) + 1;
                let fill_style = read_style(reader, header, primary_kind)?;
                let line_style = read_style(reader, header, packed >> 6)?;
                let line_width = read_unit(reader, header)?;
                DrawCommand::OutlineFillPath {
                    fill_style,
                    line_style,
                    line_width,
                    path: read_path(reader, header, segment_count)?,
                }
            }
            _ => return Err(ParseError::InvalidCommand(index)),
        };
        commands.push(command);
    }

    Ok(commands)
}
