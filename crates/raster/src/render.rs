//! Dispatching draw commands to the fill and stroke rasterizers.

use crate::error::RenderResult;
use crate::fill::fill_polylines;
use crate::format::{Color, DrawCommand, Header, Style};
use crate::geom::{point, LineSegment, Point, Rect};
use crate::path::flatten::flatten;
use crate::path::FillRule;
use crate::stroke::stroke_line;
use crate::Framebuffer;

use std::iter;

/// The logical-to-pixel scale factors of one render call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Painter {
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Painter {
    /// The scales mapping `header`'s logical coordinate system onto
    /// `framebuffer`.
    pub fn new<F: Framebuffer + ?Sized>(framebuffer: &F, header: &Header) -> Self {
        Painter {
            scale_x: framebuffer.width() as f32 / header.width as f32,
            scale_y: framebuffer.height() as f32 / header.height as f32,
        }
    }
}

/// Render one draw command into `framebuffer`.
///
/// Pixels are written in raster order within each shape's bounding box,
/// and commands rendered later overwrite earlier ones. The color table and
/// command are borrowed for the duration of the call.
///
/// Note the fill rule asymmetry: paths fill with the even-odd rule while
/// polygons (and path outlines) fill with non-zero, mirroring how TinyVG
/// artwork is authored.
pub fn render<F>(
    framebuffer: &mut F,
    header: &Header,
    color_table: &[Color],
    command: &DrawCommand,
) -> RenderResult
where
    F: Framebuffer + ?Sized,
{
    if header.width == 0 || header.height == 0 {
        return Ok(());
    }
    let painter = Painter::new(framebuffer, header);

    match command {
        DrawCommand::FillPolygon { style, vertices } => {
            fill_polylines(
                framebuffer,
                &painter,
                color_table,
                style,
                FillRule::NonZero,
                iter::once(&vertices[..]),
            );
        }
        DrawCommand::FillRectangles { style, rectangles } => {
            for rectangle in rectangles {
                let corners = rect_corners(rectangle);
                fill_polylines(
                    framebuffer,
                    &painter,
                    color_table,
                    style,
                    FillRule::NonZero,
                    iter::once(&corners[..]),
                );
            }
        }
        DrawCommand::FillPath { style, path } => {
            let flattened = flatten(path)?;
            fill_polylines(
                framebuffer,
                &painter,
                color_table,
                style,
                FillRule::EvenOdd,
                flattened.polylines(),
            );
        }
        DrawCommand::DrawLines {
            style,
            line_width,
            lines,
        } => {
            for line in lines {
                stroke_line(
                    framebuffer,
                    &painter,
                    color_table,
                    style,
                    *line_width,
                    *line_width,
                    *line,
                );
            }
        }
        DrawCommand::DrawLineStrip {
            style,
            line_width,
            vertices,
        } => {
            stroke_polyline(
                framebuffer,
                &painter,
                color_table,
                style,
                *line_width,
                vertices,
                false,
            );
        }
        DrawCommand::DrawLineLoop {
            style,
            line_width,
            vertices,
        } => {
            stroke_polyline(
                framebuffer,
                &painter,
                color_table,
                style,
                *line_width,
                vertices,
                true,
            );
        }
        DrawCommand::DrawLinePath {
            style,
            line_width,
            path,
        } => {
            let flattened = flatten(path)?;
            for polyline in flattened.polylines() {
                stroke_polyline(
                    framebuffer,
                    &painter,
                    color_table,
                    style,
                    *line_width,
                    polyline,
                    false,
                );
            }
        }
        DrawCommand::OutlineFillPolygon {
            fill_style,
            line_style,
            line_width,
            vertices,
        } => {
            fill_polylines(
                framebuffer,
                &painter,
                color_table,
                fill_style,
                FillRule::NonZero,
                iter::once(&vertices[..]),
            );
            stroke_polyline(
                framebuffer,
                &painter,
                color_table,
                line_style,
                *line_width,
                vertices,
                true,
            );
        }
        DrawCommand::OutlineFillRectangles {
            fill_style,
            line_style,
            line_width,
            rectangles,
        } => {
            for rectangle in rectangles {
                let corners = rect_corners(rectangle);
                fill_polylines(
                    framebuffer,
                    &painter,
                    color_table,
                    fill_style,
                    FillRule::NonZero,
                    iter::once(&corners[..]),
                );
                // Edge order matters for which stroke wins at the corners:
                // top, right, bottom, left.
                stroke_polyline(
                    framebuffer,
                    &painter,
                    color_table,
                    line_style,
                    *line_width,
                    &corners,
                    true,
                );
            }
        }
        DrawCommand::OutlineFillPath {
            fill_style,
            line_style,
            line_width,
            path,
        } => {
            let flattened = flatten(path)?;
            fill_polylines(
                framebuffer,
                &painter,
                color_table,
                fill_style,
                FillRule::NonZero,
                flattened.polylines(),
            );
            for polyline in flattened.polylines() {
                stroke_polyline(
                    framebuffer,
                    &painter,
                    color_table,
                    line_style,
                    *line_width,
                    polyline,
                    false,
                );
            }
        }
    }

    Ok(())
}

/// Stroke the edges between consecutive vertices, optionally adding the
/// closing edge back to the first vertex.
fn stroke_polyline<F>(
    framebuffer: &mut F,
    painter: &Painter,
    color_table: &[Color],
    line_style: &Style,
    line_width: f32,
    vertices: &[Point],
    close: bool,
) where
    F: Framebuffer + ?Sized,
{
    for pair in vertices.windows(2) {
        stroke_line(
            framebuffer,
            painter,
            color_table,
            line_style,
            line_width,
            line_width,
            LineSegment {
                from: pair[0],
                to: pair[1],
            },
        );
    }
    if close && vertices.len() >= 2 {
        stroke_line(
            framebuffer,
            painter,
            color_table,
            line_style,
            line_width,
            line_width,
            LineSegment {
                from: vertices[vertices.len() - 1],
                to: vertices[0],
            },
        );
    }
}

/// A rectangle's corners as a closed polygon outline, walked clockwise
/// from the top left.
fn rect_corners(rectangle: &Rect) -> [Point; 4] {
    [
        point(rectangle.min_x(), rectangle.min_y()),
        point(rectangle.max_x(), rectangle.min_y()),
        point(rectangle.max_x(), rectangle.max_y()),
        point(rectangle.min_x(), rectangle.max_y()),
    ]
}
