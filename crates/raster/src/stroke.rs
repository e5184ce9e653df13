//! Stroking of line segments as round-capped capsules.

use crate::format::{Color, Style};
use crate::geom::utils::{ceil_clamp, floor_clamp};
use crate::geom::{point, vector, LineSegment, Point};
use crate::render::Painter;
use crate::style;
use crate::{Framebuffer, Rgba8};

/// Radius floor keeping hairlines at least one pixel wide.
const MIN_RADIUS: f32 = 0.35;

/// Rasterize `line` as a capsule with independent start and end radii.
///
/// Every pixel whose center lies inside the capsule (signed distance at
/// most zero) is written. There is no anti-aliasing at this layer.
pub(crate) fn stroke_line<F>(
    framebuffer: &mut F,
    painter: &Painter,
    color_table: &[Color],
    line_style: &Style,
    width_start: f32,
    width_end: f32,
    line: LineSegment,
) where
    F: Framebuffer + ?Sized,
{
    if framebuffer.width() == 0 || framebuffer.height() == 0 {
        return;
    }

    let radius_start = (width_start * 0.5).max(MIN_RADIUS);
    let radius_end = (width_end * 0.5).max(MIN_RADIUS);

    let expand = width_start.max(width_end);
    let bounds = line.bounding_box().inflate(expand, expand);

    let x_min = floor_clamp(
        bounds.min.x * painter.scale_x,
        0,
        framebuffer.width() as i32 - 1,
    );
    let x_max = ceil_clamp(
        bounds.max.x * painter.scale_x,
        0,
        framebuffer.width() as i32 - 1,
    );
    let y_min = floor_clamp(
        bounds.min.y * painter.scale_y,
        0,
        framebuffer.height() as i32 - 1,
    );
    let y_max = ceil_clamp(
        bounds.max.y * painter.scale_y,
        0,
        framebuffer.height() as i32 - 1,
    );

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let position = point(
                (x as f32 + 0.5) / painter.scale_x,
                (y as f32 + 0.5) / painter.scale_y,
            );

            if capsule_distance(position, line, radius_start, radius_end) <= 0.0 {
                let color = style::sample(line_style, color_table, position);
                framebuffer.set_pixel(x as u32, y as u32, Rgba8::from_color(color));
            }
        }
    }
}

/// Exact signed distance to an uneven capsule around `line` (Íñigo
/// Quílez's formula).
fn capsule_distance(position: Point, line: LineSegment, ra: f32, rb: f32) -> f32 {
    let p = position - line.from;
    let pb = line.to_vector();
    let h = line.square_length();
    let mut q = vector(p.dot(vector(pb.y, -pb.x)), p.dot(pb)) / h;
    q.x = q.x.abs();

    let b = ra - rb;
    let c = vector((h - b * b).sqrt(), b);
    let k = c.cross(q);
    let m = c.dot(q);
    let n = q.dot(q);

    if k < 0.0 {
        (h * n).sqrt() - ra
    } else if k > c.x {
        (h * (n + 1.0 - 2.0 * q.y)).sqrt() - rb
    } else {
        m - ra
    }
}
