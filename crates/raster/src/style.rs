//! Resolving styles to per-pixel colors.

use crate::format::{Color, Style};
use crate::geom::Point;

/// Exponent approximating the sRGB transfer curve.
const GAMMA: f32 = 2.2;

/// Look up a table color, clamping the index into the table. An empty
/// table yields transparent black.
fn table_color(color_table: &[Color], index: usize) -> Color {
    match color_table.last() {
        Some(last) => *color_table.get(index).unwrap_or(last),
        None => Color::TRANSPARENT,
    }
}

/// Interpolate between two colors in gamma-corrected space.
///
/// The stored channel values are treated as gamma-compressed; they are
/// linearized, mixed, and compressed again so that gradients keep their
/// perceived brightness.
fn lerp_srgb(c0: Color, c1: Color, t: f32) -> Color {
    let channel = |a: f32, b: f32| -> f32 {
        let linear = a.powf(GAMMA) * (1.0 - t) + b.powf(GAMMA) * t;
        linear.powf(1.0 / GAMMA)
    };

    Color {
        r: channel(c0.r, c1.r),
        g: channel(c0.g, c1.g),
        b: channel(c0.b, c1.b),
        // TODO: blend toward c1.a here once downstream consumers agree on
        // how gradient alpha should fade.
        a: c0.a * (1.0 - t) + c0.a * t,
    }
}

/// Resolve `style` at a logical position.
pub(crate) fn sample(style: &Style, color_table: &[Color], position: Point) -> Color {
    match *style {
        Style::Flat { color_index } => table_color(color_table, color_index),
        Style::Linear {
            point_0,
            point_1,
            color_index_0,
            color_index_1,
        } => {
            let c0 = table_color(color_table, color_index_0);
            let c1 = table_color(color_table, color_index_1);

            let axis = point_1 - point_0;
            let offset = position - point_0;
            if axis.dot(offset) <= 0.0 {
                return c0;
            }
            if axis.dot(position - point_1) >= 0.0 {
                return c1;
            }

            let t = offset.project_onto_vector(axis).length() / axis.length();
            lerp_srgb(c0, c1, t)
        }
        Style::Radial {
            point_0,
            point_1,
            color_index_0,
            color_index_1,
        } => {
            let c0 = table_color(color_table, color_index_0);
            let c1 = table_color(color_table, color_index_1);

            let radius = (point_1 - point_0).length();
            if radius <= 0.0 {
                return c0;
            }

            let t = (position - point_0).length() / radius;
            lerp_srgb(c0, c1, t.min(1.0).max(0.0))
        }
    }
}
