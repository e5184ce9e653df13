//! Scanline filling of flattened polylines.

use crate::format::{Color, Style};
use crate::geom::utils::{ceil_clamp, floor_clamp};
use crate::geom::{point, Point};
use crate::path::FillRule;
use crate::render::Painter;
use crate::style;
use crate::{Framebuffer, Rgba8};

/// Fill the area enclosed by a set of polylines.
///
/// Every pixel of the clipped bounding box is sampled at its center; for
/// each polyline a horizontal ray cast decides containment, and the fill
/// rule turns the number of containing polylines into coverage. Polylines
/// with fewer than two points contribute nothing.
pub(crate) fn fill_polylines<'l, F, I>(
    framebuffer: &mut F,
    painter: &Painter,
    color_table: &[Color],
    fill_style: &Style,
    rule: FillRule,
    polylines: I,
) where
    F: Framebuffer + ?Sized,
    I: Iterator<Item = &'l [Point]> + Clone,
{
    if framebuffer.width() == 0 || framebuffer.height() == 0 {
        return;
    }

    let mut min = point(f32::MAX, f32::MAX);
    let mut max = point(f32::MIN, f32::MIN);
    let mut any_points = false;
    for polyline in polylines.clone() {
        for p in polyline {
            min = min.min(*p);
            max = max.max(*p);
            any_points = true;
        }
    }
    if !any_points {
        return;
    }

    let x_min = floor_clamp(min.x * painter.scale_x, 0, framebuffer.width() as i32 - 1);
    let x_max = ceil_clamp(max.x * painter.scale_x, 0, framebuffer.width() as i32 - 1);
    let y_min = floor_clamp(min.y * painter.scale_y, 0, framebuffer.height() as i32 - 1);
    let y_max = ceil_clamp(max.y * painter.scale_y, 0, framebuffer.height() as i32 - 1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let position = point(
                (x as f32 + 0.5) / painter.scale_x,
                (y as f32 + 0.5) / painter.scale_y,
            );

            let mut containing_sub_paths = 0u32;
            for polyline in polylines.clone() {
                if polyline.len() < 2 {
                    continue;
                }
                if contains(polyline, position) {
                    containing_sub_paths += 1;
                }
            }

            if rule.is_in(containing_sub_paths) {
                let color = style::sample(fill_style, color_table, position);
                framebuffer.set_pixel(x as u32, y as u32, Rgba8::from_color(color));
            }
        }
    }
}

/// Horizontal ray cast: whether `position` is inside the polygon outlined
/// by `polyline` (with an implicit closing edge), by crossing parity.
fn contains(polyline: &[Point], position: Point) -> bool {
    let mut inside = false;
    let mut j = polyline.len() - 1;
    for i in 0..polyline.len() {
        let p0 = polyline[j];
        let p1 = polyline[i];
        if (p0.y > position.y) != (p1.y > position.y)
            && position.x
                < (p1.x - p0.x) * (position.y - p0.y) / (p1.y - p0.y) + p0.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_cast_on_a_square() {
        let square = [
            point(10.0, 10.0),
            point(30.0, 10.0),
            point(30.0, 30.0),
            point(10.0, 30.0),
        ];
        assert!(contains(&square, point(20.0, 20.0)));
        assert!(contains(&square, point(10.5, 29.5)));
        assert!(!contains(&square, point(9.5, 20.0)));
        assert!(!contains(&square, point(30.5, 20.0)));
        assert!(!contains(&square, point(20.0, 31.0)));
    }

    #[test]
    fn ray_cast_uses_the_implicit_closing_edge() {
        // An open "L" outline still closes back to the first point.
        let triangle = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
        assert!(contains(&triangle, point(7.0, 3.0)));
        assert!(!contains(&triangle, point(3.0, 7.0)));
    }
}
