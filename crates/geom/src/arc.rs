//! Circular and elliptical arcs in endpoint parameterization.
//!
//! TinyVG encodes arcs the way SVG does: start point, end point, radii and
//! two flags picking one of the up to four candidate arcs. Rendering needs
//! the center form, so the functions here recover the center and emit a
//! fixed-subdivision polyline approximation.

use arrayvec::ArrayVec;

use crate::utils::near;
use crate::{vector, Angle, Point, Rotation, Transform};

use std::f32::consts::PI;

/// Number of subdivisions used to approximate a full arc sweep.
///
/// Tunable in principle, but encoders size their tolerances around this
/// value, so it has to stay in sync with them.
pub const CIRCLE_DIVS: usize = 100;

/// Chords shorter than this collapse the arc to nothing.
const MIN_CHORD: f32 = 1e-5;

/// Distance threshold for merging consecutive points of the intermediate
/// circle approximation.
const POINT_MERGE_DELTA: f32 = 0.25;

/// Selects one of the four arcs connecting two endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the two possible sweeps, take the longer one.
    pub large_arc: bool,
    /// Of the two possible turn directions, turn left.
    pub sweep: bool,
}

/// Emit the polyline approximation of a circular arc from `from` to `to`.
///
/// Produces `CIRCLE_DIVS - 1` intermediate points followed by `to` itself.
/// A radius too small for the chord is silently grown until the chord fits
/// as a diameter. A chord shorter than `MIN_CHORD` emits nothing.
pub fn for_each_circle_arc_point<F>(from: Point, to: Point, radius: f32, flags: ArcFlags, cb: &mut F)
where
    F: FnMut(Point),
{
    if from.distance_to(to) < MIN_CHORD {
        return;
    }

    let delta = (to - from) * 0.5;
    let midpoint = from + delta;
    let turn_left = flags.sweep;

    // The center sits on the perpendicular of the chord. Which side follows
    // from the turn direction and from whether we take the long way around.
    let left_side = (turn_left && flags.large_arc) || (!turn_left && !flags.large_arc);
    let radius_vec = if left_side {
        vector(delta.y, -delta.x)
    } else {
        vector(-delta.y, delta.x)
    };

    let half_chord = delta.length();
    let r = radius.abs().max(half_chord);

    let t = (r * r / radius_vec.square_length() - 1.0).max(0.0).sqrt();
    let center = midpoint + radius_vec * t;

    let mut sweep = 2.0 * (half_chord / r).min(1.0).max(-1.0).asin();
    if flags.large_arc {
        sweep = 2.0 * PI - sweep;
    }

    let step = sweep / CIRCLE_DIVS as f32;
    let angle_step = if turn_left { step } else { -step };

    let start_vec = from - center;
    for i in 1..CIRCLE_DIVS {
        let rotation = Rotation::new(Angle::radians(angle_step * i as f32));
        cb(center + rotation.transform_vector(start_vec));
    }

    cb(to);
}

/// Emit the polyline approximation of an elliptical arc from `from` to `to`.
///
/// `rotation` is the angle of the ellipse's x axis in degrees. The ellipse
/// is mapped onto a circle by undoing the rotation and scaling one axis,
/// the circular arc is approximated in that space, and the points are
/// mapped back. Radii too small for the chord are scaled up uniformly,
/// and a degenerate radius degrades the arc to a straight line.
pub fn for_each_ellipse_arc_point<F>(
    from: Point,
    to: Point,
    radius_x: f32,
    radius_y: f32,
    rotation: f32,
    flags: ArcFlags,
    cb: &mut F,
) where
    F: FnMut(Point),
{
    let rx = radius_x.abs();
    let ry = radius_y.abs();
    if rx < 1e-6 || ry < 1e-6 {
        cb(to);
        return;
    }

    let radius_min = (to - from).length() * 0.5;
    let radius_lim = (rx * rx + ry * ry).sqrt();
    let up_scale = (radius_min / radius_lim).max(1.0);
    let ratio = rx / ry;
    let theta = Angle::degrees(rotation);

    let to_circle = Transform::rotation(-theta)
        .then(&Transform::scale(1.0, ratio))
        .then(&Transform::scale(1.0 / up_scale, 1.0 / up_scale));
    let from_circle = Transform::scale(up_scale, up_scale)
        .then(&Transform::scale(1.0, 1.0 / ratio))
        .then(&Transform::rotation(theta));

    let mut circle_points: ArrayVec<Point, CIRCLE_DIVS> = ArrayVec::new();
    for_each_circle_arc_point(
        to_circle.transform_point(from),
        to_circle.transform_point(to),
        rx * up_scale,
        flags,
        &mut |p| {
            if let Some(last) = circle_points.last() {
                if near(*last, p, POINT_MERGE_DELTA) {
                    return;
                }
            }
            let _ = circle_points.try_push(p);
        },
    );

    for p in &circle_points {
        cb(from_circle.transform_point(*p));
    }
}
