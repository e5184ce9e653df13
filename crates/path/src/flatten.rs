//! Flattening of paths into polylines.
//!
//! The flattener walks each sub-path with a cursor, expanding curved
//! commands into fixed-subdivision polylines. Its output lives in
//! fixed-capacity scratch buffers so that rendering never allocates;
//! overly complex paths are rejected instead of growing the buffers.

use arrayvec::ArrayVec;

use crate::geom::arc::{for_each_circle_arc_point, for_each_ellipse_arc_point};
use crate::geom::utils::near;
use crate::geom::{point, CubicBezierSegment, Point, QuadraticBezierSegment};
use crate::{Path, PathCommand};

/// Number of subdivisions used to approximate a bézier curve.
pub const BEZIER_DIVS: u32 = 16;

/// Capacity of the flattened point buffer.
pub const MAX_POINTS: usize = 4096;

/// Capacity of the sub-path index buffer.
pub const MAX_SUB_PATHS: usize = 512;

/// Consecutive points closer than this on both axes collapse into one.
///
/// Collapsing removes the degenerate edges that would otherwise destabilize
/// the scanline filler.
pub const POINT_MERGE_DELTA: f32 = 0.25;

/// The flattener's error enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlattenError {
    /// The path needs more scratch space than the fixed buffers provide.
    ScratchOverflow,
    /// The path contains a NaN or infinite coordinate.
    NonFinitePosition,
}

impl core::fmt::Display for FlattenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlattenError::ScratchOverflow => {
                write!(f, "Path exceeds the flattener's scratch capacity")
            }
            FlattenError::NonFinitePosition => {
                write!(f, "Position is not a finite number")
            }
        }
    }
}

impl std::error::Error for FlattenError {}

/// Offset and length of one polyline in the point buffer.
#[derive(Copy, Clone, Debug)]
struct SubPath {
    offset: u32,
    len: u32,
}

/// The flattened form of a path: one polyline per sub-path, stored in
/// fixed-capacity buffers whose lifetime is bounded by a single render
/// call.
pub struct FlattenedPath {
    points: ArrayVec<Point, MAX_POINTS>,
    sub_paths: ArrayVec<SubPath, MAX_SUB_PATHS>,
}

impl FlattenedPath {
    /// Iterate over the polylines, one per sub-path of the source path.
    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> + Clone {
        self.sub_paths.iter().map(move |sub| {
            &self.points[sub.offset as usize..(sub.offset + sub.len) as usize]
        })
    }
}

struct Flattener {
    points: ArrayVec<Point, MAX_POINTS>,
    sub_paths: ArrayVec<SubPath, MAX_SUB_PATHS>,
    sub_path_start: usize,
}

impl Flattener {
    fn new() -> Self {
        Flattener {
            points: ArrayVec::new(),
            sub_paths: ArrayVec::new(),
            sub_path_start: 0,
        }
    }

    /// Append a point to the current polyline, unless it is merged into its
    /// predecessor by the pixel-delta filter.
    fn push(&mut self, position: Point) -> Result<(), FlattenError> {
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(FlattenError::NonFinitePosition);
        }
        if self.points.len() > self.sub_path_start {
            let last = self.points[self.points.len() - 1];
            if near(last, position, POINT_MERGE_DELTA) {
                return Ok(());
            }
        }
        self.points
            .try_push(position)
            .map_err(|_| FlattenError::ScratchOverflow)
    }

    fn end_sub_path(&mut self) -> Result<(), FlattenError> {
        let len = self.points.len() - self.sub_path_start;
        self.sub_paths
            .try_push(SubPath {
                offset: self.sub_path_start as u32,
                len: len as u32,
            })
            .map_err(|_| FlattenError::ScratchOverflow)?;
        self.sub_path_start = self.points.len();

        Ok(())
    }
}

/// Flatten `path` into one polyline per sub-path.
///
/// Curved commands are expanded with fixed subdivision counts
/// ([`BEZIER_DIVS`], [`geom::arc::CIRCLE_DIVS`](crate::geom::arc::CIRCLE_DIVS)),
/// so flattening the same path always produces the same point sequence.
pub fn flatten(path: &Path) -> Result<FlattenedPath, FlattenError> {
    let mut flattener = Flattener::new();

    for segment in &path.segments {
        let mut cursor = segment.start;
        flattener.push(cursor)?;

        for command in &segment.commands {
            match *command {
                PathCommand::Line { to } => {
                    flattener.push(to)?;
                    cursor = to;
                }
                PathCommand::Horizontal { x } => {
                    let to = point(x, cursor.y);
                    flattener.push(to)?;
                    cursor = to;
                }
                PathCommand::Vertical { y } => {
                    let to = point(cursor.x, y);
                    flattener.push(to)?;
                    cursor = to;
                }
                PathCommand::CubicBezier { ctrl1, ctrl2, to } => {
                    let curve = CubicBezierSegment {
                        from: cursor,
                        ctrl1,
                        ctrl2,
                        to,
                    };
                    for i in 1..BEZIER_DIVS {
                        flattener.push(curve.sample(i as f32 / BEZIER_DIVS as f32))?;
                    }
                    flattener.push(to)?;
                    cursor = to;
                }
                PathCommand::QuadraticBezier { ctrl, to } => {
                    let curve = QuadraticBezierSegment {
                        from: cursor,
                        ctrl,
                        to,
                    };
                    for i in 1..BEZIER_DIVS {
                        flattener.push(curve.sample(i as f32 / BEZIER_DIVS as f32))?;
                    }
                    flattener.push(to)?;
                    cursor = to;
                }
                PathCommand::ArcCircle { radius, flags, to } => {
                    let mut result = Ok(());
                    for_each_circle_arc_point(cursor, to, radius, flags, &mut |p| {
                        if result.is_ok() {
                            result = flattener.push(p);
                        }
                    });
                    result?;
                    cursor = to;
                }
                PathCommand::ArcEllipse {
                    radius_x,
                    radius_y,
                    rotation,
                    flags,
                    to,
                } => {
                    let mut result = Ok(());
                    for_each_ellipse_arc_point(
                        cursor,
                        to,
                        radius_x,
                        radius_y,
                        rotation,
                        flags,
                        &mut |p| {
                            if result.is_ok() {
                                result = flattener.push(p);
                            }
                        },
                    );
                    result?;
                    cursor = to;
                }
                PathCommand::Close => {
                    flattener.push(segment.start)?;
                    cursor = segment.start;
                }
            }
        }

        flattener.end_sub_path()?;
    }

    Ok(FlattenedPath {
        points: flattener.points,
        sub_paths: flattener.sub_paths,
    })
}
