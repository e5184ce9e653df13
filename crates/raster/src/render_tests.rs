//! End-to-end rasterization tests over a small framebuffer.

use crate::format::{Color, DrawCommand, Header, Style};
use crate::geom::{point, rect, LineSegment};
use crate::path::{Path, PathCommand, PathSegment};
use crate::{render, Bitmap, Framebuffer, RenderError, Rgba8};

const BLACK: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
const WHITE: Rgba8 = Rgba8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
const RED: Rgba8 = Rgba8 {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};
const UNTOUCHED: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

fn color_table() -> Vec<Color> {
    vec![
        Color::new(0.0, 0.0, 0.0, 1.0),
        Color::new(1.0, 1.0, 1.0, 1.0),
        Color::new(1.0, 0.0, 0.0, 1.0),
    ]
}

const HEADER: Header = Header {
    width: 100,
    height: 100,
};

fn render_one(command: &DrawCommand) -> Bitmap {
    let mut bitmap = Bitmap::new(100, 100);
    render(&mut bitmap, &HEADER, &color_table(), command).unwrap();
    bitmap
}

fn flat(color_index: usize) -> Style {
    Style::Flat { color_index }
}

fn closed_square(min: f32, max: f32) -> PathSegment {
    PathSegment {
        start: point(min, min),
        commands: vec![
            PathCommand::Horizontal { x: max },
            PathCommand::Vertical { y: max },
            PathCommand::Horizontal { x: min },
            PathCommand::Close,
        ],
    }
}

/// A framebuffer that panics on any out-of-bounds write.
struct BoundsChecked {
    inner: Bitmap,
}

impl Framebuffer for BoundsChecked {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        assert!(
            x < self.inner.width() && y < self.inner.height(),
            "write outside the framebuffer: ({x}, {y})"
        );
        self.inner.set_pixel(x, y, color);
    }
}

#[test]
fn flat_square() {
    let bitmap = render_one(&DrawCommand::FillRectangles {
        style: flat(1),
        rectangles: vec![rect(10.0, 10.0, 20.0, 20.0)],
    });

    for y in 0..100 {
        for x in 0..100 {
            let expected = if (10..30).contains(&x) && (10..30).contains(&y) {
                WHITE
            } else {
                UNTOUCHED
            };
            assert_eq!(bitmap.get(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn single_horizontal_line() {
    let bitmap = render_one(&DrawCommand::DrawLines {
        style: flat(0),
        line_width: 1.0,
        lines: vec![LineSegment {
            from: point(5.0, 50.0),
            to: point(95.0, 50.0),
        }],
    });

    for x in 5..=94 {
        assert_eq!(bitmap.get(x, 50), BLACK, "pixel ({x}, 50)");
    }
    // The last column's center (95.5, 50.5) lies past the end cap.
    assert_eq!(bitmap.get(95, 50), UNTOUCHED);
    // No writes outside the expanded bounding box of the capsule.
    for y in 0..48 {
        for x in 0..100 {
            assert_eq!(bitmap.get(x, y), UNTOUCHED);
        }
    }
    for y in 53..100 {
        for x in 0..100 {
            assert_eq!(bitmap.get(x, y), UNTOUCHED);
        }
    }
    assert_eq!(bitmap.get(2, 50), UNTOUCHED);
    assert_eq!(bitmap.get(98, 50), UNTOUCHED);
}

#[test]
fn triangle_fills_with_non_zero_parity() {
    let bitmap = render_one(&DrawCommand::FillPolygon {
        style: flat(2),
        vertices: vec![point(10.0, 10.0), point(90.0, 10.0), point(50.0, 90.0)],
    });

    assert_eq!(bitmap.get(50, 50), RED);
    assert_eq!(bitmap.get(50, 11), RED);
    assert_eq!(bitmap.get(5, 5), UNTOUCHED);
    assert_eq!(bitmap.get(50, 95), UNTOUCHED);
    assert_eq!(bitmap.get(12, 80), UNTOUCHED);
    assert_eq!(bitmap.get(88, 80), UNTOUCHED);
}

#[test]
fn annulus_uses_the_even_odd_rule() {
    let bitmap = render_one(&DrawCommand::FillPath {
        style: flat(1),
        path: Path {
            segments: vec![closed_square(10.0, 90.0), closed_square(30.0, 70.0)],
        },
    });

    // Between the squares.
    assert_eq!(bitmap.get(20, 50), WHITE);
    assert_eq!(bitmap.get(50, 20), WHITE);
    assert_eq!(bitmap.get(79, 79), WHITE);
    // The hole and the outside stay untouched.
    assert_eq!(bitmap.get(50, 50), UNTOUCHED);
    assert_eq!(bitmap.get(35, 65), UNTOUCHED);
    assert_eq!(bitmap.get(5, 50), UNTOUCHED);
    assert_eq!(bitmap.get(95, 95), UNTOUCHED);
}

#[test]
fn the_same_annulus_outline_fills_solid() {
    // outline_fill_path uses per-sub-path parity with the non-zero rule,
    // so the inner square does not punch a hole.
    let bitmap = render_one(&DrawCommand::OutlineFillPath {
        fill_style: flat(1),
        line_style: flat(0),
        line_width: 1.0,
        path: Path {
            segments: vec![closed_square(10.0, 90.0), closed_square(30.0, 70.0)],
        },
    });

    assert_eq!(bitmap.get(20, 50), WHITE);
    assert_eq!(bitmap.get(50, 50), WHITE);
    // The inner square's outline is stroked on top of the fill.
    assert_eq!(bitmap.get(30, 50), BLACK);
    assert_eq!(bitmap.get(5, 50), UNTOUCHED);
}

#[test]
fn quarter_arc_fills_the_circular_sector() {
    let bitmap = render_one(&DrawCommand::FillPath {
        style: flat(0),
        path: Path {
            segments: vec![PathSegment {
                start: point(50.0, 10.0),
                commands: vec![
                    PathCommand::ArcCircle {
                        radius: 40.0,
                        flags: crate::geom::ArcFlags {
                            large_arc: false,
                            sweep: true,
                        },
                        to: point(90.0, 50.0),
                    },
                    PathCommand::Close,
                ],
            }],
        },
    });

    // Between the chord and the arc.
    assert_eq!(bitmap.get(80, 30), BLACK);
    assert_eq!(bitmap.get(70, 20), BLACK);
    // The other side of the chord.
    assert_eq!(bitmap.get(60, 40), UNTOUCHED);
    assert_eq!(bitmap.get(50, 50), UNTOUCHED);
    // Outside the circle.
    assert_eq!(bitmap.get(88, 12), UNTOUCHED);
}

#[test]
fn linear_gradient_columns() {
    let bitmap = render_one(&DrawCommand::FillRectangles {
        style: Style::Linear {
            point_0: point(0.0, 0.0),
            point_1: point(100.0, 0.0),
            color_index_0: 0,
            color_index_1: 1,
        },
        rectangles: vec![rect(0.0, 0.0, 100.0, 100.0)],
    });

    // Column x samples the gradient at (x + 0.5) / 100 through the gamma
    // curve.
    for x in [0u32, 25, 50, 75, 99] {
        let t = (x as f32 + 0.5) / 100.0;
        let expected = (t.powf(1.0 / 2.2) * 255.0).round() as u8;
        let pixel = bitmap.get(x, 40);
        assert_eq!(pixel.r, expected, "column {x}");
        assert_eq!(pixel.g, expected);
        assert_eq!(pixel.b, expected);
        assert_eq!(pixel.a, 255);
    }

    // Brightness never decreases from one column to the next.
    for x in 1..100 {
        assert!(bitmap.get(x, 70).r >= bitmap.get(x - 1, 70).r);
    }
    assert!(bitmap.get(0, 50).r < 30);
    assert!(bitmap.get(99, 50).r > 250);
}

#[test]
fn rectangles_and_polygons_fill_the_same_pixels() {
    let rectangles = render_one(&DrawCommand::FillRectangles {
        style: flat(2),
        rectangles: vec![rect(12.5, 20.0, 40.0, 17.5)],
    });
    let polygon = render_one(&DrawCommand::FillPolygon {
        style: flat(2),
        vertices: vec![
            point(12.5, 20.0),
            point(52.5, 20.0),
            point(52.5, 37.5),
            point(12.5, 37.5),
        ],
    });
    assert_eq!(rectangles, polygon);
}

#[test]
fn stroke_is_symmetric_under_endpoint_swap() {
    let line = LineSegment {
        from: point(20.0, 30.0),
        to: point(80.0, 60.0),
    };
    let forward = render_one(&DrawCommand::DrawLines {
        style: flat(0),
        line_width: 5.0,
        lines: vec![line],
    });
    let backward = render_one(&DrawCommand::DrawLines {
        style: flat(0),
        line_width: 5.0,
        lines: vec![line.flip()],
    });
    assert_eq!(forward, backward);
}

#[test]
fn line_strip_and_loop_differ_by_the_closing_edge() {
    let vertices = vec![point(20.0, 20.0), point(80.0, 20.0), point(80.0, 80.0)];
    let strip = render_one(&DrawCommand::DrawLineStrip {
        style: flat(0),
        line_width: 2.0,
        vertices: vertices.clone(),
    });
    let looped = render_one(&DrawCommand::DrawLineLoop {
        style: flat(0),
        line_width: 2.0,
        vertices,
    });

    // A point on the closing diagonal.
    assert_eq!(strip.get(50, 50), UNTOUCHED);
    assert_eq!(looped.get(50, 50), BLACK);
    // Both stroke the two shared edges.
    assert_eq!(strip.get(50, 20), BLACK);
    assert_eq!(looped.get(50, 20), BLACK);
}

#[test]
fn outline_fill_polygon_closes_the_outline() {
    let bitmap = render_one(&DrawCommand::OutlineFillPolygon {
        fill_style: flat(2),
        line_style: flat(0),
        line_width: 2.0,
        vertices: vec![point(20.0, 20.0), point(80.0, 20.0), point(80.0, 80.0)],
    });

    assert_eq!(bitmap.get(60, 40), RED);
    // The closing edge from the last vertex back to the first is stroked.
    assert_eq!(bitmap.get(50, 50), BLACK);
    assert_eq!(bitmap.get(50, 20), BLACK);
    assert_eq!(bitmap.get(80, 50), BLACK);
    assert_eq!(bitmap.get(30, 60), UNTOUCHED);
}

#[test]
fn outline_fill_rectangles_strokes_all_four_edges() {
    let bitmap = render_one(&DrawCommand::OutlineFillRectangles {
        fill_style: flat(1),
        line_style: flat(2),
        line_width: 2.0,
        rectangles: vec![rect(20.0, 20.0, 60.0, 60.0)],
    });

    assert_eq!(bitmap.get(50, 50), WHITE);
    assert_eq!(bitmap.get(50, 20), RED);
    assert_eq!(bitmap.get(50, 80), RED);
    assert_eq!(bitmap.get(20, 50), RED);
    assert_eq!(bitmap.get(80, 50), RED);
    assert_eq!(bitmap.get(10, 10), UNTOUCHED);
}

#[test]
fn draw_line_path_strokes_the_flattened_polyline() {
    let bitmap = render_one(&DrawCommand::DrawLinePath {
        style: flat(0),
        line_width: 2.0,
        path: Path {
            segments: vec![PathSegment {
                start: point(10.0, 80.0),
                commands: vec![PathCommand::QuadraticBezier {
                    ctrl: point(50.0, -60.0),
                    to: point(90.0, 80.0),
                }],
            }],
        },
    });

    // The curve's apex passes through (50, 10).
    assert_eq!(bitmap.get(50, 10), BLACK);
    assert_eq!(bitmap.get(10, 80), BLACK);
    // The interior of the parabola is not filled.
    assert_eq!(bitmap.get(50, 60), UNTOUCHED);
}

#[test]
fn every_write_stays_inside_the_framebuffer() {
    let commands = vec![
        DrawCommand::FillRectangles {
            style: flat(1),
            rectangles: vec![rect(-50.0, -50.0, 300.0, 300.0)],
        },
        DrawCommand::FillPolygon {
            style: flat(2),
            vertices: vec![point(-40.0, 50.0), point(140.0, -20.0), point(50.0, 160.0)],
        },
        DrawCommand::DrawLines {
            style: flat(0),
            line_width: 30.0,
            lines: vec![LineSegment {
                from: point(-20.0, -20.0),
                to: point(120.0, 120.0),
            }],
        },
    ];

    let mut framebuffer = BoundsChecked {
        inner: Bitmap::new(64, 48),
    };
    for command in &commands {
        render(&mut framebuffer, &HEADER, &color_table(), command).unwrap();
    }
    assert_eq!(framebuffer.inner.get(32, 24), BLACK);
}

#[test]
fn a_path_too_complex_to_flatten_reports_the_overflow() {
    let commands: Vec<PathCommand> = (0..5000)
        .map(|i| PathCommand::Line {
            to: point((i % 100) as f32, (i / 100) as f32 * 2.0),
        })
        .collect();
    let path = Path {
        segments: vec![PathSegment {
            start: point(0.0, 0.0),
            commands,
        }],
    };

    let mut bitmap = Bitmap::new(100, 100);
    let result = render(
        &mut bitmap,
        &HEADER,
        &color_table(),
        &DrawCommand::FillPath {
            style: flat(1),
            path,
        },
    );
    assert_eq!(result, Err(RenderError::ScratchOverflow));
}

#[test]
fn rendering_scales_with_the_framebuffer_size() {
    // The same logical square covers the same fraction of a half-size
    // framebuffer.
    let command = DrawCommand::FillRectangles {
        style: flat(1),
        rectangles: vec![rect(10.0, 10.0, 20.0, 20.0)],
    };
    let mut small = Bitmap::new(50, 50);
    render(&mut small, &HEADER, &color_table(), &command).unwrap();

    assert_eq!(small.get(7, 7), WHITE);
    assert_eq!(small.get(4, 7), UNTOUCHED);
    assert_eq!(small.get(15, 7), UNTOUCHED);
}
