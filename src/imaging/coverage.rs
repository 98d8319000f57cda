// src/imaging/coverage.rs

//! Outline flattening and supersampled coverage rasterization.
//!
//! Glyph outlines are flattened into straight edges in canvas space (y grows
//! downward), then each pixel is sampled on a `SUPERSAMPLE` x `SUPERSAMPLE`
//! grid with the non-zero winding rule. Coverage is the fraction of samples
//! inside the outline.

use super::{blend_pixel, RgbCanvas};
use log::trace;
use ttf_parser::OutlineBuilder;

pub type Point = [f32; 2];

/// Samples per pixel along each axis.
pub const SUPERSAMPLE: usize = 4;

/// Line segments used to approximate one quadratic curve.
const QUAD_STEPS: usize = 8;

/// Recursion depth for cubic subdivision (2^depth segments).
const CUBIC_DEPTH: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub p0: Point,
    pub p1: Point,
}

impl Edge {
    /// Where a horizontal line at `y` crosses this edge, with the edge's
    /// vertical direction (+1 downward, -1 upward).
    ///
    /// The range is half-open in `y` so a vertex shared by two edges is
    /// counted exactly once. Horizontal edges never cross.
    pub fn crossing(&self, y: f32) -> Option<(f32, i32)> {
        let [x0, y0] = self.p0;
        let [x1, y1] = self.p1;
        if (y0 <= y && y < y1) || (y1 <= y && y < y0) {
            let t = (y - y0) / (y1 - y0);
            let x = x0 + t * (x1 - x0);
            Some((x, if y0 < y1 { 1 } else { -1 }))
        } else {
            None
        }
    }
}

fn lerp(p0: Point, p1: Point, t: f32) -> Point {
    [
        p0[0] * (1.0 - t) + p1[0] * t,
        p0[1] * (1.0 - t) + p1[1] * t,
    ]
}

/// Collects a glyph outline as canvas-space edges.
///
/// Font units are scaled by `scale` and placed with the glyph origin (pen
/// position on the baseline) at `origin`.
pub struct EdgeBuilder {
    edges: Vec<Edge>,
    scale: f32,
    origin: Point,
    current: Point,
    start: Point,
}

impl EdgeBuilder {
    pub fn new(scale: f32, origin: Point) -> Self {
        Self {
            edges: Vec::with_capacity(64),
            scale,
            origin,
            current: [0.0, 0.0],
            start: [0.0, 0.0],
        }
    }

    pub fn finish(self) -> Vec<Edge> {
        self.edges
    }

    fn map(&self, x: f32, y: f32) -> Point {
        [
            self.origin[0] + x * self.scale,
            self.origin[1] - y * self.scale,
        ]
    }

    fn push_line(&mut self, p1: Point) {
        if p1 != self.current {
            self.edges.push(Edge {
                p0: self.current,
                p1,
            });
        }
        self.current = p1;
    }

    fn subdivide_cubic(&mut self, p0: Point, p1: Point, p2: Point, p3: Point, depth: u32) {
        if depth >= CUBIC_DEPTH {
            self.push_line(p3);
            return;
        }

        let p01 = lerp(p0, p1, 0.5);
        let p12 = lerp(p1, p2, 0.5);
        let p23 = lerp(p2, p3, 0.5);

        let p012 = lerp(p01, p12, 0.5);
        let p123 = lerp(p12, p23, 0.5);

        let p0123 = lerp(p012, p123, 0.5);

        self.subdivide_cubic(p0, p01, p012, p0123, depth + 1);
        self.subdivide_cubic(p0123, p123, p23, p3, depth + 1);
    }
}

impl OutlineBuilder for EdgeBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.current = self.map(x, y);
        self.start = self.current;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p1 = self.map(x, y);
        self.push_line(p1);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = self.current;
        let p1 = self.map(x1, y1);
        let p2 = self.map(x, y);
        for step in 1..=QUAD_STEPS {
            let t = step as f32 / QUAD_STEPS as f32;
            let point = lerp(lerp(p0, p1, t), lerp(p1, p2, t), t);
            self.push_line(point);
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = self.current;
        let p1 = self.map(x1, y1);
        let p2 = self.map(x2, y2);
        let p3 = self.map(x, y);
        self.subdivide_cubic(p0, p1, p2, p3, 0);
    }

    fn close(&mut self) {
        let start = self.start;
        self.push_line(start);
    }
}

/// Fills the area enclosed by `edges` on `canvas` in `color`.
pub fn fill_edges(edges: &[Edge], canvas: &mut RgbCanvas, color: [u8; 3]) {
    if edges.is_empty() {
        return;
    }

    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for edge in edges {
        for [x, y] in [edge.p0, edge.p1] {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    let x_start = (min_x.floor() as i64).max(0);
    let x_end = (max_x.ceil() as i64).min(canvas.width() as i64);
    let y_start = (min_y.floor() as i64).max(0);
    let y_end = (max_y.ceil() as i64).min(canvas.height() as i64);
    if x_start >= x_end || y_start >= y_end {
        trace!("Outline lies entirely off canvas");
        return;
    }

    let span = (x_end - x_start) as usize;
    let step = 1.0 / SUPERSAMPLE as f32;
    let total = (SUPERSAMPLE * SUPERSAMPLE) as f32;
    let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(16);
    let mut hits = vec![0u32; span];

    for py in y_start..y_end {
        hits.fill(0);

        for sy in 0..SUPERSAMPLE {
            let y = py as f32 + (sy as f32 + 0.5) * step;
            crossings.clear();
            crossings.extend(edges.iter().filter_map(|e| e.crossing(y)));
            if crossings.is_empty() {
                continue;
            }

            for (i, hit) in hits.iter_mut().enumerate() {
                let px = x_start as f32 + i as f32;
                for sx in 0..SUPERSAMPLE {
                    let x = px + (sx as f32 + 0.5) * step;
                    let winding: i32 = crossings
                        .iter()
                        .filter(|(cx, _)| x < *cx)
                        .map(|(_, dir)| dir)
                        .sum();
                    if winding != 0 {
                        *hit += 1;
                    }
                }
            }
        }

        for (i, &hit) in hits.iter().enumerate() {
            if hit > 0 {
                blend_pixel(canvas, x_start + i as i64, py, color, hit as f32 / total);
            }
        }
    }
}
