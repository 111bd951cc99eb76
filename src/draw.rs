// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Filled drawing primitives.
//!
//! Shapes are defined on integer pixel coordinates and clipped to the canvas.
//!
//! - **Square**: inclusive box, so a square of `size` covers `size + 1` pixels
//!   per side.
//! - **Circle**: every pixel within `radius` of the center (distance measured
//!   between pixel indices).
//! - **Polygon**: even-odd scanline fill with vertices on pixel centers; the
//!   outline, including every vertex, is painted.

use crate::canvas::Canvas;
use crate::Rgb;

/// Draws a filled square with its top-left corner at `(x, y)`.
pub fn draw_square(canvas: &mut Canvas, x: i64, y: i64, size: i64, color: Rgb) {
    canvas.fill_rect(x, y, x + size, y + size, color);
}

/// Draws a filled circle centered at `(cx, cy)`. A negative radius draws nothing.
pub fn draw_circle(canvas: &mut Canvas, cx: i64, cy: i64, radius: i64, color: Rgb) {
    if radius < 0 {
        return;
    }
    let r2 = radius * radius;
    for dy in -radius..=radius {
        let half = (r2 - dy * dy).isqrt();
        canvas.fill_span(cy + dy, cx - half, cx + half, color);
    }
}

/// Draws an upward-pointing isosceles triangle: apex at `(x, y - size)`,
/// base from `(x - size, y + size)` to `(x + size, y + size)`.
pub fn draw_triangle(canvas: &mut Canvas, x: i64, y: i64, size: i64, color: Rgb) {
    let points = [(x, y - size), (x - size, y + size), (x + size, y + size)];
    fill_polygon(canvas, &points, color);
}

/// Fills a simple polygon given by its vertices in order. Fewer than three
/// vertices draws nothing.
///
/// Vertices are pixel centers and the outline is part of the fill: every
/// vertex pixel, every horizontal edge, and every pixel whose center lies on
/// a slanted edge is painted.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn fill_polygon(canvas: &mut Canvas, points: &[(i64, i64)], color: Rgb) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.1)
        .max()
        .unwrap_or(0)
        .min(i64::from(canvas.height()) - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for row in min_y..=max_y {
        crossings.clear();

        for (i, &(ax, ay)) in points.iter().enumerate() {
            let (bx, by) = points[(i + 1) % points.len()];
            if ay == row && by == row {
                canvas.fill_span(row, ax.min(bx), ax.max(bx), color);
            } else if (ay > row) != (by > row) {
                let t = (row - ay) as f64 / (by - ay) as f64;
                crossings.push(ax as f64 + t * (bx - ax) as f64);
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let first = pair[0].ceil() as i64;
            let last = pair[1].floor() as i64;
            if first <= last {
                canvas.fill_span(row, first, last, color);
            }
        }
    }

    for &(x, y) in points {
        canvas.put_pixel(x, y, color);
    }
}

/// Writes individual pixels, skipping positions off the canvas. Returns the
/// number of pixels written.
pub fn draw_pixels<I>(canvas: &mut Canvas, positions: I, color: Rgb) -> usize
where
    I: IntoIterator<Item = (i64, i64)>,
{
    positions
        .into_iter()
        .filter(|&(x, y)| canvas.put_pixel(x, y, color))
        .count()
}
