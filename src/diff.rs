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

//! Diff image composition.
//!
//! A diff image is sized to the element-wise maximum of the expected and
//! actual dimensions and built in three layers, each overwriting the last:
//!
//! 1. The expected image pasted at the origin over a black background.
//! 2. The actual image pasted at the origin, only when its size differs from
//!    the diff size. Where the two overlap the actual pixels win.
//! 3. The highlight color at every supplied position inside the diff bounds.

use image::imageops;

use crate::canvas::Canvas;
use crate::Rgb;

/// Set of positions highlighted in a diff image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// Half-open rectangle `[x, x + width) x [y, y + height)`.
    Rect {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    /// Explicit positions.
    Points(Vec<(i64, i64)>),
    /// Every position with `x >= width` or `y >= height`.
    Outside { width: i64, height: i64 },
    /// Every position.
    Full,
}

impl Region {
    /// Expands the region to positions for a diff of `width` x `height`.
    /// `Rect` and `Points` are returned as given; `Outside` and `Full` are
    /// bounded by the diff size.
    #[must_use]
    pub fn positions(&self, width: u32, height: u32) -> Vec<(i64, i64)> {
        let (w, h) = (i64::from(width), i64::from(height));
        match self {
            Region::Rect {
                x,
                y,
                width,
                height,
            } => rect_positions(*x, *y, *width, *height),
            Region::Points(points) => points.clone(),
            Region::Outside {
                width: inner_w,
                height: inner_h,
            } => rect_positions(0, 0, w, h)
                .into_iter()
                .filter(|&(x, y)| x >= *inner_w || y >= *inner_h)
                .collect(),
            Region::Full => rect_positions(0, 0, w, h),
        }
    }
}

/// Row-major positions of the half-open rectangle at `(x, y)`. Non-positive
/// sizes yield nothing.
#[must_use]
pub fn rect_positions(x: i64, y: i64, width: i64, height: i64) -> Vec<(i64, i64)> {
    if width <= 0 || height <= 0 {
        return Vec::new();
    }
    let mut positions = Vec::with_capacity(capacity_hint(width, height));
    for py in y..y.saturating_add(height) {
        for px in x..x.saturating_add(width) {
            positions.push((px, py));
        }
    }
    positions
}

/// Largest up-front reservation for [`rect_positions`]; bigger regions grow.
const MAX_PREALLOCATED: usize = 1 << 24;

fn capacity_hint(width: i64, height: i64) -> usize {
    usize::try_from(width.saturating_mul(height))
        .unwrap_or(0)
        .min(MAX_PREALLOCATED)
}

/// Builds a diff image from `expected` and `actual`, overwriting every
/// position in `positions` that falls inside the diff with `highlight`.
pub fn compose_diff<I>(expected: &Canvas, actual: &Canvas, positions: I, highlight: Rgb) -> Canvas
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let width = expected.width().max(actual.width());
    let height = expected.height().max(actual.height());

    let mut diff = Canvas::new(width, height, Rgb::BLACK);
    imageops::replace(diff.image_mut(), expected.image(), 0, 0);
    if actual.dimensions() != (width, height) {
        imageops::replace(diff.image_mut(), actual.image(), 0, 0);
    }

    for (x, y) in positions {
        diff.put_pixel(x, y, highlight);
    }
    diff
}
