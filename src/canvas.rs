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

//! RGB canvas backing every fixture image.
//!
//! A thin wrapper over [`image::RgbImage`]. Coordinates passed to the write
//! methods are signed so shapes may extend past any edge; every write is
//! clipped to the canvas.

use image::RgbImage;

use crate::Rgb;

/// How a fresh canvas is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Rgb),
    /// White canvas with black `tile`x`tile` squares where the tile
    /// row and column indices sum to an even number.
    Checkerboard { tile: u32 },
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgb(color.to_array())
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Rgb(r, g, b)
    }
}

/// A width x height grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Creates a canvas filled with a single color.
    #[must_use]
    pub fn new(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, color.into()),
        }
    }

    /// Creates a black and white checkerboard. The tile at the origin is
    /// black. A zero `tile` is treated as 1.
    ///
    /// Tiles are exact `tile`x`tile` squares; the legacy fixtures had black
    /// tiles bleeding one pixel into their white neighbours.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, tile: u32) -> Self {
        let tile = tile.max(1);
        let image = RgbImage::from_fn(width, height, |x, y| {
            if ((x / tile) + (y / tile)) % 2 == 0 {
                Rgb::BLACK.into()
            } else {
                Rgb::WHITE.into()
            }
        });
        Self { image }
    }

    #[must_use]
    pub fn from_fill(width: u32, height: u32, fill: Fill) -> Self {
        match fill {
            Fill::Solid(color) => Self::new(width, height, color),
            Fill::Checkerboard { tile } => Self::checkerboard(width, height, tile),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Raw row-major RGB bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[inline]
    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    #[inline]
    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    /// Returns true if `(x, y)` lies on the canvas.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        to_coords(x, y).is_some_and(|(x, y)| x < self.width() && y < self.height())
    }

    /// Reads a pixel, or `None` if the position is off the canvas.
    #[must_use]
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        let (x, y) = to_coords(x, y)?;
        self.image.get_pixel_checked(x, y).map(|px| Rgb::from(*px))
    }

    /// Writes a pixel if it lies on the canvas. Returns whether it was written.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgb) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.image.put_pixel(x as u32, y as u32, color.into());
        true
    }

    /// Fills the inclusive box `[x0, x1] x [y0, y1]`, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb) {
        let Some((x0, x1)) = clip_span(x0, x1, self.width()) else {
            return;
        };
        let Some((y0, y1)) = clip_span(y0, y1, self.height()) else {
            return;
        };
        let px = image::Rgb::from(color);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Fills the inclusive horizontal run `[x0, x1]` on row `y`, clipped.
    pub fn fill_span(&mut self, y: i64, x0: i64, x1: i64, color: Rgb) {
        self.fill_rect(x0, y, x1, y, color);
    }
}

impl From<RgbImage> for Canvas {
    fn from(image: RgbImage) -> Self {
        Self { image }
    }
}

#[inline]
fn to_coords(x: i64, y: i64) -> Option<(u32, u32)> {
    Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
}

/// Clamps the inclusive span `[lo, hi]` to `[0, limit)`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip_span(lo: i64, hi: i64, limit: u32) -> Option<(u32, u32)> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(limit) - 1);
    if lo > hi {
        return None;
    }
    Some((lo as u32, hi as u32))
}
