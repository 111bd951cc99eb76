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

//! PNG encoding for canvases.
//!
//! Canvases are written as 8-bit RGB, non-interlaced. The encoded stream is
//! collected in memory first so the file is written with a single call.

use bytes::buf::BufMut;
use bytes::{Bytes, BytesMut};
use std::io;
use std::path::Path;

use crate::canvas::Canvas;

/// PNG signature plus IHDR and IEND, the minimum overhead of any PNG.
const PNG_OVERHEAD: usize = 8 + 25 + 12;

/// Encodes a canvas as an 8-bit RGB PNG.
///
/// # Errors
///
/// Returns `InvalidInput` for a zero-sized canvas, or any error reported by
/// the PNG encoder.
pub fn encode_png(canvas: &Canvas, compression: png::Compression) -> io::Result<Bytes> {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("PNG: cannot encode empty {width}x{height} canvas"),
        ));
    }

    let mut buf = BytesMut::with_capacity(PNG_OVERHEAD + canvas.as_bytes().len() / 8);
    {
        let mut encoder = png::Encoder::new((&mut buf).writer(), width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(compression);

        let mut writer = encoder.write_header().map_err(io::Error::other)?;
        writer
            .write_image_data(canvas.as_bytes())
            .map_err(io::Error::other)?;
        writer.finish().map_err(io::Error::other)?;
    }

    log::trace!(
        "PNG: encoded {}x{} canvas ({} -> {} bytes)",
        width,
        height,
        canvas.as_bytes().len(),
        buf.len()
    );

    Ok(buf.freeze())
}

/// Encodes a canvas and writes it to `path`. Returns the number of bytes
/// written.
///
/// # Errors
///
/// Returns any encoding error from [`encode_png`] or I/O error from writing
/// the file. The parent directory must already exist.
pub fn write_png(canvas: &Canvas, path: &Path, compression: png::Compression) -> io::Result<usize> {
    let encoded = encode_png(canvas, compression)?;
    std::fs::write(path, &encoded)?;
    Ok(encoded.len())
}
