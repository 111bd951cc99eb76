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

//! Fixture generator for two-up image comparison tests.
//!
//! Every scenario produces three PNG files: an *expected* image, an *actual*
//! image carrying one injected discrepancy, and a *diff* image that marks the
//! discrepancy in a highlight color.
//!
//! # Layout
//!
//! - [`canvas`]: RGB pixel grid with clipped writes
//! - [`draw`]: filled shapes and single-pixel writes
//! - [`diff`]: diff composition and highlight regions
//! - [`png_out`]: PNG encoding and file output
//! - [`scenario`]: the fixed scenario catalog and the generation loop
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixtures
//! ```

use std::path::PathBuf;

pub mod canvas;
pub mod diff;
pub mod draw;
pub mod png_out;
pub mod scenario;

pub use canvas::{Canvas, Fill};
pub use diff::{compose_diff, Region};
pub use scenario::{catalog, generate_all, GenerationReport, Scenario};

/// Directory the binary writes fixtures to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "tests/fixtures/two-up";

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const MAGENTA: Rgb = Rgb(255, 0, 255);
    pub const STEEL_BLUE: Rgb = Rgb(70, 130, 180);
    pub const FOREST_GREEN: Rgb = Rgb(34, 139, 34);
    pub const DARK_ORANGE: Rgb = Rgb(255, 140, 0);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const TEAL: Rgb = Rgb(0, 128, 128);
    pub const DARK_GRAY: Rgb = Rgb(169, 169, 169);
    /// Default diff highlight.
    pub const HOT_PINK: Rgb = Rgb(255, 105, 180);

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// Settings for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root directory; each scenario gets its own subdirectory.
    pub output_dir: PathBuf,
    pub compression: png::Compression,
    /// Color written over every highlighted diff position.
    pub highlight: Rgb,
}

impl GeneratorConfig {
    /// Default settings rooted at `output_dir`.
    #[must_use]
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            compression: png::Compression::Default,
            highlight: Rgb::HOT_PINK,
        }
    }
}
