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

//! The fixture scenario catalog and generation loop.
//!
//! | Scenario     | Expected                     | Actual                                   |
//! |--------------|------------------------------|------------------------------------------|
//! | `standard`   | 1920x1080 steel blue         | red square near the top-right corner     |
//! | `mismatched` | 1000x200 forest green        | 200x900 dark orange                      |
//! | `portrait`   | 600x1200 purple              | yellow circle near the bottom-left       |
//! | `landscape`  | 1600x400 teal                | magenta triangle right of center         |
//! | `detailed`   | 800x600 checkerboard (10px)  | blue square over one tile                |
//! | `small-diff` | 1000x1000 white              | five scattered red pixels                |
//! | `large-diff` | 800x800 red                  | 800x800 blue                             |
//! | `button`     | 120x40 dark gray             | green dot near the right edge            |
//!
//! Each scenario writes `<dir>/<expected>`, `<dir>/<actual>` and `<dir>/<diff>`
//! under the configured output root.

use std::io;
use std::path::PathBuf;

use crate::canvas::{Canvas, Fill};
use crate::diff::{compose_diff, Region};
use crate::draw::{draw_circle, draw_pixels, draw_square, draw_triangle};
use crate::png_out::write_png;
use crate::{GeneratorConfig, Rgb};

/// Dimensions and seed of one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub width: u32,
    pub height: u32,
    pub fill: Fill,
}

impl Layer {
    #[must_use]
    pub const fn solid(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            fill: Fill::Solid(color),
        }
    }

    #[must_use]
    pub fn render(&self) -> Canvas {
        Canvas::from_fill(self.width, self.height, self.fill)
    }
}

/// Discrepancy drawn onto the actual image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Square {
        x: i64,
        y: i64,
        size: i64,
        color: Rgb,
    },
    Circle {
        x: i64,
        y: i64,
        radius: i64,
        color: Rgb,
    },
    Triangle {
        x: i64,
        y: i64,
        size: i64,
        color: Rgb,
    },
    Pixels {
        positions: Vec<(i64, i64)>,
        color: Rgb,
    },
}

impl Mark {
    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Mark::Square { x, y, size, color } => draw_square(canvas, *x, *y, *size, *color),
            Mark::Circle {
                x,
                y,
                radius,
                color,
            } => draw_circle(canvas, *x, *y, *radius, *color),
            Mark::Triangle { x, y, size, color } => draw_triangle(canvas, *x, *y, *size, *color),
            Mark::Pixels { positions, color } => {
                draw_pixels(canvas, positions.iter().copied(), *color);
            }
        }
    }
}

/// One expected/actual/diff fixture triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    /// Subdirectory under the output root.
    pub dir: &'static str,
    pub expected_file: &'static str,
    pub actual_file: &'static str,
    pub diff_file: &'static str,
    pub expected: Layer,
    pub actual: Layer,
    /// Drawn on top of the actual layer. `None` when the layers themselves differ.
    pub mark: Option<Mark>,
    pub highlight: Region,
}

/// Canvases produced for one scenario.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub expected: Canvas,
    pub actual: Canvas,
    pub diff: Canvas,
}

/// A file written during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<WrittenFile>,
}

impl GenerationReport {
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

impl Scenario {
    /// Draws the expected, actual and diff canvases.
    #[must_use]
    pub fn render(&self, highlight: Rgb) -> Rendered {
        let expected = self.expected.render();
        let mut actual = self.actual.render();
        if let Some(mark) = &self.mark {
            mark.draw(&mut actual);
        }

        let width = expected.width().max(actual.width());
        let height = expected.height().max(actual.height());
        let positions = self.highlight.positions(width, height);
        let diff = compose_diff(&expected, &actual, positions, highlight);

        Rendered {
            expected,
            actual,
            diff,
        }
    }

    /// Renders the scenario and writes its three files under
    /// `config.output_dir`, creating the scenario directory if needed.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or encoding error; files already written stay
    /// on disk.
    pub fn write(&self, config: &GeneratorConfig) -> io::Result<Vec<WrittenFile>> {
        log::info!(
            "Generating {} set ({}x{})...",
            self.name,
            self.expected.width,
            self.expected.height
        );

        let dir = config.output_dir.join(self.dir);
        std::fs::create_dir_all(&dir)?;

        let rendered = self.render(config.highlight);
        let outputs = [
            (self.expected_file, &rendered.expected),
            (self.actual_file, &rendered.actual),
            (self.diff_file, &rendered.diff),
        ];

        let mut written = Vec::with_capacity(outputs.len());
        for (file, canvas) in outputs {
            let path = dir.join(file);
            let bytes = write_png(canvas, &path, config.compression)?;
            log::debug!(
                "Wrote {} ({}x{}, {} bytes)",
                path.display(),
                canvas.width(),
                canvas.height(),
                bytes
            );
            written.push(WrittenFile { path, bytes });
        }
        Ok(written)
    }
}

/// Writes every scenario in catalog order.
///
/// # Errors
///
/// Stops at the first scenario that fails and returns its error.
pub fn generate_all(config: &GeneratorConfig) -> io::Result<GenerationReport> {
    std::fs::create_dir_all(&config.output_dir)?;

    let mut report = GenerationReport::default();
    for scenario in catalog() {
        report.files.extend(scenario.write(config)?);
    }

    log::info!(
        "Generated {} files ({} bytes) in {}",
        report.files.len(),
        report.total_bytes(),
        config.output_dir.display()
    );
    Ok(report)
}

/// The fixed fixture set consumed by the two-up comparison tests.
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "standard",
            dir: "standard",
            expected_file: "expected.png",
            actual_file: "actual.png",
            diff_file: "diff.png",
            expected: Layer::solid(1920, 1080, Rgb::STEEL_BLUE),
            actual: Layer::solid(1920, 1080, Rgb::STEEL_BLUE),
            mark: Some(Mark::Square {
                x: 1820,
                y: 50,
                size: 50,
                color: Rgb::RED,
            }),
            highlight: Region::Rect {
                x: 1820,
                y: 50,
                width: 50,
                height: 50,
            },
        },
        Scenario {
            name: "mismatched",
            dir: "mismatched",
            expected_file: "expected-wide.png",
            actual_file: "actual-tall.png",
            diff_file: "diff-mismatched.png",
            expected: Layer::solid(1000, 200, Rgb::FOREST_GREEN),
            actual: Layer::solid(200, 900, Rgb::DARK_ORANGE),
            mark: None,
            highlight: Region::Outside {
                width: 200,
                height: 200,
            },
        },
        Scenario {
            name: "portrait",
            dir: "portrait",
            expected_file: "expected-portrait.png",
            actual_file: "actual-portrait.png",
            diff_file: "diff-portrait.png",
            expected: Layer::solid(600, 1200, Rgb::PURPLE),
            actual: Layer::solid(600, 1200, Rgb::PURPLE),
            mark: Some(Mark::Circle {
                x: 100,
                y: 1100,
                radius: 30,
                color: Rgb::YELLOW,
            }),
            highlight: Region::Rect {
                x: 70,
                y: 1070,
                width: 60,
                height: 60,
            },
        },
        Scenario {
            name: "landscape",
            dir: "landscape",
            expected_file: "expected-landscape.png",
            actual_file: "actual-landscape.png",
            diff_file: "diff-landscape.png",
            expected: Layer::solid(1600, 400, Rgb::TEAL),
            actual: Layer::solid(1600, 400, Rgb::TEAL),
            mark: Some(Mark::Triangle {
                x: 1200,
                y: 200,
                size: 40,
                color: Rgb::MAGENTA,
            }),
            highlight: Region::Rect {
                x: 1160,
                y: 160,
                width: 80,
                height: 80,
            },
        },
        Scenario {
            name: "detailed",
            dir: "detailed",
            expected_file: "expected-detailed.png",
            actual_file: "actual-detailed.png",
            diff_file: "diff-detailed.png",
            expected: Layer {
                width: 800,
                height: 600,
                fill: Fill::Checkerboard { tile: 10 },
            },
            actual: Layer {
                width: 800,
                height: 600,
                fill: Fill::Checkerboard { tile: 10 },
            },
            mark: Some(Mark::Square {
                x: 10,
                y: 10,
                size: 10,
                color: Rgb::BLUE,
            }),
            highlight: Region::Rect {
                x: 10,
                y: 10,
                width: 10,
                height: 10,
            },
        },
        Scenario {
            name: "small-diff",
            dir: "small-diff",
            expected_file: "expected-small-diff.png",
            actual_file: "actual-small-diff.png",
            diff_file: "diff-small-diff.png",
            expected: Layer::solid(1000, 1000, Rgb::WHITE),
            actual: Layer::solid(1000, 1000, Rgb::WHITE),
            mark: Some(Mark::Pixels {
                positions: SMALL_DIFF_PIXELS.to_vec(),
                color: Rgb::RED,
            }),
            highlight: Region::Points(SMALL_DIFF_PIXELS.to_vec()),
        },
        Scenario {
            name: "large-diff",
            dir: "large-diff",
            expected_file: "expected-large-diff.png",
            actual_file: "actual-large-diff.png",
            diff_file: "diff-large-diff.png",
            expected: Layer::solid(800, 800, Rgb::RED),
            actual: Layer::solid(800, 800, Rgb::BLUE),
            mark: None,
            highlight: Region::Full,
        },
        Scenario {
            name: "button",
            dir: "button",
            expected_file: "expected-button.png",
            actual_file: "actual-button.png",
            diff_file: "diff-button.png",
            expected: Layer::solid(120, 40, Rgb::DARK_GRAY),
            actual: Layer::solid(120, 40, Rgb::DARK_GRAY),
            mark: Some(Mark::Circle {
                x: 100,
                y: 20,
                radius: 5,
                color: Rgb::GREEN,
            }),
            highlight: Region::Rect {
                x: 95,
                y: 15,
                width: 10,
                height: 10,
            },
        },
    ]
}

/// Corners (50px inset) and center of the 1000x1000 small-diff canvas.
const SMALL_DIFF_PIXELS: [(i64, i64); 5] = [(50, 50), (950, 50), (50, 950), (950, 950), (500, 500)];
