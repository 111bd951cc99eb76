//! Two-Up Fixture Generator
//!
//! Writes the expected/actual/diff PNG triples used by the two-up image
//! comparison tests. Output is deterministic: re-running overwrites every
//! file with identical content.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixtures
//! RUST_LOG=debug cargo run --bin generate_fixtures
//! ```
//!
//! # Generated Files
//!
//! One subdirectory per scenario under `tests/fixtures/two-up/`:
//!
//! - `standard/` `expected.png`, `actual.png`, `diff.png`
//! - `mismatched/` `expected-wide.png`, `actual-tall.png`, `diff-mismatched.png`
//! - `portrait/`, `landscape/`, `detailed/`, `small-diff/`, `large-diff/`,
//!   `button/`: `expected-<name>.png`, `actual-<name>.png`, `diff-<name>.png`

use two_up_fixtures::{generate_all, GeneratorConfig};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::default();
    let report = generate_all(&config)?;

    println!(
        "\nAll test images generated successfully! ({} files, {} bytes)",
        report.files.len(),
        report.total_bytes()
    );
    println!("Images saved to: {}", config.output_dir.display());
    Ok(())
}
