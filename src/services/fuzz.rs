//! Fuzz harness for the color types
//!
//! A fuzz input is 32 raw bytes: four little-endian `i32` followed by four
//! little-endian `f32`. Every bit pattern is valid, including NaN and
//! infinities, and [`exercise`] must never panic on any of them.

use std::fmt::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};

use pigment_color::{convert_to_rgb, Channel, Hsv, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::printer::Printer;
use super::replay;
use crate::error::AppError;
use crate::models::FuzzConfig;

/// Size of one encoded fuzz input in bytes
pub const INPUT_LEN: usize = 32;

const HALF: usize = INPUT_LEN / 2;

/// Channel values decoded from raw fuzz bytes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzInput {
    pub ints: [i32; 4],
    pub floats: [f32; 4],
}

impl FuzzInput {
    /// Decode an input, rejecting buffers that are not exactly [`INPUT_LEN`] bytes
    pub fn decode(data: &[u8]) -> Result<Self, AppError> {
        let bytes: &[u8; INPUT_LEN] = data.try_into().map_err(|_| AppError::FuzzInputSize {
            expected: INPUT_LEN,
            actual: data.len(),
        })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: &[u8; INPUT_LEN]) -> Self {
        let mut ints = [0i32; 4];
        for (value, chunk) in ints.iter_mut().zip(bytes[..HALF].chunks_exact(4)) {
            *value = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        let mut floats = [0f32; 4];
        for (value, chunk) in floats.iter_mut().zip(bytes[HALF..].chunks_exact(4)) {
            *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Self { ints, floats }
    }

    pub fn encode(&self) -> [u8; INPUT_LEN] {
        let mut bytes = [0u8; INPUT_LEN];
        let (int_bytes, float_bytes) = bytes.split_at_mut(HALF);
        for (chunk, value) in int_bytes.chunks_exact_mut(4).zip(self.ints) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        for (chunk, value) in float_bytes.chunks_exact_mut(4).zip(self.floats) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Whether any float is NaN or infinite
    pub fn has_non_finite(&self) -> bool {
        self.floats.iter().any(|f| !f.is_finite())
    }
}

/// Generate a random input from raw random bytes
pub fn random_input<R: Rng>(rng: &mut R) -> FuzzInput {
    let mut bytes = [0u8; INPUT_LEN];
    rng.fill(&mut bytes[..]);
    FuzzInput::from_bytes(&bytes)
}

/// Build every color variant from the input, convert them and render the result
pub fn exercise(input: &FuzzInput, precision: Option<usize>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_exercise(&mut out, input, precision);
    out
}

fn write_exercise<W: Write>(out: &mut W, input: &FuzzInput, precision: Option<usize>) -> fmt::Result {
    let mut p = Printer::new(out, precision);

    p.line("Integer-based colors:")?;
    write_variants(&mut p, input.ints)?;

    p.line("Float-based colors:")?;
    write_variants(&mut p, input.floats)
}

fn write_variants<T: Channel, W: Write>(p: &mut Printer<'_, W>, [r, g, b, a]: [T; 4]) -> fmt::Result {
    let rgb = Rgb::<T>::new(r, g, b);
    let rgba = Rgb::<T, 4>::with_alpha(r, g, b, a);
    // the same values read as h, s, v
    let hsv = Hsv::<T>::new(r, g, b);
    let hsva = Hsv::<T, 4>::with_alpha(r, g, b, a);

    let hsv_from_rgb = Hsv::<f64>::from(Rgb::<f64>::from_rgb(&rgb));
    let rgb_from_hsv = convert_to_rgb(&Hsv::<f64>::from_hsv(&hsv));
    let rgba_from_hsva = Rgb::<T, 4>::from_hsv(&hsva);

    p.value(&rgb)?;
    p.value(&rgba)?;
    p.value(&hsv)?;
    p.value(&hsva)?;
    p.value(&hsv_from_rgb)?;
    p.value(&rgb_from_hsv)?;
    p.value(&rgba_from_hsva)
}

/// Outcome of a random fuzz run
#[derive(Debug, Default)]
pub struct FuzzReport {
    /// Inputs exercised
    pub iterations: usize,
    /// Inputs that carried NaN or infinite floats
    pub non_finite: usize,
    /// Inputs that panicked, saved for replay
    pub crashes: Vec<PathBuf>,
}

/// Exercise `config.iterations` random inputs.
///
/// Inputs that panic are written to `save_dir` (when given) as
/// `crash-<digest>` files for [`replay`](super::replay).
pub fn run_random(config: &FuzzConfig, save_dir: Option<&Path>) -> Result<FuzzReport, AppError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = FuzzReport::default();
    for iteration in 0..config.iterations {
        let input = random_input(&mut rng);
        if input.has_non_finite() {
            report.non_finite += 1;
        }

        let outcome = panic::catch_unwind(|| exercise(&input, None));
        report.iterations += 1;

        match outcome {
            Ok(rendered) => {
                tracing::trace!(iteration, bytes = rendered.len(), "Exercised input");
            }
            Err(_) => {
                tracing::error!(iteration, ?input, "Input panicked");
                if let Some(dir) = save_dir {
                    let path = replay::write_input(dir, "crash", &input)?;
                    tracing::warn!(path = %path.display(), "Saved crashing input");
                    report.crashes.push(path);
                }
            }
        }
    }

    tracing::info!(
        iterations = report.iterations,
        non_finite = report.non_finite,
        crashes = report.crashes.len(),
        "Fuzz run complete"
    );
    Ok(report)
}
