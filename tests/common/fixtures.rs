//! Test fixtures and constants.

use pigment::services::FuzzInput;

/// Config files used across tests
pub mod configs {
    /// Every setting overridden
    pub const FULL: &str = r#"
precision: 2
fuzz:
  iterations: 25
  seed: 1234
demo:
  show_alpha: false
"#;

    /// Only the fuzz seed set
    pub const SEED_ONLY: &str = "fuzz:\n  seed: 99\n";

    /// Not valid for the config schema
    pub const BROKEN: &str = "precision: lots\n";
}

/// The demo's light red in byte values
pub fn light_red_input() -> FuzzInput {
    FuzzInput {
        ints: [0, 100, 255, 128],
        floats: [0.0, 0.392_156_87, 1.0, 0.5],
    }
}

/// Input whose floats are all non-finite or extreme
pub fn hostile_input() -> FuzzInput {
    FuzzInput {
        ints: [i32::MIN, -1, i32::MAX, 0],
        floats: [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::MAX],
    }
}
