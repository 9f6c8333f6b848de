//! Fuzz harness and crash-file replay tests.

mod common;

use common::{count_colors, fixtures, TestWorkspace};
use pigment::error::AppError;
use pigment::models::FuzzConfig;
use pigment::services::{fuzz, replay, FuzzInput};
use pretty_assertions::assert_eq;

#[test]
fn test_saved_input_replays_identically() {
    let workspace = TestWorkspace::new();
    let input = fixtures::light_red_input();

    let path = replay::write_input(workspace.path(), "seed", &input).unwrap();
    let replayed = replay::replay(&path, Some(4)).unwrap();

    assert_eq!(replayed, fuzz::exercise(&input, Some(4)));
    assert_eq!(count_colors(&replayed), 14);
}

#[test]
fn test_hostile_input_replays_without_panicking() {
    let workspace = TestWorkspace::new();
    let input = fixtures::hostile_input();
    assert!(input.has_non_finite());

    let path = workspace.write_bytes("hostile", &input.encode());
    let output = replay::replay(&path, None).unwrap();
    assert!(output.contains("Integer-based colors:"));
    assert!(output.contains("Float-based colors:"));
}

#[test]
fn test_replay_rejects_wrong_size() {
    let workspace = TestWorkspace::new();
    let path = workspace.write_bytes("short", &[0u8; 31]);

    match replay::replay(&path, None) {
        Err(AppError::FuzzInputSize { expected, actual }) => {
            assert_eq!(expected, fuzz::INPUT_LEN);
            assert_eq!(actual, 31);
        }
        other => panic!("Expected FuzzInputSize, got {other:?}"),
    }
}

#[test]
fn test_seeded_run_is_reproducible_and_clean() {
    let workspace = TestWorkspace::new();
    let config = FuzzConfig {
        iterations: 500,
        seed: Some(2024),
    };

    let first = fuzz::run_random(&config, Some(&workspace.path().join("crashes"))).unwrap();
    let second = fuzz::run_random(&config, None).unwrap();

    assert_eq!(first.iterations, 500);
    assert_eq!(first.non_finite, second.non_finite);
    assert!(first.crashes.is_empty());
    assert!(workspace.files_in("crashes").is_empty());
}

#[test]
fn test_every_bit_pattern_byte_is_accepted() {
    for byte in 0..=u8::MAX {
        let input = FuzzInput::from_bytes(&[byte; fuzz::INPUT_LEN]);
        let output = fuzz::exercise(&input, Some(1));
        assert_eq!(count_colors(&output), 14, "byte {byte:#04x}");
    }
}
