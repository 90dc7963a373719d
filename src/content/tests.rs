//! Content domain: tests for locomotion tuning loading.

use std::path::Path;

use super::{LocomotionDef, load_locomotion_tuning, parse_locomotion};
use crate::movement::{GroundedReversal, LocomotionTuning};

#[test]
fn test_default_def_matches_default_tuning() {
    let tuning: LocomotionTuning = LocomotionDef::default().into();
    assert_eq!(tuning, LocomotionTuning::default());
}

#[test]
fn test_parse_partial_file_keeps_defaults() {
    let tuning = parse_locomotion(
        "(wall_hit_cooldown: 0.3, grounded_reversal: Always)",
        "inline.ron",
    )
    .unwrap();

    assert_eq!(tuning.wall_hit_cooldown, 0.3);
    assert_eq!(tuning.grounded_reversal, GroundedReversal::Always);
    assert_eq!(tuning.jump_force, LocomotionTuning::default().jump_force);
}

#[test]
fn test_parse_probe_and_vector_fields() {
    let tuning = parse_locomotion(
        r#"(
            wall_jump_force: (300.0, 500.0),
            wall_probe: (offset: (16.0, 4.0), half_extents: (2.0, 18.0)),
        )"#,
        "inline.ron",
    )
    .unwrap();

    assert_eq!(tuning.wall_jump_force.x, 300.0);
    assert_eq!(tuning.wall_jump_force.y, 500.0);
    assert_eq!(tuning.wall_probe.offset.x, 16.0);
    assert_eq!(tuning.wall_probe.half_extents.y, 18.0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_locomotion("(jump_force: \"high\")", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_invalid_tuning_is_rejected() {
    let err = parse_locomotion("(base_move_speed: 400.0, max_move_speed: 300.0)", "bad.ron")
        .unwrap_err();
    assert!(err.message.contains("max_move_speed"));
}

#[test]
fn test_missing_file_is_not_an_error() {
    let result = load_locomotion_tuning(Path::new("does/not/exist/locomotion.ron"));
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_shipped_tuning_file_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::LOCOMOTION_PATH);
    let tuning = load_locomotion_tuning(&path).unwrap().unwrap();
    assert_eq!(tuning, LocomotionTuning::default());
}
