//! Pointer mapping integration tests.

use std::collections::BTreeSet;

use seekbar::{SeekbarError, TrackGeometry, knob_width, map_pointer_to_frame};

fn track(offset: f64, width: u32) -> TrackGeometry {
    TrackGeometry::new(offset, width).expect("valid track")
}

// ── Continuous mode ────────────────────────────────────────────────

#[test]
fn continuous_midpoint() {
    let track = track(0.0, 500);
    assert_eq!(map_pointer_to_frame(250.0, &track, 1000, 0), 500);
}

#[test]
fn continuous_respects_track_offset() {
    let track = track(120.0, 500);
    assert_eq!(map_pointer_to_frame(370.0, &track, 1000, 0), 500);
    assert_eq!(map_pointer_to_frame(120.0, &track, 1000, 0), 0);
}

#[test]
fn continuous_rounds_to_nearest_frame() {
    let track = track(0.0, 500);
    // 1 px = 0.2 frames at 100 frames over 500 px.
    assert_eq!(map_pointer_to_frame(2.0, &track, 100, 0), 0);
    assert_eq!(map_pointer_to_frame(3.0, &track, 100, 0), 1);
    assert_eq!(map_pointer_to_frame(7.0, &track, 100, 0), 1);
    assert_eq!(map_pointer_to_frame(8.0, &track, 100, 0), 2);
}

#[test]
fn continuous_clamps_to_clip() {
    let track = track(50.0, 500);
    assert_eq!(map_pointer_to_frame(-400.0, &track, 1000, 0), 0);
    assert_eq!(map_pointer_to_frame(0.0, &track, 1000, 0), 0);
    assert_eq!(map_pointer_to_frame(550.0, &track, 1000, 0), 999);
    assert_eq!(map_pointer_to_frame(10_000.0, &track, 1000, 0), 999);
}

#[test]
fn continuous_handles_tiny_clips() {
    let track = track(0.0, 500);
    assert_eq!(map_pointer_to_frame(500.0, &track, 1, 0), 0);
    assert_eq!(map_pointer_to_frame(250.0, &track, 0, 0), 0);
}

#[test]
fn nan_pointer_maps_to_first_frame() {
    let track = track(0.0, 500);
    assert_eq!(map_pointer_to_frame(f64::NAN, &track, 1000, 0), 0);
}

#[test]
fn continuous_is_monotonic() {
    let track = track(10.0, 501);
    let mut previous = 0;
    let mut pointer = -20.0;
    while pointer <= 540.0 {
        let frame = map_pointer_to_frame(pointer, &track, 4321, 0);
        assert!(frame >= previous, "regressed at {pointer}");
        previous = frame;
        pointer += 0.25;
    }
    assert_eq!(previous, 4320);
}

// ── Quantized mode ─────────────────────────────────────────────────

#[test]
fn quantized_first_and_last_stop() {
    let track = track(0.0, 501);
    assert_eq!(map_pointer_to_frame(0.0, &track, 1000, 15), 0);
    // Last of 15 stops: round(14 * 1000 / 15).
    assert_eq!(map_pointer_to_frame(500.0, &track, 1000, 15), 933);
    assert_eq!(map_pointer_to_frame(501.0, &track, 1000, 15), 933);
}

#[test]
fn quantized_snaps_within_segment() {
    let track = track(0.0, 500);
    // Four stops of 125 px: 0, 250, 500, 750.
    assert_eq!(map_pointer_to_frame(0.0, &track, 1000, 4), 0);
    assert_eq!(map_pointer_to_frame(124.9, &track, 1000, 4), 0);
    assert_eq!(map_pointer_to_frame(125.0, &track, 1000, 4), 250);
    assert_eq!(map_pointer_to_frame(374.0, &track, 1000, 4), 500);
    assert_eq!(map_pointer_to_frame(499.0, &track, 1000, 4), 750);
}

#[test]
fn quantized_reaches_exactly_step_count_frames() {
    let track = track(0.0, 501);
    for step_count in [1, 2, 7, 15, 100] {
        let reachable: BTreeSet<u64> = (0..=501)
            .map(|pixel| map_pointer_to_frame(f64::from(pixel), &track, 1000, step_count))
            .collect();
        assert_eq!(reachable.len(), step_count as usize, "{step_count} stops");
    }
}

#[test]
fn quantized_is_monotonic() {
    let track = track(0.0, 501);
    let mut previous = 0;
    for pixel in 0..=501 {
        let frame = map_pointer_to_frame(f64::from(pixel), &track, 1000, 15);
        assert!(frame >= previous);
        previous = frame;
    }
}

#[test]
fn single_stop_always_maps_to_first_frame() {
    let track = track(0.0, 501);
    assert_eq!(map_pointer_to_frame(300.0, &track, 1000, 1), 0);
}

// ── Geometry and knob ──────────────────────────────────────────────

#[test]
fn zero_width_track_is_rejected() {
    assert!(matches!(
        TrackGeometry::new(0.0, 0),
        Err(SeekbarError::InvalidTrackWidth)
    ));
}

#[test]
fn relative_offset_is_clamped() {
    let track = track(100.0, 500);
    assert_eq!(track.relative_offset(50.0), 0.0);
    assert_eq!(track.relative_offset(350.0), 250.0);
    assert_eq!(track.relative_offset(900.0), 500.0);
}

#[test]
fn knob_width_rounds_up_and_caps() {
    assert_eq!(knob_width(0, 1000, 500), 0);
    assert_eq!(knob_width(1, 1000, 500), 1);
    assert_eq!(knob_width(500, 1000, 500), 250);
    assert_eq!(knob_width(999, 1000, 500), 500);
    assert_eq!(knob_width(5000, 1000, 500), 500);
    assert_eq!(knob_width(10, 0, 500), 0);
}
