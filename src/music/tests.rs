#![cfg(test)]

use super::*;

#[track_caller]
fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 4.0 * f64::EPSILON * expected.abs().max(1.0),
        "{actual} != {expected}"
    );
}

#[test]
fn test_hz2midi() {
    assert_eq!(hz2midi(440.0), 69.0);
    assert_eq!(hz2midi(2.0 * 440.0), 69.0 + 12.0);
    assert_near(hz2midi(440.0 / 2.0_f64.powf(9.0 / 12.0)), 60.0);
    assert_eq!(hz2midi(440.0_f32), 69.0_f32);
}

#[test]
fn test_midi2hz() {
    assert_eq!(midi2hz(69.0), 440.0);
    assert_eq!(midi2hz(69.0 + 12.0), 2.0 * 440.0);
    assert_near(midi2hz(60.0), 440.0 / 2.0_f64.powf(9.0 / 12.0));
}

#[test]
fn test_ratio2semitones() {
    assert_eq!(ratio2semitones(0.5), -12.0);
    assert_eq!(ratio2semitones(1.0), 0.0);
    assert_near(ratio2semitones(2.0_f64.powf(1.0 / 12.0)), 1.0);
    assert_eq!(ratio2semitones(2.0), 12.0);
}

#[test]
fn test_semitones2ratio() {
    assert_eq!(semitones2ratio(-12.0), 0.5);
    assert_eq!(semitones2ratio(0.0), 1.0);
    assert_near(semitones2ratio(1.0), 2.0_f64.powf(1.0 / 12.0));
    assert_eq!(semitones2ratio(12.0), 2.0);
}

#[test]
fn test_round_trip_through_midi() {
    for note in 0..128 {
        let note = f64::from(note);
        assert_near(hz2midi(midi2hz(note)), note);
    }
}
