use super::*;

#[test]
fn tone_bands() {
    assert_eq!(progress_tone(100.0), "progress__fill--excellent");
    assert_eq!(progress_tone(80.0), "progress__fill--excellent");
    assert_eq!(progress_tone(79.9), "progress__fill--good");
    assert_eq!(progress_tone(60.0), "progress__fill--good");
    assert_eq!(progress_tone(40.0), "progress__fill--fair");
    assert_eq!(progress_tone(20.0), "progress__fill--low");
    assert_eq!(progress_tone(19.9), "progress__fill--minimal");
    assert_eq!(progress_tone(0.0), "progress__fill--minimal");
}

#[test]
fn clamp_percent_bounds_input() {
    assert!((clamp_percent(-5.0) - 0.0).abs() < f64::EPSILON);
    assert!((clamp_percent(140.0) - 100.0).abs() < f64::EPSILON);
    assert!((clamp_percent(42.5) - 42.5).abs() < f64::EPSILON);
    assert!((clamp_percent(f64::NAN) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn size_classes() {
    assert_eq!(ProgressSize::default(), ProgressSize::Medium);
    assert_eq!(ProgressSize::Small.class(), "progress progress--sm");
    assert_eq!(ProgressSize::Large.class(), "progress progress--lg");
}
