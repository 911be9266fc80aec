use super::*;
use crate::kernel::services::adapters::{SeededRandom, SequenceRandom};

#[test]
fn generates_requested_number_of_stars() {
    let mut random = SeededRandom::new(7);
    let field = Starfield::generate(Theme::Dark, DEFAULT_STAR_COUNT, &mut random);
    assert_eq!(field.len(), 50);
    assert_eq!(field.theme, Theme::Dark);

    let empty = Starfield::generate(Theme::Light, 0, &mut random);
    assert!(empty.is_empty());
    assert_eq!(empty.theme, Theme::Light);
}

#[test]
fn stars_stay_within_ranges() {
    let mut random = SeededRandom::new(42);
    let field = Starfield::generate(Theme::Dark, 500, &mut random);
    for star in &field.stars {
        assert!((0.0..100.0).contains(&star.x), "x out of range: {}", star.x);
        assert!((0.0..100.0).contains(&star.y), "y out of range: {}", star.y);
        assert!((0.0..3.0).contains(&star.size), "size out of range: {}", star.size);
        assert!(star.twinkle_delay < Duration::from_secs(2));
    }
}

#[test]
fn extreme_draws_are_clamped() {
    let mut random = SequenceRandom::new(vec![0.999_999_999_999]);
    let field = Starfield::generate(Theme::Dark, 3, &mut random);
    for star in &field.stars {
        assert!(star.x < 100.0);
        assert!(star.y < 100.0);
        assert!(star.size < 3.0);
    }
}

#[test]
fn twinkle_alternates_every_second() {
    let star = Star {
        x: 10.0,
        y: 10.0,
        size: 1.0,
        twinkle_delay: Duration::from_millis(500),
    };
    assert!(star.is_lit(Duration::ZERO));
    assert!(!star.is_lit(Duration::from_millis(500)));
    assert!(!star.is_lit(Duration::from_millis(1400)));
    assert!(star.is_lit(Duration::from_millis(1500)));
}
