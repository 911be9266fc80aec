use super::*;

#[test]
fn sequence_replays_and_wraps() {
    let mut random = SequenceRandom::new(vec![0.1, 0.6]);
    assert_eq!(random.next_unit(), 0.1);
    assert_eq!(random.next_unit(), 0.6);
    assert_eq!(random.next_unit(), 0.1);
}

#[test]
fn sequence_clamps_out_of_range_values() {
    let mut random = SequenceRandom::new(vec![-1.0, 1.0, 5.0, f64::NAN]);
    assert_eq!(random.next_unit(), 0.0);
    assert!(random.next_unit() < 1.0);
    assert!(random.next_unit() < 1.0);
    assert_eq!(random.next_unit(), 0.0);
}

#[test]
fn empty_sequence_yields_zero() {
    let mut random = SequenceRandom::new(Vec::new());
    assert_eq!(random.next_unit(), 0.0);
    assert_eq!(random.next_unit(), 0.0);
}

#[test]
fn seeded_random_is_reproducible() {
    let mut a = SeededRandom::new(99);
    let mut b = SeededRandom::new(99);
    for _ in 0..32 {
        let draw = a.next_unit();
        assert_eq!(draw, b.next_unit());
        assert!((0.0..1.0).contains(&draw));
    }
}

#[test]
fn thread_random_stays_in_unit_interval() {
    let mut random = ThreadRandom;
    for _ in 0..1000 {
        let draw = random.next_unit();
        assert!((0.0..1.0).contains(&draw), "draw out of range: {draw}");
    }
}
