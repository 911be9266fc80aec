use super::*;

#[test]
fn draws_below_half_land_heads() {
    assert_eq!(FlipOutcome::from_unit(0.0), FlipOutcome::Heads);
    assert_eq!(FlipOutcome::from_unit(0.25), FlipOutcome::Heads);
    assert_eq!(FlipOutcome::from_unit(0.499_999), FlipOutcome::Heads);
}

#[test]
fn draws_from_half_land_tails() {
    assert_eq!(FlipOutcome::from_unit(0.5), FlipOutcome::Tails);
    assert_eq!(FlipOutcome::from_unit(0.75), FlipOutcome::Tails);
    assert_eq!(FlipOutcome::from_unit(0.999_999), FlipOutcome::Tails);
}

#[test]
fn labels_are_upper_case() {
    assert_eq!(FlipOutcome::Heads.to_string(), "HEADS");
    assert_eq!(FlipOutcome::Tails.as_str(), "TAILS");
}
