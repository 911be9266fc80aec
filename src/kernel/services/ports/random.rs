/// Source of uniform draws.
///
/// Every value must lie in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}
