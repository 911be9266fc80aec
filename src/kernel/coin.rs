use std::fmt;

/// The side a flip lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    Heads,
    Tails,
}

impl FlipOutcome {
    /// Maps a uniform draw in `[0, 1)` to a side. Values below one half land on heads.
    pub fn from_unit(draw: f64) -> Self {
        if draw < 0.5 {
            FlipOutcome::Heads
        } else {
            FlipOutcome::Tails
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlipOutcome::Heads => "HEADS",
            FlipOutcome::Tails => "TAILS",
        }
    }
}

impl fmt::Display for FlipOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/coin.rs"]
mod tests;
