//! The verdict shown once a flip resolves.
//!
//! Content is a fixed template: only the statement mentions the side, the
//! pros and cons never change with the side or with the question.

use super::coin::FlipOutcome;

const PROS: [&str; 3] = [
    "Alignment with your cosmic destiny",
    "Potential for extraordinary growth",
    "Universal energy supports this choice",
];

const CONS: [&str; 3] = [
    "May require navigating through unknown territories",
    "Temporary cosmic disturbances possible",
    "Requires embracing uncertainty",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub statement: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Judgment {
    pub fn for_outcome(side: FlipOutcome) -> Self {
        Self {
            statement: format!(
                "The cosmic forces align with {side}, suggesting this path holds promising possibilities."
            ),
            pros: PROS.iter().map(|s| s.to_string()).collect(),
            cons: CONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/judgment.rs"]
mod tests;
