//! Terminal outcome classification.

use std::fmt;

/// The result of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    /// The agent reached the exit tile.
    Success,
    /// The agent stepped onto a mined tile.
    MineHit,
    /// The script ran out before either terminal tile was reached.
    StillInDanger,
}

impl Outcome {
    /// The user-facing message for this outcome. Exact wording is part of
    /// the external contract.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Success => "Success!",
            Outcome::MineHit => "Mine hit!",
            Outcome::StillInDanger => "Still in danger!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
