//! The command vocabulary accepted by the engine.

/// A single scripted command.
///
/// The script is a closed two-case enumeration; unknown document tokens are
/// rejected during validation, never at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Advance one tile in the current facing direction.
    Move,
    /// Turn the facing direction one step clockwise.
    Rotate,
}

impl Command {
    /// Map a document token to a command.
    ///
    /// Recognizes exactly `"move"` and `"rotate"`; anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "move" => Some(Command::Move),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }
}
