//! Rule variations selectable by the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a directly attempted move may land on a piece of the mover's side.
///
/// Destination enumeration never offers such squares; this only affects
/// [`attempt_move_with`](super::attempt_move_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FriendlyCapture {
    /// Both validation and enumeration refuse friendly destinations.
    #[default]
    Forbid,
    /// Validation skips the check, so the moving piece replaces its own
    /// side's piece.
    AllowOnDirectMove,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    pub friendly_capture: FriendlyCapture,
}

impl RulesConfig {
    /// Skip the friendly-destination check on directly attempted moves.
    #[must_use]
    pub fn permissive() -> Self {
        RulesConfig {
            friendly_capture: FriendlyCapture::AllowOnDirectMove,
        }
    }
}
