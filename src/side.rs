//! Named left/right. Reported by [Either::side](crate::Either::side) so
//! callers can branch on the active tag without consuming the value.

use std::fmt;

/// One of the two tags of an [Either](crate::Either)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
  /// The tag of [Either::left](crate::Either::left)
  Left,
  /// The tag of [Either::right](crate::Either::right)
  Right,
}

impl fmt::Display for Side {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Left => write!(f, "Left"),
      Self::Right => write!(f, "Right"),
    }
  }
}

impl Side {
  /// Get the side that is not the current one
  pub fn opposite(&self) -> Self {
    match self {
      Self::Left => Self::Right,
      Self::Right => Self::Left,
    }
  }
}
