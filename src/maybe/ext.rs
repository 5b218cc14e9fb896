//! Combinators that introduce a second element type

use super::Maybe;

impl<T> Maybe<T> {
  /// Transform the value if there is one
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> { Maybe(self.0.map(f)) }
  /// Transform the value or fall back to a default
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U { self.0.map_or(default, f) }
  /// Transform the value or compute a fallback
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    self.0.map_or_else(default, f)
  }
  /// `other` if this is present, otherwise absent
  pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> { Maybe(self.0.and(other.0)) }
  /// Chain a computation that may itself produce nothing
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self.0 {
      Some(t) => f(t),
      None => Maybe::absent(),
    }
  }
  /// Alias of [Maybe::and_then]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> { self.and_then(f) }
  /// Pair up two values if both are present
  pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> { Maybe(self.0.zip(other.0)) }
  /// Combine two values if both are present
  pub fn zip_with<U, R>(self, other: Maybe<U>, f: impl FnOnce(T, U) -> R) -> Maybe<R> {
    self.zip(other).map(|(t, u)| f(t, u))
  }
}

impl<T, U> Maybe<(T, U)> {
  /// Split a present pair into two present values, or nothing into two
  /// absent ones
  pub fn unzip(self) -> (Maybe<T>, Maybe<U>) {
    match self.0 {
      Some((t, u)) => (Maybe::present(t), Maybe::present(u)),
      None => (Maybe::absent(), Maybe::absent()),
    }
  }
}

impl<T> Maybe<Maybe<T>> {
  /// Remove one level of nesting
  pub fn flatten(self) -> Maybe<T> { self.0.unwrap_or_default() }
}
