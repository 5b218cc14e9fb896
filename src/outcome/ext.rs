//! Combinators that introduce a second success type

use super::Outcome;
use crate::failure::Failure;

impl<T> Outcome<T> {
  /// Transform the success value
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> { Outcome(self.0.map(f)) }
  /// Chain a fallible computation on the success value
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
    match self.0 {
      Ok(t) => f(t),
      Err(e) => Outcome::err(e),
    }
  }
  /// Alias of [Outcome::and_then]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> { self.and_then(f) }
  /// `other` if this is a success, otherwise this failure
  pub fn and<U>(self, other: Outcome<U>) -> Outcome<U> {
    match self.0 {
      Ok(_) => other,
      Err(e) => Outcome::err(e),
    }
  }
  /// Transform the success value or fall back to a default
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U { self.0.map_or(default, f) }
  /// Transform the success value or derive a result from the failure
  pub fn map_or_else<U>(
    self,
    default: impl FnOnce(Failure) -> U,
    f: impl FnOnce(T) -> U,
  ) -> U {
    self.0.map_or_else(default, f)
  }
}

impl<T> Outcome<Outcome<T>> {
  /// Remove one level of nesting
  pub fn flatten(self) -> Outcome<T> { self.and_then(|inner| inner) }
}

#[cfg(test)]
mod test {
  use super::*;

  fn parse(s: &str) -> Outcome<i64> { s.parse::<i64>().into() }
  fn non_zero(n: i64) -> Outcome<i64> {
    if n == 0 { Outcome::err(Failure::msg("zero")) } else { Outcome::ok(n) }
  }

  #[test]
  fn functor_laws() {
    let f = |n: i64| n - 2;
    let g = |n: i64| n * n;
    for o in [Outcome::ok(5), Outcome::err(Failure::msg("x"))] {
      assert_eq!(o.clone().map(f).map(g), o.clone().map(|n| g(f(n))), "composition");
      assert_eq!(o.clone().map(|n| n), o, "identity");
    }
  }

  #[test]
  fn chaining() {
    assert_eq!(parse("4").and_then(non_zero).map(|n| 12 / n), Outcome::ok(3));
    assert!(parse("0").flat_map(non_zero).contains_err(&Failure::msg("zero")));
    assert!(parse("z").and_then(non_zero).is_err_and(|f| !f.is(&Failure::msg("zero"))));
    assert_eq!(parse("1").and(Outcome::ok("next")), Outcome::ok("next"));
    assert!(parse("q").and(Outcome::ok("next")).is_err());
  }

  #[test]
  fn flatten() {
    assert_eq!(Outcome::ok(Outcome::ok(1)).flatten(), Outcome::ok(1));
    let e = Failure::msg("inner");
    assert_eq!(Outcome::ok(Outcome::<i32>::err(e.clone())).flatten(), Outcome::err(e.clone()));
    assert_eq!(Outcome::<Outcome<i32>>::err(e.clone()).flatten(), Outcome::err(e));
  }

  #[test]
  fn defaults() {
    assert_eq!(parse("3").map_or(0, |n| n + 1), 4);
    assert_eq!(parse("?").map_or(0, |n| n + 1), 0);
    assert_eq!(parse("?").map_or_else(|f| f.len() as i64, |n| n), 1);
  }
}
