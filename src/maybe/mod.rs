//! A value or nothing. Absence is an ordinary state here, not an error; use
//! [Maybe::ok_or] to turn it into one.

mod ext;

use std::fmt;

use crate::failure::Failure;
use crate::outcome::Outcome;

/// Either a present value of type `T` or nothing.
///
/// Construct with [Maybe::present], [Maybe::absent], [Maybe::from_ref] or
/// [Maybe::from_zero]. Transformations that change the element type, such as
/// [Maybe::map] and [Maybe::zip], are defined next to the ones that don't.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
  /// A present value
  pub fn present(value: T) -> Self { Self(Some(value)) }
  /// Nothing
  pub fn absent() -> Self { Self(None) }
  /// Adopt a std option
  pub fn from_option(option: Option<T>) -> Self { Self(option) }
  /// Copy the target of a nullable reference
  pub fn from_ref(reference: Option<&T>) -> Self
  where T: Clone {
    Self(reference.cloned())
  }
  /// Absent if `value` equals the type's default, present otherwise
  pub fn from_zero(value: T) -> Self
  where T: Default + PartialEq {
    if value == T::default() { Self::absent() } else { Self::present(value) }
  }

  /// Is there a value
  #[must_use]
  pub fn is_present(&self) -> bool { self.0.is_some() }
  /// Is there a value and does it satisfy the predicate
  #[must_use]
  pub fn is_present_and(&self, f: impl FnOnce(&T) -> bool) -> bool { self.0.as_ref().is_some_and(f) }
  /// Is it empty
  #[must_use]
  pub fn is_absent(&self) -> bool { self.0.is_none() }
  /// Is it empty or does the value satisfy the predicate
  #[must_use]
  pub fn is_absent_or(&self, f: impl FnOnce(&T) -> bool) -> bool {
    match &self.0 {
      None => true,
      Some(t) => f(t),
    }
  }

  /// Extract the value, panicking if there isn't one. This is an ordinary
  /// programming error and is never intercepted by
  /// [attempt](crate::attempt).
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.0 {
      Some(t) => t,
      None => panic!("called `Maybe::unwrap()` on an absent value"),
    }
  }
  /// Extract the value, panicking with the given message if there isn't one
  #[track_caller]
  pub fn expect(self, msg: &str) -> T {
    match self.0 {
      Some(t) => t,
      None => panic!("{msg}"),
    }
  }
  /// Extract the value or use the default
  pub fn unwrap_or(self, default: T) -> T { self.0.unwrap_or(default) }
  /// Extract the value or compute a fallback
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T { self.0.unwrap_or_else(f) }
  /// Extract the value or the type's default
  pub fn unwrap_or_zero(self) -> T
  where T: Default {
    self.0.unwrap_or_default()
  }

  /// Keep the value only if it satisfies the predicate
  #[must_use]
  pub fn filter(self, f: impl FnOnce(&T) -> bool) -> Self { Self(self.0.filter(f)) }
  /// Look at the value if there is one
  #[must_use]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Some(t) = &self.0 {
      f(t)
    }
    self
  }
  /// This if present, otherwise the alternative
  #[must_use]
  pub fn or(self, other: Self) -> Self { Self(self.0.or(other.0)) }
  /// This if present, otherwise compute an alternative
  #[must_use]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self.0 {
      Some(_) => self,
      None => f(),
    }
  }
  /// Present if exactly one of `self` and `other` is present
  #[must_use]
  pub fn xor(self, other: Self) -> Self { Self(self.0.xor(other.0)) }

  /// Convert to an outcome that fails with `failure` if nothing is present
  pub fn ok_or(self, failure: Failure) -> Outcome<T> {
    match self.0 {
      Some(t) => Outcome::ok(t),
      None => Outcome::err(failure),
    }
  }
  /// Convert to an outcome, computing the failure only if it's needed
  pub fn ok_or_else(self, f: impl FnOnce() -> Failure) -> Outcome<T> {
    match self.0 {
      Some(t) => Outcome::ok(t),
      None => Outcome::err(f()),
    }
  }
  /// View as a nullable reference
  #[must_use]
  pub fn as_option(&self) -> Option<&T> { self.0.as_ref() }
  /// Convert into a std option
  #[must_use]
  pub fn into_option(self) -> Option<T> { self.0 }
  /// Borrow the value
  #[must_use]
  pub fn as_ref(&self) -> Maybe<&T> { Maybe(self.0.as_ref()) }

  /// Run a side effect if there is a value
  pub fn if_present(self, f: impl FnOnce(&T)) -> Self { self.inspect(f) }
  /// Run a side effect if there is no value
  pub fn if_absent(self, f: impl FnOnce()) -> Self {
    if self.0.is_none() {
      f()
    }
    self
  }
  /// Invoke exactly one of the two branches and return its result. This
  /// consumes the container.
  pub fn match_with<U>(self, present: impl FnOnce(T) -> U, absent: impl FnOnce() -> U) -> U {
    match self.0 {
      Some(t) => present(t),
      None => absent(),
    }
  }
}

impl<T> Maybe<Outcome<T>> {
  /// Swap the nesting. Absent becomes a successful absent, a present failure
  /// becomes a failure, a present success becomes a successful present.
  pub fn transpose(self) -> Outcome<Maybe<T>> {
    match self.0 {
      None => Outcome::ok(Maybe::absent()),
      Some(outcome) => outcome.map(Maybe::present),
    }
  }
}

impl<T> Default for Maybe<T> {
  fn default() -> Self { Self::absent() }
}

impl<T> From<Option<T>> for Maybe<T> {
  fn from(value: Option<T>) -> Self { Self(value) }
}

impl<T> From<Maybe<T>> for Option<T> {
  fn from(value: Maybe<T>) -> Self { value.0 }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Some(t) => f.debug_tuple("Present").field(t).finish(),
      None => write!(f, "Absent"),
    }
  }
}

#[cfg(test)]
mod test {
  use std::cell::RefCell;

  use super::*;

  #[test]
  fn factories() {
    assert_eq!(Maybe::present(5).unwrap(), 5);
    assert_eq!(Maybe::absent().unwrap_or(9), 9);
    assert_eq!(Maybe::from_ref(Some(&"x".to_string())), Maybe::present("x".to_string()));
    assert!(Maybe::<u8>::from_ref(None).is_absent());
    assert!(Maybe::from_zero(0u32).is_absent(), "zero is absent");
    assert!(Maybe::from_zero(String::new()).is_absent(), "empty string is absent");
    assert_eq!(Maybe::from_zero(3), Maybe::present(3));
  }

  #[test]
  fn predicates() {
    assert!(Maybe::present(4).is_present_and(|n| n % 2 == 0));
    assert!(!Maybe::<i32>::absent().is_present_and(|_| true));
    assert!(Maybe::<i32>::absent().is_absent_or(|_| false), "vacuously true");
    assert!(!Maybe::present(3).is_absent_or(|n| *n > 5));
  }

  #[test]
  #[should_panic(expected = "absent")]
  fn unwrap_absent_panics() { Maybe::<u8>::absent().unwrap(); }

  #[test]
  fn defaults() {
    assert_eq!(Maybe::<u8>::absent().unwrap_or_zero(), 0);
    assert_eq!(Maybe::absent().unwrap_or_else(|| "fallback"), "fallback");
    assert_eq!(Maybe::present(1).filter(|n| *n > 1), Maybe::absent());
    assert_eq!(Maybe::present(2).filter(|n| *n > 1), Maybe::present(2));
  }

  #[test]
  fn xor_table() {
    assert_eq!(Maybe::present(1).xor(Maybe::absent()), Maybe::present(1));
    assert_eq!(Maybe::absent().xor(Maybe::present(2)), Maybe::present(2));
    assert_eq!(Maybe::present(1).xor(Maybe::present(2)), Maybe::absent());
    assert_eq!(Maybe::<i32>::absent().xor(Maybe::absent()), Maybe::absent());
  }

  #[test]
  fn alternatives() {
    assert_eq!(Maybe::absent().or(Maybe::present(2)), Maybe::present(2));
    assert_eq!(Maybe::present(1).or(Maybe::present(2)), Maybe::present(1));
    assert_eq!(Maybe::present(1).or_else(|| panic!("must stay lazy")), Maybe::present(1));
  }

  #[test]
  fn side_effects() {
    let log = RefCell::new(Vec::new());
    let kept = Maybe::present(3)
      .inspect(|n| log.borrow_mut().push(format!("inspect {n}")))
      .if_present(|n| log.borrow_mut().push(format!("present {n}")))
      .if_absent(|| log.borrow_mut().push("absent".to_string()));
    assert_eq!(kept, Maybe::present(3), "side effects leave the value alone");
    Maybe::<i32>::absent().if_absent(|| log.borrow_mut().push("absent".to_string()));
    assert_eq!(*log.borrow(), vec!["inspect 3", "present 3", "absent"]);
  }

  #[test]
  fn match_invokes_one_branch() {
    let calls = RefCell::new(Vec::new());
    let out = Maybe::present(2).match_with(
      |n| {
        calls.borrow_mut().push("present");
        n * 10
      },
      || {
        calls.borrow_mut().push("absent");
        0
      },
    );
    assert_eq!(out, 20);
    assert_eq!(*calls.borrow(), vec!["present"], "the absent branch must not run");
  }

  #[test]
  fn conversions() {
    let missing = Failure::msg("missing");
    assert_eq!(Maybe::present(1).ok_or(missing.clone()), Outcome::ok(1));
    assert_eq!(Maybe::<i32>::absent().ok_or(missing.clone()), Outcome::err(missing.clone()));
    assert_eq!(Maybe::<i32>::absent().ok_or_else(|| missing.clone()).unwrap_err(), missing);
    assert_eq!(Maybe::present(7).as_option(), Some(&7));
    assert_eq!(Option::<u8>::from(Maybe::absent()), None);
  }

  #[test]
  fn transpose() {
    let e = Failure::msg("e");
    assert_eq!(Maybe::present(Outcome::ok(5)).transpose(), Outcome::ok(Maybe::present(5)));
    assert_eq!(Maybe::present(Outcome::<i32>::err(e.clone())).transpose(), Outcome::err(e));
    assert_eq!(Maybe::<Outcome<i32>>::absent().transpose(), Outcome::ok(Maybe::absent()));
  }
}
