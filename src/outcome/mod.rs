//! A value or a [Failure]. This is the error-propagation specialization of
//! [Either]: its [Outcome::unwrap] cooperates with [attempt](crate::attempt)
//! to unwind to the nearest guarded scope.

mod ext;
pub mod seq;

use std::fmt;

use crate::either::Either;
use crate::failure::{Failure, Reporter};
use crate::guard;
use crate::maybe::Maybe;

/// Either a successful value of type `T` or a [Failure].
///
/// Construct with [Outcome::ok], [Outcome::err], or one of the adapters
/// ([Outcome::of], [Outcome::from_void], `From<Result>`) for APIs that report
/// failure alongside a value.
#[derive(Clone, PartialEq, Eq)]
pub struct Outcome<T>(Result<T, Failure>);

impl<T> Outcome<T> {
  /// A success
  pub fn ok(value: T) -> Self { Self(Ok(value)) }
  /// A failure
  pub fn err(failure: Failure) -> Self { Self(Err(failure)) }
  /// A failure if there is one, otherwise a success carrying the type's
  /// default. This is the only constructor that treats a missing failure as
  /// success without an accompanying value.
  pub fn err_or_default(failure: Option<Failure>) -> Self
  where T: Default {
    match failure {
      Some(f) => Self::err(f),
      None => Self::ok(T::default()),
    }
  }
  /// Adapt an API that returns a value together with a possible error. The
  /// value is discarded if the error is present.
  pub fn of<E: Into<Failure>>(value: T, err: Option<E>) -> Self {
    match err {
      Some(e) => Self::err(e.into()),
      None => Self::ok(value),
    }
  }

  /// Is this a success
  #[must_use]
  pub fn is_ok(&self) -> bool { self.0.is_ok() }
  /// Is this a success that satisfies the predicate
  #[must_use]
  pub fn is_ok_and(&self, f: impl FnOnce(&T) -> bool) -> bool { self.0.as_ref().is_ok_and(f) }
  /// Is this a failure
  #[must_use]
  pub fn is_err(&self) -> bool { self.0.is_err() }
  /// Is this a failure that satisfies the predicate
  #[must_use]
  pub fn is_err_and(&self, f: impl FnOnce(&Failure) -> bool) -> bool {
    self.0.as_ref().is_err_and(f)
  }
  /// Is this a failure that [is](Failure::is) a `target`
  #[must_use]
  pub fn contains_err(&self, target: &Failure) -> bool { self.is_err_and(|f| f.is(target)) }

  /// Extract the value. On failure, unwinds to the enclosing
  /// [attempt](crate::attempt) which then returns the failure. Outside of a
  /// guarded scope this is an ordinary panic.
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.0 {
      Ok(t) => t,
      Err(e) => guard::bail(e),
    }
  }
  /// Extract the value or panic with the given message. Not intercepted by
  /// [attempt](crate::attempt).
  #[track_caller]
  pub fn expect(self, msg: &str) -> T {
    match self.0 {
      Ok(t) => t,
      Err(e) => panic!("{msg}: {e}"),
    }
  }
  /// Extract the failure, panicking with the success value if there is none
  #[track_caller]
  pub fn unwrap_err(self) -> Failure
  where T: fmt::Debug {
    match self.0 {
      Ok(t) => panic!("called `Outcome::unwrap_err()` on a success: {t:?}"),
      Err(e) => e,
    }
  }
  /// Extract the failure or panic with the given message
  #[track_caller]
  pub fn expect_err(self, msg: &str) -> Failure
  where T: fmt::Debug {
    match self.0 {
      Ok(t) => panic!("{msg}: {t:?}"),
      Err(e) => e,
    }
  }
  /// Extract the value or use the default
  pub fn unwrap_or(self, default: T) -> T { self.0.unwrap_or(default) }
  /// Extract the value or compute a fallback from the failure
  pub fn unwrap_or_else(self, f: impl FnOnce(Failure) -> T) -> T { self.0.unwrap_or_else(f) }
  /// Extract the value or the type's default
  pub fn unwrap_or_zero(self) -> T
  where T: Default {
    self.0.unwrap_or_default()
  }

  /// Transform the failure
  #[must_use]
  pub fn map_err(self, f: impl FnOnce(Failure) -> Failure) -> Self { Self(self.0.map_err(f)) }
  /// This if successful, otherwise `alternative`
  #[must_use]
  pub fn or(self, alternative: Self) -> Self {
    match self.0 {
      Ok(_) => self,
      Err(_) => alternative,
    }
  }
  /// This if successful, otherwise recover from the failure
  #[must_use]
  pub fn or_else(self, f: impl FnOnce(Failure) -> Self) -> Self {
    match self.0 {
      Ok(_) => self,
      Err(e) => f(e),
    }
  }
  /// Run a side effect on success
  pub fn if_ok(self, f: impl FnOnce(&T)) -> Self {
    if let Ok(t) = &self.0 {
      f(t)
    }
    self
  }
  /// Run a side effect on failure
  pub fn if_err(self, f: impl FnOnce(&Failure)) -> Self {
    if let Err(e) = &self.0 {
      f(e)
    }
    self
  }
  /// Run the side effect matching the state
  pub fn tap(self, ok: impl FnOnce(&T), err: impl FnOnce(&Failure)) -> Self {
    match &self.0 {
      Ok(t) => ok(t),
      Err(e) => err(e),
    }
    self
  }
  /// Hand the failure, if any, to a [Reporter]
  pub fn report(self, reporter: &impl Reporter) -> Self { self.if_err(|e| reporter.report(e)) }

  /// Read the value without checking the state. A failure yields the type's
  /// default, so check [Outcome::is_ok] first.
  pub fn into_ok(self) -> T
  where T: Default {
    self.0.unwrap_or_default()
  }
  /// Read the failure without checking the state
  pub fn into_err(self) -> Option<Failure> { self.0.err() }
  /// The value, if successful
  pub fn to_maybe(self) -> Maybe<T> { Maybe::from_option(self.0.ok()) }
  /// The failure, if failed
  pub fn to_maybe_err(self) -> Maybe<Failure> { Maybe::from_option(self.0.err()) }
  /// Split into a value and a possible failure. The value is the type's
  /// default on failure.
  pub fn unpack(self) -> (T, Option<Failure>)
  where T: Default {
    match self.0 {
      Ok(t) => (t, None),
      Err(e) => (T::default(), Some(e)),
    }
  }
  /// Borrow as a std result
  pub fn as_result(&self) -> Result<&T, &Failure> { self.0.as_ref() }
  /// Convert into a std result, so that `?` can be used
  pub fn into_result(self) -> Result<T, Failure> { self.0 }
  /// Convert into an [Either] with the success on the left
  pub fn into_either(self) -> Either<T, Failure> {
    match self.0 {
      Ok(t) => Either::left(t),
      Err(e) => Either::right(e),
    }
  }
}

impl<A, B> Outcome<(A, B)> {
  /// Adapt an API that returns two values together with a possible error
  pub fn of2<E: Into<Failure>>(a: A, b: B, err: Option<E>) -> Self { Self::of((a, b), err) }
}

impl<A, B, C> Outcome<(A, B, C)> {
  /// Adapt an API that returns three values together with a possible error
  pub fn of3<E: Into<Failure>>(a: A, b: B, c: C, err: Option<E>) -> Self { Self::of((a, b, c), err) }
}

impl Outcome<()> {
  /// Adapt an operation that only signals failure
  pub fn from_void<E: Into<Failure>>(err: Option<E>) -> Self { Self::of((), err) }
}

impl<T, E: Into<Failure>> From<Result<T, E>> for Outcome<T> {
  fn from(value: Result<T, E>) -> Self { Self(value.map_err(Into::into)) }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
  fn from(value: Outcome<T>) -> Self { value.0 }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Ok(t) => f.debug_tuple("Ok").field(t).finish(),
      Err(e) => f.debug_tuple("Err").field(e).finish(),
    }
  }
}

#[cfg(test)]
mod test {
  use std::cell::RefCell;
  use std::num::ParseIntError;

  use super::*;

  fn boom() -> Failure { Failure::msg("boom") }

  #[test]
  fn exactly_one_state() {
    for o in [Outcome::ok(1), Outcome::err(boom())] {
      assert_ne!(o.is_ok(), o.is_err());
    }
    assert_eq!(Outcome::ok(3).unwrap_or(4), 3);
    assert_eq!(Outcome::err(boom()).unwrap_or(4), 4);
  }

  #[test]
  fn constructors() {
    assert_eq!(Outcome::<u32>::err_or_default(None), Outcome::ok(0), "missing failure degrades");
    assert!(Outcome::<u32>::err_or_default(Some(boom())).is_err());
    assert_eq!(Outcome::of(5, None::<Failure>), Outcome::ok(5));
    assert_eq!(Outcome::of(5, Some(boom())), Outcome::err(boom()), "the value is discarded");
    assert_eq!(Outcome::of2(1, 'x', None::<Failure>), Outcome::ok((1, 'x')));
    assert_eq!(Outcome::of3(1, 'x', "y", Some(boom())).unwrap_err(), boom());
    assert!(Outcome::from_void(None::<Failure>).is_ok());
    assert!(Outcome::from_void(Some(boom())).contains_err(&boom()));
  }

  #[test]
  fn from_std_result() {
    let parsed: Outcome<u8> = "12".parse::<u8>().into();
    assert_eq!(parsed, Outcome::ok(12));
    let failed: Outcome<u8> = "x".parse::<u8>().into();
    assert!(failed.is_err_and(|f| f.is_kind::<ParseIntError>()));
    assert!(failed.clone().into_result().is_err());
    assert_eq!(failed.unpack().0, 0);
  }

  #[test]
  fn predicates() {
    assert!(Outcome::ok(2).is_ok_and(|n| *n == 2));
    assert!(!Outcome::err(boom()).is_ok_and(|_: &i32| true));
    let specific = Outcome::<()>::err(Failure::new("boom", "the reactor exploded"));
    assert!(specific.contains_err(&boom()), "category match");
    assert!(!specific.contains_err(&Failure::msg("fizzle")));
    assert!(!Outcome::ok(()).contains_err(&boom()));
  }

  #[test]
  #[should_panic(expected = "called `Outcome::unwrap()` on a failure: boom")]
  fn unwrap_outside_scope_panics() { Outcome::<()>::err(boom()).unwrap(); }

  #[test]
  #[should_panic(expected = "on a success: 7")]
  fn unwrap_err_on_success() { Outcome::ok(7).unwrap_err(); }

  #[test]
  #[should_panic(expected = "loading: boom")]
  fn expect_includes_failure() { Outcome::<()>::err(boom()).expect("loading"); }

  #[test]
  fn fallbacks() {
    assert_eq!(Outcome::err(boom()).unwrap_or_else(|f| f.message().len()), 4);
    assert_eq!(Outcome::<i32>::err(boom()).unwrap_or_zero(), 0);
    assert_eq!(Outcome::err(boom()).or(Outcome::ok(1)), Outcome::ok(1));
    assert_eq!(Outcome::ok(2).or(Outcome::ok(1)), Outcome::ok(2));
    assert_eq!(Outcome::err(boom()).or_else(|_| Outcome::ok(9)), Outcome::ok(9));
    let wrapped = Outcome::<()>::err(boom()).map_err(|f| f.context("outer"));
    assert!(wrapped.contains_err(&boom()));
  }

  #[test]
  fn taps_keep_the_outcome() {
    let seen = RefCell::new(Vec::new());
    let o = Outcome::ok(1)
      .if_ok(|n| seen.borrow_mut().push(format!("ok {n}")))
      .if_err(|e| seen.borrow_mut().push(format!("err {e}")))
      .tap(|n| seen.borrow_mut().push(format!("tap {n}")), |_| unreachable!());
    assert_eq!(o, Outcome::ok(1));
    Outcome::<i32>::err(boom()).tap(|_| unreachable!(), |e| seen.borrow_mut().push(format!("tap {e}")));
    assert_eq!(*seen.borrow(), vec!["ok 1", "tap 1", "tap boom"]);
  }

  #[test]
  fn decomposition() {
    assert_eq!(Outcome::ok(1).to_maybe(), Maybe::present(1));
    assert_eq!(Outcome::<i32>::err(boom()).to_maybe(), Maybe::absent());
    assert_eq!(Outcome::<i32>::err(boom()).to_maybe_err(), Maybe::present(boom()));
    assert_eq!(Outcome::<i32>::err(boom()).into_ok(), 0);
    assert_eq!(Outcome::ok(5).into_err(), None);
    assert_eq!(Outcome::ok(5).unpack(), (5, None));
    assert_eq!(Outcome::<i32>::err(boom()).unpack(), (0, Some(boom())));
    assert_eq!(Outcome::ok(5).as_result(), Ok(&5));
  }
}
