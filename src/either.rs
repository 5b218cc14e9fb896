//! A left or a right value with no privileged side.
//!
//! Unlike [Outcome], extracting the wrong side of an [Either] is always an
//! ordinary panic and never takes part in guarded evaluation. When an
//! [Either] is used to encode success and failure, the success is on the
//! **left** and the [Failure] on the right.

use std::fmt;

use itertools::{Either as ItEither, Itertools};
use never::Never;

use crate::failure::Failure;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::side::Side;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<L, R> {
  Left(L),
  Right(R),
}

#[track_caller]
fn wrong_side(method: &str, wanted: Side) -> ! {
  panic!("called `Either::{method}()` on a {}", wanted.opposite())
}

/// One of two values
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Either<L, R>(Repr<L, R>);

impl<L, R> Either<L, R> {
  /// A left value
  pub fn left(value: L) -> Self { Self(Repr::Left(value)) }
  /// A right value
  pub fn right(value: R) -> Self { Self(Repr::Right(value)) }

  /// Which tag is active
  #[must_use]
  pub fn side(&self) -> Side {
    match self.0 {
      Repr::Left(_) => Side::Left,
      Repr::Right(_) => Side::Right,
    }
  }
  /// Is this a left value
  #[must_use]
  pub fn is_left(&self) -> bool { self.side() == Side::Left }
  /// Is this a right value
  #[must_use]
  pub fn is_right(&self) -> bool { self.side() == Side::Right }
  /// Is this a left value satisfying the predicate
  #[must_use]
  pub fn is_left_and(&self, f: impl FnOnce(&L) -> bool) -> bool {
    match &self.0 {
      Repr::Left(l) => f(l),
      Repr::Right(_) => false,
    }
  }
  /// Is this a right value satisfying the predicate
  #[must_use]
  pub fn is_right_and(&self, f: impl FnOnce(&R) -> bool) -> bool {
    match &self.0 {
      Repr::Left(_) => false,
      Repr::Right(r) => f(r),
    }
  }
  /// Is this a left value equal to `target`
  #[must_use]
  pub fn contains_left(&self, target: &L) -> bool
  where L: PartialEq {
    self.is_left_and(|l| l == target)
  }
  /// Is this a right value equal to `target`
  #[must_use]
  pub fn contains_right(&self, target: &R) -> bool
  where R: PartialEq {
    self.is_right_and(|r| r == target)
  }

  /// Extract the left value, panicking on a right
  #[track_caller]
  pub fn unwrap_left(self) -> L {
    match self.0 {
      Repr::Left(l) => l,
      Repr::Right(_) => wrong_side("unwrap_left", Side::Left),
    }
  }
  /// Extract the right value, panicking on a left
  #[track_caller]
  pub fn unwrap_right(self) -> R {
    match self.0 {
      Repr::Left(_) => wrong_side("unwrap_right", Side::Right),
      Repr::Right(r) => r,
    }
  }
  /// Extract the left value or use the default
  pub fn unwrap_left_or(self, default: L) -> L { self.unwrap_left_or_else(|_| default) }
  /// Extract the right value or use the default
  pub fn unwrap_right_or(self, default: R) -> R { self.unwrap_right_or_else(|_| default) }
  /// Extract the left value or convert the right one
  pub fn unwrap_left_or_else(self, f: impl FnOnce(R) -> L) -> L { self.fold(|l| l, f) }
  /// Extract the right value or convert the left one
  pub fn unwrap_right_or_else(self, f: impl FnOnce(L) -> R) -> R { self.fold(f, |r| r) }
  /// The left value, if any
  pub fn left_value(self) -> Maybe<L> { self.fold(Maybe::present, |_| Maybe::absent()) }
  /// The right value, if any
  pub fn right_value(self) -> Maybe<R> { self.fold(|_| Maybe::absent(), Maybe::present) }
  /// Borrow both sides
  pub fn as_ref(&self) -> Either<&L, &R> {
    match &self.0 {
      Repr::Left(l) => Either::left(l),
      Repr::Right(r) => Either::right(r),
    }
  }

  /// Transform a left value
  pub fn map_left<L2>(self, f: impl FnOnce(L) -> L2) -> Either<L2, R> { self.map_both(f, |r| r) }
  /// Transform a right value
  pub fn map_right<R2>(self, f: impl FnOnce(R) -> R2) -> Either<L, R2> { self.map_both(|l| l, f) }
  /// Transform whichever side is active
  pub fn map_both<L2, R2>(self, lf: impl FnOnce(L) -> L2, rf: impl FnOnce(R) -> R2) -> Either<L2, R2> {
    self.fold(|l| Either::left(lf(l)), |r| Either::right(rf(r)))
  }
  /// Chain a computation on the left value
  pub fn flat_map_left<L2>(self, f: impl FnOnce(L) -> Either<L2, R>) -> Either<L2, R> {
    self.fold(f, Either::right)
  }
  /// Chain a computation on the right value
  pub fn flat_map_right<R2>(self, f: impl FnOnce(R) -> Either<L, R2>) -> Either<L, R2> {
    self.fold(Either::left, f)
  }
  /// Collapse into one value by invoking exactly one of the functions
  pub fn fold<T>(self, lf: impl FnOnce(L) -> T, rf: impl FnOnce(R) -> T) -> T {
    match self.0 {
      Repr::Left(l) => lf(l),
      Repr::Right(r) => rf(r),
    }
  }
  /// Exchange the sides
  #[must_use]
  pub fn swap(self) -> Either<R, L> { self.fold(Either::right, Either::left) }

  /// Run a side effect on a left value
  pub fn if_left(self, f: impl FnOnce(&L)) -> Self { self.tap(f, |_| ()) }
  /// Run a side effect on a right value
  pub fn if_right(self, f: impl FnOnce(&R)) -> Self { self.tap(|_| (), f) }
  /// Run the side effect matching the active side
  pub fn tap(self, lf: impl FnOnce(&L), rf: impl FnOnce(&R)) -> Self {
    match &self.0 {
      Repr::Left(l) => lf(l),
      Repr::Right(r) => rf(r),
    }
    self
  }

  /// Split a sequence into its left and right values, preserving order
  /// within each side
  pub fn partition(eithers: impl IntoIterator<Item = Self>) -> (Vec<L>, Vec<R>) {
    eithers.into_iter().partition_map(ItEither::<L, R>::from)
  }
}

impl<T> Either<T, T> {
  /// The value, whichever side it's on
  pub fn merge(self) -> T { self.fold(|t| t, |t| t) }
}

impl<L> Either<L, Never> {
  /// The left value of an either that cannot be right
  pub fn into_left(self) -> L { self.fold(|l| l, |n| match n {}) }
}

impl<R> Either<Never, R> {
  /// The right value of an either that cannot be left
  pub fn into_right(self) -> R { self.fold(|n| match n {}, |r| r) }
}

impl<T> Either<T, Failure> {
  /// Adapt a value reported alongside a possible error. The error goes right,
  /// the value left.
  pub fn from_pair<E: Into<Failure>>(value: T, err: Option<E>) -> Self {
    match err {
      Some(e) => Self::right(e.into()),
      None => Self::left(value),
    }
  }
  /// Split into a value and a possible failure. The value is the type's
  /// default if this is a right.
  pub fn to_pair(self) -> (T, Option<Failure>)
  where T: Default {
    self.fold(|t| (t, None), |e| (T::default(), Some(e)))
  }
  /// The failure, if this is a right
  pub fn err_right(&self) -> Option<Failure> {
    match &self.0 {
      Repr::Left(_) => None,
      Repr::Right(e) => Some(e.clone()),
    }
  }
  /// Is this a failure that [is](Failure::is) a `target`
  #[must_use]
  pub fn is_err(&self, target: &Failure) -> bool { self.is_right_and(|e| e.is(target)) }
  /// Convert to an outcome, left becoming success
  pub fn into_outcome(self) -> Outcome<T> { self.fold(Outcome::ok, Outcome::err) }
}

impl<T> From<Outcome<T>> for Either<T, Failure> {
  fn from(value: Outcome<T>) -> Self { value.into_either() }
}

impl<T> From<Either<T, Failure>> for Outcome<T> {
  fn from(value: Either<T, Failure>) -> Self { value.into_outcome() }
}

impl<L, R> From<ItEither<L, R>> for Either<L, R> {
  fn from(value: ItEither<L, R>) -> Self {
    match value {
      ItEither::Left(l) => Self::left(l),
      ItEither::Right(r) => Self::right(r),
    }
  }
}

impl<L, R> From<Either<L, R>> for ItEither<L, R> {
  fn from(value: Either<L, R>) -> Self { value.fold(ItEither::Left, ItEither::Right) }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0 {
      Repr::Left(l) => f.debug_tuple("Left").field(l).finish(),
      Repr::Right(r) => f.debug_tuple("Right").field(r).finish(),
    }
  }
}
