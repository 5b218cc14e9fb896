//! Combinators over several outcomes at once. The short-circuiting ones stop
//! at the first failure in iteration order; the collecting ones look at every
//! input and [join](Failure::join) all failures they find.

use itertools::{Either as ItEither, Itertools};

use super::Outcome;
use crate::failure::{Failure, FailureKind, NoResults};

/// Combine two independent outcomes. The first failure in argument order
/// wins.
pub fn all2<A, B>(a: Outcome<A>, b: Outcome<B>) -> Outcome<(A, B)> {
  match (a.0, b.0) {
    (Err(e), _) | (_, Err(e)) => Outcome::err(e),
    (Ok(a), Ok(b)) => Outcome::ok((a, b)),
  }
}

/// Combine three independent outcomes. The first failure in argument order
/// wins.
pub fn all3<A, B, C>(a: Outcome<A>, b: Outcome<B>, c: Outcome<C>) -> Outcome<(A, B, C)> {
  all2(all2(a, b), c).map(|((a, b), c)| (a, b, c))
}

/// All values in order, or the first failure. Stops consuming the iterator
/// at that failure.
pub fn all_of<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> Outcome<Vec<T>> {
  outcomes.into_iter().map(Outcome::into_result).collect::<Result<Vec<_>, _>>().into()
}

/// All values in order, or a failure combining every failure found. Does not
/// short-circuit.
pub fn all_of_collect_errs<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> Outcome<Vec<T>> {
  let (values, errors) = partition(outcomes);
  match Failure::join(errors) {
    Some(e) => Outcome::err(e),
    None => Outcome::ok(values),
  }
}

/// The first success. If there is none, a failure combining every failure in
/// order, or [NoResults] if the iterator was empty.
pub fn first_ok<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> Outcome<T> {
  let mut errors = Vec::new();
  for o in outcomes {
    match o.0 {
      Ok(t) => return Outcome::ok(t),
      Err(e) => errors.push(e),
    }
  }
  Outcome::err(Failure::join(errors).unwrap_or_else(|| NoResults.pack()))
}

/// Every failure in order, discarding the successes
pub fn all_errors<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> Vec<Failure> {
  outcomes.into_iter().filter_map(Outcome::into_err).collect()
}

/// Split into successful values and failures, preserving relative order
pub fn partition<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> (Vec<T>, Vec<Failure>) {
  outcomes.into_iter().partition_map(|o| match o.0 {
    Ok(t) => ItEither::Left(t),
    Err(e) => ItEither::Right(e),
  })
}

/// Split into successes and failures without unwrapping them
pub fn partition_outcomes<T>(
  outcomes: impl IntoIterator<Item = Outcome<T>>,
) -> (Vec<Outcome<T>>, Vec<Outcome<T>>) {
  outcomes.into_iter().partition(Outcome::is_ok)
}

/// Apply a fallible function to every input
pub fn map_all<T, U>(
  inputs: impl IntoIterator<Item = T>,
  f: impl FnMut(T) -> Outcome<U>,
) -> Vec<Outcome<U>> {
  inputs.into_iter().map(f).collect_vec()
}

/// Apply a fallible function to every input, stopping at the first failure
pub fn map_all_ok<T, U>(
  inputs: impl IntoIterator<Item = T>,
  f: impl FnMut(T) -> Outcome<U>,
) -> Outcome<Vec<U>> {
  all_of(inputs.into_iter().map(f))
}
