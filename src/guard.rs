//! Guarded evaluation. Inside [attempt] or [attempt_or], calling
//! [Outcome::unwrap] on a failure unwinds straight to the guard, which
//! returns the failure as a value. Every other panic passes through the
//! guard untouched.
//!
//! This relies on unwinding. Under `panic = "abort"` a short-circuit
//! terminates the process like any other panic.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use crate::either::Either;
use crate::failure::Failure;
use crate::outcome::Outcome;

/// The panic payload that carries a failure from [Outcome::unwrap] to the
/// nearest guard. Private so that nothing else can raise or catch it.
struct Bail(Failure);

thread_local! {
  static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks the dynamic extent of one guard on this thread
struct Scope;
impl Scope {
  fn enter() -> Self {
    DEPTH.with(|d| d.set(d.get() + 1));
    Self
  }
}
impl Drop for Scope {
  fn drop(&mut self) { DEPTH.with(|d| d.set(d.get() - 1)) }
}

fn in_scope() -> bool { DEPTH.with(|d| d.get() > 0) }

/// Abort the current guarded computation with `failure`. Outside of any
/// guard this is an ordinary panic. Inside one the unwind starts without
/// running the panic hook, so the sentinel is never seen outside this module.
#[track_caller]
pub(crate) fn bail(failure: Failure) -> ! {
  if !in_scope() {
    panic!("called `Outcome::unwrap()` on a failure: {failure}")
  }
  panic::resume_unwind(Box::new(Bail(failure)))
}

fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, Failure> {
  let scope = Scope::enter();
  let caught = panic::catch_unwind(AssertUnwindSafe(f));
  drop(scope);
  match caught {
    Ok(t) => Ok(t),
    Err(payload) => match payload.downcast::<Bail>() {
      Ok(bail) => Err(bail.0),
      Err(other) => panic::resume_unwind(other),
    },
  }
}

/// Run a computation that extracts values with [Outcome::unwrap]. The first
/// failed unwrap aborts the computation and becomes the returned failure.
///
/// ```
/// use orchid_fp::{attempt, Failure, Outcome};
///
/// fn half(n: i32) -> Outcome<i32> {
///   if n % 2 == 0 { Outcome::ok(n / 2) } else { Outcome::err(Failure::msg("odd")) }
/// }
/// assert_eq!(attempt(|| half(half(8).unwrap()).unwrap()), Outcome::ok(2));
/// assert_eq!(attempt(|| half(half(6).unwrap()).unwrap()), Outcome::err(Failure::msg("odd")));
/// ```
///
/// Guards nest: a failure is returned by the innermost guard whose
/// computation raised it. Panics that do not come from [Outcome::unwrap]
/// propagate out of the guard with their original payload.
pub fn attempt<T>(f: impl FnOnce() -> T) -> Outcome<T> { guarded(f).into() }

/// Like [attempt], but a failure is handed to `catch` and its result is
/// returned on the right.
pub fn attempt_or<L, R>(try_fn: impl FnOnce() -> L, catch: impl FnOnce(Failure) -> R) -> Either<L, R> {
  match guarded(try_fn) {
    Ok(l) => Either::left(l),
    Err(e) => Either::right(catch(e)),
  }
}
