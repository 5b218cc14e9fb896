#![warn(missing_docs)]
#![doc(
  html_logo_url = "https://raw.githubusercontent.com/lbfalvy/orchid/master/icon.svg"
)]
#![doc(
  html_favicon_url = "https://raw.githubusercontent.com/lbfalvy/orchid/master/icon.svg"
)]
//! Tagged two-state containers for absence and failure, with combinators to
//! chain them without branching at every step.
//!
//! - [Maybe] is a value or nothing
//! - [Outcome] is a value or a [Failure]
//! - [Either] is one of two values with no privileged side
//!
//! [attempt] lets a block extract values with [Outcome::unwrap] and turns the
//! first failure into the block's return value. Panics from anywhere else
//! pass through it untouched.
pub mod either;
pub mod failure;
pub mod guard;
pub mod logging;
pub mod maybe;
pub mod must;
pub mod outcome;
pub mod side;

pub use either::Either;
pub use failure::{DynFailureKind, Failure, FailureKind, NoResults, Reporter};
pub use guard::{attempt, attempt_or};
pub use logging::{LogStrategy, Logger};
pub use maybe::Maybe;
pub use outcome::seq::{
  all2, all3, all_errors, all_of, all_of_collect_errs, first_ok, map_all, map_all_ok, partition,
  partition_outcomes,
};
pub use outcome::Outcome;
pub use side::Side;
