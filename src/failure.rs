//! The opaque, inspectable failure value carried by every failed [Outcome],
//! and the trait through which callers define their own failure categories.
//!
//! [Outcome]: crate::Outcome

use std::any::{type_name, Any};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

/// A category of recoverable failure. Implement this for every distinct
/// condition callers may want to recognize; [Failure::is_kind] and
/// [Failure::downcast_ref] find it again inside wrapped or combined failures.
pub trait FailureKind: Send + Sync + 'static {
  /// A general description of this category of failure
  const DESCRIPTION: &'static str;
  /// A formatted message that includes specific parameters
  #[must_use]
  fn message(&self) -> String { Self::DESCRIPTION.to_string() }
  /// Type-erase the failure so it can travel in an [Outcome](crate::Outcome)
  #[must_use]
  fn pack(self) -> Failure
  where Self: Sized {
    Failure::leaf(self)
  }
}

/// Object-safe version of [FailureKind]. Implement that instead of this.
pub trait DynFailureKind: Send + Sync {
  /// Access type information about this failure
  #[must_use]
  fn as_any(&self) -> &dyn Any;
  /// A general description of this category of failure
  #[must_use]
  fn description(&self) -> &str;
  /// A formatted message that includes specific parameters
  #[must_use]
  fn message(&self) -> String;
}

impl<T: FailureKind> DynFailureKind for T {
  fn as_any(&self) -> &dyn Any { self }
  fn description(&self) -> &str { T::DESCRIPTION }
  fn message(&self) -> String { FailureKind::message(self) }
}

/// Ad-hoc failure with a runtime description
struct Plain {
  description: String,
  message: String,
}
impl DynFailureKind for Plain {
  fn as_any(&self) -> &dyn Any { self }
  fn description(&self) -> &str { &self.description }
  fn message(&self) -> String { self.message.clone() }
}

/// An error from outside the library. The category is the Rust type.
struct Foreign<E>(E);
impl<E: Error + Send + Sync + 'static> DynFailureKind for Foreign<E> {
  fn as_any(&self) -> &dyn Any { &self.0 }
  fn description(&self) -> &str { type_name::<E>() }
  fn message(&self) -> String { self.0.to_string() }
}

enum Repr {
  Leaf(Box<dyn DynFailureKind>),
  Context { message: String, cause: Failure },
  Joined(Vec<Failure>),
}

/// A recoverable failure. Cloning is cheap, the payload is shared.
///
/// A failure is either a single categorized condition, a condition wrapped in
/// any number of [context](Failure::context) layers, or a combination of
/// several failures produced by the collecting combinators. Inspection with
/// [Failure::is] sees through all of these.
#[derive(Clone)]
pub struct Failure(Arc<Repr>);
impl Failure {
  fn leaf(kind: impl DynFailureKind + 'static) -> Self { Self(Arc::new(Repr::Leaf(Box::new(kind)))) }

  /// A failure with a runtime description. Failures with the same
  /// description belong to the same category for the purposes of
  /// [Failure::is].
  pub fn new(description: impl Into<String>, message: impl Into<String>) -> Self {
    Self::leaf(Plain { description: description.into(), message: message.into() })
  }

  /// A failure whose description is also its message, useful for sentinel
  /// values that are compared with [Failure::is]
  pub fn msg(text: impl Into<String>) -> Self {
    let text = text.into();
    Self::new(text.clone(), text)
  }

  /// Wrap an error from another library. The error type becomes the
  /// category, and [Failure::downcast_ref] recovers the original value.
  /// [Failure::is] compares only the category, so any two wrapped errors of
  /// the same type match each other regardless of their values.
  pub fn foreign<E: Error + Send + Sync + 'static>(error: E) -> Self { Self::leaf(Foreign(error)) }

  /// Add a layer of explanation on top of this failure. The cause remains
  /// visible to [Failure::is] and [Failure::downcast_ref].
  #[must_use]
  pub fn context(self, message: impl Into<String>) -> Self {
    Self(Arc::new(Repr::Context { message: message.into(), cause: self }))
  }

  /// Combine any number of failures into one that preserves every
  /// constituent in order. Returns [None] if the iterator was empty and the
  /// failure itself if there was exactly one.
  pub fn join(failures: impl IntoIterator<Item = Failure>) -> Option<Self> {
    let mut flat = Vec::new();
    for f in failures {
      match &*f.0 {
        Repr::Joined(v) => flat.extend(v.iter().cloned()),
        _ => flat.push(f),
      }
    }
    match flat.len() {
      0 => None,
      1 => flat.pop(),
      _ => Some(Self(Arc::new(Repr::Joined(flat)))),
    }
  }

  /// A general description of the failure's category. For combined failures
  /// this is a fixed summary.
  #[must_use]
  pub fn description(&self) -> &str {
    match &*self.0 {
      Repr::Leaf(kind) => kind.description(),
      Repr::Context { cause, .. } => cause.description(),
      Repr::Joined(_) => "multiple failures",
    }
  }

  /// The specific message, including every context layer
  #[must_use]
  pub fn message(&self) -> String {
    match &*self.0 {
      Repr::Leaf(kind) => kind.message(),
      Repr::Context { message, cause } => format!("{message}: {}", cause.message()),
      Repr::Joined(v) => v.iter().map(Failure::message).join("\n"),
    }
  }

  /// The constituents of a combined failure, or the failure itself
  pub fn iter(&self) -> impl Iterator<Item = &Failure> {
    match &*self.0 {
      Repr::Joined(v) => v.iter(),
      _ => std::slice::from_ref(self).iter(),
    }
  }

  /// Number of constituent failures
  #[must_use]
  pub fn len(&self) -> usize { self.iter().count() }

  /// Always false, a failure has at least one constituent
  #[must_use]
  pub fn is_empty(&self) -> bool { false }

  /// "is-a" test. True if this failure equals `target`, or if `target` is a
  /// single categorized failure and a failure of the same category appears
  /// anywhere in this failure's context chain or among its constituents.
  #[must_use]
  pub fn is(&self, target: &Failure) -> bool {
    if Arc::ptr_eq(&self.0, &target.0) || self == target {
      return true;
    }
    match (&*self.0, &*target.0) {
      (Repr::Leaf(own), Repr::Leaf(other)) => own.description() == other.description(),
      (Repr::Context { cause, .. }, _) => cause.is(target),
      (Repr::Joined(v), _) => v.iter().any(|f| f.is(target)),
      (Repr::Leaf(_), _) => false,
    }
  }

  /// Whether a failure of kind `K` appears anywhere in this failure
  #[must_use]
  pub fn is_kind<K: Any>(&self) -> bool { self.downcast_ref::<K>().is_some() }

  /// Find the first failure of kind `K`, searching through context layers and
  /// combined failures in order. `K` may also be a foreign error type.
  #[must_use]
  pub fn downcast_ref<K: Any>(&self) -> Option<&K> {
    match &*self.0 {
      Repr::Leaf(kind) => kind.as_any().downcast_ref(),
      Repr::Context { cause, .. } => cause.downcast_ref(),
      Repr::Joined(v) => v.iter().find_map(|f| f.downcast_ref()),
    }
  }
}

impl<E: Error + Send + Sync + 'static> From<E> for Failure {
  fn from(value: E) -> Self { Self::foreign(value) }
}

impl PartialEq for Failure {
  fn eq(&self, other: &Self) -> bool {
    if Arc::ptr_eq(&self.0, &other.0) {
      return true;
    }
    match (&*self.0, &*other.0) {
      (Repr::Leaf(a), Repr::Leaf(b)) =>
        a.description() == b.description() && a.message() == b.message(),
      (Repr::Context { message: m1, cause: c1 }, Repr::Context { message: m2, cause: c2 }) =>
        m1 == m2 && c1 == c2,
      (Repr::Joined(a), Repr::Joined(b)) => a == b,
      _ => false,
    }
  }
}
impl Eq for Failure {}

impl fmt::Display for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &*self.0 {
      Repr::Leaf(kind) => {
        let (description, message) = (kind.description(), kind.message());
        if description == message { write!(f, "{message}") } else { write!(f, "{description}: {message}") }
      },
      Repr::Context { message, cause } => write!(f, "{message}: {cause}"),
      Repr::Joined(v) => write!(f, "{}", v.iter().join("\n")),
    }
  }
}

impl fmt::Debug for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Failure({self})") }
}

/// Raised by [first_ok](crate::first_ok) when it receives no outcomes at all
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoResults;
impl FailureKind for NoResults {
  const DESCRIPTION: &'static str = "no results provided";
}

/// Something that accepts failures for display or storage without consuming
/// the outcome they came from
pub trait Reporter {
  /// Record a failure
  fn report(&self, failure: &Failure);
}
