//! Fail-fast helpers for conditions a program cannot continue without, such
//! as missing configuration at startup. Every function here raises an
//! ordinary panic, which [attempt](crate::attempt) never intercepts.

use std::env;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use hashbrown::HashMap;
use regex::Regex;
use trait_set::trait_set;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

trait_set! {
  /// Keys that [key] can look up and print when they are missing
  pub trait LookupKey = Hash + Eq + fmt::Debug;
}

/// The value of an outcome, or a panic naming the failure
#[track_caller]
pub fn get<T>(outcome: impl Into<Outcome<T>>) -> T { require(outcome, "must::get") }

/// The value of an outcome, or a panic with `msg` and the failure
#[track_caller]
pub fn require<T>(outcome: impl Into<Outcome<T>>, msg: &str) -> T { outcome.into().expect(msg) }

/// Panic with `msg` unless `cond` holds
#[track_caller]
pub fn be(cond: bool, msg: &str) {
  if !cond {
    panic!("assertion failed: {msg}")
  }
}

/// Mark a branch the program logic excludes
#[track_caller]
pub fn unreachable(msg: &str) -> ! { panic!("entered unreachable code: {msg}") }

/// The value of a present [Maybe], or a panic with `msg`
#[track_caller]
pub fn present<T>(maybe: Maybe<T>, msg: &str) -> T { maybe.expect(msg) }

/// A required environment variable
#[track_caller]
pub fn env(name: &str) -> String {
  match env::var(name) {
    Ok(v) => v,
    Err(e) => panic!("environment variable {name}: {e}"),
  }
}

/// An environment variable, or `default` if it is not set. A variable that is
/// set but not valid unicode still panics.
#[track_caller]
pub fn env_or(name: &str, default: &str) -> String {
  match env::var(name) {
    Ok(v) => v,
    Err(env::VarError::NotPresent) => default.to_string(),
    Err(e) => panic!("environment variable {name}: {e}"),
  }
}

fn parse_var<T: FromStr>(name: &str, text: &str) -> T
where T::Err: fmt::Display {
  match text.parse() {
    Ok(t) => t,
    Err(e) => panic!("environment variable {name}={text:?} could not be parsed: {e}"),
  }
}

/// A required environment variable parsed into `T`
#[track_caller]
pub fn env_parse<T: FromStr>(name: &str) -> T
where T::Err: fmt::Display {
  parse_var(name, &env(name))
}

/// An environment variable parsed into `T`, or `default` if it is not set
#[track_caller]
pub fn env_parse_or<T: FromStr>(name: &str, default: T) -> T
where T::Err: fmt::Display {
  match env::var(name) {
    Ok(v) => parse_var(name, &v),
    Err(env::VarError::NotPresent) => default,
    Err(e) => panic!("environment variable {name}: {e}"),
  }
}

/// Compile a regular expression that is known to be valid
#[track_caller]
pub fn regex(pattern: &str) -> Regex {
  match Regex::new(pattern) {
    Ok(r) => r,
    Err(e) => panic!("invalid regex {pattern:?}: {e}"),
  }
}

/// The element at `i`, or a panic naming the index and the length
#[track_caller]
pub fn index<T>(slice: &[T], i: usize) -> &T {
  match slice.get(i) {
    Some(t) => t,
    None => panic!("index {i} out of bounds for a slice of {}", slice.len()),
  }
}

/// The entry for `k`, or a panic naming the key
#[track_caller]
pub fn key<'a, K: LookupKey, V>(map: &'a HashMap<K, V>, k: &K) -> &'a V {
  match map.get(k) {
    Some(v) => v,
    None => panic!("key {k:?} not found"),
  }
}

#[cfg(test)]
mod test {
  use std::panic;

  use super::*;
  use crate::attempt;
  use crate::failure::Failure;

  #[test]
  fn passes_values_through() {
    assert_eq!(get(Outcome::ok(3)), 3);
    assert_eq!(get("42".parse::<u8>()), 42, "std results are accepted");
    assert_eq!(present(Maybe::present('a'), "letter"), 'a');
    be(true, "never shown");
    assert!(regex(r"^\d+$").is_match("123"));
    assert_eq!(*index(&[1, 2, 3], 2), 3);
    let map = HashMap::from([("a", 1)]);
    assert_eq!(*key(&map, &"a"), 1);
  }

  #[test]
  #[should_panic(expected = "reading config: no such file")]
  fn require_names_the_failure() {
    require(Outcome::<()>::err(Failure::msg("no such file")), "reading config");
  }

  #[test]
  #[should_panic(expected = "index 5 out of bounds for a slice of 2")]
  fn index_out_of_bounds() { index(&[0, 1], 5); }

  #[test]
  #[should_panic(expected = "key \"b\" not found")]
  fn missing_key() { key(&HashMap::from([("a", 1)]), &"b"); }

  #[test]
  #[should_panic(expected = "invalid regex")]
  fn bad_regex() { regex("("); }

  #[test]
  fn environment() {
    let name = "ORCHID_FP_MUST_TEST_UNSET";
    assert_eq!(env_or(name, "fallback"), "fallback");
    assert_eq!(env_parse_or(name, 8u16), 8);
    assert!(panic::catch_unwind(|| env(name)).is_err());
    assert!(panic::catch_unwind(|| env_parse::<u16>(name)).is_err());
  }

  #[test]
  fn reads_variables_set_by_cargo() {
    let major: u16 = env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap();
    assert_eq!(env("CARGO_PKG_NAME"), env!("CARGO_PKG_NAME"));
    assert_eq!(env_or("CARGO_PKG_NAME", "fallback"), env!("CARGO_PKG_NAME"));
    assert_eq!(env_parse::<u16>("CARGO_PKG_VERSION_MAJOR"), major);
    assert_eq!(env_parse_or("CARGO_PKG_VERSION_MAJOR", major + 1), major);
  }

  #[test]
  fn guards_do_not_intercept() {
    let caught = panic::catch_unwind(|| attempt(|| be(false, "invariant")));
    assert!(caught.is_err(), "a failed assertion escapes the guard");
    let caught = panic::catch_unwind(|| attempt(|| get(Outcome::<i32>::err(Failure::msg("x")))));
    assert!(caught.is_err(), "get is not a short-circuit");
  }
}
