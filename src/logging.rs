//! Minimal line logger, used to report failures as they pass through a chain
//! of combinators. See [Outcome::report](crate::Outcome::report).

use std::fs::OpenOptions;
use std::io::Write;

use crate::failure::{Failure, Reporter};

/// Where log lines go
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogStrategy {
  /// Standard error
  StdErr,
  /// Append to the file at this path
  File(String),
  /// Drop every message
  Discard,
}

/// Writes lines according to a [LogStrategy]
#[derive(Clone, Debug)]
pub struct Logger(LogStrategy);
impl Logger {
  /// A logger that writes according to `strat`
  pub fn new(strat: LogStrategy) -> Self { Self(strat) }
  /// Write one line. If the log file can't be written the line goes to
  /// stderr instead.
  pub fn log(&self, msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    match &self.0 {
      LogStrategy::StdErr => eprintln!("{msg}"),
      LogStrategy::File(path) => {
        let written = OpenOptions::new()
          .create(true)
          .append(true)
          .open(path)
          .and_then(|mut f| writeln!(f, "{msg}"));
        if let Err(e) = written {
          eprintln!("{msg}\n(could not write to log file {path}: {e})")
        }
      },
      LogStrategy::Discard => (),
    }
  }
  /// Where this logger writes
  pub fn strat(&self) -> LogStrategy { self.0.clone() }
}

impl Reporter for Logger {
  fn report(&self, failure: &Failure) {
    for part in failure.iter() {
      self.log(format!("[{}] {part}", part.description()))
    }
  }
}
