use clap::Parser;
use hashbrown::HashMap;
use itertools::Itertools;
use orchid_fp::{attempt, must, Failure, LogStrategy, Logger, Maybe, Outcome};

/// Compute access levels for users in a small in-memory store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// User ids to look up
  #[arg(default_values_t = [0, 1, 2, 3, 99])]
  pub ids: Vec<u64>,
  /// Append failures to this file instead of stderr. Falls back to the
  /// FPDEMO_LOG environment variable.
  #[arg(short, long)]
  pub log: Option<String>,
  /// Use guarded unwrapping instead of combinator chains
  #[arg(long)]
  pub guarded: bool,
}
impl Args {
  pub fn logger(&self) -> Logger {
    let path = (self.log.clone()).unwrap_or_else(|| must::env_or("FPDEMO_LOG", ""));
    Logger::new(if path.is_empty() { LogStrategy::StdErr } else { LogStrategy::File(path) })
  }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct User {
  id: u64,
  email: Maybe<String>,
}

type Db = HashMap<u64, User>;

fn sample_db() -> Db {
  [
    User { id: 0, email: Maybe::present(String::new()) },
    User { id: 1, email: Maybe::present("alice@admin.com".to_string()) },
    User { id: 2, email: Maybe::absent() },
    User { id: 3, email: Maybe::present("bob@unknown.com".to_string()) },
    User { id: 4, email: Maybe::present("carol@user.com".to_string()) },
  ]
  .into_iter()
  .map(|u| (u.id, u))
  .collect()
}

fn not_found() -> Failure { Failure::msg("not found") }
fn invalid_email() -> Failure { Failure::msg("invalid email") }

fn get_user(db: &Db, id: u64) -> Outcome<User> {
  Maybe::from_zero(db.get(&id).cloned().unwrap_or_default()).ok_or_else(not_found)
}

fn validate_email(email: String) -> Outcome<String> {
  if email.contains('@') { Outcome::ok(email) } else { Outcome::err(invalid_email()) }
}

fn domain_access(email: String) -> Maybe<u8> {
  if email.ends_with("@admin.com") {
    Maybe::present(10)
  } else if email.ends_with("@user.com") {
    Maybe::present(1)
  } else {
    Maybe::absent()
  }
}

fn compute_access(db: &Db, id: u64) -> Outcome<Maybe<u8>> {
  get_user(db, id).and_then(|user| {
    (user.email).map_or(Outcome::ok(Maybe::absent()), |e| validate_email(e).map(domain_access))
  })
}

fn compute_access_guarded(db: &Db, id: u64) -> Outcome<Maybe<u8>> {
  attempt(|| {
    let user = get_user(db, id).unwrap();
    (user.email).map(|e| validate_email(e).unwrap()).and_then(domain_access)
  })
}

fn main() {
  let args = Args::parse();
  let logger = args.logger();
  let db = sample_db();
  let compute = if args.guarded { compute_access_guarded } else { compute_access };
  let results = (args.ids.iter())
    .map(|&id| {
      compute(&db, id)
        .map_err(|e| e.context(format!("id={id}")))
        .report(&logger)
        .if_ok(|level| {
          level.match_with(
            |level| println!("id={id} -> access level: {level}"),
            || println!("id={id} -> email not found or domain does not match"),
          )
        })
    })
    .collect_vec();
  let failed = results.iter().filter(|o| o.is_err()).count();
  println!("{} looked up, {failed} failed", results.len());
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn both_styles_agree() {
    let db = sample_db();
    for id in [0, 1, 2, 3, 4, 99] {
      assert_eq!(compute_access(&db, id), compute_access_guarded(&db, id), "id={id}");
    }
  }

  #[test]
  fn access_levels() {
    let db = sample_db();
    assert_eq!(compute_access(&db, 1), Outcome::ok(Maybe::present(10)));
    assert_eq!(compute_access(&db, 4), Outcome::ok(Maybe::present(1)));
    assert_eq!(compute_access(&db, 2), Outcome::ok(Maybe::absent()), "no email");
    assert_eq!(compute_access(&db, 3), Outcome::ok(Maybe::absent()), "unknown domain");
    assert!(compute_access(&db, 0).contains_err(&invalid_email()));
    assert!(compute_access(&db, 99).contains_err(&not_found()));
  }
}
