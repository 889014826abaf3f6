use std::fmt;
use std::sync::Arc;

use regex::Regex;

pub type EntryPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Debug, Clone)]
pub enum EntryMatcher {
  Path(String),
  Pattern(Regex),
}

impl EntryMatcher {
  pub fn matches(&self, entry: &str) -> bool {
    match self {
      Self::Path(path) => entry == path,
      Self::Pattern(pattern) => pattern.is_match(entry),
    }
  }
}

impl From<&str> for EntryMatcher {
  fn from(value: &str) -> Self {
    Self::Path(value.to_string())
  }
}

impl From<Regex> for EntryMatcher {
  fn from(value: Regex) -> Self {
    Self::Pattern(value)
  }
}

/// User-facing `entries` option. A bare matcher is accepted as shorthand for
/// a one-element list.
#[derive(Clone)]
pub enum Entries {
  Matcher(EntryMatcher),
  Matchers(Vec<EntryMatcher>),
  Predicate(EntryPredicate),
}

impl fmt::Debug for Entries {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Matcher(matcher) => f.debug_tuple("Matcher").field(matcher).finish(),
      Self::Matchers(matchers) => f.debug_tuple("Matchers").field(matchers).finish(),
      Self::Predicate(_) => f.write_str("Predicate(..)"),
    }
  }
}

impl From<&str> for Entries {
  fn from(value: &str) -> Self {
    Self::Matcher(value.into())
  }
}

impl From<Regex> for Entries {
  fn from(value: Regex) -> Self {
    Self::Matcher(value.into())
  }
}

#[derive(Clone)]
pub enum NormalizedEntries {
  Matchers(Vec<EntryMatcher>),
  Predicate(EntryPredicate),
}

impl NormalizedEntries {
  pub fn matches(&self, entry: &str) -> bool {
    match self {
      Self::Matchers(matchers) => matchers.iter().any(|matcher| matcher.matches(entry)),
      Self::Predicate(predicate) => predicate(entry),
    }
  }
}

impl fmt::Debug for NormalizedEntries {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Matchers(matchers) => f.debug_tuple("Matchers").field(matchers).finish(),
      Self::Predicate(_) => f.write_str("Predicate(..)"),
    }
  }
}

#[test]
fn test_entry_matcher() {
  assert!(EntryMatcher::from("main").matches("main"));
  assert!(!EntryMatcher::from("main").matches("main.js"));

  let pattern = EntryMatcher::from(Regex::new(r"^pages/").unwrap());
  assert!(pattern.matches("pages/home"));
  assert!(!pattern.matches("admin/pages"));
}

#[test]
fn test_normalized_entries_matches() {
  let entries = NormalizedEntries::Matchers(vec!["a".into(), "b".into()]);
  assert!(entries.matches("b"));
  assert!(!entries.matches("c"));

  let predicate = NormalizedEntries::Predicate(Arc::new(|entry| entry.starts_with("app")));
  assert!(predicate.matches("app/index"));
  assert!(!predicate.matches("vendor"));
}
