use packtrace_common::{Entries, NormalizedEntries};

/// Expands the bare-matcher shorthand into a one-element list. Matcher lists
/// and predicates pass through untouched; pattern syntax is not checked here.
pub fn normalize_entries(entries: Option<Entries>) -> Option<NormalizedEntries> {
  entries.map(|entries| match entries {
    Entries::Matcher(matcher) => NormalizedEntries::Matchers(vec![matcher]),
    Entries::Matchers(matchers) => NormalizedEntries::Matchers(matchers),
    Entries::Predicate(predicate) => NormalizedEntries::Predicate(predicate),
  })
}

#[test]
fn test_unset_entries_stay_unset() {
  assert!(normalize_entries(None).is_none());
}

#[test]
fn test_bare_matcher_is_wrapped() {
  let normalized = normalize_entries(Some("foo.js".into()));
  match normalized {
    Some(NormalizedEntries::Matchers(matchers)) => {
      assert_eq!(matchers.len(), 1);
      assert!(matchers[0].matches("foo.js"));
    }
    _ => panic!("expected a one-element matcher list"),
  }
}

#[test]
fn test_matcher_list_passes_through() {
  let entries = Entries::Matchers(vec!["main".into(), "admin".into()]);
  match normalize_entries(Some(entries)) {
    Some(NormalizedEntries::Matchers(matchers)) => assert_eq!(matchers.len(), 2),
    _ => panic!("expected the matcher list unchanged"),
  }
}

#[test]
fn test_predicate_keeps_its_identity() {
  use std::sync::Arc;

  use packtrace_common::EntryPredicate;

  let predicate: EntryPredicate = Arc::new(|entry| entry.ends_with(".js"));
  let normalized = normalize_entries(Some(Entries::Predicate(Arc::clone(&predicate))));
  match normalized {
    Some(NormalizedEntries::Predicate(out)) => assert!(Arc::ptr_eq(&predicate, &out)),
    _ => panic!("expected the predicate unchanged"),
  }
}
