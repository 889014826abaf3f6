use packtrace_common::{
  IgnorePatterns, Include, IncludeEntry, IncludeItem, NormalizedIncludeEntry, PluginOptions,
};

const DEFAULT_IGNORE: &[&str] = &["node_modules"];
const DEFAULT_EXT: &[&str] = &["js", "map", "jsbundle", "bundle"];

/// Unifies the `include` shorthand shapes into a list of entries, then
/// resolves every entry field against the top-level fallbacks so each entry
/// is self-contained afterwards.
pub fn normalize_include(include: Include, top: &PluginOptions) -> Vec<NormalizedIncludeEntry> {
  unify_include_shape(include).into_iter().map(|entry| resolve_entry(entry, top)).collect()
}

fn unify_include_shape(include: Include) -> Vec<IncludeEntry> {
  match include {
    Include::Path(path) => vec![path.into()],
    Include::Entry(entry) => vec![entry],
    Include::Items(items) => items
      .into_iter()
      .map(|item| match item {
        IncludeItem::Path(path) => path.into(),
        IncludeItem::Entry(entry) => entry,
      })
      .collect(),
  }
}

/// Layered resolution: the entry value wins over the top-level fallback,
/// which wins over the hardcoded default.
fn layered<T: Clone>(own: Option<T>, top: Option<&T>, default: T) -> T {
  inherited(own, top).unwrap_or(default)
}

/// Same priority order, for fields without a hardcoded default.
fn inherited<T: Clone>(own: Option<T>, top: Option<&T>) -> Option<T> {
  own.or_else(|| top.cloned())
}

fn resolve_entry(entry: IncludeEntry, top: &PluginOptions) -> NormalizedIncludeEntry {
  // An explicitly empty `ignore`/`ext` list is a deliberate override and
  // suppresses the default.
  let ignore = match inherited(entry.ignore, top.ignore.as_ref()) {
    Some(IgnorePatterns::Single(pattern)) => vec![pattern],
    Some(IgnorePatterns::Multiple(patterns)) => patterns,
    None => DEFAULT_IGNORE.iter().map(ToString::to_string).collect(),
  };

  let ext = inherited(entry.ext, top.ext.as_ref())
    .unwrap_or_else(|| DEFAULT_EXT.iter().map(ToString::to_string).collect())
    .into_iter()
    .map(|ext| dot_prefixed(&ext))
    .collect();

  NormalizedIncludeEntry {
    paths: entry.paths,
    ignore,
    ext,
    ignore_file: inherited(entry.ignore_file, top.ignore_file.as_ref()),
    url_prefix: inherited(entry.url_prefix, top.url_prefix.as_ref()),
    url_suffix: inherited(entry.url_suffix, top.url_suffix.as_ref()),
    strip_prefix: inherited(entry.strip_prefix, top.strip_prefix.as_ref()),
    strip_common_prefix: layered(entry.strip_common_prefix, top.strip_common_prefix.as_ref(), false),
    source_map_reference: layered(entry.source_map_reference, top.source_map_reference.as_ref(), true),
    rewrite: layered(entry.rewrite, top.rewrite.as_ref(), true),
    validate: layered(entry.validate, top.validate.as_ref(), false),
  }
}

/// Strips at most one leading dot before re-adding it, so already-prefixed
/// extensions pass through unchanged.
fn dot_prefixed(ext: &str) -> String {
  format!(".{}", ext.strip_prefix('.').unwrap_or(ext))
}

#[cfg(test)]
fn default_entry(paths: Vec<String>) -> NormalizedIncludeEntry {
  NormalizedIncludeEntry {
    paths,
    ignore: vec!["node_modules".to_string()],
    ext: vec![".js".to_string(), ".map".to_string(), ".jsbundle".to_string(), ".bundle".to_string()],
    ignore_file: None,
    url_prefix: None,
    url_suffix: None,
    strip_prefix: None,
    strip_common_prefix: false,
    source_map_reference: true,
    rewrite: true,
    validate: false,
  }
}

#[test]
fn test_bare_path_gets_all_defaults() {
  let normalized = normalize_include("dist/**".into(), &PluginOptions::default());
  assert_eq!(normalized, vec![default_entry(vec!["dist/**".to_string()])]);
}

#[test]
fn test_single_entry_object_is_wrapped() {
  let entry = IncludeEntry { validate: Some(true), ..IncludeEntry::from("build") };
  let normalized = normalize_include(entry.into(), &PluginOptions::default());
  assert_eq!(
    normalized,
    vec![NormalizedIncludeEntry { validate: true, ..default_entry(vec!["build".to_string()]) }]
  );
}

#[test]
fn test_mixed_items_with_hoisted_url_prefix() {
  let include = Include::Items(vec![
    IncludeItem::Path("a.js".to_string()),
    IncludeItem::Entry(IncludeEntry { validate: Some(true), ..IncludeEntry::from("b.js") }),
  ]);
  let top = PluginOptions { url_prefix: Some("~/".to_string()), ..PluginOptions::default() };

  let normalized = normalize_include(include, &top);
  assert_eq!(
    normalized,
    vec![
      NormalizedIncludeEntry {
        url_prefix: Some("~/".to_string()),
        ..default_entry(vec!["a.js".to_string()])
      },
      NormalizedIncludeEntry {
        url_prefix: Some("~/".to_string()),
        validate: true,
        ..default_entry(vec!["b.js".to_string()])
      },
    ]
  );
}

#[test]
fn test_top_level_ignore_string_is_wrapped() {
  let top = PluginOptions { ignore: Some("coverage".into()), ..PluginOptions::default() };
  let normalized = normalize_include("dist".into(), &top);
  assert_eq!(normalized[0].ignore, vec!["coverage".to_string()]);
}

#[test]
fn test_entry_ignore_wins_over_top_level() {
  let top = PluginOptions { ignore: Some("coverage".into()), ..PluginOptions::default() };
  let entry = IncludeEntry {
    ignore: Some(vec!["vendor".to_string()].into()),
    ..IncludeEntry::from("dist")
  };
  let normalized = normalize_include(entry.into(), &top);
  assert_eq!(normalized[0].ignore, vec!["vendor".to_string()]);
}

#[test]
fn test_explicit_empty_lists_override_defaults() {
  let top = PluginOptions { ext: Some(vec!["ts".to_string()]), ..PluginOptions::default() };
  let entry = IncludeEntry {
    ignore: Some(IgnorePatterns::Multiple(Vec::new())),
    ext: Some(Vec::new()),
    ..IncludeEntry::from("dist")
  };
  let normalized = normalize_include(entry.into(), &top);
  assert!(normalized[0].ignore.is_empty());
  assert!(normalized[0].ext.is_empty());
}

#[test]
fn test_ext_dot_coercion_is_idempotent() {
  let entry = IncludeEntry {
    ext: Some(vec![".js".to_string(), "map".to_string(), ".d.ts".to_string()]),
    ..IncludeEntry::from("dist")
  };
  let normalized = normalize_include(entry.clone().into(), &PluginOptions::default());
  assert_eq!(normalized[0].ext, vec![".js", ".map", ".d.ts"]);

  // Feeding the coerced values back through changes nothing.
  let recoerced = IncludeEntry { ext: Some(normalized[0].ext.clone()), ..entry };
  let normalized_again = normalize_include(recoerced.into(), &PluginOptions::default());
  assert_eq!(normalized_again[0].ext, normalized[0].ext);
}

#[test]
fn test_boolean_fields_hoist_from_top_level() {
  let top = PluginOptions {
    rewrite: Some(false),
    strip_common_prefix: Some(true),
    ..PluginOptions::default()
  };
  let normalized = normalize_include("dist".into(), &top);
  assert!(!normalized[0].rewrite);
  assert!(normalized[0].strip_common_prefix);
  // Untouched fields keep their defaults.
  assert!(normalized[0].source_map_reference);
  assert!(!normalized[0].validate);
}
