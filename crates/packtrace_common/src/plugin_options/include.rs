use serde::{Deserialize, Serialize};

/// Ignore patterns accept either a single pattern or a list; normalization
/// always produces a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IgnorePatterns {
  Single(String),
  Multiple(Vec<String>),
}

impl From<&str> for IgnorePatterns {
  fn from(value: &str) -> Self {
    Self::Single(value.to_string())
  }
}

impl From<Vec<String>> for IgnorePatterns {
  fn from(value: Vec<String>) -> Self {
    Self::Multiple(value)
  }
}

/// One user-supplied upload rule: which paths to scan and how to treat the
/// files found there. Every field except `paths` falls back to the top-level
/// option of the same name.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeEntry {
  pub paths: Vec<String>,
  #[serde(default)]
  pub ignore: Option<IgnorePatterns>,
  #[serde(default)]
  pub ignore_file: Option<String>,
  #[serde(default)]
  pub ext: Option<Vec<String>>,
  #[serde(default)]
  pub url_prefix: Option<String>,
  #[serde(default)]
  pub url_suffix: Option<String>,
  #[serde(default)]
  pub strip_prefix: Option<Vec<String>>,
  #[serde(default)]
  pub strip_common_prefix: Option<bool>,
  #[serde(default)]
  pub source_map_reference: Option<bool>,
  #[serde(default)]
  pub rewrite: Option<bool>,
  #[serde(default)]
  pub validate: Option<bool>,
}

impl From<&str> for IncludeEntry {
  fn from(value: &str) -> Self {
    Self { paths: vec![value.to_string()], ..Self::default() }
  }
}

impl From<String> for IncludeEntry {
  fn from(value: String) -> Self {
    Self { paths: vec![value], ..Self::default() }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncludeItem {
  Path(String),
  Entry(IncludeEntry),
}

/// User-facing `include` option: a bare path, a single entry, or a list
/// mixing both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Include {
  Path(String),
  Entry(IncludeEntry),
  Items(Vec<IncludeItem>),
}

impl From<&str> for Include {
  fn from(value: &str) -> Self {
    Self::Path(value.to_string())
  }
}

impl From<IncludeEntry> for Include {
  fn from(value: IncludeEntry) -> Self {
    Self::Entry(value)
  }
}

impl From<Vec<IncludeItem>> for Include {
  fn from(value: Vec<IncludeItem>) -> Self {
    Self::Items(value)
  }
}
