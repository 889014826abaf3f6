use serde::{Deserialize, Serialize};

/// Commit-association policy attached to a release.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCommits {
  #[serde(default)]
  pub repo: Option<String>,
  #[serde(default)]
  pub commit: Option<String>,
  #[serde(default)]
  pub previous_commit: Option<String>,
  #[serde(default)]
  pub auto: Option<bool>,
  #[serde(default)]
  pub ignore_missing: Option<bool>,
  #[serde(default)]
  pub ignore_empty: Option<bool>,
}
