use serde::{Deserialize, Serialize};

/// Deploy descriptor registered against a finalized release.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deploy {
  pub env: String,
  #[serde(default)]
  pub started: Option<i64>,
  #[serde(default)]
  pub finished: Option<i64>,
  #[serde(default)]
  pub time: Option<i64>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub url: Option<String>,
}
