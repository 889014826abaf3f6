pub mod deploy;
pub mod entries;
pub mod include;
pub mod normalized_plugin_options;
pub mod set_commits;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{Deploy, Entries, IgnorePatterns, Include, SetCommits};

/// User-supplied callback invoked instead of failing the build when a
/// sub-plugin reports an error.
#[derive(Clone)]
pub struct ErrorHandler(Arc<dyn Fn(&anyhow::Error) + Send + Sync>);

impl ErrorHandler {
  pub fn new(handler: impl Fn(&anyhow::Error) + Send + Sync + 'static) -> Self {
    Self(Arc::new(handler))
  }

  pub fn call(&self, error: &anyhow::Error) {
    (self.0)(error);
  }
}

impl fmt::Debug for ErrorHandler {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ErrorHandler(..)")
  }
}

#[derive(Default, Debug, Clone)]
pub struct PluginOptions {
  // --- Release
  pub release: Option<String>,
  pub dist: Option<String>,
  pub finalize: Option<bool>,
  pub set_commits: Option<SetCommits>,
  pub deploy: Option<Deploy>,
  pub inject_releases_map: Option<bool>,

  // --- Upload target
  pub org: Option<String>,
  pub project: Option<String>,
  pub auth_token: Option<String>,
  pub url: Option<String>,
  pub custom_header: Option<String>,
  pub vcs_remote: Option<String>,
  pub config_file: Option<PathBuf>,

  // --- File selection
  pub include: Option<Include>,
  pub entries: Option<Entries>,

  // --- Per-entry fallbacks, hoisted into include entries that omit them
  pub ignore: Option<IgnorePatterns>,
  pub ignore_file: Option<String>,
  pub ext: Option<Vec<String>>,
  pub url_prefix: Option<String>,
  pub url_suffix: Option<String>,
  pub strip_prefix: Option<Vec<String>>,
  pub strip_common_prefix: Option<bool>,
  pub source_map_reference: Option<bool>,
  pub rewrite: Option<bool>,
  pub validate: Option<bool>,

  // --- Behavior
  pub dry_run: Option<bool>,
  pub debug: Option<bool>,
  pub silent: Option<bool>,
  pub clean_artifacts: Option<bool>,
  pub telemetry: Option<bool>,
  pub error_handler: Option<ErrorHandler>,
}
