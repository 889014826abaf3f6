use std::path::PathBuf;

use crate::{Deploy, ErrorHandler, NormalizedEntries, SetCommits};

/// Fully resolved plugin configuration. Every include entry is self-contained;
/// nothing here requires reading the raw options or the environment again.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone)]
pub struct NormalizedPluginOptions {
  // --- Release
  pub release: String,
  pub dist: Option<String>,
  pub finalize: bool,
  pub set_commits: Option<SetCommits>,
  pub deploy: Option<Deploy>,
  pub inject_releases_map: bool,

  // --- Upload target
  pub org: Option<String>,
  pub project: Option<String>,
  pub auth_token: Option<String>,
  pub url: String,
  pub custom_header: Option<String>,
  pub vcs_remote: String,
  pub config_file: Option<PathBuf>,

  // --- File selection
  pub include: Vec<NormalizedIncludeEntry>,
  pub entries: Option<NormalizedEntries>,

  // --- Behavior
  pub dry_run: bool,
  pub debug: bool,
  pub silent: bool,
  pub clean_artifacts: bool,
  pub telemetry: bool,
  pub error_handler: Option<ErrorHandler>,
}

impl NormalizedPluginOptions {
  /// `silent` wins over `debug`.
  pub fn log_level(&self) -> log::LevelFilter {
    if self.silent {
      log::LevelFilter::Off
    } else if self.debug {
      log::LevelFilter::Debug
    } else {
      log::LevelFilter::Info
    }
  }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedIncludeEntry {
  pub paths: Vec<String>,
  pub ignore: Vec<String>,
  /// Extensions are always dot-prefixed exactly once.
  pub ext: Vec<String>,
  pub ignore_file: Option<String>,
  pub url_prefix: Option<String>,
  pub url_suffix: Option<String>,
  pub strip_prefix: Option<Vec<String>>,
  pub strip_common_prefix: bool,
  pub source_map_reference: bool,
  pub rewrite: bool,
  pub validate: bool,
}
