use std::sync::Arc;

use packtrace_common::{EnvSnapshot, PluginOptions, process_env_snapshot};
use packtrace_error::PluginResult;

use crate::{
  SharedOptions,
  plugins::{BuildPlugin, create_plugins, run_build_start},
  utils::normalize_options::normalize_options,
};

/// The host-facing plugin: normalizes the user options once and composes the
/// ordered sub-plugin list the bundler will drive.
pub struct PacktracePlugin {
  pub(crate) options: SharedOptions,
  pub(crate) plugins: Vec<Box<dyn BuildPlugin>>,
}

impl PacktracePlugin {
  pub fn new(options: PluginOptions) -> Self {
    Self::with_env(options, &process_env_snapshot())
  }

  /// Like [`PacktracePlugin::new`] but with an explicit environment snapshot.
  pub fn with_env(options: PluginOptions, env: &EnvSnapshot) -> Self {
    let options: SharedOptions = Arc::new(normalize_options(options, env));
    let plugins = create_plugins(&options);
    Self { options, plugins }
  }

  pub fn options(&self) -> &SharedOptions {
    &self.options
  }

  pub fn plugin_names(&self) -> Vec<&'static str> {
    self.plugins.iter().map(|plugin| plugin.name()).collect()
  }

  pub fn build_start(&self) -> PluginResult<()> {
    run_build_start(&self.plugins, &self.options)
  }
}

#[test]
fn test_plugin_composition_order() {
  let plugin = PacktracePlugin::with_env(
    PluginOptions { clean_artifacts: Some(true), ..PluginOptions::default() },
    &EnvSnapshot::default(),
  );
  assert_eq!(
    plugin.plugin_names(),
    vec![
      "packtrace-telemetry",
      "packtrace-release-injection",
      "packtrace-release-management",
      "packtrace-debug-id-upload",
      "packtrace-file-deletion",
    ]
  );
}

#[test]
fn test_disabled_sub_plugins_are_omitted() {
  let plugin = PacktracePlugin::with_env(
    PluginOptions { telemetry: Some(false), dry_run: Some(true), ..PluginOptions::default() },
    &EnvSnapshot::default(),
  );
  // No telemetry, no release management under dry-run, and file deletion is
  // off by default.
  assert_eq!(
    plugin.plugin_names(),
    vec!["packtrace-release-injection", "packtrace-debug-id-upload"]
  );
}
