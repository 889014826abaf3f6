pub mod release_injection;

use itertools::Itertools;
use packtrace_common::NormalizedPluginOptions;
use packtrace_error::{PluginError, PluginResult};

use crate::{SharedOptions, plugins::release_injection::ReleaseInjectionPlugin};

/// One stage of the composed plugin. Hooks default to no-ops so a sub-plugin
/// only implements the phases it cares about.
pub trait BuildPlugin {
  fn name(&self) -> &'static str;

  fn build_start(&self) -> PluginResult<()> {
    Ok(())
  }
}

/// Composes the ordered sub-plugin list: telemetry first, file deletion last.
/// Sub-plugins whose controlling flag is off are omitted entirely.
pub fn create_plugins(options: &SharedOptions) -> Vec<Box<dyn BuildPlugin>> {
  let mut plugins: Vec<Box<dyn BuildPlugin>> = Vec::new();

  if options.telemetry {
    plugins.push(Box::new(TelemetryPlugin { options: SharedOptions::clone(options) }));
  }
  plugins.push(Box::new(ReleaseInjectionPlugin::new(SharedOptions::clone(options))));
  if !options.dry_run {
    plugins.push(Box::new(ReleaseManagementPlugin { options: SharedOptions::clone(options) }));
  }
  plugins.push(Box::new(DebugIdUploadPlugin { options: SharedOptions::clone(options) }));
  if options.clean_artifacts {
    plugins.push(Box::new(FileDeletionPlugin { options: SharedOptions::clone(options) }));
  }

  log::debug!("composed sub-plugins: {}", plugins.iter().map(|plugin| plugin.name()).join(", "));
  plugins
}

/// Drives `build_start` across every sub-plugin, collecting failures instead
/// of stopping at the first one. With an `error_handler` configured the
/// failures are handed to it and the build keeps going.
pub fn run_build_start(
  plugins: &[Box<dyn BuildPlugin>],
  options: &NormalizedPluginOptions,
) -> PluginResult<()> {
  let errors: Vec<anyhow::Error> = plugins
    .iter()
    .filter_map(|plugin| plugin.build_start().err())
    .flat_map(|error| error.0)
    .collect();

  if errors.is_empty() {
    return Ok(());
  }

  let error = PluginError::from(errors);
  match &options.error_handler {
    Some(handler) => {
      for cause in error.iter() {
        handler.call(cause);
      }
      Ok(())
    }
    None => Err(error),
  }
}

struct TelemetryPlugin {
  options: SharedOptions,
}

impl BuildPlugin for TelemetryPlugin {
  fn name(&self) -> &'static str {
    "packtrace-telemetry"
  }

  fn build_start(&self) -> PluginResult<()> {
    log::debug!("telemetry enabled (dry_run: {})", self.options.dry_run);
    Ok(())
  }
}

struct ReleaseManagementPlugin {
  options: SharedOptions,
}

impl BuildPlugin for ReleaseManagementPlugin {
  fn name(&self) -> &'static str {
    "packtrace-release-management"
  }

  fn build_start(&self) -> PluginResult<()> {
    log::info!(
      "managing release {:?} (finalize: {})",
      self.options.release,
      self.options.finalize
    );
    Ok(())
  }
}

struct DebugIdUploadPlugin {
  options: SharedOptions,
}

impl BuildPlugin for DebugIdUploadPlugin {
  fn name(&self) -> &'static str {
    "packtrace-debug-id-upload"
  }

  fn build_start(&self) -> PluginResult<()> {
    log::debug!("{} include entries queued for upload", self.options.include.len());
    Ok(())
  }
}

struct FileDeletionPlugin {
  options: SharedOptions,
}

impl BuildPlugin for FileDeletionPlugin {
  fn name(&self) -> &'static str {
    "packtrace-file-deletion"
  }

  fn build_start(&self) -> PluginResult<()> {
    log::debug!("artifact cleanup scheduled after upload (url: {})", self.options.url);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  };

  use packtrace_common::{EnvSnapshot, ErrorHandler, PluginOptions};
  use packtrace_error::PluginResult;

  use super::{BuildPlugin, run_build_start};
  use crate::utils::normalize_options::normalize_options;

  struct FailingPlugin;

  impl BuildPlugin for FailingPlugin {
    fn name(&self) -> &'static str {
      "failing"
    }

    fn build_start(&self) -> PluginResult<()> {
      Err(anyhow::anyhow!("boom").into())
    }
  }

  #[test]
  fn build_start_failures_are_aggregated() {
    let options = normalize_options(PluginOptions::default(), &EnvSnapshot::default());
    let plugins: Vec<Box<dyn BuildPlugin>> = vec![Box::new(FailingPlugin), Box::new(FailingPlugin)];

    let error = run_build_start(&plugins, &options).unwrap_err();
    assert_eq!(error.len(), 2);
  }

  #[test]
  fn error_handler_swallows_failures() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let raw = PluginOptions {
      error_handler: Some(ErrorHandler::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
      })),
      ..PluginOptions::default()
    };
    let options = normalize_options(raw, &EnvSnapshot::default());
    let plugins: Vec<Box<dyn BuildPlugin>> = vec![Box::new(FailingPlugin)];

    assert!(run_build_start(&plugins, &options).is_ok());
    assert_eq!(seen.load(Ordering::SeqCst), 1);
  }
}
