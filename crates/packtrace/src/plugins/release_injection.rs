use packtrace_error::PluginResult;
use serde_json::Value;

use super::BuildPlugin;
use crate::SharedOptions;

pub(crate) struct ReleaseInjectionPlugin {
  options: SharedOptions,
}

impl ReleaseInjectionPlugin {
  pub(crate) fn new(options: SharedOptions) -> Self {
    Self { options }
  }

  fn snippet(&self) -> String {
    release_injection_snippet(
      &self.options.release,
      self.options.inject_releases_map,
      self.options.project.as_deref(),
    )
  }
}

impl BuildPlugin for ReleaseInjectionPlugin {
  fn name(&self) -> &'static str {
    "packtrace-release-injection"
  }

  fn build_start(&self) -> PluginResult<()> {
    log::debug!("release snippet ready: {}", self.snippet());
    Ok(())
  }
}

/// Code generation for the banner prepended to matched entry chunks. Values
/// are embedded as JSON strings so any release name stays a valid JS literal.
pub fn release_injection_snippet(
  release: &str,
  inject_releases_map: bool,
  project: Option<&str>,
) -> String {
  let release = Value::String(release.to_string());
  if inject_releases_map {
    let key = Value::String(project.unwrap_or("default").to_string());
    format!(
      "globalThis.__PACKTRACE_RELEASES__ = Object.assign(globalThis.__PACKTRACE_RELEASES__ || {{}}, {{{key}: {release}}});"
    )
  } else {
    format!("globalThis.__PACKTRACE_RELEASE__ = {release};")
  }
}

#[test]
fn test_release_snippet() {
  assert_eq!(
    release_injection_snippet("1.0.0", false, None),
    "globalThis.__PACKTRACE_RELEASE__ = \"1.0.0\";"
  );
}

#[test]
fn test_release_snippet_escapes_json() {
  assert_eq!(
    release_injection_snippet("v1 \"canary\"", false, None),
    "globalThis.__PACKTRACE_RELEASE__ = \"v1 \\\"canary\\\"\";"
  );
}

#[test]
fn test_releases_map_snippet() {
  assert_eq!(
    release_injection_snippet("1.0.0", true, Some("shop")),
    "globalThis.__PACKTRACE_RELEASES__ = Object.assign(globalThis.__PACKTRACE_RELEASES__ || {}, {\"shop\": \"1.0.0\"});"
  );
}
