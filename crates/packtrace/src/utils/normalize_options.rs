use packtrace_common::{EnvSnapshot, NormalizedPluginOptions, PluginOptions};

use crate::utils::{normalize_entries::normalize_entries, normalize_include::normalize_include};

pub const DEFAULT_API_URL: &str = "https://api.packtrace.dev";

pub const RELEASE_ENV: &str = "PACKTRACE_RELEASE";
pub const ORG_ENV: &str = "PACKTRACE_ORG";
pub const PROJECT_ENV: &str = "PACKTRACE_PROJECT";
pub const AUTH_TOKEN_ENV: &str = "PACKTRACE_AUTH_TOKEN";
pub const URL_ENV: &str = "PACKTRACE_URL";
pub const CUSTOM_HEADER_ENV: &str = "PACKTRACE_CUSTOM_HEADER";
pub const VCS_REMOTE_ENV: &str = "PACKTRACE_VCS_REMOTE";

/// Resolves raw user options into the fully-specified internal form. Scalar
/// fields resolve user value over environment fallback over default; `include`
/// and `entries` shorthands are expanded. Pure aside from reading `env`.
pub fn normalize_options(
  mut raw_options: PluginOptions,
  env: &EnvSnapshot,
) -> NormalizedPluginOptions {
  let env_fallback = |name: &str| env.get(name).cloned();

  // Include entries inherit the top-level fallback fields, so the `include`
  // value is detached before the rest of the options are consumed.
  let include = raw_options
    .include
    .take()
    .map_or_else(Vec::new, |include| normalize_include(include, &raw_options));
  let entries = normalize_entries(raw_options.entries.take());

  NormalizedPluginOptions {
    release: raw_options.release.or_else(|| env_fallback(RELEASE_ENV)).unwrap_or_default(),
    dist: raw_options.dist,
    finalize: raw_options.finalize.unwrap_or(true),
    set_commits: raw_options.set_commits,
    deploy: raw_options.deploy,
    inject_releases_map: raw_options.inject_releases_map.unwrap_or(false),
    org: raw_options.org.or_else(|| env_fallback(ORG_ENV)),
    project: raw_options.project.or_else(|| env_fallback(PROJECT_ENV)),
    auth_token: raw_options.auth_token.or_else(|| env_fallback(AUTH_TOKEN_ENV)),
    url: raw_options
      .url
      .or_else(|| env_fallback(URL_ENV))
      .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
    custom_header: raw_options.custom_header.or_else(|| env_fallback(CUSTOM_HEADER_ENV)),
    vcs_remote: raw_options
      .vcs_remote
      .or_else(|| env_fallback(VCS_REMOTE_ENV))
      .unwrap_or_else(|| "origin".to_string()),
    config_file: raw_options.config_file,
    include,
    entries,
    dry_run: raw_options.dry_run.unwrap_or(false),
    debug: raw_options.debug.unwrap_or(false),
    silent: raw_options.silent.unwrap_or(false),
    clean_artifacts: raw_options.clean_artifacts.unwrap_or(false),
    telemetry: raw_options.telemetry.unwrap_or(true),
    error_handler: raw_options.error_handler,
  }
}

#[cfg(test)]
fn env_of(pairs: &[(&str, &str)]) -> EnvSnapshot {
  pairs.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect()
}

#[test]
fn test_scalar_defaults_with_empty_env() {
  let normalized = normalize_options(PluginOptions::default(), &EnvSnapshot::default());

  assert_eq!(normalized.release, "");
  assert_eq!(normalized.url, DEFAULT_API_URL);
  assert_eq!(normalized.vcs_remote, "origin");

  assert!(normalized.finalize);
  assert!(normalized.telemetry);
  assert!(!normalized.dry_run);
  assert!(!normalized.debug);
  assert!(!normalized.silent);
  assert!(!normalized.clean_artifacts);
  assert!(!normalized.inject_releases_map);

  assert!(normalized.org.is_none());
  assert!(normalized.project.is_none());
  assert!(normalized.auth_token.is_none());
  assert!(normalized.custom_header.is_none());
  assert!(normalized.dist.is_none());
  assert!(normalized.set_commits.is_none());
  assert!(normalized.deploy.is_none());
  assert!(normalized.config_file.is_none());
  assert!(normalized.error_handler.is_none());

  assert!(normalized.include.is_empty());
  assert!(normalized.entries.is_none());
}

#[test]
fn test_environment_fallbacks() {
  let env = env_of(&[
    (RELEASE_ENV, "1.2.3"),
    (ORG_ENV, "acme"),
    (PROJECT_ENV, "shop"),
    (AUTH_TOKEN_ENV, "secret"),
    (URL_ENV, "https://selfhosted.example"),
    (CUSTOM_HEADER_ENV, "x-trace: on"),
    (VCS_REMOTE_ENV, "upstream"),
  ]);

  let normalized = normalize_options(PluginOptions::default(), &env);
  assert_eq!(normalized.release, "1.2.3");
  assert_eq!(normalized.org.as_deref(), Some("acme"));
  assert_eq!(normalized.project.as_deref(), Some("shop"));
  assert_eq!(normalized.auth_token.as_deref(), Some("secret"));
  assert_eq!(normalized.url, "https://selfhosted.example");
  assert_eq!(normalized.custom_header.as_deref(), Some("x-trace: on"));
  assert_eq!(normalized.vcs_remote, "upstream");
}

#[test]
fn test_explicit_value_wins_over_environment() {
  let env = env_of(&[(RELEASE_ENV, "from-env")]);
  let raw = PluginOptions { release: Some("from-user".to_string()), ..PluginOptions::default() };
  assert_eq!(normalize_options(raw, &env).release, "from-user");
}

#[test]
fn test_include_and_entries_are_normalized() {
  let raw = PluginOptions {
    include: Some("dist/**".into()),
    entries: Some("main".into()),
    ..PluginOptions::default()
  };
  let normalized = normalize_options(raw, &EnvSnapshot::default());

  assert_eq!(normalized.include.len(), 1);
  assert_eq!(normalized.include[0].paths, vec!["dist/**".to_string()]);
  assert!(normalized.entries.is_some());
}

#[test]
fn test_log_level_follows_debug_and_silent() {
  let debug = PluginOptions { debug: Some(true), ..PluginOptions::default() };
  let normalized = normalize_options(debug, &EnvSnapshot::default());
  assert_eq!(normalized.log_level(), log::LevelFilter::Debug);

  // `silent` wins even when `debug` is also set.
  let silent = PluginOptions { debug: Some(true), silent: Some(true), ..PluginOptions::default() };
  let normalized = normalize_options(silent, &EnvSnapshot::default());
  assert_eq!(normalized.log_level(), log::LevelFilter::Off);

  let normalized = normalize_options(PluginOptions::default(), &EnvSnapshot::default());
  assert_eq!(normalized.log_level(), log::LevelFilter::Info);
}
