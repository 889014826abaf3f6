use rustc_hash::FxHashMap;

/// Snapshot of the process environment taken once at the plugin boundary.
/// Normalization reads fallbacks from this value instead of touching
/// `std::env` directly, which keeps it deterministic under test.
pub type EnvSnapshot = FxHashMap<String, String>;

pub fn process_env_snapshot() -> EnvSnapshot {
  std::env::vars().collect()
}
