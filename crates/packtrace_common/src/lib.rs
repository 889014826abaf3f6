mod env_snapshot;
mod plugin_options;

pub use env_snapshot::{EnvSnapshot, process_env_snapshot};
pub use plugin_options::{
  ErrorHandler, PluginOptions,
  deploy::Deploy,
  entries::{Entries, EntryMatcher, EntryPredicate, NormalizedEntries},
  include::{IgnorePatterns, Include, IncludeEntry, IncludeItem},
  normalized_plugin_options::{NormalizedIncludeEntry, NormalizedPluginOptions},
  set_commits::SetCommits,
};
