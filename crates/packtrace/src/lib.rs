mod plugin;
mod plugins;
mod utils;

use std::sync::Arc;

use packtrace_common::NormalizedPluginOptions;

pub type SharedOptions = Arc<NormalizedPluginOptions>;

pub use crate::plugin::PacktracePlugin;
pub use crate::plugins::{
  BuildPlugin, create_plugins, release_injection::release_injection_snippet, run_build_start,
};
pub use crate::utils::normalize_options::{DEFAULT_API_URL, normalize_options};
pub use packtrace_common::*;
