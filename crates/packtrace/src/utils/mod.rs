pub mod normalize_entries;
pub mod normalize_include;
pub mod normalize_options;
