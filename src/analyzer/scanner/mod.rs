pub mod exclude;
pub mod file_scanner;

pub use exclude::{DEFAULT_EXCLUDES, ExclusionPattern, is_path_ignored, load_patterns};
pub use file_scanner::FileScanner;
