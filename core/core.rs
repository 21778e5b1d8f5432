pub mod config;
pub mod error;
pub mod gather;
pub mod matcher;
pub mod project;

pub use config::{CONFIG_FILENAME, Config};
pub use error::{AppError, Result};
pub use gather::{GatherSummary, gather_into, write_record};
pub use matcher::{ExclusionMatcher, Verdict, is_excluded};
pub use project::{MARKER_FILES, ProjectType, detect_project_type};
