pub mod generation_strategy;
pub mod resource_version_strategy;
pub mod strategy;
pub mod types;

pub use strategy::new_comparison_strategy;
pub use types::{ComparisonStrategy, ConfigError, VersionCompareType};
