use std::sync::Arc;

use tracing::{debug, warn};

use super::{
    generation_strategy::GenerationStrategy,
    resource_version_strategy::ResourceVersionStrategy,
    types::{ComparisonStrategy, ConfigError, VersionCompareType},
};

impl VersionCompareType {
    pub fn strategy(self) -> Arc<dyn ComparisonStrategy> {
        match self {
            VersionCompareType::ResourceVersion => Arc::new(ResourceVersionStrategy::new()),
            VersionCompareType::Generation => Arc::new(GenerationStrategy::new()),
        }
    }
}

/// Instantiates the comparison strategy for the given comparison type.
///
/// Accepts the enum itself or a raw configuration value (`"generation"`,
/// `1`, ...). Raw values that name no known comparison type fail with
/// [`ConfigError::UnrecognizedCompareType`].
pub fn new_comparison_strategy<T>(
    compare_type: T,
) -> Result<Arc<dyn ComparisonStrategy>, ConfigError>
where
    T: TryInto<VersionCompareType>,
    ConfigError: From<T::Error>,
{
    let compare_type: VersionCompareType = compare_type
        .try_into()
        .map_err(ConfigError::from)
        .inspect_err(|e| warn!("rejected version comparison type: {e}"))?;
    debug!("using {compare_type} version comparison");
    Ok(compare_type.strategy())
}
