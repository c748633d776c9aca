use kube::core::ObjectMeta;

use super::types::{ComparisonStrategy, VersionCompareType};
use crate::meta::object_meta_ext::object_meta_equivalent;

pub type MetaEquivalenceFn = fn(&ObjectMeta, &ObjectMeta) -> bool;

/// Records `metadata.generation`, which only moves on spec changes, so
/// status-only writes leave the version untouched.
#[derive(Debug, Clone, Copy)]
pub struct GenerationStrategy {
    meta_equivalent: MetaEquivalenceFn,
}

impl Default for GenerationStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationStrategy {
    pub fn new() -> Self {
        Self::with_equivalence(object_meta_equivalent)
    }

    pub fn with_equivalence(meta_equivalent: MetaEquivalenceFn) -> Self {
        GenerationStrategy { meta_equivalent }
    }
}

impl ComparisonStrategy for GenerationStrategy {
    fn compare_type(&self) -> VersionCompareType {
        VersionCompareType::Generation
    }

    /// Base-10 generation. A missing generation reads as `0`.
    fn get_version(&self, meta: &ObjectMeta) -> String {
        meta.generation.unwrap_or_default().to_string()
    }

    fn equivalent(&self, meta1: &ObjectMeta, meta2: &ObjectMeta) -> bool {
        (self.meta_equivalent)(meta1, meta2)
    }
}
