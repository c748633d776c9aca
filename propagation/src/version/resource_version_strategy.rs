use kube::core::ObjectMeta;

use super::types::{ComparisonStrategy, VersionCompareType};

/// Records the cluster-assigned `resourceVersion`, which changes on every
/// write to the object.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceVersionStrategy;

impl ResourceVersionStrategy {
    pub fn new() -> Self {
        ResourceVersionStrategy
    }
}

impl ComparisonStrategy for ResourceVersionStrategy {
    fn compare_type(&self) -> VersionCompareType {
        VersionCompareType::ResourceVersion
    }

    /// The token is opaque and returned verbatim. A missing version reads as
    /// the empty string.
    fn get_version(&self, meta: &ObjectMeta) -> String {
        meta.resource_version.clone().unwrap_or_default()
    }

    /// Always true. Any change is already visible as a different version
    /// token, so metadata is not compared here.
    fn equivalent(&self, _meta1: &ObjectMeta, _meta2: &ObjectMeta) -> bool {
        true
    }
}
