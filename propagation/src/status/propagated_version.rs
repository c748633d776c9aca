use tracing::trace;

use super::types::{ClusterObjectVersion, PropagatedVersionStatus};

/// Sorts cluster versions in place by cluster name, byte-wise ascending.
///
/// Cluster names are unique within a status, so the unstable sort gives a
/// deterministic order. Both sides of
/// [`propagated_version_status_equivalent`] must go through this first.
pub fn sort_cluster_versions(versions: &mut [ClusterObjectVersion]) {
    versions.sort_unstable_by(|a, b| a.cluster_name.as_bytes().cmp(b.cluster_name.as_bytes()));
}

/// Returns true if template version, override version and cluster versions
/// are all equal.
///
/// Cluster versions are compared position by position and are not sorted
/// here: statuses holding the same versions in a different order compare as
/// different unless both were normalized with [`sort_cluster_versions`].
pub fn propagated_version_status_equivalent(
    status1: &PropagatedVersionStatus,
    status2: &PropagatedVersionStatus,
) -> bool {
    let equivalent = status1.template_version == status2.template_version
        && status1.override_version == status2.override_version
        && status1.cluster_versions == status2.cluster_versions;
    trace!(equivalent, "compared propagated version statuses");
    equivalent
}
