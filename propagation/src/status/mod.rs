pub mod propagated_version;
pub mod types;

pub use propagated_version::{propagated_version_status_equivalent, sort_cluster_versions};
pub use types::{ClusterObjectVersion, PropagatedVersionStatus};
