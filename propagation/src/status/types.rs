use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Last recorded version of a resource copy in one member cluster.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterObjectVersion {
    pub cluster_name: String,
    pub version: String,
}

impl ClusterObjectVersion {
    pub fn new(cluster_name: impl Into<String>, version: impl Into<String>) -> Self {
        ClusterObjectVersion {
            cluster_name: cluster_name.into(),
            version: version.into(),
        }
    }
}

/// Version tracking record of a propagated resource: the template and
/// override versions it was built from, and the version observed in each
/// member cluster.
///
/// `cluster_versions` holds at most one entry per cluster name.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropagatedVersionStatus {
    pub template_version: String,
    pub override_version: String,
    #[serde(default)]
    pub cluster_versions: Vec<ClusterObjectVersion>,
}

#[cfg(test)]
pub mod tests {
    use serde_json::json;

    use super::{ClusterObjectVersion, PropagatedVersionStatus};

    #[test]
    fn serializes_as_camel_case() {
        let status = PropagatedVersionStatus {
            template_version: "t1".into(),
            override_version: "o1".into(),
            cluster_versions: vec![ClusterObjectVersion::new("west", "100")],
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({
                "templateVersion": "t1",
                "overrideVersion": "o1",
                "clusterVersions": [{"clusterName": "west", "version": "100"}]
            })
        );
    }

    #[test]
    fn schema_exposes_camel_case_properties() {
        let schema = serde_json::to_value(schemars::schema_for!(PropagatedVersionStatus)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for property in ["templateVersion", "overrideVersion", "clusterVersions"] {
            assert!(properties.contains_key(property), "missing {property}");
        }
        assert!(!properties.contains_key("template_version"));

        let cluster = serde_json::to_value(schemars::schema_for!(ClusterObjectVersion)).unwrap();
        let cluster_properties = cluster["properties"].as_object().unwrap();
        assert!(cluster_properties.contains_key("clusterName"));
        assert!(cluster_properties.contains_key("version"));
    }

    #[test]
    fn missing_cluster_versions_deserialize_empty() {
        let status: PropagatedVersionStatus = serde_json::from_value(json!({
            "templateVersion": "t1",
            "overrideVersion": ""
        }))
        .unwrap();
        assert!(status.cluster_versions.is_empty());
    }
}
