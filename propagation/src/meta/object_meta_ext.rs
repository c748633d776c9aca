use std::collections::BTreeMap;

use kube::core::ObjectMeta;

pub trait ObjectMetaExt {
    /// Compares identity, labels and annotations. Versions, timestamps, uid
    /// and managed fields are not part of the comparison.
    fn is_equivalent(&self, other: &ObjectMeta) -> bool;
}

impl ObjectMetaExt for ObjectMeta {
    fn is_equivalent(&self, other: &ObjectMeta) -> bool {
        self.name == other.name
            && self.namespace == other.namespace
            && string_maps_equal(&self.labels, &other.labels)
            && string_maps_equal(&self.annotations, &other.annotations)
    }
}

pub fn object_meta_equivalent(meta1: &ObjectMeta, meta2: &ObjectMeta) -> bool {
    meta1.is_equivalent(meta2)
}

// Absent and empty maps are treated as equal.
fn string_maps_equal(
    map1: &Option<BTreeMap<String, String>>,
    map2: &Option<BTreeMap<String, String>>,
) -> bool {
    match (map1, map2) {
        (Some(m1), Some(m2)) => m1 == m2,
        (Some(m), None) | (None, Some(m)) => m.is_empty(),
        (None, None) => true,
    }
}

#[cfg(test)]
pub mod tests {
    use std::collections::BTreeMap;

    use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
    use kube::core::ObjectMeta;

    use super::{ObjectMetaExt, object_meta_equivalent};

    fn labels(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn meta() -> ObjectMeta {
        ObjectMeta {
            name: Some("nginx".into()),
            namespace: Some("default".into()),
            labels: labels(&[("app", "web")]),
            annotations: labels(&[("team", "infra")]),
            resource_version: Some("10".into()),
            generation: Some(1),
            uid: Some("6b1f1f0a".into()),
            ..Default::default()
        }
    }

    #[test]
    fn identical_metadata_is_equivalent() {
        assert!(object_meta_equivalent(&meta(), &meta()));
    }

    #[test]
    fn ignores_versions_and_server_fields() {
        let other = ObjectMeta {
            resource_version: Some("11".into()),
            generation: Some(2),
            uid: Some("ffffffff".into()),
            owner_references: Some(vec![OwnerReference {
                name: "owner".into(),
                ..Default::default()
            }]),
            ..meta()
        };
        assert!(meta().is_equivalent(&other));
    }

    #[test]
    fn compares_identity() {
        let renamed = ObjectMeta {
            name: Some("apache".into()),
            ..meta()
        };
        let moved = ObjectMeta {
            namespace: Some("kube-system".into()),
            ..meta()
        };
        assert!(!meta().is_equivalent(&renamed));
        assert!(!meta().is_equivalent(&moved));
    }

    #[test]
    fn compares_labels_and_annotations() {
        let relabeled = ObjectMeta {
            labels: labels(&[("app", "db")]),
            ..meta()
        };
        let annotated = ObjectMeta {
            annotations: labels(&[("team", "infra"), ("extra", "1")]),
            ..meta()
        };
        assert!(!meta().is_equivalent(&relabeled));
        assert!(!meta().is_equivalent(&annotated));
    }

    #[test]
    fn empty_and_missing_maps_are_equivalent() {
        let empty = ObjectMeta {
            labels: Some(BTreeMap::new()),
            annotations: None,
            ..meta()
        };
        let missing = ObjectMeta {
            labels: None,
            annotations: Some(BTreeMap::new()),
            ..meta()
        };
        assert!(empty.is_equivalent(&missing));
        assert!(missing.is_equivalent(&empty));
    }
}
