use std::convert::Infallible;
use std::fmt::Debug;
use std::str::FromStr;

use kube::core::ObjectMeta;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unrecognized version comparison type {0}")]
    UnrecognizedCompareType(String),
}

impl From<Infallible> for ConfigError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Selects which field of an object's metadata is recorded as its version.
///
/// Deserializes from a name (`resourceVersion`, `generation`) or an ordinal
/// (`0`, `1`).
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "RawCompareType")]
pub enum VersionCompareType {
    #[serde(rename = "resourceVersion")]
    #[strum(serialize = "resourceVersion")]
    #[default]
    ResourceVersion,
    #[serde(rename = "generation")]
    #[strum(serialize = "generation")]
    Generation,
}

impl FromStr for VersionCompareType {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "resourceVersion" => Ok(VersionCompareType::ResourceVersion),
            "generation" => Ok(VersionCompareType::Generation),
            other => Err(ConfigError::UnrecognizedCompareType(other.to_string())),
        }
    }
}

impl TryFrom<&str> for VersionCompareType {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Comparison type as written in configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawCompareType {
    Ordinal(i64),
    Name(String),
}

impl TryFrom<RawCompareType> for VersionCompareType {
    type Error = ConfigError;

    fn try_from(value: RawCompareType) -> Result<Self, Self::Error> {
        match value {
            RawCompareType::Ordinal(ordinal) => ordinal.try_into(),
            RawCompareType::Name(name) => name.parse(),
        }
    }
}

impl TryFrom<i64> for VersionCompareType {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VersionCompareType::ResourceVersion),
            1 => Ok(VersionCompareType::Generation),
            other => Err(ConfigError::UnrecognizedCompareType(other.to_string())),
        }
    }
}

/// Extracts a version token from object metadata and decides whether two
/// metadata snapshots are equivalent.
///
/// Implementations hold no mutable state and are shared between reconcile
/// workers without synchronization.
pub trait ComparisonStrategy: Debug + Send + Sync {
    fn compare_type(&self) -> VersionCompareType;

    fn get_version(&self, meta: &ObjectMeta) -> String;

    fn equivalent(&self, meta1: &ObjectMeta, meta2: &ObjectMeta) -> bool;
}
