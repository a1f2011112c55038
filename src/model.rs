use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An application as stored by the remote application store.
///
/// `name` is the remote primary key. Components are keyed by their own name and keep
/// insertion order on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,

    #[serde(default)]
    pub components: IndexMap<String, Component>,
}

impl Application {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: IndexMap::new(),
        }
    }

    /// Component keys that do not match the name of the component they hold.
    pub fn mismatched_component_keys(&self) -> Vec<String> {
        self.components
            .iter()
            .filter(|(k, c)| k.as_str() != c.name)
            .map(|(k, _)| k.clone())
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,

    /// Relative cpu share, as a percentage.
    #[serde(default)]
    pub cpus: u8,

    /// Memory in megabytes.
    #[serde(default)]
    pub mem: u32,

    /// Transient working storage in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_space: Option<u32>,

    #[serde(default)]
    pub dist_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub distribution: Distribution,

    #[serde(default)]
    pub component_type: ComponentType,

    #[serde(default)]
    pub ports: IndexMap<String, u16>,

    #[serde(default)]
    pub env: IndexMap<String, String>,
}

impl Component {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    #[default]
    Package,
    Docker,
    Script,
    FatJar,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Package,
        Distribution::Docker,
        Distribution::Script,
        Distribution::FatJar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::Package => "package",
            Distribution::Docker => "docker",
            Distribution::Script => "script",
            Distribution::FatJar => "fat_jar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Distribution::Package => "Package (RPM/DEB)",
            Distribution::Docker => "Docker container",
            Distribution::Script => "Single binary",
            Distribution::FatJar => "Fat Jar/War",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown distribution '{}' (expected one of: package, docker, script, fat_jar)",
                    s
                )
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    #[default]
    Service,
    Task,
    Cron,
    Spark,
}

impl ComponentType {
    pub const ALL: [ComponentType; 4] = [
        ComponentType::Service,
        ComponentType::Task,
        ComponentType::Cron,
        ComponentType::Spark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Service => "service",
            ComponentType::Task => "task",
            ComponentType::Cron => "cron",
            ComponentType::Spark => "spark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentType::Service => "Service",
            ComponentType::Task => "One-Off job",
            ComponentType::Cron => "CRON job",
            ComponentType::Spark => "Spark Job",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown component type '{}' (expected one of: service, task, cron, spark)",
                    s
                )
            })
    }
}

/// A single `scheme -> port` entry of a component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortMapping {
    pub scheme: String,
    pub port: u16,
}

impl PortMapping {
    pub fn new(scheme: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            port,
        }
    }
}

/// A single `key -> value` environment entry of a component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
