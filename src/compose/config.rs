use crate::shared::error::BakeError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The subset of `docker-compose config` output bake cares about
#[derive(Debug, Default, Deserialize)]
pub struct ComposeConfig {
    #[serde(default)]
    pub services: BTreeMap<String, ComposeService>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ComposeService {
    #[serde(default)]
    pub ports: Vec<PortEntry>,
}

/// One entry of a service's `ports` list, in any of the syntaxes compose accepts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PortEntry {
    /// `- 9200`
    Number(u32),
    /// `- "9200"`, `- "8080:80"`, `- "127.0.0.1:8080:80/tcp"`
    Short(String),
    /// `- target: 80` with optional `published` and `protocol`
    Long {
        target: u32,
        #[serde(default)]
        protocol: Option<String>,
    },
}

impl PortEntry {
    /// The container-side port, or `None` for non-TCP mappings
    pub fn container_port(&self) -> Option<String> {
        match self {
            PortEntry::Number(port) => Some(port.to_string()),
            PortEntry::Short(spec) => {
                let (mapping, protocol) = match spec.split_once('/') {
                    Some((mapping, protocol)) => (mapping, Some(protocol)),
                    None => (spec.as_str(), None),
                };
                if protocol.is_some_and(|p| !p.eq_ignore_ascii_case("tcp")) {
                    return None;
                }
                let port = mapping.rsplit(':').next().unwrap_or(mapping).trim();
                (!port.is_empty()).then(|| port.to_string())
            }
            PortEntry::Long { target, protocol } => {
                if protocol
                    .as_deref()
                    .is_some_and(|p| !p.eq_ignore_ascii_case("tcp"))
                {
                    return None;
                }
                Some(target.to_string())
            }
        }
    }
}

impl ComposeConfig {
    pub fn parse(yaml: &[u8]) -> Result<Self> {
        serde_yaml_ng::from_slice(yaml).map_err(|e| {
            BakeError::ComposeConfig {
                details: e.to_string(),
            }
            .into()
        })
    }

    /// `(service, container port)` pairs in service-name order
    pub fn service_ports(&self) -> Vec<(String, String)> {
        self.services
            .iter()
            .flat_map(|(name, service)| {
                service
                    .ports
                    .iter()
                    .filter_map(|entry| entry.container_port())
                    .map(move |port| (name.clone(), port))
            })
            .collect()
    }
}
