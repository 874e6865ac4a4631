//! Network-related slice of a virtual machine workload spec.
//!
//! Only the fields the network checks read are modelled; everything else in
//! a full spec document is ignored on deserialization.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Paravirtualized NIC model identifier.
pub const VIRTIO: &str = "virtio";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkloadSpec {
    pub domain: Domain,
    pub networks: Vec<Network>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Domain {
    pub devices: Devices,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Devices {
    pub interfaces: Vec<Interface>,
}

/// A logical network the workload is connected to.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Network {
    pub name: String,
}

/// A NIC attached to the workload. Empty optional fields mean "not set".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Interface {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mac_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pci_address: String,
}

impl WorkloadSpec {
    pub fn interfaces(&self) -> &[Interface] {
        &self.domain.devices.interfaces
    }

    /// Set of declared interface names. Only presence matters.
    pub fn interface_names(&self) -> HashSet<&str> {
        self.interfaces().iter().map(|iface| iface.name.as_str()).collect()
    }

    /// Set of declared network names. Only presence matters.
    pub fn network_names(&self) -> HashSet<&str> {
        self.networks.iter().map(|net| net.name.as_str()).collect()
    }
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
