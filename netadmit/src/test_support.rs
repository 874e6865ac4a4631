//! Test-only helpers for constructing workload specs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::workload::{Devices, Domain, Interface, Network, WorkloadSpec};

/// Interface with only a name set.
pub fn iface(name: &str) -> Interface {
    Interface::new(name)
}

/// Spec with the given network names and interfaces, in order.
pub fn spec_with(networks: &[&str], interfaces: Vec<Interface>) -> WorkloadSpec {
    WorkloadSpec {
        domain: Domain {
            devices: Devices { interfaces },
        },
        networks: networks.iter().map(|name| Network::new(*name)).collect(),
    }
}

/// Spec where every name has a matching network and interface.
pub fn matched_spec(names: &[&str]) -> WorkloadSpec {
    spec_with(names, names.iter().map(|name| iface(name)).collect())
}

/// Scratch directory for driver tests.
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `spec` wrapped in a VMI-shaped document and return its path.
    pub fn write_vmi(&self, name: &str, spec: &WorkloadSpec) -> anyhow::Result<PathBuf> {
        let doc = serde_json::json!({
            "apiVersion": "kubevirt.io/v1",
            "kind": "VirtualMachineInstance",
            "metadata": {"name": "testvmi"},
            "spec": spec,
        });
        self.write(name, &serde_json::to_string_pretty(&doc)?)
    }

    pub fn write(&self, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
