//! Name uniqueness within the network and interface lists.
//!
//! Only repeats are reported: a name seen `n` times yields `n - 1` causes,
//! one per later occurrence, in list order.

use std::collections::HashSet;

use crate::core::cause::{ValidationCause, interfaces_path, networks_path};
use crate::core::field::FieldPath;
use crate::workload::WorkloadSpec;

pub fn validate_network_name_unique(
    field: &FieldPath,
    spec: &WorkloadSpec,
) -> Vec<ValidationCause> {
    let networks = networks_path(field);
    let mut seen = HashSet::new();
    let mut causes = Vec::new();

    for (idx, network) in spec.networks.iter().enumerate() {
        if !seen.insert(network.name.as_str()) {
            causes.push(ValidationCause::duplicate(
                format!(
                    "Network with name '{}' already exists, every network must have a unique name",
                    network.name
                ),
                &networks.index(idx).child("name"),
            ));
        }
    }
    causes
}

pub fn validate_interface_name_unique(
    field: &FieldPath,
    spec: &WorkloadSpec,
) -> Vec<ValidationCause> {
    let interfaces = interfaces_path(field);
    let mut seen = HashSet::new();
    let mut causes = Vec::new();

    for (idx, iface) in spec.interfaces().iter().enumerate() {
        if !seen.insert(iface.name.as_str()) {
            causes.push(ValidationCause::duplicate(
                "Only one interface can be connected to one specific network",
                &interfaces.index(idx).child("name"),
            ));
        }
    }
    causes
}
