//! Network validation pipeline for a workload spec.

use serde::Serialize;
use tracing::debug;

use crate::core::cause::ValidationCause;
use crate::core::field::FieldPath;
use crate::core::interface_fields::validate_interfaces_fields;
use crate::core::references::{
    validate_interfaces_assigned_to_networks, validate_networks_assigned_to_interfaces,
};
use crate::core::uniqueness::{validate_interface_name_unique, validate_network_name_unique};
use crate::workload::WorkloadSpec;

type Check = fn(&FieldPath, &WorkloadSpec) -> Vec<ValidationCause>;

/// Checks in execution order. Causes are concatenated in this order.
const CHECKS: [(&str, Check); 5] = [
    ("networks_assigned_to_interfaces", validate_networks_assigned_to_interfaces),
    ("interfaces_assigned_to_networks", validate_interfaces_assigned_to_networks),
    ("network_name_unique", validate_network_name_unique),
    ("interface_name_unique", validate_interface_name_unique),
    ("interfaces_fields", validate_interfaces_fields),
];

/// Run every network check against `spec` and collect all causes.
///
/// Never stops early: an empty result means the network configuration is
/// consistent.
pub fn validate_network_spec(field: &FieldPath, spec: &WorkloadSpec) -> Vec<ValidationCause> {
    debug!(
        field = %field,
        networks = spec.networks.len(),
        interfaces = spec.interfaces().len(),
        "validating network configuration"
    );

    let mut causes = Vec::new();
    for (name, check) in CHECKS {
        let found = check(field, spec);
        debug!(check = name, causes = found.len(), "check finished");
        causes.extend(found);
    }

    debug!(causes = causes.len(), "network validation finished");
    causes
}

/// Causes for one spec, labelled with the prefix they were produced under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub field: String,
    pub causes: Vec<ValidationCause>,
}

impl ValidationReport {
    pub fn run(field: &FieldPath, spec: &WorkloadSpec) -> Self {
        Self {
            field: field.to_string(),
            causes: validate_network_spec(field, spec),
        }
    }

    /// True when no cause was reported.
    pub fn is_admissible(&self) -> bool {
        self.causes.is_empty()
    }
}
