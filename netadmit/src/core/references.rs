//! Cross-reference checks between networks and interfaces.
//!
//! Every network must be backed by an interface of the same name and every
//! interface must be connected to a declared network.

use crate::core::cause::{ValidationCause, interfaces_path, networks_path};
use crate::core::field::FieldPath;
use crate::workload::WorkloadSpec;

/// Report networks with no interface of the same name (`Required`).
pub fn validate_networks_assigned_to_interfaces(
    field: &FieldPath,
    spec: &WorkloadSpec,
) -> Vec<ValidationCause> {
    let interface_names = spec.interface_names();
    let networks = networks_path(field);

    spec.networks
        .iter()
        .enumerate()
        .filter(|(_, network)| !interface_names.contains(network.name.as_str()))
        .map(|(idx, network)| {
            let path = networks.index(idx).child("name");
            ValidationCause::required(not_found_message(&path, &network.name), &path)
        })
        .collect()
}

/// Report interfaces with no network of the same name (`Invalid`).
pub fn validate_interfaces_assigned_to_networks(
    field: &FieldPath,
    spec: &WorkloadSpec,
) -> Vec<ValidationCause> {
    let network_names = spec.network_names();
    let interfaces = interfaces_path(field);

    spec.interfaces()
        .iter()
        .enumerate()
        .filter(|(_, iface)| !network_names.contains(iface.name.as_str()))
        .map(|(idx, iface)| {
            let path = interfaces.index(idx).child("name");
            ValidationCause::invalid(not_found_message(&path, &iface.name), &path)
        })
        .collect()
}

fn not_found_message(path: &FieldPath, name: &str) -> String {
    format!("{} '{}' not found.", path, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cause::CauseKind;
    use crate::test_support::{iface, spec_with};

    fn root() -> FieldPath {
        FieldPath::new("spec")
    }

    #[test]
    fn matched_lists_produce_no_causes() {
        let spec = spec_with(&["a", "b"], vec![iface("b"), iface("a")]);
        assert!(validate_networks_assigned_to_interfaces(&root(), &spec).is_empty());
        assert!(validate_interfaces_assigned_to_networks(&root(), &spec).is_empty());
    }

    #[test]
    fn network_without_interface_is_required() {
        let spec = spec_with(&["a", "missing"], vec![iface("a")]);
        let causes = validate_networks_assigned_to_interfaces(&root(), &spec);
        assert_eq!(
            causes,
            vec![ValidationCause {
                kind: CauseKind::Required,
                message: "spec.networks[1].name 'missing' not found.".to_string(),
                field: "spec.networks[1].name".to_string(),
            }]
        );
    }

    #[test]
    fn interface_without_network_is_invalid() {
        let spec = spec_with(&["a"], vec![iface("orphan"), iface("a"), iface("other")]);
        let causes = validate_interfaces_assigned_to_networks(&root(), &spec);
        assert_eq!(
            causes,
            vec![
                ValidationCause {
                    kind: CauseKind::Invalid,
                    message: "spec.domain.devices.interfaces[0].name 'orphan' not found."
                        .to_string(),
                    field: "spec.domain.devices.interfaces[0].name".to_string(),
                },
                ValidationCause {
                    kind: CauseKind::Invalid,
                    message: "spec.domain.devices.interfaces[2].name 'other' not found."
                        .to_string(),
                    field: "spec.domain.devices.interfaces[2].name".to_string(),
                },
            ]
        );
    }

    #[test]
    fn repeated_names_still_count_as_matched() {
        let spec = spec_with(&["a", "a"], vec![iface("a")]);
        assert!(validate_networks_assigned_to_interfaces(&root(), &spec).is_empty());
        assert!(validate_interfaces_assigned_to_networks(&root(), &spec).is_empty());
    }

    #[test]
    fn prefix_is_carried_into_messages() {
        let field = FieldPath::new("request").child("object").child("spec");
        let spec = spec_with(&["net"], vec![]);
        let causes = validate_networks_assigned_to_interfaces(&field, &spec);
        assert_eq!(causes.len(), 1);
        assert_eq!(causes[0].field, "request.object.spec.networks[0].name");
        assert_eq!(
            causes[0].message,
            "request.object.spec.networks[0].name 'net' not found."
        );
    }
}
