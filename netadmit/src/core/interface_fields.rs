//! Per-interface field format checks: name, model, MAC and PCI address.
//!
//! All four checks run for every interface; none of them short-circuits the
//! others. Empty optional fields are skipped.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::cause::{ValidationCause, interfaces_path};
use crate::core::field::FieldPath;
use crate::core::hardware::{MacAddress, PciAddress};
use crate::workload::{Interface, VIRTIO, WorkloadSpec};

/// Longest MAC address accepted on an interface, in bytes.
const MAC_LEN: usize = 6;

static INTERFACE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("interface name pattern compiles")
});

static SUPPORTED_MODELS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from(["e1000", "e1000e", "ne2k_pci", "pcnet", "rtl8139", VIRTIO])
});

/// Run every field check over every interface, in list order.
pub fn validate_interfaces_fields(field: &FieldPath, spec: &WorkloadSpec) -> Vec<ValidationCause> {
    let interfaces = interfaces_path(field);
    let mut causes = Vec::new();
    for (idx, iface) in spec.interfaces().iter().enumerate() {
        let path = interfaces.index(idx);
        causes.extend(validate_interface_name_format(&path, iface));
        causes.extend(validate_interface_model(&path, iface));
        causes.extend(validate_mac_address(&path, iface));
        causes.extend(validate_pci_address(&path, iface));
    }
    causes
}

/// True if `model` is one of the NIC models the platform can emulate.
pub fn is_supported_model(model: &str) -> bool {
    SUPPORTED_MODELS.contains(model)
}

fn validate_interface_name_format(path: &FieldPath, iface: &Interface) -> Option<ValidationCause> {
    if INTERFACE_NAME_RE.is_match(&iface.name) {
        return None;
    }
    Some(ValidationCause::invalid(
        "Network interface name can only contain alphabetical characters, numbers, dashes (-) or underscores (_)",
        &path.child("name"),
    ))
}

fn validate_interface_model(path: &FieldPath, iface: &Interface) -> Option<ValidationCause> {
    if iface.model.is_empty() || is_supported_model(&iface.model) {
        return None;
    }
    Some(ValidationCause::not_supported(
        format!(
            "interface {} uses model {} that is not supported.",
            path.child("name"),
            iface.model
        ),
        &path.child("model"),
    ))
}

/// Malformed and too-long are independent checks; a value can only trip the
/// length check once it has parsed.
fn validate_mac_address(path: &FieldPath, iface: &Interface) -> Vec<ValidationCause> {
    let mut causes = Vec::new();
    if iface.mac_address.is_empty() {
        return causes;
    }

    let name_path = path.child("name");
    let mac_path = path.child("macAddress");
    let parsed_len = match iface.mac_address.parse::<MacAddress>() {
        Ok(mac) => mac.len(),
        Err(_) => {
            causes.push(ValidationCause::invalid(
                format!(
                    "interface {} has malformed MAC address ({}).",
                    name_path, iface.mac_address
                ),
                &mac_path,
            ));
            0
        }
    };
    if parsed_len > MAC_LEN {
        causes.push(ValidationCause::invalid(
            format!(
                "interface {} has MAC address ({}) that is too long.",
                name_path, iface.mac_address
            ),
            &mac_path,
        ));
    }
    causes
}

fn validate_pci_address(path: &FieldPath, iface: &Interface) -> Option<ValidationCause> {
    if iface.pci_address.is_empty() || iface.pci_address.parse::<PciAddress>().is_ok() {
        return None;
    }
    Some(ValidationCause::invalid(
        format!(
            "interface {} has malformed PCI address ({}).",
            path.child("name"),
            iface.pci_address
        ),
        &path.child("pciAddress"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cause::CauseKind;
    use crate::test_support::{iface, spec_with};

    fn check(iface: Interface) -> Vec<ValidationCause> {
        let spec = spec_with(&[], vec![iface]);
        validate_interfaces_fields(&FieldPath::new("spec"), &spec)
    }

    fn kinds(causes: &[ValidationCause]) -> Vec<CauseKind> {
        causes.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn valid_names_pass() {
        for name in ["eth0", "my-iface_1", "A", "default"] {
            assert!(check(iface(name)).is_empty(), "{name} should pass");
        }
    }

    #[test]
    fn invalid_names_yield_one_invalid_cause() {
        for name in ["", "eth 0", "eth/0", "eth0\n", "ëth0"] {
            let causes = check(iface(name));
            assert_eq!(kinds(&causes), vec![CauseKind::Invalid], "{name:?}");
            assert_eq!(causes[0].field, "spec.domain.devices.interfaces[0].name");
            assert_eq!(
                causes[0].message,
                "Network interface name can only contain alphabetical characters, numbers, dashes (-) or underscores (_)"
            );
        }
    }

    #[test]
    fn empty_and_supported_models_pass() {
        for model in ["", VIRTIO, "e1000", "e1000e", "ne2k_pci", "pcnet", "rtl8139"] {
            let mut nic = iface("eth0");
            nic.model = model.to_string();
            assert!(check(nic).is_empty(), "{model} should pass");
        }
    }

    #[test]
    fn unknown_model_is_not_supported() {
        let mut nic = iface("eth0");
        nic.model = "banana".to_string();
        assert_eq!(
            check(nic),
            vec![ValidationCause {
                kind: CauseKind::NotSupported,
                message: "interface spec.domain.devices.interfaces[0].name uses model banana that is not supported."
                    .to_string(),
                field: "spec.domain.devices.interfaces[0].model".to_string(),
            }]
        );
    }

    #[test]
    fn model_match_is_case_sensitive() {
        let mut nic = iface("eth0");
        nic.model = "VirtIO".to_string();
        assert_eq!(kinds(&check(nic)), vec![CauseKind::NotSupported]);
    }

    #[test]
    fn well_formed_mac_passes() {
        let mut nic = iface("eth0");
        nic.mac_address = "de:ad:be:ef:00:01".to_string();
        assert!(check(nic).is_empty());
    }

    #[test]
    fn malformed_mac_yields_single_cause() {
        let mut nic = iface("eth0");
        nic.mac_address = "not-a-mac".to_string();
        assert_eq!(
            check(nic),
            vec![ValidationCause {
                kind: CauseKind::Invalid,
                message: "interface spec.domain.devices.interfaces[0].name has malformed MAC address (not-a-mac)."
                    .to_string(),
                field: "spec.domain.devices.interfaces[0].macAddress".to_string(),
            }]
        );
    }

    #[test]
    fn eui64_mac_is_too_long() {
        let mut nic = iface("eth0");
        nic.mac_address = "02:00:5e:10:00:00:00:01".to_string();
        assert_eq!(
            check(nic),
            vec![ValidationCause {
                kind: CauseKind::Invalid,
                message: "interface spec.domain.devices.interfaces[0].name has MAC address (02:00:5e:10:00:00:00:01) that is too long."
                    .to_string(),
                field: "spec.domain.devices.interfaces[0].macAddress".to_string(),
            }]
        );
    }

    #[test]
    fn pci_address_checked_when_set() {
        let mut ok = iface("eth0");
        ok.pci_address = "0000:00:1f.2".to_string();
        assert!(check(ok).is_empty());

        let mut bad = iface("eth0");
        bad.pci_address = "zz:00:00.0".to_string();
        assert_eq!(
            check(bad),
            vec![ValidationCause {
                kind: CauseKind::Invalid,
                message: "interface spec.domain.devices.interfaces[0].name has malformed PCI address (zz:00:00.0)."
                    .to_string(),
                field: "spec.domain.devices.interfaces[0].pciAddress".to_string(),
            }]
        );
    }

    #[test]
    fn all_checks_accumulate_in_order() {
        let nic = Interface {
            name: "bad name".to_string(),
            model: "banana".to_string(),
            mac_address: "zz".to_string(),
            pci_address: "nope".to_string(),
        };
        let fields: Vec<String> = check(nic).into_iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![
                "spec.domain.devices.interfaces[0].name",
                "spec.domain.devices.interfaces[0].model",
                "spec.domain.devices.interfaces[0].macAddress",
                "spec.domain.devices.interfaces[0].pciAddress",
            ]
        );
    }

    #[test]
    fn causes_follow_interface_order() {
        let mut second = iface("eth1");
        second.model = "banana".to_string();
        let spec = spec_with(&[], vec![iface("eth 0"), second]);
        let causes = validate_interfaces_fields(&FieldPath::new("spec"), &spec);
        assert_eq!(kinds(&causes), vec![CauseKind::Invalid, CauseKind::NotSupported]);
        assert_eq!(causes[1].field, "spec.domain.devices.interfaces[1].model");
    }
}
