//! Admission-time validation of a virtual machine's network configuration.
//!
//! The crate checks the `networks` list and the `domain.devices.interfaces`
//! list of a workload spec and reports every violation as a status cause,
//! without mutating the input or stopping at the first problem.
//!
//! - **[`core`]**: Pure checks (cross-references, uniqueness, field formats)
//!   and the value types they share. No I/O.
//! - **[`validate`]**: Runs the checks in a fixed order and concatenates causes.
//! - **[`io`]**: Config and spec-file loading for the `netadmit` driver.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;
pub mod workload;

pub use crate::core::cause::{CauseKind, ValidationCause};
pub use crate::core::field::FieldPath;
pub use crate::validate::{ValidationReport, validate_network_spec};
pub use crate::workload::{Interface, Network, WorkloadSpec};
