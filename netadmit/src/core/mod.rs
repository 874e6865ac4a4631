//! Pure network checks over a workload spec.
//!
//! Core modules perform no I/O and hold no mutable state. Each check maps a
//! field-path prefix and a spec to an ordered list of causes.

pub mod cause;
pub mod field;
pub mod hardware;
pub mod interface_fields;
pub mod references;
pub mod uniqueness;
