//! I/O helpers for the `netadmit` driver.

pub mod config;
pub mod spec_file;
