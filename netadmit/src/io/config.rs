//! Driver configuration stored in `netadmit.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::field::FieldPath;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "netadmit.toml";

/// How `netadmit check` prints causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of status causes.
    Json,
    /// One `reason field: message` line per cause.
    Text,
}

/// Driver configuration (TOML).
///
/// Missing fields fall back to defaults; command-line flags override them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdmitterConfig {
    /// Dotted field-path prefix under which the workload spec lives.
    pub field_prefix: String,

    pub format: OutputFormat,
}

impl Default for AdmitterConfig {
    fn default() -> Self {
        Self {
            field_prefix: "spec".to_string(),
            format: OutputFormat::Json,
        }
    }
}

impl AdmitterConfig {
    pub fn validate(&self) -> Result<()> {
        self.field_path()?;
        Ok(())
    }

    /// Parse `field_prefix` into a path.
    pub fn field_path(&self) -> Result<FieldPath> {
        FieldPath::parse(&self.field_prefix).ok_or_else(|| {
            anyhow!(
                "field_prefix must be a non-empty dotted path, got '{}'",
                self.field_prefix
            )
        })
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AdmitterConfig::default()`.
pub fn load_config(path: &Path) -> Result<AdmitterConfig> {
    if !path.exists() {
        return Ok(AdmitterConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AdmitterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AdmitterConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, AdmitterConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join(CONFIG_FILE);
        let cfg = AdmitterConfig {
            field_prefix: "request.object.spec".to_string(),
            format: OutputFormat::Text,
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "format = \"text\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.field_prefix, "spec");
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_empty_prefix_segment() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "field_prefix = \"spec..x\"\n").expect("write");
        let err = load_config(&path).expect_err("should fail");
        assert!(format!("{:#}", err).contains("field_prefix must be a non-empty dotted path"));
    }
}
