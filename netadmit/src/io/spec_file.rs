//! Load workload specs from JSON documents on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::debug;

use crate::workload::WorkloadSpec;

/// Load a workload spec from `path`.
///
/// Accepts either a bare spec object or a full VMI document, in which case
/// the `spec` member is used.
pub fn load_spec(path: &Path) -> Result<WorkloadSpec> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read spec {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse spec {}", path.display()))?;
    decode_spec(value).with_context(|| format!("decode spec {}", path.display()))
}

/// Decode a JSON value holding a bare spec or a document with a `spec` member.
pub fn decode_spec(value: Value) -> Result<WorkloadSpec> {
    let spec_value = match value {
        Value::Object(mut doc) => match doc.remove("spec") {
            Some(inner) => {
                debug!("using spec member of document");
                inner
            }
            None => Value::Object(doc),
        },
        other => {
            return Err(anyhow!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ));
        }
    };
    let spec: WorkloadSpec = serde_json::from_value(spec_value)?;
    Ok(spec)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
