//! JSON Schema generation and runtime validation for the output file

use std::sync::LazyLock;

use schemars::schema_for;
use serde_json::Value;

use super::types::UpsetOutput;

/// Cached JSON Schema for UpsetOutput.
static SCHEMA: LazyLock<schemars::Schema> = LazyLock::new(|| schema_for!(UpsetOutput));

/// Returns the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&*SCHEMA)
}

/// Validate a JSON value against the UpsetOutput schema.
///
/// Returns `Ok(())` if valid, or `Err` with a description of all validation errors.
pub fn validate(value: &Value) -> Result<(), String> {
    let schema_val = serde_json::to_value(&*SCHEMA)
        .map_err(|e| format!("Failed to serialize schema: {}", e))?;
    let validator = jsonschema::validator_for(&schema_val)
        .map_err(|e| format!("Failed to compile schema: {}", e))?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("  - {}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Output JSON failed schema validation ({} errors):\n{}",
            errors.len(),
            errors.join("\n")
        ))
    }
}

/// Returns true if runtime validation should be performed.
///
/// Always true in debug builds. In release builds, true only if `UPSET_VALIDATE_OUTPUT=1`.
pub fn should_validate() -> bool {
    if cfg!(debug_assertions) {
        true
    } else {
        std::env::var("UPSET_VALIDATE_OUTPUT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}
