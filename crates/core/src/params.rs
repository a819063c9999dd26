//! Strict extraction of typed options from a JSON object.
//!
//! Missing keys (or explicit `null`) fall back to the given default. A key
//! that is present with the wrong type, or a key nobody asked for, is a
//! [`ValidationError::InvalidOption`]: bad options are reported, not ignored.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Returns the JSON object, or an error naming what was passed instead.
pub fn as_object(params: &Value) -> Result<&Map<String, Value>, ValidationError> {
    params.as_object().ok_or_else(|| ValidationError::InvalidOption {
        name: "<root>".into(),
        reason: format!("expected a JSON object, got {}", type_name(params)),
    })
}

/// Fails on the first key of `params` that is not in `allowed`.
pub fn reject_unknown(params: &Value, allowed: &[&str]) -> Result<(), ValidationError> {
    match as_object(params)?
        .keys()
        .find(|k| !allowed.contains(&k.as_str()))
    {
        Some(key) => Err(ValidationError::InvalidOption {
            name: key.clone(),
            reason: format!("unknown option (expected one of: {})", allowed.join(", ")),
        }),
        None => Ok(()),
    }
}

/// Reads a boolean option.
pub fn opt_bool(params: &Value, name: &str, default: bool) -> Result<bool, ValidationError> {
    match lookup(params, name)? {
        None => Ok(default),
        Some(v) => v.as_bool().ok_or_else(|| mismatch(name, "bool", v)),
    }
}

/// Reads a non-negative integer option.
pub fn opt_usize(params: &Value, name: &str, default: usize) -> Result<usize, ValidationError> {
    match lookup(params, name)? {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| mismatch(name, "non-negative integer", v)),
    }
}

/// Reads a finite floating point option; integers are accepted.
pub fn opt_f64(params: &Value, name: &str, default: f64) -> Result<f64, ValidationError> {
    match lookup(params, name)? {
        None => Ok(default),
        Some(v) => v
            .as_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| mismatch(name, "number", v)),
    }
}

fn lookup<'a>(params: &'a Value, name: &str) -> Result<Option<&'a Value>, ValidationError> {
    Ok(as_object(params)?.get(name).filter(|v| !v.is_null()))
}

fn mismatch(name: &str, expected: &str, got: &Value) -> ValidationError {
    ValidationError::InvalidOption {
        name: name.to_string(),
        reason: format!("expected {expected}, got {}", type_name(got)),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
