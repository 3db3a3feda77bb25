//! JSON wrapper functions for MJCF model elements.
//!
//! Thin wrappers around `serde_json` with one addition: every
//! deserialization path runs [`Validate`] on the freshly constructed
//! instance, so invalid model data (exclusivity violations, out-of-range
//! parameters) is rejected at construction time rather than surfacing
//! later during XML serialization.

use crate::error::Result;
use mjcf::Validate;
use serde::{Deserialize, Serialize};

/// Deserialize and validate a model element from a JSON string.
///
/// # Examples
///
/// ```ignore
/// use mjcf::Mujoco;
/// use mjcf_serde::from_json_str;
///
/// let model: Mujoco = from_json_str(r#"{"model": "hello"}"#)?;
/// ```
pub fn from_json_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a> + Validate,
{
    let value: T = serde_json::from_str(s)?;
    value.validate()?;
    Ok(value)
}

/// Deserialize and validate a model element from a JSON byte slice.
pub fn from_json_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a> + Validate,
{
    let value: T = serde_json::from_slice(v)?;
    value.validate()?;
    Ok(value)
}

/// Deserialize and validate a model element from a `serde_json::Value`.
pub fn from_json_value<T>(value: serde_json::Value) -> Result<T>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(value)?;
    value.validate()?;
    Ok(value)
}

/// Serialize a model element to a JSON string.
///
/// Absent optional fields are omitted from the output, so a round-trip
/// reproduces the original absent/present states.
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Serialize a model element to a pretty-printed JSON string.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize a model element to a JSON byte vector.
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec(value)?)
}

/// Serialize a model element to a `serde_json::Value`.
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}
