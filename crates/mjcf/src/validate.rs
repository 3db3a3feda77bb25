//! Instance-level validation of model elements.
//!
//! Validation runs after an instance is fully populated, either directly
//! by the caller after construction, or by the serialization crate before
//! emitting XML and after deserializing JSON. Each check fails fast with a
//! single [`ValidationError`] naming the element and the offending
//! attribute(s); there is no batching of multiple failures.

use thiserror::Error;

/// Errors produced by instance validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// More than one attribute of a mutually exclusive group is set.
    #[error("<{element}>: at most one of [{fields}] may be specified")]
    MutuallyExclusive {
        /// Tag of the element carrying the group.
        element: &'static str,
        /// The attributes that were all set, comma separated.
        fields: String,
    },

    /// A numeric attribute falls outside its allowed range.
    #[error("<{element}> {attribute}: {value} is outside [{min}, {max}]")]
    OutOfRange {
        element: &'static str,
        attribute: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A numeric attribute that must be positive (or non-negative) is not.
    #[error("<{element}> {attribute}: {value} must be {requirement}")]
    BadMagnitude {
        element: &'static str,
        attribute: &'static str,
        value: f64,
        /// `"positive"`, `"non-negative"` or `"finite"`.
        requirement: &'static str,
    },

    /// A vector attribute has the wrong number of elements.
    #[error("<{element}> {attribute}: expected {expected} element(s), got {got}")]
    BadLength {
        element: &'static str,
        attribute: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// A vector that must have non-zero length is zero.
    #[error("<{element}> {attribute}: vector must be non-zero")]
    ZeroVector {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute required by the current configuration is missing.
    #[error("<{element}> {attribute} is required: {reason}")]
    Missing {
        element: &'static str,
        attribute: &'static str,
        reason: &'static str,
    },

    /// A full inertia matrix is not positive definite.
    #[error("<inertial> fullinertia: inertia matrix must be positive definite")]
    NotPositiveDefinite,

    /// An Euler rotation sequence is malformed.
    #[error("eulerseq must be exactly 3 characters from {{x, y, z, X, Y, Z}}, got \"{value}\"")]
    BadEulerSeq {
        /// The rejected sequence.
        value: String,
    },

    /// An Euler orientation was converted without a rotation sequence.
    #[error("euler orientation requires an explicit rotation sequence (xyz, ZXZ, ...)")]
    MissingEulerSeq,
}

/// Validation of a fully populated element.
///
/// Implementations check the constraints the type system cannot express:
/// exclusivity groups, numeric ranges and configuration-dependent required
/// attributes. Container elements validate their children recursively.
pub trait Validate {
    /// Checks this instance, returning the first violation found.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Enforces an "at most one of" group: fails when more than one member of
/// the group is set on the instance.
pub fn exclusive(
    element: &'static str,
    fields: &[(&'static str, bool)],
) -> Result<(), ValidationError> {
    let set: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();
    if set.len() > 1 {
        return Err(ValidationError::MutuallyExclusive {
            element,
            fields: set.join(", "),
        });
    }
    Ok(())
}

/// Checks that an optional integer attribute lies in an inclusive range.
pub fn in_range(
    element: &'static str,
    attribute: &'static str,
    value: Option<i32>,
    min: i32,
    max: i32,
) -> Result<(), ValidationError> {
    if let Some(v) = value {
        if v < min || v > max {
            return Err(ValidationError::OutOfRange {
                element,
                attribute,
                value: f64::from(v),
                min: f64::from(min),
                max: f64::from(max),
            });
        }
    }
    Ok(())
}

/// Checks that an Euler rotation sequence is three characters from
/// `{x, y, z, X, Y, Z}`.
pub fn check_eulerseq(seq: &str) -> Result<(), ValidationError> {
    if seq.len() != 3 || !seq.chars().all(|c| matches!(c, 'x' | 'y' | 'z' | 'X' | 'Y' | 'Z')) {
        return Err(ValidationError::BadEulerSeq {
            value: seq.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_allows_zero_or_one() {
        assert!(exclusive("inertial", &[("diaginertia", false), ("fullinertia", false)]).is_ok());
        assert!(exclusive("inertial", &[("diaginertia", true), ("fullinertia", false)]).is_ok());
    }

    #[test]
    fn test_exclusive_rejects_two() {
        let err = exclusive("inertial", &[("diaginertia", true), ("fullinertia", true)])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MutuallyExclusive {
                element: "inertial",
                fields: "diaginertia, fullinertia".to_string(),
            }
        );
    }

    #[test]
    fn test_eulerseq_check() {
        assert!(check_eulerseq("xyz").is_ok());
        assert!(check_eulerseq("XYZ").is_ok());
        assert!(check_eulerseq("ZXZ").is_ok());
        assert!(check_eulerseq("xy").is_err());
        assert!(check_eulerseq("xyw").is_err());
        assert!(check_eulerseq("xyzx").is_err());
    }
}
