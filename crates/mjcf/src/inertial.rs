//! The inertial element: explicit mass and inertia of a body.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::position::Pos;
use crate::types::{Vec3, Vec6};
use crate::validate::{self, Validate, ValidationError};

/// Mass and inertial properties of a body.
///
/// When this element is present it disables the automatic inference of
/// inertial properties from geoms, which is why `pos` and `mass` are
/// required. The inertia itself is given either as the diagonal of the
/// inertia matrix (`diaginertia`) or as the full symmetric matrix
/// (`fullinertia`); exactly one of the two must be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inertial {
    /// Position of the inertial frame (the center of mass).
    pub pos: Pos,

    /// Orientation of the inertial frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Mass of the body. Negative values are rejected.
    pub mass: f64,

    /// Diagonal inertia matrix relative to the inertial frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diaginertia: Option<Vec3>,

    /// Full symmetric inertia matrix as M(1,1), M(2,2), M(3,3), M(1,2),
    /// M(1,3), M(2,3). Must be positive definite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullinertia: Option<Vec6>,
}

impl Inertial {
    /// The 3x3 inertia matrix, whichever way it was specified.
    ///
    /// Returns an error when neither or both of `diaginertia` and
    /// `fullinertia` are present.
    pub fn inertia_matrix(&self) -> Result<Matrix3<f64>, ValidationError> {
        match (&self.diaginertia, &self.fullinertia) {
            (Some(d), None) => Ok(Matrix3::from_diagonal(&nalgebra::Vector3::new(
                d[0], d[1], d[2],
            ))),
            (None, Some(f)) => Ok(Matrix3::new(
                f[0], f[3], f[4], //
                f[3], f[1], f[5], //
                f[4], f[5], f[2],
            )),
            (None, None) => Err(ValidationError::Missing {
                element: "inertial",
                attribute: "diaginertia",
                reason: "either diaginertia or fullinertia must be specified",
            }),
            (Some(_), Some(_)) => Err(ValidationError::MutuallyExclusive {
                element: "inertial",
                fields: "diaginertia, fullinertia".to_string(),
            }),
        }
    }
}

impl ToElement for Inertial {
    fn tag(&self) -> &'static str {
        "inertial"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.flatten(&self.pos)?;
        el.flatten_opt(self.orientation.as_ref())?;
        el.attr("mass", &self.mass)?;
        el.attr_opt("diaginertia", self.diaginertia.as_ref())?;
        el.attr_opt("fullinertia", self.fullinertia.as_ref())
    }
}

impl Validate for Inertial {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.mass.is_finite() {
            return Err(ValidationError::BadMagnitude {
                element: "inertial",
                attribute: "mass",
                value: self.mass,
                requirement: "finite",
            });
        }
        if self.mass < 0.0 {
            return Err(ValidationError::BadMagnitude {
                element: "inertial",
                attribute: "mass",
                value: self.mass,
                requirement: "non-negative",
            });
        }
        validate::exclusive(
            "inertial",
            &[
                ("diaginertia", self.diaginertia.is_some()),
                ("fullinertia", self.fullinertia.is_some()),
            ],
        )?;
        if let Some(d) = &self.diaginertia {
            for &v in d {
                if !v.is_finite() || v <= 0.0 {
                    return Err(ValidationError::BadMagnitude {
                        element: "inertial",
                        attribute: "diaginertia",
                        value: v,
                        requirement: "positive",
                    });
                }
            }
        }
        if let Some(f) = &self.fullinertia {
            if f.iter().any(|v| !v.is_finite()) {
                return Err(ValidationError::BadMagnitude {
                    element: "inertial",
                    attribute: "fullinertia",
                    value: f64::NAN,
                    requirement: "finite",
                });
            }
        }
        let m = self.inertia_matrix()?;
        // MuJoCo's compiler requires positive-definite inertia.
        let eigenvalues = m.symmetric_eigenvalues();
        if eigenvalues.iter().any(|&v| v <= 0.0) {
            return Err(ValidationError::NotPositiveDefinite);
        }
        if let Some(orientation) = &self.orientation {
            orientation.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Inertial {
        Inertial {
            pos: Pos::new(0.0, 0.0, 0.0),
            orientation: None,
            mass: 1.0,
            diaginertia: Some([0.1, 0.1, 0.1]),
            fullinertia: None,
        }
    }

    #[test]
    fn test_exactly_one_inertia_form_is_valid() {
        assert!(base().validate().is_ok());

        let both = Inertial {
            fullinertia: Some([0.1, 0.1, 0.1, 0.0, 0.0, 0.0]),
            ..base()
        };
        assert!(matches!(
            both.validate().unwrap_err(),
            ValidationError::MutuallyExclusive { .. }
        ));

        let neither = Inertial {
            diaginertia: None,
            ..base()
        };
        assert!(matches!(
            neither.validate().unwrap_err(),
            ValidationError::Missing { .. }
        ));
    }

    #[test]
    fn test_negative_mass_rejected() {
        let bad = Inertial {
            mass: -2.0,
            ..base()
        };
        assert!(matches!(
            bad.validate().unwrap_err(),
            ValidationError::BadMagnitude { .. }
        ));
    }

    #[test]
    fn test_fullinertia_must_be_positive_definite() {
        let bad = Inertial {
            diaginertia: None,
            fullinertia: Some([1.0, 1.0, 1.0, 2.0, 0.0, 0.0]),
            ..base()
        };
        assert_eq!(
            bad.validate().unwrap_err(),
            ValidationError::NotPositiveDefinite
        );
    }

    #[test]
    fn test_serializes_with_flattened_pos() {
        let el = base().to_element().unwrap();
        assert_eq!(el.tag(), "inertial");
        assert_eq!(el.get_attr("pos"), Some("0 0 0"));
        assert_eq!(el.get_attr("mass"), Some("1"));
        assert_eq!(el.get_attr("diaginertia"), Some("0.1 0.1 0.1"));
    }
}
