//! Frame orientations and their alternative MJCF representations.
//!
//! Elements with spatial frames accept one of five orientation attributes:
//! `quat`, `axisangle`, `xyaxes`, `zaxis` or `euler`. At most one may be
//! present, which [`Orientation`] guarantees structurally by being a
//! discriminated union. Whichever representation is used, MuJoCo converts
//! it to a unit quaternion during compilation; [`Orientation::to_rotation`]
//! performs the same conversion here.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use nalgebra::{Matrix3, Quaternion, Rotation3, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::types::{Vec3, Vec4, Vec6};
use crate::validate::{self, Validate, ValidationError};

/// One of the alternative MJCF orientation representations.
///
/// The discriminant is carried as the `type` key in JSON, so a
/// round-trip through structured data reproduces the exact variant, not
/// merely an equivalent rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Orientation {
    /// A (w, x, y, z) unit quaternion, MuJoCo's native representation.
    /// Normalized during conversion, so any non-zero length is accepted.
    Quat {
        /// Quaternion in (w, x, y, z) order.
        quat: Vec4,
    },

    /// A rotation axis (x, y, z) followed by the rotation angle. The axis
    /// is normalized during conversion; the rotation is right-handed.
    AxisAngle {
        /// (x, y, z, angle).
        axisangle: Vec4,
    },

    /// The frame's X axis followed by its Y axis. Y is made orthogonal to
    /// X, and Z is their cross product.
    XyAxes {
        /// (x0, x1, x2, y0, y1, y2).
        xyaxes: Vec6,
    },

    /// The frame's Z axis. The minimal rotation mapping (0, 0, 1) onto
    /// this vector determines the X and Y axes implicitly. Useful for
    /// geoms with rotational symmetry around Z, and for lights.
    ZAxis {
        /// Z axis direction; normalized during conversion.
        zaxis: Vec3,
    },

    /// Rotation angles around three coordinate axes, applied in the
    /// sequence given by the compiler's `eulerseq` attribute.
    Euler {
        /// The three rotation angles, in radians.
        euler: Vec3,
    },
}

impl Orientation {
    /// The MJCF attribute name this representation serializes to.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Orientation::Quat { .. } => "quat",
            Orientation::AxisAngle { .. } => "axisangle",
            Orientation::XyAxes { .. } => "xyaxes",
            Orientation::ZAxis { .. } => "zaxis",
            Orientation::Euler { .. } => "euler",
        }
    }

    /// Converts this orientation to a unit quaternion.
    ///
    /// `eulerseq` is the compiler-level rotation sequence and is only
    /// consulted (and then required) for the `euler` representation: three
    /// characters from `{x, y, z, X, Y, Z}`, where lowercase letters
    /// rotate with the frame (intrinsic) and uppercase letters stay fixed
    /// in the parent frame (extrinsic). Angles are taken in radians.
    pub fn to_rotation(
        &self,
        eulerseq: Option<&str>,
    ) -> Result<UnitQuaternion<f64>, ValidationError> {
        match self {
            Orientation::Quat { quat } => {
                let q = Quaternion::new(quat[0], quat[1], quat[2], quat[3]);
                if q.norm() == 0.0 {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "quat",
                    });
                }
                Ok(UnitQuaternion::from_quaternion(q))
            }
            Orientation::AxisAngle { axisangle } => {
                let axis = Vector3::new(axisangle[0], axisangle[1], axisangle[2]);
                if axis.norm() == 0.0 {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "axisangle",
                    });
                }
                Ok(UnitQuaternion::from_axis_angle(
                    &Unit::new_normalize(axis),
                    axisangle[3],
                ))
            }
            Orientation::XyAxes { xyaxes } => {
                let x = Vector3::new(xyaxes[0], xyaxes[1], xyaxes[2]);
                let y = Vector3::new(xyaxes[3], xyaxes[4], xyaxes[5]);
                if x.norm() == 0.0 {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "xyaxes",
                    });
                }
                let x = x.normalize();
                // Gram-Schmidt: make Y orthogonal to X.
                let y = y - y.dot(&x) * x;
                if y.norm() == 0.0 {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "xyaxes",
                    });
                }
                let y = y.normalize();
                let z = x.cross(&y);
                let rot = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[x, y, z]));
                Ok(UnitQuaternion::from_rotation_matrix(&rot))
            }
            Orientation::ZAxis { zaxis } => {
                let z = Vector3::new(zaxis[0], zaxis[1], zaxis[2]);
                if z.norm() == 0.0 {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "zaxis",
                    });
                }
                // Minimal rotation mapping (0, 0, 1) onto the given axis.
                // The antiparallel case has no unique minimal rotation; a
                // half-turn around X is used.
                Ok(
                    UnitQuaternion::rotation_between(&Vector3::z(), &z).unwrap_or_else(|| {
                        UnitQuaternion::from_axis_angle(
                            &Vector3::x_axis(),
                            std::f64::consts::PI,
                        )
                    }),
                )
            }
            Orientation::Euler { euler } => {
                let seq = eulerseq.ok_or(ValidationError::MissingEulerSeq)?;
                validate::check_eulerseq(seq)?;
                let mut q = UnitQuaternion::identity();
                for (c, &angle) in seq.chars().zip(euler.iter()) {
                    let axis = match c.to_ascii_lowercase() {
                        'x' => Vector3::x_axis(),
                        'y' => Vector3::y_axis(),
                        _ => Vector3::z_axis(),
                    };
                    let step = UnitQuaternion::from_axis_angle(&axis, angle);
                    // Lowercase letters rotate with the frame (intrinsic,
                    // composed on the right); uppercase letters stay fixed
                    // in the parent frame (extrinsic, composed on the
                    // left).
                    if c.is_ascii_lowercase() {
                        q = q * step;
                    } else {
                        q = step * q;
                    }
                }
                Ok(q)
            }
        }
    }

    /// Converts this orientation to a (w, x, y, z) quaternion, the order
    /// MuJoCo uses.
    pub fn as_quat(&self, eulerseq: Option<&str>) -> Result<Vec4, ValidationError> {
        let q = self.to_rotation(eulerseq)?.into_inner();
        Ok([q.w, q.i, q.j, q.k])
    }
}

impl Default for Orientation {
    /// The null rotation, as a quaternion.
    fn default() -> Self {
        Orientation::Quat {
            quat: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

impl ToElement for Orientation {
    fn tag(&self) -> &'static str {
        ""
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        match self {
            Orientation::Quat { quat } => el.attr("quat", quat),
            Orientation::AxisAngle { axisangle } => el.attr("axisangle", axisangle),
            Orientation::XyAxes { xyaxes } => el.attr("xyaxes", xyaxes),
            Orientation::ZAxis { zaxis } => el.attr("zaxis", zaxis),
            Orientation::Euler { euler } => el.attr("euler", euler),
        }
    }
}

impl Validate for Orientation {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Orientation::Quat { quat } => {
                if quat.iter().all(|&v| v == 0.0) {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "quat",
                    });
                }
            }
            Orientation::AxisAngle { axisangle } => {
                if axisangle[..3].iter().all(|&v| v == 0.0) {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "axisangle",
                    });
                }
            }
            Orientation::ZAxis { zaxis } => {
                if zaxis.iter().all(|&v| v == 0.0) {
                    return Err(ValidationError::ZeroVector {
                        element: "orientation",
                        attribute: "zaxis",
                    });
                }
            }
            Orientation::XyAxes { .. } | Orientation::Euler { .. } => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_quat_close(q: Vec4, expected: Vec4) {
        for (a, b) in q.iter().zip(expected.iter()) {
            assert!((a - b).abs() < EPS, "{q:?} != {expected:?}");
        }
    }

    #[test]
    fn test_identity_quat() {
        let q = Orientation::default().as_quat(None).unwrap();
        assert_quat_close(q, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_axisangle_half_turn_around_z() {
        let o = Orientation::AxisAngle {
            axisangle: [0.0, 0.0, 2.0, std::f64::consts::PI],
        };
        let q = o.as_quat(None).unwrap();
        assert_quat_close(q, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zaxis_identity_when_already_aligned() {
        let o = Orientation::ZAxis {
            zaxis: [0.0, 0.0, 5.0],
        };
        let q = o.as_quat(None).unwrap();
        assert_quat_close(q, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_xyaxes_quarter_turn() {
        // X axis along world Y, Y axis along world -X: a 90 degree turn
        // around Z.
        let o = Orientation::XyAxes {
            xyaxes: [0.0, 1.0, 0.0, -1.0, 0.0, 0.0],
        };
        let q = o.as_quat(None).unwrap();
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_quat_close(q, [half, 0.0, 0.0, half]);
    }

    #[test]
    fn test_euler_requires_sequence() {
        let o = Orientation::Euler {
            euler: [0.1, 0.2, 0.3],
        };
        assert_eq!(
            o.as_quat(None).unwrap_err(),
            ValidationError::MissingEulerSeq
        );
        assert!(o.as_quat(Some("xyz")).is_ok());
        assert!(matches!(
            o.as_quat(Some("abc")).unwrap_err(),
            ValidationError::BadEulerSeq { .. }
        ));
    }

    #[test]
    fn test_euler_intrinsic_matches_single_axis() {
        let angle = 0.7;
        let o = Orientation::Euler {
            euler: [0.0, 0.0, angle],
        };
        let q = o.as_quat(Some("xyz")).unwrap();
        assert_quat_close(q, [(angle / 2.0).cos(), 0.0, 0.0, (angle / 2.0).sin()]);
    }

    #[test]
    fn test_zero_axis_is_an_error() {
        let o = Orientation::AxisAngle {
            axisangle: [0.0, 0.0, 0.0, 1.0],
        };
        assert!(matches!(
            o.as_quat(None).unwrap_err(),
            ValidationError::ZeroVector { .. }
        ));
    }

    #[test]
    fn test_flattens_to_single_attribute() {
        let o = Orientation::Euler {
            euler: [0.0, 0.0, 1.5],
        };
        let el = o.to_element().unwrap();
        assert_eq!(el.tag(), "");
        assert_eq!(el.get_attr("euler"), Some("0 0 1.5"));
        assert_eq!(el.attributes().len(), 1);
    }
}
