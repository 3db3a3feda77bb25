//! Joint elements: motion degrees of freedom between a body and its
//! parent.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::position::Pos;
use crate::types::{ActuatorFrcLimited, Align, JointType, Limited, Vec2, Vec3, Vec5, VecN};
use crate::validate::{self, Validate, ValidationError};

/// A joint. If multiple joints are defined in one body, their spatial
/// transformations are applied in order; a body without joints is welded
/// to its parent. Joints cannot be defined in the world body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Name of the joint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Defaults class for setting unspecified attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Joint kind; hinge when unspecified.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub joint_type: Option<JointType>,

    /// Integer group, for custom tags and render toggling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<i32>,

    /// Position of the joint in the body frame; ignored for free joints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,

    /// Rotation axis for hinges, translation direction for slides.
    /// Normalized by the compiler; near-zero length is a compile error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Vec3>,

    /// Desired mass-spring-damper time constant and damping ratio; when
    /// both are positive the compiler overrides stiffness and damping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub springdamper: Option<Vec2>,

    /// Solver reference parameters for joint limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solreflimit: Option<Vec2>,

    /// Solver impedance parameters for joint limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solimplimit: Option<Vec5>,

    /// Solver reference parameters for dry friction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solreffriction: Option<Vec2>,

    /// Solver impedance parameters for dry friction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solimpfriction: Option<Vec5>,

    /// Joint stiffness; a positive value creates a spring with
    /// equilibrium at `springref`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f64>,

    /// Joint limits; degrees or radians per the compiler `angle` setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec2>,

    /// Whether the joint has limits; interacts with `range` and the
    /// compiler's `autolimits`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited: Option<Limited>,

    /// Range for clamping total actuator force on this joint; scalar
    /// joints only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actuatorfrcrange: Option<Vec2>,

    /// Whether actuator forces on the joint are clamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actuatorfrclimited: Option<ActuatorFrcLimited>,

    /// Attribute gravity compensation forces to actuators rather than
    /// passive forces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actuatorgravcomp: Option<bool>,

    /// Distance threshold below which limits become active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,

    /// Reference position or angle in the initial configuration; slide
    /// and hinge joints only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<f64>,

    /// Position or angle at which the joint spring is at equilibrium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub springref: Option<f64>,

    /// Added reflected inertia from geared rotors, applied to all degrees
    /// of freedom created by this joint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armature: Option<f64>,

    /// Damping applied to all degrees of freedom of this joint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,

    /// Friction loss due to dry friction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frictionloss: Option<f64>,

    /// Custom user parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<VecN>,
}

impl ToElement for Joint {
    fn tag(&self) -> &'static str {
        "joint"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("class", self.class.as_ref())?;
        el.attr_opt("type", self.joint_type.as_ref())?;
        el.attr_opt("group", self.group.as_ref())?;
        el.flatten_opt(self.pos.as_ref())?;
        el.attr_opt("axis", self.axis.as_ref())?;
        el.attr_opt("springdamper", self.springdamper.as_ref())?;
        el.attr_opt("solreflimit", self.solreflimit.as_ref())?;
        el.attr_opt("solimplimit", self.solimplimit.as_ref())?;
        el.attr_opt("solreffriction", self.solreffriction.as_ref())?;
        el.attr_opt("solimpfriction", self.solimpfriction.as_ref())?;
        el.attr_opt("stiffness", self.stiffness.as_ref())?;
        el.attr_opt("range", self.range.as_ref())?;
        el.attr_opt("limited", self.limited.as_ref())?;
        el.attr_opt("actuatorfrcrange", self.actuatorfrcrange.as_ref())?;
        el.attr_opt("actuatorfrclimited", self.actuatorfrclimited.as_ref())?;
        el.attr_opt("actuatorgravcomp", self.actuatorgravcomp.as_ref())?;
        el.attr_opt("margin", self.margin.as_ref())?;
        el.attr_opt("ref", self.r#ref.as_ref())?;
        el.attr_opt("springref", self.springref.as_ref())?;
        el.attr_opt("armature", self.armature.as_ref())?;
        el.attr_opt("damping", self.damping.as_ref())?;
        el.attr_opt("frictionloss", self.frictionloss.as_ref())?;
        el.attr_opt("user", self.user.as_ref())
    }
}

impl Validate for Joint {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::in_range("joint", "group", self.group, 0, 30)?;
        if self.joint_type == Some(JointType::Free) && self.range.is_some() {
            return Err(ValidationError::MutuallyExclusive {
                element: "joint",
                fields: "type=\"free\", range".to_string(),
            });
        }
        if let Some(axis) = &self.axis {
            if axis.iter().all(|&v| v == 0.0) {
                return Err(ValidationError::ZeroVector {
                    element: "joint",
                    attribute: "axis",
                });
            }
        }
        Ok(())
    }
}

/// A free joint with a simplified attribute set, serialized as
/// `<joint type="free"/>`.
///
/// The `type="free"` discriminant is a fixed constant of this element and
/// is always emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeJoint {
    /// Name of the joint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Integer group, for custom tags and render toggling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<i32>,

    /// Alignment of the body frame and free joint with the inertial
    /// frame; only applies to simple free bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl FreeJoint {
    /// The fixed joint kind discriminant.
    pub const TYPE: JointType = JointType::Free;
}

impl ToElement for FreeJoint {
    fn tag(&self) -> &'static str {
        "joint"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr("type", &Self::TYPE)?;
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("group", self.group.as_ref())?;
        el.attr_opt("align", self.align.as_ref())
    }
}

impl Validate for FreeJoint {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::in_range("joint", "group", self.group, 0, 30)
    }
}
