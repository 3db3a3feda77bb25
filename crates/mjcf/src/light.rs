//! The light element.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::position::Pos;
use crate::types::{LightType, TrackingMode, Vec3};
use crate::validate::{Validate, ValidationError};

/// A light moving with the body in which it is defined. Lights in the
/// world body are fixed. Lighting follows the standard Phong model with
/// ambient, diffuse and specular components plus shadow mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Name of the light.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Defaults class for setting unspecified attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Directional light instead of a spotlight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directional: Option<bool>,

    /// Light kind; some kinds are not supported by the default native
    /// renderer.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub light_type: Option<LightType>,

    /// Whether this light casts shadows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub castshadow: Option<bool>,

    /// Whether the light is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Position of the light.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,

    /// Direction of the light.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<Vec3>,

    /// Radius of the light bulb, for soft shadows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulbradius: Option<f64>,

    /// Light intensity in candela.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,

    /// Range of the light.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,

    /// OpenGL attenuation coefficients (constant, linear, quadratic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attenuation: Option<Vec3>,

    /// Spotlight cutoff angle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,

    /// Spotlight exponent controlling beam concentration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent: Option<f64>,

    /// Ambient color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient: Option<Vec3>,

    /// Diffuse color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffuse: Option<Vec3>,

    /// Specular color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular: Option<Vec3>,

    /// How light position and orientation are computed in forward
    /// kinematics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TrackingMode>,

    /// The body targeted in `targetbody`/`targetbodycom` modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Texture for image lights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

impl ToElement for Light {
    fn tag(&self) -> &'static str {
        "light"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("class", self.class.as_ref())?;
        el.attr_opt("directional", self.directional.as_ref())?;
        el.attr_opt("type", self.light_type.as_ref())?;
        el.attr_opt("castshadow", self.castshadow.as_ref())?;
        el.attr_opt("active", self.active.as_ref())?;
        el.flatten_opt(self.pos.as_ref())?;
        el.attr_opt("dir", self.dir.as_ref())?;
        el.attr_opt("bulbradius", self.bulbradius.as_ref())?;
        el.attr_opt("intensity", self.intensity.as_ref())?;
        el.attr_opt("range", self.range.as_ref())?;
        el.attr_opt("attenuation", self.attenuation.as_ref())?;
        el.attr_opt("cutoff", self.cutoff.as_ref())?;
        el.attr_opt("exponent", self.exponent.as_ref())?;
        el.attr_opt("ambient", self.ambient.as_ref())?;
        el.attr_opt("diffuse", self.diffuse.as_ref())?;
        el.attr_opt("specular", self.specular.as_ref())?;
        el.attr_opt("mode", self.mode.as_ref())?;
        el.attr_opt("target", self.target.as_ref())?;
        el.attr_opt("texture", self.texture.as_ref())
    }
}

impl Validate for Light {
    fn validate(&self) -> Result<(), ValidationError> {
        if matches!(
            self.mode,
            Some(TrackingMode::TargetBody) | Some(TrackingMode::TargetBodyCom)
        ) && self.target.is_none()
        {
            return Err(ValidationError::Missing {
                element: "light",
                attribute: "target",
                reason: "targetbody/targetbodycom lights must name a target body",
            });
        }
        Ok(())
    }
}
