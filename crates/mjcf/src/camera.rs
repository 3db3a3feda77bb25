//! The camera element.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::position::Pos;
use crate::types::{TrackingMode, Vec2, VecN};
use crate::validate::{self, Validate, ValidationError};

/// A camera that moves with the body in which it is defined. Cameras in
/// the world body are fixed; the default free camera always exists in
/// addition to the ones defined here.
///
/// The viewpoint coincides with the center of the camera frame; the
/// camera looks along the frame's -Z axis with +X to the right and +Y up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Name of the camera.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Defaults class for setting unspecified attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Orthographic instead of perspective projection; changes the
    /// meaning of `fovy` from degrees to length units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orthographic: Option<bool>,

    /// Vertical field of view: degrees for perspective cameras, length
    /// units for orthographic ones. Mutually exclusive with `sensorsize`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fovy: Option<f64>,

    /// Inter-pupilary distance for stereoscopic rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipd: Option<f64>,

    /// Resolution in pixels (width, height); informational, rendering
    /// uses the context size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<[i32; 2]>,

    /// Position of the camera frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,

    /// Orientation of the camera frame. For cameras `xyaxes` is
    /// particularly convenient: X and Y correspond to "right" and "up"
    /// in pixel space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// How camera position and orientation are computed in forward
    /// kinematics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TrackingMode>,

    /// The body targeted in `targetbody`/`targetbodycom` modes; required
    /// there, ignored elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Focal length in length units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal: Option<Vec2>,

    /// Focal length in pixels; takes precedence over `focal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focalpixel: Option<[i32; 2]>,

    /// Principal point offset in length units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Vec2>,

    /// Principal point offset in pixels; takes precedence over
    /// `principal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principalpixel: Option<Vec2>,

    /// Sensor size in length units. Mutually exclusive with `fovy`; when
    /// specified, `resolution` and `focal` are required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensorsize: Option<Vec2>,

    /// Custom user parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<VecN>,
}

impl ToElement for Camera {
    fn tag(&self) -> &'static str {
        "camera"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("class", self.class.as_ref())?;
        el.attr_opt("orthographic", self.orthographic.as_ref())?;
        el.attr_opt("fovy", self.fovy.as_ref())?;
        el.attr_opt("ipd", self.ipd.as_ref())?;
        el.attr_opt("resolution", self.resolution.as_ref())?;
        el.flatten_opt(self.pos.as_ref())?;
        el.flatten_opt(self.orientation.as_ref())?;
        el.attr_opt("mode", self.mode.as_ref())?;
        el.attr_opt("target", self.target.as_ref())?;
        el.attr_opt("focal", self.focal.as_ref())?;
        el.attr_opt("focalpixel", self.focalpixel.as_ref())?;
        el.attr_opt("principal", self.principal.as_ref())?;
        el.attr_opt("principalpixel", self.principalpixel.as_ref())?;
        el.attr_opt("sensorsize", self.sensorsize.as_ref())?;
        el.attr_opt("user", self.user.as_ref())
    }
}

impl Validate for Camera {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::exclusive(
            "camera",
            &[
                ("fovy", self.fovy.is_some()),
                ("sensorsize", self.sensorsize.is_some()),
            ],
        )?;
        if matches!(
            self.mode,
            Some(TrackingMode::TargetBody) | Some(TrackingMode::TargetBodyCom)
        ) && self.target.is_none()
        {
            return Err(ValidationError::Missing {
                element: "camera",
                attribute: "target",
                reason: "targetbody/targetbodycom cameras must name a target body",
            });
        }
        if self.sensorsize.is_some() && (self.resolution.is_none() || self.focal.is_none()) {
            return Err(ValidationError::Missing {
                element: "camera",
                attribute: "resolution",
                reason: "sensorsize requires resolution and focal",
            });
        }
        if let Some(orientation) = &self.orientation {
            orientation.validate()?;
        }
        Ok(())
    }
}
