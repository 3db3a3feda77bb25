//! Body elements: the kinematic tree.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::attach::Attach;
use crate::camera::Camera;
use crate::geom::Geom;
use crate::inertial::Inertial;
use crate::joint::{FreeJoint, Joint};
use crate::light::Light;
use crate::orientation::Orientation;
use crate::position::Pos;
use crate::site::Site;
use crate::types::{Sleep, VecN};
use crate::validate::{self, Validate, ValidationError};

/// A body in the kinematic tree.
///
/// Bodies nest recursively; each child body's frame is expressed relative
/// to its parent. A body with no joints is welded to its parent; a body
/// with a free joint (or [`FreeJoint`]) floats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Name of the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Defaults class applied to all descendant elements that do not set
    /// their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub childclass: Option<String>,

    /// Position of the body frame, in the parent frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,

    /// Orientation of the body frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Gravity compensation force as a fraction of body weight; 1 floats
    /// the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravcomp: Option<f64>,

    /// Marks this as a mocap body: static, but settable from mjData.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mocap: Option<bool>,

    /// Sleep policy for the tree rooted here; moving tree roots only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<Sleep>,

    /// Custom user parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<VecN>,

    /// Explicit inertial properties; when absent they are inferred from
    /// geoms per the compiler's `inertiafromgeom` setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inertial: Option<Inertial>,

    /// Joints connecting this body to its parent, applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joints: Vec<Joint>,

    /// A free joint making the body float. Mutually exclusive with
    /// `joints`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freejoint: Option<FreeJoint>,

    /// Geoms rigidly attached to this body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geoms: Vec<Geom>,

    /// Sites defined in this body's frame.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<Site>,

    /// Cameras moving with this body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cameras: Vec<Camera>,

    /// Lights moving with this body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lights: Vec<Light>,

    /// Sub-model attachments grafted below this body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attaches: Vec<Attach>,

    /// Child bodies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<Body>,
}

impl Body {
    fn build_children(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.child_opt(self.inertial.as_ref())?;
        el.child_list(&self.joints)?;
        el.child_opt(self.freejoint.as_ref())?;
        el.child_list(&self.geoms)?;
        el.child_list(&self.sites)?;
        el.child_list(&self.cameras)?;
        el.child_list(&self.lights)?;
        el.child_list(&self.attaches)?;
        el.child_list(&self.bodies)
    }

    fn validate_children(&self) -> Result<(), ValidationError> {
        if let Some(inertial) = &self.inertial {
            inertial.validate()?;
        }
        for joint in &self.joints {
            joint.validate()?;
        }
        if let Some(freejoint) = &self.freejoint {
            freejoint.validate()?;
        }
        for geom in &self.geoms {
            geom.validate()?;
        }
        for site in &self.sites {
            site.validate()?;
        }
        for camera in &self.cameras {
            camera.validate()?;
        }
        for light in &self.lights {
            light.validate()?;
        }
        for attach in &self.attaches {
            attach.validate()?;
        }
        for body in &self.bodies {
            body.validate()?;
        }
        Ok(())
    }
}

impl ToElement for Body {
    fn tag(&self) -> &'static str {
        "body"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("childclass", self.childclass.as_ref())?;
        el.flatten_opt(self.pos.as_ref())?;
        el.flatten_opt(self.orientation.as_ref())?;
        el.attr_opt("gravcomp", self.gravcomp.as_ref())?;
        el.attr_opt("mocap", self.mocap.as_ref())?;
        el.attr_opt("sleep", self.sleep.as_ref())?;
        el.attr_opt("user", self.user.as_ref())?;
        self.build_children(el)
    }
}

impl Validate for Body {
    fn validate(&self) -> Result<(), ValidationError> {
        // A free joint excludes every other joint in the same body.
        validate::exclusive(
            "body",
            &[
                ("joint", !self.joints.is_empty()),
                ("freejoint", self.freejoint.is_some()),
            ],
        )?;
        if let Some(orientation) = &self.orientation {
            orientation.validate()?;
        }
        self.validate_children()
    }
}

/// The top-level container of the kinematic tree.
///
/// The world body is a regular body in most respects, but it cannot have
/// attributes of its own, nor joints or inertial properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldBody {
    /// Geoms attached to the world (floors, walls, terrain).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geoms: Vec<Geom>,

    /// Sites fixed in the world frame.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<Site>,

    /// Fixed cameras.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cameras: Vec<Camera>,

    /// Fixed lights.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lights: Vec<Light>,

    /// Sub-model attachments at the world level.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attaches: Vec<Attach>,

    /// Top-level bodies of the kinematic tree.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<Body>,
}

impl ToElement for WorldBody {
    fn tag(&self) -> &'static str {
        "worldbody"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.child_list(&self.geoms)?;
        el.child_list(&self.sites)?;
        el.child_list(&self.cameras)?;
        el.child_list(&self.lights)?;
        el.child_list(&self.attaches)?;
        el.child_list(&self.bodies)
    }
}

impl Validate for WorldBody {
    fn validate(&self) -> Result<(), ValidationError> {
        for geom in &self.geoms {
            geom.validate()?;
        }
        for site in &self.sites {
            site.validate()?;
        }
        for camera in &self.cameras {
            camera.validate()?;
        }
        for light in &self.lights {
            light.validate()?;
        }
        for attach in &self.attaches {
            attach.validate()?;
        }
        for body in &self.bodies {
            body.validate()?;
        }
        Ok(())
    }
}
