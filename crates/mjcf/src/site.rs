//! The site element: simplified, collision-free locations of interest.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::position::Pos;
use crate::types::{Vec3, Vec4, Vec6, VecN};
use crate::validate::{self, Validate, ValidationError};

/// The rendering shape of a [`Site`]. Sites support only the primitive
/// subset of the geom shape kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SiteShape {
    Sphere {
        /// Radius.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<f64>,
    },
    Capsule {
        /// Radius, optionally followed by the cylinder half-length.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<VecN>,
    },
    Ellipsoid {
        /// X, Y and Z radii.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Vec3>,
    },
    Cylinder {
        /// Radius, optionally followed by the half-height.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<VecN>,
    },
    Box {
        /// Half-sizes along the local axes.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Vec3>,
    },
}

impl SiteShape {
    /// The MJCF `type` keyword for this shape.
    pub fn type_keyword(&self) -> &'static str {
        match self {
            SiteShape::Sphere { .. } => "sphere",
            SiteShape::Capsule { .. } => "capsule",
            SiteShape::Ellipsoid { .. } => "ellipsoid",
            SiteShape::Cylinder { .. } => "cylinder",
            SiteShape::Box { .. } => "box",
        }
    }

    fn build_size(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        match self {
            SiteShape::Sphere { size } => el.attr_opt("size", size.as_ref()),
            SiteShape::Capsule { size } | SiteShape::Cylinder { size } => {
                el.attr_opt("size", size.as_ref())
            }
            SiteShape::Ellipsoid { size } | SiteShape::Box { size } => {
                el.attr_opt("size", size.as_ref())
            }
        }
    }

    fn validate_size(&self) -> Result<(), ValidationError> {
        let radial = match self {
            SiteShape::Capsule { size } | SiteShape::Cylinder { size } => size,
            _ => return Ok(()),
        };
        if let Some(size) = radial {
            if size.is_empty() || size.len() > 2 {
                return Err(ValidationError::BadLength {
                    element: "site",
                    attribute: "size",
                    expected: "1 or 2",
                    got: size.len(),
                });
            }
        }
        Ok(())
    }
}

/// A site: a restricted kind of geom marking a location of interest
/// relative to the body frame.
///
/// Sites do not participate in collisions or inertia computation, but can
/// be used where geoms cannot: mounting sensors, routing spatial tendons,
/// slider-crank transmissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Name of the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Defaults class for setting unspecified attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Integer group, for custom tags and render toggling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<i32>,

    /// Position of the site frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,

    /// Orientation of the site frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Material for the visual properties of the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Alternative frame/length specification from two end points, for
    /// capsule, cylinder, ellipsoid and box sites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fromto: Option<Vec6>,

    /// Color and transparency; overrides the material color when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba: Option<Vec4>,

    /// Custom user parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<VecN>,

    /// The rendering shape kind and its size parameters.
    #[serde(flatten)]
    pub shape: SiteShape,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: None,
            class: None,
            group: None,
            pos: None,
            orientation: None,
            material: None,
            fromto: None,
            rgba: None,
            user: None,
            shape: SiteShape::Sphere { size: None },
        }
    }
}

impl ToElement for Site {
    fn tag(&self) -> &'static str {
        "site"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("class", self.class.as_ref())?;
        el.attr("type", self.shape.type_keyword())?;
        el.attr_opt("group", self.group.as_ref())?;
        el.flatten_opt(self.pos.as_ref())?;
        el.flatten_opt(self.orientation.as_ref())?;
        el.attr_opt("material", self.material.as_ref())?;
        self.shape.build_size(el)?;
        el.attr_opt("fromto", self.fromto.as_ref())?;
        el.attr_opt("rgba", self.rgba.as_ref())?;
        el.attr_opt("user", self.user.as_ref())
    }
}

impl Validate for Site {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::in_range("site", "group", self.group, 0, 30)?;
        if let Some(orientation) = &self.orientation {
            orientation.validate()?;
        }
        self.shape.validate_size()
    }
}
