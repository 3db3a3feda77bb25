//! The geom element: shapes attached rigidly to bodies.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::position::Pos;
use crate::types::{FluidShape, Vec2, Vec3, Vec4, Vec5, Vec6, VecN};
use crate::validate::{self, Validate, ValidationError};

/// The geometric shape of a [`Geom`], discriminated by the MJCF `type`
/// attribute.
///
/// Each shape kind carries its own `size` typing: a sphere has a single
/// radius, a box has three half-sizes, capsules and cylinders take a
/// radius plus an optional half-length (one or two values). Height field,
/// mesh and SDF geoms take their sizing from the referenced asset and
/// carry no size of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeomShape {
    /// An infinite plane, normal to the local Z axis. Can only be attached
    /// to the world body or static children of the world.
    Plane {
        /// X half-size; Y half-size; grid spacing for rendering. Zero
        /// half-sizes render as infinite in that dimension.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Vec3>,
    },

    /// A height field; references an `hfield` asset. Sizing comes from the
    /// asset.
    Hfield,

    /// A sphere centered at the geom position.
    Sphere {
        /// Radius of the sphere.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<f64>,
    },

    /// A cylinder capped with two half-spheres, oriented along local Z.
    Capsule {
        /// Radius, optionally followed by the cylinder half-length (not
        /// needed with `fromto`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<VecN>,
    },

    /// A sphere scaled separately along the local axes.
    Ellipsoid {
        /// X, Y and Z radii.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Vec3>,
    },

    /// A cylinder oriented along local Z.
    Cylinder {
        /// Radius, optionally followed by the half-height (not needed with
        /// `fromto`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<VecN>,
    },

    /// A box.
    Box {
        /// Half-sizes along the local X, Y and Z axes.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Vec3>,
    },

    /// A triangulated mesh; references a `mesh` asset via the geom's
    /// `mesh` attribute. Sizing comes from the asset.
    Mesh,

    /// A signed distance field provided by an engine plugin.
    Sdf,
}

impl GeomShape {
    /// The MJCF `type` keyword for this shape.
    pub fn type_keyword(&self) -> &'static str {
        match self {
            GeomShape::Plane { .. } => "plane",
            GeomShape::Hfield => "hfield",
            GeomShape::Sphere { .. } => "sphere",
            GeomShape::Capsule { .. } => "capsule",
            GeomShape::Ellipsoid { .. } => "ellipsoid",
            GeomShape::Cylinder { .. } => "cylinder",
            GeomShape::Box { .. } => "box",
            GeomShape::Mesh => "mesh",
            GeomShape::Sdf => "sdf",
        }
    }

    fn build_size(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        match self {
            GeomShape::Plane { size }
            | GeomShape::Ellipsoid { size }
            | GeomShape::Box { size } => el.attr_opt("size", size.as_ref()),
            GeomShape::Sphere { size } => el.attr_opt("size", size.as_ref()),
            GeomShape::Capsule { size } | GeomShape::Cylinder { size } => {
                el.attr_opt("size", size.as_ref())
            }
            GeomShape::Hfield | GeomShape::Mesh | GeomShape::Sdf => Ok(()),
        }
    }

    fn validate_size(&self) -> Result<(), ValidationError> {
        let radial = match self {
            GeomShape::Capsule { size } | GeomShape::Cylinder { size } => size,
            _ => return Ok(()),
        };
        if let Some(size) = radial {
            if size.is_empty() || size.len() > 2 {
                return Err(ValidationError::BadLength {
                    element: "geom",
                    attribute: "size",
                    expected: "1 or 2",
                    got: size.len(),
                });
            }
        }
        Ok(())
    }
}

/// A geom, attached rigidly to the body within which it is defined.
///
/// At runtime geoms determine the appearance and collision properties of
/// the body; at compile time they can also determine its inertial
/// properties, depending on the `inertial` element and the compiler's
/// `inertiafromgeom` setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geom {
    /// Name of the geom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Defaults class for setting unspecified attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// 32-bit contact type bitmask; two geoms can collide if the contype
    /// of one is compatible with the conaffinity of the other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contype: Option<i32>,

    /// Contact affinity bitmask; see `contype`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conaffinity: Option<i32>,

    /// Dimensionality of the contact space: 1, 3, 4 or 6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condim: Option<i32>,

    /// Integer group; used for inertia inference selection and to toggle
    /// rendering of whole groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<i32>,

    /// Contact priority, interacting with `solmix` when combining the
    /// parameters of a colliding pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// Material applied to the geom; determines visual properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Color and transparency; overrides the material color when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba: Option<Vec4>,

    /// Sliding, torsional and rolling friction coefficients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<Vec3>,

    /// Geom mass; when given, density is computed from it and the shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,

    /// Material density used to compute mass and inertia from the shape;
    /// ignored when `mass` is specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,

    /// Compute inertia assuming all mass is on the surface; `density`
    /// becomes surface density.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shellinertia: Option<bool>,

    /// Weight for averaging contact parameters of a colliding pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solmix: Option<f64>,

    /// Constraint solver reference parameters for contacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solref: Option<Vec2>,

    /// Constraint solver impedance parameters for contacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solimp: Option<Vec5>,

    /// Distance threshold below which contacts are detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,

    /// Enables inactive contacts between `margin` and `margin - gap`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,

    /// Alternative length/frame specification for capsule, box, cylinder
    /// and ellipsoid geoms: two 3D end points. When set, the position and
    /// orientation attributes are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fromto: Option<Vec6>,

    /// Position of the geom in the body frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,

    /// Orientation of the geom frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Height field asset reference; required iff the type is `hfield`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hfield: Option<String>,

    /// Mesh asset reference; required for `mesh` geoms, and used for
    /// primitive fitting otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<String>,

    /// Scale applied on top of the automated mesh fitting result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitscale: Option<f64>,

    /// Geom-level fluid interaction model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluidshape: Option<FluidShape>,

    /// Dimensionless coefficients of the fluid interaction model: blunt
    /// drag, slender drag, angular drag, Kutta lift, Magnus lift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluidcoef: Option<Vec5>,

    /// Custom user parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<VecN>,

    /// The geometric shape kind and its size parameters.
    #[serde(flatten)]
    pub shape: GeomShape,
}

impl Default for Geom {
    fn default() -> Self {
        Self {
            name: None,
            class: None,
            contype: None,
            conaffinity: None,
            condim: None,
            group: None,
            priority: None,
            material: None,
            rgba: None,
            friction: None,
            mass: None,
            density: None,
            shellinertia: None,
            solmix: None,
            solref: None,
            solimp: None,
            margin: None,
            gap: None,
            fromto: None,
            pos: None,
            orientation: None,
            hfield: None,
            mesh: None,
            fitscale: None,
            fluidshape: None,
            fluidcoef: None,
            user: None,
            shape: GeomShape::Sphere { size: None },
        }
    }
}

impl ToElement for Geom {
    fn tag(&self) -> &'static str {
        "geom"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("class", self.class.as_ref())?;
        el.attr("type", self.shape.type_keyword())?;
        el.attr_opt("contype", self.contype.as_ref())?;
        el.attr_opt("conaffinity", self.conaffinity.as_ref())?;
        el.attr_opt("condim", self.condim.as_ref())?;
        el.attr_opt("group", self.group.as_ref())?;
        el.attr_opt("priority", self.priority.as_ref())?;
        el.attr_opt("material", self.material.as_ref())?;
        el.attr_opt("friction", self.friction.as_ref())?;
        el.attr_opt("mass", self.mass.as_ref())?;
        el.attr_opt("density", self.density.as_ref())?;
        el.attr_opt("shellinertia", self.shellinertia.as_ref())?;
        el.attr_opt("solmix", self.solmix.as_ref())?;
        el.attr_opt("solref", self.solref.as_ref())?;
        el.attr_opt("solimp", self.solimp.as_ref())?;
        el.attr_opt("margin", self.margin.as_ref())?;
        el.attr_opt("gap", self.gap.as_ref())?;
        el.attr_opt("fromto", self.fromto.as_ref())?;
        el.flatten_opt(self.pos.as_ref())?;
        el.flatten_opt(self.orientation.as_ref())?;
        el.attr_opt("hfield", self.hfield.as_ref())?;
        el.attr_opt("mesh", self.mesh.as_ref())?;
        el.attr_opt("fitscale", self.fitscale.as_ref())?;
        el.attr_opt("rgba", self.rgba.as_ref())?;
        el.attr_opt("fluidshape", self.fluidshape.as_ref())?;
        el.attr_opt("fluidcoef", self.fluidcoef.as_ref())?;
        el.attr_opt("user", self.user.as_ref())?;
        self.shape.build_size(el)
    }
}

impl Validate for Geom {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(condim) = self.condim {
            if !matches!(condim, 1 | 3 | 4 | 6) {
                return Err(ValidationError::OutOfRange {
                    element: "geom",
                    attribute: "condim",
                    value: f64::from(condim),
                    min: 1.0,
                    max: 6.0,
                });
            }
        }
        validate::in_range("geom", "group", self.group, 0, 30)?;
        if let Some(mass) = self.mass {
            if !mass.is_finite() || mass < 0.0 {
                return Err(ValidationError::BadMagnitude {
                    element: "geom",
                    attribute: "mass",
                    value: mass,
                    requirement: "non-negative",
                });
            }
        }
        if matches!(self.shape, GeomShape::Hfield) && self.hfield.is_none() {
            return Err(ValidationError::Missing {
                element: "geom",
                attribute: "hfield",
                reason: "hfield geoms must reference a height field asset",
            });
        }
        if matches!(self.shape, GeomShape::Mesh) && self.mesh.is_none() {
            return Err(ValidationError::Missing {
                element: "geom",
                attribute: "mesh",
                reason: "mesh geoms must reference a mesh asset",
            });
        }
        if let Some(orientation) = &self.orientation {
            orientation.validate()?;
        }
        self.shape.validate_size()
    }
}
