//! The asset section: meshes, height fields and materials.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::types::{MeshInertia, Vec2, Vec3, Vec4, VecN};
use crate::validate::{Validate, ValidationError};

/// The asset container. Assets are referenced from model elements by
/// name; they do not themselves appear in the kinematic tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Mesh assets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meshes: Vec<Mesh>,

    /// Height field assets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hfields: Vec<HField>,

    /// Material assets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,
}

impl ToElement for Asset {
    fn tag(&self) -> &'static str {
        "asset"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.child_list(&self.meshes)?;
        el.child_list(&self.hfields)?;
        el.child_list(&self.materials)
    }
}

impl Validate for Asset {
    fn validate(&self) -> Result<(), ValidationError> {
        for mesh in &self.meshes {
            mesh.validate()?;
        }
        for hfield in &self.hfields {
            hfield.validate()?;
        }
        for material in &self.materials {
            material.validate()?;
        }
        Ok(())
    }
}

/// Procedural mesh kinds, discriminated by the MJCF `builtin` attribute.
///
/// When a builtin is present the mesh is generated procedurally and any
/// file reference is ignored. Each kind carries its own generation
/// parameters, emitted right after the `builtin` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "builtin", rename_all = "lowercase")]
pub enum MeshBuiltin {
    /// Repeated subdivisions of a unit icosahedron.
    Sphere {
        /// Number of subdivisions, in [0, 4].
        subdivision: i32,
    },
    /// Quad-projected hemisphere.
    Hemisphere {
        /// Resolution, in [0, 10].
        resolution: i32,
    },
    /// Cone from top and bottom polygons.
    Cone {
        /// Vertices of the base polygon; at least 3.
        nvert: i32,
        /// Top radius as a fraction of the base, in [0, 1].
        radius: f64,
    },
    /// Supersphere (superquadric ellipsoid).
    Supersphere {
        /// Resolution; at least 3.
        resolution: i32,
        /// East-west exponent; non-negative.
        e: f64,
        /// North-south exponent; non-negative.
        n: f64,
    },
    /// Torus.
    Torus {
        /// Resolution; at least 3.
        resolution: i32,
        /// Tube radius as a fraction of the ring radius, in (0, 1].
        radius: f64,
        /// Major circumference scale; positive.
        s: f64,
        /// Minor circumference scale; positive.
        t: f64,
    },
    /// Spherical wedge.
    Wedge {
        /// Azimuthal resolution; non-negative.
        res_phi: i32,
        /// Polar resolution; non-negative.
        res_theta: i32,
        /// Azimuthal field of view in degrees, in (0, 180].
        fov_phi: f64,
        /// Polar field of view in degrees, in (0, 90).
        fov_theta: f64,
        /// Fraction of the wedge that is spherical, in [0, 1].
        gamma: f64,
    },
    /// Flat rectangular plate.
    Plate {
        /// X resolution; positive.
        res_x: i32,
        /// Y resolution; positive.
        res_y: i32,
    },
}

impl MeshBuiltin {
    /// The MJCF `builtin` keyword for this kind.
    pub fn builtin_keyword(&self) -> &'static str {
        match self {
            MeshBuiltin::Sphere { .. } => "sphere",
            MeshBuiltin::Hemisphere { .. } => "hemisphere",
            MeshBuiltin::Cone { .. } => "cone",
            MeshBuiltin::Supersphere { .. } => "supersphere",
            MeshBuiltin::Torus { .. } => "torus",
            MeshBuiltin::Wedge { .. } => "wedge",
            MeshBuiltin::Plate { .. } => "plate",
        }
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr("builtin", self.builtin_keyword())?;
        match self {
            MeshBuiltin::Sphere { subdivision } => el.attr("subdivision", subdivision),
            MeshBuiltin::Hemisphere { resolution } => el.attr("resolution", resolution),
            MeshBuiltin::Cone { nvert, radius } => {
                el.attr("nvert", nvert)?;
                el.attr("radius", radius)
            }
            MeshBuiltin::Supersphere { resolution, e, n } => {
                el.attr("resolution", resolution)?;
                el.attr("e", e)?;
                el.attr("n", n)
            }
            MeshBuiltin::Torus {
                resolution,
                radius,
                s,
                t,
            } => {
                el.attr("resolution", resolution)?;
                el.attr("radius", radius)?;
                el.attr("s", s)?;
                el.attr("t", t)
            }
            MeshBuiltin::Wedge {
                res_phi,
                res_theta,
                fov_phi,
                fov_theta,
                gamma,
            } => {
                el.attr("res_phi", res_phi)?;
                el.attr("res_theta", res_theta)?;
                el.attr("fov_phi", fov_phi)?;
                el.attr("fov_theta", fov_theta)?;
                el.attr("gamma", gamma)
            }
            MeshBuiltin::Plate { res_x, res_y } => {
                el.attr("res_x", res_x)?;
                el.attr("res_y", res_y)
            }
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        fn range_i(
            attribute: &'static str,
            value: i32,
            min: i32,
            max: i32,
        ) -> Result<(), ValidationError> {
            if value < min || value > max {
                return Err(ValidationError::OutOfRange {
                    element: "mesh",
                    attribute,
                    value: f64::from(value),
                    min: f64::from(min),
                    max: f64::from(max),
                });
            }
            Ok(())
        }
        fn positive(attribute: &'static str, value: f64) -> Result<(), ValidationError> {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::BadMagnitude {
                    element: "mesh",
                    attribute,
                    value,
                    requirement: "positive",
                });
            }
            Ok(())
        }

        match *self {
            MeshBuiltin::Sphere { subdivision } => range_i("subdivision", subdivision, 0, 4),
            MeshBuiltin::Hemisphere { resolution } => range_i("resolution", resolution, 0, 10),
            MeshBuiltin::Cone { nvert, radius } => {
                range_i("nvert", nvert, 3, i32::MAX)?;
                if !(0.0..=1.0).contains(&radius) {
                    return Err(ValidationError::OutOfRange {
                        element: "mesh",
                        attribute: "radius",
                        value: radius,
                        min: 0.0,
                        max: 1.0,
                    });
                }
                Ok(())
            }
            MeshBuiltin::Supersphere { resolution, e, n } => {
                range_i("resolution", resolution, 3, i32::MAX)?;
                for (attribute, value) in [("e", e), ("n", n)] {
                    if !value.is_finite() || value < 0.0 {
                        return Err(ValidationError::BadMagnitude {
                            element: "mesh",
                            attribute,
                            value,
                            requirement: "non-negative",
                        });
                    }
                }
                Ok(())
            }
            MeshBuiltin::Torus {
                resolution,
                radius,
                s,
                t,
            } => {
                range_i("resolution", resolution, 3, i32::MAX)?;
                if !(radius > 0.0 && radius <= 1.0) {
                    return Err(ValidationError::OutOfRange {
                        element: "mesh",
                        attribute: "radius",
                        value: radius,
                        min: 0.0,
                        max: 1.0,
                    });
                }
                positive("s", s)?;
                positive("t", t)
            }
            MeshBuiltin::Wedge {
                res_phi,
                res_theta,
                fov_phi,
                fov_theta,
                gamma,
            } => {
                range_i("res_phi", res_phi, 0, i32::MAX)?;
                range_i("res_theta", res_theta, 0, i32::MAX)?;
                if !(fov_phi > 0.0 && fov_phi <= 180.0) {
                    return Err(ValidationError::OutOfRange {
                        element: "mesh",
                        attribute: "fov_phi",
                        value: fov_phi,
                        min: 0.0,
                        max: 180.0,
                    });
                }
                if !(fov_theta > 0.0 && fov_theta < 90.0) {
                    return Err(ValidationError::OutOfRange {
                        element: "mesh",
                        attribute: "fov_theta",
                        value: fov_theta,
                        min: 0.0,
                        max: 90.0,
                    });
                }
                if !(0.0..=1.0).contains(&gamma) {
                    return Err(ValidationError::OutOfRange {
                        element: "mesh",
                        attribute: "gamma",
                        value: gamma,
                        min: 0.0,
                        max: 1.0,
                    });
                }
                Ok(())
            }
            MeshBuiltin::Plate { res_x, res_y } => {
                range_i("res_x", res_x, 1, i32::MAX)?;
                range_i("res_y", res_y, 1, i32::MAX)
            }
        }
    }
}

/// A triangulated mesh asset, loaded from a file, given inline as vertex
/// and face data, or generated procedurally via `builtin`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Name of the mesh, used by referencing geoms; defaults to the file
    /// name without extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Defaults class for setting unspecified attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// MIME type of the file, when the extension is not decisive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Mesh file (STL, OBJ or MSH).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Vertex positions as a flat x y z list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex: Option<VecN>,

    /// Vertex normals as a flat x y z list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<VecN>,

    /// Texture coordinates as a flat u v list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texcoord: Option<VecN>,

    /// Triangle faces as a flat list of vertex indices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<Vec<i32>>,

    /// Translation applied to the vertex data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refpos: Option<Vec3>,

    /// Rotation applied to the vertex data, as a (w, x, y, z) quaternion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refquat: Option<Vec4>,

    /// Per-axis scaling of the vertex data; negative values flip the
    /// mesh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,

    /// Force smooth shading across sharp edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothnormal: Option<bool>,

    /// Maximum vertices of the convex hull; -1 keeps all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxhullvert: Option<i32>,

    /// How volume and inertia are computed from the mesh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inertia: Option<MeshInertia>,

    /// Material applied when the referencing geom has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Procedural generation kind and parameters; when present, file
    /// references are ignored.
    #[serde(flatten)]
    pub builtin: Option<MeshBuiltin>,
}

impl ToElement for Mesh {
    fn tag(&self) -> &'static str {
        "mesh"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("class", self.class.as_ref())?;
        el.attr_opt("content_type", self.content_type.as_ref())?;
        el.attr_opt("file", self.file.as_ref())?;
        el.attr_opt("vertex", self.vertex.as_ref())?;
        el.attr_opt("normal", self.normal.as_ref())?;
        el.attr_opt("texcoord", self.texcoord.as_ref())?;
        el.attr_opt("face", self.face.as_ref())?;
        el.attr_opt("refpos", self.refpos.as_ref())?;
        el.attr_opt("refquat", self.refquat.as_ref())?;
        el.attr_opt("scale", self.scale.as_ref())?;
        el.attr_opt("smoothnormal", self.smoothnormal.as_ref())?;
        el.attr_opt("maxhullvert", self.maxhullvert.as_ref())?;
        el.attr_opt("inertia", self.inertia.as_ref())?;
        el.attr_opt("material", self.material.as_ref())?;
        if let Some(builtin) = &self.builtin {
            builtin.build(el)?;
        }
        Ok(())
    }
}

impl Validate for Mesh {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(vertex) = &self.vertex {
            if vertex.len() % 3 != 0 {
                return Err(ValidationError::BadLength {
                    element: "mesh",
                    attribute: "vertex",
                    expected: "a multiple of 3",
                    got: vertex.len(),
                });
            }
        }
        if let Some(face) = &self.face {
            if face.len() % 3 != 0 {
                return Err(ValidationError::BadLength {
                    element: "mesh",
                    attribute: "face",
                    expected: "a multiple of 3",
                    got: face.len(),
                });
            }
        }
        if let Some(builtin) = &self.builtin {
            builtin.validate()?;
        }
        Ok(())
    }
}

/// A height field asset. Elevation data comes from a PNG or custom
/// binary file, inline `elevation` data, or is left for runtime when only
/// `nrow`/`ncol` are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HField {
    /// Name of the height field, used by referencing geoms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MIME type of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Elevation data file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Rows of the elevation grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nrow: Option<i32>,

    /// Columns of the elevation grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncol: Option<i32>,

    /// Inline elevation data, row-major. The compiler normalizes
    /// elevation to [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<VecN>,

    /// Spatial extent: X half-size, Y half-size, elevation scale, depth
    /// of the base below zero.
    pub size: Vec4,
}

impl ToElement for HField {
    fn tag(&self) -> &'static str {
        "hfield"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("name", self.name.as_ref())?;
        el.attr_opt("content_type", self.content_type.as_ref())?;
        el.attr_opt("file", self.file.as_ref())?;
        el.attr_opt("nrow", self.nrow.as_ref())?;
        el.attr_opt("ncol", self.ncol.as_ref())?;
        el.attr_opt("elevation", self.elevation.as_ref())?;
        el.attr("size", &self.size)
    }
}

impl Validate for HField {
    fn validate(&self) -> Result<(), ValidationError> {
        for (attribute, value) in [("nrow", self.nrow), ("ncol", self.ncol)] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(ValidationError::BadMagnitude {
                        element: "hfield",
                        attribute,
                        value: f64::from(v),
                        requirement: "non-negative",
                    });
                }
            }
        }
        if let (Some(elevation), Some(nrow), Some(ncol)) = (&self.elevation, self.nrow, self.ncol)
        {
            let expected = (nrow as usize) * (ncol as usize);
            if elevation.len() != expected {
                return Err(ValidationError::BadLength {
                    element: "hfield",
                    attribute: "elevation",
                    expected: "nrow * ncol",
                    got: elevation.len(),
                });
            }
        }
        Ok(())
    }
}

/// A material asset controlling the appearance of geoms, sites and
/// tendons that reference it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Name of the material; required since materials exist to be
    /// referenced.
    #[serde(default)]
    pub name: String,

    /// Defaults class for setting unspecified attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Texture applied to the material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,

    /// Texture repetition for 2d textures, in object or spatial units
    /// per `texuniform`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texrepeat: Option<Vec2>,

    /// Repeat the texture in spatial units rather than per object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texuniform: Option<bool>,

    /// Emission, multiplying the rgba color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emission: Option<f64>,

    /// Specular reflection weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular: Option<f64>,

    /// Shininess exponent weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shininess: Option<f64>,

    /// Reflectance of planes and box +Z faces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflectance: Option<f64>,

    /// Metallic parameter for physically based rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metallic: Option<f64>,

    /// Roughness parameter for physically based rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,

    /// Color and transparency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba: Option<Vec4>,
}

impl ToElement for Material {
    fn tag(&self) -> &'static str {
        "material"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr("name", &self.name)?;
        el.attr_opt("class", self.class.as_ref())?;
        el.attr_opt("texture", self.texture.as_ref())?;
        el.attr_opt("texrepeat", self.texrepeat.as_ref())?;
        el.attr_opt("texuniform", self.texuniform.as_ref())?;
        el.attr_opt("emission", self.emission.as_ref())?;
        el.attr_opt("specular", self.specular.as_ref())?;
        el.attr_opt("shininess", self.shininess.as_ref())?;
        el.attr_opt("reflectance", self.reflectance.as_ref())?;
        el.attr_opt("metallic", self.metallic.as_ref())?;
        el.attr_opt("roughness", self.roughness.as_ref())?;
        el.attr_opt("rgba", self.rgba.as_ref())
    }
}

impl Validate for Material {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Missing {
                element: "material",
                attribute: "name",
                reason: "materials exist to be referenced by name",
            });
        }
        Ok(())
    }
}
