//! Shared field types: fixed-length vectors and MJCF keyword enums.
//!
//! Keyword enums render as their MJCF spelling (never their Rust variant
//! name), both as XML attribute values and as JSON strings.

/// A 2-element numeric vector.
pub type Vec2 = [f64; 2];

/// A 3-element numeric vector, typically a position or direction.
pub type Vec3 = [f64; 3];

/// A 4-element numeric vector, typically an RGBA color or a quaternion.
pub type Vec4 = [f64; 4];

/// A 5-element numeric vector.
pub type Vec5 = [f64; 5];

/// A 6-element numeric vector.
pub type Vec6 = [f64; 6];

/// A numeric vector of arbitrary length.
pub type VecN = Vec<f64>;

macro_rules! keywords {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $kw:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $kw)]
                $variant,
            )+
        }

        impl $name {
            /// The MJCF keyword for this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $kw,)+
                }
            }
        }

        impl mjcf_serde_support::AttrValue for $name {
            fn attr_string(&self) -> String {
                self.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keywords! {
    /// Numerical integrators for the simulation pipeline.
    pub enum Integrator {
        /// Semi-implicit Euler with implicit joint damping.
        Euler = "Euler",
        /// Fixed-step 4th-order Runge-Kutta.
        Rk4 = "RK4",
        /// Implicit-in-velocity Euler.
        Implicit = "implicit",
        /// Implicit-in-velocity without RNE derivatives; faster, symmetric.
        ImplicitFast = "implicitfast",
    }
}

keywords! {
    /// Contact friction cone type.
    pub enum Cone {
        /// Pyramidal approximation; sometimes faster and more robust.
        Pyramidal = "pyramidal",
        /// Elliptic cone; closer to physical reality.
        Elliptic = "elliptic",
    }
}

keywords! {
    /// Constraint Jacobian representation.
    pub enum Jacobian {
        Dense = "dense",
        Sparse = "sparse",
        /// Dense up to 60 degrees of freedom, sparse above.
        Auto = "auto",
    }
}

keywords! {
    /// Constraint solver algorithms.
    pub enum Solver {
        /// Projected Gauss-Seidel.
        Pgs = "PGS",
        /// Nonlinear conjugate gradient with Polak-Ribiere-Plus.
        Cg = "CG",
        /// Exact Newton with analytical Hessian; the default.
        Newton = "Newton",
    }
}

keywords! {
    /// Enable or disable one part of the simulation pipeline.
    pub enum EnableDisable {
        Enable = "enable",
        Disable = "disable",
    }
}

keywords! {
    /// Frame coordinate convention. The `global` option has been removed
    /// from MuJoCo and is rejected by its compiler; it is kept here so
    /// older models can still be represented.
    pub enum Coordinate {
        Local = "local",
        Global = "global",
    }
}

keywords! {
    /// Units for angles appearing in the model.
    pub enum Angle {
        Radian = "radian",
        Degree = "degree",
    }
}

keywords! {
    /// Controls automatic inference of body masses and inertias from the
    /// geoms attached to each body.
    pub enum InertiaFromGeom {
        /// Never infer; every body needs an explicit inertial element.
        False = "false",
        /// Always infer, overriding explicit inertial elements.
        True = "true",
        /// Infer only for bodies without an inertial element.
        Auto = "auto",
    }
}

keywords! {
    /// Which actuators length-range computation applies to.
    pub enum LengthRangeMode {
        None = "none",
        Muscle = "muscle",
        MuscleUser = "muscleuser",
        All = "all",
    }
}

keywords! {
    /// How mesh volume and inertia are computed when body inertia is
    /// inferred from geometry.
    pub enum MeshInertia {
        /// Convex hull, uniform density.
        Convex = "convex",
        /// Exact computation; requires a watertight, well-oriented mesh.
        Exact = "exact",
        /// Legacy algorithm; overcounts volume for non-convex meshes.
        Legacy = "legacy",
        /// Mass concentrated on the surface.
        Shell = "shell",
    }
}

keywords! {
    /// Joint kinds.
    pub enum JointType {
        /// Three translational plus three rotational degrees of freedom;
        /// makes the body floating. Only allowed in children of the world
        /// body, and cannot have limits.
        Free = "free",
        /// Three rotational degrees of freedom around a point.
        Ball = "ball",
        /// One translational degree of freedom along an axis.
        Slide = "slide",
        /// One rotational degree of freedom around an axis; the default
        /// and most common joint.
        Hinge = "hinge",
    }
}

keywords! {
    /// Whether a joint (or tendon) has limits.
    pub enum Limited {
        False = "false",
        True = "true",
        /// Limits are enabled when a range is defined and the compiler's
        /// `autolimits` is set.
        Auto = "auto",
    }
}

keywords! {
    /// Whether actuator forces acting on a joint are clamped.
    pub enum ActuatorFrcLimited {
        False = "false",
        True = "true",
        Auto = "auto",
    }
}

keywords! {
    /// Alignment of body frame and free joint with the inertial frame.
    pub enum Align {
        False = "false",
        True = "true",
        /// Respect the compiler's global `alignfree` attribute.
        Auto = "auto",
    }
}

keywords! {
    /// Geom-level fluid interaction model.
    pub enum FluidShape {
        None = "none",
        /// Ellipsoidal approximation of the geom shape; disables the
        /// body-inertia-based model for the containing body.
        Ellipsoid = "ellipsoid",
    }
}

keywords! {
    /// How camera/light position and orientation are computed in forward
    /// kinematics.
    pub enum TrackingMode {
        /// Fixed relative to the body where the camera/light is defined.
        Fixed = "fixed",
        /// Constant world-frame offset from the body; constant world
        /// orientation.
        Track = "track",
        /// Like `track`, but offset from the subtree center of mass.
        TrackCom = "trackcom",
        /// Position fixed in the body frame, orientation pointed at the
        /// target body.
        TargetBody = "targetbody",
        /// Like `targetbody`, oriented at the target subtree's center of
        /// mass.
        TargetBodyCom = "targetbodycom",
    }
}

keywords! {
    /// Light kinds. Only spot and directional lights are supported by the
    /// default native renderer.
    pub enum LightType {
        Spot = "spot",
        Directional = "directional",
        Point = "point",
        Image = "image",
    }
}

keywords! {
    /// Sleep policy for the kinematic tree rooted at a body.
    pub enum Sleep {
        /// The compiler chooses based on actuation and tendon coupling.
        Auto = "auto",
        Never = "never",
        Allowed = "allowed",
        /// Initialize the tree asleep; only meaningful for the default
        /// configuration.
        Init = "init",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mjcf_serde_support::AttrValue;

    #[test]
    fn test_keywords_render_mjcf_spelling() {
        assert_eq!(Integrator::Rk4.as_str(), "RK4");
        assert_eq!(Solver::Pgs.as_str(), "PGS");
        assert_eq!(TrackingMode::TargetBodyCom.as_str(), "targetbodycom");
        assert_eq!(Limited::Auto.attr_string(), "auto");
    }

    #[test]
    fn test_keywords_serialize_as_spelling_not_variant_name() {
        let json = serde_json::to_string(&Integrator::ImplicitFast).unwrap();
        assert_eq!(json, "\"implicitfast\"");
        let back: Integrator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Integrator::ImplicitFast);
    }
}
