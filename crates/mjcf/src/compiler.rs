//! The compiler element: parser and compiler options.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::types::{Angle, Coordinate, InertiaFromGeom, LengthRangeMode};
use crate::validate::{self, Validate, ValidationError};

/// Options for the built-in parser and compiler. These settings are
/// global, apply to the entire model, and have no effect after
/// compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compiler {
    /// Infer `limited`-style attributes from the presence of their
    /// corresponding range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autolimits: Option<bool>,

    /// Lower bound on the mass of each body except the world body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundmass: Option<f64>,

    /// Lower bound on the diagonal inertia components of each body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundinertia: Option<f64>,

    /// When positive, scale all masses and inertias so the total mass
    /// equals this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settotalmass: Option<f64>,

    /// Silently repair diagonal inertias violating A+B>=C instead of
    /// erroring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balanceinertia: Option<bool>,

    /// Remove path information from file names in the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strippath: Option<bool>,

    /// Frame coordinate convention; `global` is rejected by modern
    /// MuJoCo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,

    /// Units for angles in the model; the compiled model always uses
    /// radians.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<Angle>,

    /// Fit primitives to the axis-aligned bounding box of a mesh instead
    /// of its equivalent-inertia box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitaabb: Option<bool>,

    /// Euler rotation sequence for all `euler` attributes: three
    /// characters from {x, y, z, X, Y, Z}; lowercase rotates with the
    /// frame, uppercase stays fixed in the parent frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eulerseq: Option<String>,

    /// Directory for mesh and height field files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meshdir: Option<String>,

    /// Directory for texture files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texturedir: Option<String>,

    /// Discard purely visual model elements at compile time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discardvisual: Option<bool>,

    /// Run the model compiler multi-threaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usethread: Option<bool>,

    /// Fuse static bodies with their parents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fusestatic: Option<bool>,

    /// Automatic inference of body masses and inertias from geoms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inertiafromgeom: Option<InertiaFromGeom>,

    /// Inclusive range of geom groups used for inertia inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inertiagrouprange: Option<[i32; 2]>,

    /// Save explicit inertial clauses for all bodies when writing the
    /// compiled model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saveinertial: Option<bool>,

    /// Sets both `meshdir` and `texturedir`; the specific attributes take
    /// precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assetdir: Option<String>,

    /// Default for the free-joint alignment optimization on simple free
    /// bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignfree: Option<bool>,

    /// Controls computation of actuator length ranges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lengthrange: Option<LengthRange>,
}

impl ToElement for Compiler {
    fn tag(&self) -> &'static str {
        "compiler"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("autolimits", self.autolimits.as_ref())?;
        el.attr_opt("boundmass", self.boundmass.as_ref())?;
        el.attr_opt("boundinertia", self.boundinertia.as_ref())?;
        el.attr_opt("settotalmass", self.settotalmass.as_ref())?;
        el.attr_opt("balanceinertia", self.balanceinertia.as_ref())?;
        el.attr_opt("strippath", self.strippath.as_ref())?;
        el.attr_opt("coordinate", self.coordinate.as_ref())?;
        el.attr_opt("angle", self.angle.as_ref())?;
        el.attr_opt("fitaabb", self.fitaabb.as_ref())?;
        el.attr_opt("eulerseq", self.eulerseq.as_ref())?;
        el.attr_opt("meshdir", self.meshdir.as_ref())?;
        el.attr_opt("texturedir", self.texturedir.as_ref())?;
        el.attr_opt("discardvisual", self.discardvisual.as_ref())?;
        el.attr_opt("usethread", self.usethread.as_ref())?;
        el.attr_opt("fusestatic", self.fusestatic.as_ref())?;
        el.attr_opt("inertiafromgeom", self.inertiafromgeom.as_ref())?;
        el.attr_opt("inertiagrouprange", self.inertiagrouprange.as_ref())?;
        el.attr_opt("saveinertial", self.saveinertial.as_ref())?;
        el.attr_opt("assetdir", self.assetdir.as_ref())?;
        el.attr_opt("alignfree", self.alignfree.as_ref())?;
        el.child_opt(self.lengthrange.as_ref())
    }
}

impl Validate for Compiler {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(seq) = &self.eulerseq {
            validate::check_eulerseq(seq)?;
        }
        if let Some([lo, hi]) = self.inertiagrouprange {
            validate::in_range("compiler", "inertiagrouprange", Some(lo), 0, 30)?;
            validate::in_range("compiler", "inertiagrouprange", Some(hi), 0, 30)?;
            if lo > hi {
                return Err(ValidationError::OutOfRange {
                    element: "compiler",
                    attribute: "inertiagrouprange",
                    value: f64::from(lo),
                    min: 0.0,
                    max: f64::from(hi),
                });
            }
        }
        if let Some(lengthrange) = &self.lengthrange {
            lengthrange.validate()?;
        }
        Ok(())
    }
}

/// Controls the computation of actuator length ranges. Omitting the
/// element keeps the defaults; including it with `mode="none"` disables
/// the computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthRange {
    /// Which actuators the computation applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<LengthRangeMode>,

    /// Keep length ranges already defined in the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useexisting: Option<bool>,

    /// Copy joint/tendon limits into the actuator length range when
    /// available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uselimit: Option<bool>,

    /// Norm of the joint-space acceleration used to push actuators to
    /// their limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accel: Option<f64>,

    /// Upper bound on the applied force norm; 0 disables the safeguard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxforce: Option<f64>,

    /// Time constant of the artificial velocity decay, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeconst: Option<f64>,

    /// Timestep of the internal simulation; 0 uses the model timestep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestep: Option<f64>,

    /// Total simulated time per actuator and direction, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inttotal: Option<f64>,

    /// Interval at the end of the simulation over which lengths are
    /// collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,

    /// Divergence threshold generating a compile error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolrange: Option<f64>,
}

impl ToElement for LengthRange {
    fn tag(&self) -> &'static str {
        "lengthrange"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("mode", self.mode.as_ref())?;
        el.attr_opt("useexisting", self.useexisting.as_ref())?;
        el.attr_opt("uselimit", self.uselimit.as_ref())?;
        el.attr_opt("accel", self.accel.as_ref())?;
        el.attr_opt("maxforce", self.maxforce.as_ref())?;
        el.attr_opt("timeconst", self.timeconst.as_ref())?;
        el.attr_opt("timestep", self.timestep.as_ref())?;
        el.attr_opt("inttotal", self.inttotal.as_ref())?;
        el.attr_opt("interval", self.interval.as_ref())?;
        el.attr_opt("tolrange", self.tolrange.as_ref())
    }
}

impl Validate for LengthRange {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
