//! The option element: simulation options copied into the compiled
//! model.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::types::{Cone, EnableDisable, Integrator, Jacobian, Solver, Vec3, Vec5};
use crate::validate::{self, Validate, ValidationError};

/// Simulation options, in one-to-one correspondence with the low level
/// `mjOption` struct. These do not affect compilation; they are copied
/// into the compiled model and can also be changed at runtime.
///
/// Named `MjOption` rather than `Option` to stay clear of
/// [`std::option::Option`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MjOption {
    /// Simulation timestep in seconds; the main speed-accuracy knob.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestep: Option<f64>,

    /// Ratio of frictional-to-normal constraint impedance for elliptic
    /// cones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impratio: Option<f64>,

    /// Early-termination tolerance of the iterative solver; 0 disables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,

    /// Early-termination tolerance of the linesearch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ls_tolerance: Option<f64>,

    /// Early-termination tolerance of the Noslip solver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noslip_tolerance: Option<f64>,

    /// Early-termination tolerance of the convex collision algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccd_tolerance: Option<f64>,

    /// Velocity tolerance below which sleeping is allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_tolerance: Option<f64>,

    /// Gravitational acceleration vector; Z points up by convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<Vec3>,

    /// Velocity of the medium, subtracted from body velocities for
    /// viscous, lift and drag forces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Vec3>,

    /// Global magnetic flux, used by magnetometer sensors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnetic: Option<Vec3>,

    /// Density of the medium for lift and drag; 0 disables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,

    /// Viscosity of the medium; 0 disables viscous forces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viscosity: Option<f64>,

    /// Contact-override margin, when the override flag is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_margin: Option<f64>,

    /// Contact-override solver reference parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_solref: Option<[f64; 2]>,

    /// Contact-override solver impedance parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_solimp: Option<Vec5>,

    /// Contact-override friction parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_friction: Option<Vec5>,

    /// Numerical integrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrator: Option<Integrator>,

    /// Contact friction cone type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cone: Option<Cone>,

    /// Constraint Jacobian representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jacobian: Option<Jacobian>,

    /// Constraint solver algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<Solver>,

    /// Maximum iterations of the constraint solver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<i32>,

    /// Maximum linesearch iterations of the CG/Newton solvers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ls_iterations: Option<i32>,

    /// Maximum iterations of the Noslip post-processing solver; 0
    /// disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noslip_iterations: Option<i32>,

    /// Maximum iterations of the convex collision algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccd_iterations: Option<i32>,

    /// Iterations per initial point for SDF collisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdf_iterations: Option<i32>,

    /// Starting points for finding SDF contacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdf_initpoints: Option<i32>,

    /// Actuator groups to disable; each group index must be in [0, 30].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actuatorgroupdisable: Option<Vec<i32>>,

    /// Flags enabling and disabling parts of the simulation pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<Flag>,
}

impl ToElement for MjOption {
    fn tag(&self) -> &'static str {
        "option"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("timestep", self.timestep.as_ref())?;
        el.attr_opt("impratio", self.impratio.as_ref())?;
        el.attr_opt("tolerance", self.tolerance.as_ref())?;
        el.attr_opt("ls_tolerance", self.ls_tolerance.as_ref())?;
        el.attr_opt("noslip_tolerance", self.noslip_tolerance.as_ref())?;
        el.attr_opt("ccd_tolerance", self.ccd_tolerance.as_ref())?;
        el.attr_opt("sleep_tolerance", self.sleep_tolerance.as_ref())?;
        el.attr_opt("gravity", self.gravity.as_ref())?;
        el.attr_opt("wind", self.wind.as_ref())?;
        el.attr_opt("magnetic", self.magnetic.as_ref())?;
        el.attr_opt("density", self.density.as_ref())?;
        el.attr_opt("viscosity", self.viscosity.as_ref())?;
        el.attr_opt("o_margin", self.o_margin.as_ref())?;
        el.attr_opt("o_solref", self.o_solref.as_ref())?;
        el.attr_opt("o_solimp", self.o_solimp.as_ref())?;
        el.attr_opt("o_friction", self.o_friction.as_ref())?;
        el.attr_opt("integrator", self.integrator.as_ref())?;
        el.attr_opt("cone", self.cone.as_ref())?;
        el.attr_opt("jacobian", self.jacobian.as_ref())?;
        el.attr_opt("solver", self.solver.as_ref())?;
        el.attr_opt("iterations", self.iterations.as_ref())?;
        el.attr_opt("ls_iterations", self.ls_iterations.as_ref())?;
        el.attr_opt("noslip_iterations", self.noslip_iterations.as_ref())?;
        el.attr_opt("ccd_iterations", self.ccd_iterations.as_ref())?;
        el.attr_opt("sdf_iterations", self.sdf_iterations.as_ref())?;
        el.attr_opt("sdf_initpoints", self.sdf_initpoints.as_ref())?;
        el.attr_opt("actuatorgroupdisable", self.actuatorgroupdisable.as_ref())?;
        el.child_opt(self.flag.as_ref())
    }
}

impl Validate for MjOption {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(timestep) = self.timestep {
            if !timestep.is_finite() || timestep <= 0.0 {
                return Err(ValidationError::BadMagnitude {
                    element: "option",
                    attribute: "timestep",
                    value: timestep,
                    requirement: "positive",
                });
            }
        }
        if let Some(groups) = &self.actuatorgroupdisable {
            for &group in groups {
                validate::in_range("option", "actuatorgroupdisable", Some(group), 0, 30)?;
            }
        }
        Ok(())
    }
}

/// Pipeline flags. At runtime these are the bits of two integers,
/// `disableflags` for standard features (default enable) and
/// `enableflags` for optional features (default disable); the XML does
/// not make that separation explicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    /// All constraint solver computations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<EnableDisable>,

    /// Equality constraint computations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equality: Option<EnableDisable>,

    /// Friction loss constraint computations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frictionloss: Option<EnableDisable>,

    /// Joint and tendon limit constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<EnableDisable>,

    /// Collision detection and contact constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<EnableDisable>,

    /// Passive joint and tendon springs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<EnableDisable>,

    /// Passive joint and tendon dampers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<EnableDisable>,

    /// Replace gravity with (0 0 0) at runtime without changing the
    /// stored option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<EnableDisable>,

    /// Clamping of control inputs to all actuators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clampctrl: Option<EnableDisable>,

    /// Warm-starting of the constraint solver from the previous step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmstart: Option<EnableDisable>,

    /// Filtering of contact pairs between parent and child bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterparent: Option<EnableDisable>,

    /// Actuator forces and dynamics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actuation: Option<EnableDisable>,

    /// Safety clamp of solref[0] against the timestep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refsafe: Option<EnableDisable>,

    /// Sensor computations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<EnableDisable>,

    /// Mid-phase collision filtering via a bounding volume hierarchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midphase: Option<EnableDisable>,

    /// Implicit joint damping in the Euler integrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eulerdamp: Option<EnableDisable>,

    /// Automatic reset when numerical issues are detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoreset: Option<EnableDisable>,

    /// Native convex collision pipeline instead of libccd.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nativeccd: Option<EnableDisable>,

    /// Constraint island discovery; optional feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub island: Option<EnableDisable>,

    /// Contact override mechanism; optional feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#override: Option<EnableDisable>,

    /// Energy computation; optional feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnableDisable>,

    /// Forward/inverse dynamics comparison; optional feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fwdinv: Option<EnableDisable>,

    /// Discrete-time modified inverse dynamics; optional feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invdiscrete: Option<EnableDisable>,

    /// Multiple-contact convex collision detection; optional feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiccd: Option<EnableDisable>,

    /// Sleeping of quiescent kinematic trees; optional feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<EnableDisable>,
}

impl ToElement for Flag {
    fn tag(&self) -> &'static str {
        "flag"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("constraint", self.constraint.as_ref())?;
        el.attr_opt("equality", self.equality.as_ref())?;
        el.attr_opt("frictionloss", self.frictionloss.as_ref())?;
        el.attr_opt("limit", self.limit.as_ref())?;
        el.attr_opt("contact", self.contact.as_ref())?;
        el.attr_opt("spring", self.spring.as_ref())?;
        el.attr_opt("damping", self.damping.as_ref())?;
        el.attr_opt("gravity", self.gravity.as_ref())?;
        el.attr_opt("clampctrl", self.clampctrl.as_ref())?;
        el.attr_opt("warmstart", self.warmstart.as_ref())?;
        el.attr_opt("filterparent", self.filterparent.as_ref())?;
        el.attr_opt("actuation", self.actuation.as_ref())?;
        el.attr_opt("refsafe", self.refsafe.as_ref())?;
        el.attr_opt("sensor", self.sensor.as_ref())?;
        el.attr_opt("midphase", self.midphase.as_ref())?;
        el.attr_opt("eulerdamp", self.eulerdamp.as_ref())?;
        el.attr_opt("autoreset", self.autoreset.as_ref())?;
        el.attr_opt("nativeccd", self.nativeccd.as_ref())?;
        el.attr_opt("island", self.island.as_ref())?;
        el.attr_opt("override", self.r#override.as_ref())?;
        el.attr_opt("energy", self.energy.as_ref())?;
        el.attr_opt("fwdinv", self.fwdinv.as_ref())?;
        el.attr_opt("invdiscrete", self.invdiscrete.as_ref())?;
        el.attr_opt("multiccd", self.multiccd.as_ref())?;
        el.attr_opt("sleep", self.sleep.as_ref())
    }
}

impl Validate for Flag {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
