//! The size element: structural sizes that cannot be inferred from the
//! model.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationError};

/// Size parameters that cannot be inferred from the number of elements in
/// the model. Unlike simulation options these are structural and must not
/// change after compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Arena memory for dynamic arrays, in bytes; accepts K/M/G/T/P/E
    /// suffixes ("16M"). "-1" lets the compiler guess.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,

    /// Size of the custom user-data array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuserdata: Option<i32>,

    /// Number of key frames allocated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nkey: Option<i32>,

    /// Custom user parameters per body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_body: Option<i32>,

    /// Custom user parameters per joint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_jnt: Option<i32>,

    /// Custom user parameters per geom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_geom: Option<i32>,

    /// Custom user parameters per site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_site: Option<i32>,

    /// Custom user parameters per camera.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_cam: Option<i32>,

    /// Custom user parameters per tendon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_tendon: Option<i32>,

    /// Custom user parameters per actuator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_actuator: Option<i32>,

    /// Custom user parameters per sensor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuser_sensor: Option<i32>,
}

impl ToElement for Size {
    fn tag(&self) -> &'static str {
        "size"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("memory", self.memory.as_ref())?;
        el.attr_opt("nuserdata", self.nuserdata.as_ref())?;
        el.attr_opt("nkey", self.nkey.as_ref())?;
        el.attr_opt("nuser_body", self.nuser_body.as_ref())?;
        el.attr_opt("nuser_jnt", self.nuser_jnt.as_ref())?;
        el.attr_opt("nuser_geom", self.nuser_geom.as_ref())?;
        el.attr_opt("nuser_site", self.nuser_site.as_ref())?;
        el.attr_opt("nuser_cam", self.nuser_cam.as_ref())?;
        el.attr_opt("nuser_tendon", self.nuser_tendon.as_ref())?;
        el.attr_opt("nuser_actuator", self.nuser_actuator.as_ref())?;
        el.attr_opt("nuser_sensor", self.nuser_sensor.as_ref())
    }
}

impl Validate for Size {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
