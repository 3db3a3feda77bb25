//! The unique top-level element of an MJCF model file.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::body::WorldBody;
use crate::compiler::Compiler;
use crate::option::MjOption;
use crate::size::Size;
use crate::statistic::Statistic;
use crate::validate::{Validate, ValidationError};

fn default_model_name() -> String {
    "MuJoCo Model".to_string()
}

/// The top-level element identifying an XML file as an MJCF model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mujoco {
    /// Name of the model, shown in the simulator title bar.
    #[serde(default = "default_model_name")]
    pub model: String,

    /// Simulation options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<MjOption>,

    /// Parser and compiler options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compilers: Vec<Compiler>,

    /// Structural size parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<Size>,

    /// Model statistic overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statistics: Vec<Statistic>,

    /// Asset sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,

    /// The kinematic tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worldbody: Option<WorldBody>,
}

impl Default for Mujoco {
    fn default() -> Self {
        Self {
            model: default_model_name(),
            options: Vec::new(),
            compilers: Vec::new(),
            sizes: Vec::new(),
            statistics: Vec::new(),
            assets: Vec::new(),
            worldbody: None,
        }
    }
}

impl ToElement for Mujoco {
    fn tag(&self) -> &'static str {
        "mujoco"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr("model", &self.model)?;
        el.child_list(&self.options)?;
        el.child_list(&self.compilers)?;
        el.child_list(&self.sizes)?;
        el.child_list(&self.statistics)?;
        el.child_list(&self.assets)?;
        el.child_opt(self.worldbody.as_ref())
    }
}

impl Validate for Mujoco {
    fn validate(&self) -> Result<(), ValidationError> {
        for option in &self.options {
            option.validate()?;
        }
        for compiler in &self.compilers {
            compiler.validate()?;
        }
        for size in &self.sizes {
            size.validate()?;
        }
        for statistic in &self.statistics {
            statistic.validate()?;
        }
        for asset in &self.assets {
            asset.validate()?;
        }
        if let Some(worldbody) = &self.worldbody {
            worldbody.validate()?;
        }
        Ok(())
    }
}
