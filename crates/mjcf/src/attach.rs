//! The attach meta-element: grafting a sub-model into the kinematic tree.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationError};

/// Attaches a body subtree from another model at this point in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attach {
    /// Name of the sub-model to attach from.
    pub model: String,

    /// The body within the sub-model to attach; the sub-model's world
    /// body contents when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Prefix prepended to all named elements of the attached subtree to
    /// keep names unique.
    pub prefix: String,
}

impl ToElement for Attach {
    fn tag(&self) -> &'static str {
        "attach"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr("model", &self.model)?;
        el.attr_opt("body", self.body.as_ref())?;
        el.attr("prefix", &self.prefix)
    }
}

impl Validate for Attach {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
