//! The position helper node.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::types::Vec3;
use crate::validate::{Validate, ValidationError};

/// A 3D position, flattened into the owning element as a `pos` attribute.
///
/// This is a virtual node: it has no tag of its own and never appears as a
/// separate XML element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    /// Position as (x, y, z).
    pub pos: Vec3,
}

impl Pos {
    /// Creates a position from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { pos: [x, y, z] }
    }
}

impl From<Vec3> for Pos {
    fn from(pos: Vec3) -> Self {
        Self { pos }
    }
}

impl ToElement for Pos {
    fn tag(&self) -> &'static str {
        ""
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr("pos", &self.pos)
    }
}

impl Validate for Pos {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
