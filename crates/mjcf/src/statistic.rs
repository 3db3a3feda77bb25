//! The statistic element: overrides for compiler-computed model
//! statistics.

use mjcf_serde_support::{ElementError, ToElement, XmlElement};
use serde::{Deserialize, Serialize};

use crate::types::Vec3;
use crate::validate::{Validate, ValidationError};

/// Overrides for model statistics computed by the compiler. The
/// statistics scale rendering and perturbation, so overriding a few of
/// them is often easier than adjusting many visual parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    /// Average diagonal element of the joint-space inertia matrix in the
    /// default configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaninertia: Option<f64>,

    /// Average body mass, not counting the world body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanmass: Option<f64>,

    /// Average body radius; acts as the length unit for visual scale
    /// attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meansize: Option<f64>,

    /// Half the side of the model bounding box; must be strictly
    /// positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<f64>,

    /// Center of the model bounding box; centers the free camera view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec3>,
}

impl ToElement for Statistic {
    fn tag(&self) -> &'static str {
        "statistic"
    }

    fn build(&self, el: &mut XmlElement) -> Result<(), ElementError> {
        el.attr_opt("meaninertia", self.meaninertia.as_ref())?;
        el.attr_opt("meanmass", self.meanmass.as_ref())?;
        el.attr_opt("meansize", self.meansize.as_ref())?;
        el.attr_opt("extent", self.extent.as_ref())?;
        el.attr_opt("center", self.center.as_ref())
    }
}

impl Validate for Statistic {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(extent) = self.extent {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(ValidationError::BadMagnitude {
                    element: "statistic",
                    attribute: "extent",
                    value: extent,
                    requirement: "positive",
                });
            }
        }
        Ok(())
    }
}
