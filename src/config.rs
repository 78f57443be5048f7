//! Plan request configuration.
//!
//! A `PlanConfig` carries everything one drawing request needs: the two
//! structural inputs (scale length, string count) plus presentation
//! parameters (margins, output pixel size, string color). Every field has a
//! default so partial JSON deserializes cleanly; validation happens exactly
//! once, at the dimension-derivation boundary, and is never repeated
//! downstream.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Margins applied to every view, in millimetres.
///
/// The effective origin offset of a view is `drawing + extra`; it is the
/// same for the front, side, and frame views of one request so the views
/// can be overlaid without drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub drawing: f64,
    pub extra: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            drawing: 15.0,
            extra: 5.0,
        }
    }
}

impl Margins {
    /// Combined origin offset in millimetres.
    pub fn offset(&self) -> f64 {
        self.drawing + self.extra
    }
}

/// Output size of a rendered view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PixelSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 1100,
        }
    }
}

/// One drawing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Peg-to-bridge string length in centimetres. Valid range is 26..=70.
    pub scale_length: f64,
    /// Number of strings. The tuning calculator that recommends feasible
    /// tunings lives outside this crate; only the count crosses the boundary.
    pub num_strings: u32,
    pub margins: Margins,
    pub pixel_size: PixelSize,
    /// Stroke color for the string lines in the front view.
    pub string_color: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            scale_length: 40.0,
            num_strings: 3,
            margins: Margins::default(),
            pixel_size: PixelSize::default(),
            string_color: "#b08d46".to_string(),
        }
    }
}

impl PlanConfig {
    /// Check the structural inputs. Shares the single validation point with
    /// `compute_dimensions`; nothing downstream re-checks them.
    pub fn validate(&self) -> Result<(), PlanError> {
        crate::dimensions::validate_inputs(self.scale_length, self.num_strings)
    }
}
