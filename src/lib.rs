//! planlib — parametric drawing library for bowed-lyre building plans.
//!
//! From two inputs — a scale length and a string count — the library
//! derives every structural dimension of a talharpa-family instrument body
//! and assembles three mutually consistent technical-drawing views: the
//! front (soundboard) face, the side (depth) profile, and the internal
//! structural frame. Each view is an immutable scene of outlines, anchor
//! points, and dimension annotations that flattens to a canonical vector
//! primitive list; a built-in adapter renders that list to SVG.
//!
//! # Example
//! ```
//! use planlib::{compute_plan, PlanConfig};
//!
//! let cfg = PlanConfig {
//!     scale_length: 40.0,
//!     num_strings: 3,
//!     ..PlanConfig::default()
//! };
//! let plan = compute_plan(&cfg).unwrap();
//! assert_eq!(plan.dimensions.overall_length, 664.0);
//! println!("front view primitives: {}", plan.front.primitives().len());
//! ```

pub mod anchors;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod views;

use serde::Serialize;

pub use anchors::AnchorPoint;
pub use config::{Margins, PixelSize, PlanConfig};
pub use dimensions::{compute_dimensions, DimensionSet};
pub use error::PlanError;
pub use geometry::{build_rounded_outline, ClosedOutline, CornerSpec, PathSegment, Point};
pub use scene::{Annotation, Primitive, Scene, Shape};
pub use views::{frame_view, front_view, scene_to_svg, side_view};

/// A complete plan: one dimension set and the three views derived from it.
///
/// All three scenes share the single `DimensionSet` instance computed for
/// the request; recomputation replaces the whole plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub dimensions: DimensionSet,
    pub front: Scene,
    pub side: Scene,
    pub frame: Scene,
}

/// The three views of a plan rendered to SVG strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSvg {
    pub front: String,
    pub side: String,
    pub frame: String,
}

/// Derive the dimensions once and assemble all three views from them.
///
/// Fails before any assembly when the inputs fall outside the supported
/// domain (scale 26..=70 cm, at least one string).
pub fn compute_plan(cfg: &PlanConfig) -> Result<Plan, PlanError> {
    let dimensions = compute_dimensions(cfg.scale_length, cfg.num_strings)?;
    log::debug!(
        "derived plan for {} cm scale, {} strings: overall {:.1} mm, body {:.1} x {:.1} mm",
        cfg.scale_length,
        cfg.num_strings,
        dimensions.overall_length,
        dimensions.max_body_width(),
        dimensions.body_min_depth,
    );

    let front = views::front_view(&dimensions, cfg);
    let side = views::side_view(&dimensions, cfg);
    let frame = views::frame_view(&dimensions, cfg);

    Ok(Plan {
        dimensions,
        front,
        side,
        frame,
    })
}

/// Compute a plan and render each view to a self-contained SVG string.
pub fn render_plan_to_svg(cfg: &PlanConfig) -> Result<PlanSvg, PlanError> {
    let plan = compute_plan(cfg)?;
    Ok(PlanSvg {
        front: views::scene_to_svg(&plan.front, cfg),
        side: views::scene_to_svg(&plan.side, cfg),
        frame: views::scene_to_svg(&plan.frame, cfg),
    })
}

/// Convert a computed plan to a JSON string.
/// Useful for handing the scenes to an external renderer.
pub fn plan_to_json(plan: &Plan) -> Result<String, PlanError> {
    serde_json::to_string_pretty(plan).map_err(|e| PlanError::Serialize(e.to_string()))
}
