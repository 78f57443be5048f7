//! View assembly — composes dimensions, anchors, outlines, and annotations
//! into one immutable `Scene` per view.
//!
//! The three assemblers are stateless functions over a shared
//! `DimensionSet`; none of them re-derives a value from the raw inputs, so
//! the views cannot drift apart. Each runs to completion in one pass and
//! returns a fresh scene.

mod annotate;
mod constants;
mod frame;
mod front;
mod side;
mod svg_builder;

use crate::config::PlanConfig;
use crate::dimensions::DimensionSet;
use crate::geometry::{CornerSpec, Point};
use crate::scene::Scene;

use constants::*;

/// Assemble the front (soundboard) view.
pub fn front_view(dims: &DimensionSet, cfg: &PlanConfig) -> Scene {
    front::assemble(dims, cfg)
}

/// Assemble the side (depth profile) view.
pub fn side_view(dims: &DimensionSet, cfg: &PlanConfig) -> Scene {
    side::assemble(dims, cfg)
}

/// Assemble the internal frame view.
pub fn frame_view(dims: &DimensionSet, cfg: &PlanConfig) -> Scene {
    frame::assemble(dims, cfg)
}

/// Render an assembled scene to a self-contained SVG string.
pub fn scene_to_svg(scene: &Scene, cfg: &PlanConfig) -> String {
    svg_builder::scene_to_svg(scene, cfg)
}

// ═══════════════════════════════════════════════════════════════════════
// Shared geometry helpers
// ═══════════════════════════════════════════════════════════════════════

/// Body centerline x, common to the front and frame views.
pub(super) fn body_center_x(dims: &DimensionSet, margin: f64) -> f64 {
    margin + dims.max_body_width() / 2.0
}

/// Corner list of the body trapezoid (headstock width at the top, minimum
/// body width at the bottom), wound clockwise.
pub(super) fn body_corners(dims: &DimensionSet, margin: f64) -> Vec<CornerSpec> {
    let cx = body_center_x(dims, margin);
    let top_y = margin;
    let bottom_y = margin + dims.overall_length;
    let half_top = dims.headstock_width / 2.0;
    let half_bottom = dims.body_min_width / 2.0;
    vec![
        CornerSpec::new(Point::new(cx - half_top, top_y), BODY_CORNER_RADIUS_TOP, true),
        CornerSpec::new(Point::new(cx + half_top, top_y), BODY_CORNER_RADIUS_TOP, true),
        CornerSpec::new(
            Point::new(cx + half_bottom, bottom_y),
            BODY_CORNER_RADIUS_BOTTOM,
            true,
        ),
        CornerSpec::new(
            Point::new(cx - half_bottom, bottom_y),
            BODY_CORNER_RADIUS_BOTTOM,
            true,
        ),
    ]
}

/// x-coordinate of the body's slanted side edge at length position `y`
/// (absolute, margin included). `right` picks the right edge.
pub(super) fn body_edge_x(dims: &DimensionSet, margin: f64, y: f64, right: bool) -> f64 {
    let cx = body_center_x(dims, margin);
    let t = (y - margin) / dims.overall_length;
    let half = dims.headstock_width / 2.0
        + t * (dims.body_min_width - dims.headstock_width) / 2.0;
    if right {
        cx + half
    } else {
        cx - half
    }
}
