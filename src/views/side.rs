//! Side view — depth profile with the neck blend joint, soundboard and
//! back panels, tail-block chamfer, and bridge.
//!
//! This is the one view with the asymmetric blend: where the thin neck
//! meets the full-depth body, the step is rounded by two arcs of radius
//! half the thickness difference. The concave arc carries the inverted
//! sweep flag; both arcs meet at the step midpoint, tangent to the
//! adjacent vertical edges.

use super::annotate::linear_dimension;
use super::constants::*;
use crate::anchors;
use crate::config::PlanConfig;
use crate::dimensions::DimensionSet;
use crate::geometry::{build_rounded_outline, CornerSpec, Point};
use crate::scene::{Scene, Shape};

pub(super) fn assemble(dims: &DimensionSet, cfg: &PlanConfig) -> Scene {
    let m = cfg.margins.offset();
    let depth = dims.body_min_depth;
    let neck = dims.neck_thickness;
    let length = dims.overall_length;
    let neck_y = m + dims.neck_start;
    let bottom_y = m + length;
    let blend_radius = (depth - neck) / 2.0;

    // ── Outline ─────────────────────────────────────────────────────
    // Soundboard face on the left (x = m), back stepping out from neck
    // thickness to full body depth at neck_start.
    let outline = build_rounded_outline(&[
        CornerSpec::new(Point::new(m, m), SIDE_END_CORNER_RADIUS, true),
        CornerSpec::new(Point::new(m + neck, m), SIDE_END_CORNER_RADIUS, true),
        // The designated blend joint: concave, inverted sweep.
        CornerSpec::new(Point::new(m + neck, neck_y), blend_radius, false),
        CornerSpec::new(Point::new(m + depth, neck_y), blend_radius, true),
        CornerSpec::new(Point::new(m + depth, bottom_y), BODY_CORNER_RADIUS_BOTTOM, true),
        CornerSpec::new(Point::new(m, bottom_y), BODY_CORNER_RADIUS_BOTTOM, true),
    ]);

    // Tail block with a chamfered back edge.
    let chamfer = build_rounded_outline(&[
        CornerSpec::new(Point::new(m + depth - CHAMFER_PANEL_WIDTH, bottom_y), 0.0, true),
        CornerSpec::new(
            Point::new(
                m + depth - CHAMFER_PANEL_WIDTH,
                bottom_y - CHAMFER_PANEL_HEIGHT + CHAMFER_PANEL_DROP,
            ),
            0.0,
            true,
        ),
        CornerSpec::new(
            Point::new(m + depth, bottom_y - CHAMFER_PANEL_HEIGHT),
            0.0,
            true,
        ),
        CornerSpec::new(Point::new(m + depth, bottom_y), 0.0, true),
    ]);

    // ── Panels & bridge ─────────────────────────────────────────────
    let panel_height = length - dims.neck_start - 2.0 * PANEL_END_INSET;
    let shapes = vec![
        // Soundboard panel inset along the face.
        Shape::Rect {
            origin: Point::new(m, neck_y + PANEL_END_INSET),
            width: PANEL_THICKNESS,
            height: panel_height,
            corner_radius: 0.0,
        },
        // Back panel inset along the full-depth section.
        Shape::Rect {
            origin: Point::new(m + depth - PANEL_THICKNESS, neck_y + PANEL_END_INSET),
            width: PANEL_THICKNESS,
            height: panel_height,
            corner_radius: 0.0,
        },
        // Bridge standing proud of the soundboard at the bridge line.
        Shape::Rect {
            origin: Point::new(
                m - SIDE_BRIDGE_HEIGHT,
                m + dims.bridge_line - SIDE_BRIDGE_DEPTH / 2.0,
            ),
            width: SIDE_BRIDGE_HEIGHT,
            height: SIDE_BRIDGE_DEPTH,
            corner_radius: 1.0,
        },
    ];

    // ── Annotations ─────────────────────────────────────────────────
    let near = m * DIM_BAND_NEAR;
    let far = m * DIM_BAND_FAR;
    let annotations = vec![
        // Neck start down the back, measured bottom to top so the positive
        // offset lands it right of the profile.
        linear_dimension(
            Point::new(m + depth, neck_y),
            Point::new(m + depth, m),
            far,
            dim_label(LETTER_NECK_START, dims.neck_start),
        ),
        linear_dimension(
            Point::new(m, m),
            Point::new(m + neck, m),
            -near,
            dim_label(LETTER_NECK_THICKNESS, neck),
        ),
        linear_dimension(
            Point::new(m, bottom_y),
            Point::new(m + depth, bottom_y),
            far,
            dim_label(LETTER_BODY_MIN_DEPTH, depth),
        ),
    ];

    Scene {
        width: 2.0 * m + depth,
        height: 2.0 * m + length,
        outlines: vec![outline, chamfer],
        shapes,
        strings: Vec::new(),
        anchors: anchors::neck_join_points(dims, m).to_vec(),
        annotations,
    }
}
