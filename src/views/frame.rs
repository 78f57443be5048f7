//! Frame view — body outline plus the inward-offset structural inset.
//!
//! The inset walls are 7 mm on the sides and top and 18 mm at the base;
//! the thicker base backs the tailpiece anchor region.

use super::annotate::linear_dimension;
use super::constants::*;
use crate::config::PlanConfig;
use crate::dimensions::DimensionSet;
use crate::geometry::{build_rounded_outline, CornerSpec, Point};
use crate::scene::Scene;

pub(super) fn assemble(dims: &DimensionSet, cfg: &PlanConfig) -> Scene {
    let m = cfg.margins.offset();
    let cx = super::body_center_x(dims, m);
    let max_w = dims.max_body_width();

    let body = build_rounded_outline(&super::body_corners(dims, m));

    // Inset corners follow the trapezoid's slanted edges: evaluate the edge
    // at the wall's y-position, then step the wall thickness inward.
    let inset_top_y = m + FRAME_WALL_SIDE;
    let inset_bottom_y = m + dims.overall_length - FRAME_WALL_BASE;
    let inset_corner = |y: f64, right: bool| {
        let edge = super::body_edge_x(dims, m, y, right);
        let x = if right {
            edge - FRAME_WALL_SIDE
        } else {
            edge + FRAME_WALL_SIDE
        };
        Point::new(x, y)
    };
    let inset = build_rounded_outline(&[
        CornerSpec::new(inset_corner(inset_top_y, false), FRAME_INSET_CORNER_RADIUS, true),
        CornerSpec::new(inset_corner(inset_top_y, true), FRAME_INSET_CORNER_RADIUS, true),
        CornerSpec::new(inset_corner(inset_bottom_y, true), FRAME_INSET_CORNER_RADIUS, true),
        CornerSpec::new(inset_corner(inset_bottom_y, false), FRAME_INSET_CORNER_RADIUS, true),
    ]);

    let inner_top_w = inset_corner(inset_top_y, true).x - inset_corner(inset_top_y, false).x;
    let inner_bottom_w =
        inset_corner(inset_bottom_y, true).x - inset_corner(inset_bottom_y, false).x;

    let far = m * DIM_BAND_FAR;
    let top_y = m;
    let bottom_y = m + dims.overall_length;
    let annotations = vec![
        // Outer width at the widest end.
        linear_dimension(
            Point::new(cx - max_w / 2.0, top_y),
            Point::new(cx + max_w / 2.0, top_y),
            -far,
            format!("{:.1}", max_w),
        ),
        // Outer height down the right side, bottom to top for a rightward
        // offset.
        linear_dimension(
            Point::new(cx + max_w / 2.0, bottom_y),
            Point::new(cx + max_w / 2.0, top_y),
            far,
            format!("{:.1}", dims.overall_length),
        ),
        // Inner widths just inside the frame walls.
        linear_dimension(
            Point::new(inset_corner(inset_top_y, false).x, inset_top_y),
            Point::new(inset_corner(inset_top_y, true).x, inset_top_y),
            10.0,
            format!("{:.1}", inner_top_w),
        ),
        linear_dimension(
            Point::new(inset_corner(inset_bottom_y, false).x, inset_bottom_y),
            Point::new(inset_corner(inset_bottom_y, true).x, inset_bottom_y),
            -10.0,
            format!("{:.1}", inner_bottom_w),
        ),
    ];

    Scene {
        width: 2.0 * m + max_w,
        height: 2.0 * m + dims.overall_length,
        outlines: vec![body, inset],
        shapes: Vec::new(),
        strings: Vec::new(),
        anchors: Vec::new(),
        annotations,
    }
}
