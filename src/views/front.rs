//! Front view — soundboard face with window, bridge, tailpiece, strings,
//! soundhole, and the lettered dimension overlay.

use super::annotate::linear_dimension;
use super::constants::*;
use crate::anchors;
use crate::config::PlanConfig;
use crate::dimensions::DimensionSet;
use crate::geometry::{build_rounded_outline, rounded_rect_corners, CornerSpec, Point};
use crate::scene::{Scene, Segment, Shape};

pub(super) fn assemble(dims: &DimensionSet, cfg: &PlanConfig) -> Scene {
    let m = cfg.margins.offset();
    let cx = super::body_center_x(dims, m);
    let max_w = dims.max_body_width();
    let n = cfg.num_strings;

    // ── Outlines ────────────────────────────────────────────────────
    let body = build_rounded_outline(&super::body_corners(dims, m));

    let window_top = m + dims.cut_out_top;
    let window = build_rounded_outline(&rounded_rect_corners(
        cx - dims.window_width / 2.0,
        window_top,
        dims.window_width,
        dims.window_length,
        WINDOW_CORNER_RADIUS,
    ));

    let tail_bottom_y = m + dims.overall_length - TAIL_END_INSET;
    let tail_top_y = tail_bottom_y - dims.tail_length;
    let tailpiece = build_rounded_outline(&[
        CornerSpec::new(
            Point::new(cx - dims.tail_top_width / 2.0, tail_top_y),
            TAIL_CORNER_RADIUS,
            true,
        ),
        CornerSpec::new(
            Point::new(cx + dims.tail_top_width / 2.0, tail_top_y),
            TAIL_CORNER_RADIUS,
            true,
        ),
        CornerSpec::new(
            Point::new(cx + dims.tail_bottom_width / 2.0, tail_bottom_y),
            TAIL_CORNER_RADIUS,
            true,
        ),
        CornerSpec::new(
            Point::new(cx - dims.tail_bottom_width / 2.0, tail_bottom_y),
            TAIL_CORNER_RADIUS,
            true,
        ),
    ]);

    // ── Shapes ──────────────────────────────────────────────────────
    let bridge_y = m + dims.bridge_line;
    let shapes = vec![
        Shape::Rect {
            origin: Point::new(cx - dims.bridge_width / 2.0, bridge_y - BRIDGE_DEPTH / 2.0),
            width: dims.bridge_width,
            height: BRIDGE_DEPTH,
            corner_radius: BRIDGE_CORNER_RADIUS,
        },
        Shape::Circle {
            center: Point::new(cx, m + dims.soundhole_center),
            radius: dims.soundhole_diameter / 2.0,
        },
    ];

    // ── Anchors & strings ───────────────────────────────────────────
    let pegs = anchors::peg_holes(dims, n, cx, m);
    let bridges = anchors::bridge_anchors(dims, n, cx, m);
    let tails = anchors::tail_holes(dims, n, cx, tail_top_y + TAIL_HOLE_INSET);

    let mut strings = Vec::with_capacity(2 * n as usize);
    for i in 0..n as usize {
        strings.push(Segment::new(pegs[i].position(), bridges[i].position()));
        strings.push(Segment::new(bridges[i].position(), tails[i].position()));
    }

    let mut anchor_points = pegs;
    anchor_points.extend(bridges);
    anchor_points.extend(tails);
    anchor_points.push(anchors::soundhole(dims, cx, m));

    // ── Annotations ─────────────────────────────────────────────────
    // Horizontal dimensions use the left-hand-normal rule: measured left to
    // right, a positive offset drops the line below the points. Vertical
    // ones are ordered so the line lands in the near/far band outside the
    // body (fractions of the margin keep every band on the canvas).
    let near = m * DIM_BAND_NEAR;
    let far = m * DIM_BAND_FAR;
    let left_x = cx - max_w / 2.0;
    let right_x = cx + max_w / 2.0;
    let top_y = m;
    let bottom_y = m + dims.overall_length;
    let sh_y = m + dims.soundhole_center;
    let sh_r = dims.soundhole_diameter / 2.0;

    let mut annotations = vec![
        // Overall length down the right side, measured bottom to top so the
        // positive offset lands it to the right of the body.
        linear_dimension(
            Point::new(right_x, bottom_y),
            Point::new(right_x, top_y),
            far,
            dim_label(LETTER_OVERALL_LENGTH, dims.overall_length),
        ),
        linear_dimension(
            Point::new(cx - dims.body_min_width / 2.0, bottom_y),
            Point::new(cx + dims.body_min_width / 2.0, bottom_y),
            far,
            dim_label(LETTER_BODY_MIN_WIDTH, dims.body_min_width),
        ),
        linear_dimension(
            Point::new(cx - dims.headstock_width / 2.0, top_y),
            Point::new(cx + dims.headstock_width / 2.0, top_y),
            -far,
            dim_label(LETTER_HEADSTOCK_WIDTH, dims.headstock_width),
        ),
        // Window width just below the window's lower edge, inside the body.
        linear_dimension(
            Point::new(cx - dims.window_width / 2.0, window_top + dims.window_length),
            Point::new(cx + dims.window_width / 2.0, window_top + dims.window_length),
            10.0,
            dim_label(LETTER_WINDOW_WIDTH, dims.window_width),
        ),
        // Window length along its left edge, shifted into the body.
        linear_dimension(
            Point::new(cx - dims.window_width / 2.0, window_top),
            Point::new(cx - dims.window_width / 2.0, window_top + dims.window_length),
            10.0,
            dim_label(LETTER_WINDOW_LENGTH, dims.window_length),
        ),
        linear_dimension(
            Point::new(cx - dims.bridge_width / 2.0, bridge_y + BRIDGE_DEPTH / 2.0),
            Point::new(cx + dims.bridge_width / 2.0, bridge_y + BRIDGE_DEPTH / 2.0),
            12.0,
            dim_label(LETTER_BRIDGE_WIDTH, dims.bridge_width),
        ),
        linear_dimension(
            Point::new(cx - dims.tail_top_width / 2.0, tail_top_y),
            Point::new(cx + dims.tail_top_width / 2.0, tail_top_y),
            -8.0,
            dim_label(LETTER_TAIL_TOP_WIDTH, dims.tail_top_width),
        ),
        linear_dimension(
            Point::new(cx - dims.tail_bottom_width / 2.0, tail_bottom_y),
            Point::new(cx + dims.tail_bottom_width / 2.0, tail_bottom_y),
            -6.0,
            dim_label(LETTER_TAIL_BOTTOM_WIDTH, dims.tail_bottom_width),
        ),
        // Tailpiece length to the right of the tailpiece, clear of the
        // overall-length band.
        linear_dimension(
            Point::new(cx + dims.tail_top_width / 2.0, tail_bottom_y),
            Point::new(cx + dims.tail_top_width / 2.0, tail_top_y),
            right_x - (cx + dims.tail_top_width / 2.0) + near,
            dim_label(LETTER_TAIL_LENGTH, dims.tail_length),
        ),
        // Soundhole position down the left side, measured top to bottom so
        // the positive offset lands it to the left of the body.
        linear_dimension(
            Point::new(left_x, top_y),
            Point::new(left_x, sh_y),
            near,
            dim_label(LETTER_SOUNDHOLE_CENTER, dims.soundhole_center),
        ),
        linear_dimension(
            Point::new(cx - sh_r, sh_y),
            Point::new(cx + sh_r, sh_y),
            sh_r + 8.0,
            dim_label(LETTER_SOUNDHOLE_DIAMETER, dims.soundhole_diameter),
        ),
        linear_dimension(
            Point::new(left_x, top_y),
            Point::new(left_x, m + dims.cut_out_top),
            far,
            dim_label(LETTER_CUT_OUT_TOP, dims.cut_out_top),
        ),
    ];

    // Spacing dimensions need two row points; a single string has none.
    if n >= 2 {
        let pegs_xs = anchors::symmetric_row(2, dims.peg_spacing, cx);
        annotations.push(linear_dimension(
            Point::new(pegs_xs[0], m + dims.peg_line),
            Point::new(pegs_xs[1], m + dims.peg_line),
            -8.0,
            dim_label(LETTER_PEG_SPACING, dims.peg_spacing),
        ));
        let bridge_xs = anchors::symmetric_row(2, dims.bridge_spacing, cx);
        annotations.push(linear_dimension(
            Point::new(bridge_xs[0], bridge_y),
            Point::new(bridge_xs[1], bridge_y),
            -(BRIDGE_DEPTH / 2.0 + 6.0),
            dim_label(LETTER_BRIDGE_SPACING, dims.bridge_spacing),
        ));
    }

    Scene {
        width: 2.0 * m + max_w,
        height: 2.0 * m + dims.overall_length,
        outlines: vec![body, window, tailpiece],
        shapes,
        strings,
        anchors: anchor_points,
        annotations,
    }
}
