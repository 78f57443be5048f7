//! View assembly tests — scene composition, symmetry, cross-view
//! consistency, and SVG output.

use planlib::{
    compute_dimensions, compute_plan, frame_view, front_view, plan_to_json, render_plan_to_svg,
    side_view, PathSegment, PlanConfig, Primitive,
};
use pretty_assertions::assert_eq;

fn config(scale: f64, strings: u32) -> PlanConfig {
    PlanConfig {
        scale_length: scale,
        num_strings: strings,
        ..PlanConfig::default()
    }
}

#[test]
fn front_scene_composition() {
    let cfg = config(40.0, 3);
    let plan = compute_plan(&cfg).unwrap();
    let front = &plan.front;

    // Body, window, tailpiece.
    assert_eq!(front.outlines.len(), 3);
    // Bridge rect and soundhole circle.
    assert_eq!(front.shapes.len(), 2);
    // Two segments per string course (peg→bridge, bridge→tail).
    assert_eq!(front.strings.len(), 6);
    // One anchor per string in each of the three rows, plus the soundhole.
    assert_eq!(front.anchors.len(), 10);
    assert!(!front.annotations.is_empty());
}

#[test]
fn anchor_rows_are_symmetric_about_the_centerline() {
    let cfg = config(40.0, 4);
    let plan = compute_plan(&cfg).unwrap();
    let center_x = cfg.margins.offset() + plan.dimensions.max_body_width() / 2.0;

    for row in ["peg", "bridge", "tail"] {
        let xs: Vec<f64> = plan
            .front
            .anchors
            .iter()
            .filter(|a| a.name.starts_with(row))
            .map(|a| a.x)
            .collect();
        assert_eq!(xs.len(), 4);
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!(
            (mean - center_x).abs() < 1e-9,
            "{row} row mean {mean} vs centerline {center_x}"
        );
    }
}

#[test]
fn single_string_gets_the_midpoint_tail_hole() {
    let cfg = config(30.0, 1);
    let plan = compute_plan(&cfg).unwrap();
    let center_x = cfg.margins.offset() + plan.dimensions.max_body_width() / 2.0;

    let tails: Vec<_> = plan
        .front
        .anchors
        .iter()
        .filter(|a| a.name.starts_with("tail"))
        .collect();
    assert_eq!(tails.len(), 1);
    assert!((tails[0].x - center_x).abs() < 1e-9);
    assert_eq!(plan.front.strings.len(), 2);
}

#[test]
fn side_outline_has_one_inverted_sweep_at_the_blend() {
    let cfg = config(40.0, 3);
    let dims = compute_dimensions(40.0, 3).unwrap();
    let side = side_view(&dims, &cfg);

    let blend_radius = (dims.body_min_depth - dims.neck_thickness) / 2.0;
    let arcs: Vec<(f64, bool)> = side.outlines[0]
        .segments
        .iter()
        .filter_map(|s| match s {
            PathSegment::Arc { radius, sweep, .. } => Some((*radius, *sweep)),
            _ => None,
        })
        .collect();

    let inverted: Vec<_> = arcs.iter().filter(|(_, sweep)| !sweep).collect();
    assert_eq!(inverted.len(), 1);
    assert!((inverted[0].0 - blend_radius).abs() < 1e-9);
    // Its convex partner uses the same radius with the regular sweep.
    assert!(arcs
        .iter()
        .any(|(r, sweep)| *sweep && (r - blend_radius).abs() < 1e-9));
}

#[test]
fn neck_join_points_straddle_the_blend_tangents() {
    let cfg = config(52.0, 4);
    let dims = compute_dimensions(52.0, 4).unwrap();
    let side = side_view(&dims, &cfg);
    let m = cfg.margins.offset();
    let r = (dims.body_min_depth - dims.neck_thickness) / 2.0;

    let upper = side.anchors.iter().find(|a| a.name == "neck_join_upper").unwrap();
    let lower = side.anchors.iter().find(|a| a.name == "neck_join_lower").unwrap();
    assert_eq!(upper.y, m + dims.neck_start - r);
    assert_eq!(lower.y, m + dims.neck_start + r);
}

#[test]
fn view_assembly_is_idempotent() {
    let cfg = config(47.5, 5);
    let dims = compute_dimensions(47.5, 5).unwrap();

    assert_eq!(front_view(&dims, &cfg), front_view(&dims, &cfg));
    assert_eq!(side_view(&dims, &cfg), side_view(&dims, &cfg));
    assert_eq!(frame_view(&dims, &cfg), frame_view(&dims, &cfg));
    assert_eq!(
        front_view(&dims, &cfg).primitives(),
        front_view(&dims, &cfg).primitives()
    );
}

#[test]
fn views_share_one_origin_and_one_dimension_set() {
    let cfg = config(40.0, 3);
    let plan = compute_plan(&cfg).unwrap();
    let m = cfg.margins.offset();

    // All three canvases span the same instrument length.
    assert_eq!(plan.front.height, 2.0 * m + plan.dimensions.overall_length);
    assert_eq!(plan.front.height, plan.side.height);
    assert_eq!(plan.front.height, plan.frame.height);
    assert_eq!(plan.front.width, plan.frame.width);

    // Front and frame share the body outline verbatim.
    assert_eq!(plan.front.outlines[0], plan.frame.outlines[0]);
}

#[test]
fn frame_inset_respects_wall_thicknesses() {
    let cfg = config(40.0, 3);
    let plan = compute_plan(&cfg).unwrap();
    let m = cfg.margins.offset();

    let inset = &plan.frame.outlines[1];
    let mut ys: Vec<f64> = vec![inset.start.y];
    ys.extend(inset.segments.iter().map(|s| s.end().y));
    let top = ys.iter().cloned().fold(f64::INFINITY, f64::min);
    let bottom = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // 7 mm top wall, 18 mm base wall.
    assert!((top - (m + 7.0)).abs() < 1e-9);
    assert!((bottom - (m + plan.dimensions.overall_length - 18.0)).abs() < 1e-9);
}

#[test]
fn primitive_list_is_flattened_in_canonical_order() {
    let cfg = config(40.0, 3);
    let plan = compute_plan(&cfg).unwrap();
    let prims = plan.front.primitives();

    let expected = plan.front.outlines.len()
        + plan.front.shapes.len()
        + plan.front.strings.len()
        + plan.front.anchors.len()
        + plan.front.annotations.len() * 4;
    assert_eq!(prims.len(), expected);

    // Outline paths come first and carry the canonical grammar.
    match &prims[0] {
        Primitive::Path { d } => {
            assert!(d.starts_with("M "));
            assert!(d.ends_with(" Z"));
            assert!(d.contains(" A "));
        }
        other => panic!("expected a path first, got {other:?}"),
    }
}

#[test]
fn svg_output_is_well_formed() {
    let cfg = config(40.0, 3);
    let svg = render_plan_to_svg(&cfg).unwrap();

    for view in [&svg.front, &svg.side, &svg.frame] {
        assert!(view.starts_with("<svg"));
        assert!(view.contains("viewBox="));
        assert!(view.contains("<path"));
        assert!(view.contains("</svg>"));
    }
    // Strings appear only in the front view, stroked with the configured color.
    assert!(svg.front.contains(&cfg.string_color));
    assert!(!svg.frame.contains(&cfg.string_color));
    // Lettered dimension labels.
    assert!(svg.front.contains("A 664.0"));
    assert!(svg.side.contains("C 48.0"));
}

#[test]
fn invalid_requests_fail_before_assembly() {
    assert!(config(20.0, 3).validate().is_err());
    assert!(compute_plan(&config(20.0, 3)).is_err());
    assert!(render_plan_to_svg(&config(40.0, 0)).is_err());
    assert!(config(40.0, 3).validate().is_ok());
}

#[test]
fn plan_serializes_to_json() {
    let plan = compute_plan(&config(40.0, 3)).unwrap();
    let json = plan_to_json(&plan).unwrap();
    assert!(json.contains("\"overall_length\": 664.0"));
    assert!(json.contains("\"front\""));
    assert!(json.contains("\"soundhole\""));
}
