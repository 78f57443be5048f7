//! Anchor point derivation — named functional points on the plan.
//!
//! Peg holes, bridge string contacts, and tail holes form rows symmetric
//! about the body centerline; all three rows always have exactly one point
//! per string. The peg/bridge rows use even spacing about the centre, the
//! tail row divides the tailpiece top edge into `count + 1` parts with
//! margins on both ends.

use serde::{Deserialize, Serialize};

use crate::dimensions::DimensionSet;
use crate::geometry::Point;

/// A named 2D point marking a functional feature of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl AnchorPoint {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// `count` x-coordinates spaced `spacing` apart, symmetric about
/// `center_x`. A single point sits on the centre.
pub fn symmetric_row(count: usize, spacing: f64, center_x: f64) -> Vec<f64> {
    if count == 1 {
        return vec![center_x];
    }
    let first = center_x - spacing * (count as f64 - 1.0) / 2.0;
    (0..count).map(|i| first + i as f64 * spacing).collect()
}

/// Peg holes across the headstock block, one per string.
pub fn peg_holes(dims: &DimensionSet, num_strings: u32, center_x: f64, margin: f64) -> Vec<AnchorPoint> {
    let y = margin + dims.peg_line;
    symmetric_row(num_strings as usize, dims.peg_spacing, center_x)
        .into_iter()
        .enumerate()
        .map(|(i, x)| AnchorPoint::new(format!("peg_{}", i + 1), x, y))
        .collect()
}

/// String contact points along the bridge line.
pub fn bridge_anchors(
    dims: &DimensionSet,
    num_strings: u32,
    center_x: f64,
    margin: f64,
) -> Vec<AnchorPoint> {
    let y = margin + dims.bridge_line;
    symmetric_row(num_strings as usize, dims.bridge_spacing, center_x)
        .into_iter()
        .enumerate()
        .map(|(i, x)| AnchorPoint::new(format!("bridge_{}", i + 1), x, y))
        .collect()
}

/// String anchor holes on the tailpiece.
///
/// Unlike the peg and bridge rows, the tail row divides the tailpiece top
/// edge into `count + 1` equal parts measured from its left edge, so the
/// outermost holes keep a margin on both ends. One string gets a single
/// hole at the midpoint.
pub fn tail_holes(dims: &DimensionSet, num_strings: u32, center_x: f64, y: f64) -> Vec<AnchorPoint> {
    if num_strings == 1 {
        return vec![AnchorPoint::new("tail_1", center_x, y)];
    }
    let left = center_x - dims.tail_top_width / 2.0;
    let step = dims.tail_top_width / (num_strings as f64 + 1.0);
    (0..num_strings)
        .map(|i| {
            AnchorPoint::new(
                format!("tail_{}", i + 1),
                left + (i as f64 + 1.0) * step,
                y,
            )
        })
        .collect()
}

/// Soundhole centre on the body centerline.
pub fn soundhole(dims: &DimensionSet, center_x: f64, margin: f64) -> AnchorPoint {
    AnchorPoint::new("soundhole", center_x, margin + dims.soundhole_center)
}

/// The two tangent points either side of the side-profile blend joint, in
/// side-view coordinates (x across the depth, y along the length).
pub fn neck_join_points(dims: &DimensionSet, margin: f64) -> [AnchorPoint; 2] {
    let radius = (dims.body_min_depth - dims.neck_thickness) / 2.0;
    [
        AnchorPoint::new(
            "neck_join_upper",
            margin + dims.neck_thickness,
            margin + dims.neck_start - radius,
        ),
        AnchorPoint::new(
            "neck_join_lower",
            margin + dims.body_min_depth,
            margin + dims.neck_start + radius,
        ),
    ]
}
