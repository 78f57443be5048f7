//! Rounded-outline geometry — the shared closed-path constructor.
//!
//! Every outline in every view (body, window, tailpiece, frame inset, side
//! profile) is built here from an ordered corner list, so no view carries
//! its own arc math. For each corner the two tangent points lie `radius`
//! back along the incident edges from the ideal vertex; the corner is then
//! a straight run to the first tangent point followed by an arc to the
//! second. A radius that would overrun an edge is clamped to half the
//! shorter incident edge, never rejected.
//!
//! Sweep direction is constant around an outline except at the one
//! designated blend transition in the side profile, where the concave arc
//! deliberately carries the inverted flag (see `views::side`).

use serde::{Deserialize, Serialize};

/// Tangent points closer than this collapse into a single emitted point.
const COINCIDENT_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// The point `dist` from `self` along the direction to `other`.
    /// Returns `self` unchanged when the two points coincide.
    pub fn towards(&self, other: Point, dist: f64) -> Point {
        let len = self.distance(other);
        if len <= COINCIDENT_EPS {
            return *self;
        }
        Point {
            x: self.x + (other.x - self.x) / len * dist,
            y: self.y + (other.y - self.y) / len * dist,
        }
    }
}

/// One ideal (unrounded) vertex of an outline.
///
/// `sweep` is the SVG arc sweep flag for the corner's arc: `true` draws the
/// arc clockwise in the y-down drawing frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerSpec {
    pub point: Point,
    pub radius: f64,
    pub sweep: bool,
}

impl CornerSpec {
    pub fn new(point: Point, radius: f64, sweep: bool) -> Self {
        Self {
            point,
            radius,
            sweep,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    Line { to: Point },
    Arc { radius: f64, sweep: bool, to: Point },
}

impl PathSegment {
    pub fn end(&self) -> Point {
        match self {
            PathSegment::Line { to } => *to,
            PathSegment::Arc { to, .. } => *to,
        }
    }
}

/// An ordered loop of path segments.
///
/// Invariant: the final segment ends exactly on `start`, so the first
/// emitted point equals the last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedOutline {
    pub start: Point,
    pub segments: Vec<PathSegment>,
}

impl ClosedOutline {
    pub fn first_point(&self) -> Point {
        self.start
    }

    pub fn last_point(&self) -> Point {
        self.segments.last().map_or(self.start, |s| s.end())
    }

    /// Emit the outline in the canonical path grammar:
    /// `M x,y`, `L x,y`, `A r r 0 0 s x,y`, `Z`.
    pub fn to_path_data(&self) -> String {
        let mut d = format!("M {:.2},{:.2}", self.start.x, self.start.y);
        for seg in &self.segments {
            match seg {
                PathSegment::Line { to } => {
                    d.push_str(&format!(" L {:.2},{:.2}", to.x, to.y));
                }
                PathSegment::Arc { radius, sweep, to } => {
                    d.push_str(&format!(
                        " A {r:.2} {r:.2} 0 0 {s} {x:.2},{y:.2}",
                        r = radius,
                        s = u8::from(*sweep),
                        x = to.x,
                        y = to.y,
                    ));
                }
            }
        }
        d.push_str(" Z");
        d
    }
}

struct RoundedCorner {
    tangent_in: Point,
    tangent_out: Point,
    radius: f64,
    sweep: bool,
}

/// Build a closed outline from an ordered corner list, rounding each corner
/// with its own radius and sweep flag.
///
/// The loop starts at the first corner's outgoing tangent point and ends on
/// it, so the closure invariant holds by construction. A zero radius keeps
/// the sharp vertex (no degenerate arc command is emitted).
pub fn build_rounded_outline(corners: &[CornerSpec]) -> ClosedOutline {
    assert!(corners.len() >= 3, "an outline needs at least 3 corners");
    let n = corners.len();

    let rounded: Vec<RoundedCorner> = (0..n)
        .map(|i| {
            let prev = corners[(i + n - 1) % n].point;
            let point = corners[i].point;
            let next = corners[(i + 1) % n].point;
            // Clamp so the tangent points never pass an edge midpoint.
            let radius = corners[i]
                .radius
                .min(point.distance(prev) / 2.0)
                .min(point.distance(next) / 2.0)
                .max(0.0);
            RoundedCorner {
                tangent_in: point.towards(prev, radius),
                tangent_out: point.towards(next, radius),
                radius,
                sweep: corners[i].sweep,
            }
        })
        .collect();

    let start = rounded[0].tangent_out;
    let mut segments = Vec::with_capacity(2 * n);
    let mut cursor = start;

    // Walk corners 1..n and close back through corner 0.
    for corner in rounded.iter().cycle().skip(1).take(n) {
        if cursor.distance(corner.tangent_in) > COINCIDENT_EPS {
            segments.push(PathSegment::Line {
                to: corner.tangent_in,
            });
            cursor = corner.tangent_in;
        }
        if corner.radius > COINCIDENT_EPS {
            segments.push(PathSegment::Arc {
                radius: corner.radius,
                sweep: corner.sweep,
                to: corner.tangent_out,
            });
            cursor = corner.tangent_out;
        }
    }

    ClosedOutline { start, segments }
}

/// Corner list for an axis-aligned rounded rectangle, wound clockwise from
/// the top-left corner.
pub fn rounded_rect_corners(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Vec<CornerSpec> {
    vec![
        CornerSpec::new(Point::new(x, y), radius, true),
        CornerSpec::new(Point::new(x + w, y), radius, true),
        CornerSpec::new(Point::new(x + w, y + h), radius, true),
        CornerSpec::new(Point::new(x, y + h), radius, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_outline(r: f64) -> ClosedOutline {
        build_rounded_outline(&rounded_rect_corners(0.0, 0.0, 100.0, 50.0, r))
    }

    #[test]
    fn outline_first_point_equals_last() {
        let outline = rect_outline(8.0);
        assert_eq!(outline.first_point(), outline.last_point());
    }

    #[test]
    fn tangent_points_lie_radius_back_along_edges() {
        let outline = rect_outline(8.0);
        // Start is the top-left corner's outgoing tangent along the top edge.
        assert_eq!(outline.start, Point::new(8.0, 0.0));
        // First segment runs to the top-right corner's incoming tangent.
        assert_eq!(
            outline.segments[0],
            PathSegment::Line {
                to: Point::new(92.0, 0.0)
            }
        );
        match outline.segments[1] {
            PathSegment::Arc { radius, sweep, to } => {
                assert_eq!(radius, 8.0);
                assert!(sweep);
                assert_eq!(to, Point::new(100.0, 8.0));
            }
            ref other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn oversized_radius_clamps_to_half_shorter_edge() {
        let outline = rect_outline(400.0);
        for seg in &outline.segments {
            if let PathSegment::Arc { radius, .. } = seg {
                assert_eq!(*radius, 25.0);
            }
        }
        assert_eq!(outline.first_point(), outline.last_point());
    }

    #[test]
    fn zero_radius_keeps_sharp_vertices() {
        let outline = rect_outline(0.0);
        assert_eq!(outline.segments.len(), 4);
        assert!(outline
            .segments
            .iter()
            .all(|s| matches!(s, PathSegment::Line { .. })));
        assert_eq!(outline.first_point(), outline.last_point());
    }

    #[test]
    fn path_data_uses_canonical_grammar() {
        let d = rect_outline(8.0).to_path_data();
        assert!(d.starts_with("M 8.00,0.00"));
        assert!(d.contains(" L 92.00,0.00"));
        assert!(d.contains(" A 8.00 8.00 0 0 1 100.00,8.00"));
        assert!(d.ends_with(" Z"));
    }

    #[test]
    fn blend_step_arcs_meet_tangent_at_the_midpoint() {
        // A thin-to-deep step like the side view's neck transition:
        // vertical edge at x=25, horizontal step at y=300, vertical edge at
        // x=65. Blend radius is half the step width.
        let r = 20.0;
        let corners = vec![
            CornerSpec::new(Point::new(0.0, 0.0), 0.0, true),
            CornerSpec::new(Point::new(25.0, 0.0), 0.0, true),
            CornerSpec::new(Point::new(25.0, 300.0), r, false), // concave, inverted sweep
            CornerSpec::new(Point::new(65.0, 300.0), r, true),
            CornerSpec::new(Point::new(65.0, 600.0), 0.0, true),
            CornerSpec::new(Point::new(0.0, 600.0), 0.0, true),
        ];
        let outline = build_rounded_outline(&corners);

        let arcs: Vec<_> = outline
            .segments
            .iter()
            .filter_map(|s| match s {
                PathSegment::Arc { radius, sweep, to } => Some((*radius, *sweep, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 2);

        // The concave arc ends at the step midpoint, where the convex arc
        // begins: tangency holds on both sides of the blend.
        assert_eq!(arcs[0], (r, false, Point::new(45.0, 300.0)));
        assert_eq!(arcs[1].0, r);
        assert!(arcs[1].1);
        assert_eq!(arcs[1].2, Point::new(65.0, 320.0));
        assert_eq!(outline.first_point(), outline.last_point());
    }
}
