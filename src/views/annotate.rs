//! Linear dimension construction.
//!
//! A dimension is the measurement line between two points shifted sideways
//! by a perpendicular offset, two extension lines tying it back to the
//! measured points, and a text label at its midpoint. Offset direction and
//! magnitude are chosen per call site; nothing here is shared between
//! calls, and nothing feeds back into the geometry.

use super::constants::*;
use crate::geometry::Point;
use crate::scene::{Annotation, Label, Segment, TextAnchor};

/// Build a linear dimension between `p1` and `p2`.
///
/// The dimension line is offset along the left-hand normal of the `p1→p2`
/// direction: for a left-to-right measurement a positive offset drops the
/// line below the points, a negative one lifts it above.
pub(super) fn linear_dimension(p1: Point, p2: Point, offset: f64, text: String) -> Annotation {
    let len = p1.distance(p2);
    // Coincident points leave no direction to work with; fall back to a
    // horizontal measurement axis.
    let (ux, uy) = if len > 0.0 {
        ((p2.x - p1.x) / len, (p2.y - p1.y) / len)
    } else {
        (1.0, 0.0)
    };
    let (nx, ny) = (-uy, ux);

    let shift = |p: Point, d: f64| Point::new(p.x + nx * d, p.y + ny * d);

    let a = shift(p1, offset);
    let b = shift(p2, offset);
    let reach = offset + EXTENSION_OVERSHOOT * offset.signum();
    let label_offset = offset + LABEL_GAP * offset.signum();
    let mid = Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);

    Annotation {
        dimension_line: Segment::new(a, b),
        extension_lines: [
            Segment::new(p1, shift(p1, reach)),
            Segment::new(p2, shift(p2, reach)),
        ],
        label: Label {
            position: shift(mid, label_offset),
            anchor: TextAnchor::Middle,
            text,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_dimension_offsets_downward_for_positive_offset() {
        let ann = linear_dimension(
            Point::new(10.0, 100.0),
            Point::new(110.0, 100.0),
            20.0,
            "B 100.0".into(),
        );
        assert_eq!(ann.dimension_line.from, Point::new(10.0, 120.0));
        assert_eq!(ann.dimension_line.to, Point::new(110.0, 120.0));
        // Extensions start on the measured points and overshoot the line.
        assert_eq!(ann.extension_lines[0].from, Point::new(10.0, 100.0));
        assert_eq!(ann.extension_lines[0].to.y, 123.0);
        assert_eq!(ann.label.position.x, 60.0);
        assert!(ann.label.position.y > 120.0);
    }

    #[test]
    fn negative_offset_flips_the_side() {
        let ann = linear_dimension(
            Point::new(0.0, 50.0),
            Point::new(80.0, 50.0),
            -15.0,
            "D 80.0".into(),
        );
        assert_eq!(ann.dimension_line.from.y, 35.0);
        assert_eq!(ann.extension_lines[1].to.y, 32.0);
        assert!(ann.label.position.y < 35.0);
    }
}
