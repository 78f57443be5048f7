//! Scene data model — the drawable output of one view.
//!
//! A `Scene` is built once per (scale, strings) request and never mutated;
//! recomputation replaces the whole scene. `Scene::primitives` flattens the
//! structured content into the canonical primitive grammar that any vector
//! renderer (SVG, PDF, canvas adapter) can reproduce exactly.

use serde::{Deserialize, Serialize};

use crate::anchors::AnchorPoint;
use crate::geometry::{ClosedOutline, Point};

/// Radius of the small marker circle drawn for each anchor point.
pub(crate) const ANCHOR_MARKER_RADIUS: f64 = 2.5;

/// A straight stroked segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Horizontal alignment of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub position: Point,
    pub anchor: TextAnchor,
    pub text: String,
}

/// A measurement overlay: dimension line, two extension lines, and a label.
/// Purely presentational; it never feeds back into the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub dimension_line: Segment,
    pub extension_lines: [Segment; 2],
    pub label: Label,
}

/// Filled or stroked shapes that are not closed outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
}

/// The complete set of drawable content for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas extent in millimetres, margins included.
    pub width: f64,
    pub height: f64,
    pub outlines: Vec<ClosedOutline>,
    pub shapes: Vec<Shape>,
    /// String courses, stroked with the configured string color.
    pub strings: Vec<Segment>,
    pub anchors: Vec<AnchorPoint>,
    pub annotations: Vec<Annotation>,
}

/// One drawable primitive in the canonical output grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Path {
        d: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        ry: f64,
    },
    Text {
        x: f64,
        y: f64,
        anchor: TextAnchor,
        content: String,
    },
}

fn line_primitive(seg: &Segment) -> Primitive {
    Primitive::Line {
        x1: seg.from.x,
        y1: seg.from.y,
        x2: seg.to.x,
        y2: seg.to.y,
    }
}

impl Scene {
    /// Flatten the scene into an ordered primitive list.
    ///
    /// The order is fixed (outlines, shapes, strings, anchors, annotations)
    /// so two scenes built from the same dimension set flatten to
    /// element-for-element equal lists.
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut out = Vec::new();

        for outline in &self.outlines {
            out.push(Primitive::Path {
                d: outline.to_path_data(),
            });
        }

        for shape in &self.shapes {
            out.push(match shape {
                Shape::Circle { center, radius } => Primitive::Circle {
                    cx: center.x,
                    cy: center.y,
                    r: *radius,
                },
                Shape::Rect {
                    origin,
                    width,
                    height,
                    corner_radius,
                } => Primitive::Rect {
                    x: origin.x,
                    y: origin.y,
                    width: *width,
                    height: *height,
                    rx: *corner_radius,
                    ry: *corner_radius,
                },
            });
        }

        for string in &self.strings {
            out.push(line_primitive(string));
        }

        for anchor in &self.anchors {
            out.push(Primitive::Circle {
                cx: anchor.x,
                cy: anchor.y,
                r: ANCHOR_MARKER_RADIUS,
            });
        }

        for ann in &self.annotations {
            out.push(line_primitive(&ann.dimension_line));
            out.push(line_primitive(&ann.extension_lines[0]));
            out.push(line_primitive(&ann.extension_lines[1]));
            out.push(Primitive::Text {
                x: ann.label.position.x,
                y: ann.label.position.y,
                anchor: ann.label.anchor,
                content: ann.label.text.clone(),
            });
        }

        out
    }
}
