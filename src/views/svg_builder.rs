//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! This is one downstream adapter for the canonical primitive grammar; the
//! scene itself stays renderer-agnostic.

use super::constants::*;
use crate::config::PlanConfig;
use crate::scene::{Scene, Segment};

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    view_width: f64,
    view_height: f64,
    pixel_width: u32,
    pixel_height: u32,
}

impl SvgBuilder {
    pub(super) fn new(view_width: f64, view_height: f64, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            elements: Vec::new(),
            view_width,
            view_height,
            pixel_width,
            pixel_height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}" width="{}" height="{}">"#,
            self.view_width, self.view_height, self.pixel_width, self.pixel_height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        rx: f64,
        stroke: &str,
        stroke_width: f64,
    ) {
        if rx > 0.0 {
            self.elements.push(format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" ry="{:.2}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
                x, y, w, h, rx, rx, stroke, stroke_width
            ));
        } else {
            self.elements.push(format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
                x, y, w, h, stroke, stroke_width
            ));
        }
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            cx, cy, r, stroke, stroke_width
        ));
    }

    pub(super) fn filled_circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
    }

    pub(super) fn path(&mut self, d: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linejoin="round"/>"#,
            d, stroke, stroke_width
        ));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, fill: &str, anchor: &str) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.0}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, fill, anchor, escaped
        ));
    }
}

fn segment(svg: &mut SvgBuilder, seg: &Segment, color: &str, width: f64) {
    svg.line(seg.from.x, seg.from.y, seg.to.x, seg.to.y, color, width);
}

/// Render a scene to a self-contained SVG string. Structural outlines,
/// panels, strings, anchor markers, and annotations each get the fixed
/// palette role; strings use the configured color.
pub(super) fn scene_to_svg(scene: &Scene, cfg: &PlanConfig) -> String {
    let mut svg = SvgBuilder::new(
        scene.width,
        scene.height,
        cfg.pixel_size.width,
        cfg.pixel_size.height,
    );

    for outline in &scene.outlines {
        svg.path(&outline.to_path_data(), OUTLINE_COLOR, OUTLINE_STROKE_WIDTH);
    }

    for shape in &scene.shapes {
        match shape {
            crate::scene::Shape::Circle { center, radius } => {
                svg.circle(center.x, center.y, *radius, PANEL_COLOR, PANEL_STROKE_WIDTH);
            }
            crate::scene::Shape::Rect {
                origin,
                width,
                height,
                corner_radius,
            } => {
                svg.rect(
                    origin.x,
                    origin.y,
                    *width,
                    *height,
                    *corner_radius,
                    PANEL_COLOR,
                    PANEL_STROKE_WIDTH,
                );
            }
        }
    }

    for string in &scene.strings {
        segment(&mut svg, string, &cfg.string_color, STRING_STROKE_WIDTH);
    }

    for anchor in &scene.anchors {
        svg.filled_circle(
            anchor.x,
            anchor.y,
            crate::scene::ANCHOR_MARKER_RADIUS,
            ANCHOR_COLOR,
        );
    }

    for ann in &scene.annotations {
        segment(&mut svg, &ann.dimension_line, ANNOTATION_COLOR, ANNOTATION_STROKE_WIDTH);
        segment(&mut svg, &ann.extension_lines[0], ANNOTATION_COLOR, ANNOTATION_STROKE_WIDTH);
        segment(&mut svg, &ann.extension_lines[1], ANNOTATION_COLOR, ANNOTATION_STROKE_WIDTH);
        svg.text(
            ann.label.position.x,
            ann.label.position.y,
            &ann.label.text,
            LABEL_FONT_SIZE,
            ANNOTATION_COLOR,
            ann.label.anchor.as_str(),
        );
    }

    svg.build()
}
