//! Shared constants for the view assemblers (all in millimetres).

// ── Corner radii ────────────────────────────────────────────────────
pub(super) const BODY_CORNER_RADIUS_TOP: f64 = 8.0;
pub(super) const BODY_CORNER_RADIUS_BOTTOM: f64 = 14.0;
pub(super) const WINDOW_CORNER_RADIUS: f64 = 12.0;
pub(super) const TAIL_CORNER_RADIUS: f64 = 4.0;
pub(super) const FRAME_INSET_CORNER_RADIUS: f64 = 6.0;
pub(super) const SIDE_END_CORNER_RADIUS: f64 = 4.0;

// ── Bridge & tailpiece ──────────────────────────────────────────────
pub(super) const BRIDGE_DEPTH: f64 = 12.0; // front-view bridge blank height
pub(super) const BRIDGE_CORNER_RADIUS: f64 = 2.0;
pub(super) const SIDE_BRIDGE_HEIGHT: f64 = 14.0; // protrusion above the soundboard
pub(super) const SIDE_BRIDGE_DEPTH: f64 = 6.0;
pub(super) const TAIL_END_INSET: f64 = 8.0; // tailpiece bottom edge above the body end
pub(super) const TAIL_HOLE_INSET: f64 = 12.0; // tail holes below the tailpiece top edge

// ── Frame walls ─────────────────────────────────────────────────────
// The base wall is thicker on purpose; it backs the tailpiece anchors.
pub(super) const FRAME_WALL_SIDE: f64 = 7.0;
pub(super) const FRAME_WALL_BASE: f64 = 18.0;

// ── Side-view panels ────────────────────────────────────────────────
pub(super) const PANEL_THICKNESS: f64 = 5.0;
pub(super) const PANEL_END_INSET: f64 = 2.0;
pub(super) const CHAMFER_PANEL_WIDTH: f64 = 18.0;
pub(super) const CHAMFER_PANEL_HEIGHT: f64 = 40.0;
pub(super) const CHAMFER_PANEL_DROP: f64 = 18.0;

// ── Annotations ─────────────────────────────────────────────────────
// Dimension lines sit in bands just outside (or inside) the outline,
// expressed as fractions of the margin so they stay on the canvas for any
// requested margin.
pub(super) const DIM_BAND_NEAR: f64 = 0.35;
pub(super) const DIM_BAND_FAR: f64 = 0.7;
pub(super) const EXTENSION_OVERSHOOT: f64 = 3.0;
pub(super) const LABEL_GAP: f64 = 4.0;

// ── Colors (SVG adapter) ────────────────────────────────────────────
pub(super) const OUTLINE_COLOR: &str = "#1a1a1a";
pub(super) const PANEL_COLOR: &str = "#555555";
pub(super) const ANCHOR_COLOR: &str = "#333333";
pub(super) const ANNOTATION_COLOR: &str = "#7a7a7a";
pub(super) const OUTLINE_STROKE_WIDTH: f64 = 1.2;
pub(super) const PANEL_STROKE_WIDTH: f64 = 0.8;
pub(super) const ANNOTATION_STROKE_WIDTH: f64 = 0.5;
pub(super) const STRING_STROKE_WIDTH: f64 = 0.9;
pub(super) const LABEL_FONT_SIZE: f64 = 9.0;

/// Letter tags for the dimension table, shared by every view so a letter
/// always names the same measurement.
pub(super) const LETTER_OVERALL_LENGTH: char = 'A';
pub(super) const LETTER_BODY_MIN_WIDTH: char = 'B';
pub(super) const LETTER_BODY_MIN_DEPTH: char = 'C';
pub(super) const LETTER_HEADSTOCK_WIDTH: char = 'D';
pub(super) const LETTER_WINDOW_WIDTH: char = 'E';
pub(super) const LETTER_WINDOW_LENGTH: char = 'F';
pub(super) const LETTER_BRIDGE_WIDTH: char = 'G';
pub(super) const LETTER_BRIDGE_SPACING: char = 'H';
pub(super) const LETTER_TAIL_TOP_WIDTH: char = 'I';
pub(super) const LETTER_TAIL_BOTTOM_WIDTH: char = 'J';
pub(super) const LETTER_TAIL_LENGTH: char = 'K';
pub(super) const LETTER_NECK_START: char = 'L';
pub(super) const LETTER_NECK_THICKNESS: char = 'M';
pub(super) const LETTER_SOUNDHOLE_CENTER: char = 'N';
pub(super) const LETTER_SOUNDHOLE_DIAMETER: char = 'O';
pub(super) const LETTER_PEG_SPACING: char = 'P';
pub(super) const LETTER_CUT_OUT_TOP: char = 'Q';

/// Label text for a lettered dimension.
pub(super) fn dim_label(letter: char, value: f64) -> String {
    format!("{letter} {value:.1}")
}
