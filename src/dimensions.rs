//! Dimension derivation — the parametric heart of the plan.
//!
//! Every structural measurement of the instrument is derived from two
//! inputs, the scale length and the string count, through a fixed chain of
//! empirical piecewise rules. The breakpoints and clamps below were tuned
//! against built instruments; they are reproduced exactly, including the
//! deliberate step at a 350 mm scale in the soundhole rule.
//!
//! A `DimensionSet` is computed once per request and shared unchanged by
//! the three view assemblers. Nothing downstream re-derives a value from
//! the raw inputs.

use serde::Serialize;

use crate::error::PlanError;

/// Distance between neighbouring peg holes, in millimetres.
pub const PEG_SPACING: f64 = 36.0;

/// Height of the solid block above the hand window, in millimetres.
/// The peg row sits at its vertical midpoint.
pub const CUT_OUT_TOP: f64 = 40.0;

/// The complete set of derived structural measurements for one request.
///
/// All values are millimetres and non-negative. The set is immutable once
/// computed; recomputation produces a fresh set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionSet {
    /// Peg-to-bridge string length.
    pub scale_mm: f64,
    /// Total body length from headstock tip to tail end.
    pub overall_length: f64,
    /// Body width at the tail end.
    pub body_min_width: f64,
    /// Body depth behind the soundboard.
    pub body_min_depth: f64,
    /// Body width at the headstock end.
    pub headstock_width: f64,
    /// Width of the hand window cutout.
    pub window_width: f64,
    /// Length of the hand window cutout.
    pub window_length: f64,
    /// Width of the bridge blank.
    pub bridge_width: f64,
    /// Gap between neighbouring strings at the bridge.
    pub bridge_spacing: f64,
    /// Tailpiece width at its upper (bridge-facing) edge.
    pub tail_top_width: f64,
    /// Tailpiece width at its lower edge.
    pub tail_bottom_width: f64,
    /// Tailpiece length.
    pub tail_length: f64,
    /// Length position where the neck transitions into the full-depth body.
    pub neck_start: f64,
    /// Depth of the neck section.
    pub neck_thickness: f64,
    /// Length position of the soundhole centre.
    pub soundhole_center: f64,
    /// Soundhole diameter.
    pub soundhole_diameter: f64,
    /// Height of the solid block above the hand window.
    pub cut_out_top: f64,
    /// Distance between neighbouring peg holes.
    pub peg_spacing: f64,
    /// Length position of the peg row.
    pub peg_line: f64,
    /// Length position of the bridge (string contact line).
    pub bridge_line: f64,
}

impl DimensionSet {
    /// Widest point of the body, headstock or tail end.
    pub fn max_body_width(&self) -> f64 {
        self.headstock_width.max(self.body_min_width)
    }
}

/// Linear interpolation of `x` from `[x0, x1]` onto `[y0, y1]`.
fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// Check the raw structural inputs. This is the single validation point;
/// nothing downstream re-checks them.
pub(crate) fn validate_inputs(scale_cm: f64, num_strings: u32) -> Result<(), PlanError> {
    if !scale_cm.is_finite() || scale_cm < 26.0 || scale_cm > 70.0 {
        return Err(PlanError::InvalidScaleLength(scale_cm));
    }
    if num_strings < 1 {
        return Err(PlanError::InvalidStringCount(num_strings));
    }
    Ok(())
}

/// Derive every structural dimension from the scale length (cm) and the
/// string count.
///
/// Fails with an `InvalidScaleLength` / `InvalidStringCount` error before
/// any partial computation when the inputs fall outside the supported
/// domain (scale 26..=70 cm, at least one string).
pub fn compute_dimensions(scale_cm: f64, num_strings: u32) -> Result<DimensionSet, PlanError> {
    validate_inputs(scale_cm, num_strings)?;

    let scale_mm = scale_cm * 10.0;
    let n = num_strings as f64;

    // Overall length: long scales get a proportionally shorter tail section.
    let length_multiplier = if scale_cm <= 40.0 {
        1.66
    } else if scale_cm >= 56.0 {
        1.43
    } else {
        lerp(scale_cm, 40.0, 56.0, 1.66, 1.43)
    };
    let overall_length = scale_mm * length_multiplier;

    let body_min_width = if scale_cm <= 32.0 {
        160.0
    } else if scale_cm <= 37.0 {
        lerp(scale_cm, 32.0, 37.0, 160.0, 190.0)
    } else if scale_cm < 56.0 {
        lerp(scale_cm, 37.0, 56.0, 190.0, 210.0)
    } else {
        210.0
    };

    let bridge_width = if scale_cm <= 30.0 {
        60.0
    } else if scale_cm >= 56.0 {
        70.0
    } else {
        lerp(scale_cm, 30.0, 56.0, 60.0, 70.0)
    };

    // 12 mm margin on each side of the outermost strings.
    let bridge_spacing = if num_strings == 1 {
        0.0
    } else {
        ((bridge_width - 24.0) / (n - 1.0)).max(0.0)
    };

    let body_min_depth = (0.12 * scale_mm).clamp(45.0, 70.0);

    let window_width = PEG_SPACING * n;
    let window_length = 0.5 * scale_mm + 20.0;
    let headstock_width = window_width + 50.0;

    let tail_top_width = bridge_spacing * n;
    let tail_bottom_width = tail_top_width * 0.7;
    let tail_length = 0.4 * (overall_length - scale_mm).max(0.0);

    let neck_thickness = if scale_mm > 450.0 { 35.0 } else { 25.0 };

    // The 350 mm step in both divisor and diameter is deliberate; small
    // instruments get a markedly smaller soundhole placed further down.
    let soundhole_divisor = if scale_mm >= 350.0 { 1.85 } else { 1.9 };
    let soundhole_diameter = if scale_mm >= 350.0 { 50.0 } else { 30.0 };
    let window_end = window_length + CUT_OUT_TOP;
    let soundhole_center =
        (scale_mm - window_length - CUT_OUT_TOP / 2.0) / soundhole_divisor + window_end;

    let neck_start = (soundhole_center - window_end) / 3.0 + window_end;

    let peg_line = CUT_OUT_TOP / 2.0;
    let bridge_line = peg_line + scale_mm;

    Ok(DimensionSet {
        scale_mm,
        overall_length,
        body_min_width,
        body_min_depth,
        headstock_width,
        window_width,
        window_length,
        bridge_width,
        bridge_spacing,
        tail_top_width,
        tail_bottom_width,
        tail_length,
        neck_start,
        neck_thickness,
        soundhole_center,
        soundhole_diameter,
        cut_out_top: CUT_OUT_TOP,
        peg_spacing: PEG_SPACING,
        peg_line,
        bridge_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_case_40cm_3_strings() {
        let d = compute_dimensions(40.0, 3).unwrap();
        assert_eq!(d.overall_length, 664.0);
        assert_eq!(d.window_width, 108.0);
        assert_eq!(d.headstock_width, 158.0);
        assert_eq!(d.scale_mm, 400.0);
        assert_eq!(d.window_length, 220.0);
    }

    #[test]
    fn bridge_width_breakpoints_are_exact() {
        assert_eq!(compute_dimensions(30.0, 2).unwrap().bridge_width, 60.0);
        assert_eq!(compute_dimensions(56.0, 2).unwrap().bridge_width, 70.0);
    }

    #[test]
    fn body_width_breakpoints_are_exact() {
        assert_eq!(compute_dimensions(32.0, 2).unwrap().body_min_width, 160.0);
        assert_eq!(compute_dimensions(37.0, 2).unwrap().body_min_width, 190.0);
        assert_eq!(compute_dimensions(56.0, 2).unwrap().body_min_width, 210.0);
    }

    #[test]
    fn neck_thickness_threshold_is_strict() {
        assert_eq!(compute_dimensions(45.0, 2).unwrap().neck_thickness, 25.0);
        assert_eq!(compute_dimensions(45.001, 2).unwrap().neck_thickness, 35.0);
    }

    #[test]
    fn soundhole_step_at_350mm() {
        let below = compute_dimensions(34.9, 2).unwrap();
        let at = compute_dimensions(35.0, 2).unwrap();
        assert_eq!(below.soundhole_diameter, 30.0);
        assert_eq!(at.soundhole_diameter, 50.0);
    }

    #[test]
    fn single_string_has_zero_bridge_spacing() {
        let d = compute_dimensions(40.0, 1).unwrap();
        assert_eq!(d.bridge_spacing, 0.0);
        assert_eq!(d.tail_top_width, 0.0);
    }

    #[test]
    fn rejects_out_of_domain_inputs() {
        assert!(compute_dimensions(25.9, 3).is_err());
        assert!(compute_dimensions(70.1, 3).is_err());
        assert!(compute_dimensions(f64::NAN, 3).is_err());
        assert!(compute_dimensions(f64::INFINITY, 3).is_err());
        assert!(compute_dimensions(40.0, 0).is_err());
    }

    #[test]
    fn bridge_line_is_peg_line_plus_scale() {
        let d = compute_dimensions(52.5, 4).unwrap();
        assert_eq!(d.bridge_line, d.peg_line + d.scale_mm);
    }
}
