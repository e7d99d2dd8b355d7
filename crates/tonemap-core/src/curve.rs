use glam::Vec4;

// ---------------------------------------------------------------------------
// Filmic curve coefficients
// ---------------------------------------------------------------------------
//
// Empirically tuned; preserved bit-for-bit because changing any of them
// changes the visual response. The curve is a rational approximation
//
//     f(x) = (A·x² + B·x) / (C·x² + D·x + E)
//
// which is near-linear in shadows, rolls off in the highlights, passes
// through 0 at x = 0 and approaches A/C ≈ 1.0588 as x → ∞ (the clamp
// takes over well before that).

const NUM_A: f32 = 1.04874694;
const NUM_B: f32 = 3.13439703;
const DEN_A: f32 = 0.990440011;
const DEN_B: f32 = 3.24044991;
const DEN_C: f32 = 0.651790023;

/// Map one linear HDR channel to the displayable [0, 1] range.
///
/// Defined for all finite `x >= 0`; the denominator is a sum of
/// non-negative terms plus a positive constant, so it is always > 0 and
/// the division cannot fault. The final clamp is a hard saturate: small
/// excursions past 1.0 (the curve crosses unity near x ≈ 4.4) are
/// truncated rather than rolled off further.
pub fn filmic_channel(x: f32) -> f32 {
    let num = (x * NUM_A + NUM_B) * x;
    let den = (x * DEN_A + DEN_B) * x + DEN_C;
    (num / den).clamp(0.0, 1.0)
}

/// Tone-map a linear HDR rgba sample to a display-ready LDR value.
///
/// Channels are processed identically and independently; the input alpha
/// is discarded and the output alpha is always exactly 1. Pure function —
/// the same input always produces the same output.
pub fn tonemap(hdr: Vec4) -> Vec4 {
    Vec4::new(
        filmic_channel(hdr.x),
        filmic_channel(hdr.y),
        filmic_channel(hdr.z),
        1.0,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Boundary behaviour ---------------------------------------------------

    #[test]
    fn black_maps_to_black() {
        // Numerator is exactly 0 at x = 0; denominator is the constant term.
        assert_eq!(filmic_channel(0.0), 0.0);
        assert_eq!(tonemap(Vec4::new(0.0, 0.0, 0.0, 1.0)), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn unit_input_maps_to_known_value() {
        // num = 1.04874694 + 3.13439703 = 4.18314397
        // den = 0.990440011 + 3.24044991 + 0.651790023 = 4.88267994
        // ratio ≈ 0.8567
        let y = filmic_channel(1.0);
        assert!((y - 0.8567).abs() < 1e-3, "got {y}");
    }

    #[test]
    fn very_bright_input_saturates_to_white() {
        let out = tonemap(Vec4::new(100.0, 100.0, 100.0, 1.0));
        assert_eq!(out, Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn saturates_by_eight() {
        // The un-clamped curve crosses 1.0 before x = 8.
        assert!((filmic_channel(8.0) - 1.0).abs() < 1e-4);
    }

    // --- Range and shape ------------------------------------------------------

    #[test]
    fn output_stays_in_unit_interval() {
        for &x in &[0.0, 1e-4, 0.1, 0.5, 1.0, 2.0, 4.0, 8.0, 100.0, 1e4, 1e6] {
            let y = filmic_channel(x);
            assert!((0.0..=1.0).contains(&y), "f({x}) = {y} escaped [0,1]");
        }
    }

    #[test]
    fn shoulder_is_monotonic() {
        let sweep = [0.0, 0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];
        let mut prev = -1.0f32;
        for &x in &sweep {
            let y = filmic_channel(x);
            assert!(y >= prev, "f({x}) = {y} < previous {prev}");
            prev = y;
        }
        // The sweep must reach full white at the top end.
        assert!((prev - 1.0).abs() < 1e-4, "sweep topped out at {prev}");
    }

    #[test]
    fn channels_are_independent() {
        let out = tonemap(Vec4::new(0.0, 1.0, 100.0, 1.0));
        assert_eq!(out.x, filmic_channel(0.0));
        assert_eq!(out.y, filmic_channel(1.0));
        assert_eq!(out.z, filmic_channel(100.0));
    }

    // --- Alpha invariant ------------------------------------------------------

    #[test]
    fn output_alpha_is_always_one() {
        for &a in &[0.0, 0.5, 1.0, 37.0] {
            let out = tonemap(Vec4::new(0.5, 0.5, 0.5, a));
            assert_eq!(out.w, 1.0, "alpha {a} leaked through");
        }
    }

    // --- Determinism ----------------------------------------------------------

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let v = Vec4::new(0.25, 1.5, 3.0, 0.7);
        assert_eq!(tonemap(v), tonemap(v));
    }
}
