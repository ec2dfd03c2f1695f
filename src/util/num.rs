/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Magnitude from which integral values switch to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e16;

/// Renders a real number the way the language prints it.
///
/// Integral values keep a trailing `.0` so that `3` prints as `3.0`; other
/// finite values use the shortest text that reads back to the same `f64`.
/// Magnitudes from `1e16` up and below `1e-4` use exponent notation with a
/// signed, two-digit exponent (`1e+20`, `1e-05`), and the non-finite values
/// print as `inf`, `-inf` and `nan`.
///
/// Polynomial rendering compares coefficient text against `"0.0"` and
/// `"1.0"`, so this function is the single source of that text.
///
/// ## Example
/// ```
/// use polycalc::util::num::format_real;
///
/// assert_eq!(format_real(3.0), "3.0");
/// assert_eq!(format_real(4.3), "4.3");
/// assert_eq!(format_real(-0.5), "-0.5");
/// assert_eq!(format_real(1e20), "1e+20");
/// assert_eq!(format_real(0.00001), "1e-05");
/// assert_eq!(format_real(2f64.powi(60)), "1.152921504606847e+18");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// assert_eq!(format_real(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < EXPONENT_THRESHOLD {
        return format!("{value:.1}");
    }
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => text,
    }
}

/// Converts a polynomial degree (or any index) to `f64`.
///
/// Degrees are bounded by the length of a coefficient vector built from
/// source text, far below [`MAX_SAFE_U64_INT`], so the conversion is exact
/// for every polynomial the language can express.
///
/// ## Example
/// ```
/// use polycalc::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(4), 4.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64(value: usize) -> f64 {
    debug_assert!(value as u64 <= MAX_SAFE_U64_INT);
    value as f64
}
