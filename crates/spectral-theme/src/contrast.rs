//! WCAG 2.x relative luminance and contrast ratio.

use crate::color::Rgb;
use tracing::warn;

/// AA threshold for body text.
pub const AA_NORMAL: f64 = 4.5;

/// AA threshold for large text and UI components.
pub const AA_LARGE: f64 = 3.0;

const LINEAR_THRESHOLD: f64 = 0.03928;

/// Relative luminance, `0.0` (black) to `1.0` (white).
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let [r, g, b] = color.normalized().map(|c| {
        if c <= LINEAR_THRESHOLD {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });

    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Contrast ratio between two colors, `1.0` to `21.0`. Symmetric.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };

    (hi + 0.05) / (lo + 0.05)
}

/// Contrast ratio between two color strings.
///
/// Unparseable input is treated as black and logged; use [`Rgb::parse`]
/// directly to reject it instead.
#[must_use]
pub fn calculate_contrast_ratio(foreground: &str, background: &str) -> f64 {
    contrast_ratio(parse_or_black(foreground), parse_or_black(background))
}

#[must_use]
pub fn meets_wcag_aa(ratio: f64, large_text: bool) -> bool {
    ratio >= if large_text { AA_LARGE } else { AA_NORMAL }
}

pub(crate) fn parse_or_black(color: &str) -> Rgb {
    Rgb::parse(color).unwrap_or_else(|e| {
        warn!(color, error = %e, "unrecognized color; treating as black");
        Rgb::BLACK
    })
}

///
/// TESTS
///
