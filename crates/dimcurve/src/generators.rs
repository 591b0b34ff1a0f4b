//! Free-function generators, one per curve variant.
//!
//! Each function overwrites all [`TABLE_SIZE`](crate::TABLE_SIZE) entries of a
//! caller-owned table, performs no allocation and cannot fail. Invalid shape
//! parameters are sanitized exactly as [`DimCurve::sanitized`] describes; use
//! [`DimCurve::generate`] instead when the host wants to know whether that
//! happened.

use crate::curve::DimCurve;
use crate::pwm::PwmTable;

/// `y = x`.
pub fn linear(table: &mut PwmTable) {
    DimCurve::Linear.generate(table);
}

/// `y = x^gamma`; linear when `gamma <= 0` or NaN.
pub fn gamma(table: &mut PwmTable, gamma: f32) {
    DimCurve::Gamma { gamma }.generate(table);
}

/// `y = (e^(k·x) − 1) / (e^k − 1)`; linear when `k <= 0`, NaN, or the
/// denominator degenerates.
pub fn exponential(table: &mut PwmTable, k: f32) {
    DimCurve::Exponential { rate: k }.generate(table);
}

/// DALI logarithmic arc power approximation.
pub fn dali_log(table: &mut PwmTable) {
    DimCurve::DaliLog.generate(table);
}

/// Gamma curve with every non-zero index lifted to at least `pwm_min`.
///
/// ```
/// use dimcurve::{TABLE_SIZE, led_low_end_boost};
///
/// let mut table = [0u16; TABLE_SIZE];
/// led_low_end_boost(&mut table, 2.2, 40);
/// assert_eq!(table[0], 0);
/// assert!(table[1] >= 40);
/// ```
pub fn led_low_end_boost(table: &mut PwmTable, gamma: f32, pwm_min: u16) {
    DimCurve::LedLowEndBoost { gamma, pwm_min }.generate(table);
}

/// Two-segment curve joined continuously at `threshold`.
pub fn led_hybrid(table: &mut PwmTable, threshold: f32, gamma_low: f32, gamma_high: f32) {
    DimCurve::LedHybrid {
        threshold,
        gamma_low,
        gamma_high,
    }
    .generate(table);
}

/// Smoothstep followed by `gamma`.
pub fn led_s_curve(table: &mut PwmTable, gamma: f32) {
    DimCurve::LedSCurve { gamma }.generate(table);
}
