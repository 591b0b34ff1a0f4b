//! PWM domain constants and the shared sample helpers every curve uses.

/// Maximum representable PWM level (10-bit duty cycle).
pub const PWM_MAX: u16 = 1023;

/// Number of entries in a dimming table (brightness index 0..=255).
pub const TABLE_SIZE: usize = 256;

/// A dimming lookup table: brightness index → PWM level.
///
/// Owned by the caller; generators only ever write into it.
pub type PwmTable = [u16; TABLE_SIZE];

const LAST_INDEX: f32 = (TABLE_SIZE - 1) as f32;

/// Saturating clamp of any signed value to `[0, PWM_MAX]`.
///
/// # Example
///
/// ```
/// use dimcurve::{PWM_MAX, clamp_pwm};
///
/// assert_eq!(clamp_pwm(-5), 0);
/// assert_eq!(clamp_pwm(512), 512);
/// assert_eq!(clamp_pwm(i32::MAX), PWM_MAX);
/// ```
#[inline]
pub fn clamp_pwm(value: i32) -> u16 {
    u16::try_from(value.clamp(0, i32::from(PWM_MAX))).unwrap_or(PWM_MAX)
}

/// Saturates a normalized value to `[0.0, 1.0]`.
///
/// NaN maps to `0.0`.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value > 1.0 {
        1.0
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Converts a normalized curve value to a PWM level.
///
/// Rounds `y * PWM_MAX` to nearest (ties away from zero) and clamps.
#[inline]
pub fn to_pwm(y: f32) -> u16 {
    // `as` saturates (NaN becomes 0); clamp_pwm absorbs the rest.
    clamp_pwm((y * f32::from(PWM_MAX)).round() as i32)
}

/// Normalized brightness position `i / 255` of a table index.
#[inline]
pub fn normalized(index: usize) -> f32 {
    index as f32 / LAST_INDEX
}

/// Forces exact black at index 0 and exact full scale at index 255.
#[inline]
pub fn enforce_endpoints(table: &mut PwmTable) {
    if let Some(first) = table.first_mut() {
        *first = 0;
    }
    if let Some(last) = table.last_mut() {
        *last = PWM_MAX;
    }
}

/// Fills every entry of `table` with `sample(index, x)` where `x = index / 255`.
#[inline]
pub(crate) fn fill_with<F>(table: &mut PwmTable, mut sample: F)
where
    F: FnMut(usize, f32) -> u16,
{
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = sample(i, normalized(i));
    }
}
