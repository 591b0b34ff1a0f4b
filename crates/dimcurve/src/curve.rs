//! Dimming curve selection, parameter sanitization and table rendering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pwm::{
    PWM_MAX, PwmTable, TABLE_SIZE, clamp_pwm, clamp01, enforce_endpoints, fill_with, to_pwm,
};

/// Gamma used by the LED presets when none (or a non-positive one) is given.
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Low-segment gamma of [`DimCurve::LedHybrid`] when none is given.
pub const DEFAULT_GAMMA_LOW: f32 = 3.0;

/// Join point of [`DimCurve::LedHybrid`] when none (or an invalid one) is given.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Highest DALI arc power level (255 is the DALI "mask" value).
pub const DALI_MAX_LEVEL: u8 = 254;

const DALI_DYNAMIC_RANGE: f32 = 1000.0;

fn default_gamma() -> f32 {
    DEFAULT_GAMMA
}

fn default_gamma_low() -> f32 {
    DEFAULT_GAMMA_LOW
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

/// A dimming curve variant together with its shape parameters.
///
/// All variants map brightness index `0..=255` to PWM `0..=1023` and every
/// produced table satisfies [`crate::validate`]. Invalid parameters never
/// produce an error: they are replaced by defaults, or the whole curve falls
/// back to [`DimCurve::Linear`]. [`DimCurve::generate`] reports which of the
/// two happened.
///
/// # Configuration
///
/// Curves deserialize from host configuration with a `curve` tag. Omitted
/// shape parameters take their documented defaults.
///
/// ```
/// use dimcurve::DimCurve;
///
/// let curve: DimCurve = serde_json::from_str(r#"{ "curve": "led_hybrid", "threshold": 0.25 }"#)?;
/// assert_eq!(
///     curve,
///     DimCurve::LedHybrid { threshold: 0.25, gamma_low: 3.0, gamma_high: 2.2 }
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum DimCurve {
    /// `y = x`. The fallback for every invalid parameter set.
    #[default]
    Linear,

    /// Power law `y = x^gamma`.
    ///
    /// `gamma` must be > 0, otherwise (including NaN) the curve is linear.
    Gamma {
        /// Exponent (typical 2.0..2.8).
        #[serde(default = "default_gamma")]
        gamma: f32,
    },

    /// Normalized exponential ease `y = (e^(k·x) − 1) / (e^k − 1)`.
    ///
    /// `rate` must be > 0 with a finite, non-zero `e^k − 1`, otherwise the
    /// curve is linear.
    Exponential {
        /// Rate `k`.
        rate: f32,
    },

    /// DALI logarithmic arc power curve (1000:1 over levels 1..=254).
    DaliLog,

    /// Gamma curve lifted onto a minimum PWM level for every non-zero index.
    LedLowEndBoost {
        /// Exponent; non-positive or NaN uses [`DEFAULT_GAMMA`].
        #[serde(default = "default_gamma")]
        gamma: f32,
        /// Floor for indices 1..=255, clamped to [`PWM_MAX`].
        #[serde(default)]
        pwm_min: u16,
    },

    /// Steeper gamma below `threshold`, scaled to meet `x^gamma_high` at the join.
    LedHybrid {
        /// Join point in `(0, 1]`. Values above 1 clamp to 1; anything else
        /// invalid uses [`DEFAULT_THRESHOLD`].
        #[serde(default = "default_threshold")]
        threshold: f32,
        /// Low segment exponent; non-positive or NaN uses [`DEFAULT_GAMMA_LOW`].
        #[serde(default = "default_gamma_low")]
        gamma_low: f32,
        /// High segment exponent; non-positive or NaN uses [`DEFAULT_GAMMA`].
        #[serde(default = "default_gamma")]
        gamma_high: f32,
    },

    /// Smoothstep `x²(3 − 2x)` followed by a gamma pass.
    LedSCurve {
        /// Exponent; non-positive or NaN uses [`DEFAULT_GAMMA`].
        #[serde(default = "default_gamma")]
        gamma: f32,
    },
}

/// What sanitization did to a curve's parameters before rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sanitization {
    /// Parameters were used as given.
    #[default]
    Clean,
    /// At least one parameter was replaced by a default or clamped.
    Adjusted,
    /// The parameters were unusable and the linear curve was rendered instead.
    LinearFallback,
}

impl Sanitization {
    /// True when the table reflects exactly the requested parameters.
    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }
}

/// Fraction of full output for a DALI arc power level.
///
/// Level 0 is off; levels above [`DALI_MAX_LEVEL`] are treated as 254.
///
/// ```
/// use dimcurve::dali_arc_fraction;
///
/// assert_eq!(dali_arc_fraction(0), 0.0);
/// assert!((dali_arc_fraction(1) - 0.001).abs() < 1e-5);
/// assert_eq!(dali_arc_fraction(254), 1.0);
/// ```
pub fn dali_arc_fraction(level: u8) -> f32 {
    if level == 0 {
        return 0.0;
    }
    let level = level.min(DALI_MAX_LEVEL);
    let exponent =
        (f32::from(level) - f32::from(DALI_MAX_LEVEL)) / f32::from(DALI_MAX_LEVEL - 1);
    DALI_DYNAMIC_RANGE.powf(exponent)
}

/// Replaces a non-positive or NaN exponent by `default`.
fn positive_or(
    curve: &'static str,
    param: &'static str,
    value: f32,
    default: f32,
    report: &mut Sanitization,
) -> f32 {
    if value > 0.0 {
        return value;
    }
    debug!(curve, param, value, default, "shape parameter replaced by default");
    *report = Sanitization::Adjusted;
    default
}

fn linear_fallback(
    curve: &'static str,
    param: &'static str,
    value: f32,
) -> (DimCurve, Sanitization) {
    debug!(curve, param, value, "unusable curve parameter, falling back to linear");
    (DimCurve::Linear, Sanitization::LinearFallback)
}

impl DimCurve {
    /// Stable snake_case identifier, identical to the serde `curve` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Gamma { .. } => "gamma",
            Self::Exponential { .. } => "exponential",
            Self::DaliLog => "dali_log",
            Self::LedLowEndBoost { .. } => "led_low_end_boost",
            Self::LedHybrid { .. } => "led_hybrid",
            Self::LedSCurve { .. } => "led_s_curve",
        }
    }

    /// Returns the curve that will actually be rendered for these parameters.
    ///
    /// The returned curve always has usable parameters: sanitizing it again
    /// yields [`Sanitization::Clean`].
    pub fn sanitized(self) -> (Self, Sanitization) {
        let name = self.name();
        match self {
            Self::Linear | Self::DaliLog => (self, Sanitization::Clean),
            Self::Gamma { gamma } => {
                // Also rejects NaN; +inf is kept and crushes all but full scale.
                if gamma > 0.0 {
                    (self, Sanitization::Clean)
                } else {
                    linear_fallback(name, "gamma", gamma)
                }
            }
            Self::Exponential { rate } => {
                // Also rejects NaN.
                if !(rate > 0.0) {
                    return linear_fallback(name, "rate", rate);
                }
                let denominator = rate.exp() - 1.0;
                if denominator > 0.0 && denominator.is_finite() {
                    (self, Sanitization::Clean)
                } else {
                    linear_fallback(name, "rate", rate)
                }
            }
            Self::LedLowEndBoost { gamma, pwm_min } => {
                let mut report = Sanitization::Clean;
                let pwm_min = if pwm_min > PWM_MAX {
                    debug!(curve = name, pwm_min, "pwm_min clamped to full scale");
                    report = Sanitization::Adjusted;
                    PWM_MAX
                } else {
                    pwm_min
                };
                let gamma = positive_or(name, "gamma", gamma, DEFAULT_GAMMA, &mut report);
                (Self::LedLowEndBoost { gamma, pwm_min }, report)
            }
            Self::LedHybrid {
                threshold,
                gamma_low,
                gamma_high,
            } => {
                let mut report = Sanitization::Clean;
                let threshold = if threshold > 1.0 {
                    debug!(curve = name, threshold, "threshold clamped to 1.0");
                    report = Sanitization::Adjusted;
                    1.0
                } else {
                    positive_or(name, "threshold", threshold, DEFAULT_THRESHOLD, &mut report)
                };
                let gamma_low =
                    positive_or(name, "gamma_low", gamma_low, DEFAULT_GAMMA_LOW, &mut report);
                let gamma_high =
                    positive_or(name, "gamma_high", gamma_high, DEFAULT_GAMMA, &mut report);
                (
                    Self::LedHybrid {
                        threshold,
                        gamma_low,
                        gamma_high,
                    },
                    report,
                )
            }
            Self::LedSCurve { gamma } => {
                let mut report = Sanitization::Clean;
                let gamma = positive_or(name, "gamma", gamma, DEFAULT_GAMMA, &mut report);
                (Self::LedSCurve { gamma }, report)
            }
        }
    }

    /// Sanitizes the parameters and overwrites all 256 entries of `table`.
    ///
    /// Never fails and never allocates. The returned [`Sanitization`] is
    /// purely diagnostic; the table is valid either way.
    ///
    /// # Example
    ///
    /// ```
    /// use dimcurve::{DimCurve, PWM_MAX, Sanitization, TABLE_SIZE, validate};
    ///
    /// let mut table = [0u16; TABLE_SIZE];
    /// let report = DimCurve::Gamma { gamma: -1.0 }.generate(&mut table);
    ///
    /// assert_eq!(report, Sanitization::LinearFallback);
    /// assert_eq!(table[255], PWM_MAX);
    /// assert!(validate(&table));
    /// ```
    pub fn generate(&self, table: &mut PwmTable) -> Sanitization {
        let (curve, report) = self.sanitized();
        curve.render(table);
        report
    }

    /// Generates into a fresh table.
    pub fn to_table(&self) -> PwmTable {
        let mut table = [0u16; TABLE_SIZE];
        self.generate(&mut table);
        table
    }

    /// Shapes every entry; parameters must already be sanitized.
    fn render(&self, table: &mut PwmTable) {
        match *self {
            Self::Linear => fill_with(table, |_, x| to_pwm(x)),
            Self::Gamma { gamma } => fill_with(table, |_, x| to_pwm(x.powf(gamma))),
            Self::Exponential { rate } => {
                let denominator = rate.exp() - 1.0;
                fill_with(table, |_, x| {
                    to_pwm(clamp01(((rate * x).exp() - 1.0) / denominator))
                });
            }
            Self::DaliLog => fill_with(table, |i, _| {
                let level = u8::try_from(i).unwrap_or(u8::MAX);
                if level == 0 { 0 } else { to_pwm(dali_arc_fraction(level)) }
            }),
            Self::LedLowEndBoost { gamma, pwm_min } => {
                let floor = f32::from(pwm_min);
                let span = f32::from(PWM_MAX.saturating_sub(pwm_min));
                fill_with(table, |i, x| {
                    if i == 0 {
                        return 0;
                    }
                    clamp_pwm((floor + x.powf(gamma) * span).round() as i32)
                });
            }
            Self::LedHybrid {
                threshold,
                gamma_low,
                gamma_high,
            } => {
                let at_join = threshold.powf(gamma_high);
                fill_with(table, |_, x| {
                    let y = if x < threshold {
                        let xn = if threshold > 0.0 { x / threshold } else { 0.0 };
                        xn.powf(gamma_low) * at_join
                    } else {
                        x.powf(gamma_high)
                    };
                    to_pwm(clamp01(y))
                });
            }
            Self::LedSCurve { gamma } => fill_with(table, |_, x| {
                let s = x * x * (3.0 - 2.0 * x);
                to_pwm(clamp01(s).powf(gamma))
            }),
        }
        enforce_endpoints(table);
    }
}
