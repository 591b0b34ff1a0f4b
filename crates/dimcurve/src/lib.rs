//! Perceptual Dimming Curves
//!
//! This crate computes dimming lookup tables that map a linear brightness
//! index (`0..=255`) to a 10-bit PWM duty cycle (`0..=1023`), for lighting
//! firmware and the applications that configure it.
//!
//! # Overview
//!
//! The curve family covers:
//! - **Linear**: `y = x`, also the fallback for every invalid parameter set
//! - **Gamma**: power law `y = x^g`
//! - **Exponential**: normalized `(e^(k·x) − 1) / (e^k − 1)`
//! - **DALI log**: the DALI 1000:1 logarithmic arc power convention
//! - **LED low-end boost**: gamma lifted onto a minimum PWM floor
//! - **LED hybrid**: steeper gamma below a threshold, continuous at the join
//! - **LED S-curve**: smoothstep followed by gamma
//!
//! Every generated table starts at 0, ends at exactly 1023 and never
//! decreases; [`validate`] checks those invariants for any table.
//!
//! # Embedded Guarantees
//!
//! Generation is a single pass of 256 samples into a caller-owned
//! [`PwmTable`]:
//! - No heap allocations
//! - No I/O and no global state, so concurrent use on distinct tables is safe
//! - No error path: unusable parameters are replaced by defaults or fall back
//!   to the linear curve, and [`DimCurve::generate`] reports which
//!
//! # Example
//!
//! ```
//! use dimcurve::{DimCurve, PWM_MAX, Sanitization, TABLE_SIZE, led_hybrid, validate};
//!
//! // Free-function surface
//! let mut table = [0u16; TABLE_SIZE];
//! led_hybrid(&mut table, 0.2, 3.0, 2.2);
//! assert!(validate(&table));
//!
//! // Typed surface with a sanitization report
//! let curve = DimCurve::Exponential { rate: -4.0 };
//! assert_eq!(curve.generate(&mut table), Sanitization::LinearFallback);
//! assert_eq!(table[TABLE_SIZE - 1], PWM_MAX);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod error;
pub mod generators;
pub mod prelude;
pub mod pwm;
pub mod validate;

pub use curve::{
    DALI_MAX_LEVEL, DEFAULT_GAMMA, DEFAULT_GAMMA_LOW, DEFAULT_THRESHOLD, DimCurve, Sanitization,
    dali_arc_fraction,
};
pub use error::TableError;
pub use generators::{
    dali_log, exponential, gamma, led_hybrid, led_low_end_boost, led_s_curve, linear,
};
pub use pwm::{PWM_MAX, PwmTable, TABLE_SIZE, clamp_pwm, clamp01, enforce_endpoints, to_pwm};
pub use validate::{check, validate};
