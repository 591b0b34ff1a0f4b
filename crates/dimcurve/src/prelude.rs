//! Commonly used items.
//!
//! ```
//! use dimcurve::prelude::*;
//!
//! let table = DimCurve::LedSCurve { gamma: DEFAULT_GAMMA }.to_table();
//! assert!(validate(&table));
//! ```

pub use crate::curve::{DEFAULT_GAMMA, DimCurve, Sanitization};
pub use crate::error::TableError;
pub use crate::pwm::{PWM_MAX, PwmTable, TABLE_SIZE};
pub use crate::validate::{check, validate};
