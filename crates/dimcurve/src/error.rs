//! Error types for table validation.

use crate::pwm::{PWM_MAX, TABLE_SIZE};

/// The first structural invariant a dimming table violates.
///
/// Generators never produce these; they exist so a host can explain why a
/// table (generated, hand-edited, or received from elsewhere) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The table does not hold exactly [`TABLE_SIZE`] entries.
    #[error("table must have {} entries, got {len}", TABLE_SIZE)]
    WrongLength {
        /// Actual number of entries.
        len: usize,
    },

    /// Index 0 is not a true "off" level.
    #[error("table[0] must be 0, got {value}")]
    NonZeroStart {
        /// Value found at index 0.
        value: u16,
    },

    /// Index 255 is not full scale.
    #[error("table[255] must be {}, got {value}", PWM_MAX)]
    NotFullScale {
        /// Value found at index 255.
        value: u16,
    },

    /// An entry exceeds the 10-bit PWM range.
    #[error("table[{index}] = {value} exceeds {}", PWM_MAX)]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Offending value.
        value: u16,
    },

    /// An entry is lower than its predecessor.
    #[error("table[{index}] = {value} is below table[{}] = {previous}", .index.saturating_sub(1))]
    NotMonotonic {
        /// Offending index (always >= 1).
        index: usize,
        /// Value at `index - 1`.
        previous: u16,
        /// Value at `index`.
        value: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_wrong_length() {
        let msg = format!("{}", TableError::WrongLength { len: 100 });
        assert_eq!(msg, "table must have 256 entries, got 100");
    }

    #[test]
    fn test_error_display_endpoints() {
        let msg = TableError::NonZeroStart { value: 3 }.to_string();
        assert!(msg.contains("table[0]"));
        assert!(msg.contains('3'));

        let msg = TableError::NotFullScale { value: 1000 }.to_string();
        assert_eq!(msg, "table[255] must be 1023, got 1000");
    }

    #[test]
    fn test_error_display_not_monotonic() {
        let err = TableError::NotMonotonic {
            index: 10,
            previous: 40,
            value: 39,
        };
        assert_eq!(err.to_string(), "table[10] = 39 is below table[9] = 40");
    }

    #[test]
    fn test_error_is_std_error() {
        let err = TableError::OutOfRange {
            index: 4,
            value: 2000,
        };
        let _: &dyn std::error::Error = &err;
    }
}
