//! Structural checks for dimming tables.

use tracing::trace;

use crate::error::TableError;
use crate::pwm::{PWM_MAX, PwmTable, TABLE_SIZE};

/// True iff `table` starts at 0, ends at [`PWM_MAX`], stays within
/// `[0, PWM_MAX]` and never decreases.
///
/// ```
/// use dimcurve::{DimCurve, validate};
///
/// let mut table = DimCurve::DaliLog.to_table();
/// assert!(validate(&table));
///
/// table[100] = 0;
/// assert!(!validate(&table));
/// ```
pub fn validate(table: &PwmTable) -> bool {
    check(table).is_ok()
}

/// Reports the first invariant `table` violates.
///
/// Invariants are checked in order: length, `table[0] == 0`,
/// `table[255] == PWM_MAX`, every entry within range, then monotonicity.
///
/// # Errors
///
/// Returns the first [`TableError`] found.
pub fn check(table: &[u16]) -> Result<(), TableError> {
    first_violation(table).map_or(Ok(()), |err| {
        trace!(%err, "dimming table rejected");
        Err(err)
    })
}

fn first_violation(table: &[u16]) -> Option<TableError> {
    let len = table.len();
    if len != TABLE_SIZE {
        return Some(TableError::WrongLength { len });
    }
    let (Some(&first), Some(&last)) = (table.first(), table.last()) else {
        return Some(TableError::WrongLength { len });
    };
    if first != 0 {
        return Some(TableError::NonZeroStart { value: first });
    }
    if last != PWM_MAX {
        return Some(TableError::NotFullScale { value: last });
    }
    if let Some((index, &value)) = table.iter().enumerate().find(|(_, v)| **v > PWM_MAX) {
        return Some(TableError::OutOfRange { index, value });
    }
    table
        .windows(2)
        .enumerate()
        .find_map(|(offset, pair)| match *pair {
            [previous, value] if value < previous => Some(TableError::NotMonotonic {
                index: offset + 1,
                previous,
                value,
            }),
            _ => None,
        })
}
