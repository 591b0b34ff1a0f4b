//! Fuzzes curve selection and shape parameters.
//!
//! The first byte selects the curve; the remaining bytes are read as raw f32
//! bit patterns (so NaN, infinities and subnormals all occur) plus a u16
//! floor. Every generated table must validate.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_dim_curve

#![deny(static_mut_refs)]
#![no_main]

use dimcurve::{DimCurve, TABLE_SIZE, check};
use libfuzzer_sys::fuzz_target;

fn f32_at(data: &[u8], offset: usize) -> f32 {
    let mut bytes = [0u8; 4];
    if let Some(chunk) = data.get(offset..offset + 4) {
        bytes.copy_from_slice(chunk);
    }
    f32::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let a = f32_at(rest, 0);
    let b = f32_at(rest, 4);
    let c = f32_at(rest, 8);
    let pwm_min = rest
        .get(12..14)
        .map_or(0, |chunk| u16::from_le_bytes([chunk[0], chunk[1]]));

    let curve = match selector % 7 {
        0 => DimCurve::Linear,
        1 => DimCurve::Gamma { gamma: a },
        2 => DimCurve::Exponential { rate: a },
        3 => DimCurve::DaliLog,
        4 => DimCurve::LedLowEndBoost { gamma: a, pwm_min },
        5 => DimCurve::LedHybrid {
            threshold: a,
            gamma_low: b,
            gamma_high: c,
        },
        _ => DimCurve::LedSCurve { gamma: a },
    };

    let mut table = [0u16; TABLE_SIZE];
    curve.generate(&mut table);
    if let Err(err) = check(&table) {
        panic!("{:?} produced an invalid table: {}", curve, err);
    }
});
