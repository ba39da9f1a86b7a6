// File: crates/thermo-core/tests/common/mod.rs
// Purpose: Shared fixture: three series spanning -3..19 with a 14.3 avg in June.

#![allow(dead_code)]

use thermo_core::TemperatureDataset;

pub const MIN: [f64; 12] = [-2.0, -3.0, 0.0, 2.0, 5.0, 8.0, 10.0, 10.0, 7.0, 4.0, 1.0, -1.0];
pub const AVG: [f64; 12] = [3.0, 4.0, 6.0, 8.0, 11.0, 14.3, 16.0, 16.0, 13.0, 9.0, 6.0, 3.5];
pub const MAX: [f64; 12] = [18.0, 9.0, 12.0, 14.0, 16.0, 18.0, 19.0, 18.0, 17.0, 13.0, 10.0, 8.0];

pub fn dataset() -> TemperatureDataset {
    TemperatureDataset::try_new(&MIN, &AVG, &MAX).expect("fixture is well formed")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
