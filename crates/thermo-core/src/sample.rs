// File: crates/thermo-core/src/sample.rs
// Summary: Built-in monthly temperature table (Málaga, °C) used by the demos and benches.

use crate::series::{MonthSeries, TemperatureDataset};

pub const MALAGA_MIN: [f64; 12] = [7.4, 8.1, 9.5, 11.2, 14.4, 18.1, 20.7, 21.3, 18.9, 15.1, 11.3, 8.6];
pub const MALAGA_AVG: [f64; 12] = [12.1, 12.8, 14.4, 16.2, 19.2, 23.0, 25.6, 26.1, 23.6, 19.7, 15.8, 13.1];
pub const MALAGA_MAX: [f64; 12] = [16.8, 17.5, 19.3, 21.1, 24.0, 27.8, 30.5, 30.9, 28.3, 24.3, 20.3, 17.6];

pub fn malaga() -> TemperatureDataset {
    TemperatureDataset::from_series(
        MonthSeries::new(MALAGA_MIN),
        MonthSeries::new(MALAGA_AVG),
        MonthSeries::new(MALAGA_MAX),
    )
}
