//! 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::{convert_pressure, PressureBase, PressureUnit};
pub use temperature::{convert_temperature, from_kelvin, to_kelvin, TemperatureUnit};
