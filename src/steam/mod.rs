//! 증기 물성 근사 계산 모듈 모음.
//!
//! 모든 식은 모의 근사식이며 실제 증기표 값이 아니다.

pub mod property;
pub mod range;
pub mod saturation_by_pressure;
pub mod saturation_by_temperature;
pub mod superheated;

pub use property::{to_fixed, PropertyResult};
pub use range::{Bound, DomainRangeError, ValidRange};
pub use saturation_by_pressure::*;
pub use saturation_by_temperature::*;
pub use superheated::*;
