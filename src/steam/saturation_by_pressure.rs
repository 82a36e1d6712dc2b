use tracing::{debug, warn};

use super::property::{to_fixed, PropertyResult};
use super::range::{DomainRangeError, SATURATION_PRESSURE_RANGE};
use crate::conversion::PASCAL_CONVERTER;

/// 압력 기준 포화 상태 근사값.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationByPressure {
    /// 환산된 압력(Pa)
    pub pressure_pa: f64,
    pub temperature: String,
    pub latent_heat: String,
    pub enthalpy_vapor: String,
    pub enthalpy_water: String,
    pub volume_vapor: String,
    pub volume_water: String,
}

impl SaturationByPressure {
    pub fn to_result(&self) -> PropertyResult {
        PropertyResult::new()
            .with("temperature", self.temperature.clone())
            .with("latent_heat", self.latent_heat.clone())
            .with("enthalpy_vapor", self.enthalpy_vapor.clone())
            .with("enthalpy_water", self.enthalpy_water.clone())
            .with("volume_vapor", self.volume_vapor.clone())
            .with("volume_water", self.volume_water.clone())
    }
}

/// Pa 압력에서 포화 상태를 추정한다.
pub fn saturation_at_pascal(pressure_pa: f64) -> Result<SaturationByPressure, DomainRangeError> {
    let p = SATURATION_PRESSURE_RANGE.check(Some(pressure_pa))?;
    let bar = p / 1e5;
    debug!(pressure_pa = p, "saturation by pressure");
    Ok(SaturationByPressure {
        pressure_pa: p,
        temperature: to_fixed(bar * 100.0, 2),
        latent_heat: to_fixed(2257.0 - p / 1e6 * 500.0, 2),
        enthalpy_vapor: to_fixed(2500.0 + bar * 10.0, 2),
        enthalpy_water: to_fixed(420.0 + bar * 5.0, 2),
        volume_vapor: to_fixed(0.001 + bar * 0.0001, 6),
        volume_water: to_fixed(0.001 / (bar * 10.0), 6),
    })
}

/// 입력 단위의 압력에서 포화 상태를 추정한다.
///
/// Pa 기준 표에 없는 단위는 오류가 아니라 결과 없음(`Ok(None)`)을 돌려준다.
pub fn saturation_by_pressure(
    value: f64,
    unit: &str,
) -> Result<Option<SaturationByPressure>, DomainRangeError> {
    match PASCAL_CONVERTER.convert(value, unit, "Pa") {
        Some(p) => saturation_at_pascal(p).map(Some),
        None => {
            warn!(value, unit, "pressure unit has no Pa factor, no result");
            Ok(None)
        }
    }
}
