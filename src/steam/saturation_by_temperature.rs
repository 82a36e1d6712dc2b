use tracing::debug;

use super::property::{to_fixed, PropertyResult};
use super::range::{DomainRangeError, SATURATION_TEMPERATURE_RANGE};
use crate::conversion;

/// 온도 기준 포화 상태 근사값. 증기표가 아니라 단순 모의식이다.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationByTemperature {
    /// 환산된 온도(K)
    pub temperature_k: f64,
    /// 증기압
    pub vapor_pressure: String,
    /// 증발잠열(kJ/kg)
    pub latent_heat: String,
    /// 포화 증기 비엔탈피(kJ/kg)
    pub enthalpy_vapor: String,
    /// 포화수 비엔탈피(kJ/kg)
    pub enthalpy_water: String,
    /// 포화 증기 비체적(m³/kg)
    pub volume_vapor: String,
    /// 포화수 비체적(m³/kg)
    pub volume_water: String,
}

impl SaturationByTemperature {
    /// 출력 필드에 대응하는 결과를 만든다.
    pub fn to_result(&self) -> PropertyResult {
        PropertyResult::new()
            .with("temp", to_fixed(self.temperature_k, 2))
            .with("pressure", self.vapor_pressure.clone())
            .with("latent_heat", self.latent_heat.clone())
            .with("enthalpy_vapor", self.enthalpy_vapor.clone())
            .with("enthalpy_water", self.enthalpy_water.clone())
            .with("volume_vapor", self.volume_vapor.clone())
            .with("volume_water", self.volume_water.clone())
    }
}

/// 켈빈 온도에서 포화 상태를 추정한다.
pub fn saturation_at_kelvin(temp_k: f64) -> Result<SaturationByTemperature, DomainRangeError> {
    estimate(Some(temp_k))
}

/// 입력 단위의 온도에서 포화 상태를 추정한다.
///
/// 인식하지 못한 단위는 환산값 없음으로 이어져 범위 오류로 보고된다.
pub fn saturation_by_temperature(
    value: f64,
    unit: &str,
) -> Result<SaturationByTemperature, DomainRangeError> {
    estimate(conversion::convert(value, unit, "K"))
}

fn estimate(temp_k: Option<f64>) -> Result<SaturationByTemperature, DomainRangeError> {
    let t = SATURATION_TEMPERATURE_RANGE.check(temp_k)?;
    let dt = t - 273.15;
    debug!(temp_k = t, "saturation by temperature");
    Ok(SaturationByTemperature {
        temperature_k: t,
        vapor_pressure: to_fixed(0.000611 * 10f64.powf(dt / 10.0), 4),
        latent_heat: to_fixed(2257.0 - dt * 0.5, 2),
        enthalpy_vapor: to_fixed(2500.0 + dt * 10.0, 2),
        enthalpy_water: to_fixed(420.0 + dt * 5.0, 2),
        volume_vapor: to_fixed(0.001 + dt * 0.0001, 6),
        volume_water: to_fixed(0.001 / (dt + 1.0), 6),
    })
}
