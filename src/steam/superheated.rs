use tracing::debug;

use super::property::{to_fixed, PropertyResult};
use super::range::{DomainRangeError, SUPERHEATED_PRESSURE_RANGE, SUPERHEATED_TEMPERATURE_RANGE};
use crate::conversion::KILOPASCAL_CONVERTER;

/// 모의 비열(kJ/kg·K). 온도/압력과 무관한 상수다.
pub const SPECIFIC_HEAT_KJ_PER_KGK: f64 = 4.18;

/// 과열 증기 근사 상태 (온도 + 압력).
#[derive(Debug, Clone, PartialEq)]
pub struct SuperheatedState {
    /// 환산된 온도(K). 표시할 때 입력 단위로 되돌린다.
    pub temperature_k: f64,
    /// 환산된 압력(kPa)
    pub pressure_kpa: f64,
    /// 비체적(m³/kg)
    pub specific_volume: String,
    /// 비엔탈피(kJ/kg)
    pub enthalpy: String,
    /// 비열(kJ/kg·K)
    pub specific_heat: String,
    /// 점도(mPa·s)
    pub viscosity: String,
}

impl SuperheatedState {
    /// 출력 필드 결과를 만든다. 온도는 `temp_unit`으로 되돌려 표시한다.
    pub fn to_result(&self, temp_unit: &str) -> PropertyResult {
        let temp = KILOPASCAL_CONVERTER
            .convert(self.temperature_k, "K", temp_unit)
            .unwrap_or(self.temperature_k);
        PropertyResult::new()
            .with("temp_result", to_fixed(temp, 2))
            .with("temp_unit_result", temp_unit)
            .with("volume", self.specific_volume.clone())
            .with("enthalpy", format!("{} kJ/kg", self.enthalpy))
            .with("specific_heat", format!("{} kJ/kg·K", self.specific_heat))
            .with("viscosity", format!("{} mPa·s", self.viscosity))
    }
}

/// 켈빈/kPa 값으로 과열 증기 상태를 추정한다.
pub fn superheated_at(temp_k: f64, pressure_kpa: f64) -> Result<SuperheatedState, DomainRangeError> {
    estimate(Some(temp_k), Some(pressure_kpa))
}

/// 입력 단위의 온도/압력으로 과열 증기 상태를 추정한다.
///
/// kPa 기준 표로 환산하지 못한 값은 해당 범위 검사에서 오류가 된다.
/// 온도를 먼저 검사한다.
pub fn superheated_state(
    temp: f64,
    temp_unit: &str,
    pressure: f64,
    pressure_unit: &str,
) -> Result<SuperheatedState, DomainRangeError> {
    let temp_k = KILOPASCAL_CONVERTER.convert(temp, temp_unit, "K");
    let pressure_kpa = KILOPASCAL_CONVERTER.convert(pressure, pressure_unit, "kPa");
    estimate(temp_k, pressure_kpa)
}

fn estimate(
    temp_k: Option<f64>,
    pressure_kpa: Option<f64>,
) -> Result<SuperheatedState, DomainRangeError> {
    let t = SUPERHEATED_TEMPERATURE_RANGE.check(temp_k)?;
    let p = SUPERHEATED_PRESSURE_RANGE.check(pressure_kpa)?;
    let dt = t - 273.15;
    debug!(temp_k = t, pressure_kpa = p, "superheated state");
    Ok(SuperheatedState {
        temperature_k: t,
        pressure_kpa: p,
        specific_volume: to_fixed(1.0 / (p * 0.1), 4),
        enthalpy: to_fixed(2500.0 + dt * 10.0, 2),
        specific_heat: to_fixed(SPECIFIC_HEAT_KJ_PER_KGK, 2),
        viscosity: to_fixed(0.001 * (1.0 + dt * 0.02), 4),
    })
}
