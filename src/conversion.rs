use tracing::debug;

use crate::quantity::{Measurement, Unit};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 현재 기준 표에 없는 압력 단위
    UnsupportedByBase(PressureUnit),
    /// 온도와 압력처럼 서로 변환할 수 없는 단위 쌍
    IncompatibleUnits { from: Unit, to: Unit },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
            ConversionError::UnsupportedByBase(u) => {
                write!(f, "unit {} is not supported by this converter", u.symbol())
            }
            ConversionError::IncompatibleUnits { from, to } => write!(
                f,
                "cannot convert {} ({}) to {} ({})",
                from.symbol(),
                from.kind().name(),
                to.symbol(),
                to.kind().name()
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 압력 기준 표를 하나 고정한 변환기.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    base: PressureBase,
}

/// 과열 증기 폼이 쓰는 kPa 기준 변환기.
pub const KILOPASCAL_CONVERTER: Converter = Converter::new(PressureBase::KiloPascal);
/// 포화(압력 기준) 폼이 쓰는 Pa 기준 변환기.
pub const PASCAL_CONVERTER: Converter = Converter::new(PressureBase::Pascal);

impl Converter {
    pub const fn new(base: PressureBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> PressureBase {
        self.base
    }

    /// 문자열 단위를 해석해 변환하고, 실패하면 원인을 돌려준다.
    pub fn try_convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from_unit = parse_unit(from)?;
        let to_unit = parse_unit(to)?;
        self.convert_measurement(
            Measurement {
                value,
                unit: from_unit,
            },
            to_unit,
        )
    }

    /// 문자열 단위 변환. 변환할 수 없으면 결과 없음(None)을 돌려준다.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Option<f64> {
        match self.try_convert(value, from, to) {
            Ok(v) => {
                debug!(value, from, to, result = v, "converted");
                Some(v)
            }
            Err(err) => {
                debug!(value, from, to, %err, "conversion not possible");
                None
            }
        }
    }

    /// 값을 목표 단위로 변환한다.
    pub fn convert_measurement(&self, m: Measurement, to: Unit) -> Result<f64, ConversionError> {
        match (m.unit, to) {
            (Unit::Temperature(from), Unit::Temperature(to)) => {
                Ok(convert_temperature(m.value, from, to))
            }
            (Unit::Pressure(from), Unit::Pressure(to)) => {
                convert_pressure(m.value, from, to, self.base).ok_or_else(|| {
                    let missing = if self.base.factor(from).is_none() {
                        from
                    } else {
                        to
                    };
                    ConversionError::UnsupportedByBase(missing)
                })
            }
            (from, to) => Err(ConversionError::IncompatibleUnits { from, to }),
        }
    }
}

/// kPa 기준 변환기로 문자열 단위를 변환한다.
pub fn convert(value: f64, from: &str, to: &str) -> Option<f64> {
    KILOPASCAL_CONVERTER.convert(value, from, to)
}

fn parse_unit(s: &str) -> Result<Unit, ConversionError> {
    Unit::parse(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}
