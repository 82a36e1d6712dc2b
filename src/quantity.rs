use crate::units::{PressureUnit, TemperatureUnit};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Pressure,
}

impl QuantityKind {
    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Temperature => "Temperature",
            QuantityKind::Pressure => "Pressure",
        }
    }
}

/// 인식 가능한 단위. 온도와 압력 단위를 하나로 묶는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Temperature(TemperatureUnit),
    Pressure(PressureUnit),
}

impl Unit {
    /// 단위 문자열을 해석한다. 어느 쪽에도 속하지 않으면 None.
    pub fn parse(s: &str) -> Option<Self> {
        TemperatureUnit::parse(s)
            .map(Unit::Temperature)
            .or_else(|| PressureUnit::parse(s).map(Unit::Pressure))
    }

    pub fn kind(&self) -> QuantityKind {
        match self {
            Unit::Temperature(_) => QuantityKind::Temperature,
            Unit::Pressure(_) => QuantityKind::Pressure,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.symbol(),
            Unit::Pressure(u) => u.symbol(),
        }
    }
}

/// 입력에서 읽은 값과 단위의 쌍. 한번 만들어지면 바뀌지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

