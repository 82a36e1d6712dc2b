use crate::quantity::QuantityKind;

/// 벗어난 경계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

/// 기준 단위로 환산한 값의 유효 범위와 안내 문구.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    pub quantity: QuantityKind,
    pub min: f64,
    /// false면 min 자체도 범위 밖이다.
    pub min_inclusive: bool,
    pub max: f64,
    pub unit: &'static str,
    pub message: &'static str,
}

/// 포화(온도 기준) 폼의 온도 범위.
pub const SATURATION_TEMPERATURE_RANGE: ValidRange = ValidRange {
    quantity: QuantityKind::Temperature,
    min: 273.06,
    min_inclusive: true,
    max: 647.096,
    unit: "K",
    message: "Temperature must be between 273.06 K and 647.096 K.",
};

/// 포화(압력 기준) 폼의 압력 범위 (삼중점 ~ 임계점).
pub const SATURATION_PRESSURE_RANGE: ValidRange = ValidRange {
    quantity: QuantityKind::Pressure,
    min: 611.657,
    min_inclusive: true,
    max: 22.064e6,
    unit: "Pa",
    message: "Pressure must be between 611.657 Pa and 22.064 MPa.",
};

/// 과열 증기 폼의 온도 범위. 하한이 포화 폼(273.06 K)과 다르다.
pub const SUPERHEATED_TEMPERATURE_RANGE: ValidRange = ValidRange {
    quantity: QuantityKind::Temperature,
    min: 273.15,
    min_inclusive: true,
    max: 647.096,
    unit: "K",
    message: "Temperature must be between 0°C and 374°C (273.15 K and 647.096 K).",
};

/// 과열 증기 폼의 압력 범위. 양수이기만 하면 된다.
pub const SUPERHEATED_PRESSURE_RANGE: ValidRange = ValidRange {
    quantity: QuantityKind::Pressure,
    min: 0.0,
    min_inclusive: false,
    max: f64::INFINITY,
    unit: "kPa",
    message: "Pressure must be positive.",
};

impl ValidRange {
    /// 값이 범위 안이면 그대로 돌려준다.
    ///
    /// 변환에 실패한 값(None, NaN)은 하한 위반으로 처리한다.
    pub fn check(&self, value: Option<f64>) -> Result<f64, DomainRangeError> {
        let v = match value {
            Some(v) if !v.is_nan() => v,
            _ => return Err(self.violation(Bound::Lower, None)),
        };
        let below = if self.min_inclusive {
            v < self.min
        } else {
            v <= self.min
        };
        if below {
            Err(self.violation(Bound::Lower, Some(v)))
        } else if v > self.max {
            Err(self.violation(Bound::Upper, Some(v)))
        } else {
            Ok(v)
        }
    }

    fn violation(&self, bound: Bound, value: Option<f64>) -> DomainRangeError {
        DomainRangeError {
            range: *self,
            bound,
            value,
        }
    }
}

/// 환산값이 물리적으로 유효한 범위를 벗어남.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRangeError {
    pub range: ValidRange,
    pub bound: Bound,
    /// 변환조차 되지 않았으면 None
    pub value: Option<f64>,
}

impl DomainRangeError {
    pub fn quantity(&self) -> QuantityKind {
        self.range.quantity
    }
}

impl std::fmt::Display for DomainRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = &self.range;
        write!(f, "{} (", r.message)?;
        match self.value {
            Some(v) => write!(f, "got {v} {}, ", r.unit)?,
            None => write!(f, "no value in {} could be converted, ", r.unit)?,
        }
        match self.bound {
            Bound::Lower if r.min_inclusive => write!(f, "below the lower bound {} {})", r.min, r.unit),
            Bound::Lower => write!(f, "not above the lower bound {} {})", r.min, r.unit),
            Bound::Upper => write!(f, "above the upper bound {} {})", r.max, r.unit),
        }
    }
}

impl std::error::Error for DomainRangeError {}
