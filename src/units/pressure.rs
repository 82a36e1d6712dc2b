use serde::{Deserialize, Serialize};

/// 압력 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Atm,
    Psi,
    KgPerCm2,
    MmHg,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 8] = [
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::Bar,
        PressureUnit::Atm,
        PressureUnit::Psi,
        PressureUnit::KgPerCm2,
        PressureUnit::MmHg,
    ];

    /// 폼과 CLI에서 쓰는 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
            PressureUnit::Psi => "psi",
            PressureUnit::KgPerCm2 => "kg/cm²",
            PressureUnit::MmHg => "mmHg",
        }
    }

    /// 단위 문자열을 해석한다. 대소문자는 구분하지 않는다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pa" | "pascal" => Some(PressureUnit::Pascal),
            "kpa" | "kilopascal" => Some(PressureUnit::KiloPascal),
            "mpa" | "megapascal" => Some(PressureUnit::MegaPascal),
            "bar" => Some(PressureUnit::Bar),
            "atm" => Some(PressureUnit::Atm),
            "psi" => Some(PressureUnit::Psi),
            "kg/cm²" | "kg/cm2" | "kgf/cm2" | "kgf/cm²" => Some(PressureUnit::KgPerCm2),
            "mmhg" | "torr" => Some(PressureUnit::MmHg),
            _ => None,
        }
    }
}

/// 압력 환산의 기준 단위.
///
/// 과열 증기 폼은 kPa, 포화(압력 기준) 폼은 Pa를 기준으로 하며 각각 자기 표에 있는
/// 단위만 인식한다. 두 표는 서로 맞추지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureBase {
    /// kPa 기준 (Pa, atm 없음)
    KiloPascal,
    /// Pa 기준 (psi, kg/cm², mmHg 없음)
    Pascal,
}

impl PressureBase {
    /// 단위 1이 기준 단위로 몇인지 반환한다. 표에 없는 단위는 None.
    pub fn factor(&self, unit: PressureUnit) -> Option<f64> {
        match self {
            PressureBase::KiloPascal => match unit {
                PressureUnit::KiloPascal => Some(1.0),
                PressureUnit::MegaPascal => Some(1000.0),
                PressureUnit::Psi => Some(6.89476),
                PressureUnit::Bar => Some(100.0),
                PressureUnit::KgPerCm2 => Some(98.0665),
                PressureUnit::MmHg => Some(0.133322),
                PressureUnit::Pascal | PressureUnit::Atm => None,
            },
            PressureBase::Pascal => match unit {
                PressureUnit::Pascal => Some(1.0),
                PressureUnit::KiloPascal => Some(1e3),
                PressureUnit::MegaPascal => Some(1e6),
                PressureUnit::Bar => Some(1e5),
                PressureUnit::Atm => Some(1.01325e5),
                PressureUnit::Psi | PressureUnit::KgPerCm2 | PressureUnit::MmHg => None,
            },
        }
    }
}

/// 압력을 기준 단위 표를 거쳐 변환한다.
/// 같은 단위면 그대로 반환하고, 표에 없는 단위가 끼면 None을 반환한다.
pub fn convert_pressure(
    value: f64,
    from: PressureUnit,
    to: PressureUnit,
    base: PressureBase,
) -> Option<f64> {
    if from == to {
        return Some(value);
    }
    let from_factor = base.factor(from)?;
    let to_factor = base.factor(to)?;
    Some(value * from_factor / to_factor)
}
