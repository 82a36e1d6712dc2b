use super::{
    pressure_choices, read_number, read_unit, FormController, FormError, FormFields, FormKind,
};
use crate::conversion::PASCAL_CONVERTER;
use crate::steam::{saturation_by_pressure, PropertyResult};

const INPUT_FIELDS: &[&str] = &["pressure", "pressure_unit"];
const OUTPUT_FIELDS: &[&str] = &[
    "temperature",
    "latent_heat",
    "enthalpy_vapor",
    "enthalpy_water",
    "volume_vapor",
    "volume_water",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PressureInput {
    pub pressure: f64,
    pub pressure_unit: String,
}

impl PressureInput {
    pub fn read(fields: &FormFields) -> Result<Self, FormError> {
        match (
            read_number(fields, "pressure"),
            read_unit(fields, "pressure_unit"),
        ) {
            (Some(pressure), Some(unit)) => Ok(Self {
                pressure,
                pressure_unit: unit.to_string(),
            }),
            _ => Err(FormError::InvalidInput(
                "Please enter a valid pressure and select a unit.",
            )),
        }
    }
}

/// 압력 기준 포화 물성 폼. 초기화하면 출력이 빈 문자열이 된다.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureForm;

impl FormController for PressureForm {
    fn kind(&self) -> FormKind {
        FormKind::SaturationByPressure
    }

    fn input_fields(&self) -> &'static [&'static str] {
        INPUT_FIELDS
    }

    fn output_fields(&self) -> &'static [&'static str] {
        OUTPUT_FIELDS
    }

    fn placeholder(&self, _field: &str) -> &'static str {
        ""
    }

    fn unit_choices(&self, field: &str) -> Vec<&'static str> {
        match field {
            "pressure_unit" => pressure_choices(PASCAL_CONVERTER.base()),
            _ => Vec::new(),
        }
    }

    fn calculate(&self, fields: &FormFields) -> Result<Option<PropertyResult>, FormError> {
        let input = PressureInput::read(fields)?;
        let state = saturation_by_pressure(input.pressure, &input.pressure_unit)?;
        Ok(state.map(|s| s.to_result()))
    }
}
