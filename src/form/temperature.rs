use super::{
    read_number, read_unit, temperature_choices, FormController, FormError, FormFields, FormKind,
};
use crate::steam::{saturation_by_temperature, PropertyResult};

const INPUT_FIELDS: &[&str] = &["temperature", "temp_unit"];
const OUTPUT_FIELDS: &[&str] = &[
    "temp",
    "pressure",
    "latent_heat",
    "enthalpy_vapor",
    "enthalpy_water",
    "volume_vapor",
    "volume_water",
];

/// 제출 시점에 읽은 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureInput {
    pub temperature: f64,
    pub temp_unit: String,
}

impl TemperatureInput {
    pub fn read(fields: &FormFields) -> Result<Self, FormError> {
        match (
            read_number(fields, "temperature"),
            read_unit(fields, "temp_unit"),
        ) {
            (Some(temperature), Some(unit)) => Ok(Self {
                temperature,
                temp_unit: unit.to_string(),
            }),
            _ => Err(FormError::InvalidInput(
                "Please enter a valid temperature and select a unit.",
            )),
        }
    }
}

/// 온도 기준 포화 물성 폼.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureForm;

impl FormController for TemperatureForm {
    fn kind(&self) -> FormKind {
        FormKind::SaturationByTemperature
    }

    fn input_fields(&self) -> &'static [&'static str] {
        INPUT_FIELDS
    }

    fn output_fields(&self) -> &'static [&'static str] {
        OUTPUT_FIELDS
    }

    fn unit_choices(&self, field: &str) -> Vec<&'static str> {
        match field {
            "temp_unit" => temperature_choices(),
            _ => Vec::new(),
        }
    }

    fn calculate(&self, fields: &FormFields) -> Result<Option<PropertyResult>, FormError> {
        let input = TemperatureInput::read(fields)?;
        let state = saturation_by_temperature(input.temperature, &input.temp_unit)?;
        Ok(Some(state.to_result()))
    }
}
