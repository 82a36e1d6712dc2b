use super::{
    pressure_choices, read_number, read_unit, temperature_choices, FormController, FormError,
    FormFields, FormKind,
};
use crate::conversion::KILOPASCAL_CONVERTER;
use crate::steam::{superheated_state, PropertyResult};

const INPUT_FIELDS: &[&str] = &["temperature", "temp_unit", "pressure", "pressure_unit"];
const OUTPUT_FIELDS: &[&str] = &[
    "temp_result",
    "temp_unit_result",
    "volume",
    "enthalpy",
    "specific_heat",
    "viscosity",
];

/// 제출할 때마다 새로 읽는 과열 증기 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperheatedInput {
    pub temperature: f64,
    pub temp_unit: String,
    pub pressure: f64,
    pub pressure_unit: String,
}

impl SuperheatedInput {
    pub fn read(fields: &FormFields) -> Result<Self, FormError> {
        let temperature = read_number(fields, "temperature");
        let temp_unit = read_unit(fields, "temp_unit");
        let pressure = read_number(fields, "pressure");
        let pressure_unit = read_unit(fields, "pressure_unit");
        match (temperature, temp_unit, pressure, pressure_unit) {
            (Some(temperature), Some(temp_unit), Some(pressure), Some(pressure_unit)) => Ok(Self {
                temperature,
                temp_unit: temp_unit.to_string(),
                pressure,
                pressure_unit: pressure_unit.to_string(),
            }),
            _ => Err(FormError::InvalidInput(
                "Please enter valid temperature, pressure, and units.",
            )),
        }
    }
}

/// 과열 증기(온도 + 압력) 폼.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperheatedForm;

impl FormController for SuperheatedForm {
    fn kind(&self) -> FormKind {
        FormKind::Superheated
    }

    fn input_fields(&self) -> &'static [&'static str] {
        INPUT_FIELDS
    }

    fn output_fields(&self) -> &'static [&'static str] {
        OUTPUT_FIELDS
    }

    fn placeholder(&self, field: &str) -> &'static str {
        match field {
            "temp_unit_result" => "",
            _ => "-",
        }
    }

    fn unit_choices(&self, field: &str) -> Vec<&'static str> {
        match field {
            "temp_unit" => temperature_choices(),
            "pressure_unit" => pressure_choices(KILOPASCAL_CONVERTER.base()),
            _ => Vec::new(),
        }
    }

    fn calculate(&self, fields: &FormFields) -> Result<Option<PropertyResult>, FormError> {
        let input = SuperheatedInput::read(fields)?;
        let state = superheated_state(
            input.temperature,
            &input.temp_unit,
            input.pressure,
            &input.pressure_unit,
        )?;
        Ok(Some(state.to_result(&input.temp_unit)))
    }
}
