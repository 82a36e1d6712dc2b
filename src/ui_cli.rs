use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::form::{FormFields, FormKind, OutputPanel, SubmitOutcome};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Form(FormKind),
    UnitConversion,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_TEMPERATURE));
    println!("{}", tr.t(keys::MAIN_MENU_PRESSURE));
    println!("{}", tr.t(keys::MAIN_MENU_SUPERHEATED));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Form(FormKind::SaturationByTemperature)),
            "2" => return Ok(MenuChoice::Form(FormKind::SaturationByPressure)),
            "3" => return Ok(MenuChoice::Form(FormKind::Superheated)),
            "4" => return Ok(MenuChoice::UnitConversion),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 폼 하나를 대화형으로 채우고 제출한다. 결과 뒤에 초기화를 고를 수 있다.
pub fn handle_form(kind: FormKind, tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let controller = kind.controller();
    println!("\n-- {} --", tr.form_title(kind));
    let mut fields = FormFields::new();
    for field in controller.input_fields() {
        let default = default_unit(field, cfg);
        let mut label = tr.field_label(kind, field);
        let choices = controller.unit_choices(field);
        if !choices.is_empty() {
            label = format!("{label} ({})", choices.join("/"));
        }
        let prompt = match default {
            Some(unit) => format!("{label} [{unit}]: "),
            None => format!("{label}: "),
        };
        let value = read_line(&prompt)?;
        let value = value.trim();
        match default {
            Some(unit) if value.is_empty() => fields.set(*field, unit),
            _ => fields.set(*field, value),
        }
    }

    let mut panel = OutputPanel::for_form(controller);
    let outcome = controller.submit(&fields, &mut panel);
    print_outcome(tr, kind, &panel, &outcome);

    let next = read_line(tr.t(keys::PROMPT_AFTER_RESULT))?;
    if next.trim().eq_ignore_ascii_case("c") {
        controller.clear(&mut fields, &mut panel);
        print_panel(tr, kind, &panel);
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let value = read_f64(tr, tr.t(keys::PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::PROMPT_TO_UNIT))?;
    print_conversion(tr, value, from_unit.trim(), to_unit.trim());
    Ok(())
}

/// 변환 결과를 출력한다. 변환할 수 없으면 이유와 함께 안내한다.
pub fn print_conversion(tr: &Translator, value: f64, from: &str, to: &str) {
    match conversion::KILOPASCAL_CONVERTER.try_convert(value, from, to) {
        Ok(result) => println!("{} {result} {to}", tr.t(keys::CONVERT_RESULT)),
        Err(err) => println!("{} ({err})", tr.t(keys::CONVERT_NOT_POSSIBLE)),
    }
}

/// 제출 결과에 맞춰 화면을 출력한다.
pub fn print_outcome(tr: &Translator, kind: FormKind, panel: &OutputPanel, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::NoResult => println!("{}", tr.t(keys::RESULT_NONE)),
        SubmitOutcome::Displayed | SubmitOutcome::Rejected(_) => print_panel(tr, kind, panel),
    }
}

/// 출력 필드와 (보이는 경우) 오류 메시지를 출력한다.
pub fn print_panel(tr: &Translator, kind: FormKind, panel: &OutputPanel) {
    for (field, text) in panel.outputs().iter() {
        println!("{}: {text}", tr.field_label(kind, field));
    }
    if let Some(message) = panel.error() {
        println!("{}: {message}", tr.t(keys::ERROR_PREFIX));
    }
}

fn default_unit(field: &str, cfg: &Config) -> Option<&'static str> {
    match field {
        "temp_unit" => Some(cfg.default_units.temperature.symbol()),
        "pressure_unit" => Some(cfg.default_units.pressure.symbol()),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
