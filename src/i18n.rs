use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::form::FormKind;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_TEMPERATURE: &str = "main_menu.temperature";
    pub const MAIN_MENU_PRESSURE: &str = "main_menu.pressure";
    pub const MAIN_MENU_SUPERHEATED: &str = "main_menu.superheated";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const BUTTON_CALCULATE: &str = "button.calculate";
    pub const BUTTON_CLEAN: &str = "button.clean";
    pub const PROMPT_AFTER_RESULT: &str = "prompt.after_result";
    pub const RESULT_NONE: &str = "result.none";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const CONVERT_RESULT: &str = "convert.result";
    pub const CONVERT_NOT_POSSIBLE: &str = "convert.not_possible";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 번역한다. 언어팩 → 내장 문자열 → 영어 → 키 자체 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        builtin.unwrap_or(key)
    }

    /// 폼 필드의 화면 라벨.
    pub fn field_label(&self, form: FormKind, field: &str) -> String {
        let key = field_key(form, field);
        self.t(&key).to_string()
    }

    /// 폼 제목.
    pub fn form_title(&self, form: FormKind) -> &str {
        match form {
            FormKind::SaturationByTemperature => self.t("form.saturation_temperature.title"),
            FormKind::SaturationByPressure => self.t("form.saturation_pressure.title"),
            FormKind::Superheated => self.t("form.superheated.title"),
        }
    }
}

fn field_key(form: FormKind, field: &str) -> String {
    let form_code = match form {
        FormKind::SaturationByTemperature => "saturation_temperature",
        FormKind::SaturationByPressure => "saturation_pressure",
        FormKind::Superheated => "superheated",
    };
    format!("form.{form_code}.{field}")
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

/// 중첩 테이블은 `a.b.c` 형태의 키로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Steam Property Estimator",
        MAIN_MENU_TITLE => "\n=== Steam Property Estimator ===",
        MAIN_MENU_TEMPERATURE => "1) Saturated steam by temperature",
        MAIN_MENU_PRESSURE => "2) Saturated steam by pressure",
        MAIN_MENU_SUPERHEATED => "3) Superheated steam",
        MAIN_MENU_CONVERT => "4) Unit converter",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        BUTTON_CALCULATE => "Calculate",
        BUTTON_CLEAN => "Clean",
        PROMPT_AFTER_RESULT => "c = clean, enter = back to menu: ",
        RESULT_NONE => "No result.",
        CONVERT_HEADING => "\n-- Unit Converter --",
        PROMPT_VALUE => "Value: ",
        PROMPT_FROM_UNIT => "From unit (C, F, K, kPa, MPa, psi, bar, kg/cm², mmHg): ",
        PROMPT_TO_UNIT => "To unit: ",
        CONVERT_RESULT => "Result:",
        CONVERT_NOT_POSSIBLE => "Conversion not possible.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        "form.saturation_temperature.title" => "Saturated Steam by Temperature",
        "form.saturation_temperature.temperature" => "Temperature",
        "form.saturation_temperature.temp_unit" => "Temperature unit",
        "form.saturation_temperature.temp" => "Temperature [K]",
        "form.saturation_temperature.pressure" => "Vapor pressure",
        "form.saturation_temperature.latent_heat" => "Latent heat of vaporization [kJ/kg]",
        "form.saturation_temperature.enthalpy_vapor" => "Specific enthalpy, saturated vapor [kJ/kg]",
        "form.saturation_temperature.enthalpy_water" => "Specific enthalpy, saturated water [kJ/kg]",
        "form.saturation_temperature.volume_vapor" => "Specific volume, saturated vapor [m³/kg]",
        "form.saturation_temperature.volume_water" => "Specific volume, saturated water [m³/kg]",
        "form.saturation_pressure.title" => "Saturated Steam by Pressure",
        "form.saturation_pressure.pressure" => "Pressure",
        "form.saturation_pressure.pressure_unit" => "Pressure unit",
        "form.saturation_pressure.temperature" => "Temperature",
        "form.saturation_pressure.latent_heat" => "Latent heat of vaporization [kJ/kg]",
        "form.saturation_pressure.enthalpy_vapor" => "Specific enthalpy, saturated vapor [kJ/kg]",
        "form.saturation_pressure.enthalpy_water" => "Specific enthalpy, saturated water [kJ/kg]",
        "form.saturation_pressure.volume_vapor" => "Specific volume, saturated vapor [m³/kg]",
        "form.saturation_pressure.volume_water" => "Specific volume, saturated water [m³/kg]",
        "form.superheated.title" => "Superheated Steam",
        "form.superheated.temperature" => "Temperature",
        "form.superheated.temp_unit" => "Temperature unit",
        "form.superheated.pressure" => "Pressure",
        "form.superheated.pressure_unit" => "Pressure unit",
        "form.superheated.temp_result" => "Temperature",
        "form.superheated.temp_unit_result" => "Unit",
        "form.superheated.volume" => "Specific volume [m³/kg]",
        "form.superheated.enthalpy" => "Specific enthalpy",
        "form.superheated.specific_heat" => "Specific heat",
        "form.superheated.viscosity" => "Viscosity",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "증기 물성 추정기",
        MAIN_MENU_TITLE => "\n=== 증기 물성 추정기 ===",
        MAIN_MENU_TEMPERATURE => "1) 포화 증기 (온도 기준)",
        MAIN_MENU_PRESSURE => "2) 포화 증기 (압력 기준)",
        MAIN_MENU_SUPERHEATED => "3) 과열 증기",
        MAIN_MENU_CONVERT => "4) 단위 변환기",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        BUTTON_CALCULATE => "계산",
        BUTTON_CLEAN => "초기화",
        PROMPT_AFTER_RESULT => "c = 초기화, 엔터 = 메뉴로: ",
        RESULT_NONE => "결과 없음.",
        CONVERT_HEADING => "\n-- 단위 변환 --",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_FROM_UNIT => "입력 단위 (C, F, K, kPa, MPa, psi, bar, kg/cm², mmHg): ",
        PROMPT_TO_UNIT => "변환 단위: ",
        CONVERT_RESULT => "변환 결과:",
        CONVERT_NOT_POSSIBLE => "변환할 수 없습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        "form.saturation_temperature.title" => "포화 증기 (온도 기준)",
        "form.saturation_temperature.temperature" => "온도",
        "form.saturation_temperature.temp_unit" => "온도 단위",
        "form.saturation_temperature.temp" => "온도 [K]",
        "form.saturation_temperature.pressure" => "증기압",
        "form.saturation_temperature.latent_heat" => "증발잠열 [kJ/kg]",
        "form.saturation_temperature.enthalpy_vapor" => "포화 증기 비엔탈피 [kJ/kg]",
        "form.saturation_temperature.enthalpy_water" => "포화수 비엔탈피 [kJ/kg]",
        "form.saturation_temperature.volume_vapor" => "포화 증기 비체적 [m³/kg]",
        "form.saturation_temperature.volume_water" => "포화수 비체적 [m³/kg]",
        "form.saturation_pressure.title" => "포화 증기 (압력 기준)",
        "form.saturation_pressure.pressure" => "압력",
        "form.saturation_pressure.pressure_unit" => "압력 단위",
        "form.saturation_pressure.temperature" => "온도",
        "form.saturation_pressure.latent_heat" => "증발잠열 [kJ/kg]",
        "form.saturation_pressure.enthalpy_vapor" => "포화 증기 비엔탈피 [kJ/kg]",
        "form.saturation_pressure.enthalpy_water" => "포화수 비엔탈피 [kJ/kg]",
        "form.saturation_pressure.volume_vapor" => "포화 증기 비체적 [m³/kg]",
        "form.saturation_pressure.volume_water" => "포화수 비체적 [m³/kg]",
        "form.superheated.title" => "과열 증기",
        "form.superheated.temperature" => "온도",
        "form.superheated.temp_unit" => "온도 단위",
        "form.superheated.pressure" => "압력",
        "form.superheated.pressure_unit" => "압력 단위",
        "form.superheated.temp_result" => "온도",
        "form.superheated.temp_unit_result" => "단위",
        "form.superheated.volume" => "비체적 [m³/kg]",
        "form.superheated.enthalpy" => "비엔탈피",
        "form.superheated.specific_heat" => "비열",
        "form.superheated.viscosity" => "점도",
        _ => return None,
    })
}
