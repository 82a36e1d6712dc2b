use tracing::info;

use crate::config::Config;
use crate::conversion;
use crate::form::{FormFields, FormKind, OutputPanel, SubmitOutcome};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 폼 검증/범위 오류는 화면에 표시하고 끝나므로 여기에 포함되지 않는다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    Io(std::io::Error),
    /// 입력 스트림이 닫힘
    InputClosed,
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::InputClosed => write!(f, "input closed"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Conversion(e) => write!(f, "conversion error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// CLI 대화형 메인 루프를 실행한다. 입력이 닫히면 조용히 끝낸다.
pub fn run(config: &Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(tr) {
            Ok(MenuChoice::Form(kind)) => ui_cli::handle_form(kind, tr, config),
            Ok(MenuChoice::UnitConversion) => ui_cli::handle_unit_conversion(tr),
            Ok(MenuChoice::Exit) => break,
            Err(e) => Err(e),
        };
        match step {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

/// 폼 한 번 제출(비대화형). 입력 필드 값을 순서대로 받아 결과를 출력한다.
pub fn submit_once(kind: FormKind, values: &[&str], tr: &Translator) -> SubmitOutcome {
    let controller = kind.controller();
    let fields = controller
        .input_fields()
        .iter()
        .zip(values)
        .fold(FormFields::new(), |fields, (field, value)| {
            fields.with(*field, *value)
        });
    let mut panel = OutputPanel::for_form(controller);
    let outcome = controller.submit(&fields, &mut panel);
    info!(form = ?kind, ?outcome, "one-shot submit");
    ui_cli::print_outcome(tr, kind, &panel, &outcome);
    outcome
}

/// 단위 변환(비대화형).
pub fn convert_once(value: f64, from: &str, to: &str) -> Result<f64, AppError> {
    Ok(conversion::KILOPASCAL_CONVERTER.try_convert(value, from, to)?)
}
