//! 입력 폼 컨트롤러. 입력 읽기 → 단위 환산 → 물성 추정 → 표시(또는 오류) 순서로 처리한다.
//!
//! 표시 계층은 [`Presenter`] 포트로 추상화하여 CLI, GUI, 테스트가 같은 흐름을 공유한다.

pub mod panel;
pub mod pressure;
pub mod superheated;
pub mod temperature;

use tracing::{info, warn};

use crate::steam::{DomainRangeError, PropertyResult};
use crate::units::{PressureBase, PressureUnit, TemperatureUnit};

pub use panel::OutputPanel;
pub use pressure::{PressureForm, PressureInput};
pub use superheated::{SuperheatedForm, SuperheatedInput};
pub use temperature::{TemperatureForm, TemperatureInput};

/// 폼 처리 중 발생해 화면에 표시되는 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// 값이 비었거나 숫자가 아니거나 단위를 고르지 않음
    InvalidInput(&'static str),
    /// 환산값이 유효 범위를 벗어남
    DomainRange(DomainRangeError),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::InvalidInput(msg) => f.write_str(msg),
            FormError::DomainRange(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<DomainRangeError> for FormError {
    fn from(value: DomainRangeError) -> Self {
        FormError::DomainRange(value)
    }
}

/// 제출 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 결과를 표시함
    Displayed,
    /// 변환 결과 없음. 화면은 그대로 둔다.
    NoResult,
    /// 오류를 표시함
    Rejected(FormError),
}

/// 결과/오류를 출력 화면에 반영하는 포트.
pub trait Presenter {
    /// 각 출력 필드에 결과를 쓰고 오류 표시를 숨긴다.
    fn render(&mut self, result: &PropertyResult);
    /// 오류 메시지를 보이게 한다. 기존 출력 값은 건드리지 않는다.
    fn render_error(&mut self, message: &str);
}

/// 폼 입력 필드의 현재 문자열.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: Vec<(&'static str, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// 필드 값. 없는 필드는 빈 문자열이다.
    pub fn get(&self, field: &str) -> &str {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// GUI 편집용 가변 참조. 없으면 빈 값으로 만든다.
    pub fn value_mut(&mut self, field: &'static str) -> &mut String {
        let idx = match self.values.iter().position(|(f, _)| *f == field) {
            Some(idx) => idx,
            None => {
                self.values.push((field, String::new()));
                self.values.len() - 1
            }
        };
        &mut self.values[idx].1
    }
}

/// 화면에 있는 세 가지 폼.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    SaturationByTemperature,
    SaturationByPressure,
    Superheated,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [
        FormKind::SaturationByTemperature,
        FormKind::SaturationByPressure,
        FormKind::Superheated,
    ];

    pub fn controller(&self) -> &'static dyn FormController {
        match self {
            FormKind::SaturationByTemperature => &TemperatureForm,
            FormKind::SaturationByPressure => &PressureForm,
            FormKind::Superheated => &SuperheatedForm,
        }
    }
}

/// 폼 하나의 이벤트 처리 규약.
pub trait FormController {
    fn kind(&self) -> FormKind;

    /// 입력 필드 식별자.
    fn input_fields(&self) -> &'static [&'static str];

    /// 출력 필드 식별자.
    fn output_fields(&self) -> &'static [&'static str];

    /// 초기화 시 출력 필드에 넣을 자리표시 문자열.
    fn placeholder(&self, _field: &str) -> &'static str {
        "-"
    }

    /// 단위 선택 필드가 제시할 단위 기호. 자유 입력 필드는 빈 목록.
    fn unit_choices(&self, _field: &str) -> Vec<&'static str> {
        Vec::new()
    }

    /// 입력 검증 → 환산 → 추정. 결과 없음이면 `Ok(None)`.
    fn calculate(&self, fields: &FormFields) -> Result<Option<PropertyResult>, FormError>;

    /// 모든 출력 필드가 자리표시 상태인 결과.
    fn placeholder_result(&self) -> PropertyResult {
        let mut result = PropertyResult::new();
        for field in self.output_fields() {
            result.insert(*field, self.placeholder(field));
        }
        result
    }

    /// 제출 이벤트. 결과나 오류를 표시하고, 어떤 경우에도 다음 입력을 받을 수 있는 상태로 끝난다.
    fn submit(&self, fields: &FormFields, presenter: &mut dyn Presenter) -> SubmitOutcome {
        match self.calculate(fields) {
            Ok(Some(result)) => {
                info!(form = ?self.kind(), "calculated");
                presenter.render(&result);
                SubmitOutcome::Displayed
            }
            Ok(None) => {
                warn!(form = ?self.kind(), "conversion yielded no result");
                SubmitOutcome::NoResult
            }
            Err(err) => {
                warn!(form = ?self.kind(), %err, "submit rejected");
                presenter.render_error(&err.to_string());
                SubmitOutcome::Rejected(err)
            }
        }
    }

    /// 초기화 이벤트. 입력을 비우고 출력을 자리표시로 되돌리며 오류 표시를 숨긴다.
    fn clear(&self, fields: &mut FormFields, presenter: &mut dyn Presenter) {
        for field in self.input_fields() {
            fields.set(*field, "");
        }
        presenter.render(&self.placeholder_result());
        info!(form = ?self.kind(), "cleared");
    }
}

/// 유한한 숫자만 허용한다.
pub(crate) fn read_number(fields: &FormFields, field: &str) -> Option<f64> {
    fields
        .get(field)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// 비어 있지 않은 단위 문자열.
pub(crate) fn read_unit<'a>(fields: &'a FormFields, field: &str) -> Option<&'a str> {
    let unit = fields.get(field).trim();
    (!unit.is_empty()).then_some(unit)
}

pub(crate) fn temperature_choices() -> Vec<&'static str> {
    TemperatureUnit::ALL.iter().map(|u| u.symbol()).collect()
}

/// 기준 표에 있는 압력 단위만 고른다.
pub(crate) fn pressure_choices(base: PressureBase) -> Vec<&'static str> {
    PressureUnit::ALL
        .iter()
        .filter(|u| base.factor(**u).is_some())
        .map(|u| u.symbol())
        .collect()
}
