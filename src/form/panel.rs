use super::{FormController, Presenter};
use crate::steam::PropertyResult;

/// 메모리 상의 출력 화면. CLI/GUI가 이 값을 그대로 그린다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPanel {
    outputs: PropertyResult,
    error_message: String,
    error_visible: bool,
}

impl OutputPanel {
    /// 출력 필드를 자리표시로 채운 화면을 만든다.
    pub fn for_form(controller: &dyn FormController) -> Self {
        Self {
            outputs: controller.placeholder_result(),
            ..Self::default()
        }
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.outputs.get(field)
    }

    pub fn outputs(&self) -> &PropertyResult {
        &self.outputs
    }

    /// 보이는 상태일 때만 오류 메시지를 반환한다.
    pub fn error(&self) -> Option<&str> {
        self.error_visible.then_some(self.error_message.as_str())
    }

    pub fn is_error_visible(&self) -> bool {
        self.error_visible
    }
}

impl Presenter for OutputPanel {
    fn render(&mut self, result: &PropertyResult) {
        for (field, text) in result.iter() {
            self.outputs.insert(field, text);
        }
        self.error_visible = false;
    }

    fn render_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.error_visible = true;
    }
}
