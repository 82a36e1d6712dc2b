//! 증기 물성 근사 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 폼 흐름을 쓰게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod steam;
pub mod ui_cli;
pub mod units;
