//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 서비스 연동도 쉽게 한다.

pub mod app;
pub mod comfort;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod ui_cli;
pub mod units;
