use crate::comfort::ComfortError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 쾌적도 평가 오류
    Comfort(ComfortError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Comfort(e) => write!(f, "쾌적도 평가 오류: {e}"),
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

impl From<ComfortError> for AppError {
    fn from(value: ComfortError) -> Self {
        AppError::Comfort(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 쾌적도 평가가 수렴 실패 등으로 오류를 내더라도 루프를 끝내지 않고
/// 메시지만 보여준 뒤 메뉴로 돌아간다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::ComfortAssessment => {
                if let Err(err) = ui_cli::handle_comfort(tr, config) {
                    if matches!(err, AppError::Io(_)) {
                        return Err(err);
                    }
                    println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
                }
            }
            MenuChoice::UnitConversion => {
                if let Err(err) = ui_cli::handle_unit_conversion(tr, config) {
                    if matches!(err, AppError::Io(_)) {
                        return Err(err);
                    }
                    println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
                }
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
