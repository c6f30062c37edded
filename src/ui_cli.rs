use std::io::{self, Write};

use chrono::Datelike;

use crate::app::AppError;
use crate::comfort::{self, ComfortRequest};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Language, Translator};
use crate::quantity::QuantityKind;
use crate::units::{temperature, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ComfortAssessment,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMFORT));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ComfortAssessment),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 쾌적도 평가 메뉴를 처리한다.
pub fn handle_comfort(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMFORT_HEADING));
    println!("{}", tr.t(keys::COMFORT_NOTE_DEFAULTS));

    let ta_value = read_f64(tr, tr.t(keys::PROMPT_AIR_TEMP))?;
    let ta_unit = read_temperature_unit(tr)?;
    let air_temp_c = temperature::to_celsius(ta_value, ta_unit);
    let relative_humidity_pct = read_f64(tr, tr.t(keys::PROMPT_RELATIVE_HUMIDITY))?;

    let mut request = ComfortRequest::new(air_temp_c, relative_humidity_pct);
    request.clothing_clo = read_optional_f64(tr, tr.t(keys::PROMPT_CLO_OPTIONAL))?;
    request.metabolic_met = read_optional_f64(tr, tr.t(keys::PROMPT_MET_OPTIONAL))?
        .or(Some(cfg.comfort_defaults.metabolic_met));
    request.external_work_met = read_optional_f64(tr, tr.t(keys::PROMPT_WME_OPTIONAL))?
        .or(Some(cfg.comfort_defaults.external_work_met));
    request.mean_radiant_temp_c = read_optional_f64(tr, tr.t(keys::PROMPT_TR_OPTIONAL))?;
    request.air_velocity_m_per_s = read_optional_f64(tr, tr.t(keys::PROMPT_VEL_OPTIONAL))?;
    request.vapor_pressure_pa = read_optional_f64(tr, tr.t(keys::PROMPT_PA_OPTIONAL))?;

    let month = chrono::Local::now().month();
    let mut rng = rand::thread_rng();
    let input = comfort::resolve_request(&request, month, &mut rng)
        .map_err(comfort::ComfortError::from)?;
    let result = comfort::compute_pmv(&input).map_err(comfort::ComfortError::from)?;
    let assessment = comfort::assess(result.pmv);

    println!("{} {:+.2}", tr.t(keys::RESULT_PMV), assessment.pmv);
    println!("{} {:+.2}", tr.t(keys::RESULT_APMV), assessment.apmv);
    println!("{} {:.1} %", tr.t(keys::RESULT_PPD), assessment.ppd);
    println!(
        "{} {:.2} °C",
        tr.t(keys::RESULT_CLOTHING_TEMP),
        result.clothing_surface_temp_c
    );
    println!("{} {}", tr.t(keys::RESULT_ITERATIONS), result.iterations);
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::Pressure),
        3 => Some(QuantityKind::Velocity),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or(tr.language_code())
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = Some(Language::Ko.as_code().to_string()),
        "2" => cfg.language = Some(Language::En.as_code().to_string()),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력은 None으로 처리하는 선택 숫자 입력.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_temperature_unit(tr: &Translator) -> Result<TemperatureUnit, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let unit = match sel.trim() {
        "2" => TemperatureUnit::Kelvin,
        "3" => TemperatureUnit::Fahrenheit,
        _ => TemperatureUnit::Celsius,
    };
    Ok(unit)
}
