use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMFORT: &str = "main_menu.comfort";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const COMFORT_HEADING: &str = "comfort.heading";
    pub const COMFORT_NOTE_DEFAULTS: &str = "comfort.note_defaults";
    pub const PROMPT_AIR_TEMP: &str = "comfort.prompt_air_temp";
    pub const PROMPT_RELATIVE_HUMIDITY: &str = "comfort.prompt_relative_humidity";
    pub const PROMPT_CLO_OPTIONAL: &str = "comfort.prompt_clo_optional";
    pub const PROMPT_MET_OPTIONAL: &str = "comfort.prompt_met_optional";
    pub const PROMPT_WME_OPTIONAL: &str = "comfort.prompt_wme_optional";
    pub const PROMPT_TR_OPTIONAL: &str = "comfort.prompt_tr_optional";
    pub const PROMPT_VEL_OPTIONAL: &str = "comfort.prompt_vel_optional";
    pub const PROMPT_PA_OPTIONAL: &str = "comfort.prompt_pa_optional";
    pub const RESULT_PMV: &str = "comfort.result_pmv";
    pub const RESULT_APMV: &str = "comfort.result_apmv";
    pub const RESULT_PPD: &str = "comfort.result_ppd";
    pub const RESULT_CLOTHING_TEMP: &str = "comfort.result_clothing_temp";
    pub const RESULT_ITERATIONS: &str = "comfort.result_iterations";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
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
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Thermal Comfort Toolbox ===",
        MAIN_MENU_COMFORT => "1) 쾌적도 평가 (PMV/APMV/PPD)",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        COMFORT_HEADING => "\n-- 쾌적도 평가 --",
        COMFORT_NOTE_DEFAULTS => {
            "참고: 선택 항목은 빈 입력 시 기본값(착의량=계절 테이블, 대사량=1.2met, 기류=0.07~0.12m/s 무작위)을 사용합니다."
        }
        PROMPT_AIR_TEMP => "공기 온도 값: ",
        PROMPT_RELATIVE_HUMIDITY => "상대습도 [%]: ",
        PROMPT_CLO_OPTIONAL => "착의량 [clo] (없으면 엔터): ",
        PROMPT_MET_OPTIONAL => "대사량 [met] (없으면 엔터): ",
        PROMPT_WME_OPTIONAL => "외부 일 [met] (없으면 엔터): ",
        PROMPT_TR_OPTIONAL => "평균 복사 온도 [°C] (없으면 공기 온도와 동일): ",
        PROMPT_VEL_OPTIONAL => "기류 속도 [m/s] (없으면 엔터): ",
        PROMPT_PA_OPTIONAL => "수증기 분압 [Pa] (없으면 상대습도로 유도): ",
        RESULT_PMV => "PMV (예상 평균 온열감):",
        RESULT_APMV => "APMV (적응형 PMV):",
        RESULT_PPD => "PPD (예상 불만족자 비율):",
        RESULT_CLOTHING_TEMP => "의복 표면 온도:",
        RESULT_ITERATIONS => "수렴 반복 횟수:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 압력  3) 속도",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, Pa, m/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, kPa, fpm): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 저장되었습니다. 다음 실행부터 적용됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let text = match key {
        ERROR_PREFIX => "error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Thermal Comfort Toolbox ===",
        MAIN_MENU_COMFORT => "1) Comfort assessment (PMV/APMV/PPD)",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit converter",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        COMFORT_HEADING => "\n-- Comfort Assessment --",
        COMFORT_NOTE_DEFAULTS => {
            "Note: optional items fall back to defaults on empty input (clothing=seasonal table, metabolic=1.2met, air speed=random 0.07-0.12m/s)."
        }
        PROMPT_AIR_TEMP => "Air temperature value: ",
        PROMPT_RELATIVE_HUMIDITY => "Relative humidity [%]: ",
        PROMPT_CLO_OPTIONAL => "Clothing insulation [clo] (enter to skip): ",
        PROMPT_MET_OPTIONAL => "Metabolic rate [met] (enter to skip): ",
        PROMPT_WME_OPTIONAL => "External work [met] (enter to skip): ",
        PROMPT_TR_OPTIONAL => "Mean radiant temperature [°C] (enter = same as air): ",
        PROMPT_VEL_OPTIONAL => "Air velocity [m/s] (enter to skip): ",
        PROMPT_PA_OPTIONAL => "Water vapor pressure [Pa] (enter = derive from RH): ",
        RESULT_PMV => "PMV (predicted mean vote):",
        RESULT_APMV => "APMV (adaptive PMV):",
        RESULT_PPD => "PPD (predicted percentage dissatisfied):",
        RESULT_CLOTHING_TEMP => "Clothing surface temperature:",
        RESULT_ITERATIONS => "Iterations to converge:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Temperature  2) Pressure  3) Velocity",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Enter value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, Pa, m/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, kPa, fpm): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported number.",
        TEMPERATURE_UNIT_OPTIONS => "Temperature unit: 1=°C 2=K 3=°F",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Korean  2) English",
        SETTINGS_PROMPT_CHANGE => "Number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, leaving unchanged.",
        SETTINGS_SAVED => "Language saved. Takes effect from the next run.",
        _ => return None,
    };
    Some(text)
}
