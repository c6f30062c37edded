use rand::Rng;
use serde::Serialize;

use crate::comfort::defaults::{self, DefaultsError};
use crate::comfort::indices;
use crate::comfort::pmv::{compute_pmv, PmvError, PmvInput};

/// 쾌적도 평가 요청. `None`인 필드는 문서화된 기본값 정책으로 채운다.
///
/// 공기 온도와 상대습도는 필수, 나머지는 선택이다.
#[derive(Debug, Clone, Copy)]
pub struct ComfortRequest {
    /// 공기 온도 [°C] (필수)
    pub air_temp_c: f64,
    /// 상대습도 [%] (필수)
    pub relative_humidity_pct: f64,
    /// 착의량 [clo]. 없으면 계절(월) 테이블에서 결정한다.
    pub clothing_clo: Option<f64>,
    /// 대사량 [met]. 없으면 1.2.
    pub metabolic_met: Option<f64>,
    /// 외부 일 [met]. 없으면 0.
    pub external_work_met: Option<f64>,
    /// 평균 복사 온도 [°C]. 없으면 공기 온도와 동일하게 본다.
    pub mean_radiant_temp_c: Option<f64>,
    /// 상대 기류 속도 [m/s]. 없으면 0.07~0.12 범위 무작위 기본값.
    pub air_velocity_m_per_s: Option<f64>,
    /// 수증기 분압 [Pa]. 없으면 상대습도로부터 유도한다.
    pub vapor_pressure_pa: Option<f64>,
}

impl ComfortRequest {
    /// 필수 입력만 채운 요청을 만든다.
    pub fn new(air_temp_c: f64, relative_humidity_pct: f64) -> Self {
        Self {
            air_temp_c,
            relative_humidity_pct,
            clothing_clo: None,
            metabolic_met: None,
            external_work_met: None,
            mean_radiant_temp_c: None,
            air_velocity_m_per_s: None,
            vapor_pressure_pa: None,
        }
    }
}

/// 평가 결과 본문. JSON 직렬화 시 대문자 키(PMV/APMV/PPD)를 사용한다.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComfortAssessment {
    /// 예상 평균 온열감
    #[serde(rename = "PMV")]
    pub pmv: f64,
    /// 적응형 PMV
    #[serde(rename = "APMV")]
    pub apmv: f64,
    /// 예상 불만족자 비율 [%]
    #[serde(rename = "PPD")]
    pub ppd: f64,
}

/// 쾌적도 평가 전 과정에서 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortError {
    /// 기본값 결정 오류
    Defaults(DefaultsError),
    /// PMV 계산 오류
    Pmv(PmvError),
}

impl std::fmt::Display for ComfortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComfortError::Defaults(e) => write!(f, "기본값 결정 오류: {e}"),
            ComfortError::Pmv(e) => write!(f, "PMV 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for ComfortError {}

impl From<DefaultsError> for ComfortError {
    fn from(value: DefaultsError) -> Self {
        ComfortError::Defaults(value)
    }
}

impl From<PmvError> for ComfortError {
    fn from(value: PmvError) -> Self {
        ComfortError::Pmv(value)
    }
}

/// 요청에 기본값 정책을 적용해 PMV 계산 입력을 만든다.
///
/// `month`는 착의량 기본값 결정에 쓰는 현재 월(1~12)이고, `rng`는 기류
/// 속도 기본값 추첨에만 쓰인다. 두 값 모두 호출 측에서 주입하므로 이
/// 함수 자체는 재현 가능하게 테스트할 수 있다.
pub fn resolve_request<R: Rng + ?Sized>(
    request: &ComfortRequest,
    month: u32,
    rng: &mut R,
) -> Result<PmvInput, DefaultsError> {
    let clothing_clo = match request.clothing_clo {
        Some(clo) => clo,
        None => defaults::seasonal_clo(month)?,
    };
    Ok(PmvInput {
        clothing_clo,
        metabolic_met: request.metabolic_met.unwrap_or(defaults::DEFAULT_METABOLIC_MET),
        external_work_met: request
            .external_work_met
            .unwrap_or(defaults::DEFAULT_EXTERNAL_WORK_MET),
        air_temp_c: request.air_temp_c,
        mean_radiant_temp_c: request.mean_radiant_temp_c.unwrap_or(request.air_temp_c),
        air_velocity_m_per_s: request
            .air_velocity_m_per_s
            .unwrap_or_else(|| defaults::default_air_velocity(rng)),
        relative_humidity_pct: request.relative_humidity_pct,
        vapor_pressure_pa: request.vapor_pressure_pa.unwrap_or(0.0),
    })
}

/// 요청을 평가한다: 기본값 적용 → PMV → APMV/PPD.
pub fn evaluate<R: Rng + ?Sized>(
    request: &ComfortRequest,
    month: u32,
    rng: &mut R,
) -> Result<ComfortAssessment, ComfortError> {
    let input = resolve_request(request, month, rng)?;
    let result = compute_pmv(&input)?;
    Ok(assess(result.pmv))
}

/// 이미 계산된 PMV로부터 파생 지표를 묶어 결과 본문을 만든다.
pub fn assess(pmv: f64) -> ComfortAssessment {
    ComfortAssessment {
        pmv,
        apmv: indices::adjusted_pmv(pmv),
        ppd: indices::predicted_percent_dissatisfied(pmv),
    }
}
