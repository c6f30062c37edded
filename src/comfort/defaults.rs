use rand::Rng;

/// 대사량 기본값 [met]. 가벼운 사무 활동 수준.
pub const DEFAULT_METABOLIC_MET: f64 = 1.2;

/// 외부 일 기본값 [met].
pub const DEFAULT_EXTERNAL_WORK_MET: f64 = 0.0;

/// 월(1~12)별 계절 표준 착의량 테이블 [clo].
pub const SEASONAL_CLO: [f64; 12] = [
    1.34, 1.18, 0.83, 0.59, 0.41, 0.33, 0.31, 0.31, 0.44, 0.51, 0.76, 1.26,
];

/// 기본값 결정 시 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultsError {
    /// 1~12 범위를 벗어난 월
    InvalidMonth(u32),
}

impl std::fmt::Display for DefaultsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultsError::InvalidMonth(m) => write!(f, "유효하지 않은 월: {m} (1~12만 허용)"),
        }
    }
}

impl std::error::Error for DefaultsError {}

/// 월(1~12)에 해당하는 계절 기본 착의량 [clo]을 반환한다.
///
/// 범위를 벗어난 월은 오류로 처리한다.
pub fn seasonal_clo(month: u32) -> Result<f64, DefaultsError> {
    if (1..=12).contains(&month) {
        Ok(SEASONAL_CLO[(month - 1) as usize])
    } else {
        Err(DefaultsError::InvalidMonth(month))
    }
}

/// 기류 속도가 지정되지 않았을 때의 기본값 [m/s].
///
/// 실내 미기류 가정으로 0.07~0.12 범위에서 0.01 간격으로 무작위 선택한다.
/// 무작위성은 이 기본값 계층에만 존재하며 계산 코어는 순수 함수로 유지된다.
pub fn default_air_velocity<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(7..=12) as f64 / 100.0
}
