use crate::comfort::vapor;

/// PMV 반복 계산의 최대 허용 횟수.
pub const MAX_ITERATIONS: u32 = 150;

/// 의복 표면 온도(×100 스케일) 수렴 판정 기준.
const EPS: f64 = 0.00015;

/// PMV 계산 입력. 단위는 ASHRAE-55 / Fanger 모델 표준을 따른다.
///
/// 계산 코어는 입력 범위를 검증하지 않는다. 물리적으로 무의미한 값(음수
/// 착의량 등)은 호출 측에서 걸러야 하며, 그대로 넘기면 결과도 무의미한
/// 값(NaN 포함)이 될 수 있다.
#[derive(Debug, Clone, Copy)]
pub struct PmvInput {
    /// 착의량 [clo]
    pub clothing_clo: f64,
    /// 대사량 [met]
    pub metabolic_met: f64,
    /// 외부 일 [met]
    pub external_work_met: f64,
    /// 공기 온도 [°C]
    pub air_temp_c: f64,
    /// 평균 복사 온도 [°C]
    pub mean_radiant_temp_c: f64,
    /// 상대 기류 속도 [m/s]
    pub air_velocity_m_per_s: f64,
    /// 상대습도 [%]
    pub relative_humidity_pct: f64,
    /// 수증기 분압 [Pa]. 0이면 상대습도와 공기 온도로부터 유도하며,
    /// 0이 아니면 상대습도는 이후 계산에서 완전히 무시된다.
    pub vapor_pressure_pa: f64,
}

/// PMV 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct PmvResult {
    /// 예상 평균 온열감. -3(한랭) ~ +3(더움), 0이 중립이며 범위 제한은 없다.
    pub pmv: f64,
    /// 수렴한 의복 표면 온도 [°C]
    pub clothing_surface_temp_c: f64,
    /// 최종 대류 열전달 계수 [W/m²K]
    pub convective_coeff_w_m2k: f64,
    /// 수렴까지 수행한 반복 횟수
    pub iterations: u32,
}

/// PMV 계산 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmvError {
    /// 의복 표면 온도 반복이 150회 내에 수렴하지 않음.
    ///
    /// ISO 7730의 예제 구현은 이 경우 센티널 값 999999를 반환한다. 여기서는
    /// 실패를 명시적인 오류로 구분하므로 호출 측이 센티널을 해석할 필요가 없다.
    NotConverged { iterations: u32 },
}

impl std::fmt::Display for PmvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PmvError::NotConverged { iterations } => {
                write!(f, "의복 표면 온도가 {iterations}회 반복 내에 수렴하지 않았습니다")
            }
        }
    }
}

impl std::error::Error for PmvError {}

/// Fanger PMV를 계산한다.
///
/// 의복 표면 온도에 대한 감쇠 이분식 고정점 반복으로 열평형을 푼 뒤,
/// 여섯 가지 열손실 항으로 온열감 지수를 구한다. 반복 상한을 넘으면
/// [`PmvError::NotConverged`]를 반환한다.
pub fn compute_pmv(input: &PmvInput) -> Result<PmvResult, PmvError> {
    // 수증기 분압 [Pa]. 0이면 상대습도로부터 유도한다.
    let pa = if input.vapor_pressure_pa == 0.0 {
        vapor::vapor_pressure_from_rh_pa(input.relative_humidity_pct, input.air_temp_c)
    } else {
        input.vapor_pressure_pa
    };

    let icl = 0.155 * input.clothing_clo; // 의복 단열 저항 [m²K/W]
    let m = input.metabolic_met * 58.15; // 대사량 [W/m²]
    let w = input.external_work_met * 58.15; // 외부 일 [W/m²]
    let mw = m - w; // 체내 순 발열량 [W/m²]

    // 의복 면적 계수 (icl=0.078에서 연속인 구간별 모델)
    let fcl = if icl <= 0.078 {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };

    // 강제 대류 열전달 계수
    let hcf = 12.1 * input.air_velocity_m_per_s.sqrt();
    // Fanger 모델 관례에 따라 켈빈 오프셋은 273.15가 아니라 273을 쓴다.
    let taa = input.air_temp_c + 273.0;
    let tra = input.mean_radiant_temp_c + 273.0;

    // 의복 표면 온도 초기 추정. xf를 xn의 두 배에서 시작해 반복에 진입시킨다.
    let tcla = taa + (35.5 - input.air_temp_c) / (3.5 * icl + 0.1);
    let mut xn = tcla / 100.0;
    let mut xf = tcla / 50.0;

    let p1 = icl * fcl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = (308.7 - 0.028 * mw) + p2 * (tra / 100.0).powi(4);

    // 자연 대류 분기가 실행되기 전에 참조되므로 강제 대류 값으로 초기화한다.
    let mut hc = hcf;
    let mut iterations: u32 = 0;

    while (xn - xf).abs() > EPS {
        xf = (xf + xn) / 2.0;
        // 자연 대류 열전달 계수
        let hcn = 2.38 * (100.0 * xf - taa).abs().powf(0.25);
        // 강제/자연 대류 중 큰 쪽. 동률이면 자연 대류 값을 쓴다.
        if hcf > hcn {
            hc = hcf;
        } else {
            hc = hcn;
        }
        xn = (p5 + p4 * hc - p2 * xf.powi(4)) / (100.0 + p3 * hc);
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            return Err(PmvError::NotConverged { iterations });
        }
    }

    let tcl = 100.0 * xn - 273.0; // 의복 표면 온도 [°C]

    // 열손실 항 [W/m²]
    let hl1 = 3.05 * 0.001 * (5733.0 - 6.99 * mw - pa); // 피부 확산 증발
    let hl2 = if mw > 58.15 { 0.42 * (mw - 58.15) } else { 0.0 }; // 발한 증발
    let hl3 = 1.7 * 0.00001 * m * (5867.0 - pa); // 호흡 잠열
    let hl4 = 0.0014 * m * (34.0 - input.air_temp_c); // 호흡 현열
    let hl5 = 3.96 * fcl * (xn.powi(4) - (tra / 100.0).powi(4)); // 복사
    let hl6 = fcl * hc * (tcl - input.air_temp_c); // 대류

    // 온열감 전달 계수
    let ts = 0.303 * (-0.036 * m).exp() + 0.028;
    let pmv = ts * (mw - hl1 - hl2 - hl3 - hl4 - hl5 - hl6);

    Ok(PmvResult {
        pmv,
        clothing_surface_temp_c: tcl,
        convective_coeff_w_m2k: hc,
        iterations,
    })
}
