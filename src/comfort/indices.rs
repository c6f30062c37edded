/// PMV로부터 적응형 PMV(APMV)를 계산한다.
///
/// 온난측(PMV ≥ 0)은 계수 0.21, 한랭측은 -0.49를 사용한다 (재실자의
/// 비대칭 적응 반응 모델). PMV가 정확히 -1/계수(한랭측 약 -4.76)이면
/// 분모가 0이 되어 비유한 값이 반환된다. 현실적인 PMV 범위에서는 발생하지
/// 않으므로 가드하지 않는다.
pub fn adjusted_pmv(pmv: f64) -> f64 {
    let coefficient = if pmv >= 0.0 { 0.21 } else { -0.49 };
    pmv / (1.0 + coefficient * pmv)
}

/// PMV로부터 예상 불만족자 비율 PPD [%]를 계산한다.
///
/// PPD = 100 - 95·exp(-0.03353·PMV⁴ - 0.2179·PMV²).
/// PMV=0에서 최소값 약 5%가 되고 100%에 점근하므로 항상 [0, 100] 안에 있다.
pub fn predicted_percent_dissatisfied(pmv: f64) -> f64 {
    100.0 - 95.0 * (-0.03353 * pmv.powi(4) - 0.2179 * pmv.powi(2)).exp()
}
