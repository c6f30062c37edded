/// 공기 온도 [°C]로 포화 수증기압 [kPa]을 계산한다.
///
/// Fanger 모델의 FNPS 식: exp(16.6536 - 4030.183 / (T + 235)).
/// T ≤ -235 °C에서는 분모 특이점으로 비유한 값이 반환되지만, 실제 쾌적도
/// 평가 범위에서는 도달하지 않으므로 별도 가드를 두지 않는다.
pub fn saturated_vapor_pressure_kpa(temp_c: f64) -> f64 {
    (16.6536 - 4030.183 / (temp_c + 235.0)).exp()
}

/// 상대습도 [%]와 공기 온도 [°C]로 수증기 분압 [Pa]을 유도한다.
///
/// kPa → Pa 환산(×1000)과 상대습도 비율(÷100)을 합쳐 ×10으로 처리한다.
pub fn vapor_pressure_from_rh_pa(relative_humidity_pct: f64, air_temp_c: f64) -> f64 {
    relative_humidity_pct * 10.0 * saturated_vapor_pressure_kpa(air_temp_c)
}
