//! 기본값 정책(계절 착의량, 무작위 기류 속도)과 요청 평가 경로 테스트.
use rand::rngs::StdRng;
use rand::SeedableRng;

use comfort_toolbox::comfort::defaults::{
    default_air_velocity, seasonal_clo, DefaultsError, SEASONAL_CLO,
};
use comfort_toolbox::comfort::{evaluate, resolve_request, ComfortError, ComfortRequest};

#[test]
fn seasonal_clo_table_values() {
    assert_eq!(seasonal_clo(1), Ok(1.34));
    assert_eq!(seasonal_clo(7), Ok(0.31));
    assert_eq!(seasonal_clo(8), Ok(0.31));
    assert_eq!(seasonal_clo(12), Ok(1.26));
    // 겨울이 여름보다 두껍게 입는 테이블이어야 한다.
    assert!(SEASONAL_CLO[0] > SEASONAL_CLO[6]);
}

#[test]
fn out_of_range_month_is_rejected() {
    assert_eq!(seasonal_clo(0), Err(DefaultsError::InvalidMonth(0)));
    assert_eq!(seasonal_clo(13), Err(DefaultsError::InvalidMonth(13)));
}

#[test]
fn random_air_velocity_stays_in_documented_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let vel = default_air_velocity(&mut rng);
        assert!(
            (0.07..=0.12).contains(&vel),
            "velocity default out of range: {vel}"
        );
    }
}

#[test]
fn resolve_fills_documented_defaults() {
    let request = ComfortRequest::new(24.0, 50.0);
    let mut rng = StdRng::seed_from_u64(7);
    let input = resolve_request(&request, 6, &mut rng).expect("resolve");
    assert_eq!(input.clothing_clo, 0.33); // 6월 테이블 값
    assert_eq!(input.metabolic_met, 1.2);
    assert_eq!(input.external_work_met, 0.0);
    assert_eq!(input.mean_radiant_temp_c, input.air_temp_c);
    assert_eq!(input.vapor_pressure_pa, 0.0);
    assert!((0.07..=0.12).contains(&input.air_velocity_m_per_s));
}

#[test]
fn explicit_fields_override_defaults() {
    let mut request = ComfortRequest::new(24.0, 50.0);
    request.clothing_clo = Some(0.9);
    request.metabolic_met = Some(1.6);
    request.mean_radiant_temp_c = Some(26.0);
    request.air_velocity_m_per_s = Some(0.2);
    let mut rng = StdRng::seed_from_u64(7);
    let input = resolve_request(&request, 1, &mut rng).expect("resolve");
    assert_eq!(input.clothing_clo, 0.9);
    assert_eq!(input.metabolic_met, 1.6);
    assert_eq!(input.mean_radiant_temp_c, 26.0);
    assert_eq!(input.air_velocity_m_per_s, 0.2);
}

#[test]
fn evaluate_rejects_invalid_month_when_clo_defaulted() {
    let request = ComfortRequest::new(24.0, 50.0);
    let mut rng = StdRng::seed_from_u64(7);
    let err = evaluate(&request, 13, &mut rng).expect_err("invalid month");
    assert_eq!(
        err,
        ComfortError::Defaults(DefaultsError::InvalidMonth(13))
    );
}

#[test]
fn evaluate_produces_consistent_indices() {
    let mut request = ComfortRequest::new(20.0, 60.0);
    request.clothing_clo = Some(1.0);
    request.metabolic_met = Some(1.0);
    request.air_velocity_m_per_s = Some(0.1);
    let mut rng = StdRng::seed_from_u64(7);
    let assessment = evaluate(&request, 1, &mut rng).expect("evaluate");
    assert!(
        (assessment.pmv - (-0.8170675236)).abs() < 1e-9,
        "pmv={}",
        assessment.pmv
    );
    assert!(assessment.ppd > 10.0 && assessment.ppd < 30.0, "ppd={}", assessment.ppd);
    assert!(assessment.apmv > assessment.pmv, "한랭측 APMV는 PMV보다 완화되어야 한다");
}

#[test]
fn assessment_serializes_with_original_body_keys() {
    let mut request = ComfortRequest::new(24.0, 50.0);
    request.clothing_clo = Some(0.5);
    request.air_velocity_m_per_s = Some(0.1);
    let mut rng = StdRng::seed_from_u64(7);
    let assessment = evaluate(&request, 6, &mut rng).expect("evaluate");
    let value = serde_json::to_value(assessment).expect("serialize");
    let obj = value.as_object().expect("json object");
    assert!(obj.contains_key("PMV"));
    assert!(obj.contains_key("APMV"));
    assert!(obj.contains_key("PPD"));
    assert_eq!(obj.len(), 3);
}
