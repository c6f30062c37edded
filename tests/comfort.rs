//! Fanger 모델 공표값 대비 PMV/APMV/PPD 회귀 테스트.
use comfort_toolbox::comfort::{
    adjusted_pmv, compute_pmv, predicted_percent_dissatisfied, saturated_vapor_pressure_kpa,
    PmvError, PmvInput, MAX_ITERATIONS,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.10} got {actual:.10} (diff {diff:.2e}, tol {rel_tol})"
    );
}

fn input(
    clo: f64,
    met: f64,
    wme: f64,
    ta: f64,
    tr: f64,
    vel: f64,
    rh: f64,
    pa: f64,
) -> PmvInput {
    PmvInput {
        clothing_clo: clo,
        metabolic_met: met,
        external_work_met: wme,
        air_temp_c: ta,
        mean_radiant_temp_c: tr,
        air_velocity_m_per_s: vel,
        relative_humidity_pct: rh,
        vapor_pressure_pa: pa,
    }
}

#[test]
fn typical_office_conditions_converge() {
    // 전형적 사무 환경: CLO=0.5, MET=1.2, TA=TR=24°C, VEL=0.1m/s, RH=50%
    let res = compute_pmv(&input(0.5, 1.2, 0.0, 24.0, 24.0, 0.1, 50.0, 0.0)).expect("converges");
    assert_close("pmv", res.pmv, -0.2131771123, 1e-9);
    assert!(res.iterations <= MAX_ITERATIONS, "iter={}", res.iterations);
    assert!(res.pmv > -3.0 && res.pmv < 3.0, "pmv={}", res.pmv);
    assert!(
        (res.clothing_surface_temp_c - 24.0).abs() < 15.0,
        "tcl={}",
        res.clothing_surface_temp_c
    );
}

#[test]
fn cool_leaning_winter_conditions() {
    // CLO=1.0, MET=1.0, TA=TR=20°C, VEL=0.1m/s, RH=60% → 서늘한 쪽
    let res = compute_pmv(&input(1.0, 1.0, 0.0, 20.0, 20.0, 0.1, 60.0, 0.0)).expect("converges");
    assert_close("pmv", res.pmv, -0.8170675236, 1e-9);
    assert!(res.pmv > -1.0 && res.pmv < 0.0, "pmv={}", res.pmv);
    let ppd = predicted_percent_dissatisfied(res.pmv);
    assert_close("ppd", ppd, 19.0798352861, 1e-9);
    assert!(ppd > 10.0, "ppd={ppd}");
}

#[test]
fn warm_humid_conditions() {
    let res = compute_pmv(&input(0.5, 1.2, 0.0, 30.0, 30.0, 0.1, 70.0, 0.0)).expect("converges");
    assert_close("pmv", res.pmv, 1.7956323210, 1e-9);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let inp = input(0.5, 1.2, 0.0, 24.0, 24.0, 0.1, 50.0, 0.0);
    let a = compute_pmv(&inp).expect("first");
    let b = compute_pmv(&inp).expect("second");
    assert_eq!(a.pmv.to_bits(), b.pmv.to_bits());
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn supplied_vapor_pressure_ignores_humidity() {
    // PA를 직접 주면 상대습도는 완전히 무시되어야 한다.
    let low_rh = compute_pmv(&input(0.5, 1.2, 0.0, 24.0, 24.0, 0.1, 30.0, 1486.6)).expect("rh=30");
    let high_rh = compute_pmv(&input(0.5, 1.2, 0.0, 24.0, 24.0, 0.1, 80.0, 1486.6)).expect("rh=80");
    assert_eq!(low_rh.pmv.to_bits(), high_rh.pmv.to_bits());
    assert_close("pmv", low_rh.pmv, -0.2143077303, 1e-9);
}

#[test]
fn extreme_conditions_report_non_convergence() {
    // 과도한 착의량 + 고온 복사 환경은 150회 안에 수렴하지 않는다.
    let err = compute_pmv(&input(160.0, 8.0, 0.0, 150.0, 150.0, 0.1, 50.0, 0.0))
        .expect_err("must not converge");
    assert_eq!(
        err,
        PmvError::NotConverged {
            iterations: MAX_ITERATIONS + 1
        }
    );
}

#[test]
fn ppd_bounds_and_minimum_at_neutral() {
    assert_close("ppd(0)", predicted_percent_dissatisfied(0.0), 5.0, 1e-12);
    let mut pmv = -3.0;
    while pmv <= 3.0 {
        let ppd = predicted_percent_dissatisfied(pmv);
        assert!((0.0..=100.0).contains(&ppd), "pmv={pmv} ppd={ppd}");
        assert!(
            ppd >= predicted_percent_dissatisfied(0.0),
            "minimum must be at pmv=0 (pmv={pmv}, ppd={ppd})"
        );
        pmv += 0.125;
    }
}

#[test]
fn apmv_neutral_is_exactly_zero() {
    assert_eq!(adjusted_pmv(0.0), 0.0);
}

#[test]
fn apmv_asymmetric_coefficients() {
    // 온난측 계수 0.21, 한랭측 계수 -0.49
    assert_close("warm", adjusted_pmv(1.0), 1.0 / 1.21, 1e-12);
    assert_close("cool", adjusted_pmv(-1.0), -1.0 / 1.49, 1e-12);
}

#[test]
fn saturated_vapor_pressure_reference_points() {
    assert_close("fnps(24)", saturated_vapor_pressure_kpa(24.0), 2.9833531213, 1e-9);
    assert_close("fnps(20)", saturated_vapor_pressure_kpa(20.0), 2.3372167172, 1e-9);
}

#[test]
fn saturated_vapor_pressure_monotonic_in_comfort_range() {
    let mut prev = saturated_vapor_pressure_kpa(0.0);
    let mut t = 0.5;
    while t <= 40.0 {
        let next = saturated_vapor_pressure_kpa(t);
        assert!(next > prev, "not monotonic at t={t}: {next} <= {prev}");
        prev = next;
        t += 0.5;
    }
}
