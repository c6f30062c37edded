//! 단위 변환 스팟 체크.
use comfort_toolbox::conversion::{convert, ConversionError};
use comfort_toolbox::quantity::QuantityKind;

#[test]
fn temperature_round_values() {
    let f = convert(QuantityKind::Temperature, 100.0, "C", "F").expect("C->F");
    assert!((f - 212.0).abs() < 1e-9, "f={f}");
    let k = convert(QuantityKind::Temperature, 0.0, "C", "K").expect("C->K");
    assert!((k - 273.15).abs() < 1e-9, "k={k}");
    let c = convert(QuantityKind::Temperature, 98.6, "F", "C").expect("F->C");
    assert!((c - 37.0).abs() < 1e-9, "c={c}");
}

#[test]
fn pressure_round_values() {
    let pa = convert(QuantityKind::Pressure, 1.0, "atm", "Pa").expect("atm->Pa");
    assert!((pa - 101_325.0).abs() < 1e-6, "pa={pa}");
    let kpa = convert(QuantityKind::Pressure, 2983.0, "Pa", "kPa").expect("Pa->kPa");
    assert!((kpa - 2.983).abs() < 1e-9, "kpa={kpa}");
    let mmhg = convert(QuantityKind::Pressure, 760.0, "mmHg", "kPa").expect("mmHg->kPa");
    assert!((mmhg - 101.32472).abs() < 1e-3, "mmhg={mmhg}");
}

#[test]
fn velocity_round_values() {
    let kmh = convert(QuantityKind::Velocity, 1.0, "m/s", "km/h").expect("m/s->km/h");
    assert!((kmh - 3.6).abs() < 1e-9, "kmh={kmh}");
    let mps = convert(QuantityKind::Velocity, 196.850393700787, "fpm", "m/s").expect("fpm->m/s");
    assert!((mps - 1.0).abs() < 1e-9, "mps={mps}");
}

#[test]
fn unknown_unit_is_an_error() {
    let err = convert(QuantityKind::Temperature, 1.0, "furlong", "C").expect_err("unknown");
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "furlong"),
    }
}
