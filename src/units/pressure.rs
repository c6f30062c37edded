use serde::{Deserialize, Serialize};

/// 압력 단위. 수증기 분압 입력에 쓰이며 내부 기준은 Pa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    HectoPascal,
    KiloPascal,
    MmHg,
    Atm,
}

const PA_PER_MMHG: f64 = 133.322;
const PA_PER_ATM: f64 = 101_325.0;

/// 주어진 압력을 Pa로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::HectoPascal => value * 100.0,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::MmHg => value * PA_PER_MMHG,
        PressureUnit::Atm => value * PA_PER_ATM,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::HectoPascal => value_pa / 100.0,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::MmHg => value_pa / PA_PER_MMHG,
        PressureUnit::Atm => value_pa / PA_PER_ATM,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
