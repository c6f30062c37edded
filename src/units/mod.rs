//! 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod temperature;
pub mod velocity;

pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
