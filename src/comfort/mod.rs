//! 온열 쾌적도(PMV/APMV/PPD) 계산 모듈 모음.

pub mod assessment;
pub mod defaults;
pub mod indices;
pub mod pmv;
pub mod vapor;

pub use assessment::*;
pub use indices::*;
pub use pmv::*;
pub use vapor::*;
