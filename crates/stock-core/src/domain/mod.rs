//! 수집 대상 도메인 모델.

mod bar;
mod instrument;

pub use bar::*;
pub use instrument::*;
