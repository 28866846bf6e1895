//! # Stock Core
//!
//! 일봉 수집 파이프라인의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 수집기 전반에서 사용되는 기본 타입을 제공합니다:
//! - 일봉(OHLCV) 데이터와 종목 메타데이터
//! - 수집 날짜 범위
//! - 로깅 인프라

pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
