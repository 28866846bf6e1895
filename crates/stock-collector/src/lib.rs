//! Daily stock data collector.
//!
//! 이 crate는 두 개의 바이너리를 제공합니다:
//! - `build-instruments`: 수집 대상 종목 목록(CSV) 생성
//! - `stock-collector`: 종목별 메타데이터 및 일봉 수집 후 TimescaleDB 저장

pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use stats::IngestStats;
