//! 시장 데이터 조회 및 저장.
//!
//! 이 crate는 다음을 제공합니다:
//! - 시장 데이터 Provider 추상화와 Yahoo Finance 구현
//! - PostgreSQL(TimescaleDB) 저장소 (메타데이터 insert-skip, 일봉 upsert)
//! - 종목 목록 CSV 파일 읽기/쓰기

pub mod error;
pub mod instruments;
pub mod provider;
pub mod storage;

pub use error::{DataError, Result};
pub use instruments::{read_instruments, write_instruments};
pub use provider::{MarketDataProvider, YahooProvider};
pub use storage::{Database, DatabaseConfig, MarketStore, PgMarketStore};
