//! 저장소 모듈.
//!
//! - `stock_metadata`: 종목 메타데이터, 이미 있으면 건너뜀 (insert-skip)
//! - `stock_data_daily`: 일봉, `(time, ticker)` 충돌 시 덮어씀 (upsert)

pub mod postgres;

pub use postgres::{Database, DatabaseConfig, PgMarketStore};

use crate::error::Result;
use async_trait::async_trait;
use stock_core::{DailyBar, InstrumentMetadata};

/// 수집 결과를 저장하는 저장소.
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// 메타데이터를 삽입합니다.
    ///
    /// 같은 ticker 행이 이미 있으면 아무것도 바꾸지 않고 `Ok(false)`를 반환합니다.
    async fn insert_metadata(&self, metadata: &InstrumentMetadata) -> Result<bool>;

    /// 일봉을 하나의 트랜잭션으로 upsert합니다.
    ///
    /// 전체 배치가 성공해야 커밋되며, 실패하면 이번 호출의 변경은 모두 롤백됩니다.
    /// 반영된 행 수를 반환합니다.
    async fn upsert_daily_bars(&self, bars: &[DailyBar]) -> Result<usize>;

    /// 연결을 닫습니다.
    async fn close(&self);
}
