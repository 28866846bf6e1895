//! 데이터 Provider 모듈.
//!
//! 수집기가 사용하는 두 가지 조회를 정의합니다:
//! - 종목 설명 (이름, 섹터, 산업)
//! - 날짜 범위 일봉
//!
//! ## Yahoo Finance
//! - `YahooProvider`: quoteSummary / chart API 기반 구현

pub mod yahoo;

pub use yahoo::YahooProvider;

use crate::error::Result;
use async_trait::async_trait;
use stock_core::{DailyBar, DateRange, InstrumentProfile};

/// 시장 데이터 제공자.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Provider 이름 (로그용)
    fn name(&self) -> &str;

    /// 종목 설명을 조회합니다.
    ///
    /// 제공자에 해당 종목 정보가 없으면 `Ok(None)`을 반환합니다.
    async fn describe(&self, ticker: &str) -> Result<Option<InstrumentProfile>>;

    /// 날짜 범위의 일봉을 시간순으로 조회합니다.
    ///
    /// 데이터가 없으면 빈 벡터를 반환합니다. 종료일 포함 여부는 제공자 정의입니다.
    async fn daily_bars(&self, ticker: &str, range: &DateRange) -> Result<Vec<DailyBar>>;
}
