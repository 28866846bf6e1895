//! Yahoo Finance 데이터 제공자.
//!
//! - 종목 설명: quoteSummary API (`quoteType.longName`, `assetProfile.sector/industry`)
//! - 일봉: chart API, 간격 `1d`
//!
//! 심볼은 Yahoo Finance 형식 그대로 전달합니다 (예: "AAPL", "BTC-USD", "005930.KS").
//! 종료일은 `period2`로 전달되므로 해당 날짜의 일봉은 포함되지 않습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use stock_data::provider::{MarketDataProvider, YahooProvider};
//! use stock_core::DateRange;
//!
//! let provider = YahooProvider::new()?;
//! let range = DateRange::parse("2024-01-01", "2024-02-01")?;
//! let bars = provider.daily_bars("AAPL", &range).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use stock_core::{dedup_bars, midnight_utc, price_from_f64, DailyBar, DateRange, InstrumentProfile};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::debug;
use yahoo_finance_api as yahoo;

use super::MarketDataProvider;
use crate::error::{DataError, Result};

/// 일봉 조회 간격.
const DAILY_INTERVAL: &str = "1d";

/// Yahoo Finance 데이터 제공자.
pub struct YahooProvider {
    /// `get_ticker_info`가 `&mut self`를 요구하므로 Mutex로 감쌈
    connector: Mutex<yahoo::YahooConnector>,
}

impl YahooProvider {
    /// 새로운 Yahoo Finance 제공자 생성.
    pub fn new() -> Result<Self> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| DataError::ConnectionError(format!("Yahoo Finance 연결 실패: {}", e)))?;

        Ok(Self {
            connector: Mutex::new(connector),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn describe(&self, ticker: &str) -> Result<Option<InstrumentProfile>> {
        debug!(ticker = ticker, "Yahoo Finance ticker info 조회");

        let summary = self
            .connector
            .lock()
            .await
            .get_ticker_info(ticker)
            .await
            .map_err(|e| {
                DataError::FetchError(format!("Yahoo ticker info 조회 실패 ({}): {}", ticker, e))
            })?;

        let Some(data) = summary
            .quote_summary
            .and_then(|qs| qs.result)
            .and_then(|r| r.into_iter().next())
        else {
            return Ok(None);
        };

        let asset_profile = data.asset_profile.as_ref();
        let profile = InstrumentProfile {
            name: data.quote_type.as_ref().and_then(|qt| qt.long_name.clone()),
            sector: asset_profile.and_then(|ap| ap.sector.clone()),
            industry: asset_profile.and_then(|ap| ap.industry.clone()),
        };

        Ok((!profile.is_empty()).then_some(profile))
    }

    async fn daily_bars(&self, ticker: &str, range: &DateRange) -> Result<Vec<DailyBar>> {
        if range.is_empty() {
            debug!(ticker = ticker, range = %range, "빈 날짜 범위, 조회 생략");
            return Ok(Vec::new());
        }

        let start = to_offset_datetime(range.start_utc())?;
        let end = to_offset_datetime(range.end_utc())?;

        debug!(
            ticker = ticker,
            interval = DAILY_INTERVAL,
            range = %range,
            "Yahoo Finance API 날짜 범위 호출"
        );

        let response = self
            .connector
            .lock()
            .await
            .get_quote_history_interval(ticker, start, end, DAILY_INTERVAL)
            .await
            .map_err(|e| DataError::FetchError(format!("Yahoo Finance API 오류 ({}): {}", ticker, e)))?;

        let quotes = quotes_or_empty(ticker, response.quotes())?;

        let bars = quotes
            .iter()
            .map(|q| {
                bar_from_quote(
                    ticker,
                    q.timestamp,
                    [q.open, q.high, q.low, q.close],
                    q.volume,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(dedup_bars(bars))
    }
}

/// `YResponse::quotes()` 결과를 정리합니다.
///
/// 거래일이 없는 범위(주말, 상장 이전 등)는 Yahoo가 `NoQuotes`/`NoResult`로
/// 응답하므로 빈 목록으로 취급합니다. 그 외 오류는 파싱 오류입니다.
fn quotes_or_empty(
    ticker: &str,
    quotes: std::result::Result<Vec<yahoo::Quote>, yahoo::YahooError>,
) -> Result<Vec<yahoo::Quote>> {
    match quotes {
        Ok(quotes) => Ok(quotes),
        Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => {
            debug!(ticker = ticker, "Yahoo 응답에 일봉 없음");
            Ok(Vec::new())
        }
        Err(e) => Err(DataError::ParseError(format!("Quote 파싱 오류 ({}): {}", ticker, e))),
    }
}

/// Yahoo quote 한 건을 일봉으로 변환.
///
/// 타임스탬프는 UTC 기준 거래일 자정으로 정규화합니다.
/// 가격이 유한하지 않거나 거래량이 `i64` 범위를 넘으면 오류입니다.
fn bar_from_quote(ticker: &str, timestamp: i64, ohlc: [f64; 4], volume: u64) -> Result<DailyBar> {
    let observed: DateTime<Utc> = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| DataError::ParseError(format!("잘못된 타임스탬프 ({}): {}", ticker, timestamp)))?;

    let [open, high, low, close] = ohlc.map(price_from_f64);
    let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close) else {
        return Err(DataError::ParseError(format!(
            "유효하지 않은 가격 ({} @ {}): {:?}",
            ticker, observed, ohlc
        )));
    };

    let volume = i64::try_from(volume)
        .map_err(|e| DataError::ParseError(format!("거래량 범위 초과 ({}): {}", ticker, e)))?;

    Ok(DailyBar::new(
        midnight_utc(observed.date_naive()),
        ticker,
        open,
        high,
        low,
        close,
        volume,
    ))
}

/// chrono UTC 시각을 `time::OffsetDateTime`으로 변환.
fn to_offset_datetime(dt: DateTime<Utc>) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(dt.timestamp())
        .map_err(|e| DataError::ParseError(format!("날짜 변환 오류 ({}): {}", dt, e)))
}
