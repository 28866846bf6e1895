//! 일봉 및 메타데이터 수집 모듈.
//!
//! 종목마다 순서대로 `메타데이터 → 일봉 → 대기`를 수행합니다.
//! 종목 단위 실패는 로그만 남기고 다음 단계/종목으로 넘어가며,
//! 종목 목록 파일 오류와 DB 연결 실패만 작업 전체를 중단시킵니다.

use crate::stats::{BarsOutcome, MetadataOutcome};
use crate::{CollectorConfig, CollectorError, IngestStats, Result};
use std::path::Path;
use std::time::{Duration, Instant};
use stock_core::{DateRange, InstrumentMetadata};
use stock_data::{read_instruments, MarketDataProvider, MarketStore, PgMarketStore, YahooProvider};
use tracing::{error, info, warn};

/// 종목 목록 파일을 읽어 Yahoo Finance → PostgreSQL 수집을 실행합니다.
///
/// 순서: 종목 목록 읽기 → Provider 생성 → DB 연결 → 종목별 수집 → 연결 종료.
/// 파일을 읽지 못하면 연결을 시도하지 않고 반환합니다.
pub async fn run(
    config: &CollectorConfig,
    range: DateRange,
    instruments_path: &Path,
) -> Result<IngestStats> {
    let tickers = match read_instruments(instruments_path) {
        Ok(tickers) => tickers,
        Err(e) => {
            error!(
                path = %instruments_path.display(),
                error = %e,
                "종목 목록 파일을 읽을 수 없습니다"
            );
            return Err(e.into());
        }
    };

    info!(
        path = %instruments_path.display(),
        count = tickers.len(),
        "종목 목록 로드 완료"
    );

    let provider =
        YahooProvider::new().map_err(|e| CollectorError::DataSource(e.to_string()))?;

    let store = match PgMarketStore::connect(&config.database, config.ingest.batch_size).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "데이터베이스 연결 실패");
            return Err(e.into());
        }
    };

    let stats = ingest_tickers(
        &provider,
        &store,
        &tickers,
        &range,
        config.ingest.request_delay(),
    )
    .await;

    store.close().await;

    Ok(stats)
}

/// 종목 목록을 순서대로 수집합니다.
///
/// 어떤 종목이 실패해도 모든 종목에 대해 메타데이터와 일봉 단계를 시도하며,
/// 결과와 무관하게 종목마다 `pacing`만큼 대기합니다.
pub async fn ingest_tickers<P, S>(
    provider: &P,
    store: &S,
    tickers: &[String],
    range: &DateRange,
    pacing: Duration,
) -> IngestStats
where
    P: MarketDataProvider + ?Sized,
    S: MarketStore + ?Sized,
{
    let start = Instant::now();
    let mut stats = IngestStats::new();

    info!(
        provider = provider.name(),
        tickers = tickers.len(),
        range = %range,
        "일봉 수집 시작"
    );

    for (idx, ticker) in tickers.iter().enumerate() {
        stats.total += 1;

        info!(
            ticker = %ticker,
            progress = format!("{}/{}", idx + 1, tickers.len()),
            "Processing ticker"
        );

        let metadata = ingest_metadata(provider, store, ticker).await;
        stats.record_metadata(metadata);

        let bars = ingest_daily_bars(provider, store, ticker, range).await;
        stats.record_bars(bars);

        // Rate limiting
        tokio::time::sleep(pacing).await;
    }

    stats.elapsed = start.elapsed();
    stats.log_summary("일봉 수집");
    stats
}

/// 메타데이터 단계.
///
/// 이미 저장된 종목이면 기존 행을 그대로 둡니다. 실패해도 일봉 단계는 진행됩니다.
pub async fn ingest_metadata<P, S>(provider: &P, store: &S, ticker: &str) -> MetadataOutcome
where
    P: MarketDataProvider + ?Sized,
    S: MarketStore + ?Sized,
{
    let profile = match provider.describe(ticker).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            warn!(ticker = ticker, "메타데이터 없음");
            return MetadataOutcome::Missing;
        }
        Err(e) => {
            warn!(ticker = ticker, error = %e, "메타데이터 조회 실패");
            return MetadataOutcome::Failed;
        }
    };

    let metadata = InstrumentMetadata::from_profile(ticker, profile);

    match store.insert_metadata(&metadata).await {
        Ok(true) => {
            info!(ticker = ticker, name = ?metadata.name, "메타데이터 저장 완료");
            MetadataOutcome::Inserted
        }
        Ok(false) => {
            info!(ticker = ticker, "메타데이터 이미 존재, 건너뜀");
            MetadataOutcome::Existing
        }
        Err(e) => {
            warn!(ticker = ticker, error = %e, "메타데이터 저장 실패");
            MetadataOutcome::Failed
        }
    }
}

/// 일봉 단계.
///
/// 조회 결과 전체를 한 트랜잭션으로 upsert합니다. 저장이 실패하면 이번 종목의
/// 변경은 롤백되고 다음 종목으로 넘어갑니다.
pub async fn ingest_daily_bars<P, S>(
    provider: &P,
    store: &S,
    ticker: &str,
    range: &DateRange,
) -> BarsOutcome
where
    P: MarketDataProvider + ?Sized,
    S: MarketStore + ?Sized,
{
    let bars = match provider.daily_bars(ticker, range).await {
        Ok(bars) if bars.is_empty() => {
            warn!(ticker = ticker, range = %range, "조회된 일봉 없음");
            return BarsOutcome::Empty;
        }
        Ok(bars) => bars,
        Err(e) => {
            error!(ticker = ticker, error = %e, "일봉 조회 실패");
            return BarsOutcome::Failed;
        }
    };

    match store.upsert_daily_bars(&bars).await {
        Ok(rows) => {
            info!(ticker = ticker, rows = rows, "일봉 upsert 완료");
            BarsOutcome::Upserted(rows)
        }
        Err(e) => {
            error!(ticker = ticker, error = %e, "일봉 저장 실패, 롤백");
            BarsOutcome::Failed
        }
    }
}
