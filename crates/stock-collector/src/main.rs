//! Daily stock data collector CLI.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use stock_collector::{modules, CollectorConfig};
use stock_core::{init_logging, parse_date, DateRange, LogConfig, LogFormat};

#[derive(Parser)]
#[command(name = "stock-collector")]
#[command(about = "Fetch historical daily stock data and insert into TimescaleDB", long_about = None)]
#[command(version)]
struct Cli {
    /// 시작일 (YYYY-MM-DD, 포함)
    #[arg(value_parser = parse_date_arg)]
    start_date: NaiveDate,

    /// 종료일 (YYYY-MM-DD, Yahoo Finance 기준 제외)
    #[arg(value_parser = parse_date_arg)]
    end_date: NaiveDate,

    /// 종목 목록 CSV 파일 경로 (`ticker` 컬럼)
    #[arg(long, alias = "instruments_file", default_value = "instruments.csv")]
    instruments_file: PathBuf,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 로그 형식 (pretty, compact, json)
    #[arg(long, default_value = "compact")]
    log_format: LogFormat,

    /// 로그에 모듈 경로 포함
    #[arg(long)]
    log_target: bool,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 로깅 초기화
    init_logging(
        LogConfig::new(cli.log_level.clone())
            .with_format(cli.log_format)
            .with_target(cli.log_target),
    )?;

    tracing::info!("Stock Collector 시작");

    // 설정 로드
    let config = CollectorConfig::from_env()?;
    tracing::debug!(
        connect_timeout_secs = config.database.connect_timeout_secs,
        request_delay_ms = config.ingest.request_delay_ms,
        batch_size = config.ingest.batch_size,
        "설정 로드 완료"
    );

    let range = DateRange::new(cli.start_date, cli.end_date);
    if range.is_empty() {
        tracing::warn!(range = %range, "종료일이 시작일보다 늦지 않습니다. 조회 결과가 비어 있게 됩니다");
    }

    modules::run(&config, range, &cli.instruments_file).await?;

    tracing::info!("Stock Collector 종료");

    Ok(())
}
