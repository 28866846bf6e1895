//! 수집 대상 종목 목록(CSV) 생성 CLI.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stock_collector::modules::{build_instrument_list, parse_ticker_list, DEFAULT_TICKERS};
use stock_core::{init_logging, LogConfig};

#[derive(Parser)]
#[command(name = "build-instruments")]
#[command(about = "Write the ticker list consumed by stock-collector", long_about = None)]
#[command(version)]
struct Cli {
    /// 출력 파일 경로 (기존 파일은 덮어씀)
    #[arg(long, short, default_value = "instruments.csv")]
    output: PathBuf,

    /// 기본 목록 대신 사용할 심볼 (쉼표로 구분, 예: "AAPL,MSFT,BTC-USD")
    #[arg(long)]
    tickers: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LogConfig::default())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let tickers: Vec<String> = match cli.tickers.as_deref() {
        Some(list) => parse_ticker_list(list),
        None => DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
    };

    build_instrument_list(&cli.output, &tickers)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
