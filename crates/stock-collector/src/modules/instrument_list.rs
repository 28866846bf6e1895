//! 수집 대상 종목 목록 생성 모듈.

use crate::Result;
use std::path::Path;
use stock_data::write_instruments;

/// 기본 수집 대상 종목.
///
/// 미국 대형주, 암호화폐(Yahoo `-USD` 형식), ETF가 섞여 있습니다.
/// 중복(`EEM`)은 의도적으로 그대로 둡니다. 목록 파일은 중복을 제거하지 않습니다.
pub const DEFAULT_TICKERS: &[&str] = &[
    "AAPL", "GOOGL", "AMZN", "MSFT", "META", "TSLA", "F", "NVDA", "KO", "NFLX", "INTC",
    "BTC-USD", "ETH-USD", "SOL-USD", "XRP-USD", "ADA-USD", "LINK-USD", "AVAX-USD",
    "SQQQ", "SOXL", "TQQQ", "SPY", "QQQ", "IWM", "TNA", "TLT", "TECE", "LQD", "EEM", "GDX",
    "KRE", "SPXS", "SHTSL", "EEM", "LEO", "BND", "STETH", "USDC", "FDUSD", "FIL", "WETH",
    "WBTC", "ETRN", "ADANI", "INFY",
];

/// 종목 목록 파일을 생성합니다 (기존 파일은 덮어씀).
pub fn build_instrument_list<S: AsRef<str>>(path: &Path, tickers: &[S]) -> Result<usize> {
    let count = write_instruments(path, tickers)?;
    tracing::info!(path = %path.display(), count, "종목 목록 생성 완료");
    Ok(count)
}

/// 쉼표로 구분된 심볼 파싱 (예: "AAPL, MSFT,SPY").
pub fn parse_ticker_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
