//! 수집 작업 모듈.

pub mod ingest;
pub mod instrument_list;

pub use ingest::{ingest_daily_bars, ingest_metadata, ingest_tickers, run};
pub use instrument_list::{build_instrument_list, parse_ticker_list, DEFAULT_TICKERS};
