//! 종목 목록 CSV 파일.
//!
//! 형식: 헤더 `ticker` 한 줄, 이후 한 줄에 심볼 하나.
//! 읽을 때 중복 제거나 심볼 검증은 하지 않으며 파일 순서를 유지합니다.

use crate::error::{DataError, Result};
use std::path::Path;

/// 종목 심볼 컬럼 이름.
pub const TICKER_COLUMN: &str = "ticker";

/// 종목 목록 파일을 읽습니다.
///
/// 앞뒤 공백은 제거하고 빈 값은 건너뜁니다. 그 외 컬럼은 무시합니다.
/// 파일이 없거나 `ticker` 컬럼이 없으면 `DataError::InstrumentsFile`을 반환합니다.
pub fn read_instruments(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file_error = |e: csv::Error| DataError::InstrumentsFile(format!("{}: {}", path.display(), e));

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(file_error)?;

    let ticker_idx = reader
        .headers()
        .map_err(file_error)?
        .iter()
        .position(|h| h == TICKER_COLUMN)
        .ok_or_else(|| {
            DataError::InstrumentsFile(format!(
                "{}: '{}' 컬럼이 없습니다",
                path.display(),
                TICKER_COLUMN
            ))
        })?;

    let mut tickers = Vec::new();
    for record in reader.records() {
        let record = record.map_err(file_error)?;
        match record.get(ticker_idx) {
            Some(ticker) if !ticker.is_empty() => tickers.push(ticker.to_string()),
            _ => {}
        }
    }

    Ok(tickers)
}

/// 종목 목록 파일을 씁니다.
///
/// 기존 파일은 덮어씁니다. 입력 순서를 유지하며 중복을 제거하지 않습니다.
/// 기록한 심볼 수를 반환합니다.
pub fn write_instruments<S: AsRef<str>>(path: impl AsRef<Path>, tickers: &[S]) -> Result<usize> {
    let path = path.as_ref();
    let file_error = |e: csv::Error| DataError::InstrumentsFile(format!("{}: {}", path.display(), e));

    let mut writer = csv::Writer::from_path(path).map_err(file_error)?;

    writer.write_record([TICKER_COLUMN]).map_err(file_error)?;
    for ticker in tickers {
        writer.write_record([ticker.as_ref()]).map_err(file_error)?;
    }

    writer
        .flush()
        .map_err(|e| DataError::InstrumentsFile(format!("{}: {}", path.display(), e)))?;

    Ok(tickers.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_then_read_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instruments.csv");

        let written = write_instruments(&path, &["SPY", "EEM", "BTC-USD", "EEM"]).unwrap();

        assert_eq!(written, 4);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "ticker\nSPY\nEEM\nBTC-USD\nEEM\n"
        );
        assert_eq!(read_instruments(&path).unwrap(), vec!["SPY", "EEM", "BTC-USD", "EEM"]);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instruments.csv");
        fs::write(&path, "ticker\nOLD1\nOLD2\nOLD3\n").unwrap();

        write_instruments(&path, &["NEW"]).unwrap();

        assert_eq!(read_instruments(&path).unwrap(), vec!["NEW"]);
    }

    #[test]
    fn test_read_trims_and_skips_blank_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instruments.csv");
        fs::write(&path, "name,ticker\nApple, AAPL \nnone,\nTesla,TSLA\n").unwrap();

        assert_eq!(read_instruments(&path).unwrap(), vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_instruments(dir.path().join("missing.csv"));

        assert!(matches!(result, Err(DataError::InstrumentsFile(_))));
    }

    #[test]
    fn test_read_without_ticker_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instruments.csv");
        fs::write(&path, "symbol\nAAPL\n").unwrap();

        let err = read_instruments(&path).unwrap_err();

        assert!(err.to_string().contains("ticker"));
    }
}
