//! 에러 타입 정의.

use std::fmt;
use stock_core::StockError;
use stock_data::DataError;

/// Collector 에러 타입.
///
/// 이 타입이 `run`에서 반환되면 작업 전체가 중단된 것입니다.
/// 종목 단위 실패는 로그만 남기고 여기까지 올라오지 않습니다.
#[derive(Debug)]
pub enum CollectorError {
    /// 종목 목록 파일 에러 (없음, 읽기 실패, ticker 컬럼 없음)
    InstrumentsFile(String),
    /// 데이터베이스 연결 에러
    Database(DataError),
    /// 설정 에러
    Config(String),
    /// 데이터 소스 에러 (Yahoo 등)
    DataSource(String),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstrumentsFile(msg) => write!(f, "Instruments file error: {}", msg),
            Self::Database(e) => write!(f, "Database error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::DataSource(msg) => write!(f, "Data source error: {}", msg),
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DataError> for CollectorError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::InstrumentsFile(msg) => Self::InstrumentsFile(msg),
            DataError::FetchError(_) | DataError::ParseError(_) => Self::DataSource(err.to_string()),
            _ => Self::Database(err),
        }
    }
}

impl From<StockError> for CollectorError {
    fn from(err: StockError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
