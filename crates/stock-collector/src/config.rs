//! 환경변수 기반 설정 모듈.

use crate::error::CollectorError;
use crate::Result;
use std::time::Duration;
use stock_data::DatabaseConfig;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 데이터베이스 설정
    pub database: DatabaseConfig,
    /// 일봉 수집 설정
    pub ingest: IngestConfig,
}

/// 일봉 수집 설정
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// 종목 간 딜레이 (밀리초)
    pub request_delay_ms: u64,
    /// INSERT 문 하나에 담을 일봉 수
    pub batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: 1_000,
            batch_size: 500,
        }
    }
}

impl CollectorConfig {
    /// 데이터베이스 URL과 기본값으로 설정 생성
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig::new(database_url),
            ingest: IngestConfig::default(),
        }
    }

    /// `.env`와 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            CollectorError::Config("DATABASE_URL 환경변수가 설정되지 않았습니다".to_string())
        })?;

        let defaults = IngestConfig::default();
        let mut database = DatabaseConfig::new(database_url);
        database.connect_timeout_secs =
            env_var_parse("DB_CONNECT_TIMEOUT_SECS", database.connect_timeout_secs);

        Ok(Self {
            database,
            ingest: IngestConfig {
                request_delay_ms: env_var_parse("INGEST_REQUEST_DELAY_MS", defaults.request_delay_ms),
                batch_size: env_var_parse("INGEST_BATCH_SIZE", defaults.batch_size),
            },
        })
    }
}

impl IngestConfig {
    /// 종목 간 딜레이를 Duration으로 반환
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
