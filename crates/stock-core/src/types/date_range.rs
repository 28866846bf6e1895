//! 수집 날짜 범위.
//!
//! 시작일은 항상 포함입니다. 종료일의 포함 여부는 데이터 제공자가
//! 결정합니다 (Yahoo Finance는 종료일 자정을 `period2`로 받으므로 사실상 제외).
//! 종료일이 시작일과 같거나 앞서면 빈 범위로 취급합니다.

use crate::error::{StockError, StockResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CLI와 입력 파일에서 사용하는 날짜 형식.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 일봉 조회 날짜 범위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// 시작일 (포함)
    pub start: NaiveDate,
    /// 종료일 (제공자 정의, 일반적으로 제외)
    pub end: NaiveDate,
}

impl DateRange {
    /// 새 날짜 범위를 생성합니다.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `YYYY-MM-DD` 문자열 두 개로 날짜 범위를 생성합니다.
    pub fn parse(start: &str, end: &str) -> StockResult<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// 조회할 날짜가 없는 범위인지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// 시작일 자정(UTC).
    pub fn start_utc(&self) -> DateTime<Utc> {
        midnight_utc(self.start)
    }

    /// 종료일 자정(UTC).
    pub fn end_utc(&self) -> DateTime<Utc> {
        midnight_utc(self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// `YYYY-MM-DD` 문자열을 날짜로 파싱합니다.
pub fn parse_date(value: &str) -> StockResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        StockError::InvalidInput(format!("날짜 형식 오류 '{}' (YYYY-MM-DD): {}", value, e))
    })
}

/// 날짜의 자정을 UTC 시각으로 변환합니다.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
