//! 일봉(OHLCV) 데이터.

use crate::types::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 종목 하나의 하루치 OHLCV 관측값.
///
/// `(time, ticker)`가 저장소의 유일 키입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    /// 거래일 자정(UTC)
    pub time: DateTime<Utc>,
    /// 종목 심볼
    pub ticker: String,
    /// 시가
    pub open: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 종가
    pub close: Price,
    /// 거래량
    pub volume: i64,
}

impl DailyBar {
    /// 새 일봉을 생성합니다.
    pub fn new(
        time: DateTime<Utc>,
        ticker: impl Into<String>,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: i64,
    ) -> Self {
        Self {
            time,
            ticker: ticker.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 저장소 유일 키.
    pub fn key(&self) -> (DateTime<Utc>, &str) {
        (self.time, self.ticker.as_str())
    }
}

/// 일봉을 시간순으로 정렬하고 같은 `(time, ticker)`는 마지막 값만 남깁니다.
///
/// 한 번의 upsert 문이 같은 키를 두 번 건드리면 PostgreSQL이 거부하므로
/// 저장 전에 반드시 거쳐야 합니다.
pub fn dedup_bars(mut bars: Vec<DailyBar>) -> Vec<DailyBar> {
    // 안정 정렬이므로 같은 키 안에서는 입력 순서가 유지됨
    bars.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.ticker.cmp(&b.ticker)));

    let mut deduped: Vec<DailyBar> = Vec::with_capacity(bars.len());
    for bar in bars {
        match deduped.last_mut() {
            Some(last) if last.key() == bar.key() => *last = bar,
            _ => deduped.push(bar),
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn bar(day: u32, close: Price) -> DailyBar {
        let time = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        DailyBar::new(time, "AAPL", dec!(100), dec!(110), dec!(90), close, 1_000)
    }

    #[test]
    fn test_dedup_keeps_last_occurrence() {
        let bars = vec![bar(3, dec!(101)), bar(2, dec!(100)), bar(3, dec!(105))];

        let deduped = dedup_bars(bars);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].time.format("%d").to_string(), "02");
        assert_eq!(deduped[1].close, dec!(105));
    }

    #[test]
    fn test_dedup_distinguishes_tickers() {
        let mut other = bar(2, dec!(50));
        other.ticker = "MSFT".to_string();

        let deduped = dedup_bars(vec![bar(2, dec!(100)), other]);

        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_bars(Vec::new()).is_empty());
    }
}
