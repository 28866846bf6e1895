//! 수집 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 메타데이터 단계 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataOutcome {
    /// 새 행 삽입
    Inserted,
    /// 이미 존재하여 건너뜀
    Existing,
    /// 제공자에 데이터 없음
    Missing,
    /// 조회 또는 저장 실패
    Failed,
}

/// 일봉 단계 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarsOutcome {
    /// upsert 완료 (행 수)
    Upserted(usize),
    /// 조회 성공, 데이터 없음
    Empty,
    /// 조회, 변환 또는 저장 실패
    Failed,
}

/// 수집 작업 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestStats {
    /// 처리한 종목 수
    pub total: usize,
    /// 메타데이터 신규 삽입
    pub metadata_inserted: usize,
    /// 메타데이터 기존 행 유지
    pub metadata_existing: usize,
    /// 메타데이터 없음
    pub metadata_missing: usize,
    /// 메타데이터 실패
    pub metadata_failed: usize,
    /// 일봉 저장 성공 종목 수
    pub bars_success: usize,
    /// 일봉 빈 결과 종목 수
    pub bars_empty: usize,
    /// 일봉 실패 종목 수
    pub bars_failed: usize,
    /// upsert된 총 일봉 수
    pub total_bars: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl IngestStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 메타데이터 단계 결과 반영
    pub fn record_metadata(&mut self, outcome: MetadataOutcome) {
        match outcome {
            MetadataOutcome::Inserted => self.metadata_inserted += 1,
            MetadataOutcome::Existing => self.metadata_existing += 1,
            MetadataOutcome::Missing => self.metadata_missing += 1,
            MetadataOutcome::Failed => self.metadata_failed += 1,
        }
    }

    /// 일봉 단계 결과 반영
    pub fn record_bars(&mut self, outcome: BarsOutcome) {
        match outcome {
            BarsOutcome::Upserted(rows) => {
                self.bars_success += 1;
                self.total_bars += rows;
            }
            BarsOutcome::Empty => self.bars_empty += 1,
            BarsOutcome::Failed => self.bars_failed += 1,
        }
    }

    /// 일봉 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.bars_success as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            metadata_inserted = self.metadata_inserted,
            metadata_existing = self.metadata_existing,
            metadata_missing = self.metadata_missing,
            metadata_failed = self.metadata_failed,
            bars_success = self.bars_success,
            bars_empty = self.bars_empty,
            bars_failed = self.bars_failed,
            total_bars = self.total_bars,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );
    }
}
