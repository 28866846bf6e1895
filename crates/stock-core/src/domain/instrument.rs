//! 종목 메타데이터.

use serde::{Deserialize, Serialize};

/// 데이터 제공자가 돌려준 종목 설명.
///
/// 제공자에 없는 필드는 `None`으로 그대로 전달하며 기본값을 만들어 넣지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentProfile {
    /// 표시 이름 (예: "Apple Inc.")
    pub name: Option<String>,
    /// 섹터
    pub sector: Option<String>,
    /// 산업
    pub industry: Option<String>,
}

impl InstrumentProfile {
    /// 모든 필드가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.sector.is_none() && self.industry.is_none()
    }
}

/// `stock_metadata` 테이블의 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentMetadata {
    /// 종목 심볼 (기본 키)
    pub ticker: String,
    /// 표시 이름
    pub name: Option<String>,
    /// 섹터
    pub sector: Option<String>,
    /// 산업
    pub industry: Option<String>,
}

impl InstrumentMetadata {
    /// 제공자 응답에서 메타데이터 행을 만듭니다.
    pub fn from_profile(ticker: impl Into<String>, profile: InstrumentProfile) -> Self {
        Self {
            ticker: ticker.into(),
            name: profile.name,
            sector: profile.sector,
            industry: profile.industry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_is_empty() {
        assert!(InstrumentProfile::default().is_empty());

        let profile = InstrumentProfile {
            sector: Some("Technology".to_string()),
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_metadata_passes_absent_fields_through() {
        let profile = InstrumentProfile {
            name: Some("Bitcoin USD".to_string()),
            sector: None,
            industry: None,
        };

        let meta = InstrumentMetadata::from_profile("BTC-USD", profile);

        assert_eq!(meta.ticker, "BTC-USD");
        assert_eq!(meta.name.as_deref(), Some("Bitcoin USD"));
        assert_eq!(meta.sector, None);
        assert_eq!(meta.industry, None);
    }
}
