//! 가격 표현을 위한 Decimal 유틸리티.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 가격 저장 시 유지하는 소수점 자릿수.
///
/// 1e-12 미만은 f64 변환 잡음으로 보고 버립니다. 소수점 아래 여러 자리의
/// 암호화폐 가격(예: 0.00001234)은 그대로 유지됩니다.
pub const PRICE_SCALE: u32 = 12;

/// 부동소수점 가격을 `Price`로 변환합니다.
///
/// NaN, 무한대처럼 표현할 수 없는 값이면 `None`을 반환합니다.
/// 부동소수점 잡음을 없애기 위해 `PRICE_SCALE` 자릿수로 반올림합니다.
pub fn price_from_f64(value: f64) -> Option<Price> {
    Decimal::from_f64(value).map(|d| {
        d.round_dp_with_strategy(PRICE_SCALE, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_from_f64() {
        assert_eq!(price_from_f64(187.15), Some(dec!(187.15)));
        assert_eq!(price_from_f64(0.1 + 0.2), Some(dec!(0.3)));
        assert_eq!(price_from_f64(0.12345678), Some(dec!(0.12345678)));
    }

    #[test]
    fn test_price_from_f64_keeps_sub_micro_prices() {
        assert_eq!(price_from_f64(0.00001234), Some(dec!(0.00001234)));
        assert_eq!(price_from_f64(0.000000123456), Some(dec!(0.000000123456)));
    }

    #[test]
    fn test_price_from_non_finite() {
        assert_eq!(price_from_f64(f64::NAN), None);
        assert_eq!(price_from_f64(f64::INFINITY), None);
    }
}
