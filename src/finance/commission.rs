//! Commission Calculator
//!
//! Pure arithmetic over [`Decimal`]: no rounding drift, no I/O. The net
//! amount is derived by subtraction so `commission + net == amount` holds
//! exactly for every input.

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Commission breakdown for a gross payout amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct CommissionBreakdown {
    /// Commission rate in percent (e.g. 15.0)
    #[schema(example = "15.0", value_type = String)]
    pub rate: Decimal,
    /// Platform cut: amount * rate / 100, rounded to cents
    #[schema(example = "6.00", value_type = String)]
    pub amount: Decimal,
    /// What the seller receives: gross - commission
    #[schema(example = "34.00", value_type = String)]
    pub net_amount: Decimal,
}

/// Split a gross amount into commission and net at the given percent rate
///
/// Commission is rounded to 2 decimal places (banker's rounding, the
/// `Decimal` default) since payouts settle in cents.
pub fn calculate(amount: Decimal, rate: Decimal) -> CommissionBreakdown {
    let commission = (amount * rate / Decimal::ONE_HUNDRED).round_dp(2);
    CommissionBreakdown {
        rate,
        amount: commission,
        net_amount: amount - commission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_forty_at_fifteen_percent() {
        // 40 at 15% -> 6 commission, 34 net
        let b = calculate(dec("40"), dec("15"));
        assert_eq!(b.amount, dec("6"));
        assert_eq!(b.net_amount, dec("34"));
    }

    #[test]
    fn test_sum_invariant_holds_exactly() {
        let cases = [
            ("40", "15"),
            ("10.01", "15"),
            ("99.99", "12.5"),
            ("0.01", "15"),
            ("1234.56", "7.25"),
            ("333.33", "33.33"),
        ];
        for (amount, rate) in cases {
            let b = calculate(dec(amount), dec(rate));
            assert_eq!(
                b.amount + b.net_amount,
                dec(amount),
                "sum invariant broken for amount={} rate={}",
                amount,
                rate
            );
        }
    }

    #[test]
    fn test_commission_formula() {
        // Unrounded cases match amount * rate / 100 exactly
        let b = calculate(dec("200"), dec("15"));
        assert_eq!(b.amount, dec("30"));
        assert_eq!(b.rate, dec("15"));
    }

    #[test]
    fn test_rounding_to_cents() {
        // 10.01 * 15% = 1.5015 -> 1.50
        let b = calculate(dec("10.01"), dec("15"));
        assert_eq!(b.amount, dec("1.50"));
        assert_eq!(b.net_amount, dec("8.51"));
    }

    #[test]
    fn test_zero_rate_takes_nothing() {
        let b = calculate(dec("50"), Decimal::ZERO);
        assert_eq!(b.amount, Decimal::ZERO);
        assert_eq!(b.net_amount, dec("50"));
    }

    #[test]
    fn test_deterministic() {
        let a = calculate(dec("77.77"), dec("15"));
        let b = calculate(dec("77.77"), dec("15"));
        assert_eq!(a, b);
    }
}
