//! Monetary input type for API boundary enforcement

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Strict-format monetary amount, validated during deserialization
///
/// Amounts arrive as JSON strings so clients cannot smuggle float artifacts
/// through JSON numbers. Rejected at the serde layer:
/// - `.5` (must be `0.5`) and `5.` (must be `5.0` or `5`)
/// - empty strings, `+` prefix, scientific notation
/// - negative amounts
/// - more than 2 decimal places
///
/// Business validation (minimums, balance) happens later in the services.
#[derive(Debug, Clone, Copy)]
pub struct StrictAmount(Decimal);

impl StrictAmount {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Amount cannot be empty".to_string());
        }
        if s.starts_with('.') {
            return Err("Invalid format: use 0.5 not .5".to_string());
        }
        if s.ends_with('.') {
            return Err("Invalid format: use 5.0 not 5.".to_string());
        }
        if s.contains('e') || s.contains('E') {
            return Err("Invalid format: scientific notation not allowed".to_string());
        }
        if s.starts_with('+') {
            return Err("Invalid format: explicit + sign not allowed".to_string());
        }
        if s.starts_with('-') {
            return Err("Amount must not be negative".to_string());
        }

        let d = Decimal::from_str(s).map_err(|_| format!("Invalid amount: {}", s))?;

        if d.scale() > 2 {
            return Err("Amount supports at most 2 decimal places".to_string());
        }

        Ok(Self(d))
    }
}

impl std::ops::Deref for StrictAmount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StrictAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_accepts_plain_amounts() {
        assert_eq!(StrictAmount::parse("40").unwrap().inner(), dec("40"));
        assert_eq!(StrictAmount::parse("10.50").unwrap().inner(), dec("10.50"));
        assert_eq!(StrictAmount::parse("0.5").unwrap().inner(), dec("0.5"));
        assert_eq!(StrictAmount::parse("0").unwrap().inner(), Decimal::ZERO);
    }

    #[test]
    fn test_rejects_malformed_forms() {
        assert!(StrictAmount::parse("").is_err());
        assert!(StrictAmount::parse(".5").is_err());
        assert!(StrictAmount::parse("5.").is_err());
        assert!(StrictAmount::parse("1.5e8").is_err());
        assert!(StrictAmount::parse("1E2").is_err());
        assert!(StrictAmount::parse("+10").is_err());
        assert!(StrictAmount::parse("abc").is_err());
    }

    #[test]
    fn test_rejects_negative_and_excess_scale() {
        assert!(StrictAmount::parse("-10").is_err());
        assert!(StrictAmount::parse("10.123").is_err());
        assert!(StrictAmount::parse("10.12").is_ok());
    }

    #[test]
    fn test_deserializes_from_json_string_only() {
        #[derive(serde::Deserialize)]
        struct Body {
            amount: StrictAmount,
        }
        let ok: Body = serde_json::from_str(r#"{"amount":"40"}"#).unwrap();
        assert_eq!(ok.amount.inner(), dec("40"));

        // JSON numbers bypass format control, so they are rejected
        assert!(serde_json::from_str::<Body>(r#"{"amount":40}"#).is_err());
    }
}
