//! Value Objects for the storefront

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Money in the store currency (Thai Baht).
///
/// Persisted as a bare JSON number, matching the cart snapshot format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const CURRENCY: &'static str = "THB";
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self { Self(amount) }
    pub fn baht(whole: i64) -> Self { Self(Decimal::from(whole)) }
    pub fn amount(&self) -> Decimal { self.0 }
    pub fn is_zero(&self) -> bool { self.0.is_zero() }
    pub fn add(&self, other: &Money) -> Money { Money(self.0 + other.0) }
    pub fn multiply(&self, qty: u32) -> Money { Money(self.0 * Decimal::from(qty)) }
    pub fn percent(&self, pct: Decimal) -> Money { Money(self.0 * pct / Decimal::ONE_HUNDRED) }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self { iter.fold(Money::ZERO, |acc, m| acc.add(&m)) }
}

/// Formats as whole baht with thousands separators, e.g. `฿1,200`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 { grouped.push(','); }
            grouped.push(ch);
        }
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        write!(f, "{sign}฿{grouped}")
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Money)
    }
}

/// Supported display languages. Thai is the primary locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

impl Locale {
    pub const PRIMARY: Locale = Locale::Th;

    pub fn code(&self) -> &'static str {
        match self { Self::Th => "th", Self::En => "en" }
    }

    pub fn other(&self) -> Locale {
        match self { Self::Th => Self::En, Self::En => Self::Th }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.code()) }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale `{0}`")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "th" => Ok(Self::Th),
            "en" => Ok(Self::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Text keyed by locale, serialized as `{"th": "...", "en": "..."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    pub fn new(th: impl Into<String>, en: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Locale::Th, th.into());
        map.insert(Locale::En, en.into());
        Self(map)
    }

    pub fn single(locale: Locale, text: impl Into<String>) -> Self {
        Self(BTreeMap::from([(locale, text.into())]))
    }

    /// Looks up `locale`, then the primary locale, then any non-empty entry.
    /// Empty strings count as missing, and the result is `""` when nothing matches.
    pub fn get(&self, locale: Locale) -> &str {
        let present = |l: &Locale| self.0.get(l).filter(|s| !s.is_empty());
        present(&locale)
            .or_else(|| present(&Locale::PRIMARY))
            .or_else(|| self.0.values().find(|s| !s.is_empty()))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn exact(&self, locale: Locale) -> Option<&str> { self.0.get(&locale).map(String::as_str) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::baht(1200).to_string(), "฿1,200");
        assert_eq!(Money::baht(950).to_string(), "฿950");
        assert_eq!(Money::new(Decimal::new(123456789, 2)).to_string(), "฿1,234,568");
        assert_eq!(Money::ZERO.to_string(), "฿0");
    }

    #[test]
    fn test_money_serializes_as_number() {
        let json = serde_json::to_value(Money::baht(1200)).unwrap();
        assert!(json.is_number());
        let back: Money = serde_json::from_str("1200").unwrap();
        assert_eq!(back, Money::baht(1200));
    }

    #[test]
    fn test_money_arithmetic() {
        let line = Money::baht(1200).multiply(3);
        assert_eq!(line, Money::baht(3600));
        assert_eq!(Money::baht(1000).percent(Decimal::new(7, 0)), Money::baht(70));
        let total: Money = [Money::baht(1), Money::baht(2)].into_iter().sum();
        assert_eq!(total, Money::baht(3));
    }

    #[test]
    fn test_localized_fallback() {
        let text = LocalizedText::new("เสื้อ", "Shirt");
        assert_eq!(text.get(Locale::En), "Shirt");
        assert_eq!(text.get(Locale::Th), "เสื้อ");

        let thai_only = LocalizedText::single(Locale::Th, "กางเกง");
        assert_eq!(thai_only.get(Locale::En), "กางเกง");

        let english_only = LocalizedText::single(Locale::En, "Pants");
        assert_eq!(english_only.get(Locale::Th), "Pants");

        assert_eq!(LocalizedText::default().get(Locale::Th), "");
    }

    #[test]
    fn test_locale_parse_and_serde() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(serde_json::to_string(&Locale::Th).unwrap(), "\"th\"");
        let text: LocalizedText = serde_json::from_str(r#"{"th":"ก","en":"a"}"#).unwrap();
        assert_eq!(text.exact(Locale::En), Some("a"));
    }
}
