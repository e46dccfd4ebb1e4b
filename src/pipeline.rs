//! Sorting and filtering of product listings.
//!
//! Every function here is pure: inputs are borrowed, results are new vectors,
//! and relative input order survives wherever the ordering does not decide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collation;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::{Locale, Money};

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    NameTh,
    NameEn,
    #[default]
    Featured,
    /// Keep catalog order.
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    /// Parses a listing sort key; unrecognized keys mean [`SortKey::Unsorted`].
    pub fn parse(key: &str) -> Self {
        match key {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name-th" => Self::NameTh,
            "name-en" => Self::NameEn,
            "featured" => Self::Featured,
            _ => Self::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::NameTh => "name-th",
            Self::NameEn => "name-en",
            Self::Featured => "featured",
            Self::Unsorted => "unsorted",
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Self::parse(s)) }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Returns `products` reordered by `key`. The sort is stable.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::PriceLow => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::NameTh => sorted.sort_by(|a, b| collation::compare(a.name_in(Locale::Th), b.name_in(Locale::Th))),
        SortKey::NameEn => sorted.sort_by(|a, b| collation::compare(a.name_in(Locale::En), b.name_in(Locale::En))),
        SortKey::Featured => sorted.sort_by_key(|p| !p.featured),
        SortKey::Unsorted => {}
    }
    sorted
}

/// Inclusive price bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange { pub min: Money, pub max: Money }

impl PriceRange {
    pub fn contains(&self, price: Money) -> bool { price >= self.min && price <= self.max }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub category: String,
    pub query: String,
    pub locale: Locale,
    pub in_stock_only: bool,
    pub price_range: Option<PriceRange>,
    pub sizes: Vec<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(), query: String::new(), locale: Locale::PRIMARY,
            in_stock_only: false, price_range: None, sizes: vec![],
        }
    }
}

impl ProductFilter {
    pub fn category(mut self, category: impl Into<String>) -> Self { self.category = category.into(); self }
    pub fn query(mut self, query: impl Into<String>, locale: Locale) -> Self { self.query = query.into(); self.locale = locale; self }
    pub fn in_stock_only(mut self) -> Self { self.in_stock_only = true; self }
    pub fn price_between(mut self, min: Money, max: Money) -> Self { self.price_range = Some(PriceRange { min, max }); self }
    pub fn sizes<I, S>(mut self, sizes: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        (self.category == ALL_CATEGORIES || product.category == self.category)
            && matches_query(product, &self.query, self.locale)
            && (!self.in_stock_only || product.in_stock)
            && self.price_range.map_or(true, |r| r.contains(product.price))
            && (self.sizes.is_empty() || self.sizes.iter().any(|s| product.offers_size(s)))
    }
}

/// Case-insensitive substring match against the localized name or
/// description. An empty query matches everything.
pub fn matches_query(product: &Product, query: &str, locale: Locale) -> bool {
    if query.is_empty() { return true; }
    let needle = query.to_lowercase();
    product.name_in(locale).to_lowercase().contains(&needle)
        || product.description_in(locale).to_lowercase().contains(&needle)
}

pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products.iter().filter(|p| filter.matches(p)).cloned().collect()
}
