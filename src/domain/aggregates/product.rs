//! Product Aggregate
//!
//! Products are owned by the catalog and are read-only once fetched.

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Locale, LocalizedText, Money};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub price: Money,
    pub category: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category { pub id: String, pub name: LocalizedText }

impl Category {
    pub fn new(id: impl Into<String>, name: LocalizedText) -> Self { Self { id: id.into(), name } }
}

impl Product {
    pub fn new(id: impl Into<String>, name: LocalizedText, price: Money, category: impl Into<String>) -> Self {
        Self {
            id: id.into(), name, description: LocalizedText::default(), price,
            category: category.into(), images: vec![], sizes: vec![], colors: vec![],
            in_stock: true, featured: false,
        }
    }

    pub fn with_description(mut self, description: LocalizedText) -> Self { self.description = description; self }
    pub fn with_images<I, S>(mut self, images: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_colors<I, S>(mut self, colors: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }
    pub fn out_of_stock(mut self) -> Self { self.in_stock = false; self }
    pub fn featured(mut self) -> Self { self.featured = true; self }

    pub fn is_in_stock(&self) -> bool { self.in_stock }
    pub fn name_in(&self, locale: Locale) -> &str { self.name.get(locale) }
    pub fn description_in(&self, locale: Locale) -> &str { self.description.get(locale) }

    /// First image reference, or `""` for a record that violates the non-empty rule.
    pub fn primary_image(&self) -> &str { self.images.first().map(String::as_str).unwrap_or("") }

    pub fn offers_size(&self, size: &str) -> bool { self.sizes.iter().any(|s| s == size) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let p = Product::new("1", LocalizedText::new("เสื้อเชิ้ตผ้าไหมไทย", "Thai Silk Shirt"), Money::baht(1200), "shirts")
            .with_images(["a.jpg", "b.jpg"])
            .with_sizes(["S", "M"])
            .featured();
        assert_eq!(p.primary_image(), "a.jpg");
        assert!(p.offers_size("M"));
        assert!(!p.offers_size("XL"));
        assert!(p.featured);
        assert_eq!(p.name_in(Locale::En), "Thai Silk Shirt");
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": "3",
            "name": {"th": "กางเกงผ้าฝ้าย", "en": "Cotton Pants"},
            "description": {"th": "นุ่ม", "en": "Soft"},
            "price": 800,
            "category": "pants",
            "images": ["p.jpg"],
            "sizes": ["S"],
            "colors": ["ขาว"],
            "inStock": true,
            "featured": false
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price, Money::baht(800));
        assert!(p.is_in_stock());
        assert_eq!(p.description_in(Locale::En), "Soft");
    }
}
