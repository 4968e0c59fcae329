use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// 單筆禮品記錄建構失敗的原因
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("missing or mistyped field: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("age_min ({age_min}) is greater than age_max ({age_max})")]
    InvertedAgeRange { age_min: i64, age_max: i64 },

    #[error("price must be a non-negative amount, got {0}")]
    InvalidPrice(f64),

    #[error("duplicate gift id {0}")]
    DuplicateId(i64),
}

/// 目錄檔中的原始欄位；多餘欄位會被忽略
#[derive(Debug, Deserialize)]
struct RawGiftRecord {
    id: i64,
    name: String,
    occasions: Vec<String>,
    age_min: i64,
    age_max: i64,
    genders: Vec<String>,
    price: f64,
    description: String,
}

/// One catalog entry. Fields are fixed at construction; tags are stored
/// lowercased so membership checks need no per-query normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftRecord {
    id: i64,
    name: String,
    occasions: BTreeSet<String>,
    age_min: i64,
    age_max: i64,
    genders: BTreeSet<String>,
    price: f64,
    description: String,
}

impl GiftRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new<O, G>(
        id: i64,
        name: impl Into<String>,
        occasions: O,
        age_min: i64,
        age_max: i64,
        genders: G,
        price: f64,
        description: impl Into<String>,
    ) -> Result<Self, RecordError>
    where
        O: IntoIterator,
        O::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        if age_min > age_max {
            return Err(RecordError::InvertedAgeRange { age_min, age_max });
        }
        if !price.is_finite() || price < 0.0 {
            return Err(RecordError::InvalidPrice(price));
        }

        Ok(Self {
            id,
            name,
            occasions: normalize_tags(occasions),
            age_min,
            age_max,
            genders: normalize_tags(genders),
            price,
            description: description.into(),
        })
    }

    /// 從鬆散型別的 JSON 物件建構，缺欄位或型別不符即失敗
    pub fn from_value(value: serde_json::Value) -> Result<Self, RecordError> {
        let raw: RawGiftRecord = serde_json::from_value(value)?;
        Self::new(
            raw.id,
            raw.name,
            raw.occasions,
            raw.age_min,
            raw.age_max,
            raw.genders,
            raw.price,
            raw.description,
        )
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn occasions(&self) -> &BTreeSet<String> {
        &self.occasions
    }

    pub fn age_min(&self) -> i64 {
        self.age_min
    }

    pub fn age_max(&self) -> i64 {
        self.age_max
    }

    pub fn genders(&self) -> &BTreeSet<String> {
        &self.genders
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `tag` must already be lowercased.
    pub fn has_occasion(&self, tag: &str) -> bool {
        self.occasions.contains(tag)
    }

    /// `tag` must already be lowercased.
    pub fn has_gender(&self, tag: &str) -> bool {
        self.genders.contains(tag)
    }

    pub fn covers_age(&self, age: i64) -> bool {
        self.age_min <= age && age <= self.age_max
    }
}

fn normalize_tags<I>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub occasion: String,
    pub age: i64,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub gift: GiftRecord,
    pub shipping: ShippingInfo,
    pub amount: f64,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum OrderOutcome {
    Completed(Order),
    NoMatches,
    Cancelled,
    PaymentDeclined,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flowers() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "Bouquet of Flowers",
            "occasions": ["Birthday", "ANNIVERSARY"],
            "age_min": 0,
            "age_max": 120,
            "genders": ["Any"],
            "price": 29.99,
            "description": "A colorful bouquet of seasonal flowers."
        })
    }

    #[test]
    fn test_from_value_normalizes_tags() {
        let record = GiftRecord::from_value(flowers()).unwrap();

        assert_eq!(record.id(), 1);
        assert_eq!(record.name(), "Bouquet of Flowers");
        assert!(record.has_occasion("birthday"));
        assert!(record.has_occasion("anniversary"));
        assert!(record.has_gender("any"));
        assert!(!record.has_occasion("Birthday"));
    }

    #[test]
    fn test_from_value_ignores_unknown_fields() {
        let mut value = flowers();
        value["sku"] = json!("FL-001");
        value["in_stock"] = json!(true);

        assert!(GiftRecord::from_value(value).is_ok());
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let mut value = flowers();
        value.as_object_mut().unwrap().remove("price");

        let err = GiftRecord::from_value(value).unwrap_err();
        assert!(matches!(err, RecordError::Malformed(_)));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_mistyped_fields_are_rejected() {
        let mut value = flowers();
        value["price"] = json!("cheap");
        assert!(matches!(
            GiftRecord::from_value(value),
            Err(RecordError::Malformed(_))
        ));

        let mut value = flowers();
        value["age_min"] = json!(3.5);
        assert!(matches!(
            GiftRecord::from_value(value),
            Err(RecordError::Malformed(_))
        ));
    }

    #[test]
    fn test_inverted_age_range_is_rejected() {
        let mut value = flowers();
        value["age_min"] = json!(40);
        value["age_max"] = json!(10);

        assert!(matches!(
            GiftRecord::from_value(value),
            Err(RecordError::InvertedAgeRange { age_min: 40, age_max: 10 })
        ));
    }

    #[test]
    fn test_negative_price_and_blank_name_are_rejected() {
        assert!(matches!(
            GiftRecord::new(1, "Mug", ["birthday"], 0, 99, ["any"], -1.0, ""),
            Err(RecordError::InvalidPrice(_))
        ));
        assert!(matches!(
            GiftRecord::new(1, "   ", ["birthday"], 0, 99, ["any"], 5.0, ""),
            Err(RecordError::EmptyName)
        ));
    }

    #[test]
    fn test_covers_age_is_inclusive() {
        let record = GiftRecord::new(3, "Toy Car", ["birthday"], 3, 12, ["male"], 15.5, "").unwrap();

        assert!(record.covers_age(3));
        assert!(record.covers_age(12));
        assert!(!record.covers_age(2));
        assert!(!record.covers_age(13));
    }
}
