use crate::domain::model::{GiftRecord, RecordError, Requirements};
use crate::utils::error::{GiftError, Result};
use std::collections::HashSet;

/// Gender tag that satisfies every gender query.
pub const ANY_GENDER: &str = "any";

/// Read-only gift catalog with the eligibility query.
#[derive(Debug, Clone)]
pub struct CatalogMatcher {
    records: Vec<GiftRecord>,
}

impl CatalogMatcher {
    /// 逐筆驗證原始記錄；任何一筆失敗即中止，不建立部分目錄
    pub fn load<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let mut validated = Vec::new();
        for (index, value) in records.into_iter().enumerate() {
            let record = GiftRecord::from_value(value)
                .map_err(|source| GiftError::ValidationError { index, source })?;
            validated.push(record);
        }
        Self::from_records(validated)
    }

    pub fn from_records(records: Vec<GiftRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if !seen.insert(record.id()) {
                return Err(GiftError::ValidationError {
                    index,
                    source: RecordError::DuplicateId(record.id()),
                });
            }
        }

        tracing::debug!("Loaded catalog with {} gift records", records.len());
        Ok(Self { records })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        match serde_json::from_str(content)? {
            serde_json::Value::Array(items) => Self::load(items),
            other => Err(GiftError::CatalogFormatError {
                message: format!("expected a JSON array at the root, found {}", json_kind(&other)),
            }),
        }
    }

    /// Records eligible for the given occasion, age and gender, in catalog order.
    ///
    /// Occasion and gender compare case-insensitively. A record whose genders
    /// include [`ANY_GENDER`] matches every gender. No input is an error; an
    /// empty vector means nothing qualified.
    pub fn find_matches(&self, occasion: &str, age: i64, gender: &str) -> Vec<&GiftRecord> {
        let occasion = occasion.to_lowercase();
        let gender = gender.to_lowercase();
        let gender_tags = [gender.as_str(), ANY_GENDER];

        let matches: Vec<&GiftRecord> = self
            .records
            .iter()
            .filter(|record| {
                record.has_occasion(&occasion)
                    && record.covers_age(age)
                    && gender_tags.iter().any(|tag| record.has_gender(tag))
            })
            .collect();

        tracing::debug!(
            occasion = %occasion,
            age,
            gender = %gender,
            "Found {} matching gifts out of {}",
            matches.len(),
            self.records.len()
        );
        matches
    }

    pub fn find_for(&self, requirements: &Requirements) -> Vec<&GiftRecord> {
        self.find_matches(&requirements.occasion, requirements.age, &requirements.gender)
    }

    pub fn records(&self) -> &[GiftRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&GiftRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn toy_car() -> serde_json::Value {
        json!({
            "id": 3,
            "name": "Toy Car",
            "occasions": ["birthday"],
            "age_min": 3,
            "age_max": 12,
            "genders": ["male"],
            "price": 15.5,
            "description": "Remote controlled toy car."
        })
    }

    #[test]
    fn test_single_record_matches_its_own_requirements() {
        let catalog = CatalogMatcher::load(vec![toy_car()]).unwrap();

        let matches = catalog.find_matches("birthday", 7, "male");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], &catalog.records()[0]);
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let catalog = CatalogMatcher::load(vec![toy_car()]).unwrap();

        assert_eq!(catalog.find_matches("birthday", 3, "male").len(), 1);
        assert_eq!(catalog.find_matches("birthday", 12, "male").len(), 1);
        assert!(catalog.find_matches("birthday", 2, "male").is_empty());
        assert!(catalog.find_matches("birthday", 13, "male").is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = CatalogMatcher::load(vec![toy_car()]).unwrap();

        assert_eq!(catalog.find_matches("Birthday", 5, "MALE").len(), 1);
        assert_eq!(catalog.find_matches("BIRTHDAY", 5, "Male").len(), 1);
    }

    #[test]
    fn test_any_gender_matches_every_gender() {
        let mut value = toy_car();
        value["genders"] = json!(["ANY"]);
        let catalog = CatalogMatcher::load(vec![value]).unwrap();

        for gender in ["male", "female", "other", "nonbinary", "", "any"] {
            assert_eq!(catalog.find_matches("birthday", 5, gender).len(), 1, "gender {gender:?}");
        }
    }

    #[test]
    fn test_every_clause_is_required() {
        let catalog = CatalogMatcher::load(vec![toy_car()]).unwrap();

        assert!(catalog.find_matches("anniversary", 5, "male").is_empty());
        assert!(catalog.find_matches("birthday", 30, "male").is_empty());
        assert!(catalog.find_matches("birthday", 5, "female").is_empty());
    }

    #[test]
    fn test_non_physical_ages_use_bounds_as_given() {
        let mut value = toy_car();
        value["age_min"] = json!(-5);
        value["age_max"] = json!(0);
        let catalog = CatalogMatcher::load(vec![value]).unwrap();

        assert_eq!(catalog.find_matches("birthday", -5, "male").len(), 1);
        assert_eq!(catalog.find_matches("birthday", 0, "male").len(), 1);
        assert!(catalog.find_matches("birthday", 1, "male").is_empty());
    }

    #[test]
    fn test_load_reports_failing_position() {
        let mut broken = toy_car();
        broken["id"] = json!(4);
        broken.as_object_mut().unwrap().remove("price");

        let err = CatalogMatcher::load(vec![toy_car(), broken]).unwrap_err();
        match err {
            GiftError::ValidationError { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(source, RecordError::Malformed(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = CatalogMatcher::load(vec![toy_car(), toy_car()]).unwrap_err();

        assert!(matches!(
            err,
            GiftError::ValidationError {
                index: 1,
                source: RecordError::DuplicateId(3)
            }
        ));
    }

    #[test]
    fn test_from_json_str_requires_array_root() {
        let err = CatalogMatcher::from_json_str(r#"{"gifts": []}"#).unwrap_err();
        assert!(matches!(err, GiftError::CatalogFormatError { .. }));

        let err = CatalogMatcher::from_json_str("[{").unwrap_err();
        assert!(matches!(err, GiftError::SerializationError(_)));

        let catalog = CatalogMatcher::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = CatalogMatcher::load(vec![toy_car()]).unwrap();

        assert_eq!(catalog.get(3).map(|r| r.name()), Some("Toy Car"));
        assert!(catalog.get(99).is_none());
    }
}
