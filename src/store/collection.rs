/// In-memory review collection
///
/// Reviews are keyed by exact, case-sensitive title. The backing map is
/// ordered, so every listing comes out sorted by title.

use crate::core::Validator;
use crate::error::{ReviewError, Result};
use crate::store::models::{Record, ReviewInput};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All reviews, keyed by title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    records: BTreeMap<String, Record>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The two reviews the tool has always shipped with
    pub fn with_samples() -> Self {
        let mut records = BTreeMap::new();
        records.insert(
            "Halo".to_string(),
            Record {
                genre: "FPS".to_string(),
                platform: "Xbox".to_string(),
                rating: 9,
                review: "Great multiplayer!".to_string(),
            },
        );
        records.insert(
            "Stardew Valley".to_string(),
            Record {
                genre: "RPG".to_string(),
                platform: "PC".to_string(),
                rating: 8,
                review: "Relaxing farming sim.".to_string(),
            },
        );

        Self { records }
    }

    /// Validate and insert a new review
    ///
    /// # Returns
    /// * `Ok(())` - The review was added
    /// * `Err(ReviewError::InvalidField)` - A field broke its rule
    /// * `Err(ReviewError::DuplicateTitle)` - The title is already taken
    ///
    /// The store is untouched on any error.
    pub fn add(&mut self, input: ReviewInput) -> Result<()> {
        let (title, record) = Validator::input(&input)?;

        if self.records.contains_key(&title) {
            return Err(ReviewError::DuplicateTitle(title));
        }

        tracing::debug!(title = %title, rating = record.rating, "added review");
        self.records.insert(title, record);

        Ok(())
    }

    /// Look up a review by its exact title
    pub fn get(&self, title: &str) -> Option<&Record> {
        self.records.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.contains_key(title)
    }

    /// Every review, sorted by title
    pub fn all(&self) -> Vec<(&str, &Record)> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records
            .iter()
            .map(|(title, record)| (title.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portal() -> ReviewInput {
        ReviewInput::new("Portal", "Puzzle", "PC", "10", "Still alive.")
    }

    #[test]
    fn test_add_then_get() {
        let mut store = Store::new();
        store.add(portal()).unwrap();

        let record = store.get("Portal").unwrap();
        assert_eq!(record.genre, "Puzzle");
        assert_eq!(record.platform, "PC");
        assert_eq!(record.rating, 10);
        assert_eq!(record.review, "Still alive.");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let mut store = Store::with_samples();
        let before = store.clone();

        let result = store.add(ReviewInput::new("Halo", "Shooter", "PC", "3", "Meh."));

        match result {
            Err(ReviewError::DuplicateTitle(title)) => assert_eq!(title, "Halo"),
            other => panic!("Expected DuplicateTitle error, got {:?}", other),
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let mut store = Store::with_samples();

        store
            .add(ReviewInput::new("halo", "FPS", "PC", "6", "Lowercase port."))
            .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("Halo").unwrap().rating, 9);
        assert_eq!(store.get("halo").unwrap().rating, 6);
    }

    #[test]
    fn test_invalid_input_leaves_store_alone() {
        let mut store = Store::new();

        let result = store.add(ReviewInput::new("Portal", "Puzzle", "PC", "11", "Too good."));

        assert!(matches!(result, Err(ReviewError::InvalidField { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_all_is_sorted_by_title() {
        let mut store = Store::with_samples();
        store.add(portal()).unwrap();

        let titles: Vec<&str> = store.all().into_iter().map(|(title, _)| title).collect();
        assert_eq!(titles, vec!["Halo", "Portal", "Stardew Valley"]);
    }

    #[test]
    fn test_serializes_as_object_of_objects() {
        let value = serde_json::to_value(Store::with_samples()).unwrap();

        assert_eq!(value["Halo"]["genre"], "FPS");
        assert_eq!(value["Stardew Valley"]["rating"], 8);
    }
}
