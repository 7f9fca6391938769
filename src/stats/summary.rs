/// Aggregate statistics over the store

use crate::error::{ReviewError, Result};
use crate::store::Store;
use std::collections::BTreeMap;

/// Totals and averages for every review
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_reviews: usize,
    pub average_rating: f64,
    /// Keyed by the genre string exactly as entered; "FPS" and "fps" are
    /// separate groups.
    pub average_by_genre: BTreeMap<String, f64>,
}

/// Statistics engine
pub struct Statistics;

impl Statistics {
    /// Summarize all reviews
    ///
    /// # Returns
    /// * `Ok(Summary)` - Count, overall mean rating, mean rating per genre
    /// * `Err(ReviewError::EmptyStore)` - Nothing to summarize
    pub fn summarize(store: &Store) -> Result<Summary> {
        if store.is_empty() {
            return Err(ReviewError::EmptyStore);
        }

        let mut total: u64 = 0;
        // genre -> (rating sum, count)
        let mut genres: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

        for (_, record) in store.iter() {
            let rating = u64::from(record.rating);
            total += rating;

            let entry = genres.entry(record.genre.as_str()).or_insert((0, 0));
            entry.0 += rating;
            entry.1 += 1;
        }

        let average_by_genre = genres
            .into_iter()
            .map(|(genre, (sum, count))| (genre.to_string(), Self::mean(sum, count)))
            .collect();

        Ok(Summary {
            total_reviews: store.len(),
            average_rating: Self::mean(total, store.len() as u64),
            average_by_genre,
        })
    }

    fn mean(sum: u64, count: u64) -> f64 {
        if count == 0 {
            return 0.0;
        }

        sum as f64 / count as f64
    }
}
