/// Data models for stored reviews
///
/// `Record` is exactly what lands in the review file under each title.

use serde::{Deserialize, Serialize};

/// One game's review. The title is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub genre: String,
    pub platform: String,
    pub rating: u8,
    pub review: String,
}

/// Raw input for adding a review, straight from the user
#[derive(Debug, Clone, Default)]
pub struct ReviewInput {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub rating: String,
    pub review: String,
}

impl ReviewInput {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        platform: impl Into<String>,
        rating: impl Into<String>,
        review: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            platform: platform.into(),
            rating: rating.into(),
            review: review.into(),
        }
    }
}

/// Names a review field, used when reporting what failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Genre,
    Platform,
    Rating,
    Review,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::Title => "title",
            Field::Genre => "genre",
            Field::Platform => "platform",
            Field::Rating => "rating",
            Field::Review => "review",
        };
        write!(f, "{}", s)
    }
}
