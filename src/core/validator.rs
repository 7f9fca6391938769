// Field validation for new reviews
//
// Every rule a record has to satisfy lives here so the store and the
// interactive prompts agree on what "valid" means.

use crate::error::{ReviewError, Result};
use crate::store::{Field, Record, ReviewInput};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

pub struct Validator;

impl Validator {
    /// Title: anything that isn't blank
    pub fn title(raw: &str) -> Result<String> {
        Self::non_empty(Field::Title, raw)
    }

    pub fn genre(raw: &str) -> Result<String> {
        Self::label(Field::Genre, raw)
    }

    pub fn platform(raw: &str) -> Result<String> {
        Self::label(Field::Platform, raw)
    }

    /// Parse a rating, then check the range.
    ///
    /// Words, decimals and blanks fail the parse; whole numbers outside
    /// 1-10 fail the range check.
    pub fn rating(raw: &str) -> Result<u8> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReviewError::invalid(Field::Rating, "cannot be empty"));
        }

        let value: i64 = trimmed.parse().map_err(|_| {
            ReviewError::invalid(
                Field::Rating,
                format!("'{}' is not a whole number", trimmed),
            )
        })?;

        Self::rating_in_range(value)
    }

    pub fn review(raw: &str) -> Result<String> {
        Self::non_empty(Field::Review, raw)
    }

    /// Validate all five fields of a raw input, in prompt order.
    ///
    /// Returns the cleaned-up title and the record to store under it.
    pub fn input(input: &ReviewInput) -> Result<(String, Record)> {
        let title = Self::title(&input.title)?;
        let record = Record {
            genre: Self::genre(&input.genre)?,
            platform: Self::platform(&input.platform)?,
            rating: Self::rating(&input.rating)?,
            review: Self::review(&input.review)?,
        };

        Ok((title, record))
    }

    /// Re-check a record that was read back from disk.
    ///
    /// Values are checked as they are; nothing is trimmed or rewritten.
    pub fn existing(title: &str, record: &Record) -> Result<()> {
        Self::title(title)?;
        Self::genre(&record.genre)?;
        Self::platform(&record.platform)?;
        Self::rating_in_range(i64::from(record.rating))?;
        Self::review(&record.review)?;
        Ok(())
    }

    fn rating_in_range(value: i64) -> Result<u8> {
        if !(i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            return Err(ReviewError::invalid(
                Field::Rating,
                format!("must be between {} and {}", MIN_RATING, MAX_RATING),
            ));
        }

        // in range, so it fits
        Ok(value as u8)
    }

    // Genre and platform: non-empty and not only digits ("2024" is not a genre).
    // Only 0-9 count as digits; "½" or "Ⅻ" is a label.
    fn label(field: Field, raw: &str) -> Result<String> {
        let value = Self::non_empty(field, raw)?;

        if value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ReviewError::invalid(field, "cannot be just numbers"));
        }

        Ok(value)
    }

    fn non_empty(field: Field, raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReviewError::invalid(field, "cannot be empty"));
        }
        Ok(trimmed.to_string())
    }
}
