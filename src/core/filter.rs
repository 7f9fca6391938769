/// Review filtering
///
/// Narrows the store down by one field, matching case-insensitively.

use crate::store::{Record, Store};

/// Which field to filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKey {
    /// No filtering, every review
    #[default]
    All,
    Genre,
    Platform,
}

impl FilterKey {
    /// Map a menu answer to a key: `g` for genre, `p` for platform,
    /// anything else shows everything.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().to_lowercase().as_str() {
            "g" => FilterKey::Genre,
            "p" => FilterKey::Platform,
            _ => FilterKey::All,
        }
    }

    fn field_of(self, record: &Record) -> Option<&str> {
        match self {
            FilterKey::All => None,
            FilterKey::Genre => Some(record.genre.as_str()),
            FilterKey::Platform => Some(record.platform.as_str()),
        }
    }
}

/// Exact-match review filter
pub struct ReviewFilter;

impl ReviewFilter {
    /// Reviews whose `key` field equals `value`, ignoring case
    ///
    /// `value` is ignored for `FilterKey::All`. Results keep store order.
    pub fn apply<'a>(store: &'a Store, key: FilterKey, value: &str) -> Vec<(&'a str, &'a Record)> {
        let wanted = value.trim().to_lowercase();

        store
            .iter()
            .filter(|(_, record)| match key.field_of(record) {
                None => true,
                Some(field) => field.to_lowercase() == wanted,
            })
            .collect()
    }
}
