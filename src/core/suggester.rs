/// Game suggestions
///
/// Picks the best-rated review whose genre and platform contain the
/// user's preferences.

use crate::store::{Record, Store};

/// Handles game suggestions
pub struct Suggester;

impl Suggester {
    /// Suggest a game
    ///
    /// # Arguments
    /// * `genre_pref` - Substring the genre must contain (blank or `None` skips it)
    /// * `platform_pref` - Substring the platform must contain (blank or `None` skips it)
    ///
    /// # Returns
    /// * `Some((title, record))` - Highest rating among the matches. Ties go to
    ///   the alphabetically first title.
    /// * `None` - Empty store or nothing matched
    pub fn suggest<'a>(
        store: &'a Store,
        genre_pref: Option<&str>,
        platform_pref: Option<&str>,
    ) -> Option<(&'a str, &'a Record)> {
        let genre_pref = normalize(genre_pref);
        let platform_pref = normalize(platform_pref);

        let mut best: Option<(&str, &Record)> = None;

        for (title, record) in store.iter() {
            if !contains_pref(&record.genre, genre_pref.as_deref())
                || !contains_pref(&record.platform, platform_pref.as_deref())
            {
                continue;
            }

            // strictly greater: store order is by title, so the first one wins ties
            match best {
                Some((_, current)) if current.rating >= record.rating => {}
                _ => best = Some((title, record)),
            }
        }

        best
    }
}

fn normalize(pref: Option<&str>) -> Option<String> {
    pref.map(|p| p.trim().to_lowercase()).filter(|p| !p.is_empty())
}

fn contains_pref(value: &str, pref: Option<&str>) -> bool {
    match pref {
        None => true,
        Some(pref) => value.to_lowercase().contains(pref),
    }
}
