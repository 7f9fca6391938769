/// Interactive session
///
/// Owns the store for the lifetime of the program, runs the menu loop and
/// saves after every new review and on the way out.

use crate::core::{FilterKey, ReviewFilter, Suggester, Validator};
use crate::error::ReviewError;
use crate::shell::menu::{MenuChoice, MENU};
use crate::shell::prompt::Prompter;
use crate::shell::render;
use crate::stats::Statistics;
use crate::store::{ReviewFile, ReviewInput, Store};
use std::io::{self, BufRead, Write};

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    store: Store,
    file: ReviewFile,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, file: ReviewFile, input: R, output: W) -> Self {
        Self {
            store,
            file,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run the menu until the user quits or input closes
    ///
    /// Only console I/O failures end the loop early; storage problems are
    /// reported and the session carries on.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompter.say(MENU)?;
            let Some(answer) = self.prompter.ask("What do you want to do?: ")? else {
                // closed input counts as quitting
                return self.quit().map(|_| ());
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::AddReview) => self.add_review()?,
                Some(MenuChoice::ViewReviews) => self.view_reviews()?,
                Some(MenuChoice::Suggest) => self.suggest()?,
                Some(MenuChoice::Statistics) => self.show_statistics()?,
                Some(MenuChoice::Quit) => self.quit()?,
                None => {
                    self.prompter.say("\nPlease enter a number from 1 to 5.\n")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.prompter.into_output())
    }

    fn add_review(&mut self) -> io::Result<Flow> {
        self.prompter.say("\n=== Add a New Game Review ===")?;

        let store = &self.store;
        let Some(title) = self.prompter.ask_until("Game Title: ", |raw| {
            let title = Validator::title(raw)?;
            if store.contains(&title) {
                return Err(ReviewError::DuplicateTitle(title));
            }
            Ok(title)
        })?
        else {
            return self.quit();
        };

        let Some(genre) = self
            .prompter
            .ask_until("Genre (e.g. RPG, FPS, Adventure): ", Validator::genre)?
        else {
            return self.quit();
        };

        let Some(platform) = self
            .prompter
            .ask_until("Platform (e.g. PC, Xbox, PlayStation): ", Validator::platform)?
        else {
            return self.quit();
        };

        let Some(rating) = self
            .prompter
            .ask_until("Rating (1-10): ", Validator::rating)?
        else {
            return self.quit();
        };

        let Some(review) = self
            .prompter
            .ask_until("Short Review: ", Validator::review)?
        else {
            return self.quit();
        };

        let input = ReviewInput::new(title.clone(), genre, platform, rating.to_string(), review);
        if let Err(e) = self.store.add(input) {
            self.prompter.say(&e.user_message())?;
            return Ok(Flow::Continue);
        }

        self.prompter
            .say(&format!("Review for {} is complete!\n", title))?;
        self.save()?;

        Ok(Flow::Continue)
    }

    fn view_reviews(&mut self) -> io::Result<Flow> {
        self.prompter.say("\n=== View Game Reviews ===")?;

        if self.store.is_empty() {
            self.prompter.say("No reviews found.\n")?;
            return Ok(Flow::Continue);
        }

        let Some(choice) = self
            .prompter
            .ask("Filter by genre (g), platform (p), or view all (a): ")?
        else {
            return self.quit();
        };

        let key = FilterKey::from_choice(&choice);
        let value = match key {
            FilterKey::All => String::new(),
            FilterKey::Genre => match self.prompter.ask("Enter genre to filter by: ")? {
                Some(value) => value,
                None => return self.quit(),
            },
            FilterKey::Platform => match self.prompter.ask("Enter platform to filter by: ")? {
                Some(value) => value,
                None => return self.quit(),
            },
        };

        let results = ReviewFilter::apply(&self.store, key, &value);
        if results.is_empty() {
            self.prompter.say("No reviews found for your filter.\n")?;
            return Ok(Flow::Continue);
        }

        for (title, record) in results {
            self.prompter.say(&render::rule())?;
            self.prompter.say(&render::record(title, record))?;
        }
        self.prompter.say(&format!("{}\n", render::rule()))?;

        Ok(Flow::Continue)
    }

    fn suggest(&mut self) -> io::Result<Flow> {
        self.prompter.say("\n=== Game Suggester ===")?;

        if self.store.is_empty() {
            self.prompter
                .say("No games in the database yet! Please add a review.\n")?;
            return Ok(Flow::Continue);
        }

        let Some(genre_pref) = self
            .prompter
            .ask("What genre would you prefer? (Press enter to skip): ")?
        else {
            return self.quit();
        };
        let Some(platform_pref) = self
            .prompter
            .ask("Preferred platform (Press enter to skip): ")?
        else {
            return self.quit();
        };

        let suggestion = Suggester::suggest(
            &self.store,
            Some(genre_pref.as_str()),
            Some(platform_pref.as_str()),
        );

        match suggestion {
            Some((title, record)) => {
                self.prompter.say(&render::rule())?;
                self.prompter.say("Suggested game:")?;
                self.prompter.say(&render::record(title, record))?;
                self.prompter.say(&format!("{}\n", render::rule()))?;
            }
            None => {
                self.prompter.say(
                    "No games match your preferences. Try changing filters or adding more reviews.\n",
                )?;
            }
        }

        Ok(Flow::Continue)
    }

    fn show_statistics(&mut self) -> io::Result<Flow> {
        self.prompter.say("\n=== Game Review Statistics ===")?;

        match Statistics::summarize(&self.store) {
            Ok(summary) => self.prompter.say(&format!("{}\n", render::summary(&summary)))?,
            Err(e) => self.prompter.say(&format!("{}\n", e.user_message()))?,
        }

        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> io::Result<Flow> {
        self.save()?;
        self.prompter.say("Goodbye!")?;
        Ok(Flow::Exit)
    }

    // A failed save is shown to the user but never ends the session
    fn save(&mut self) -> io::Result<()> {
        if let Err(e) = self.file.save(&self.store) {
            self.prompter.say(&e.user_message())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(store: Store, dir: &TempDir, input: &str) -> (Store, String) {
        let file = ReviewFile::new(dir.path().join("reviews.json"));
        let mut session = Session::new(
            store,
            file,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );

        session.run().unwrap();

        let (store, output) = session.into_parts();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_review_saves_to_disk() {
        let dir = TempDir::new().unwrap();

        let input = "1\nPortal\nPuzzle\nPC\n10\nStill alive.\n5\n";
        let (store, output) = run(Store::new(), &dir, input);

        assert!(output.contains("Review for Portal is complete!"));
        assert_eq!(store.get("Portal").unwrap().rating, 10);

        let saved = ReviewFile::new(dir.path().join("reviews.json")).load().unwrap();
        assert_eq!(saved, store);
    }

    #[test]
    fn test_add_review_reprompts_bad_fields() {
        let dir = TempDir::new().unwrap();

        let input = "1\nHalo\nPortal\n123\nPuzzle\n\nPC\nten\n10\n\nStill alive.\n5\n";
        let (store, output) = run(Store::with_samples(), &dir, input);

        assert!(output.contains("already exists"));
        assert!(output.contains("cannot be just numbers"));
        assert!(output.contains("not a whole number"));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("Portal").unwrap().platform, "PC");
    }

    #[test]
    fn test_view_with_genre_filter() {
        let dir = TempDir::new().unwrap();

        let (_, output) = run(Store::with_samples(), &dir, "2\ng\nfps\n5\n");

        assert!(output.contains("Title:     Halo"));
        assert!(!output.contains("Stardew Valley"));
    }

    #[test]
    fn test_view_without_match() {
        let dir = TempDir::new().unwrap();

        let (_, output) = run(Store::with_samples(), &dir, "2\np\nswitch\n5\n");

        assert!(output.contains("No reviews found for your filter."));
    }

    #[test]
    fn test_suggestion() {
        let dir = TempDir::new().unwrap();

        let (_, output) = run(Store::with_samples(), &dir, "3\nrpg\n\n5\n");

        assert!(output.contains("Suggested game:"));
        assert!(output.contains("Title:     Stardew Valley"));
    }

    #[test]
    fn test_statistics_on_empty_store() {
        let dir = TempDir::new().unwrap();

        let (_, output) = run(Store::new(), &dir, "4\n5\n");

        assert!(output.contains("no games in the database yet"));
    }

    #[test]
    fn test_statistics() {
        let dir = TempDir::new().unwrap();

        let (_, output) = run(Store::with_samples(), &dir, "4\n5\n");

        assert!(output.contains("Average rating of all games: 8.50/10"));
    }

    #[test]
    fn test_unknown_choice_then_end_of_input_saves() {
        let dir = TempDir::new().unwrap();

        let (_, output) = run(Store::with_samples(), &dir, "9\n");

        assert!(output.contains("Please enter a number from 1 to 5."));
        assert!(output.contains("Goodbye!"));
        let saved = ReviewFile::new(dir.path().join("reviews.json")).load().unwrap();
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_quit_after_corrupt_load_keeps_old_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reviews.json");
        let original = r#"{"Halo":{"genre":"FPS","platform":"Xbox","rating":9,"review":"Great multiplayer!"},"Bad":{"genre":"RPG"}}"#;
        std::fs::write(&path, original).unwrap();

        let outcome = ReviewFile::new(&path).load_or_empty();
        assert!(outcome.warning.is_some());
        let (_, output) = run(outcome.store, &dir, "5\n");

        assert!(output.contains("Goodbye!"));
        let kept = std::fs::read_to_string(dir.path().join("reviews.json.corrupt")).unwrap();
        assert_eq!(kept, original);
    }

    #[test]
    fn test_invalid_utf8_input_still_saves_on_quit() {
        let dir = TempDir::new().unwrap();
        let file = ReviewFile::new(dir.path().join("reviews.json"));
        let mut session = Session::new(
            Store::with_samples(),
            file.clone(),
            Cursor::new(b"\xff\n5\n".to_vec()),
            Vec::new(),
        );

        session.run().unwrap();

        let (_, output) = session.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("wasn't valid text"));
        assert!(output.contains("Goodbye!"));
        assert_eq!(file.load().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_save_keeps_session_alive() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("reviews.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let input = "1\nPortal\nPuzzle\nPC\n10\nStill alive.\n4\n5\n";
        let (store, output) = run(Store::new(), &dir, input);

        assert!(output.contains("File system error"));
        assert!(output.contains("Total number of reviews: 1"));
        assert_eq!(store.len(), 1);
    }
}
