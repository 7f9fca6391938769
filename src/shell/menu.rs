/// Main menu

pub const MENU: &str = "\
1. Add a new game review
2. Look at reviewed games
3. Get video game suggestions
4. Display statistics
5. Quit";

/// One main menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddReview,
    ViewReviews,
    Suggest,
    Statistics,
    Quit,
}

impl MenuChoice {
    /// Parse a menu answer ("1" to "5")
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::AddReview),
            "2" => Some(MenuChoice::ViewReviews),
            "3" => Some(MenuChoice::Suggest),
            "4" => Some(MenuChoice::Statistics),
            "5" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}
