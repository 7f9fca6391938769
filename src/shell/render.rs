// Console formatting for reviews and statistics

use crate::stats::Summary;
use crate::store::Record;

pub fn rule() -> String {
    "-".repeat(40)
}

/// One review as a block of aligned lines
pub fn record(title: &str, record: &Record) -> String {
    format!(
        "Title:     {}\nGenre:     {}\nPlatform:  {}\nRating:    {}/10\nReview:    {}",
        title, record.genre, record.platform, record.rating, record.review
    )
}

pub fn summary(summary: &Summary) -> String {
    let mut lines = vec![
        format!("Total number of reviews: {}", summary.total_reviews),
        format!(
            "Average rating of all games: {:.2}/10",
            summary.average_rating
        ),
        String::new(),
        "Average rating by genre:".to_string(),
    ];

    for (genre, average) in &summary.average_by_genre {
        lines.push(format!("  {}: {:.2}/10", genre, average));
    }

    lines.join("\n")
}
