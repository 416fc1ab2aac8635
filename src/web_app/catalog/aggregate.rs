// web_app/catalog/aggregate.rs - Rating aggregation and search narrowing
//
// Philosophy: Pure functions over data the backend already shaped.
// Order is always the backend's order; nothing here sorts.

use crate::web_app::errors::LoadError;
use crate::web_app::model::{BookWithAverage, BookWithRatings, ExploreQuery, Rating};
use crate::web_app::source::BookSource;

/// Rounded mean of the ratings' `rate` values.
///
/// Halves round up (4.5 becomes 5). Returns `None` for a book with no
/// ratings instead of dividing by zero.
pub fn average_rating(ratings: &[Rating]) -> Option<i32> {
    if ratings.is_empty() {
        return None;
    }

    let sum: i64 = ratings.iter().map(|r| i64::from(r.rate)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    Some((mean + 0.5).floor() as i32)
}

/// Highest score a book can get
pub const MAX_STARS: usize = 5;

/// Shown instead of a score when a book has no ratings
pub const NO_RATINGS_LABEL: &str = "Sem avaliações";

/// Number of filled stars for an average, clamped to 0..=5
pub fn filled_stars(average: i32) -> usize {
    average.clamp(0, MAX_STARS as i32) as usize
}

/// Human-readable average rating
pub fn rating_label(average: Option<i32>) -> String {
    match average {
        Some(value) => format!("Nota {} de {}", filled_stars(value), MAX_STARS),
        None => NO_RATINGS_LABEL.to_string(),
    }
}

/// Attach the average rating to every book, keeping backend order
pub fn aggregate(entries: Vec<BookWithRatings>) -> Vec<BookWithAverage> {
    entries
        .into_iter()
        .map(|entry| BookWithAverage {
            average: average_rating(&entry.ratings),
            book: entry.book,
        })
        .collect()
}

/// Literal, case-sensitive substring match on author or name
pub fn matches_search(book: &BookWithAverage, search: &str) -> bool {
    book.book.author.contains(search) || book.book.name.contains(search)
}

/// Keep only the books matching `search`; an empty search keeps everything
pub fn narrow_by_search(books: Vec<BookWithAverage>, search: &str) -> Vec<BookWithAverage> {
    if search.is_empty() {
        return books;
    }

    books
        .into_iter()
        .filter(|book| matches_search(book, search))
        .collect()
}

/// Fetch, aggregate and narrow the books for one query.
///
/// The category filter goes to the source; the search is applied here,
/// after aggregation.
pub async fn load_books<S>(
    source: &S,
    query: &ExploreQuery,
) -> Result<Vec<BookWithAverage>, LoadError>
where
    S: BookSource + ?Sized,
{
    let entries = source.fetch_books(query.category()).await?;
    let books = narrow_by_search(aggregate(entries), &query.search);

    tracing::debug!(
        "Loaded {} books for filter={:?} search={:?}",
        books.len(),
        query.filter,
        query.search
    );
    Ok(books)
}
