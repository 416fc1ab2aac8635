// tests/explore_pipeline_tests.rs
// Explore page behaviour against fake catalog sources: averages, search,
// category filters, out-of-order responses and failures.

mod common;

use bookwise_explore::web_app::catalog::{load_books, Explorer, ExploreState, LoadOutcome};
use bookwise_explore::web_app::errors::LoadError;
use bookwise_explore::web_app::model::{BookWithAverage, ExploreQuery};
use bookwise_explore::web_app::source::StaticBookSource;
use common::{FlakySource, GatedSource, RecordingSource};

fn names(books: &[BookWithAverage]) -> Vec<&str> {
    books.iter().map(|b| b.book.name.as_str()).collect()
}

fn average_of(books: &[BookWithAverage], name: &str) -> Option<i32> {
    books
        .iter()
        .find(|b| b.book.name == name)
        .and_then(|b| b.average)
}

#[tokio::test]
async fn test_initial_load_shows_every_book_with_averages() {
    let explorer = Explorer::new(StaticBookSource::sample());
    assert!(explorer.state().is_loading);

    let outcome = explorer.refresh().await;
    let state = explorer.state();

    assert_eq!(outcome, LoadOutcome::Applied(9));
    assert!(!state.is_loading);
    assert_eq!(state.books.len(), 9);

    // [4, 5] -> 4.5 rounds up
    assert_eq!(average_of(&state.books, "O Hobbit"), Some(5));
    // [3]
    assert_eq!(average_of(&state.books, "1984"), Some(3));
    // [4, 4, 5, 3] -> 4.0
    assert_eq!(average_of(&state.books, "Código Limpo"), Some(4));
}

#[tokio::test]
async fn test_book_without_ratings_has_no_average() {
    let books = load_books(&StaticBookSource::sample(), &ExploreQuery::default())
        .await
        .unwrap();

    let unrated = books
        .iter()
        .find(|b| b.book.name == "O Poder do Hábito")
        .expect("unrated book is listed");
    assert_eq!(unrated.average, None);
}

#[tokio::test]
async fn test_backend_order_is_preserved() {
    let books = load_books(&StaticBookSource::sample(), &ExploreQuery::new("Computação", ""))
        .await
        .unwrap();

    assert_eq!(
        names(&books),
        ["Código Limpo", "Arquitetura Limpa", "Entendendo Algoritmos"]
    );
}

#[tokio::test]
async fn test_search_is_literal_and_case_sensitive() {
    let explorer = Explorer::new(StaticBookSource::sample());

    explorer.search("Tolkien").await;
    assert_eq!(
        names(&explorer.state().books),
        ["O Hobbit", "O Senhor dos Anéis"]
    );

    let outcome = explorer.search("tolkien").await;
    assert_eq!(outcome, LoadOutcome::Applied(0));
    assert!(explorer.state().books.is_empty());
}

#[tokio::test]
async fn test_search_matches_book_name_too() {
    let explorer = Explorer::new(StaticBookSource::sample());
    explorer.search("Limpo").await;
    assert_eq!(names(&explorer.state().books), ["Código Limpo"]);
}

#[tokio::test]
async fn test_filter_is_sent_to_the_source_and_search_is_not() {
    let explorer = Explorer::new(RecordingSource::sample());

    explorer.refresh().await;
    explorer.select_filter("Fantasia").await;
    explorer.search("Hobbit").await;
    explorer.select_filter("").await;

    assert_eq!(
        explorer.source().calls(),
        vec![
            None,
            Some("Fantasia".to_string()),
            Some("Fantasia".to_string()),
            None,
        ]
    );
    assert_eq!(names(&explorer.state().books), ["O Hobbit"]);
}

#[tokio::test]
async fn test_filter_and_search_combine() {
    let explorer = Explorer::new(StaticBookSource::sample());

    explorer.select_filter("Computação").await;
    explorer.search("Martin").await;

    let state = explorer.state();
    assert_eq!(state.filter_selected, "Computação");
    assert_eq!(state.search, "Martin");
    assert_eq!(names(&state.books), ["Código Limpo", "Arquitetura Limpa"]);
}

#[tokio::test]
async fn test_empty_category_renders_no_books() {
    let explorer = Explorer::new(StaticBookSource::sample());
    explorer.refresh().await;

    let outcome = explorer.select_filter("Romance").await;
    let state = explorer.state();

    assert_eq!(outcome, LoadOutcome::Applied(0));
    assert!(state.books.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_books() {
    let explorer = Explorer::new(FlakySource::sample());
    explorer.refresh().await;
    assert_eq!(explorer.state().books.len(), 9);

    explorer.source().fail();
    let outcome = explorer.select_filter("Horror").await;
    let state = explorer.state();

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(!state.is_loading);
    assert_eq!(state.filter_selected, "Horror");
    assert_eq!(state.books.len(), 9);
}

#[tokio::test]
async fn test_slow_stale_response_does_not_overwrite_newer_one() {
    let source = GatedSource::sample();
    let release_fantasia = source.gate("Fantasia");
    let explorer = Explorer::new(source);

    // The Fantasia request is issued first but answers last
    let (slow, fast, _) = tokio::join!(
        explorer.select_filter("Fantasia"),
        explorer.select_filter("Computação"),
        async move {
            let _ = release_fantasia.send(());
        },
    );

    assert_eq!(fast, LoadOutcome::Applied(3));
    assert_eq!(slow, LoadOutcome::Stale);

    let state = explorer.state();
    assert_eq!(state.filter_selected, "Computação");
    assert!(!state.is_loading);
    assert_eq!(
        names(&state.books),
        ["Código Limpo", "Arquitetura Limpa", "Entendendo Algoritmos"]
    );
}

#[test]
fn test_stale_completion_leaves_loading_flag_alone() {
    let mut state = ExploreState::new();

    state.filter_selected = "Fantasia".to_string();
    let first = state.begin_load();
    state.filter_selected = "Horror".to_string();
    let second = state.begin_load();

    // The older request finishes while the newer one is still pending
    let outcome = state.finish_load(&first, Ok(Vec::new()));
    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(state.is_loading);

    let outcome = state.finish_load(&second, Err(LoadError::Unavailable));
    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(!state.is_loading);
    assert_eq!(second.query, ExploreQuery::new("Horror", ""));
    assert_eq!(state.latest_seq(), second.seq);
}
