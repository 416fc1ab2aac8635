// fixtures/catalog.rs
//
// A small, realistic Book Wise catalog: books in several categories with a
// spread of ratings, including one book nobody has rated yet.
//
// Ids are deterministic (Uuid::from_u128) so tests can refer to them.

use uuid::Uuid;

use crate::fixtures::{CatalogEntry, CatalogFixture};
use crate::web_app::model::{Book, BookWithRatings, Rating};

/// Id of the n-th sample book (1-based)
pub fn book_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn book(n: u128, name: &str, author: &str, total_pages: i32, summary: &str) -> Book {
    let slug = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>();

    Book {
        id: book_id(n),
        name: name.to_string(),
        author: author.to_string(),
        summary: summary.to_string(),
        cover_url: format!("/images/books/{}.png", slug),
        total_pages,
        created_at: None,
    }
}

fn ratings(n: u128, rates: &[i32]) -> Vec<Rating> {
    rates
        .iter()
        .enumerate()
        .map(|(i, &rate)| Rating {
            id: Uuid::from_u128((n << 16) | i as u128),
            rate,
            description: String::new(),
            book_id: book_id(n),
            user_id: None,
            created_at: None,
        })
        .collect()
}

fn entry(categories: &[&str], book: Book, rates: &[i32]) -> CatalogEntry {
    let n = book.id.as_u128();
    CatalogEntry {
        categories: categories.iter().map(|c| c.to_string()).collect(),
        record: BookWithRatings {
            book,
            ratings: ratings(n, rates),
        },
    }
}

pub struct SampleCatalog;

impl CatalogFixture for SampleCatalog {
    fn entries() -> Vec<CatalogEntry> {
        vec![
            entry(
                &["Fantasia"],
                book(
                    1,
                    "O Hobbit",
                    "J.R.R. Tolkien",
                    360,
                    "Bilbo Bolseiro é arrastado para uma aventura com treze anões.",
                ),
                &[4, 5],
            ),
            entry(
                &["Fantasia"],
                book(
                    2,
                    "O Senhor dos Anéis",
                    "J.R.R. Tolkien",
                    1200,
                    "A jornada da Sociedade do Anel para destruir o Um Anel.",
                ),
                &[5, 5, 4],
            ),
            entry(
                &["Ficção científica"],
                book(
                    3,
                    "1984",
                    "George Orwell",
                    328,
                    "Winston Smith vive sob a vigilância constante do Grande Irmão.",
                ),
                &[3],
            ),
            entry(
                &["Computação"],
                book(
                    4,
                    "Código Limpo",
                    "Robert C. Martin",
                    425,
                    "Práticas para escrever código legível e fácil de manter.",
                ),
                &[4, 4, 5, 3],
            ),
            entry(
                &["Computação"],
                book(
                    5,
                    "Arquitetura Limpa",
                    "Robert C. Martin",
                    432,
                    "Princípios de arquitetura de software independentes de framework.",
                ),
                &[2, 3],
            ),
            entry(
                &["Computação", "Educação"],
                book(
                    6,
                    "Entendendo Algoritmos",
                    "Aditya Y. Bhargava",
                    264,
                    "Um guia ilustrado para programadores e curiosos.",
                ),
                &[5],
            ),
            entry(
                &["Horror", "Suspense"],
                book(
                    7,
                    "O Iluminado",
                    "Stephen King",
                    464,
                    "Jack Torrance aceita cuidar de um hotel isolado durante o inverno.",
                ),
                &[4, 2, 3],
            ),
            entry(
                &["HQs", "Ficção científica"],
                book(
                    8,
                    "Watchmen",
                    "Alan Moore",
                    416,
                    "Heróis aposentados investigam o assassinato de um antigo colega.",
                ),
                &[5, 4],
            ),
            entry(
                &["Educação"],
                book(
                    9,
                    "O Poder do Hábito",
                    "Charles Duhigg",
                    408,
                    "Por que fazemos o que fazemos na vida e nos negócios.",
                ),
                &[],
            ),
        ]
    }
}
