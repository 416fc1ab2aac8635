// web_app/components/book.rs - Book display components
//
// Components for displaying books on the explore page:
// - ExplorerBookCard: cover, name, author and average rating
// - ExplorerBooks: grid of cards keyed by book id

use leptos::prelude::*;
use crate::web_app::theme::use_theme;
use crate::web_app::model::BookWithAverage;
use super::common::StarRating;

/// Book card for the explore grid
#[component]
pub fn ExplorerBookCard(
    /// The book to display
    book: BookWithAverage,
) -> impl IntoView {
    let star_color = use_theme().colors.purple100;
    let average = book.average;
    let BookWithAverage { book, .. } = book;
    let alt = format!("Capa do livro {}", book.name);

    view! {
        <article
            class="flex gap-5 p-5 bg-gray-700 rounded-lg border-2 border-transparent \
                   hover:border-gray-600 transition-colors h-full"
            data-book-id=book.id.to_string()
        >
            <img
                src=book.cover_url
                alt=alt
                width="108"
                height="152"
                class="rounded object-cover flex-shrink-0"
            />

            <div class="flex flex-col justify-between min-w-0">
                <div>
                    <h3 class="font-bold text-gray-100 line-clamp-2">{book.name}</h3>
                    <p class="text-sm text-gray-400">{book.author}</p>
                </div>

                <StarRating average=average color=star_color />
            </div>
        </article>
    }
}

/// Grid of book cards
///
/// An empty list renders an empty grid.
#[component]
pub fn ExplorerBooks(
    /// Books to display, in order
    books: Signal<Vec<BookWithAverage>>,
) -> impl IntoView {
    view! {
        <section class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-5">
            <For
                each=move || books.get()
                key=|book| book.id()
                children=move |book| view! { <ExplorerBookCard book=book /> }
            />
        </section>
    }
}
