// web_app/pages/explore.rs - Explore page component
//
// Composes the search box, category filters and book grid, and runs the
// load pipeline whenever the filter or the search text changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::web_app::catalog::{load_books, ExploreState};
use crate::web_app::components::*;
use crate::web_app::source::ServerFnBookSource;
use crate::web_app::theme::use_theme;

/// Header title of the page
pub const PAGE_TITLE: &str = "Explorar";
/// Document title of the page
pub const DOCUMENT_TITLE: &str = "Explorar | Book Wise";
/// Placeholder of the search box
pub const SEARCH_PLACEHOLDER: &str = "Buscar livro ou autor";
/// Header icon size in pixels
pub const ICON_SIZE: u32 = 32;

/// Explore page component
///
/// Lists every book with its average rating, narrowed by category
/// (server-side) and by search text (client-side).
#[component]
pub fn ExplorePage() -> impl IntoView {
    let icon_color = use_theme().colors.green100;

    // User input
    let filter_selected = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    // Page state, written only by the load pipeline below
    let state = RwSignal::new(ExploreState::new());

    // Reload on mount and on every input change; stale completions are
    // dropped by ExploreState
    Effect::new(move || {
        let filter = filter_selected.get();
        let text = search.get();

        let ticket = state.try_update(|s| {
            s.filter_selected = filter;
            s.search = text;
            s.begin_load()
        });
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            let result = load_books(&ServerFnBookSource, &ticket.query).await;
            state.update(|s| {
                s.finish_load(&ticket, result);
            });
        });
    });

    let books = Signal::derive(move || state.with(|s| s.books.clone()));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <Title text=DOCUMENT_TITLE />

        <DefaultLayout
            title=PAGE_TITLE
            icon=move || view! { <BinocularsIcon size=ICON_SIZE color=icon_color /> }
        >
            <div class="flex justify-end">
                <SearchInput value=search placeholder=SEARCH_PLACEHOLDER />
            </div>

            <CategoryFilters filter_selected=filter_selected />

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <Loading /> }
            >
                <ExplorerBooks books=books />
            </Show>
        </DefaultLayout>
    }
}
