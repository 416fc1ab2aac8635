// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the theme context, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::ExplorePage;
use crate::web_app::theme::Theme;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Theme context
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(Theme::default());

    view! {
        <Meta name="description" content="Explore livros e avaliações no Book Wise" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Link rel="icon" href="/favicon.ico" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/bookwise_explore.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=ExplorePage />
                <Route path=path!("/explore") view=ExplorePage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-800 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-600 mb-4">"404"</h1>
                <p class="text-xl text-gray-400 mb-8">"Página não encontrada"</p>
                <a
                    href="/explore"
                    class="px-6 py-3 bg-green-200 text-gray-100 rounded-lg hover:bg-green-300 transition-colors"
                >
                    "Explorar livros"
                </a>
            </div>
        </div>
    }
}
