// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use crate::web_app::catalog::{filled_stars, rating_label, MAX_STARS, NO_RATINGS_LABEL};

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Carregando...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" role="status">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-600 border-t-green-100"></div>
            <span class="mt-4 text-gray-400 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Star rating display component
///
/// Displays the rounded average as filled and empty stars, or a
/// "no ratings yet" label when the book was never rated.
#[component]
pub fn StarRating(
    /// Rounded average (0 to 5), `None` when unrated
    average: Option<i32>,
    /// Colour of the filled stars
    #[prop(default = "#8381D9")]
    color: &'static str,
) -> impl IntoView {
    let title = rating_label(average);

    match average {
        Some(value) => {
            let full = filled_stars(value);
            view! {
                <div class="flex items-center gap-0.5" title=title.clone() aria-label=title>
                    {(0..full).map(|_| view! {
                        <span class="text-lg" style=format!("color: {color}")>"★"</span>
                    }).collect_view()}
                    {(full..MAX_STARS).map(|_| view! {
                        <span class="text-lg text-gray-600">"☆"</span>
                    }).collect_view()}
                </div>
            }
            .into_any()
        }
        None => view! {
            <span class="text-xs font-medium text-gray-400 italic" title=title>
                {NO_RATINGS_LABEL}
            </span>
        }
        .into_any(),
    }
}
