// web_app/components/search.rs - Search and filter widgets
//
// - SearchInput: free-text search bound to a signal
// - CategoryFilters: one chip per category, single selection

use leptos::prelude::*;
use crate::web_app::model::{Category, CATEGORIES};

/// Search box component
///
/// Writes every keystroke to `value`; the page reloads on each change.
#[component]
pub fn SearchInput(
    /// Current search text
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="relative flex items-center w-full max-w-md">
            <input
                type="search"
                placeholder=placeholder
                class="w-full pl-4 pr-10 py-3 bg-transparent border border-gray-500 rounded \
                       text-gray-200 placeholder-gray-400 \
                       focus:border-green-200 outline-none transition-colors"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <span class="absolute right-4 text-gray-500 pointer-events-none">"⌕"</span>
        </label>
    }
}

/// Classes for a filter chip
pub fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-1 rounded-full text-sm border border-purple-200 bg-purple-200 text-gray-100 transition-colors"
    } else {
        "px-4 py-1 rounded-full text-sm border border-purple-100 text-purple-100 \
         hover:bg-purple-200 hover:text-gray-100 transition-colors"
    }
}

/// Select `value` as the category filter.
///
/// Re-selecting the current category leaves the signal untouched, so no
/// reload is triggered. Returns whether the selection changed.
pub fn select_category(filter_selected: RwSignal<String>, value: &str) -> bool {
    if filter_selected.get_untracked() == value {
        return false;
    }
    filter_selected.set(value.to_string());
    true
}

/// Category filter component
///
/// Selecting a chip writes its value to `filter_selected`; "Tudo" clears it.
#[component]
pub fn CategoryFilters(
    /// Selected category value (empty = every category)
    filter_selected: RwSignal<String>,
    /// Categories to offer
    #[prop(default = CATEGORIES)]
    categories: &'static [Category],
) -> impl IntoView {
    view! {
        <nav class="flex flex-wrap gap-3 my-8" aria-label="Categorias">
            {categories.iter().map(|category| {
                let value = category.value;
                let is_selected = move || filter_selected.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || chip_class(is_selected())
                        aria-pressed=move || is_selected().to_string()
                        on:click=move |_| {
                            select_category(filter_selected, value);
                        }
                    >
                        {category.label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_class_selected() {
        assert!(chip_class(true).contains("bg-purple-200"));
        assert!(!chip_class(false).contains(" bg-purple-200"));
    }

    #[test]
    fn test_reselecting_category_keeps_signal_untouched() {
        Owner::new().with(|| {
            let filter_selected = RwSignal::new("Fantasia".to_string());

            assert!(!select_category(filter_selected, "Fantasia"));
            assert_eq!(filter_selected.get_untracked(), "Fantasia");

            assert!(select_category(filter_selected, "Horror"));
            assert_eq!(filter_selected.get_untracked(), "Horror");

            assert!(select_category(filter_selected, ""));
            assert_eq!(filter_selected.get_untracked(), "");
        });
    }
}
