// web_app/components/layout.rs - Page layout and header icons

use leptos::prelude::*;

/// Default page layout
///
/// Renders the page header (icon + title) above the page content.
#[component]
pub fn DefaultLayout(
    /// Page title shown in the header
    title: &'static str,
    /// Header icon
    #[prop(into)]
    icon: ViewFn,
    /// Page content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-800 text-gray-100 font-sans">
            <div class="max-w-7xl mx-auto px-6 lg:px-12 py-12">
                <header class="flex items-center gap-3 mb-10">
                    {icon.run()}
                    <h1 class="text-2xl font-bold text-gray-100">{title}</h1>
                </header>

                <main>{children()}</main>
            </div>
        </div>
    }
}

/// Binoculars icon (outline)
#[component]
pub fn BinocularsIcon(
    /// Width and height in pixels
    #[prop(default = 24)]
    size: u32,
    /// Stroke colour
    #[prop(default = "currentColor")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 256 256"
            fill="none"
            stroke=color
            stroke-width="16"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <line x1="104" y1="92" x2="152" y2="92"></line>
            <path d="M229.59,154.32,185.94,55A28,28,0,0,0,146.34,55V168"></path>
            <path d="M109.66,55a28,28,0,0,0-39.6,0L26.41,154.32"></path>
            <circle cx="188" cy="172" r="36"></circle>
            <circle cx="68" cy="172" r="36"></circle>
        </svg>
    }
}
