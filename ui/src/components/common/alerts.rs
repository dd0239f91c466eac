//! Inline alerts and loading indicator
//!
//! Every failure in the app surfaces as a dismissible inline alert scoped to
//! the tab or dialog that triggered it; nothing is fatal.

use leptos::*;

/// Dismissible error banner.
#[component]
pub fn ErrorAlert(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-start justify-between gap-3 bg-red-500/10 border border-red-500/30 rounded-lg p-4">
            <p class="text-red-400 text-sm">{message}</p>
            <button
                class="text-red-400/70 hover:text-red-300 text-sm font-medium"
                on:click=move |_| on_dismiss.call(())
            >
                "Dismiss"
            </button>
        </div>
    }
}

/// Transient success banner shown by dialogs after a save.
#[component]
pub fn SuccessAlert(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-green-500/10 border border-green-500/30 rounded-lg p-4">
            <p class="text-green-400 text-sm">{message}</p>
        </div>
    }
}

/// Centered spinner for in-flight fetches.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16">
            <div class="animate-spin w-8 h-8 border-4 border-blue-500 border-t-transparent rounded-full" />
        </div>
    }
}
