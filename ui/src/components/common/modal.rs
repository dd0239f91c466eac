//! Modal shell shared by all dialogs

use leptos::*;

/// Overlay plus centered panel. The caller owns open/close state; clicking
/// the backdrop closes via `on_close`.
#[component]
pub fn Modal(
    title: &'static str,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black/60"
                on:click=move |_| on_close.call(())
            />
            <div class="relative bg-slate-800 border border-slate-700 rounded-xl shadow-xl w-full max-w-lg mx-4 max-h-[90vh] overflow-auto">
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-700">
                    <h2 class="text-lg font-semibold text-white">{title}</h2>
                    <button
                        class="text-slate-400 hover:text-white"
                        on:click=move |_| on_close.call(())
                    >
                        <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <line x1="18" y1="6" x2="6" y2="18" />
                            <line x1="6" y1="6" x2="18" y2="18" />
                        </svg>
                    </button>
                </div>
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
