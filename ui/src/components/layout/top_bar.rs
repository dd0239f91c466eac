//! Top Bar Component
//!
//! Horizontal tab bar for the four dashboard views. Pure presentation: the
//! tabs are router links and carry no shared state.

use leptos::*;
use leptos_router::*;

use crate::components::common::{CubeIcon, DataIcon, DatabaseIcon, FolderIcon};

/// Application header with the main navigation tabs
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="bg-slate-800 border-b border-slate-700 flex-shrink-0">
            <div class="h-14 flex items-center px-4 gap-4">
                // Logo
                <A href="/" class="flex items-center gap-2 text-white flex-shrink-0">
                    <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center">
                        <span class="text-white text-sm font-bold">"W"</span>
                    </div>
                    <span class="text-lg font-bold">"Weaviate Admin"</span>
                </A>

                // Main tabs
                <nav class="flex items-center gap-1 ml-6">
                    <MainTab href="/" label="Database" exact=true>
                        <DatabaseIcon class="w-4 h-4" />
                    </MainTab>
                    <MainTab href="/collections" label="Collections">
                        <FolderIcon class="w-4 h-4" />
                    </MainTab>
                    <MainTab href="/objects" label="Objects">
                        <DataIcon class="w-4 h-4" />
                    </MainTab>
                    <MainTab href="/projection" label="3D View">
                        <CubeIcon class="w-4 h-4" />
                    </MainTab>
                </nav>
            </div>
        </header>
    }
}

/// Individual main tab
#[component]
fn MainTab(
    href: &'static str,
    label: &'static str,
    #[prop(default = false)] exact: bool,
    children: Children,
) -> impl IntoView {
    let location = use_location();

    view! {
        <A
            href=href
            class=move || {
                let pathname = location.pathname.get();
                let is_active = if exact {
                    pathname == href
                } else {
                    pathname == href || pathname.starts_with(&format!("{}/", href))
                };

                let base = "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active {
                    format!("{} bg-blue-500 text-white", base)
                } else {
                    format!("{} text-slate-400 hover:text-white hover:bg-slate-700", base)
                }
            }
        >
            {children()}
            {label}
        </A>
    }
}
