//! Root Application Component
//!
//! Sets up routing for the four dashboard tabs and provides the shared
//! [`ApiClient`] through context. Tabs own all of their state; nothing else
//! is shared between them.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::client::ApiClient;
use crate::components::collections::CollectionsTab;
use crate::components::database::DatabaseTab;
use crate::components::layout::TopBar;
use crate::components::objects::ObjectsTab;
use crate::components::projection::ProjectionTab;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One configured client for the whole app. Tabs and dialogs pull it
    // from context; per-tab state stays local to each tab.
    provide_context(ApiClient::default());

    view! {
        <Title text="Weaviate Admin" />
        <Router>
            <div class="min-h-screen flex flex-col bg-slate-900 text-slate-100">
                <TopBar />
                <main class="flex-1 overflow-auto">
                    <Routes>
                        <Route path="/" view=DatabaseTab />
                        <Route path="/collections" view=CollectionsTab />
                        <Route path="/objects" view=ObjectsTab />
                        <Route path="/projection" view=ProjectionTab />
                        <Route path="/*any" view=NotFoundPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center py-16">
                <h1 class="text-6xl font-bold text-slate-600 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-6">"Page not found"</p>
                <a href="/" class="text-blue-400 hover:text-blue-300">"Go to the Database tab"</a>
            </div>
        </div>
    }
}
