//! Database Health Tab
//!
//! Shows the backend health probe, the Weaviate connection state, and the
//! instance metadata. The three endpoints are fetched together and treated
//! as a single unit: if any of them fails the whole tab shows the failure.

use leptos::*;
use weaviate_admin_shared::{HealthResponse, MetaResponse, PingResponse};

use crate::client::ApiClient;
use crate::components::common::{
    CheckCircleIcon, ErrorAlert, RefreshIcon, SettingsIcon, Spinner, WarningIcon,
};
use crate::components::dialogs::{
    ConfigureDialog, DialogOutcome, DockerNetworkDialog, KeysDialog,
};
use crate::state::{FetchSeq, RemoteData};

/// Snapshot assembled from the joint health, meta, and ping fetch.
#[derive(Debug, Clone)]
struct DatabaseOverview {
    health: HealthResponse,
    meta: MetaResponse,
    ping: PingResponse,
}

/// Which of the configuration dialogs is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenDialog {
    None,
    Configure,
    DockerNetwork,
    Keys,
}

/// Database health overview tab
#[component]
pub fn DatabaseTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (overview, set_overview) = create_signal(RemoteData::<DatabaseOverview>::Idle);
    let (dialog, set_dialog) = create_signal(OpenDialog::None);
    let seq = FetchSeq::new();

    let load = {
        let client = client.clone();
        let seq = seq.clone();
        move || {
            let client = client.clone();
            let seq = seq.clone();
            let ticket = seq.begin();
            set_overview.set(RemoteData::Loading);
            spawn_local(async move {
                let (health, meta, ping) =
                    futures::join!(client.health(), client.meta(), client.ping());
                if !seq.is_current(ticket) {
                    return;
                }
                let snapshot = health.and_then(|health| {
                    meta.and_then(|meta| ping.map(|ping| DatabaseOverview { health, meta, ping }))
                });
                set_overview.set(RemoteData::from_result(
                    snapshot.map_err(|e| e.to_string()),
                ));
            });
        }
    };

    load();

    let on_dialog_close = {
        let load = load.clone();
        move |outcome: DialogOutcome| {
            set_dialog.set(OpenDialog::None);
            // Configuration changes can move the backend to another
            // Weaviate instance, so refetch the whole snapshot.
            if outcome == DialogOutcome::Saved {
                load();
            }
        }
    };

    let refresh = {
        let load = load.clone();
        move |_| load()
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-white">"Database"</h1>
                <div class="flex items-center gap-2">
                    <button
                        class="flex items-center gap-2 px-3 py-2 text-sm bg-slate-800 hover:bg-slate-700 text-slate-200 rounded-lg border border-slate-700 transition-colors"
                        on:click=refresh
                    >
                        <RefreshIcon class="w-4 h-4" />
                        "Refresh"
                    </button>
                    <button
                        class="flex items-center gap-2 px-3 py-2 text-sm bg-slate-800 hover:bg-slate-700 text-slate-200 rounded-lg border border-slate-700 transition-colors"
                        on:click=move |_| set_dialog.set(OpenDialog::Configure)
                    >
                        <SettingsIcon class="w-4 h-4" />
                        "Configure"
                    </button>
                    <button
                        class="px-3 py-2 text-sm bg-slate-800 hover:bg-slate-700 text-slate-200 rounded-lg border border-slate-700 transition-colors"
                        on:click=move |_| set_dialog.set(OpenDialog::DockerNetwork)
                    >
                        "Docker Network"
                    </button>
                    <button
                        class="px-3 py-2 text-sm bg-slate-800 hover:bg-slate-700 text-slate-200 rounded-lg border border-slate-700 transition-colors"
                        on:click=move |_| set_dialog.set(OpenDialog::Keys)
                    >
                        "API Keys"
                    </button>
                </div>
            </div>

            {
                let load = load.clone();
                move || match overview.get() {
                RemoteData::Idle | RemoteData::Loading => view! {
                    <div class="flex justify-center py-16"><Spinner /></div>
                }.into_view(),
                RemoteData::Failed(message) => {
                    let load = load.clone();
                    view! {
                        <ErrorAlert
                            message=Signal::derive(move || message.clone())
                            on_dismiss=move |_| load()
                        />
                    }.into_view()
                }
                RemoteData::Ready(snapshot) => view! {
                    <OverviewCards overview=snapshot />
                }.into_view(),
            }}


            {move || match dialog.get() {
                OpenDialog::None => ().into_view(),
                OpenDialog::Configure => {
                    let on_dialog_close = on_dialog_close.clone();
                    view! { <ConfigureDialog on_close=move |o| on_dialog_close(o) /> }.into_view()
                }
                OpenDialog::DockerNetwork => {
                    let on_dialog_close = on_dialog_close.clone();
                    view! { <DockerNetworkDialog on_close=move |o| on_dialog_close(o) /> }.into_view()
                }
                OpenDialog::Keys => {
                    let on_dialog_close = on_dialog_close.clone();
                    view! { <KeysDialog on_close=move |o| on_dialog_close(o) /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn OverviewCards(overview: DatabaseOverview) -> impl IntoView {
    let healthy = overview.health.is_ok();
    let connected = overview.ping.weaviate;
    let version = overview.meta.version.clone();
    let hostname = overview.meta.hostname.clone();
    let mut modules: Vec<String> = overview
        .meta
        .modules
        .as_ref()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default();
    modules.sort();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <StatusCard
                label="Backend Health"
                ok=healthy
                ok_text="Healthy"
                bad_text="Unhealthy"
            />
            <StatusCard
                label="Weaviate Connection"
                ok=connected
                ok_text="Connected"
                bad_text="Disconnected"
            />
            <div class="bg-slate-800 border border-slate-700 rounded-xl p-5">
                <p class="text-sm text-slate-400 mb-2">"Server Version"</p>
                <p class="text-xl font-semibold text-white">{version}</p>
            </div>
        </div>

        <div class="bg-slate-800 border border-slate-700 rounded-xl p-5">
            <p class="text-sm text-slate-400 mb-3">"Instance Metadata"</p>
            <div class="space-y-2 text-sm">
                <div class="flex gap-2">
                    <span class="text-slate-500 w-24">"Hostname"</span>
                    <span class="text-slate-200 font-mono">{hostname}</span>
                </div>
                <div class="flex gap-2 items-start">
                    <span class="text-slate-500 w-24 shrink-0">"Modules"</span>
                    <Show
                        when={
                            let has_modules = !modules.is_empty();
                            move || has_modules
                        }
                        fallback=|| view! { <span class="text-slate-500">"none"</span> }
                    >
                        <div class="flex flex-wrap gap-1">
                            {modules
                                .clone()
                                .into_iter()
                                .map(|name| view! {
                                    <span class="px-2 py-0.5 bg-slate-700 text-slate-200 rounded text-xs">
                                        {name}
                                    </span>
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatusCard(
    label: &'static str,
    ok: bool,
    ok_text: &'static str,
    bad_text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-slate-800 border border-slate-700 rounded-xl p-5">
            <p class="text-sm text-slate-400 mb-2">{label}</p>
            <div class="flex items-center gap-2">
                {if ok {
                    view! {
                        <CheckCircleIcon class="w-5 h-5 text-emerald-400" />
                        <span class="text-xl font-semibold text-emerald-400">{ok_text}</span>
                    }.into_view()
                } else {
                    view! {
                        <WarningIcon class="w-5 h-5 text-red-400" />
                        <span class="text-xl font-semibold text-red-400">{bad_text}</span>
                    }.into_view()
                }}
            </div>
        </div>
    }
}
