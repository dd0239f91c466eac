//! Collections Tab
//!
//! Lists collection names, shows the schema of the selected collection, and
//! offers deletion behind a type-the-name confirmation. The delete request
//! only goes out when the typed confirmation matches the collection name
//! byte for byte.

use leptos::*;
use weaviate_admin_shared::Collection;

use crate::client::ApiClient;
use crate::components::common::{
    ErrorAlert, FolderIcon, Modal, RefreshIcon, Spinner, TrashIcon, WarningIcon,
};
use crate::state::{FetchSeq, RemoteData};

/// The confirmation gate for deletion: an exact, case-sensitive match with
/// no trimming. "Article " does not confirm "Article".
fn delete_confirmed(typed: &str, name: &str) -> bool {
    typed == name
}

/// Collections management tab
#[component]
pub fn CollectionsTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (names, set_names) = create_signal(RemoteData::<Vec<String>>::Idle);
    let (selected, set_selected) = create_signal(Option::<String>::None);
    let (detail, set_detail) = create_signal(RemoteData::<Collection>::Idle);
    let (delete_target, set_delete_target) = create_signal(Option::<String>::None);
    let list_seq = FetchSeq::new();
    let detail_seq = FetchSeq::new();

    let load_names = {
        let client = client.clone();
        let seq = list_seq.clone();
        move || {
            let client = client.clone();
            let seq = seq.clone();
            let ticket = seq.begin();
            set_names.set(RemoteData::Loading);
            spawn_local(async move {
                let result = client.list_collections().await;
                if !seq.is_current(ticket) {
                    return;
                }
                set_names.set(RemoteData::from_result(
                    result.map(|list| list.collections).map_err(|e| e.to_string()),
                ));
            });
        }
    };

    let load_detail = {
        let client = client.clone();
        let seq = detail_seq.clone();
        move |name: String| {
            let client = client.clone();
            let seq = seq.clone();
            let ticket = seq.begin();
            set_detail.set(RemoteData::Loading);
            spawn_local(async move {
                let result = client.get_collection(&name).await;
                if !seq.is_current(ticket) {
                    return;
                }
                set_detail.set(RemoteData::from_result(result.map_err(|e| e.to_string())));
            });
        }
    };

    load_names();

    let select = {
        let load_detail = load_detail.clone();
        move |name: String| {
            set_selected.set(Some(name.clone()));
            load_detail(name);
        }
    };

    let on_deleted = {
        let load_names = load_names.clone();
        move |name: String| {
            set_delete_target.set(None);
            // Drop the detail pane if the deleted collection was selected.
            if selected.get_untracked().as_deref() == Some(name.as_str()) {
                set_selected.set(None);
                set_detail.set(RemoteData::Idle);
            }
            load_names();
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-white">"Collections"</h1>
                <button
                    class="flex items-center gap-2 px-3 py-2 text-sm bg-slate-800 hover:bg-slate-700 text-slate-200 rounded-lg border border-slate-700 transition-colors"
                    on:click={
                        let load_names = load_names.clone();
                        move |_| load_names()
                    }
                >
                    <RefreshIcon class="w-4 h-4" />
                    "Refresh"
                </button>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="bg-slate-800 border border-slate-700 rounded-xl p-4">
                    {
                        let load_names = load_names.clone();
                        let select = select.clone();
                        move || match names.get() {
                            RemoteData::Idle | RemoteData::Loading => view! { <Spinner /> }.into_view(),
                            RemoteData::Failed(message) => {
                                let load_names = load_names.clone();
                                view! {
                                    <ErrorAlert
                                        message=Signal::derive(move || message.clone())
                                        on_dismiss=move |_| load_names()
                                    />
                                }.into_view()
                            }
                            RemoteData::Ready(list) if list.is_empty() => view! {
                                <p class="text-sm text-slate-500 text-center py-8">"No collections"</p>
                            }.into_view(),
                            RemoteData::Ready(list) => {
                                let select = select.clone();
                                view! {
                                    <ul class="space-y-1">
                                        {list
                                            .into_iter()
                                            .map(|name| {
                                                let select = select.clone();
                                                let on_select = name.clone();
                                                let on_delete = name.clone();
                                                let is_selected = {
                                                    let name = name.clone();
                                                    move || selected.get().as_deref() == Some(name.as_str())
                                                };
                                                view! {
                                                    <li class="flex items-center gap-1">
                                                        <button
                                                            class=move || {
                                                                if is_selected() {
                                                                    "flex-1 flex items-center gap-2 px-3 py-2 text-sm text-left bg-blue-500/20 text-blue-300 rounded-lg"
                                                                } else {
                                                                    "flex-1 flex items-center gap-2 px-3 py-2 text-sm text-left text-slate-300 hover:bg-slate-700 rounded-lg transition-colors"
                                                                }
                                                            }
                                                            on:click=move |_| select(on_select.clone())
                                                        >
                                                            <FolderIcon class="w-4 h-4" />
                                                            {name}
                                                        </button>
                                                        <button
                                                            class="p-2 text-slate-500 hover:text-red-400 transition-colors"
                                                            on:click=move |_| set_delete_target.set(Some(on_delete.clone()))
                                                        >
                                                            <TrashIcon class="w-4 h-4" />
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }.into_view()
                            }
                        }
                    }
                </div>

                <div class="lg:col-span-2">
                    <Show
                        when=move || selected.get().is_some()
                        fallback=|| view! {
                            <div class="bg-slate-800 border border-slate-700 rounded-xl p-8 text-center text-slate-500 text-sm">
                                "Select a collection to inspect its schema"
                            </div>
                        }
                    >
                        {move || match detail.get() {
                            RemoteData::Idle | RemoteData::Loading => view! { <Spinner /> }.into_view(),
                            RemoteData::Failed(message) => view! {
                                <ErrorAlert
                                    message=Signal::derive(move || message.clone())
                                    on_dismiss=move |_| set_detail.set(RemoteData::Idle)
                                />
                            }.into_view(),
                            RemoteData::Ready(collection) => view! {
                                <CollectionDetail collection=collection />
                            }.into_view(),
                        }}
                    </Show>
                </div>
            </div>

            {
                let on_deleted = on_deleted.clone();
                move || {
                    delete_target.get().map(|name| {
                        let on_deleted = on_deleted.clone();
                        view! {
                            <DeleteCollectionDialog
                                name=name
                                on_cancel=move |_| set_delete_target.set(None)
                                on_deleted=move |deleted| on_deleted(deleted)
                            />
                        }
                    })
                }
            }
        </div>
    }
}

#[component]
fn CollectionDetail(collection: Collection) -> impl IntoView {
    let vectorizer = collection.vectorizer.clone().unwrap_or_else(|| "none".into());
    let index_type = collection
        .vector_index_type
        .clone()
        .unwrap_or_else(|| "unknown".into());
    let description = collection.description.clone();

    view! {
        <div class="bg-slate-800 border border-slate-700 rounded-xl p-6 space-y-4">
            <div>
                <h2 class="text-xl font-semibold text-white">{collection.name.clone()}</h2>
                {description.map(|text| view! {
                    <p class="text-sm text-slate-400 mt-1">{text}</p>
                })}
            </div>

            <div class="flex gap-4 text-sm">
                <div>
                    <span class="text-slate-500">"Vectorizer: "</span>
                    <span class="text-slate-200 font-mono">{vectorizer}</span>
                </div>
                <div>
                    <span class="text-slate-500">"Index: "</span>
                    <span class="text-slate-200 font-mono">{index_type}</span>
                </div>
            </div>

            <div>
                <p class="text-sm text-slate-400 mb-2">"Properties"</p>
                <Show
                    when={
                        let has_props = !collection.properties.is_empty();
                        move || has_props
                    }
                    fallback=|| view! {
                        <p class="text-sm text-slate-500">"No properties defined"</p>
                    }
                >
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-slate-500 border-b border-slate-700">
                                <th class="py-2 pr-4 font-medium">"Name"</th>
                                <th class="py-2 pr-4 font-medium">"Type"</th>
                                <th class="py-2 pr-4 font-medium">"Filterable"</th>
                                <th class="py-2 font-medium">"Searchable"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {collection
                                .properties
                                .clone()
                                .into_iter()
                                .map(|prop| {
                                    let data_type = prop.data_type.join(", ");
                                    view! {
                                        <tr class="border-b border-slate-700/50">
                                            <td class="py-2 pr-4 text-slate-200 font-mono">{prop.name}</td>
                                            <td class="py-2 pr-4 text-slate-300">{data_type}</td>
                                            <td class="py-2 pr-4 text-slate-400">
                                                {flag_text(prop.index_filterable)}
                                            </td>
                                            <td class="py-2 text-slate-400">
                                                {flag_text(prop.index_searchable)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

fn flag_text(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

/// Type-the-name confirmation dialog for collection deletion.
#[component]
fn DeleteCollectionDialog(
    name: String,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (typed, set_typed) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);
    let (deleting, set_deleting) = create_signal(false);

    let confirmed = {
        let name = name.clone();
        move || delete_confirmed(&typed.get(), &name)
    };

    let delete = {
        let client = client.clone();
        let name = name.clone();
        move |_| {
            let confirm = typed.get_untracked();
            if !delete_confirmed(&confirm, &name) {
                return;
            }
            set_error.set(None);
            set_deleting.set(true);

            let client = client.clone();
            let name = name.clone();
            spawn_local(async move {
                match client.delete_collection(&name, &confirm).await {
                    Ok(deleted) => on_deleted.call(deleted.deleted),
                    Err(e) => {
                        set_deleting.set(false);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let display_name = name.clone();

    view! {
        <Modal title="Delete Collection" on_close=move |_| on_cancel.call(())>
            <div class="space-y-4">
                <Show when=move || error.get().is_some()>
                    <ErrorAlert
                        message=Signal::derive(move || error.get().unwrap_or_default())
                        on_dismiss=move |_| set_error.set(None)
                    />
                </Show>

                <div class="flex items-start gap-3 bg-red-500/10 border border-red-500/30 rounded-lg p-4">
                    <WarningIcon class="w-5 h-5 text-red-400 shrink-0 mt-0.5" />
                    <p class="text-sm text-red-300">
                        "This permanently deletes the collection and all of its objects. \
                         There is no undo."
                    </p>
                </div>

                <div>
                    <label class="block text-sm text-slate-300 mb-1">
                        "Type "
                        <span class="font-mono text-white">{display_name}</span>
                        " to confirm"
                    </label>
                    <input
                        type="text"
                        class="w-full bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-red-500"
                        prop:value=typed
                        on:input=move |ev| set_typed.set(event_target_value(&ev))
                    />
                </div>

                <div class="flex justify-end gap-2 pt-2">
                    <button
                        class="px-4 py-2 text-sm text-slate-300 hover:text-white rounded-lg transition-colors"
                        on:click=move |_| on_cancel.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm bg-red-500 hover:bg-red-600 disabled:opacity-50 disabled:cursor-not-allowed text-white font-medium rounded-lg transition-colors"
                        disabled={
                            let confirmed = confirmed.clone();
                            move || deleting.get() || !confirmed()
                        }
                        on:click=delete
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete Collection" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::delete_confirmed;

    #[test]
    fn exact_match_confirms() {
        assert!(delete_confirmed("Article", "Article"));
    }

    #[test]
    fn near_misses_do_not_confirm() {
        assert!(!delete_confirmed("article", "Article"));
        assert!(!delete_confirmed("Article ", "Article"));
        assert!(!delete_confirmed(" Article", "Article"));
        assert!(!delete_confirmed("", "Article"));
        assert!(!delete_confirmed("Articles", "Article"));
    }
}
