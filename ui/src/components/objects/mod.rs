//! Objects Tab
//!
//! Browses stored objects and runs searches. Three modes share the tab:
//!
//! - Browse: paged listing of one collection (limit defaults to 50)
//! - Text search: BM25 query, optionally scoped to a collection
//! - Near object: similarity search seeded by an existing object id
//!
//! Each mode keeps its own collection selection. Search hits carry their
//! score (text search) or distance (similarity search) into the results
//! table; every row opens a detail dialog with the full id, properties,
//! vector preview, and metadata.

use leptos::*;
use serde_json::Value;
use weaviate_admin_shared::{NearObjectRequest, SearchResult, WeaviateObject};

use crate::client::ApiClient;
use crate::components::common::{DataIcon, ErrorAlert, EyeIcon, Modal, SearchIcon, Spinner};
use crate::state::{FetchSeq, RemoteData};

/// Fixed result count for text search.
const TEXT_SEARCH_LIMIT: u32 = 10;

/// How many vector dimensions the detail dialog previews.
const VECTOR_PREVIEW_DIMS: usize = 10;

/// Shorten an object id for table display: first 8 characters plus an
/// ellipsis. Ids shorter than that are shown as-is.
fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        id.to_string()
    } else {
        let prefix: String = id.chars().take(8).collect();
        format!("{}...", prefix)
    }
}

/// One-line property summary for a table row.
fn summarize_properties(properties: &std::collections::HashMap<String, Value>) -> String {
    let mut keys: Vec<&String> = properties.keys().collect();
    keys.sort();
    let mut parts = Vec::new();
    for key in keys.iter().take(3) {
        let value = match &properties[key.as_str()] {
            Value::String(s) if s.chars().count() > 40 => {
                let cut: String = s.chars().take(40).collect();
                format!("{}...", cut)
            }
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        parts.push(format!("{}: {}", key, value));
    }
    if keys.len() > 3 {
        parts.push(format!("+{} more", keys.len() - 3));
    }
    parts.join(" | ")
}

/// An empty collection choice scopes a text search to all collections.
fn search_scope(collection: &str) -> Option<&str> {
    if collection.is_empty() {
        None
    } else {
        Some(collection)
    }
}

/// Parse a limit field, falling back to the mode's default when the input
/// is not an integer in [1, 5000].
fn parse_limit(input: &str, default: u32) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=5000).contains(n))
        .unwrap_or(default)
}

/// Score/distance cell text, four decimals.
fn relevance_text(relevance: Option<f64>) -> String {
    match relevance {
        Some(value) => format!("{:.4}", value),
        None => "-".to_string(),
    }
}

/// One result row: the object plus the relevance a search reported for it.
#[derive(Debug, Clone)]
struct ObjectHit {
    object: WeaviateObject,
    relevance: Option<f64>,
}

impl ObjectHit {
    fn browsed(object: WeaviateObject) -> Self {
        Self {
            object,
            relevance: None,
        }
    }

    fn from_search(result: SearchResult) -> Self {
        let relevance = result.relevance();
        Self {
            object: result.into(),
            relevance,
        }
    }
}

/// A full result set. `scored` controls whether the table shows the
/// score/distance column; browse listings have no relevance to show.
#[derive(Debug, Clone)]
struct ResultSet {
    hits: Vec<ObjectHit>,
    scored: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Browse,
    TextSearch,
    NearObject,
}

impl SearchMode {
    fn label(self) -> &'static str {
        match self {
            Self::Browse => "Browse",
            Self::TextSearch => "Text Search",
            Self::NearObject => "Near Object",
        }
    }
}

/// Object browsing and search tab
#[component]
pub fn ObjectsTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (collections, set_collections) = create_signal(Vec::<String>::new());
    let (mode, set_mode) = create_signal(SearchMode::Browse);
    let (results, set_results) = create_signal(RemoteData::<ResultSet>::Idle);
    let (detail, set_detail) = create_signal(Option::<WeaviateObject>::None);

    // Each mode owns its collection choice. Text search starts unscoped;
    // the other two default to the first collection once the list arrives.
    let (browse_collection, set_browse_collection) = create_signal(String::new());
    let (search_collection, set_search_collection) = create_signal(String::new());
    let (near_collection, set_near_collection) = create_signal(String::new());

    let (browse_limit, set_browse_limit) = create_signal(String::from("50"));
    let (near_limit, set_near_limit) = create_signal(String::from("10"));
    let (query, set_query) = create_signal(String::new());
    let (seed_id, set_seed_id) = create_signal(String::new());

    let seq = FetchSeq::new();

    {
        let client = client.clone();
        spawn_local(async move {
            match client.list_collections().await {
                Ok(list) => {
                    if let Some(first) = list.collections.first() {
                        if browse_collection.get_untracked().is_empty() {
                            set_browse_collection.set(first.clone());
                        }
                        if near_collection.get_untracked().is_empty() {
                            set_near_collection.set(first.clone());
                        }
                    }
                    set_collections.set(list.collections);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load collections");
                }
            }
        });
    }

    let run = {
        let client = client.clone();
        let seq = seq.clone();
        move || {
            let mode = mode.get_untracked();
            let client = client.clone();
            let seq = seq.clone();

            match mode {
                SearchMode::Browse => {
                    let collection = browse_collection.get_untracked();
                    if collection.is_empty() {
                        set_results.set(RemoteData::Failed("Select a collection".into()));
                        return;
                    }
                    let limit = parse_limit(&browse_limit.get_untracked(), 50);
                    let ticket = seq.begin();
                    set_results.set(RemoteData::Loading);
                    spawn_local(async move {
                        let result = client
                            .list_objects(
                                &collection,
                                &crate::client::ObjectsQuery::with_limit(limit),
                            )
                            .await;
                        if !seq.is_current(ticket) {
                            return;
                        }
                        set_results.set(RemoteData::from_result(
                            result
                                .map(|page| ResultSet {
                                    hits: page
                                        .objects
                                        .into_iter()
                                        .map(ObjectHit::browsed)
                                        .collect(),
                                    scored: false,
                                })
                                .map_err(|e| e.to_string()),
                        ));
                    });
                }
                SearchMode::TextSearch => {
                    let q = query.get_untracked();
                    if q.trim().is_empty() {
                        set_results.set(RemoteData::Failed("Enter a search query".into()));
                        return;
                    }
                    let scope = search_collection.get_untracked();
                    let ticket = seq.begin();
                    set_results.set(RemoteData::Loading);
                    spawn_local(async move {
                        let result = client
                            .search_text(&q, search_scope(&scope), TEXT_SEARCH_LIMIT, None)
                            .await;
                        if !seq.is_current(ticket) {
                            return;
                        }
                        set_results.set(RemoteData::from_result(
                            result
                                .map(|r| ResultSet {
                                    hits: r
                                        .results
                                        .into_iter()
                                        .map(ObjectHit::from_search)
                                        .collect(),
                                    scored: true,
                                })
                                .map_err(|e| e.to_string()),
                        ));
                    });
                }
                SearchMode::NearObject => {
                    let collection = near_collection.get_untracked();
                    let id = seed_id.get_untracked();
                    if collection.is_empty() || id.trim().is_empty() {
                        set_results
                            .set(RemoteData::Failed("Collection and object id are required".into()));
                        return;
                    }
                    let request = NearObjectRequest {
                        collection,
                        id: id.trim().to_string(),
                        limit: parse_limit(&near_limit.get_untracked(), 10),
                    };
                    let ticket = seq.begin();
                    set_results.set(RemoteData::Loading);
                    spawn_local(async move {
                        let result = client.search_near_object(&request).await;
                        if !seq.is_current(ticket) {
                            return;
                        }
                        set_results.set(RemoteData::from_result(
                            result
                                .map(|r| ResultSet {
                                    hits: r
                                        .results
                                        .into_iter()
                                        .map(ObjectHit::from_search)
                                        .collect(),
                                    scored: true,
                                })
                                .map_err(|e| e.to_string()),
                        ));
                    });
                }
            }
        }
    };

    let switch_mode = move |new_mode: SearchMode| {
        set_mode.set(new_mode);
        set_results.set(RemoteData::Idle);
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-white">"Objects"</h1>

            <div class="flex gap-1 bg-slate-800 border border-slate-700 rounded-lg p-1 w-fit">
                {[SearchMode::Browse, SearchMode::TextSearch, SearchMode::NearObject]
                    .into_iter()
                    .map(|m| view! {
                        <button
                            class=move || {
                                if mode.get() == m {
                                    "px-4 py-1.5 text-sm bg-blue-500 text-white rounded-md"
                                } else {
                                    "px-4 py-1.5 text-sm text-slate-300 hover:text-white rounded-md transition-colors"
                                }
                            }
                            on:click=move |_| switch_mode(m)
                        >
                            {m.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="bg-slate-800 border border-slate-700 rounded-xl p-4">
                <div class="flex flex-wrap items-end gap-3">
                    <Show when=move || mode.get() == SearchMode::Browse>
                        <CollectionSelect
                            label="Collection"
                            options=collections
                            value=browse_collection
                            on_change=move |name| set_browse_collection.set(name)
                        />
                        <div>
                            <label class="block text-xs text-slate-400 mb-1">"Limit"</label>
                            <input
                                type="number"
                                min="1"
                                max="5000"
                                class="w-24 bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                                prop:value=browse_limit
                                on:input=move |ev| set_browse_limit.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <Show when=move || mode.get() == SearchMode::TextSearch>
                        <CollectionSelect
                            label="Collection (optional)"
                            options=collections
                            value=search_collection
                            on_change=move |name| set_search_collection.set(name)
                            allow_any=true
                        />
                        <div class="flex-1 min-w-48">
                            <label class="block text-xs text-slate-400 mb-1">"Query"</label>
                            <input
                                type="text"
                                placeholder="Search text..."
                                class="w-full bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                                prop:value=query
                                on:input=move |ev| set_query.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <Show when=move || mode.get() == SearchMode::NearObject>
                        <CollectionSelect
                            label="Collection"
                            options=collections
                            value=near_collection
                            on_change=move |name| set_near_collection.set(name)
                        />
                        <div class="flex-1 min-w-48">
                            <label class="block text-xs text-slate-400 mb-1">"Object ID"</label>
                            <input
                                type="text"
                                placeholder="Seed object uuid"
                                class="w-full bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white font-mono focus:outline-none focus:border-blue-500"
                                prop:value=seed_id
                                on:input=move |ev| set_seed_id.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-xs text-slate-400 mb-1">"Limit"</label>
                            <input
                                type="number"
                                min="1"
                                max="5000"
                                class="w-24 bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                                prop:value=near_limit
                                on:input=move |ev| set_near_limit.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <button
                        class="flex items-center gap-2 px-4 py-2 text-sm bg-blue-500 hover:bg-blue-600 text-white font-medium rounded-lg transition-colors"
                        on:click={
                            let run = run.clone();
                            move |_| run()
                        }
                    >
                        {move || if mode.get() == SearchMode::Browse {
                            view! { <DataIcon class="w-4 h-4" /> }.into_view()
                        } else {
                            view! { <SearchIcon class="w-4 h-4" /> }.into_view()
                        }}
                        {move || if mode.get() == SearchMode::Browse { "Load" } else { "Search" }}
                    </button>
                </div>
            </div>

            {move || match results.get() {
                RemoteData::Idle => view! {
                    <p class="text-sm text-slate-500 text-center py-8">
                        "Pick a collection and load objects, or run a search"
                    </p>
                }.into_view(),
                RemoteData::Loading => view! { <Spinner /> }.into_view(),
                RemoteData::Failed(message) => view! {
                    <ErrorAlert
                        message=Signal::derive(move || message.clone())
                        on_dismiss=move |_| set_results.set(RemoteData::Idle)
                    />
                }.into_view(),
                RemoteData::Ready(set) if set.hits.is_empty() => view! {
                    <p class="text-sm text-slate-500 text-center py-8">"No objects found"</p>
                }.into_view(),
                RemoteData::Ready(set) => view! {
                    <ObjectsTable
                        hits=set.hits
                        scored=set.scored
                        on_view=move |object| set_detail.set(Some(object))
                    />
                }.into_view(),
            }}

            {move || {
                detail.get().map(|object| view! {
                    <ObjectDetailDialog
                        object=object
                        on_close=move |_| set_detail.set(None)
                    />
                })
            }}
        </div>
    }
}

#[component]
fn CollectionSelect(
    label: &'static str,
    options: ReadSignal<Vec<String>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(default = false)] allow_any: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs text-slate-400 mb-1">{label}</label>
            <select
                class="bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                prop:value=value
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <Show when=move || allow_any>
                    <option value="">"(all collections)"</option>
                </Show>
                <For
                    each=move || options.get()
                    key=|name| name.clone()
                    children=move |name: String| {
                        let value = name.clone();
                        view! { <option value=value>{name}</option> }
                    }
                />
            </select>
        </div>
    }
}

#[component]
fn ObjectsTable(
    hits: Vec<ObjectHit>,
    scored: bool,
    #[prop(into)] on_view: Callback<WeaviateObject>,
) -> impl IntoView {
    view! {
        <div class="bg-slate-800 border border-slate-700 rounded-xl overflow-hidden">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-slate-500 border-b border-slate-700 bg-slate-800/50">
                        <th class="px-4 py-3 font-medium">"ID"</th>
                        <th class="px-4 py-3 font-medium">"Collection"</th>
                        <th class="px-4 py-3 font-medium">"Properties"</th>
                        {scored.then(|| view! {
                            <th class="px-4 py-3 font-medium">"Score / Distance"</th>
                        })}
                        <th class="px-4 py-3 font-medium w-12"></th>
                    </tr>
                </thead>
                <tbody>
                    {hits
                        .into_iter()
                        .map(|hit| {
                            let display_id = short_id(&hit.object.id);
                            let collection = hit.object.collection.clone().unwrap_or_default();
                            let summary = summarize_properties(&hit.object.properties);
                            let relevance = relevance_text(hit.relevance);
                            let row_object = hit.object.clone();
                            view! {
                                <tr class="border-b border-slate-700/50 hover:bg-slate-700/30">
                                    <td class="px-4 py-3 text-slate-200 font-mono" title=hit.object.id.clone()>
                                        {display_id}
                                    </td>
                                    <td class="px-4 py-3 text-slate-300">{collection}</td>
                                    <td class="px-4 py-3 text-slate-400">{summary}</td>
                                    {scored.then(|| view! {
                                        <td class="px-4 py-3 text-slate-300 font-mono">{relevance}</td>
                                    })}
                                    <td class="px-4 py-3">
                                        <button
                                            class="text-slate-400 hover:text-blue-400 transition-colors"
                                            on:click=move |_| on_view.call(row_object.clone())
                                        >
                                            <EyeIcon class="w-4 h-4" />
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ObjectDetailDialog(
    object: WeaviateObject,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let collection = object.collection.clone().unwrap_or_else(|| "unknown".into());
    let mut props: Vec<(String, Value)> = object
        .properties
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    props.sort_by(|a, b| a.0.cmp(&b.0));

    let vector_preview = object.vector.as_ref().map(|vector| {
        let preview: Vec<String> = vector
            .iter()
            .take(VECTOR_PREVIEW_DIMS)
            .map(|v| format!("{:.4}", v))
            .collect();
        (preview.join(", "), vector.len())
    });

    let metadata = object.metadata.clone().filter(|m| !m.is_empty());

    view! {
        <Modal title="Object Details" on_close=on_close>
            <div class="space-y-4 text-sm">
                <div>
                    <p class="text-slate-500 mb-1">"ID"</p>
                    <p class="text-slate-200 font-mono break-all">{object.id.clone()}</p>
                </div>
                <div>
                    <p class="text-slate-500 mb-1">"Collection"</p>
                    <p class="text-slate-200">{collection}</p>
                </div>

                <div>
                    <p class="text-slate-500 mb-1">"Properties"</p>
                    <div class="bg-slate-900 border border-slate-700 rounded-lg divide-y divide-slate-700/50">
                        {props
                            .into_iter()
                            .map(|(key, value)| {
                                let rendered = match value {
                                    Value::String(s) => s,
                                    other => serde_json::to_string_pretty(&other)
                                        .unwrap_or_else(|_| other.to_string()),
                                };
                                view! {
                                    <div class="px-3 py-2">
                                        <span class="text-slate-400 font-mono">{key}</span>
                                        <p class="text-slate-200 whitespace-pre-wrap break-words mt-0.5">
                                            {rendered}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {vector_preview.map(|(preview, total)| view! {
                    <div>
                        <p class="text-slate-500 mb-1">
                            "Vector (first " {VECTOR_PREVIEW_DIMS.min(total)} " of " {total} " dimensions)"
                        </p>
                        <p class="text-slate-300 font-mono text-xs bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 break-all">
                            "[" {preview} {if total > VECTOR_PREVIEW_DIMS { ", ..." } else { "" }} "]"
                        </p>
                    </div>
                })}

                {metadata.map(|meta| {
                    let rendered = serde_json::to_string_pretty(&meta).unwrap_or_default();
                    view! {
                        <div>
                            <p class="text-slate-500 mb-1">"Metadata"</p>
                            <pre class="text-slate-300 font-mono text-xs bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 overflow-auto">
                                {rendered}
                            </pre>
                        </div>
                    }
                })}
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn long_ids_are_truncated_to_eight_chars() {
        assert_eq!(
            short_id("f81bfe5e-16ba-4615-aa74-bab9906cb563"),
            "f81bfe5e..."
        );
    }

    #[test]
    fn short_ids_pass_through() {
        assert_eq!(short_id("abc123"), "abc123");
        assert_eq!(short_id("12345678"), "12345678");
    }

    #[test]
    fn property_summary_caps_at_three_entries() {
        let mut properties = std::collections::HashMap::new();
        properties.insert("a".to_string(), json!("1"));
        properties.insert("b".to_string(), json!("2"));
        properties.insert("c".to_string(), json!("3"));
        properties.insert("d".to_string(), json!("4"));

        let summary = summarize_properties(&properties);
        assert!(summary.contains("a: 1"));
        assert!(summary.contains("+1 more"));
        assert!(!summary.contains("d: 4"));
    }

    #[test]
    fn property_summary_truncates_long_strings() {
        let mut properties = std::collections::HashMap::new();
        properties.insert("text".to_string(), json!("x".repeat(100)));

        let summary = summarize_properties(&properties);
        assert!(summary.contains("..."));
        assert!(summary.len() < 60);
    }

    #[test]
    fn search_hits_keep_their_relevance() {
        let scored: SearchResult =
            serde_json::from_str(r#"{"id":"a","properties":{},"score":0.9123}"#).unwrap();
        let hit = ObjectHit::from_search(scored);
        assert_eq!(hit.relevance, Some(0.9123));
        assert_eq!(hit.object.id, "a");

        let by_distance: SearchResult =
            serde_json::from_str(r#"{"id":"b","properties":{},"distance":0.25}"#).unwrap();
        assert_eq!(ObjectHit::from_search(by_distance).relevance, Some(0.25));
    }

    #[test]
    fn relevance_cell_shows_four_decimals() {
        assert_eq!(relevance_text(Some(0.9123)), "0.9123");
        assert_eq!(relevance_text(Some(0.25)), "0.2500");
        assert_eq!(relevance_text(None), "-");
    }

    #[test]
    fn browsed_rows_carry_no_relevance() {
        let object: WeaviateObject = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert!(ObjectHit::browsed(object).relevance.is_none());
    }

    #[test]
    fn empty_collection_choice_searches_everywhere() {
        assert_eq!(search_scope(""), None);
        assert_eq!(search_scope("Article"), Some("Article"));
    }

    #[test]
    fn limit_fields_fall_back_to_the_mode_default() {
        assert_eq!(parse_limit("50", 50), 50);
        assert_eq!(parse_limit(" 200 ", 10), 200);
        assert_eq!(parse_limit("", 10), 10);
        assert_eq!(parse_limit("0", 10), 10);
        assert_eq!(parse_limit("9999", 50), 50);
        assert_eq!(parse_limit("abc", 50), 50);
    }
}
