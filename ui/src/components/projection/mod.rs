//! 3D Projection Tab
//!
//! Renders a reduced-dimensionality projection of a collection's vectors as
//! a slowly rotating point cloud. Points keep their response order, so the
//! k-th rendered marker always corresponds to the k-th projection point;
//! clicking one opens its details in the side panel.

mod scene;

use gloo_timers::callback::Interval;
use leptos::*;
use weaviate_admin_shared::{ProjectionPoint, ProjectionRequest, ProjectionResponse};

use crate::client::ApiClient;
use crate::components::common::{CubeIcon, ErrorAlert, Spinner};
use crate::state::{FetchSeq, RemoteData};

/// Default number of vectors to project.
const DEFAULT_LIMIT: u32 = 500;

/// Rotation step per animation tick, radians.
const ROTATION_STEP: f64 = 0.003;

/// Animation tick interval, milliseconds.
const TICK_MS: u32 = 50;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 600.0;

const COLOR_DEFAULT: &str = "#80CCFF";
const COLOR_HOVER: &str = "#FF8000";
const COLOR_SELECTED: &str = "#FF3399";

/// Parse the comma-separated property include list. Entries are trimmed and
/// empties dropped; an effectively empty input means "no properties".
fn parse_props_list(input: &str) -> Option<Vec<String>> {
    let props: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if props.is_empty() {
        None
    } else {
        Some(props)
    }
}

/// Vector projection tab
#[component]
pub fn ProjectionTab() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (collections, set_collections) = create_signal(Vec::<String>::new());
    let (collection, set_collection) = create_signal(String::new());
    let (limit, set_limit) = create_signal(DEFAULT_LIMIT.to_string());
    let (dims, set_dims) = create_signal(3_u32);
    let (include_props, set_include_props) = create_signal(String::new());
    let (projection, set_projection) = create_signal(RemoteData::<ProjectionResponse>::Idle);
    let (selected, set_selected) = create_signal(Option::<usize>::None);
    let seq = FetchSeq::new();

    {
        let client = client.clone();
        spawn_local(async move {
            match client.list_collections().await {
                Ok(list) => {
                    if let Some(first) = list.collections.first() {
                        if collection.get_untracked().is_empty() {
                            set_collection.set(first.clone());
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

    let load = {
        let client = client.clone();
        let seq = seq.clone();
        move || {
            let name = collection.get_untracked();
            if name.is_empty() {
                set_projection.set(RemoteData::Failed("Select a collection".into()));
                return;
            }
            let request = ProjectionRequest {
                collection: name,
                limit: limit
                    .get_untracked()
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|n| (1..=5000).contains(n))
                    .unwrap_or(DEFAULT_LIMIT),
                dims: dims.get_untracked(),
                include_props: parse_props_list(&include_props.get_untracked()),
            };

            let client = client.clone();
            let seq = seq.clone();
            let ticket = seq.begin();
            set_projection.set(RemoteData::Loading);
            set_selected.set(None);
            spawn_local(async move {
                let result = client.projection(&request).await;
                if !seq.is_current(ticket) {
                    return;
                }
                set_projection.set(RemoteData::from_result(result.map_err(|e| e.to_string())));
            });
        }
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-white">"3D View"</h1>

            <div class="bg-slate-800 border border-slate-700 rounded-xl p-4">
                <div class="flex flex-wrap items-end gap-3">
                    <div>
                        <label class="block text-xs text-slate-400 mb-1">"Collection"</label>
                        <select
                            class="bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                            prop:value=collection
                            on:change=move |ev| set_collection.set(event_target_value(&ev))
                        >
                            <For
                                each=move || collections.get()
                                key=|name| name.clone()
                                children=move |name: String| {
                                    let value = name.clone();
                                    view! { <option value=value>{name}</option> }
                                }
                            />
                        </select>
                    </div>

                    <div>
                        <label class="block text-xs text-slate-400 mb-1">"Limit"</label>
                        <input
                            type="number"
                            min="1"
                            max="5000"
                            class="w-24 bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                            prop:value=limit
                            on:input=move |ev| set_limit.set(event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label class="block text-xs text-slate-400 mb-1">"Dimensions"</label>
                        <select
                            class="bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                            on:change=move |ev| {
                                if let Ok(d) = event_target_value(&ev).parse::<u32>() {
                                    set_dims.set(d);
                                }
                            }
                        >
                            <option value="3" selected=move || dims.get() == 3>"3D"</option>
                            <option value="2" selected=move || dims.get() == 2>"2D"</option>
                        </select>
                    </div>

                    <div class="flex-1 min-w-48">
                        <label class="block text-xs text-slate-400 mb-1">
                            "Include properties (comma-separated)"
                        </label>
                        <input
                            type="text"
                            placeholder="title, category"
                            class="w-full bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                            prop:value=include_props
                            on:input=move |ev| set_include_props.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        class="flex items-center gap-2 px-4 py-2 text-sm bg-blue-500 hover:bg-blue-600 text-white font-medium rounded-lg transition-colors"
                        on:click={
                            let load = load.clone();
                            move |_| load()
                        }
                    >
                        <CubeIcon class="w-4 h-4" />
                        "Project"
                    </button>
                </div>
            </div>

            {move || match projection.get() {
                RemoteData::Idle => view! {
                    <p class="text-sm text-slate-500 text-center py-8">
                        "Pick a collection and project its vectors"
                    </p>
                }.into_view(),
                RemoteData::Loading => view! { <Spinner /> }.into_view(),
                RemoteData::Failed(message) => view! {
                    <ErrorAlert
                        message=Signal::derive(move || message.clone())
                        on_dismiss=move |_| set_projection.set(RemoteData::Idle)
                    />
                }.into_view(),
                RemoteData::Ready(response) if response.points.is_empty() => view! {
                    <p class="text-sm text-slate-500 text-center py-8">"No vectors to project"</p>
                }.into_view(),
                RemoteData::Ready(response) => view! {
                    <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                        <div class="xl:col-span-2">
                            <PointCloud
                                points=response.points.clone()
                                selected=selected
                                on_select=move |index| set_selected.set(Some(index))
                            />
                        </div>
                        <div class="space-y-4">
                            <PointDetails points=response.points selected=selected />
                            <Legend />
                        </div>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// The rotating SVG point cloud. Markers are emitted in point order; the
/// k-th marker reports index k on click and hover.
#[component]
fn PointCloud(
    points: Vec<ProjectionPoint>,
    #[prop(into)] selected: Signal<Option<usize>>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let (angle, set_angle) = create_signal(0.0_f64);
    let (hovered, set_hovered) = create_signal(Option::<usize>::None);

    let interval = Interval::new(TICK_MS, move || {
        set_angle.update(|a| *a += ROTATION_STEP);
    });
    on_cleanup(move || drop(interval));

    let base_points: Vec<[f64; 3]> = points
        .iter()
        .map(|point| scene::to_point3(&point.coords))
        .collect();
    let radius = scene::bounding_radius(base_points.iter());

    let markers = move || {
        let angle = angle.get();
        base_points
            .iter()
            .enumerate()
            .map(|(index, &point)| {
                let rotated = scene::rotate_y(point, angle);
                let (cx, cy) = scene::project(rotated, radius, CANVAS_WIDTH, CANVAS_HEIGHT);
                let r = scene::marker_radius(rotated, radius);
                let fill = if selected.get() == Some(index) {
                    COLOR_SELECTED
                } else if hovered.get() == Some(index) {
                    COLOR_HOVER
                } else {
                    COLOR_DEFAULT
                };
                view! {
                    <circle
                        cx=cx
                        cy=cy
                        r=r
                        fill=fill
                        class="cursor-pointer"
                        on:click=move |_| on_select.call(index)
                        on:mouseenter=move |_| set_hovered.set(Some(index))
                        on:mouseleave=move |_| set_hovered.set(None)
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="bg-slate-900 border border-slate-700 rounded-xl overflow-hidden">
            <svg
                viewBox=format!("0 0 {} {}", CANVAS_WIDTH, CANVAS_HEIGHT)
                class="w-full h-auto block"
            >
                {markers}
            </svg>
        </div>
    }
}

#[component]
fn PointDetails(
    points: Vec<ProjectionPoint>,
    #[prop(into)] selected: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="bg-slate-800 border border-slate-700 rounded-xl p-4">
            <p class="text-sm text-slate-400 mb-2">"Selected Point"</p>
            {move || match selected.get().and_then(|index| points.get(index).cloned()) {
                None => view! {
                    <p class="text-sm text-slate-500">"Click a point to inspect it"</p>
                }.into_view(),
                Some(point) => {
                    let coords = point
                        .coords
                        .iter()
                        .map(|c| format!("{:.3}", c))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let mut props: Vec<(String, String)> = point
                        .properties
                        .as_ref()
                        .map(|map| {
                            map.iter()
                                .map(|(k, v)| {
                                    let rendered = match v {
                                        serde_json::Value::String(s) => s.clone(),
                                        other => other.to_string(),
                                    };
                                    (k.clone(), rendered)
                                })
                                .collect()
                        })
                        .unwrap_or_default();
                    props.sort_by(|a, b| a.0.cmp(&b.0));

                    view! {
                        <div class="space-y-2 text-sm">
                            <div>
                                <span class="text-slate-500">"ID: "</span>
                                <span class="text-slate-200 font-mono break-all">{point.id.clone()}</span>
                            </div>
                            <div>
                                <span class="text-slate-500">"Coords: "</span>
                                <span class="text-slate-200 font-mono">"[" {coords} "]"</span>
                            </div>
                            {(!props.is_empty()).then(|| view! {
                                <div class="pt-1 border-t border-slate-700/50 space-y-1">
                                    {props
                                        .into_iter()
                                        .map(|(key, value)| view! {
                                            <div>
                                                <span class="text-slate-500">{key} ": "</span>
                                                <span class="text-slate-300 break-words">{value}</span>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            })}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn Legend() -> impl IntoView {
    let entries = [
        (COLOR_DEFAULT, "Point"),
        (COLOR_HOVER, "Hovered"),
        (COLOR_SELECTED, "Selected"),
    ];
    view! {
        <div class="bg-slate-800 border border-slate-700 rounded-xl p-4">
            <p class="text-sm text-slate-400 mb-2">"Legend"</p>
            <div class="space-y-1">
                {entries
                    .into_iter()
                    .map(|(color, label)| view! {
                        <div class="flex items-center gap-2 text-sm text-slate-300">
                            <span
                                class="w-3 h-3 rounded-full inline-block"
                                style=format!("background-color: {}", color)
                            />
                            {label}
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_props_list;

    #[test]
    fn splits_trims_and_drops_empties() {
        assert_eq!(
            parse_props_list(" title , category ,, "),
            Some(vec!["title".to_string(), "category".to_string()])
        );
    }

    #[test]
    fn blank_input_means_no_properties() {
        assert_eq!(parse_props_list(""), None);
        assert_eq!(parse_props_list("  ,  , "), None);
    }
}
