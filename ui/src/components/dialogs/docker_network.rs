//! Docker Network Dialog
//!
//! Attaches the backend container to one of the available Docker networks,
//! or detaches it entirely. Selecting the empty entry is an explicit
//! disconnect: saving then issues the DELETE-style call, not a set.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::client::ApiClient;
use crate::components::common::{ErrorAlert, Modal, Spinner, SuccessAlert};

use super::{DialogOutcome, CLOSE_DELAY_MS};

/// What saving the current selection means.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NetworkAction {
    /// Empty selection: detach from any network.
    Disconnect,
    /// Attach to the named network.
    Connect(String),
}

impl NetworkAction {
    fn from_selection(selection: &str) -> Self {
        if selection.is_empty() {
            Self::Disconnect
        } else {
            Self::Connect(selection.to_string())
        }
    }
}

/// Docker network selection dialog
#[component]
pub fn DockerNetworkDialog(#[prop(into)] on_close: Callback<DialogOutcome>) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (networks, set_networks) = create_signal(Vec::<String>::new());
    let (selected, set_selected) = create_signal(String::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(Option::<String>::None);
    let (success, set_success) = create_signal(Option::<String>::None);
    let (saving, set_saving) = create_signal(false);

    // Fetch the available networks and the current attachment together.
    {
        let client = client.clone();
        spawn_local(async move {
            let (list, current) =
                futures::join!(client.docker_networks(), client.docker_network());
            match (list, current) {
                (Ok(list), Ok(current)) => {
                    set_networks.set(list.networks);
                    set_selected.set(current.network);
                }
                (Err(e), _) | (_, Err(e)) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    }

    let save = {
        let client = client.clone();
        move |_| {
            set_error.set(None);
            set_success.set(None);
            set_saving.set(true);

            let action = NetworkAction::from_selection(&selected.get_untracked());
            let client = client.clone();
            spawn_local(async move {
                let result = match &action {
                    NetworkAction::Disconnect => client.clear_docker_network().await,
                    NetworkAction::Connect(network) => client.set_docker_network(network).await,
                };
                set_saving.set(false);

                match result {
                    Ok(ack) => {
                        set_success.set(Some(ack.message));
                        Timeout::new(CLOSE_DELAY_MS, move || {
                            on_close.call(DialogOutcome::Saved);
                        })
                        .forget();
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <Modal title="Docker Network Configuration" on_close=move |_| on_close.call(DialogOutcome::Cancelled)>
            <div class="space-y-4">
                <Show when=move || error.get().is_some()>
                    <ErrorAlert
                        message=Signal::derive(move || error.get().unwrap_or_default())
                        on_dismiss=move |_| set_error.set(None)
                    />
                </Show>
                <Show when=move || success.get().is_some()>
                    <SuccessAlert message=Signal::derive(move || success.get().unwrap_or_default()) />
                </Show>

                <p class="text-sm text-slate-400">
                    "Select the Docker network the Weaviate container should join. \
                     Choosing the empty entry disconnects it from its current network."
                </p>

                <Show when=move || !loading.get() fallback=Spinner>
                    <select
                        class="w-full bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                        prop:value=selected
                        on:change=move |ev| set_selected.set(event_target_value(&ev))
                    >
                        <option value="">"(not connected)"</option>
                        <For
                            each=move || networks.get()
                            key=|name| name.clone()
                            children=move |name: String| {
                                let value = name.clone();
                                view! { <option value=value>{name}</option> }
                            }
                        />
                    </select>
                </Show>

                <div class="flex justify-end gap-2 pt-2">
                    <button
                        class="px-4 py-2 text-sm text-slate-300 hover:text-white rounded-lg transition-colors"
                        on:click=move |_| on_close.call(DialogOutcome::Cancelled)
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm bg-blue-500 hover:bg-blue-600 disabled:opacity-50 text-white font-medium rounded-lg transition-colors"
                        disabled=move || saving.get() || loading.get()
                        on:click=save
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::NetworkAction;

    #[test]
    fn empty_selection_means_disconnect() {
        assert_eq!(NetworkAction::from_selection(""), NetworkAction::Disconnect);
    }

    #[test]
    fn non_empty_selection_means_connect() {
        assert_eq!(
            NetworkAction::from_selection("weaviate-net"),
            NetworkAction::Connect("weaviate-net".into())
        );
    }
}
