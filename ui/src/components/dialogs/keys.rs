//! API Keys Dialog
//!
//! Lists the names of stored API keys and lets the user add or remove
//! entries. Values are write-only: the backend never returns them, so the
//! list shows names alone. The outcome reported on close reflects whether
//! any mutation succeeded while the dialog was open.

use leptos::*;

use crate::client::ApiClient;
use crate::components::common::{ErrorAlert, Modal, PlusIcon, Spinner, SuccessAlert, TrashIcon};

use super::DialogOutcome;

/// A key entry is valid when both fields are non-empty after trimming.
fn validate_entry(name: &str, value: &str) -> Result<(String, String), String> {
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return Err("Both key name and value are required".to_string());
    }
    Ok((name.to_string(), value.to_string()))
}

/// API key management dialog
#[component]
pub fn KeysDialog(#[prop(into)] on_close: Callback<DialogOutcome>) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (keys, set_keys) = create_signal(Vec::<String>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(Option::<String>::None);
    let (success, set_success) = create_signal(Option::<String>::None);
    let (busy, set_busy) = create_signal(false);
    let (new_name, set_new_name) = create_signal(String::new());
    let (new_value, set_new_value) = create_signal(String::new());
    // Whether any write succeeded since the dialog opened.
    let (mutated, set_mutated) = create_signal(false);

    let load_keys = {
        let client = client.clone();
        move || {
            let client = client.clone();
            set_loading.set(true);
            spawn_local(async move {
                match client.list_keys().await {
                    Ok(list) => set_keys.set(list.keys),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    };

    load_keys();

    let add_key = {
        let client = client.clone();
        let load_keys = load_keys.clone();
        move |_| {
            set_error.set(None);
            set_success.set(None);

            let (name, value) =
                match validate_entry(&new_name.get_untracked(), &new_value.get_untracked()) {
                    Ok(entry) => entry,
                    Err(message) => {
                        set_error.set(Some(message));
                        return;
                    }
                };

            let client = client.clone();
            let load_keys = load_keys.clone();
            set_busy.set(true);
            spawn_local(async move {
                match client.add_key(&name, &value).await {
                    Ok(ack) => {
                        set_mutated.set(true);
                        set_success.set(Some(ack.message));
                        set_new_name.set(String::new());
                        set_new_value.set(String::new());
                        load_keys();
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_busy.set(false);
            });
        }
    };

    let delete_key = Callback::new({
        let client = client.clone();
        let load_keys = load_keys.clone();
        move |name: String| {
            set_error.set(None);
            set_success.set(None);

            let client = client.clone();
            let load_keys = load_keys.clone();
            set_busy.set(true);
            spawn_local(async move {
                match client.delete_key(&name).await {
                    Ok(ack) => {
                        set_mutated.set(true);
                        set_success.set(Some(ack.message));
                        load_keys();
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_busy.set(false);
            });
        }
    });

    let finish = move || {
        if mutated.get_untracked() {
            on_close.call(DialogOutcome::Saved);
        } else {
            on_close.call(DialogOutcome::Cancelled);
        }
    };

    view! {
        <Modal title="API Keys" on_close=move |_| finish()>
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
                    "Keys are stored on the backend and passed to Weaviate modules. \
                     Values are write-only and never shown again."
                </p>

                <div class="grid grid-cols-[1fr_1fr_auto] gap-2">
                    <input
                        type="text"
                        class="bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                        placeholder="Key name"
                        prop:value=new_name
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                        placeholder="Value"
                        prop:value=new_value
                        on:input=move |ev| set_new_value.set(event_target_value(&ev))
                    />
                    <button
                        class="px-3 py-2 bg-blue-500 hover:bg-blue-600 disabled:opacity-50 text-white rounded-lg transition-colors"
                        disabled=move || busy.get()
                        on:click=add_key
                    >
                        <PlusIcon class="w-4 h-4" />
                    </button>
                </div>

                <Show when=move || !loading.get() fallback=Spinner>
                    <Show
                        when=move || !keys.get().is_empty()
                        fallback=|| view! {
                            <p class="text-sm text-slate-500 text-center py-4">"No keys stored"</p>
                        }
                    >
                        <ul class="divide-y divide-slate-700 border border-slate-700 rounded-lg">
                            <For
                                each=move || keys.get()
                                key=|name| name.clone()
                                children={
                                    move |name: String| {
                                        let target = name.clone();
                                        view! {
                                            <li class="flex items-center justify-between px-4 py-2">
                                                <span class="text-sm text-slate-200 font-mono">{name}</span>
                                                <button
                                                    class="text-slate-400 hover:text-red-400 disabled:opacity-50 transition-colors"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| delete_key.call(target.clone())
                                                >
                                                    <TrashIcon class="w-4 h-4" />
                                                </button>
                                            </li>
                                        }
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </Show>

                <div class="flex justify-end pt-2">
                    <button
                        class="px-4 py-2 text-sm text-slate-300 hover:text-white rounded-lg transition-colors"
                        on:click=move |_| finish()
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::validate_entry;

    #[test]
    fn trims_and_accepts_non_empty_fields() {
        assert_eq!(
            validate_entry("  OPENAI_APIKEY ", " sk-123 "),
            Ok(("OPENAI_APIKEY".to_string(), "sk-123".to_string()))
        );
    }

    #[test]
    fn rejects_blank_name_or_value() {
        assert!(validate_entry("", "value").is_err());
        assert!(validate_entry("name", "").is_err());
        assert!(validate_entry("   ", "value").is_err());
        assert!(validate_entry("name", "   ").is_err());
    }
}
