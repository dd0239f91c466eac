//! Database Configuration Dialog
//!
//! Edits the backend's database URL and port. The port must parse as an
//! integer in [1, 65535]; anything else shows an inline error and never
//! reaches the network.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::client::ApiClient;
use crate::components::common::{ErrorAlert, SuccessAlert};
use crate::components::common::Modal;

use super::{DialogOutcome, CLOSE_DELAY_MS};

/// Validate a port field. Accepts exactly the integers in [1, 65535].
fn parse_port(input: &str) -> Result<u16, String> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|port| (1..=65_535).contains(port))
        .map(|port| port as u16)
        .ok_or_else(|| "Port must be a valid number between 1 and 65535".to_string())
}

/// Database URL/port configuration dialog
#[component]
pub fn ConfigureDialog(#[prop(into)] on_close: Callback<DialogOutcome>) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let (db_url, set_db_url) = create_signal(String::from("localhost"));
    let (db_port, set_db_port) = create_signal(String::from("3131"));
    let (error, set_error) = create_signal(Option::<String>::None);
    let (success, set_success) = create_signal(Option::<String>::None);
    let (saving, set_saving) = create_signal(false);

    // Seed the form with the current remote values. A failure here is not
    // fatal: the user can still type values and save.
    {
        let client = client.clone();
        spawn_local(async move {
            let (url, port) = futures::join!(client.database_url(), client.database_port());
            match (url, port) {
                (Ok(url), Ok(port)) => {
                    set_db_url.set(url.url);
                    set_db_port.set(port.port.to_string());
                }
                (url, port) => {
                    tracing::warn!(?url, ?port, "failed to load database config");
                }
            }
        });
    }

    let save = {
        let client = client.clone();
        move |_| {
            set_error.set(None);
            set_success.set(None);

            let port = match parse_port(&db_port.get_untracked()) {
                Ok(port) => port,
                Err(message) => {
                    set_error.set(Some(message));
                    return;
                }
            };
            let url = db_url.get_untracked();

            let client = client.clone();
            set_saving.set(true);
            spawn_local(async move {
                let (url_result, port_result) = futures::join!(
                    client.set_database_url(&url),
                    client.set_database_port(port)
                );
                set_saving.set(false);

                match url_result.and(port_result) {
                    Ok(_) => {
                        set_success
                            .set(Some("Database configuration updated successfully!".into()));
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

    let cancel = move |_| on_close.call(DialogOutcome::Cancelled);

    view! {
        <Modal title="Database Configuration" on_close=move |_| on_close.call(DialogOutcome::Cancelled)>
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

                <div>
                    <label class="block text-sm font-medium text-slate-300 mb-1">"Database URL"</label>
                    <input
                        type="text"
                        class="w-full bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                        placeholder="localhost"
                        prop:value=db_url
                        on:input=move |ev| set_db_url.set(event_target_value(&ev))
                    />
                    <p class="text-xs text-slate-500 mt-1">
                        "Hostname or IP address of the Weaviate instance"
                    </p>
                </div>

                <div>
                    <label class="block text-sm font-medium text-slate-300 mb-1">"Database Port"</label>
                    <input
                        type="text"
                        class="w-full bg-slate-900 border border-slate-700 rounded-lg px-3 py-2 text-sm text-white focus:outline-none focus:border-blue-500"
                        placeholder="3131"
                        prop:value=db_port
                        on:input=move |ev| set_db_port.set(event_target_value(&ev))
                    />
                    <p class="text-xs text-slate-500 mt-1">"Port number (1-65535)"</p>
                </div>

                <div class="flex justify-end gap-2 pt-2">
                    <button
                        class="px-4 py-2 text-sm text-slate-300 hover:text-white rounded-lg transition-colors"
                        on:click=cancel
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm bg-blue-500 hover:bg-blue-600 disabled:opacity-50 text-white font-medium rounded-lg transition-colors"
                        disabled=move || {
                            saving.get() || db_url.get().is_empty() || db_port.get().is_empty()
                        }
                        on:click=save
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Configuration" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_port;

    #[test]
    fn accepts_ports_in_range() {
        assert_eq!(parse_port("1"), Ok(1));
        assert_eq!(parse_port("3131"), Ok(3131));
        assert_eq!(parse_port("65535"), Ok(65535));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(parse_port("0").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("-1").is_err());
        assert!(parse_port("80x").is_err());
        assert!(parse_port("").is_err());
        assert!(parse_port("8.0").is_err());
    }
}
