use dioxus::prelude::*;

use crate::client::store::active_client::ActiveClientState;

/// Dropdown switching the active client for the whole app.
#[component]
pub fn ClientPicker() -> Element {
    let mut state = use_context::<Signal<ActiveClientState>>();

    let clients = state.read().clients.clone();
    let selected_id = state.read().selected_id;

    rsx! {
        select {
            class: "select select-bordered select-sm",
            onchange: move |event| {
                if let Ok(client_id) = event.value().parse::<i32>() {
                    state.write().select(client_id);
                }
            },
            for client in clients {
                option {
                    value: "{client.id}",
                    selected: selected_id == Some(client.id),
                    "{client.name}"
                }
            }
        }
    }
}
