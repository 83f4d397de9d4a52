use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::Page, store::active_client::ActiveClientState};

#[component]
pub fn Clients() -> Element {
    rsx!(
        Title { "Clients | Skald" }
        Meta {
            name: "description",
            content: "Manage the brands you produce content for."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] p-6 flex flex-col gap-4",
                ClientTable { }
                NewClientCard { }
            }
        }
    )
}

#[component]
pub fn ClientTable() -> Element {
    let mut state = use_context::<Signal<ActiveClientState>>();

    // Retrieve clients on component load
    #[cfg(feature = "web")]
    {
        use crate::client::util::api::get_clients;

        let future = use_resource(|| async move { get_clients().await });

        match &*future.read_unchecked() {
            Some(Ok(clients)) => {
                if !state.read().fetched {
                    state.write().set_clients(clients.clone());
                }
            }
            Some(Err(err)) => {
                tracing::error!("{}", err);
            }
            None => (),
        }
    }

    let clients = state.read().clients.clone();
    let selected_id = state.read().selected_id;

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Clients"
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Niche" }
                                th { "Audience" }
                                th { "" }
                            }
                        }
                        tbody {
                            {clients.iter().map(|client| {
                                let client_id = client.id;
                                let niche = client.niche.clone().unwrap_or_default();
                                let audience = client.target_audience.clone().unwrap_or_default();

                                rsx! {
                                    tr {
                                        td { "{client.name}" }
                                        td { "{niche}" }
                                        td { "{audience}" }
                                        td {
                                            if selected_id == Some(client_id) {
                                                span { class: "badge badge-primary", "Active" }
                                            } else {
                                                button {
                                                    class: "btn btn-outline btn-xs",
                                                    onclick: move |_| {
                                                        state.write().select(client_id);
                                                    },
                                                    "Set active"
                                                }
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn NewClientCard() -> Element {
    let mut state = use_context::<Signal<ActiveClientState>>();

    let mut name = use_signal(String::new);
    let mut niche = use_signal(String::new);
    let mut target_audience = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_create = move |_| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api::create_client;
            use crate::model::client::CreateClientDto;

            let request = CreateClientDto {
                name: name.read().clone(),
                description: None,
                niche: Some(niche.read().clone()).filter(|value| !value.is_empty()),
                target_audience: Some(target_audience.read().clone())
                    .filter(|value| !value.is_empty()),
            };

            if request.name.is_empty() {
                error.set(Some("A client needs a name".to_string()));
                return;
            }

            spawn(async move {
                match create_client(&request).await {
                    Ok(created) => {
                        state.write().add_client(created);
                        name.set(String::new());
                        niche.set(String::new());
                        target_audience.set(String::new());
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(err));
                    }
                }
            });
        }
    };

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "New client"
                }
                div { class: "flex flex-wrap gap-2",
                    input {
                        class: "input input-bordered",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Niche",
                        value: "{niche}",
                        oninput: move |event| niche.set(event.value()),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Target audience",
                        value: "{target_audience}",
                        oninput: move |event| target_audience.set(event.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: on_create,
                        "Create"
                    }
                }
                if let Some(err) = error.read().as_ref() {
                    p { class: "text-error", "{err}" }
                }
            }
        }
    )
}
