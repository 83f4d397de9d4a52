use dioxus::prelude::*;

pub use crate::client::router::Route;
use crate::client::store::active_client::ActiveClientState;

#[component]
pub fn Navbar() -> Element {
    let state = use_context::<Signal<ActiveClientState>>();

    let active_client_name = state.read().selected().map(|client| client.name.clone());

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Skald"
                    }
                    p { class: "text-xs",
                        "v0.1.0.Alpha-1"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "flex gap-2",
                    li {
                        Link { to: Route::Home {}, class: "btn btn-ghost btn-sm", "Home" }
                    }
                    li {
                        Link { to: Route::Clients {}, class: "btn btn-ghost btn-sm", "Clients" }
                    }
                    li {
                        Link { to: Route::Dashboard {}, class: "btn btn-ghost btn-sm", "Dashboard" }
                    }
                    li {
                        a { href: "/api/docs",
                            button { class: "btn btn-ghost btn-sm", "API Docs" }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(name) = active_client_name {
                    div { class: "badge badge-primary",
                        "{name}"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
