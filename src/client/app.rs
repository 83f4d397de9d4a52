use dioxus::prelude::*;

use crate::client::{router::Route, store::active_client::ActiveClientState};

#[component]
pub fn App() -> Element {
    // Single shared store for the client list and active selection; every
    // component subscribes through this context signal.
    use_context_provider(|| Signal::new(ActiveClientState::default()));

    rsx! {
        Router::<Route> {}
    }
}
