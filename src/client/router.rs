use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Clients, Dashboard, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/clients")]
    Clients {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
