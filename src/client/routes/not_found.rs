use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Skald" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl",
                    "Page not found"
                }
                p {
                    "The page /{path} does not exist."
                }
                Link {
                    to: Route::Home {},
                    class: "btn btn-primary",
                    "Back to home"
                }
            }
        }
    )
}
