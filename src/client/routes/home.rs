use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFeather, FaRss};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Skald Home" }
        Meta {
            name: "description",
            content: "Content-marketing platform: clients, feed sources, scraped content, and AI-assisted briefs."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "Skald"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div {
                    ul { class: "flex gap-2",
                        li {
                            Link {
                                to: Route::Clients {},
                                class: "btn btn-primary w-28",
                                "Clients"
                            }
                        }
                        li {
                            a { href: "/api/docs",
                                button {
                                    class: "btn btn-secondary w-28",
                                    "API Docs"
                                }
                            }
                        }
                    }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "This is a test instance of Skald"
                    }
                    p {
                        "Currently we are testing client management, feed sources, content sync from the
                        scraper service, and AI-assisted brief generation. This is a very basic
                        implementation of a frontend for the purposes of testing."
                    }
                    p {
                        "To participate in the test, create a client for a brand you know, attach a couple
                        of RSS or blog feeds to it, run a scrape, sync the results, and generate a brief
                        from the synced content. Approve or reject the drafts and try to break the flows
                        in between."
                    }
                    ul { class: "list-disc pl-6",
                        li {
                            div { class: "flex items-center gap-2",
                                Icon { width: 16, height: 16, icon: FaRss }
                                p { "Sources: RSS, blog, news, and YouTube feeds per client" }
                            }
                        }
                        li {
                            div { class: "flex items-center gap-2",
                                Icon { width: 16, height: 16, icon: FaFeather }
                                p { "Briefs: drafted by hand or generated from synced content" }
                            }
                        }
                    }
                    p {
                        "There is much more work to be done, this is a very basic implementation of the
                        foundations built so far. The next test will focus on the analysis config screens
                        and per-source scheduling."
                    }
                }
            }
        }
    )
}
