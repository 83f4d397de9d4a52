use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::{ClientPicker, Page}, store::active_client::ActiveClientState};

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<Signal<ActiveClientState>>();

    let selected_id = state.read().selected_id;

    rsx!(
        Title { "Dashboard | Skald" }
        Meta {
            name: "description",
            content: "Sources, content, and briefs for the active client."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex flex-col gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-lg font-semibold", "Active client" }
                    ClientPicker { }
                }
                if let Some(client_id) = selected_id {
                    div { class: "flex flex-col gap-4",
                        SourceCard { client_id }
                        ContentCard { client_id }
                        BriefCard { client_id }
                    }
                } else {
                    p {
                        "No client selected yet. Create one on the Clients page to get started."
                    }
                }
            }
        }
    )
}

#[cfg(feature = "web")]
#[component]
pub fn SourceCard(client_id: i32) -> Element {
    use crate::client::util::api::{create_source, get_sources, start_scrape, test_source};
    use crate::model::source::{CreateSourceDto, SourceType, TestSourceDto};

    let mut name = use_signal(String::new);
    let mut url = use_signal(String::new);
    let mut source_type = use_signal(|| "rss".to_string());
    let mut message = use_signal(|| None::<String>);

    let mut future = use_resource(move || async move { get_sources(client_id).await });

    let parse_source_type = |value: &str| match value {
        "blog" => SourceType::Blog,
        "news" => SourceType::News,
        "youtube" => SourceType::Youtube,
        _ => SourceType::Rss,
    };

    let on_add = move |_| {
        let request = CreateSourceDto {
            name: name.read().clone(),
            url: url.read().clone(),
            source_type: parse_source_type(&source_type.read()),
        };

        if request.name.is_empty() || request.url.is_empty() {
            message.set(Some("A source needs a name and a URL".to_string()));
            return;
        }

        spawn(async move {
            match create_source(client_id, &request).await {
                Ok(_) => {
                    name.set(String::new());
                    url.set(String::new());
                    message.set(None);
                    future.restart();
                }
                Err(err) => message.set(Some(err)),
            }
        });
    };

    let on_test = move |_| {
        let request = TestSourceDto {
            url: url.read().clone(),
            source_type: parse_source_type(&source_type.read()),
        };

        spawn(async move {
            match test_source(&request).await {
                Ok(result) if result.ok => {
                    message.set(Some(format!("Feed looks good: {} items", result.item_count)));
                }
                Ok(result) => {
                    message.set(Some(
                        result
                            .message
                            .unwrap_or_else(|| "Feed failed validation".to_string()),
                    ));
                }
                Err(err) => message.set(Some(err)),
            }
        });
    };

    let on_scrape = move |_| {
        spawn(async move {
            match start_scrape(client_id).await {
                Ok(task) => {
                    message.set(Some(format!("Scrape job {} is {}", task.task_id, task.status)));
                    future.restart();
                }
                Err(err) => message.set(Some(err)),
            }
        });
    };

    let body = match &*future.read_unchecked() {
        Some(Ok(sources)) => rsx! {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-md",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Type" }
                            th { "URL" }
                            th { "Active" }
                            th { "Last scraped" }
                        }
                    }
                    tbody {
                        {sources.iter().map(|source| {
                            let source_type = format!("{:?}", source.source_type).to_lowercase();
                            let last_scraped = source
                                .last_scraped_at
                                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                .unwrap_or_else(|| "never".to_string());
                            let active = if source.active { "yes" } else { "no" };

                            rsx! {
                                tr {
                                    td { "{source.name}" }
                                    td { "{source_type}" }
                                    td { "{source.url}" }
                                    td { "{active}" }
                                    td { "{last_scraped}" }
                                }
                            }
                        })}
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            p { class: "text-error", "{err}" }
        },
        None => rsx! {
            div { class: "skeleton h-24 w-full" }
        },
    };

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Sources"
                }
                {body}
                div { class: "flex flex-wrap gap-2",
                    input {
                        class: "input input-bordered",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Feed URL",
                        value: "{url}",
                        oninput: move |event| url.set(event.value()),
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |event| source_type.set(event.value()),
                        option { value: "rss", "RSS" }
                        option { value: "blog", "Blog" }
                        option { value: "news", "News" }
                        option { value: "youtube", "YouTube" }
                    }
                    button { class: "btn btn-outline", onclick: on_test, "Test" }
                    button { class: "btn btn-primary", onclick: on_add, "Add source" }
                    button { class: "btn btn-secondary", onclick: on_scrape, "Scrape now" }
                }
                if let Some(note) = message.read().as_ref() {
                    p { class: "text-sm", "{note}" }
                }
            }
        }
    )
}

#[cfg(not(feature = "web"))]
#[component]
pub fn SourceCard(client_id: i32) -> Element {
    rsx!(
        div { class: "skeleton h-24 w-full" }
    )
}

#[cfg(feature = "web")]
#[component]
pub fn ContentCard(client_id: i32) -> Element {
    use crate::client::util::api::{get_contents, sync_contents};

    let mut message = use_signal(|| None::<String>);

    let mut future = use_resource(move || async move { get_contents(client_id).await });

    let on_sync = move |_| {
        spawn(async move {
            match sync_contents(client_id).await {
                Ok(report) => {
                    message.set(Some(format!(
                        "Sync finished: {} fetched, {} imported, {} skipped",
                        report.fetched, report.imported, report.skipped
                    )));
                    future.restart();
                }
                Err(err) => message.set(Some(err)),
            }
        });
    };

    let body = match &*future.read_unchecked() {
        Some(Ok(contents)) => rsx! {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-md",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Topics" }
                            th { "Scraped" }
                            th { "Analyzed" }
                        }
                    }
                    tbody {
                        {contents.iter().map(|content| {
                            let topics = content.topics.join(", ");
                            let scraped = content.scraped_at.format("%Y-%m-%d %H:%M").to_string();
                            let analyzed = if content.analyzed { "yes" } else { "no" };

                            rsx! {
                                tr {
                                    td {
                                        a { href: "{content.url}", "{content.title}" }
                                    }
                                    td { "{topics}" }
                                    td { "{scraped}" }
                                    td { "{analyzed}" }
                                }
                            }
                        })}
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            p { class: "text-error", "{err}" }
        },
        None => rsx! {
            div { class: "skeleton h-24 w-full" }
        },
    };

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Content"
                }
                {body}
                div { class: "flex gap-2",
                    button { class: "btn btn-primary", onclick: on_sync, "Sync from scraper" }
                }
                if let Some(note) = message.read().as_ref() {
                    p { class: "text-sm", "{note}" }
                }
            }
        }
    )
}

#[cfg(not(feature = "web"))]
#[component]
pub fn ContentCard(client_id: i32) -> Element {
    rsx!(
        div { class: "skeleton h-24 w-full" }
    )
}

#[cfg(feature = "web")]
#[component]
pub fn BriefCard(client_id: i32) -> Element {
    use crate::client::util::api::{generate_brief, get_briefs, update_brief};
    use crate::model::brief::{BriefDto, BriefStatus, GenerateBriefDto, UpdateBriefDto};

    let mut topic = use_signal(String::new);
    let mut message = use_signal(|| None::<String>);

    let mut future = use_resource(move || async move { get_briefs(client_id).await });

    let on_generate = move |_| {
        let request = GenerateBriefDto {
            topic: topic.read().clone(),
            content_type: None,
            content_ids: None,
        };

        if request.topic.is_empty() {
            message.set(Some("A brief needs a topic".to_string()));
            return;
        }

        message.set(Some("Generating…".to_string()));

        spawn(async move {
            match generate_brief(client_id, &request).await {
                Ok(_) => {
                    topic.set(String::new());
                    message.set(None);
                    future.restart();
                }
                Err(err) => message.set(Some(err)),
            }
        });
    };

    let mut set_status = move |brief: BriefDto, status: BriefStatus| {
        let request = UpdateBriefDto {
            title: brief.title,
            angle: brief.angle,
            key_points: brief.key_points,
            content_type: brief.content_type,
            suggested_copy: brief.suggested_copy,
            status,
            content_ids: brief.content_ids,
        };
        let brief_id = brief.id;

        spawn(async move {
            match update_brief(brief_id, &request).await {
                Ok(_) => future.restart(),
                Err(err) => message.set(Some(err)),
            }
        });
    };

    let body = match &*future.read_unchecked() {
        Some(Ok(briefs)) => rsx! {
            div { class: "flex flex-col gap-2",
                {briefs.iter().map(|brief| {
                    let brief = brief.clone();
                    let status = format!("{:?}", brief.status).to_lowercase();
                    let generated_by = format!("{:?}", brief.generated_by).to_lowercase();
                    let key_points = brief.key_points.join(" · ");
                    let is_draft = brief.status == BriefStatus::Draft;
                    let approve_brief = brief.clone();
                    let reject_brief = brief.clone();

                    rsx! {
                        div { class: "border rounded p-3 flex flex-col gap-1",
                            div { class: "flex items-center gap-2",
                                p { class: "font-semibold", "{brief.title}" }
                                span { class: "badge", "{status}" }
                                span { class: "badge badge-ghost", "{generated_by}" }
                            }
                            if let Some(angle) = brief.angle.as_ref() {
                                p { class: "text-sm italic", "{angle}" }
                            }
                            p { class: "text-sm", "{key_points}" }
                            if is_draft {
                                div { class: "flex gap-2",
                                    button {
                                        class: "btn btn-success btn-xs",
                                        onclick: move |_| set_status(approve_brief.clone(), BriefStatus::Approved),
                                        "Approve"
                                    }
                                    button {
                                        class: "btn btn-error btn-xs",
                                        onclick: move |_| set_status(reject_brief.clone(), BriefStatus::Rejected),
                                        "Reject"
                                    }
                                }
                            }
                        }
                    }
                })}
            }
        },
        Some(Err(err)) => rsx! {
            p { class: "text-error", "{err}" }
        },
        None => rsx! {
            div { class: "skeleton h-24 w-full" }
        },
    };

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Briefs"
                }
                {body}
                div { class: "flex flex-wrap gap-2",
                    input {
                        class: "input input-bordered w-96",
                        placeholder: "Topic for a new brief",
                        value: "{topic}",
                        oninput: move |event| topic.set(event.value()),
                    }
                    button { class: "btn btn-primary", onclick: on_generate, "Generate brief" }
                }
                if let Some(note) = message.read().as_ref() {
                    p { class: "text-sm", "{note}" }
                }
            }
        }
    )
}

#[cfg(not(feature = "web"))]
#[component]
pub fn BriefCard(client_id: i32) -> Element {
    rsx!(
        div { class: "skeleton h-24 w-full" }
    )
}
