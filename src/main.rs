#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use skald::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let scraper = startup::build_scraper_client(&config).unwrap();
        let llm = startup::build_llm_client(&config);
        let db = startup::connect_to_database(&config).await.unwrap();

        tracing::info!("Starting server");

        let state = AppState::from((
            db,
            scraper,
            llm,
            config.openai_model.clone(),
            config.auth_jwt_secret.clone(),
        ));

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
