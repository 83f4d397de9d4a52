use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::Error,
    model::{
        Health, ScrapeRequest, ScrapeTask, ScrapeUrlRequest, ScrapedItem, TestSourceRequest,
        TestSourceResult,
    },
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("skald-scraper-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the scraper service.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: String,
    timeout: Duration,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Base URL of the scraper service, e.g. `http://localhost:8000`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = self.base_url.ok_or(Error::MissingBaseUrl)?;

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(Client { http, base_url })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Check whether the scraper service is reachable.
    pub async fn health(&self) -> Result<Health, Error> {
        self.get("/health").await
    }

    /// Start a scrape job for the given feeds.
    pub async fn start_scrape(&self, request: &ScrapeRequest) -> Result<ScrapeTask, Error> {
        self.post("/scrape", request).await
    }

    /// Poll the status of a scrape job.
    pub async fn task(&self, task_id: &str) -> Result<ScrapeTask, Error> {
        self.get(&format!("/tasks/{}", task_id)).await
    }

    /// Scrape a single URL synchronously.
    pub async fn scrape_url(&self, url: &str) -> Result<ScrapedItem, Error> {
        let request = ScrapeUrlRequest {
            url: url.to_string(),
        };

        self.post("/scrape-url", &request).await
    }

    /// Validate a feed URL without persisting anything.
    pub async fn test_source(&self, request: &TestSourceRequest) -> Result<TestSourceResult, Error> {
        self.post("/test-source", request).await
    }

    /// Fetch the contents the service has scraped for a client.
    pub async fn client_contents(&self, client_id: i32) -> Result<Vec<ScrapedItem>, Error> {
        self.get(&format!("/clients/{}/contents", client_id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
