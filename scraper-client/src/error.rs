use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Scraper client requires a base URL")]
    MissingBaseUrl,
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("Scraper service returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}
