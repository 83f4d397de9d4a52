use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ScraperError(#[from] scraper_client::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
