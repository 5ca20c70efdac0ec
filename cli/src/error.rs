use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Scraping failed: {0}")]
    Scrape(#[from] job_scraper::Error),
    #[error("SJ_KEY not set, required for the superjob source")]
    MissingApiKey,
    #[error("Failed to serialize statistics: '{0}'")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
