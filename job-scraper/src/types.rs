pub use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk { url: String, status: StatusCode },
    #[error("Invalid header value: '{0}'")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Every posting a source returned for one query, together with the
/// total the source reported on its first page.
#[derive(Debug, Default)]
pub struct Vacancies {
    pub postings: Vec<crate::Posting>,
    pub found: u32,
}

impl Vacancies {
    pub fn new(postings: Vec<crate::Posting>, found: u32) -> Self {
        Self { postings, found }
    }
}
