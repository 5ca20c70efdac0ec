use async_stream::try_stream;
use async_trait::async_trait;
use futures::{pin_mut, Stream, StreamExt};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use salary_analyzer::{PredictSalary, SalaryRange};
use serde::{Deserialize, Serialize};

use crate::api::VacancySource;
use crate::types::{Error, Result, Vacancies};
use crate::Posting;

const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Town {
    pub id: u32,
    pub title: String,
}

/// SuperJob sends `0` for a bound that was left empty.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Vacancy {
    pub id: u64,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub firm_name: Option<String>,
    #[serde(default)]
    pub town: Option<Town>,
    #[serde(default)]
    pub link: Option<String>,
}

impl PredictSalary for Vacancy {
    fn salary_range(&self, currency: &str) -> Option<SalaryRange> {
        if self.currency.as_deref() != Some(currency) {
            return None;
        }
        Some(SalaryRange::new(self.payment_from, self.payment_to))
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct ResponseBody {
    objects: Vec<Vacancy>,
    total: u32,
    more: bool,
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    keyword: &'a str,
    town: &'a str,
    count: u32,
    page: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// secret key of a registered superjob.ru application
    pub api_key: String,
    pub town: String,
    pub count: u32,
    pub currency: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.superjob.ru".to_owned(),
            api_key: api_key.into(),
            town: "москва".to_owned(),
            count: 100,
            currency: "rub".to_owned(),
        }
    }
}

pub struct SuperJob {
    client: Client,
    config: Config,
}

impl SuperJob {
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        format!("{}/2.0/vacancies/", self.config.base_url.trim_end_matches('/'))
    }

    async fn search_page(&self, keyword: &str, page: u32) -> Result<ResponseBody> {
        let url = self.search_url();
        let params = SearchParams {
            keyword,
            town: &self.config.town,
            count: self.config.count,
            page,
        };
        log::debug!("requesting vacancies from superjob, page: {}, keyword: {}", page, keyword);
        let resp = self.client.get(&url).query(&params).send().await?;
        let status = resp.status();
        if status != 200 {
            log::error!("Request not successful, status code: {}", status);
            log::error!(
                "Request not successful, body: {}",
                resp.text().await.unwrap_or("empty".to_owned())
            );
            return Err(Error::RequestNotOk { url, status });
        }
        Ok(resp.json().await?)
    }

    fn search_pages<'a>(&'a self, keyword: &'a str) -> impl Stream<Item = Result<ResponseBody>> + 'a {
        try_stream! {
            let mut page = 0;
            loop {
                let resp_body = self.search_page(keyword, page).await?;
                let more = resp_body.more;
                yield resp_body;
                if !more {
                    break;
                }
                page += 1;
                log::debug!("superjob reports more results, continuing with page: {}", page);
            }
        }
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn name(&self) -> &str {
        "SuperJob"
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    async fn fetch(&self, keyword: &str) -> Result<Vacancies> {
        let pages = self.search_pages(keyword);
        pin_mut!(pages);
        let mut total = None;
        let mut postings = Vec::new();
        while let Some(resp_body) = pages.next().await {
            let resp_body = resp_body?;
            total.get_or_insert(resp_body.total);
            postings.extend(resp_body.objects.into_iter().map(Posting::from));
        }
        log::info!(
            "fetched {} vacancies from superjob for keyword: {}",
            postings.len(),
            keyword
        );
        Ok(Vacancies::new(postings, total.unwrap_or_default()))
    }
}
