use async_stream::try_stream;
use async_trait::async_trait;
use futures::{pin_mut, Stream, StreamExt};
use reqwest::Client;

use crate::api::VacancySource;
use crate::headhunter::types::{SearchPage, SearchParams};
use crate::types::{Error, Result, Vacancies};
use crate::Posting;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// hh.ru area id, `1` is Moscow
    pub area: u32,
    /// only vacancies published within this many days
    pub period: u32,
    pub per_page: u32,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_owned(),
            area: 1,
            period: 30,
            per_page: 100,
            currency: "RUR".to_owned(),
        }
    }
}

pub struct HeadHunter {
    client: Client,
    config: Config,
}

impl HeadHunter {
    pub fn new(config: Config) -> Result<Self> {
        // api.hh.ru rejects requests without a user agent
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies", self.config.base_url.trim_end_matches('/'))
    }

    async fn search_page(&self, query: &str, page: u32) -> Result<SearchPage> {
        let url = self.search_url();
        let params = SearchParams {
            text: query,
            area: self.config.area,
            period: self.config.period,
            per_page: self.config.per_page,
            page,
        };
        log::debug!("requesting vacancies from hh, page: {}, search: {}", page, query);
        let resp = self.client.get(&url).query(&params).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve results for page: {}, search: {}, error resp body: {:?}",
                page,
                query,
                error_body,
            );
            return Err(Error::RequestNotOk { url, status });
        }
        let search_page: SearchPage = resp.json().await?;
        log::debug!(
            "retrieved page {} of {} for search: {}, found: {}",
            search_page.page,
            search_page.pages,
            query,
            search_page.found
        );
        Ok(search_page)
    }

    /// Pages are requested one after another until the last page reported
    /// by the first response has been yielded.
    fn search_pages<'a>(&'a self, query: &'a str) -> impl Stream<Item = Result<SearchPage>> + 'a {
        try_stream! {
            let mut page = 0;
            loop {
                let search_page = self.search_page(query, page).await?;
                let last_page = page + 1 >= search_page.pages;
                yield search_page;
                if last_page {
                    break;
                }
                page += 1;
            }
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    async fn fetch(&self, query: &str) -> Result<Vacancies> {
        let pages = self.search_pages(query);
        pin_mut!(pages);
        let mut found = None;
        let mut postings = Vec::new();
        while let Some(search_page) = pages.next().await {
            let search_page = search_page?;
            found.get_or_insert(search_page.found);
            postings.extend(search_page.items.into_iter().map(Posting::from));
        }
        log::info!("fetched {} vacancies from hh for search: {}", postings.len(), query);
        Ok(Vacancies::new(postings, found.unwrap_or_default()))
    }
}

#[cfg(test)]
mod test {
    use mockito::Matcher;
    use salary_analyzer::PredictSalary;

    use super::*;
    use crate::headhunter::types::{Employer, Vacancy};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn config(base_url: String) -> Config {
        Config {
            base_url,
            ..Config::default()
        }
    }

    fn page_query(text: &str, page: u32) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("text".into(), text.into()),
            Matcher::UrlEncoded("area".into(), "1".into()),
            Matcher::UrlEncoded("period".into(), "30".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
            Matcher::UrlEncoded("page".into(), page.to_string()),
        ])
    }

    #[test]
    fn test_deserialize_vacancy() {
        let vacancy_json = r#"{
            "id": "93353083",
            "premium": false,
            "name": "Python-разработчик",
            "area": {"id": "1", "name": "Москва"},
            "salary": {"from": 150000, "to": null, "currency": "RUR", "gross": false},
            "employer": {"id": "4181", "name": "Банк ВТБ (ПАО)"},
            "published_at": "2024-02-14T12:00:52+0300",
            "alternate_url": "https://hh.ru/vacancy/93353083"
        }"#;
        let vacancy: Vacancy = serde_json::from_str(vacancy_json).unwrap();
        assert_eq!(vacancy.id, "93353083");
        let salary = vacancy.salary.as_ref().unwrap();
        assert_eq!(salary.from, Some(150000.0));
        assert_eq!(salary.to, None);
        assert_eq!(vacancy.predict_salary("RUR"), Some(150000.0 * 1.2));
    }

    #[test]
    fn test_vacancy_without_salary_or_foreign_currency_is_skipped() {
        let no_salary: Vacancy =
            serde_json::from_str(r#"{"id": "1", "name": "Go developer", "salary": null}"#).unwrap();
        assert_eq!(no_salary.salary_range("RUR"), None);

        let dollars: Vacancy = serde_json::from_str(
            r#"{"id": "2", "name": "Go developer", "salary": {"from": 3000, "to": 5000, "currency": "USD"}}"#,
        )
        .unwrap();
        assert_eq!(dollars.predict_salary("RUR"), None);
        assert_eq!(dollars.predict_salary("USD"), Some(4000.0));
    }

    #[test]
    fn test_deserialize_page_with_incomplete_vacancies() {
        let page: SearchPage = serde_json::from_str(
            r#"{"items": [
                {"id": "7", "name": null, "employer": {"id": null, "name": null},
                 "salary": {"from": 180000, "to": null, "currency": "RUR"}},
                {"id": "8", "employer": {"name": "Яндекс"}, "salary": null}
            ], "found": 2, "pages": 1, "page": 0, "per_page": 100}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].employer, Some(Employer { name: None }));
        assert_eq!(page.items[0].predict_salary("RUR"), Some(180000.0 * 1.2));
    }

    #[tokio::test]
    async fn test_fetch_walks_all_pages() {
        init();
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/vacancies")
            .match_query(page_query("программист Rust", 0))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items": [
                    {"id": "1", "name": "Rust developer", "salary": {"from": 200000, "to": 300000, "currency": "RUR"}},
                    {"id": "2", "name": "Rust developer", "salary": null}
                ], "found": 3, "pages": 2, "page": 0, "per_page": 100}"#,
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", "/vacancies")
            .match_query(page_query("программист Rust", 1))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items": [
                    {"id": "3", "name": "Rust engineer", "salary": {"from": null, "to": 250000, "currency": "RUR"}}
                ], "found": 5, "pages": 2, "page": 1, "per_page": 100}"#,
            )
            .create_async()
            .await;

        let source = HeadHunter::new(config(server.url())).unwrap();
        let vacancies = source.fetch("программист Rust").await.unwrap();
        first.assert_async().await;
        second.assert_async().await;
        // the total of the first page wins over later ones
        assert_eq!(vacancies.found, 3);
        assert_eq!(vacancies.postings.len(), 3);
        assert_eq!(vacancies.postings[0].predict_salary("RUR"), Some(250000.0));
    }

    #[tokio::test]
    async fn test_fetch_stops_on_empty_result() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/vacancies")
            .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items": [], "found": 0, "pages": 0, "page": 0, "per_page": 100}"#)
            .expect(1)
            .create_async()
            .await;

        let source = HeadHunter::new(config(server.url())).unwrap();
        let vacancies = source.fetch("программист Scala").await.unwrap();
        mock.assert_async().await;
        assert_eq!(vacancies.found, 0);
        assert!(vacancies.postings.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reports_unsuccessful_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/vacancies")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"errors": [{"type": "bad_user_agent"}]}"#)
            .create_async()
            .await;

        let source = HeadHunter::new(config(server.url())).unwrap();
        let result = source.fetch("программист C").await;
        assert!(matches!(
            result,
            Err(Error::RequestNotOk { status, .. }) if status == reqwest::StatusCode::BAD_REQUEST
        ));
    }
}
