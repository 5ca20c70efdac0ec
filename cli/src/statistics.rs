use futures::{stream, StreamExt};
use job_scraper::VacancySource;
use salary_analyzer::{aggregate, StatisticsReport};

use crate::error::Result;

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
    "Scala",
];

#[derive(Debug, Clone)]
pub struct Settings {
    pub languages: Vec<String>,
    pub query_prefix: String,
    /// label appended to the source name in report titles
    pub region: String,
    /// how many languages of one source are fetched at the same time
    pub concurrency: usize,
    pub fail_fast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.into_iter().map(String::from).collect(),
            query_prefix: "программист".to_owned(),
            region: "Moscow".to_owned(),
            concurrency: 4,
            fail_fast: false,
        }
    }
}

pub fn search_query(prefix: &str, language: &str) -> String {
    if prefix.is_empty() {
        return language.to_owned();
    }
    format!("{} {}", prefix, language)
}

/// Fetch and aggregate every configured language against one source.
///
/// Languages that fail to fetch are logged and left out of the report,
/// unless `fail_fast` is set.
pub async fn collect_statistics(
    source: &dyn VacancySource,
    settings: &Settings,
) -> Result<StatisticsReport> {
    let mut report = StatisticsReport::new(format!("{} {}", source.name(), settings.region));
    let results = stream::iter(settings.languages.iter())
        .map(|language| async move {
            let query = search_query(&settings.query_prefix, language);
            (language, source.fetch(&query).await)
        })
        .buffered(settings.concurrency.max(1));
    tokio::pin!(results);
    while let Some((language, result)) = results.next().await {
        match result {
            Ok(vacancies) => {
                let stats = aggregate(&vacancies.postings, vacancies.found, source.currency());
                log::info!(
                    "{}: {} found, {} processed, average salary {}",
                    language,
                    stats.vacancies_found,
                    stats.processed_vacancies,
                    stats.average_salary
                );
                report.insert(language.as_str(), stats);
            }
            Err(e) if settings.fail_fast => return Err(e.into()),
            Err(e) => log::error!(
                "Failed to fetch vacancies for {} from {}: {}, skipping",
                language,
                source.name(),
                e
            ),
        }
    }
    Ok(report)
}
