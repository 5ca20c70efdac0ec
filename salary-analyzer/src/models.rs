use serde::{Deserialize, Serialize, Serializer};

/// Lower and upper salary bounds of a single posting, in the target currency.
/// Job boards report an unspecified bound either as `null` or as `0`,
/// both are stored as `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            from: from.filter(|v| *v != 0.0),
            to: to.filter(|v| *v != 0.0),
        }
    }
}

/// Aggregated numbers for one programming-language query against one source.
///
/// `vacancies_found` is whatever the job board reported as its total match
/// count, so it may be smaller or larger than `processed_vacancies`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageStatistics {
    pub vacancies_found: u32,
    pub processed_vacancies: u32,
    pub average_salary: u64,
}

impl LanguageStatistics {
    pub fn new(vacancies_found: u32, processed_vacancies: u32, average_salary: u64) -> Self {
        Self {
            vacancies_found,
            processed_vacancies,
            average_salary,
        }
    }
}

/// Per-source mapping from language name to its statistics.
/// Iteration follows insertion order.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct StatisticsReport {
    title: String,
    #[serde(serialize_with = "serialize_ordered")]
    languages: Vec<(String, LanguageStatistics)>,
}

fn serialize_ordered<S: Serializer>(
    languages: &[(String, LanguageStatistics)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(languages.iter().map(|(language, stats)| (language, stats)))
}

impl StatisticsReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            languages: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Inserts or replaces the statistics for `language`.
    /// A replaced language keeps its original position.
    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStatistics) {
        let language = language.into();
        match self.languages.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = stats,
            None => self.languages.push((language, stats)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStatistics> {
        self.languages
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStatistics)> {
        self.languages
            .iter()
            .map(|(language, stats)| (language.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
