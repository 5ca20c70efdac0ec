use async_trait::async_trait;

use crate::types::{Result, Vacancies};

/// A paginated job board that can be searched by free text.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Human-readable name, used in report titles.
    fn name(&self) -> &str;

    /// Currency code the board uses for its local currency.
    fn currency(&self) -> &str;

    /// Walk every result page for `query`.
    async fn fetch(&self, query: &str) -> Result<Vacancies>;
}
