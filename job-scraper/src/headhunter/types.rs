use salary_analyzer::{PredictSalary, SalaryRange};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub gross: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employer {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<Salary>,
    #[serde(default)]
    pub employer: Option<Employer>,
    #[serde(default)]
    pub alternate_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl PredictSalary for Vacancy {
    fn salary_range(&self, currency: &str) -> Option<SalaryRange> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(currency) {
            return None;
        }
        Some(SalaryRange::new(salary.from, salary.to))
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchPage {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u32,
    pub(crate) pages: u32,
    pub(crate) page: u32,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) text: &'a str,
    pub(crate) area: u32,
    pub(crate) period: u32,
    pub(crate) per_page: u32,
    pub(crate) page: u32,
}
