pub mod api;
pub mod headhunter;
pub mod superjob;
pub mod types;

pub use api::VacancySource;
pub use types::{Error, Result, Vacancies};

use salary_analyzer::{PredictSalary, SalaryRange};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Posting {
    HeadHunter {
        vacancy: Box<headhunter::Vacancy>,
    },
    SuperJob {
        vacancy: Box<superjob::Vacancy>,
    },
}

impl PredictSalary for Posting {
    fn salary_range(&self, currency: &str) -> Option<SalaryRange> {
        match self {
            Posting::HeadHunter { vacancy } => vacancy.salary_range(currency),
            Posting::SuperJob { vacancy } => vacancy.salary_range(currency),
        }
    }
}

impl From<headhunter::Vacancy> for Posting {
    fn from(vacancy: headhunter::Vacancy) -> Self {
        Posting::HeadHunter {
            vacancy: Box::new(vacancy),
        }
    }
}

impl From<superjob::Vacancy> for Posting {
    fn from(vacancy: superjob::Vacancy) -> Self {
        Posting::SuperJob {
            vacancy: Box::new(vacancy),
        }
    }
}
