pub mod scraper;
pub mod types;

pub use scraper::{Config, HeadHunter};
pub use types::{Employer, Salary, Vacancy};
