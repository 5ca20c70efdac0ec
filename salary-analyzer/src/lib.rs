pub mod api;
pub mod models;
pub mod statistics;

pub use api::PredictSalary;
pub use models::{LanguageStatistics, SalaryRange, StatisticsReport};
pub use statistics::{aggregate, predict_salary};
