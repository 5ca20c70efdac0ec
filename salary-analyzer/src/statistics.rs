use crate::api::PredictSalary;
use crate::models::LanguageStatistics;

/// Estimate a monthly salary from the bounds of a posting.
///
/// Open-ended "from" postings get a 20% uplift, open-ended "to" postings a 20%
/// discount. No rounding is applied.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

/// Collect every present estimate of `postings`.
pub fn collect_salaries<P: PredictSalary>(postings: &[P], currency: &str) -> Vec<f64> {
    postings
        .iter()
        .filter_map(|posting| posting.predict_salary(currency))
        .collect()
}

/// Aggregate the postings found for one language.
///
/// `vacancies_found` is the total reported by the source, not `postings.len()`.
/// The mean is truncated toward zero, an empty estimate set averages to 0.
pub fn aggregate<P: PredictSalary>(
    postings: &[P],
    vacancies_found: u32,
    currency: &str,
) -> LanguageStatistics {
    let salaries = collect_salaries(postings, currency);
    let processed_vacancies = salaries.len() as u32;
    let average_salary = if processed_vacancies == 0 {
        0
    } else {
        (salaries.iter().sum::<f64>() / processed_vacancies as f64) as u64
    };
    log::debug!(
        "aggregated {} postings, processed: {}, average salary: {}",
        postings.len(),
        processed_vacancies,
        average_salary
    );
    LanguageStatistics::new(vacancies_found, processed_vacancies, average_salary)
}
