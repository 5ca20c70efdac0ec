use crate::models::SalaryRange;
use crate::statistics::predict_salary;

/// Trait for extracting a salary range from a source-specific posting.
///
/// Implementors only decide which bounds to hand over, or to skip the posting
/// entirely (no salary block, foreign currency). The numeric rule is shared.
pub trait PredictSalary {
    /// `None` means the posting carries no usable salary in `currency`.
    fn salary_range(&self, currency: &str) -> Option<SalaryRange>;

    fn predict_salary(&self, currency: &str) -> Option<f64> {
        let range = self.salary_range(currency)?;
        predict_salary(range.from, range.to)
    }
}
