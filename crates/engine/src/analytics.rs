//! Aggregated spending figures.

/// Spending of one category over a date range.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    /// Share of the range total, `0.0` when the range total is zero.
    pub percentage: f64,
}

/// Spending of one calendar month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyTotal {
    /// `YYYY-MM`
    pub month_year: String,
    pub total_amount: f64,
}

/// Attach to every `(category, total)` its percentage of the overall sum.
pub(crate) fn with_percentages(totals: Vec<(String, f64)>) -> Vec<CategoryTotal> {
    let sum: f64 = totals.iter().map(|(_, total)| total).sum();
    totals
        .into_iter()
        .map(|(category, total)| {
            let percentage = if sum == 0.0 {
                0.0
            } else {
                total / sum * 100.0
            };
            CategoryTotal {
                category,
                total,
                percentage,
            }
        })
        .collect()
}
