use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Statement};

use crate::{
    CategoryTotal, MonthlyTotal, ResultEngine,
    analytics::with_percentages,
};

use super::Engine;

impl Engine {
    /// Sums the spending of `user_id` per category over `[start, end]`
    /// (both days included), with each category's share of the total.
    ///
    /// Categories are sorted by name. A range with no expenses, or a reversed
    /// range, gives an empty list.
    pub async fn category_breakdown(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ResultEngine<Vec<CategoryTotal>> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_sql_and_values(
            backend,
            "SELECT category, SUM(amount) AS total \
             FROM expenses \
             WHERE user_id = ? AND expense_date BETWEEN ? AND ? \
             GROUP BY category \
             ORDER BY category",
            vec![user_id.into(), start.into(), end.into()],
        );

        let rows = self.database.query_all(stmt).await?;
        let mut totals = Vec::with_capacity(rows.len());
        for row in rows {
            let category: String = row.try_get("", "category")?;
            let total: f64 = row.try_get("", "total")?;
            totals.push((category, total));
        }

        Ok(with_percentages(totals))
    }

    /// Sums the spending of `user_id` per calendar month over its whole
    /// history, oldest month first.
    pub async fn monthly_totals(&self, user_id: i32) -> ResultEngine<Vec<MonthlyTotal>> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_sql_and_values(
            backend,
            "SELECT strftime('%Y-%m', expense_date) AS month_year, \
                    SUM(amount) AS total_amount \
             FROM expenses \
             WHERE user_id = ? \
             GROUP BY month_year \
             ORDER BY month_year",
            vec![user_id.into()],
        );

        let rows = self.database.query_all(stmt).await?;
        let mut months = Vec::with_capacity(rows.len());
        for row in rows {
            months.push(MonthlyTotal {
                month_year: row.try_get("", "month_year")?,
                total_amount: row.try_get("", "total_amount")?,
            });
        }

        Ok(months)
    }
}
