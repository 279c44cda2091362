//! Analytics API endpoints

use api_types::analytics::{CategoryBreakdown, CategoryShare, DateRange, MonthlyTotal};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{AuthUser, ServerError, server::ServerState};

/// Handle requests for the per-category spending over a date range
pub async fn category_breakdown(
    Extension(user): Extension<AuthUser>,
    State(state): State<ServerState>,
    payload: Result<Json<DateRange>, JsonRejection>,
) -> Result<Json<CategoryBreakdown>, ServerError> {
    let Json(range) = payload?;

    let breakdown = state
        .engine
        .category_breakdown(user.id, range.start_date, range.end_date)
        .await?
        .into_iter()
        .map(|category| {
            (
                category.category,
                CategoryShare {
                    total: category.total,
                    percentage: category.percentage,
                },
            )
        })
        .collect();

    Ok(Json(breakdown))
}

/// Handle requests for the per-month spending
pub async fn monthly_totals(
    Extension(user): Extension<AuthUser>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<MonthlyTotal>>, ServerError> {
    let months = state
        .engine
        .monthly_totals(user.id)
        .await?
        .into_iter()
        .map(|month| MonthlyTotal {
            month_year: month.month_year,
            total_amount: month.total_amount,
        })
        .collect();

    Ok(Json(months))
}
