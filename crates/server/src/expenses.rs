//! Expense API endpoints

use api_types::{
    Message,
    expense::{ExpenseDateQuery, ExpenseItem, ExpenseRecord},
};
use axum::{
    Extension, Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::{AuthUser, ServerError, server::ServerState};

fn map_item(expense: engine::Expense) -> ExpenseItem {
    ExpenseItem {
        amount: expense.amount,
        category: expense.category,
        notes: expense.notes,
    }
}

fn map_record(expense: engine::Expense) -> ExpenseRecord {
    ExpenseRecord {
        expense_date: expense.expense_date,
        amount: expense.amount,
        category: expense.category,
        notes: expense.notes,
    }
}

/// Handle requests for the expenses of one day
pub async fn list_for_date(
    Extension(user): Extension<AuthUser>,
    State(state): State<ServerState>,
    query: Result<Query<ExpenseDateQuery>, QueryRejection>,
) -> Result<Json<Vec<ExpenseItem>>, ServerError> {
    let Query(query) = query?;

    let expenses = state
        .engine
        .expenses_for_date(user.id, query.expense_date)
        .await?
        .into_iter()
        .map(map_item)
        .collect();

    Ok(Json(expenses))
}

/// Handle requests overwriting the expenses of one day
pub async fn replace_for_date(
    Extension(user): Extension<AuthUser>,
    State(state): State<ServerState>,
    query: Result<Query<ExpenseDateQuery>, QueryRejection>,
    payload: Result<Json<Vec<ExpenseItem>>, JsonRejection>,
) -> Result<Json<Message>, ServerError> {
    let Query(query) = query?;
    let Json(payload) = payload?;

    let items = payload
        .into_iter()
        .map(|item| engine::NewExpense {
            amount: item.amount,
            category: item.category,
            notes: item.notes,
        })
        .collect();

    let inserted = state
        .engine
        .replace_expenses_for_date(user.id, query.expense_date, items)
        .await?;
    tracing::debug!(
        user_id = user.id,
        "replaced expenses of {} with {inserted} items",
        query.expense_date
    );

    Ok(Json(Message::new("Expenses added successfully")))
}

/// Handle requests for the whole expense history
pub async fn list_all(
    Extension(user): Extension<AuthUser>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<ExpenseRecord>>, ServerError> {
    let expenses = state
        .engine
        .all_expenses(user.id)
        .await?
        .into_iter()
        .map(map_record)
        .collect();

    Ok(Json(expenses))
}
