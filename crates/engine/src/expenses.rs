//! Expenses table and the expense value types handed out by the engine.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub expense_date: Date,
    pub amount: f64,
    pub category: String,
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A stored expense.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub expense_date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub notes: String,
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            expense_date: model.expense_date,
            amount: model.amount,
            category: model.category,
            notes: model.notes,
        }
    }
}

/// An expense to be recorded for a given day.
///
/// Neither the sign of `amount` nor the `category` are checked: the client
/// owns those rules.
#[derive(Clone, Debug, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub notes: String,
}
