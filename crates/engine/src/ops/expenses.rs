use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, DatabaseTransaction, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
};

use crate::{Expense, NewExpense, ResultEngine, expenses};

use super::{Engine, with_tx};

impl Engine {
    /// Lists the expenses of `user_id` dated `date`, in insertion order.
    pub async fn expenses_for_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .filter(expenses::Column::ExpenseDate.eq(date))
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Replaces the whole set of expenses of `user_id` for `date` with `items`.
    ///
    /// Delete and insert share one transaction: either the new set is stored
    /// or the previous one is left untouched. Returns the number of inserted
    /// rows.
    pub async fn replace_expenses_for_date(
        &self,
        user_id: i32,
        date: NaiveDate,
        items: Vec<NewExpense>,
    ) -> ResultEngine<usize> {
        with_tx!(self, |db_tx| {
            Self::replace_in_tx(&db_tx, user_id, date, items).await
        })
    }

    /// Lists every expense of `user_id`, oldest day first.
    pub async fn all_expenses(&self, user_id: i32) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_asc(expenses::Column::ExpenseDate)
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Expense::from).collect())
    }

    async fn replace_in_tx(
        db_tx: &DatabaseTransaction,
        user_id: i32,
        date: NaiveDate,
        items: Vec<NewExpense>,
    ) -> ResultEngine<usize> {
        expenses::Entity::delete_many()
            .filter(expenses::Column::UserId.eq(user_id))
            .filter(expenses::Column::ExpenseDate.eq(date))
            .exec(db_tx)
            .await?;

        let inserted = items.len();
        for item in items {
            let active = expenses::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                expense_date: ActiveValue::Set(date),
                amount: ActiveValue::Set(item.amount),
                category: ActiveValue::Set(item.category),
                notes: ActiveValue::Set(item.notes),
                ..Default::default()
            };
            active.insert(db_tx).await?;
        }

        Ok(inserted)
    }
}
