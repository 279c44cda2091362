use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::Database;

use api_types::expense::ExpenseItem;
use engine::Engine;
use expenses_cli::{Client, ClientError, Session};
use server::TokenKeys;

async fn spawn_server() -> Client {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr =
        server::spawn_with_listener(engine, TokenKeys::new(b"cli-secret", 60), listener).unwrap();

    Client::new(&format!("http://{addr}")).unwrap()
}

fn item(amount: f64, category: &str) -> ExpenseItem {
    ExpenseItem {
        amount,
        category: category.to_string(),
        notes: String::new(),
    }
}

#[tokio::test]
async fn login_yields_a_session_for_protected_calls() {
    let client = spawn_server().await;
    let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();

    client.register("alice", "password").await.unwrap();
    let session = client.login("alice", "password").await.unwrap();
    assert_eq!(session.username.as_deref(), Some("alice"));

    let items = vec![item(50.0, "Food"), item(50.0, "Rent")];
    client.replace_expenses(&session, date, &items).await.unwrap();

    assert_eq!(client.expenses_for_date(&session, date).await.unwrap(), items);

    let resumed = Session::from_token(session.access_token.clone());
    let all = client.all_expenses(&resumed).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|e| e.expense_date == date));

    let breakdown = client
        .category_breakdown(&session, date, date)
        .await
        .unwrap();
    assert_eq!(breakdown["Food"].percentage, 50.0);
    assert_eq!(breakdown["Rent"].total, 50.0);

    let months = client.monthly_totals(&session).await.unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].month_year, "2024-08");
    assert_eq!(months[0].total_amount, 100.0);
}

#[tokio::test]
async fn errors_come_back_typed() {
    let client = spawn_server().await;

    client.register("alice", "password").await.unwrap();
    let err = client.register("alice", "password").await.unwrap_err();
    assert!(matches!(err, ClientError::BadRequest(_)));

    let err = client.login("alice", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::BadRequest(_)));

    let err = client
        .all_expenses(&Session::from_token("forged"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));
}
